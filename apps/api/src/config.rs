use anyhow::{bail, Context, Result};

use crate::layout::font_metrics::{default_page_config, PageConfig, PaperSize};

const MARGIN_RANGE_IN: std::ops::RangeInclusive<f32> = 0.25..=2.0;

/// Application configuration loaded from environment variables.
/// Every variable has a default; startup fails only on values that do not parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub page_size: PaperSize,
    pub page_margin_in: f32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let defaults = default_page_config();

        let page_size = match lookup("PAGE_SIZE") {
            Some(raw) => parse_paper_size(&raw)?,
            None => defaults.paper,
        };

        let page_margin_in = match lookup("PAGE_MARGIN_IN") {
            Some(raw) => raw
                .trim()
                .parse::<f32>()
                .with_context(|| format!("PAGE_MARGIN_IN must be a number, got '{raw}'"))?,
            None => defaults.margin_in,
        };
        if !MARGIN_RANGE_IN.contains(&page_margin_in) {
            bail!(
                "PAGE_MARGIN_IN must be between {} and {} inches, got {page_margin_in}",
                MARGIN_RANGE_IN.start(),
                MARGIN_RANGE_IN.end()
            );
        }

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            page_size,
            page_margin_in,
        })
    }

    pub fn page_config(&self) -> PageConfig {
        PageConfig {
            paper: self.page_size,
            margin_in: self.page_margin_in,
        }
    }
}

fn parse_paper_size(raw: &str) -> Result<PaperSize> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "letter" => Ok(PaperSize::Letter),
        "a4" => Ok(PaperSize::A4),
        other => bail!("PAGE_SIZE must be 'letter' or 'a4', got '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.page_config(), default_page_config());
    }

    #[test]
    fn test_a4_and_custom_margin() {
        let config = config_from(&[("PAGE_SIZE", "A4"), ("PAGE_MARGIN_IN", "1.0")]).unwrap();
        let page = config.page_config();
        assert_eq!(page.paper, PaperSize::A4);
        assert_eq!(page.margin_pt(), 72.0);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
        assert!(config_from(&[("PAGE_SIZE", "legal")]).is_err());
        assert!(config_from(&[("PAGE_MARGIN_IN", "wide")]).is_err());
        assert!(config_from(&[("PAGE_MARGIN_IN", "3.5")]).is_err());
        assert!(config_from(&[("PAGE_MARGIN_IN", "0.1")]).is_err());
    }
}

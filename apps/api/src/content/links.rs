//! Link Normalizer: canonical display strings for contact and profile URLs.
//!
//! Display cosmetics only, not validation. Every template goes through
//! `normalize_link`, so a LinkedIn URL reads the same in all five variants.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    LinkedIn,
    GitHub,
    Website,
}

const PROTOCOLS: &[&str] = &["https://", "http://"];
const WWW: &str = "www.";

/// Returns the canonical display form of `url` for the given platform.
///
/// - protocol and `www.` prefixes are removed (repeatedly, so the result is a fixed point)
/// - LinkedIn URLs become `linkedin.com/in/<handle>`
/// - GitHub URLs become `github.com/<handle>`
/// - anything else passes through cleaned but otherwise verbatim
pub fn normalize_link(url: &str, platform: Platform) -> String {
    let cleaned = strip_prefixes(url.trim());
    if cleaned.is_empty() {
        return String::new();
    }

    match platform {
        Platform::LinkedIn => rewrite_handle(cleaned, "linkedin.com", &["in/"], "linkedin.com/in/"),
        Platform::GitHub => rewrite_handle(cleaned, "github.com", &[], "github.com/"),
        Platform::Website => cleaned.to_string(),
    }
}

/// Builds a clickable href for a normalized link. Keeps the caller's URL when it
/// already names a protocol.
pub fn link_href(raw: &str, display: &str) -> String {
    let raw = raw.trim();
    if has_protocol(raw) {
        raw.to_string()
    } else if display.is_empty() {
        String::new()
    } else {
        format!("https://{display}")
    }
}

fn has_protocol(s: &str) -> bool {
    PROTOCOLS.iter().any(|p| starts_with_ignore_case(s, p))
}

fn strip_prefixes(mut s: &str) -> &str {
    loop {
        let before = s.len();
        for prefix in PROTOCOLS.iter().copied().chain(std::iter::once(WWW)) {
            if starts_with_ignore_case(s, prefix) {
                s = &s[prefix.len()..];
            }
        }
        if s.len() == before {
            return s;
        }
    }
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len()
        && s.is_char_boundary(prefix.len())
        && s[..prefix.len()].eq_ignore_ascii_case(prefix)
}

/// Extracts the path after `<domain>/`, drops any of `path_prefixes`, and
/// re-emits it under `canonical`. Text that never mentions the domain, or
/// mentions it without a handle, is returned unchanged.
fn rewrite_handle(cleaned: &str, domain: &str, path_prefixes: &[&str], canonical: &str) -> String {
    let lower = cleaned.to_ascii_lowercase();
    let Some(pos) = lower.find(domain) else {
        return cleaned.to_string();
    };

    let after_domain = &cleaned[pos + domain.len()..];
    let Some(mut handle) = after_domain.strip_prefix('/') else {
        return cleaned.to_string();
    };
    for prefix in path_prefixes {
        if starts_with_ignore_case(handle, prefix) {
            handle = &handle[prefix.len()..];
        }
    }

    let handle = handle.trim_end_matches('/');
    if handle.is_empty() {
        return cleaned.to_string();
    }
    format!("{canonical}{handle}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Platform; 3] = [Platform::LinkedIn, Platform::GitHub, Platform::Website];

    #[test]
    fn test_empty_input_is_empty_output() {
        for p in ALL {
            assert_eq!(normalize_link("", p), "");
            assert_eq!(normalize_link("   ", p), "");
        }
    }

    #[test]
    fn test_linkedin_full_url() {
        assert_eq!(
            normalize_link("https://www.linkedin.com/in/janedoe", Platform::LinkedIn),
            "linkedin.com/in/janedoe"
        );
    }

    #[test]
    fn test_linkedin_without_in_segment() {
        assert_eq!(
            normalize_link("http://linkedin.com/janedoe/", Platform::LinkedIn),
            "linkedin.com/in/janedoe"
        );
    }

    #[test]
    fn test_linkedin_bare_handle_passes_through() {
        assert_eq!(normalize_link("janedoe", Platform::LinkedIn), "janedoe");
    }

    #[test]
    fn test_linkedin_country_subdomain() {
        assert_eq!(
            normalize_link("https://uk.linkedin.com/in/jdoe", Platform::LinkedIn),
            "linkedin.com/in/jdoe"
        );
    }

    #[test]
    fn test_github_full_url() {
        assert_eq!(
            normalize_link("https://github.com/janedoe", Platform::GitHub),
            "github.com/janedoe"
        );
        assert_eq!(
            normalize_link("www.github.com/janedoe/dotfiles", Platform::GitHub),
            "github.com/janedoe/dotfiles"
        );
    }

    #[test]
    fn test_github_domain_without_handle_is_unchanged() {
        assert_eq!(normalize_link("https://github.com", Platform::GitHub), "github.com");
    }

    #[test]
    fn test_website_strips_protocol_and_www_only() {
        assert_eq!(
            normalize_link("https://www.janedoe.dev/portfolio/", Platform::Website),
            "janedoe.dev/portfolio/"
        );
    }

    #[test]
    fn test_protocol_is_case_insensitive() {
        assert_eq!(normalize_link("HTTPS://WWW.example.com", Platform::Website), "example.com");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let inputs = [
            "https://www.linkedin.com/in/janedoe",
            "linkedin.com/in/in/x",
            "http://https://www.www.example.com",
            "https://github.com/janedoe/",
            "github.com",
            "not a url at all",
            "www.",
        ];
        for p in ALL {
            for input in inputs {
                let once = normalize_link(input, p);
                assert_eq!(normalize_link(&once, p), once, "not idempotent for {input:?} as {p:?}");
            }
        }
    }

    #[test]
    fn test_href_keeps_original_protocol() {
        assert_eq!(
            link_href("http://janedoe.dev", "janedoe.dev"),
            "http://janedoe.dev"
        );
        assert_eq!(link_href("janedoe.dev", "janedoe.dev"), "https://janedoe.dev");
        assert_eq!(link_href("", ""), "");
    }
}

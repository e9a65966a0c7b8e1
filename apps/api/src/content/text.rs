//! Text helpers shared by every template: bullet splitting, technology tags,
//! and the contact line.

use serde::{Deserialize, Serialize};

use crate::content::links::{link_href, normalize_link, Platform};
use crate::models::PersonalDetails;

const BULLET_GLYPHS: &[char] = &['•', '-', '*', '·', '–', '▪'];

/// Splits free text on line breaks into display bullets.
pub fn responsibility_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.trim().trim_start_matches(BULLET_GLYPHS).trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits a comma-separated technology list.
pub fn split_technologies(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn has_text(s: &str) -> bool {
    !s.trim().is_empty()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Email,
    Phone,
    Location,
    LinkedIn,
    GitHub,
    Website,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactItem {
    pub kind: ContactKind,
    pub display: String,
    pub href: Option<String>,
}

/// Contact entries in display order, skipping blanks. Profile links are
/// normalized the same way for every template.
pub fn contact_items(details: &PersonalDetails) -> Vec<ContactItem> {
    let mut items = Vec::new();

    if has_text(&details.email) {
        let email = details.email.trim();
        items.push(ContactItem {
            kind: ContactKind::Email,
            display: email.to_string(),
            href: Some(format!("mailto:{email}")),
        });
    }
    if has_text(&details.phone) {
        let phone = details.phone.trim();
        let dial: String = phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        items.push(ContactItem {
            kind: ContactKind::Phone,
            display: phone.to_string(),
            href: (!dial.is_empty()).then(|| format!("tel:{dial}")),
        });
    }
    if has_text(&details.location) {
        items.push(ContactItem {
            kind: ContactKind::Location,
            display: details.location.trim().to_string(),
            href: None,
        });
    }

    let profiles = [
        (ContactKind::LinkedIn, Platform::LinkedIn, &details.linkedin),
        (ContactKind::GitHub, Platform::GitHub, &details.github),
        (ContactKind::Website, Platform::Website, &details.website),
    ];
    for (kind, platform, raw) in profiles {
        let display = normalize_link(raw, platform);
        if display.is_empty() {
            continue;
        }
        let href = link_href(raw, &display);
        items.push(ContactItem {
            kind,
            display,
            href: Some(href),
        });
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_responsibility_lines_strip_glyphs_and_blanks() {
        let text = "• Led the billing rewrite\n\n- Cut p99 latency by 40%\r\n  * Mentored 4 engineers  \n";
        assert_eq!(
            responsibility_lines(text),
            vec![
                "Led the billing rewrite",
                "Cut p99 latency by 40%",
                "Mentored 4 engineers",
            ]
        );
    }

    #[test]
    fn test_responsibility_lines_empty() {
        assert!(responsibility_lines("").is_empty());
        assert!(responsibility_lines("\n \n").is_empty());
    }

    #[test]
    fn test_split_technologies() {
        assert_eq!(
            split_technologies("Rust, Tokio,  ,Postgres "),
            vec!["Rust", "Tokio", "Postgres"]
        );
        assert!(split_technologies("").is_empty());
    }

    #[test]
    fn test_contact_items_order_and_links() {
        let details = PersonalDetails {
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "+1 (555) 010-2030".to_string(),
            location: "Berlin".to_string(),
            linkedin: "https://www.linkedin.com/in/janedoe".to_string(),
            github: "github.com/janedoe".to_string(),
            website: String::new(),
        };
        let items = contact_items(&details);
        let kinds: Vec<ContactKind> = items.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ContactKind::Email,
                ContactKind::Phone,
                ContactKind::Location,
                ContactKind::LinkedIn,
                ContactKind::GitHub,
            ]
        );
        assert_eq!(items[0].href.as_deref(), Some("mailto:jane@example.com"));
        assert_eq!(items[1].href.as_deref(), Some("tel:+15550102030"));
        assert_eq!(items[2].href, None);
        assert_eq!(items[3].display, "linkedin.com/in/janedoe");
        assert_eq!(
            items[3].href.as_deref(),
            Some("https://www.linkedin.com/in/janedoe")
        );
        assert_eq!(items[4].href.as_deref(), Some("https://github.com/janedoe"));
    }

    #[test]
    fn test_contact_items_empty_details() {
        assert!(contact_items(&PersonalDetails::default()).is_empty());
    }
}

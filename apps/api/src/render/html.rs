//! Serializers for a rendered DocumentTree.
//!
//! `to_html` emits a standalone HTML5 page: the style sheet becomes one CSS rule
//! per `StyleClass`, the page box becomes an `@page` rule, and each block maps
//! to one element. `to_plain_text` emits the same content in reading order.

use std::fmt::Write;

use crate::models::SectionKind;
use crate::render::document::{Block, BlockKind, DocumentTree};
use crate::render::style::{Border, BorderStyle, Flow, Style, StyleClass, StyleSheet, TextAlign};

// ────────────────────────────────────────────────────────────────────────────
// HTML
// ────────────────────────────────────────────────────────────────────────────

pub fn to_html(doc: &DocumentTree) -> String {
    let title = doc
        .texts_with_class(StyleClass::Name)
        .first()
        .copied()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or("Resume");

    let mut out = String::with_capacity(8 * 1024);
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape_html(title));
    let _ = writeln!(
        out,
        "<meta name=\"generator\" content=\"resume-renderer/{}\">",
        doc.template
    );
    out.push_str("<style>\n");
    write_css(&mut out, doc);
    out.push_str("</style>\n</head>\n<body>\n");
    write_block(&mut out, &doc.root, 0);
    out.push_str("</body>\n</html>\n");
    out
}

fn write_css(out: &mut String, doc: &DocumentTree) {
    let page = &doc.page;
    let _ = writeln!(
        out,
        "@page {{ size: {}; margin: {}pt; }}",
        page.paper.css_name(),
        page.margin_pt
    );
    out.push_str("body { margin: 0; }\n");
    out.push_str("h1, h2, h3, p, ul { margin: 0; }\n");
    out.push_str("hr { border: 0; height: 0; }\n");
    out.push_str("a { text-decoration: none; }\n");
    write_class_rules(out, doc.styles);
}

fn write_class_rules(out: &mut String, sheet: &StyleSheet) {
    for (class, style) in &sheet.classes {
        let _ = writeln!(out, ".{} {{ {} }}", class.css_name(), css_declarations(style));
    }
}

/// CSS declarations for one style, `;`-separated on a single line.
pub fn css_declarations(style: &Style) -> String {
    let mut decls = vec![
        format!("font-family: {}", style.font_family.css_stack()),
        format!("font-size: {}pt", style.font_size_pt),
        format!("font-weight: {}", style.font_weight),
        format!("line-height: {}", style.line_height),
        format!("color: {}", style.color),
    ];
    if let Some(background) = style.background {
        decls.push(format!("background: {background}"));
    }
    if style.italic {
        decls.push("font-style: italic".to_string());
    }
    if style.uppercase {
        decls.push("text-transform: uppercase".to_string());
    }
    if style.letter_spacing_em != 0.0 {
        decls.push(format!("letter-spacing: {}em", style.letter_spacing_em));
    }
    decls.push(format!("text-align: {}", align_css(style.align)));
    decls.extend(flow_css(style.flow, style.gap_pt));
    decls.push(format!(
        "margin: {}pt 0 {}pt 0",
        style.margin_top_pt, style.margin_bottom_pt
    ));
    if style.padding_pt > 0.0 {
        decls.push(format!("padding: {}pt", style.padding_pt));
    }
    if let Some(border) = style.border_left {
        decls.push(format!("border-left: {}", border_css(border)));
    }
    if let Some(border) = style.border_bottom {
        decls.push(format!("border-bottom: {}", border_css(border)));
    }
    if style.border_radius_pt > 0.0 {
        decls.push(format!("border-radius: {}pt", style.border_radius_pt));
    }
    decls.join("; ")
}

fn align_css(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "left",
        TextAlign::Center => "center",
        TextAlign::Right => "right",
    }
}

fn flow_css(flow: Flow, gap_pt: f32) -> Vec<String> {
    match flow {
        Flow::Stack => vec!["display: block".to_string()],
        Flow::Row => vec![
            "display: flex".to_string(),
            "flex-wrap: wrap".to_string(),
            format!("gap: {gap_pt}pt"),
        ],
        Flow::Spread => vec![
            "display: flex".to_string(),
            "justify-content: space-between".to_string(),
            "align-items: baseline".to_string(),
            format!("gap: {gap_pt}pt"),
        ],
        Flow::Inline => vec!["display: inline-block".to_string()],
    }
}

fn border_css(border: Border) -> String {
    let style = match border.style {
        BorderStyle::Solid => "solid",
        BorderStyle::Double => "double",
    };
    format!("{}pt {} {}", border.width_pt, style, border.color)
}

fn element_for(block: &Block) -> &'static str {
    match block.kind {
        BlockKind::Page => "main",
        BlockKind::Header => "header",
        BlockKind::Section => "section",
        BlockKind::Heading if block.class == StyleClass::Name => "h1",
        BlockKind::Heading if block.class == StyleClass::SectionTitle => "h2",
        BlockKind::Heading => "h3",
        BlockKind::Entry => "article",
        BlockKind::List => "ul",
        BlockKind::ListItem => "li",
        BlockKind::Paragraph => "p",
        BlockKind::Text | BlockKind::Badge => "span",
        BlockKind::Link => "a",
        BlockKind::Divider => "hr",
        BlockKind::Row | BlockKind::AccentBar | BlockKind::Group => "div",
    }
}

fn section_name(section: SectionKind) -> &'static str {
    match section {
        SectionKind::Summary => "summary",
        SectionKind::Experience => "experience",
        SectionKind::Projects => "projects",
        SectionKind::Education => "education",
        SectionKind::Skills => "skills",
        SectionKind::Achievements => "achievements",
        SectionKind::Hobbies => "hobbies",
    }
}

fn write_block(out: &mut String, block: &Block, depth: usize) {
    let tag = element_for(block);
    let indent = "  ".repeat(depth);

    let _ = write!(out, "{indent}<{tag} class=\"{}\"", block.class.css_name());
    if let Some(section) = block.section {
        let _ = write!(out, " data-section=\"{}\"", section_name(section));
    }
    if let Some(href) = block.href.as_deref() {
        let _ = write!(out, " href=\"{}\"", escape_html(href));
    }

    if block.kind == BlockKind::Divider {
        out.push_str(">\n");
        return;
    }
    out.push('>');

    if let Some(text) = block.text.as_deref() {
        out.push_str(&escape_html(text));
    }
    if block.children.is_empty() {
        let _ = writeln!(out, "</{tag}>");
        return;
    }

    out.push('\n');
    for child in &block.children {
        write_block(out, child, depth + 1);
    }
    let _ = writeln!(out, "{indent}</{tag}>");
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

// ────────────────────────────────────────────────────────────────────────────
// Plain text
// ────────────────────────────────────────────────────────────────────────────

/// Reading-order text, one line per text block. Rows collapse onto one line and
/// sections are separated by a blank line.
pub fn to_plain_text(doc: &DocumentTree) -> String {
    let mut lines = Vec::new();
    collect_lines(&doc.root, &mut lines);
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn collect_lines(block: &Block, lines: &mut Vec<String>) {
    match block.kind {
        BlockKind::Section => {
            if !lines.is_empty() {
                lines.push(String::new());
            }
            for child in &block.children {
                collect_lines(child, lines);
            }
        }
        BlockKind::Row => {
            let mut parts = Vec::new();
            block.walk(&mut |b| {
                if b.class == StyleClass::ContactSeparator {
                    return;
                }
                if let Some(text) = b.text.as_deref().filter(|t| !t.trim().is_empty()) {
                    parts.push(text);
                }
            });
            if !parts.is_empty() {
                lines.push(parts.join(" | "));
            }
        }
        BlockKind::ListItem => {
            if let Some(text) = block.text.as_deref() {
                lines.push(format!("- {text}"));
            }
        }
        _ => {
            if let Some(text) = block.text.as_deref().filter(|t| !t.trim().is_empty()) {
                lines.push(text.to_string());
            }
            for child in &block.children {
                collect_lines(child, lines);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::{default_page_config, PageConfig, PaperSize};
    use crate::models::{ExperienceEntry, PersonalDetails, Resume};
    use crate::render::registry::{entry, TemplateId};

    fn sample() -> Resume {
        Resume {
            personal_details: PersonalDetails {
                full_name: "Jane <Doe>".to_string(),
                email: "jane@example.com".to_string(),
                linkedin: "linkedin.com/in/janedoe".to_string(),
                ..PersonalDetails::default()
            },
            experience: vec![ExperienceEntry {
                job_title: "R&D Lead".to_string(),
                company: "Acme".to_string(),
                start_date: "2020-05".to_string(),
                current_job: true,
                responsibilities: "Shipped \"v2\"\nHired the team".to_string(),
                ..ExperienceEntry::default()
            }],
            skills: vec!["Rust".to_string()],
            ..Resume::default()
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html(r#""quoted""#), "&quot;quoted&quot;");
        assert_eq!(escape_html("it's"), "it&#x27;s");
    }

    #[test]
    fn test_html_escapes_user_text() {
        let doc = entry(TemplateId::ModernProfessional).render(&sample(), &default_page_config());
        let html = to_html(&doc);
        assert!(html.contains("<title>Jane &lt;Doe&gt;</title>"));
        assert!(html.contains("R&amp;D Lead"));
        assert!(html.contains("Shipped &quot;v2&quot;"));
        assert!(!html.contains("Jane <Doe>"));
    }

    #[test]
    fn test_empty_record_has_no_name_heading() {
        for id in TemplateId::ALL {
            let html = to_html(&entry(id).render(&Resume::default(), &default_page_config()));
            assert!(!html.contains("<h1"), "{id}");
            assert!(html.contains("<title>Resume</title>"), "{id}");
        }
    }

    #[test]
    fn test_html_has_rule_for_every_class() {
        let doc = entry(TemplateId::TechFocused).render(&sample(), &default_page_config());
        let html = to_html(&doc);
        for class in StyleClass::ALL {
            assert!(html.contains(&format!(".{} {{", class.css_name())), "missing {class:?}");
        }
    }

    #[test]
    fn test_html_page_rule_follows_config() {
        let page = PageConfig {
            paper: PaperSize::A4,
            margin_in: 0.5,
        };
        let doc = entry(TemplateId::ClassicExecutive).render(&sample(), &page);
        assert!(to_html(&doc).contains("@page { size: A4; margin: 36pt; }"));
    }

    #[test]
    fn test_html_links_and_sections() {
        let doc = entry(TemplateId::MinimalElegant).render(&sample(), &default_page_config());
        let html = to_html(&doc);
        assert!(html.contains(r#"href="mailto:jane@example.com""#));
        assert!(html.contains(r#"href="https://linkedin.com/in/janedoe">linkedin.com/in/janedoe</a>"#));
        assert!(html.contains(r#"<section class="section" data-section="experience">"#));
        assert!(html.contains(r#"<hr class="heading-rule">"#));
    }

    #[test]
    fn test_css_declarations_for_uppercase_heading() {
        let sheet = StyleSheet::for_render(TemplateId::ClassicExecutive, None);
        let css = sheet.get(StyleClass::SectionTitle).map(css_declarations).unwrap_or_default();
        assert!(css.contains("text-transform: uppercase"));
        assert!(css.contains("font-family: 'EB Garamond'"));
    }

    #[test]
    fn test_plain_text_reading_order() {
        let doc = entry(TemplateId::ModernProfessional).render(&sample(), &default_page_config());
        let text = to_plain_text(&doc);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Jane <Doe>");
        assert_eq!(lines[1], "jane@example.com | linkedin.com/in/janedoe");
        assert!(lines.contains(&"R&D Lead | May 2020 - Present"));
        assert!(lines.contains(&"- Shipped \"v2\""));
        let work = lines.iter().position(|l| *l == "Work Experience");
        let skills = lines.iter().position(|l| *l == "Skills");
        assert!(work < skills);
    }

    #[test]
    fn test_plain_text_drops_contact_separators() {
        let doc = entry(TemplateId::ClassicExecutive).render(&sample(), &default_page_config());
        let text = to_plain_text(&doc);
        assert!(text.contains("jane@example.com | linkedin.com/in/janedoe"));
        assert!(!text.contains("| | "));
    }
}

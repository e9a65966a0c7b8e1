//! Block builders shared by the template renderers.

use crate::content::links::{link_href, normalize_link, Platform};
use crate::content::text::{contact_items, has_text, responsibility_lines, ContactItem};
use crate::models::{PersonalDetails, SectionKind};
use crate::render::document::{Block, BlockKind};
use crate::render::style::StyleClass;

/// Joins the non-blank parts with `sep`.
pub fn join_nonempty<S: AsRef<str>>(parts: &[S], sep: &str) -> String {
    parts
        .iter()
        .map(|p| p.as_ref().trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

pub fn contact_block(item: &ContactItem) -> Block {
    match &item.href {
        Some(href) => Block::link(StyleClass::Link, &item.display, href),
        None => Block::text(StyleClass::ContactItem, &item.display),
    }
}

/// Contact row, or `None` when there is nothing to show. `separator` is placed
/// between items when given.
pub fn contact_row(details: &PersonalDetails, separator: Option<&str>) -> Option<Block> {
    let items = contact_items(details);
    if items.is_empty() {
        return None;
    }

    let mut children = Vec::with_capacity(items.len() * 2);
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            if let Some(sep) = separator {
                children.push(Block::text(StyleClass::ContactSeparator, sep));
            }
        }
        children.push(contact_block(item));
    }
    Some(Block::container(BlockKind::Row, StyleClass::ContactLine, children))
}

/// Name heading, `None` when the name is blank.
pub fn name_block(details: &PersonalDetails) -> Option<Block> {
    has_text(&details.full_name).then(|| Block::heading(StyleClass::Name, details.full_name.trim()))
}

/// Name and contact line. `None` when the record carries neither.
pub fn header_block(details: &PersonalDetails, separator: Option<&str>) -> Option<Block> {
    let children: Vec<Block> = name_block(details)
        .into_iter()
        .chain(contact_row(details, separator))
        .collect();
    if children.is_empty() {
        return None;
    }
    Some(Block::container(BlockKind::Header, StyleClass::Header, children))
}

/// Bulleted list from line-separated text, `None` when no lines survive.
pub fn bullet_list(text: &str, item_class: StyleClass) -> Option<Block> {
    let lines = responsibility_lines(text);
    if lines.is_empty() {
        return None;
    }
    let items = lines
        .into_iter()
        .map(|line| Block {
            text: Some(line),
            ..Block::new(BlockKind::ListItem, item_class)
        })
        .collect();
    Some(Block::container(BlockKind::List, StyleClass::BulletList, items))
}

/// Paragraph for optional free text.
pub fn optional_paragraph(text: &str, class: StyleClass) -> Option<Block> {
    has_text(text).then(|| Block::paragraph(class, text.trim()))
}

/// Optional single-line text.
pub fn optional_text(text: &str, class: StyleClass) -> Option<Block> {
    has_text(text).then(|| Block::text(class, text.trim()))
}

/// Link for project and achievement URLs, displayed in website form.
pub fn optional_link(raw: &str) -> Option<Block> {
    let display = normalize_link(raw, Platform::Website);
    if display.is_empty() {
        return None;
    }
    let href = link_href(raw, &display);
    Some(Block::link(StyleClass::Link, display, href))
}

/// Title on the left, date label on the right. Empty sides are dropped.
pub fn entry_header(title: &str, date: &str) -> Block {
    let children = [
        optional_text(title, StyleClass::ItemTitle),
        optional_text(date, StyleClass::DateLabel),
    ]
    .into_iter()
    .flatten()
    .collect();
    Block::container(BlockKind::Row, StyleClass::EntryHeader, children)
}

/// Section block opened by its title heading.
pub fn titled_section(kind: SectionKind, title: &str, body: Vec<Block>) -> Block {
    let mut children = Vec::with_capacity(body.len() + 1);
    children.push(Block::heading(StyleClass::SectionTitle, title));
    children.extend(body);
    Block::section(kind, StyleClass::Section, children)
}

/// Flat list rendered as one line of text, caller order kept.
pub fn inline_list(items: &[String], sep: &str) -> Block {
    Block::paragraph(StyleClass::InlineList, join_nonempty(items, sep))
}

pub fn entry(children: Vec<Block>) -> Block {
    Block::container(BlockKind::Entry, StyleClass::Entry, children)
}

/// Row of badges, `None` when `labels` is empty.
pub fn badge_row<I, S>(labels: I, row_class: StyleClass, badge_class: StyleClass) -> Option<Block>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let badges: Vec<Block> = labels
        .into_iter()
        .map(Into::into)
        .filter(|s: &String| has_text(s))
        .map(|s| Block::badge(badge_class, s.trim()))
        .collect();
    (!badges.is_empty()).then(|| Block::container(BlockKind::Row, row_class, badges))
}

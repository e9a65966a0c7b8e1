//! Page Fill Analysis: how much of the page a rendered document occupies.
//!
//! Walks the DocumentTree, wraps every text block at the content width using
//! the font metric profile and size its style class resolves to, and sums the
//! resulting line heights with each block's margins, padding and rules.
//!
//! # Verdicts
//! - fill < 60%          → TooMuchWhitespace
//! - 60% ≤ fill ≤ 100%   → Acceptable
//! - 100% < fill ≤ 105%  → MinorOverflow
//! - fill > 105%         → MajorOverflow
//!
//! The estimate is advisory. It never feeds back into the tree or the layout scale.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::layout::font_metrics::{get_metrics, PageConfig};
use crate::render::document::{Block, DocumentTree};
use crate::render::style::{Flow, Style, StyleSheet};

pub const WHITESPACE_THRESHOLD: f32 = 0.60;
pub const MINOR_OVERFLOW_LIMIT: f32 = 1.05;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageFillVerdict {
    TooMuchWhitespace,
    Acceptable,
    /// Spills onto a second page by at most 5%.
    MinorOverflow,
    MajorOverflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageFillAnalysis {
    pub used_pt: f32,
    pub available_pt: f32,
    pub fill_ratio: f32,
    pub verdict: PageFillVerdict,
}

// ────────────────────────────────────────────────────────────────────────────
// Core functions
// ────────────────────────────────────────────────────────────────────────────

/// Estimates the vertical space `doc` needs on one page of `page`.
pub fn estimate_page_fill(doc: &DocumentTree, page: &PageConfig) -> PageFillAnalysis {
    let used_pt = block_height(&doc.root, doc.styles, page.content_width_pt());
    let analysis = analyze_fill(used_pt, page.content_height_pt());

    debug!(
        template = %doc.template,
        used_pt = analysis.used_pt,
        fill_ratio = analysis.fill_ratio,
        verdict = ?analysis.verdict,
        "Page fill estimated"
    );
    analysis
}

/// Classifies `used_pt` against `available_pt`.
pub fn analyze_fill(used_pt: f32, available_pt: f32) -> PageFillAnalysis {
    let fill_ratio = if available_pt > 0.0 { used_pt / available_pt } else { 0.0 };

    let verdict = if fill_ratio > MINOR_OVERFLOW_LIMIT {
        PageFillVerdict::MajorOverflow
    } else if fill_ratio > 1.0 {
        PageFillVerdict::MinorOverflow
    } else if fill_ratio < WHITESPACE_THRESHOLD {
        PageFillVerdict::TooMuchWhitespace
    } else {
        PageFillVerdict::Acceptable
    };

    PageFillAnalysis {
        used_pt,
        available_pt,
        fill_ratio,
        verdict,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Internal helpers
// ────────────────────────────────────────────────────────────────────────────

fn block_height(block: &Block, sheet: &StyleSheet, width_pt: f32) -> f32 {
    let Some(style) = sheet.get(block.class) else {
        return 0.0;
    };

    let inset = style.padding_pt * 2.0 + style.border_left.map_or(0.0, |b| b.width_pt);
    let inner_width = (width_pt - inset).max(1.0);
    let chrome = style.margin_top_pt
        + style.margin_bottom_pt
        + style.padding_pt * 2.0
        + style.border_bottom.map_or(0.0, |b| b.width_pt);

    let content = match style.flow {
        Flow::Row | Flow::Spread if !block.children.is_empty() => {
            row_height(block, sheet, inner_width)
        }
        _ => {
            let own = block
                .text
                .as_deref()
                .map_or(0.0, |text| text_height(text, style, inner_width));
            let children: f32 = block
                .children
                .iter()
                .map(|child| block_height(child, sheet, inner_width))
                .sum();
            own + children
        }
    };

    chrome + content
}

fn text_height(text: &str, style: &Style, width_pt: f32) -> f32 {
    let lines = get_metrics(style.font_family).estimated_lines(text, style.font_size_pt, width_pt);
    lines as f32 * style.font_size_pt * style.line_height
}

/// Children of a row share lines, so they are measured as one run in the
/// largest font among them.
fn row_height(row: &Block, sheet: &StyleSheet, width_pt: f32) -> f32 {
    let mut run = String::new();
    let mut tallest: Option<&Style> = None;

    for child in &row.children {
        if let Some(text) = child.text.as_deref() {
            if !run.is_empty() {
                run.push(' ');
            }
            run.push_str(text);
        }
        if let Some(style) = sheet.get(child.class) {
            if tallest.map_or(true, |t| style.font_size_pt > t.font_size_pt) {
                tallest = Some(style);
            }
        }
    }

    tallest.map_or(0.0, |style| text_height(&run, style, width_pt))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

//! Static font-metric profiles for the five template typefaces, plus page geometry.
//!
//! Widths are em-unit averages per character class, not per-glyph tables. That is
//! accurate enough to tell a half-empty page from an overflowing one, which is
//! all the page-fill estimate needs.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Font family enum
// ────────────────────────────────────────────────────────────────────────────

/// One typeface per template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFamily {
    /// Modern Professional: humanist sans-serif.
    Inter,
    /// Classic Executive: old-style serif.
    EbGaramond,
    /// Tech Focused: monospace.
    JetBrainsMono,
    /// Fresh Graduate: rounded sans-serif.
    Lato,
    /// Minimal Elegant: light display serif.
    CormorantGaramond,
}

impl FontFamily {
    /// CSS `font-family` stack.
    pub fn css_stack(self) -> &'static str {
        match self {
            FontFamily::Inter => "'Inter', 'Helvetica Neue', Arial, sans-serif",
            FontFamily::EbGaramond => "'EB Garamond', Garamond, 'Times New Roman', serif",
            FontFamily::JetBrainsMono => "'JetBrains Mono', 'Fira Code', Menlo, monospace",
            FontFamily::Lato => "'Lato', 'Segoe UI', Arial, sans-serif",
            FontFamily::CormorantGaramond => "'Cormorant Garamond', Georgia, serif",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Page configuration
// ────────────────────────────────────────────────────────────────────────────

pub const POINTS_PER_INCH: f32 = 72.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaperSize {
    Letter,
    A4,
}

impl PaperSize {
    /// (width, height) in points.
    pub fn dimensions_pt(self) -> (f32, f32) {
        match self {
            PaperSize::Letter => (612.0, 792.0),
            PaperSize::A4 => (595.28, 841.89),
        }
    }

    pub fn css_name(self) -> &'static str {
        match self {
            PaperSize::Letter => "letter",
            PaperSize::A4 => "A4",
        }
    }
}

/// Printable page box shared by every template.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    pub paper: PaperSize,
    /// Uniform margin on all four sides, in inches.
    pub margin_in: f32,
}

/// US letter with 0.75" margins.
pub fn default_page_config() -> PageConfig {
    PageConfig {
        paper: PaperSize::Letter,
        margin_in: 0.75,
    }
}

impl PageConfig {
    pub fn margin_pt(&self) -> f32 {
        self.margin_in * POINTS_PER_INCH
    }

    pub fn content_width_pt(&self) -> f32 {
        self.paper.dimensions_pt().0 - 2.0 * self.margin_pt()
    }

    pub fn content_height_pt(&self) -> f32 {
        self.paper.dimensions_pt().1 - 2.0 * self.margin_pt()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Average advance widths in em units, bucketed by character class.
pub struct FontMetricTable {
    /// i, l, j, t, f, r and thin punctuation.
    narrow: f32,
    lower: f32,
    upper: f32,
    digit: f32,
    /// m, w, M, W, @, %.
    wide: f32,
    pub space_width: f32,
    /// Fallback for anything outside ASCII.
    pub average_char_width: f32,
}

impl FontMetricTable {
    fn char_width(&self, c: char) -> f32 {
        match c {
            ' ' => self.space_width,
            'i' | 'l' | 'j' | 't' | 'f' | 'r' | 'I' | '!' | '.' | ',' | '\'' | ':' | ';' | '|' => {
                self.narrow
            }
            'm' | 'w' | 'M' | 'W' | '@' | '%' => self.wide,
            'a'..='z' => self.lower,
            'A'..='Z' => self.upper,
            '0'..='9' => self.digit,
            c if c.is_ascii() => self.lower,
            _ => self.average_char_width,
        }
    }

    /// Rendered width of `s` in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars().map(|c| self.char_width(c)).sum()
    }

    /// Lines `s` occupies when greedily word-wrapped at `width_pt` with a
    /// `size_pt` font. Empty text occupies zero lines.
    pub fn estimated_lines(&self, s: &str, size_pt: f32, width_pt: f32) -> u32 {
        let words: Vec<&str> = s.split_whitespace().collect();
        if words.is_empty() || size_pt <= 0.0 {
            return 0;
        }
        let max_width = width_pt / size_pt;
        let mut line_count = 1u32;
        let mut current_width = 0.0_f32;
        let mut first = true;

        for word in &words {
            let word_w = self.measure_str(word);
            let space_w = if first { 0.0 } else { self.space_width };

            if !first && current_width + space_w + word_w > max_width {
                line_count = line_count.saturating_add(1);
                current_width = word_w;
            } else {
                current_width += space_w + word_w;
                first = false;
            }
        }
        line_count
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static profiles
// ────────────────────────────────────────────────────────────────────────────

static INTER_TABLE: FontMetricTable = FontMetricTable {
    narrow: 0.28,
    lower: 0.55,
    upper: 0.66,
    digit: 0.56,
    wide: 0.84,
    space_width: 0.25,
    average_char_width: 0.52,
};

static EB_GARAMOND_TABLE: FontMetricTable = FontMetricTable {
    narrow: 0.24,
    lower: 0.46,
    upper: 0.60,
    digit: 0.48,
    wide: 0.72,
    space_width: 0.21,
    average_char_width: 0.44,
};

/// Monospace: every glyph advances the same.
static JETBRAINS_MONO_TABLE: FontMetricTable = FontMetricTable {
    narrow: 0.60,
    lower: 0.60,
    upper: 0.60,
    digit: 0.60,
    wide: 0.60,
    space_width: 0.60,
    average_char_width: 0.60,
};

static LATO_TABLE: FontMetricTable = FontMetricTable {
    narrow: 0.29,
    lower: 0.57,
    upper: 0.68,
    digit: 0.58,
    wide: 0.86,
    space_width: 0.26,
    average_char_width: 0.55,
};

static CORMORANT_TABLE: FontMetricTable = FontMetricTable {
    narrow: 0.22,
    lower: 0.42,
    upper: 0.58,
    digit: 0.45,
    wide: 0.68,
    space_width: 0.20,
    average_char_width: 0.41,
};

/// Returns the static metric profile for a font family.
pub fn get_metrics(font: FontFamily) -> &'static FontMetricTable {
    match font {
        FontFamily::Inter => &INTER_TABLE,
        FontFamily::EbGaramond => &EB_GARAMOND_TABLE,
        FontFamily::JetBrainsMono => &JETBRAINS_MONO_TABLE,
        FontFamily::Lato => &LATO_TABLE,
        FontFamily::CormorantGaramond => &CORMORANT_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

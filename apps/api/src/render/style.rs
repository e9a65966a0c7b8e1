//! Style tables: one precomputed `StyleSheet` per (template, density, spacing).
//!
//! Blocks in a `DocumentTree` carry only a `StyleClass`. The sheet that resolves
//! those classes is picked once per render from a table built on first use and
//! shared by every render after that.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::Serialize;

use crate::layout::font_metrics::FontFamily;
use crate::layout::scale::{DensityTier, FontSizes, LayoutScale, SpacingTier};
use crate::render::registry::TemplateId;

// ────────────────────────────────────────────────────────────────────────────
// Style classes
// ────────────────────────────────────────────────────────────────────────────

/// Every visual role a block can play. Serialized names double as CSS classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleClass {
    Page,
    Header,
    Name,
    ContactLine,
    ContactItem,
    ContactSeparator,
    HeaderRule,
    Section,
    SectionTitle,
    HeadingRule,
    Entry,
    EntryHeader,
    ItemTitle,
    ItemSubtitle,
    DateLabel,
    AccentBar,
    Body,
    BulletList,
    Bullet,
    Highlight,
    Link,
    BadgeRow,
    Badge,
    TagRow,
    Tag,
    SkillGroup,
    SkillLabel,
    InlineList,
}

impl StyleClass {
    pub const ALL: [StyleClass; 28] = [
        StyleClass::Page,
        StyleClass::Header,
        StyleClass::Name,
        StyleClass::ContactLine,
        StyleClass::ContactItem,
        StyleClass::ContactSeparator,
        StyleClass::HeaderRule,
        StyleClass::Section,
        StyleClass::SectionTitle,
        StyleClass::HeadingRule,
        StyleClass::Entry,
        StyleClass::EntryHeader,
        StyleClass::ItemTitle,
        StyleClass::ItemSubtitle,
        StyleClass::DateLabel,
        StyleClass::AccentBar,
        StyleClass::Body,
        StyleClass::BulletList,
        StyleClass::Bullet,
        StyleClass::Highlight,
        StyleClass::Link,
        StyleClass::BadgeRow,
        StyleClass::Badge,
        StyleClass::TagRow,
        StyleClass::Tag,
        StyleClass::SkillGroup,
        StyleClass::SkillLabel,
        StyleClass::InlineList,
    ];

    pub fn css_name(self) -> &'static str {
        match self {
            StyleClass::Page => "page",
            StyleClass::Header => "header",
            StyleClass::Name => "name",
            StyleClass::ContactLine => "contact-line",
            StyleClass::ContactItem => "contact-item",
            StyleClass::ContactSeparator => "contact-separator",
            StyleClass::HeaderRule => "header-rule",
            StyleClass::Section => "section",
            StyleClass::SectionTitle => "section-title",
            StyleClass::HeadingRule => "heading-rule",
            StyleClass::Entry => "entry",
            StyleClass::EntryHeader => "entry-header",
            StyleClass::ItemTitle => "item-title",
            StyleClass::ItemSubtitle => "item-subtitle",
            StyleClass::DateLabel => "date-label",
            StyleClass::AccentBar => "accent-bar",
            StyleClass::Body => "body",
            StyleClass::BulletList => "bullet-list",
            StyleClass::Bullet => "bullet",
            StyleClass::Highlight => "highlight",
            StyleClass::Link => "link",
            StyleClass::BadgeRow => "badge-row",
            StyleClass::Badge => "badge",
            StyleClass::TagRow => "tag-row",
            StyleClass::Tag => "tag",
            StyleClass::SkillGroup => "skill-group",
            StyleClass::SkillLabel => "skill-label",
            StyleClass::InlineList => "inline-list",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Style values
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// How a block lays out its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Flow {
    /// Children stack vertically.
    Stack,
    /// Children sit on one line and wrap.
    Row,
    /// Children sit on one line, pushed to both edges.
    Spread,
    /// Runs inline with its siblings.
    Inline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderStyle {
    Solid,
    Double,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Border {
    pub width_pt: f32,
    pub style: BorderStyle,
    pub color: &'static str,
}

impl Border {
    pub const fn solid(width_pt: f32, color: &'static str) -> Self {
        Border {
            width_pt,
            style: BorderStyle::Solid,
            color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    pub font_family: FontFamily,
    pub font_size_pt: f32,
    pub font_weight: u16,
    pub line_height: f32,
    pub color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<&'static str>,
    pub italic: bool,
    pub uppercase: bool,
    pub letter_spacing_em: f32,
    pub align: TextAlign,
    pub flow: Flow,
    pub margin_top_pt: f32,
    pub margin_bottom_pt: f32,
    pub padding_pt: f32,
    pub gap_pt: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_left: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom: Option<Border>,
    pub border_radius_pt: f32,
}

impl Style {
    pub fn new(font_family: FontFamily, font_size_pt: f32, color: &'static str) -> Self {
        Style {
            font_family,
            font_size_pt,
            font_weight: 400,
            line_height: 1.35,
            color,
            background: None,
            italic: false,
            uppercase: false,
            letter_spacing_em: 0.0,
            align: TextAlign::Left,
            flow: Flow::Stack,
            margin_top_pt: 0.0,
            margin_bottom_pt: 0.0,
            padding_pt: 0.0,
            gap_pt: 0.0,
            border_left: None,
            border_bottom: None,
            border_radius_pt: 0.0,
        }
    }

    pub fn weight(mut self, weight: u16) -> Self {
        self.font_weight = weight;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn uppercase(mut self, letter_spacing_em: f32) -> Self {
        self.uppercase = true;
        self.letter_spacing_em = letter_spacing_em;
        self
    }

    pub fn tracking(mut self, letter_spacing_em: f32) -> Self {
        self.letter_spacing_em = letter_spacing_em;
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn flow(mut self, flow: Flow, gap_pt: f32) -> Self {
        self.flow = flow;
        self.gap_pt = gap_pt;
        self
    }

    pub fn margins(mut self, top_pt: f32, bottom_pt: f32) -> Self {
        self.margin_top_pt = top_pt;
        self.margin_bottom_pt = bottom_pt;
        self
    }

    pub fn padding(mut self, padding_pt: f32) -> Self {
        self.padding_pt = padding_pt;
        self
    }

    pub fn background(mut self, color: &'static str) -> Self {
        self.background = Some(color);
        self
    }

    pub fn border_left(mut self, border: Border) -> Self {
        self.border_left = Some(border);
        self
    }

    pub fn border_bottom(mut self, border: Border) -> Self {
        self.border_bottom = Some(border);
        self
    }

    pub fn rounded(mut self, radius_pt: f32) -> Self {
        self.border_radius_pt = radius_pt;
        self
    }

    pub fn line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Themes
// ────────────────────────────────────────────────────────────────────────────

/// Static visual identity of one template.
#[derive(Debug)]
pub struct Theme {
    pub heading_font: FontFamily,
    pub body_font: FontFamily,
    pub primary: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub surface: &'static str,
    /// Points per unit of section/item spacing.
    pub spacing_unit_pt: f32,
    /// Follows the Layout Scale Calculator when true; otherwise the fixed values below apply.
    pub adaptive: bool,
    pub fixed_sizes: FontSizes,
    pub fixed_section_spacing: f32,
    pub fixed_item_spacing: f32,
}

static MODERN_PROFESSIONAL: Theme = Theme {
    heading_font: FontFamily::Inter,
    body_font: FontFamily::Inter,
    primary: "#1f3a5f",
    accent: "#2f80ed",
    text: "#222222",
    muted: "#5f6b7a",
    surface: "#eef3f9",
    spacing_unit_pt: 4.0,
    adaptive: true,
    fixed_sizes: crate::layout::scale::SPACIOUS_FONT_SIZES,
    fixed_section_spacing: 4.0,
    fixed_item_spacing: 3.0,
};

static CLASSIC_EXECUTIVE: Theme = Theme {
    heading_font: FontFamily::EbGaramond,
    body_font: FontFamily::EbGaramond,
    primary: "#111111",
    accent: "#7a5c2e",
    text: "#1a1a1a",
    muted: "#555555",
    surface: "#f7f3ec",
    spacing_unit_pt: 4.0,
    adaptive: false,
    fixed_sizes: FontSizes {
        name: 26.0,
        section_title: 13.0,
        item_title: 12.0,
        body: 11.0,
        small: 10.0,
    },
    fixed_section_spacing: 3.5,
    fixed_item_spacing: 2.5,
};

static TECH_FOCUSED: Theme = Theme {
    heading_font: FontFamily::JetBrainsMono,
    body_font: FontFamily::Inter,
    primary: "#0f172a",
    accent: "#10b981",
    text: "#1e293b",
    muted: "#64748b",
    surface: "#ecfdf5",
    spacing_unit_pt: 4.0,
    adaptive: false,
    fixed_sizes: FontSizes {
        name: 24.0,
        section_title: 12.5,
        item_title: 11.5,
        body: 10.5,
        small: 9.0,
    },
    fixed_section_spacing: 3.0,
    fixed_item_spacing: 2.0,
};

static FRESH_GRADUATE: Theme = Theme {
    heading_font: FontFamily::Lato,
    body_font: FontFamily::Lato,
    primary: "#4c1d95",
    accent: "#f59e0b",
    text: "#1f2937",
    muted: "#6b7280",
    surface: "#f5f3ff",
    spacing_unit_pt: 4.0,
    adaptive: false,
    fixed_sizes: FontSizes {
        name: 30.0,
        section_title: 15.0,
        item_title: 12.5,
        body: 11.0,
        small: 9.5,
    },
    fixed_section_spacing: 4.0,
    fixed_item_spacing: 3.0,
};

static MINIMAL_ELEGANT: Theme = Theme {
    heading_font: FontFamily::CormorantGaramond,
    body_font: FontFamily::CormorantGaramond,
    primary: "#2b2b2b",
    accent: "#b8a07e",
    text: "#333333",
    muted: "#8a8a8a",
    surface: "#fafafa",
    spacing_unit_pt: 4.0,
    adaptive: false,
    fixed_sizes: FontSizes {
        name: 32.0,
        section_title: 12.0,
        item_title: 13.0,
        body: 11.5,
        small: 10.0,
    },
    fixed_section_spacing: 5.0,
    fixed_item_spacing: 3.0,
};

pub fn theme(template: TemplateId) -> &'static Theme {
    match template {
        TemplateId::ModernProfessional => &MODERN_PROFESSIONAL,
        TemplateId::ClassicExecutive => &CLASSIC_EXECUTIVE,
        TemplateId::TechFocused => &TECH_FOCUSED,
        TemplateId::FreshGraduate => &FRESH_GRADUATE,
        TemplateId::MinimalElegant => &MINIMAL_ELEGANT,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Style sheets
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSheet {
    pub template: TemplateId,
    /// `None` for templates with fixed styling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density: Option<DensityTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing_tier: Option<SpacingTier>,
    pub classes: BTreeMap<StyleClass, Style>,
}

type SheetTable = [[[StyleSheet; 3]; 2]; 5];

static SHEETS: OnceLock<SheetTable> = OnceLock::new();

fn sheets() -> &'static SheetTable {
    SHEETS.get_or_init(|| {
        std::array::from_fn(|t| {
            std::array::from_fn(|d| {
                std::array::from_fn(|s| {
                    StyleSheet::build(TemplateId::ALL[t], DensityTier::ALL[d], SpacingTier::ALL[s])
                })
            })
        })
    })
}

impl StyleSheet {
    /// Picks the precomputed sheet for this render. Fixed templates ignore `scale`.
    pub fn for_render(template: TemplateId, scale: Option<&LayoutScale>) -> &'static StyleSheet {
        let (density, spacing) = match scale {
            Some(scale) if theme(template).adaptive => (scale.density, scale.spacing_tier),
            _ => (DensityTier::Spacious, SpacingTier::Roomy),
        };
        let d = DensityTier::ALL.iter().position(|x| *x == density).unwrap_or(0);
        let s = SpacingTier::ALL.iter().position(|x| *x == spacing).unwrap_or(0);
        &sheets()[template.index()][d][s]
    }

    pub fn get(&self, class: StyleClass) -> Option<&Style> {
        self.classes.get(&class)
    }

    fn build(template: TemplateId, density: DensityTier, spacing: SpacingTier) -> StyleSheet {
        let theme = theme(template);
        let (sizes, section_spacing, item_spacing) = if theme.adaptive {
            (density.font_sizes(), spacing.section_spacing(), spacing.item_spacing())
        } else {
            (theme.fixed_sizes, theme.fixed_section_spacing, theme.fixed_item_spacing)
        };
        let metrics = Metrics {
            sizes,
            section_gap: section_spacing * theme.spacing_unit_pt,
            item_gap: item_spacing * theme.spacing_unit_pt,
        };

        let mut classes = base_classes(theme, &metrics);
        match template {
            TemplateId::ModernProfessional => modern_overrides(&mut classes, theme, &metrics),
            TemplateId::ClassicExecutive => classic_overrides(&mut classes, theme, &metrics),
            TemplateId::TechFocused => tech_overrides(&mut classes, theme, &metrics),
            TemplateId::FreshGraduate => fresh_overrides(&mut classes, theme, &metrics),
            TemplateId::MinimalElegant => minimal_overrides(&mut classes, theme, &metrics),
        }

        StyleSheet {
            template,
            density: theme.adaptive.then_some(density),
            spacing_tier: theme.adaptive.then_some(spacing),
            classes,
        }
    }
}

struct Metrics {
    sizes: FontSizes,
    section_gap: f32,
    item_gap: f32,
}

#[rustfmt::skip]
fn base_classes(t: &Theme, m: &Metrics) -> BTreeMap<StyleClass, Style> {
    let s = &m.sizes;
    let body = Style::new(t.body_font, s.body, t.text);
    let heading = Style::new(t.heading_font, s.section_title, t.primary).weight(700);

    let mut c = BTreeMap::new();
    c.insert(StyleClass::Page, body);
    c.insert(StyleClass::Header, body.margins(0.0, m.section_gap));
    c.insert(StyleClass::Name, Style::new(t.heading_font, s.name, t.primary).weight(700).line_height(1.15));
    c.insert(StyleClass::ContactLine, Style::new(t.body_font, s.small, t.muted).flow(Flow::Row, 8.0).margins(4.0, 0.0));
    c.insert(StyleClass::ContactItem, Style::new(t.body_font, s.small, t.muted).flow(Flow::Inline, 0.0));
    c.insert(StyleClass::ContactSeparator, Style::new(t.body_font, s.small, t.muted).flow(Flow::Inline, 0.0));
    c.insert(StyleClass::HeaderRule, body.margins(6.0, 0.0).border_bottom(Border::solid(1.0, t.primary)));
    c.insert(StyleClass::Section, body.margins(m.section_gap, 0.0));
    c.insert(StyleClass::SectionTitle, heading.margins(0.0, m.item_gap));
    c.insert(StyleClass::HeadingRule, body.margins(0.0, m.item_gap).border_bottom(Border::solid(0.75, t.accent)));
    c.insert(StyleClass::Entry, body.margins(0.0, m.item_gap));
    c.insert(StyleClass::EntryHeader, body.flow(Flow::Spread, 6.0));
    c.insert(StyleClass::ItemTitle, Style::new(t.heading_font, s.item_title, t.text).weight(600).flow(Flow::Inline, 0.0));
    c.insert(StyleClass::ItemSubtitle, Style::new(t.body_font, s.body, t.muted));
    c.insert(StyleClass::DateLabel, Style::new(t.body_font, s.small, t.muted).flow(Flow::Inline, 0.0).align(TextAlign::Right));
    c.insert(StyleClass::AccentBar, body.border_left(Border::solid(3.0, t.accent)));
    c.insert(StyleClass::Body, body);
    c.insert(StyleClass::BulletList, body.margins(2.0, 0.0).padding(12.0));
    c.insert(StyleClass::Bullet, body);
    c.insert(StyleClass::Highlight, body.weight(600).background(t.surface).padding(4.0));
    c.insert(StyleClass::Link, Style::new(t.body_font, s.small, t.accent).flow(Flow::Inline, 0.0));
    c.insert(StyleClass::BadgeRow, body.flow(Flow::Row, 6.0));
    c.insert(StyleClass::Badge, Style::new(t.body_font, s.small, t.primary).background(t.surface).padding(3.0).rounded(3.0).flow(Flow::Inline, 0.0));
    c.insert(StyleClass::TagRow, body.flow(Flow::Row, 4.0).margins(2.0, 0.0));
    c.insert(StyleClass::Tag, Style::new(t.body_font, s.small, t.muted).flow(Flow::Inline, 0.0));
    c.insert(StyleClass::SkillGroup, body.margins(0.0, m.item_gap));
    c.insert(StyleClass::SkillLabel, Style::new(t.heading_font, s.body, t.text).weight(600));
    c.insert(StyleClass::InlineList, body);
    c
}

fn set(classes: &mut BTreeMap<StyleClass, Style>, class: StyleClass, style: Style) {
    classes.insert(class, style);
}

#[rustfmt::skip]
fn modern_overrides(c: &mut BTreeMap<StyleClass, Style>, t: &Theme, m: &Metrics) {
    let s = &m.sizes;
    set(c, StyleClass::SectionTitle, Style::new(t.heading_font, s.section_title, t.primary).weight(700).uppercase(0.04).margins(0.0, m.item_gap).border_bottom(Border::solid(1.0, t.surface)));
    set(c, StyleClass::ItemSubtitle, Style::new(t.body_font, s.body, t.accent).weight(500));
}

#[rustfmt::skip]
fn classic_overrides(c: &mut BTreeMap<StyleClass, Style>, t: &Theme, m: &Metrics) {
    let s = &m.sizes;
    set(c, StyleClass::Header, Style::new(t.body_font, s.body, t.text).align(TextAlign::Center).margins(0.0, m.section_gap));
    set(c, StyleClass::Name, Style::new(t.heading_font, s.name, t.primary).weight(600).uppercase(0.12).align(TextAlign::Center).line_height(1.1));
    set(c, StyleClass::ContactLine, Style::new(t.body_font, s.small, t.muted).flow(Flow::Row, 6.0).align(TextAlign::Center).margins(6.0, 0.0));
    set(c, StyleClass::HeaderRule, Style::new(t.body_font, s.body, t.text).margins(8.0, 0.0).border_bottom(Border { width_pt: 3.0, style: BorderStyle::Double, color: t.primary }));
    set(c, StyleClass::SectionTitle, Style::new(t.heading_font, s.section_title, t.primary).weight(600).uppercase(0.15).margins(0.0, m.item_gap).border_bottom(Border::solid(0.5, t.muted)));
    set(c, StyleClass::ItemTitle, Style::new(t.heading_font, s.item_title, t.text).weight(700).flow(Flow::Inline, 0.0));
    set(c, StyleClass::ItemSubtitle, Style::new(t.body_font, s.body, t.text).italic());
    set(c, StyleClass::Body, Style::new(t.body_font, s.body, t.text).align(TextAlign::Left).line_height(1.4));
}

#[rustfmt::skip]
fn tech_overrides(c: &mut BTreeMap<StyleClass, Style>, t: &Theme, m: &Metrics) {
    let s = &m.sizes;
    set(c, StyleClass::Name, Style::new(t.heading_font, s.name, t.primary).weight(700).tracking(-0.02));
    set(c, StyleClass::SectionTitle, Style::new(t.heading_font, s.section_title, t.accent).weight(700).margins(0.0, m.item_gap));
    set(c, StyleClass::AccentBar, Style::new(t.body_font, s.body, t.text).border_left(Border::solid(3.0, t.accent)).padding(8.0));
    set(c, StyleClass::ItemTitle, Style::new(t.heading_font, s.item_title, t.primary).weight(700).flow(Flow::Inline, 0.0));
    set(c, StyleClass::DateLabel, Style::new(t.heading_font, s.small, t.muted).flow(Flow::Inline, 0.0).align(TextAlign::Right));
    set(c, StyleClass::Tag, Style::new(FontFamily::JetBrainsMono, s.small, t.primary).background(t.surface).padding(2.0).rounded(2.0).flow(Flow::Inline, 0.0));
    set(c, StyleClass::SkillLabel, Style::new(t.heading_font, s.small, t.accent).weight(700));
    set(c, StyleClass::Badge, Style::new(FontFamily::JetBrainsMono, s.small, t.primary).background(t.surface).padding(2.0).rounded(2.0).flow(Flow::Inline, 0.0));
}

#[rustfmt::skip]
fn fresh_overrides(c: &mut BTreeMap<StyleClass, Style>, t: &Theme, m: &Metrics) {
    let s = &m.sizes;
    set(c, StyleClass::Header, Style::new(t.body_font, s.body, "#ffffff").background(t.primary).padding(14.0).rounded(6.0).margins(0.0, m.section_gap));
    set(c, StyleClass::Name, Style::new(t.heading_font, s.name, "#ffffff").weight(800).line_height(1.1));
    set(c, StyleClass::ContactLine, Style::new(t.body_font, s.small, "#ede9fe").flow(Flow::Row, 8.0).margins(6.0, 0.0));
    set(c, StyleClass::ContactItem, Style::new(t.body_font, s.small, "#ede9fe").flow(Flow::Inline, 0.0));
    set(c, StyleClass::Link, Style::new(t.body_font, s.small, "#fde68a").flow(Flow::Inline, 0.0));
    set(c, StyleClass::SectionTitle, Style::new(t.heading_font, s.section_title, t.primary).weight(800).margins(0.0, m.item_gap).border_left(Border::solid(4.0, t.accent)).padding(4.0));
    set(c, StyleClass::Badge, Style::new(t.body_font, s.small, t.primary).weight(600).background(t.surface).padding(4.0).rounded(10.0).flow(Flow::Inline, 0.0));
    set(c, StyleClass::Highlight, Style::new(t.body_font, s.body, t.text).weight(600).background("#fef3c7").padding(4.0).rounded(4.0));
}

#[rustfmt::skip]
fn minimal_overrides(c: &mut BTreeMap<StyleClass, Style>, t: &Theme, m: &Metrics) {
    let s = &m.sizes;
    set(c, StyleClass::Page, Style::new(t.body_font, s.body, t.text).align(TextAlign::Center).line_height(1.5));
    set(c, StyleClass::Header, Style::new(t.body_font, s.body, t.text).align(TextAlign::Center).margins(m.section_gap, m.section_gap * 1.5));
    set(c, StyleClass::Name, Style::new(t.heading_font, s.name, t.primary).weight(300).tracking(0.08).align(TextAlign::Center).line_height(1.1));
    set(c, StyleClass::ContactLine, Style::new(t.body_font, s.small, t.muted).flow(Flow::Row, 12.0).align(TextAlign::Center).margins(8.0, 0.0));
    set(c, StyleClass::Section, Style::new(t.body_font, s.body, t.text).align(TextAlign::Center).margins(m.section_gap * 1.5, 0.0));
    set(c, StyleClass::SectionTitle, Style::new(t.heading_font, s.section_title, t.primary).weight(400).uppercase(0.3).align(TextAlign::Center));
    set(c, StyleClass::HeadingRule, Style::new(t.body_font, s.body, t.text).margins(4.0, m.item_gap * 2.0).border_bottom(Border::solid(1.0, t.accent)));
    set(c, StyleClass::Entry, Style::new(t.body_font, s.body, t.text).align(TextAlign::Center).margins(0.0, m.item_gap * 1.5));
    set(c, StyleClass::EntryHeader, Style::new(t.body_font, s.body, t.text).align(TextAlign::Center));
    set(c, StyleClass::ItemTitle, Style::new(t.heading_font, s.item_title, t.text).weight(500).italic());
    set(c, StyleClass::DateLabel, Style::new(t.body_font, s.small, t.muted).tracking(0.05).align(TextAlign::Center));
    set(c, StyleClass::BulletList, Style::new(t.body_font, s.body, t.text).align(TextAlign::Center).margins(2.0, 0.0));
    set(c, StyleClass::InlineList, Style::new(t.body_font, s.body, t.text).align(TextAlign::Center).tracking(0.03));
}

//! DocumentTree: the declarative output of every template renderer.
//!
//! A tree of blocks, each tagged with a `StyleClass`. Style values live in the
//! attached `StyleSheet`, not on the blocks. Preview surfaces and print engines
//! consume this tree (or its HTML serialization) directly.

use serde::Serialize;

use crate::layout::font_metrics::{PageConfig, PaperSize};
use crate::layout::scale::LayoutScale;
use crate::models::SectionKind;
use crate::render::registry::TemplateId;
use crate::render::style::{StyleClass, StyleSheet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Page,
    Header,
    Section,
    Heading,
    Entry,
    Row,
    List,
    ListItem,
    Paragraph,
    Text,
    Link,
    Badge,
    AccentBar,
    Divider,
    Group,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub kind: BlockKind,
    pub class: StyleClass,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<SectionKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Block>,
}

impl Block {
    pub fn new(kind: BlockKind, class: StyleClass) -> Self {
        Block {
            kind,
            class,
            section: None,
            text: None,
            href: None,
            children: Vec::new(),
        }
    }

    pub fn container(kind: BlockKind, class: StyleClass, children: Vec<Block>) -> Self {
        Block {
            children,
            ..Block::new(kind, class)
        }
    }

    pub fn text(class: StyleClass, text: impl Into<String>) -> Self {
        Block {
            text: Some(text.into()),
            ..Block::new(BlockKind::Text, class)
        }
    }

    pub fn paragraph(class: StyleClass, text: impl Into<String>) -> Self {
        Block {
            text: Some(text.into()),
            ..Block::new(BlockKind::Paragraph, class)
        }
    }

    pub fn heading(class: StyleClass, text: impl Into<String>) -> Self {
        Block {
            text: Some(text.into()),
            ..Block::new(BlockKind::Heading, class)
        }
    }

    pub fn link(class: StyleClass, text: impl Into<String>, href: impl Into<String>) -> Self {
        Block {
            text: Some(text.into()),
            href: Some(href.into()),
            ..Block::new(BlockKind::Link, class)
        }
    }

    pub fn badge(class: StyleClass, text: impl Into<String>) -> Self {
        Block {
            text: Some(text.into()),
            ..Block::new(BlockKind::Badge, class)
        }
    }

    pub fn section(section: SectionKind, class: StyleClass, children: Vec<Block>) -> Self {
        Block {
            section: Some(section),
            children,
            ..Block::new(BlockKind::Section, class)
        }
    }

    pub fn divider(class: StyleClass) -> Self {
        Block::new(BlockKind::Divider, class)
    }

    /// Depth-first, pre-order walk over this block and its descendants.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Block)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}

/// Physical page box, in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageBox {
    pub paper: PaperSize,
    pub width_pt: f32,
    pub height_pt: f32,
    pub margin_pt: f32,
}

impl From<&PageConfig> for PageBox {
    fn from(config: &PageConfig) -> Self {
        let (width_pt, height_pt) = config.paper.dimensions_pt();
        PageBox {
            paper: config.paper,
            width_pt,
            height_pt,
            margin_pt: config.margin_pt(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTree {
    pub template: TemplateId,
    pub page: PageBox,
    /// Present only for templates that adapt to content density.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<LayoutScale>,
    pub styles: &'static StyleSheet,
    pub root: Block,
}

impl DocumentTree {
    pub fn new(
        template: TemplateId,
        page: &PageConfig,
        scale: Option<LayoutScale>,
        children: Vec<Block>,
    ) -> Self {
        DocumentTree {
            template,
            page: PageBox::from(page),
            scale,
            styles: StyleSheet::for_render(template, scale.as_ref()),
            root: Block::container(BlockKind::Page, StyleClass::Page, children),
        }
    }

    /// Sections in document order.
    pub fn sections(&self) -> Vec<SectionKind> {
        let mut out = Vec::new();
        self.root.walk(&mut |b| {
            if let Some(section) = b.section {
                out.push(section);
            }
        });
        out
    }

    /// Text of every block with the given class, in document order.
    pub fn texts_with_class(&self, class: StyleClass) -> Vec<&str> {
        let mut out = Vec::new();
        self.root.walk(&mut |b| {
            if b.class == class {
                if let Some(text) = b.text.as_deref() {
                    out.push(text);
                }
            }
        });
        out
    }
}

/// Query helpers for assertions over rendered trees.
#[cfg(test)]
impl DocumentTree {
    pub fn headings(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.root.walk(&mut |b| {
            if b.kind == BlockKind::Heading {
                if let Some(text) = b.text.as_deref() {
                    out.push(text);
                }
            }
        });
        out
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        let mut found = false;
        self.root.walk(&mut |b| {
            if b.text.as_deref().is_some_and(|t| t.contains(needle)) {
                found = true;
            }
        });
        found
    }

    pub fn section_block(&self, section: SectionKind) -> Option<&Block> {
        let mut hit = None;
        self.root.walk(&mut |b| {
            if hit.is_none() && b.section == Some(section) {
                hit = Some(b);
            }
        });
        hit
    }
}

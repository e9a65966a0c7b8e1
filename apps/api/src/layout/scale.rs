//! Layout Scale Calculator: density-aware spacing and type scale.
//!
//! # Rules
//! - Spacing tier from the number of populated sections:
//!   ≤ 4 → (4, 3), ≤ 6 → (3, 2), > 6 → (2, 1.5)
//! - Font table from the item count across experience, projects, education
//!   and achievements: > 8 → content-heavy, otherwise spacious
//!
//! Shape only. Text length never moves the scale.

use serde::{Deserialize, Serialize};

use crate::models::Resume;

/// Item count above which the smaller font table is used.
pub const CONTENT_HEAVY_ITEM_THRESHOLD: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DensityTier {
    Spacious,
    ContentHeavy,
}

/// Point sizes for the five text roles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSizes {
    pub name: f32,
    pub section_title: f32,
    pub item_title: f32,
    pub body: f32,
    pub small: f32,
}

pub const SPACIOUS_FONT_SIZES: FontSizes = FontSizes {
    name: 28.0,
    section_title: 15.0,
    item_title: 12.5,
    body: 11.0,
    small: 9.5,
};

pub const CONTENT_HEAVY_FONT_SIZES: FontSizes = FontSizes {
    name: 24.0,
    section_title: 13.0,
    item_title: 11.5,
    body: 10.0,
    small: 8.5,
};

impl DensityTier {
    pub const ALL: [DensityTier; 2] = [DensityTier::Spacious, DensityTier::ContentHeavy];

    pub fn font_sizes(self) -> FontSizes {
        match self {
            DensityTier::Spacious => SPACIOUS_FONT_SIZES,
            DensityTier::ContentHeavy => CONTENT_HEAVY_FONT_SIZES,
        }
    }
}

/// Spacing bands keyed on the number of populated sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpacingTier {
    Roomy,
    Balanced,
    Compact,
}

impl SpacingTier {
    pub const ALL: [SpacingTier; 3] = [SpacingTier::Roomy, SpacingTier::Balanced, SpacingTier::Compact];

    pub fn for_section_count(section_count: usize) -> Self {
        match section_count {
            0..=4 => SpacingTier::Roomy,
            5..=6 => SpacingTier::Balanced,
            _ => SpacingTier::Compact,
        }
    }

    pub fn section_spacing(self) -> f32 {
        match self {
            SpacingTier::Roomy => 4.0,
            SpacingTier::Balanced => 3.0,
            SpacingTier::Compact => 2.0,
        }
    }

    pub fn item_spacing(self) -> f32 {
        match self {
            SpacingTier::Roomy => 3.0,
            SpacingTier::Balanced => 2.0,
            SpacingTier::Compact => 1.5,
        }
    }
}

/// Scale factors for one render. Spacing values are dimensionless; each
/// template multiplies them into its own unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutScale {
    pub section_spacing: f32,
    pub item_spacing: f32,
    pub font_sizes: FontSizes,
    pub spacing_tier: SpacingTier,
    pub density: DensityTier,
    pub section_count: usize,
    pub total_items: usize,
}

pub fn compute_scale(resume: &Resume) -> LayoutScale {
    let section_count = resume.populated_sections().len();
    let total_items = resume.total_items();
    let spacing_tier = SpacingTier::for_section_count(section_count);
    let density = density_for(total_items);

    LayoutScale {
        section_spacing: spacing_tier.section_spacing(),
        item_spacing: spacing_tier.item_spacing(),
        font_sizes: density.font_sizes(),
        spacing_tier,
        density,
        section_count,
        total_items,
    }
}

/// (section spacing, item spacing) for a section count.
#[cfg(test)]
pub fn spacing_for(section_count: usize) -> (f32, f32) {
    let tier = SpacingTier::for_section_count(section_count);
    (tier.section_spacing(), tier.item_spacing())
}

pub fn density_for(total_items: usize) -> DensityTier {
    if total_items > CONTENT_HEAVY_ITEM_THRESHOLD {
        DensityTier::ContentHeavy
    } else {
        DensityTier::Spacious
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AchievementEntry, EducationEntry, ExperienceEntry, ProjectEntry};

    fn resume_with_items(exp: usize, proj: usize, edu: usize, ach: usize) -> Resume {
        Resume {
            experience: vec![ExperienceEntry::default(); exp],
            projects: vec![ProjectEntry::default(); proj],
            education: vec![EducationEntry::default(); edu],
            achievements: vec![AchievementEntry::default(); ach],
            ..Resume::default()
        }
    }

    #[test]
    fn test_spacing_tiers_at_boundaries() {
        assert_eq!(spacing_for(0), (4.0, 3.0));
        assert_eq!(spacing_for(4), (4.0, 3.0));
        assert_eq!(spacing_for(5), (3.0, 2.0));
        assert_eq!(spacing_for(6), (3.0, 2.0));
        assert_eq!(spacing_for(7), (2.0, 1.5));
    }

    #[test]
    fn test_spacing_never_increases_with_more_sections() {
        let mut previous = spacing_for(0);
        for count in 1..=7 {
            let current = spacing_for(count);
            assert!(current.0 <= previous.0, "section spacing grew at {count}");
            assert!(current.1 <= previous.1, "item spacing grew at {count}");
            previous = current;
        }
    }

    #[test]
    fn test_nine_items_selects_content_heavy() {
        let scale = compute_scale(&resume_with_items(4, 3, 1, 1));
        assert_eq!(scale.total_items, 9);
        assert_eq!(scale.density, DensityTier::ContentHeavy);
        assert_eq!(scale.font_sizes, CONTENT_HEAVY_FONT_SIZES);
    }

    #[test]
    fn test_three_items_selects_spacious() {
        let scale = compute_scale(&resume_with_items(1, 1, 1, 0));
        assert_eq!(scale.density, DensityTier::Spacious);
        assert_eq!(scale.font_sizes, SPACIOUS_FONT_SIZES);
    }

    #[test]
    fn test_eight_items_is_still_spacious() {
        assert_eq!(compute_scale(&resume_with_items(2, 2, 2, 2)).density, DensityTier::Spacious);
    }

    #[test]
    fn test_content_heavy_table_is_smaller_everywhere() {
        let (a, b) = (SPACIOUS_FONT_SIZES, CONTENT_HEAVY_FONT_SIZES);
        assert!(b.name < a.name);
        assert!(b.section_title < a.section_title);
        assert!(b.item_title < a.item_title);
        assert!(b.body < a.body);
        assert!(b.small < a.small);
    }

    #[test]
    fn test_full_resume_uses_tightest_spacing() {
        let mut resume = resume_with_items(1, 1, 1, 1);
        resume.summary = "Engineer".to_string();
        resume.skills = vec!["Rust".to_string()];
        resume.hobbies = vec!["Chess".to_string()];
        let scale = compute_scale(&resume);
        assert_eq!(scale.section_count, 7);
        assert_eq!((scale.section_spacing, scale.item_spacing), (2.0, 1.5));
    }

    #[test]
    fn test_text_length_does_not_change_scale() {
        let short = Resume {
            summary: "Hi".to_string(),
            ..Resume::default()
        };
        let long = Resume {
            summary: "word ".repeat(2_000),
            ..Resume::default()
        };
        assert_eq!(compute_scale(&short), compute_scale(&long));
    }
}

//! Resume Record: the canonical, read-only input to every template renderer.
//!
//! Wire shape is camelCase JSON. Every field is optional on the wire: a missing
//! key and an explicit `null` both deserialize to the type's default, and
//! unknown keys are ignored. Renderers only ever borrow a `Resume`.

use serde::{Deserialize, Deserializer, Serialize};

/// Treats `null` the same as a missing key.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalDetails {
    #[serde(deserialize_with = "nullable")]
    pub full_name: String,
    #[serde(deserialize_with = "nullable")]
    pub email: String,
    #[serde(deserialize_with = "nullable")]
    pub phone: String,
    #[serde(deserialize_with = "nullable")]
    pub location: String,
    #[serde(deserialize_with = "nullable")]
    pub linkedin: String,
    #[serde(deserialize_with = "nullable")]
    pub github: String,
    #[serde(deserialize_with = "nullable")]
    pub website: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    #[serde(deserialize_with = "nullable")]
    pub job_title: String,
    #[serde(deserialize_with = "nullable")]
    pub company: String,
    #[serde(deserialize_with = "nullable")]
    pub location: String,
    #[serde(deserialize_with = "nullable")]
    pub start_date: String,
    #[serde(deserialize_with = "nullable")]
    pub end_date: String,
    #[serde(deserialize_with = "nullable")]
    pub current_job: bool,
    /// Free text; one responsibility per line.
    #[serde(deserialize_with = "nullable")]
    pub responsibilities: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    #[serde(deserialize_with = "nullable")]
    pub degree: String,
    #[serde(deserialize_with = "nullable")]
    pub institution: String,
    #[serde(deserialize_with = "nullable")]
    pub location: String,
    #[serde(deserialize_with = "nullable")]
    pub start_date: String,
    #[serde(deserialize_with = "nullable")]
    pub end_date: String,
    #[serde(deserialize_with = "nullable")]
    pub gpa: String,
    #[serde(deserialize_with = "nullable")]
    pub achievements: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectEntry {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    /// Comma-separated, e.g. `"Rust, Tokio, Postgres"`.
    #[serde(deserialize_with = "nullable")]
    pub technologies: String,
    #[serde(deserialize_with = "nullable")]
    pub link: String,
    #[serde(deserialize_with = "nullable")]
    pub duration: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AchievementEntry {
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub organization: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub date: String,
    #[serde(deserialize_with = "nullable")]
    pub link: String,
}

/// Top-level sections, in the canonical order used by the scale calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    Experience,
    Projects,
    Education,
    Skills,
    Achievements,
    Hobbies,
}

impl SectionKind {
    pub const ALL: [SectionKind; 7] = [
        SectionKind::Summary,
        SectionKind::Experience,
        SectionKind::Projects,
        SectionKind::Education,
        SectionKind::Skills,
        SectionKind::Achievements,
        SectionKind::Hobbies,
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Resume {
    #[serde(deserialize_with = "nullable")]
    pub personal_details: PersonalDetails,
    #[serde(deserialize_with = "nullable")]
    pub summary: String,
    #[serde(deserialize_with = "nullable")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(deserialize_with = "nullable")]
    pub education: Vec<EducationEntry>,
    #[serde(deserialize_with = "nullable")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub projects: Vec<ProjectEntry>,
    #[serde(deserialize_with = "nullable")]
    pub achievements: Vec<AchievementEntry>,
    #[serde(deserialize_with = "nullable")]
    pub hobbies: Vec<String>,
}

impl Resume {
    /// A whitespace-only summary counts as absent.
    pub fn has_summary(&self) -> bool {
        !self.summary.trim().is_empty()
    }

    pub fn has_section(&self, section: SectionKind) -> bool {
        match section {
            SectionKind::Summary => self.has_summary(),
            SectionKind::Experience => !self.experience.is_empty(),
            SectionKind::Projects => !self.projects.is_empty(),
            SectionKind::Education => !self.education.is_empty(),
            SectionKind::Skills => !self.skills.is_empty(),
            SectionKind::Achievements => !self.achievements.is_empty(),
            SectionKind::Hobbies => !self.hobbies.is_empty(),
        }
    }

    /// Populated sections in canonical order.
    pub fn populated_sections(&self) -> Vec<SectionKind> {
        SectionKind::ALL
            .into_iter()
            .filter(|s| self.has_section(*s))
            .collect()
    }

    /// Entries across experience, projects, education and achievements.
    pub fn total_items(&self) -> usize {
        self.experience.len() + self.projects.len() + self.education.len() + self.achievements.len()
    }
}

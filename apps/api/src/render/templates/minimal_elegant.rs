//! Minimal Elegant: centered, generous whitespace, a thin rule under each
//! section heading.

use tracing::debug;

use crate::content::dates::{date_range, format_month_year};
use crate::content::text::split_technologies;
use crate::layout::font_metrics::PageConfig;
use crate::models::{AchievementEntry, EducationEntry, ExperienceEntry, ProjectEntry, Resume, SectionKind};
use crate::render::common::{
    bullet_list, entry, entry_header, header_block, inline_list, join_nonempty,
    optional_link, optional_paragraph, optional_text,
};
use crate::render::document::{Block, BlockKind, DocumentTree};
use crate::render::registry::TemplateId;
use crate::render::style::StyleClass;

const ORDER: [SectionKind; 7] = [
    SectionKind::Summary,
    SectionKind::Experience,
    SectionKind::Education,
    SectionKind::Projects,
    SectionKind::Skills,
    SectionKind::Achievements,
    SectionKind::Hobbies,
];

pub fn render(resume: &Resume, page: &PageConfig) -> DocumentTree {
    debug!(template = "minimal-elegant", "Rendering document");

    let mut blocks: Vec<Block> = header(resume).into_iter().collect();
    for kind in ORDER {
        if resume.has_section(kind) {
            blocks.push(section(resume, kind));
        }
    }

    DocumentTree::new(TemplateId::MinimalElegant, page, None, blocks)
}

fn header(resume: &Resume) -> Option<Block> {
    header_block(&resume.personal_details, None)
}

/// Heading, rule, then body.
fn ruled_section(kind: SectionKind, title: &str, body: Vec<Block>) -> Block {
    let mut children = Vec::with_capacity(body.len() + 2);
    children.push(Block::heading(StyleClass::SectionTitle, title));
    children.push(Block::divider(StyleClass::HeadingRule));
    children.extend(body);
    Block::section(kind, StyleClass::Section, children)
}

fn section(resume: &Resume, kind: SectionKind) -> Block {
    match kind {
        SectionKind::Summary => ruled_section(
            kind,
            "Profile",
            vec![Block::paragraph(StyleClass::Body, resume.summary.trim())],
        ),
        SectionKind::Experience => ruled_section(
            kind,
            "Experience",
            resume.experience.iter().map(experience).collect(),
        ),
        SectionKind::Education => {
            ruled_section(kind, "Education", resume.education.iter().map(education).collect())
        }
        SectionKind::Projects => {
            ruled_section(kind, "Projects", resume.projects.iter().map(project).collect())
        }
        SectionKind::Skills => ruled_section(kind, "Skills", vec![inline_list(&resume.skills, " · ")]),
        SectionKind::Achievements => ruled_section(
            kind,
            "Recognition",
            resume.achievements.iter().map(achievement).collect(),
        ),
        SectionKind::Hobbies => {
            ruled_section(kind, "Interests", vec![inline_list(&resume.hobbies, " · ")])
        }
    }
}

fn experience(job: &ExperienceEntry) -> Block {
    let dates = date_range(&job.start_date, &job.end_date, job.current_job);
    let subtitle = join_nonempty(&[&job.company, &job.location], ", ");

    let children = [
        Some(entry_header(&job.job_title, "")),
        optional_text(&subtitle, StyleClass::ItemSubtitle),
        optional_text(&dates, StyleClass::DateLabel),
        bullet_list(&job.responsibilities, StyleClass::Bullet),
    ];
    entry(children.into_iter().flatten().collect())
}

fn education(edu: &EducationEntry) -> Block {
    let dates = date_range(&edu.start_date, &edu.end_date, false);
    let gpa = edu.gpa.trim();
    let gpa = if gpa.is_empty() { String::new() } else { format!("GPA {gpa}") };
    let subtitle = join_nonempty(&[edu.institution.as_str(), edu.location.as_str(), gpa.as_str()], ", ");

    let children = [
        Some(entry_header(&edu.degree, "")),
        optional_text(&subtitle, StyleClass::ItemSubtitle),
        optional_text(&dates, StyleClass::DateLabel),
        bullet_list(&edu.achievements, StyleClass::Bullet),
    ];
    entry(children.into_iter().flatten().collect())
}

fn project(project: &ProjectEntry) -> Block {
    let technologies = split_technologies(&project.technologies).join(" · ");

    let children = [
        Some(entry_header(&project.name, "")),
        optional_text(&project.duration, StyleClass::DateLabel),
        optional_paragraph(&project.description, StyleClass::Body),
        optional_text(&technologies, StyleClass::ItemSubtitle),
        optional_link(&project.link),
    ];
    entry(children.into_iter().flatten().collect())
}

fn achievement(item: &AchievementEntry) -> Block {
    let subtitle = join_nonempty(&[item.organization.clone(), format_month_year(&item.date)], ", ");

    let children = [
        Some(entry_header(&item.title, "")),
        optional_text(&subtitle, StyleClass::ItemSubtitle),
        optional_paragraph(&item.description, StyleClass::Body),
        optional_link(&item.link),
    ];
    entry(children.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::default_page_config;

    #[test]
    fn test_every_heading_is_followed_by_a_rule() {
        let resume = Resume {
            summary: "Quiet craft.".to_string(),
            skills: vec!["Typography".to_string(), "Editing".to_string()],
            hobbies: vec!["Ceramics".to_string()],
            ..Resume::default()
        };
        let doc = render(&resume, &default_page_config());
        for section in doc.root.children.iter().filter(|b| b.kind == BlockKind::Section) {
            assert_eq!(section.children[0].class, StyleClass::SectionTitle);
            assert_eq!(section.children[1].class, StyleClass::HeadingRule);
        }
        assert_eq!(doc.sections().len(), 3);
    }

    #[test]
    fn test_skills_joined_with_middle_dot() {
        let resume = Resume {
            skills: vec!["Typography".to_string(), "Editing".to_string()],
            ..Resume::default()
        };
        let doc = render(&resume, &default_page_config());
        assert_eq!(doc.texts_with_class(StyleClass::InlineList), vec!["Typography · Editing"]);
    }

    #[test]
    fn test_dates_sit_below_the_title() {
        let resume = Resume {
            experience: vec![ExperienceEntry {
                job_title: "Editor".to_string(),
                start_date: "2020-02".to_string(),
                current_job: true,
                ..ExperienceEntry::default()
            }],
            ..Resume::default()
        };
        let doc = render(&resume, &default_page_config());
        assert_eq!(doc.texts_with_class(StyleClass::DateLabel), vec!["February 2020 - Present"]);
    }
}

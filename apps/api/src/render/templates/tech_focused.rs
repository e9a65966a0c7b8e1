//! Tech Focused: monospace headings, categorized skills up front, and an
//! accent bar down the side of every entry.

use tracing::debug;

use crate::content::dates::{date_range, format_month_year};
use crate::content::skills::categorize_skills;
use crate::content::text::split_technologies;
use crate::layout::font_metrics::PageConfig;
use crate::models::{AchievementEntry, EducationEntry, ExperienceEntry, ProjectEntry, Resume, SectionKind};
use crate::render::common::{
    badge_row, bullet_list, entry, entry_header, header_block, inline_list, join_nonempty,
    optional_link, optional_paragraph, optional_text, titled_section,
};
use crate::render::document::{Block, BlockKind, DocumentTree};
use crate::render::registry::TemplateId;
use crate::render::style::StyleClass;

const ORDER: [SectionKind; 7] = [
    SectionKind::Summary,
    SectionKind::Skills,
    SectionKind::Experience,
    SectionKind::Projects,
    SectionKind::Education,
    SectionKind::Achievements,
    SectionKind::Hobbies,
];

pub fn render(resume: &Resume, page: &PageConfig) -> DocumentTree {
    debug!(template = "tech-focused", skills = resume.skills.len(), "Rendering document");

    let mut blocks: Vec<Block> = header(resume).into_iter().collect();
    for kind in ORDER {
        if resume.has_section(kind) {
            blocks.push(section(resume, kind));
        }
    }

    DocumentTree::new(TemplateId::TechFocused, page, None, blocks)
}

fn header(resume: &Resume) -> Option<Block> {
    header_block(&resume.personal_details, Some("/"))
}

fn section(resume: &Resume, kind: SectionKind) -> Block {
    match kind {
        SectionKind::Summary => titled_section(
            kind,
            "About",
            vec![Block::paragraph(StyleClass::Body, resume.summary.trim())],
        ),
        SectionKind::Skills => titled_section(kind, "Technical Skills", skill_groups(&resume.skills)),
        SectionKind::Experience => titled_section(
            kind,
            "Experience",
            resume.experience.iter().map(experience).collect(),
        ),
        SectionKind::Projects => {
            titled_section(kind, "Projects", resume.projects.iter().map(project).collect())
        }
        SectionKind::Education => {
            titled_section(kind, "Education", resume.education.iter().map(education).collect())
        }
        SectionKind::Achievements => titled_section(
            kind,
            "Achievements",
            resume.achievements.iter().map(achievement).collect(),
        ),
        SectionKind::Hobbies => {
            titled_section(kind, "Interests", vec![inline_list(&resume.hobbies, " / ")])
        }
    }
}

/// One labelled tag row per non-empty category, in category order.
fn skill_groups(skills: &[String]) -> Vec<Block> {
    categorize_skills(skills)
        .into_iter()
        .filter_map(|(category, members)| {
            let tags = badge_row(members, StyleClass::TagRow, StyleClass::Tag)?;
            Some(Block::container(
                BlockKind::Group,
                StyleClass::SkillGroup,
                vec![Block::text(StyleClass::SkillLabel, category.label()), tags],
            ))
        })
        .collect()
}

fn accented(children: [Option<Block>; 4]) -> Block {
    let content = children.into_iter().flatten().collect();
    entry(vec![Block::container(BlockKind::AccentBar, StyleClass::AccentBar, content)])
}

fn experience(job: &ExperienceEntry) -> Block {
    let dates = date_range(&job.start_date, &job.end_date, job.current_job);
    let subtitle = join_nonempty(&[&job.company, &job.location], " @ ");

    accented([
        Some(entry_header(&job.job_title, &dates)),
        optional_text(&subtitle, StyleClass::ItemSubtitle),
        bullet_list(&job.responsibilities, StyleClass::Bullet),
        None,
    ])
}

fn project(project: &ProjectEntry) -> Block {
    accented([
        Some(entry_header(&project.name, &project.duration)),
        optional_paragraph(&project.description, StyleClass::Body),
        badge_row(
            split_technologies(&project.technologies),
            StyleClass::TagRow,
            StyleClass::Tag,
        ),
        optional_link(&project.link),
    ])
}

fn education(edu: &EducationEntry) -> Block {
    let dates = date_range(&edu.start_date, &edu.end_date, false);
    let gpa = edu.gpa.trim();
    let subtitle = if gpa.is_empty() {
        join_nonempty(&[&edu.institution, &edu.location], ", ")
    } else {
        let gpa = format!("GPA {gpa}");
        join_nonempty(&[edu.institution.as_str(), edu.location.as_str(), gpa.as_str()], ", ")
    };

    accented([
        Some(entry_header(&edu.degree, &dates)),
        optional_text(&subtitle, StyleClass::ItemSubtitle),
        bullet_list(&edu.achievements, StyleClass::Bullet),
        None,
    ])
}

fn achievement(item: &AchievementEntry) -> Block {
    accented([
        Some(entry_header(&item.title, &format_month_year(&item.date))),
        optional_text(&item.organization, StyleClass::ItemSubtitle),
        optional_paragraph(&item.description, StyleClass::Body),
        optional_link(&item.link),
    ])
}

//! Fresh Graduate: education first, with badges and highlighted academic
//! achievements for résumés that are light on work history.

use tracing::debug;

use crate::content::dates::{date_range, format_month_year};
use crate::content::text::split_technologies;
use crate::layout::font_metrics::PageConfig;
use crate::models::{AchievementEntry, EducationEntry, ExperienceEntry, ProjectEntry, Resume, SectionKind};
use crate::render::common::{
    badge_row, bullet_list, entry, entry_header, header_block, join_nonempty,
    optional_link, optional_paragraph, optional_text, titled_section,
};
use crate::render::document::{Block, BlockKind, DocumentTree};
use crate::render::registry::TemplateId;
use crate::render::style::StyleClass;

const ORDER: [SectionKind; 7] = [
    SectionKind::Summary,
    SectionKind::Education,
    SectionKind::Projects,
    SectionKind::Experience,
    SectionKind::Skills,
    SectionKind::Achievements,
    SectionKind::Hobbies,
];

pub fn render(resume: &Resume, page: &PageConfig) -> DocumentTree {
    debug!(template = "fresh-graduate", education = resume.education.len(), "Rendering document");

    let mut blocks: Vec<Block> = header(resume).into_iter().collect();
    for kind in ORDER {
        if resume.has_section(kind) {
            blocks.push(section(resume, kind));
        }
    }

    DocumentTree::new(TemplateId::FreshGraduate, page, None, blocks)
}

fn header(resume: &Resume) -> Option<Block> {
    header_block(&resume.personal_details, None)
}

fn section(resume: &Resume, kind: SectionKind) -> Block {
    match kind {
        SectionKind::Summary => titled_section(
            kind,
            "About Me",
            vec![Block::paragraph(StyleClass::Body, resume.summary.trim())],
        ),
        SectionKind::Education => {
            titled_section(kind, "Education", resume.education.iter().map(education).collect())
        }
        SectionKind::Projects => titled_section(
            kind,
            "Academic & Personal Projects",
            resume.projects.iter().map(project).collect(),
        ),
        SectionKind::Experience => titled_section(
            kind,
            "Experience",
            resume.experience.iter().map(experience).collect(),
        ),
        SectionKind::Skills => titled_section(
            kind,
            "Skills",
            badges(&resume.skills).into_iter().collect(),
        ),
        SectionKind::Achievements => titled_section(
            kind,
            "Achievements & Awards",
            resume.achievements.iter().map(achievement).collect(),
        ),
        SectionKind::Hobbies => titled_section(
            kind,
            "Hobbies & Interests",
            badges(&resume.hobbies).into_iter().collect(),
        ),
    }
}

fn badges(labels: &[String]) -> Option<Block> {
    badge_row(labels.iter().map(String::as_str), StyleClass::BadgeRow, StyleClass::Badge)
}

fn education(edu: &EducationEntry) -> Block {
    let dates = date_range(&edu.start_date, &edu.end_date, false);
    let subtitle = join_nonempty(&[&edu.institution, &edu.location], ", ");
    let gpa = edu.gpa.trim();

    let children = [
        Some(entry_header(&edu.degree, &dates)),
        optional_text(&subtitle, StyleClass::ItemSubtitle),
        (!gpa.is_empty()).then(|| {
            Block::container(
                BlockKind::Row,
                StyleClass::BadgeRow,
                vec![Block::badge(StyleClass::Badge, format!("GPA: {gpa}"))],
            )
        }),
        bullet_list(&edu.achievements, StyleClass::Highlight),
    ];
    entry(children.into_iter().flatten().collect())
}

fn project(project: &ProjectEntry) -> Block {
    let children = [
        Some(entry_header(&project.name, &project.duration)),
        optional_paragraph(&project.description, StyleClass::Body),
        badge_row(
            split_technologies(&project.technologies),
            StyleClass::TagRow,
            StyleClass::Tag,
        ),
        optional_link(&project.link),
    ];
    entry(children.into_iter().flatten().collect())
}

fn experience(job: &ExperienceEntry) -> Block {
    let dates = date_range(&job.start_date, &job.end_date, job.current_job);
    let subtitle = join_nonempty(&[&job.company, &job.location], ", ");

    let children = [
        Some(entry_header(&job.job_title, &dates)),
        optional_text(&subtitle, StyleClass::ItemSubtitle),
        bullet_list(&job.responsibilities, StyleClass::Bullet),
    ];
    entry(children.into_iter().flatten().collect())
}

fn achievement(item: &AchievementEntry) -> Block {
    let children = [
        Some(entry_header(&item.title, &format_month_year(&item.date))),
        optional_text(&item.organization, StyleClass::ItemSubtitle),
        optional_paragraph(&item.description, StyleClass::Body),
        optional_link(&item.link),
    ];
    entry(children.into_iter().flatten().collect())
}

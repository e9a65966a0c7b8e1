//! Modern Professional: neutral corporate layout.
//!
//! The only variant that adapts to content: the Layout Scale Calculator picks
//! its spacing tier and font table, and the matching precomputed sheet is
//! attached to the tree.

use tracing::debug;

use crate::content::dates::{date_range, format_month_year};
use crate::content::text::split_technologies;
use crate::layout::font_metrics::PageConfig;
use crate::layout::scale::compute_scale;
use crate::models::{AchievementEntry, EducationEntry, ExperienceEntry, ProjectEntry, Resume, SectionKind};
use crate::render::common::{
    bullet_list, entry, entry_header, header_block, inline_list, join_nonempty,
    optional_link, optional_paragraph, optional_text, titled_section,
};
use crate::render::document::{Block, DocumentTree};
use crate::render::registry::TemplateId;
use crate::render::style::StyleClass;

const ORDER: [SectionKind; 7] = [
    SectionKind::Summary,
    SectionKind::Experience,
    SectionKind::Projects,
    SectionKind::Education,
    SectionKind::Skills,
    SectionKind::Achievements,
    SectionKind::Hobbies,
];

pub fn render(resume: &Resume, page: &PageConfig) -> DocumentTree {
    let scale = compute_scale(resume);
    debug!(
        template = "modern-professional",
        sections = scale.section_count,
        items = scale.total_items,
        density = ?scale.density,
        "Rendering document"
    );

    let mut blocks: Vec<Block> = header(resume).into_iter().collect();
    blocks.extend(
        ORDER
            .into_iter()
            .filter(|kind| resume.has_section(*kind))
            .map(|kind| section(resume, kind)),
    );

    DocumentTree::new(TemplateId::ModernProfessional, page, Some(scale), blocks)
}

fn header(resume: &Resume) -> Option<Block> {
    header_block(&resume.personal_details, None)
}

fn section(resume: &Resume, kind: SectionKind) -> Block {
    match kind {
        SectionKind::Summary => titled_section(
            kind,
            "Professional Summary",
            vec![Block::paragraph(StyleClass::Body, resume.summary.trim())],
        ),
        SectionKind::Experience => titled_section(
            kind,
            "Work Experience",
            resume.experience.iter().map(experience).collect(),
        ),
        SectionKind::Projects => {
            titled_section(kind, "Projects", resume.projects.iter().map(project).collect())
        }
        SectionKind::Education => {
            titled_section(kind, "Education", resume.education.iter().map(education).collect())
        }
        SectionKind::Skills => {
            titled_section(kind, "Skills", vec![inline_list(&resume.skills, ", ")])
        }
        SectionKind::Achievements => titled_section(
            kind,
            "Achievements",
            resume.achievements.iter().map(achievement).collect(),
        ),
        SectionKind::Hobbies => {
            titled_section(kind, "Interests", vec![inline_list(&resume.hobbies, ", ")])
        }
    }
}

fn experience(job: &ExperienceEntry) -> Block {
    let dates = date_range(&job.start_date, &job.end_date, job.current_job);
    let subtitle = join_nonempty(&[&job.company, &job.location], " · ");

    let children = [
        Some(entry_header(&job.job_title, &dates)),
        optional_text(&subtitle, StyleClass::ItemSubtitle),
        bullet_list(&job.responsibilities, StyleClass::Bullet),
    ];
    entry(children.into_iter().flatten().collect())
}

fn project(project: &ProjectEntry) -> Block {
    let technologies = split_technologies(&project.technologies).join(", ");

    let children = [
        Some(entry_header(&project.name, &project.duration)),
        optional_paragraph(&project.description, StyleClass::Body),
        (!technologies.is_empty())
            .then(|| Block::text(StyleClass::ItemSubtitle, format!("Technologies: {technologies}"))),
        optional_link(&project.link),
    ];
    entry(children.into_iter().flatten().collect())
}

fn education(edu: &EducationEntry) -> Block {
    let dates = date_range(&edu.start_date, &edu.end_date, false);
    let subtitle = join_nonempty(&[&edu.institution, &edu.location], " · ");
    let gpa = edu.gpa.trim();

    let children = [
        Some(entry_header(&edu.degree, &dates)),
        optional_text(&subtitle, StyleClass::ItemSubtitle),
        (!gpa.is_empty()).then(|| Block::text(StyleClass::Body, format!("GPA: {gpa}"))),
        bullet_list(&edu.achievements, StyleClass::Bullet),
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

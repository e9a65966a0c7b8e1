//! Classic Executive: fixed serif styling with a formal, letter-like header.

use tracing::debug;

use crate::content::dates::{date_range, format_month_year};
use crate::content::text::split_technologies;
use crate::layout::font_metrics::PageConfig;
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
    SectionKind::Education,
    SectionKind::Projects,
    SectionKind::Achievements,
    SectionKind::Skills,
    SectionKind::Hobbies,
];

pub fn render(resume: &Resume, page: &PageConfig) -> DocumentTree {
    debug!(template = "classic-executive", "Rendering document");

    let mut blocks: Vec<Block> = header(resume).into_iter().collect();
    for kind in ORDER {
        if resume.has_section(kind) {
            blocks.push(section(resume, kind));
        }
    }

    DocumentTree::new(TemplateId::ClassicExecutive, page, None, blocks)
}

fn header(resume: &Resume) -> Option<Block> {
    let mut header = header_block(&resume.personal_details, Some("|"))?;
    header.children.push(Block::divider(StyleClass::HeaderRule));
    Some(header)
}

fn section(resume: &Resume, kind: SectionKind) -> Block {
    match kind {
        SectionKind::Summary => titled_section(
            kind,
            "Executive Profile",
            vec![Block::paragraph(StyleClass::Body, resume.summary.trim())],
        ),
        SectionKind::Experience => titled_section(
            kind,
            "Professional Experience",
            resume.experience.iter().map(experience).collect(),
        ),
        SectionKind::Education => {
            titled_section(kind, "Education", resume.education.iter().map(education).collect())
        }
        SectionKind::Projects => titled_section(
            kind,
            "Selected Projects",
            resume.projects.iter().map(project).collect(),
        ),
        SectionKind::Achievements => titled_section(
            kind,
            "Honors & Awards",
            resume.achievements.iter().map(achievement).collect(),
        ),
        SectionKind::Skills => titled_section(
            kind,
            "Core Competencies",
            vec![inline_list(&resume.skills, " • ")],
        ),
        SectionKind::Hobbies => titled_section(
            kind,
            "Personal Interests",
            vec![inline_list(&resume.hobbies, ", ")],
        ),
    }
}

// Executive entries lead with the organisation; the role sits underneath in italics.

fn experience(job: &ExperienceEntry) -> Block {
    let dates = date_range(&job.start_date, &job.end_date, job.current_job);
    let org = join_nonempty(&[&job.company, &job.location], ", ");

    let children = [
        Some(entry_header(&org, &dates)),
        optional_text(&job.job_title, StyleClass::ItemSubtitle),
        bullet_list(&job.responsibilities, StyleClass::Bullet),
    ];
    entry(children.into_iter().flatten().collect())
}

fn education(edu: &EducationEntry) -> Block {
    let dates = date_range(&edu.start_date, &edu.end_date, false);
    let org = join_nonempty(&[&edu.institution, &edu.location], ", ");
    let degree = match edu.gpa.trim() {
        "" => edu.degree.trim().to_string(),
        gpa => {
            let gpa = format!("GPA {gpa}");
            join_nonempty(&[edu.degree.as_str(), gpa.as_str()], ", ")
        }
    };

    let children = [
        Some(entry_header(&org, &dates)),
        optional_text(&degree, StyleClass::ItemSubtitle),
        bullet_list(&edu.achievements, StyleClass::Bullet),
    ];
    entry(children.into_iter().flatten().collect())
}

fn project(project: &ProjectEntry) -> Block {
    let technologies = split_technologies(&project.technologies).join(", ");

    let children = [
        Some(entry_header(&project.name, &project.duration)),
        optional_text(&technologies, StyleClass::ItemSubtitle),
        optional_paragraph(&project.description, StyleClass::Body),
        optional_link(&project.link),
    ];
    entry(children.into_iter().flatten().collect())
}

fn achievement(item: &AchievementEntry) -> Block {
    let title = join_nonempty(&[&item.title, &item.organization], ", ");

    let children = [
        Some(entry_header(&title, &format_month_year(&item.date))),
        optional_paragraph(&item.description, StyleClass::Body),
        optional_link(&item.link),
    ];
    entry(children.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::default_page_config;
    use crate::models::PersonalDetails;

    #[test]
    fn test_header_has_rule_and_separated_contacts() {
        let resume = Resume {
            personal_details: PersonalDetails {
                full_name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                phone: "+44 20 7946 0000".to_string(),
                ..PersonalDetails::default()
            },
            ..Resume::default()
        };
        let doc = render(&resume, &default_page_config());
        assert_eq!(doc.texts_with_class(StyleClass::ContactSeparator), vec!["|"]);
        let header = &doc.root.children[0];
        assert_eq!(header.children.last().map(|b| b.class), Some(StyleClass::HeaderRule));
    }

    #[test]
    fn test_skills_render_as_competency_line() {
        let resume = Resume {
            skills: vec!["Strategy".to_string(), "M&A".to_string(), "P&L".to_string()],
            ..Resume::default()
        };
        let doc = render(&resume, &default_page_config());
        assert_eq!(doc.headings(), vec!["Core Competencies"]);
        assert_eq!(
            doc.texts_with_class(StyleClass::InlineList),
            vec!["Strategy • M&A • P&L"]
        );
    }

    #[test]
    fn test_education_folds_gpa_into_degree_line() {
        let resume = Resume {
            education: vec![EducationEntry {
                degree: "MBA".to_string(),
                institution: "INSEAD".to_string(),
                gpa: "3.9".to_string(),
                ..EducationEntry::default()
            }],
            ..Resume::default()
        };
        let doc = render(&resume, &default_page_config());
        assert_eq!(doc.texts_with_class(StyleClass::ItemSubtitle), vec!["MBA, GPA 3.9"]);
    }
}

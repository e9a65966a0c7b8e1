pub mod resume;

pub use resume::{
    AchievementEntry, EducationEntry, ExperienceEntry, PersonalDetails, ProjectEntry, Resume,
    SectionKind,
};

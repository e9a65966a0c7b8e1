//! Skill Categorizer: keyword buckets for the tech-focused template.
//!
//! First match wins, checked in category order: languages, then frameworks,
//! then tools. A keyword matches when it occurs anywhere in the lower-cased
//! skill, so `"react"` claims `"ReactJS"` and `"sql"` claims `"PostgreSQL"`
//! before the tool table is consulted. Keywords shorter than three characters
//! would match inside ordinary words and are left out of the tables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Output categories. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkillCategory {
    #[serde(rename = "Programming Languages")]
    ProgrammingLanguages,
    #[serde(rename = "Frameworks & Libraries")]
    FrameworksLibraries,
    #[serde(rename = "Tools & Technologies")]
    ToolsTechnologies,
    #[serde(rename = "Other Skills")]
    Other,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::ProgrammingLanguages,
        SkillCategory::FrameworksLibraries,
        SkillCategory::ToolsTechnologies,
        SkillCategory::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::ProgrammingLanguages => "Programming Languages",
            SkillCategory::FrameworksLibraries => "Frameworks & Libraries",
            SkillCategory::ToolsTechnologies => "Tools & Technologies",
            SkillCategory::Other => "Other Skills",
        }
    }

    fn keywords(self) -> &'static [&'static str] {
        match self {
            SkillCategory::ProgrammingLanguages => LANGUAGE_KEYWORDS,
            SkillCategory::FrameworksLibraries => FRAMEWORK_KEYWORDS,
            SkillCategory::ToolsTechnologies => TOOL_KEYWORDS,
            SkillCategory::Other => &[],
        }
    }
}

const LANGUAGE_KEYWORDS: &[&str] = &[
    "javascript", "typescript", "python", "java", "c++", "c#", "ruby", "golang",
    "rust", "php", "swift", "kotlin", "scala", "matlab", "perl", "dart", "elixir",
    "haskell", "lua", "objective-c", "sql", "html", "css", "bash", "shell", "powershell",
    "clojure", "erlang", "f#", "julia", "solidity", "zig",
];

const FRAMEWORK_KEYWORDS: &[&str] = &[
    "react", "angular", "vue", "svelte", "next.js", "nextjs", "nuxt", "node.js", "nodejs",
    "express", "django", "flask", "fastapi", "spring", "spring boot", "rails", ".net",
    "asp.net", "laravel", "jquery", "bootstrap", "tailwind", "redux", "graphql",
    "tensorflow", "pytorch", "keras", "scikit-learn", "pandas", "numpy", "flutter",
    "react native", "tokio", "axum", "actix", "hibernate", "junit", "jest",
];

const TOOL_KEYWORDS: &[&str] = &[
    "docker", "kubernetes", "k8s", "git", "github", "gitlab", "jenkins", "aws", "azure",
    "gcp", "google cloud", "terraform", "ansible", "linux", "mysql", "postgresql",
    "postgres", "mongodb", "redis", "kafka", "elasticsearch", "nginx", "jira", "figma",
    "webpack", "vite", "ci/cd", "firebase", "heroku", "vercel", "grafana", "prometheus",
    "sqlite", "dynamodb", "rabbitmq", "postman", "vs code",
];

/// Ordered map from category to the skills placed in it.
pub type CategorizedSkills = BTreeMap<SkillCategory, Vec<String>>;

/// Buckets skills into the four categories. All four keys are always present;
/// skills keep their original casing and relative order.
pub fn categorize_skills(skills: &[String]) -> CategorizedSkills {
    let mut out: CategorizedSkills = SkillCategory::ALL.iter().map(|c| (*c, Vec::new())).collect();
    for skill in skills {
        out.entry(classify_skill(skill)).or_default().push(skill.clone());
    }
    out
}

/// Returns the first category whose keyword set matches `skill`.
pub fn classify_skill(skill: &str) -> SkillCategory {
    let lower = skill.to_lowercase();
    SkillCategory::ALL
        .into_iter()
        .find(|c| c.keywords().iter().any(|kw| lower.contains(kw)))
        .unwrap_or(SkillCategory::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_one_skill_per_category() {
        let out = categorize_skills(&strings(&["Python", "React", "Docker", "Leadership"]));
        assert_eq!(out[&SkillCategory::ProgrammingLanguages], strings(&["Python"]));
        assert_eq!(out[&SkillCategory::FrameworksLibraries], strings(&["React"]));
        assert_eq!(out[&SkillCategory::ToolsTechnologies], strings(&["Docker"]));
        assert_eq!(out[&SkillCategory::Other], strings(&["Leadership"]));
    }

    #[test]
    fn test_all_categories_present_and_ordered() {
        let out = categorize_skills(&[]);
        let keys: Vec<SkillCategory> = out.keys().copied().collect();
        assert_eq!(keys, SkillCategory::ALL.to_vec());
        assert!(out.values().all(Vec::is_empty));
    }

    #[test]
    fn test_language_precedence_over_framework() {
        // "Java Spring" hits both "java" and "spring"; languages are checked first.
        assert_eq!(classify_skill("Java Spring"), SkillCategory::ProgrammingLanguages);
    }

    #[test]
    fn test_keywords_match_inside_compound_names() {
        assert_eq!(classify_skill("ReactJS"), SkillCategory::FrameworksLibraries);
        assert_eq!(classify_skill("VueJS"), SkillCategory::FrameworksLibraries);
        assert_eq!(classify_skill("Dockerfile"), SkillCategory::ToolsTechnologies);
        assert_eq!(classify_skill("TypeScript5"), SkillCategory::ProgrammingLanguages);
        assert_eq!(classify_skill("C++17"), SkillCategory::ProgrammingLanguages);
        assert_eq!(classify_skill("CI/CD pipelines"), SkillCategory::ToolsTechnologies);
    }

    #[test]
    fn test_substring_hit_in_earlier_category_wins() {
        // "postgresql" is a tool keyword, but "sql" is a language keyword and languages go first.
        assert_eq!(classify_skill("PostgreSQL"), SkillCategory::ProgrammingLanguages);
        // "node.js" is a framework; "javascript" is not a substring of it.
        assert_eq!(classify_skill("Node.js"), SkillCategory::FrameworksLibraries);
    }

    #[test]
    fn test_short_words_do_not_trigger_languages() {
        assert_eq!(classify_skill("Leadership"), SkillCategory::Other);
        assert_eq!(classify_skill("Negotiation"), SkillCategory::Other);
        assert_eq!(classify_skill("Public Speaking"), SkillCategory::Other);
    }

    #[test]
    fn test_casing_and_order_preserved() {
        let input = strings(&["rust", "Kubernetes", "TypeScript", "public speaking", "AWS"]);
        let out = categorize_skills(&input);
        assert_eq!(out[&SkillCategory::ProgrammingLanguages], strings(&["rust", "TypeScript"]));
        assert_eq!(out[&SkillCategory::ToolsTechnologies], strings(&["Kubernetes", "AWS"]));
    }

    #[test]
    fn test_every_skill_lands_exactly_once() {
        let input = strings(&[
            "Go", "Django", "Terraform", "Mentoring", "Go", "SQL", "pandas", "Negotiation",
        ]);
        let out = categorize_skills(&input);
        let total: usize = out.values().map(Vec::len).sum();
        assert_eq!(total, input.len());
        for skill in &input {
            let hits = out.values().filter(|v| v.contains(skill)).count();
            assert_eq!(hits, 1, "{skill} should be in exactly one category");
        }
    }

    #[test]
    fn test_duplicates_are_kept() {
        let out = categorize_skills(&strings(&["Rust", "Rust"]));
        assert_eq!(out[&SkillCategory::ProgrammingLanguages].len(), 2);
    }

    #[test]
    fn test_serializes_with_display_labels() {
        let out = categorize_skills(&strings(&["Python"]));
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["Programming Languages"][0], "Python");
        assert!(json.get("Other Skills").is_some());
    }
}

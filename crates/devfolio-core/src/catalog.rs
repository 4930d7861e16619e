//! In-memory project showcase.

use serde::{Deserialize, Serialize};

/// Shown on cards and in the detail dialog when a project has no image.
pub const FALLBACK_IMAGE: &str = "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub tech_stack: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    pub fn image_or_fallback(&self) -> &str {
        self.image.as_deref().unwrap_or(FALLBACK_IMAGE)
    }
}

/// A project without an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub tech_stack: Vec<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub featured: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Project name is required")]
    NameRequired,
    #[error("Description is required")]
    DescriptionRequired,
    #[error("Technologies are required")]
    TechStackRequired,
}

/// Raw text of the upload form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub tech_stack: String,
    pub github_url: String,
    pub demo_url: String,
    pub featured: bool,
}

/// Splits comma separated input, trimming entries and dropping empty ones.
pub fn parse_tech_stack(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl ProjectDraft {
    pub fn to_new_project(&self) -> Result<NewProject, CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::NameRequired);
        }
        if self.description.trim().is_empty() {
            return Err(CatalogError::DescriptionRequired);
        }
        // Only blank input is rejected; separators alone give an empty tag list.
        if self.tech_stack.trim().is_empty() {
            return Err(CatalogError::TechStackRequired);
        }
        let tech_stack = parse_tech_stack(&self.tech_stack);
        Ok(NewProject {
            name: self.name.clone(),
            description: self.description.clone(),
            image: optional(&self.image_url),
            tech_stack,
            github_url: optional(&self.github_url),
            demo_url: optional(&self.demo_url),
            featured: self.featured,
        })
    }
}

/// Source of wall-clock milliseconds for id generation.
pub trait Clock {
    fn now_millis(&self) -> u64;
}

/// Ordered list of projects. Append only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
}

impl Default for ProjectCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ProjectCatalog {
    pub fn empty() -> Self {
        Self { projects: Vec::new() }
    }

    pub fn with_defaults() -> Self {
        Self {
            projects: default_projects(),
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Appends `project` under a fresh `project-<millis>` id and returns that id.
    ///
    /// A numeric suffix is added when the id is already taken.
    pub fn add(&mut self, project: NewProject, clock: &dyn Clock) -> String {
        let base = format!("project-{}", clock.now_millis());
        let mut id = base.clone();
        let mut n = 1;
        while self.get(&id).is_some() {
            id = format!("{base}-{n}");
            n += 1;
        }

        tracing::info!(%id, name = %project.name, "project added");
        self.projects.push(Project {
            id: id.clone(),
            name: project.name,
            description: project.description,
            image: project.image,
            tech_stack: project.tech_stack,
            github_url: project.github_url,
            demo_url: project.demo_url,
            featured: project.featured,
        });
        id
    }
}

fn stack(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn default_projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".into(),
            name: "Secure Share (Digital file storage)".into(),
            description: "A full-stack digital wallet application that enables users to securely \
                upload, organize, and share their personal files and documents with others. It \
                offers category-based storage, robust sharing controls, and integrates modern \
                security practices to ensure privacy and data protection."
                .into(),
            image: Some("./images/secure-share2.jpg".into()),
            tech_stack: stack(&["React", "Node.js", "Express.js", "MongoDB", "Clerk", "Tailwind CSS"]),
            github_url: Some("https://github.com/ravi1718/secure-share".into()),
            demo_url: None,
            featured: true,
        },
        Project {
            id: "2".into(),
            name: "Career-Guidance".into(),
            description: "A fully responsive career-guidance platform where students can view \
                their favourite colleges based on their results and can prepare for mock \
                Aptitude Tests and colleges can add Aptitude questions and evaluate them."
                .into(),
            image: Some("./images/career-guidance.jpg".into()),
            tech_stack: stack(&["React", "Tailwind CSS", "Node.js", "Express.js", "MongoDB"]),
            github_url: Some("https://github.com/ravi1718/career-guidance".into()),
            demo_url: None,
            featured: true,
        },
        Project {
            id: "3".into(),
            name: "Constructive Hives".into(),
            description: "A MERN stack-based solution tailored for the construction industry, \
                designed to provide users with real-time and accurate pricing of construction \
                materials. The platform also features an engineer portfolio system, allowing \
                clients to view past projects, assess credibility, and make informed decisions."
                .into(),
            image: Some("https://images.unsplash.com/photo-1515162305280-7dc8e122f1ee".into()),
            tech_stack: stack(&["React", "Tailwind CSS", "Node.js", "Express.js", "MongoDB"]),
            github_url: Some("https://github.com/ravi1718/career-guidance".into()),
            demo_url: None,
            featured: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct FixedClock(Cell<u64>);

    impl Clock for FixedClock {
        fn now_millis(&self) -> u64 {
            self.0.get()
        }
    }

    fn draft() -> ProjectDraft {
        ProjectDraft {
            name: "X".into(),
            description: "d".into(),
            tech_stack: "Rust, , Go ".into(),
            ..ProjectDraft::default()
        }
    }

    #[test]
    fn test_defaults_have_unique_ids() {
        let catalog = ProjectCatalog::default();
        let ids: Vec<_> = catalog.projects().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
        assert_eq!(catalog.get("3").unwrap().name, "Constructive Hives");
    }

    #[test]
    fn test_parse_tech_stack() {
        assert_eq!(parse_tech_stack("Rust, , Go "), ["Rust", "Go"]);
        assert_eq!(parse_tech_stack(" ,, "), Vec::<String>::new());
        assert_eq!(parse_tech_stack("React"), ["React"]);
    }

    #[test]
    fn test_draft_omits_blank_optionals() {
        let project = draft().to_new_project().unwrap();
        assert_eq!(project.tech_stack, ["Rust", "Go"]);
        assert_eq!(project.image, None);
        assert_eq!(project.github_url, None);
        assert_eq!(project.demo_url, None);
        assert!(!project.featured);

        let with_links = ProjectDraft {
            github_url: " https://github.com/x/y ".into(),
            featured: true,
            ..draft()
        }
        .to_new_project()
        .unwrap();
        assert_eq!(with_links.github_url.as_deref(), Some("https://github.com/x/y"));
        assert!(with_links.featured);
    }

    #[test]
    fn test_draft_requires_fields() {
        let no_name = ProjectDraft {
            name: " ".into(),
            ..draft()
        };
        assert_eq!(no_name.to_new_project(), Err(CatalogError::NameRequired));

        let no_description = ProjectDraft {
            description: String::new(),
            ..draft()
        };
        assert_eq!(
            no_description.to_new_project(),
            Err(CatalogError::DescriptionRequired)
        );

        let no_stack = ProjectDraft {
            tech_stack: "  ".into(),
            ..draft()
        };
        assert_eq!(no_stack.to_new_project(), Err(CatalogError::TechStackRequired));
    }

    #[test]
    fn test_separator_only_stack_gives_no_tags() {
        let project = ProjectDraft {
            tech_stack: " , ".into(),
            ..draft()
        }
        .to_new_project()
        .unwrap();
        assert!(project.tech_stack.is_empty());
    }

    #[test]
    fn test_add_appends_with_time_id() {
        let clock = FixedClock(Cell::new(1_700_000_000_000));
        let mut catalog = ProjectCatalog::default();
        let id = catalog.add(draft().to_new_project().unwrap(), &clock);

        assert_eq!(id, "project-1700000000000");
        assert_eq!(catalog.len(), 4);
        let last = catalog.projects().last().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(last.name, "X");
        assert_eq!(last.tech_stack, ["Rust", "Go"]);
    }

    #[test]
    fn test_same_millisecond_ids_are_disambiguated() {
        let clock = FixedClock(Cell::new(42));
        let mut catalog = ProjectCatalog::empty();
        let a = catalog.add(draft().to_new_project().unwrap(), &clock);
        let b = catalog.add(draft().to_new_project().unwrap(), &clock);
        let c = catalog.add(draft().to_new_project().unwrap(), &clock);
        clock.0.set(43);
        let d = catalog.add(draft().to_new_project().unwrap(), &clock);

        assert_eq!([a, b, c, d], ["project-42", "project-42-1", "project-42-2", "project-43"]);
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_fallback_image() {
        let catalog = ProjectCatalog::default();
        assert_eq!(
            catalog.get("1").unwrap().image_or_fallback(),
            "./images/secure-share2.jpg"
        );
        let mut catalog = ProjectCatalog::empty();
        let id = catalog.add(
            draft().to_new_project().unwrap(),
            &FixedClock(Cell::new(1)),
        );
        assert_eq!(catalog.get(&id).unwrap().image_or_fallback(), FALLBACK_IMAGE);
    }

    #[test]
    fn test_project_json_skips_missing_links() {
        let catalog = ProjectCatalog::default();
        let json = serde_json::to_value(catalog.get("2").unwrap()).unwrap();
        assert_eq!(json["tech_stack"][0], "React");
        assert!(json.get("demo_url").is_none());
    }
}

//! Static profile content rendered by the page sections.

use std::fmt;

pub const OWNER_NAME: &str = "Ravitej C Neeli";
pub const SITE_NAME: &str = "DevPortfolio";
pub const ROLE_BADGE: &str = "Full Stack Software Engineer";
pub const TAGLINE: &str = "I create exceptional digital experiences with clean, efficient, and \
    accessible code. Specializing in modern web technologies and user-centric applications.";
pub const FOOTER_BLURB: &str =
    "A showcase of my projects, skills and professional experience as a software engineer.";

pub const PROFILE_IMAGE: &str = "/images/portfolio_profile.jpg";
pub const RESUME_PATH: &str = "/resume.pdf";

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "I'm a passionate software engineer specializing in full-stack development. I enjoy building \
     applications that solve real-world problems and provide exceptional user experiences.",
    "My journey in tech began when I first discovered the joy of turning ideas into functional \
     applications. Since then, I've been continuously learning and improving my skills across \
     multiple technologies and frameworks.",
];

pub const ABOUT_HIGHLIGHTS: [&str; 3] = [
    "Strong focus on performance, accessibility, and clean code",
    "Experience in building scalable applications with modern frameworks",
    "Passionate about continuous learning and staying up-to-date with tech trends",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterestCard {
    pub title: &'static str,
    pub body: &'static str,
}

pub const INTERESTS: [InterestCard; 3] = [
    InterestCard {
        title: "Professional Interests",
        body: "Web development, system architecture, cloud computing, DevOps, and performance \
               optimization.",
    },
    InterestCard {
        title: "Current Focus",
        body: "Advanced React patterns, microservices architecture, Artificial Intelligence and \
               Machine Learning.",
    },
    InterestCard {
        title: "When Not Coding",
        body: "Exploring nature, reading tech blogs, contributing to open source, and continuous \
               learning.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Devops,
}

impl SkillCategory {
    pub const ALL: [Self; 3] = [Self::Frontend, Self::Backend, Self::Devops];
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Devops => "Devops",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SkillFilter {
    #[default]
    All,
    Category(SkillCategory),
}

impl SkillFilter {
    /// Filter buttons in display order.
    pub fn options() -> impl Iterator<Item = Self> {
        std::iter::once(Self::All).chain(SkillCategory::ALL.into_iter().map(Self::Category))
    }

    pub fn matches(self, skill: &Skill) -> bool {
        match self {
            Self::All => true,
            Self::Category(c) => skill.category == c,
        }
    }
}

impl fmt::Display for SkillFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Category(c) => c.fmt(f),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency percentage, `0..=100`.
    pub level: u8,
    pub category: SkillCategory,
    pub icon: &'static str,
}

const fn skill(name: &'static str, level: u8, category: SkillCategory, icon: &'static str) -> Skill {
    Skill { name, level, category, icon }
}

pub static SKILLS: [Skill; 12] = [
    skill("JavaScript", 80, SkillCategory::Frontend, "⚡"),
    skill("TypeScript", 85, SkillCategory::Frontend, "📘"),
    skill("React", 80, SkillCategory::Frontend, "⚛️"),
    skill("Node.js", 80, SkillCategory::Backend, "🟢"),
    skill("HTML/CSS", 95, SkillCategory::Frontend, "🎨"),
    skill("Python", 70, SkillCategory::Backend, "🐍"),
    skill("SQL", 70, SkillCategory::Backend, "🗄️"),
    skill("Java", 70, SkillCategory::Backend, "☕"),
    skill("Docker", 70, SkillCategory::Devops, "🐳"),
    skill("Git", 85, SkillCategory::Devops, "📋"),
    skill("GCP", 65, SkillCategory::Devops, "☁️"),
    skill("Tailwind CSS", 90, SkillCategory::Frontend, "🌊"),
];

pub const OTHER_TOOLS: [&str; 10] = [
    "Supabase", "Redux", "Next.js", "MongoDB", "Firebase", "Figma", "GitHub", "VS Code", "Webpack",
    "Nginx",
];

/// Skills passing `filter`, in declaration order.
pub fn filter_skills(filter: SkillFilter) -> Vec<&'static Skill> {
    SKILLS.iter().filter(|s| filter.matches(s)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub link: &'static str,
}

pub const EXPERIENCE: Experience = Experience {
    role: "Open-Source Contributor",
    company: "Wikimedia Foundation",
    duration: "September 2024 - Present",
    description: "Contributed to a couple of open-source projects under the Wikimedia Foundation, \
        focusing mainly on the MediaWiki software and its extensions. My contributions include bug \
        fixes and documentation improvements.",
    achievements: &[
        "Fix incorrect ucfirst/lcfirst transformations for Karakalpak alphabet",
        "Fix admin-description-item to replace item number with item ID",
        "Certified as Top-performer in the Road-to-Wiki program",
        "Successfully merged two pull requests into the main repository",
    ],
    link: "https://gerrit.wikimedia.org/r/q/owner:neeliravitej@gmail.com",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    /// Id of the target section, without the `#`.
    pub section: &'static str,
}

pub static NAV_ITEMS: [NavItem; 7] = [
    NavItem { name: "Home", section: "home" },
    NavItem { name: "About", section: "about" },
    NavItem { name: "Skills", section: "skills" },
    NavItem { name: "Experience", section: "experience" },
    NavItem { name: "Projects", section: "projects" },
    NavItem { name: "Resume", section: "resume" },
    NavItem { name: "Contact", section: "contact" },
];

/// Footer quick links, a subset of the nav.
pub fn quick_links() -> impl Iterator<Item = &'static NavItem> {
    NAV_ITEMS
        .iter()
        .filter(|n| matches!(n.section, "home" | "about" | "projects" | "contact"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Twitter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub label: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        kind: SocialKind::GitHub,
        label: "GitHub",
        url: "https://github.com/ravi1718",
    },
    SocialLink {
        kind: SocialKind::LinkedIn,
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/ravitej-neeli-612877266/",
    },
    SocialLink {
        kind: SocialKind::Twitter,
        label: "X",
        url: "https://x.com/ravitej_neeli",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: &'static str,
    pub phone: &'static str,
    pub phone_href: &'static str,
    pub location: &'static str,
    pub availability: &'static str,
}

pub const CONTACT_INFO: ContactInfo = ContactInfo {
    email: crate::config::CONTACT_EMAIL,
    phone: "+91 9353163880",
    phone_href: "tel:+919353163880",
    location: "Hubli, Karnataka",
    availability: "I'm currently available for freelance projects, Internships, and full-time \
        positions.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_all_keeps_order() {
        let all = filter_skills(SkillFilter::All);
        assert_eq!(all.len(), 12);
        assert_eq!(all[0].name, "JavaScript");
        assert_eq!(all[11].name, "Tailwind CSS");
    }

    #[test]
    fn test_filter_by_category() {
        let names = |c| -> Vec<&str> {
            filter_skills(SkillFilter::Category(c))
                .iter()
                .map(|s| s.name)
                .collect()
        };
        assert_eq!(
            names(SkillCategory::Frontend),
            ["JavaScript", "TypeScript", "React", "HTML/CSS", "Tailwind CSS"]
        );
        assert_eq!(names(SkillCategory::Backend), ["Node.js", "Python", "SQL", "Java"]);
        assert_eq!(names(SkillCategory::Devops), ["Docker", "Git", "GCP"]);
    }

    #[test]
    fn test_filter_options_and_labels() {
        let labels: Vec<String> = SkillFilter::options().map(|f| f.to_string()).collect();
        assert_eq!(labels, ["All", "Frontend", "Backend", "Devops"]);
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        assert!(SKILLS.iter().all(|s| s.level <= 100));
    }

    #[test]
    fn test_quick_links() {
        let names: Vec<&str> = quick_links().map(|n| n.name).collect();
        assert_eq!(names, ["Home", "About", "Projects", "Contact"]);
    }
}

//! Section content provider.
//!
//! The console only records which section a transcript entry shows; the body is looked up here
//! when the entry is rendered. [`PortfolioContent`] is the built-in provider and can be replaced
//! through [`crate::DesktopProvider`].

use console_contract::SectionId;
use serde::{Deserialize, Serialize};

/// Number of cells in a skill bar.
pub const PERCENTAGE_BAR_CELLS: u32 = 10;

/// Renders `[=======---] 70%` with the filled cell count rounded to the nearest cell.
pub fn percentage_bar(percentage: u8) -> String {
    let percentage = percentage.min(100);
    let filled = ((u32::from(percentage) * PERCENTAGE_BAR_CELLS + 50) / 100) as usize;
    let empty = PERCENTAGE_BAR_CELLS as usize - filled;
    format!("[{}{}] {percentage}%", "=".repeat(filled), "-".repeat(empty))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub email: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationItem {
    pub degree: String,
    pub school: String,
    pub years: String,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: String,
    pub percentage: u8,
}

impl Skill {
    pub fn bar(&self) -> String {
        percentage_bar(self.percentage)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub title: String,
    pub employer: String,
    pub years: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectItem {
    pub name: String,
    pub summary: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
}

/// Renderable body of one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SectionBody {
    Home {
        banner: String,
        profile: Profile,
    },
    About {
        paragraphs: Vec<String>,
    },
    Education {
        items: Vec<EducationItem>,
    },
    Skills {
        categories: Vec<SkillCategory>,
    },
    Experience {
        items: Vec<ExperienceItem>,
    },
    Projects {
        items: Vec<ProjectItem>,
        /// Shown when `items` is empty.
        placeholder: String,
    },
    Contact {
        lines: Vec<String>,
        links: Vec<ContactLink>,
    },
}

impl SectionBody {
    /// Section this body belongs to.
    pub fn section(&self) -> SectionId {
        match self {
            Self::Home { .. } => SectionId::Home,
            Self::About { .. } => SectionId::About,
            Self::Education { .. } => SectionId::Education,
            Self::Skills { .. } => SectionId::Skills,
            Self::Experience { .. } => SectionId::Experience,
            Self::Projects { .. } => SectionId::Projects,
            Self::Contact { .. } => SectionId::Contact,
        }
    }
}

/// Supplies the body for a section id.
pub trait SectionContentProvider {
    /// Returns the body rendered for `section`.
    fn section_body(&self, section: SectionId) -> SectionBody;
}

/// Static portfolio data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub banner: String,
    pub profile: Profile,
    pub about: Vec<String>,
    pub education: Vec<EducationItem>,
    pub skills: Vec<SkillCategory>,
    pub experience: Vec<ExperienceItem>,
    pub projects: Vec<ProjectItem>,
    pub phone: Option<String>,
    pub links: Vec<ContactLink>,
}

fn skill(name: &str, level: &str, percentage: u8) -> Skill {
    Skill {
        name: name.to_string(),
        level: level.to_string(),
        percentage,
    }
}

fn strings(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

impl Default for PortfolioContent {
    fn default() -> Self {
        Self {
            banner: strings(&[
                " ____  ___  ____  _____ _____ ___  _     ___ ___ ",
                "|  _ \\/ _ \\|  _ \\|_   _|  ___/ _ \\| |   |_ _/ _ \\",
                "| |_) | | | | |_) | | | | |_ | | | | |    | | | | |",
                "|  __/| |_| |  _ <  | | |  _|| |_| | |___ | | |_| |",
                "|_|    \\___/|_| \\_\\ |_| |_|   \\___/|_____|___\\___/",
            ])
            .join("\n"),
            profile: Profile {
                name: "Alex Developer".to_string(),
                role: "Full Stack Web Developer".to_string(),
                email: "developer@example.com".to_string(),
                location: "Remote".to_string(),
            },
            about: strings(&[
                "I build web and mobile applications end to end, from data model to pixels.",
                "Most of my work focuses on performance, clear interfaces, and code that stays easy to change.",
            ]),
            education: vec![EducationItem {
                degree: "Bachelor of Science in Computer Science".to_string(),
                school: "Example State University".to_string(),
                years: "2012 - 2016".to_string(),
                notes: strings(&["Dean's List, final two years"]),
            }],
            skills: vec![
                SkillCategory {
                    title: "Front-End".to_string(),
                    skills: vec![
                        skill("HTML/CSS", "Expert", 95),
                        skill("TypeScript", "Expert", 90),
                        skill("Rust/WASM", "Intermediate", 70),
                    ],
                },
                SkillCategory {
                    title: "Back-End".to_string(),
                    skills: vec![
                        skill("Node.js", "Advanced", 85),
                        skill("Rust", "Advanced", 80),
                    ],
                },
                SkillCategory {
                    title: "Databases".to_string(),
                    skills: vec![
                        skill("PostgreSQL", "Advanced", 80),
                        skill("SQLite", "Intermediate", 65),
                    ],
                },
                SkillCategory {
                    title: "Tools".to_string(),
                    skills: vec![skill("Git", "Advanced", 90), skill("Docker", "Basic", 50)],
                },
            ],
            experience: vec![
                ExperienceItem {
                    title: "Full Stack Web Developer".to_string(),
                    employer: "Example Corp".to_string(),
                    years: "2020 - Present".to_string(),
                    highlights: strings(&[
                        "Built and maintained customer-facing web applications.",
                        "Cut page load times through profiling and targeted rewrites.",
                        "Integrated third-party APIs and payment services.",
                    ]),
                },
                ExperienceItem {
                    title: "Freelance Developer".to_string(),
                    employer: "Self-employed".to_string(),
                    years: "2016 - 2020".to_string(),
                    highlights: strings(&[
                        "Delivered small web and mobile projects from design to deployment.",
                        "Worked directly with clients on requirements and support.",
                    ]),
                },
            ],
            projects: Vec::new(),
            phone: None,
            links: vec![ContactLink {
                label: "GitHub".to_string(),
                href: "https://github.com/".to_string(),
            }],
        }
    }
}

impl SectionContentProvider for PortfolioContent {
    fn section_body(&self, section: SectionId) -> SectionBody {
        match section {
            SectionId::Home => SectionBody::Home {
                banner: self.banner.clone(),
                profile: self.profile.clone(),
            },
            SectionId::About => SectionBody::About {
                paragraphs: self.about.clone(),
            },
            SectionId::Education => SectionBody::Education {
                items: self.education.clone(),
            },
            SectionId::Skills => SectionBody::Skills {
                categories: self.skills.clone(),
            },
            SectionId::Experience => SectionBody::Experience {
                items: self.experience.clone(),
            },
            SectionId::Projects => SectionBody::Projects {
                items: self.projects.clone(),
                placeholder: "Project showcase is being updated. Check back soon.".to_string(),
            },
            SectionId::Contact => {
                let mut lines = Vec::new();
                if let Some(phone) = &self.phone {
                    lines.push(format!("Phone: {phone}"));
                }
                lines.push(format!("Email: {}", self.profile.email));
                lines.push(format!("Location: {}", self.profile.location));
                let mut links = vec![ContactLink {
                    label: "Email".to_string(),
                    href: format!("mailto:{}", self.profile.email),
                }];
                links.extend(self.links.iter().cloned());
                SectionBody::Contact { lines, links }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn percentage_bar_rounds_to_nearest_cell() {
        assert_eq!(percentage_bar(50), "[=====-----] 50%");
        assert_eq!(percentage_bar(95), "[==========] 95%");
        assert_eq!(percentage_bar(84), "[========--] 84%");
        assert_eq!(percentage_bar(0), "[----------] 0%");
        assert_eq!(percentage_bar(250), "[==========] 100%");
    }

    #[test]
    fn builtin_provider_covers_every_section() {
        let content = PortfolioContent::default();
        for section in SectionId::ALL {
            assert_eq!(content.section_body(section).section(), section);
        }
    }

    #[test]
    fn contact_lists_email_link_first() {
        let body = PortfolioContent::default().section_body(SectionId::Contact);
        let SectionBody::Contact { links, lines } = body else {
            panic!("expected contact body");
        };
        assert_eq!(links[0].href, "mailto:developer@example.com");
        assert!(lines.contains(&"Email: developer@example.com".to_string()));
    }

    #[test]
    fn section_body_serializes_with_kind_tag() {
        let body = PortfolioContent::default().section_body(SectionId::About);
        let value = serde_json::to_value(&body).expect("serialize");
        assert_eq!(value["kind"], "about");
    }
}

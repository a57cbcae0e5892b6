//! Text rendered on the portfolio pages.
//!
//! Every field has a default so a config file can override just the
//! parts it cares about under `[content]`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(default = "default_web_dev")]
    pub web_dev: WebDevContent,
    #[serde(default = "default_contact")]
    pub contact: ContactContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebDevContent {
    pub heading: String,
    pub intro: String,
    #[serde(default)]
    pub platforms: Vec<Platform>,
    #[serde(default = "default_highlights_heading")]
    pub highlights_heading: String,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

/// A profile card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub name: String,
    pub handle: String,
    pub profile_url: String,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

/// One bullet: `text`, then the emphasized `link_text`, then `rest`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub text: String,
    pub link_text: String,
    #[serde(default)]
    pub rest: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactContent {
    pub heading: String,
    pub intro: String,
    pub email: String,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            web_dev: default_web_dev(),
            contact: default_contact(),
        }
    }
}

impl Highlight {
    fn new(text: &str, link_text: &str, rest: &str) -> Self {
        Self {
            text: text.to_string(),
            link_text: link_text.to_string(),
            rest: rest.to_string(),
        }
    }
}

impl Stat {
    fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

fn default_highlights_heading() -> String {
    "Key Highlights".to_string()
}

fn default_web_dev() -> WebDevContent {
    WebDevContent {
        heading: "Web Development".to_string(),
        intro: "My web development journey focuses on building practical, user-friendly web \
                applications using modern backend and frontend technologies. Here you'll find \
                my projects, development platforms, and highlights showcasing my skills in \
                full-stack web development."
            .to_string(),
        platforms: vec![
            Platform {
                name: "GitHub".to_string(),
                handle: "adhabiya".to_string(),
                profile_url: "https://github.com/adhabiya".to_string(),
                stats: vec![
                    Stat::new("Projects", "Web Applications"),
                    Stat::new("Focus", "PHP & Django"),
                ],
            },
            Platform {
                name: "LinkedIn".to_string(),
                handle: "adhabiya-ummer".to_string(),
                profile_url: "https://www.linkedin.com/in/adhabiya-ummer-aa176b247/".to_string(),
                stats: vec![
                    Stat::new("Role", "MCA Student"),
                    Stat::new("Interest", "Web Development"),
                ],
            },
        ],
        highlights_heading: default_highlights_heading(),
        highlights: vec![
            Highlight::new(
                "Developed ",
                "database-driven web applications",
                " using PHP (Laravel) and Django with a focus on clean UI and backend logic.",
            ),
            Highlight::new(
                "Built ",
                "responsive user interfaces",
                " using HTML, CSS, and Bootstrap to enhance user experience.",
            ),
            Highlight::new(
                "Worked extensively with ",
                "MySQL databases",
                " for CRUD operations, data validation, and efficient data handling.",
            ),
            Highlight::new(
                "Completed multiple ",
                "academic and real-world projects",
                " demonstrating practical problem-solving and full-stack development skills.",
            ),
            Highlight::new(
                "Actively learning ",
                "modern web development practices",
                " and improving backend and frontend integration.",
            ),
        ],
    }
}

fn default_contact() -> ContactContent {
    ContactContent {
        heading: "Contact".to_string(),
        intro: "Whether you want to discuss a project, ask a question, or just say hello, \
                I'd love to hear from you."
            .to_string(),
        email: "adhabiyaummer8841@gmail.com".to_string(),
    }
}

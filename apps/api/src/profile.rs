//! Profile data store — the static factual ground truth for PrasadGPT.
//!
//! Everything the assistant is allowed to claim lives here. The system
//! instruction embeds a full JSON dump of `Profile`, so every field must be
//! serializable and accurate.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub company: String,
    pub experience: Experience,
    pub skills: Skills,
    pub projects: Vec<Project>,
    pub education: String,
    pub links: Links,
}

#[derive(Debug, Clone, Serialize)]
pub struct Experience {
    pub internship: String,
    pub junior_developer: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Skills {
    pub languages: Vec<String>,
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub db_tools: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub name: String,
    pub stack: Vec<String>,
    pub live: String,
    pub code: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Links {
    pub github: String,
    pub linkedin: String,
}

impl Profile {
    /// Builds the canonical profile record. Single source of truth for the
    /// system instruction; keep in sync with the resume.
    pub fn prasad() -> Self {
        let s = |v: &str| v.to_string();
        let vs = |v: &[&str]| v.iter().map(|x| x.to_string()).collect::<Vec<_>>();

        Profile {
            name: s("Prasad Kadam"),
            location: s("Nashik, India"),
            email: s("prasadkadam29503@gmail.com"),
            phone: s("+91 8055907280"),
            role: s("Full Stack Developer (Intern -> Junior Developer)"),
            company: s("VIZIPP"),
            experience: Experience {
                internship: s("Apr 2025 – Sep 2025"),
                junior_developer: s("Oct 2025 – Present"),
                highlights: vs(&[
                    "Shipped 10+ responsive UI components using React, Angular, TailwindCSS.",
                    "Delivered 8+ REST APIs with Node/Express, JWT auth, Zod validation, error handling.",
                    "Modeled MongoDB collections with Mongoose; CRUD for users/content/transactions modules.",
                    "Optimized queries and payloads to reduce average latency ~25%.",
                    "Worked in a 4-person Agile team; owned PRs, reviews, release-ready merges.",
                ]),
            },
            skills: Skills {
                languages: vs(&["JavaScript", "TypeScript", "SQL"]),
                frontend: vs(&[
                    "React",
                    "Next.js",
                    "Angular",
                    "TailwindCSS",
                    "HTML5",
                    "CSS3",
                ]),
                backend: vs(&["Node.js", "Express", "REST APIs", "JWT", "Zod"]),
                db_tools: vs(&[
                    "MongoDB",
                    "PostgreSQL",
                    "MySQL",
                    "Prisma",
                    "Git/GitHub",
                    "Docker (basic)",
                    "Cloudflare Workers",
                ]),
            },
            projects: vec![
                Project {
                    name: s("InspireWrite"),
                    stack: vs(&[
                        "React",
                        "TypeScript",
                        "Zod",
                        "JWT",
                        "Cloudflare Workers",
                        "Prisma",
                        "PostgreSQL",
                    ]),
                    live: s("https://inspirewrite.vercel.app/"),
                    code: s("https://github.com/Prasadkadam03/INSPIREWRITE"),
                    notes: vs(&[
                        "Serverless on Cloudflare Workers; reduced perceived latency ~30%.",
                        "JWT protected routes + Zod validation + Prisma/PostgreSQL.",
                    ]),
                },
                Project {
                    name: s("PayTM Clone"),
                    stack: vs(&["React", "Node.js", "Express", "TailwindCSS", "MongoDB"]),
                    live: s("https://paytm-1-6ke7.onrender.com"),
                    code: s("https://github.com/Prasadkadam03/PayTM"),
                    notes: vs(&[
                        "Mock payments workflow with rollback handling for consistency.",
                        "MongoDB schemas for users/transactions; server-side validation with Zod.",
                    ]),
                },
                Project {
                    name: s("BookAtlas"),
                    stack: vs(&[
                        "React",
                        "TypeScript",
                        "Vite",
                        "TailwindCSS",
                        "Open Library API",
                    ]),
                    live: s("https://book-atlas.vercel.app/"),
                    code: s("https://github.com/prasadkadam03/BookAtlas"),
                    notes: vec![],
                },
                Project {
                    name: s("News App"),
                    stack: vs(&["HTML", "CSS", "JavaScript"]),
                    live: s("https://news-app-blue-tau.vercel.app/"),
                    code: s("https://github.com/Prasadkadam03/News_App"),
                    notes: vec![],
                },
            ],
            education: s(
                "B.Tech Computer Engineering, SNJB's KBJ College of Engineering (Dec 2021 – May 2025)",
            ),
            links: Links {
                github: s("https://github.com/prasadkadam03"),
                linkedin: s("https://linkedin.com/in/prasadkadam03/"),
            },
        }
    }

    /// Contact block appended to "detail not in my data" replies.
    pub fn contact_text(&self) -> String {
        format!(
            "If you want the exact details, please connect with me directly:\n\
             Email: {}\n\
             Phone: {}\n\
             LinkedIn: {}\n\
             GitHub: {}",
            self.email, self.phone, self.links.linkedin, self.links.github
        )
    }
}

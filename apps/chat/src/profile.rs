//! Widget-side knowledge base.
//!
//! The offline fallback must keep working when the backend is unreachable, so
//! the chat client carries its own copy of the resume facts instead of
//! fetching them. Pricing lives ONLY here and is surfaced ONLY on the pricing
//! intent.

pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
    pub summary: &'static str,
    pub experience: &'static [ExperienceEntry],
    pub skills: Skills,
    pub projects: &'static [Project],
}

pub struct ExperienceEntry {
    pub company: &'static str,
    pub period: &'static str,
    pub role: &'static str,
    pub highlights: &'static [&'static str],
}

pub struct Skills {
    pub languages: &'static [&'static str],
    pub frontend: &'static [&'static str],
    pub backend: &'static [&'static str],
    pub db_tools: &'static [&'static str],
}

pub struct Project {
    pub name: &'static str,
    pub stack: &'static [&'static str],
    pub period: &'static str,
    pub bullets: &'static [&'static str],
    pub live: &'static str,
    pub code: &'static str,
}

pub struct PricingTier {
    pub title: &'static str,
    pub start: &'static str,
    pub includes: &'static [&'static str],
}

pub const PROFILE: Profile = Profile {
    name: "Prasad Kadam",
    title: "Full Stack Developer (Intern → Junior Developer)",
    location: "Nashik, India",
    email: "prasadkadam29503@gmail.com",
    linkedin: "https://linkedin.com/in/prasadkadam03/",
    github: "https://github.com/prasadkadam03",
    summary: "Full Stack Developer with internship + full-time experience delivering web \
              applications end-to-end. Skilled in JavaScript/TypeScript, React, Node.js, \
              Express, REST APIs, and SQL/NoSQL databases.",
    experience: &[ExperienceEntry {
        company: "VIZIPP",
        period: "Apr 2025 — Present",
        role: "Full Stack Developer Intern (Apr 2025 — Sep 2025) → Junior Developer (Oct 2025 — Present)",
        highlights: &[
            "Shipped 10+ responsive UI components using React, Angular, and TailwindCSS; ensured cross-browser behavior and accessibility.",
            "Delivered 8+ REST API endpoints with Node.js/Express, adding JWT auth, Zod validation, and consistent error handling.",
            "Modeled MongoDB collections with Mongoose and implemented CRUD for users, content, and transactions modules.",
            "Optimized queries and response payloads to cut average endpoint latency by ~25% for high-traffic routes.",
            "Worked in a 4-person Agile team (2-week sprints), owned PRs, reviews, and release-ready merges via Git/GitHub.",
        ],
    }],
    skills: Skills {
        languages: &["JavaScript (ES6+)", "TypeScript", "SQL"],
        frontend: &[
            "React",
            "Next.js",
            "Angular",
            "TailwindCSS",
            "HTML5",
            "CSS3",
            "Bootstrap",
            "Material UI",
        ],
        backend: &[
            "Node.js",
            "Express.js",
            "REST APIs",
            "JWT Authentication",
            "Zod Validation",
        ],
        db_tools: &[
            "MongoDB (Atlas, Mongoose)",
            "PostgreSQL",
            "MySQL",
            "Prisma",
            "Git/GitHub",
            "Postman",
            "Docker (basic)",
            "Vercel",
            "Cloudflare Workers",
        ],
    },
    projects: &[
        Project {
            name: "InspireWrite",
            stack: &[
                "React",
                "TypeScript",
                "Zod",
                "JWT",
                "Cloudflare Workers",
                "Prisma",
                "PostgreSQL",
            ],
            period: "Feb 2025",
            bullets: &[
                "Engineered a serverless app on Cloudflare Workers (edge runtime), reducing perceived latency by ~30% vs centralized setup.",
                "Secured 5+ protected routes using JWT; enforced runtime validation using Zod; managed relational data via Prisma + PostgreSQL.",
            ],
            live: "https://inspirewrite.vercel.app/",
            code: "https://github.com/Prasadkadam03/INSPIREWRITE",
        },
        Project {
            name: "PayTM Clone",
            stack: &["React", "Node.js", "Express", "TailwindCSS", "MongoDB"],
            period: "Dec 2024",
            bullets: &[
                "Created a mock payments workflow (auth + transfers) with rollback handling for consistency on failures.",
                "Designed MongoDB schemas for users/transactions; reduced invalid requests via server-side validation with Zod.",
            ],
            live: "https://paytm-1-6ke7.onrender.com",
            code: "https://github.com/Prasadkadam03/PayTM",
        },
        Project {
            name: "BookAtlas",
            stack: &["React", "TypeScript", "Vite", "TailwindCSS", "Open Library API"],
            period: "Sep 2025",
            bullets: &[
                "Built an API-driven search UI with reusable components; deployed to Vercel; optimized dev workflow via Vite HMR.",
            ],
            live: "https://book-atlas.vercel.app/",
            code: "https://github.com/prasadkadam03/BookAtlas",
        },
        Project {
            name: "News App",
            stack: &["HTML", "CSS", "JavaScript"],
            period: "Jul 2024 — Aug 2024",
            bullets: &[
                "Integrated a news API with async JS; added search + filters and dark mode for better usability across devices.",
            ],
            live: "https://news-app-blue-tau.vercel.app/",
            code: "https://github.com/Prasadkadam03/News_App",
        },
    ],
};

pub const PRICING: &[PricingTier] = &[
    PricingTier {
        title: "Landing Page / Portfolio",
        start: "₹5,399",
        includes: &[
            "React/Next.js + Tailwind UI",
            "Responsive & accessible layout",
            "Deployment to Vercel + domain guidance",
            "Essential SEO + analytics hooks",
            "3 revision loops",
        ],
    },
    PricingTier {
        title: "Full Stack MVP",
        start: "₹7,399",
        includes: &[
            "React/Next.js frontend",
            "Node.js/Express REST APIs + JWT",
            "Zod validation + error handling",
            "MongoDB or PostgreSQL setup (Mongoose/Prisma)",
            "Postman collection + API docs",
        ],
    },
    PricingTier {
        title: "Edge/Serverless App",
        start: "₹10,999",
        includes: &[
            "Cloudflare Workers or Vercel functions",
            "JWT-protected routes + rate limiting",
            "Prisma/PostgreSQL or MongoDB",
            "CI/CD hooks",
            "Performance + observability checks",
        ],
    },
    PricingTier {
        title: "Enterprise Custom",
        start: "Custom",
        includes: &[
            "High-availability architecture",
            "Enterprise cloud infra (AWS/GCP)",
            "Security & compliance audits",
            "Priority support",
        ],
    },
];

/// Looks up a project by name; falls back to the first one.
pub fn project_named(name: &str) -> &'static Project {
    PROFILE
        .projects
        .iter()
        .find(|p| p.name == name)
        .unwrap_or(&PROFILE.projects[0])
}

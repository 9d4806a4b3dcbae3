//! Static section content.
//!
//! The deck is a fixed, ordered list of sections. The navbar exposes a
//! subset of them as direct jump targets.

mod typed_text;

pub use typed_text::TypedText;

use crate::navigation::SectionIndex;

pub const SECTION_COUNT: usize = 7;

/// Brand shown at the left of the navbar, split into styled parts.
///
pub const BRAND: [&str; 3] = ["dev", ".", "edu_avila_vilar"];

/// How a section lays out its items.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Hero,
    MasterDetail,
    Grid,
    List,
    Contact,
}

/// One entry of a section (project, skill group, metric, post...).
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub title: &'static str,
    pub meta: &'static str,
    pub detail: &'static str,
}

const fn item(title: &'static str, meta: &'static str, detail: &'static str) -> Item {
    Item {
        title,
        meta,
        detail,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub name: &'static str,
    pub marker: &'static str,
    pub heading: &'static str,
    pub intro: Option<&'static str>,
    pub layout: Layout,
    pub items: &'static [Item],
}

/// Navbar entry and the section it jumps to.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: SectionIndex,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "Home", target: 0 },
    NavItem { label: "Projects", target: 1 },
    NavItem { label: "Writing", target: 4 },
    NavItem { label: "Soft Skills", target: 5 },
    NavItem { label: "Contact", target: 6 },
];

/// Navbar entry highlighted for each section.
///
const SECTION_TO_NAV: [usize; SECTION_COUNT] = [0, 1, 1, 1, 2, 3, 4];

pub fn active_nav_index(section: SectionIndex) -> usize {
    SECTION_TO_NAV.get(section).copied().unwrap_or(0)
}

/// Call-to-action buttons on the hero section.
///
pub const HERO_ACTIONS: [NavItem; 2] = [
    NavItem { label: "View Projects", target: 1 },
    NavItem { label: "Get in Touch", target: 4 },
];

pub const HERO_SUBTITLE: &str = "Developer • Problem Solver • Creative Thinker";

/// Side link of the master/detail section, leading on to the skills grid.
///
pub const PROJECTS_NEXT: NavItem = NavItem { label: "Technologies", target: 2 };

pub const PROMPT_PLACEHOLDER: &str = "Type your message here...";

pub fn section(index: SectionIndex) -> Option<&'static Section> {
    SECTIONS.get(index)
}

/// Entries of the master/detail section.
///
pub fn projects() -> &'static [Item] {
    SECTIONS
        .iter()
        .find(|section| section.layout == Layout::MasterDetail)
        .map(|section| section.items)
        .unwrap_or(&[])
}

pub static SECTIONS: [Section; SECTION_COUNT] = [
    Section {
        name: "Home",
        marker: "software_engineer.init()",
        heading: "Building elegant solutions with code",
        intro: Some(
            "I craft thoughtful digital experiences where technical precision meets creative \
             vision. Calm approach, clear communication, impactful results.",
        ),
        layout: Layout::Hero,
        items: &[],
    },
    Section {
        name: "Projects",
        marker: "// Featured Work",
        heading: "Projects",
        intro: None,
        layout: Layout::MasterDetail,
        items: &[
            item(
                "AI-Powered Analytics Dashboard",
                "React • Python • TensorFlow • D3.js",
                "Real-time data visualization platform with ML-driven insights. Custom \
                 TensorFlow models for predictive analytics gave stakeholders 40% faster \
                 business insights.",
            ),
            item(
                "Automated Testing Framework",
                "Selenium • Java • Jenkins • Docker",
                "End-to-end test automation integrated with CI/CD pipelines. Cross-platform \
                 support reduced manual QA effort by 60% and shortened release cycles.",
            ),
            item(
                "Cloud Migration Platform",
                "AWS • Terraform • Python • React",
                "Migration tooling for a zero-downtime move to AWS, with infrastructure as \
                 code and auto-scaling policies for cost optimization.",
            ),
            item(
                "Developer Productivity Suite",
                "TypeScript • Node.js • GraphQL",
                "Editor extensions and CLI utilities with over 10k installs and an active \
                 open source community.",
            ),
        ],
    },
    Section {
        name: "Technologies",
        marker: "// Technical Expertise",
        heading: "Technologies",
        intro: None,
        layout: Layout::Grid,
        items: &[
            item(
                "Languages",
                "Python • SQL • JavaScript • TypeScript",
                "Backend APIs, ETL, automation, schema design and type-safe frontends.",
            ),
            item(
                "Backend & APIs",
                "FastAPI • Flask • REST • Node.js",
                "Async endpoints, internal services, auth and pagination.",
            ),
            item(
                "Data & Automation",
                "Pandas • Selenium • ETL Pipelines",
                "Data transformation, web scraping, ingestion and validation.",
            ),
            item(
                "Infrastructure",
                "Git & GitHub • Docker • CI/CD",
                "Version control, containerization and automated pipelines.",
            ),
        ],
    },
    Section {
        name: "Results",
        marker: "// Impact & Outcomes",
        heading: "Results",
        intro: Some("Measurable outcomes from projects and initiatives I've led."),
        layout: Layout::Grid,
        items: &[
            item(
                "40%",
                "Efficiency Gains",
                "Improved data pipeline throughput through automation and optimization.",
            ),
            item(
                "60%",
                "Time Saved",
                "Reduced manual processes with custom ETL solutions and scripts.",
            ),
            item(
                "5+",
                "Team Size Managed",
                "Led development teams, coordinating sprints and technical decisions.",
            ),
            item(
                "10+",
                "Projects Delivered",
                "Shipped applications from concept to production.",
            ),
        ],
    },
    Section {
        name: "Writing",
        marker: "// Thoughts & Articles",
        heading: "Writing",
        intro: None,
        layout: Layout::List,
        items: &[
            item(
                "Building Scalable Data Pipelines",
                "Dec 2024 • 8 min read",
                "Designing ETL systems that process millions of records daily.",
            ),
            item(
                "The Art of Technical Leadership",
                "Nov 2024 • 6 min read",
                "Balancing hands-on coding with mentoring and strategy.",
            ),
            item(
                "From Monolith to Microservices",
                "Oct 2024 • 10 min read",
                "Breaking down legacy systems without disrupting operations.",
            ),
            item(
                "Python Best Practices for Data Engineers",
                "Sep 2024 • 5 min read",
                "Clean, maintainable code your future self will thank you for.",
            ),
            item(
                "The Power of Automation",
                "Aug 2024 • 4 min read",
                "Why automating repetitive tasks pays off in every workflow.",
            ),
            item(
                "Database Optimization Techniques",
                "Jul 2024 • 7 min read",
                "Simple strategies to speed up queries by orders of magnitude.",
            ),
        ],
    },
    Section {
        name: "Soft Skills",
        marker: "// Beyond The Code",
        heading: "Soft Skills",
        intro: None,
        layout: Layout::Grid,
        items: &[
            item(
                "Team Leadership",
                "",
                "Managed a team of 5 developers, coordinating sprints and deliverables.",
            ),
            item(
                "Clear Communication",
                "",
                "Translating technical concepts into human-friendly language.",
            ),
            item(
                "Creative Problem-Solving",
                "",
                "Finding elegant solutions to complex challenges.",
            ),
            item(
                "Adaptability",
                "",
                "Quick to learn, eager to evolve with new technologies.",
            ),
            item(
                "Languages",
                "",
                "Portuguese (Native), English (C1), Spanish (A2).",
            ),
            item(
                "Time Management",
                "",
                "Prioritizing tasks effectively to meet deadlines consistently.",
            ),
        ],
    },
    Section {
        name: "Contact",
        marker: "// Let's Connect",
        heading: "Send a Prompt",
        intro: Some(
            "Ready to collaborate? Drop me a message and let's create something great together.",
        ),
        layout: Layout::Contact,
        items: &[
            item("GitHub", "github.com", ""),
            item("LinkedIn", "linkedin.com", ""),
            item("Email", "hello@developer.com", ""),
        ],
    },
];

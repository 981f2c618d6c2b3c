//! Site content tables. Everything the page shows comes from here, so copy
//! edits never touch rendering or effect code.

use crate::interact::HoverMotion;

#[derive(Clone, Copy, Debug)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct SocialLink {
    pub platform: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
    pub show_in_header: bool,
}

/// Floating call-to-action in the hero. `href: None` renders a plain div.
/// `position` is a free-form class string; `rotation` is a CSS angle applied
/// through the standalone `rotate` property so animated transforms keep it.
#[derive(Clone, Copy, Debug)]
pub struct HeroPill {
    pub text: &'static str,
    pub href: Option<&'static str>,
    pub position: &'static str,
    pub rotation: &'static str,
    pub icon: Option<&'static str>,
}

/// Accent colour a project card uses for its hover burst.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Pink,
    Blue,
    Green,
    Gold,
}

impl Accent {
    pub fn css(self) -> &'static str {
        match self {
            Accent::Pink => "#f9abea",
            Accent::Blue => "#6b8af8",
            Accent::Green => "#50f595",
            Accent::Gold => "#f5d250",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub repo_url: &'static str,
    pub tags: &'static [&'static str],
    pub featured: bool,
    pub accent: Accent,
    pub hover: HoverMotion,
}

#[derive(Clone, Copy, Debug)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct SiteMeta {
    pub title: &'static str,
    pub author: &'static str,
    pub tagline: &'static str,
    pub copyright: &'static str,
}

pub const NAVIGATION: &[NavLink] = &[
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Projects", href: "#projects" },
    NavLink { label: "Contact", href: "#contact" },
    NavLink { label: "Blog", href: "#blog" },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        platform: "github",
        icon: "fab fa-github",
        url: "https://github.com/chathnindu",
        show_in_header: true,
    },
    SocialLink {
        platform: "discord",
        icon: "fab fa-discord",
        url: "#",
        show_in_header: true,
    },
    SocialLink {
        platform: "linkedin",
        icon: "fab fa-linkedin",
        url: "#",
        show_in_header: true,
    },
];

pub const HERO_PILLS: &[HeroPill] = &[
    HeroPill {
        text: "Join the chaos",
        href: Some("#"),
        position: "top-[15%] left-[5%] md:top-[35%] md:left-[15%]",
        rotation: "-15deg",
        icon: None,
    },
    HeroPill {
        text: "Check out my code",
        href: Some("https://github.com/chathnindu"),
        position: "top-[35%] left-[25%] md:top-[20%] md:left-[42%]",
        rotation: "10deg",
        icon: Some("fab fa-github ml-2"),
    },
    HeroPill {
        text: "Hold My CV",
        href: None,
        position: "top-[55%] right-[5%] md:top-[40%] md:right-[8%]",
        rotation: "-5deg",
        icon: None,
    },
];

pub const TECH_STACK: &[&str] = &[
    "Rust & WebAssembly",
    "wgpu & WebGPU",
    "TypeScript",
    "Tailwind CSS",
    "Python",
];

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "Neural Network Visualizer",
        description: "Interactive 3D visualization of neural networks with real-time \
                      training animations and layer inspection.",
        repo_url: "https://github.com/chathnindu/neural-viz",
        tags: &["Three.js", "React", "WebGL"],
        featured: true,
        accent: Accent::Pink,
        hover: HoverMotion::Tilt,
    },
    ProjectEntry {
        title: "AI Code Assistant",
        description: "CLI tool that uses LLMs to help debug and refactor code. Supports \
                      Python, JavaScript, and TypeScript.",
        repo_url: "https://github.com/chathnindu/ai-assistant",
        tags: &["Python", "OpenAI", "CLI"],
        featured: true,
        accent: Accent::Blue,
        hover: HoverMotion::Lift,
    },
    ProjectEntry {
        title: "Real-time Collaboration Board",
        description: "Multiplayer whiteboard with WebSocket synchronization. Built with \
                      Node.js and Canvas API.",
        repo_url: "https://github.com/chathnindu/collab-board",
        tags: &["Node.js", "WebSocket", "Canvas"],
        featured: true,
        accent: Accent::Green,
        hover: HoverMotion::Swing,
    },
    ProjectEntry {
        title: "Portfolio Generator",
        description: "Static site generator for developer portfolios with Markdown \
                      support and custom themes.",
        repo_url: "https://github.com/chathnindu/portfolio-gen",
        tags: &["Node.js", "Markdown", "SSG"],
        featured: false,
        accent: Accent::Gold,
        hover: HoverMotion::Tilt,
    },
    ProjectEntry {
        title: "Weather Dashboard",
        description: "Weather app with location search, 7-day forecasts, and animated \
                      weather icons.",
        repo_url: "https://github.com/chathnindu/weather-dash",
        tags: &["React", "API", "Tailwind"],
        featured: false,
        accent: Accent::Blue,
        hover: HoverMotion::Lift,
    },
    ProjectEntry {
        title: "Task Automation Toolkit",
        description: "Collection of Python scripts for automating common development \
                      workflows and file operations.",
        repo_url: "https://github.com/chathnindu/auto-toolkit",
        tags: &["Python", "Automation", "CLI"],
        featured: false,
        accent: Accent::Green,
        hover: HoverMotion::Swing,
    },
];

pub const FOOTER_LINKS: &[FooterLink] = &[
    FooterLink { label: "About", href: "#about" },
    FooterLink { label: "Products", href: "#products" },
    FooterLink { label: "Privacy", href: "#privacy" },
    FooterLink { label: "Terms", href: "#terms" },
    FooterLink { label: "Help", href: "#help" },
];

pub const SITE: SiteMeta = SiteMeta {
    title: "chathnindu portfolio",
    author: "Chathnindu",
    tagline: "Stay connected for early access to my newest experiments and weird ideas.",
    copyright: "\u{a9} 2025 Chathnindu",
};

/// Projects shown on the landing page, in table order.
pub fn featured_projects() -> impl Iterator<Item = &'static ProjectEntry> {
    PROJECTS.iter().filter(|p| p.featured)
}

/// Social links shown in the sticky header, in table order.
pub fn header_social() -> impl Iterator<Item = &'static SocialLink> {
    SOCIAL_LINKS.iter().filter(|s| s.show_in_header)
}

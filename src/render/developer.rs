// Developer layouts

use super::{Defaults, Renderer, Section};
use crate::catalog::Layout;

const DEVELOPER_SKILLS: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "React",
    "Node.js",
    "Python",
    "PostgreSQL",
    "Docker",
    "AWS",
];

const FULL_PAGE: &[Section] = &[
    Section::Hero,
    Section::About,
    Section::Skills,
    Section::Experience,
    Section::Projects,
    Section::Education,
    Section::Contact,
];

/// Dark terminal theme
pub struct CodeCraft;

static CODECRAFT: Defaults = Defaults {
    name: "John Developer",
    title: "Full Stack Developer",
    email: "john@example.com",
    phone: "+1 (555) 123-4567",
    location: "San Francisco, CA",
    bio: "Passionate full-stack developer with expertise in modern web technologies. I love building scalable applications and solving complex problems.",
    github_url: "https://github.com/johndeveloper",
    linkedin_url: "https://linkedin.com/in/johndeveloper",
    portfolio_url: "https://johndeveloper.dev",
    skills: DEVELOPER_SKILLS,
    ..Defaults::BLANK
};

impl Renderer for CodeCraft {
    fn layout(&self) -> Layout {
        Layout::CodeCraft
    }

    fn defaults(&self) -> &'static Defaults {
        &CODECRAFT
    }

    fn sections(&self) -> &'static [Section] {
        FULL_PAGE
    }

    fn template_name(&self) -> &'static str {
        "layouts/codecraft.html"
    }
}

/// SaaS dashboard with blue gradients
pub struct DevFlow;

static DEVFLOW: Defaults = Defaults {
    name: "Sarah Johnson",
    title: "Senior Frontend Developer",
    email: "sarah@example.com",
    phone: "+1 (555) 987-6543",
    location: "New York, NY",
    bio: "Experienced frontend developer specializing in React, TypeScript, and modern web technologies. Passionate about creating exceptional user experiences and scalable applications.",
    github_url: "https://github.com/sarahjohnson",
    linkedin_url: "https://linkedin.com/in/sarahjohnson",
    portfolio_url: "https://sarahjohnson.dev",
    skills: &[
        "React",
        "TypeScript",
        "Next.js",
        "Tailwind CSS",
        "GraphQL",
        "Node.js",
        "MongoDB",
        "AWS",
    ],
    ..Defaults::BLANK
};

impl Renderer for DevFlow {
    fn layout(&self) -> Layout {
        Layout::DevFlow
    }

    fn defaults(&self) -> &'static Defaults {
        &DEVFLOW
    }

    fn sections(&self) -> &'static [Section] {
        FULL_PAGE
    }

    fn template_name(&self) -> &'static str {
        "layouts/devflow.html"
    }
}

/// Grid layout built around the technology stack
pub struct TechStack;

static TECHSTACK: Defaults = Defaults {
    name: "Alex Chen",
    title: "Full Stack Engineer",
    email: "alex@example.com",
    phone: "+1 (555) 456-7890",
    location: "Seattle, WA",
    bio: "Passionate full-stack engineer with expertise in modern web technologies and cloud architecture. I love building scalable, performant applications that solve real-world problems.",
    github_url: "https://github.com/alexchen",
    linkedin_url: "https://linkedin.com/in/alexchen",
    portfolio_url: "https://alexchen.dev",
    skills: &[
        "React",
        "TypeScript",
        "Node.js",
        "Python",
        "AWS",
        "Docker",
        "GraphQL",
        "PostgreSQL",
        "Redis",
        "Kubernetes",
    ],
    ..Defaults::BLANK
};

impl Renderer for TechStack {
    fn layout(&self) -> Layout {
        Layout::TechStack
    }

    fn defaults(&self) -> &'static Defaults {
        &TECHSTACK
    }

    fn sections(&self) -> &'static [Section] {
        &[Section::Hero, Section::About, Section::Skills, Section::Contact]
    }

    fn template_name(&self) -> &'static str {
        "layouts/techstack.html"
    }
}

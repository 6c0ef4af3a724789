// QA layouts

use super::{Defaults, Renderer, Section};
use crate::catalog::Layout;

/// Analytical dashboard with testing metrics
pub struct TestLab;

static TESTLAB: Defaults = Defaults {
    title: "Senior QA Engineer",
    bio: "Your QA expertise and approach will be displayed here...",
    ..Defaults::BLANK
};

impl Renderer for TestLab {
    fn layout(&self) -> Layout {
        Layout::TestLab
    }

    fn defaults(&self) -> &'static Defaults {
        &TESTLAB
    }

    fn sections(&self) -> &'static [Section] {
        &[Section::Hero, Section::Skills, Section::Projects, Section::Contact]
    }

    fn template_name(&self) -> &'static str {
        "layouts/testlab.html"
    }
}

/// White and gray professional layout
pub struct QualityPro;

static QUALITYPRO: Defaults = Defaults {
    title: "Quality Assurance Professional",
    bio: "Dedicated QA professional with expertise in ensuring software quality through comprehensive testing strategies and methodologies.",
    about: "Passionate about delivering high-quality software through meticulous testing and quality assurance practices.",
    ..Defaults::BLANK
};

impl Renderer for QualityPro {
    fn layout(&self) -> Layout {
        Layout::QualityPro
    }

    fn defaults(&self) -> &'static Defaults {
        &QUALITYPRO
    }

    fn sections(&self) -> &'static [Section] {
        &[
            Section::Hero,
            Section::About,
            Section::Skills,
            Section::Experience,
            Section::Projects,
            Section::Education,
            Section::Contact,
        ]
    }

    fn template_name(&self) -> &'static str {
        "layouts/qualitypro.html"
    }
}

/// Dark console theme with red accents
pub struct BugHunter;

static BUGHUNTER: Defaults = Defaults {
    name: "Bug Hunter",
    title: "> QA_AUTOMATION_SPECIALIST",
    bio: "Elite bug hunter specializing in automated testing, security vulnerabilities, and system optimization. No bug escapes my radar.",
    about: "Specialized in hunting down the most elusive bugs and security vulnerabilities through advanced automation and systematic testing methodologies.",
    open_end: "ACTIVE",
    ..Defaults::BLANK
};

impl Renderer for BugHunter {
    fn layout(&self) -> Layout {
        Layout::BugHunter
    }

    fn defaults(&self) -> &'static Defaults {
        &BUGHUNTER
    }

    fn sections(&self) -> &'static [Section] {
        &[
            Section::Hero,
            Section::About,
            Section::Skills,
            Section::Experience,
            Section::Projects,
            Section::Education,
            Section::Contact,
        ]
    }

    fn template_name(&self) -> &'static str {
        "layouts/bughunter.html"
    }
}

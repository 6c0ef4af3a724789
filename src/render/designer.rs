// Designer layouts

use super::{Defaults, Renderer, Section};
use crate::catalog::Layout;

/// Bold typography, gallery of featured work
pub struct DesignStudio;

static DESIGNSTUDIO: Defaults = Defaults {
    name: "Creative Studio",
    title: "UI/UX Designer & Creative Director",
    bio: "Crafting exceptional digital experiences through innovative design, user-centered thinking, and creative storytelling that connects brands with their audiences.",
    ..Defaults::BLANK
};

impl Renderer for DesignStudio {
    fn layout(&self) -> Layout {
        Layout::DesignStudio
    }

    fn defaults(&self) -> &'static Defaults {
        &DESIGNSTUDIO
    }

    fn sections(&self) -> &'static [Section] {
        &[
            Section::Hero,
            Section::About,
            Section::Skills,
            Section::Work,
            Section::Experience,
            Section::Education,
            Section::Contact,
        ]
    }

    fn template_name(&self) -> &'static str {
        "layouts/designstudio.html"
    }
}

/// Minimalist, work first
pub struct PixelPerfect;

static PIXELPERFECT: Defaults = Defaults {
    name: "PixelPerfect",
    title: "Product Designer",
    email: "hello@example.com",
    bio: "Crafting minimal, functional, and beautiful digital experiences with attention to every pixel and interaction detail.",
    ..Defaults::BLANK
};

impl Renderer for PixelPerfect {
    fn layout(&self) -> Layout {
        Layout::PixelPerfect
    }

    fn defaults(&self) -> &'static Defaults {
        &PIXELPERFECT
    }

    fn sections(&self) -> &'static [Section] {
        &[
            Section::Hero,
            Section::Work,
            Section::About,
            Section::Experience,
            Section::Education,
            Section::Contact,
        ]
    }

    fn template_name(&self) -> &'static str {
        "layouts/pixelperfect.html"
    }
}

/// Dark animated gallery
pub struct CreativeFlow;

static CREATIVEFLOW: Defaults = Defaults {
    name: "Creative Flow",
    title: "Designing the Future of Digital Experiences",
    bio: "Pushing the boundaries of creativity through innovative design, immersive experiences, and cutting-edge technology that transforms ideas into extraordinary digital realities.",
    ..Defaults::BLANK
};

impl Renderer for CreativeFlow {
    fn layout(&self) -> Layout {
        Layout::CreativeFlow
    }

    fn defaults(&self) -> &'static Defaults {
        &CREATIVEFLOW
    }

    fn sections(&self) -> &'static [Section] {
        &[
            Section::Hero,
            Section::About,
            Section::Skills,
            Section::Work,
            Section::Experience,
            Section::Education,
            Section::Contact,
        ]
    }

    fn template_name(&self) -> &'static str {
        "layouts/creativeflow.html"
    }
}

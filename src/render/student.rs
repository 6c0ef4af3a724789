// Student layout

use super::{Defaults, Renderer, Section};
use crate::catalog::Layout;

/// Bright layout with a goals section
pub struct FreshStart;

static FRESHSTART: Defaults = Defaults {
    title: "Computer Science Student & Aspiring Developer",
    bio: "Passionate about technology and eager to make a positive impact through code. Currently pursuing my degree while building exciting projects and learning new skills every day!",
    ..Defaults::BLANK
};

impl Renderer for FreshStart {
    fn layout(&self) -> Layout {
        Layout::FreshStart
    }

    fn defaults(&self) -> &'static Defaults {
        &FRESHSTART
    }

    fn sections(&self) -> &'static [Section] {
        &[
            Section::Hero,
            Section::About,
            Section::Skills,
            Section::Education,
            Section::Projects,
            Section::Experience,
            Section::Goals,
            Section::Contact,
        ]
    }

    fn template_name(&self) -> &'static str {
        "layouts/freshstart.html"
    }
}

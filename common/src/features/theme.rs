use std::{cell::Cell, fmt, rc::Rc};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    context::Ctx,
    page::{EventKind, Page, Target},
};

pub const THEME_KEY: &str = "theme";
pub const LIGHT_CLASS: &str = "light-mode";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    // only an explicit "light" switches away from the default
    pub fn from_stored(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "☀️",
            Theme::Dark => "🌙",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn apply<P: Page>(ctx: &Ctx<P>, toggle: &P::Element, theme: Theme) {
    ctx.page
        .toggle_class(&ctx.page.body(), LIGHT_CLASS, Some(theme == Theme::Light));
    ctx.page.set_text(toggle, theme.icon());
}

pub fn theme_toggle<P: Page>(ctx: &Rc<Ctx<P>>) {
    let Some(toggle) = ctx.page.by_id("theme-toggle") else {
        return;
    };

    let stored = ctx.prefs().load(THEME_KEY);
    let theme = Rc::new(Cell::new(Theme::from_stored(stored.as_deref())));
    debug!(theme = %theme.get(), "applying stored theme");
    apply(ctx, &toggle, theme.get());

    let c = Rc::clone(ctx);
    let button = toggle.clone();
    ctx.on(Target::Element(&toggle), EventKind::Click, move |_| {
        let next = theme.get().toggled();
        theme.set(next);

        apply(&c, &button, next);
        c.prefs().store(THEME_KEY, next.as_str());
        info!(theme = %next, "theme switched");
    });
}

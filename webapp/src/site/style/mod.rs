use constcat::concat;

mod variables;
mod widgets;

pub use variables::CSS_VARIABLES;
pub use widgets::WIDGET_STYLES;

// everything injected at startup, variables first so the widget rules can use them
pub const INJECTED_STYLES: &str = concat!(CSS_VARIABLES, WIDGET_STYLES);

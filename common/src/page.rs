use std::cell::Cell;

// page abstraction
//
// every feature talks to the document through this trait so that the same initializers can
// run against the browser (see webapp/src/dom.rs) and against the in-memory page used by the
// unit tests.  lookups return Option/Vec rather than erroring, since a missing element only
// ever disables the feature that wanted it
pub trait Page: 'static {
    type Element: Clone + PartialEq + 'static;

    fn body(&self) -> Self::Element;

    fn select(&self, selector: &str) -> Option<Self::Element>;

    fn select_all(&self, selector: &str) -> Vec<Self::Element>;

    fn select_within(&self, parent: &Self::Element, selector: &str) -> Vec<Self::Element>;

    fn by_id(&self, id: &str) -> Option<Self::Element>;

    // creates a detached element with the given class
    fn create(&self, tag: &str, class: &str) -> Option<Self::Element>;

    fn append(&self, parent: &Self::Element, child: &Self::Element);

    fn detach(&self, el: &Self::Element);

    fn add_class(&self, el: &Self::Element, class: &str);

    fn remove_class(&self, el: &Self::Element, class: &str);

    // returns whether the class is present afterwards
    fn toggle_class(&self, el: &Self::Element, class: &str, force: Option<bool>) -> bool;

    fn has_class(&self, el: &Self::Element, class: &str) -> bool;

    fn attr(&self, el: &Self::Element, name: &str) -> Option<String>;

    fn text(&self, el: &Self::Element) -> String;

    fn set_text(&self, el: &Self::Element, text: &str);

    fn set_style(&self, el: &Self::Element, property: &str, value: &str);

    // current value of an input or textarea, empty for anything else
    fn field_value(&self, el: &Self::Element) -> String;

    fn reset_form(&self, form: &Self::Element);

    fn rect(&self, el: &Self::Element) -> Rect;

    fn offset_top(&self, el: &Self::Element) -> f64;

    fn viewport(&self) -> Viewport;

    fn scroll_y(&self) -> f64;

    fn scroll_to(&self, top: f64);

    fn alert(&self, message: &str);

    fn listen(&self, target: Target<'_, Self::Element>, kind: EventKind, handler: Handler);

    // drops every registered listener, along with whatever its handler captured
    fn release_listeners(&self);

    fn surface(&self, canvas: &Self::Element) -> Option<Box<dyn Surface>>;
}

pub type Handler = Box<dyn FnMut(&PageEvent)>;

#[derive(Clone, Copy, Debug)]
pub enum Target<'a, E> {
    Window,
    Document,
    Element(&'a E),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Load,
    MouseEnter,
    MouseLeave,
    MouseMove,
    Resize,
    Scroll,
    Submit,
}

impl EventKind {
    pub fn dom_name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Load => "load",
            Self::MouseEnter => "mouseenter",
            Self::MouseLeave => "mouseleave",
            Self::MouseMove => "mousemove",
            Self::Resize => "resize",
            Self::Scroll => "scroll",
            Self::Submit => "submit",
        }
    }

    // kinds whose handlers may call prevent_default; everything else can be registered passive
    pub fn cancelable(self) -> bool {
        matches!(self, Self::Click | Self::Submit)
    }
}

// the subset of a dom event that the features care about
//
// prevent_default only records the request, the backend applies it once the handler returns
#[derive(Debug, Default)]
pub struct PageEvent {
    pub client_x: f64,
    pub client_y: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    prevented: Cell<bool>,
}

impl PageEvent {
    pub fn at(client_x: f64, client_y: f64, offset_x: f64, offset_y: f64) -> Self {
        PageEvent {
            client_x,
            client_y,
            offset_x,
            offset_y,
            prevented: Cell::new(false),
        }
    }

    pub fn prevent_default(&self) {
        self.prevented.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.prevented.get()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

// 2d drawing target backing the particle background
pub trait Surface {
    fn resize(&self, width: f64, height: f64);

    fn clear(&self);

    fn dot(&self, x: f64, y: f64, radius: f64, color: &str);
}

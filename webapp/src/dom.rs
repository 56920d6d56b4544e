use std::cell::RefCell;

use gloo_events::{EventListener, EventListenerOptions};
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, HtmlCanvasElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement, MouseEvent, ScrollBehavior, ScrollToOptions, Window,
};

use common::{EventKind, Handler, Page, PageEvent, Rect, Surface, Target, Viewport};

use crate::canvas::CanvasSurface;

// dom calls that can throw are not worth failing a feature over, note them and carry on
fn note(op: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        debug!("{op} failed: {err:?}");
    }
}

pub struct WebPage {
    window: Window,
    document: Document,
    body: Element,
    listeners: RefCell<Vec<EventListener>>,
}

impl WebPage {
    pub fn new() -> anyhow::Result<Self> {
        let window = web_sys::window().ok_or_else(|| anyhow::Error::msg("no global window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::Error::msg("window has no document"))?;
        let body = document
            .body()
            .ok_or_else(|| anyhow::Error::msg("document has no body"))?;

        Ok(WebPage {
            window,
            document,
            body: body.into(),
            listeners: RefCell::new(Vec::new()),
        })
    }

    // appends a <style> element to the head with the given rules
    pub fn inject_style(&self, css: &str) -> anyhow::Result<()> {
        let head = self
            .document
            .head()
            .ok_or_else(|| anyhow::Error::msg("document has no head"))?;
        let style = self
            .document
            .create_element("style")
            .map_err(|err| anyhow::Error::msg(format!("failed to create style element: {err:?}")))?;

        style.set_text_content(Some(css));
        head.append_child(&style)
            .map_err(|err| anyhow::Error::msg(format!("failed to append style element: {err:?}")))?;

        Ok(())
    }

    fn collect(list: web_sys::NodeList) -> Vec<Element> {
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }
}

// gloo registers listeners passive by default, and the browser ignores preventDefault in a
// passive listener, so the kinds whose handlers cancel the default action opt out
fn listener_options(kind: EventKind) -> EventListenerOptions {
    if kind.cancelable() {
        EventListenerOptions::enable_prevent_default()
    } else {
        EventListenerOptions::default()
    }
}

fn to_page_event(event: &Event) -> PageEvent {
    match event.dyn_ref::<MouseEvent>() {
        Some(mouse) => PageEvent::at(
            f64::from(mouse.client_x()),
            f64::from(mouse.client_y()),
            f64::from(mouse.offset_x()),
            f64::from(mouse.offset_y()),
        ),
        None => PageEvent::default(),
    }
}

impl Page for WebPage {
    type Element = Element;

    fn body(&self) -> Element {
        self.body.clone()
    }

    // invalid selectors (a bare "#" href, say) throw, which we treat the same as no match
    fn select(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn select_all(&self, selector: &str) -> Vec<Element> {
        match self.document.query_selector_all(selector) {
            Ok(list) => Self::collect(list),
            Err(_) => Vec::new(),
        }
    }

    fn select_within(&self, parent: &Element, selector: &str) -> Vec<Element> {
        match parent.query_selector_all(selector) {
            Ok(list) => Self::collect(list),
            Err(_) => Vec::new(),
        }
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn create(&self, tag: &str, class: &str) -> Option<Element> {
        match self.document.create_element(tag) {
            Ok(el) => {
                el.set_class_name(class);
                Some(el)
            }
            Err(err) => {
                warn!("failed to create <{tag}>: {err:?}");
                None
            }
        }
    }

    fn append(&self, parent: &Element, child: &Element) {
        if let Err(err) = parent.append_child(child) {
            debug!("append failed: {err:?}");
        }
    }

    fn detach(&self, el: &Element) {
        el.remove();
    }

    fn add_class(&self, el: &Element, class: &str) {
        note("classList.add", el.class_list().add_1(class));
    }

    fn remove_class(&self, el: &Element, class: &str) {
        note("classList.remove", el.class_list().remove_1(class));
    }

    fn toggle_class(&self, el: &Element, class: &str, force: Option<bool>) -> bool {
        let list = el.class_list();
        let result = match force {
            Some(force) => list.toggle_with_force(class, force),
            None => list.toggle(class),
        };

        result.unwrap_or_else(|err| {
            debug!("classList.toggle failed: {err:?}");
            list.contains(class)
        })
    }

    fn has_class(&self, el: &Element, class: &str) -> bool {
        el.class_list().contains(class)
    }

    fn attr(&self, el: &Element, name: &str) -> Option<String> {
        el.get_attribute(name)
    }

    fn text(&self, el: &Element) -> String {
        el.text_content().unwrap_or_default()
    }

    fn set_text(&self, el: &Element, text: &str) {
        el.set_text_content(Some(text));
    }

    fn set_style(&self, el: &Element, property: &str, value: &str) {
        if let Some(el) = el.dyn_ref::<HtmlElement>() {
            note("style.setProperty", el.style().set_property(property, value));
        }
    }

    fn field_value(&self, el: &Element) -> String {
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn reset_form(&self, form: &Element) {
        if let Some(form) = form.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }

    fn rect(&self, el: &Element) -> Rect {
        let rect = el.get_bounding_client_rect();
        Rect {
            top: rect.top(),
            bottom: rect.bottom(),
            left: rect.left(),
            right: rect.right(),
        }
    }

    fn offset_top(&self, el: &Element) -> f64 {
        el.dyn_ref::<HtmlElement>()
            .map(|el| f64::from(el.offset_top()))
            .unwrap_or_else(|| self.rect(el).top + self.scroll_y())
    }

    fn viewport(&self) -> Viewport {
        let client = self.document.document_element();
        let dimension = |value: Result<JsValue, JsValue>, fallback: fn(&Element) -> i32| {
            value
                .ok()
                .and_then(|v| v.as_f64())
                .filter(|v| *v > 0.0)
                .or_else(|| client.as_ref().map(|c| f64::from(fallback(c))))
                .unwrap_or(0.0)
        };

        Viewport {
            width: dimension(self.window.inner_width(), Element::client_width),
            height: dimension(self.window.inner_height(), Element::client_height),
        }
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn alert(&self, message: &str) {
        note("alert", self.window.alert_with_message(message));
    }

    fn listen(&self, target: Target<'_, Element>, kind: EventKind, mut handler: Handler) {
        // the wasm module usually finishes loading after the window load event, so a late
        // load listener runs right away instead of waiting for an event that already fired
        if kind == EventKind::Load && self.document.ready_state() == "complete" {
            handler(&PageEvent::default());
            return;
        }

        let callback = move |event: &Event| {
            let page_event = to_page_event(event);
            handler(&page_event);
            if page_event.default_prevented() {
                event.prevent_default();
            }
        };

        let options = listener_options(kind);
        let listener = match target {
            Target::Window => {
                EventListener::new_with_options(&self.window, kind.dom_name(), options, callback)
            }
            Target::Document => {
                EventListener::new_with_options(&self.document, kind.dom_name(), options, callback)
            }
            Target::Element(el) => {
                EventListener::new_with_options(el, kind.dom_name(), options, callback)
            }
        };

        self.listeners.borrow_mut().push(listener);
    }

    // the handlers hold the context that owns this page, so the listeners have to be dropped
    // explicitly; taken out first so no borrow is held while they deregister
    fn release_listeners(&self) {
        let released = std::mem::take(&mut *self.listeners.borrow_mut());
        debug!(count = released.len(), "releasing event listeners");
        drop(released);
    }

    fn surface(&self, canvas: &Element) -> Option<Box<dyn Surface>> {
        let canvas = canvas.dyn_ref::<HtmlCanvasElement>()?.clone();
        CanvasSurface::new(canvas).map(|s| Box::new(s) as Box<dyn Surface>)
    }
}

// in-memory page, manual clock and preference map used by the unit tests
//
// the fake page understands just enough css to resolve the selectors the features use:
// selector lists, descendant combinators, and compounds built from a tag, #id, .class,
// [attr], [attr="v"] and [attr^="v"]

use std::{
    cell::{Cell, RefCell},
    collections::{BTreeMap, HashMap, HashSet},
    rc::Rc,
};

use crate::{
    config::SiteConfig,
    context::{Ctx, Preferences},
    page::{EventKind, Handler, Page, PageEvent, Rect, Surface, Target, Viewport},
    tasks::{TaskId, Timers},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct Node {
    tag: String,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    text: String,
    style: BTreeMap<String, String>,
    value: String,
    default_value: String,
    parent: Option<usize>,
    children: Vec<usize>,
    top: f64,
    height: f64,
    offset_top: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ListenKey {
    Window,
    Document,
    Node(usize),
}

#[derive(Debug, Default)]
pub struct SurfaceLog {
    pub size: (f64, f64),
    pub clears: usize,
    pub dots: usize,
}

struct FakeSurface(Rc<RefCell<SurfaceLog>>);

impl Surface for FakeSurface {
    fn resize(&self, width: f64, height: f64) {
        self.0.borrow_mut().size = (width, height);
    }

    fn clear(&self) {
        self.0.borrow_mut().clears += 1;
    }

    fn dot(&self, _x: f64, _y: f64, _radius: f64, _color: &str) {
        self.0.borrow_mut().dots += 1;
    }
}

pub struct FakePage {
    nodes: RefCell<Vec<Node>>,
    listeners: RefCell<Vec<(ListenKey, EventKind, Rc<RefCell<Handler>>)>>,
    viewport: Cell<Viewport>,
    scroll_y: Cell<f64>,
    pub alerts: RefCell<Vec<String>>,
    pub scrolls: RefCell<Vec<f64>>,
    pub surface: Rc<RefCell<SurfaceLog>>,
}

impl FakePage {
    pub fn new() -> Self {
        let body = Node {
            tag: String::from("body"),
            ..Node::default()
        };

        FakePage {
            nodes: RefCell::new(vec![body]),
            listeners: RefCell::new(Vec::new()),
            viewport: Cell::new(Viewport {
                width: 1200.0,
                height: 1000.0,
            }),
            scroll_y: Cell::new(0.0),
            alerts: RefCell::new(Vec::new()),
            scrolls: RefCell::new(Vec::new()),
            surface: Rc::new(RefCell::new(SurfaceLog::default())),
        }
    }

    // builds an element from a compound like `button#go.btn.primary`
    pub fn add(&self, parent: NodeId, spec: &str) -> NodeId {
        let compound = Compound::parse(spec);
        let mut node = Node {
            tag: compound.tag.clone().unwrap_or_else(|| String::from("div")),
            classes: compound.classes.clone(),
            parent: Some(parent.0),
            height: 50.0,
            ..Node::default()
        };
        if let Some(id) = compound.id {
            node.attrs.insert(String::from("id"), id);
        }

        let mut nodes = self.nodes.borrow_mut();
        let id = nodes.len();
        nodes.push(node);
        nodes[parent.0].children.push(id);
        NodeId(id)
    }

    pub fn set_attr(&self, el: NodeId, name: &str, value: &str) -> NodeId {
        self.nodes.borrow_mut()[el.0]
            .attrs
            .insert(name.to_owned(), value.to_owned());
        el
    }

    pub fn place(&self, el: NodeId, top: f64) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes[el.0].top = top;
        nodes[el.0].offset_top = top + self.scroll_y.get();
        el
    }

    pub fn set_offset_top(&self, el: NodeId, offset_top: f64) {
        self.nodes.borrow_mut()[el.0].offset_top = offset_top;
    }

    pub fn set_value(&self, el: NodeId, value: &str) {
        self.nodes.borrow_mut()[el.0].value = value.to_owned();
    }

    pub fn set_default_value(&self, el: NodeId, value: &str) {
        let mut nodes = self.nodes.borrow_mut();
        nodes[el.0].default_value = value.to_owned();
        nodes[el.0].value = value.to_owned();
    }

    pub fn set_viewport(&self, width: f64, height: f64) {
        self.viewport.set(Viewport { width, height });
    }

    // scrolling moves every element's client rect up by the delta
    pub fn scroll_by(&self, delta: f64) {
        self.scroll_y.set(self.scroll_y.get() + delta);
        for node in self.nodes.borrow_mut().iter_mut() {
            node.top -= delta;
        }
    }

    pub fn style(&self, el: NodeId, property: &str) -> Option<String> {
        self.nodes.borrow()[el.0].style.get(property).cloned()
    }

    pub fn children(&self, el: NodeId) -> Vec<NodeId> {
        self.nodes.borrow()[el.0]
            .children
            .iter()
            .map(|c| NodeId(*c))
            .collect()
    }

    pub fn is_attached(&self, el: NodeId) -> bool {
        let nodes = self.nodes.borrow();
        let mut cursor = el.0;
        while let Some(parent) = nodes[cursor].parent {
            cursor = parent;
        }
        cursor == 0
    }

    pub fn fire(&self, el: NodeId, kind: EventKind) -> PageEvent {
        self.dispatch(ListenKey::Node(el.0), kind, PageEvent::default())
    }

    pub fn fire_with(&self, el: NodeId, kind: EventKind, event: PageEvent) -> PageEvent {
        self.dispatch(ListenKey::Node(el.0), kind, event)
    }

    pub fn fire_window(&self, kind: EventKind) -> PageEvent {
        self.dispatch(ListenKey::Window, kind, PageEvent::default())
    }

    pub fn fire_document(&self, kind: EventKind, event: PageEvent) -> PageEvent {
        self.dispatch(ListenKey::Document, kind, event)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn dispatch(&self, key: ListenKey, kind: EventKind, event: PageEvent) -> PageEvent {
        let handlers: Vec<Rc<RefCell<Handler>>> = self
            .listeners
            .borrow()
            .iter()
            .filter(|(k, e, _)| *k == key && *e == kind)
            .map(|(_, _, h)| Rc::clone(h))
            .collect();

        for handler in handlers {
            (handler.borrow_mut())(&event);
        }

        event
    }

    fn document_order(&self, root: usize, out: &mut Vec<usize>) {
        let children = self.nodes.borrow()[root].children.clone();
        for child in children {
            out.push(child);
            self.document_order(child, out);
        }
    }

    fn matching(&self, root: usize, selector: &str) -> Vec<NodeId> {
        let selector = Selector::parse(selector);
        let mut order = Vec::new();
        self.document_order(root, &mut order);

        let nodes = self.nodes.borrow();
        order
            .into_iter()
            .filter(|id| selector.matches(&nodes, *id))
            .map(NodeId)
            .collect()
    }
}

impl Page for FakePage {
    type Element = NodeId;

    fn body(&self) -> NodeId {
        NodeId(0)
    }

    fn select(&self, selector: &str) -> Option<NodeId> {
        self.matching(0, selector).into_iter().next()
    }

    fn select_all(&self, selector: &str) -> Vec<NodeId> {
        self.matching(0, selector)
    }

    fn select_within(&self, parent: &NodeId, selector: &str) -> Vec<NodeId> {
        self.matching(parent.0, selector)
    }

    fn by_id(&self, id: &str) -> Option<NodeId> {
        let mut order = Vec::new();
        self.document_order(0, &mut order);

        let nodes = self.nodes.borrow();
        order
            .into_iter()
            .find(|n| nodes[*n].attrs.get("id").map(String::as_str) == Some(id))
            .map(NodeId)
    }

    fn create(&self, tag: &str, class: &str) -> Option<NodeId> {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(Node {
            tag: tag.to_owned(),
            classes: class.split_whitespace().map(str::to_owned).collect(),
            ..Node::default()
        });
        Some(NodeId(nodes.len() - 1))
    }

    fn append(&self, parent: &NodeId, child: &NodeId) {
        self.detach(child);

        let mut nodes = self.nodes.borrow_mut();
        nodes[child.0].parent = Some(parent.0);
        nodes[parent.0].children.push(child.0);
    }

    fn detach(&self, el: &NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        if let Some(parent) = nodes[el.0].parent.take() {
            nodes[parent].children.retain(|c| *c != el.0);
        }
    }

    fn add_class(&self, el: &NodeId, class: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let classes = &mut nodes[el.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_owned());
        }
    }

    fn remove_class(&self, el: &NodeId, class: &str) {
        self.nodes.borrow_mut()[el.0].classes.retain(|c| c != class);
    }

    fn toggle_class(&self, el: &NodeId, class: &str, force: Option<bool>) -> bool {
        let present = force.unwrap_or_else(|| !self.has_class(el, class));
        if present {
            self.add_class(el, class);
        } else {
            self.remove_class(el, class);
        }
        present
    }

    fn has_class(&self, el: &NodeId, class: &str) -> bool {
        self.nodes.borrow()[el.0].classes.iter().any(|c| c == class)
    }

    fn attr(&self, el: &NodeId, name: &str) -> Option<String> {
        self.nodes.borrow()[el.0].attrs.get(name).cloned()
    }

    fn text(&self, el: &NodeId) -> String {
        self.nodes.borrow()[el.0].text.clone()
    }

    fn set_text(&self, el: &NodeId, text: &str) {
        self.nodes.borrow_mut()[el.0].text = text.to_owned();
    }

    fn set_style(&self, el: &NodeId, property: &str, value: &str) {
        self.nodes.borrow_mut()[el.0]
            .style
            .insert(property.to_owned(), value.to_owned());
    }

    fn field_value(&self, el: &NodeId) -> String {
        self.nodes.borrow()[el.0].value.clone()
    }

    fn reset_form(&self, form: &NodeId) {
        let fields = self.select_within(form, "input, textarea");
        let mut nodes = self.nodes.borrow_mut();
        for field in fields {
            nodes[field.0].value = nodes[field.0].default_value.clone();
        }
    }

    fn rect(&self, el: &NodeId) -> Rect {
        let nodes = self.nodes.borrow();
        let node = &nodes[el.0];
        Rect {
            top: node.top,
            bottom: node.top + node.height,
            left: 0.0,
            right: 100.0,
        }
    }

    fn offset_top(&self, el: &NodeId) -> f64 {
        self.nodes.borrow()[el.0].offset_top
    }

    fn viewport(&self) -> Viewport {
        self.viewport.get()
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn scroll_to(&self, top: f64) {
        self.scrolls.borrow_mut().push(top);
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_owned());
    }

    fn listen(&self, target: Target<'_, NodeId>, kind: EventKind, handler: Handler) {
        let key = match target {
            Target::Window => ListenKey::Window,
            Target::Document => ListenKey::Document,
            Target::Element(el) => ListenKey::Node(el.0),
        };

        self.listeners
            .borrow_mut()
            .push((key, kind, Rc::new(RefCell::new(handler))));
    }

    fn release_listeners(&self) {
        self.listeners.borrow_mut().clear();
    }

    fn surface(&self, canvas: &NodeId) -> Option<Box<dyn Surface>> {
        if self.nodes.borrow()[canvas.0].tag != "canvas" {
            return None;
        }

        Some(Box::new(FakeSurface(Rc::clone(&self.surface))))
    }
}

#[derive(Debug)]
enum AttrTest {
    Present(String),
    Equals(String, String),
    Prefix(String, String),
}

#[derive(Debug, Default)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrTest>,
}

impl Compound {
    fn parse(text: &str) -> Self {
        let mut compound = Compound::default();
        let mut chars = text.chars().peekable();

        let tag: String = std::iter::from_fn(|| chars.next_if(|c| c.is_alphanumeric() || *c == '-'))
            .collect();
        if !tag.is_empty() {
            compound.tag = Some(tag);
        }

        while let Some(c) = chars.next() {
            match c {
                '#' | '.' => {
                    let name: String =
                        std::iter::from_fn(|| chars.next_if(|c| c.is_alphanumeric() || *c == '-' || *c == '_'))
                            .collect();
                    if c == '#' {
                        compound.id = Some(name);
                    } else {
                        compound.classes.push(name);
                    }
                }
                '[' => {
                    let body: String = std::iter::from_fn(|| chars.next_if(|c| *c != ']')).collect();
                    chars.next();

                    let test = if let Some((name, value)) = body.split_once("^=") {
                        AttrTest::Prefix(name.to_owned(), value.trim_matches('"').to_owned())
                    } else if let Some((name, value)) = body.split_once('=') {
                        AttrTest::Equals(name.to_owned(), value.trim_matches('"').to_owned())
                    } else {
                        AttrTest::Present(body)
                    };
                    compound.attrs.push(test);
                }
                _ => {}
            }
        }

        compound
    }

    fn matches(&self, node: &Node) -> bool {
        if let Some(tag) = &self.tag {
            if node.tag != *tag {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if node.attrs.get("id") != Some(id) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| node.classes.contains(c)) {
            return false;
        }

        self.attrs.iter().all(|test| match test {
            AttrTest::Present(name) => node.attrs.contains_key(name),
            AttrTest::Equals(name, value) => node.attrs.get(name) == Some(value),
            AttrTest::Prefix(name, value) => node
                .attrs
                .get(name)
                .is_some_and(|v| v.starts_with(value.as_str())),
        })
    }
}

struct Selector(Vec<Vec<Compound>>);

impl Selector {
    fn parse(text: &str) -> Self {
        Selector(
            text.split(',')
                .map(|complex| complex.split_whitespace().map(Compound::parse).collect())
                .collect(),
        )
    }

    fn matches(&self, nodes: &[Node], id: usize) -> bool {
        self.0.iter().any(|chain| {
            let Some((last, ancestors)) = chain.split_last() else {
                return false;
            };
            if !last.matches(&nodes[id]) {
                return false;
            }

            // greedy walk up the tree for the remaining compounds
            let mut cursor = nodes[id].parent;
            for compound in ancestors.iter().rev() {
                loop {
                    match cursor {
                        None => return false,
                        Some(p) => {
                            cursor = nodes[p].parent;
                            if compound.matches(&nodes[p]) {
                                break;
                            }
                        }
                    }
                }
            }
            true
        })
    }
}

enum Job {
    Once(Box<dyn FnOnce()>),
    Every(u32, Box<dyn FnMut()>),
    Frame(Box<dyn FnOnce(f64)>),
}

// deterministic timer backend, time only moves through advance()
pub struct FakeClock {
    now: Cell<u64>,
    seq: Cell<u64>,
    queue: RefCell<BTreeMap<(u64, u64), (TaskId, Job)>>,
    cancelled: RefCell<HashSet<TaskId>>,
}

pub const FRAME_MS: u64 = 16;

impl FakeClock {
    pub fn new() -> Self {
        FakeClock {
            now: Cell::new(0),
            seq: Cell::new(0),
            queue: RefCell::new(BTreeMap::new()),
            cancelled: RefCell::new(HashSet::new()),
        }
    }

    fn push(&self, due: u64, id: TaskId, job: Job) {
        let seq = self.seq.get();
        self.seq.set(seq + 1);
        self.queue.borrow_mut().insert((due, seq), (id, job));
    }

    pub fn queued(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn advance(&self, ms: u64) {
        let target = self.now.get() + ms;

        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                match queue.first_key_value() {
                    Some((&(due, _), _)) if due <= target => queue.pop_first(),
                    _ => None,
                }
            };
            let Some(((due, _), (id, job))) = next else {
                break;
            };

            self.now.set(due);
            match job {
                Job::Once(task) => task(),
                Job::Frame(task) => task(due as f64),
                Job::Every(period, mut task) => {
                    task();
                    if !self.cancelled.borrow().contains(&id) {
                        self.push(due + u64::from(period.max(1)), id, Job::Every(period, task));
                    }
                }
            }
        }

        self.now.set(target);
    }
}

impl Timers for FakeClock {
    fn now(&self) -> f64 {
        self.now.get() as f64
    }

    fn timeout(&self, id: TaskId, delay_ms: u32, task: Box<dyn FnOnce()>) {
        self.push(self.now.get() + u64::from(delay_ms), id, Job::Once(task));
    }

    fn interval(&self, id: TaskId, period_ms: u32, task: Box<dyn FnMut()>) {
        self.push(
            self.now.get() + u64::from(period_ms.max(1)),
            id,
            Job::Every(period_ms, task),
        );
    }

    fn frame(&self, id: TaskId, task: Box<dyn FnOnce(f64)>) {
        self.push(self.now.get() + FRAME_MS, id, Job::Frame(task));
    }

    fn cancel(&self, id: TaskId) {
        self.cancelled.borrow_mut().insert(id);
        self.queue.borrow_mut().retain(|_, (task, _)| *task != id);
    }
}

#[derive(Clone, Default)]
pub struct MemoryPrefs(pub Rc<RefCell<HashMap<String, String>>>);

impl Preferences for MemoryPrefs {
    fn load(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn store(&self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

pub struct Harness {
    pub ctx: Rc<Ctx<FakePage>>,
    pub clock: Rc<FakeClock>,
    pub prefs: MemoryPrefs,
}

impl Harness {
    pub fn new() -> Self {
        Self::with(SiteConfig::default(), MemoryPrefs::default())
    }

    pub fn with(config: SiteConfig, prefs: MemoryPrefs) -> Self {
        let clock = Rc::new(FakeClock::new());
        let ctx = Ctx::new(
            FakePage::new(),
            clock.clone(),
            Box::new(prefs.clone()),
            config,
            7,
        );

        Harness { ctx, clock, prefs }
    }

    pub fn page(&self) -> &FakePage {
        &self.ctx.page
    }

    pub fn body(&self) -> NodeId {
        NodeId(0)
    }
}

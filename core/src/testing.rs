//! In-memory stand-ins for the browser collaborators.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use crate::*;

#[derive(Clone, Default)]
pub(crate) struct FakeCookies(Rc<CookieJar>);

#[derive(Default)]
pub(crate) struct CookieJar {
    values: RefCell<BTreeMap<String, String>>,
    writes: Cell<usize>,
    fail: Cell<bool>,
}

impl FakeCookies {
    /// Seeds a cookie without counting it as a write.
    pub(crate) fn insert(&self, name: &str, value: &str) {
        self.0
            .values
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    pub(crate) fn value(&self, name: &str) -> Option<String> {
        self.0.values.borrow().get(name).cloned()
    }

    pub(crate) fn snapshot(&self) -> BTreeMap<String, String> {
        self.0.values.borrow().clone()
    }

    pub(crate) fn writes(&self) -> usize {
        self.0.writes.get()
    }

    pub(crate) fn fail_writes(&self, fail: bool) {
        self.0.fail.set(fail);
    }
}

impl CookieSource for FakeCookies {
    fn get(&self, name: &str) -> Option<String> {
        self.value(name)
    }
}

impl CookieStore for FakeCookies {
    fn set(&self, name: &str, value: &str, _options: &CookieOptions) -> Result<()> {
        if self.0.fail.get() {
            return Err(DarkModeError::Cookie {
                name: name.to_string(),
                reason: "cookies disabled".to_string(),
            });
        }
        self.0.writes.set(self.0.writes.get() + 1);
        self.insert(name, value);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub(crate) struct FakeElement(Rc<ElementState>);

#[derive(Default)]
pub(crate) struct ElementState {
    class_override: Option<String>,
    classes: RefCell<BTreeSet<String>>,
    mutations: Cell<usize>,
}

impl FakeElement {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_override(class_name: &str) -> Self {
        Self(Rc::new(ElementState {
            class_override: Some(class_name.to_string()),
            ..ElementState::default()
        }))
    }

    pub(crate) fn add_class(&self, class: &str) {
        self.0.classes.borrow_mut().insert(class.to_string());
    }

    pub(crate) fn has_class(&self, class: &str) -> bool {
        self.0.classes.borrow().contains(class)
    }

    pub(crate) fn classes(&self) -> BTreeSet<String> {
        self.0.classes.borrow().clone()
    }

    pub(crate) fn mutations(&self) -> usize {
        self.0.mutations.get()
    }
}

impl TargetElement for FakeElement {
    fn data_attribute(&self, name: &str) -> Option<String> {
        (name == TARGET_CLASS_NAME_ATTRIBUTE)
            .then(|| self.0.class_override.clone())
            .flatten()
    }

    fn toggle_class(&self, class: &str, force: bool) -> Result<()> {
        self.0.mutations.set(self.0.mutations.get() + 1);
        let mut classes = self.0.classes.borrow_mut();
        if force {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
        Ok(())
    }
}

pub(crate) type FakeNode = TargetNode<FakeElement>;

impl FakeNode {
    pub(crate) fn element() -> Self {
        TargetNode::Element(FakeElement::new())
    }
}

#[derive(Clone)]
pub(crate) struct FakeDom {
    nodes: Rc<Vec<FakeNode>>,
    fail: Rc<Cell<bool>>,
}

impl FakeDom {
    pub(crate) fn new(nodes: &[FakeNode]) -> Self {
        Self {
            nodes: Rc::new(nodes.to_vec()),
            fail: Rc::default(),
        }
    }

    pub(crate) fn fail_queries(&self, fail: bool) {
        self.fail.set(fail);
    }
}

impl Dom for FakeDom {
    type Element = FakeElement;

    fn query_targets(&self, selector: &str) -> Result<Vec<FakeNode>> {
        if self.fail.get() {
            return Err(DarkModeError::Dom(selector.to_string()));
        }
        Ok(self.nodes.as_ref().clone())
    }
}

type Callback = Rc<dyn Fn(bool)>;

#[derive(Clone)]
pub(crate) struct FakeSignal(Rc<SignalState>);

pub(crate) struct SignalState {
    matches: Cell<bool>,
    listeners: RefCell<Vec<(usize, Callback)>>,
    next_id: Cell<usize>,
    fail: Cell<bool>,
}

impl FakeSignal {
    pub(crate) fn new(matches: bool) -> Self {
        Self(Rc::new(SignalState {
            matches: Cell::new(matches),
            listeners: RefCell::default(),
            next_id: Cell::new(0),
            fail: Cell::new(false),
        }))
    }

    /// Flips the OS scheme and fires every registered listener.
    pub(crate) fn set_matches(&self, matches: bool) {
        self.0.matches.set(matches);
        let listeners: Vec<Callback> = self
            .0
            .listeners
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in listeners {
            callback(matches);
        }
    }

    pub(crate) fn listener_count(&self) -> usize {
        self.0.listeners.borrow().len()
    }

    pub(crate) fn fail_subscribe(&self, fail: bool) {
        self.0.fail.set(fail);
    }
}

impl ColorSchemeSignal for FakeSignal {
    type Listener = usize;

    fn matches(&self) -> bool {
        self.0.matches.get()
    }

    fn subscribe(&self, callback: Box<dyn Fn(bool)>) -> Result<usize> {
        if self.0.fail.get() {
            return Err(DarkModeError::Listener("unsupported".to_string()));
        }
        let id = self.0.next_id.get();
        self.0.next_id.set(id + 1);
        self.0.listeners.borrow_mut().push((id, Rc::from(callback)));
        Ok(id)
    }

    fn unsubscribe(&self, listener: usize) {
        self.0.listeners.borrow_mut().retain(|(id, _)| *id != listener);
    }
}

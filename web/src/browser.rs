//! web-sys backed collaborators.

use darkmode_core::{
    ColorSchemeSignal, CookieHeader, CookieOptions, CookieSource, CookieStore, DarkModeError, Dom,
    Result, TargetElement, TargetNode,
};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, HtmlElement, MediaQueryList, MediaQueryListEvent};

pub const SYSTEM_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or(DarkModeError::NoBrowser)
}

fn document() -> Result<web_sys::Document> {
    window()?.document().ok_or(DarkModeError::NoBrowser)
}

/// `document.cookie`.
#[derive(Clone, Debug)]
pub struct DocumentCookies {
    document: HtmlDocument,
}

impl DocumentCookies {
    pub fn new() -> Result<Self> {
        let document = document()?
            .dyn_into::<HtmlDocument>()
            .map_err(|_| DarkModeError::Dom("document has no cookie jar".to_string()))?;
        Ok(Self { document })
    }

    fn raw(&self) -> String {
        self.document.cookie().unwrap_or_else(|err| {
            log::debug!("cookies unavailable: {:?}", err);
            String::new()
        })
    }
}

impl CookieSource for DocumentCookies {
    fn get(&self, name: &str) -> Option<String> {
        CookieHeader::new(&self.raw()).find(name)
    }
}

impl CookieStore for DocumentCookies {
    fn set(&self, name: &str, value: &str, options: &CookieOptions) -> Result<()> {
        let cookie = options.build(name, value).encoded().to_string();
        self.document
            .set_cookie(&cookie)
            .map_err(|err| DarkModeError::Cookie {
                name: name.to_string(),
                reason: format!("{:?}", err),
            })
    }
}

/// A matched element that can carry a class list.
#[derive(Clone, Debug, PartialEq)]
pub struct HtmlTarget(pub HtmlElement);

impl TargetElement for HtmlTarget {
    fn data_attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn toggle_class(&self, class: &str, force: bool) -> Result<()> {
        self.0
            .class_list()
            .toggle_with_force(class, force)
            .map(|_| ())
            .map_err(|err| DarkModeError::Dom(format!("toggling {:?}: {:?}", class, err)))
    }
}

#[derive(Clone, Debug)]
pub struct DocumentDom {
    document: web_sys::Document,
}

impl DocumentDom {
    pub fn new() -> Result<Self> {
        Ok(Self {
            document: document()?,
        })
    }
}

impl Dom for DocumentDom {
    type Element = HtmlTarget;

    fn query_targets(&self, selector: &str) -> Result<Vec<TargetNode<HtmlTarget>>> {
        let nodes = self
            .document
            .query_selector_all(selector)
            .map_err(|err| DarkModeError::Dom(format!("bad selector {:?}: {:?}", selector, err)))?;
        let targets = (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .map(|node| match node.dyn_into::<HtmlElement>() {
                Ok(element) => TargetNode::Element(HtmlTarget(element)),
                Err(node) => TargetNode::Other(node.node_name()),
            })
            .collect();
        Ok(targets)
    }
}

/// A `matchMedia` query list, by default `(prefers-color-scheme: dark)`.
#[derive(Clone, Debug)]
pub struct MediaQuerySignal {
    query: MediaQueryList,
}

impl MediaQuerySignal {
    pub fn system() -> Result<Self> {
        Self::new(SYSTEM_DARK_QUERY)
    }

    pub fn new(media: &str) -> Result<Self> {
        let query = window()?
            .match_media(media)
            .map_err(|err| DarkModeError::Listener(format!("{:?}", err)))?
            .ok_or_else(|| DarkModeError::Listener(format!("unsupported query {}", media)))?;
        Ok(Self { query })
    }
}

impl ColorSchemeSignal for MediaQuerySignal {
    /// Removes itself from the query list when dropped.
    type Listener = EventListener;

    fn matches(&self) -> bool {
        self.query.matches()
    }

    fn subscribe(&self, callback: Box<dyn Fn(bool)>) -> Result<EventListener> {
        let query = self.query.clone();
        Ok(EventListener::new(&self.query, "change", move |event| {
            let matches = event
                .dyn_ref::<MediaQueryListEvent>()
                .map_or_else(|| query.matches(), MediaQueryListEvent::matches);
            callback(matches);
        }))
    }

    fn unsubscribe(&self, listener: EventListener) {
        drop(listener);
    }
}

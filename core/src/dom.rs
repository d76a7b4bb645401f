use std::borrow::Cow;

use crate::{Config, Result};

/// An element opted in to dark mode class synchronization.
pub trait TargetElement {
    fn data_attribute(&self, name: &str) -> Option<String>;

    /// Adds `class` when `force` is set, removes it otherwise.
    fn toggle_class(&self, class: &str, force: bool) -> Result<()>;
}

/// A node matched by the target selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TargetNode<E> {
    Element(E),
    /// Anything that can't carry a class list, with a description for logs.
    Other(String),
}

/// A queryable, mutable element set.
pub trait Dom {
    type Element: TargetElement;

    fn query_targets(&self, selector: &str) -> Result<Vec<TargetNode<Self::Element>>>;
}

impl<T: Dom + ?Sized> Dom for &T {
    type Element = T::Element;

    fn query_targets(&self, selector: &str) -> Result<Vec<TargetNode<Self::Element>>> {
        (**self).query_targets(selector)
    }
}

/// Class tokens can't be empty or contain whitespace.
pub fn is_valid_class_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(|c: char| c.is_ascii_whitespace())
}

/// The class an element toggles: its override attribute when usable,
/// otherwise the configured default.
pub fn class_name_for<'c, E: TargetElement>(element: &E, config: &'c Config) -> Cow<'c, str> {
    match element.data_attribute(&config.class_name_attribute) {
        Some(name) if is_valid_class_name(&name) => Cow::Owned(name),
        _ => Cow::Borrowed(&config.default_class_name),
    }
}

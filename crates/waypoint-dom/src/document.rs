#![forbid(unsafe_code)]

//! Headless element tree.
//!
//! [`Document`] is an arena of [`Element`]s with parent/child links. Each
//! element carries the bounding rectangle the host measured for it, relative
//! to the viewport. It serves both as the reference [`ElementSource`] for
//! tests and as the adapter target for hosts that mirror their UI tree into
//! a flat structure.
//!
//! # Invariants
//!
//! 1. Document order is pre-order depth-first from the root list, siblings in
//!    insertion order.
//! 2. [`ElementId`]s are stable for the lifetime of the document; elements
//!    are never removed, only detached.

use ahash::AHashMap;
use waypoint_core::ViewportRect;

use crate::selector::{Compound, Selector, SelectorError};

/// Index of an element inside its [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

/// A single element.
#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: AHashMap<String, String>,
    rect: ViewportRect,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

impl Element {
    /// Start building an element with the given tag name.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            id: None,
            classes: Vec::new(),
            attributes: AHashMap::new(),
            rect: ViewportRect::default(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// Set the element id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Set an attribute. Names are case-insensitive.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    /// Set the bounding rectangle.
    #[must_use]
    pub fn rect(mut self, rect: ViewportRect) -> Self {
        self.rect = rect;
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn element_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn bounding_rect(&self) -> ViewportRect {
        self.rect
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    /// Check this element against one compound selector.
    pub fn matches(&self, compound: &Compound) -> bool {
        if compound.tag.as_deref().is_some_and(|tag| tag != self.tag) {
            return false;
        }
        if compound
            .id
            .as_deref()
            .is_some_and(|id| self.id.as_deref() != Some(id))
        {
            return false;
        }
        if !compound
            .classes
            .iter()
            .all(|class| self.classes.iter().any(|c| c == class))
        {
            return false;
        }
        compound.attrs.iter().all(|attr| {
            // `id` and `class` are also reachable as attributes.
            let actual = match attr.name.as_str() {
                "id" => self.id.clone(),
                "class" if !self.classes.is_empty() => Some(self.classes.join(" ")),
                name => self.attributes.get(name).cloned(),
            };
            match (&attr.value, actual) {
                (None, actual) => actual.is_some(),
                (Some(expected), Some(actual)) => *expected == actual,
                (Some(_), None) => false,
            }
        })
    }

    /// Check this element against any entry of a selector list.
    pub fn matches_selector(&self, selector: &Selector) -> bool {
        selector.alternatives().iter().any(|c| self.matches(c))
    }
}

/// Anything that can resolve a selector to an element's bounding rectangle.
///
/// Implementations must return the rectangle of the first element in
/// document order that matches, measured at call time. Hosts with a native
/// selector engine can implement this directly and report their own parse
/// failures as [`SelectorError::Rejected`].
pub trait ElementSource {
    /// Bounding rectangle of the first match, or `Ok(None)` when nothing matches.
    fn query_rect(&self, selector: &str) -> Result<Option<ViewportRect>, SelectorError>;
}

/// In-memory element tree.
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: Vec<Element>,
    roots: Vec<ElementId>,
    by_id: AHashMap<String, Vec<ElementId>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a top-level element.
    pub fn append(&mut self, element: Element) -> ElementId {
        let id = self.insert(element, None);
        self.roots.push(id);
        id
    }

    /// Append `element` as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this document.
    pub fn append_child(&mut self, parent: ElementId, element: Element) -> ElementId {
        assert!(parent.0 < self.elements.len(), "unknown parent {parent:?}");
        let id = self.insert(element, Some(parent));
        self.elements[parent.0].children.push(id);
        id
    }

    fn insert(&mut self, mut element: Element, parent: Option<ElementId>) -> ElementId {
        let id = ElementId(self.elements.len());
        element.parent = parent;
        element.children.clear();
        if let Some(key) = &element.id {
            self.by_id.entry(key.clone()).or_default().push(id);
        }
        self.elements.push(element);
        id
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    /// Number of elements, attached or not.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Update an element's bounding rectangle, e.g. after a reflow or scroll.
    ///
    /// Returns `false` if the id is unknown.
    pub fn set_rect(&mut self, id: ElementId, rect: ViewportRect) -> bool {
        match self.elements.get_mut(id.0) {
            Some(element) => {
                element.rect = rect;
                true
            }
            None => false,
        }
    }

    /// Shift every element by the same amount, as a page scroll does to
    /// viewport-relative rectangles.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        for element in &mut self.elements {
            element.rect = ViewportRect::new(
                element.rect.left + dx,
                element.rect.top + dy,
                element.rect.width,
                element.rect.height,
            );
        }
    }

    /// Remove an element and its subtree from the tree. The ids stay valid
    /// but the elements no longer match any selector.
    pub fn detach(&mut self, id: ElementId) -> bool {
        let Some(parent) = self.elements.get(id.0).map(|e| e.parent) else {
            return false;
        };
        match parent {
            Some(parent) => self.elements[parent.0].children.retain(|&c| c != id),
            None => self.roots.retain(|&r| r != id),
        }
        self.elements[id.0].parent = None;
        true
    }

    /// Attached elements in document order.
    pub fn iter(&self) -> DocumentOrder<'_> {
        DocumentOrder {
            doc: self,
            stack: self.roots.iter().rev().copied().collect(),
        }
    }

    /// First attached element, in document order, whose `id` is `key`.
    pub fn get_by_id(&self, key: &str) -> Option<ElementId> {
        let candidates = self.by_id.get(key)?;
        if candidates.len() == 1 {
            let only = candidates[0];
            return self.is_attached(only).then_some(only);
        }
        self.iter()
            .map(|(id, _)| id)
            .find(|id| candidates.contains(id))
    }

    /// First attached element, in document order, matching `selector`.
    pub fn query(&self, selector: &Selector) -> Option<ElementId> {
        // Plain `#id` is the common case for tour steps.
        if let [only] = selector.alternatives()
            && let Some(key) = &only.id
            && only.tag.is_none()
            && only.classes.is_empty()
            && only.attrs.is_empty()
        {
            return self.get_by_id(key);
        }
        self.iter()
            .find(|(_, element)| element.matches_selector(selector))
            .map(|(id, _)| id)
    }

    /// Every attached element matching `selector`, in document order.
    pub fn query_all(&self, selector: &Selector) -> Vec<ElementId> {
        self.iter()
            .filter(|(_, element)| element.matches_selector(selector))
            .map(|(id, _)| id)
            .collect()
    }

    fn is_attached(&self, id: ElementId) -> bool {
        let mut current = id;
        loop {
            match self.elements[current.0].parent {
                Some(parent) => current = parent,
                None => return self.roots.contains(&current),
            }
        }
    }
}

impl ElementSource for Document {
    fn query_rect(&self, selector: &str) -> Result<Option<ViewportRect>, SelectorError> {
        let selector = Selector::parse(selector)?;
        Ok(self
            .query(&selector)
            .and_then(|id| self.get(id))
            .map(Element::bounding_rect))
    }
}

/// Pre-order iterator over attached elements.
pub struct DocumentOrder<'a> {
    doc: &'a Document,
    stack: Vec<ElementId>,
}

impl<'a> Iterator for DocumentOrder<'a> {
    type Item = (ElementId, &'a Element);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let element = &self.doc.elements[id.0];
        self.stack.extend(element.children.iter().rev().copied());
        Some((id, element))
    }
}

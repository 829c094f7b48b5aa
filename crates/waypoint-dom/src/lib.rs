#![forbid(unsafe_code)]

//! Tour target lookup.
//!
//! [`locate_target`] resolves a selector string to the bounding rectangle of
//! one element through any [`ElementSource`]. [`Document`] is the bundled
//! headless element tree.

pub mod document;
pub mod locate;
pub mod selector;

pub use document::{Document, DocumentOrder, Element, ElementId, ElementSource};
pub use locate::{LocateError, locate_target};
pub use selector::{AttrMatch, Compound, Selector, SelectorError};

#![forbid(unsafe_code)]

//! Target lookup at step activation.
//!
//! A missing target is a hard stop for the step: the controller must not
//! anchor a tooltip at the origin. Lookups are never cached or retried; the
//! caller invokes [`locate_target`] again on every step change because the
//! page may have reflowed in between.

use thiserror::Error;
use tracing::warn;
use waypoint_core::ViewportRect;

use crate::document::ElementSource;
use crate::selector::SelectorError;

/// Why a step's target could not be located.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocateError {
    /// The selector is well-formed but matched nothing.
    #[error("no element matches target selector `{selector}`")]
    TargetNotFound { selector: String },
    /// The selector could not be parsed.
    #[error("invalid target selector `{selector}`: {source}")]
    InvalidSelector {
        selector: String,
        #[source]
        source: SelectorError,
    },
}

impl LocateError {
    /// The selector that failed.
    pub fn selector(&self) -> &str {
        match self {
            Self::TargetNotFound { selector } | Self::InvalidSelector { selector, .. } => selector,
        }
    }
}

pub type Result<T> = std::result::Result<T, LocateError>;

/// Resolve `selector` to the current bounding rectangle of its first match.
pub fn locate_target<S>(source: &S, selector: &str) -> Result<ViewportRect>
where
    S: ElementSource + ?Sized,
{
    match source.query_rect(selector) {
        Ok(Some(rect)) => Ok(rect),
        Ok(None) => {
            warn!(selector, "tour target not found");
            Err(LocateError::TargetNotFound {
                selector: selector.to_string(),
            })
        }
        Err(err) => {
            warn!(selector, error = %err, "invalid tour target selector");
            Err(LocateError::InvalidSelector {
                selector: selector.to_string(),
                source: err,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Document, Element};
    use tracing_test::traced_test;

    fn doc() -> Document {
        let mut doc = Document::new();
        doc.append(
            Element::new("button")
                .id("save")
                .rect(ViewportRect::new(100.0, 100.0, 50.0, 50.0)),
        );
        doc
    }

    #[test]
    fn finds_existing_target() {
        let rect = locate_target(&doc(), "#save").unwrap();
        assert_eq!(rect, ViewportRect::new(100.0, 100.0, 50.0, 50.0));
    }

    #[test]
    fn missing_target_is_an_error() {
        let err = locate_target(&doc(), "#missing").unwrap_err();
        assert_eq!(
            err,
            LocateError::TargetNotFound {
                selector: "#missing".into()
            }
        );
        assert_eq!(err.selector(), "#missing");
        assert_eq!(
            err.to_string(),
            "no element matches target selector `#missing`"
        );
    }

    #[test]
    fn malformed_selector_is_reported() {
        let err = locate_target(&doc(), "div > #save").unwrap_err();
        assert!(matches!(
            err,
            LocateError::InvalidSelector {
                source: SelectorError::Combinator { pos: 3 },
                ..
            }
        ));
    }

    #[test]
    fn conflicting_ids_never_resolve() {
        let err = locate_target(&doc(), "#other#save").unwrap_err();
        assert!(matches!(
            err,
            LocateError::InvalidSelector {
                source: SelectorError::UnexpectedChar { ch: '#', pos: 6 },
                ..
            }
        ));
    }

    #[test]
    fn lookup_reflects_current_geometry() {
        let mut doc = doc();
        let first = locate_target(&doc, "#save").unwrap();
        doc.translate(0.0, -40.0);
        let second = locate_target(&doc, "#save").unwrap();
        assert_eq!(second.top, first.top - 40.0);
    }

    #[test]
    fn works_through_trait_objects() {
        let doc = doc();
        let source: &dyn ElementSource = &doc;
        assert!(locate_target(source, "button").is_ok());
    }

    #[test]
    #[traced_test]
    fn miss_is_logged() {
        let _ = locate_target(&doc(), ".nope");
        assert!(logs_contain("tour target not found"));
    }
}

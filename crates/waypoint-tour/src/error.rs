#![forbid(unsafe_code)]

use thiserror::Error;
use waypoint_dom::LocateError;

/// Errors surfaced by the tour controller.
#[derive(Debug, Error)]
pub enum TourError {
    /// The step's target could not be resolved; the step is not shown.
    #[error(transparent)]
    Target(#[from] LocateError),

    /// A tour definition failed to parse.
    #[error("invalid tour definition: {0}")]
    Definition(#[from] serde_json::Error),

    /// The tour has no steps.
    #[error("tour has no steps")]
    EmptyTour,

    /// A step operation was issued while no tour is running.
    #[error("tour is not active")]
    NotActive,
}

pub type Result<T> = std::result::Result<T, TourError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_error_is_transparent() {
        let err = TourError::from(LocateError::TargetNotFound {
            selector: "#missing".into(),
        });
        assert_eq!(
            err.to_string(),
            "no element matches target selector `#missing`"
        );
    }

    #[test]
    fn definition_error_wraps_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = TourError::from(json_err);
        assert!(err.to_string().starts_with("invalid tour definition: "));
        assert!(std::error::Error::source(&err).is_some());
    }
}

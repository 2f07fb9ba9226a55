//! Pure coordinate resolution.
//!
//! Relative steps clamp at topic edges; explicit page jumps are strict and
//! fail out of range. That asymmetry is deliberate: a user mashing "next"
//! on the last page should stay put, while a malformed explicit jump is an
//! error worth surfacing.

use mentor_catalog::{Catalog, CatalogError};
use mentor_models::Topic;
use thiserror::Error;

/// A (topic, page index) pair identifying a lesson position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinate {
    pub topic: Topic,
    pub page: usize,
}

impl Coordinate {
    pub fn new(topic: Topic, page: usize) -> Self {
        Self { topic, page }
    }
}

/// A navigation request derived from one user interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Open a topic at its first page, regardless of any prior position.
    SelectTopic(Topic),
    /// Jump to an explicit page of a topic. Strict: out-of-range fails.
    GoToPage(Topic, usize),
    /// Step forward one page. Clamps at the last page.
    NextPage,
    /// Step backward one page. Clamps at page 0.
    PrevPage,
}

/// Errors from coordinate resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Resolves `(current, action)` to a new coordinate against the catalog.
///
/// Pure: no side effects, no storage. The returned coordinate always
/// addresses an existing page.
pub fn resolve(
    catalog: &Catalog,
    current: Coordinate,
    action: NavAction,
) -> Result<Coordinate, NavError> {
    match action {
        NavAction::SelectTopic(topic) => {
            // Validate the topic exists in the built catalog.
            catalog.page_count(topic)?;
            Ok(Coordinate::new(topic, 0))
        }
        NavAction::GoToPage(topic, page) => {
            let count = catalog.page_count(topic)?;
            if page >= count {
                return Err(CatalogError::PageOutOfRange {
                    topic: topic.to_string(),
                    page,
                    page_count: count,
                }
                .into());
            }
            Ok(Coordinate::new(topic, page))
        }
        NavAction::NextPage => {
            let count = catalog.page_count(current.topic)?;
            let page = (current.page + 1).min(count - 1);
            Ok(Coordinate::new(current.topic, page))
        }
        NavAction::PrevPage => {
            let page = current.page.saturating_sub(1);
            Ok(Coordinate::new(current.topic, page))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new()
    }

    #[test]
    fn select_topic_resets_to_page_zero() {
        let c = catalog();
        for topic in Topic::ALL {
            let prior = Coordinate::new(Topic::Oop, 0);
            let got = resolve(&c, prior, NavAction::SelectTopic(topic)).unwrap();
            assert_eq!(got, Coordinate::new(topic, 0));
        }
    }

    #[test]
    fn stepping_forward_reaches_last_page_then_clamps() {
        let c = catalog();
        for topic in Topic::ALL {
            let count = c.page_count(topic).unwrap();
            for start in 0..count {
                let mut pos = Coordinate::new(topic, start);
                for _ in 0..count - 1 - start {
                    pos = resolve(&c, pos, NavAction::NextPage).unwrap();
                }
                assert_eq!(pos.page, count - 1);
                // Further steps are no-ops.
                let clamped = resolve(&c, pos, NavAction::NextPage).unwrap();
                assert_eq!(clamped, pos);
            }
        }
    }

    #[test]
    fn step_backward_clamps_at_page_zero() {
        let c = catalog();
        let pos = Coordinate::new(Topic::Basics, 0);
        let got = resolve(&c, pos, NavAction::PrevPage).unwrap();
        assert_eq!(got, pos);
    }

    #[test]
    fn step_backward_moves_one_page() {
        let c = catalog();
        let pos = Coordinate::new(Topic::Basics, 1);
        let got = resolve(&c, pos, NavAction::PrevPage).unwrap();
        assert_eq!(got, Coordinate::new(Topic::Basics, 0));
    }

    #[test]
    fn explicit_jump_inside_bounds_succeeds() {
        let c = catalog();
        let got = resolve(
            &c,
            Coordinate::new(Topic::Basics, 0),
            NavAction::GoToPage(Topic::Install, 1),
        )
        .unwrap();
        assert_eq!(got, Coordinate::new(Topic::Install, 1));
    }

    #[test]
    fn explicit_jump_to_page_count_is_rejected_not_clamped() {
        let c = catalog();
        let count = c.page_count(Topic::Basics).unwrap();
        let err = resolve(
            &c,
            Coordinate::new(Topic::Basics, 0),
            NavAction::GoToPage(Topic::Basics, count),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            NavError::Catalog(CatalogError::PageOutOfRange { .. })
        ));
    }
}

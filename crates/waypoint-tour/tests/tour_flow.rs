//! End-to-end controller flow against a headless document.

use proptest::prelude::*;
use waypoint_core::event::{KeyCode, KeyEvent};
use waypoint_core::{Coords, Size, Viewport, ViewportRect};
use waypoint_dom::{Document, Element};
use waypoint_layout::CardinalOrientation;
use waypoint_tour::{
    TextMetrics, Tour, TourAction, TourDefinition, TourError, TourEvent, TourStatus,
};

const DEFINITION: &str = r##"{
    "config": { "padding": 5, "tooltip_separation": 10, "transition_ms": 250 },
    "steps": [
        { "selector": "#save", "title": "Save", "description": "Stores your work.",
          "orientation_preferences": ["south"] },
        { "selector": "nav.sidebar", "title": "Navigation",
          "description": "Jump between documents." },
        { "selector": "[data-tour=help]", "title": "Help" }
    ]
}"##;

fn document() -> Document {
    let mut doc = Document::new();
    let body = doc.append(Element::new("body").rect(ViewportRect::new(0.0, 0.0, 1024.0, 768.0)));
    doc.append_child(
        body,
        Element::new("button")
            .id("save")
            .rect(ViewportRect::new(100.0, 100.0, 50.0, 50.0)),
    );
    doc.append_child(
        body,
        Element::new("nav")
            .class("sidebar")
            .rect(ViewportRect::new(0.0, 200.0, 180.0, 400.0)),
    );
    doc.append_child(
        body,
        Element::new("a")
            .attr("data-tour", "help")
            .rect(ViewportRect::new(980.0, 10.0, 30.0, 20.0)),
    );
    doc
}

fn viewport() -> Viewport {
    Viewport::new(1024.0, 768.0)
}

#[test]
fn full_walkthrough() {
    let doc = document();
    let vp = viewport();
    let metrics = TextMetrics::default();
    let mut tour = Tour::from_definition(TourDefinition::from_json(DEFINITION).unwrap());

    tour.start(&doc, &vp).unwrap();
    let overlay = tour.overlay().unwrap();
    assert!(overlay.tooltip.is_none());
    assert_eq!(overlay.transition.as_millis(), 250);
    let size = overlay.content.measure(&metrics);

    let placement = tour.on_tooltip_measured(size, &vp).unwrap().unwrap();
    assert_eq!(placement.orientation, CardinalOrientation::South);
    assert_eq!(placement.coords.y, 165.0);
    assert!(placement.fits);

    tour.handle_key(&KeyEvent::new(KeyCode::Enter), &doc, &vp)
        .unwrap();
    let size = tour.overlay().unwrap().content.measure(&metrics);
    let placement = tour.on_tooltip_measured(size, &vp).unwrap().unwrap();
    // Sidebar hugs the left edge; east is the first orientation that fits.
    assert_eq!(placement.orientation, CardinalOrientation::East);
    assert!(placement.fits);

    tour.handle_key(&KeyEvent::new(KeyCode::Right), &doc, &vp)
        .unwrap();
    let overlay = tour.overlay().unwrap();
    assert_eq!(overlay.step_index, 2);
    assert_eq!(overlay.content.buttons.next.label, "Done");
    let size = overlay.content.measure(&metrics);
    let placement = tour.on_tooltip_measured(size, &vp).unwrap().unwrap();
    assert!(placement.fits);
    assert!(placement.rect.right() <= 1024.0);

    let event = tour
        .handle_key(&KeyEvent::new(KeyCode::Enter), &doc, &vp)
        .unwrap();
    assert_eq!(event, Some(TourEvent::Finished { last_step: 2 }));
    assert_eq!(tour.status(), TourStatus::Finished);
}

#[test]
fn scroll_shifts_page_coordinates_only() {
    let doc = document();
    let mut tour = Tour::from_definition(TourDefinition::from_json(DEFINITION).unwrap());
    tour.start(&doc, &viewport()).unwrap();
    tour.on_tooltip_measured(Size::new(200.0, 80.0), &viewport())
        .unwrap();

    let scrolled = viewport().scrolled(40.0, 500.0);
    tour.refresh(&doc, &scrolled).unwrap();
    let placement = tour.overlay().unwrap().tooltip.unwrap();
    assert_eq!(placement.coords, Coords::new(65.0, 665.0));
}

#[test]
fn target_removed_mid_tour() {
    let mut doc = document();
    let mut tour = Tour::from_definition(TourDefinition::from_json(DEFINITION).unwrap());
    tour.start(&doc, &viewport()).unwrap();

    let sidebar = doc
        .query(&"nav.sidebar".parse().unwrap())
        .unwrap();
    doc.detach(sidebar);

    let err = tour
        .apply(TourAction::Next, &doc, &viewport())
        .unwrap_err();
    assert!(matches!(err, TourError::Target(_)));
    assert_eq!(tour.step_index(), 0);

    // The user can still jump past the missing step.
    let event = tour
        .apply(TourAction::GoTo(2), &doc, &viewport())
        .unwrap();
    assert!(matches!(event, Some(TourEvent::StepChanged { to: 2, .. })));
}

#[derive(Debug, Clone)]
enum Op {
    Next,
    Prev,
    GoTo(usize),
    Measure(f64, f64),
    Scroll(f64),
    Close,
    Start,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => Just(Op::Next),
        3 => Just(Op::Prev),
        2 => (0usize..6).prop_map(Op::GoTo),
        4 => (1.0f64..400.0, 1.0f64..300.0).prop_map(|(w, h)| Op::Measure(w, h)),
        1 => (0.0f64..1000.0).prop_map(Op::Scroll),
        1 => Just(Op::Close),
        1 => Just(Op::Start),
    ]
}

proptest! {
    #[test]
    fn controller_invariants_hold(ops in prop::collection::vec(op(), 1..40)) {
        let doc = document();
        let mut vp = viewport();
        let mut tour = Tour::from_definition(TourDefinition::from_json(DEFINITION).unwrap());
        tour.start(&doc, &vp).unwrap();

        for op in ops {
            let before = tour.step_index();
            let result = match op {
                Op::Next => tour.next(&doc, &vp),
                Op::Prev => tour.prev(&doc, &vp),
                Op::GoTo(i) => tour.goto(i, &doc, &vp),
                Op::Measure(w, h) => tour.on_tooltip_measured(Size::new(w, h), &vp).map(|_| None),
                Op::Scroll(y) => {
                    vp = vp.scrolled(0.0, y);
                    tour.refresh(&doc, &vp).map(|_| None)
                }
                Op::Close => tour.close().map(Some),
                Op::Start => tour.start(&doc, &vp).map(Some),
            };

            match result {
                Ok(Some(TourEvent::StepChanged { to, .. })) => {
                    prop_assert_eq!(to, tour.step_index());
                    // Fresh steps are unmeasured.
                    prop_assert!(tour.overlay().unwrap().tooltip.is_none());
                }
                Ok(_) => {}
                Err(TourError::NotActive) => {
                    prop_assert!(!tour.is_active());
                    prop_assert_eq!(tour.step_index(), before);
                }
                Err(err) => {
                    prop_assert!(false, "unexpected error: {}", err);
                }
            }

            prop_assert!(tour.step_index() < tour.step_count());
            prop_assert_eq!(tour.overlay().is_some(), tour.is_active());
            if let Some(overlay) = tour.overlay()
                && let Some(tooltip) = overlay.tooltip
            {
                prop_assert_eq!(tooltip.coords, tooltip.rect.origin());
            }
        }
    }
}

//! Property tests for selector lookup against generated element trees.

use proptest::prelude::*;
use waypoint_core::ViewportRect;
use waypoint_dom::{Document, Element, ElementId, LocateError, Selector, locate_target};

#[derive(Debug, Clone)]
struct Spec {
    tag: usize,
    id: Option<u8>,
    class: Option<u8>,
    parent: Option<usize>,
}

const TAGS: [&str; 4] = ["div", "button", "nav", "span"];

fn spec() -> impl Strategy<Value = Spec> {
    (
        0..TAGS.len(),
        prop::option::of(0u8..4),
        prop::option::of(0u8..4),
        prop::option::of(0usize..64),
    )
        .prop_map(|(tag, id, class, parent)| Spec {
            tag,
            id,
            class,
            parent,
        })
}

fn build(specs: &[Spec]) -> Document {
    let mut doc = Document::new();
    let mut ids: Vec<ElementId> = Vec::new();
    for (i, spec) in specs.iter().enumerate() {
        let mut element = Element::new(TAGS[spec.tag]).rect(ViewportRect::new(
            i as f64,
            i as f64 * 2.0,
            10.0,
            10.0,
        ));
        if let Some(id) = spec.id {
            element = element.id(format!("id{id}"));
        }
        if let Some(class) = spec.class {
            element = element.class(format!("c{class}"));
        }
        let id = match spec.parent {
            Some(p) if !ids.is_empty() => doc.append_child(ids[p % ids.len()], element),
            _ => doc.append(element),
        };
        ids.push(id);
    }
    doc
}

fn selector_text() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u8..5).prop_map(|i| format!("#id{i}")),
        (0u8..5).prop_map(|i| format!(".c{i}")),
        (0..TAGS.len()).prop_map(|t| TAGS[t].to_string()),
        ((0..TAGS.len()), 0u8..5).prop_map(|(t, c)| format!("{}.c{c}", TAGS[t])),
    ]
}

proptest! {
    #[test]
    fn locate_matches_first_in_document_order(
        specs in prop::collection::vec(spec(), 0..24),
        text in selector_text(),
    ) {
        let doc = build(&specs);
        let selector = Selector::parse(&text).unwrap();
        let expected = doc
            .iter()
            .find(|(_, element)| element.matches_selector(&selector))
            .map(|(_, element)| element.bounding_rect());

        match (locate_target(&doc, &text), expected) {
            (Ok(rect), Some(want)) => {
                prop_assert_eq!(rect, want);
            }
            (Err(LocateError::TargetNotFound { selector }), None) => {
                prop_assert_eq!(selector, text);
            }
            (got, want) => {
                prop_assert!(false, "got {:?}, want {:?}", got, want);
            }
        }
    }

    #[test]
    fn query_all_is_ordered_subset_of_document_order(
        specs in prop::collection::vec(spec(), 0..24),
        text in selector_text(),
    ) {
        let doc = build(&specs);
        let selector = Selector::parse(&text).unwrap();
        let order: Vec<ElementId> = doc.iter().map(|(id, _)| id).collect();
        let hits = doc.query_all(&selector);
        let positions: Vec<usize> = hits
            .iter()
            .map(|hit| order.iter().position(|id| id == hit).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(hits.first().copied(), doc.query(&selector));
    }

    #[test]
    fn every_element_is_visited_once(specs in prop::collection::vec(spec(), 0..32)) {
        let doc = build(&specs);
        let mut seen: Vec<ElementId> = doc.iter().map(|(id, _)| id).collect();
        prop_assert_eq!(seen.len(), specs.len());
        seen.sort();
        seen.dedup();
        prop_assert_eq!(seen.len(), specs.len());
    }
}

#![no_main]

use libfuzzer_sys::fuzz_target;
use waypoint_core::ViewportRect;
use waypoint_dom::{Document, Element, LocateError, Selector, locate_target};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let mut doc = Document::new();
    let root = doc.append(
        Element::new("div")
            .id("root")
            .class("panel")
            .rect(ViewportRect::new(0.0, 0.0, 100.0, 100.0)),
    );
    doc.append_child(
        root,
        Element::new("button")
            .attr("data-tour", "save")
            .rect(ViewportRect::new(10.0, 10.0, 20.0, 20.0)),
    );

    match Selector::parse(input) {
        Ok(selector) => {
            // Canonical form must parse back to the same selector.
            let canonical = selector.to_string();
            let reparsed = Selector::parse(&canonical).expect("canonical selector reparses");
            assert_eq!(reparsed, selector);
            assert_eq!(doc.query(&selector), doc.query_all(&selector).first().copied());
            assert!(!matches!(
                locate_target(&doc, input),
                Err(LocateError::InvalidSelector { .. })
            ));
        }
        Err(_) => {
            assert!(matches!(
                locate_target(&doc, input),
                Err(LocateError::InvalidSelector { .. })
            ));
        }
    }
});

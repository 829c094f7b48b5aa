#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use waypoint_core::{Size, Viewport, ViewportRect};
use waypoint_layout::{CardinalOrientation, PlacementRequest, mask_rect, resolve_placement};

#[derive(Debug, Arbitrary)]
struct Input {
    target: (i16, i16, u16, u16),
    tooltip: Option<(u16, u16)>,
    padding: u8,
    separation: u8,
    viewport: (u16, u16),
    scroll: (u16, u16),
    prefs: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let (x, y, w, h) = input.target;
    let target = ViewportRect::new(x as f64, y as f64, w as f64, h as f64);
    let viewport = Viewport::new(input.viewport.0 as f64, input.viewport.1 as f64)
        .scrolled(input.scroll.0 as f64, input.scroll.1 as f64);
    let prefs: Vec<CardinalOrientation> = input
        .prefs
        .iter()
        .take(24)
        .map(|b| CardinalOrientation::ALL[*b as usize % CardinalOrientation::ALL.len()])
        .collect();

    let request = PlacementRequest::new(target)
        .maybe_tooltip(input.tooltip.map(|(w, h)| Size::new(w as f64, h as f64)))
        .padding(input.padding as f64)
        .separation(input.separation as f64)
        .preferences(prefs);

    let first = resolve_placement(&request, &viewport);
    let second = resolve_placement(&request, &viewport);
    assert_eq!(first, second, "resolver must be deterministic");

    match (first, request.tooltip) {
        (None, None) => {}
        (Some(placement), Some(size)) => {
            assert!(request.candidates().contains(&placement.orientation));
            assert_eq!(placement.rect.size(), size);
            assert_eq!(placement.coords, placement.rect.origin());
            if !placement.fits {
                assert_eq!(placement.orientation, request.candidates()[0]);
            }
        }
        (got, tooltip) => panic!("placement {got:?} for tooltip {tooltip:?}"),
    }

    let mask = mask_rect(&target, request.padding, &viewport);
    assert_eq!(mask, mask.round());
});

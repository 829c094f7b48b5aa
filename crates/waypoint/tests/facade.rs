use waypoint::prelude::*;
use waypoint::{LocateError, TourError};

fn document() -> Document {
    let mut doc = Document::new();
    doc.append(
        Element::new("button")
            .id("save")
            .rect(ViewportRect::new(100.0, 100.0, 50.0, 50.0)),
    );
    doc
}

#[test]
fn one_shot_placement() {
    let config = TourConfig::default().orientation_preferences([CardinalOrientation::South]);
    let vp = Viewport::new(1024.0, 768.0);
    let placement = waypoint::place(&document(), "#save", Some(Size::new(200.0, 80.0)), &config, &vp)
        .unwrap()
        .unwrap();
    assert_eq!(placement.orientation, CardinalOrientation::South);
    assert_eq!(placement.coords, Coords::new(25.0, 165.0));
    assert!(placement.fits);
}

#[test]
fn one_shot_placement_waits_for_measurement() {
    let vp = Viewport::new(1024.0, 768.0);
    let placement =
        waypoint::place(&document(), "#save", None, &TourConfig::default(), &vp).unwrap();
    assert!(placement.is_none());
}

#[test]
fn one_shot_placement_matches_tour_clamping() {
    let config = TourConfig::default()
        .padding(1000.0)
        .orientation_preferences([CardinalOrientation::South]);
    let vp = Viewport::new(1024.0, 768.0);
    let size = Size::new(200.0, 80.0);

    let placed = waypoint::place(&document(), "#save", Some(size), &config, &vp)
        .unwrap()
        .unwrap();
    // Padding is capped at 256: 150 + 256 + 10.
    assert_eq!(placed.coords.y, 416.0);

    let mut tour = Tour::new(config, vec![TourStep::new("#save", "Save")]);
    tour.start(&document(), &vp).unwrap();
    let toured = tour.on_tooltip_measured(size, &vp).unwrap().unwrap();
    assert_eq!(placed, toured);
}

#[test]
fn missing_target_surfaces_as_locate_error() {
    let vp = Viewport::new(1024.0, 768.0);
    let err = waypoint::place(&document(), "#missing", None, &TourConfig::default(), &vp)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Locate(LocateError::TargetNotFound { .. })
    ));
    assert_eq!(err.to_string(), "no element matches target selector `#missing`");
}

#[test]
fn errors_convert_into_facade_error() {
    let err: Error = TourError::EmptyTour.into();
    assert_eq!(err.to_string(), "tour has no steps");

    let err: Error = "sideways".parse::<CardinalOrientation>().unwrap_err().into();
    assert!(matches!(err, Error::Orientation(_)));

    let err: Error = waypoint::Selector::parse("").unwrap_err().into();
    assert!(matches!(err, Error::Selector(_)));
}

#[test]
fn tour_from_json_through_prelude() -> Result<()> {
    let json = serde_json::json!({
        "steps": [
            { "selector": "#save", "title": "Save", "orientation_preferences": ["north"] }
        ]
    })
    .to_string();
    let mut tour = Tour::from_definition(TourDefinition::from_json(&json)?);
    let vp = Viewport::new(1024.0, 768.0).scrolled(0.0, 50.0);
    tour.start(&document(), &vp)?;

    let placement = tour
        .on_tooltip_measured(Size::new(60.0, 40.0), &vp)?
        .expect("measured");
    assert_eq!(placement.orientation, CardinalOrientation::North);
    // Viewport y = 100 - 5 - 10 - 40 = 45, plus 50 scroll.
    assert_eq!(placement.coords, Coords::new(95.0, 95.0));
    Ok(())
}

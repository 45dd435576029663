mod test_utils;

use contour_offset::{
    contour::Contour,
    contour_closed, contour_open,
    core::{math::Vector2, traits::FuzzyEq},
    error::{GeometryError, OffsetError},
    geometry::{ArcDirection, ArcGeo, Segment},
    offset::{CutterCompensation, OffsetEngine, OffsetOptions, OffsetSide},
};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use test_utils::{
    assert_connected, assert_line_starts, modified_contours, ContourProperties,
};

fn arc(center: (f64, f64), start_angle: f64, end_angle: f64, radius: f64) -> ArcGeo {
    ArcGeo::from_center_angles(
        Vector2::new(center.0, center.1),
        start_angle,
        end_angle,
        radius,
        ArcDirection::CounterClockwise,
    )
    .unwrap()
}

fn rounded_rectangle() -> Contour {
    let mut c = Contour::new(true);
    c.add_line(Vector2::new(1.0, 0.0), Vector2::new(4.0, 0.0));
    c.add_arc(arc((4.0, 1.0), -FRAC_PI_2, 0.0, 1.0));
    c.add_line(Vector2::new(5.0, 1.0), Vector2::new(5.0, 3.0));
    c.add_arc(arc((4.0, 3.0), 0.0, FRAC_PI_2, 1.0));
    c.add_line(Vector2::new(4.0, 4.0), Vector2::new(1.0, 4.0));
    c.add_arc(arc((1.0, 3.0), FRAC_PI_2, PI, 1.0));
    c.add_line(Vector2::new(0.0, 3.0), Vector2::new(0.0, 1.0));
    c.add_arc(arc((1.0, 1.0), PI, 1.5 * PI, 1.0));
    c
}

/// Open path along y = 1 (travelling towards -x) with a V notch dipping to (3, sqrt(2) - 2), the
/// notch rims are rounded with tangent continuous quarter-of-a-quarter arcs.
fn notched_path() -> Contour {
    let rim1 = arc((5.0, 0.0), FRAC_PI_2, 3.0 * FRAC_PI_4, 1.0);
    let rim2 = arc((1.0, 0.0), FRAC_PI_4, FRAC_PI_2, 1.0);
    let tip = Vector2::new(3.0, 2.0f64.sqrt() - 2.0);

    let mut c = Contour::new(false);
    c.add_line(Vector2::new(8.0, 1.0), Vector2::new(5.0, 1.0));
    c.add_arc(rim1);
    c.add_line(rim1.end(), tip);
    c.add_line(tip, rim2.start());
    c.add_arc(rim2);
    c.add_line(Vector2::new(1.0, 1.0), Vector2::new(-2.0, 1.0));
    c
}

/// Square with a semicircular bite of radius 2 taken out of the top edge, the bite meets both
/// sides in a cusp.
fn bitten_square() -> Contour {
    let bite = ArcGeo::from_points_radius(
        Vector2::new(4.0, 4.0),
        Vector2::new(0.0, 4.0),
        2.0,
        ArcDirection::Clockwise,
    )
    .unwrap();

    let mut c = Contour::new(true);
    c.add_line(Vector2::new(0.0, 0.0), Vector2::new(4.0, 0.0));
    c.add_line(Vector2::new(4.0, 0.0), Vector2::new(4.0, 4.0));
    c.add_arc(bite);
    c.add_line(Vector2::new(0.0, 4.0), Vector2::new(0.0, 0.0));
    c
}

struct OffsetCase {
    name: &'static str,
    contour: Contour,
    distance: f64,
    side: OffsetSide,
    expected: ContourProperties,
}

fn offset_cases() -> Vec<OffsetCase> {
    vec![
        OffsetCase {
            name: "square_inward",
            contour: contour_closed![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)],
            distance: 1.0,
            side: OffsetSide::Inward,
            expected: ContourProperties::new(4, -4.0, 8.0, 1.0, 1.0, 3.0, 3.0),
        },
        OffsetCase {
            name: "square_inward_half",
            contour: contour_closed![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)],
            distance: 0.5,
            side: OffsetSide::Inward,
            expected: ContourProperties::new(4, -9.0, 12.0, 0.5, 0.5, 3.5, 3.5),
        },
        OffsetCase {
            name: "square_outward",
            contour: contour_closed![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)],
            distance: 1.0,
            side: OffsetSide::Outward,
            expected: ContourProperties::new(
                8,
                -(16.0 + 16.0 + PI),
                16.0 + 2.0 * PI,
                -1.0,
                -1.0,
                5.0,
                5.0,
            ),
        },
        OffsetCase {
            name: "l_shape_inward",
            contour: contour_closed![
                (0.0, 0.0),
                (4.0, 0.0),
                (4.0, 2.0),
                (2.0, 2.0),
                (2.0, 4.0),
                (0.0, 4.0)
            ],
            distance: 0.5,
            side: OffsetSide::Inward,
            expected: ContourProperties::new(
                7,
                -(5.25 - PI / 16.0),
                11.0 + PI / 4.0,
                0.5,
                0.5,
                3.5,
                3.5,
            ),
        },
        OffsetCase {
            name: "l_shape_outward",
            contour: contour_closed![
                (0.0, 0.0),
                (4.0, 0.0),
                (4.0, 2.0),
                (2.0, 2.0),
                (2.0, 4.0),
                (0.0, 4.0)
            ],
            distance: 0.5,
            side: OffsetSide::Outward,
            expected: ContourProperties::new(
                11,
                -20.731747704246807,
                18.926990816987242,
                -0.5,
                -0.5,
                4.5,
                4.5,
            ),
        },
        OffsetCase {
            name: "rounded_rectangle_inward",
            contour: rounded_rectangle(),
            distance: 0.5,
            side: OffsetSide::Inward,
            expected: ContourProperties::new(
                8,
                -11.78539816339745,
                13.141592653589793,
                0.5,
                0.5,
                4.5,
                3.5,
            ),
        },
        OffsetCase {
            name: "bitten_square_inward",
            contour: bitten_square(),
            distance: 0.5,
            side: OffsetSide::Inward,
            // rectangle [0.5, 3.5] x [0.5, 2] less the circular segment below y = 2 cut by the
            // offset bite of radius 2.5
            expected: ContourProperties::new(
                4,
                -3.478118070041973,
                9.217505543966422,
                0.5,
                0.5,
                3.5,
                2.0,
            ),
        },
        OffsetCase {
            name: "rounded_rectangle_outward",
            contour: rounded_rectangle(),
            distance: 0.5,
            side: OffsetSide::Outward,
            expected: ContourProperties::new(
                8,
                -28.06858347057704,
                19.42477796076938,
                -0.5,
                -0.5,
                5.5,
                4.5,
            ),
        },
    ]
}

#[test]
fn closed_offset_properties() {
    for case in offset_cases() {
        for (contour, state) in modified_contours(&case.contour) {
            let engine =
                OffsetEngine::new(&contour, case.distance, case.side, &OffsetOptions::new())
                    .unwrap();
            assert!(
                engine.is_complete(),
                "{} ({:?}): trimming failed: {:?}",
                case.name,
                state,
                engine.failure()
            );
            assert_connected(engine.raw_offset(), true);

            let props = ContourProperties::from_segments(engine.raw_offset(), true);
            assert!(
                props.fuzzy_eq_eps(&case.expected, ContourProperties::PROP_CMP_EPS),
                "{} ({:?}): property mismatch\n  expected: {:?}\n  actual: {:?}",
                case.name,
                state,
                case.expected,
                props
            );
        }
    }
}

#[test]
fn square_inward_trims_every_corner() {
    let square = contour_closed![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
    let engine =
        OffsetEngine::new(&square, 1.0, OffsetSide::Inward, &OffsetOptions::new()).unwrap();

    // corners of a clockwise square are concave seen from the inside
    assert_eq!(engine.reflex_count(), 4);
    assert_eq!(engine.trim_iterations(), 4);
    assert_line_starts(
        engine.raw_offset(),
        &[(1.0, 1.0), (1.0, 3.0), (3.0, 3.0), (3.0, 1.0)],
    );
    assert!(engine.find_self_intersects().is_empty());

    // input untouched
    assert!(square[0].start().fuzzy_eq(Vector2::new(0.0, 0.0)));
    assert!(square[0].end().fuzzy_eq(Vector2::new(4.0, 0.0)));
}

#[test]
fn convex_outward_never_trims() {
    for contour in [
        contour_closed![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)],
        contour_closed![(0.0, 0.0), (3.0, -1.0), (5.0, 2.0), (1.0, 4.0)],
        rounded_rectangle(),
    ] {
        let engine = OffsetEngine::new(&contour, 0.75, OffsetSide::Outward, &OffsetOptions::new())
            .unwrap();
        assert_eq!(engine.reflex_count(), 0);
        assert_eq!(engine.trim_iterations(), 0);
        assert_eq!(engine.raw_offset().len(), engine.elements().len());
        assert!(engine.is_complete());
    }
}

#[test]
fn notch_shallower_than_offset_is_trimmed() {
    let path = notched_path();
    let engine = OffsetEngine::new(&path, 2.0, OffsetSide::Inward, &OffsetOptions::new()).unwrap();

    assert_eq!(engine.reflex_count(), 1);
    assert_eq!(engine.trim_iterations(), 1);
    assert!(engine.is_complete());

    let raw = engine.raw_offset();
    assert_eq!(raw.len(), 4);
    assert_connected(raw, false);

    let meet = Vector2::new(3.0, 5.0f64.sqrt());
    match (&raw[0], &raw[1], &raw[2], &raw[3]) {
        (Segment::Line(e0), Segment::Arc(a1), Segment::Arc(a2), Segment::Line(e3)) => {
            assert!(e0.start().fuzzy_eq(Vector2::new(8.0, 3.0)));
            assert!(e0.end().fuzzy_eq(Vector2::new(5.0, 3.0)));
            assert!(a1.center().fuzzy_eq(Vector2::new(5.0, 0.0)));
            assert!(a1.radius().fuzzy_eq(3.0));
            assert!(a1.end().fuzzy_eq(meet));
            assert!(a2.center().fuzzy_eq(Vector2::new(1.0, 0.0)));
            assert!(a2.start().fuzzy_eq(meet));
            assert!(a2.end().fuzzy_eq(Vector2::new(1.0, 3.0)));
            assert!(e3.end().fuzzy_eq(Vector2::new(-2.0, 3.0)));
        }
        other => panic!("unexpected raw offset: {other:?}"),
    }
}

#[test]
fn notch_outward_never_enters_trim_loop() {
    let path = notched_path();
    let engine = OffsetEngine::new(&path, 2.0, OffsetSide::Outward, &OffsetOptions::new()).unwrap();

    assert_eq!(engine.reflex_count(), 0);
    assert_eq!(engine.trim_iterations(), 0);
    assert!(engine.is_complete());
    // six edges and the rounded tip
    assert_eq!(engine.raw_offset().len(), 7);
    match engine.raw_offset()[3] {
        Segment::Arc(a) => {
            assert!(a.center().fuzzy_eq(Vector2::new(3.0, 2.0f64.sqrt() - 2.0)));
            assert!(a.radius().fuzzy_eq(2.0));
            assert!(a.sweep().fuzzy_eq(-FRAC_PI_2));
        }
        ref other => panic!("expected tip arc, got {other:?}"),
    }
}

#[test]
fn open_v_with_small_offset() {
    let v = contour_open![(4.0, 2.0), (2.0, 0.0), (0.0, 2.0)];
    let raw = v.parallel_offset(1.0, OffsetSide::Inward).unwrap();
    assert_line_starts(&raw, &[(4.0 - 0.5f64.sqrt(), 2.0 + 0.5f64.sqrt()), (2.0, 2.0f64.sqrt())]);
    assert!(raw[1].end().fuzzy_eq(Vector2::new(0.5f64.sqrt(), 2.0 + 0.5f64.sqrt())));
}

#[test]
fn open_v_with_large_offset_keeps_partial_result() {
    let v = contour_open![(4.0, 2.0), (2.0, 0.0), (0.0, 2.0)];
    let engine = OffsetEngine::new(&v, 5.0, OffsetSide::Inward, &OffsetOptions::new()).unwrap();

    assert!(!engine.is_complete());
    assert_eq!(
        engine.failure(),
        Some(&OffsetError::NoIntersectionOnTrim {
            forward: 2,
            backward: 0
        })
    );
    // best effort result still has both edges and the untrimmed vertex arc
    assert_eq!(engine.raw_offset().len(), 3);
    assert!(matches!(engine.raw_offset()[1], Segment::Arc(_)));

    let err = v.parallel_offset(5.0, OffsetSide::Inward).unwrap_err();
    assert_eq!(
        err,
        OffsetError::NoIntersectionOnTrim {
            forward: 2,
            backward: 0
        }
    );
}

#[test]
fn interference_cap_is_reported() {
    let square = contour_closed![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
    let options = OffsetOptions {
        max_interference_iterations: 0,
        ..Default::default()
    };
    let engine = OffsetEngine::new(&square, 1.0, OffsetSide::Inward, &options).unwrap();
    assert!(matches!(
        engine.failure(),
        Some(OffsetError::UnresolvedInterference { .. })
    ));
    assert_eq!(engine.trim_iterations(), 0);
}

#[test]
fn cusps_pointing_inward_are_trimmed() {
    let engine = OffsetEngine::new(
        &bitten_square(),
        0.5,
        OffsetSide::Inward,
        &OffsetOptions::new(),
    )
    .unwrap();

    // two square corners and the two cusps where the bite meets the sides
    assert_eq!(engine.reflex_count(), 4);
    assert_eq!(engine.trim_iterations(), 4);
    assert!(engine.is_complete());
    assert!(engine.find_self_intersects().is_empty());

    let bite: Vec<_> = engine
        .raw_offset()
        .iter()
        .filter_map(|s| match s {
            Segment::Arc(a) => Some(*a),
            _ => None,
        })
        .collect();
    assert_eq!(bite.len(), 1);
    assert!(bite[0].center().fuzzy_eq(Vector2::new(2.0, 4.0)));
    assert!(bite[0].radius().fuzzy_eq(2.5));
    for p in [bite[0].start(), bite[0].end()] {
        assert!(p.fuzzy_eq(Vector2::new(3.5, 2.0)) || p.fuzzy_eq(Vector2::new(0.5, 2.0)));
    }
}

#[test]
fn cusps_pointing_outward_get_half_circles() {
    let engine = OffsetEngine::new(
        &bitten_square(),
        0.5,
        OffsetSide::Outward,
        &OffsetOptions::new(),
    )
    .unwrap();

    assert_eq!(engine.reflex_count(), 0);
    assert!(engine.is_complete());
    let half_circles = engine
        .raw_offset()
        .iter()
        .filter(|s| match s {
            Segment::Arc(a) => a.radius().fuzzy_eq(0.5) && a.sweep().abs().fuzzy_eq(PI),
            _ => false,
        })
        .count();
    assert_eq!(half_circles, 2);
}

#[test]
fn collapsing_circle_is_reported() {
    let circle =
        ArcGeo::full_circle(Vector2::new(0.0, 0.0), 1.0, 0.0, ArcDirection::CounterClockwise)
            .unwrap();
    let mut contour = Contour::new(true);
    contour.add_arc(circle);

    let engine =
        OffsetEngine::new(&contour, 2.0, OffsetSide::Inward, &OffsetOptions::new()).unwrap();
    assert!(!engine.is_complete());
    assert_eq!(
        engine.failure(),
        Some(&OffsetError::Geometry(GeometryError::DegenerateSegment { index: 0 }))
    );
    assert!(engine.raw_offset().is_empty());
    assert_eq!(
        contour.parallel_offset(1.0, OffsetSide::Inward).unwrap_err(),
        OffsetError::Geometry(GeometryError::DegenerateSegment { index: 0 })
    );

    let outward = contour.parallel_offset(2.0, OffsetSide::Outward).unwrap();
    assert_eq!(outward.len(), 1);
    match outward[0] {
        Segment::Arc(a) => {
            assert!(a.radius().fuzzy_eq(3.0));
            assert!(a.is_full_circle());
        }
        ref other => panic!("expected circle, got {other:?}"),
    }
}

#[test]
fn remaining_self_intersects_are_found() {
    // arcs collapse and the opposite sides cross
    let engine = OffsetEngine::new(
        &rounded_rectangle(),
        2.5,
        OffsetSide::Inward,
        &OffsetOptions::new(),
    )
    .unwrap();
    assert!(engine.is_complete());
    let intrs = engine.find_self_intersects();
    assert!(!intrs.is_empty());
    assert!(intrs.iter().all(|i| i.index1 < i.index2));
}

#[test]
fn invalid_input_is_rejected() {
    let square = contour_closed![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
    for distance in [0.0, -1.0, f64::NAN] {
        assert_eq!(
            OffsetEngine::new(&square, distance, OffsetSide::Inward, &OffsetOptions::new())
                .unwrap_err(),
            OffsetError::InvalidDistance
        );
    }

    // point segment in the middle of the path
    let mut degenerate = Contour::new(false);
    degenerate.add_line(Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0));
    degenerate.add_segment(Segment::Vertex(contour_offset::geometry::VertexGeo::new(
        Vector2::new(1.0, 0.0),
        contour_offset::geometry::VertexKind::Convex,
    )));
    degenerate.add_line(Vector2::new(1.0, 0.0), Vector2::new(2.0, 1.0));
    assert_eq!(
        OffsetEngine::new(&degenerate, 1.0, OffsetSide::Inward, &OffsetOptions::new())
            .unwrap_err(),
        OffsetError::Geometry(GeometryError::DegenerateSegment { index: 1 })
    );
}

#[test]
fn cutter_compensation_maps_to_sides() {
    let square = contour_closed![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
    let left = square
        .parallel_offset(1.0, CutterCompensation::Left.offset_side())
        .unwrap();
    let outward = square.parallel_offset(1.0, OffsetSide::Outward).unwrap();
    assert_eq!(left, outward);

    assert_eq!(
        CutterCompensation::from_offset_side(OffsetSide::Inward),
        CutterCompensation::Right
    );
    assert_eq!(
        CutterCompensation::Right.switched().offset_side(),
        OffsetSide::Inward.opposite()
    );
}

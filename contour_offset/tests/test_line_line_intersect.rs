use contour_offset::core::{
    math::{line_line_intr, LineLineIntr::*, Vector2},
    traits::FuzzyEq,
};

macro_rules! assert_case_eq {
    ($left:expr, $right:expr) => {
        match ($left, $right) {
            (NoIntersect, NoIntersect) => {}
            (Colinear, Colinear) => {}
            (
                TrueIntersect {
                    seg1_t: a1,
                    seg2_t: b1,
                },
                TrueIntersect {
                    seg1_t: a2,
                    seg2_t: b2,
                },
            ) if a1.fuzzy_eq(a2) && b1.fuzzy_eq(b2) => {}
            (
                FalseIntersect {
                    seg1_t: a1,
                    seg2_t: b1,
                },
                FalseIntersect {
                    seg1_t: a2,
                    seg2_t: b2,
                },
            ) if a1.fuzzy_eq(a2) && b1.fuzzy_eq(b2) => {}
            _ => panic!(
                "intersect cases do not match: left: {:?}, right: {:?}",
                $left, $right
            ),
        };
    };
}

#[test]
fn parallel_lines() {
    let v1 = Vector2::new(0.0, 0.0);
    let v2 = Vector2::new(4.0, 0.0);
    let u1 = Vector2::new(0.0, 1.0);
    let u2 = Vector2::new(4.0, 1.0);
    let result = line_line_intr(v1, v2, u1, u2, 1e-5);
    assert_case_eq!(result, NoIntersect::<f64>);
}

#[test]
fn degenerate_segment() {
    let v1 = Vector2::new(1.0, 1.0);
    let u1 = Vector2::new(0.0, 0.0);
    let u2 = Vector2::new(2.0, 2.0);
    let result = line_line_intr(v1, v1, u1, u2, 1e-5);
    assert_case_eq!(result, NoIntersect::<f64>);
}

#[test]
fn colinear_overlapping() {
    let v1 = Vector2::new(0.0, 0.0);
    let v2 = Vector2::new(4.0, 0.0);
    let u1 = Vector2::new(2.0, 0.0);
    let u2 = Vector2::new(6.0, 0.0);
    let result = line_line_intr(v1, v2, u1, u2, 1e-5);
    assert_case_eq!(result, Colinear::<f64>);
}

#[test]
fn colinear_apart() {
    let v1 = Vector2::new(0.0, 0.0);
    let v2 = Vector2::new(1.0, 1.0);
    let u1 = Vector2::new(3.0, 3.0);
    let u2 = Vector2::new(5.0, 5.0);
    let result = line_line_intr(v1, v2, u1, u2, 1e-5);
    assert_case_eq!(result, Colinear::<f64>);
}

#[test]
fn true_intersect_cross() {
    let v1 = Vector2::new(0.0, 0.0);
    let v2 = Vector2::new(4.0, 4.0);
    let u1 = Vector2::new(0.0, 4.0);
    let u2 = Vector2::new(4.0, 0.0);
    let result = line_line_intr(v1, v2, u1, u2, 1e-5);
    assert_case_eq!(
        result,
        TrueIntersect {
            seg1_t: 0.5,
            seg2_t: 0.5
        }
    );
}

#[test]
fn true_intersect_at_end_points() {
    let v1 = Vector2::new(0.0, 0.0);
    let v2 = Vector2::new(2.0, 0.0);
    let u1 = Vector2::new(2.0, 0.0);
    let u2 = Vector2::new(2.0, 3.0);
    let result = line_line_intr(v1, v2, u1, u2, 1e-5);
    assert_case_eq!(
        result,
        TrueIntersect {
            seg1_t: 1.0,
            seg2_t: 0.0
        }
    );
}

#[test]
fn false_intersect_on_extension() {
    let v1 = Vector2::new(0.0, 0.0);
    let v2 = Vector2::new(1.0, 0.0);
    let u1 = Vector2::new(3.0, -1.0);
    let u2 = Vector2::new(3.0, 1.0);
    let result = line_line_intr(v1, v2, u1, u2, 1e-5);
    assert_case_eq!(
        result,
        FalseIntersect {
            seg1_t: 3.0,
            seg2_t: 0.5
        }
    );
}

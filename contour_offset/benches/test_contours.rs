use contour_offset::{
    contour::Contour,
    core::{
        math::{point_on_circle, Vector2},
        traits::Real,
    },
};

/// Closed star polygon with `point_count` tips, every inner vertex is reflex when offsetting
/// inward.
pub fn star<T>(point_count: usize) -> Contour<T>
where
    T: Real,
{
    let outer = T::from(40.0).unwrap();
    let inner = T::from(25.0).unwrap();
    let center = Vector2::zero();
    let step = T::tau() / T::from(2 * point_count).unwrap();

    let points: Vec<Vector2<T>> = (0..2 * point_count)
        .map(|i| {
            let radius = if i % 2 == 0 { outer } else { inner };
            point_on_circle(radius, center, step * T::from(i).unwrap())
        })
        .collect();

    Contour::from_points(&points, true)
}

/// Open zig zag path with `tooth_count` teeth.
pub fn zig_zag<T>(tooth_count: usize) -> Contour<T>
where
    T: Real,
{
    let width = T::from(4.0).unwrap();
    let height = T::from(3.0).unwrap();
    let points: Vec<Vector2<T>> = (0..=2 * tooth_count)
        .map(|i| {
            let x = width * T::from(i).unwrap() / T::two();
            let y = if i % 2 == 0 { T::zero() } else { height };
            Vector2::new(x, y)
        })
        .collect();

    Contour::from_points(&points, false)
}

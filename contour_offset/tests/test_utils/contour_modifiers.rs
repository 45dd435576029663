use contour_offset::contour::Contour;

/// Cycles the segments forward by `n` so the contour starts at segment `n` (only applicable to
/// closed contours).
pub fn cycle_start_index_forward(input: &Contour<f64>, n: usize) -> Contour<f64> {
    assert!(n > 0, "cycling forward by 0 just returns the same contour");
    assert!(
        n < input.len(),
        "cycling forward by more than the contour length is unnecessary"
    );
    assert!(
        input.is_closed(),
        "cycling segment positions not possible with open contour"
    );
    Contour::from_segments(
        input.iter().cycle().skip(n).take(input.len()).copied(),
        input.is_closed(),
    )
}

#[derive(Debug, Clone, Copy)]
pub struct ModifiedContourState {
    pub reversed: bool,
    pub cycle_position: usize,
}

/// Every start position of a closed contour in both directions, with the state that produced it.
pub fn modified_contours(input: &Contour<f64>) -> Vec<(Contour<f64>, ModifiedContourState)> {
    let mut result = Vec::new();
    for reversed in [false, true] {
        let mut base = input.clone();
        if reversed {
            base.reverse();
        }
        result.push((
            base.clone(),
            ModifiedContourState {
                reversed,
                cycle_position: 0,
            },
        ));
        for n in 1..base.len() {
            result.push((
                cycle_start_index_forward(&base, n),
                ModifiedContourState {
                    reversed,
                    cycle_position: n,
                },
            ));
        }
    }

    result
}

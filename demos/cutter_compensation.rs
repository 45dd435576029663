use contour_offset::{
    contour_closed,
    offset::{CutterCompensation, OffsetOptions},
};

fn main() {
    tracing_subscriber::fmt::init();

    let tool_radius = 0.25;
    let pocket = contour_closed![(0.0, 0.0), (10.0, 0.0), (10.0, 6.0), (0.0, 6.0)];
    let options = OffsetOptions {
        max_interference_iterations: 50,
        ..Default::default()
    };

    for compensation in [CutterCompensation::Left, CutterCompensation::Right] {
        let side = compensation.offset_side();
        match pocket.parallel_offset_opt(tool_radius, side, &options) {
            Ok(path) => println!(
                "{compensation:?} ({side:?}): tool path with {} segments starting at {:?}",
                path.len(),
                path.first().map(|s| s.start())
            ),
            Err(e) => println!("{compensation:?} ({side:?}): {e}"),
        }
    }
}

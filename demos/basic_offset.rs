use contour_offset::{
    contour_closed,
    geometry::Segment,
    offset::{OffsetEngine, OffsetOptions, OffsetSide},
};

fn init_logging() {
    // Default: WARN for everything, DEBUG for the offset engine.
    // Override with RUST_LOG (e.g. RUST_LOG=contour_offset=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("contour_offset=debug".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

fn print_segments(segments: &[Segment]) {
    for (i, s) in segments.iter().enumerate() {
        match s {
            Segment::Line(l) => println!(
                "  {i}: line ({:.3}, {:.3}) -> ({:.3}, {:.3})",
                l.start().x,
                l.start().y,
                l.end().x,
                l.end().y
            ),
            Segment::Arc(a) => println!(
                "  {i}: arc center ({:.3}, {:.3}) radius {:.3} sweep {:.1} deg",
                a.center().x,
                a.center().y,
                a.radius(),
                a.sweep().to_degrees()
            ),
            Segment::Vertex(v) => println!("  {i}: vertex ({:.3}, {:.3})", v.pos.x, v.pos.y),
        }
    }
}

fn main() {
    init_logging();

    let l_shape = contour_closed![
        (0.0, 0.0),
        (4.0, 0.0),
        (4.0, 2.0),
        (2.0, 2.0),
        (2.0, 4.0),
        (0.0, 4.0)
    ];
    println!("L shape: area {:.3}, length {:.3}", l_shape.area(), l_shape.length());

    for side in [OffsetSide::Inward, OffsetSide::Outward] {
        let engine = match OffsetEngine::new(&l_shape, 0.5, side, &OffsetOptions::new()) {
            Ok(engine) => engine,
            Err(e) => {
                println!("{side:?} offset failed: {e}");
                continue;
            }
        };

        println!(
            "\n{side:?} offset by 0.5: {} reflex vertices, {} trims, complete: {}",
            engine.reflex_count(),
            engine.trim_iterations(),
            engine.is_complete()
        );
        print_segments(engine.raw_offset());
    }
}

use contour_offset::{
    contour_open,
    offset::{OffsetEngine, OffsetOptions, OffsetSide},
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    let v = contour_open![(4.0, 2.0), (2.0, 0.0), (0.0, 2.0)];

    // small offsets trim the reflex vertex, large ones run out of contour to trim against
    for distance in [1.0, 5.0] {
        let options = OffsetOptions::new();
        let engine = match OffsetEngine::new(&v, distance, OffsetSide::Inward, &options) {
            Ok(engine) => engine,
            Err(e) => {
                println!("offset by {distance} rejected: {e}");
                continue;
            }
        };

        match engine.failure() {
            None => println!(
                "offset by {distance}: {} segments after {} trims",
                engine.raw_offset().len(),
                engine.trim_iterations()
            ),
            Some(e) => println!(
                "offset by {distance}: partial result with {} segments ({e})",
                engine.raw_offset().len()
            ),
        }

        let intrs = engine.find_self_intersects();
        if !intrs.is_empty() {
            println!("  {} self intersects remain", intrs.len());
        }
    }
}

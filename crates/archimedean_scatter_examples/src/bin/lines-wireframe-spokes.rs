use archimedean_scatter::prelude::*;
use archimedean_scatter_examples::{init_tracing, render_points_to_png, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Spokes mixed with the face wireframe, drawn as thin jittered lines.
    let config = SampleConfiguration::new(SolidType::Rhombicosidodecahedron)
        .with_internal_mode(InternalMode::Spokes)
        .with_thickness(0.01)
        .with_surface_lines(true);
    let emitter = PointEmitter::try_new(config)?;
    let mut rng = StdRng::seed_from_u64(1234);

    let points = emitter.sample_many(300_000, &mut rng);

    let half_extent = emitter.solid().max_vertex_norm() * 1.1;
    let rc = RenderConfig::new((900, 900), half_extent)
        .with_background([250, 248, 240])
        .with_color([30, 40, 90]);
    render_points_to_png(&points, &rc, "lines-wireframe-spokes.png")?;
    Ok(())
}

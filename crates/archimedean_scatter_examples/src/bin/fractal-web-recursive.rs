use archimedean_scatter::prelude::*;
use archimedean_scatter_examples::{init_tracing, render_points_to_png, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let base = SampleConfiguration::new(SolidType::Icosahedron)
        .with_internal_mode(InternalMode::Web)
        .with_thickness(0.0)
        .with_surface_lines(false);
    let half_extent = catalog::solid(SolidType::Icosahedron).max_vertex_norm() * 1.1;

    // Each depth contracts the web toward a randomly chosen vertex once more.
    for depth in [0, 1, 3, 5] {
        let emitter = PointEmitter::try_new(base.with_recursion_depth(depth))?;
        let mut rng = StdRng::seed_from_u64(99);
        let points = emitter.sample_many(500_000, &mut rng);

        let rc = RenderConfig::new((800, 800), half_extent).with_color([255, 120, 160]);
        render_points_to_png(&points, &rc, format!("fractal-web-depth-{depth}.png"))?;
    }
    Ok(())
}

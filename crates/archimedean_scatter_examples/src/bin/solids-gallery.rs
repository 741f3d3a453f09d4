use archimedean_scatter::prelude::*;
use archimedean_scatter_examples::{init_tracing, render_points_to_png, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // One filled render per solid, framed by its own circumradius.
    for kind in SolidType::ALL {
        let emitter = PointEmitter::try_new(SampleConfiguration::new(kind))?;
        let mut rng = StdRng::seed_from_u64(7 ^ kind.index() as u64);
        let points = emitter.sample_many(250_000, &mut rng);

        let half_extent = emitter.solid().max_vertex_norm() * 1.1;
        let rc = RenderConfig::new((600, 600), half_extent).with_color([150, 210, 255]);
        render_points_to_png(&points, &rc, format!("solids-gallery-{}.png", kind.name()))?;
    }
    Ok(())
}

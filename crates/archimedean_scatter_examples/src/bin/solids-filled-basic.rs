use archimedean_scatter::prelude::*;
use archimedean_scatter_examples::{init_tracing, render_points_to_png, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = SampleConfiguration::new(SolidType::TruncatedOctahedron);
    let emitter = PointEmitter::try_new(config)?;
    let mut rng = StdRng::seed_from_u64(42);

    let points = emitter.sample_many(400_000, &mut rng);

    let rc = RenderConfig::new((900, 900), 2.4);
    render_points_to_png(&points, &rc, "solids-filled-basic.png")?;
    Ok(())
}

use archimedean_scatter::prelude::*;
use archimedean_scatter_examples::{init_tracing, render_points_to_png, RenderConfig, View};
use glam::DVec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Parameters arrive by name as plain numbers; out-of-range values are clamped with a warning.
    let updates = [
        ("type", 8.0),
        ("internal_mode", 2.0),
        ("recursion_depth", 2.0),
        ("thickness", 0.02),
        ("surface_lines", 1.0),
        ("scale", 1.5),
    ];
    let config = updates
        .iter()
        .try_fold(SampleConfiguration::default(), |config, (name, value)| {
            config.with_parameter(name, *value)
        })?;

    info!("Variation '{}':", VARIATION_NAME);
    for (name, value) in PARAMETER_NAMES.iter().zip(config.parameter_values()) {
        info!("  {name} = {value}");
    }

    let emitter = PointEmitter::try_new(config)?;
    let mut rng = StdRng::seed_from_u64(5);

    // Accumulate like a host would: each sample is added onto the incoming point.
    let origin = DVec3::new(0.25, 0.0, 0.0);
    let points: Vec<DVec3> = (0..400_000)
        .map(|_| {
            let mut p = origin;
            emitter.emit(&mut rng, &mut p);
            p
        })
        .collect();

    let half_extent = emitter.solid().max_vertex_norm() * config.scale * 1.1;
    let rc = RenderConfig::new((900, 900), half_extent).with_view(View::new(0.3, 0.2));
    render_points_to_png(&points, &rc, "host-parameters.png")?;
    Ok(())
}

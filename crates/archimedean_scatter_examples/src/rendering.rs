//! Density projections of sampled point clouds to PNG.
use std::path::Path;

use anyhow::{ensure, Context};
use glam::{DMat3, DVec3};
use image::{Rgb, RgbImage};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Install a formatting subscriber honoring `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Orientation of the orthographic camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    /// Rotation about the vertical axis, in radians.
    pub yaw: f64,
    /// Tilt toward the viewer, in radians.
    pub pitch: f64,
}

impl View {
    pub const FRONT: View = View {
        yaw: 0.0,
        pitch: 0.0,
    };

    pub fn new(yaw: f64, pitch: f64) -> Self {
        Self { yaw, pitch }
    }

    fn rotation(&self) -> DMat3 {
        DMat3::from_rotation_x(self.pitch) * DMat3::from_rotation_y(self.yaw)
    }
}

impl Default for View {
    fn default() -> Self {
        Self::new(0.6, 0.45)
    }
}

#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output size in pixels.
    pub image_size: (u32, u32),
    /// World-space half width of the visible square.
    pub half_extent: f64,
    pub background: [u8; 3],
    pub color: [u8; 3],
    pub view: View,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), half_extent: f64) -> Self {
        Self {
            image_size,
            half_extent,
            background: [12, 12, 18],
            color: [255, 214, 140],
            view: View::default(),
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_color(mut self, color: [u8; 3]) -> Self {
        self.color = color;
        self
    }

    pub fn with_view(mut self, view: View) -> Self {
        self.view = view;
        self
    }
}

/// Rotate, project onto the image plane, and log-tone-map hit counts per pixel.
pub fn render_points_to_png(
    points: &[DVec3],
    config: &RenderConfig,
    out_path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (width, height) = config.image_size;
    ensure!(width > 0 && height > 0, "image size must be non-zero");
    ensure!(config.half_extent > 0.0, "half_extent must be > 0");

    let rotation = config.view.rotation();
    let aspect = width as f64 / height as f64;
    let mut hits = vec![0u32; (width * height) as usize];
    let mut visible = 0usize;

    for p in points {
        let q = rotation * *p;
        let u = (q.x / (config.half_extent * aspect) + 1.0) * 0.5;
        let v = (1.0 - q.y / config.half_extent) * 0.5;
        if !(0.0..1.0).contains(&u) || !(0.0..1.0).contains(&v) {
            continue;
        }
        let x = (u * width as f64) as u32;
        let y = (v * height as f64) as u32;
        hits[(y * width + x) as usize] += 1;
        visible += 1;
    }

    let peak = hits.iter().copied().max().unwrap_or(0).max(1) as f64;
    let norm = peak.ln_1p();
    let mut img = RgbImage::from_pixel(width, height, Rgb(config.background));
    for (i, &count) in hits.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let t = (count as f64).ln_1p() / norm;
        let mix = |bg: u8, fg: u8| (bg as f64 + (fg as f64 - bg as f64) * t).round() as u8;
        let px = Rgb([
            mix(config.background[0], config.color[0]),
            mix(config.background[1], config.color[1]),
            mix(config.background[2], config.color[2]),
        ]);
        img.put_pixel(i as u32 % width, i as u32 / width, px);
    }

    let out_path = out_path.as_ref();
    img.save(out_path)
        .with_context(|| format!("writing {}", out_path.display()))?;
    info!(
        "Wrote {} ({} of {} points visible).",
        out_path.display(),
        visible,
        points.len()
    );
    Ok(())
}

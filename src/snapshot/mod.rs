//! Diagram snapshot pipeline: plane state → PNG bytes via plotters.

use std::path::PathBuf;

use image::codecs::png::PngEncoder;
use image::ImageEncoder;
use plotters::prelude::*;

use crate::numeric::ComplexNumber;
use crate::scene::Rgb;

/// Output image dimensions (pixels).
pub const SNAPSHOT_WIDTH: u32 = 800;
pub const SNAPSHOT_HEIGHT: u32 = 800;

/// Background color (the scene's main gray).
const BG_COLOR: RGBColor = RGBColor(83, 92, 104);
/// Axis / grid color.
const AXIS_COLOR: RGBColor = RGBColor(200, 204, 210);

/// Everything a snapshot needs, detached from the live TUI state.
pub struct SnapshotScene {
    /// Plotted numbers with their marker colors.
    pub points: Vec<(ComplexNumber, Rgb)>,
    /// Sum marker, present with two or more points.
    pub sum: Option<ComplexNumber>,
    /// Half axis length in complex units.
    pub range: f64,
}

/// Render the scene to a PNG image.
pub fn render_snapshot(scene: &SnapshotScene) -> Result<Vec<u8>, String> {
    let width = SNAPSHOT_WIDTH;
    let height = SNAPSHOT_HEIGHT;
    let mut buf = vec![0u8; (width * height * 3) as usize];

    {
        let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
        root.fill(&BG_COLOR).map_err(|e| format!("fill: {}", e))?;

        let range = if scene.range > 0.0 { scene.range } else { 7.0 };
        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .build_cartesian_2d(-range..range, -range..range)
            .map_err(|e| format!("chart build: {}", e))?;

        chart
            .configure_mesh()
            .axis_style(AXIS_COLOR)
            .bold_line_style(AXIS_COLOR.mix(0.3))
            .light_line_style(AXIS_COLOR.mix(0.1))
            .x_labels(0)
            .y_labels(0)
            .draw()
            .map_err(|e| format!("mesh: {}", e))?;

        // Origin vectors and markers, one per point.
        for (z, color) in &scene.points {
            let Rgb(r, g, b) = *color;
            let stroke = RGBColor(r, g, b);
            let tip = (z.re_or_zero(), z.im_or_zero());

            chart
                .draw_series(LineSeries::new(
                    [(0.0, 0.0), tip],
                    stroke.stroke_width(2),
                ))
                .map_err(|e| format!("draw vector: {}", e))?;
            chart
                .draw_series(std::iter::once(Circle::new(tip, 5, stroke.filled())))
                .map_err(|e| format!("draw point: {}", e))?;
        }

        // Sum marker, its origin vector, and the projections from each point.
        if let Some(sum) = &scene.sum {
            let tip = (sum.re_or_zero(), sum.im_or_zero());

            chart
                .draw_series(LineSeries::new([(0.0, 0.0), tip], WHITE.stroke_width(2)))
                .map_err(|e| format!("draw sum vector: {}", e))?;

            if scene.points.len() == 2 {
                for (z, _) in &scene.points {
                    chart
                        .draw_series(LineSeries::new(
                            [(z.re_or_zero(), z.im_or_zero()), tip],
                            WHITE.mix(0.5).stroke_width(1),
                        ))
                        .map_err(|e| format!("draw projection: {}", e))?;
                }
            }

            chart
                .draw_series(std::iter::once(Circle::new(tip, 6, WHITE.filled())))
                .map_err(|e| format!("draw sum: {}", e))?;
        }

        root.present().map_err(|e| format!("present: {}", e))?;
    }

    encode_rgb_to_png(&buf, width, height)
}

/// Render and write a snapshot under the data directory, returning the
/// path it was written to.
pub fn export_snapshot(scene: &SnapshotScene) -> Result<PathBuf, String> {
    let png = render_snapshot(scene)?;
    let dir = snapshots_dir().ok_or("cannot determine snapshots directory")?;
    let path = dir.join(format!("{}.png", snapshot_name()));
    std::fs::write(&path, &png).map_err(|e| format!("write error: {}", e))?;
    Ok(path)
}

/// Get or create the snapshots directory.
fn snapshots_dir() -> Option<PathBuf> {
    let dir = crate::persistence::data_dir()?.join("snapshots");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

fn snapshot_name() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!("argand_{}", secs)
}

/// Encode a raw RGB pixel buffer to PNG.
fn encode_rgb_to_png(rgb: &[u8], width: u32, height: u32) -> Result<Vec<u8>, String> {
    let mut png = Vec::new();
    let encoder = PngEncoder::new(&mut png);
    encoder
        .write_image(rgb, width, height, image::ExtendedColorType::Rgb8)
        .map_err(|e| format!("PNG encode: {}", e))?;
    Ok(png)
}

use grid_montage::{GridRenderer, ImageGrid, RenderParams};
use image::{Rgba, RgbaImage};

fn main() {
    // Demo stub: renders a tiny synthetic two-column montage
    let tile = |color: [u8; 4]| RgbaImage::from_pixel(96, 64, Rgba(color));
    let grid = ImageGrid::from_columns(vec![
        vec![tile([200, 60, 60, 255]), tile([60, 200, 60, 255])],
        vec![tile([60, 60, 200, 255]), tile([200, 200, 60, 255])],
    ])
    .expect("synthetic grid is rectangular");

    let renderer = GridRenderer::new(RenderParams {
        figure_size: (6.0, 4.0),
        ..Default::default()
    });
    match renderer.render_with_report(&grid, &["input", "output"]) {
        Ok((figure, report)) => println!(
            "canvas={}x{} images={} latency_ms={:.3}",
            figure.layout().canvas_width,
            figure.layout().canvas_height,
            report.images_placed,
            report.timing.total_ms
        ),
        Err(err) => eprintln!("render failed: {err}"),
    }
}

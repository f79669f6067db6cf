mod common;

use common::synthetic::{coordinate_tile, solid};
use grid_montage::{GridRenderer, ImageGrid, MontageError, RenderParams};
use image::{Rgba, RgbaImage};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// 2x2 grid of 40x30 tiles whose pixels encode (x, y, seed). Seeds start
/// at 1 so no tile pixel can ever equal the pure-black title ink.
fn sample_grid() -> ImageGrid {
    ImageGrid::from_columns(vec![
        vec![coordinate_tile(40, 30, 1), coordinate_tile(40, 30, 2)],
        vec![coordinate_tile(40, 30, 3), coordinate_tile(40, 30, 4)],
    ])
    .unwrap()
}

/// Exact-fit geometry: 90x80px canvas, 40x30 cells, 10/20px gutters.
fn exact_params(fig_h: f32) -> RenderParams {
    RenderParams {
        figure_size: (0.9, fig_h),
        axes_pad: (0.1, 0.2),
        dpi: 100.0,
        ..RenderParams::default()
    }
}

#[test]
fn column_major_pairing_is_exact() {
    let grid = sample_grid();
    let renderer = GridRenderer::new(exact_params(0.8));
    let figure = renderer.render(&grid, &[]).unwrap();
    let canvas = figure.image();

    for col in 0..2 {
        for row in 0..2 {
            let cell = figure.layout().cell(row, col);
            let tile = grid.image(row, col);
            assert_eq!((cell.width, cell.height), (40, 30), "cells fit tiles exactly");
            for y in 0..cell.height {
                for x in 0..cell.width {
                    assert_eq!(
                        canvas.get_pixel(cell.x + x, cell.y + y),
                        tile.get_pixel(x, y),
                        "cell ({row}, {col}) pixel ({x}, {y})"
                    );
                }
            }
        }
    }
}

#[test]
fn cells_carry_no_decoration() {
    let grid = sample_grid();
    let renderer = GridRenderer::new(exact_params(0.8));
    let figure = renderer.render(&grid, &[]).unwrap();
    let layout = figure.layout();

    for (x, y, pixel) in figure.image().enumerate_pixels() {
        let in_cell = (0..2).any(|col| (0..2).any(|row| layout.cell(row, col).contains(x, y)));
        if !in_cell {
            assert_eq!(*pixel, WHITE, "non-background pixel outside cells at ({x}, {y})");
        }
    }
}

#[test]
fn titles_land_over_their_columns_only() {
    let grid = sample_grid();
    let renderer = GridRenderer::new(exact_params(1.08));
    let figure = renderer.render(&grid, &["A", "B"]).unwrap();
    let layout = figure.layout();
    assert_eq!(layout.title_band, 28);

    let anchors = [layout.title_anchor(0), layout.title_anchor(1)];
    let mut ink_per_anchor = [0usize; 2];
    for (x, y, pixel) in figure.image().enumerate_pixels() {
        if *pixel == INK {
            let owner = anchors.iter().position(|a| a.contains(x, y));
            match owner {
                Some(i) => ink_per_anchor[i] += 1,
                None => panic!("title ink outside every title anchor at ({x}, {y})"),
            }
        }
    }
    assert!(ink_per_anchor[0] > 0, "column 0 title not drawn");
    assert!(ink_per_anchor[1] > 0, "column 1 title not drawn");

    // Cell contents are unchanged by titling.
    for col in 0..2 {
        for row in 0..2 {
            let cell = layout.cell(row, col);
            let tile = grid.image(row, col);
            for y in 0..cell.height {
                for x in 0..cell.width {
                    assert_eq!(
                        figure.image().get_pixel(cell.x + x, cell.y + y),
                        tile.get_pixel(x, y)
                    );
                }
            }
        }
    }
}

#[test]
fn empty_titles_draw_nothing_and_reserve_no_band() {
    let grid = sample_grid();
    let renderer = GridRenderer::new(exact_params(0.8));
    let figure = renderer.render(&grid, &[]).unwrap();

    assert_eq!(figure.layout().title_band, 0);
    assert_eq!(figure.layout().canvas_height, 80);
    let ink = figure.image().pixels().filter(|p| **p == INK).count();
    assert_eq!(ink, 0, "no title ink expected without titles");
}

#[test]
fn rendering_is_read_only_and_repeatable() {
    let grid = sample_grid();
    let before: Vec<RgbaImage> = grid.iter_column_major().cloned().collect();
    let renderer = GridRenderer::new(exact_params(1.08));

    let first = renderer.render(&grid, &["A", "B"]).unwrap();
    let second = renderer.render(&grid, &["A", "B"]).unwrap();
    assert_eq!(first.image().as_raw(), second.image().as_raw());

    let after: Vec<&RgbaImage> = grid.iter_column_major().collect();
    for (original, current) in before.iter().zip(after) {
        assert_eq!(original.as_raw(), current.as_raw(), "input image mutated");
    }
}

#[test]
fn title_count_mismatch_is_rejected() {
    let grid = sample_grid();
    let renderer = GridRenderer::new(exact_params(1.08));
    let err = renderer.render(&grid, &["only one"]).unwrap_err();
    assert!(matches!(
        err,
        MontageError::TitleCountMismatch {
            titles: 1,
            columns: 2
        }
    ));
}

#[test]
fn shape_violations_are_diagnosed_up_front() {
    assert!(matches!(
        ImageGrid::from_columns(vec![]).unwrap_err(),
        MontageError::EmptyGrid
    ));
    assert!(matches!(
        ImageGrid::from_columns(vec![vec![solid(4, 4, [9, 9, 9, 255])], vec![]]).unwrap_err(),
        MontageError::EmptyColumn { index: 1 }
    ));
    assert!(matches!(
        ImageGrid::from_columns(vec![
            vec![solid(4, 4, [9, 9, 9, 255]); 2],
            vec![solid(4, 4, [9, 9, 9, 255]); 3],
        ])
        .unwrap_err(),
        MontageError::RaggedColumn {
            index: 1,
            expected: 2,
            actual: 3
        }
    ));
}

#[test]
fn oversized_images_are_scaled_to_fit_and_centered() {
    // 100x90 image into a 40x30 cell: fits to 33x30, centered at x offset 3.
    let grid = ImageGrid::from_columns(vec![vec![solid(100, 90, [255, 0, 0, 255])]]).unwrap();
    let renderer = GridRenderer::new(RenderParams {
        figure_size: (0.4, 0.3),
        axes_pad: (0.0, 0.0),
        ..RenderParams::default()
    });
    let figure = renderer.render(&grid, &[]).unwrap();
    let canvas = figure.image();
    assert_eq!((canvas.width(), canvas.height()), (40, 30));

    for (x, y, pixel) in canvas.enumerate_pixels() {
        if (3..36).contains(&x) {
            assert!(
                pixel.0[0] >= 250 && pixel.0[1] <= 5,
                "expected red inside the fitted region at ({x}, {y}), got {:?}",
                pixel
            );
        } else {
            assert_eq!(*pixel, WHITE, "expected background margin at ({x}, {y})");
        }
    }
}

#[test]
fn smaller_images_blit_at_native_resolution_centered() {
    // 20x10 tile in a 40x30 cell: centered with 10px / 10px offsets.
    let grid = ImageGrid::from_columns(vec![vec![coordinate_tile(20, 10, 7)]]).unwrap();
    let renderer = GridRenderer::new(RenderParams {
        figure_size: (0.4, 0.3),
        axes_pad: (0.0, 0.0),
        ..RenderParams::default()
    });
    let figure = renderer.render(&grid, &[]).unwrap();
    let canvas = figure.image();
    let tile = grid.image(0, 0);

    for y in 0..10 {
        for x in 0..20 {
            assert_eq!(canvas.get_pixel(10 + x, 10 + y), tile.get_pixel(x, y));
        }
    }
    assert_eq!(*canvas.get_pixel(0, 0), WHITE);
    assert_eq!(*canvas.get_pixel(39, 29), WHITE);
}

#[test]
fn report_describes_the_figure() {
    let grid = sample_grid();
    let renderer = GridRenderer::new(exact_params(1.08));
    let (figure, report) = renderer.render_with_report(&grid, &["A", "B"]).unwrap();

    assert_eq!(report.rows, 2);
    assert_eq!(report.cols, 2);
    assert_eq!(report.images_placed, 4);
    assert!(report.titled);
    assert_eq!(report.canvas_width, figure.layout().canvas_width);
    assert_eq!(report.timing.stages.len(), 3);
    assert!(report.timing.total_ms >= 0.0);

    let json = serde_json::to_string_pretty(&report).unwrap();
    assert!(json.contains("\"cellWidth\": 40"));
}

use grid_montage::config::{load_config, MontageConfig};
use grid_montage::io::{load_image, write_json_file};
use grid_montage::{GridBuilder, GridRenderer, RenderReport};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let program = env::args()
        .next()
        .unwrap_or_else(|| "montage_demo".to_string());
    let config_path = match env::args().nth(1) {
        Some(arg) if arg == "--help" || arg == "-h" => {
            println!("{}", usage(&program));
            return Ok(());
        }
        Some(arg) => arg,
        None => return Err(usage(&program)),
    };

    let config = load_config(Path::new(&config_path)).map_err(|e| e.to_string())?;
    let grid = build_grid(&config)?;

    let titles_owned = config.titles();
    let titles: Vec<&str> = titles_owned
        .iter()
        .flatten()
        .map(String::as_str)
        .collect();

    let renderer = GridRenderer::new(config.params.clone());
    let (figure, report) = renderer
        .render_with_report(&grid, &titles)
        .map_err(|e| e.to_string())?;

    figure.save_png(&config.output).map_err(|e| e.to_string())?;
    println!("Montage written to {}", config.output.display());
    print_summary(&report);

    if let Some(path) = &config.report_json {
        write_json_file(path, &report).map_err(|e| e.to_string())?;
        println!("JSON report written to {}", path.display());
    }

    Ok(())
}

fn build_grid(config: &MontageConfig) -> Result<grid_montage::ImageGrid, String> {
    let mut builder = GridBuilder::new();
    for column in &config.columns {
        let images = column
            .images
            .iter()
            .map(|path| load_image(path))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| e.to_string())?;
        builder = builder.push_column(images);
    }
    builder.build().map_err(|e| e.to_string())
}

fn print_summary(report: &RenderReport) {
    println!("Render summary");
    println!("  canvas: {}x{}px", report.canvas_width, report.canvas_height);
    println!("  grid: {} rows x {} cols", report.rows, report.cols);
    println!(
        "  cell: {}x{}px",
        report.layout.cell_width, report.layout.cell_height
    );
    println!("  images placed: {}", report.images_placed);
    println!("  total_ms: {:.3}", report.timing.total_ms);
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {program} <config.json>\n\n\
         The config lists columns (each with optional title and image paths),\n\
         the output PNG path, an optional report_json path, and render params."
    )
}

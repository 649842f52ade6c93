use raster_lines::config::{self, ScanMode};
use raster_lines::diagnostics::{InputDescriptor, ScanReport};
use raster_lines::grid::io::{load_pixel_grid, save_bitmap, write_json_file};
use raster_lines::{find_line, LineScanner};
use std::env;
use std::path::Path;
use std::time::Instant;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = config::load_config(Path::new(&config_path))?;

    let t0 = Instant::now();
    let grid = load_pixel_grid(&config.input, config.classify)?;
    let load_ms = elapsed_ms(t0);

    let t1 = Instant::now();
    let lines = match config.mode {
        ScanMode::Single => find_line(&grid)
            .map_err(|e| format!("{}: {e}", config.input.display()))?
            .into_iter()
            .collect(),
        ScanMode::Multi => {
            LineScanner::new(&grid)
                .map_err(|e| format!("{}: {e}", config.input.display()))?
                .extract()
                .lines
        }
    };
    let scan_ms = elapsed_ms(t1);

    let mut report = ScanReport::new(InputDescriptor::from_grid(&grid), config.mode, lines);
    report.timings.push("load", load_ms);
    report.timings.push("scan", scan_ms);

    if let Some(mask_path) = &config.output.mask_image {
        save_bitmap(&grid, mask_path)?;
        println!("Saved foreground mask to {}", mask_path.display());
    }
    write_json_file(&config.output.lines_json, &report)?;

    println!(
        "Saved {} lines to {}",
        report.lines.len(),
        config.output.lines_json.display()
    );
    for descriptor in &report.lines {
        println!("{}", descriptor.line);
    }

    Ok(())
}

fn elapsed_ms(t: Instant) -> f64 {
    t.elapsed().as_secs_f64() * 1000.0
}

fn usage() -> String {
    "Usage: find_lines <config.json>".to_string()
}

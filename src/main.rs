use mosaic_viewer::config;
use mosaic_viewer::diagnostics::StderrSink;
use mosaic_viewer::encode::encode;
use mosaic_viewer::image::{io, ImageBatch, ImageF32};
use mosaic_viewer::mosaic;
use mosaic_viewer::present::{Presenter, Wait};
use mosaic_viewer::scale::{ResizeStrategy, ScaledResize};
use mosaic_viewer::viewer::{show_image, ShowOptions};
use mosaic_viewer::window::MiniWindow;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let program = env::args()
        .next()
        .unwrap_or_else(|| "mosaic-viewer".to_string());
    let config = config::parse_cli(&program)?;

    let wait = match config.wait_ms {
        None => Wait::Block,
        Some(0) => Wait::Poll,
        Some(ms) => Wait::WaitFor(Duration::from_millis(ms)),
    };
    let sink = StderrSink;
    let mut presenter = Presenter::new(MiniWindow::new("mosaic"));

    for dir in &config.inputs {
        let batch = load_directory(dir, config.tile_size)?;
        println!("{}: {} images", dir.display(), batch.len());

        let canvas = mosaic::assemble(&batch, &config.grid.mosaic, &sink)?;
        if let Some(dump_dir) = &config.dump_dir {
            dump_canvas(&canvas, dir, dump_dir)?;
        }

        let show = ShowOptions {
            visualize_negative: config.grid.visualize_negative,
            ..ShowOptions::default()
        };
        if show_image(&mut presenter, &canvas, &show, wait, &sink)? {
            println!("Quit requested");
            break;
        }
    }
    Ok(())
}

/// Load every image in `dir` as grayscale and rescale to `tile × tile`.
fn load_directory(dir: &Path, tile: usize) -> Result<ImageBatch, String> {
    let entries = fs::read_dir(dir)
        .map_err(|e| format!("Failed to read directory {}: {e}", dir.display()))?;
    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file())
        .collect();
    paths.sort();

    let mut images = Vec::with_capacity(paths.len());
    for path in &paths {
        let img = io::load_grayscale_f32(path)?;
        let resize = ScaledResize::new(tile as f32 / img.w as f32, tile as f32 / img.h as f32);
        images.push(resize.resize(&img));
    }
    ImageBatch::from_images(images).map_err(|e| format!("{}: {e}", dir.display()))
}

/// Write the canvas as a PNG named after the input directory, sign-encoded
/// when it carries negative samples.
fn dump_canvas(canvas: &ImageF32, input: &Path, dump_dir: &Path) -> Result<(), String> {
    let stem = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "mosaic".to_string());
    let path = dump_dir.join(format!("{stem}.png"));
    if canvas.has_negative() {
        io::save_bgr_f32(&encode(canvas), &path)
    } else {
        io::save_grayscale_f32(canvas, &path)
    }
}

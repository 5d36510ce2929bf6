// Author: Dustin Pilgrim
// License: MIT

use std::path::PathBuf;

use clap::Parser;
use eventline::{debug, error, info, warn};

use scissors_view::config;
use scissors_view::logging::init_logging;
use scissors_view::paths::{default_config_path, default_log_path};
use scissors_view::{PixmapSurface, Scene, Step};

const PAGE_BACKGROUND: u32 = 0xFFFF_FFFF;

#[derive(Debug, Parser)]
#[command(
    name = "scissors-preview",
    version,
    about = "Replay crop-rect gestures on a blank page and save the result as PNG"
)]
struct Args {
    /// Page width in pixels
    #[arg(long, default_value_t = 612)]
    width: u32,

    /// Page height in pixels
    #[arg(long, default_value_t = 792)]
    height: u32,

    /// Output PNG
    #[arg(long, short = 'o', default_value = "preview.png")]
    out: PathBuf,

    /// Override style config (default: $XDG_CONFIG_HOME/scissors/scissors.rune)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log to stderr (in addition to the log file)
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Override log file path (default: $XDG_STATE_HOME/scissors/preview.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Steps: draw:x,y,x2,y2 | select:n | move:n,dx,dy | drag:n,x,y,x2,y2
    #[arg(required = true)]
    steps: Vec<Step>,
}

fn main() {
    let args = Args::parse();

    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(|| default_log_path("preview.log"));

    if let Err(e) = init_logging(&log_path, args.verbose) {
        eprintln!("scissors-preview: failed to init logging: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(args) {
        error!("fatal error: {e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), String> {
    info!("scissors-preview starting");
    debug!("page={}x{} out={}", args.width, args.height, args.out.display());

    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let style = config::load_style(&config_path).map_err(|e| e.to_string())?;
    debug!("style loaded from {}", config_path.display());

    let page_w = i32::try_from(args.width).map_err(|_| "page width too large".to_string())?;
    let page_h = i32::try_from(args.height).map_err(|_| "page height too large".to_string())?;
    let mut scene = Scene::new(page_w, page_h);

    for step in &args.steps {
        let applied = scene.apply(step).map_err(|e| e.to_string())?;
        if !applied {
            warn!("step {:?} had no effect", step);
            continue;
        }
        match scene.damage().take() {
            Some(region) => {
                debug!("step {:?} damaged {:?}", step, region);
            }
            None => {
                debug!("step {:?} applied", step);
            }
        }
    }

    let mut surface = PixmapSurface::new(args.width, args.height).map_err(|e| e.to_string())?;
    surface.clear(PAGE_BACKGROUND);
    scene.render(&mut surface, scene.bounds(), &style);
    surface.save_png(&args.out).map_err(|e| e.to_string())?;

    info!(
        "wrote {} ({} rects, {} change events)",
        args.out.display(),
        scene.rects().len(),
        scene.damage().events()
    );
    Ok(())
}

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use photoview_core::config::ViewerConfig;
use photoview_core::geometry::{Size, Vector};
use photoview_core::viewer::ZoomOutcome;

use super::{build_viewer, parse_pan, parse_size, save_current};

#[derive(Args)]
pub struct RenderArgs {
    /// Image file to open
    pub file: PathBuf,

    /// Surface size (WIDTHxHEIGHT)
    #[arg(long, default_value = "800x600", value_parser = parse_size)]
    pub size: Size,

    /// Images to step through the folder before rendering (negative goes back)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub next: isize,

    /// Quarter turns clockwise (negative turns counter-clockwise)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub rotate: isize,

    /// Zoom factor within the configured limits
    #[arg(long)]
    pub zoom: Option<f64>,

    /// Pan offset X,Y in source-image pixels (virtual-surface units), applied after zooming
    #[arg(long, value_parser = parse_pan, allow_hyphen_values = true)]
    pub pan: Option<Vector>,

    /// Output file path (.png or .jpg)
    #[arg(short, long, default_value = "view.png")]
    pub output: PathBuf,
}

pub fn run(args: &RenderArgs, config: &ViewerConfig) -> Result<()> {
    let mut viewer = build_viewer(config, args.size)?;

    viewer
        .open(&args.file)
        .with_context(|| format!("Failed to open {}", args.file.display()))?;
    viewer.navigate_by(args.next)?;
    viewer.rotate(args.rotate)?;

    if let Some(zoom) = args.zoom {
        if viewer.set_zoom(zoom)? == ZoomOutcome::Rejected {
            bail!(
                "Zoom {} is outside {}..={}",
                zoom,
                config.zoom.min,
                config.zoom.max
            );
        }
    }
    if let Some(pan) = args.pan {
        viewer.pan(pan)?;
    }

    crate::summary::print_view_summary(&viewer);

    save_current(&viewer, &args.output)?;
    println!("Saved to {}", args.output.display());

    Ok(())
}

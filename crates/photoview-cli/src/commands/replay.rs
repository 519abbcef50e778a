use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use photoview_core::config::ViewerConfig;
use photoview_core::geometry::Size;
use photoview_core::viewer::Command;
use tracing::debug;

use super::{build_viewer, parse_size, save_current, CliViewer};
use crate::summary;

#[derive(Args)]
pub struct ReplayArgs {
    /// Image file to open
    pub file: PathBuf,

    /// Script with one command per line; `pan DX DY` deltas are in source-image pixels
    pub script: PathBuf,

    /// Initial surface size (WIDTHxHEIGHT)
    #[arg(long, default_value = "800x600", value_parser = parse_size)]
    pub size: Size,
}

/// One line of a replay script.
enum Step {
    Viewer(Command),
    Resize(Size),
    Save(PathBuf),
}

fn parse_step(line: &str) -> Result<Step> {
    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map(|(v, r)| (v, r.trim()))
        .unwrap_or((line, ""));

    let step = match verb.to_ascii_lowercase().as_str() {
        "resize" => Step::Resize(parse_size(rest).map_err(anyhow::Error::msg)?),
        "save" if !rest.is_empty() => Step::Save(PathBuf::from(rest)),
        _ => Step::Viewer(line.parse()?),
    };
    Ok(step)
}

pub fn run(args: &ReplayArgs, config: &ViewerConfig) -> Result<()> {
    let script = std::fs::read_to_string(&args.script)
        .with_context(|| format!("Failed to read script {}", args.script.display()))?;

    let mut viewer = build_viewer(config, args.size)?;
    viewer
        .open(&args.file)
        .with_context(|| format!("Failed to open {}", args.file.display()))?;
    summary::print_view_summary(&viewer);

    let base = args.script.parent().unwrap_or(Path::new("."));

    for (number, raw) in script.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let number = number + 1;
        let step = parse_step(line).with_context(|| format!("line {number}"))?;
        run_step(&mut viewer, step, base, number, line)
            .with_context(|| format!("line {number}: {line}"))?;
    }

    flush_redraw(&mut viewer)?;
    Ok(())
}

fn run_step(
    viewer: &mut CliViewer,
    step: Step,
    base: &Path,
    number: usize,
    line: &str,
) -> Result<()> {
    match step {
        Step::Resize(size) => {
            viewer.surface_mut().set_size(size);
            if !viewer.notify_surface_resized() {
                debug!(line = number, "Resize coalesced into pending redraw");
            }
        }
        Step::Save(path) => {
            flush_redraw(viewer)?;
            let path = if path.is_absolute() { path } else { base.join(path) };
            save_current(viewer, &path)?;
            summary::print_saved(number, &path);
        }
        Step::Viewer(command) => {
            flush_redraw(viewer)?;
            let changed = viewer.apply(&command)?;
            summary::print_step(number, line, changed, viewer);
        }
    }
    Ok(())
}

/// Run the recompute owed by earlier `resize` lines, if any.
fn flush_redraw(viewer: &mut CliViewer) -> Result<()> {
    if viewer.redraw_owed() {
        viewer.recompute_and_render()?;
    }
    Ok(())
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use photoview_core::config::ViewerConfig;
use photoview_core::geometry::Size;
use photoview_core::io::export::save_frame;
use photoview_core::io::folder::FolderListing;
use tracing::warn;

use super::{build_viewer, parse_size};

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    Png,
    Jpg,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpg => "jpg",
        }
    }
}

#[derive(Args)]
pub struct ExportArgs {
    /// Any image of the folder; export starts here and wraps around
    pub file: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "export")]
    pub dir: PathBuf,

    /// Surface size each image is fitted to (WIDTHxHEIGHT)
    #[arg(long, default_value = "800x600", value_parser = parse_size)]
    pub size: Size,

    /// Output format
    #[arg(long, value_enum, default_value = "png")]
    pub format: ExportFormat,
}

pub fn run(args: &ExportArgs, config: &ViewerConfig) -> Result<()> {
    let listing = FolderListing::open(&args.file, &config.browse)
        .with_context(|| format!("Failed to browse {}", args.file.display()))?;
    let total = listing.len();
    std::fs::create_dir_all(&args.dir)
        .with_context(|| format!("Failed to create {}", args.dir.display()))?;

    println!("Exporting {} images at {}", total, args.size);

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:24} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );

    let mut viewer = build_viewer(config, args.size)?;
    let mut result = viewer.select(listing).map(|_| ());
    let mut written = 0usize;
    let mut skipped = 0usize;

    for step in 0..total {
        let index = viewer.state().current_index.unwrap_or_default();
        let source = viewer
            .current_path()
            .map(|p| p.to_path_buf())
            .unwrap_or_default();
        let name = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("image{index}"));
        pb.set_message(name.clone());

        let frame = viewer
            .surface()
            .frame()
            .filter(|f| f.request.index == index);
        match (&result, frame) {
            (Ok(()), Some(frame)) => {
                let out = args
                    .dir
                    .join(format!("{:04}_{}.{}", index + 1, name, args.format.extension()));
                save_frame(frame, &out, config.render.jpeg_quality)
                    .with_context(|| format!("Failed to write {}", out.display()))?;
                written += 1;
            }
            (Err(e), _) => {
                warn!(path = %source.display(), error = %e, "Skipping image");
                pb.println(format!("Skipped {}: {}", source.display(), e));
                skipped += 1;
            }
            (Ok(()), None) => {
                pb.println(format!("Skipped {}: not renderable", source.display()));
                skipped += 1;
            }
        }
        pb.inc(1);

        if step + 1 < total {
            result = viewer.navigate_by(1).map(|_| ());
        }
    }

    pb.finish_with_message("Done");
    println!(
        "\n{} written, {} skipped, saved to {}",
        written,
        skipped,
        args.dir.display()
    );

    Ok(())
}

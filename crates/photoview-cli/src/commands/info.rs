use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use photoview_core::config::ViewerConfig;
use photoview_core::io::decode::{FsDecoder, ImageDecoder};
use photoview_core::io::folder::FolderListing;

#[derive(Args)]
pub struct InfoArgs {
    /// Image file (PNG or JPEG by default)
    pub file: PathBuf,

    /// List every image of the folder
    #[arg(short, long)]
    pub list: bool,
}

pub fn run(args: &InfoArgs, config: &ViewerConfig) -> Result<()> {
    let listing = FolderListing::open(&args.file, &config.browse)
        .with_context(|| format!("Failed to browse {}", args.file.display()))?;
    let index = listing.opened_index();
    let mut decoder = FsDecoder::new(config.render.resample);
    let (width, height) = decoder.dimensions(&args.file)?;
    let bytes = std::fs::metadata(&args.file)?.len();

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", width, height);
    println!("Position:    {} of {}", index + 1, listing.len());
    println!("File size:   {:.1} KB", bytes as f64 / 1024.0);
    println!("Extensions:  {}", config.browse.dialog_extensions().join(", "));

    if args.list {
        println!();
        for (i, path) in listing.paths().iter().enumerate() {
            let marker = if i == index { ">" } else { " " };
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            match decoder.dimensions(path) {
                Ok((w, h)) => println!("{marker} {:>4}  {name}  ({w}x{h})", i + 1),
                Err(e) => println!("{marker} {:>4}  {name}  (unreadable: {e})", i + 1),
            }
        }
    }

    Ok(())
}

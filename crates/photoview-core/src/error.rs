use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("{} has no parent directory", .0.display())]
    NoParentDirectory(PathBuf),

    #[error("{} is not an eligible image in its folder", path.display())]
    ImageNotInFolder { path: PathBuf },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

pub type Result<T> = std::result::Result<T, ViewerError>;

use std::path::PathBuf;

use photoview_core::config::ViewerConfig;

/// Results sent from file dialog threads back to the UI thread.
pub enum DialogResult {
    /// An image was picked in the Open dialog.
    Open { path: PathBuf },

    /// A destination was picked for the current view.
    SaveView { path: PathBuf },

    /// A config file was read and parsed.
    ConfigImported { path: PathBuf, config: ViewerConfig },

    /// The current config was written.
    ConfigExported { path: PathBuf },

    /// A dialog action failed after the user picked a file.
    Error { message: String },
}

/// Lowest zoom factor; 1 shows the whole image fitted to the surface.
pub const DEFAULT_MIN_ZOOM: f64 = 1.0;

/// Highest zoom factor accepted by `Viewer::set_zoom`.
pub const DEFAULT_MAX_ZOOM: f64 = 10.0;

/// Zoom increment for one wheel notch or key press.
pub const DEFAULT_ZOOM_STEP: f64 = 0.5;

/// File extensions (without the dot) eligible for browsing.
pub const DEFAULT_EXTENSIONS: &[&str] = &["png", "jpg"];

/// Pan deltas with a smaller magnitude are ignored. 0 disables the filter.
pub const DEFAULT_PAN_THRESHOLD: f64 = 0.0;

/// Quality used when encoding a rendered frame as JPEG.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Delay before an owed recompute runs after a burst of resize notifications.
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 50;

/// Number of distinct rotations (0°, 90°, 180°, 270°).
pub const ROTATION_STEPS: usize = 4;

/// Tolerance when comparing zoom factors against 1.
pub const ZOOM_EPSILON: f64 = 1e-9;

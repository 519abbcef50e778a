pub mod command;
mod machine;
pub mod redraw;
pub mod state;
pub mod surface;

pub use command::Command;
pub use machine::{RenderOutcome, Viewer, ZoomOutcome};
pub use redraw::RedrawGate;
pub use state::ViewportState;
pub use surface::{OffscreenSurface, RenderSurface};

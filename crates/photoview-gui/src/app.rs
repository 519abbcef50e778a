use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use photoview_core::config::ViewerConfig;
use photoview_core::error::Result as ViewerResult;
use photoview_core::geometry::Size;
use photoview_core::io::decode::FsDecoder;
use photoview_core::io::export::save_frame;
use photoview_core::viewer::{RenderOutcome, RenderSurface, Viewer, ZoomOutcome};

use crate::messages::DialogResult;
use crate::panels;
use crate::states::UiState;
use crate::surface::EguiSurface;

pub type GuiViewer = Viewer<EguiSurface, FsDecoder>;

pub struct PhotoViewApp {
    pub viewer: GuiViewer,
    pub dialog_tx: mpsc::Sender<DialogResult>,
    pub dialog_rx: mpsc::Receiver<DialogResult>,
    pub ui_state: UiState,
    pub show_about: bool,
}

impl PhotoViewApp {
    pub fn new(
        ctx: &egui::Context,
        config: ViewerConfig,
        initial: Option<PathBuf>,
    ) -> ViewerResult<Self> {
        let (dialog_tx, dialog_rx) = mpsc::channel();
        let viewer = build_viewer(ctx, config)?;

        let mut app = Self {
            viewer,
            dialog_tx,
            dialog_rx,
            ui_state: UiState::default(),
            show_about: false,
        };
        app.ui_state.zoom_slider = app.viewer.state().zoom;
        if let Some(path) = initial {
            app.open(&path);
        }
        Ok(app)
    }

    /// Drain all pending results from dialog threads.
    fn poll_dialogs(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.dialog_rx.try_recv() {
            match result {
                DialogResult::Open { path } => self.open(&path),
                DialogResult::SaveView { path } => self.save_view(&path),
                DialogResult::ConfigImported { path, config } => {
                    self.replace_config(ctx, config);
                    self.ui_state
                        .add_log(format!("Config imported: {}", path.display()));
                }
                DialogResult::ConfigExported { path } => {
                    self.ui_state
                        .add_log(format!("Config exported: {}", path.display()));
                }
                DialogResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
            }
        }
    }

    pub fn open(&mut self, path: &Path) {
        let result = self.viewer.open(path);
        let opened = result.is_ok();
        self.report(result.map(Some));
        if let (true, Some((index, count))) = (opened, self.viewer.position()) {
            self.ui_state.add_log(format!(
                "Opened: {} ({} of {})",
                path.display(),
                index + 1,
                count
            ));
        }
    }

    pub fn navigate(&mut self, offset: isize) {
        let result = self.viewer.navigate_by(offset);
        self.report(result);
    }

    pub fn rotate(&mut self, steps: isize) {
        let result = self.viewer.rotate(steps);
        self.report(result);
    }

    pub fn set_zoom(&mut self, value: f64) {
        let result = self.viewer.set_zoom(value);
        self.report_zoom(result);
    }

    pub fn zoom_by(&mut self, delta: f64) {
        let result = self.viewer.zoom_by(delta);
        self.report_zoom(result);
    }

    /// Pan by a drag measured in surface pixels. Dragging moves the image with the pointer.
    pub fn drag(&mut self, surface_delta: photoview_core::geometry::Vector) {
        let Some(delta) = self.viewer.surface_to_pan(surface_delta) else {
            return;
        };
        let result = self.viewer.pan(-delta);
        self.report(result);
    }

    /// Back to zoom 1 and no rotation, keeping the current image.
    pub fn reset_view(&mut self) {
        self.set_zoom(1.0);
        let steps = self.viewer.state().rotation.steps();
        if steps != 0 {
            self.rotate(-(steps as isize));
        }
    }

    /// Record a new surface size; schedules one deferred recompute per burst.
    pub fn surface_resized(&mut self, ctx: &egui::Context, size: Size) {
        if self.viewer.surface().surface_size() == size {
            return;
        }
        self.viewer.surface_mut().set_size(size);
        if self.viewer.notify_surface_resized() {
            let debounce = Duration::from_millis(self.viewer.config().render.resize_debounce_ms);
            self.ui_state.redraw_deadline = Some(Instant::now() + debounce);
            ctx.request_repaint_after(debounce);
        }
    }

    /// Run the recompute owed by resizes once the debounce has elapsed.
    fn flush_redraw(&mut self, ctx: &egui::Context) {
        if !self.viewer.redraw_owed() {
            self.ui_state.redraw_deadline = None;
            return;
        }
        let now = Instant::now();
        if self.ui_state.redraw_due(now) {
            self.ui_state.redraw_deadline = None;
            let result = self.viewer.recompute_and_render().map(Some);
            self.report(result);
        } else if let Some(deadline) = self.ui_state.redraw_deadline {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }

    pub fn save_view(&mut self, path: &Path) {
        let Some(frame) = self.viewer.surface().frame() else {
            self.ui_state.add_log("Nothing to save".into());
            return;
        };
        match save_frame(frame, path, self.viewer.config().render.jpeg_quality) {
            Ok(()) => self.ui_state.add_log(format!("Saved: {}", path.display())),
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    /// Swap in a new config, reopening the current image with it.
    pub fn replace_config(&mut self, ctx: &egui::Context, config: ViewerConfig) {
        let current = self.viewer.current_path().map(Path::to_path_buf);
        let size = self.viewer.surface().surface_size();
        match build_viewer(ctx, config) {
            Ok(mut viewer) => {
                viewer.surface_mut().set_size(size);
                self.viewer = viewer;
                if let Some(path) = current {
                    self.open(&path);
                }
            }
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    fn report(&mut self, result: ViewerResult<Option<RenderOutcome>>) {
        match result {
            Ok(Some(RenderOutcome::NotRenderable)) => {
                tracing::debug!("View not renderable at the current surface size");
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(error = %e, "Viewer operation failed");
                self.ui_state.add_log(format!("ERROR: {e}"));
            }
        }
        self.ui_state.zoom_slider = self.viewer.state().zoom;
    }

    fn report_zoom(&mut self, result: ViewerResult<ZoomOutcome>) {
        let result = result.map(|outcome| match outcome {
            ZoomOutcome::Applied(outcome) => Some(outcome),
            ZoomOutcome::Rejected => None,
        });
        self.report(result);
    }
}

fn build_viewer(ctx: &egui::Context, config: ViewerConfig) -> ViewerResult<GuiViewer> {
    let decoder = FsDecoder::new(config.render.resample);
    Viewer::new(config, EguiSurface::new(ctx), decoder)
}

impl eframe::App for PhotoViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_dialogs(ctx);

        panels::shortcuts::handle(ctx, self);
        panels::menu_bar::show(ctx, self);
        panels::toolbar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);

        self.flush_redraw(ctx);

        if self.show_about {
            egui::Window::new("About PhotoView")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("PhotoView");
                        ui.label("Single-image viewer");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}

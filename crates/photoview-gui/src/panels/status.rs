use crate::app::PhotoViewApp;

pub fn show(ctx: &egui::Context, app: &mut PhotoViewApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.separator();

        // Status line
        ui.horizontal(|ui| {
            let viewer = &app.viewer;
            let state = viewer.state();

            match viewer.current_path() {
                Some(path) => {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    ui.label(name);
                }
                None => {
                    ui.label("No image");
                }
            }
            if let Some((index, count)) = viewer.position() {
                ui.separator();
                ui.label(format!("{} / {}", index + 1, count));
            }
            if let Some(size) = viewer.image_size() {
                ui.separator();
                ui.label(format!("{size}"));
            }
            ui.separator();
            ui.label(format!("Zoom: {:.0}%", state.zoom * 100.0));
            ui.separator();
            ui.label(format!("Rotation: {}", state.rotation));
            if let Some(request) = viewer.last_request() {
                ui.separator();
                ui.label(format!("Crop: {}", request.crop));
            }
        });

        ui.add_space(2.0);
    });
}

use std::path::Path;

use photoview_core::config::ViewerConfig;

use crate::app::PhotoViewApp;
use crate::messages::DialogResult;

pub fn show(ctx: &egui::Context, app: &mut PhotoViewApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui.add(egui::Button::new("Open...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    open_file(app);
                }

                let save_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
                let can_save = app.viewer.surface().frame().is_some();
                if ui
                    .add_enabled(
                        can_save,
                        egui::Button::new("Save View As...").shortcut_text(ctx.format_shortcut(&save_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    save_view(app);
                }

                ui.separator();

                if ui.button("Import Config...").clicked() {
                    ui.close();
                    import_config(app);
                }

                if ui.button("Export Config...").clicked() {
                    ui.close();
                    export_config(app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Reset View").clicked() {
                    ui.close();
                    app.reset_view();
                }
                if ui.button("Reset Config").clicked() {
                    ui.close();
                    app.replace_config(ctx, ViewerConfig::default());
                    app.ui_state.add_log("Config reset to defaults".into());
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) {
            open_file(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S))) {
            save_view(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn open_file(app: &mut PhotoViewApp) {
    let dialog_tx = app.dialog_tx.clone();
    let extensions = app.viewer.config().browse.dialog_extensions();
    let start_dir = app
        .viewer
        .current_path()
        .and_then(|p| p.parent())
        .map(|p| p.to_path_buf());
    std::thread::spawn(move || {
        let mut dialog = rfd::FileDialog::new()
            .add_filter("Images", extensions.as_slice())
            .add_filter("All files", &["*"]);
        if let Some(dir) = start_dir {
            dialog = dialog.set_directory(dir);
        }
        if let Some(path) = dialog.pick_file() {
            let _ = dialog_tx.send(DialogResult::Open { path });
        }
    });
}

fn save_view(app: &mut PhotoViewApp) {
    if app.viewer.surface().frame().is_none() {
        return;
    }
    let dialog_tx = app.dialog_tx.clone();
    let file_name = app
        .viewer
        .current_path()
        .and_then(|p| p.file_stem())
        .map(|stem| format!("{}_view.png", stem.to_string_lossy()))
        .unwrap_or_else(|| "view.png".to_string());
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .add_filter("JPEG", &["jpg", "jpeg"])
            .set_file_name(file_name)
            .save_file()
        {
            let _ = dialog_tx.send(DialogResult::SaveView { path });
        }
    });
}

fn import_config(app: &mut PhotoViewApp) {
    let dialog_tx = app.dialog_tx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new().add_filter("TOML", &["toml"]).pick_file() else {
            return;
        };
        let result = read_config(&path);
        let message = match result {
            Ok(config) => DialogResult::ConfigImported { path, config },
            Err(message) => DialogResult::Error { message },
        };
        let _ = dialog_tx.send(message);
    });
}

fn read_config(path: &Path) -> Result<ViewerConfig, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let config: ViewerConfig =
        toml::from_str(&content).map_err(|e| format!("Invalid config {}: {e}", path.display()))?;
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

fn export_config(app: &mut PhotoViewApp) {
    let dialog_tx = app.dialog_tx.clone();
    let config = app.viewer.config().clone();

    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("photoview.toml")
            .save_file()
        else {
            return;
        };
        let result = toml::to_string_pretty(&config)
            .map_err(|e| e.to_string())
            .and_then(|content| std::fs::write(&path, content).map_err(|e| e.to_string()));
        let message = match result {
            Ok(()) => DialogResult::ConfigExported { path },
            Err(e) => DialogResult::Error {
                message: format!("Failed to export config: {e}"),
            },
        };
        let _ = dialog_tx.send(message);
    });
}

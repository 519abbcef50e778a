use photoview_core::geometry::{Size, Vector};

use crate::app::PhotoViewApp;

pub fn show(ctx: &egui::Context, app: &mut PhotoViewApp) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(egui::Color32::from_gray(30)))
        .show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();
            let pixels_per_point = ctx.pixels_per_point();

            let surface = Size::new(
                (rect.width() * pixels_per_point).floor() as f64,
                (rect.height() * pixels_per_point).floor() as f64,
            );
            app.surface_resized(ctx, surface);

            let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

            if !app.viewer.state().has_image() {
                show_placeholder(ui, rect);
                return;
            }

            handle_zoom(ui, &response, app);
            handle_pan(&response, app, pixels_per_point);

            if response.double_clicked() {
                app.set_zoom(1.0);
            }

            if let Some(texture) = app.viewer.surface().texture() {
                let size = texture.size_vec2() / pixels_per_point;
                let img_rect = egui::Rect::from_center_size(rect.center(), size);
                ui.painter().image(
                    texture.id(),
                    img_rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            }

            draw_viewing_label(ui, rect, app);
        });
}

fn handle_zoom(ui: &egui::Ui, response: &egui::Response, app: &mut PhotoViewApp) {
    let scroll = ui.input(|i| i.raw_scroll_delta.y);
    if scroll == 0.0 || !response.hovered() {
        return;
    }
    let step = app.viewer.config().zoom.step;
    app.zoom_by(if scroll > 0.0 { step } else { -step });
}

fn handle_pan(response: &egui::Response, app: &mut PhotoViewApp, pixels_per_point: f32) {
    if !response.dragged_by(egui::PointerButton::Primary) {
        return;
    }
    let delta = response.drag_delta() * pixels_per_point;
    if delta == egui::Vec2::ZERO {
        return;
    }
    app.drag(Vector::new(delta.x as f64, delta.y as f64));
}

fn draw_viewing_label(ui: &egui::Ui, rect: egui::Rect, app: &PhotoViewApp) {
    let Some(path) = app.viewer.current_path() else {
        return;
    };
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    ui.painter().text(
        rect.left_top() + egui::vec2(8.0, 8.0),
        egui::Align2::LEFT_TOP,
        name,
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(200),
    );
}

fn show_placeholder(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "Open an image to begin",
        egui::FontId::proportional(18.0),
        egui::Color32::from_gray(100),
    );
}

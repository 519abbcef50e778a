use crate::app::PhotoViewApp;

/// Viewer keys: arrows navigate, brackets rotate, +/- zoom, 0 resets.
pub fn handle(ctx: &egui::Context, app: &mut PhotoViewApp) {
    if ctx.wants_keyboard_input() {
        return;
    }

    let (prev, next, left, right, zoom_in, zoom_out, reset) = ctx.input(|i| {
        (
            i.key_pressed(egui::Key::ArrowLeft),
            i.key_pressed(egui::Key::ArrowRight),
            i.key_pressed(egui::Key::OpenBracket),
            i.key_pressed(egui::Key::CloseBracket),
            i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
            i.key_pressed(egui::Key::Minus),
            i.key_pressed(egui::Key::Num0),
        )
    });

    if prev {
        app.navigate(-1);
    }
    if next {
        app.navigate(1);
    }
    if left {
        app.rotate(-1);
    }
    if right {
        app.rotate(1);
    }

    let step = app.viewer.config().zoom.step;
    if zoom_in {
        app.zoom_by(step);
    }
    if zoom_out {
        app.zoom_by(-step);
    }
    if reset {
        app.reset_view();
    }
}

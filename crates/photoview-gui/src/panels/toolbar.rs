use crate::app::PhotoViewApp;

pub fn show(ctx: &egui::Context, app: &mut PhotoViewApp) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.add_space(2.0);
        ui.horizontal(|ui| {
            let has_image = app.viewer.state().has_image();
            let browsable = app.viewer.listing().is_some_and(|l| l.len() > 1);

            if ui
                .add_enabled(browsable, egui::Button::new("\u{25C0} Previous"))
                .on_hover_text("Left arrow")
                .clicked()
            {
                app.navigate(-1);
            }
            if ui
                .add_enabled(browsable, egui::Button::new("Next \u{25B6}"))
                .on_hover_text("Right arrow")
                .clicked()
            {
                app.navigate(1);
            }

            ui.separator();

            if ui
                .add_enabled(has_image, egui::Button::new("\u{27F2} Left"))
                .on_hover_text("[")
                .clicked()
            {
                app.rotate(-1);
            }
            if ui
                .add_enabled(has_image, egui::Button::new("Right \u{27F3}"))
                .on_hover_text("]")
                .clicked()
            {
                app.rotate(1);
            }

            ui.separator();

            let limits = app.viewer.config().zoom.clone();
            ui.label("Zoom");
            let slider = egui::Slider::new(&mut app.ui_state.zoom_slider, limits.min..=limits.max)
                .step_by(limits.step / 5.0)
                .suffix("x")
                .fixed_decimals(2);
            let response = ui.add_enabled(has_image, slider);
            if response.changed() {
                let value = app.ui_state.zoom_slider;
                app.set_zoom(value);
            }

            if ui
                .add_enabled(has_image, egui::Button::new("Reset"))
                .on_hover_text("0")
                .clicked()
            {
                app.reset_view();
            }
        });
        ui.add_space(2.0);
    });
}

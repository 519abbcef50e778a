use std::path::Path;

use console::Style;
use photoview_core::viewer::RenderSurface;

use crate::commands::CliViewer;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    changed: Style,
    unchanged: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            changed: Style::new().green(),
            unchanged: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_view_summary(viewer: &CliViewer) {
    let s = Styles::new();
    let state = viewer.state();

    println!();
    println!("  {}", s.title.apply_to("PhotoView"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(9)));
    println!();

    let Some(path) = viewer.current_path() else {
        println!("  {}", s.unchanged.apply_to("no image selected"));
        println!();
        return;
    };

    println!(
        "  {:<12}{}",
        s.label.apply_to("File"),
        s.path.apply_to(path.display())
    );
    if let Some((index, count)) = viewer.position() {
        println!(
            "  {:<12}{}",
            s.label.apply_to("Position"),
            s.value.apply_to(format!("{} of {}", index + 1, count))
        );
    }
    if let Some(size) = viewer.image_size() {
        println!(
            "  {:<12}{}",
            s.label.apply_to("Image"),
            s.value.apply_to(size)
        );
    }
    println!(
        "  {:<12}{}",
        s.label.apply_to("Surface"),
        s.value.apply_to(viewer.surface().surface_size())
    );
    println!(
        "  {:<12}{}",
        s.label.apply_to("Zoom"),
        s.value.apply_to(format!("{:.2}x", state.zoom))
    );
    println!(
        "  {:<12}{}",
        s.label.apply_to("Rotation"),
        s.value.apply_to(state.rotation)
    );
    println!(
        "  {:<12}{}",
        s.label.apply_to("Pan"),
        s.value.apply_to(format!("{:.1}, {:.1}", state.pan.x, state.pan.y))
    );
    match viewer.last_request() {
        Some(request) => {
            let (w, h) = request.presented_size();
            println!(
                "  {:<12}{}",
                s.label.apply_to("Crop"),
                s.value.apply_to(request.crop)
            );
            println!(
                "  {:<12}{}",
                s.label.apply_to("Output"),
                s.value.apply_to(format!("{w}x{h}"))
            );
        }
        None => println!(
            "  {:<12}{}",
            s.label.apply_to("Output"),
            s.unchanged.apply_to("not rendered")
        ),
    }
    println!();
}

/// One replay line: the command, whether it changed the view, and the resulting crop.
pub fn print_step(number: usize, line: &str, changed: bool, viewer: &CliViewer) {
    let s = Styles::new();
    let status = if changed {
        s.changed.apply_to("changed")
    } else {
        s.unchanged.apply_to("no-op")
    };
    let crop = viewer
        .last_request()
        .map(|r| format!("{} @ {}", r.crop, r.rotation))
        .unwrap_or_else(|| "-".to_string());

    println!(
        "  {:>4}  {:<24}{:<10}{}",
        s.label.apply_to(number),
        s.value.apply_to(line),
        status,
        s.label.apply_to(crop)
    );
}

pub fn print_saved(number: usize, path: &Path) {
    let s = Styles::new();
    println!(
        "  {:>4}  {:<24}{}",
        s.label.apply_to(number),
        s.changed.apply_to("saved"),
        s.path.apply_to(path.display())
    );
}

mod common;

use std::path::PathBuf;

use common::{fake_listing, fake_viewer};
use photoview_core::error::ViewerError;
use photoview_core::geometry::{Rotation, Size, Vector};
use photoview_core::viewer::Command;

fn parse(line: &str) -> Command {
    line.parse().unwrap()
}

#[test]
fn test_parse_navigation() {
    assert_eq!(parse("next"), Command::Navigate(1));
    assert_eq!(parse("prev"), Command::Navigate(-1));
    assert_eq!(parse("Previous"), Command::Navigate(-1));
    assert_eq!(parse("nav -3"), Command::Navigate(-3));
}

#[test]
fn test_parse_rotation() {
    assert_eq!(parse("left"), Command::Rotate(-1));
    assert_eq!(parse("right"), Command::Rotate(1));
    assert_eq!(parse("rotate 2"), Command::Rotate(2));
}

#[test]
fn test_parse_zoom_and_pan() {
    assert_eq!(parse("zoom 2.5"), Command::SetZoom(2.5));
    assert_eq!(parse("zoom+ 0.5"), Command::ZoomBy(0.5));
    assert_eq!(parse("zoom- 0.5"), Command::ZoomBy(-0.5));
    assert_eq!(parse("  pan 40 -12  "), Command::Pan(Vector::new(40.0, -12.0)));
}

#[test]
fn test_parse_open_keeps_spaces() {
    assert_eq!(
        parse("open my photos/a b.jpg"),
        Command::Open(PathBuf::from("my photos/a b.jpg"))
    );
}

#[test]
fn test_parse_rejects_malformed_lines() {
    for line in ["", "open", "jump 3", "nav", "nav x", "zoom", "pan 1", "pan 1 2 3", "rotate 1.5"] {
        let err = line.parse::<Command>().unwrap_err();
        assert!(matches!(err, ViewerError::InvalidCommand(_)), "{line:?}");
    }
}

#[test]
fn test_display_parses_back() {
    for command in [
        Command::Navigate(-2),
        Command::Rotate(3),
        Command::SetZoom(4.25),
        Command::ZoomBy(0.5),
        Command::Pan(Vector::new(1.5, -2.0)),
    ] {
        assert_eq!(parse(&command.to_string()), command);
    }
}

#[test]
fn test_apply_reports_changes() {
    let images = &[("a.png", 2000, 1000), ("b.png", 800, 600)];
    let mut viewer = fake_viewer(images, Size::new(200.0, 200.0));
    viewer.select(fake_listing(images, 0)).unwrap();

    assert!(viewer.apply(&Command::Rotate(1)).unwrap());
    assert_eq!(viewer.state().rotation, Rotation::Rotate90);

    assert!(!viewer.apply(&Command::SetZoom(20.0)).unwrap());
    assert!(viewer.apply(&Command::SetZoom(2.0)).unwrap());
    assert!(viewer.apply(&Command::Pan(Vector::new(5.0, 0.0))).unwrap());

    assert!(viewer.apply(&Command::Navigate(1)).unwrap());
    assert_eq!(viewer.state().current_index, Some(1));
    assert!(!viewer.apply(&Command::Pan(Vector::new(5.0, 0.0))).unwrap());
    assert!(!viewer.apply(&Command::ZoomBy(-1.0)).unwrap());
}

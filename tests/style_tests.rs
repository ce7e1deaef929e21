// Host-side tests for the CSS value helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod style {
    include!("../src/style.rs");
}

use style::*;
use zwarp_core::panel_view;

#[test]
fn panel_transform_keeps_centering() {
    assert_eq!(
        panel_transform(-150.0),
        "translate(-50%, -50%) translateZ(-150px)"
    );
    assert_eq!(panel_transform(0.0), "translate(-50%, -50%) translateZ(0px)");
}

#[test]
fn panel_view_maps_to_css_values() {
    let near = panel_view(100.0);
    assert_eq!(pointer_events(near.interactive), "auto");
    assert_eq!(blur_filter(near.blur), "blur(0px)");
    assert_eq!(display(near.visible), "flex");

    let behind = panel_view(-600.0);
    assert_eq!(pointer_events(behind.interactive), "none");
    assert_eq!(blur_filter(behind.blur), "blur(6px)");

    let gone = panel_view(-900.0);
    assert_eq!(display(gone.visible), "none");
}

#[test]
fn progress_and_tilt_formatting() {
    assert_eq!(percent_width(50.0), "50%");
    assert_eq!(percent_width(100.0), "100%");
    assert_eq!(world_tilt(2.5, -1.0), "rotateY(2.5deg) rotateX(-1deg)");
}

#[test]
fn rgba_formatting() {
    assert_eq!(rgba(5, 5, 5, 0.5), "rgba(5, 5, 5, 0.5)");
    assert_eq!(rgba(188, 19, 254, 1.0), "rgba(188, 19, 254, 1)");
}

#[test]
fn volume_icon_follows_slider() {
    assert_eq!(volume_icon_class(0.0), ICON_MUTED);
    assert_eq!(volume_icon_class(0.2), ICON_LOW);
    assert_eq!(volume_icon_class(0.5), ICON_HIGH);
    assert_eq!(volume_icon_class(1.0), ICON_HIGH);
}

#[test]
fn mute_toggle_icon() {
    assert_eq!(mute_icon_class(true), ICON_MUTED);
    assert_eq!(mute_icon_class(false), ICON_HIGH);
}

#[test]
fn number_attrs() {
    assert_eq!(parse_number_attr("4000"), Some(4_000.0));
    assert_eq!(parse_number_attr(" 12.5 "), Some(12.5));
    assert_eq!(parse_number_attr(""), None);
    assert_eq!(parse_number_attr("deep"), None);
    assert_eq!(parse_number_attr("NaN"), None);
    assert_eq!(parse_number_attr("inf"), None);
}

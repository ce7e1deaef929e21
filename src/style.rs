// CSS values written by the frame loop and the widgets.
//
// Plain string formatting only, so host tests can include this file.

#[inline]
pub fn panel_transform(dist: f64) -> String {
    format!("translate(-50%, -50%) translateZ({}px)", dist)
}

#[inline]
pub fn blur_filter(radius: f64) -> String {
    format!("blur({}px)", radius)
}

#[inline]
pub fn pointer_events(interactive: bool) -> &'static str {
    if interactive {
        "auto"
    } else {
        "none"
    }
}

#[inline]
pub fn display(visible: bool) -> &'static str {
    if visible {
        "flex"
    } else {
        "none"
    }
}

#[inline]
pub fn percent_width(percent: f64) -> String {
    format!("{}%", percent)
}

#[inline]
pub fn world_tilt(rotate_y_deg: f64, rotate_x_deg: f64) -> String {
    format!("rotateY({}deg) rotateX({}deg)", rotate_y_deg, rotate_x_deg)
}

#[inline]
pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> String {
    format!("rgba({}, {}, {}, {})", r, g, b, a)
}

pub const ICON_MUTED: &str = "fa-solid fa-volume-xmark";
pub const ICON_LOW: &str = "fa-solid fa-volume-low";
pub const ICON_HIGH: &str = "fa-solid fa-volume-high";

/// Icon class for a slider volume in 0..=1.
pub fn volume_icon_class(volume: f64) -> &'static str {
    if volume <= 0.0 {
        ICON_MUTED
    } else if volume < 0.5 {
        ICON_LOW
    } else {
        ICON_HIGH
    }
}

/// Icon class after the mute button toggled to `muted`.
pub fn mute_icon_class(muted: bool) -> &'static str {
    if muted {
        ICON_MUTED
    } else {
        ICON_HIGH
    }
}

/// Parse a numeric data attribute; blank or malformed values are `None`.
pub fn parse_number_attr(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

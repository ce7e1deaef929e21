use crate::constants::PARALLAX_DIVISOR;
use glam::DVec2;

/// Scene tilt in degrees for a pointer position: `x` is the rotation about
/// the vertical axis, `y` the rotation about the horizontal axis.
///
/// The pointer at the viewport centre gives no tilt.
pub fn tilt_degrees(viewport: DVec2, pointer: DVec2) -> DVec2 {
    let offset = (viewport * 0.5 - pointer) / PARALLAX_DIVISOR;
    DVec2::new(offset.x, -offset.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centred_pointer_is_level() {
        let t = tilt_degrees(DVec2::new(1_000.0, 800.0), DVec2::new(500.0, 400.0));
        assert_eq!(t, DVec2::ZERO);
    }

    #[test]
    fn top_left_pointer_tilts_toward_viewer() {
        let t = tilt_degrees(DVec2::new(1_000.0, 800.0), DVec2::new(0.0, 0.0));
        assert!((t.x - 5.0).abs() < 1e-12);
        assert!((t.y + 4.0).abs() < 1e-12);
    }
}

/// Read-only view of the current depth for the HUD.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Progress {
    /// Whole depth units, rounded down.
    pub readout: i64,
    /// Progress bar width in percent, 0..=100.
    pub percent: f64,
}

impl Progress {
    pub fn of(current: f64, max_depth: f64) -> Self {
        Self {
            readout: current.floor() as i64,
            percent: (current / max_depth).min(1.0) * 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_way_is_fifty_percent() {
        let p = Progress::of(6_000.0, 12_000.0);
        assert_eq!(p.readout, 6_000);
        assert!((p.percent - 50.0).abs() < 1e-12);
    }

    #[test]
    fn overscroll_clamps_to_full() {
        assert_eq!(Progress::of(12_000.0, 12_000.0).percent, 100.0);
        assert_eq!(Progress::of(12_400.0, 12_000.0).percent, 100.0);
    }

    #[test]
    fn readout_floors() {
        assert_eq!(Progress::of(199.99, 12_000.0).readout, 199);
        assert_eq!(Progress::of(0.0, 12_000.0).readout, 0);
    }
}

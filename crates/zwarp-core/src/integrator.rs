/// Current and target position on the depth axis.
///
/// `target` is moved by input mapping; `current` only moves through
/// [`PositionIntegrator::advance`], which closes a fixed fraction of the gap
/// each frame. The easing never overshoots and never lands exactly on the
/// target.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionIntegrator {
    current: f64,
    target: f64,
    limit: f64,
    ease: f64,
}

impl PositionIntegrator {
    /// Both positions start at 0. `limit` is the upper bound for `target`.
    pub fn new(limit: f64, ease: f64) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            limit: limit.max(0.0),
            ease,
        }
    }

    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[inline]
    pub fn limit(&self) -> f64 {
        self.limit
    }

    /// Signed distance still to travel.
    #[inline]
    pub fn gap(&self) -> f64 {
        self.target - self.current
    }

    /// Add a signed delta to the target, clamped to `[0, limit]`.
    pub fn shift_target(&mut self, delta: f64) {
        self.target = (self.target + delta).clamp(0.0, self.limit);
    }

    /// Jump the target to an absolute depth, clamped to `[0, limit]`.
    pub fn jump_to(&mut self, depth: f64) {
        self.target = depth.clamp(0.0, self.limit);
    }

    /// One frame of exponential easing toward the target.
    pub fn advance(&mut self) -> f64 {
        self.current += (self.target - self.current) * self.ease;
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_rest() {
        let p = PositionIntegrator::new(12_500.0, 0.08);
        assert_eq!(p.current(), 0.0);
        assert_eq!(p.target(), 0.0);
        assert_eq!(p.gap(), 0.0);
    }

    #[test]
    fn shift_target_clamps_both_ends() {
        let mut p = PositionIntegrator::new(12_500.0, 0.08);
        p.shift_target(-50.0);
        assert_eq!(p.target(), 0.0);
        p.shift_target(20_000.0);
        assert_eq!(p.target(), 12_500.0);
        p.shift_target(-400.0);
        assert_eq!(p.target(), 12_100.0);
    }

    #[test]
    fn jump_to_is_clamped() {
        let mut p = PositionIntegrator::new(9_000.0, 0.08);
        p.jump_to(4_000.0);
        assert_eq!(p.target(), 4_000.0);
        p.jump_to(10_000.0);
        assert_eq!(p.target(), 9_000.0);
    }

    #[test]
    fn advance_closes_eight_percent_of_gap() {
        let mut p = PositionIntegrator::new(12_500.0, 0.08);
        p.shift_target(2_500.0);
        assert!((p.advance() - 200.0).abs() < 1e-9);
        let before = p.gap();
        p.advance();
        assert!((p.gap() - before * 0.92).abs() < 1e-9);
    }

    #[test]
    fn advance_never_overshoots_going_back() {
        let mut p = PositionIntegrator::new(12_500.0, 0.08);
        p.shift_target(3_000.0);
        for _ in 0..200 {
            p.advance();
        }
        p.shift_target(-3_000.0);
        for _ in 0..50 {
            p.advance();
            assert!(p.current() >= 0.0);
        }
    }
}

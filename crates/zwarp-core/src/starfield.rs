//! Audio-reactive warp starfield simulation.
//!
//! Stars live in a box centred on the viewport and fly toward the camera.
//! Speed grows with the depth engine's warp factor and the bass level; the
//! palette shifts on heavy bass. Drawing is left to the host.

use crate::constants::*;
use glam::DVec3;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StarColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl StarColor {
    pub const WHITE: StarColor = StarColor { r: 255, g: 255, b: 255 };
    pub const NEON_GREEN: StarColor = StarColor { r: 0, g: 255, b: 157 };
    pub const NEON_PURPLE: StarColor = StarColor { r: 188, g: 19, b: 254 };

    pub fn for_bass(bass: u8) -> Self {
        if bass > BASS_PURPLE_LEVEL {
            Self::NEON_PURPLE
        } else if bass > BASS_GREEN_LEVEL {
            Self::NEON_GREEN
        } else {
            Self::WHITE
        }
    }
}

/// A projected star, in pixels relative to the viewport centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarSprite {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub alpha: f64,
    /// End point of a motion streak; `None` draws a dot.
    pub streak_to: Option<(f64, f64)>,
}

pub struct Starfield {
    stars: Vec<DVec3>,
    width: f64,
    height: f64,
    rng: StdRng,
}

impl Starfield {
    pub fn new(width: f64, height: f64, seed: u64) -> Self {
        let mut field = Self {
            stars: Vec::with_capacity(STAR_COUNT),
            width,
            height,
            rng: StdRng::seed_from_u64(seed),
        };
        field.reseed();
        field
    }

    /// Resize to a new viewport and scatter a fresh set of stars.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.reseed();
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn stars(&self) -> &[DVec3] {
        &self.stars
    }

    fn reseed(&mut self) {
        self.stars.clear();
        for _ in 0..STAR_COUNT {
            let z = self.rng.gen::<f64>() * STAR_FAR_Z;
            let star = self.spawn_at(z);
            self.stars.push(star);
        }
    }

    fn spawn_at(&mut self, z: f64) -> DVec3 {
        DVec3::new(
            self.rng.gen::<f64>() * self.width - self.width / 2.0,
            self.rng.gen::<f64>() * self.height - self.height / 2.0,
            z,
        )
    }

    /// Per-frame travel for the given warp factor and bass level.
    pub fn speed(warp: f64, bass: u8) -> f64 {
        STAR_BASE_SPEED + warp.abs() + bass as f64 * STAR_BASS_SPEED
    }

    /// Move every star toward the camera; stars that pass it respawn far away.
    pub fn step(&mut self, warp: f64, bass: u8) {
        let speed = Self::speed(warp, bass);
        for i in 0..self.stars.len() {
            self.stars[i].z -= speed;
            if self.stars[i].z <= 0.0 {
                let fresh = self.spawn_at(STAR_FAR_Z);
                self.stars[i] = fresh;
            }
        }
    }

    pub fn sprites(&self, warp: f64) -> impl Iterator<Item = StarSprite> + '_ {
        let streak = warp.abs() > STAR_STREAK_WARP;
        self.stars.iter().map(move |s| project(*s, streak))
    }
}

fn project(star: DVec3, streak: bool) -> StarSprite {
    let k = STAR_FOCAL / star.z.max(1.0);
    let x = star.x * k;
    let y = star.y * k;
    let depth = star.z / STAR_FAR_Z;
    StarSprite {
        x,
        y,
        size: (1.0 - depth) * STAR_MAX_SIZE,
        alpha: 1.0 - depth,
        streak_to: streak.then(|| (x * STAR_STREAK_STRETCH, y * STAR_STREAK_STRETCH)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_full_field_inside_viewport_box() {
        let f = Starfield::new(800.0, 600.0, 7);
        assert_eq!(f.stars().len(), STAR_COUNT);
        for s in f.stars() {
            assert!(s.x >= -400.0 && s.x < 400.0);
            assert!(s.y >= -300.0 && s.y < 300.0);
            assert!(s.z >= 0.0 && s.z < STAR_FAR_Z);
        }
    }

    #[test]
    fn speed_combines_warp_and_bass() {
        assert_eq!(Starfield::speed(0.0, 0), 2.0);
        assert_eq!(Starfield::speed(-10.0, 0), 12.0);
        assert!((Starfield::speed(0.0, 200) - 12.0).abs() < 1e-12);
    }

    #[test]
    fn stars_respawn_at_far_plane() {
        let mut f = Starfield::new(800.0, 600.0, 1);
        // large warp pushes every star past the camera in one step
        f.step(STAR_FAR_Z, 0);
        for s in f.stars() {
            assert_eq!(s.z, STAR_FAR_Z);
        }
    }

    #[test]
    fn resize_rescatters() {
        let mut f = Starfield::new(800.0, 600.0, 3);
        f.resize(100.0, 50.0);
        assert_eq!(f.size(), (100.0, 50.0));
        assert!(f.stars().iter().all(|s| s.x.abs() <= 50.0 && s.y.abs() <= 25.0));
    }

    #[test]
    fn palette_follows_bass() {
        assert_eq!(StarColor::for_bass(0), StarColor::WHITE);
        assert_eq!(StarColor::for_bass(100), StarColor::WHITE);
        assert_eq!(StarColor::for_bass(101), StarColor::NEON_GREEN);
        assert_eq!(StarColor::for_bass(151), StarColor::NEON_PURPLE);
    }

    #[test]
    fn projection_and_streaks() {
        let s = project(DVec3::new(100.0, -50.0, 1_000.0), false);
        assert!((s.x - 20.0).abs() < 1e-12);
        assert!((s.y + 10.0).abs() < 1e-12);
        assert!((s.size - 1.5).abs() < 1e-12);
        assert!((s.alpha - 0.5).abs() < 1e-12);
        assert!(s.streak_to.is_none());

        let f = Starfield::new(800.0, 600.0, 9);
        assert!(f.sprites(2.5).all(|s| s.streak_to.is_some()));
        assert!(f.sprites(2.0).all(|s| s.streak_to.is_none()));
    }
}

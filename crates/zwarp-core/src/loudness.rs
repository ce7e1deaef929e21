use crate::constants::BASS_BINS;

/// Source of the per-frame bass magnitude (0..=255).
///
/// Implementations must not fail; when no audio is available they report 0.
pub trait LoudnessProvider {
    fn sample(&mut self) -> u8;
}

/// Provider used before audio starts, or when it could not be initialised.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silence;

impl LoudnessProvider for Silence {
    fn sample(&mut self) -> u8 {
        0
    }
}

/// Average of the lowest frequency bins of a byte spectrum.
///
/// Always divides by the nominal bin count, so a short spectrum reads quieter.
pub fn bass_level(spectrum: &[u8]) -> u8 {
    let total: u32 = spectrum.iter().take(BASS_BINS).map(|&b| b as u32).sum();
    (total / BASS_BINS as u32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silence_is_zero() {
        assert_eq!(Silence.sample(), 0);
    }

    #[test]
    fn bass_averages_first_ten_bins() {
        let mut spectrum = vec![0u8; 128];
        for b in spectrum.iter_mut().take(10) {
            *b = 200;
        }
        spectrum[10] = 255; // outside the bass band
        assert_eq!(bass_level(&spectrum), 200);
    }

    #[test]
    fn full_scale_stays_in_range() {
        assert_eq!(bass_level(&[255u8; 128]), 255);
        assert_eq!(bass_level(&[]), 0);
    }
}

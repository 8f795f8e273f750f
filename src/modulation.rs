//! Low-frequency oscillators and the session modulator that drives the
//! visualization config from timer progress. The render core never calls
//! into this module; it only consumes whatever config values come out.

use crate::config::VisualizationConfig;

pub fn sine_wave(time: f64, frequency: f64, amplitude: f64, offset: f64) -> f64 {
    offset + amplitude * (time * frequency).sin()
}

pub fn triangle_wave(time: f64, frequency: f64, amplitude: f64, offset: f64) -> f64 {
    let period = 1.0 / frequency;
    let u = (time % period) / period;
    let value = if u < 0.5 { 2.0 * u } else { 2.0 * (1.0 - u) };
    offset + amplitude * value
}

/// Rewrites the tunable config fields as a timed session runs down, one
/// independent LFO per parameter plus a slow progress bias, so the picture
/// keeps evolving without ever visibly repeating.
#[derive(Clone, Copy, Debug)]
pub struct SessionModulator {
    duration_secs: f64,
}

impl SessionModulator {
    pub fn new(duration_secs: f64) -> Self {
        Self {
            duration_secs: duration_secs.max(1.0),
        }
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    /// Apply the LFOs for the given remaining time. Leaves `viz_type` and
    /// `speed` alone; those stay under direct user control.
    pub fn apply(&self, remaining_secs: f64, config: &mut VisualizationConfig) {
        let remaining = remaining_secs.clamp(0.0, self.duration_secs);
        let progress = 1.0 - remaining / self.duration_secs;
        let t = (self.duration_secs - remaining) / 10.0;

        config.rotation = sine_wave(t, 0.05, 0.5, 0.5 + progress * 0.7);
        config.perspective = triangle_wave(t, 0.03, 150.0, 800.0 - progress * 150.0);
        config.line_count = triangle_wave(t, 0.02, 5.0, 15.0 + progress * 3.0).floor() as i32;
        config.line_opacity = sine_wave(t, 0.01, 0.1, 0.8 + progress * 0.1);
        config.pulse_effect = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_sine_wave_at_origin_is_offset() {
        assert!((sine_wave(0.0, 0.05, 0.5, 0.9) - 0.9).abs() < EPS);
    }

    #[test]
    fn test_sine_wave_peaks_at_quarter_period() {
        let freq = 0.25;
        let quarter = std::f64::consts::FRAC_PI_2 / freq;
        assert!((sine_wave(quarter, freq, 2.0, 1.0) - 3.0).abs() < EPS);
    }

    #[test]
    fn test_triangle_wave_shape() {
        let freq = 0.5; // period 2
        assert!((triangle_wave(0.0, freq, 1.0, 0.0)).abs() < EPS);
        assert!((triangle_wave(0.5, freq, 1.0, 0.0) - 0.5).abs() < EPS);
        assert!((triangle_wave(1.0, freq, 1.0, 0.0) - 1.0).abs() < EPS);
        assert!((triangle_wave(1.5, freq, 1.0, 0.0) - 0.5).abs() < EPS);
        assert!((triangle_wave(2.0, freq, 1.0, 0.0)).abs() < EPS);
    }

    #[test]
    fn test_triangle_wave_respects_offset_and_amplitude() {
        let v = triangle_wave(0.5, 0.5, 4.0, 10.0);
        assert!((v - 12.0).abs() < EPS);
    }

    #[test]
    fn test_modulated_config_stays_in_sane_ranges() {
        let modulator = SessionModulator::new(25.0 * 60.0);
        let mut config = VisualizationConfig::default();
        let total = modulator.duration_secs();
        let mut remaining = total;
        while remaining >= 0.0 {
            modulator.apply(remaining, &mut config);
            assert!(config.rotation >= 0.0 && config.rotation <= 2.0);
            assert!(config.perspective >= 500.0 && config.perspective <= 950.0);
            assert!(config.line_count >= 10 && config.line_count <= 23);
            assert!(config.line_opacity >= 0.65 && config.line_opacity <= 1.0);
            assert!(config.pulse_effect);
            remaining -= 17.0;
        }
    }

    #[test]
    fn test_modulator_never_touches_mode_or_speed() {
        let modulator = SessionModulator::new(600.0);
        let mut config = VisualizationConfig::default();
        let viz_type = config.viz_type;
        let speed = config.speed;
        modulator.apply(300.0, &mut config);
        assert_eq!(config.viz_type, viz_type);
        assert!((config.speed - speed).abs() < EPS);
    }

    #[test]
    fn test_remaining_time_is_clamped() {
        let modulator = SessionModulator::new(60.0);
        let mut a = VisualizationConfig::default();
        let mut b = VisualizationConfig::default();
        modulator.apply(-5.0, &mut a);
        modulator.apply(0.0, &mut b);
        assert_eq!(a, b);
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0
//! Progress-mapping helpers for render surfaces.
//!
//! A surface receives a single monotonic progress value per tick and maps
//! it onto its reveal elements; these are the common curves and envelopes
//! for doing so. All functions are pure and operate on raw `[0, 1]`
//! progress values.

use std::f32::consts::PI;

/// Easing and reveal-envelope utilities
pub struct Easing;

impl Easing {
    /// Smoothstep ease-in-out
    pub fn ease_in_out(t: f32) -> f32 {
        t * t * (3.0 - 2.0 * t)
    }

    /// Quadratic ease-in (accelerate)
    pub fn ease_in(t: f32) -> f32 {
        t * t
    }

    /// Quadratic ease-out (decelerate)
    pub fn ease_out(t: f32) -> f32 {
        1.0 - (1.0 - t) * (1.0 - t)
    }

    /// Cubic ease-in (stronger acceleration)
    pub fn ease_in_cubic(t: f32) -> f32 {
        t * t * t
    }

    /// Cubic ease-out (stronger deceleration)
    pub fn ease_out_cubic(t: f32) -> f32 {
        1.0 - (1.0 - t).powi(3)
    }

    /// Elastic ease-out (overshoots, then settles)
    pub fn elastic_out(t: f32) -> f32 {
        if t <= 0.0 || t >= 1.0 {
            return t.clamp(0.0, 1.0);
        }
        let p = 0.3;
        let s = p / 4.0;
        2.0_f32.powf(-10.0 * t) * ((t - s) * (2.0 * PI) / p).sin() + 1.0
    }

    /// Pulsing value in `[-1, 1]` at the given frequency
    pub fn pulse(t: f32, frequency: f32) -> f32 {
        (t * frequency * 2.0 * PI).sin()
    }

    /// Linear interpolation between two values
    pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
        start + (end - start) * t
    }

    /// Fade-in alpha: 0 before `delay`, eased up to 1 over `duration`.
    ///
    /// `delay` and `duration` are fractions of the overall progress axis.
    pub fn fade_in(progress: f32, delay: f32, duration: f32) -> f32 {
        if progress < delay {
            return 0.0;
        }
        if progress > delay + duration {
            return 1.0;
        }
        Self::ease_in_out((progress - delay) / duration)
    }

    /// Staggered start offset for element `index` of `total`, spread
    /// linearly between `start` and `end` on the progress axis.
    pub fn stagger_delay(index: usize, total: usize, start: f32, end: f32) -> f32 {
        if total <= 1 {
            return start;
        }
        start + (end - start) * (index as f32 / (total - 1) as f32)
    }

    /// Normalized progress within the `[phase_start, phase_end]` window:
    /// 0 before the phase, 1 after it, linear within.
    pub fn phase_progress(progress: f32, phase_start: f32, phase_end: f32) -> f32 {
        if progress < phase_start {
            return 0.0;
        }
        if progress > phase_end {
            return 1.0;
        }
        (progress - phase_start) / (phase_end - phase_start)
    }

    /// Typewriter reveal: the visible prefix of `text` at `progress`,
    /// plus whether a blinking cursor should be shown.
    pub fn typewriter(text: &str, progress: f32) -> (&str, bool) {
        let total = text.chars().count();
        let visible = ((total as f32 * progress.clamp(0.0, 1.0)) as usize).min(total);
        let byte_end = text
            .char_indices()
            .nth(visible)
            .map_or(text.len(), |(offset, _)| offset);
        let show_cursor = visible < total && (progress * 10.0) as u32 % 2 == 0;
        (&text[..byte_end], show_cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_ease_endpoints() {
        let curves: [fn(f32) -> f32; 6] = [
            Easing::ease_in_out,
            Easing::ease_in,
            Easing::ease_out,
            Easing::ease_in_cubic,
            Easing::ease_out_cubic,
            Easing::elastic_out,
        ];
        for f in curves {
            assert!(close(f(0.0), 0.0));
            assert!(close(f(1.0), 1.0));
        }
    }

    #[test]
    fn test_ease_in_out_midpoint() {
        assert!(close(Easing::ease_in_out(0.5), 0.5));
    }

    #[test]
    fn test_fade_in_envelope() {
        assert_eq!(Easing::fade_in(0.1, 0.2, 0.3), 0.0);
        assert_eq!(Easing::fade_in(0.9, 0.2, 0.3), 1.0);
        let mid = Easing::fade_in(0.35, 0.2, 0.3);
        assert!(mid > 0.0 && mid < 1.0);
    }

    #[test]
    fn test_stagger_delay_spread() {
        assert!(close(Easing::stagger_delay(0, 5, 0.0, 0.5), 0.0));
        assert!(close(Easing::stagger_delay(4, 5, 0.0, 0.5), 0.5));
        assert!(close(Easing::stagger_delay(0, 1, 0.2, 0.8), 0.2));
    }

    #[test]
    fn test_phase_progress_clamps() {
        assert_eq!(Easing::phase_progress(0.1, 0.4, 0.6), 0.0);
        assert_eq!(Easing::phase_progress(0.9, 0.4, 0.6), 1.0);
        assert!(close(Easing::phase_progress(0.5, 0.4, 0.6), 0.5));
    }

    #[test]
    fn test_typewriter_reveal() {
        assert_eq!(Easing::typewriter("hello", 0.0), ("", true));
        let (text, _) = Easing::typewriter("hello", 0.4);
        assert_eq!(text, "he");
        let (text, cursor) = Easing::typewriter("hello", 1.0);
        assert_eq!(text, "hello");
        assert!(!cursor);
    }

    #[test]
    fn test_typewriter_multibyte_boundary() {
        let (text, _) = Easing::typewriter("héllo", 0.4);
        assert_eq!(text, "hé");
    }

    #[test]
    fn test_lerp() {
        assert!(close(Easing::lerp(10.0, 20.0, 0.5), 15.0));
    }
}

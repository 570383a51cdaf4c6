// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves for [`TemporalAction`](super::TemporalAction).
//!
//! Each maps a linear completion fraction in `[0, 1]` to an eased fraction,
//! with `f(0) == 0` and `f(1) == 1`.

use std::f64::consts::FRAC_PI_2;

/// No easing.
#[must_use]
pub fn linear(a: f64) -> f64 {
    a
}

/// Smoothstep: eases in and out.
#[must_use]
pub fn smooth(a: f64) -> f64 {
    a * a * (3.0 - 2.0 * a)
}

/// Smoothstep applied twice.
#[must_use]
pub fn smoother(a: f64) -> f64 {
    smooth(smooth(a))
}

/// Perlin's smootherstep: `6a⁵ − 15a⁴ + 10a³`.
#[must_use]
pub fn fade(a: f64) -> f64 {
    a * a * a * (a * (a * 6.0 - 15.0) + 10.0)
}

/// Quadratic ease in.
#[must_use]
pub fn pow2_in(a: f64) -> f64 {
    a * a
}

/// Quadratic ease out.
#[must_use]
pub fn pow2_out(a: f64) -> f64 {
    1.0 - (a - 1.0) * (a - 1.0)
}

/// Sine ease in and out.
#[must_use]
pub fn sine(a: f64) -> f64 {
    (1.0 - (a * 2.0 * FRAC_PI_2).cos()) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curves_fix_endpoints() {
        for curve in [linear, smooth, smoother, fade, pow2_in, pow2_out, sine] {
            assert!(curve(0.0).abs() < 1e-12);
            assert!((curve(1.0) - 1.0).abs() < 1e-12);
            let mid = curve(0.5);
            assert!((0.0..=1.0).contains(&mid));
        }
    }

    #[test]
    fn symmetric_curves_pass_through_half() {
        for curve in [smooth, smoother, fade, sine] {
            assert!((curve(0.5) - 0.5).abs() < 1e-12);
        }
        assert!(pow2_in(0.5) < 0.5);
        assert!(pow2_out(0.5) > 0.5);
    }
}

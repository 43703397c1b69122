// Copyright 2025 the Floret Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Score-aggregate health color ramp for Floret charts.
//!
//! The chart's single data color comes from the normalized score total,
//! mapped through a deliberately non-linear red → yellow → green ramp. The
//! yellow plateau is wide because real dimension scores cluster in the
//! mid-range: the first 60% of the scale only moves from red to yellow, and
//! the remaining 40% carries the full yellow-to-green transition.
//!
//! The breakpoint sits exactly at a normalized total of 0.6, where both
//! segments agree on hue 60 and lightness 60, so the ramp is continuous.
//! Saturation is fixed at 100%. These endpoint and breakpoint values are
//! load-bearing for visual-regression parity; change them and every
//! rendered chart shifts tone.
//!
//! ```
//! use floret_color::health_ramp;
//!
//! let mid = health_ramp(0.6);
//! assert_eq!((mid.hue, mid.lightness), (60.0, 60.0));
//!
//! let full = health_ramp(1.0);
//! assert_eq!((full.hue, full.lightness), (125.0, 45.0));
//! ```
//!
//! This crate is `no_std` and dependency-free; the ramp is plain
//! arithmetic.

#![no_std]

/// An HSL color. Hue is in degrees `[0, 360)`; saturation and lightness are
/// percentages in `[0, 100]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    /// Hue angle in degrees.
    pub hue: f64,
    /// Saturation percentage.
    pub saturation: f64,
    /// Lightness percentage.
    pub lightness: f64,
}

impl Hsl {
    /// Converts to RGB with components in `[0, 1]`.
    pub fn to_rgb(self) -> (f64, f64, f64) {
        let s = self.saturation / 100.0;
        let l = self.lightness / 100.0;
        if s == 0.0 {
            return (l, l, l);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        let h = self.hue / 360.0;

        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    }

    /// Converts to 8-bit RGB.
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let (r, g, b) = self.to_rgb();
        (quantize(r), quantize(g), quantize(b))
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "the component is clamped to [0, 1] before scaling to u8 range"
)]
fn quantize(component: f64) -> u8 {
    (component.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

/// One channel of the HSL to RGB conversion.
fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Maps a normalized score total in `[0, 1]` onto the health ramp.
///
/// Inputs outside `[0, 1]` are clamped. Below 0.6 the hue runs 0 to 60
/// degrees and lightness 58% to 60%; from 0.6 up the hue runs 60 to 125
/// degrees and lightness 60% down to 45%.
pub fn health_ramp(normalized: f64) -> Hsl {
    let t = normalized.clamp(0.0, 1.0);

    let (hue, lightness) = if t < 0.6 {
        let local = t / 0.6;
        (60.0 * local, 58.0 + 2.0 * local)
    } else {
        let local = (t - 0.6) / 0.4;
        (60.0 + 65.0 * local, 60.0 - 15.0 * local)
    };

    Hsl {
        hue,
        saturation: 100.0,
        lightness,
    }
}

/// The aggregate color for a set of dimension scores.
///
/// Scores are summed and normalized against `max_score` per dimension; the
/// normalized total is then mapped through [`health_ramp`]. An empty score
/// slice maps to the bottom of the ramp.
pub fn health_color(scores: &[f64], max_score: f64) -> Hsl {
    let max_total = max_score * scores.len() as f64;
    if max_total <= 0.0 {
        return health_ramp(0.0);
    }
    let total: f64 = scores.iter().sum();
    health_ramp(total / max_total)
}

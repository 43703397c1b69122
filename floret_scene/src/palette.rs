// Copyright 2025 the Floret Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed paint constants for the chart backdrop.
//!
//! The data curve takes its color from `floret_color`; everything here is
//! the static slate-toned stage it draws on.

use peniko::Color;

/// Diagonal backdrop gradient, top-left to bottom-right.
pub(crate) const PANEL_GRADIENT: [(f32, Color); 4] = [
    (0.0, Color::from_rgb8(0x39, 0x43, 0x53)),
    (0.3, Color::from_rgb8(0x4d, 0x57, 0x66)),
    (0.6, Color::from_rgb8(0x6b, 0x74, 0x82)),
    (1.0, Color::from_rgb8(0x9a, 0xa1, 0xad)),
];

/// Corner radius of the backdrop panel.
pub(crate) const PANEL_CORNER_RADIUS: f64 = 20.0;

/// Primary ring-band tone. The innermost two rings and every even ring use
/// it; it also draws the sector separator lines.
pub(crate) const RING_TONE_A: Color = Color::from_rgb8(0x37, 0x41, 0x51);

/// Secondary ring-band tone for the remaining odd rings.
pub(crate) const RING_TONE_B: Color = Color::from_rgb8(0x2d, 0x37, 0x48);

/// Reference axes and the magnified overlay's center tick.
pub(crate) const AXIS_COLOR: Color = Color::from_rgb8(0x4b, 0x55, 0x63);

/// Dimming mask over non-selected sectors.
pub(crate) const DIM_MASK: Color = Color::new([0.0, 0.0, 0.0, 0.3]);

/// Translucent wash over the hovered sector.
pub(crate) const HOVER_WASH: Color = Color::new([1.0, 1.0, 1.0, 0.15]);

/// Tone of `ring`, counted from 1 at the center.
pub(crate) fn ring_tone(ring: u8) -> Color {
    if ring <= 2 || ring % 2 == 0 {
        RING_TONE_A
    } else {
        RING_TONE_B
    }
}

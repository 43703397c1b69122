// Copyright 2025 the Floret Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layered renderer for Floret charts.
//!
//! Rendering is a fixed back-to-front sequence of independent passes, each
//! a plain function from chart state to draw calls on a [`Surface`]:
//!
//! 1. backdrop panel (rounded rectangle, diagonal gradient),
//! 2. concentric ring grid with sector separators,
//! 3. reference axes,
//! 4. either a single score spoke (exactly one non-zero score) or the
//!    closed smoothed data curve (two or more),
//! 5. for a selected sector: a dimming mask over everything else and a
//!    magnified redraw of the selection,
//! 6. a translucent wash over the hovered sector.
//!
//! [`render`] always replays the full sequence; the surface is small and
//! fixed-size, so there is no incremental damage protocol at this layer.
//!
//! The [`Surface`] trait is the only rendering dependency: paths are
//! [`kurbo::BezPath`], paints are [`peniko::Brush`], and hosts bring their
//! own backend. A [`Recording`] surface is provided for tests and for
//! hosts that replay commands into an immediate-mode context.
//!
//! ```
//! use floret_geom::ChartConfig;
//! use floret_scene::{Frame, Recording, render};
//!
//! let config = ChartConfig::default();
//! let frame = Frame {
//!     config: &config,
//!     scores: &[3.0, 7.0, 5.0, 7.0, 1.0],
//!     highlight: None,
//!     hover: None,
//! };
//!
//! let mut recording = Recording::new();
//! render(&mut recording, &frame);
//! assert!(!recording.commands().is_empty());
//! ```

#![no_std]

extern crate alloc;

// Re-exported for downstream crates: brushes and fill rules appear in the
// `Surface` contract.
pub use peniko;

mod palette;
mod passes;
mod surface;

pub use passes::{
    Frame, draw_axes, draw_background, draw_bloom, draw_dim_mask, draw_hover_wash,
    draw_magnified, draw_ring_grid, draw_spokes, render,
};
pub use surface::{Command, Glow, Recording, StrokeStyle, Surface};

// Copyright 2025 the Floret Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction controller for Floret charts.
//!
//! [`Chart`] is the piece a host embeds: it owns the dimension data, the
//! display mode, and all transient interaction state (hovered sector,
//! tooltip, notices, damage), translates pointer events into hit tests and
//! state updates, and replays the `floret_scene` pass sequence on demand.
//!
//! The host stays in charge of everything outward-facing: it owns the
//! event loop and clock (timestamps are injected, never read), renders
//! tooltips and labels with its own presentation layer, and decides what a
//! [`ClickAction::Select`] means.
//!
//! ## Modes
//!
//! - [`DisplayMode::Overview`]: hover feedback everywhere, clicks resolve
//!   to [`ClickAction::Select`].
//! - [`DisplayMode::Focus`] with no selection: hover feedback still works
//!   so sectors can be previewed; clicks enqueue an ephemeral [`Notice`]
//!   instead of selecting.
//! - [`DisplayMode::Focus`] with a selection: pointer input is suppressed
//!   and the renderer magnifies the selected sector.
//!
//! ## Redraws
//!
//! Every state change is recorded in a [`Damage`] set. Hosts drain it with
//! [`Chart::take_damage`] and redraw when it is non-empty; [`Chart::draw`]
//! always replays the full pass sequence.
//!
//! ```
//! use floret_geom::ChartConfig;
//! use floret_scene::Recording;
//! use floret_widget::{Chart, Dimension};
//! use kurbo::Point;
//!
//! let mut chart = Chart::new(ChartConfig::default());
//! chart.set_dimensions(vec![
//!     Dimension::new("value", 3),
//!     Dimension::new("future", 7),
//!     Dimension::new("past", 5),
//!     Dimension::new("health", 7),
//!     Dimension::new("dividend", 1),
//! ]);
//!
//! // Hovering near the top of the disk resolves to sector 0.
//! chart.on_pointer_move(Point::new(200.0, 150.0));
//! assert_eq!(chart.hovered(), Some(0));
//!
//! let mut surface = Recording::new();
//! chart.draw(&mut surface);
//! assert!(!surface.commands().is_empty());
//! ```

#![no_std]

extern crate alloc;

mod chart;
mod damage;
mod dimension;
mod hover;
mod notice;

pub use chart::{Chart, ClickAction, DisplayMode};
pub use damage::Damage;
pub use dimension::{Dimension, scores_by_name};
pub use hover::{HoverState, Tooltip};
pub use notice::{NOTICE_FADE_MS, NOTICE_LINGER_MS, Notice, NoticeQueue};

// Copyright 2025 the Floret Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wedge and ring-band path builders shared by the grid and highlight
//! passes.
//!
//! Everything here produces plain [`BezPath`] values in surface
//! coordinates. Arcs are flattened to cubics with a fixed tolerance that is
//! far below one device pixel at the reference chart size.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Arc, BezPath, Circle, Point, Shape, Vec2};

/// Flattening tolerance for arcs and circles, in surface units.
const ARC_TOLERANCE: f64 = 0.1;

/// The point at `angle` on the circle of `radius` around `center`.
fn on_circle(center: Point, radius: f64, angle: f64) -> Point {
    center + Vec2::from_angle(angle) * radius
}

/// Appends a circular arc to `path`, drawing a line to the arc's start
/// point first.
///
/// `start` is the arc's starting angle and `sweep` its signed angular
/// extent; positive sweeps run clockwise in surface coordinates. The path
/// must already have a current point.
fn line_then_arc(path: &mut BezPath, center: Point, radius: f64, start: f64, sweep: f64) {
    path.line_to(on_circle(center, radius, start));
    let arc = Arc::new(center, (radius, radius), start, sweep, 0.0);
    arc.to_cubic_beziers(ARC_TOLERANCE, |c1, c2, end| path.curve_to(c1, c2, end));
}

/// A closed pie wedge: center, outer arc from `start` over `sweep`, back to
/// center.
pub fn sector_wedge(center: Point, radius: f64, start: f64, sweep: f64) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(center);
    line_then_arc(&mut path, center, radius, start, sweep);
    path.close_path();
    path
}

/// A closed annular band between `inner` and `outer` radii over one angular
/// span: outer arc forward, inner arc back.
pub fn ring_band(center: Point, inner: f64, outer: f64, start: f64, sweep: f64) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(on_circle(center, outer, start));
    let outer_arc = Arc::new(center, (outer, outer), start, sweep, 0.0);
    outer_arc.to_cubic_beziers(ARC_TOLERANCE, |c1, c2, end| path.curve_to(c1, c2, end));
    line_then_arc(&mut path, center, inner, start + sweep, -sweep);
    path.close_path();
    path
}

/// The full disk of `radius` around `center`.
pub fn disk(center: Point, radius: f64) -> BezPath {
    Circle::new(center, radius).to_path(ARC_TOLERANCE)
}

// Copyright 2025 the Floret Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smoothed closed-curve construction through the chart vertices.
//!
//! One cubic segment joins each pair of adjacent vertices. Control points
//! come from the standard circular-arc approximation (offset distance
//! `(4/3)·tan(Δθ/4)`), so a ring of equal scores reads as a circle and
//! uneven scores read as a rounded "snowflake" rather than a polygon.

use core::f64::consts::{FRAC_PI_2, PI, TAU};

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{BezPath, Point, Vec2};

/// Control points for the cubic joining `p1` to `p2` around `center`.
///
/// Each control point is offset perpendicular to its endpoint's radius
/// vector, scaled by the average of the two endpoint radii times the
/// circular-arc offset for the signed angular span (normalized to
/// `(-π, π]`). Using the averaged radius keeps the join smooth when the two
/// endpoints carry very different scores.
///
/// Two properties hold by construction: swapping `p1` and `p2` swaps the
/// returned pair (the mirror-image segment), and the control points
/// collapse onto their endpoints as the angular span goes to zero (the
/// segment degenerates toward a straight line).
pub fn curve_control_points(p1: Point, p2: Point, center: Point) -> (Point, Point) {
    let v1 = p1 - center;
    let v2 = p2 - center;
    let a1 = v1.atan2();
    let a2 = v2.atan2();

    let mut span = a2 - a1;
    if span > PI {
        span -= TAU;
    }
    if span < -PI {
        span += TAU;
    }

    let avg_radius = (v1.hypot() + v2.hypot()) / 2.0;
    let offset = (4.0 / 3.0) * (span / 4.0).tan();

    let cp1 = p1 + Vec2::from_angle(a1 + FRAC_PI_2) * (avg_radius * offset);
    let cp2 = p2 + Vec2::from_angle(a2 - FRAC_PI_2) * (avg_radius * offset);
    (cp1, cp2)
}

/// One smoothed arc of the closed data curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveSegment {
    /// Segment start, a data vertex.
    pub start: Point,
    /// First cubic control point, offset from `start`.
    pub ctrl1: Point,
    /// Second cubic control point, offset from `end`.
    pub ctrl2: Point,
    /// Segment end, the next data vertex.
    pub end: Point,
}

impl CurveSegment {
    /// Builds the segment joining `start` to `end` around `center`.
    pub fn between(start: Point, end: Point, center: Point) -> Self {
        let (ctrl1, ctrl2) = curve_control_points(start, end, center);
        Self {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }
}

/// The closed smoothed path through `vertices`, in order, around `center`.
///
/// Produces one cubic per adjacent vertex pair (wrapping from the last
/// vertex back to the first) and closes the path. Fewer than two vertices
/// produce an empty path.
pub fn bloom_path(vertices: &[Point], center: Point) -> BezPath {
    let mut path = BezPath::new();
    if vertices.len() < 2 {
        return path;
    }

    path.move_to(vertices[0]);
    for i in 0..vertices.len() {
        let start = vertices[i];
        let end = vertices[(i + 1) % vertices.len()];
        let segment = CurveSegment::between(start, end, center);
        path.curve_to(segment.ctrl1, segment.ctrl2, segment.end);
    }
    path.close_path();
    path
}

/// Collects the segments of the closed curve through `vertices`.
///
/// Exposed for callers that need per-segment access (for example to sample
/// or measure individual arcs) rather than one assembled path.
pub fn curve_segments(vertices: &[Point], center: Point) -> Vec<CurveSegment> {
    if vertices.len() < 2 {
        return Vec::new();
    }
    (0..vertices.len())
        .map(|i| {
            CurveSegment::between(vertices[i], vertices[(i + 1) % vertices.len()], center)
        })
        .collect()
}

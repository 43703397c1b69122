// Copyright 2025 the Floret Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polar chart geometry for Floret.
//!
//! This crate owns the angular layout of a radial "snowflake" chart: the
//! sector partition, score-scaled vertex placement, the control points of the
//! smoothed closed curve through the vertices, and the inverse hit test that
//! maps a pointer position back to a sector. It is built on [`kurbo`] and is
//! intentionally decoupled from any renderer or widget layer.
//!
//! # Conventions
//!
//! All angles are radians in surface coordinates (y grows downward), with
//! `0` pointing along +x and positive angles sweeping clockwise on screen.
//! Sector 0 points "up" (angle `-π/2`) and sectors proceed clockwise.
//!
//! Sector `i` spans `[i·θ - θ/2, i·θ + θ/2)` measured from "up", where
//! `θ = 2π / sectors`. The hover wash, dimming mask, magnified-highlight
//! clip, and [`ChartConfig::hit_test`] are all derived from this one
//! partition, so the hit test inverts exactly what gets drawn.
//!
//! # Typical usage
//!
//! ```
//! use floret_geom::ChartConfig;
//!
//! let config = ChartConfig::default();
//!
//! // A full score lands on the outer grid radius.
//! let top = config.vertex(0, 7.0);
//! assert!((top.y - (config.center.y - config.max_radius)).abs() < 1e-9);
//!
//! // The hit test maps the same point back to sector 0.
//! assert_eq!(config.hit_test(top), Some(0));
//! ```

#![no_std]

extern crate alloc;

use core::f64::consts::{FRAC_PI_2, TAU};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

mod curve;
mod wedge;

pub use curve::{CurveSegment, bloom_path, curve_control_points, curve_segments};
pub use wedge::{disk, ring_band, sector_wedge};

/// Distance of label anchors beyond the outer grid radius, in surface units.
pub const LABEL_MARGIN: f64 = 30.0;

/// Fraction of the outer grid radius at which tooltips are anchored.
pub const TOOLTIP_RADIUS_RATIO: f64 = 0.7;

/// Immutable layout constants for one chart.
///
/// The [`Default`] value is the reference configuration: a 400x400 surface
/// with the chart centered at (200, 200), five sectors, and seven score
/// rings. All geometry queries go through this type so that every consumer
/// agrees on a single angular partition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartConfig {
    /// Chart center in surface coordinates.
    pub center: Point,
    /// Outer grid radius; a maximal score lands here.
    pub max_radius: f64,
    /// Maximum per-dimension score. Also the number of grid rings.
    pub max_score: u8,
    /// Number of sectors (dimensions). Must be at least 3.
    pub sectors: usize,
    /// Uniform scale applied to the magnified highlight overlay.
    pub scale_ratio: f64,
    /// Radius of the magnified highlight clip wedge. Extends past
    /// [`ChartConfig::max_radius`] so the overlay covers label space.
    pub clip_radius: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            center: Point::new(200.0, 200.0),
            max_radius: 125.0,
            max_score: 7,
            sectors: 5,
            scale_ratio: 1.08,
            clip_radius: 160.0,
        }
    }
}

impl ChartConfig {
    /// Angular width of one sector, `2π / sectors`.
    pub fn sector_angle(&self) -> f64 {
        TAU / self.sectors as f64
    }

    /// Angle of sector `index`'s axis, measured in surface coordinates.
    ///
    /// Sector 0 points up; indices advance clockwise.
    pub fn axis_angle(&self, index: usize) -> f64 {
        index as f64 * self.sector_angle() - FRAC_PI_2
    }

    /// Start and end angles of sector `index`'s wedge.
    ///
    /// The wedge is centered on the sector's axis and spans half a sector to
    /// either side, so wedge boundaries fall midway between adjacent axes.
    pub fn sector_span(&self, index: usize) -> (f64, f64) {
        let half = self.sector_angle() / 2.0;
        let center = self.axis_angle(index);
        (center - half, center + half)
    }

    /// The point at distance `radius` along sector `index`'s axis.
    pub fn point_on_axis(&self, index: usize, radius: f64) -> Point {
        self.center + Vec2::from_angle(self.axis_angle(index)) * radius
    }

    /// The data vertex for sector `index` at the given score.
    ///
    /// The score is clamped to `[0, max_score]` and scaled onto
    /// `[0, max_radius]`. A zero score collapses to the center for every
    /// index.
    pub fn vertex(&self, index: usize, score: f64) -> Point {
        let clamped = score.clamp(0.0, f64::from(self.max_score));
        let radius = clamped / f64::from(self.max_score) * self.max_radius;
        self.point_on_axis(index, radius)
    }

    /// Inner and outer radii of grid ring `ring`, where `ring` counts from 1
    /// at the center to `max_score` at the outer edge.
    pub fn ring_radii(&self, ring: u8) -> (f64, f64) {
        debug_assert!(
            (1..=self.max_score).contains(&ring),
            "ring indices count from 1 to max_score"
        );
        let step = self.max_radius / f64::from(self.max_score);
        (step * f64::from(ring - 1), step * f64::from(ring))
    }

    /// Maps a surface-relative pointer position to a sector index.
    ///
    /// Returns `None` when the position lies outside the outer grid radius.
    /// Inside the disk every position resolves to a sector, data or not; the
    /// caller decides whether an empty sector is actionable.
    ///
    /// The half-sector offset below aligns decision boundaries with wedge
    /// boundaries (midway between axes), so this is the exact inverse of the
    /// partition produced by [`ChartConfig::sector_span`]. Floating-point
    /// rounding at the upward seam can produce index `sectors`; that folds
    /// back to 0.
    pub fn hit_test(&self, pos: Point) -> Option<usize> {
        let offset = pos - self.center;
        if offset.hypot() > self.max_radius {
            return None;
        }

        let mut angle = offset.atan2() + FRAC_PI_2;
        if angle < 0.0 {
            angle += TAU;
        }

        let theta = self.sector_angle();
        #[allow(
            clippy::cast_possible_truncation,
            reason = "the adjusted angle is finite and non-negative, so the floor fits in usize"
        )]
        let mut index = ((angle + theta / 2.0) / theta) as usize;
        if index >= self.sectors {
            index = 0;
        }
        Some(index)
    }

    /// Anchor point for sector `index`'s tooltip, at
    /// [`TOOLTIP_RADIUS_RATIO`] of the outer radius along the sector axis.
    ///
    /// This is a presentation anchor only; it plays no part in hit testing.
    pub fn tooltip_anchor(&self, index: usize) -> Point {
        self.point_on_axis(index, self.max_radius * TOOLTIP_RADIUS_RATIO)
    }

    /// Anchor and rotation for sector `index`'s label.
    ///
    /// Labels sit [`LABEL_MARGIN`] past the outer radius along the axis and
    /// rotate tangentially. Labels in the lower half of the chart are
    /// flipped a further 180 degrees so their text never reads upside down.
    /// When `magnified` is set the anchor radius follows the highlight
    /// overlay's scale.
    pub fn label_anchor(&self, index: usize, magnified: bool) -> LabelAnchor {
        let mut radius = self.max_radius + LABEL_MARGIN;
        if magnified {
            radius *= self.scale_ratio;
        }

        let axis = self.axis_angle(index);
        let mut rotation = axis.to_degrees() + 90.0;
        let upright = (rotation + 360.0) % 360.0;
        if upright > 90.0 && upright < 270.0 {
            rotation += 180.0;
        }

        LabelAnchor {
            position: self.center + Vec2::from_angle(axis) * radius,
            rotation,
        }
    }
}

/// Placement of one dimension label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelAnchor {
    /// Label center in surface coordinates.
    pub position: Point,
    /// Tangential rotation in degrees, already flipped for lower-half
    /// sectors.
    pub rotation: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn zero_score_collapses_to_center() {
        let config = ChartConfig::default();
        for index in 0..config.sectors {
            let v = config.vertex(index, 0.0);
            assert!(approx(v.x, config.center.x), "sector {index} x");
            assert!(approx(v.y, config.center.y), "sector {index} y");
        }
    }

    #[test]
    fn full_score_lands_on_outer_radius() {
        let config = ChartConfig::default();
        let v = config.vertex(0, 7.0);
        assert!(approx(v.x, 200.0), "sector 0 points straight up");
        assert!(approx(v.y, 200.0 - 125.0), "full score reaches max radius");
    }

    #[test]
    fn sectors_advance_clockwise_from_up() {
        let config = ChartConfig::default();
        // Sector 1 of five sits at 72 - 90 = -18 degrees: right of center
        // and slightly above it in surface coordinates.
        let v = config.vertex(1, 7.0);
        assert!(v.x > config.center.x);
        assert!(v.y < config.center.y);
    }

    #[test]
    fn scores_clamp_to_range() {
        let config = ChartConfig::default();
        assert_eq!(config.vertex(0, 12.0), config.vertex(0, 7.0));
        assert_eq!(config.vertex(0, -3.0), config.vertex(0, 0.0));
    }

    #[test]
    fn hit_test_inverts_the_partition() {
        let config = ChartConfig::default();
        for index in 0..config.sectors {
            let probe = config.point_on_axis(index, config.max_radius * 0.5);
            assert_eq!(config.hit_test(probe), Some(index));
        }
    }

    #[test]
    fn hit_test_outside_radius_is_none() {
        let config = ChartConfig::default();
        for index in 0..config.sectors {
            let probe = config.point_on_axis(index, config.max_radius + 1.0);
            assert_eq!(config.hit_test(probe), None);
        }
    }

    #[test]
    fn hit_test_wraps_at_the_upward_seam() {
        let config = ChartConfig::default();
        // Just counterclockwise of straight up: still sector 0.
        let probe = Point::new(config.center.x - 1.0, config.center.y - 100.0);
        assert_eq!(config.hit_test(probe), Some(0));
    }

    #[test]
    fn hit_test_boundaries_fall_between_axes() {
        let config = ChartConfig::default();
        let theta = config.sector_angle();
        let r = config.max_radius * 0.5;

        // A hair before the half-sector boundary belongs to sector 0.
        let before = config.center + Vec2::from_angle(-FRAC_PI_2 + theta / 2.0 - 1e-6) * r;
        assert_eq!(config.hit_test(before), Some(0));

        // On the boundary the next sector starts.
        let at = config.center + Vec2::from_angle(-FRAC_PI_2 + theta / 2.0 + 1e-6) * r;
        assert_eq!(config.hit_test(at), Some(1));
    }

    #[test]
    fn hit_test_center_resolves() {
        let config = ChartConfig::default();
        assert!(config.hit_test(config.center).is_some());
    }

    #[test]
    fn tooltip_anchor_sits_at_seventy_percent() {
        let config = ChartConfig::default();
        let anchor = config.tooltip_anchor(0);
        assert!(approx(anchor.x, 200.0));
        assert!(approx(anchor.y, 200.0 - 125.0 * 0.7));
    }

    #[test]
    fn ring_radii_partition_the_disk() {
        let config = ChartConfig::default();
        let (inner, outer) = config.ring_radii(1);
        assert!(approx(inner, 0.0));
        assert!(approx(outer, 125.0 / 7.0));
        let (inner, outer) = config.ring_radii(7);
        assert!(approx(outer, 125.0));
        assert!(approx(outer - inner, 125.0 / 7.0));
    }

    #[test]
    fn upper_half_labels_stay_unflipped() {
        let config = ChartConfig::default();
        let anchor = config.label_anchor(0, false);
        assert!(approx(anchor.rotation, 0.0));
        assert!(anchor.position.y < config.center.y);
    }

    #[test]
    fn lower_half_labels_flip_upright() {
        let config = ChartConfig::default();
        // Sector 2 of five sits at 144 degrees from up, in the lower half.
        let anchor = config.label_anchor(2, false);
        assert!(approx(anchor.rotation, 144.0 + 180.0));
        assert!(anchor.position.y > config.center.y);
    }

    #[test]
    fn magnified_labels_follow_the_overlay_scale() {
        let config = ChartConfig::default();
        let plain = config.label_anchor(0, false);
        let scaled = config.label_anchor(0, true);
        let plain_r = (plain.position - config.center).hypot();
        let scaled_r = (scaled.position - config.center).hypot();
        assert!(approx(scaled_r, plain_r * config.scale_ratio));
        assert!(approx(plain.rotation, scaled.rotation));
    }
}

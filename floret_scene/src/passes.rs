// Copyright 2025 the Floret Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The draw passes and their composition.
//!
//! Each pass is an independent, idempotent function of chart state; only
//! their order matters. [`render`] is the one composition hosts normally
//! call, but the individual passes are public so a host embedding the
//! chart in a larger scene can interleave its own drawing.

use floret_color::{Hsl, health_color};
use floret_geom::{ChartConfig, bloom_path, disk, ring_band, sector_wedge};
use kurbo::{Affine, BezPath, Point, RoundedRect, Shape};
use peniko::{Brush, Color, Fill, Gradient};
use smallvec::SmallVec;

use crate::palette::{
    AXIS_COLOR, DIM_MASK, HOVER_WASH, PANEL_CORNER_RADIUS, PANEL_GRADIENT, RING_TONE_A, ring_tone,
};
use crate::surface::{StrokeStyle, Surface};

/// Stroke width of the data curve.
const CURVE_STROKE_WIDTH: f64 = 2.0;
/// Stroke width of the highlighted or magnified data curve.
const HIGHLIGHT_STROKE_WIDTH: f64 = 3.0;
/// Stroke width of the single-score spoke.
const SPOKE_WIDTH: f64 = 3.0;
/// Stroke width of the ring grid's sector separators.
const SEPARATOR_WIDTH: f64 = 4.0;
/// Stroke width of the reference axes.
const AXIS_WIDTH: f64 = 3.0;
/// Stroke width of the magnified overlay's center tick.
const TICK_WIDTH: f64 = 1.0;
/// Glow radius behind the highlighted curve stroke.
const GLOW_RADIUS: f64 = 20.0;
/// Fill alpha of the data curve.
const CURVE_FILL_ALPHA: f64 = 0.5;
/// Fill alpha of the data curve when flagged highlighted.
const HIGHLIGHT_FILL_ALPHA: f64 = 0.7;
/// Fill alpha of the curve redrawn inside the magnified overlay.
const MAGNIFIED_FILL_ALPHA: f64 = 0.8;
/// The dimming mask's wedge cutout reaches slightly past the outer radius
/// so the selected sector is never clipped by the mask edge.
const MASK_RADIUS_RATIO: f64 = 1.1;
/// Flattening tolerance for the backdrop panel outline.
const PANEL_TOLERANCE: f64 = 0.1;

/// Everything one [`render`] call needs, borrowed from the owner.
///
/// `scores` is indexed by sector; missing entries read as zero and values
/// are clamped by the geometry layer. `highlight` is the sector magnified
/// and dimmed around (a focused selection); `hover` is the sector washed
/// for pointer feedback. The interaction layer guarantees at most one of
/// the two is active for emphasis at a time.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    /// Chart layout constants.
    pub config: &'a ChartConfig,
    /// Per-sector scores, in sector order.
    pub scores: &'a [f64],
    /// Selected sector for the dimming mask and magnified overlay.
    pub highlight: Option<usize>,
    /// Hovered sector for the translucent wash.
    pub hover: Option<usize>,
}

impl Frame<'_> {
    fn non_zero_scores(&self) -> usize {
        self.scores.iter().filter(|score| **score > 0.0).count()
    }
}

/// Runs the full pass sequence back-to-front.
///
/// The sequence is always replayed from the backdrop; passes that do not
/// apply to the frame (no data, no selection, no hover) are skipped as
/// whole units. The dimming mask and magnified overlay only draw when the
/// main curve drew, so a selection over empty data degrades to the plain
/// grid.
pub fn render<S: Surface + ?Sized>(surface: &mut S, frame: &Frame<'_>) {
    let config = frame.config;

    draw_background(surface, config);
    draw_ring_grid(surface, config);
    draw_axes(surface, config);

    match frame.non_zero_scores() {
        0 => {}
        1 => draw_spokes(surface, config, frame.scores),
        _ => {
            draw_bloom(surface, config, frame.scores, false);
            if let Some(selected) = frame.highlight {
                draw_dim_mask(surface, config, selected);
                draw_magnified(surface, config, frame.scores, selected);
            }
        }
    }

    if let Some(hovered) = frame.hover {
        draw_hover_wash(surface, config, hovered);
    }
}

/// Backdrop pass: the rounded panel with its diagonal gradient.
pub fn draw_background<S: Surface + ?Sized>(surface: &mut S, config: &ChartConfig) {
    let width = config.center.x * 2.0;
    let height = config.center.y * 2.0;
    let panel =
        RoundedRect::new(0.0, 0.0, width, height, PANEL_CORNER_RADIUS).to_path(PANEL_TOLERANCE);

    let gradient = Gradient::new_linear((0.0, 0.0), (width, height)).with_stops(PANEL_GRADIENT);
    surface.fill(&panel, &Brush::Gradient(gradient), Fill::NonZero);
}

/// Ring grid pass: the concentric score bands and sector separators that
/// stay visible regardless of data.
pub fn draw_ring_grid<S: Surface + ?Sized>(surface: &mut S, config: &ChartConfig) {
    for ring in 1..=config.max_score {
        let (inner, outer) = config.ring_radii(ring);
        let brush = Brush::Solid(ring_tone(ring));
        for sector in 0..config.sectors {
            let (start, _) = config.sector_span(sector);
            let band = ring_band(config.center, inner, outer, start, config.sector_angle());
            surface.fill(&band, &brush, Fill::NonZero);
        }
    }

    let brush = Brush::Solid(RING_TONE_A);
    let style = StrokeStyle::new(SEPARATOR_WIDTH);
    for sector in 0..config.sectors {
        let spoke = line_path(
            config.center,
            config.point_on_axis(sector, config.max_radius),
        );
        surface.stroke(&spoke, &brush, &style);
    }
}

/// Axis pass: one reference line per sector from center to the outer
/// radius.
pub fn draw_axes<S: Surface + ?Sized>(surface: &mut S, config: &ChartConfig) {
    let brush = Brush::Solid(AXIS_COLOR);
    let style = StrokeStyle::new(AXIS_WIDTH);
    for sector in 0..config.sectors {
        let axis = line_path(
            config.center,
            config.point_on_axis(sector, config.max_radius),
        );
        surface.stroke(&axis, &brush, &style);
    }
}

/// Degenerate-data pass: radial spokes for non-zero scores.
///
/// Used when exactly one dimension is non-zero; a closed curve through a
/// single off-center vertex would collapse to a sliver, so the lone score
/// reads better as a plain scaled spoke.
pub fn draw_spokes<S: Surface + ?Sized>(surface: &mut S, config: &ChartConfig, scores: &[f64]) {
    let color = health_color(scores, f64::from(config.max_score));
    let brush = Brush::Solid(hsl_color(color, 1.0));
    let style = StrokeStyle::new(SPOKE_WIDTH);

    for sector in 0..config.sectors {
        let score = score_at(scores, sector);
        if score > 0.0 {
            let spoke = line_path(config.center, config.vertex(sector, score));
            surface.stroke(&spoke, &brush, &style);
        }
    }
}

/// Main curve pass: the closed smoothed curve through all score vertices.
///
/// `highlighted` raises the fill alpha, widens the stroke, and adds a glow
/// behind it.
pub fn draw_bloom<S: Surface + ?Sized>(
    surface: &mut S,
    config: &ChartConfig,
    scores: &[f64],
    highlighted: bool,
) {
    let color = health_color(scores, f64::from(config.max_score));
    let path = bloom_path(&score_vertices(config, scores), config.center);

    let fill_alpha = if highlighted {
        HIGHLIGHT_FILL_ALPHA
    } else {
        CURVE_FILL_ALPHA
    };
    surface.fill(&path, &Brush::Solid(hsl_color(color, fill_alpha)), Fill::NonZero);

    let stroke_color = hsl_color(color, 1.0);
    let style = if highlighted {
        StrokeStyle::new(HIGHLIGHT_STROKE_WIDTH).with_glow(stroke_color, GLOW_RADIUS)
    } else {
        StrokeStyle::new(CURVE_STROKE_WIDTH)
    };
    surface.stroke(&path, &Brush::Solid(stroke_color), &style);
}

/// Dimming mask pass: darkens the data disk outside the selected sector.
///
/// One even-odd fill of the full disk plus the selected wedge; the wedge
/// region cancels out of the fill, so only the rest of the disk darkens.
/// The wedge reaches past the outer radius so the selection stays clear of
/// the mask edge.
pub fn draw_dim_mask<S: Surface + ?Sized>(surface: &mut S, config: &ChartConfig, selected: usize) {
    let mut mask = disk(config.center, config.max_radius);
    let (start, _) = config.sector_span(selected);
    let wedge = sector_wedge(
        config.center,
        config.max_radius * MASK_RADIUS_RATIO,
        start,
        config.sector_angle(),
    );
    for element in wedge.elements() {
        mask.push(*element);
    }

    surface.fill(&mask, &Brush::Solid(DIM_MASK), Fill::EvenOdd);
}

/// Magnified highlight pass: redraws the selected sector zoomed about the
/// chart center.
///
/// Everything inside is clipped to the selected wedge extended to the
/// configured clip radius (covering label space) and scaled uniformly by
/// the configured ratio: the sector's ring bands, a center tick along the
/// sector axis, and the full data curve at overlay opacity.
pub fn draw_magnified<S: Surface + ?Sized>(
    surface: &mut S,
    config: &ChartConfig,
    scores: &[f64],
    selected: usize,
) {
    let (start, _) = config.sector_span(selected);
    let sweep = config.sector_angle();

    let clip = sector_wedge(config.center, config.clip_radius, start, sweep);
    surface.push_clip(&clip);

    let center = config.center.to_vec2();
    let zoom =
        Affine::translate(center) * Affine::scale(config.scale_ratio) * Affine::translate(-center);
    surface.push_transform(zoom);

    for ring in 1..=config.max_score {
        let (inner, outer) = config.ring_radii(ring);
        let band = ring_band(config.center, inner, outer, start, sweep);
        surface.fill(&band, &Brush::Solid(ring_tone(ring)), Fill::NonZero);
    }

    let tick = line_path(
        config.center,
        config.point_on_axis(selected, config.max_radius),
    );
    surface.stroke(&tick, &Brush::Solid(AXIS_COLOR), &StrokeStyle::new(TICK_WIDTH));

    let color = health_color(scores, f64::from(config.max_score));
    let path = bloom_path(&score_vertices(config, scores), config.center);
    surface.fill(
        &path,
        &Brush::Solid(hsl_color(color, MAGNIFIED_FILL_ALPHA)),
        Fill::NonZero,
    );
    surface.stroke(
        &path,
        &Brush::Solid(hsl_color(color, 1.0)),
        &StrokeStyle::new(HIGHLIGHT_STROKE_WIDTH),
    );

    surface.pop_transform();
    surface.pop_clip();
}

/// Hover wash pass: a translucent white fill over the hovered wedge.
pub fn draw_hover_wash<S: Surface + ?Sized>(surface: &mut S, config: &ChartConfig, hovered: usize) {
    let (start, _) = config.sector_span(hovered);
    let wedge = sector_wedge(config.center, config.max_radius, start, config.sector_angle());
    surface.fill(&wedge, &Brush::Solid(HOVER_WASH), Fill::NonZero);
}

fn score_at(scores: &[f64], sector: usize) -> f64 {
    scores.get(sector).copied().unwrap_or(0.0)
}

fn score_vertices(config: &ChartConfig, scores: &[f64]) -> SmallVec<[Point; 8]> {
    (0..config.sectors)
        .map(|sector| config.vertex(sector, score_at(scores, sector)))
        .collect()
}

fn line_path(from: Point, to: Point) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(from);
    path.line_to(to);
    path
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "color components quantize to f32 at the paint boundary"
)]
fn hsl_color(color: Hsl, alpha: f64) -> Color {
    let (r, g, b) = color.to_rgb();
    Color::new([r as f32, g as f32, b as f32, alpha as f32])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Command, Recording};

    const REFERENCE_SCORES: [f64; 5] = [3.0, 7.0, 5.0, 7.0, 1.0];

    fn fills(recording: &Recording) -> usize {
        recording
            .commands()
            .iter()
            .filter(|command| matches!(command, Command::Fill { .. }))
            .count()
    }

    fn strokes(recording: &Recording) -> usize {
        recording
            .commands()
            .iter()
            .filter(|command| matches!(command, Command::Stroke { .. }))
            .count()
    }

    fn rendered(scores: &[f64], highlight: Option<usize>, hover: Option<usize>) -> Recording {
        let config = ChartConfig::default();
        let frame = Frame {
            config: &config,
            scores,
            highlight,
            hover,
        };
        let mut recording = Recording::new();
        render(&mut recording, &frame);
        recording
    }

    #[test]
    fn zero_state_draws_only_the_backdrop_layers() {
        let recording = rendered(&[0.0; 5], None, None);
        // One panel fill plus seven rings of five bands.
        assert_eq!(fills(&recording), 1 + 7 * 5);
        // Five separators plus five axes.
        assert_eq!(strokes(&recording), 10);
        assert!(
            !recording
                .commands()
                .iter()
                .any(|command| matches!(command, Command::PushClip { .. })),
            "no highlight machinery in the zero state"
        );
    }

    #[test]
    fn backdrop_comes_first_and_is_a_gradient() {
        let recording = rendered(&[0.0; 5], None, None);
        assert!(matches!(
            recording.commands().first(),
            Some(Command::Fill {
                brush: Brush::Gradient(_),
                ..
            })
        ));
    }

    #[test]
    fn one_nonzero_score_draws_a_spoke_not_a_curve() {
        let recording = rendered(&[0.0, 0.0, 4.0, 0.0, 0.0], None, None);
        assert_eq!(fills(&recording), 36, "no curve fill");
        assert_eq!(strokes(&recording), 11, "one spoke over the grid strokes");
    }

    #[test]
    fn full_scores_draw_the_closed_curve() {
        let recording = rendered(&REFERENCE_SCORES, None, None);
        assert_eq!(fills(&recording), 37, "curve fill over the grid fills");
        assert_eq!(strokes(&recording), 11, "curve stroke over the grid strokes");
    }

    #[test]
    fn hover_adds_one_wash_fill() {
        let plain = rendered(&REFERENCE_SCORES, None, None);
        let hovered = rendered(&REFERENCE_SCORES, None, Some(1));
        assert_eq!(fills(&hovered), fills(&plain) + 1);
        // The wash is the topmost command.
        assert!(matches!(
            hovered.commands().last(),
            Some(Command::Fill {
                rule: Fill::NonZero,
                ..
            })
        ));
    }

    #[test]
    fn selection_adds_mask_and_magnified_overlay() {
        let recording = rendered(&REFERENCE_SCORES, Some(2), None);

        // Base 37 fills, plus the even-odd mask, seven magnified bands, and
        // the magnified curve fill.
        assert_eq!(fills(&recording), 37 + 1 + 7 + 1);
        // Base 11 strokes plus the center tick and the magnified curve.
        assert_eq!(strokes(&recording), 11 + 2);

        let commands = recording.commands();
        let masks = commands
            .iter()
            .filter(|command| matches!(command, Command::Fill { rule: Fill::EvenOdd, .. }))
            .count();
        assert_eq!(masks, 1, "exactly one even-odd mask fill");

        let clips_pushed = commands
            .iter()
            .filter(|command| matches!(command, Command::PushClip { .. }))
            .count();
        let clips_popped = commands
            .iter()
            .filter(|command| matches!(command, Command::PopClip))
            .count();
        assert_eq!((clips_pushed, clips_popped), (1, 1), "clip is balanced");

        let transforms_pushed = commands
            .iter()
            .position(|command| matches!(command, Command::PushTransform { .. }));
        let transforms_popped = commands
            .iter()
            .position(|command| matches!(command, Command::PopTransform));
        assert!(
            transforms_pushed.expect("zoom pushed") < transforms_popped.expect("zoom popped"),
            "transform is balanced"
        );
    }

    #[test]
    fn selection_over_empty_data_degrades_to_the_grid() {
        let recording = rendered(&[0.0; 5], Some(2), None);
        assert_eq!(fills(&recording), 36, "no mask or overlay without a curve");
    }

    #[test]
    fn magnified_zoom_scales_about_the_center() {
        let config = ChartConfig::default();
        let recording = rendered(&REFERENCE_SCORES, Some(0), None);
        let zoom = recording.commands().iter().find_map(|command| match command {
            Command::PushTransform { transform } => Some(*transform),
            _ => None,
        });
        let zoom = zoom.expect("magnified pass pushes its zoom");
        // The chart center is the transform's fixed point.
        let mapped = zoom * config.center;
        assert!((mapped - config.center).hypot() < 1e-9);
    }

    #[test]
    fn highlighted_bloom_gains_weight_and_glow() {
        let config = ChartConfig::default();
        let mut recording = Recording::new();
        draw_bloom(&mut recording, &config, &REFERENCE_SCORES, true);

        let style = recording.commands().iter().find_map(|command| match command {
            Command::Stroke { style, .. } => Some(style.clone()),
            _ => None,
        });
        let style = style.expect("bloom strokes its outline");
        assert_eq!(style.width, 3.0);
        let glow = style.glow.expect("highlighted stroke glows");
        assert_eq!(glow.radius, 20.0);

        let fill_alpha = recording.commands().iter().find_map(|command| match command {
            Command::Fill {
                brush: Brush::Solid(color),
                ..
            } => Some(color.components[3]),
            _ => None,
        });
        let alpha = fill_alpha.expect("bloom fills its interior");
        assert!((alpha - 0.7).abs() < 1e-6);
    }

    #[test]
    fn plain_bloom_uses_half_alpha_and_thin_stroke() {
        let config = ChartConfig::default();
        let mut recording = Recording::new();
        draw_bloom(&mut recording, &config, &REFERENCE_SCORES, false);

        let style = recording.commands().iter().find_map(|command| match command {
            Command::Stroke { style, .. } => Some(style.clone()),
            _ => None,
        });
        let style = style.expect("bloom strokes its outline");
        assert_eq!(style.width, 2.0);
        assert!(style.glow.is_none());
    }

    #[test]
    fn short_score_slices_read_as_zero() {
        // Three scores for five sectors: the two missing sectors score 0
        // and the chart still renders a closed curve.
        let recording = rendered(&[3.0, 7.0, 5.0], None, None);
        assert_eq!(fills(&recording), 37);
    }
}

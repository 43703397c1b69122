// Copyright 2025 the Floret Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing-surface abstraction and a command-recording implementation.

use alloc::vec::Vec;

use kurbo::{Affine, BezPath};
use peniko::{Brush, Color, Fill};

/// Stroke parameters for a [`Surface::stroke`] call.
///
/// This deliberately stays minimal: the chart only ever strokes with a
/// width and, for the highlighted curve, a soft glow. Joins, caps, and
/// dashing are left to the backend's defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke width in surface units.
    pub width: f64,
    /// Optional glow behind the stroke.
    pub glow: Option<Glow>,
}

impl StrokeStyle {
    /// A plain stroke of the given width.
    pub const fn new(width: f64) -> Self {
        Self { width, glow: None }
    }

    /// Adds a glow to the stroke.
    pub fn with_glow(mut self, color: Color, radius: f64) -> Self {
        self.glow = Some(Glow { color, radius });
        self
    }
}

/// A soft shadow drawn behind a stroke, matching the surface contract's
/// shadow/glow stroke effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    /// Glow color, usually the stroke color at full alpha.
    pub color: Color,
    /// Blur radius in surface units.
    pub radius: f64,
}

/// A 2D drawing surface of fixed logical size.
///
/// The renderer issues every pass through this trait. Implementations map
/// the calls onto a concrete backend (an immediate-mode canvas, a display
/// list, a rasterizer). Clip and transform calls nest; each `push` must be
/// balanced by the matching `pop`, and the renderer always leaves a
/// surface balanced when a pass returns.
pub trait Surface {
    /// Fills `path` with `brush` under the given fill rule.
    fn fill(&mut self, path: &BezPath, brush: &Brush, rule: Fill);

    /// Strokes `path` with `brush`.
    fn stroke(&mut self, path: &BezPath, brush: &Brush, style: &StrokeStyle);

    /// Intersects the current clip region with `path`.
    fn push_clip(&mut self, path: &BezPath);

    /// Restores the clip region active before the matching
    /// [`Surface::push_clip`].
    fn pop_clip(&mut self);

    /// Prepends `transform` to the current transform.
    fn push_transform(&mut self, transform: Affine);

    /// Restores the transform active before the matching
    /// [`Surface::push_transform`].
    fn pop_transform(&mut self);
}

/// One recorded surface call.
#[derive(Clone, Debug)]
pub enum Command {
    /// A [`Surface::fill`] call.
    Fill {
        /// Filled path.
        path: BezPath,
        /// Fill paint.
        brush: Brush,
        /// Fill rule.
        rule: Fill,
    },
    /// A [`Surface::stroke`] call.
    Stroke {
        /// Stroked path.
        path: BezPath,
        /// Stroke paint.
        brush: Brush,
        /// Stroke parameters.
        style: StrokeStyle,
    },
    /// A [`Surface::push_clip`] call.
    PushClip {
        /// Clip path.
        path: BezPath,
    },
    /// A [`Surface::pop_clip`] call.
    PopClip,
    /// A [`Surface::push_transform`] call.
    PushTransform {
        /// Pushed transform.
        transform: Affine,
    },
    /// A [`Surface::pop_transform`] call.
    PopTransform,
}

/// A [`Surface`] that records every call as a [`Command`].
///
/// Used by the unit tests to assert pass structure, and usable by hosts
/// whose backend wants a retained command list rather than immediate
/// calls.
#[derive(Clone, Debug, Default)]
pub struct Recording {
    commands: Vec<Command>,
}

impl Recording {
    /// An empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded commands, oldest first.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Drops all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for Recording {
    fn fill(&mut self, path: &BezPath, brush: &Brush, rule: Fill) {
        self.commands.push(Command::Fill {
            path: path.clone(),
            brush: brush.clone(),
            rule,
        });
    }

    fn stroke(&mut self, path: &BezPath, brush: &Brush, style: &StrokeStyle) {
        self.commands.push(Command::Stroke {
            path: path.clone(),
            brush: brush.clone(),
            style: style.clone(),
        });
    }

    fn push_clip(&mut self, path: &BezPath) {
        self.commands.push(Command::PushClip { path: path.clone() });
    }

    fn pop_clip(&mut self) {
        self.commands.push(Command::PopClip);
    }

    fn push_transform(&mut self, transform: Affine) {
        self.commands.push(Command::PushTransform { transform });
    }

    fn pop_transform(&mut self) {
        self.commands.push(Command::PopTransform);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    #[test]
    fn recording_preserves_call_order() {
        let mut recording = Recording::new();
        let mut path = BezPath::new();
        path.move_to(Point::ZERO);
        path.line_to(Point::new(10.0, 0.0));

        let brush = Brush::Solid(Color::from_rgb8(10, 20, 30));
        recording.push_clip(&path);
        recording.stroke(&path, &brush, &StrokeStyle::new(2.0));
        recording.pop_clip();

        let commands = recording.commands();
        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], Command::PushClip { .. }));
        assert!(matches!(commands[1], Command::Stroke { .. }));
        assert!(matches!(commands[2], Command::PopClip));
    }

    #[test]
    fn glow_rides_on_the_stroke_style() {
        let glow_color = Color::from_rgb8(255, 0, 0);
        let style = StrokeStyle::new(3.0).with_glow(glow_color, 20.0);
        assert_eq!(style.width, 3.0);
        let glow = style.glow.expect("glow was attached");
        assert_eq!(glow.radius, 20.0);
    }
}

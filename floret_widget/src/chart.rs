// Copyright 2025 the Floret Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The chart controller: modes, pointer routing, and drawing.

use alloc::vec::Vec;

use floret_geom::ChartConfig;
use floret_scene::{Frame, Surface, render};
use kurbo::Point;
use smallvec::SmallVec;

use crate::damage::Damage;
use crate::dimension::Dimension;
use crate::hover::{HoverState, Tooltip};
use crate::notice::{Notice, NoticeQueue};

/// How the chart presents and responds to input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    /// Hover feedback across the whole disk; clicks resolve to
    /// [`ClickAction::Select`] for the host.
    #[default]
    Overview,
    /// A host-selected sector is magnified and the rest dimmed. With no
    /// selection yet, hover still previews sectors and clicks enqueue
    /// notices.
    Focus,
}

/// What a click resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickAction {
    /// Overview click on a sector; the host reacts (its callback seam).
    Select(usize),
    /// Focus-without-selection click; a [`Notice`] with this id was
    /// enqueued.
    Noticed(u64),
    /// The click hit nothing actionable and was swallowed.
    Ignored,
}

/// The interactive chart widget core.
///
/// Owns the dimension data and every piece of transient interaction
/// state. All methods are synchronous; the host forwards pointer events
/// and timestamps, drains [`Chart::take_damage`] to schedule redraws, and
/// calls [`Chart::draw`] with its surface.
#[derive(Clone, Debug)]
pub struct Chart {
    config: ChartConfig,
    dimensions: Vec<Dimension>,
    scores: SmallVec<[f64; 8]>,
    mode: DisplayMode,
    highlight: Option<usize>,
    hover: HoverState,
    notices: NoticeQueue,
    damage: Damage,
}

impl Chart {
    /// An empty chart in overview mode.
    pub fn new(config: ChartConfig) -> Self {
        Self {
            config,
            dimensions: Vec::new(),
            scores: SmallVec::new(),
            mode: DisplayMode::Overview,
            highlight: None,
            hover: HoverState::new(),
            notices: NoticeQueue::new(),
            damage: Damage::all(),
        }
    }

    /// The layout constants this chart was built with.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// The current dimensions, in sector order.
    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    /// The dimension at `sector`, if present.
    pub fn dimension(&self, sector: usize) -> Option<&Dimension> {
        self.dimensions.get(sector)
    }

    /// The clamped scores, in sector order.
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// The current display mode.
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// The focused selection, if any.
    pub fn highlight(&self) -> Option<usize> {
        self.highlight
    }

    /// The hovered sector, if any.
    pub fn hovered(&self) -> Option<usize> {
        self.hover.current()
    }

    /// The tooltip for the hovered sector, if one is showing.
    ///
    /// Pair it with [`Chart::dimension`] for the descriptive metadata.
    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.hover.tooltip()
    }

    /// The live click notices, oldest first.
    pub fn notices(&self) -> &[Notice] {
        self.notices.notices()
    }

    /// Whether pointer input currently does anything.
    ///
    /// True in overview mode and in focus mode until a selection is made;
    /// a focused selection suppresses pointer input entirely.
    pub fn is_interactive(&self) -> bool {
        match self.mode {
            DisplayMode::Overview => true,
            DisplayMode::Focus => self.highlight.is_none(),
        }
    }

    /// Replaces the dimension data.
    ///
    /// Scores are clamped into `[0, max_score]` on the way in. Order is
    /// significant: the position in `dimensions` is the sector index. Use
    /// [`crate::scores_by_name`] first if the source data is unordered.
    pub fn set_dimensions(&mut self, mut dimensions: Vec<Dimension>) {
        for dimension in &mut dimensions {
            dimension.score = dimension.score.min(self.config.max_score);
        }
        self.scores = dimensions
            .iter()
            .map(|dimension| f64::from(dimension.score))
            .collect();
        self.dimensions = dimensions;
        self.damage.insert(Damage::SCORES);
    }

    /// Sets one dimension's score, clamped into range.
    ///
    /// Unknown sector indices are ignored rather than treated as errors.
    pub fn set_score(&mut self, sector: usize, score: u8) {
        let Some(dimension) = self.dimensions.get_mut(sector) else {
            return;
        };
        let clamped = score.min(self.config.max_score);
        if dimension.score == clamped {
            return;
        }
        dimension.score = clamped;
        self.scores[sector] = f64::from(clamped);
        self.damage.insert(Damage::SCORES);
    }

    /// Switches the display mode.
    ///
    /// Transient hover state belongs to the old mode's interaction rules,
    /// so it is reset on a real switch.
    pub fn set_mode(&mut self, mode: DisplayMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.damage.insert(Damage::MODE);
        if self.hover.clear() {
            self.damage.insert(Damage::HOVER);
        }
    }

    /// Sets or clears the focused selection.
    ///
    /// Out-of-range indices degrade to "no selection". Making a selection
    /// clears hover state, since a focused selection suppresses pointer
    /// input. Only meaningful in [`DisplayMode::Focus`]; overview
    /// rendering never reads the selection.
    pub fn set_highlight(&mut self, highlight: Option<usize>) {
        let highlight = highlight.filter(|sector| *sector < self.config.sectors);
        if self.highlight == highlight {
            return;
        }
        self.highlight = highlight;
        self.damage.insert(Damage::HIGHLIGHT);
        if highlight.is_some() && self.hover.clear() {
            self.damage.insert(Damage::HOVER);
        }
    }

    /// Routes a pointer move.
    ///
    /// Runs the hit test and compare-and-swap updates the hover state.
    /// Returns `true` when the hovered sector changed. Suppressed while a
    /// focused selection is active.
    pub fn on_pointer_move(&mut self, pos: Point) -> bool {
        if !self.is_interactive() {
            return false;
        }
        let sector = self.config.hit_test(pos);
        let changed = self.hover.update(sector, &self.config);
        if changed {
            self.damage.insert(Damage::HOVER);
        }
        changed
    }

    /// Routes a pointer leave, clearing hover and tooltip.
    ///
    /// Returns `true` when there was anything to clear.
    pub fn on_pointer_leave(&mut self) -> bool {
        let changed = self.hover.clear();
        if changed {
            self.damage.insert(Damage::HOVER);
        }
        changed
    }

    /// Routes a click at `pos`, stamped `now` in milliseconds.
    ///
    /// Overview clicks on the disk resolve to [`ClickAction::Select`];
    /// focus clicks with no selection enqueue a notice; everything else is
    /// ignored. The hit test itself never fails, so a click outside the
    /// disk is simply [`ClickAction::Ignored`].
    pub fn on_click(&mut self, pos: Point, now: u64) -> ClickAction {
        if !self.is_interactive() {
            return ClickAction::Ignored;
        }
        let Some(sector) = self.config.hit_test(pos) else {
            return ClickAction::Ignored;
        };

        match self.mode {
            DisplayMode::Overview => ClickAction::Select(sector),
            DisplayMode::Focus => {
                let id = self.notices.push(sector, now);
                self.damage.insert(Damage::NOTICES);
                ClickAction::Noticed(id)
            }
        }
    }

    /// Advances time-based state to `now` milliseconds.
    ///
    /// Fades and expires notices. Returns `true` when anything changed.
    pub fn tick(&mut self, now: u64) -> bool {
        let changed = self.notices.tick(now);
        if changed {
            self.damage.insert(Damage::NOTICES);
        }
        changed
    }

    /// Drains the accumulated damage set.
    ///
    /// A non-empty result means the chart should be redrawn (and, per
    /// flag, any coupled host chrome refreshed).
    pub fn take_damage(&mut self) -> Damage {
        let damage = self.damage;
        self.damage = Damage::empty();
        damage
    }

    /// Replays the full pass sequence onto `surface`.
    ///
    /// The frame honors the mode rules: overview never forwards the
    /// selection, and the hover wash only applies while the chart is
    /// interactive.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let highlight = match self.mode {
            DisplayMode::Overview => None,
            DisplayMode::Focus => self.highlight,
        };
        let hover = if self.is_interactive() {
            self.hover.current()
        } else {
            None
        };

        let frame = Frame {
            config: &self.config,
            scores: &self.scores,
            highlight,
            hover,
        };
        render(surface, &frame);
    }
}

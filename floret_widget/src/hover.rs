// Copyright 2025 the Floret Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover and tooltip state with compare-and-swap updates.

use floret_geom::ChartConfig;
use kurbo::Point;

/// Tooltip placement for the hovered sector.
///
/// The anchor point comes from the sector's center angle at the tooltip
/// radius; the host positions and styles the actual tooltip around it and
/// reads the dimension metadata off the chart by `sector` index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tooltip {
    /// Index of the hovered sector.
    pub sector: usize,
    /// Anchor point in surface coordinates.
    pub position: Point,
}

/// Hovered-sector state.
///
/// [`HoverState::update`] only mutates when the incoming sector actually
/// differs from the current one, so redundant pointer-move events neither
/// flicker the tooltip nor schedule redraws.
#[derive(Clone, Debug, Default)]
pub struct HoverState {
    current: Option<usize>,
    tooltip: Option<Tooltip>,
}

impl HoverState {
    /// No sector hovered.
    pub fn new() -> Self {
        Self::default()
    }

    /// The hovered sector, if any.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// The tooltip for the hovered sector, if one is showing.
    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    /// Applies a hit-test result.
    ///
    /// Returns `true` when the hovered sector changed (including to or
    /// from "none"), `false` when the event was redundant. On a change to
    /// a real sector the tooltip moves to that sector's anchor; on a
    /// change to "none" it hides.
    pub fn update(&mut self, sector: Option<usize>, config: &ChartConfig) -> bool {
        if sector == self.current {
            return false;
        }

        self.current = sector;
        self.tooltip = sector.map(|index| Tooltip {
            sector: index,
            position: config.tooltip_anchor(index),
        });
        true
    }

    /// Clears hover and tooltip, as on pointer-leave.
    ///
    /// Returns `true` when there was anything to clear.
    pub fn clear(&mut self) -> bool {
        if self.current.is_none() && self.tooltip.is_none() {
            return false;
        }
        self.current = None;
        self.tooltip = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redundant_updates_are_rejected() {
        let config = ChartConfig::default();
        let mut hover = HoverState::new();

        assert!(hover.update(Some(1), &config));
        assert!(!hover.update(Some(1), &config), "same sector is a no-op");
        assert!(hover.update(Some(3), &config));
        assert!(hover.update(None, &config));
        assert!(!hover.update(None, &config), "still nothing hovered");
    }

    #[test]
    fn tooltip_follows_the_hovered_sector() {
        let config = ChartConfig::default();
        let mut hover = HoverState::new();

        hover.update(Some(0), &config);
        let tooltip = hover.tooltip().expect("tooltip shows on hover");
        assert_eq!(tooltip.sector, 0);
        assert_eq!(tooltip.position, config.tooltip_anchor(0));

        hover.update(None, &config);
        assert!(hover.tooltip().is_none(), "tooltip hides off-sector");
    }

    #[test]
    fn clear_resets_everything_once() {
        let config = ChartConfig::default();
        let mut hover = HoverState::new();

        hover.update(Some(2), &config);
        assert!(hover.clear());
        assert_eq!(hover.current(), None);
        assert!(!hover.clear(), "second clear is a no-op");
    }
}

// Copyright 2025 the Floret Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Redraw damage flags.

bitflags::bitflags! {
    /// What changed since the host last drained damage.
    ///
    /// Any non-empty set means the chart should be redrawn; the individual
    /// bits let hosts couple cheaper reactions (for example, only moving a
    /// DOM tooltip on [`Damage::HOVER`]) to specific changes. Rendering
    /// itself always replays the full pass sequence.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Damage: u8 {
        /// One or more dimension scores changed.
        const SCORES    = 0b0000_0001;
        /// The display mode changed.
        const MODE      = 0b0000_0010;
        /// The focused selection changed.
        const HIGHLIGHT = 0b0000_0100;
        /// The hovered sector or tooltip changed.
        const HOVER     = 0b0000_1000;
        /// The notice queue changed.
        const NOTICES   = 0b0001_0000;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_accumulates_and_reports() {
        let mut damage = Damage::empty();
        damage.insert(Damage::SCORES);
        damage.insert(Damage::HOVER);
        assert!(damage.contains(Damage::SCORES | Damage::HOVER));
        assert!(!damage.contains(Damage::MODE));
    }
}

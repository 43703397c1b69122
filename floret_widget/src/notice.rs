// Copyright 2025 the Floret Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ephemeral click notices for focus mode.
//!
//! When focus mode has no selection, clicking a sector produces a short
//! lived notice instead of a selection. A notice is displayed as-is for
//! [`NOTICE_FADE_MS`], flagged `fade_out` (so the host can run its exit
//! transition), and dropped [`NOTICE_LINGER_MS`] later.
//!
//! Time is injected: the queue never reads a clock and owns no timers.
//! Hosts pass the same millisecond timestamps they already stamp events
//! with and call [`NoticeQueue::tick`] from their frame or timer loop.
//! Dropping the queue drops the notices; there is nothing to cancel.

use alloc::vec::Vec;

/// Milliseconds a notice is displayed before it starts fading.
pub const NOTICE_FADE_MS: u64 = 3000;

/// Milliseconds a fading notice lingers before removal.
pub const NOTICE_LINGER_MS: u64 = 300;

/// One ephemeral click notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Queue-unique identity, usable as a presentation key.
    pub id: u64,
    /// Sector that was clicked.
    pub sector: usize,
    /// Set once the notice has outlived its display window; the host
    /// should be running its fade transition.
    pub fade_out: bool,
    born: u64,
}

/// A timestamp-driven queue of click notices.
#[derive(Clone, Debug, Default)]
pub struct NoticeQueue {
    entries: Vec<Notice>,
    next_id: u64,
}

impl NoticeQueue {
    /// An empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a notice for `sector` at time `now`, returning its id.
    pub fn push(&mut self, sector: usize, now: u64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Notice {
            id,
            sector,
            fade_out: false,
            born: now,
        });
        id
    }

    /// Advances the queue to time `now`.
    ///
    /// Flags notices older than [`NOTICE_FADE_MS`] and removes those older
    /// than the fade window plus [`NOTICE_LINGER_MS`]. Returns `true` when
    /// anything changed. Timestamps from before a notice was born are
    /// treated as "no time has passed".
    pub fn tick(&mut self, now: u64) -> bool {
        let mut changed = false;

        for notice in &mut self.entries {
            let age = now.saturating_sub(notice.born);
            if !notice.fade_out && age >= NOTICE_FADE_MS {
                notice.fade_out = true;
                changed = true;
            }
        }

        let before = self.entries.len();
        self.entries
            .retain(|notice| now.saturating_sub(notice.born) < NOTICE_FADE_MS + NOTICE_LINGER_MS);
        changed || self.entries.len() != before
    }

    /// The live notices, oldest first.
    pub fn notices(&self) -> &[Notice] {
        &self.entries
    }

    /// Whether the queue holds no notices.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops all notices immediately.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_keep_distinct_ids() {
        let mut queue = NoticeQueue::new();
        let a = queue.push(1, 0);
        let b = queue.push(1, 5);
        assert_ne!(a, b);
        assert_eq!(queue.notices().len(), 2);
    }

    #[test]
    fn lifecycle_runs_fresh_then_fading_then_gone() {
        let mut queue = NoticeQueue::new();
        queue.push(2, 1_000);

        assert!(!queue.tick(1_500), "young notices are untouched");
        assert!(!queue.notices()[0].fade_out);

        assert!(queue.tick(1_000 + NOTICE_FADE_MS), "fade flag flips");
        assert!(queue.notices()[0].fade_out);

        assert!(
            queue.tick(1_000 + NOTICE_FADE_MS + NOTICE_LINGER_MS),
            "notice is removed after lingering"
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn entries_age_independently() {
        let mut queue = NoticeQueue::new();
        queue.push(0, 0);
        queue.push(1, 2_000);

        queue.tick(NOTICE_FADE_MS);
        let notices = queue.notices();
        assert!(notices[0].fade_out, "older notice fades first");
        assert!(!notices[1].fade_out, "newer notice is still fresh");

        queue.tick(2_000 + NOTICE_FADE_MS + NOTICE_LINGER_MS);
        assert!(queue.is_empty());
    }

    #[test]
    fn earlier_timestamps_do_not_expire_notices() {
        let mut queue = NoticeQueue::new();
        queue.push(3, 10_000);
        assert!(!queue.tick(0), "clock skew leaves the notice alone");
        assert_eq!(queue.notices().len(), 1);
    }
}

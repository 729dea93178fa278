use crate::{INITIAL_RANGE_SIZE, RANGE_GROWTH_STEP};

use serde::Serialize;

/// Gamification level derived from a point total. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelInfo {
    pub level: u32,
    pub range_start: u64,
    pub range_end: u64,
    pub range_size: u64,
    pub points_into_level: u64,
}

impl LevelInfo {
    /// Locate the level containing `points`.
    ///
    /// Ranges start at 30 points; after each level the range grows by an
    /// amount that itself grows by 10, giving sizes 30, 30, 40, 60, 90, ...
    /// `range_end` strictly increases, so the loop always terminates.
    ///
    /// The level whose end would pass `u64::MAX` is the last one: its range
    /// is capped at `u64::MAX`, which it then includes.
    pub fn for_points(points: u64) -> Self {
        let mut range_size = INITIAL_RANGE_SIZE;
        let mut range_growth: u64 = 0;
        let mut range_start: u64 = 0;
        let mut level: u32 = 1;

        loop {
            let Some(range_end) = range_start.checked_add(range_size) else {
                return Self::in_range(level, range_start, u64::MAX, points);
            };
            if points < range_end {
                return Self::in_range(level, range_start, range_end, points);
            }
            range_start = range_end;
            range_size = range_size.saturating_add(range_growth);
            range_growth = range_growth.saturating_add(RANGE_GROWTH_STEP);
            level = level.saturating_add(1);
        }
    }

    fn in_range(level: u32, range_start: u64, range_end: u64, points: u64) -> Self {
        Self {
            level,
            range_start,
            range_end,
            range_size: range_end - range_start,
            points_into_level: points - range_start,
        }
    }

    /// Progress through the level in `[0.0, 1.0)`
    pub fn progress(&self) -> f64 {
        self.points_into_level as f64 / self.range_size as f64
    }
}

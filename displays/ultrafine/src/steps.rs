//! Step tables for the backlight register.
//!
//! The hardware only accepts a fixed set of register values, spaced roughly
//! geometrically so each step reads as a similar perceptual change. Two
//! granularities exist: the full 65-entry fine table and a coarse table
//! holding every fourth fine entry.

/// Ordered table of valid backlight register values.
///
/// Tables are strictly increasing and hold at least two entries, checked at
/// construction so the step queries never see a degenerate table.
#[derive(Debug, Clone, Copy)]
pub struct StepTable(&'static [u16]);

impl StepTable {
    pub const fn new(steps: &'static [u16]) -> Self {
        assert!(steps.len() >= 2, "step table needs at least two entries");
        let mut i = 1;
        while i < steps.len() {
            assert!(
                steps[i - 1] < steps[i],
                "step table must be strictly increasing"
            );
            i += 1;
        }
        Self(steps)
    }

    /// Step up from `val` to the next table entry.
    ///
    /// The search narrows `[start, end]` until the bounds are adjacent and
    /// returns the upper bound, so the result saturates at the table maximum
    /// and values below the first entry resolve to the second entry.
    pub fn next(&self, val: u16) -> u16 {
        let mut start = 0;
        let mut end = self.0.len() - 1;
        while start + 1 < end {
            let mid = start + (end - start) / 2;
            if self.0[mid] > val {
                end = mid;
            } else {
                start = mid;
            }
        }
        self.0[end]
    }

    /// Step down from `val` to the previous table entry, returning the lower
    /// bound of the final window. Saturates at the table minimum.
    pub fn prev(&self, val: u16) -> u16 {
        let mut start = 0;
        let mut end = self.0.len() - 1;
        while start + 1 < end {
            let mid = start + (end - start) / 2;
            if self.0[mid] >= val {
                end = mid;
            } else {
                start = mid;
            }
        }
        self.0[start]
    }

    /// Closest table entry to `val`. Ties resolve to the lower entry.
    pub fn nearest(&self, val: u16) -> u16 {
        let mut best = self.0[0];
        for &step in self.0 {
            if step.abs_diff(val) < best.abs_diff(val) {
                best = step;
            }
        }
        best
    }

    pub fn as_slice(&self) -> &'static [u16] {
        self.0
    }

    pub fn min(&self) -> u16 {
        self.0[0]
    }

    pub fn max(&self) -> u16 {
        self.0[self.0.len() - 1]
    }
}

/// Fine-grained table, one entry per `]`/`[` keypress. Values double about
/// every eight entries.
pub static SMALL_STEPS: StepTable = StepTable::new(&[
    0x0190, 0x01af, 0x01d2, 0x01f7, 0x021f, 0x024a, 0x0279, 0x02ac, 0x02e2, 0x031d, 0x035c, 0x03a1,
    0x03eb, 0x043b, 0x0491, 0x04ee, 0x0553, 0x05c0, 0x0635, 0x06b3, 0x073c, 0x07d0, 0x086f, 0x091b,
    0x09d5, 0x0a9d, 0x0b76, 0x0c60, 0x0d5c, 0x0e6c, 0x0f93, 0x10d0, 0x1227, 0x1399, 0x1529, 0x16d9,
    0x18aa, 0x1aa2, 0x1cc1, 0x1f0b, 0x2184, 0x2430, 0x2712, 0x2a2e, 0x2d8b, 0x312b, 0x3516, 0x3951,
    0x3de2, 0x42cf, 0x4822, 0x4de1, 0x5415, 0x5ac8, 0x6203, 0x69d2, 0x7240, 0x7b5a, 0x852d, 0x8fc9,
    0x9b3d, 0xa79b, 0xb4f5, 0xc35f, 0xd2f0,
]);

/// Coarse table, every fourth entry of [`SMALL_STEPS`].
pub static BIG_STEPS: StepTable = StepTable::new(&[
    0x0190, 0x021f, 0x02e2, 0x03eb, 0x0553, 0x073c, 0x09d5, 0x0d5c, 0x1227, 0x18aa, 0x2184, 0x2d8b,
    0x3de2, 0x5415, 0x7240, 0x9b3d, 0xd2f0,
]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{MAX_BRIGHTNESS, MIN_BRIGHTNESS};

    #[test]
    fn tables_span_the_register_range() {
        for table in [&SMALL_STEPS, &BIG_STEPS] {
            assert_eq!(table.min(), MIN_BRIGHTNESS);
            assert_eq!(table.max(), MAX_BRIGHTNESS);
            for pair in table.as_slice().windows(2) {
                assert!(pair[0] < pair[1]);
            }
        }
        assert_eq!(SMALL_STEPS.as_slice().len(), 65);
        assert_eq!(BIG_STEPS.as_slice().len(), 17);
    }

    #[test]
    fn coarse_entries_are_fine_entries() {
        for step in BIG_STEPS.as_slice() {
            assert!(SMALL_STEPS.as_slice().contains(step), "{step:#06x}");
        }
    }

    #[test]
    fn results_are_always_table_members() {
        for table in [&SMALL_STEPS, &BIG_STEPS] {
            let members = table.as_slice();
            for val in (0..=u16::MAX).step_by(997).chain([0, 1, 0x0190, 0xd2f0, u16::MAX]) {
                assert!(members.contains(&table.next(val)));
                assert!(members.contains(&table.prev(val)));
                assert!(members.contains(&table.nearest(val)));
            }
        }
    }

    #[test]
    fn walking_up_from_the_minimum() {
        let mut val = MIN_BRIGHTNESS;
        let mut walk = Vec::new();
        for _ in 0..5 {
            val = BIG_STEPS.next(val);
            walk.push(val);
        }
        assert_eq!(walk, [0x021f, 0x02e2, 0x03eb, 0x0553, 0x073c]);
    }

    #[test]
    fn next_saturates_at_the_maximum() {
        assert_eq!(BIG_STEPS.next(MAX_BRIGHTNESS), MAX_BRIGHTNESS);
        assert_eq!(SMALL_STEPS.next(MAX_BRIGHTNESS), MAX_BRIGHTNESS);
        // anything at or above the second-to-last entry lands on the last
        assert_eq!(BIG_STEPS.next(0x9b3d), MAX_BRIGHTNESS);
        assert_eq!(BIG_STEPS.next(0xc000), MAX_BRIGHTNESS);
    }

    #[test]
    fn prev_saturates_at_the_minimum() {
        assert_eq!(SMALL_STEPS.prev(MIN_BRIGHTNESS), MIN_BRIGHTNESS);
        assert_eq!(BIG_STEPS.prev(MIN_BRIGHTNESS), MIN_BRIGHTNESS);
        assert_eq!(SMALL_STEPS.prev(0x0100), MIN_BRIGHTNESS);
        assert_eq!(SMALL_STEPS.prev(0), MIN_BRIGHTNESS);
    }

    #[test]
    fn next_below_the_first_entry_returns_the_second() {
        assert_eq!(BIG_STEPS.next(0x0100), 0x021f);
        assert_eq!(SMALL_STEPS.next(0), 0x01af);
    }

    #[test]
    fn walking_down_reverses_walking_up() {
        let mut val = 0x073c;
        for expected in [0x0553, 0x03eb, 0x02e2, 0x021f, 0x0190] {
            val = BIG_STEPS.prev(val);
            assert_eq!(val, expected);
        }
    }

    #[test]
    fn nearest_snaps_to_the_closest_entry() {
        assert_eq!(SMALL_STEPS.nearest(0), MIN_BRIGHTNESS);
        assert_eq!(SMALL_STEPS.nearest(u16::MAX), MAX_BRIGHTNESS);
        assert_eq!(SMALL_STEPS.nearest(0x0190), 0x0190);
        assert_eq!(SMALL_STEPS.nearest(0x01b0), 0x01af);
        assert_eq!(BIG_STEPS.nearest(0x0300), 0x02e2);
    }
}

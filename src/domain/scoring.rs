//! Weighted pro/con scoring.
//!
//! Scores are derived from the item sequence on every read and never
//! stored.

use crate::domain::list::{Item, ItemKind};
use serde::Serialize;
use std::fmt;

/// Tilt of a list with no weight on either side.
pub const NEUTRAL_TILT: f64 = 50.0;

/// Aggregate weight per side and the resulting tilt.
///
/// `tilt` is the pro share of total weight on a 0..=100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Score {
    pub pro: u32,
    pub con: u32,
    pub total: u32,
    pub tilt: f64,
}

impl Score {
    /// Scores an item sequence.
    pub fn of(items: &[Item]) -> Self {
        let (pro, con) = items.iter().fold((0u32, 0u32), |(pro, con), item| {
            let w = u32::from(item.weight().value());
            match item.kind() {
                ItemKind::Pro => (pro + w, con),
                ItemKind::Con => (pro, con + w),
            }
        });
        let total = pro + con;
        let tilt = if total == 0 {
            NEUTRAL_TILT
        } else {
            f64::from(pro) / f64::from(total) * 100.0
        };
        Self {
            pro,
            con,
            total,
            tilt,
        }
    }

    /// Which way the weights point.
    pub fn leaning(&self) -> Leaning {
        // Integer comparison; exact ties land on 50.0.
        match self.pro.cmp(&self.con) {
            std::cmp::Ordering::Greater => Leaning::Yes(self.tilt.round() as u8),
            std::cmp::Ordering::Less => Leaning::No((100.0 - self.tilt).round() as u8),
            std::cmp::Ordering::Equal => Leaning::Undecided,
        }
    }
}

/// Direction and strength of a score, as a rounded percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leaning {
    Yes(u8),
    No(u8),
    Undecided,
}

impl fmt::Display for Leaning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Leaning::Yes(pct) => write!(f, "leaning yes ({}%)", pct),
            Leaning::No(pct) => write!(f, "leaning no ({}%)", pct),
            Leaning::Undecided => f.write_str("undecided"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::list::test_support::item;
    use proptest::prelude::*;

    #[test]
    fn empty_list_is_neutral() {
        let score = Score::of(&[]);
        assert_eq!(score.total, 0);
        assert_eq!(score.tilt, NEUTRAL_TILT);
        assert_eq!(score.leaning(), Leaning::Undecided);
    }

    #[test]
    fn weights_sum_per_side() {
        let items = vec![item("a", "pro", 8), item("b", "pro", 2), item("c", "con", 5)];
        let score = Score::of(&items);
        assert_eq!(score.pro, 10);
        assert_eq!(score.con, 5);
        assert_eq!(score.total, 15);
    }

    #[test]
    fn two_to_one_leans_yes_67() {
        let items = vec![item("a", "pro", 8), item("b", "con", 4)];
        let score = Score::of(&items);
        assert_eq!(score.leaning(), Leaning::Yes(67));
        assert_eq!(score.leaning().to_string(), "leaning yes (67%)");
    }

    #[test]
    fn con_heavy_leans_no() {
        let items = vec![item("a", "pro", 1), item("b", "con", 3)];
        assert_eq!(Score::of(&items).leaning().to_string(), "leaning no (75%)");
    }

    #[test]
    fn equal_weights_are_undecided() {
        let items = vec![item("a", "pro", 6), item("b", "con", 6)];
        let score = Score::of(&items);
        assert_eq!(score.tilt, 50.0);
        assert_eq!(score.leaning(), Leaning::Undecided);
    }

    #[test]
    fn only_pros_is_full_yes() {
        let score = Score::of(&[item("a", "pro", 3)]);
        assert_eq!(score.tilt, 100.0);
        assert_eq!(score.leaning(), Leaning::Yes(100));
    }

    proptest! {
        #[test]
        fn tilt_stays_in_range(sides in prop::collection::vec((any::<bool>(), 1i64..=10), 0..40)) {
            let items: Vec<Item> = sides
                .iter()
                .enumerate()
                .map(|(i, (is_pro, w))| item(&i.to_string(), if *is_pro { "pro" } else { "con" }, *w))
                .collect();
            let score = Score::of(&items);
            prop_assert!((0.0..=100.0).contains(&score.tilt));
            prop_assert_eq!(score.total, score.pro + score.con);
        }

        #[test]
        fn leaning_agrees_with_side_totals(pro in 0u32..200, con in 0u32..200) {
            let total = pro + con;
            let tilt = if total == 0 { NEUTRAL_TILT } else { f64::from(pro) / f64::from(total) * 100.0 };
            let score = Score { pro, con, total, tilt };
            match score.leaning() {
                Leaning::Yes(pct) => prop_assert!(pro > con && pct >= 50),
                Leaning::No(pct) => prop_assert!(con > pro && pct >= 50),
                Leaning::Undecided => prop_assert_eq!(pro, con),
            }
        }
    }
}

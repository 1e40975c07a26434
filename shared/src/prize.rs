use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::format::format_currency;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prize {
    /// Whole dollars.
    pub amount: u64,
    #[serde(default)]
    pub label: Option<String>,
}

impl Prize {
    pub fn cash(amount: u64) -> Self {
        Self {
            amount,
            label: None,
        }
    }

    pub fn with_label(amount: u64, label: impl Into<String>) -> Self {
        Self {
            amount,
            label: Some(label.into()),
        }
    }

    pub fn display(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format_currency(self.amount as f64),
        }
    }
}

/// Rank to prize mapping. Ranks without an entry have no prize, which is distinct
/// from a zero prize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeTable {
    entries: BTreeMap<u32, Prize>,
}

impl PrizeTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Amounts for ranks 1, 2, 3, ... in order.
    pub fn from_amounts(amounts: &[u64]) -> Self {
        let entries = amounts
            .iter()
            .zip(1u32..)
            .map(|(amount, rank)| (rank, Prize::cash(*amount)))
            .collect();
        Self { entries }
    }

    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (u32, Prize)>,
    {
        Self {
            entries: pairs.into_iter().collect(),
        }
    }

    /// Exact-match lookup. `None` is the no-prize sentinel; zero and negative ranks
    /// always map to it.
    pub fn resolve(&self, rank: i64) -> Option<&Prize> {
        u32::try_from(rank)
            .ok()
            .filter(|rank| *rank >= 1)
            .and_then(|rank| self.entries.get(&rank))
    }

    /// Sum of every resolved prize over `ranks`; sentinel ranks contribute nothing.
    pub fn total_for<I>(&self, ranks: I) -> u64
    where
        I: IntoIterator<Item = i64>,
    {
        ranks
            .into_iter()
            .filter_map(|rank| self.resolve(rank))
            .map(|prize| prize.amount)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &Prize)> {
        self.entries.iter().map(|(rank, prize)| (*rank, prize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn podium() -> PrizeTable {
        PrizeTable::from_amounts(&[500, 200, 100])
    }

    #[test]
    fn test_resolve_exact_ranks() {
        let table = podium();
        assert_eq!(table.resolve(1), Some(&Prize::cash(500)));
        assert_eq!(table.resolve(3), Some(&Prize::cash(100)));
        assert_eq!(table.resolve(4), None);
    }

    #[test]
    fn test_resolve_is_total_over_integers() {
        let table = podium();
        for rank in [0, -5, i64::MIN, i64::MAX, i64::from(u32::MAX) + 1] {
            assert_eq!(table.resolve(rank), None, "rank {}", rank);
        }
        assert_eq!(PrizeTable::empty().resolve(1), None);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let table = podium();
        assert_eq!(table.resolve(2), table.resolve(2));
    }

    #[test]
    fn test_zero_prize_is_not_sentinel() {
        let table = PrizeTable::from_pairs([(1, Prize::cash(0))]);
        assert_eq!(table.resolve(1), Some(&Prize::cash(0)));
    }

    #[test]
    fn test_total_skips_sentinels() {
        let table = podium();
        assert_eq!(table.total_for([1, 2, 4]), 700);
        assert_eq!(table.total_for(Vec::new()), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Prize::cash(600).display(), "$600.00");
        assert_eq!(
            Prize::with_label(500, "$500 Cash + Special Role").display(),
            "$500 Cash + Special Role"
        );
    }
}

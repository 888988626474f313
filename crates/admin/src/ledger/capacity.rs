use crate::model::Variety;
use std::collections::BTreeMap;

/// How many flowers of each variety can be committed in total.
///
/// A variety without an entry is unknown to the ledger and admits nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockCapacity {
    limits: BTreeMap<Variety, u32>,
}

impl StockCapacity {
    /// An empty table: every variety is unknown.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table covering the whole catalogue.
    pub fn standard() -> Self {
        use Variety::*;
        [
            (AndreCitroen, 500),
            (Circuit, 300),
            (FirstStar, 400),
            (Laptop, 250),
            (WhiteMaster, 350),
            (TripleA, 300),
            (Supemodel, 200),
            (Tresor, 450),
            (StrongLove, 300),
            (StrongGold, 250),
            (Respectable, 200),
            (Montezuma, 150),
            (Columbus, 300),
            (Valdivia, 200),
        ]
        .into_iter()
        .collect()
    }

    pub fn with(mut self, variety: Variety, capacity: u32) -> Self {
        self.limits.insert(variety, capacity);
        self
    }

    pub fn get(&self, variety: Variety) -> Option<u32> {
        self.limits.get(&variety).copied()
    }

    /// Known varieties and their capacity, in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = (Variety, u32)> + '_ {
        self.limits.iter().map(|(v, c)| (*v, *c))
    }

    pub fn len(&self) -> usize {
        self.limits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }
}

impl FromIterator<(Variety, u32)> for StockCapacity {
    fn from_iter<I: IntoIterator<Item = (Variety, u32)>>(iter: I) -> Self {
        Self {
            limits: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_covers_the_catalogue() {
        let table = StockCapacity::standard();
        assert_eq!(table.len(), Variety::ALL.len());
        assert_eq!(table.get(Variety::Circuit), Some(300));
        assert_eq!(table.get(Variety::Montezuma), Some(150));
    }

    #[test]
    fn missing_entries_are_unknown() {
        let table = StockCapacity::new().with(Variety::Circuit, 10);
        assert_eq!(table.get(Variety::Circuit), Some(10));
        assert_eq!(table.get(Variety::Tresor), None);
    }
}

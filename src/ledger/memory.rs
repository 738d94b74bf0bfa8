use hashbrown::HashMap;

use crate::types::{CategoryTotal, EmissionDraft, EmissionRecord, RecordId};

use super::{EmissionLedger, LedgerResult, check_finite};

/// Non-durable ledger: an ordered record list plus a manual group-by.
#[derive(Debug)]
pub struct MemoryLedger {
    records: Vec<EmissionRecord>,
    next_id: RecordId,
}

impl Default for MemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryLedger {
    /// Creates an empty ledger whose first id is 1.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Number of records appended so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl EmissionLedger for MemoryLedger {
    fn initialize(&mut self) -> LedgerResult<()> {
        Ok(())
    }

    fn append(&mut self, draft: &EmissionDraft) -> LedgerResult<RecordId> {
        check_finite(draft)?;
        let id = self.next_id;
        self.next_id += 1;
        self.records.push(EmissionRecord::from_draft(id, draft.clone()));
        Ok(id)
    }

    fn totals_by_category(&self) -> LedgerResult<Vec<CategoryTotal>> {
        let mut pos: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<(&str, NeumaierSum)> = Vec::new();

        for rec in &self.records {
            let idx = *pos.entry(rec.category.as_str()).or_insert_with(|| {
                groups.push((rec.category.as_str(), NeumaierSum::default()));
                groups.len() - 1
            });
            groups[idx].1.add(rec.emission);
        }

        Ok(groups
            .into_iter()
            .map(|(category, sum)| CategoryTotal {
                category: category.to_string(),
                total: sum.total(),
            })
            .collect())
    }

    fn records(&self) -> LedgerResult<Vec<EmissionRecord>> {
        Ok(self.records.clone())
    }
}

/// Kahan-Babuska-Neumaier running sum, the same scheme SQLite's `SUM` uses
/// for REAL values, so both ledgers report bit-identical totals.
#[derive(Debug, Default, Clone, Copy)]
struct NeumaierSum {
    sum: f64,
    err: f64,
}

impl NeumaierSum {
    fn add(&mut self, value: f64) {
        let t = self.sum + value;
        if self.sum.abs() > value.abs() {
            self.err += (self.sum - t) + value;
        } else {
            self.err += (value - t) + self.sum;
        }
        self.sum = t;
    }

    fn total(&self) -> f64 {
        self.sum + self.err
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compensated_sum_recovers_lost_low_bits() {
        let mut naive = 0.0;
        let mut sum = NeumaierSum::default();
        for _ in 0..10 {
            naive += 0.1;
            sum.add(0.1);
        }
        assert_ne!(naive, 1.0);
        assert_eq!(sum.total(), 1.0);
    }
}

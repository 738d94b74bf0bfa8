//! Static emission factor table and the emission calculation.

use std::sync::LazyLock;

use hashbrown::HashMap;

/// Factor rows grouped by category, kg CO2 per unit of amount.
pub type FactorEntries = &'static [(&'static str, &'static [(&'static str, f64)])];

/// Built-in factors: transport per km, electricity per kWh, food per kg.
pub const STANDARD_FACTORS: FactorEntries = &[
    (
        "transport",
        &[("Car", 0.21), ("Bus", 0.11), ("Train", 0.05), ("Flight", 0.285)],
    ),
    ("electricity", &[("Electricity", 0.475)]),
    ("food", &[("Beef", 27.0), ("Chicken", 6.9), ("Vegetables", 2.0)]),
];

static STANDARD: LazyLock<FactorTable> =
    LazyLock::new(|| FactorTable::from_static(STANDARD_FACTORS));

/// Lookup failure for a (category, activity) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// The category or the activity under it is not in the table.
    NotFound {
        /// Requested category.
        category: String,
        /// Requested activity.
        activity: String,
    },
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalcError::NotFound { category, activity } => {
                write!(f, "no emission factor for {category}/{activity}")
            }
        }
    }
}

impl std::error::Error for CalcError {}

/// Immutable two-level factor lookup that remembers declaration order.
#[derive(Debug, Clone)]
pub struct FactorTable {
    by_category: HashMap<&'static str, HashMap<&'static str, f64>>,
    order: Vec<(&'static str, Vec<&'static str>)>,
}

impl FactorTable {
    /// Builds a table from static rows. Later duplicates overwrite earlier factors.
    pub fn from_static(entries: FactorEntries) -> Self {
        let mut by_category: HashMap<&'static str, HashMap<&'static str, f64>> = HashMap::new();
        let mut order: Vec<(&'static str, Vec<&'static str>)> = Vec::new();

        for (category, activities) in entries {
            let slot = by_category.entry(*category).or_default();
            let idx = match order.iter().position(|(c, _)| c == category) {
                Some(idx) => idx,
                None => {
                    order.push((*category, Vec::new()));
                    order.len() - 1
                }
            };
            for (activity, factor) in activities.iter() {
                if slot.insert(*activity, *factor).is_none() {
                    order[idx].1.push(*activity);
                }
            }
        }

        Self { by_category, order }
    }

    /// The built-in table, shared for the process lifetime.
    pub fn standard() -> &'static FactorTable {
        &STANDARD
    }

    /// Returns the factor for `category`/`activity`, if present.
    pub fn factor(&self, category: &str, activity: &str) -> Option<f64> {
        self.by_category.get(category)?.get(activity).copied()
    }

    /// Multiplies `amount` by the pair's factor. No rounding, no amount checks.
    pub fn compute(&self, category: &str, activity: &str, amount: f64) -> Result<f64, CalcError> {
        let factor = self
            .factor(category, activity)
            .ok_or_else(|| CalcError::NotFound {
                category: category.to_string(),
                activity: activity.to_string(),
            })?;
        Ok(amount * factor)
    }

    /// Category names in declaration order.
    pub fn categories(&self) -> Vec<&'static str> {
        self.order.iter().map(|(c, _)| *c).collect()
    }

    /// Activity names of `category` in declaration order.
    pub fn activities(&self, category: &str) -> Option<Vec<&'static str>> {
        self.order
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, activities)| activities.clone())
    }

    /// First declared activity of `category`.
    pub fn default_activity(&self, category: &str) -> Option<&'static str> {
        self.order
            .iter()
            .find(|(c, _)| *c == category)
            .and_then(|(_, activities)| activities.first().copied())
    }

    /// Returns true when `category` is declared.
    pub fn contains_category(&self, category: &str) -> bool {
        self.by_category.contains_key(category)
    }
}

/// [`FactorTable::compute`] against the built-in table.
pub fn compute(category: &str, activity: &str, amount: f64) -> Result<f64, CalcError> {
    FactorTable::standard().compute(category, activity, amount)
}

//! Fixed month labels and the per-month amount map used by yearly reports.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Three-letter English month labels, independent of locale.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

static LABEL_INDEX: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    MONTH_LABELS
        .iter()
        .enumerate()
        .map(|(index, label)| (*label, index))
        .collect()
});

/// The label for a zero-based month index. Panics on indexes past 11,
/// which only arise from caller contract violations.
pub fn month_label(month0: usize) -> &'static str {
    MONTH_LABELS[month0]
}

/// The zero-based index for a label, if it is one of [`MONTH_LABELS`].
pub fn month_index(label: &str) -> Option<usize> {
    LABEL_INDEX.get(label).copied()
}

/// Amounts bucketed by month for one calendar year.
///
/// Months with no matching records stay absent rather than zero so the
/// display layer can keep its two "no data" conventions apart (a literal
/// `0` on category rows, a dash on expense-type rows). Serializes as an
/// ordered `label -> amount` map containing only the present months.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlyBreakdown {
    amounts: [Option<f64>; 12],
}

impl MonthlyBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulates `amount` into the bucket for `month0`.
    pub fn add(&mut self, month0: usize, amount: f64) {
        let slot = &mut self.amounts[month0];
        *slot = Some(slot.unwrap_or(0.0) + amount);
    }

    pub fn amount(&self, month0: usize) -> Option<f64> {
        self.amounts[month0]
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.iter().all(Option::is_none)
    }

    /// Folds another breakdown into this one, bucket by bucket.
    pub fn merge(&mut self, other: &MonthlyBreakdown) {
        for (month0, amount) in other.labelled_indices() {
            self.add(month0, amount);
        }
    }

    /// Present entries as `(label, amount)` pairs in calendar order.
    pub fn labelled(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.labelled_indices()
            .map(|(month0, amount)| (month_label(month0), amount))
    }

    fn labelled_indices(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.amounts
            .iter()
            .enumerate()
            .filter_map(|(month0, amount)| amount.map(|value| (month0, value)))
    }
}

impl Serialize for MonthlyBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let present = self.labelled_indices().count();
        let mut map = serializer.serialize_map(Some(present))?;
        for (label, amount) in self.labelled() {
            map.serialize_entry(label, &amount)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for MonthlyBreakdown {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BreakdownVisitor;

        impl<'de> Visitor<'de> for BreakdownVisitor {
            type Value = MonthlyBreakdown;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of three-letter month labels to amounts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut breakdown = MonthlyBreakdown::new();
                while let Some((label, amount)) = access.next_entry::<String, f64>()? {
                    let month0 = month_index(&label).ok_or_else(|| {
                        serde::de::Error::custom(format!("unknown month label `{label}`"))
                    })?;
                    breakdown.add(month0, amount);
                }
                Ok(breakdown)
            }
        }

        deserializer.deserialize_map(BreakdownVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_accumulates_within_a_bucket() {
        let mut breakdown = MonthlyBreakdown::new();
        breakdown.add(0, 100.0);
        breakdown.add(0, 50.0);
        breakdown.add(11, 25.0);

        assert_eq!(breakdown.amount(0), Some(150.0));
        assert_eq!(breakdown.amount(1), None);
        assert_eq!(breakdown.amount(11), Some(25.0));
    }

    #[test]
    fn labelled_iterates_in_calendar_order() {
        let mut breakdown = MonthlyBreakdown::new();
        breakdown.add(11, 1.0);
        breakdown.add(1, 2.0);
        breakdown.add(5, 3.0);

        let pairs: Vec<_> = breakdown.labelled().collect();
        assert_eq!(pairs, vec![("Feb", 2.0), ("Jun", 3.0), ("Dec", 1.0)]);
    }

    #[test]
    fn merge_folds_buckets_together() {
        let mut left = MonthlyBreakdown::new();
        left.add(0, 100.0);
        let mut right = MonthlyBreakdown::new();
        right.add(0, 50.0);
        right.add(2, 10.0);

        left.merge(&right);
        assert_eq!(left.amount(0), Some(150.0));
        assert_eq!(left.amount(2), Some(10.0));
    }

    #[test]
    fn serde_round_trips_present_months_only() {
        let mut breakdown = MonthlyBreakdown::new();
        breakdown.add(0, 100.0);
        breakdown.add(1, 50.0);

        let json = serde_json::to_string(&breakdown).unwrap();
        assert_eq!(json, r#"{"Jan":100.0,"Feb":50.0}"#);

        let parsed: MonthlyBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, breakdown);
    }

    #[test]
    fn deserialize_rejects_unknown_labels() {
        let err = serde_json::from_str::<MonthlyBreakdown>(r#"{"January":1.0}"#);
        assert!(err.is_err());
    }

    #[test]
    fn month_index_inverts_month_label() {
        for (index, label) in MONTH_LABELS.iter().enumerate() {
            assert_eq!(month_index(label), Some(index));
        }
        assert_eq!(month_index("Smarch"), None);
    }
}

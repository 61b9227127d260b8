// File: crates/likeplot-core/src/stats.rs
// Summary: Five-number-summary rollup: partition records by key, reduce each bucket to a GroupSummary.
// Notes:
// - Quantiles use linear interpolation between order statistics (R-7), rank = p * (n - 1).
// - Non-finite measurements are rejected up front; a rollup either succeeds for
//   every group or fails as a whole.

use indexmap::IndexMap;

use crate::error::StatsError;

/// One raw observation: a categorical key and a numeric measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub group: String,
    pub value: f64,
}

impl Record {
    pub fn new(group: impl Into<String>, value: f64) -> Self {
        Self { group: group.into(), value }
    }
}

/// Box statistics for one group.
/// Contract: min <= q1 <= median <= q3 <= max and iqr = q3 - q1 >= 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroupSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub iqr: f64,
    pub max: f64,
}

impl GroupSummary {
    /// Summarize a loose set of measurements (any order).
    /// Fails with [`StatsError::NonFiniteValue`] on a NaN/infinite measurement;
    /// there is no group key at this level.
    pub fn from_values(values: &[f64]) -> Result<Self, StatsError> {
        if values.is_empty() {
            return Err(StatsError::EmptyInput);
        }
        if let Some(&bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(StatsError::NonFiniteValue { value: bad });
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Ok(Self::from_sorted(&sorted))
    }

    // Caller guarantees a non-empty, ascending, all-finite slice.
    fn from_sorted(sorted: &[f64]) -> Self {
        let q1 = quantile_sorted(sorted, 0.25);
        let median = quantile_sorted(sorted, 0.5);
        let q3 = quantile_sorted(sorted, 0.75);
        Self {
            min: sorted[0],
            q1,
            median,
            q3,
            iqr: q3 - q1,
            max: sorted[sorted.len() - 1],
        }
    }
}

/// Quantile of an ascending slice by linear interpolation at rank `p * (n - 1)`.
/// Returns NaN for an empty slice, a NaN `p` or any non-finite element; `p` is
/// clamped to [0, 1]. A slice that is not ascending still interpolates between
/// the two elements at the bracketing ranks.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 0 || p.is_nan() || sorted.iter().any(|v| !v.is_finite()) {
        return f64::NAN;
    }
    let rank = p.clamp(0.0, 1.0) * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = (rank.ceil() as usize).min(n - 1);
    let frac = rank - lo as f64;
    let (a, b) = (sorted[lo], sorted[hi]);
    if frac == 0.0 || a == b {
        return a;
    }
    let mut v = a + frac * (b - a);
    if !v.is_finite() {
        // b - a overflowed
        v = a * (1.0 - frac) + b * frac;
    }
    // keep rounding from stepping outside the bracketing order statistics
    v.max(a.min(b)).min(a.max(b))
}

/// Group key -> summary, keyed in first-seen order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Rollup {
    groups: IndexMap<String, GroupSummary>,
}

impl Rollup {
    pub fn get(&self, key: &str) -> Option<&GroupSummary> {
        self.groups.get(key)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Group keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &GroupSummary)> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Largest maximum across all groups, or None for an empty rollup.
    pub fn max_value(&self) -> Option<f64> {
        self.groups.values().map(|s| s.max).reduce(f64::max)
    }

    /// Smallest minimum across all groups, or None for an empty rollup.
    pub fn min_value(&self) -> Option<f64> {
        self.groups.values().map(|s| s.min).reduce(f64::min)
    }
}

/// Roll up plain records by their `group` field.
pub fn rollup(records: &[Record]) -> Result<Rollup, StatsError> {
    rollup_by(records, |r| r.group.as_str(), |r| r.value)
}

/// Partition `items` by `key`, then reduce each bucket of `value`s to a [`GroupSummary`].
///
/// Fails with [`StatsError::EmptyInput`] when `items` is empty and with
/// [`StatsError::NonFinite`] on the first NaN/infinite measurement.
pub fn rollup_by<T, K, V>(items: &[T], key: K, value: V) -> Result<Rollup, StatsError>
where
    K: Fn(&T) -> &str,
    V: Fn(&T) -> f64,
{
    if items.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let mut buckets: IndexMap<&str, Vec<f64>> = IndexMap::new();
    for item in items {
        let k = key(item);
        let v = value(item);
        if !v.is_finite() {
            return Err(StatsError::NonFinite { group: k.to_string(), value: v });
        }
        buckets.entry(k).or_default().push(v);
    }

    let groups: IndexMap<String, GroupSummary> = buckets
        .into_iter()
        .map(|(k, mut values)| {
            values.sort_by(f64::total_cmp);
            (k.to_string(), GroupSummary::from_sorted(&values))
        })
        .collect();

    tracing::debug!(records = items.len(), groups = groups.len(), "rollup complete");
    Ok(Rollup { groups })
}

// File: crates/likeplot-core/src/scale.rs
// Summary: Linear, band, time and ordinal scales mapping data domains onto pixel ranges.

use chrono::{Datelike, NaiveDate};

use crate::grid;
use crate::scene::Color;

/// Continuous value scale: maps [d0, d1] linearly onto [r0, r1].
/// Pass an inverted range (e.g. `(height, 0.0)`) for screen-space Y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }

    pub fn domain(&self) -> (f64, f64) { (self.d0, self.d1) }
    pub fn range(&self) -> (f64, f64) { (self.r0, self.r1) }

    /// Map a domain value to the range. A collapsed domain maps to the range midpoint.
    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        let span = self.d1 - self.d0;
        if span == 0.0 || !span.is_finite() {
            return (self.r0 + self.r1) * 0.5;
        }
        self.r0 + (v - self.d0) / span * (self.r1 - self.r0)
    }

    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let span = self.r1 - self.r0;
        if span == 0.0 {
            return (self.d0 + self.d1) * 0.5;
        }
        self.d0 + (px - self.r0) / span * (self.d1 - self.d0)
    }

    /// Extend the domain outward to round tick multiples.
    pub fn nice(mut self, count: usize) -> Self {
        let (d0, d1) = grid::nice(self.d0, self.d1, count);
        self.d0 = d0;
        self.d1 = d1;
        self
    }

    /// Round tick values within the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        grid::ticks(self.d0, self.d1, count)
    }
}

/// Categorical scale dividing a continuous range into equal bands.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    r0: f64,
    r1: f64,
    padding_inner: f64,
    padding_outer: f64,
    align: f64,
    // derived
    reverse: bool,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    pub fn new(domain: Vec<String>, range: (f64, f64)) -> Self {
        let mut s = Self {
            domain,
            r0: range.0,
            r1: range.1,
            padding_inner: 0.0,
            padding_outer: 0.0,
            align: 0.5,
            reverse: false,
            start: 0.0,
            step: 0.0,
            bandwidth: 0.0,
        };
        s.rescale();
        s
    }

    /// Set inner and outer padding together.
    pub fn padding(mut self, p: f64) -> Self {
        let p = p.clamp(0.0, 1.0);
        self.padding_inner = p;
        self.padding_outer = p;
        self.rescale();
        self
    }

    /// Fraction of each step left blank between bands, in [0, 1].
    pub fn padding_inner(mut self, p: f64) -> Self {
        self.padding_inner = p.clamp(0.0, 1.0);
        self.rescale();
        self
    }

    /// Blank space before the first and after the last band, in steps.
    pub fn padding_outer(mut self, p: f64) -> Self {
        self.padding_outer = p.max(0.0);
        self.rescale();
        self
    }

    /// Where leftover space goes: 0 = all after, 1 = all before.
    pub fn align(mut self, a: f64) -> Self {
        self.align = a.clamp(0.0, 1.0);
        self.rescale();
        self
    }

    fn rescale(&mut self) {
        let n = self.domain.len() as f64;
        let reverse = self.r1 < self.r0;
        let (lo, hi) = if reverse { (self.r1, self.r0) } else { (self.r0, self.r1) };
        self.step = (hi - lo) / (n - self.padding_inner + self.padding_outer * 2.0).max(1.0);
        self.start = lo + (hi - lo - self.step * (n - self.padding_inner)) * self.align;
        self.bandwidth = self.step * (1.0 - self.padding_inner);
        self.reverse = reverse;
    }

    pub fn domain(&self) -> &[String] { &self.domain }
    pub fn bandwidth(&self) -> f64 { self.bandwidth }
    pub fn step(&self) -> f64 { self.step }

    /// Left edge of the band for `key`, or None if the key is not in the domain.
    pub fn position(&self, key: &str) -> Option<f64> {
        let i = self.domain.iter().position(|k| k == key)?;
        // a reversed range hands the first key the last slot
        let slot = if self.reverse { self.domain.len() - 1 - i } else { i };
        Some(self.start + self.step * slot as f64)
    }

    /// Center of the band for `key`.
    pub fn center(&self, key: &str) -> Option<f64> {
        self.position(key).map(|x| x + self.bandwidth * 0.5)
    }
}

/// Distinct values in first-seen order, suitable as a band/ordinal domain.
pub fn distinct<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out: Vec<String> = Vec::new();
    for v in values {
        if !out.iter().any(|o| o == v) {
            out.push(v.to_string());
        }
    }
    out
}

/// Calendar-date scale: maps days linearly onto a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    inner: LinearScale,
}

impl TimeScale {
    pub fn new(domain: (NaiveDate, NaiveDate), range: (f64, f64)) -> Self {
        let d0 = domain.0.num_days_from_ce() as f64;
        let d1 = domain.1.num_days_from_ce() as f64;
        Self { inner: LinearScale::new((d0, d1), range) }
    }

    /// Build from the earliest and latest date in `dates`; None when empty.
    pub fn from_extent<I>(dates: I, range: (f64, f64)) -> Option<Self>
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let mut it = dates.into_iter();
        let first = it.next()?;
        let (lo, hi) = it.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
        Some(Self::new((lo, hi), range))
    }

    #[inline]
    pub fn map(&self, date: NaiveDate) -> f64 {
        self.inner.map(date.num_days_from_ce() as f64)
    }

    pub fn invert(&self, px: f64) -> Option<NaiveDate> {
        let days = self.inner.invert(px).round();
        NaiveDate::from_num_days_from_ce_opt(days as i32)
    }

    /// Whole-day ticks within the domain, about `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<NaiveDate> {
        let (d0, d1) = self.inner.domain();
        let mut out: Vec<NaiveDate> = Vec::new();
        for t in grid::ticks(d0, d1, count) {
            if t.fract() != 0.0 {
                continue;
            }
            if let Some(d) = NaiveDate::from_num_days_from_ce_opt(t as i32) {
                if out.last() != Some(&d) {
                    out.push(d);
                }
            }
        }
        out
    }
}

/// Categorical color scale; keys take palette entries in domain order, cycling.
#[derive(Clone, Debug, PartialEq)]
pub struct OrdinalScale {
    domain: Vec<String>,
    palette: Vec<Color>,
}

impl OrdinalScale {
    pub fn new(domain: Vec<String>, palette: Vec<Color>) -> Self {
        Self { domain, palette }
    }

    pub fn color(&self, key: &str) -> Option<Color> {
        if self.palette.is_empty() {
            return None;
        }
        let i = self.domain.iter().position(|k| k == key)?;
        Some(self.palette[i % self.palette.len()])
    }
}

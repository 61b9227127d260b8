// File: crates/likeplot-core/tests/scale.rs
// Purpose: Validate linear/band/time/ordinal scales and tick helpers against hand-computed layouts.

use chrono::NaiveDate;
use likeplot_core::grid::{linspace, nice, tick_increment, tick_step, ticks};
use likeplot_core::scale::distinct;
use likeplot_core::{BandScale, Color, LinearScale, OrdinalScale, TimeScale};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn keys(k: &[&str]) -> Vec<String> {
    k.iter().map(|s| s.to_string()).collect()
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).expect("valid date")
}

#[test]
fn linear_maps_onto_inverted_screen_range() {
    let y = LinearScale::new((0.0, 10.0), (100.0, 0.0));
    assert!(approx(y.map(0.0), 100.0));
    assert!(approx(y.map(5.0), 50.0));
    assert!(approx(y.map(10.0), 0.0));
    assert!(approx(y.invert(25.0), 7.5));
}

#[test]
fn linear_collapsed_domain_maps_to_midpoint() {
    let y = LinearScale::new((3.0, 3.0), (100.0, 0.0));
    assert!(approx(y.map(3.0), 50.0));
}

#[test]
fn linear_nice_extends_to_round_ticks() {
    let y = LinearScale::new((0.0, 3.6), (0.0, 1.0)).nice(10);
    assert_eq!(y.domain(), (0.0, 4.0));
    let y = LinearScale::new((1.0, 99.0), (0.0, 1.0)).nice(10);
    assert_eq!(y.domain(), (0.0, 100.0));
}

#[test]
fn ticks_follow_one_two_five_steps() {
    assert_eq!(ticks(0.0, 100.0, 10), (0..=10).map(|i| i as f64 * 10.0).collect::<Vec<_>>());
    assert_eq!(ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    assert_eq!(ticks(10.0, 0.0, 5), vec![10.0, 8.0, 6.0, 4.0, 2.0, 0.0]);
    assert_eq!(ticks(2.0, 2.0, 5), vec![2.0]);
    assert!(ticks(0.0, 1.0, 0).is_empty());
    assert!(approx(tick_step(0.0, 1.0, 5), 0.2));
    assert!(approx(tick_step(10.0, 0.0, 5), -2.0));
}

#[test]
fn nice_keeps_reversed_order() {
    assert_eq!(nice(99.0, 1.0, 10), (100.0, 0.0));
}

#[test]
fn subnormal_span_has_no_ticks() {
    assert_eq!(tick_increment(0.0, 1e-308, 10), 0.0);
    assert!(ticks(0.0, 1e-308, 10).is_empty());
    assert!(ticks(1e-308, 0.0, 10).is_empty());
    assert_eq!(nice(0.0, 1e-308, 10), (0.0, 1e-308));
    assert_eq!(tick_step(0.0, 1e-308, 10), 0.0);
}

#[test]
fn full_f64_span_ticks_stay_finite() {
    // the width of [-MAX, MAX] overflows, so no step exists
    assert!(ticks(-f64::MAX, f64::MAX, 10).is_empty());
    let t = ticks(0.0, f64::MAX, 10);
    assert_eq!(t.len(), 9);
    assert!(t.iter().all(|v| v.is_finite()));
    let (lo, hi) = nice(0.0, f64::MAX, 10);
    assert!(lo.is_finite() && hi.is_finite());
}

#[test]
fn oversized_tick_count_is_capped() {
    assert!(ticks(0.0, 1.0, 1_000_000).is_empty());
    assert_eq!(ticks(0.0, 1.0, 1_000).len(), 1_001);
}

#[test]
fn linspace_includes_both_ends() {
    assert_eq!(linspace(0.0, 1.0, 3), vec![0.0, 0.5, 1.0]);
    assert_eq!(linspace(0.0, 1.0, 1), vec![0.0, 1.0]);
}

#[test]
fn band_padding_applies_inner_and_outer() {
    let x = BandScale::new(keys(&["a", "b", "c"]), (0.0, 100.0)).padding(0.2);
    assert!(approx(x.step(), 31.25));
    assert!(approx(x.bandwidth(), 25.0));
    assert!(approx(x.position("a").unwrap(), 6.25));
    assert!(approx(x.position("b").unwrap(), 37.5));
    assert!(approx(x.position("c").unwrap(), 68.75));
    assert!(approx(x.center("a").unwrap(), 18.75));
    assert_eq!(x.position("zzz"), None);
}

#[test]
fn band_inner_padding_only_fills_range() {
    let x = BandScale::new(keys(&["a", "b", "c"]), (0.0, 100.0)).padding_inner(0.2);
    assert!(approx(x.position("a").unwrap(), 0.0));
    let last_right = x.position("c").unwrap() + x.bandwidth();
    assert!(approx(last_right, 100.0));
}

#[test]
fn band_reversed_range_puts_first_key_last() {
    let x = BandScale::new(keys(&["a", "b", "c"]), (100.0, 0.0)).padding(0.2);
    assert!(approx(x.position("a").unwrap(), 68.75));
    assert!(approx(x.position("c").unwrap(), 6.25));
}

#[test]
fn nested_bands_split_outer_bandwidth() {
    let outer = BandScale::new(keys(&["Facebook", "Instagram"]), (0.0, 200.0)).padding_inner(0.2);
    let inner = BandScale::new(keys(&["Image", "Link", "Video"]), (0.0, outer.bandwidth())).padding(0.1);
    let right = inner.position("Video").unwrap() + inner.bandwidth();
    assert!(right <= outer.bandwidth() + 1e-9);
    assert!(inner.position("Image").unwrap() >= 0.0);
}

#[test]
fn distinct_keeps_first_seen_order() {
    assert_eq!(distinct(["b", "a", "b", "c", "a"]), keys(&["b", "a", "c"]));
}

#[test]
fn time_scale_maps_days_linearly() {
    let x = TimeScale::from_extent([day(4), day(1), day(7)], (0.0, 600.0)).expect("non-empty");
    assert!(approx(x.map(day(1)), 0.0));
    assert!(approx(x.map(day(4)), 300.0));
    assert!(approx(x.map(day(7)), 600.0));
    assert_eq!(x.invert(100.0), Some(day(2)));
    assert_eq!(x.ticks(7), (1..=7).map(day).collect::<Vec<_>>());
    assert!(TimeScale::from_extent(std::iter::empty(), (0.0, 1.0)).is_none());
}

#[test]
fn ordinal_cycles_palette() {
    let palette = vec![Color::rgb(1, 0, 0), Color::rgb(0, 1, 0), Color::rgb(0, 0, 1)];
    let c = OrdinalScale::new(keys(&["a", "b", "c", "d"]), palette.clone());
    assert_eq!(c.color("a"), Some(palette[0]));
    assert_eq!(c.color("c"), Some(palette[2]));
    assert_eq!(c.color("d"), Some(palette[0]));
    assert_eq!(c.color("nope"), None);
}

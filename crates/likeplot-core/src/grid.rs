// File: crates/likeplot-core/src/grid.rs
// Summary: Grid/tick layout helpers (even spacing, 1-2-5 tick steps, nice domains).

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Upper bound on the number of ticks `ticks` will emit.
const MAX_TICKS: f64 = 10_000.0;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Tick increment for roughly `count` ticks over [start, stop].
///
/// A positive result is the step itself (1, 2 or 5 times a power of ten >= 1).
/// A negative result `-k` encodes a fractional step of `1/k`, which keeps
/// sub-unit steps exact when multiplied back.
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    // steps near the ends of the f64 range have no representable increment
    let inc = if power >= 0.0 { factor * 10f64.powf(power) } else { -10f64.powf(-power) / factor };
    if inc.is_finite() { inc } else { 0.0 }
}

/// Signed step between ticks over [start, stop] (negative when stop < start).
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    let inc = tick_increment(lo, hi, count);
    let step = if inc > 0.0 { inc } else if inc < 0.0 { -1.0 / inc } else { 0.0 };
    if stop < start { -step } else { step }
}

/// Round tick values inside [start, stop], about `count` of them, in domain order.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let inc = tick_increment(lo, hi, count);
    let mut out = Vec::new();
    if inc > 0.0 {
        let (r0, r1) = ((lo / inc).ceil(), (hi / inc).floor());
        if !tick_span_ok(r0, r1) {
            return out;
        }
        out.extend((r0 as i64..=r1 as i64).map(|i| i as f64 * inc));
    } else if inc < 0.0 {
        let k = -inc;
        let (r0, r1) = ((lo * k).ceil(), (hi * k).floor());
        if !tick_span_ok(r0, r1) {
            return out;
        }
        out.extend((r0 as i64..=r1 as i64).map(|i| i as f64 / k));
    }
    if reverse { out.reverse(); }
    out
}

fn tick_span_ok(r0: f64, r1: f64) -> bool {
    r0.is_finite() && r1.is_finite() && r1 - r0 <= MAX_TICKS
}

/// Extend a domain outward so both ends land on tick multiples.
pub fn nice(start: f64, stop: f64, count: usize) -> (f64, f64) {
    if !start.is_finite() || !stop.is_finite() || start == stop {
        return (start, stop);
    }
    let reverse = stop < start;
    let (mut lo, mut hi) = if reverse { (stop, start) } else { (start, stop) };
    let mut prestep = None;
    // converges in a couple of passes; the cap guards against oscillation
    for _ in 0..10 {
        let step = tick_increment(lo, hi, count);
        if step == 0.0 || prestep == Some(step) {
            break;
        }
        let (nlo, nhi) = if step > 0.0 {
            ((lo / step).floor() * step, (hi / step).ceil() * step)
        } else {
            let k = -step;
            ((lo * k).floor() / k, (hi * k).ceil() / k)
        };
        if !nlo.is_finite() || !nhi.is_finite() {
            break;
        }
        lo = nlo;
        hi = nhi;
        prestep = Some(step);
    }
    if reverse { (hi, lo) } else { (lo, hi) }
}

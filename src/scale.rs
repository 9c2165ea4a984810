//! Linear data-to-pixel scales and tick generation.
//!
//! The scatter chart maps two data domains onto the drawable
//! area: median age on the horizontal axis and smoking rate on the vertical
//! axis (inverted range, larger values plot higher). Domain padding follows
//! the dataset rules exactly:
//!
//! - age: `[min - 1, max + 3]`
//! - smokes: `[9, max + 2]` (fixed floor)

use crate::models::CensusRecord;

/// A pure linear mapping from a data domain to a pixel range.
///
/// A zero-span domain yields non-finite outputs; callers accept that as
/// degenerate input rather than an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map a domain value to a pixel coordinate.
    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        r0 + (v - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Inverse mapping, pixel coordinate back to domain value.
    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        d0 + (px - r0) / (r1 - r0) * (d1 - d0)
    }

    /// Round tick values covering the domain, at most roughly `target` of
    /// them, stepped by 1/2/5 × 10^k.
    pub fn ticks(&self, target: usize) -> Vec<f64> {
        let (lo, hi) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };
        let span = hi - lo;
        if !span.is_finite() || span <= 0.0 || target == 0 {
            return Vec::new();
        }
        let raw_step = span / target as f64;
        let mag = 10f64.powf(raw_step.log10().floor());
        let norm = raw_step / mag;
        let step = if norm <= 1.0 {
            mag
        } else if norm <= 2.0 {
            2.0 * mag
        } else if norm <= 5.0 {
            5.0 * mag
        } else {
            10.0 * mag
        };
        let first = (lo / step).ceil() * step;
        let mut out = Vec::new();
        let mut t = first;
        while t <= hi + step * 1e-9 {
            // Snap accumulated float error back onto the grid.
            out.push((t / step).round() * step);
            t += step;
        }
        out
    }
}

/// Horizontal scale for median age over the drawable width.
pub fn age_scale(records: &[CensusRecord], drawable_width: f64) -> LinearScale {
    let (min, max) = finite_min_max(records.iter().map(|r| r.age));
    LinearScale::new((min - 1.0, max + 3.0), (0.0, drawable_width))
}

/// Vertical scale for smoking rate over the drawable height, inverted so
/// larger values plot higher.
pub fn smokes_scale(records: &[CensusRecord], drawable_height: f64) -> LinearScale {
    let (_, max) = finite_min_max(records.iter().map(|r| r.smokes));
    LinearScale::new((9.0, max + 2.0), (drawable_height, 0.0))
}

/// Min and max over the finite values only; NaN rows would otherwise poison
/// both bounds. An all-NaN column yields an infinite pair and downstream
/// non-finite coordinates, the accepted degenerate outcome.
fn finite_min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.filter(|v| v.is_finite()).fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), v| (lo.min(v), hi.max(v)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(age: f64, smokes: f64) -> CensusRecord {
        CensusRecord {
            state: String::new(),
            abbr: String::new(),
            age,
            smokes,
        }
    }

    #[test]
    fn age_domain_is_padded_min_minus_one_max_plus_three() {
        let recs = vec![rec(10.0, 5.0), rec(20.0, 15.0), rec(30.0, 25.0)];
        let x = age_scale(&recs, 800.0);
        assert_eq!(x.domain, (9.0, 33.0));
        assert_eq!(x.range, (0.0, 800.0));
    }

    #[test]
    fn smokes_domain_has_fixed_floor_nine() {
        let recs = vec![rec(10.0, 5.0), rec(20.0, 15.0), rec(30.0, 25.0)];
        let y = smokes_scale(&recs, 600.0);
        assert_eq!(y.domain, (9.0, 27.0));
        // Inverted: domain start maps to the bottom of the drawable area.
        assert_eq!(y.range, (600.0, 0.0));
        assert_eq!(y.map(9.0), 600.0);
        assert_eq!(y.map(27.0), 0.0);
    }

    #[test]
    fn map_is_linear_and_invert_round_trips() {
        let s = LinearScale::new((0.0, 10.0), (0.0, 100.0));
        assert_eq!(s.map(5.0), 50.0);
        assert_eq!(s.invert(50.0), 5.0);
        let inv = LinearScale::new((9.0, 27.0), (600.0, 0.0));
        let px = inv.map(18.0);
        assert!((inv.invert(px) - 18.0).abs() < 1e-9);
    }

    #[test]
    fn nan_values_do_not_poison_the_domain() {
        let recs = vec![rec(10.0, 5.0), rec(f64::NAN, f64::NAN), rec(30.0, 25.0)];
        let x = age_scale(&recs, 100.0);
        assert_eq!(x.domain, (9.0, 33.0));
    }

    #[test]
    fn nan_input_maps_to_nan_output() {
        let s = LinearScale::new((0.0, 10.0), (0.0, 100.0));
        assert!(s.map(f64::NAN).is_nan());
    }

    #[test]
    fn ticks_are_round_and_cover_the_domain() {
        let s = LinearScale::new((9.0, 33.0), (0.0, 800.0));
        let ticks = s.ticks(10);
        assert!(!ticks.is_empty());
        assert!(ticks.first().copied().unwrap() >= 9.0);
        assert!(ticks.last().copied().unwrap() <= 33.0);
        // 1-2-5 stepping over a span of 24 with ~10 ticks lands on integers.
        for t in &ticks {
            assert_eq!(t.fract(), 0.0, "tick {t} not integral");
        }
    }

    #[test]
    fn ticks_on_degenerate_domain_are_empty() {
        let s = LinearScale::new((5.0, 5.0), (0.0, 100.0));
        assert!(s.ticks(10).is_empty());
    }
}

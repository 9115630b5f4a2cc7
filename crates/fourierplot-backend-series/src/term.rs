//! Per-harmonic term rules.
//!
//! A term rule maps `(k, t, T)` to the k-th harmonic's contribution at time
//! `t`. Any time shift is applied by the caller before the rule sees `t`.

use std::f64::consts::PI;

const TWO_PI: f64 = 2.0 * PI;

/// Contribution of one harmonic to a partial sum.
///
/// Implementations must be pure: the same `(k, t, period)` always yields the
/// same value. `Sync` lets the evaluator share a rule across worker threads.
pub trait HarmonicTerm: Sync {
    /// Returns the k-th harmonic's value at time `t` for a wave of period `period`.
    fn term(&self, k: u32, t: f64, period: f64) -> f64;
}

impl<F> HarmonicTerm for F
where
    F: Fn(u32, f64, f64) -> f64 + Sync,
{
    fn term(&self, k: u32, t: f64, period: f64) -> f64 {
        self(k, t, period)
    }
}

/// Square-wave term: `(4 / (k*pi)) * sin(2*pi*k*t / T)`.
///
/// Meant to be summed over odd `k` only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SquareTerm;

impl HarmonicTerm for SquareTerm {
    #[inline]
    fn term(&self, k: u32, t: f64, period: f64) -> f64 {
        let k = k as f64;
        (4.0 / (k * PI)) * (TWO_PI * k * t / period).sin()
    }
}

/// Sawtooth-wave term: `(-1)^(k+1) * (2 / (k*pi)) * sin(2*pi*k*t / T)`.
///
/// Meant to be summed over all `k >= 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SawtoothTerm;

impl HarmonicTerm for SawtoothTerm {
    #[inline]
    fn term(&self, k: u32, t: f64, period: f64) -> f64 {
        let sign = if k % 2 == 1 { 1.0 } else { -1.0 };
        let k = k as f64;
        sign * (2.0 / (k * PI)) * (TWO_PI * k * t / period).sin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_fundamental_peak() {
        // sin(pi/2) = 1 at a quarter period
        let value = SquareTerm.term(1, 1.0, 4.0);
        assert!((value - 4.0 / PI).abs() < 1e-12);
    }

    #[test]
    fn test_square_third_harmonic_coefficient() {
        // k = 3, t = T/12: sin(pi/2) = 1, coefficient 4/(3*pi)
        let value = SquareTerm.term(3, 1.0 / 3.0, 4.0);
        assert!((value - 4.0 / (3.0 * PI)).abs() < 1e-12);
    }

    #[test]
    fn test_sawtooth_sign_alternates() {
        // At t = T/4: k=1 -> +2/pi * sin(pi/2); k=2 -> -(1/pi) * sin(pi) = 0;
        // k=3 -> +(2/(3pi)) * sin(3pi/2) = -2/(3pi)
        let period = 2.0 * PI;
        let t = PI / 2.0;
        assert!((SawtoothTerm.term(1, t, period) - 2.0 / PI).abs() < 1e-12);
        assert!(SawtoothTerm.term(2, t, period).abs() < 1e-12);
        assert!((SawtoothTerm.term(3, t, period) + 2.0 / (3.0 * PI)).abs() < 1e-12);
    }

    #[test]
    fn test_sawtooth_even_term_is_negated() {
        // k = 2 at t = T/8: sin(pi/2) = 1, sign -1, coefficient 1/pi
        let value = SawtoothTerm.term(2, 1.0, 8.0);
        assert!((value + 1.0 / PI).abs() < 1e-12);
    }

    #[test]
    fn test_closure_is_a_term() {
        let constant = |_k: u32, _t: f64, _period: f64| 0.5;
        assert_eq!(constant.term(7, 1.0, 2.0), 0.5);
    }
}

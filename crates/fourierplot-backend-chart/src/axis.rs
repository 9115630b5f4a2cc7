//! Axis ranges, tick location and tick labels.

use std::f64::consts::PI;

use fourierplot_spec::{TickFormat, TickParams};

use crate::error::{ChartError, ChartResult};

/// Upper bound on major ticks per axis.
pub const MAX_TICKS: usize = 200;

/// Fraction of the data span added on each side when autoscaling.
pub const AUTOSCALE_MARGIN: f64 = 0.05;

/// One labelled major tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// A resolved axis: visible range plus its ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub ticks: Vec<Tick>,
}

impl Axis {
    /// Resolves the range from `explicit` or `data`, then places and labels ticks.
    pub fn build(
        name: &'static str,
        explicit: Option<[f64; 2]>,
        data: &[f64],
        ticks: &TickParams,
    ) -> ChartResult<Self> {
        let (min, max) = resolve_range(name, explicit, data)?;
        let ticks = locate_ticks(name, min, max, ticks.step)?
            .into_iter()
            .map(|value| Tick {
                value,
                label: format_tick(value, ticks),
            })
            .collect();
        Ok(Self { min, max, ticks })
    }

    /// Maps `value` linearly onto the pixel span `start..end`.
    pub fn to_pixel(&self, value: f64, start: f64, end: f64) -> f64 {
        start + (value - self.min) / (self.max - self.min) * (end - start)
    }
}

/// Visible `(min, max)` for an axis.
///
/// An explicit range is used as given. Otherwise the finite data extent is
/// padded by 5% on each side; a single value is widened by 1 each way and
/// data with no finite values gives `(-1, 1)`.
pub fn resolve_range(
    name: &'static str,
    explicit: Option<[f64; 2]>,
    data: &[f64],
) -> ChartResult<(f64, f64)> {
    if let Some([min, max]) = explicit {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ChartError::InvalidAxisRange {
                axis: name,
                min,
                max,
            });
        }
        return Ok((min, max));
    }

    let extent = data
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        });

    Ok(match extent {
        None => (-1.0, 1.0),
        Some((lo, hi)) if lo == hi => (lo - 1.0, hi + 1.0),
        Some((lo, hi)) => {
            let margin = (hi - lo) * AUTOSCALE_MARGIN;
            (lo - margin, hi + margin)
        }
    })
}

/// Every integer multiple of `step` within `[min, max]`, ascending.
pub fn locate_ticks(name: &'static str, min: f64, max: f64, step: f64) -> ChartResult<Vec<f64>> {
    if !step.is_finite() || step <= 0.0 {
        return Err(ChartError::InvalidTickStep { axis: name, step });
    }

    // Tolerance keeps ticks that sit on the range edge after rounding.
    let first = (min / step - 1e-9).ceil();
    let last = (max / step + 1e-9).floor();
    if last < first {
        return Ok(Vec::new());
    }

    let count = last - first + 1.0;
    if count > MAX_TICKS as f64 {
        return Err(ChartError::TooManyTicks {
            axis: name,
            count: count.min(usize::MAX as f64) as usize,
            max: MAX_TICKS,
        });
    }

    Ok((0..count as i64)
        .map(|i| {
            let value = (first + i as f64) * step;
            if value == 0.0 {
                0.0
            } else {
                value
            }
        })
        .collect())
}

/// Formats a tick value.
pub fn format_tick(value: f64, ticks: &TickParams) -> String {
    match ticks.format {
        TickFormat::Decimal => format_decimal(value, decimals_for_step(ticks.step)),
        TickFormat::PiMultiples => format_pi_multiple(value),
    }
}

/// Fraction digits needed to print multiples of `step` exactly.
pub fn decimals_for_step(step: f64) -> usize {
    (0..=6)
        .find(|&d| {
            let scaled = step * 10f64.powi(d as i32);
            (scaled - scaled.round()).abs() < 1e-9 * scaled.abs().max(1.0)
        })
        .unwrap_or(6)
}

fn format_decimal(value: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals, value);
    // "-0" and "-0.0" come from tiny negative values.
    match text.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => text,
    }
}

fn format_pi_multiple(value: f64) -> String {
    let n = (value / PI).round() as i64;
    match n {
        0 => "0".to_string(),
        1 => "π".to_string(),
        -1 => "-π".to_string(),
        n => format!("{}π", n),
    }
}

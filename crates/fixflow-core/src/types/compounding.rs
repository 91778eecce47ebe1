//! Interest compounding conventions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::rates;

/// Interest compounding convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Compounding {
    /// Simple interest (no compounding)
    Simple,
    /// Annual compounding (1x per year)
    Annual,
    /// Semi-annual compounding (2x per year)
    #[default]
    SemiAnnual,
    /// Quarterly compounding (4x per year)
    Quarterly,
    /// Monthly compounding (12x per year)
    Monthly,
    /// Any other positive number of compounding periods per year
    Periodic(u32),
    /// Continuous compounding
    Continuous,
}

impl Compounding {
    /// Maps a coupon frequency to its compounding convention.
    ///
    /// Instrument rates are quoted on their own coupon basis, so a
    /// frequency of `m` compounds `m` times per year.
    pub fn from_frequency(periods: u32) -> CoreResult<Self> {
        Ok(match periods {
            0 => return Err(CoreError::InvalidFrequency { periods }),
            1 => Compounding::Annual,
            2 => Compounding::SemiAnnual,
            4 => Compounding::Quarterly,
            12 => Compounding::Monthly,
            m => Compounding::Periodic(m),
        })
    }

    /// Returns the number of compounding periods per year.
    ///
    /// Returns `None` for simple and continuous compounding.
    #[must_use]
    pub fn periods_per_year(&self) -> Option<u32> {
        match self {
            Compounding::Simple | Compounding::Continuous => None,
            Compounding::Annual => Some(1),
            Compounding::SemiAnnual => Some(2),
            Compounding::Quarterly => Some(4),
            Compounding::Monthly => Some(12),
            Compounding::Periodic(m) => Some(*m),
        }
    }

    /// Returns true if this is continuous compounding.
    #[must_use]
    pub fn is_continuous(&self) -> bool {
        matches!(self, Compounding::Continuous)
    }

    /// Discount factor for `rate` over `t` years under this convention.
    #[must_use]
    pub fn discount_factor(&self, rate: f64, t: f64) -> f64 {
        match self {
            Compounding::Simple => 1.0 / (1.0 + rate * t),
            Compounding::Continuous => (-rate * t).exp(),
            periodic => {
                let m = periodic.periods_per_year().unwrap_or(1);
                rates::discount_factor(rate, m, t)
            }
        }
    }

    /// Zero rate implied by a discount factor `df` at time `t`.
    ///
    /// Returns 0.0 for `t <= 0`.
    #[must_use]
    pub fn zero_rate(&self, df: f64, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        match self {
            Compounding::Simple => (1.0 / df - 1.0) / t,
            Compounding::Continuous => -df.ln() / t,
            periodic => {
                let m = f64::from(periodic.periods_per_year().unwrap_or(1));
                m * (df.powf(-1.0 / (m * t)) - 1.0)
            }
        }
    }

    /// Converts `rate` quoted under this convention to `target` so that both
    /// produce the same discount factor at time `t`.
    #[must_use]
    pub fn convert_to(&self, rate: f64, target: Compounding, t: f64) -> f64 {
        if *self == target {
            return rate;
        }
        target.zero_rate(self.discount_factor(rate, t), t)
    }
}

impl fmt::Display for Compounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Compounding::Simple => write!(f, "Simple"),
            Compounding::Annual => write!(f, "Annual"),
            Compounding::SemiAnnual => write!(f, "Semi-Annual"),
            Compounding::Quarterly => write!(f, "Quarterly"),
            Compounding::Monthly => write!(f, "Monthly"),
            Compounding::Periodic(m) => write!(f, "{m}x per year"),
            Compounding::Continuous => write!(f, "Continuous"),
        }
    }
}

//! Core trait for zero-rate term structures.
//!
//! [`ZeroCurve`] has a single required method, [`ZeroCurve::zero_rate`].
//! Discount factors are derived from it with the rates primitive, using the
//! compounding frequency of the instrument being priced.

use std::sync::Arc;

use fixflow_core::rates;
use fixflow_core::Compounding;

use crate::error::{CurveError, CurveResult};

/// A term structure of zero rates.
///
/// Rates are decimal and annualized. A curve does not fix its own
/// compounding: callers state the frequency the rate is compounded at when
/// asking for a discount factor.
///
/// Thread safety is a property of the implementation. Curves built in this
/// crate are `Send + Sync` whenever their contents are.
///
/// # Example
///
/// ```rust
/// use fixflow_curves::{CurveResult, ZeroCurve};
///
/// fn price_zero_coupon<C: ZeroCurve>(curve: &C, maturity: f64, face: f64) -> CurveResult<f64> {
///     Ok(face * curve.discount_factor(maturity, 2)?)
/// }
/// ```
pub trait ZeroCurve {
    /// Returns the zero rate for time `t` years from the valuation date.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve cannot produce a finite rate at `t`.
    fn zero_rate(&self, t: f64) -> CurveResult<f64>;

    /// Returns the discount factor `(1 + r/m)^(-m t)` for the zero rate at
    /// `t`, compounded `frequency` times per year.
    fn discount_factor(&self, t: f64, frequency: u32) -> CurveResult<f64> {
        if frequency == 0 {
            return Err(CurveError::invalid_value(
                "compounding frequency must be positive",
            ));
        }
        let rate = self.zero_rate(t)?;
        Ok(rates::discount_factor(rate, frequency, t))
    }

    /// Returns the zero rate at `t`, taken as compounded `frequency` times
    /// per year, re-expressed under `target` compounding.
    fn zero_rate_as(&self, t: f64, frequency: u32, target: Compounding) -> CurveResult<f64> {
        let source = Compounding::from_frequency(frequency)
            .map_err(|e| CurveError::invalid_value(e.to_string()))?;
        let rate = self.zero_rate(t)?;
        Ok(source.convert_to(rate, target, t))
    }
}

impl<C: ZeroCurve + ?Sized> ZeroCurve for &C {
    fn zero_rate(&self, t: f64) -> CurveResult<f64> {
        (**self).zero_rate(t)
    }

    fn discount_factor(&self, t: f64, frequency: u32) -> CurveResult<f64> {
        (**self).discount_factor(t, frequency)
    }
}

impl<C: ZeroCurve + ?Sized> ZeroCurve for Box<C> {
    fn zero_rate(&self, t: f64) -> CurveResult<f64> {
        (**self).zero_rate(t)
    }

    fn discount_factor(&self, t: f64, frequency: u32) -> CurveResult<f64> {
        (**self).discount_factor(t, frequency)
    }
}

impl<C: ZeroCurve + ?Sized> ZeroCurve for Arc<C> {
    fn zero_rate(&self, t: f64) -> CurveResult<f64> {
        (**self).zero_rate(t)
    }

    fn discount_factor(&self, t: f64, frequency: u32) -> CurveResult<f64> {
        (**self).discount_factor(t, frequency)
    }
}

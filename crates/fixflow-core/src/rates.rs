//! Finite-frequency and continuous compounding primitives.
//!
//! All rates are quoted as decimals (`0.05` is 5%), all times in years and
//! `m` is the number of compounding periods per year. Callers pass actual
//! year fractions; no day-count logic lives here.
//!
//! These are total functions over `f64`. Validation of `m > 0` and of the
//! domain `1 + rate/m > 0` is the caller's responsibility.

/// Finite-frequency discount factor `(1 + rate/m)^(-m t)`.
///
/// # Example
///
/// ```rust
/// use fixflow_core::rates::discount_factor;
///
/// let df = discount_factor(0.04, 1, 1.0);
/// assert!((df - 1.0 / 1.04).abs() < 1e-15);
/// ```
#[inline]
#[must_use]
pub fn discount_factor(rate: f64, m: u32, t: f64) -> f64 {
    let m = f64::from(m);
    (1.0 + rate / m).powf(-m * t)
}

/// Compounds a present value forward `m` times per year for `t` years.
#[inline]
#[must_use]
pub fn future_value(pv: f64, rate: f64, m: u32, t: f64) -> f64 {
    let m = f64::from(m);
    pv * (1.0 + rate / m).powf(m * t)
}

/// Discounts a future value back to today.
#[inline]
#[must_use]
pub fn present_value(fv: f64, rate: f64, m: u32, t: f64) -> f64 {
    fv * discount_factor(rate, m, t)
}

/// Effective annual rate `(1 + rate/m)^m - 1`.
#[must_use]
pub fn effective_annual_rate(rate: f64, m: u32) -> f64 {
    let m = f64::from(m);
    (1.0 + rate / m).powf(m) - 1.0
}

/// Converts a nominal rate compounded `m` times per year to its continuous equivalent.
#[must_use]
pub fn nominal_to_continuous(rate: f64, m: u32) -> f64 {
    let m = f64::from(m);
    m * (1.0 + rate / m).ln()
}

/// Alias of [`nominal_to_continuous`].
#[must_use]
pub fn equivalent_continuous_rate(rate: f64, m: u32) -> f64 {
    nominal_to_continuous(rate, m)
}

/// Converts a continuously compounded rate to a nominal rate compounded `m` times per year.
#[must_use]
pub fn continuous_to_nominal(rate: f64, m: u32) -> f64 {
    let m = f64::from(m);
    m * ((rate / m).exp() - 1.0)
}

/// Grows `p0` at a discrete rate compounded `m` times per year for `years`.
#[must_use]
pub fn compound_discrete(p0: f64, rate: f64, m: u32, years: f64) -> f64 {
    future_value(p0, rate, m, years)
}

/// Grows `p0` at a continuously compounded rate for `t` years.
#[must_use]
pub fn compound_continuous(p0: f64, rate: f64, t: f64) -> f64 {
    p0 * (rate * t).exp()
}

/// Rolls a value forward by `tau` years under continuous compounding.
#[must_use]
pub fn roll_forward_continuous(value: f64, rate: f64, tau: f64) -> f64 {
    value * (rate * tau).exp()
}

/// Rolls a value back by `tau` years under continuous compounding.
#[must_use]
pub fn roll_back_continuous(value: f64, rate: f64, tau: f64) -> f64 {
    value * (-rate * tau).exp()
}

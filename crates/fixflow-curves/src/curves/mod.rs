//! Curve implementations.

mod flat;
mod fn_curve;
mod pillar;
mod shifted;

pub use flat::FlatCurve;
pub use fn_curve::FnCurve;
pub use pillar::PillarCurve;
pub use shifted::ShiftedCurve;

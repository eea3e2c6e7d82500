//! # muni-stats — Derived Aggregation
//!
//! Pure functions of a `WardStore` snapshot. Nothing here holds state:
//! every figure is recomputed from the store on each call, so the numbers
//! cannot drift from the records they describe.
//!
//! All ratios are fractions in `[0.0, 1.0]` with explicit zero-denominator
//! guards — an empty collection yields `0.0`, never a fault. Callers format
//! percentages.

pub mod breakdown;
pub mod overview;

pub use breakdown::{breakdown, StatusBreakdown};
pub use overview::{
    approval_rate, fill_ratio, option_shares, overview, resolution_rate, Overview,
};

//! Engine modules: turn user selections into derived figures.
//!
//! The engine layer sits between the selection store (what the user wants) and the
//! renderers (totals panel, step indicator, receipt). It holds no state of its own.

pub mod pricing;

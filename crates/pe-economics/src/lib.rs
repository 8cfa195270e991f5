//! pe-economics: time-value-of-money metrics for petroleum projects.
//!
//! - `cashflow`: validated `CashFlowSeries` and `DiscountRate`
//! - `metrics`: NPV, IRR, discounted payback, profitability index
//! - `revenue`: annual oil/gas revenue and break-even oil price
//! - `sweep`: parallel NPV-versus-rate profile

pub mod cashflow;
pub mod error;
pub mod metrics;
pub mod revenue;
pub mod sweep;

pub use cashflow::{CashFlowSeries, DiscountRate, MAX_DISCOUNT_RATE};
pub use error::{EconResult, EconomicsError};
pub use metrics::{discounted_payback_period, irr, npv, present_value, profitability_index};
pub use revenue::{break_even_oil_price, gas_revenue, oil_revenue};
pub use sweep::{ProfilePoint, npv_profile, rate_grid};

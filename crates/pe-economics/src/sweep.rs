//! NPV evaluated over many discount rates.

use crate::cashflow::{CashFlowSeries, DiscountRate};
use crate::error::EconResult;
use crate::metrics::npv;
use rayon::prelude::*;

/// One point of an NPV-versus-rate profile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfilePoint {
    pub rate: DiscountRate,
    pub npv: f64,
}

/// NPV at each rate, evaluated in parallel and returned in input order.
pub fn npv_profile(
    series: &CashFlowSeries,
    investment: f64,
    rates: &[DiscountRate],
) -> EconResult<Vec<ProfilePoint>> {
    rates
        .par_iter()
        .map(|&rate| {
            Ok(ProfilePoint {
                rate,
                npv: npv(series, rate, investment)?,
            })
        })
        .collect()
}

/// `count` evenly spaced rates from `start` to `end` inclusive.
pub fn rate_grid(start: f64, end: f64, count: usize) -> EconResult<Vec<DiscountRate>> {
    match count {
        0 => Ok(Vec::new()),
        1 => Ok(vec![DiscountRate::new(start)?]),
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| DiscountRate::new(start + step * i as f64))
                .collect()
        }
    }
}

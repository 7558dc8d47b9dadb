//! ROI projection for the analytics page.
//!
//! A pure function of three user inputs and four constants. Inputs are
//! checked up front so that a zero cost-per-lead or a NaN never turns into
//! an unbounded projection.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected calculator input.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum RoiError {
    #[error("Invalid {field} ({value}): {reason}")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// What the user types into the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiInputs {
    /// Monthly marketing budget in rupees
    pub monthly_budget: f64,
    /// Current cost per lead in rupees
    pub current_cpl: f64,
    /// Current lead-to-sale conversion in percent
    pub current_conversion: f64,
}

impl Default for RoiInputs {
    fn default() -> Self {
        Self {
            monthly_budget: 1_000_000.0,
            current_cpl: 350.0,
            current_conversion: 8.0,
        }
    }
}

/// Targets the platform promises to reach.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiConstants {
    pub target_cpl: f64,
    /// Target conversion in percent
    pub target_conversion: f64,
    /// Share of the budget saved on operations (0-1)
    pub cost_reduction: f64,
    /// Average revenue per converted lead in rupees
    pub average_unit_value: f64,
}

impl Default for RoiConstants {
    fn default() -> Self {
        Self {
            target_cpl: 234.0,
            target_conversion: 12.0,
            cost_reduction: 0.3,
            average_unit_value: 500_000.0,
        }
    }
}

/// Rounded outputs of [`calculate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiProjection {
    pub current_leads: i64,
    pub new_leads: i64,
    pub current_revenue: i64,
    pub new_revenue: i64,
    pub additional_revenue: i64,
    pub cost_savings: i64,
    /// Improvement in percent of the monthly budget
    pub roi_improvement: i64,
}

fn ensure(
    ok: bool,
    field: &'static str,
    value: f64,
    reason: &'static str,
) -> Result<(), RoiError> {
    if ok {
        Ok(())
    } else {
        Err(RoiError::InvalidInput {
            field,
            value,
            reason,
        })
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), RoiError> {
    ensure(value.is_finite(), field, value, "must be a finite number")
}

fn positive(field: &'static str, value: f64) -> Result<(), RoiError> {
    finite(field, value)?;
    ensure(value > 0.0, field, value, "must be greater than zero")
}

fn percent(field: &'static str, value: f64) -> Result<(), RoiError> {
    finite(field, value)?;
    ensure(
        (0.0..=100.0).contains(&value),
        field,
        value,
        "must be between 0 and 100",
    )
}

impl RoiInputs {
    /// Check every field, reporting the first offender.
    pub fn validate(&self) -> Result<(), RoiError> {
        positive("monthly_budget", self.monthly_budget)?;
        positive("current_cpl", self.current_cpl)?;
        percent("current_conversion", self.current_conversion)
    }
}

impl RoiConstants {
    pub fn validate(&self) -> Result<(), RoiError> {
        positive("target_cpl", self.target_cpl)?;
        percent("target_conversion", self.target_conversion)?;
        finite("cost_reduction", self.cost_reduction)?;
        ensure(
            (0.0..=1.0).contains(&self.cost_reduction),
            "cost_reduction",
            self.cost_reduction,
            "must be between 0 and 1",
        )?;
        positive("average_unit_value", self.average_unit_value)
    }
}

fn revenue(leads: f64, conversion: f64, unit_value: f64) -> f64 {
    leads * (conversion / 100.0) * unit_value
}

/// Project leads, revenue and savings for the given inputs.
///
/// Intermediate values stay unrounded; each output is rounded on its own.
pub fn calculate(inputs: &RoiInputs, constants: &RoiConstants) -> Result<RoiProjection, RoiError> {
    inputs.validate()?;
    constants.validate()?;

    let budget = inputs.monthly_budget;
    let current_leads = budget / inputs.current_cpl;
    let new_leads = budget / constants.target_cpl;

    let current_revenue = revenue(
        current_leads,
        inputs.current_conversion,
        constants.average_unit_value,
    );
    let new_revenue = revenue(
        new_leads,
        constants.target_conversion,
        constants.average_unit_value,
    );
    let additional_revenue = new_revenue - current_revenue;
    let cost_savings = budget * constants.cost_reduction;
    let roi_improvement = (additional_revenue + cost_savings) / budget * 100.0;

    // Target-side figures scale with the budget alone; current-side ones
    // also with the current cost per lead.
    let by_budget = |value| whole(value, "monthly_budget", budget);
    let by_cpl = |value| whole(value, "current_cpl", inputs.current_cpl);
    Ok(RoiProjection {
        new_leads: by_budget(new_leads)?,
        new_revenue: by_budget(new_revenue)?,
        cost_savings: by_budget(cost_savings)?,
        current_leads: by_cpl(current_leads)?,
        current_revenue: by_cpl(current_revenue)?,
        additional_revenue: by_cpl(additional_revenue)?,
        roi_improvement: by_cpl(roi_improvement)?,
    })
}

/// Round to a whole number, refusing anything an `i64` cannot hold.
fn whole(value: f64, field: &'static str, input: f64) -> Result<i64, RoiError> {
    let rounded = value.round();
    ensure(
        rounded.is_finite() && rounded >= i64::MIN as f64 && rounded < i64::MAX as f64,
        field,
        input,
        "projection is too large to represent",
    )?;
    Ok(rounded as i64)
}

// ============================================================================
// Display helpers
// ============================================================================

/// Group digits in threes: `2847` becomes `2,847`.
#[must_use]
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Group the whole part of a formatted decimal, keeping its fraction:
/// `1234.5` becomes `1,234.5`.
#[must_use]
pub fn group_decimal(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };
    let mut out = String::with_capacity(text.len() + whole.len() / 3);
    out.push_str(sign);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Rupees in lakhs with one decimal, e.g. `₹3.0L`.
#[must_use]
pub fn format_lakhs(rupees: i64) -> String {
    format!("₹{:.1}L", rupees as f64 / 100_000.0)
}

/// Rupees in crores with two decimals, e.g. `₹14.21Cr`.
#[must_use]
pub fn format_crores(rupees: i64) -> String {
    format!("₹{:.2}Cr", rupees as f64 / 10_000_000.0)
}

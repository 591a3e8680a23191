//! Billing period selection and price formatting.

use crate::config::pricing::{ANNUAL_ATTRIBUTE, ANNUAL_LABEL, MONTHLY_ATTRIBUTE, MONTHLY_LABEL};
use crate::core::error::PriceError;

/// Billing period chosen by the pricing checkbox.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Annual,
}

impl BillingPeriod {
    /// Checked means annual billing.
    pub fn from_checked(checked: bool) -> Self {
        if checked { Self::Annual } else { Self::Monthly }
    }

    /// Text for the `.price-period` suffix.
    pub fn label(self) -> &'static str {
        match self {
            Self::Monthly => MONTHLY_LABEL,
            Self::Annual => ANNUAL_LABEL,
        }
    }
}

/// Monthly and annual prices read from a price element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceTier {
    pub monthly: f64,
    pub annual: f64,
}

impl PriceTier {
    /// Parses the raw `data-monthly` / `data-annual` attribute values.
    ///
    /// Both must be present and finite; whitespace around the number is
    /// tolerated.
    pub fn parse(monthly: Option<&str>, annual: Option<&str>) -> Result<Self, PriceError> {
        Ok(Self {
            monthly: parse_amount(MONTHLY_ATTRIBUTE, monthly)?,
            annual: parse_amount(ANNUAL_ATTRIBUTE, annual)?,
        })
    }

    pub fn price_for(&self, period: BillingPeriod) -> f64 {
        match period {
            BillingPeriod::Monthly => self.monthly,
            BillingPeriod::Annual => self.annual,
        }
    }
}

fn parse_amount(attr: &'static str, raw: Option<&str>) -> Result<f64, PriceError> {
    let raw = raw.ok_or(PriceError::Missing(attr))?;
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| PriceError::NotNumeric {
            attr,
            value: raw.to_string(),
        })
}

/// Formats a price as a whole number, rounding halves away from zero.
pub fn format_price(amount: f64) -> String {
    format!("{:.0}", amount.round())
}

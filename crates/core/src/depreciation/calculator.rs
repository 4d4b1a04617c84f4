//! Depreciation calculator
//!
//! Straight-line depreciation over a fixed useful life. Elapsed time is
//! counted in whole calendar months from the purchase date.

use chrono::NaiveDate;
use netasset_domain::constants::{MAX_USEFUL_LIFE_YEARS, MONTHS_PER_YEAR};
use netasset_domain::utils::dates::whole_months_between;
use netasset_domain::{
    Asset, Depreciation, DepreciationConfig, NetAssetError, PortfolioBookValue, Result,
};

/// Computes book values for a configured useful life
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepreciationCalculator {
    useful_life_years: u32,
}

impl DepreciationCalculator {
    /// # Errors
    /// Returns `NetAssetError::InvalidInput` when `useful_life_years` is 0 or
    /// above [`MAX_USEFUL_LIFE_YEARS`].
    pub fn new(useful_life_years: u32) -> Result<Self> {
        if useful_life_years == 0 {
            return Err(NetAssetError::InvalidInput(
                "useful life must be at least one year".to_string(),
            ));
        }
        if useful_life_years > MAX_USEFUL_LIFE_YEARS {
            return Err(NetAssetError::InvalidInput(format!(
                "useful life must be at most {MAX_USEFUL_LIFE_YEARS} years, got {useful_life_years}"
            )));
        }
        Ok(Self { useful_life_years })
    }

    /// # Errors
    /// Same as [`DepreciationCalculator::new`].
    pub fn from_config(config: &DepreciationConfig) -> Result<Self> {
        Self::new(config.useful_life_years)
    }

    #[must_use]
    pub const fn useful_life_years(&self) -> u32 {
        self.useful_life_years
    }

    const fn total_months(&self) -> u32 {
        self.useful_life_years * MONTHS_PER_YEAR
    }

    /// Book value of `asset` on `today`.
    ///
    /// Returns `None` when the purchase price or purchase date is missing.
    #[must_use]
    pub fn calculate(&self, asset: &Asset, today: NaiveDate) -> Option<Depreciation> {
        let purchase_price = asset.purchase_price?;
        let purchase_date = asset.purchase_date?;
        Some(self.calculate_value(purchase_price, purchase_date, today))
    }

    /// Book value of a purchase made at `purchase_date` for `purchase_price`.
    #[must_use]
    pub fn calculate_value(
        &self,
        purchase_price: f64,
        purchase_date: NaiveDate,
        today: NaiveDate,
    ) -> Depreciation {
        let total_months = self.total_months();
        let months_passed = whole_months_between(purchase_date, today);
        let monthly_depreciation = purchase_price / f64::from(total_months);
        // Nothing left to write off on a zero price.
        let is_fully_depreciated = months_passed >= total_months || purchase_price <= 0.0;

        // Exactly zero once the useful life has elapsed.
        let current_value = if is_fully_depreciated {
            0.0
        } else {
            monthly_depreciation.mul_add(-f64::from(months_passed), purchase_price).max(0.0)
        };

        Depreciation {
            purchase_price,
            useful_life_years: self.useful_life_years,
            months_passed,
            monthly_depreciation,
            current_value,
            is_fully_depreciated,
        }
    }

    /// Sum of book values across `assets`.
    #[must_use]
    pub fn portfolio(&self, assets: &[Asset], today: NaiveDate) -> PortfolioBookValue {
        let mut book = PortfolioBookValue::default();
        for asset in assets {
            match self.calculate(asset, today) {
                Some(value) => {
                    book.purchase_total += value.purchase_price;
                    book.current_total += value.current_value;
                    book.assets_valued += 1;
                    if value.is_fully_depreciated {
                        book.fully_depreciated += 1;
                    }
                }
                None => book.without_purchase_record += 1,
            }
        }

        tracing::debug!(
            assets_valued = book.assets_valued,
            without_purchase_record = book.without_purchase_record,
            current_total = book.current_total,
            "Portfolio book value computed"
        );
        book
    }
}

impl Default for DepreciationCalculator {
    fn default() -> Self {
        Self { useful_life_years: DepreciationConfig::default().useful_life_years }
    }
}

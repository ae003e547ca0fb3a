//! Progressive income tax estimation for the old and new regimes.
//!
//! Annual tax is computed by walking the regime's slab table, adding a flat
//! health and education cess on top of the base tax, and rounding to a
//! whole currency unit.
//!
//! # Slab Tables
//!
//! | Regime | Upper bound (inclusive) | Rate |
//! |--------|-------------------------|------|
//! | Old    | 2,50,000                | 0%   |
//! | Old    | 5,00,000                | 5%   |
//! | Old    | 10,00,000               | 20%  |
//! | Old    | and above               | 30%  |
//! | New    | 2,50,000                | 0%   |
//! | New    | 5,00,000                | 5%   |
//! | New    | 7,50,000                | 10%  |
//! | New    | 10,00,000               | 15%  |
//! | New    | 12,50,000               | 20%  |
//! | New    | 15,00,000               | 25%  |
//! | New    | and above               | 30%  |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use payslip_core::TaxRegime;
//! use payslip_core::calculations::{annual_to_monthly, estimate_annual_tax};
//!
//! let annual = estimate_annual_tax(dec!(750000), TaxRegime::Old);
//!
//! assert_eq!(annual, dec!(65000));
//! assert_eq!(annual_to_monthly(annual), dec!(5417));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::round_half_up;
use crate::calculations::slab::accumulate_slab_tax;
use crate::{Bracket, TaxRegime};

/// Health and education cess charged on top of the base tax.
pub const CESS_RATE: Decimal = dec!(0.04);

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Slab table for the old regime.
pub const OLD_REGIME_BRACKETS: [Bracket; 4] = [
    Bracket::new(dec!(250000), dec!(0)),
    Bracket::new(dec!(500000), dec!(0.05)),
    Bracket::new(dec!(1000000), dec!(0.20)),
    Bracket::new(dec!(0), dec!(0.30)),
];

/// Slab table for the new regime.
pub const NEW_REGIME_BRACKETS: [Bracket; 7] = [
    Bracket::new(dec!(250000), dec!(0)),
    Bracket::new(dec!(500000), dec!(0.05)),
    Bracket::new(dec!(750000), dec!(0.10)),
    Bracket::new(dec!(1000000), dec!(0.15)),
    Bracket::new(dec!(1250000), dec!(0.20)),
    Bracket::new(dec!(1500000), dec!(0.25)),
    Bracket::new(dec!(0), dec!(0.30)),
];

/// Returns the slab table for `regime`.
pub fn brackets_for(regime: TaxRegime) -> &'static [Bracket] {
    match regime {
        TaxRegime::Old => &OLD_REGIME_BRACKETS,
        TaxRegime::New => &NEW_REGIME_BRACKETS,
    }
}

/// Estimates annual income tax, cess included, for `annual_taxable_income`.
///
/// The income is expected to already be net of the standard deduction and
/// any pre-tax contributions. Non-positive income is never taxed. The
/// result is a whole currency amount.
pub fn estimate_annual_tax(
    annual_taxable_income: Decimal,
    regime: TaxRegime,
) -> Decimal {
    if annual_taxable_income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let base_tax = accumulate_slab_tax(annual_taxable_income, brackets_for(regime));
    let cess = base_tax * CESS_RATE;
    let total = round_half_up(base_tax + cess);

    debug!(
        regime = regime.as_str(),
        income = %annual_taxable_income,
        %base_tax,
        %cess,
        %total,
        "estimated annual tax"
    );

    total
}

/// [`estimate_annual_tax`] under the default (old) regime.
pub fn estimate_annual_tax_default(annual_taxable_income: Decimal) -> Decimal {
    estimate_annual_tax(annual_taxable_income, TaxRegime::default())
}

/// Spreads an annual amount evenly over twelve months.
///
/// Rounds half-up on the signed value, so negative amounts are accepted.
pub fn annual_to_monthly(annual_amount: Decimal) -> Decimal {
    round_half_up(annual_amount / MONTHS_PER_YEAR)
}

/// Annual and monthly tax under one regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeEstimate {
    pub regime: TaxRegime,
    pub annual_tax: Decimal,
    pub monthly_tax: Decimal,
}

impl RegimeEstimate {
    pub fn for_income(
        annual_taxable_income: Decimal,
        regime: TaxRegime,
    ) -> Self {
        let annual_tax = estimate_annual_tax(annual_taxable_income, regime);
        Self {
            regime,
            annual_tax,
            monthly_tax: annual_to_monthly(annual_tax),
        }
    }
}

/// Side-by-side estimate of both regimes for the same income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeComparison {
    pub old: RegimeEstimate,
    pub new: RegimeEstimate,
}

impl RegimeComparison {
    /// The regime with the lower annual tax. Ties favour the old regime.
    pub fn cheaper(&self) -> TaxRegime {
        if self.new.annual_tax < self.old.annual_tax {
            TaxRegime::New
        } else {
            TaxRegime::Old
        }
    }

    /// Absolute difference in annual tax between the two regimes.
    pub fn annual_saving(&self) -> Decimal {
        (self.old.annual_tax - self.new.annual_tax).abs()
    }
}

/// Estimates `annual_taxable_income` under both regimes.
pub fn compare_regimes(annual_taxable_income: Decimal) -> RegimeComparison {
    RegimeComparison {
        old: RegimeEstimate::for_income(annual_taxable_income, TaxRegime::Old),
        new: RegimeEstimate::for_income(annual_taxable_income, TaxRegime::New),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::calculations::slab::validate_brackets;

    // =========================================================================
    // table tests
    // =========================================================================

    #[test]
    fn compiled_tables_are_well_formed() {
        assert_eq!(validate_brackets(&OLD_REGIME_BRACKETS), Ok(()));
        assert_eq!(validate_brackets(&NEW_REGIME_BRACKETS), Ok(()));
    }

    #[test]
    fn brackets_for_selects_regime_table() {
        assert_eq!(brackets_for(TaxRegime::Old).len(), 4);
        assert_eq!(brackets_for(TaxRegime::New).len(), 7);
    }

    // =========================================================================
    // estimate_annual_tax tests
    // =========================================================================

    #[test]
    fn estimate_returns_zero_for_non_positive_income() {
        for regime in TaxRegime::ALL {
            assert_eq!(estimate_annual_tax(dec!(0), regime), dec!(0));
            assert_eq!(estimate_annual_tax(dec!(-1), regime), dec!(0));
            assert_eq!(estimate_annual_tax(dec!(-1000000), regime), dec!(0));
        }
    }

    #[test]
    fn estimate_old_regime_nil_slab_boundary() {
        let result = estimate_annual_tax(dec!(250000), TaxRegime::Old);

        assert_eq!(result, dec!(0));
    }

    #[test]
    fn estimate_old_regime_second_slab_boundary() {
        let result = estimate_annual_tax(dec!(500000), TaxRegime::Old);

        // 250000 * 5% = 12500, plus 4% cess = 13000
        assert_eq!(result, dec!(13000));
    }

    #[test]
    fn estimate_old_regime_inside_third_slab() {
        let result = estimate_annual_tax(dec!(750000), TaxRegime::Old);

        // 12500 + 250000 * 20% = 62500, plus cess = 65000
        assert_eq!(result, dec!(65000));
    }

    #[test]
    fn estimate_old_regime_top_slab() {
        let result = estimate_annual_tax(dec!(1500000), TaxRegime::Old);

        // 12500 + 100000 + 500000 * 30% = 262500, plus cess = 273000
        assert_eq!(result, dec!(273000));
    }

    #[test]
    fn estimate_new_regime_inside_third_slab() {
        let result = estimate_annual_tax(dec!(600000), TaxRegime::New);

        // 12500 + 100000 * 10% = 22500, plus cess = 23400
        assert_eq!(result, dec!(23400));
    }

    #[test]
    fn estimate_new_regime_last_bounded_slab() {
        let result = estimate_annual_tax(dec!(1500000), TaxRegime::New);

        // 12500 + 25000 + 37500 + 50000 + 62500 = 187500, plus cess = 195000
        assert_eq!(result, dec!(195000));
    }

    #[test]
    fn estimate_new_regime_top_slab() {
        let result = estimate_annual_tax(dec!(2000000), TaxRegime::New);

        // 187500 + 500000 * 30% = 337500, plus cess = 351000
        assert_eq!(result, dec!(351000));
    }

    #[test]
    fn estimate_rounds_cess_to_whole_unit() {
        let result = estimate_annual_tax(dec!(250010), TaxRegime::Old);

        // 10 * 5% = 0.5, plus cess = 0.52
        assert_eq!(result, dec!(1));
    }

    #[test]
    fn estimate_default_matches_old_regime() {
        assert_eq!(
            estimate_annual_tax_default(dec!(500000)),
            estimate_annual_tax(dec!(500000), TaxRegime::Old)
        );
    }

    #[test]
    fn estimate_is_monotonic_over_many_incomes() {
        for regime in TaxRegime::ALL {
            let mut previous = Decimal::ZERO;
            for step in 0..1000u32 {
                let income = Decimal::from(step) * dec!(2500);
                let tax = estimate_annual_tax(income, regime);

                assert!(
                    tax >= previous,
                    "{} regime tax dropped at income {income}",
                    regime.as_str()
                );
                if income > dec!(260000) {
                    let lower = estimate_annual_tax(income - dec!(2500), regime);
                    assert!(tax > lower, "tax flat at income {income}");
                }
                previous = tax;
            }
        }
    }

    #[test]
    fn estimate_is_idempotent() {
        let first = estimate_annual_tax(dec!(987654), TaxRegime::New);

        for _ in 0..3 {
            assert_eq!(estimate_annual_tax(dec!(987654), TaxRegime::New), first);
        }
    }

    // =========================================================================
    // annual_to_monthly tests
    // =========================================================================

    #[test]
    fn annual_to_monthly_divides_evenly() {
        assert_eq!(annual_to_monthly(dec!(12000)), dec!(1000));
    }

    #[test]
    fn annual_to_monthly_rounds_fraction_down() {
        assert_eq!(annual_to_monthly(dec!(13000)), dec!(1083));
        assert_eq!(annual_to_monthly(dec!(13)), dec!(1));
    }

    #[test]
    fn annual_to_monthly_rounds_fraction_up() {
        assert_eq!(annual_to_monthly(dec!(19)), dec!(2));
    }

    #[test]
    fn annual_to_monthly_rounds_midpoint_up() {
        assert_eq!(annual_to_monthly(dec!(6)), dec!(1));
        assert_eq!(annual_to_monthly(dec!(30)), dec!(3));
        assert_eq!(annual_to_monthly(dec!(-6)), dec!(0));
        assert_eq!(annual_to_monthly(dec!(-30)), dec!(-2));
    }

    #[test]
    fn annual_to_monthly_handles_negative_amounts() {
        assert_eq!(annual_to_monthly(dec!(-12000)), dec!(-1000));
    }

    #[test]
    fn annual_to_monthly_handles_zero() {
        assert_eq!(annual_to_monthly(dec!(0)), dec!(0));
    }

    #[test]
    fn annual_to_monthly_is_idempotent() {
        for _ in 0..3 {
            assert_eq!(annual_to_monthly(dec!(-30)), dec!(-2));
            assert_eq!(annual_to_monthly(dec!(65000)), dec!(5417));
        }
    }

    // =========================================================================
    // compare_regimes tests
    // =========================================================================

    #[test]
    fn compare_prefers_new_regime_when_cheaper() {
        let comparison = compare_regimes(dec!(1500000));

        assert_eq!(comparison.old.annual_tax, dec!(273000));
        assert_eq!(comparison.new.annual_tax, dec!(195000));
        assert_eq!(comparison.cheaper(), TaxRegime::New);
        assert_eq!(comparison.annual_saving(), dec!(78000));
    }

    #[test]
    fn compare_ties_favour_old_regime() {
        let comparison = compare_regimes(dec!(500000));

        assert_eq!(comparison.old.annual_tax, comparison.new.annual_tax);
        assert_eq!(comparison.cheaper(), TaxRegime::Old);
        assert_eq!(comparison.annual_saving(), dec!(0));
    }

    #[test]
    fn compare_includes_monthly_figures() {
        let comparison = compare_regimes(dec!(600000));

        assert_eq!(comparison.new.monthly_tax, dec!(1950));
        // 12500 + 100000 * 20% = 32500, plus cess = 33800
        assert_eq!(comparison.old.annual_tax, dec!(33800));
        assert_eq!(comparison.old.monthly_tax, dec!(2817));
    }
}

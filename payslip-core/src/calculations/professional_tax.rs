//! State professional tax on monthly gross salary.
//!
//! Professional tax is a flat amount chosen by the bracket the monthly gross
//! falls into. Each jurisdiction is looked up by its exact, case-sensitive
//! name; any other name is resolved against the fallback jurisdiction.
//!
//! Every jurisdiction currently shares one slab list:
//!
//! | Monthly gross from | Professional tax |
//! |--------------------|------------------|
//! | 0                  | 0                |
//! | 10,000             | 0                |
//! | 15,000             | 150              |
//! | 25,000             | 200              |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use payslip_core::calculations::compute_professional_tax;
//!
//! assert_eq!(compute_professional_tax("Maharashtra", dec!(18000)), dec!(150));
//! assert_eq!(compute_professional_tax("Atlantis", dec!(30000)), dec!(200));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single professional tax bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionalTaxSlab {
    /// Lowest monthly gross, inclusive, the bracket applies to.
    pub threshold: Decimal,
    pub amount: Decimal,
}

impl ProfessionalTaxSlab {
    pub const fn new(
        threshold: Decimal,
        amount: Decimal,
    ) -> Self {
        Self { threshold, amount }
    }
}

/// Jurisdiction whose slabs are used when a name has no exact match.
pub const FALLBACK_JURISDICTION: &str = "Gujarat";

// All states share one slab list for now; rates for individual states have
// not been modelled.
const STANDARD_SLABS: [ProfessionalTaxSlab; 4] = [
    ProfessionalTaxSlab::new(dec!(0), dec!(0)),
    ProfessionalTaxSlab::new(dec!(10000), dec!(0)),
    ProfessionalTaxSlab::new(dec!(15000), dec!(150)),
    ProfessionalTaxSlab::new(dec!(25000), dec!(200)),
];

/// Jurisdiction name to ascending slab list.
const PROFESSIONAL_TAX_TABLE: [(&str, &[ProfessionalTaxSlab]); 3] = [
    ("Gujarat", &STANDARD_SLABS),
    ("Karnataka", &STANDARD_SLABS),
    ("Maharashtra", &STANDARD_SLABS),
];

/// Outcome of looking up a jurisdiction name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jurisdiction {
    /// Table key whose slabs will be used.
    pub name: &'static str,
    /// True when the requested name was not a known key.
    pub is_fallback: bool,
    pub slabs: &'static [ProfessionalTaxSlab],
}

/// Names with their own entry in the professional tax table, sorted.
pub fn known_jurisdictions() -> Vec<&'static str> {
    let mut names: Vec<_> = PROFESSIONAL_TAX_TABLE.iter().map(|(name, _)| *name).collect();
    names.sort_unstable();
    names
}

fn lookup(name: &str) -> Option<(&'static str, &'static [ProfessionalTaxSlab])> {
    PROFESSIONAL_TAX_TABLE
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(key, slabs)| (*key, *slabs))
}

/// Resolves `name` to its table entry, falling back to
/// [`FALLBACK_JURISDICTION`] when there is no exact match.
pub fn resolve_jurisdiction(name: &str) -> Jurisdiction {
    match lookup(name) {
        Some((key, slabs)) => Jurisdiction {
            name: key,
            is_fallback: false,
            slabs,
        },
        None => Jurisdiction {
            name: FALLBACK_JURISDICTION,
            is_fallback: true,
            slabs: lookup(FALLBACK_JURISDICTION)
                .map(|(_, slabs)| slabs)
                .unwrap_or(&STANDARD_SLABS),
        },
    }
}

/// Picks the amount of the highest slab whose threshold does not exceed
/// `monthly_gross_income`, or the lowest slab's amount when the income is
/// below every threshold.
pub fn resolve_slab_amount(
    slabs: &[ProfessionalTaxSlab],
    monthly_gross_income: Decimal,
) -> Decimal {
    slabs
        .iter()
        .rev()
        .find(|slab| slab.threshold <= monthly_gross_income)
        .or_else(|| slabs.first())
        .map(|slab| slab.amount)
        .unwrap_or(Decimal::ZERO)
}

/// Monthly professional tax owed in `jurisdiction_name` on
/// `monthly_gross_income`.
pub fn compute_professional_tax(
    jurisdiction_name: &str,
    monthly_gross_income: Decimal,
) -> Decimal {
    let jurisdiction = resolve_jurisdiction(jurisdiction_name);
    let amount = resolve_slab_amount(jurisdiction.slabs, monthly_gross_income);

    debug!(
        requested = jurisdiction_name,
        resolved = jurisdiction.name,
        fallback = jurisdiction.is_fallback,
        gross = %monthly_gross_income,
        %amount,
        "resolved professional tax"
    );

    amount
}

//! Payroll calculation modules.
//!
//! This module provides the statutory deduction engine (progressive income
//! tax and state professional tax) and the salary slip ledger that applies it.

pub mod common;
pub mod income_tax;
pub mod ledger;
pub mod professional_tax;
pub mod slab;

pub use income_tax::{
    CESS_RATE, NEW_REGIME_BRACKETS, OLD_REGIME_BRACKETS, RegimeComparison, RegimeEstimate,
    annual_to_monthly, brackets_for, compare_regimes, estimate_annual_tax,
    estimate_annual_tax_default,
};
pub use ledger::{
    PROFESSIONAL_TAX_LABEL, SalarySlip, SlipError, SlipSummary, StatutoryDeductions,
    StatutoryOptions, TDS_LABEL,
};
pub use professional_tax::{
    FALLBACK_JURISDICTION, Jurisdiction, ProfessionalTaxSlab, compute_professional_tax,
    known_jurisdictions, resolve_jurisdiction,
};
pub use slab::{BracketTableError, accumulate_slab_tax, validate_brackets};

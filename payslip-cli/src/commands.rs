//! Command handlers for the `payslip` binary.
//!
//! Each handler returns the text to print so that output can be checked in
//! tests without capturing stdout.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use tracing::{info, warn};

use payslip_core::TaxRegime;
use payslip_core::calculations::{
    RegimeEstimate, brackets_for, compare_regimes, compute_professional_tax, known_jurisdictions,
    resolve_jurisdiction, validate_brackets,
};
use payslip_data::{RosterLoader, SlipDocument};

use crate::utils::format_amount;

/// Annual and monthly tax for one regime.
pub fn estimate_report(
    annual_taxable_income: Decimal,
    regime: TaxRegime,
) -> String {
    let estimate = RegimeEstimate::for_income(annual_taxable_income, regime);

    format!(
        "Regime:             {}\n\
         Taxable income:     {}\n\
         Annual tax (+cess): {}\n\
         Monthly TDS:        {}",
        regime.to_long_str(),
        format_amount(annual_taxable_income),
        format_amount(estimate.annual_tax),
        format_amount(estimate.monthly_tax)
    )
}

/// Both regimes side by side with the cheaper one called out.
pub fn comparison_report(annual_taxable_income: Decimal) -> String {
    let comparison = compare_regimes(annual_taxable_income);

    let mut out = format!("Taxable income: {}\n", format_amount(annual_taxable_income));
    out.push_str(&format!("{:<12}{:>14}{:>14}\n", "Regime", "Annual", "Monthly"));
    for estimate in [comparison.old, comparison.new] {
        out.push_str(&format!(
            "{:<12}{:>14}{:>14}\n",
            estimate.regime.as_str(),
            format_amount(estimate.annual_tax),
            format_amount(estimate.monthly_tax)
        ));
    }
    out.push_str(&format!(
        "Cheaper: {} (saves {} a year)",
        comparison.cheaper().to_long_str(),
        format_amount(comparison.annual_saving())
    ));
    out
}

/// Professional tax for one state, warning when the name is not a known key.
pub fn professional_tax_report(
    state: &str,
    monthly_gross: Decimal,
) -> String {
    let jurisdiction = resolve_jurisdiction(state);
    if jurisdiction.is_fallback {
        warn!(
            requested = state,
            fallback = jurisdiction.name,
            known = ?known_jurisdictions(),
            "unknown state, using fallback professional tax slabs"
        );
    }

    let amount = compute_professional_tax(state, monthly_gross);

    format!(
        "State:            {} (slabs: {})\n\
         Monthly gross:    {}\n\
         Professional tax: {}",
        state,
        jurisdiction.name,
        format_amount(monthly_gross),
        format_amount(amount)
    )
}

/// The slab table for `regime`, after checking it is well formed.
pub fn brackets_report(regime: TaxRegime) -> Result<String> {
    let brackets = brackets_for(regime);
    validate_brackets(brackets)
        .with_context(|| format!("{} bracket table is malformed", regime.as_str()))?;

    let mut lines = vec![regime.to_long_str().to_string()];
    let mut lower = Decimal::ZERO;
    for bracket in brackets {
        let range = match bracket.upper_bound() {
            Some(upper) => format!("{} - {}", format_amount(lower), format_amount(upper)),
            None => format!("{} and above", format_amount(lower)),
        };
        lines.push(format!(
            "  {:<28}{:>5}%",
            range,
            (bracket.rate * Decimal::ONE_HUNDRED).normalize()
        ));
        lower = bracket.upper_bound_inclusive;
    }
    Ok(lines.join("\n"))
}

/// Loads a slip document, optionally resolving its employee in a roster,
/// applies statutory deductions and renders the slip.
pub fn slip_report(
    file: &Path,
    roster: Option<&Path>,
    apply_statutory: bool,
) -> Result<String> {
    let employees = match roster {
        Some(path) => {
            let reader = File::open(path)
                .with_context(|| format!("Failed to open roster: {}", path.display()))?;
            RosterLoader::parse_employees(reader)
                .with_context(|| format!("Failed to parse roster: {}", path.display()))?
        }
        None => Vec::new(),
    };

    let document = SlipDocument::load(file)
        .with_context(|| format!("Failed to load slip: {}", file.display()))?;
    let (mut slip, options) = document
        .into_parts(&employees)
        .with_context(|| format!("Slip is not valid: {}", file.display()))?;

    let mut out = String::new();
    if apply_statutory {
        let statutory = slip
            .apply_statutory_deductions(&options)
            .with_context(|| format!("Failed to apply statutory deductions: {}", file.display()))?;
        if statutory.jurisdiction_is_fallback {
            warn!(
                fallback = %statutory.jurisdiction,
                "slip state is not a known jurisdiction, using fallback professional tax slabs"
            );
        }
        info!(
            employee = %slip.employee.employee_code,
            regime = statutory.regime.as_str(),
            annual_tax = %statutory.annual_tax,
            "statutory deductions applied"
        );
        out.push_str(&format!(
            "{} | taxable {} | annual tax {} | {} slabs\n\n",
            statutory.regime.to_long_str(),
            format_amount(statutory.annual_taxable_income),
            format_amount(statutory.annual_tax),
            statutory.jurisdiction
        ));
    }

    let summary = slip
        .summary()
        .with_context(|| format!("Failed to total slip: {}", file.display()))?;
    out.push_str(&summary.to_string());
    Ok(out)
}

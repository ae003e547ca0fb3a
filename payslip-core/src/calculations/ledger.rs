//! Salary slip ledger and statutory deductions.
//!
//! A [`SalarySlip`] holds the employee and company the slip is issued for,
//! the pay period, attendance, and two ordered lists of line items: income
//! and deductions. Gross pay, total deductions and net pay are derived from
//! those lists on demand.
//!
//! [`SalarySlip::apply_statutory_deductions`] is the bridge to the tax
//! engine. It computes professional tax from the monthly gross and monthly
//! TDS from the annualised gross, then writes both back into the deduction
//! list.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use payslip_core::calculations::{SalarySlip, StatutoryOptions};
//! use payslip_core::{Employee, LineKind, PayPeriod, TaxRegime, WorkingDays};
//!
//! let employee = Employee {
//!     employee_code: "E001".to_string(),
//!     name: "Asha Patel".to_string(),
//!     state: Some("Gujarat".to_string()),
//!     ..Default::default()
//! };
//!
//! let mut slip = SalarySlip::new(PayPeriod::new(2025, 3), employee, WorkingDays::new(31, 31));
//! slip.add_line(LineKind::Income, "Basic", dec!(40000));
//! slip.add_line(LineKind::Income, "HRA", dec!(20000));
//!
//! let options = StatutoryOptions {
//!     regime: TaxRegime::New,
//!     ..Default::default()
//! };
//! let statutory = slip.apply_statutory_deductions(&options)?;
//!
//! assert_eq!(statutory.professional_tax, dec!(200));
//! // 60,000 x 12 = 7,20,000 taxable; 12,500 + 22,000 = 34,500 + cess = 35,880
//! assert_eq!(statutory.annual_tax, dec!(35880));
//! assert_eq!(statutory.monthly_tds, dec!(2990));
//! assert_eq!(slip.net_pay()?, dec!(56810));
//! # Ok::<(), payslip_core::calculations::SlipError>(())
//! ```
//!
//! Totals use checked arithmetic. An amount large enough to overflow
//! [`Decimal`] surfaces as [`SlipError::AmountOverflow`].

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::calculations::common::max;
use crate::calculations::income_tax::{annual_to_monthly, estimate_annual_tax};
use crate::calculations::professional_tax::{compute_professional_tax, resolve_jurisdiction};
use crate::{Company, Employee, LineItem, LineKind, PayPeriod, TaxRegime, WorkingDays};

/// Deduction label used for professional tax.
pub const PROFESSIONAL_TAX_LABEL: &str = "Professional Tax";

/// Deduction label used for monthly income tax withheld at source.
pub const TDS_LABEL: &str = "TDS";

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Validation failures for a salary slip.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlipError {
    #[error("invalid pay period {month:02}/{year}")]
    InvalidPayPeriod { year: i32, month: u32 },

    #[error("invalid working days: {paid} paid of {total} total")]
    InvalidWorkingDays { total: u32, paid: u32 },

    #[error("employee name is required")]
    MissingEmployeeName,

    #[error("{kind} line {index} has an empty label")]
    BlankLabel { kind: &'static str, index: usize },

    #[error("{kind} line '{label}' has a negative amount {amount}")]
    NegativeAmount {
        kind: &'static str,
        label: String,
        amount: Decimal,
    },

    #[error("{what} exceeds the supported amount range")]
    AmountOverflow { what: &'static str },
}

/// Caller-supplied settings for [`SalarySlip::apply_statutory_deductions`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryOptions {
    #[serde(default)]
    pub regime: TaxRegime,

    /// Overrides the employee and company state for professional tax.
    #[serde(default)]
    pub jurisdiction: Option<String>,

    /// Annual amount excluded from taxable income before slabs are applied
    /// (standard deduction, pre-tax contributions and similar).
    #[serde(default)]
    pub annual_exemptions: Decimal,
}

/// Figures produced by [`SalarySlip::apply_statutory_deductions`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryDeductions {
    pub regime: TaxRegime,
    pub jurisdiction: String,
    pub jurisdiction_is_fallback: bool,
    pub monthly_gross: Decimal,
    pub professional_tax: Decimal,
    pub annual_taxable_income: Decimal,
    pub annual_tax: Decimal,
    pub monthly_tds: Decimal,
}

/// A salary slip under composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalarySlip {
    pub pay_period: PayPeriod,
    pub employee: Employee,
    #[serde(default)]
    pub company: Company,
    pub working_days: WorkingDays,
    #[serde(default)]
    pub incomes: Vec<LineItem>,
    #[serde(default)]
    pub deductions: Vec<LineItem>,
}

impl SalarySlip {
    /// Creates an empty slip with no company and no line items.
    pub fn new(
        pay_period: PayPeriod,
        employee: Employee,
        working_days: WorkingDays,
    ) -> Self {
        Self {
            pay_period,
            employee,
            company: Company::default(),
            working_days,
            incomes: Vec::new(),
            deductions: Vec::new(),
        }
    }

    pub fn with_company(
        mut self,
        company: Company,
    ) -> Self {
        self.company = company;
        self
    }

    pub fn lines(
        &self,
        kind: LineKind,
    ) -> &[LineItem] {
        match kind {
            LineKind::Income => &self.incomes,
            LineKind::Deduction => &self.deductions,
        }
    }

    fn lines_mut(
        &mut self,
        kind: LineKind,
    ) -> &mut Vec<LineItem> {
        match kind {
            LineKind::Income => &mut self.incomes,
            LineKind::Deduction => &mut self.deductions,
        }
    }

    /// Appends a line, even if one with the same label already exists.
    pub fn add_line(
        &mut self,
        kind: LineKind,
        label: impl Into<String>,
        amount: Decimal,
    ) {
        self.lines_mut(kind).push(LineItem::new(label, amount));
    }

    /// Sets the amount of the first line labelled `label`, appending a new
    /// line when there is none.
    pub fn upsert_line(
        &mut self,
        kind: LineKind,
        label: &str,
        amount: Decimal,
    ) {
        let lines = self.lines_mut(kind);
        match lines.iter_mut().find(|line| line.label == label) {
            Some(line) => line.amount = amount,
            None => lines.push(LineItem::new(label, amount)),
        }
    }

    /// Removes and returns the first line labelled `label`.
    pub fn remove_line(
        &mut self,
        kind: LineKind,
        label: &str,
    ) -> Option<LineItem> {
        let lines = self.lines_mut(kind);
        let index = lines.iter().position(|line| line.label == label)?;
        Some(lines.remove(index))
    }

    pub fn gross_income(&self) -> Result<Decimal, SlipError> {
        sum_lines(&self.incomes, "gross income")
    }

    pub fn total_deductions(&self) -> Result<Decimal, SlipError> {
        sum_lines(&self.deductions, "total deductions")
    }

    /// Gross income minus deductions. Not clamped at zero.
    pub fn net_pay(&self) -> Result<Decimal, SlipError> {
        self.gross_income()?
            .checked_sub(self.total_deductions()?)
            .ok_or(SlipError::AmountOverflow { what: "net pay" })
    }

    /// Jurisdiction name used for professional tax when no override is given.
    pub fn default_jurisdiction(&self) -> Option<&str> {
        [self.employee.state.as_deref(), self.company.state.as_deref()]
            .into_iter()
            .flatten()
            .find(|state| !state.trim().is_empty())
    }

    /// Validates that the slip is complete enough to be issued.
    ///
    /// Rules:
    /// - pay period month is between 1 and 12
    /// - working days are positive, at most 31, and paid days do not exceed total
    /// - employee name is not blank
    /// - every line has a label and a non-negative amount
    /// - totals, and gross income annualised, fit in a [`Decimal`]
    pub fn validate(&self) -> Result<(), SlipError> {
        if !self.pay_period.is_valid() {
            return Err(SlipError::InvalidPayPeriod {
                year: self.pay_period.year,
                month: self.pay_period.month,
            });
        }

        if !self.working_days.is_valid() {
            return Err(SlipError::InvalidWorkingDays {
                total: self.working_days.total,
                paid: self.working_days.paid,
            });
        }

        if self.employee.name.trim().is_empty() {
            return Err(SlipError::MissingEmployeeName);
        }

        for kind in [LineKind::Income, LineKind::Deduction] {
            for (index, line) in self.lines(kind).iter().enumerate() {
                if line.label.trim().is_empty() {
                    return Err(SlipError::BlankLabel {
                        kind: kind.as_str(),
                        index,
                    });
                }
                if line.amount.is_sign_negative() && !line.amount.is_zero() {
                    return Err(SlipError::NegativeAmount {
                        kind: kind.as_str(),
                        label: line.label.clone(),
                        amount: line.amount,
                    });
                }
            }
        }

        self.net_pay()?;
        annualise(self.gross_income()?)?;

        Ok(())
    }

    /// Computes professional tax and monthly TDS and records them as
    /// deduction lines.
    ///
    /// A zero amount removes an existing line of that label instead of
    /// writing a zero row. Applying twice with the same options leaves the
    /// slip unchanged, since the statutory lines are deductions and do not
    /// feed back into gross income.
    ///
    /// On overflow the slip is left untouched.
    pub fn apply_statutory_deductions(
        &mut self,
        options: &StatutoryOptions,
    ) -> Result<StatutoryDeductions, SlipError> {
        let requested = options
            .jurisdiction
            .as_deref()
            .or(self.default_jurisdiction())
            .unwrap_or_default()
            .to_string();
        let jurisdiction = resolve_jurisdiction(&requested);

        let monthly_gross = self.gross_income()?;
        let professional_tax = compute_professional_tax(&requested, monthly_gross);

        let annual_taxable_income = annualise(monthly_gross)?
            .checked_sub(options.annual_exemptions)
            .map(|taxable| max(taxable, Decimal::ZERO))
            .ok_or(SlipError::AmountOverflow {
                what: "annual taxable income",
            })?;
        let annual_tax = estimate_annual_tax(annual_taxable_income, options.regime);
        let monthly_tds = annual_to_monthly(annual_tax);

        self.set_statutory_line(PROFESSIONAL_TAX_LABEL, professional_tax);
        self.set_statutory_line(TDS_LABEL, monthly_tds);

        debug!(
            employee = %self.employee.employee_code,
            period = %self.pay_period,
            jurisdiction = jurisdiction.name,
            %professional_tax,
            %monthly_tds,
            "applied statutory deductions"
        );

        Ok(StatutoryDeductions {
            regime: options.regime,
            jurisdiction: jurisdiction.name.to_string(),
            jurisdiction_is_fallback: jurisdiction.is_fallback,
            monthly_gross,
            professional_tax,
            annual_taxable_income,
            annual_tax,
            monthly_tds,
        })
    }

    fn set_statutory_line(
        &mut self,
        label: &str,
        amount: Decimal,
    ) {
        if amount.is_zero() {
            self.remove_line(LineKind::Deduction, label);
        } else {
            self.upsert_line(LineKind::Deduction, label, amount);
        }
    }

    /// Snapshot of the slip and its totals, suitable for display.
    pub fn summary(&self) -> Result<SlipSummary<'_>, SlipError> {
        Ok(SlipSummary {
            slip: self,
            gross_income: self.gross_income()?,
            total_deductions: self.total_deductions()?,
            net_pay: self.net_pay()?,
        })
    }
}

fn sum_lines(
    lines: &[LineItem],
    what: &'static str,
) -> Result<Decimal, SlipError> {
    lines.iter().try_fold(Decimal::ZERO, |total, line| {
        total
            .checked_add(line.amount)
            .ok_or(SlipError::AmountOverflow { what })
    })
}

fn annualise(monthly: Decimal) -> Result<Decimal, SlipError> {
    monthly
        .checked_mul(MONTHS_PER_YEAR)
        .ok_or(SlipError::AmountOverflow {
            what: "annual gross income",
        })
}

/// Terminal rendering of a [`SalarySlip`].
#[derive(Debug, Clone, Copy)]
pub struct SlipSummary<'a> {
    slip: &'a SalarySlip,
    pub gross_income: Decimal,
    pub total_deductions: Decimal,
    pub net_pay: Decimal,
}

fn opt_display(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

impl fmt::Display for SlipSummary<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let slip = self.slip;

        if !slip.company.name.is_empty() {
            writeln!(f, "{}", slip.company.name)?;
            if let Some(address) = &slip.company.address {
                writeln!(f, "{address}")?;
            }
            writeln!(f)?;
        }

        writeln!(f, "Payslip for {}", slip.pay_period)?;
        writeln!(f, "Employee:         {} ({})", slip.employee.name, slip.employee.employee_code)?;
        writeln!(f, "Designation:      {}", opt_display(&slip.employee.designation))?;
        writeln!(f, "Department:       {}", opt_display(&slip.employee.department))?;
        writeln!(f, "PAN:              {}", opt_display(&slip.employee.pan))?;
        writeln!(f, "Bank account:     {}", opt_display(&slip.employee.bank_account))?;
        writeln!(
            f,
            "Working days:     {} (paid {}, LOP {})",
            slip.working_days.total,
            slip.working_days.paid,
            slip.working_days.loss_of_pay_days()
        )?;

        writeln!(f)?;
        writeln!(f, "Earnings")?;
        for line in &slip.incomes {
            writeln!(f, "  {:<24}{:>12}", line.label, line.amount)?;
        }
        writeln!(f, "  {:<24}{:>12}", "Gross earnings", self.gross_income)?;

        writeln!(f)?;
        writeln!(f, "Deductions")?;
        for line in &slip.deductions {
            writeln!(f, "  {:<24}{:>12}", line.label, line.amount)?;
        }
        writeln!(f, "  {:<24}{:>12}", "Total deductions", self.total_deductions)?;

        writeln!(f)?;
        write!(f, "Net pay:          {}", self.net_pay)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn test_employee() -> Employee {
        Employee {
            employee_code: "E001".to_string(),
            name: "Asha Patel".to_string(),
            designation: Some("Engineer".to_string()),
            state: Some("Maharashtra".to_string()),
            ..Default::default()
        }
    }

    fn test_slip() -> SalarySlip {
        let mut slip = SalarySlip::new(
            PayPeriod::new(2025, 3),
            test_employee(),
            WorkingDays::new(31, 30),
        )
        .with_company(Company {
            name: "Acme Pvt Ltd".to_string(),
            address: Some("Pune".to_string()),
            state: Some("Karnataka".to_string()),
        });
        slip.add_line(LineKind::Income, "Basic", dec!(50000));
        slip.add_line(LineKind::Income, "HRA", dec!(25000));
        slip.add_line(LineKind::Income, "Special Allowance", dec!(25000));
        slip.add_line(LineKind::Deduction, "Provident Fund", dec!(1800));
        slip
    }

    // =========================================================================
    // totals tests
    // =========================================================================

    #[test]
    fn totals_sum_line_items() {
        let slip = test_slip();

        assert_eq!(slip.gross_income(), Ok(dec!(100000)));
        assert_eq!(slip.total_deductions(), Ok(dec!(1800)));
        assert_eq!(slip.net_pay(), Ok(dec!(98200)));
    }

    #[test]
    fn totals_of_empty_slip_are_zero() {
        let slip = SalarySlip::new(PayPeriod::new(2025, 1), test_employee(), WorkingDays::new(31, 31));

        assert_eq!(slip.gross_income(), Ok(dec!(0)));
        assert_eq!(slip.net_pay(), Ok(dec!(0)));
    }

    #[test]
    fn net_pay_may_be_negative() {
        let mut slip = test_slip();
        slip.add_line(LineKind::Deduction, "Advance Recovery", dec!(200000));

        assert_eq!(slip.net_pay(), Ok(dec!(-101800)));
    }

    #[test]
    fn totals_report_overflow() {
        let mut slip = test_slip();
        slip.add_line(LineKind::Income, "Bonus", Decimal::MAX);

        assert_eq!(
            slip.gross_income(),
            Err(SlipError::AmountOverflow {
                what: "gross income"
            })
        );
        assert!(slip.summary().is_err());
    }

    // =========================================================================
    // line editing tests
    // =========================================================================

    #[test]
    fn upsert_replaces_existing_line() {
        let mut slip = test_slip();

        slip.upsert_line(LineKind::Income, "HRA", dec!(30000));

        assert_eq!(slip.incomes.len(), 3);
        assert_eq!(slip.incomes[1], LineItem::new("HRA", dec!(30000)));
    }

    #[test]
    fn upsert_appends_missing_line() {
        let mut slip = test_slip();

        slip.upsert_line(LineKind::Deduction, "Canteen", dec!(500));

        assert_eq!(slip.deductions.last(), Some(&LineItem::new("Canteen", dec!(500))));
    }

    #[test]
    fn upsert_matches_label_exactly() {
        let mut slip = test_slip();

        slip.upsert_line(LineKind::Income, "basic", dec!(1));

        assert_eq!(slip.incomes.len(), 4);
        assert_eq!(slip.incomes[0].amount, dec!(50000));
    }

    #[test]
    fn remove_line_returns_removed_item() {
        let mut slip = test_slip();

        let removed = slip.remove_line(LineKind::Deduction, "Provident Fund");

        assert_eq!(removed, Some(LineItem::new("Provident Fund", dec!(1800))));
        assert!(slip.deductions.is_empty());
        assert_eq!(slip.remove_line(LineKind::Deduction, "Provident Fund"), None);
    }

    // =========================================================================
    // validate tests
    // =========================================================================

    #[test]
    fn validate_accepts_complete_slip() {
        assert_eq!(test_slip().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_bad_month() {
        let mut slip = test_slip();
        slip.pay_period = PayPeriod::new(2025, 13);

        assert_eq!(
            slip.validate(),
            Err(SlipError::InvalidPayPeriod {
                year: 2025,
                month: 13
            })
        );
    }

    #[test]
    fn validate_rejects_paid_days_above_total() {
        let mut slip = test_slip();
        slip.working_days = WorkingDays::new(30, 31);

        assert_eq!(
            slip.validate(),
            Err(SlipError::InvalidWorkingDays { total: 30, paid: 31 })
        );
    }

    #[test]
    fn validate_rejects_blank_employee_name() {
        let mut slip = test_slip();
        slip.employee.name = "   ".to_string();

        assert_eq!(slip.validate(), Err(SlipError::MissingEmployeeName));
    }

    #[test]
    fn validate_rejects_blank_label() {
        let mut slip = test_slip();
        slip.add_line(LineKind::Deduction, "", dec!(10));

        assert_eq!(
            slip.validate(),
            Err(SlipError::BlankLabel {
                kind: "deduction",
                index: 1
            })
        );
    }

    #[test]
    fn validate_rejects_negative_amount() {
        let mut slip = test_slip();
        slip.upsert_line(LineKind::Income, "HRA", dec!(-1));

        let err = slip.validate().unwrap_err();

        assert_eq!(
            err,
            SlipError::NegativeAmount {
                kind: "income",
                label: "HRA".to_string(),
                amount: dec!(-1),
            }
        );
    }

    #[test]
    fn validate_rejects_gross_too_large_to_annualise() {
        let mut slip = test_slip();
        slip.incomes = vec![LineItem::new("Basic", Decimal::MAX / dec!(10))];

        assert_eq!(
            slip.validate(),
            Err(SlipError::AmountOverflow {
                what: "annual gross income"
            })
        );
    }

    // =========================================================================
    // apply_statutory_deductions tests
    // =========================================================================

    #[test]
    fn statutory_uses_employee_state_by_default() {
        let mut slip = test_slip();

        let statutory = slip
            .apply_statutory_deductions(&StatutoryOptions::default())
            .unwrap();

        assert_eq!(statutory.jurisdiction, "Maharashtra");
        assert!(!statutory.jurisdiction_is_fallback);
    }

    #[test]
    fn statutory_falls_back_to_company_state() {
        let mut slip = test_slip();
        slip.employee.state = None;

        let statutory = slip
            .apply_statutory_deductions(&StatutoryOptions::default())
            .unwrap();

        assert_eq!(statutory.jurisdiction, "Karnataka");
    }

    #[test]
    fn statutory_override_wins() {
        let mut slip = test_slip();
        let options = StatutoryOptions {
            jurisdiction: Some("Gujarat".to_string()),
            ..Default::default()
        };

        let statutory = slip.apply_statutory_deductions(&options).unwrap();

        assert_eq!(statutory.jurisdiction, "Gujarat");
    }

    #[test]
    fn statutory_unknown_state_uses_fallback() {
        let mut slip = test_slip();
        slip.employee.state = Some("Goa".to_string());

        let statutory = slip
            .apply_statutory_deductions(&StatutoryOptions::default())
            .unwrap();

        assert!(statutory.jurisdiction_is_fallback);
        assert_eq!(statutory.professional_tax, dec!(200));
    }

    #[test]
    fn statutory_old_regime_figures() {
        let mut slip = test_slip();
        let options = StatutoryOptions {
            regime: TaxRegime::Old,
            annual_exemptions: dec!(200000),
            ..Default::default()
        };

        let statutory = slip.apply_statutory_deductions(&options).unwrap();

        // 100000 * 12 - 200000 = 1000000
        assert_eq!(statutory.annual_taxable_income, dec!(1000000));
        // 12500 + 100000 = 112500, plus cess = 117000
        assert_eq!(statutory.annual_tax, dec!(117000));
        assert_eq!(statutory.monthly_tds, dec!(9750));
        assert_eq!(statutory.professional_tax, dec!(200));
    }

    #[test]
    fn statutory_writes_deduction_lines() {
        let mut slip = test_slip();
        let options = StatutoryOptions {
            regime: TaxRegime::New,
            ..Default::default()
        };

        let statutory = slip.apply_statutory_deductions(&options).unwrap();

        // 1200000 new regime: 12500 + 25000 + 37500 + 40000 = 115000, plus cess = 119600
        assert_eq!(statutory.annual_tax, dec!(119600));
        assert_eq!(
            slip.deductions,
            vec![
                LineItem::new("Provident Fund", dec!(1800)),
                LineItem::new(PROFESSIONAL_TAX_LABEL, dec!(200)),
                LineItem::new(TDS_LABEL, dec!(9967)),
            ]
        );
        assert_eq!(slip.net_pay(), Ok(dec!(100000) - dec!(1800) - dec!(200) - dec!(9967)));
    }

    #[test]
    fn statutory_is_repeatable() {
        let mut slip = test_slip();
        let options = StatutoryOptions::default();

        let first = slip.apply_statutory_deductions(&options).unwrap();
        let after_first = slip.clone();
        let second = slip.apply_statutory_deductions(&options).unwrap();

        assert_eq!(first, second);
        assert_eq!(slip, after_first);
    }

    #[test]
    fn statutory_zero_amounts_remove_lines() {
        let mut slip = test_slip();
        slip.apply_statutory_deductions(&StatutoryOptions::default()).unwrap();

        for line in &mut slip.incomes {
            line.amount = dec!(1000);
        }
        let statutory = slip
            .apply_statutory_deductions(&StatutoryOptions::default())
            .unwrap();

        assert_eq!(statutory.professional_tax, dec!(0));
        assert_eq!(statutory.monthly_tds, dec!(0));
        assert_eq!(slip.deductions, vec![LineItem::new("Provident Fund", dec!(1800))]);
    }

    #[test]
    fn statutory_exemptions_larger_than_income_clamp_to_zero() {
        let mut slip = test_slip();
        let options = StatutoryOptions {
            annual_exemptions: dec!(5000000),
            ..Default::default()
        };

        let statutory = slip.apply_statutory_deductions(&options).unwrap();

        assert_eq!(statutory.annual_taxable_income, dec!(0));
        assert_eq!(statutory.annual_tax, dec!(0));
    }

    #[test]
    fn statutory_overflow_leaves_slip_untouched() {
        let mut slip = test_slip();
        slip.incomes = vec![LineItem::new("Basic", Decimal::MAX / dec!(10))];
        let before = slip.clone();

        let result = slip.apply_statutory_deductions(&StatutoryOptions::default());

        assert_eq!(
            result,
            Err(SlipError::AmountOverflow {
                what: "annual gross income"
            })
        );
        assert_eq!(slip, before);
    }

    // =========================================================================
    // summary tests
    // =========================================================================

    #[test]
    fn summary_lists_lines_and_totals() {
        let slip = test_slip();

        let text = slip.summary().unwrap().to_string();

        assert!(text.starts_with("Acme Pvt Ltd\nPune\n"));
        assert!(text.contains("Payslip for March 2025"));
        assert!(text.contains("Asha Patel (E001)"));
        assert!(text.contains("(paid 30, LOP 1)"));
        assert!(text.contains("Special Allowance"));
        assert!(text.contains("PAN:              -"));
        assert!(text.ends_with("Net pay:          98200"));
    }
}

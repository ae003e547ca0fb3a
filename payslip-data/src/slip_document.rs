//! TOML documents describing a single salary slip.
//!
//! ## Document Format
//!
//! | Key / table        | Required | Notes                                                  |
//! |--------------------|----------|--------------------------------------------------------|
//! | `employee_code`    | no       | Looked up in a roster when `[employee]` is absent       |
//! | `[period]`         | yes      | `year`, `month` (1-12)                                 |
//! | `[working_days]`   | no       | `total`, `paid`; defaults to the full calendar month   |
//! | `[employee]`       | no       | Inline employee record                                 |
//! | `[company]`        | no       | `name`, `address`, `state`                             |
//! | `[[incomes]]`      | no       | `label`, `amount`                                      |
//! | `[[deductions]]`   | no       | `label`, `amount`                                      |
//! | `[statutory]`      | no       | `regime` (`old`/`new`), `jurisdiction`, `annual_exemptions` |
//!
//! ### Example
//!
//! ```toml
//! employee_code = "E001"
//!
//! [period]
//! year = 2025
//! month = 3
//!
//! [company]
//! name = "Acme Pvt Ltd"
//! state = "Maharashtra"
//!
//! [[incomes]]
//! label = "Basic"
//! amount = 50000
//!
//! [statutory]
//! regime = "new"
//! annual_exemptions = 75000
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use payslip_core::calculations::{SalarySlip, SlipError, StatutoryOptions};
use payslip_core::{Company, Employee, LineItem, PayPeriod, WorkingDays};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::RosterLoader;

/// Errors that can occur while reading or resolving a slip document.
#[derive(Debug, Error)]
pub enum SlipDocumentError {
    #[error("cannot read slip document '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid slip document: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("slip names neither an inline employee nor an employee code")]
    MissingEmployee,

    #[error("employee '{0}' is not in the roster")]
    UnknownEmployee(String),

    #[error(transparent)]
    Invalid(#[from] SlipError),
}

/// A slip as written in a TOML file, before roster lookup and validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SlipDocument {
    #[serde(default)]
    pub employee_code: Option<String>,
    pub period: PayPeriod,
    #[serde(default)]
    pub working_days: Option<WorkingDays>,
    #[serde(default)]
    pub employee: Option<Employee>,
    #[serde(default)]
    pub company: Company,
    #[serde(default)]
    pub incomes: Vec<LineItem>,
    #[serde(default)]
    pub deductions: Vec<LineItem>,
    #[serde(default)]
    pub statutory: StatutoryOptions,
}

impl SlipDocument {
    pub fn from_toml_str(s: &str) -> Result<Self, SlipDocumentError> {
        Ok(toml::from_str(s)?)
    }

    /// Reads and parses the document at `path`.
    pub fn load(path: &Path) -> Result<Self, SlipDocumentError> {
        let contents = fs::read_to_string(path).map_err(|source| SlipDocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded slip document");
        Self::from_toml_str(&contents)
    }

    /// Picks the employee for the slip.
    ///
    /// An inline `[employee]` table wins; its code is filled from
    /// `employee_code` when left blank. Otherwise `employee_code` must match
    /// a roster entry exactly.
    pub fn resolve_employee(
        &self,
        roster: &[Employee],
    ) -> Result<Employee, SlipDocumentError> {
        match (&self.employee, &self.employee_code) {
            (Some(employee), code) => {
                let mut employee = employee.clone();
                if employee.employee_code.trim().is_empty() {
                    if let Some(code) = code {
                        employee.employee_code = code.clone();
                    }
                }
                Ok(employee)
            }
            (None, Some(code)) => RosterLoader::find_employee(roster, code)
                .cloned()
                .ok_or_else(|| SlipDocumentError::UnknownEmployee(code.clone())),
            (None, None) => Err(SlipDocumentError::MissingEmployee),
        }
    }

    /// Builds a validated [`SalarySlip`] and returns it with the statutory
    /// options from the document.
    pub fn into_parts(
        self,
        roster: &[Employee],
    ) -> Result<(SalarySlip, StatutoryOptions), SlipDocumentError> {
        let employee = self.resolve_employee(roster)?;

        let working_days = match self.working_days {
            Some(days) => days,
            None => {
                let days = self.period.days_in_month().ok_or(SlipError::InvalidPayPeriod {
                    year: self.period.year,
                    month: self.period.month,
                })?;
                WorkingDays::new(days, days)
            }
        };

        let slip = SalarySlip {
            pay_period: self.period,
            employee,
            company: self.company,
            working_days,
            incomes: self.incomes,
            deductions: self.deductions,
        };
        slip.validate()?;

        Ok((slip, self.statutory))
    }
}

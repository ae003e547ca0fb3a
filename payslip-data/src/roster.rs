use std::collections::HashSet;
use std::io::Read;

use chrono::NaiveDate;
use payslip_core::{Company, Employee};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading roster data.
#[derive(Debug, Error)]
pub enum RosterLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Row {row}: employee code is required")]
    MissingEmployeeCode { row: usize },

    #[error("Row {row}: name is required")]
    MissingName { row: usize },

    #[error("Duplicate employee code '{0}'")]
    DuplicateEmployeeCode(String),
}

impl From<csv::Error> for RosterLoaderError {
    fn from(err: csv::Error) -> Self {
        RosterLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from an employee roster CSV file.
///
/// Columns, matched by header name:
/// - `employee_code`: Unique employee identifier (required)
/// - `name`: Full name (required)
/// - `designation`, `department`, `pan`, `bank_account`: Optional text
/// - `date_of_joining`: Optional `YYYY-MM-DD` date
/// - `state`: Optional jurisdiction used for professional tax
///
/// Empty cells and missing optional columns are read as `None`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct EmployeeRecord {
    pub employee_code: String,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub designation: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub pan: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub bank_account: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub date_of_joining: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub state: Option<String>,
}

impl From<EmployeeRecord> for Employee {
    fn from(record: EmployeeRecord) -> Self {
        Employee {
            employee_code: record.employee_code.trim().to_string(),
            name: record.name.trim().to_string(),
            designation: record.designation,
            department: record.department,
            pan: record.pan,
            bank_account: record.bank_account,
            date_of_joining: record.date_of_joining,
            state: record.state,
        }
    }
}

/// A single record from a company CSV file with `name`, `address` and
/// `state` columns.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CompanyRecord {
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub state: Option<String>,
}

impl From<CompanyRecord> for Company {
    fn from(record: CompanyRecord) -> Self {
        Company {
            name: record.name.trim().to_string(),
            address: record.address,
            state: record.state,
        }
    }
}

fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()))
}

fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for employee and company records from CSV files.
///
/// The reader can be any type that implements `Read`, such as a file or a
/// byte slice.
pub struct RosterLoader;

impl RosterLoader {
    /// Parse employees from a roster CSV.
    ///
    /// Rows are returned in file order. Employee codes must be present and
    /// unique; names must be present.
    pub fn parse_employees<R: Read>(reader: R) -> Result<Vec<Employee>, RosterLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut employees = Vec::new();
        let mut seen = HashSet::new();

        for (index, result) in csv_reader.deserialize().enumerate() {
            let record: EmployeeRecord = result?;
            // Header is line 1.
            let row = index + 2;

            let employee = Employee::from(record);
            if employee.employee_code.is_empty() {
                return Err(RosterLoaderError::MissingEmployeeCode { row });
            }
            if employee.name.is_empty() {
                return Err(RosterLoaderError::MissingName { row });
            }
            if !seen.insert(employee.employee_code.clone()) {
                return Err(RosterLoaderError::DuplicateEmployeeCode(
                    employee.employee_code,
                ));
            }

            employees.push(employee);
        }

        debug!(count = employees.len(), "parsed employee roster");
        Ok(employees)
    }

    /// Parse companies from a CSV with `name`, `address` and `state` columns.
    pub fn parse_companies<R: Read>(reader: R) -> Result<Vec<Company>, RosterLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut companies = Vec::new();

        for (index, result) in csv_reader.deserialize().enumerate() {
            let record: CompanyRecord = result?;
            let company = Company::from(record);
            if company.name.is_empty() {
                return Err(RosterLoaderError::MissingName { row: index + 2 });
            }
            companies.push(company);
        }

        debug!(count = companies.len(), "parsed company list");
        Ok(companies)
    }

    /// Finds the employee with exactly `employee_code`.
    pub fn find_employee<'a>(
        employees: &'a [Employee],
        employee_code: &str,
    ) -> Option<&'a Employee> {
        employees
            .iter()
            .find(|employee| employee.employee_code == employee_code)
    }
}

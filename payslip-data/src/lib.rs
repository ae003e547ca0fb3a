//! File loaders for employee rosters, company lists and slip documents.

mod roster;
mod slip_document;

pub use roster::{CompanyRecord, EmployeeRecord, RosterLoader, RosterLoaderError};
pub use slip_document::{SlipDocument, SlipDocumentError};

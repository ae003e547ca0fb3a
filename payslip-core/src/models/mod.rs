mod company;
mod employee;
mod line_item;
mod pay_period;
mod tax_bracket;
mod tax_regime;
mod working_days;

pub use company::Company;
pub use employee::Employee;
pub use line_item::{LineItem, LineKind};
pub use pay_period::PayPeriod;
pub use tax_bracket::Bracket;
pub use tax_regime::TaxRegime;
pub use working_days::WorkingDays;

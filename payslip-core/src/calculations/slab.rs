//! Marginal-rate accumulation across an ordered slab table.
//!
//! Each slab's rate applies only to the slice of income that falls inside
//! that slab. The top slab is open-ended and is marked by an upper bound of
//! zero.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use payslip_core::Bracket;
//! use payslip_core::calculations::slab::accumulate_slab_tax;
//!
//! let brackets = [
//!     Bracket::new(dec!(250000), dec!(0)),
//!     Bracket::new(dec!(500000), dec!(0.05)),
//!     Bracket::new(dec!(0), dec!(0.20)),
//! ];
//!
//! // 250,000 at 5% plus 100,000 at 20%
//! assert_eq!(accumulate_slab_tax(dec!(600000), &brackets), dec!(32500));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::trace;

use crate::Bracket;
use crate::calculations::common::{max, min};

/// Problems found in a slab table by [`validate_brackets`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BracketTableError {
    /// The table has no slabs at all.
    #[error("bracket table is empty")]
    Empty,

    /// A slab has a negative upper bound or rate.
    #[error("bracket {index} has a negative bound or rate")]
    Negative { index: usize },

    /// A bounded slab does not sit strictly above the previous one.
    #[error("bracket {index} upper bound {upper} does not exceed the previous bound {previous}")]
    NotAscending {
        index: usize,
        upper: Decimal,
        previous: Decimal,
    },

    /// An unbounded slab appears before the end of the table.
    #[error("unbounded bracket at position {index} is not the last bracket")]
    SentinelNotLast { index: usize },
}

/// Sums the tax owed on `income` by walking `brackets` in order.
///
/// The returned figure is neither rounded nor loaded with cess. Income at
/// or below zero yields zero. A table whose last slab is bounded simply
/// leaves any income above that bound untaxed.
pub fn accumulate_slab_tax(
    income: Decimal,
    brackets: &[Bracket],
) -> Decimal {
    let mut tax = Decimal::ZERO;
    let mut lower_bound = Decimal::ZERO;
    let mut remaining = income;

    for bracket in brackets {
        if remaining <= Decimal::ZERO {
            break;
        }

        let taxable = match bracket.upper_bound() {
            Some(upper) => max(min(remaining, upper - lower_bound), Decimal::ZERO),
            None => remaining,
        };

        tax += taxable * bracket.rate;
        remaining -= taxable;
        lower_bound = bracket.upper_bound_inclusive;

        trace!(%taxable, rate = %bracket.rate, running_tax = %tax, "slab applied");
    }

    tax
}

/// Checks that a slab table is ordered, non-negative and ends with at most
/// one unbounded slab.
pub fn validate_brackets(brackets: &[Bracket]) -> Result<(), BracketTableError> {
    if brackets.is_empty() {
        return Err(BracketTableError::Empty);
    }

    let last = brackets.len() - 1;
    let mut previous = Decimal::ZERO;

    for (index, bracket) in brackets.iter().enumerate() {
        if bracket.upper_bound_inclusive.is_sign_negative() || bracket.rate.is_sign_negative() {
            return Err(BracketTableError::Negative { index });
        }

        match bracket.upper_bound() {
            None if index != last => return Err(BracketTableError::SentinelNotLast { index }),
            None => {}
            Some(upper) if upper <= previous => {
                return Err(BracketTableError::NotAscending {
                    index,
                    upper,
                    previous,
                });
            }
            Some(upper) => previous = upper,
        }
    }

    Ok(())
}

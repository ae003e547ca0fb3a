use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One slab of a progressive income tax table.
///
/// `upper_bound_inclusive` of zero marks the final, unbounded slab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bracket {
    pub upper_bound_inclusive: Decimal,
    pub rate: Decimal,
}

impl Bracket {
    pub const fn new(
        upper_bound_inclusive: Decimal,
        rate: Decimal,
    ) -> Self {
        Self {
            upper_bound_inclusive,
            rate,
        }
    }

    /// The upper bound, or `None` for the open-ended top slab.
    pub fn upper_bound(&self) -> Option<Decimal> {
        if self.upper_bound_inclusive.is_zero() {
            None
        } else {
            Some(self.upper_bound_inclusive)
        }
    }
}

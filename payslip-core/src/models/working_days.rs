use serde::{Deserialize, Serialize};

/// Attendance figures printed on the slip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingDays {
    pub total: u32,
    pub paid: u32,
}

impl WorkingDays {
    pub const MAX_DAYS: u32 = 31;

    pub fn new(
        total: u32,
        paid: u32,
    ) -> Self {
        Self { total, paid }
    }

    /// Days in the period that were not paid.
    pub fn loss_of_pay_days(&self) -> u32 {
        self.total.saturating_sub(self.paid)
    }

    pub fn is_valid(&self) -> bool {
        self.total > 0 && self.total <= Self::MAX_DAYS && self.paid <= self.total
    }
}

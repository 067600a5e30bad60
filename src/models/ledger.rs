//! Owed-versus-paid accrual for fee and salary ledgers

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::helpers::months_between;

/// Derived balance of one student or teacher. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub months_elapsed: i64,
    pub total_due: f64,
    pub total_paid: f64,
    /// Negative when the account is paid in advance
    pub pending_amount: f64,
    pub paid_months: i64,
    pub pending_months: i64,
}

impl Balance {
    /// Accrue `monthly_rate` for every calendar month from `start` through `today`
    /// and net it against `total_paid`.
    pub fn compute(monthly_rate: f64, start: NaiveDate, total_paid: f64, today: NaiveDate) -> Self {
        let months_elapsed = months_between(start, today);
        let total_due = monthly_rate * months_elapsed as f64;
        let paid_months = if monthly_rate > 0.0 {
            (total_paid / monthly_rate).floor() as i64
        } else {
            0
        };

        Self {
            months_elapsed,
            total_due,
            total_paid,
            pending_amount: total_due - total_paid,
            paid_months,
            pending_months: months_elapsed - paid_months,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_same_month_enrollment_owes_one_month() {
        let balance = Balance::compute(1500.0, date(2024, 3, 28), 0.0, date(2024, 3, 30));
        assert_eq!(balance.months_elapsed, 1);
        assert_eq!(balance.total_due, 1500.0);
        assert_eq!(balance.pending_amount, 1500.0);
        assert_eq!(balance.paid_months, 0);
        assert_eq!(balance.pending_months, 1);
    }

    #[test]
    fn test_partial_payment() {
        let balance = Balance::compute(1000.0, date(2024, 1, 10), 2500.0, date(2024, 4, 2));
        assert_eq!(balance.months_elapsed, 4);
        assert_eq!(balance.total_due, 4000.0);
        assert_eq!(balance.pending_amount, 1500.0);
        assert_eq!(balance.paid_months, 2);
        assert_eq!(balance.pending_months, 2);
    }

    #[test]
    fn test_prepaid_goes_negative() {
        let balance = Balance::compute(1000.0, date(2024, 4, 1), 3000.0, date(2024, 4, 15));
        assert_eq!(balance.pending_amount, -2000.0);
        assert_eq!(balance.paid_months, 3);
        assert_eq!(balance.pending_months, -2);
    }

    #[test]
    fn test_free_enrollment_has_no_paid_months() {
        let balance = Balance::compute(0.0, date(2023, 4, 1), 0.0, date(2024, 4, 1));
        assert_eq!(balance.months_elapsed, 13);
        assert_eq!(balance.total_due, 0.0);
        assert_eq!(balance.paid_months, 0);
        assert_eq!(balance.pending_months, 13);
    }

    proptest! {
        #[test]
        fn prop_pending_is_due_minus_paid(
            fee in 0u32..100_000,
            paid in 0u32..5_000_000,
            start_offset in 0i64..3650,
            elapsed_days in 0i64..3650,
        ) {
            let start = date(2015, 1, 1) + chrono::Duration::days(start_offset);
            let today = start + chrono::Duration::days(elapsed_days);
            let fee = fee as f64;
            let paid = paid as f64;

            let balance = Balance::compute(fee, start, paid, today);

            prop_assert!(balance.months_elapsed >= 1);
            prop_assert_eq!(balance.total_due, fee * balance.months_elapsed as f64);
            prop_assert_eq!(balance.pending_amount, fee * balance.months_elapsed as f64 - paid);
            prop_assert_eq!(balance.pending_months, balance.months_elapsed - balance.paid_months);
        }
    }
}

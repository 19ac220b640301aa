//! Totals over a set of transactions.

use serde::{Deserialize, Serialize};

use super::core::{Transaction, TransactionType};

/// Income, expenses and what is left over.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// The sum of all income.
    pub income: f64,
    /// The sum of all expenses.
    pub expense: f64,
    /// Income minus expenses.
    pub balance: f64,
    /// The balance as a percentage of income, or zero if there is no income.
    pub savings_rate: f64,
}

impl Summary {
    /// Total up `transactions`.
    pub fn from_transactions<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Self {
        let (income, expense) =
            transactions
                .into_iter()
                .fold((0.0, 0.0), |(income, expense), transaction| {
                    match transaction.kind {
                        TransactionType::Income => (income + transaction.amount, expense),
                        TransactionType::Expense => (income, expense + transaction.amount),
                    }
                });

        let balance = income - expense;
        let savings_rate = if income > 0.0 {
            balance / income * 100.0
        } else {
            0.0
        };

        Self {
            income,
            expense,
            balance,
            savings_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use crate::{
        test_utils::assert_approx_eq,
        transaction::{Transaction, TransactionType, sample_transactions},
    };

    use super::Summary;

    #[test]
    fn empty_ledger_is_all_zero() {
        let got = Summary::from_transactions(&Vec::new());

        assert_eq!(got, Summary::default());
    }

    #[test]
    fn totals_sample_ledger() {
        let got = Summary::from_transactions(&sample_transactions());

        assert_approx_eq(got.income, 5970.0);
        assert_approx_eq(got.expense, 2466.15);
        assert_approx_eq(got.balance, 3503.85);
        assert_approx_eq(got.savings_rate, 3503.85 / 5970.0 * 100.0);
    }

    #[test]
    fn savings_rate_is_zero_without_income() {
        let transactions = vec![Transaction {
            id: "1".to_owned(),
            date: datetime!(2024-07-15 10:00:00 UTC),
            description: "Rent".to_owned(),
            amount: 1500.0,
            kind: TransactionType::Expense,
            category: "Housing".to_owned(),
        }];

        let got = Summary::from_transactions(&transactions);

        assert_eq!(got.balance, -1500.0);
        assert_eq!(got.savings_rate, 0.0);
    }
}

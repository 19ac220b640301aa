//! The sample ledger the server starts with.

use time::macros::datetime;

use super::core::{Transaction, TransactionType};

/// Ten sample transactions from July and August 2024, oldest first.
pub fn sample_transactions() -> Vec<Transaction> {
    use TransactionType::{Expense, Income};

    [
        ("1", datetime!(2024-07-15 10:00:00 UTC), "July salary", 5000.0, Income, "Salary"),
        ("2", datetime!(2024-07-15 12:30:00 UTC), "Rent", 1500.0, Expense, "Housing"),
        ("3", datetime!(2024-07-16 09:00:00 UTC), "Groceries", 350.75, Expense, "Food"),
        ("4", datetime!(2024-07-17 18:00:00 UTC), "Sold a used bike", 120.0, Income, "Side Income"),
        ("5", datetime!(2024-07-18 20:00:00 UTC), "Dinner out", 85.5, Expense, "Leisure"),
        ("6", datetime!(2024-07-20 11:00:00 UTC), "Internet bill", 99.9, Expense, "Bills"),
        ("7", datetime!(2024-07-22 14:00:00 UTC), "Expense refund", 50.0, Income, "Other"),
        ("8", datetime!(2024-07-25 08:00:00 UTC), "Petrol", 180.0, Expense, "Transport"),
        ("9", datetime!(2024-08-01 10:00:00 UTC), "Freelance payment", 800.0, Income, "Side Income"),
        ("10", datetime!(2024-08-02 15:00:00 UTC), "Concert tickets", 250.0, Expense, "Leisure"),
    ]
    .into_iter()
    .map(|(id, date, description, amount, kind, category)| Transaction {
        id: id.to_owned(),
        date,
        description: description.to_owned(),
        amount,
        kind,
        category: category.to_owned(),
    })
    .collect()
}

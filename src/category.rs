//! The suggested categories for new transactions.
//!
//! Transactions may use any non-empty category; these lists are what a
//! client offers the user to pick from.

use axum::Json;
use serde::{Deserialize, Serialize};

/// Suggested categories for income.
pub const INCOME_CATEGORIES: &[&str] = &["Salary", "Side Income", "Other"];

/// Suggested categories for expenses.
pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Housing",
    "Food",
    "Bills",
    "Leisure",
    "Transport",
    "Shopping",
    "Health",
    "Other",
];

/// The suggested categories, grouped by transaction type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Categories {
    /// Categories for income transactions.
    pub income: Vec<String>,
    /// Categories for expense transactions.
    pub expense: Vec<String>,
}

impl Default for Categories {
    fn default() -> Self {
        Self {
            income: INCOME_CATEGORIES.iter().map(|&name| name.to_owned()).collect(),
            expense: EXPENSE_CATEGORIES.iter().map(|&name| name.to_owned()).collect(),
        }
    }
}

/// A route handler for listing the suggested categories.
pub async fn get_categories_endpoint() -> Json<Categories> {
    Json(Categories::default())
}

#[cfg(test)]
mod tests {
    use crate::{
        endpoints,
        test_utils::{test_server, test_state},
    };

    use super::Categories;

    #[tokio::test]
    async fn lists_categories_by_type() {
        let server = test_server(test_state());

        let response = server.get(endpoints::CATEGORIES).await;

        response.assert_status_ok();
        let categories = response.json::<Categories>();
        assert!(categories.income.contains(&"Salary".to_owned()));
        assert!(categories.expense.contains(&"Housing".to_owned()));
    }

    #[test]
    fn both_types_have_a_fallback_category() {
        let categories = Categories::default();

        assert!(categories.income.contains(&"Other".to_owned()));
        assert!(categories.expense.contains(&"Other".to_owned()));
    }
}

//! Filtering and ordering of the ledger.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    Error,
    timestamp::{end_of_day, parse_timestamp},
};

use super::core::{Transaction, TransactionType};

/// The filter value that disables the type and category filters.
const ALL: &str = "all";

/// Defines which transactions are returned by [query].
///
/// Every field is optional and all supplied filters must match.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TransactionQuery {
    /// Keep only transactions of this type.
    pub kind: Option<TransactionType>,
    /// Keep only transactions with exactly this category.
    pub category: Option<String>,
    /// Keep only transactions on or after this instant.
    pub start: Option<OffsetDateTime>,
    /// Keep only transactions on or before this instant.
    pub end: Option<OffsetDateTime>,
    /// Keep only transactions with an amount of at least this value.
    pub min_amount: Option<f64>,
    /// Keep only transactions with an amount of at most this value.
    pub max_amount: Option<f64>,
}

impl TransactionQuery {
    /// Whether `transaction` satisfies every filter in the query.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        self.kind.is_none_or(|kind| transaction.kind == kind)
            && self
                .category
                .as_ref()
                .is_none_or(|category| &transaction.category == category)
            && self.start.is_none_or(|start| transaction.date >= start)
            && self.end.is_none_or(|end| transaction.date <= end)
            && self
                .min_amount
                .is_none_or(|min_amount| transaction.amount >= min_amount)
            && self
                .max_amount
                .is_none_or(|max_amount| transaction.amount <= max_amount)
    }
}

/// Select the transactions matching `filter`, most recent first.
///
/// Transactions with the same date keep their relative input order.
pub fn query<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
    filter: &TransactionQuery,
) -> Vec<Transaction> {
    let mut selected: Vec<Transaction> = transactions
        .into_iter()
        .filter(|transaction| filter.matches(transaction))
        .cloned()
        .collect();

    // `sort_by` is stable, so ties keep their input order.
    selected.sort_by(|a, b| b.date.cmp(&a.date));

    selected
}

/// The raw query string parameters for filtering transactions.
///
/// Empty values are treated as absent.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFilterParams {
    /// "income", "expense" or "all".
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// A category name or "all".
    pub category: Option<String>,
    /// A calendar date or RFC 3339 timestamp.
    pub start_date: Option<String>,
    /// A calendar date or RFC 3339 timestamp. The whole day is included.
    pub end_date: Option<String>,
    /// A number.
    pub min_amount: Option<String>,
    /// A number.
    pub max_amount: Option<String>,
}

impl TryFrom<TransactionFilterParams> for TransactionQuery {
    type Error = Error;

    fn try_from(params: TransactionFilterParams) -> Result<Self, Self::Error> {
        let kind = match non_empty(&params.kind) {
            None | Some(ALL) => None,
            Some(name) => Some(TransactionType::from_name(name).ok_or_else(|| {
                Error::InvalidFilter {
                    name: "type",
                    reason: format!("expected \"income\", \"expense\" or \"all\", got \"{name}\""),
                }
            })?),
        };

        let category = match non_empty(&params.category) {
            None | Some(ALL) => None,
            Some(category) => Some(category.to_owned()),
        };

        let start = non_empty(&params.start_date)
            .map(parse_timestamp)
            .transpose()?;

        let end = non_empty(&params.end_date)
            .map(parse_timestamp)
            .transpose()?
            .map(end_of_day);

        Ok(Self {
            kind,
            category,
            start,
            end,
            min_amount: parse_amount("minAmount", &params.min_amount)?,
            max_amount: parse_amount("maxAmount", &params.max_amount)?,
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|text| !text.is_empty())
}

fn parse_amount(name: &'static str, value: &Option<String>) -> Result<Option<f64>, Error> {
    let Some(text) = non_empty(value) else {
        return Ok(None);
    };

    match text.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(Some(amount)),
        _ => Err(Error::InvalidFilter {
            name,
            reason: format!("\"{text}\" is not a number"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use time::{OffsetDateTime, macros::datetime};

    use crate::{
        Error,
        transaction::{Transaction, TransactionQuery, TransactionType, sample_transactions},
    };

    use super::{TransactionFilterParams, query};

    fn transaction(id: &str, date: OffsetDateTime, amount: f64) -> Transaction {
        Transaction {
            id: id.to_owned(),
            date,
            description: format!("transaction #{id}"),
            amount,
            kind: TransactionType::Expense,
            category: "Other".to_owned(),
        }
    }

    fn ids(transactions: &[Transaction]) -> Vec<&str> {
        transactions.iter().map(|t| t.id.as_str()).collect()
    }

    fn params(pairs: &[(&str, &str)]) -> TransactionQuery {
        let mut params = TransactionFilterParams::default();
        for (key, value) in pairs {
            let value = Some(value.to_string());
            match *key {
                "type" => params.kind = value,
                "category" => params.category = value,
                "startDate" => params.start_date = value,
                "endDate" => params.end_date = value,
                "minAmount" => params.min_amount = value,
                "maxAmount" => params.max_amount = value,
                other => panic!("unknown parameter {other}"),
            }
        }

        TransactionQuery::try_from(params).expect("could not parse filter params")
    }

    #[test]
    fn empty_input_gives_empty_result() {
        let got = query(&Vec::new(), &TransactionQuery::default());

        assert!(got.is_empty());
    }

    #[test]
    fn sorts_most_recent_first() {
        let transactions = vec![
            transaction("1", datetime!(2024-07-15 10:00:00 UTC), 1.0),
            transaction("2", datetime!(2024-08-01 10:00:00 UTC), 1.0),
            transaction("3", datetime!(2024-07-20 10:00:00 UTC), 1.0),
        ];

        let got = query(&transactions, &TransactionQuery::default());

        assert_eq!(ids(&got), ["2", "3", "1"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let date = datetime!(2024-07-15 10:00:00 UTC);
        let transactions = vec![
            transaction("b", date, 1.0),
            transaction("a", date, 2.0),
            transaction("c", date, 3.0),
        ];

        let got = query(&transactions, &TransactionQuery::default());

        assert_eq!(ids(&got), ["b", "a", "c"]);
    }

    #[test]
    fn end_date_includes_last_millisecond_of_day() {
        let transactions = vec![
            transaction("last", datetime!(2024-07-20 23:59:59.999 UTC), 1.0),
            transaction("next", datetime!(2024-07-21 00:00:00 UTC), 1.0),
        ];

        let got = query(&transactions, &params(&[("endDate", "2024-07-20")]));

        assert_eq!(ids(&got), ["last"]);
    }

    #[test]
    fn start_date_is_inclusive() {
        let transactions = vec![
            transaction("before", datetime!(2024-07-19 23:59:59.999 UTC), 1.0),
            transaction("at", datetime!(2024-07-20 00:00:00 UTC), 1.0),
        ];

        let got = query(&transactions, &params(&[("startDate", "2024-07-20")]));

        assert_eq!(ids(&got), ["at"]);
    }

    #[test]
    fn amount_bounds_are_inclusive() {
        let date = datetime!(2024-07-15 10:00:00 UTC);
        let transactions = vec![
            transaction("low", date, 49.99),
            transaction("min", date, 50.0),
            transaction("max", date, 100.0),
            transaction("high", date, 100.01),
        ];

        let got = query(
            &transactions,
            &params(&[("minAmount", "50"), ("maxAmount", "100")]),
        );

        assert_eq!(ids(&got), ["min", "max"]);
    }

    #[test]
    fn all_disables_type_and_category() {
        let filter = params(&[("type", "all"), ("category", "all")]);

        assert_eq!(filter, TransactionQuery::default());
    }

    #[test]
    fn empty_values_are_ignored() {
        let filter = params(&[("type", ""), ("minAmount", " "), ("endDate", "")]);

        assert_eq!(filter, TransactionQuery::default());
    }

    #[test]
    fn rejects_unknown_type() {
        let result = TransactionQuery::try_from(TransactionFilterParams {
            kind: Some("transfer".to_owned()),
            ..Default::default()
        });

        assert!(matches!(result, Err(Error::InvalidFilter { name: "type", .. })));
    }

    #[test]
    fn rejects_malformed_amount() {
        let result = TransactionQuery::try_from(TransactionFilterParams {
            max_amount: Some("lots".to_owned()),
            ..Default::default()
        });

        assert!(matches!(
            result,
            Err(Error::InvalidFilter {
                name: "maxAmount",
                ..
            })
        ));
    }

    #[test]
    fn rejects_malformed_date() {
        let result = TransactionQuery::try_from(TransactionFilterParams {
            start_date: Some("yesterday".to_owned()),
            ..Default::default()
        });

        assert_eq!(result, Err(Error::InvalidDate("yesterday".to_owned())));
    }

    // Every combination of filters must return exactly the matching transactions.
    #[test]
    fn results_are_sound_and_complete() {
        let transactions = sample_transactions();
        let filters = [
            params(&[]),
            params(&[("type", "income")]),
            params(&[("type", "expense"), ("category", "Food")]),
            params(&[("startDate", "2024-07-16"), ("endDate", "2024-07-22")]),
            params(&[("minAmount", "85.5"), ("maxAmount", "250")]),
            params(&[
                ("type", "expense"),
                ("startDate", "2024-07-15"),
                ("endDate", "2024-07-31"),
                ("minAmount", "100"),
            ]),
            params(&[("category", "Nonexistent")]),
        ];

        for filter in &filters {
            let got = query(&transactions, filter);

            assert!(got.iter().all(|t| filter.matches(t)), "unsound for {filter:?}");
            let want_count = transactions.iter().filter(|t| filter.matches(t)).count();
            assert_eq!(got.len(), want_count, "incomplete for {filter:?}");
            assert!(
                got.windows(2).all(|pair| pair[0].date >= pair[1].date),
                "not sorted for {filter:?}"
            );
        }
    }

    #[test]
    fn combined_filters_on_sample_ledger() {
        let transactions = sample_transactions();

        let got = query(
            &transactions,
            &params(&[
                ("type", "expense"),
                ("startDate", "2024-07-15"),
                ("endDate", "2024-07-31"),
                ("minAmount", "100"),
            ]),
        );

        assert_eq!(ids(&got), ["8", "3", "2"]);
    }
}

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::types::{PageToken, Record};
use crate::error::StakeoutError;
use crate::poll::RetryPolicy;

/// Traversal direction over the native sort key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Caller-facing query bundle for the collection poller.
///
/// The key-condition expression addresses the table (or index) key schema
/// through `:placeholder` values; an optional post-filter expression prunes
/// matched rows server-side with its own placeholder values. Index, row cap,
/// consistency flag and continuation token are passed through to the store
/// unmodified.
#[derive(Debug, Clone)]
pub struct QuerySpec {
    pub table: String,
    pub key_condition: String,
    pub values: HashMap<String, Value>,
    pub names: Option<HashMap<String, String>>,
    pub index: Option<String>,
    pub limit: Option<u32>,
    pub filter: Option<String>,
    pub filter_values: Option<HashMap<String, Value>>,
    pub consistent_read: Option<bool>,
    pub start_token: Option<PageToken>,
    pub sort: SortOrder,
    /// Overrides the default 10 × 2 s poll policy for this call only.
    pub policy: Option<RetryPolicy>,
}

impl QuerySpec {
    pub fn new(table: impl Into<String>, key_condition: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            key_condition: key_condition.into(),
            values: HashMap::new(),
            names: None,
            index: None,
            limit: None,
            filter: None,
            filter_values: None,
            consistent_read: None,
            start_token: None,
            sort: SortOrder::default(),
            policy: None,
        }
    }

    /// Bind a key-condition placeholder to a literal value.
    pub fn value(mut self, placeholder: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(placeholder.into(), value.into());
        self
    }

    /// Map a name placeholder to a concrete attribute name.
    pub fn name(mut self, placeholder: impl Into<String>, attribute: impl Into<String>) -> Self {
        self.names
            .get_or_insert_with(HashMap::new)
            .insert(placeholder.into(), attribute.into());
        self
    }

    pub fn index(mut self, index: impl Into<String>) -> Self {
        self.index = Some(index.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn filter(mut self, expression: impl Into<String>) -> Self {
        self.filter = Some(expression.into());
        self
    }

    /// Bind a post-filter placeholder. Filter values share the namespace of
    /// the key-condition values; on a collision the filter value wins at
    /// lowering time (see [`QuerySpec::lower`]).
    pub fn filter_value(mut self, placeholder: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter_values
            .get_or_insert_with(HashMap::new)
            .insert(placeholder.into(), value.into());
        self
    }

    pub fn consistent(mut self) -> Self {
        self.consistent_read = Some(true);
        self
    }

    pub fn start_token(mut self, token: PageToken) -> Self {
        self.start_token = Some(token);
        self
    }

    pub fn descending(mut self) -> Self {
        self.sort = SortOrder::Descending;
        self
    }

    pub fn policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    pub(crate) fn validate(&self) -> Result<(), StakeoutError> {
        if self.table.trim().is_empty() {
            return Err(StakeoutError::Validation(
                "query table identifier must be non-empty".to_string(),
            ));
        }
        if self.key_condition.trim().is_empty() {
            return Err(StakeoutError::Validation(
                "query key condition must be non-empty".to_string(),
            ));
        }
        if self.limit == Some(0) {
            return Err(StakeoutError::Validation(
                "query limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Lower this bundle into the request handed to the store.
    ///
    /// Filter values are laid over the key-condition values in one shared
    /// namespace; on a placeholder collision the filter value wins. That
    /// precedence mirrors what callers have come to rely on, but colliding
    /// names are best avoided rather than leaned on.
    pub(crate) fn lower(&self) -> QueryRequest {
        let mut expression_values = self.values.clone();
        if let Some(filter_values) = &self.filter_values {
            expression_values.extend(
                filter_values
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone())),
            );
        }

        QueryRequest {
            table: self.table.clone(),
            key_condition: self.key_condition.clone(),
            expression_values,
            expression_names: self.names.clone(),
            index: self.index.clone(),
            limit: self.limit,
            filter: self.filter.clone(),
            consistent_read: self.consistent_read,
            start_token: self.start_token.clone(),
            scan_forward: self.sort == SortOrder::Ascending,
        }
    }
}

/// Lowered query as handed to the [`Store`](super::Store): the two value
/// namespaces already merged, everything else passed through unmodified.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryRequest {
    pub table: String,
    pub key_condition: String,
    pub expression_values: HashMap<String, Value>,
    pub expression_names: Option<HashMap<String, String>>,
    pub index: Option<String>,
    pub limit: Option<u32>,
    pub filter: Option<String>,
    pub consistent_read: Option<bool>,
    pub start_token: Option<PageToken>,
    pub scan_forward: bool,
}

/// One page of query results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryPage {
    pub items: Vec<Record>,
    pub next_token: Option<PageToken>,
}

impl QueryPage {
    /// A page satisfies the poller when it holds items or can be resumed. An
    /// empty page with a token still counts: the store has more to offer.
    pub(crate) fn has_results(&self) -> bool {
        !self.items.is_empty() || self.next_token.is_some()
    }
}

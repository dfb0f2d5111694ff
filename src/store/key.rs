use serde_json::Value;

use super::types::Record;
use crate::error::StakeoutError;

/// Primary key of one record: a required partition attribute plus an
/// optional sort attribute. Immutable, caller-supplied, scoped to one call.
#[derive(Debug, Clone, PartialEq)]
pub struct Key {
    partition: (String, Value),
    sort: Option<(String, Value)>,
}

impl Key {
    pub fn new(partition_attr: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            partition: (partition_attr.into(), value.into()),
            sort: None,
        }
    }

    pub fn with_sort(mut self, sort_attr: impl Into<String>, value: impl Into<Value>) -> Self {
        self.sort = Some((sort_attr.into(), value.into()));
        self
    }

    pub fn partition(&self) -> (&str, &Value) {
        (&self.partition.0, &self.partition.1)
    }

    pub fn sort(&self) -> Option<(&str, &Value)> {
        self.sort.as_ref().map(|(name, value)| (name.as_str(), value))
    }

    /// The attribute map sent to the store. When no sort attribute was set
    /// the map carries the partition attribute alone; the sort field is
    /// omitted entirely, never sent as an empty placeholder.
    pub fn attributes(&self) -> Record {
        let mut map = Record::new();
        map.insert(self.partition.0.clone(), self.partition.1.clone());
        if let Some((name, value)) = &self.sort {
            map.insert(name.clone(), value.clone());
        }
        map
    }

    pub(crate) fn validate(&self) -> Result<(), StakeoutError> {
        let (name, value) = &self.partition;
        if name.trim().is_empty() {
            return Err(StakeoutError::Validation(
                "partition attribute name must be non-empty".to_string(),
            ));
        }
        let missing = match value {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        };
        if missing {
            return Err(StakeoutError::Validation(format!(
                "partition key '{name}' must carry a value"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_map_omits_absent_sort_field() {
        let key = Key::new("pk", "USER#1");
        let attrs = key.attributes();
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs["pk"], "USER#1");
    }

    #[test]
    fn attribute_map_carries_sort_field_when_present() {
        let key = Key::new("pk", "USER#1").with_sort("sk", "PROFILE");
        let attrs = key.attributes();
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs["sk"], "PROFILE");
    }

    #[test]
    fn empty_partition_value_fails_validation() {
        let err = Key::new("pk", "").validate().unwrap_err();
        assert!(matches!(err, StakeoutError::Validation(_)));
    }

    #[test]
    fn null_partition_value_fails_validation() {
        let err = Key::new("pk", Value::Null).validate().unwrap_err();
        assert!(matches!(err, StakeoutError::Validation(_)));
    }

    #[test]
    fn numeric_partition_value_is_accepted() {
        assert!(Key::new("id", 42).validate().is_ok());
    }
}

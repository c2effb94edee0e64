// file: src/models/function_record.rs
// description: output row describing one summarized function definition
// reference: internal data structures

use serde::{Deserialize, Serialize};

/// Column headers of the exported table, in output order.
pub const COLUMN_HEADERS: [&str; 3] = ["Repository", "Function Name", "Description"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    #[serde(rename = "Repository")]
    pub repository: String,
    #[serde(rename = "Function Name")]
    pub function_name: String,
    #[serde(rename = "Description")]
    pub description: String,
}

impl FunctionRecord {
    pub fn new(
        repository: impl Into<String>,
        function_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            repository: repository.into(),
            function_name: function_name.into(),
            description: description.into(),
        }
    }

    pub fn as_row(&self) -> [&str; 3] {
        [&self.repository, &self.function_name, &self.description]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_field_names_match_headers() {
        let record = FunctionRecord::new("octo/demo", "load", "Loads things.");
        let value = serde_json::to_value(&record).unwrap();

        for header in COLUMN_HEADERS {
            assert!(value.get(header).is_some(), "missing field {header}");
        }
        assert_eq!(value["Function Name"], "load");
    }

    #[test]
    fn test_row_order() {
        let record = FunctionRecord::new("octo/demo", "load", "");
        assert_eq!(record.as_row(), ["octo/demo", "load", ""]);
    }
}

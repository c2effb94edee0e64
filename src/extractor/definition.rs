// file: src/extractor/definition.rs
// description: line-prefix matching of function definitions in source text
// reference: naive text matching, no language parsing

use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDefinition {
    pub name: String,
    /// The full matched line, sent to the summarizer as the snippet.
    pub line: String,
    /// 1-based.
    pub line_number: usize,
}

pub struct DefinitionExtractor {
    prefix: String,
}

impl DefinitionExtractor {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Every line starting with the prefix is a definition. Leading
    /// whitespace is not skipped, so indented methods never match.
    pub fn extract(&self, content: &str) -> Vec<FunctionDefinition> {
        let definitions: Vec<FunctionDefinition> = content
            .lines()
            .enumerate()
            .filter(|(_, line)| line.starts_with(&self.prefix))
            .map(|(index, line)| FunctionDefinition {
                name: self.function_name(line),
                line: line.to_string(),
                line_number: index + 1,
            })
            .collect();

        debug!(
            "Matched {} definitions with prefix {:?}",
            definitions.len(),
            self.prefix
        );
        definitions
    }

    /// Text before the first `(` with every occurrence of the prefix removed.
    pub fn function_name(&self, line: &str) -> String {
        let head = line.split('(').next().unwrap_or(line);
        head.replace(&self.prefix, "")
    }
}

impl Default for DefinitionExtractor {
    fn default() -> Self {
        Self::new("def ")
    }
}

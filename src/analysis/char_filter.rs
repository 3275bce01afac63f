//! Char filters that normalize text before tokenization.

/// Trait for filters applied to the raw text before it reaches the tokenizer.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Lower-cases the whole input.
///
/// Lower-casing before tokenization means the tokenizer sees exactly the
/// characters the stemmer will match against.
#[derive(Clone, Debug, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, input: &str) -> String {
        input.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_char_filter() {
        let filter = LowercaseCharFilter::new();
        assert_eq!(filter.filter("Zašao ŠUMU Striborovu"), "zašao šumu striborovu");
        assert_eq!(filter.name(), "lowercase");
    }
}

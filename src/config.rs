// Segmenter configuration. Built in code; nothing is loaded from disk.

use crate::error::Result;
use crate::segment::Acronyms;

/// Settings shared by every call made through a [`crate::Segmenter`] or
/// [`crate::Converter`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmenterConfig {
    /// Known acronyms kept as single words (default: none)
    pub acronyms: Acronyms,

    /// Keep each word's original casing instead of normalizing it (default false)
    pub preserve_case: bool,
}

impl SegmenterConfig {
    /// Config with a validated acronym set; fails on the first invalid entry.
    pub fn with_acronyms<I, S>(acronyms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            acronyms: Acronyms::try_new(acronyms)?,
            ..Self::default()
        })
    }

    pub fn preserve_case(mut self, preserve_case: bool) -> Self {
        self.preserve_case = preserve_case;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_default_config() {
        let config = SegmenterConfig::default();
        assert!(config.acronyms.is_empty());
        assert!(!config.preserve_case);
    }

    #[test]
    fn test_with_acronyms() {
        let config = SegmenterConfig::with_acronyms(["html", "HTTP"])
            .unwrap()
            .preserve_case(true);
        assert_eq!(config.acronyms.len(), 2);
        assert!(config.acronyms.contains("HTML"));
        assert!(config.preserve_case);
    }

    #[test]
    fn test_with_invalid_acronyms() {
        let result = SegmenterConfig::with_acronyms(["HTML", "no way"]);
        assert!(matches!(result, Err(Error::InvalidAcronym(a)) if a == "no way"));
    }
}

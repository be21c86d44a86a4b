use super::format::render;
use super::style::CaseStyle;
use crate::config::SegmenterConfig;
use crate::error::Result;
use crate::segment::Acronyms;

/// Converts text between case styles using one pre-validated acronym set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Converter {
    acronyms: Acronyms,
}

impl Converter {
    pub fn new(acronyms: Acronyms) -> Self {
        Self { acronyms }
    }

    /// Fails on the first acronym that is empty or not purely alphabetic.
    pub fn try_new<I, S>(acronyms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::new(Acronyms::try_new(acronyms)?))
    }

    /// Shares the acronym set of a segmenter configuration. `preserve_case`
    /// is not used, since each style decides casing on its own.
    pub fn from_config(config: &SegmenterConfig) -> Self {
        Self::new(config.acronyms.clone())
    }

    pub fn acronyms(&self) -> &Acronyms {
        &self.acronyms
    }

    pub fn convert(&self, text: &str, style: CaseStyle) -> String {
        render(text, style, &self.acronyms)
    }

    /// Converts `text` to the style named by `style`, e.g. `"kebab"`.
    pub fn convert_named(&self, text: &str, style: &str) -> Result<String> {
        let style: CaseStyle = style.parse()?;
        log::debug!("Converting {:?} to {}", text, style);
        Ok(self.convert(text, style))
    }
}

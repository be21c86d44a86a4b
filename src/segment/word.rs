use std::ops::Range;

use super::detect::CaseKind;

/// One word produced by segmentation.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Word {
    /// Word text as stored by the segmenter: verbatim when case is preserved,
    /// normalized otherwise.
    pub text: String,
    /// Byte range of the word in the original input.
    pub span: Range<usize>,
}

impl Word {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The word exactly as it appears in `input`.
    pub fn source<'a>(&self, input: &'a str) -> &'a str {
        &input[self.span.clone()]
    }
}

/// Result of segmenting one input string.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Segmentation {
    pub words: Vec<Word>,
    /// The input had cased characters and none of them were lowercase.
    pub was_upper: bool,
    pub has_lower: bool,
    /// First delimiter character seen in the input.
    pub separator: Option<char>,
    pub case: CaseKind,
}

impl Segmentation {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(Word::as_str)
    }

    pub fn into_strings(self) -> Vec<String> {
        self.words.into_iter().map(|word| word.text).collect()
    }
}

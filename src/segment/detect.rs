use std::fmt;

use super::segmenter::parse;
use crate::segment::Acronyms;

/// The naming convention an input string appears to be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaseKind {
    /// Every cased character is uppercase ("FOO_BAR").
    Upper,
    /// Every cased character is lowercase ("foo_bar").
    Lower,
    /// "fooBar"
    Camel,
    /// "FooBar"
    Pascal,
    /// Cased, but neither camel nor pascal ("foo_Bar_baz").
    Mixed,
    /// No cased characters at all.
    #[default]
    Unknown,
}

impl CaseKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CaseKind::Upper => "upper",
            CaseKind::Lower => "lower",
            CaseKind::Camel => "camel",
            CaseKind::Pascal => "pascal",
            CaseKind::Mixed => "mixed",
            CaseKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detects the case convention of `text`.
pub fn detect_case(text: &str) -> CaseKind {
    parse(text, &Acronyms::none(), true).case
}

/// Decides the case kind from the flags gathered while scanning and the
/// verbatim words. Words without cased characters (pure digits, caseless
/// scripts) do not influence the camel/pascal decision.
pub(crate) fn case_kind<'a>(
    was_upper: bool,
    has_lower: bool,
    has_upper: bool,
    words: impl IntoIterator<Item = &'a str>,
) -> CaseKind {
    if was_upper {
        return CaseKind::Upper;
    }
    if !has_upper {
        return if has_lower {
            CaseKind::Lower
        } else {
            CaseKind::Unknown
        };
    }

    let mut cased = words.into_iter().filter(|word| has_cased(word));
    let Some(first) = cased.next() else {
        return CaseKind::Unknown;
    };

    let mut camel = is_all_lower(first);
    let mut pascal = is_title(first) || is_all_upper(first);
    for word in cased {
        if !camel && !pascal {
            break;
        }
        let capitalized = is_title(word) || is_all_upper(word);
        camel &= capitalized;
        pascal &= capitalized;
    }

    if camel {
        CaseKind::Camel
    } else if pascal {
        CaseKind::Pascal
    } else {
        CaseKind::Mixed
    }
}

fn has_cased(word: &str) -> bool {
    word.chars().any(|c| c.is_uppercase() || c.is_lowercase())
}

/// At least one cased character and no lowercase ones.
pub(crate) fn is_all_upper(word: &str) -> bool {
    has_cased(word) && !word.chars().any(char::is_lowercase)
}

pub(crate) fn is_all_lower(word: &str) -> bool {
    has_cased(word) && !word.chars().any(char::is_uppercase)
}

/// First cased character uppercase, all later cased characters lowercase.
pub(crate) fn is_title(word: &str) -> bool {
    let mut cased = word
        .chars()
        .filter(|c| c.is_uppercase() || c.is_lowercase());
    match cased.next() {
        Some(first) if first.is_uppercase() => cased.all(char::is_lowercase),
        _ => false,
    }
}

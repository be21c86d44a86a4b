use crate::error::{Error, Result};

/// A normalized set of known acronyms.
///
/// Entries are stored uppercased, deduplicated and ordered longest first so
/// that prefix lookups return the longest candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Acronyms {
    entries: Vec<String>,
}

impl Acronyms {
    /// The "no acronyms" sentinel: detection disabled.
    pub fn none() -> Self {
        Self::default()
    }

    /// Builds the set, rejecting any entry that is empty or contains
    /// non-alphabetic characters.
    pub fn try_new<I, S>(acronyms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = Vec::new();
        for acronym in acronyms {
            let acronym = acronym.as_ref();
            match sanitize(acronym) {
                Some(valid) => entries.push(valid),
                None => return Err(Error::InvalidAcronym(acronym.to_string())),
            }
        }
        Ok(Self::from_sanitized(entries))
    }

    /// Builds the set, skipping invalid entries instead of failing.
    pub fn lenient<I, S>(acronyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = acronyms
            .into_iter()
            .filter_map(|acronym| {
                let acronym = acronym.as_ref();
                let valid = sanitize(acronym);
                if valid.is_none() {
                    log::warn!("Ignoring invalid acronym {:?}", acronym);
                }
                valid
            })
            .collect();
        Self::from_sanitized(entries)
    }

    fn from_sanitized(mut entries: Vec<String>) -> Self {
        entries.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        entries.dedup();
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Exact, case-sensitive membership.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.iter().any(|entry| entry == word)
    }

    /// Acronyms that `text` starts with, longest first.
    pub fn prefixes_of<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.iter().filter(move |acronym| text.starts_with(acronym))
    }
}

fn sanitize(acronym: &str) -> Option<String> {
    let trimmed = acronym.trim();
    if trimmed.is_empty() || !trimmed.chars().all(char::is_alphabetic) {
        return None;
    }
    Some(trimmed.to_uppercase())
}

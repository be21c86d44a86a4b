use std::ops::Range;

use super::acronym::Acronyms;
use super::classify::{classify_char, CharClass};
use super::detect::{case_kind, is_all_upper};
use super::word::{Segmentation, Word};
use crate::config::SegmenterConfig;

#[derive(Debug, Clone, Copy)]
struct Scanned {
    offset: usize,
    ch: char,
    class: CharClass,
}

impl Scanned {
    fn end(&self) -> usize {
        self.offset + self.ch.len_utf8()
    }
}

/// Splits `text` into words and returns their text.
///
/// Invalid acronyms are skipped. With `preserve_case` every word is returned
/// exactly as it appears in `text`; otherwise words are normalized (known
/// acronyms uppercased, detected acronym runs kept, everything else
/// capitalized) for the case formatters to re-case.
pub fn segment(text: &str, acronyms: &[&str], preserve_case: bool) -> Vec<String> {
    parse(text, &Acronyms::lenient(acronyms), preserve_case).into_strings()
}

/// Splits `text` into words, keeping spans and the flags gathered on the way.
pub fn parse(text: &str, acronyms: &Acronyms, preserve_case: bool) -> Segmentation {
    let scanned: Vec<Scanned> = text
        .char_indices()
        .map(|(offset, ch)| Scanned {
            offset,
            ch,
            class: classify_char(ch),
        })
        .collect();

    let has_upper = text.chars().any(char::is_uppercase);
    let has_lower = text.chars().any(char::is_lowercase);
    let was_upper = has_upper && !has_lower;
    let separator = scanned
        .iter()
        .find(|c| c.class.is_delimiter())
        .map(|c| c.ch);

    let mut spans = Vec::new();
    for run in scanned.split(|c| c.class.is_delimiter()) {
        if run.is_empty() {
            continue;
        }
        let cuts = run_cuts(run, text, acronyms);
        spans.extend(
            cuts.windows(2)
                .map(|pair| run[pair[0]].offset..run[pair[1] - 1].end()),
        );
    }

    let case = case_kind(
        was_upper,
        has_lower,
        has_upper,
        spans.iter().map(|span| &text[span.clone()]),
    );

    let words: Vec<Word> = spans
        .into_iter()
        .map(|span| {
            let source = &text[span.clone()];
            let text = if preserve_case {
                source.to_string()
            } else {
                normalize(source, was_upper, acronyms)
            };
            Word { text, span }
        })
        .collect();

    log::trace!(
        "Segmented {:?} into {} words ({}, preserve_case={})",
        text,
        words.len(),
        case,
        preserve_case
    );

    Segmentation {
        words,
        was_upper,
        has_lower,
        separator,
        case,
    }
}

/// Word boundaries inside one delimiter-free run, as char indices.
/// Always starts with 0 and ends with `run.len()`.
fn run_cuts(run: &[Scanned], text: &str, acronyms: &Acronyms) -> Vec<usize> {
    let mut cuts = vec![0];

    for i in 1..run.len() {
        let prev = run[i - 1].class;
        let cur = run[i].class;

        let digit_edge = (prev.is_letter() && cur == CharClass::Digit)
            || (prev == CharClass::Digit && cur.is_letter());
        let lower_to_upper =
            matches!(prev, CharClass::Lower | CharClass::OtherLetter) && cur == CharClass::Upper;

        if digit_edge || lower_to_upper {
            cuts.push(i);
        } else if prev == CharClass::Upper
            && cur == CharClass::Lower
            && i >= 2
            && run[i - 2].class == CharClass::Upper
        {
            // "HTMLWorld": the last capital starts the next word.
            cuts.push(i - 1);
        }
    }

    if !acronyms.is_empty() {
        for upper in upper_runs(run) {
            cuts.extend(acronym_cuts(run, upper, text, acronyms));
        }
    }

    cuts.push(run.len());
    cuts.sort_unstable();
    cuts.dedup();
    cuts
}

/// Maximal runs of uppercase chars, minus a final capital that opens a
/// lowercase word.
fn upper_runs(run: &[Scanned]) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    let mut i = 0;
    while i < run.len() {
        if run[i].class != CharClass::Upper {
            i += 1;
            continue;
        }
        let start = i;
        while i < run.len() && run[i].class == CharClass::Upper {
            i += 1;
        }
        let end = if i < run.len() && run[i].class == CharClass::Lower {
            i - 1
        } else {
            i
        };
        if start < end {
            runs.push(start..end);
        }
    }
    runs
}

/// Leftmost-longest acronym matching inside one uppercase run. Each match
/// contributes a cut on both sides; leftover capitals between matches stay
/// together as a word.
fn acronym_cuts(
    run: &[Scanned],
    upper: Range<usize>,
    text: &str,
    acronyms: &Acronyms,
) -> Vec<usize> {
    let mut cuts = Vec::new();
    let limit = run[upper.end - 1].end();
    let mut pos = upper.start;

    while pos < upper.end {
        let start = run[pos].offset;
        let window = &text[start..limit];
        let matched = acronyms.prefixes_of(window).find_map(|acronym| {
            let end = start + acronym.len();
            // The match has to end on a char boundary inside the run.
            (pos..upper.end).find(|&k| run[k].end() == end).map(|k| k + 1)
        });

        match matched {
            Some(next) => {
                cuts.push(pos);
                cuts.push(next);
                pos = next;
            }
            None => pos += 1,
        }
    }

    cuts
}

fn normalize(word: &str, was_upper: bool, acronyms: &Acronyms) -> String {
    let word = if was_upper {
        word.to_lowercase()
    } else {
        word.to_string()
    };

    let upper = word.to_uppercase();
    if acronyms.contains(&upper) {
        upper
    } else if is_all_upper(&word) {
        word
    } else {
        capitalize(&word)
    }
}

// Titlecase digraphs such as 'ǅ' come out fully uppercase ('Ǆ'): std only
// offers an uppercase mapping, not a titlecase one.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Segmenter bound to one configuration.
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    config: SegmenterConfig,
}

impl Segmenter {
    pub fn new(config: SegmenterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    pub fn parse(&self, text: &str) -> Segmentation {
        parse(text, &self.config.acronyms, self.config.preserve_case)
    }

    pub fn segment(&self, text: &str) -> Vec<String> {
        self.parse(text).into_strings()
    }
}

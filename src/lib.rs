//! Converts identifier-like text between naming conventions.
//!
//! The input is split into words first (on delimiters, case changes,
//! letter/digit edges and optional known acronyms); each case style then
//! re-cases the words and joins them with its separator.
//!
//! ```
//! use case_conversion::{constcase, separate_words, snakecase};
//!
//! assert_eq!(snakecase("HelloHTMLWorld", &["HTML"]), "hello_html_world");
//! assert_eq!(constcase("helloHTMLWorld", &["HTML"]), "HELLO_HTML_WORLD");
//! assert_eq!(separate_words("helloHTMLWorld", &["HTML"]), "hello HTML World");
//! ```

pub mod case;
pub mod config;
pub mod error;
pub mod segment;

pub use case::{
    backslashcase, camelcase, constcase, convert, dashcase, dotcase, kebabcase, pascalcase,
    screaming_snakecase, separate_words, slashcase, snakecase, spinalcase, CaseStyle, Converter,
};
pub use config::SegmenterConfig;
pub use error::{Error, Result};
pub use segment::{
    classify_char, detect_case, parse, segment, Acronyms, CaseKind, CharClass, Segmentation,
    Segmenter, Word,
};

pub mod converter;
pub mod format;
#[cfg(test)]
mod format_tests;
pub mod style;

pub use converter::Converter;
pub use format::{
    backslashcase, camelcase, constcase, convert, dashcase, dotcase, kebabcase, pascalcase,
    screaming_snakecase, separate_words, slashcase, snakecase, spinalcase,
};
pub use style::CaseStyle;

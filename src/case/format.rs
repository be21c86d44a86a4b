use super::style::CaseStyle;
use crate::segment::{parse, Acronyms};

/// Segments `text` once and joins the words the way `style` asks for.
pub(crate) fn render(text: &str, style: CaseStyle, acronyms: &Acronyms) -> String {
    let words = parse(text, acronyms, style.preserves_case()).into_strings();
    join_words(words, style)
}

fn join_words(mut words: Vec<String>, style: CaseStyle) -> String {
    match style {
        CaseStyle::Camel => {
            if let Some(first) = words.first_mut() {
                *first = first.to_lowercase();
            }
        }
        CaseStyle::Snake | CaseStyle::Dash | CaseStyle::Dot => {
            for word in &mut words {
                *word = word.to_lowercase();
            }
        }
        CaseStyle::Const => {
            for word in &mut words {
                *word = word.to_uppercase();
            }
        }
        CaseStyle::Pascal
        | CaseStyle::SeparateWords
        | CaseStyle::Slash
        | CaseStyle::Backslash => {}
    }
    words.join(style.separator())
}

/// Converts `text` to `style`. Invalid acronyms are ignored.
pub fn convert(text: &str, style: CaseStyle, acronyms: &[&str]) -> String {
    render(text, style, &Acronyms::lenient(acronyms))
}

/// Returns `text` in camelCase.
///
/// ```
/// use case_conversion::camelcase;
///
/// assert_eq!(camelcase("hello world", &[]), "helloWorld");
/// assert_eq!(camelcase("HELLO_HTML_WORLD", &["HTML"]), "helloHTMLWorld");
/// ```
pub fn camelcase(text: &str, acronyms: &[&str]) -> String {
    convert(text, CaseStyle::Camel, acronyms)
}

/// Returns `text` in PascalCase (aka MixedCase).
///
/// ```
/// use case_conversion::pascalcase;
///
/// assert_eq!(pascalcase("hello world", &[]), "HelloWorld");
/// assert_eq!(pascalcase("HELLO_HTML_WORLD", &["HTML"]), "HelloHTMLWorld");
/// ```
pub fn pascalcase(text: &str, acronyms: &[&str]) -> String {
    convert(text, CaseStyle::Pascal, acronyms)
}

/// Returns `text` in snake_case.
///
/// ```
/// use case_conversion::snakecase;
///
/// assert_eq!(snakecase("hello world", &[]), "hello_world");
/// assert_eq!(snakecase("HelloHTMLWorld", &["HTML"]), "hello_html_world");
/// ```
pub fn snakecase(text: &str, acronyms: &[&str]) -> String {
    convert(text, CaseStyle::Snake, acronyms)
}

/// Returns `text` in dash-case (aka kebab-case, spinal-case).
///
/// ```
/// use case_conversion::dashcase;
///
/// assert_eq!(dashcase("hello world", &[]), "hello-world");
/// assert_eq!(dashcase("HelloHTMLWorld", &["HTML"]), "hello-html-world");
/// ```
pub fn dashcase(text: &str, acronyms: &[&str]) -> String {
    convert(text, CaseStyle::Dash, acronyms)
}

/// Same as [`dashcase`].
pub fn kebabcase(text: &str, acronyms: &[&str]) -> String {
    dashcase(text, acronyms)
}

/// Same as [`dashcase`].
pub fn spinalcase(text: &str, acronyms: &[&str]) -> String {
    dashcase(text, acronyms)
}

/// Returns `text` in CONST_CASE (aka SCREAMING_SNAKE_CASE).
///
/// ```
/// use case_conversion::constcase;
///
/// assert_eq!(constcase("hello world", &[]), "HELLO_WORLD");
/// assert_eq!(constcase("helloHTMLWorld", &["HTML"]), "HELLO_HTML_WORLD");
/// ```
pub fn constcase(text: &str, acronyms: &[&str]) -> String {
    convert(text, CaseStyle::Const, acronyms)
}

/// Same as [`constcase`].
pub fn screaming_snakecase(text: &str, acronyms: &[&str]) -> String {
    constcase(text, acronyms)
}

/// Returns `text` in dot.case.
pub fn dotcase(text: &str, acronyms: &[&str]) -> String {
    convert(text, CaseStyle::Dot, acronyms)
}

/// Returns the words of `text` separated by spaces, casing untouched.
///
/// ```
/// use case_conversion::separate_words;
///
/// assert_eq!(separate_words("HELLO_WORLD", &[]), "HELLO WORLD");
/// assert_eq!(separate_words("helloHTMLWorld", &["HTML"]), "hello HTML World");
/// ```
pub fn separate_words(text: &str, acronyms: &[&str]) -> String {
    convert(text, CaseStyle::SeparateWords, acronyms)
}

/// Returns `text` in slash/case, casing untouched.
pub fn slashcase(text: &str, acronyms: &[&str]) -> String {
    convert(text, CaseStyle::Slash, acronyms)
}

/// Returns `text` in backslash\case, casing untouched.
pub fn backslashcase(text: &str, acronyms: &[&str]) -> String {
    convert(text, CaseStyle::Backslash, acronyms)
}

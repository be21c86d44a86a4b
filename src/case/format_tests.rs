use super::format::*;
use super::style::CaseStyle;

type Table = [(CaseStyle, &'static str); 9];

/// Spellings expected from a case-preserving style, written with spaces.
struct Preserved {
    camel: &'static str,
    pascal: &'static str,
    constant: &'static str,
    default: &'static str,
}

const VALUES: Table = [
    (CaseStyle::Camel, "fooBarString"),
    (CaseStyle::Pascal, "FooBarString"),
    (CaseStyle::Snake, "foo_bar_string"),
    (CaseStyle::Dash, "foo-bar-string"),
    (CaseStyle::Const, "FOO_BAR_STRING"),
    (CaseStyle::Dot, "foo.bar.string"),
    (CaseStyle::SeparateWords, "foo bar string"),
    (CaseStyle::Slash, "foo/bar/string"),
    (CaseStyle::Backslash, "foo\\bar\\string"),
];

const VALUES_UNICODE: Table = [
    (CaseStyle::Camel, "fóoBarString"),
    (CaseStyle::Pascal, "FóoBarString"),
    (CaseStyle::Snake, "fóo_bar_string"),
    (CaseStyle::Dash, "fóo-bar-string"),
    (CaseStyle::Const, "FÓO_BAR_STRING"),
    (CaseStyle::Dot, "fóo.bar.string"),
    (CaseStyle::SeparateWords, "fóo bar string"),
    (CaseStyle::Slash, "fóo/bar/string"),
    (CaseStyle::Backslash, "fóo\\bar\\string"),
];

const VALUES_SINGLE: Table = [
    (CaseStyle::Camel, "foo"),
    (CaseStyle::Pascal, "Foo"),
    (CaseStyle::Snake, "foo"),
    (CaseStyle::Dash, "foo"),
    (CaseStyle::Const, "FOO"),
    (CaseStyle::Dot, "foo"),
    (CaseStyle::SeparateWords, "foo"),
    (CaseStyle::Slash, "foo"),
    (CaseStyle::Backslash, "foo"),
];

const VALUES_SINGLE_UNICODE: Table = [
    (CaseStyle::Camel, "fóo"),
    (CaseStyle::Pascal, "Fóo"),
    (CaseStyle::Snake, "fóo"),
    (CaseStyle::Dash, "fóo"),
    (CaseStyle::Const, "FÓO"),
    (CaseStyle::Dot, "fóo"),
    (CaseStyle::SeparateWords, "fóo"),
    (CaseStyle::Slash, "fóo"),
    (CaseStyle::Backslash, "fóo"),
];

const VALUES_ACRONYM: Table = [
    (CaseStyle::Camel, "fooHTTPBarString"),
    (CaseStyle::Pascal, "FooHTTPBarString"),
    (CaseStyle::Snake, "foo_http_bar_string"),
    (CaseStyle::Dash, "foo-http-bar-string"),
    (CaseStyle::Const, "FOO_HTTP_BAR_STRING"),
    (CaseStyle::Dot, "foo.http.bar.string"),
    (CaseStyle::SeparateWords, "foo http bar string"),
    (CaseStyle::Slash, "foo/http/bar/string"),
    (CaseStyle::Backslash, "foo\\http\\bar\\string"),
];

const VALUES_ACRONYM_UNICODE: Table = [
    (CaseStyle::Camel, "fooHÉÉPBarString"),
    (CaseStyle::Pascal, "FooHÉÉPBarString"),
    (CaseStyle::Snake, "foo_héép_bar_string"),
    (CaseStyle::Dash, "foo-héép-bar-string"),
    (CaseStyle::Const, "FOO_HÉÉP_BAR_STRING"),
    (CaseStyle::Dot, "foo.héép.bar.string"),
    (CaseStyle::SeparateWords, "foo héép bar string"),
    (CaseStyle::Slash, "foo/héép/bar/string"),
    (CaseStyle::Backslash, "foo\\héép\\bar\\string"),
];

fn lookup(table: &Table, style: CaseStyle) -> &'static str {
    table
        .iter()
        .find(|(s, _)| *s == style)
        .map(|(_, value)| *value)
        .unwrap()
}

/// Every non-preserving style turns every spelling in `table` into its own spelling.
fn check_normalizing(table: &Table, acronyms: &[&str]) {
    for target in CaseStyle::ALL.into_iter().filter(|s| !s.preserves_case()) {
        for (source, value) in table {
            assert_eq!(
                convert(value, target, acronyms),
                lookup(table, target),
                "{} {:?} -> {}",
                source,
                value,
                target
            );
        }
        assert_eq!(convert("", target, acronyms), "", "empty -> {}", target);
    }
}

/// Preserving styles keep camel, pascal and const casing verbatim and leave
/// every other spelling lowercase.
fn check_preserving(table: &Table, preserved: &Preserved, acronyms: &[&str]) {
    for target in CaseStyle::ALL.into_iter().filter(|s| s.preserves_case()) {
        for (source, value) in table {
            let spaced = match source {
                CaseStyle::Camel => preserved.camel,
                CaseStyle::Pascal => preserved.pascal,
                CaseStyle::Const => preserved.constant,
                _ => preserved.default,
            };
            let expected = spaced.replace(' ', target.separator());
            assert_eq!(
                convert(value, target, acronyms),
                expected,
                "{} {:?} -> {}",
                source,
                value,
                target
            );
        }
        assert_eq!(convert("", target, acronyms), "", "empty -> {}", target);
    }
}

#[test]
fn test_convert_all_cases() {
    check_normalizing(&VALUES, &[]);
}

#[test]
fn test_convert_all_cases_unicode() {
    check_normalizing(&VALUES_UNICODE, &[]);
}

#[test]
fn test_convert_single_word() {
    check_normalizing(&VALUES_SINGLE, &[]);
}

#[test]
fn test_convert_single_word_unicode() {
    check_normalizing(&VALUES_SINGLE_UNICODE, &[]);
}

#[test]
fn test_convert_with_acronyms() {
    check_normalizing(&VALUES_ACRONYM, &["HTTP"]);
}

#[test]
fn test_convert_with_acronyms_unicode() {
    check_normalizing(&VALUES_ACRONYM_UNICODE, &["HÉÉP"]);
}

#[test]
fn test_preserve_case() {
    let preserved = Preserved {
        camel: "foo Bar String",
        pascal: "Foo Bar String",
        constant: "FOO BAR STRING",
        default: "foo bar string",
    };
    check_preserving(&VALUES, &preserved, &[]);
}

#[test]
fn test_preserve_case_unicode() {
    let preserved = Preserved {
        camel: "fóo Bar String",
        pascal: "Fóo Bar String",
        constant: "FÓO BAR STRING",
        default: "fóo bar string",
    };
    check_preserving(&VALUES_UNICODE, &preserved, &[]);
}

#[test]
fn test_preserve_case_single_word() {
    let preserved = Preserved {
        camel: "foo",
        pascal: "Foo",
        constant: "FOO",
        default: "foo",
    };
    check_preserving(&VALUES_SINGLE, &preserved, &[]);
}

#[test]
fn test_preserve_case_single_word_unicode() {
    let preserved = Preserved {
        camel: "fóo",
        pascal: "Fóo",
        constant: "FÓO",
        default: "fóo",
    };
    check_preserving(&VALUES_SINGLE_UNICODE, &preserved, &[]);
}

#[test]
fn test_preserve_case_with_acronyms() {
    let preserved = Preserved {
        camel: "foo HTTP Bar String",
        pascal: "Foo HTTP Bar String",
        constant: "FOO HTTP BAR STRING",
        default: "foo http bar string",
    };
    check_preserving(&VALUES_ACRONYM, &preserved, &["HTTP"]);
}

#[test]
fn test_preserve_case_with_acronyms_unicode() {
    let preserved = Preserved {
        camel: "foo HÉÉP Bar String",
        pascal: "Foo HÉÉP Bar String",
        constant: "FOO HÉÉP BAR STRING",
        default: "foo héép bar string",
    };
    check_preserving(&VALUES_ACRONYM_UNICODE, &preserved, &["HÉÉP"]);
}

#[test]
fn test_single_acronym() {
    assert_eq!(camelcase("HTTP", &["HTTP"]), "http");
    assert_eq!(pascalcase("http", &["HTTP"]), "HTTP");
    assert_eq!(snakecase("HTTP", &["HTTP"]), "http");
    assert_eq!(separate_words("HTTP", &["HTTP"]), "HTTP");
    assert_eq!(slashcase("http", &["HTTP"]), "http");
}

#[test]
fn test_detected_acronym_without_configuration() {
    assert_eq!(camelcase("fooHTTPBarString", &[]), "fooHTTPBarString");
    assert_eq!(pascalcase("fooHTTPBarString", &[]), "FooHTTPBarString");
    assert_eq!(snakecase("fooHTTPBarString", &[]), "foo_http_bar_string");
}

#[test]
fn test_aliases_delegate() {
    for input in ["HelloHTMLWorld", "foo bar", "x1Y2", ""] {
        assert_eq!(kebabcase(input, &["HTML"]), dashcase(input, &["HTML"]));
        assert_eq!(spinalcase(input, &["HTML"]), dashcase(input, &["HTML"]));
        assert_eq!(
            screaming_snakecase(input, &["HTML"]),
            constcase(input, &["HTML"])
        );
    }
}

#[test]
fn test_named_functions_match_styles() {
    let input = "helloHTMLWorld";
    let acronyms = &["HTML"];
    assert_eq!(camelcase(input, acronyms), convert(input, CaseStyle::Camel, acronyms));
    assert_eq!(pascalcase(input, acronyms), convert(input, CaseStyle::Pascal, acronyms));
    assert_eq!(snakecase(input, acronyms), convert(input, CaseStyle::Snake, acronyms));
    assert_eq!(dotcase(input, acronyms), "hello.html.world");
    assert_eq!(backslashcase(input, acronyms), "hello\\HTML\\World");
}

#[test]
fn test_digits() {
    assert_eq!(snakecase("abc123def", &[]), "abc_123_def");
    assert_eq!(camelcase("version2Update", &[]), "version2Update");
    assert_eq!(constcase("html5Parser", &[]), "HTML_5_PARSER");
}

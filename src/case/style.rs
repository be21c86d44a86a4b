use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;

use crate::error::Error;

/// A naming convention: a separator plus a per-word casing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseStyle {
    /// fooBarString
    Camel,
    /// FooBarString
    Pascal,
    /// foo_bar_string
    Snake,
    /// foo-bar-string (kebab-case, spinal-case)
    Dash,
    /// FOO_BAR_STRING (SCREAMING_SNAKE_CASE)
    Const,
    /// foo.bar.string
    Dot,
    /// Words joined by spaces, casing preserved
    SeparateWords,
    /// Words joined by `/`, casing preserved
    Slash,
    /// Words joined by `\`, casing preserved
    Backslash,
}

lazy_static! {
    static ref STYLE_NAMES: HashMap<&'static str, CaseStyle> = {
        let aliases: &[(CaseStyle, &[&'static str])] = &[
            (CaseStyle::Camel, &["camel", "camelcase", "lower_camel"]),
            (CaseStyle::Pascal, &["pascal", "pascalcase", "upper_camel", "mixedcase"]),
            (CaseStyle::Snake, &["snake", "snakecase"]),
            (
                CaseStyle::Dash,
                &["dash", "dashcase", "kebab", "kebabcase", "spinal", "spinalcase"],
            ),
            (
                CaseStyle::Const,
                &["const", "constcase", "screaming_snake", "screaming_snakecase", "upper_snake"],
            ),
            (CaseStyle::Dot, &["dot", "dotcase"]),
            (CaseStyle::SeparateWords, &["separate_words", "words", "space"]),
            (CaseStyle::Slash, &["slash", "slashcase"]),
            (CaseStyle::Backslash, &["backslash", "backslashcase"]),
        ];

        let mut names = HashMap::new();
        for (style, keys) in aliases {
            for key in *keys {
                names.insert(*key, *style);
            }
        }
        names
    };
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 9] = [
        CaseStyle::Camel,
        CaseStyle::Pascal,
        CaseStyle::Snake,
        CaseStyle::Dash,
        CaseStyle::Const,
        CaseStyle::Dot,
        CaseStyle::SeparateWords,
        CaseStyle::Slash,
        CaseStyle::Backslash,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CaseStyle::Camel => "camel",
            CaseStyle::Pascal => "pascal",
            CaseStyle::Snake => "snake",
            CaseStyle::Dash => "dash",
            CaseStyle::Const => "const",
            CaseStyle::Dot => "dot",
            CaseStyle::SeparateWords => "separate_words",
            CaseStyle::Slash => "slash",
            CaseStyle::Backslash => "backslash",
        }
    }

    pub fn separator(self) -> &'static str {
        match self {
            CaseStyle::Camel | CaseStyle::Pascal => "",
            CaseStyle::Snake | CaseStyle::Const => "_",
            CaseStyle::Dash => "-",
            CaseStyle::Dot => ".",
            CaseStyle::SeparateWords => " ",
            CaseStyle::Slash => "/",
            CaseStyle::Backslash => "\\",
        }
    }

    /// Whether words keep the casing they had in the input.
    pub fn preserves_case(self) -> bool {
        matches!(
            self,
            CaseStyle::SeparateWords | CaseStyle::Slash | CaseStyle::Backslash
        )
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a style name such as `"camel"`, `"kebab-case"` or `"SCREAMING_SNAKE"`.
///
/// Matching ignores ASCII case, treats `-` and spaces as `_`, and accepts an
/// optional `_case` suffix.
impl FromStr for CaseStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        let key = key.strip_suffix("_case").unwrap_or(&key);

        STYLE_NAMES
            .get(key)
            .copied()
            .ok_or_else(|| Error::UnknownStyle(s.to_string()))
    }
}

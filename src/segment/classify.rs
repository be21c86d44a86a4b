/// Category of a single character as seen by the boundary state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Anything that is not alphanumeric: whitespace, `_`, `-`, `.`, `/`, `\`, punctuation.
    Delimiter,
    Digit,
    Upper,
    Lower,
    /// Alphanumeric but caseless (CJK, titlecase digraphs, ...).
    OtherLetter,
}

impl CharClass {
    pub fn is_delimiter(self) -> bool {
        self == CharClass::Delimiter
    }

    pub fn is_letter(self) -> bool {
        matches!(
            self,
            CharClass::Upper | CharClass::Lower | CharClass::OtherLetter
        )
    }
}

pub fn classify_char(c: char) -> CharClass {
    if !c.is_alphanumeric() {
        CharClass::Delimiter
    } else if c.is_numeric() {
        CharClass::Digit
    } else if c.is_uppercase() {
        CharClass::Upper
    } else if c.is_lowercase() {
        CharClass::Lower
    } else {
        CharClass::OtherLetter
    }
}

pub mod acronym;
pub mod classify;
pub mod detect;
pub mod segmenter;
pub mod word;

pub use acronym::Acronyms;
pub use classify::{classify_char, CharClass};
pub use detect::{detect_case, CaseKind};
pub use segmenter::{parse, segment, Segmenter};
pub use word::{Segmentation, Word};

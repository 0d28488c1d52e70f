use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::planform::WingField;

/// Problems found while strictly parsing the raw text of the four wing input fields. The
/// lenient parse never produces these; it lets malformed text become NaN instead.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    WrongFieldCount(usize),
    NotANumber { field: WingField, text: String },
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::WrongFieldCount(n) => write!(f, "expected 4 input fields, got {}", n),
            InputError::NotANumber { field, text } => {
                write!(f, "{} is not a number: {:?}", field.label(), text)
            }
        }
    }
}

impl Error for InputError {}

/// A set of planform constants which cannot produce a meaningful design
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidConstants {
    NotFinite(&'static str),
    NotPositive(&'static str),
    NotAFraction(&'static str),
    TipChordExceedsMaxChord,
}

impl Display for InvalidConstants {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for InvalidConstants {}

use std::{error::Error, fmt};

/// Table-author mistakes caught while compiling an instruction template.
/// The table is static data, so any of these aborts construction before
/// decoding can start; none of them is recoverable at runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TemplateError {
    EmptyMnemonic,
    UnsupportedLength {
        mnemonic: String,
        length: usize,
    },
    TemplateWidth {
        mnemonic: String,
        expected: usize,
        found: usize,
    },
    IllegalLetter {
        mnemonic: String,
        letter: char,
    },
    MissingOperand {
        mnemonic: String,
        letter: char,
    },
    SignedWithoutBits {
        mnemonic: String,
        letter: char,
    },
    UnknownPlaceholder {
        mnemonic: String,
        letter: char,
    },
    SignedRegister {
        mnemonic: String,
        letter: char,
    },
    LengthClassMismatch {
        mnemonic: String,
        declared: usize,
        classified: usize,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::EmptyMnemonic => write!(f, "instruction template has no mnemonic"),
            TemplateError::UnsupportedLength { mnemonic, length } => {
                write!(f, "instruction '{mnemonic}' declares unsupported byte length {length}")
            }
            TemplateError::TemplateWidth { mnemonic, expected, found } => write!(
                f,
                "instruction '{mnemonic}' needs a {expected}-bit template but got {found} bits"
            ),
            TemplateError::IllegalLetter { mnemonic, letter } => write!(
                f,
                "instruction '{mnemonic}' uses '{letter}' outside the operand alphabet"
            ),
            TemplateError::MissingOperand { mnemonic, letter } => write!(
                f,
                "instruction '{mnemonic}' references operand '{letter}' that occupies no bits"
            ),
            TemplateError::SignedWithoutBits { mnemonic, letter } => write!(
                f,
                "instruction '{mnemonic}' marks '{letter}' signed but the template never uses it"
            ),
            TemplateError::UnknownPlaceholder { mnemonic, letter } => write!(
                f,
                "instruction '{mnemonic}' formats operand '{letter}' that the template does not define"
            ),
            TemplateError::SignedRegister { mnemonic, letter } => write!(
                f,
                "instruction '{mnemonic}' renders signed operand '{letter}' as a register index"
            ),
            TemplateError::LengthClassMismatch { mnemonic, declared, classified } => write!(
                f,
                "instruction '{mnemonic}' declares {declared} bytes but its fixed bits classify as {classified}"
            ),
        }
    }
}

impl Error for TemplateError {}

//! Fixed-width instruction definitions compiled from textual bit templates.
//! A template string spells every bit of the instruction, most significant
//! first: `'0'` and `'1'` pin fixed positions, a lowercase operand letter
//! claims a position for that operand.

use super::bitfield::OperandTemplate;
use super::error::TemplateError;
use super::format::{self, FormatPiece};
use super::{LetterMap, MAX_INSN_BYTES, insn_length, is_operand_letter};

/// One entry of the instruction table: the fixed bits identifying the
/// instruction, a compiled extractor per operand letter, and the rendering
/// format. Immutable once constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct InsnTemplate {
    mnemonic: String,
    length: usize,
    bits: u32,
    mask: u32,
    operands: LetterMap<OperandTemplate>,
    format: String,
}

impl InsnTemplate {
    /// Compiles a template. `bits_template` must spell exactly
    /// `length * 8` characters of `'0'`, `'1'`, or operand letters;
    /// `signed` lists the letters decoded as two's complement; `format` is
    /// the operand rendering string (`None` for a bare mnemonic).
    pub fn new(
        mnemonic: &str,
        length: usize,
        bits_template: &str,
        format: Option<&str>,
        signed: &[char],
    ) -> Result<Self, TemplateError> {
        if mnemonic.is_empty() {
            return Err(TemplateError::EmptyMnemonic);
        }
        if length == 0 || length > MAX_INSN_BYTES {
            return Err(TemplateError::UnsupportedLength {
                mnemonic: mnemonic.into(),
                length,
            });
        }

        let template = bits_template.to_ascii_lowercase();
        let width = length * 8;
        if template.chars().count() != width {
            return Err(TemplateError::TemplateWidth {
                mnemonic: mnemonic.into(),
                expected: width,
                found: template.chars().count(),
            });
        }

        let mut bits = 0u32;
        let mut mask = 0u32;
        for ch in template.chars() {
            bits <<= 1;
            mask <<= 1;
            match ch {
                '0' => mask |= 1,
                '1' => {
                    bits |= 1;
                    mask |= 1;
                }
                letter if is_operand_letter(letter) => {}
                letter => {
                    return Err(TemplateError::IllegalLetter {
                        mnemonic: mnemonic.into(),
                        letter,
                    });
                }
            }
        }

        let mut operands = LetterMap::new();
        for ch in template.chars() {
            if is_operand_letter(ch) && operands.get(ch).is_none() {
                let operand =
                    OperandTemplate::compile(mnemonic, ch, &template, signed.contains(&ch))?;
                operands.insert(ch, operand);
            }
        }
        for &letter in signed {
            if operands.get(letter).is_none() {
                return Err(TemplateError::SignedWithoutBits {
                    mnemonic: mnemonic.into(),
                    letter,
                });
            }
        }

        let format = format.unwrap_or_default().to_string();
        for piece in format::pieces(&format) {
            let FormatPiece::Placeholder { letter, register } = piece else {
                continue;
            };
            let Some(operand) = operands.get(letter) else {
                return Err(TemplateError::UnknownPlaceholder {
                    mnemonic: mnemonic.into(),
                    letter,
                });
            };
            // Register indices render in decimal and must stay non-negative.
            if register && operand.is_signed() {
                return Err(TemplateError::SignedRegister {
                    mnemonic: mnemonic.into(),
                    letter,
                });
            }
        }

        // When the length-class field is fully fixed it has to agree with
        // the declared byte length, or the template could never even become
        // a candidate during decoding.
        let class_shift = (width - 3) as u32;
        if mask >> class_shift == 0b111 {
            let classified = insn_length((bits >> (width as u32 - 8)) as u8);
            if classified != length {
                return Err(TemplateError::LengthClassMismatch {
                    mnemonic: mnemonic.into(),
                    declared: length,
                    classified,
                });
            }
        }

        Ok(Self {
            mnemonic: mnemonic.into(),
            length,
            bits,
            mask,
            operands,
            format,
        })
    }

    /// Tests whether a word's fixed positions carry this template's pattern.
    /// Operand positions are ignored entirely.
    pub fn matches(&self, word: u32) -> bool {
        word & self.mask == self.bits
    }

    /// Extracts every operand value from a matching word.
    pub fn parse(&self, word: u32) -> LetterMap<i64> {
        let mut values = LetterMap::new();
        for (letter, operand) in self.operands.iter() {
            values.insert(letter, operand.extract(word));
        }
        values
    }

    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    /// Instruction length in bytes.
    pub fn length(&self) -> usize {
        self.length
    }

    /// The template with every operand letter replaced by 0.
    pub fn fixed_bits(&self) -> u32 {
        self.bits
    }

    /// 1 at every `'0'`/`'1'` template position, 0 at operand positions.
    pub fn fixed_mask(&self) -> u32 {
        self.mask
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn operand(&self, letter: char) -> Option<&OperandTemplate> {
        self.operands.get(letter)
    }

    pub fn operands(&self) -> &LetterMap<OperandTemplate> {
        &self.operands
    }
}

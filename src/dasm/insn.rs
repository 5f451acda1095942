//! The decode result and its canonical textual forms.

use std::fmt;

use smallvec::SmallVec;

use crate::isa::format::render_operands;
use crate::isa::{InsnTemplate, LetterMap};

/// Marker printed in place of an instruction no template claims.
pub const UNKNOWN_MARKER: &str = "*unk*";

/// One decoded instruction: its consumed bytes, the canonical word built
/// from them, the matched template (if any), and the extracted operand
/// values. Constructed fresh per decode and never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct Insn<'t> {
    length: usize,
    bits: u32,
    raw: SmallVec<[u8; 4]>,
    template: Option<&'t InsnTemplate>,
    operands: LetterMap<i64>,
}

impl<'t> Insn<'t> {
    pub(crate) fn recognized(template: &'t InsnTemplate, bits: u32, raw: &[u8]) -> Self {
        Self {
            length: raw.len(),
            bits,
            raw: SmallVec::from_slice(raw),
            template: Some(template),
            operands: template.parse(bits),
        }
    }

    pub(crate) fn unrecognized(bits: u32, raw: &[u8]) -> Self {
        Self {
            length: raw.len(),
            bits,
            raw: SmallVec::from_slice(raw),
            template: None,
            operands: LetterMap::new(),
        }
    }

    /// Bytes this instruction occupies in the stream. Valid even when no
    /// template matched, so the cursor always knows how far to advance.
    pub fn length(&self) -> usize {
        self.length
    }

    /// The canonical big-endian instruction word, zero-extended through any
    /// unused high-order bytes.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// The raw bytes as they appeared in the stream.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn template(&self) -> Option<&'t InsnTemplate> {
        self.template
    }

    pub fn mnemonic(&self) -> Option<&'t str> {
        self.template.map(|template| template.mnemonic())
    }

    pub fn is_recognized(&self) -> bool {
        self.template.is_some()
    }

    /// Decoded value of one operand letter.
    pub fn operand(&self, letter: char) -> Option<i64> {
        self.operands.get(letter).copied()
    }

    pub fn operands(&self) -> &LetterMap<i64> {
        &self.operands
    }
}

impl fmt::Display for Insn<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.template {
            Some(template) => write!(
                f,
                "{:<12} {}",
                template.mnemonic(),
                render_operands(template.format(), &self.operands)
            ),
            None => f.write_str(UNKNOWN_MARKER),
        }
    }
}

/// Formats the canonical listing line for an instruction decoded at
/// `offset`: the offset as 8-digit hex, the raw bytes as space-separated
/// hex left-justified to 18 columns, then the rendered instruction.
pub fn listing_line(offset: u64, insn: &Insn<'_>) -> String {
    let mut hex = String::new();
    for (index, byte) in insn.raw().iter().enumerate() {
        if index > 0 {
            hex.push(' ');
        }
        hex.push_str(&format!("{byte:02x}"));
    }
    format!("{offset:08x}: {hex:<18} {insn}")
}

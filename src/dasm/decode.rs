//! Cursor-driven decoding. Each step reads a window of at most four bytes,
//! classifies the instruction length from the first byte, and scans the
//! table's candidates of that length in declaration order.

use crate::buffer::ByteSource;
use crate::isa::{InsnSet, MAX_INSN_BYTES, insn_length};

use super::error::DecodeError;
use super::insn::Insn;

/// Decodes the single instruction at `offset`.
///
/// A word no template claims still decodes, to an [`Insn`] without a
/// template; the two failure outcomes are a rejected read and a trailing
/// window shorter than the classified instruction length.
pub fn decode_at<'t, S>(
    table: &'t InsnSet,
    source: &mut S,
    offset: u64,
) -> Result<Insn<'t>, DecodeError>
where
    S: ByteSource + ?Sized,
{
    let mut window = [0u8; MAX_INSN_BYTES];
    let have = source.read_at(offset as i64, &mut window)?;
    if have == 0 {
        return Err(DecodeError::Truncated { offset, expect: 1, have: 0 });
    }

    let length = insn_length(window[0]);
    if have < length {
        return Err(DecodeError::Truncated { offset, expect: length, have });
    }

    let raw = &window[..length];
    // Canonical word: big-endian, zero-extended through the unused high
    // bytes so 2- and 3-byte instructions share the 4-byte word type.
    let bits = raw
        .iter()
        .fold(0u32, |acc, byte| (acc << 8) | u32::from(*byte));

    let insn = match table.lookup(length, bits) {
        Some(template) => Insn::recognized(template, bits, raw),
        None => {
            tracing::debug!("no template for {length}-byte word {bits:#010x} at {offset:#010x}");
            Insn::unrecognized(bits, raw)
        }
    };
    tracing::trace!("{offset:#010x}: {insn}");
    Ok(insn)
}

/// Walks a byte source one instruction at a time. The cursor only ever
/// moves forward, by exactly the length of each decoded instruction; the
/// next instruction begins immediately after the previous one.
pub struct Decoder<'t, S> {
    table: &'t InsnSet,
    source: S,
    cursor: u64,
    len: u64,
}

impl<'t, S: ByteSource> Decoder<'t, S> {
    pub fn new(table: &'t InsnSet, mut source: S) -> Result<Self, DecodeError> {
        let len = source.len()?;
        Ok(Self { table, source, cursor: 0, len })
    }

    /// Current cursor position.
    pub fn offset(&self) -> u64 {
        self.cursor
    }

    /// True once the cursor has consumed the whole source.
    pub fn is_done(&self) -> bool {
        self.cursor >= self.len
    }

    /// Decodes the next instruction, returning it together with the offset
    /// it occupies, or `None` at the end of the source.
    pub fn try_next(&mut self) -> Result<Option<(u64, Insn<'t>)>, DecodeError> {
        if self.is_done() {
            return Ok(None);
        }
        let offset = self.cursor;
        let insn = decode_at(self.table, &mut self.source, offset)?;
        self.cursor += insn.length() as u64;
        Ok(Some((offset, insn)))
    }

    /// Drains the source into a full listing.
    pub fn decode_all(&mut self) -> Result<Vec<(u64, Insn<'t>)>, DecodeError> {
        let mut listing = Vec::new();
        while let Some(entry) = self.try_next()? {
            listing.push(entry);
        }
        Ok(listing)
    }
}

//! The reverse-engineered Aeon R2 instruction table.
//!
//! Declaration order is load-bearing: the first matching template wins, and
//! several entries only stay unambiguous because of where they sit. Keep
//! additions at the end of their length group unless they must shadow an
//! existing pattern. Mnemonics ending in `?` mark decodings that have not
//! been confirmed against real firmware behavior; the table is knowingly
//! incomplete.

use std::sync::OnceLock;

use super::template::InsnTemplate;
use super::{InsnSet, TemplateError};

/// Returns the shared Aeon R2 table, built once for the process lifetime
/// and read-only afterwards.
///
/// # Panics
///
/// Panics if any entry violates the template contract. The table is static
/// data, so that is a table-author error and decoding must not start.
pub fn aeon_r2() -> &'static InsnSet {
    static TABLE: OnceLock<InsnSet> = OnceLock::new();
    TABLE.get_or_init(|| {
        build().unwrap_or_else(|err| panic!("aeon r2 instruction table is invalid: {err}"))
    })
}

#[rustfmt::skip]
fn build() -> Result<InsnSet, TemplateError> {
    let mut t = Vec::new();

    // 2-byte encodings.
    t.push(InsnTemplate::new("l.nop", 2, "1000000000000001", None, &[])?);
    t.push(InsnTemplate::new("l.j", 2, "100100nnnnnnnnnn", Some("%n"), &[])?);
    // Operand encoding unknown; only the fixed pattern is certain.
    t.push(InsnTemplate::new("bt.trap", 2, "1000000000000010", Some("1"), &[])?);
    t.push(InsnTemplate::new("l.jr?", 2, "100001xxxxxyyyyy", Some("??? r%x, r%y"), &[])?);
    t.push(InsnTemplate::new("l.addi", 2, "100111dddddkkkkk", Some("r%d, r%d, %k"), &['k'])?);
    // Could also be a move that sets rD <- K.
    t.push(InsnTemplate::new("l.andi?", 2, "100110dddddkkkkk", Some("r%d, r%d, %k"), &['k'])?);

    // 3-byte encodings.
    t.push(InsnTemplate::new("l.nop", 3, "000000000000000000000000", None, &[])?);
    t.push(InsnTemplate::new("l.lhz", 3, "000010dddddaaaaa00000001", Some("r%d, 0(r%a)"), &[])?);
    t.push(InsnTemplate::new("l.sw", 3, "000011bbbbbaaaaa00000000", Some("0(r%a), r%b"), &[])?);
    t.push(InsnTemplate::new("l.sfgtui", 3, "010111aaaaaiiiiiiii11011", Some("r%a, %i"), &['i'])?);
    t.push(InsnTemplate::new("?entri?", 3, "010111xxxxyyyyyyyyy11000", Some("??? %x, %y"), &[])?);
    t.push(InsnTemplate::new("l.addi", 3, "000111dddddaaaaakkkkkkkk", Some("r%d, r%a, %k"), &['k'])?);
    t.push(InsnTemplate::new("l.bf", 3, "001000nnnnnnnnnnnnnnnn01", Some("%n"), &['n'])?);
    t.push(InsnTemplate::new("l.movhi", 3, "001101100000000000000001", Some("r1, ???"), &[])?);
    t.push(InsnTemplate::new("l.and", 3, "010001dddddaaaaabbbbb100", Some("r%d, r%a, r%b"), &[])?);
    t.push(InsnTemplate::new("l.ori", 3, "010100aaaaabbbbbkkkkkkkk", Some("r%a, r%b, %k"), &[])?);
    t.push(InsnTemplate::new("l.sfeqi", 3, "010111aaaaaiiiii00000001", Some("r%a, %i"), &[])?);
    t.push(InsnTemplate::new("l.sfne", 3, "010111aaaaabbbbb00001101", Some("r%a, r%b"), &[])?);
    t.push(InsnTemplate::new("l.sfgeu", 3, "010111bbbbbaaaaa00010111", Some("r%a, r%b"), &[])?);
    t.push(InsnTemplate::new("l.mul", 3, "010000dddddaaaaabbbbb011", Some("r%d, r%a, r%b"), &[])?);

    // 4-byte encodings.
    t.push(InsnTemplate::new("l.movhi", 4, "110000dddddkkkkkkkkkkkkkkkk00001", Some("r%d, %k"), &[])?);
    t.push(InsnTemplate::new("l.mtspr", 4, "110000bbbbbaaaaakkkkkkkkkkkk1101", Some("r%a, r%b, %k"), &[])?);
    t.push(InsnTemplate::new("l.mfspr", 4, "110000dddddaaaaakkkkkkkkkkkk1111", Some("r%d, r%a, %k"), &[])?);
    t.push(InsnTemplate::new("l.andi", 4, "110001dddddaaaaakkkkkkkkkkkkkkkk", Some("r%d, r%a, %k"), &[])?);
    t.push(InsnTemplate::new("l.ori", 4, "110010dddddaaaaakkkkkkkkkkkkkkkk", Some("r%d, r%a, %k"), &[])?);
    t.push(InsnTemplate::new("l.j", 4, "111010nnnnnnnnnnnnnnnnnnnnnnnn11", Some("%n"), &[])?);
    t.push(InsnTemplate::new("l.sw", 4, "111011bbbbbaaaaaiiiiiiiiiiiiiiii", Some("%i(r%a), r%b"), &[])?);
    t.push(InsnTemplate::new("l.addi", 4, "111111dddddaaaaakkkkkkkkkkkkkkkk", Some("r%d, r%a, %k"), &[])?);
    // The n field layout is probably wrong.
    t.push(InsnTemplate::new("l.bf", 4, "11010100nnnnnnnnnnnnnnnnnnnnnnnn", Some("%n"), &['n'])?);
    t.push(InsnTemplate::new("l.invalidate_line", 4, "11110100000aaaaa00000000000j0001", Some("0(r%a), %j"), &[])?);
    t.push(InsnTemplate::new("l.invalidate_line", 4, "11110100000aaaaa00000000001j0111", Some("0(r%a), %j"), &[])?);
    t.push(InsnTemplate::new("l.syncwritebuffer", 4, "11110100000000000000000000000101", None, &[])?);

    Ok(InsnSet::new(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_builds_and_groups_by_length() {
        let table = aeon_r2();
        assert_eq!(table.templates().len(), 32);
        let count = |length| {
            table
                .templates()
                .iter()
                .filter(|template| template.length() == length)
                .count()
        };
        assert_eq!(count(2), 6);
        assert_eq!(count(3), 14);
        assert_eq!(count(4), 12);
    }

    #[test]
    fn canonical_encodings_resolve() {
        let table = aeon_r2();
        assert_eq!(table.lookup(2, 0x8001).unwrap().mnemonic(), "l.nop");
        assert_eq!(table.lookup(3, 0x000000).unwrap().mnemonic(), "l.nop");
        assert_eq!(table.lookup(4, 0xF4000005).unwrap().mnemonic(), "l.syncwritebuffer");
    }

    #[test]
    fn same_prefix_entries_resolve_by_their_fixed_tails() {
        let table = aeon_r2();
        // The 010111-prefixed 3-byte entries are mutually exclusive by
        // construction only: their fixed tails differ.
        let sfgtui = (0b010111 << 18) | 0b11011;
        assert_eq!(table.lookup(3, sfgtui).unwrap().mnemonic(), "l.sfgtui");
        let entri = (0b010111 << 18) | 0b11000;
        assert_eq!(table.lookup(3, entri).unwrap().mnemonic(), "?entri?");
        let sfeqi = (0b010111 << 18) | 0b00000001;
        assert_eq!(table.lookup(3, sfeqi).unwrap().mnemonic(), "l.sfeqi");
    }
}

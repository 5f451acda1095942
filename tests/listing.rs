//! End-to-end decoding of a representative byte stream through the public
//! API, asserted against golden listing lines.

use std::io::Write;

use aeondasm::buffer::FileBuffer;
use aeondasm::dasm::{Decoder, listing_line};
use aeondasm::isa::{self, InsnSet, InsnTemplate};

/// A hand-assembled stream covering every byte-length class, signed and
/// unsigned operands, and an unknown word in the middle.
const STREAM: &[u8] = &[
    0x80, 0x01, // l.nop
    0x9C, 0x22, // l.addi r1, r1, 2
    0x9C, 0x50, // l.addi r2, r2, -16
    0x08, 0x00, 0x01, // l.lhz r0, 0(r0)
    0x5C, 0x3F, 0xFB, // l.sfgtui r1, -1
    0xC1, 0x00, 0x02, 0x01, // l.movhi r8, 0x10
    0x00, 0xFF, 0xFF, // matches nothing
    0x84, 0x22, // l.jr? r1, r2
];

const GOLDEN: &[&str] = &[
    "00000000: 80 01              l.nop        ",
    "00000002: 9c 22              l.addi       r1, r1, 0x2",
    "00000004: 9c 50              l.addi       r2, r2, -0x10",
    "00000006: 08 00 01           l.lhz        r0, 0(r0)",
    "00000009: 5c 3f fb           l.sfgtui     r1, -0x1",
    "0000000c: c1 00 02 01        l.movhi      r8, 0x10",
    "00000010: 00 ff ff           *unk*",
    "00000013: 84 22              l.jr?        ??? r1, r2",
];

#[test]
fn golden_listing_of_a_mixed_stream() {
    let mut decoder = Decoder::new(isa::aeon_r2(), STREAM).expect("decoder");
    let listing = decoder.decode_all().expect("decode stream");
    let lines: Vec<String> = listing
        .iter()
        .map(|(offset, insn)| listing_line(*offset, insn))
        .collect();
    assert_eq!(lines, GOLDEN, "listing output is a regression contract");
}

#[test]
fn file_backed_decoding_matches_in_memory_decoding() {
    let mut file = tempfile::tempfile().expect("tempfile");
    file.write_all(STREAM).expect("write stream");
    let buffer = FileBuffer::new(file).expect("wrap file");

    let mut from_file = Decoder::new(isa::aeon_r2(), buffer).expect("file decoder");
    let mut from_memory = Decoder::new(isa::aeon_r2(), STREAM).expect("memory decoder");
    assert_eq!(
        from_file.decode_all().expect("file listing"),
        from_memory.decode_all().expect("memory listing"),
        "the source kind must not influence decoding"
    );
}

#[test]
fn trailing_truncation_stops_the_stream_with_context() {
    // The final byte classifies as a 4-byte instruction.
    let stream: &[u8] = &[0x80, 0x01, 0xF4];
    let mut decoder = Decoder::new(isa::aeon_r2(), stream).expect("decoder");
    let (offset, insn) = decoder.try_next().expect("first insn").expect("present");
    assert_eq!((offset, insn.mnemonic()), (0, Some("l.nop")));

    let err = decoder.try_next().expect_err("truncated tail");
    assert_eq!(
        err.to_string(),
        "truncated instruction at offset 0x00000002: classified as 4 byte(s) but only 1 remain"
    );
}

#[test]
fn declaration_order_breaks_ties_between_overlapping_templates() {
    let specific = InsnTemplate::new("t.zero", 2, "100111ddddd00000", Some("r%d"), &[]).unwrap();
    let general =
        InsnTemplate::new("t.any", 2, "100111dddddkkkkk", Some("r%d, %k"), &[]).unwrap();

    // The word both templates match: k = 0.
    let mut word: &[u8] = &[0x9C, 0x40];
    let specific_first = InsnSet::new(vec![specific.clone(), general.clone()]);
    let insn = aeondasm::dasm::decode_at(&specific_first, &mut word, 0).unwrap();
    assert_eq!(insn.mnemonic(), Some("t.zero"));

    let general_first = InsnSet::new(vec![general, specific]);
    let insn = aeondasm::dasm::decode_at(&general_first, &mut word, 0).unwrap();
    assert_eq!(insn.mnemonic(), Some("t.any"), "order is the only tie-breaker");
}

#[test]
fn sixteen_bit_signed_operand_of_all_ones_is_minus_one() {
    let template = InsnTemplate::new(
        "t.imm",
        4,
        "11000000iiiiiiiiiiiiiiii00000000",
        Some("%i"),
        &['i'],
    )
    .unwrap();
    let table = InsnSet::new(vec![template]);
    let mut word: &[u8] = &[0xC0, 0xFF, 0xFF, 0x00];
    let insn = aeondasm::dasm::decode_at(&table, &mut word, 0).unwrap();
    assert_eq!(insn.operand('i'), Some(-1));
    assert_eq!(insn.to_string(), "t.imm        -0x1");
}

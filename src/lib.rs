//! Disassembler for the reverse-engineered MStar Aeon R2 instruction set.
//!
//! Firmware for MStar/SigmaStar SoCs carries code for an undocumented CPU
//! with variable-length (2/3/4-byte) instructions. This crate compiles a
//! declarative bit-template table into matchers and operand extractors, then
//! walks raw byte streams producing decoded instructions or explicit
//! unknowns. The table is a reverse-engineering artifact: it is deliberately
//! incomplete, several entries are guesses, and words no template claims are
//! a normal decode outcome rather than an error.

pub mod buffer;
pub mod dasm;
pub mod isa;

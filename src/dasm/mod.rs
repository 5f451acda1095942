//! Stream decoding: drives a cursor across a byte source and turns windows
//! of bytes into decoded instructions or explicit unknowns.

mod decode;
mod error;
mod insn;

pub use decode::{Decoder, decode_at};
pub use error::DecodeError;
pub use insn::{Insn, UNKNOWN_MARKER, listing_line};

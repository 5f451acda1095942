//! The operand placeholder grammar shared by template validation and
//! rendering. A placeholder is an optional `r`, a `%`, and one tag
//! character: `r%d` renders a register index, `%k` renders hexadecimal, and
//! `%%` escapes a literal percent. The grammar (including the quirk that a
//! leading `r` is consumed even in front of `%%`) is a regression contract
//! with the listings the instruction table was reverse-engineered against.

use super::LetterMap;

/// One lexed element of a rendering format string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FormatPiece {
    /// Verbatim character.
    Literal(char),
    /// `%%`, optionally with the leading `r` the scanner consumes.
    Escape,
    /// `%x` or `r%x`.
    Placeholder { letter: char, register: bool },
}

/// Lexes a format string into pieces. A `%` with no tag character after it
/// stays literal.
pub(crate) fn pieces(format: &str) -> Vec<FormatPiece> {
    let chars: Vec<char> = format.chars().collect();
    let mut pieces = Vec::new();
    let mut index = 0;
    while index < chars.len() {
        let register =
            chars[index] == 'r' && chars.get(index + 1) == Some(&'%') && index + 2 < chars.len();
        let start = if register { index + 1 } else { index };
        if chars[start] == '%' && start + 1 < chars.len() {
            let tag = chars[start + 1];
            pieces.push(if tag == '%' {
                FormatPiece::Escape
            } else {
                FormatPiece::Placeholder { letter: tag, register }
            });
            index = start + 2;
        } else {
            pieces.push(FormatPiece::Literal(chars[index]));
            index += 1;
        }
    }
    pieces
}

/// Substitutes decoded operand values into a format string. Register
/// placeholders render `r<decimal>`; plain placeholders render hexadecimal
/// with the sign preserved. A letter with no decoded value falls back to
/// `?letter` rather than failing the render.
pub(crate) fn render_operands(format: &str, values: &LetterMap<i64>) -> String {
    let mut out = String::new();
    for piece in pieces(format) {
        match piece {
            FormatPiece::Literal(ch) => out.push(ch),
            FormatPiece::Escape => out.push('%'),
            FormatPiece::Placeholder { letter, register } => match values.get(letter) {
                Some(&value) if register => out.push_str(&format!("r{value}")),
                Some(&value) if value < 0 => out.push_str(&format!("-{:#x}", -value)),
                Some(&value) => out.push_str(&format!("{value:#x}")),
                None => out.push_str(&format!("?{letter}")),
            },
        }
    }
    out
}

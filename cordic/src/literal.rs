//! Verilog sized hexadecimal literals.
//!
//! Values wider than 16 bits are written as two underscore separated digit
//! groups, the upper bits and the low 16 bits.

use core::fmt;

/// Widest literal written as a single digit group.
pub const SPLIT_BITS: u32 = 16;

/// A `width` bit unsigned value formatted as e.g. ` 8'h12` or `20'h2_5c7f`.
///
/// The width is right aligned to two characters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HexLiteral {
    pub width: u32,
    pub value: u64,
}

pub fn hex(width: u32, value: u64) -> HexLiteral {
    HexLiteral { width, value }
}

/// Hex digits needed for `bits` bits.
const fn digits(bits: u32) -> usize {
    bits.div_ceil(4) as usize
}

impl fmt::Display for HexLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width <= SPLIT_BITS {
            write!(
                f,
                "{:2}'h{:0d$x}",
                self.width,
                self.value,
                d = digits(self.width)
            )
        } else {
            write!(
                f,
                "{:2}'h{:0d$x}_{:04x}",
                self.width,
                self.value >> SPLIT_BITS,
                self.value & ((1 << SPLIT_BITS) - 1),
                d = digits(self.width - SPLIT_BITS)
            )
        }
    }
}

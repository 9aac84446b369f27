use strum_macros::{Display, EnumIter};

/// The six demonstrated operations. The `Display` text is the section
/// header printed above each demonstration; the shift headers carry no
/// colon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum BitOp {
    #[strum(serialize = "AND:")]
    And,
    #[strum(serialize = "OR:")]
    Or,
    #[strum(serialize = "XOR:")]
    Xor,
    #[strum(serialize = "NOT:")]
    Not,
    #[strum(serialize = "SHIFT LEFT")]
    ShiftLeft,
    #[strum(serialize = "SHIFT RIGHT")]
    ShiftRight,
}

impl BitOp {
    /// Number of operands the operation takes (1 or 2).
    pub fn arity(&self) -> usize {
        match self {
            BitOp::And | BitOp::Or | BitOp::Xor => 2,
            BitOp::Not | BitOp::ShiftLeft | BitOp::ShiftRight => 1,
        }
    }
}

/// Copies a bit to the result if it is set in both operands.
pub fn and(a: u8, b: u8) -> u8 {
    a & b
}

/// Copies a bit to the result if it is set in either operand, or both.
pub fn or(a: u8, b: u8) -> u8 {
    a | b
}

/// Copies a bit to the result if it is set in exactly one operand.
pub fn xor(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Ones-complement: flips every bit of the value.
pub fn not(value: u8) -> u8 {
    !value
}

/// Logical shift left. Bits pushed past bit 7 are discarded and vacated
/// low bits are zero-filled; a shift count of 8 or more yields 0.
pub fn shift_left(value: u8, shift: u8) -> u8 {
    value.checked_shl(shift.into()).unwrap_or(0)
}

/// Logical shift right, zero-filling from the top. A shift count of 8 or
/// more yields 0.
pub fn shift_right(value: u8, shift: u8) -> u8 {
    value.checked_shr(shift.into()).unwrap_or(0)
}

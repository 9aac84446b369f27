use std::io::Write;

use log::debug;

use crate::format;
use crate::ops;
use crate::ops::BitOp;
use crate::Result;

/// Couples each bit operation with its console output: every method
/// computes the result, prints it through the formatter, and returns it.
/// The pure computations live in [`ops`]; this wrapper exists so the demo
/// (and anything else that wants print-as-you-go behavior)
/// gets both in one call.
pub struct BitConsole<W: Write> {
    out: W,
}

impl<W: Write> BitConsole<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Echoes an operand without performing any operation.
    pub fn print_value(&mut self, value: u8) -> Result<()> {
        format::print_value(&mut self.out, value)
    }

    pub fn and(&mut self, a: u8, b: u8) -> Result<u8> {
        let q = ops::and(a, b);
        format::print_value(&mut self.out, q)?;
        Ok(q)
    }

    pub fn or(&mut self, a: u8, b: u8) -> Result<u8> {
        let q = ops::or(a, b);
        format::print_value(&mut self.out, q)?;
        Ok(q)
    }

    pub fn xor(&mut self, a: u8, b: u8) -> Result<u8> {
        let q = ops::xor(a, b);
        format::print_value(&mut self.out, q)?;
        Ok(q)
    }

    pub fn not(&mut self, value: u8) -> Result<u8> {
        let q = ops::not(value);
        format::print_value(&mut self.out, q)?;
        Ok(q)
    }

    pub fn shift_left(&mut self, value: u8, shift: u8) -> Result<u8> {
        let q = ops::shift_left(value, shift);
        format::print_value(&mut self.out, q)?;
        Ok(q)
    }

    pub fn shift_right(&mut self, value: u8, shift: u8) -> Result<u8> {
        let q = ops::shift_right(value, shift);
        format::print_value(&mut self.out, q)?;
        Ok(q)
    }

    /// Prints the section header for `op`, echoes its operands, then the
    /// separator line. The two-operand sections use a 13-dash separator,
    /// the one-operand sections a 14-dash one.
    fn section(&mut self, op: BitOp, operands: &[u8]) -> Result<()> {
        debug!("demonstrating {:?} with operands {:?}", op, operands);
        writeln!(self.out, "{}", op)?;
        for &operand in operands {
            self.print_value(operand)?;
        }
        let separator = match op {
            BitOp::And | BitOp::Or | BitOp::Xor => "-------------",
            BitOp::Not | BitOp::ShiftLeft | BitOp::ShiftRight => "--------------",
        };
        writeln!(self.out, "{}", separator)?;
        Ok(())
    }

    fn blank(&mut self) -> Result<()> {
        writeln!(self.out)?;
        Ok(())
    }
}

/// Runs the fixed demonstration sequence against the given sink: one
/// section per operation, with hardcoded sample values.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    let a = 6;
    let b = 6;
    let origin = 4; // value before shifting
    let nshift = 2; // number of shifts

    let mut console = BitConsole::new(out);

    console.section(BitOp::And, &[a, b])?;
    console.and(a, b)?;
    console.blank()?;

    console.section(BitOp::Or, &[a, b])?;
    console.or(a, b)?;
    console.blank()?;

    console.section(BitOp::Xor, &[a, b])?;
    console.xor(a, b)?;
    console.blank()?;

    console.section(BitOp::Not, &[origin])?;
    console.not(origin)?;
    console.blank()?;

    console.section(BitOp::ShiftLeft, &[origin])?;
    console.shift_left(origin, nshift)?;
    console.blank()?;

    console.section(BitOp::ShiftRight, &[origin])?;
    console.shift_right(origin, nshift)?;

    Ok(())
}

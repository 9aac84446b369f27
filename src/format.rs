use std::io::Write;

use crate::Result;

/// Builds the 8-character binary representation of a byte, most
/// significant bit first.
pub fn binary_string(value: u8) -> String {
    let mut bits = String::with_capacity(8);
    for i in (0..8).rev() {
        bits.push(if (value >> i) & 0x1 == 1 { '1' } else { '0' });
    }
    bits
}

/// Formats a byte as its zero-padded decimal value followed by its binary
/// representation, e.g. `004 = 00000100`.
pub fn format_line(value: u8) -> String {
    format!("{:03} = {}", value, binary_string(value))
}

/// Writes the formatted line for `value` to the given sink, followed by a
/// newline.
pub fn print_value<W: Write>(out: &mut W, value: u8) -> Result<()> {
    writeln!(out, "{}", format_line(value))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_string_is_msb_first() {
        assert_eq!(binary_string(0b0000_0100), "00000100");
        assert_eq!(binary_string(0b1000_0000), "10000000");
        assert_eq!(binary_string(0b0000_0001), "00000001");
    }

    #[test]
    fn binary_string_is_always_eight_chars() {
        for v in 0..=255u8 {
            let s = binary_string(v);
            assert_eq!(s.len(), 8);
            assert!(s.chars().all(|c| c == '0' || c == '1'));
        }
    }

    #[test]
    fn format_line_fixtures() {
        assert_eq!(format_line(4), "004 = 00000100");
        assert_eq!(format_line(251), "251 = 11111011");
        assert_eq!(format_line(0), "000 = 00000000");
        assert_eq!(format_line(255), "255 = 11111111");
    }

    #[test]
    fn print_value_appends_newline() {
        let mut out = Vec::new();
        print_value(&mut out, 6).unwrap();
        assert_eq!(out, b"006 = 00000110\n");
    }
}

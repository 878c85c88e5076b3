//! A collection of utility functions used throughout the crate.

use itertools::Itertools;
use std::io::{self, Write};

/// A struct representing a progress bar for progress printing on the
/// command line.
pub struct ProgressBar {
    total: usize,
    done: usize,
    printed: usize,
}

impl ProgressBar {
    /// Width of a full bar in characters.
    const WIDTH: usize = 100;

    /// Creates a new progress bar tracking `num_items` steps.
    pub fn new(num_items: usize) -> ProgressBar {
        ProgressBar {
            total: num_items.max(1),
            done: 0,
            printed: 0,
        }
    }

    /// Increments the current progress. The bar prints whenever a new
    /// step is reached.
    #[inline(always)]
    pub fn increment(&mut self) {
        self.done += 1;

        let target = self.done * ProgressBar::WIDTH / self.total;

        while self.printed < target {
            print!("=");
            io::stdout().flush().expect("Could not flush stdout");
            self.printed += 1;
        }
    }
}

impl Drop for ProgressBar {
    fn drop(&mut self) {
        if self.printed > 0 {
            println!();
        }
    }
}

/// Renders a byte sequence as lowercase hex.
pub fn to_hex(data: &[u8]) -> String {
    data.iter().map(|byte| format!("{:02x}", byte)).join("")
}

/// Parses a hex string into bytes. The string must be ASCII with an even
/// number of digits.
pub fn parse_hex(input: &str) -> Result<Vec<u8>, String> {
    if !input.is_ascii() {
        return Err(String::from("Hex input must be ASCII."));
    }

    if input.len() % 2 != 0 {
        return Err(String::from("Hex input must have an even number of digits."));
    }

    (0..input.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&input[i..i + 2], 16)
                .map_err(|_| format!("Invalid hexadecimal byte: {}.", &input[i..i + 2]))
        })
        .collect()
}

/// Parses a key from decimal, binary (0b) or hex (0x) notation. The
/// cipher discards bits beyond its key size, so wide keys are not
/// rejected here.
pub fn parse_key(input: &str) -> Result<u16, String> {
    let parsed = if let Some(digits) = input.strip_prefix("0b") {
        u16::from_str_radix(digits, 2)
    } else if let Some(digits) = input.strip_prefix("0x") {
        u16::from_str_radix(digits, 16)
    } else {
        input.parse()
    };

    parsed.map_err(|_| format!("Invalid key: {}.", input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trips() {
        assert_eq!(Ok(vec![0x42, 0x52, 0xf0]), parse_hex("4252f0"));
        assert_eq!("4252f0", to_hex(&[0x42, 0x52, 0xf0]));
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert!(parse_hex("425").is_err());
        assert!(parse_hex("4g").is_err());
        assert!(parse_hex("ää").is_err());
    }

    #[test]
    fn keys_parse_in_all_notations() {
        assert_eq!(Ok(0b10_1100_1111), parse_key("0b1011001111"));
        assert_eq!(Ok(0x2cf), parse_key("0x2cf"));
        assert_eq!(Ok(719), parse_key("719"));
        assert!(parse_key("key").is_err());
    }
}

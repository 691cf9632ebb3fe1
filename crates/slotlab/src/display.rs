//! Shortened hex for display.

/// Default number of hex digits kept after `0x`.
pub const DEFAULT_DISPLAY_LEN: usize = 8;

/// Number of trailing characters kept when a value is shortened.
pub const DEFAULT_SUFFIX_LEN: usize = 6;

/// How hex values are shortened for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Hex digits kept after the `0x` prefix.
    pub prefix_digits: usize,
    /// Trailing characters kept after the ellipsis.
    pub suffix_chars: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            prefix_digits: DEFAULT_DISPLAY_LEN,
            suffix_chars: DEFAULT_SUFFIX_LEN,
        }
    }
}

impl DisplayConfig {
    /// Shorten `hex` to `0x{prefix}...{suffix}`.
    ///
    /// A missing `0x` is added first. Values no longer than
    /// `prefix_digits + 2` characters are returned whole.
    pub fn format(&self, hex: &str) -> String {
        let prefixed = if hex.starts_with("0x") {
            hex.to_owned()
        } else {
            format!("0x{hex}")
        };

        let chars: Vec<char> = prefixed.chars().collect();
        let head = self.prefix_digits.saturating_add(2);
        if chars.len() <= head {
            return prefixed;
        }

        let tail_start = chars.len().saturating_sub(self.suffix_chars);
        let head: String = chars[..head].iter().collect();
        let tail: String = chars[tail_start..].iter().collect();
        format!("{head}...{tail}")
    }
}

/// Shorten `hex` keeping `length` digits after `0x` and the last 6 characters.
pub fn format_hex(hex: &str, length: usize) -> String {
    DisplayConfig {
        prefix_digits: length,
        ..Default::default()
    }
    .format(hex)
}

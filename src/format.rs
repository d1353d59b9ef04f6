//! Output format selection.

use std::fmt;

use crate::{Error, Result};

/// What the writer emits for each address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum OutputFormat {
    /// Shell fragment running a proxy health check through the address
    #[default]
    Script = 0,
    /// The address on its own line
    Plain = 1,
}

impl OutputFormat {
    /// Parse the `-f` flag value.
    ///
    /// The value must be an integer. `1` selects `Plain`; every other
    /// integer selects `Script`.
    pub fn from_flag(flag: &str) -> Result<Self> {
        let value: i64 = flag
            .trim()
            .parse()
            .map_err(|_| Error::InvalidFormatFlag(flag.to_string()))?;

        if value != 0 && value != 1 {
            log::warn!("format flag {} is not 0 or 1, using script output", value);
        }

        Ok(Self::from_i64(value))
    }

    pub fn from_i64(v: i64) -> Self {
        if v == 1 {
            OutputFormat::Plain
        } else {
            OutputFormat::Script
        }
    }

    /// Convert to the flag value.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Script => "script",
            OutputFormat::Plain => "plain",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Display switches consumed by the size formatter.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FormatFlags: u8 {
        /// Show verbose labels (`X-Large`) instead of keys (`XL`).
        const VERBOSE = 1 << 0;
        /// Show verbose labels for generated extension sizes as well.
        const DYNAMIC_SIZE_VERBOSE = 1 << 1;
    }
}

impl Default for FormatFlags {
    fn default() -> Self {
        Self::empty()
    }
}

impl Serialize for FormatFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for FormatFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}

/// How extension sizes are spelled: `3XL` or `XXXL`.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum XSizeNotation {
    #[default]
    Numeric,
    Repeated,
}

/// Formatting configuration stored on a chart.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormattingOptions {
    pub flags: FormatFlags,
    pub x_size_notation: XSizeNotation,
}

/// Partial update for [`FormattingOptions`]; `None` keeps the current value.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormattingOverrides {
    pub verbose: Option<bool>,
    pub dynamic_size_verbose: Option<bool>,
    pub x_size_notation: Option<XSizeNotation>,
}

impl FormattingOptions {
    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.flags.contains(FormatFlags::VERBOSE)
    }

    #[must_use]
    pub const fn dynamic_size_verbose(&self) -> bool {
        self.flags.contains(FormatFlags::DYNAMIC_SIZE_VERBOSE)
    }

    pub fn merge(&mut self, overrides: &FormattingOverrides) {
        if let Some(on) = overrides.verbose {
            self.flags.set(FormatFlags::VERBOSE, on);
        }
        if let Some(on) = overrides.dynamic_size_verbose {
            self.flags.set(FormatFlags::DYNAMIC_SIZE_VERBOSE, on);
        }
        if let Some(notation) = overrides.x_size_notation {
            self.x_size_notation = notation;
        }
    }
}

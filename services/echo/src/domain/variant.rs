// Message presets for the echo function
//
// Each preset corresponds to one of the deployed echo functions
// (`test-1` .. `test-4`). They share the same behavior and differ only
// in the fixed message returned in the response body.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a variant identifier is not recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown variant: {0}")]
pub struct ParseVariantError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// `test-1`
    #[default]
    Test1,

    /// `test-2`
    Test2,

    /// `test-3`
    Test3,

    /// `test-4` (v2 message)
    Test4,
}

impl Variant {
    /// All known variants, in identifier order
    pub const ALL: [Variant; 4] = [Variant::Test1, Variant::Test2, Variant::Test3, Variant::Test4];

    /// Identifier used in configuration (e.g. `test-1`)
    pub fn id(&self) -> &'static str {
        match self {
            Variant::Test1 => "test-1",
            Variant::Test2 => "test-2",
            Variant::Test3 => "test-3",
            Variant::Test4 => "test-4",
        }
    }

    /// Fixed message returned by this variant
    pub fn message(&self) -> &'static str {
        match self {
            Variant::Test1 => "Hello from test-1!, lets see if it works",
            Variant::Test2 => "Hello from test----  !",
            Variant::Test3 => "Helloo---------->",
            Variant::Test4 => "Hello from test-4-v2!",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        Variant::ALL
            .into_iter()
            .find(|variant| variant.id() == id)
            .ok_or_else(|| ParseVariantError(id.to_string()))
    }
}

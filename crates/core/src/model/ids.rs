use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier for one of the five imaging modalities.
///
/// The set is closed: every UI control selects from `ModalityId::ALL`, so lookups
/// keyed by this enum never fail.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ModalityId {
    #[default]
    Mri,
    Ct,
    Xray,
    Ultrasound,
    Pet,
}

impl ModalityId {
    /// All modalities in selector order.
    pub const ALL: [ModalityId; 5] = [
        ModalityId::Mri,
        ModalityId::Ct,
        ModalityId::Xray,
        ModalityId::Ultrasound,
        ModalityId::Pet,
    ];

    /// Number of modalities.
    pub const COUNT: usize = Self::ALL.len();

    /// Stable lowercase key, as used on the command line and in config files.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            ModalityId::Mri => "mri",
            ModalityId::Ct => "ct",
            ModalityId::Xray => "xray",
            ModalityId::Ultrasound => "ultrasound",
            ModalityId::Pet => "pet",
        }
    }

    /// Dense index into `ALL`.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            ModalityId::Mri => 0,
            ModalityId::Ct => 1,
            ModalityId::Xray => 2,
            ModalityId::Ultrasound => 3,
            ModalityId::Pet => 4,
        }
    }
}

// ─── Display / FromStr ─────────────────────────────────────────────────────────

impl fmt::Display for ModalityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error type for parsing a `ModalityId` from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseModalityError {
    raw: String,
}

impl ParseModalityError {
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for ParseModalityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown modality {:?} (expected one of: mri, ct, xray, ultrasound, pet)",
            self.raw
        )
    }
}

impl std::error::Error for ParseModalityError {}

impl FromStr for ModalityId {
    type Err = ParseModalityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        ModalityId::ALL
            .into_iter()
            .find(|id| id.key() == needle)
            .ok_or_else(|| ParseModalityError { raw: s.to_string() })
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

//! # Bands and Radio Access Technologies
//!
//! A band number alone is ambiguous: LTE band 41 and NR band n41 share a
//! number but live in different channel-numbering schemes. [`Band`] carries
//! the [`Rat`] alongside the number so the two can never be confused.
//!
//! | Rat   | Channel code | Max code  | Notation |
//! |-------|--------------|-----------|----------|
//! | LTE   | EARFCN       | 262 143   | `B3`     |
//! | NR    | NR-ARFCN     | 3 279 165 | `n78`    |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChannelError, ParseRatError};

// ─── Radio Access Technology ────────────────────────────────────────────────

/// Cellular generation, which selects the channel-numbering scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rat {
    /// 4G E-UTRA, channels numbered by EARFCN.
    Lte,
    /// 5G New Radio, channels numbered by NR-ARFCN.
    Nr,
}

impl Rat {
    /// Largest channel code the scheme can encode.
    ///
    /// EARFCN is an 18-bit field; NR-ARFCN tops out at the end of the global
    /// frequency raster (100 GHz).
    pub const fn max_channel(self) -> u32 {
        match self {
            Rat::Lte => 262_143,
            Rat::Nr => 3_279_165,
        }
    }

    /// Name of the channel code for this scheme.
    pub const fn channel_name(self) -> &'static str {
        match self {
            Rat::Lte => "EARFCN",
            Rat::Nr => "NR-ARFCN",
        }
    }

    /// Prefix used when printing a band of this generation.
    pub const fn band_prefix(self) -> &'static str {
        match self {
            Rat::Lte => "B",
            Rat::Nr => "n",
        }
    }

    /// Check that `code` lies within this scheme's channel domain.
    ///
    /// A code that passes may still match no band; that is decided by the
    /// band table, not here.
    pub fn check_channel(self, code: i64) -> Result<u32, ChannelError> {
        if code < 0 {
            return Err(ChannelError::Negative { rat: self, code });
        }
        let max = self.max_channel();
        match u32::try_from(code) {
            Ok(c) if c <= max => Ok(c),
            _ => Err(ChannelError::OutOfDomain {
                rat: self,
                code,
                max,
            }),
        }
    }
}

impl fmt::Display for Rat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rat::Lte => write!(f, "lte"),
            Rat::Nr => write!(f, "nr"),
        }
    }
}

impl FromStr for Rat {
    type Err = ParseRatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lte" | "4g" | "eutra" | "e-utra" => Ok(Rat::Lte),
            "nr" | "5g" => Ok(Rat::Nr),
            _ => Err(ParseRatError(s.to_string())),
        }
    }
}

// ─── Band ───────────────────────────────────────────────────────────────────

/// LTE/NR frequency band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Band {
    /// 3GPP band number (e.g. 3, 41, 78).
    pub number: u16,
    /// Generation the number belongs to.
    pub rat: Rat,
}

impl Band {
    pub const fn lte(number: u16) -> Self {
        Band {
            number,
            rat: Rat::Lte,
        }
    }

    pub const fn nr(number: u16) -> Self {
        Band {
            number,
            rat: Rat::Nr,
        }
    }

    /// Whether this is an NR (5G) band.
    pub const fn is_nr(&self) -> bool {
        matches!(self.rat, Rat::Nr)
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rat.band_prefix(), self.number)
    }
}

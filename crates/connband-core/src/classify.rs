//! # Band Classifier
//!
//! Maps a channel code to the band whose range contains it, scanning the
//! table in order and stopping at the first hit.
//!
//! ```
//! use connband_core::classify::resolve;
//! use connband_core::table::{EUTRA, NR};
//!
//! assert_eq!(resolve(1500, &EUTRA).map(|b| b.to_string()), Some("B3".into()));
//! assert_eq!(resolve(640000, &NR).map(|b| b.to_string()), Some("n77".into()));
//! assert_eq!(resolve(-1, &NR), None);
//! ```

use serde::{Deserialize, Serialize};

use crate::band::{Band, Rat};
use crate::error::ChannelError;
use crate::table::BandTable;

/// Resolve `code` against `table`.
///
/// Accepts any integer. Codes outside every row, including negative ones,
/// yield `None`.
pub fn resolve(code: i64, table: &BandTable) -> Option<Band> {
    table.resolve(code)
}

/// Like [`resolve`], but first rejects codes that cannot exist in the
/// table's numbering scheme, e.g. an NR-ARFCN handed to the LTE table.
///
/// A valid code that matches no band is still `Ok(None)`.
pub fn resolve_strict(code: i64, table: &BandTable) -> Result<Option<Band>, ChannelError> {
    table.rat().check_channel(code)?;
    Ok(table.resolve(code))
}

// ─── Serving Cell ───────────────────────────────────────────────────────────

/// Channel code reported for a serving cell, tagged with its generation.
///
/// This is what a modem or phone radio layer hands over; the tag decides
/// which table applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rat", rename_all = "lowercase")]
pub enum CellIdentity {
    Lte { earfcn: i64 },
    Nr { nrarfcn: i64 },
}

impl CellIdentity {
    /// Build from a generation and a raw channel code.
    pub fn new(rat: Rat, code: i64) -> Self {
        match rat {
            Rat::Lte => CellIdentity::Lte { earfcn: code },
            Rat::Nr => CellIdentity::Nr { nrarfcn: code },
        }
    }

    pub fn rat(&self) -> Rat {
        match self {
            CellIdentity::Lte { .. } => Rat::Lte,
            CellIdentity::Nr { .. } => Rat::Nr,
        }
    }

    /// The raw channel code.
    pub fn channel(&self) -> i64 {
        match *self {
            CellIdentity::Lte { earfcn } => earfcn,
            CellIdentity::Nr { nrarfcn } => nrarfcn,
        }
    }

    /// Band of this cell, or `None` if the code is not in any known band.
    pub fn band(&self) -> Option<Band> {
        resolve(self.channel(), BandTable::for_rat(self.rat()))
    }

    /// Band of this cell, rejecting codes outside the generation's domain.
    pub fn band_strict(&self) -> Result<Option<Band>, ChannelError> {
        resolve_strict(self.channel(), BandTable::for_rat(self.rat()))
    }
}

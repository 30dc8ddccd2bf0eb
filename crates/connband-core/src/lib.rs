//! Cellular band classification for LTE and NR channel codes.
//!
//! This crate contains:
//! - **Bands** — generation-tagged band numbers ([`band::Band`], [`band::Rat`])
//! - **Tables** — static EARFCN and NR-ARFCN allocations ([`table::EUTRA`], [`table::NR`])
//! - **Classifier** — first-match lookup from channel code to band ([`classify::resolve`])
//! - **Errors** — channel-domain validation for the strict lookup path

pub mod band;
pub mod classify;
pub mod error;
pub mod table;

pub use band::{Band, Rat};
pub use classify::{CellIdentity, resolve, resolve_strict};
pub use error::ChannelError;
pub use table::{BandRange, BandTable, EUTRA, NR};

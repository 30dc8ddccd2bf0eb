//! Error types.
//!
//! A channel code that matches no band is not an error; see
//! [`crate::classify::resolve`]. These errors only come from the opt-in
//! validation paths.

use thiserror::Error;

use crate::band::Rat;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    #[error("negative {} {code} for {rat}", .rat.channel_name())]
    Negative { rat: Rat, code: i64 },
    #[error("{} {code} outside the {rat} channel domain (max {max})", .rat.channel_name())]
    OutOfDomain { rat: Rat, code: i64, max: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown radio access technology: {0:?} (expected lte or nr)")]
pub struct ParseRatError(pub String);

//! Errors that abort a call.
//!
//! Recoverable geometric situations (kernel inside a region, empty feasible
//! interval, saturated buffer) are not errors; they show up in the output as
//! fallback intervals, missing placements, or a zero scale.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Out-of-range parameter, invalid necklace shape, or unknown handle.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A bead was added for a region id that is not in the region map.
    #[error("no such region: {0}")]
    NoSuchRegion(String),
}

pub type Result<T> = std::result::Result<T, Error>;

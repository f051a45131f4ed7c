// SPDX-License-Identifier: CC0-1.0

//! Consensus.
//!
//! This module defines structures, functions and traits that are needed to
//! conform to VERGE consensus.

pub mod encode;
pub mod params;

pub use self::encode::{
    deserialize, deserialize_partial, serialize, serialize_hex, Decodable, Encodable, ReadExt,
    WriteExt,
};
pub use self::params::Params;

// SPDX-License-Identifier: CC0-1.0

//! Blockdata.
//!
//! Block headers, blocks, transactions and the script fragments they carry.

pub mod block;
pub mod constants;
pub mod script;
pub mod transaction;

// SPDX-License-Identifier: CC0-1.0

//! # Rust VERGE Library
//!
//! This is a library that supports the VERGE network protocol and associated
//! primitives. It is designed for Rust programs built to work with the VERGE
//! network, and provides the consensus parameters, block and transaction
//! primitives, and the multi-algorithm proof-of-work rules of the chain.
//!
//! VERGE headers are hashed twice over: every block, whatever algorithm it
//! was mined under, is *identified* by the scrypt digest of its header, while
//! its proof of work is checked under the algorithm tagged in the header
//! version. See [`block::Header`] for the details.
//!
//! ## Available feature flags
//!
//! * `serde` - implements `serde`-based serialization and deserialization.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// Coding conventions.
#![warn(missing_docs)]
// Instead of littering the codebase for non-fuzzing code just globally allow.
#![cfg_attr(fuzzing, allow(dead_code, unused_imports))]

/// Re-export of the `bitcoin_hashes` crate.
pub extern crate hashes;

/// Re-export of the `hex-conservative` crate.
pub extern crate hex;

#[cfg(feature = "serde")]
extern crate serde;

mod internal_macros;

pub mod blockdata;
pub mod consensus;
pub mod crypto;
pub mod hash_types;
pub mod merkle_tree;
pub mod network;
pub mod pow;

pub use crate::blockdata::{block, constants, script, transaction};

#[doc(inline)]
pub use crate::{
    blockdata::block::{Block, Header},
    blockdata::constants::genesis_block,
    blockdata::script::ScriptBuf,
    blockdata::transaction::{OutPoint, Sequence, Transaction, TxIn, TxOut},
    consensus::params::Params,
    crypto::pow_hash::Algorithm,
    hash_types::{BlockHash, PowHash, TxMerkleNode, Txid},
    network::{ChainParams, Magic, Network},
    pow::{CompactTarget, Target, Work},
};

// SPDX-License-Identifier: CC0-1.0

//! Cryptography.
//!
//! The proof-of-work digest functions used by the multi-algorithm mining
//! rules.

pub mod pow_hash;

pub use self::pow_hash::Algorithm;

// SPDX-License-Identifier: CC0-1.0

//! Proof-of-work related integer types.
//!
//! Provides the [`Target`] a proof-of-work digest is compared against, the
//! [`CompactTarget`] "bits" encoding headers carry it in, and [`Work`], the
//! cumulative-work quantity chains are ranked by.

use core::fmt;

use std::io::{self, Read, Write};

use crate::consensus::encode::{self, Decodable, Encodable};
use crate::hash_types::PowHash;

/// Encoded form of a difficulty target, as it appears in the "bits" field of
/// a block header.
///
/// This is a base-256 floating point representation: the top byte is an
/// exponent (in bytes) and the low three bytes are the mantissa. Satoshi made
/// it signed, so a mantissa with the high bit set denotes a negative, i.e.
/// zero, target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompactTarget(u32);

impl CompactTarget {
    /// Creates a `CompactTarget` from a consensus encoded `u32`.
    pub const fn from_consensus(bits: u32) -> Self { CompactTarget(bits) }

    /// Returns the consensus encoded `u32` representation of this target.
    pub const fn to_consensus(self) -> u32 { self.0 }
}

impl From<CompactTarget> for Target {
    fn from(c: CompactTarget) -> Self { Target::from_compact(c) }
}

impl Encodable for CompactTarget {
    #[inline]
    fn consensus_encode<W: Write + ?Sized>(&self, w: &mut W) -> Result<usize, io::Error> {
        self.0.consensus_encode(w)
    }
}

impl Decodable for CompactTarget {
    #[inline]
    fn consensus_decode<R: Read + ?Sized>(r: &mut R) -> Result<Self, encode::Error> {
        u32::consensus_decode(r).map(CompactTarget)
    }
}

impl fmt::LowerHex for CompactTarget {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::LowerHex::fmt(&self.0, f) }
}

impl fmt::UpperHex for CompactTarget {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::UpperHex::fmt(&self.0, f) }
}

/// A 256-bit difficulty target, stored in big-endian byte order.
///
/// A block's proof of work is valid when its digest, interpreted as a 256-bit
/// little-endian number, is less than or equal to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Target([u8; 32]);

impl Target {
    /// The zero target, met by no digest.
    ///
    /// Negative compact encodings decode to this.
    pub const ZERO: Target = Target([0; 32]);

    /// The maximum possible target, met by every digest.
    pub const MAX: Target = Target([0xff; 32]);

    /// The proof of work limit on mainnet.
    pub const MAX_ATTAINABLE_MAINNET: Target = Target([
        0x00, 0x00, 0x0f, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00,
    ]);

    /// The proof of work limit on testnet (same as mainnet).
    pub const MAX_ATTAINABLE_TESTNET: Target = Target::MAX_ATTAINABLE_MAINNET;

    /// The proof of work limit on regtest, low enough that every nonce wins.
    pub const MAX_ATTAINABLE_REGTEST: Target = Target([
        0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff,
    ]);

    /// Computes the target value from its compact representation.
    ///
    /// Out-of-range exponents saturate to [`Target::MAX`] rather than error;
    /// the caller is expected to reject such headers against the network's
    /// proof of work limit.
    pub fn from_compact(c: CompactTarget) -> Target {
        let bits = c.to_consensus();
        let mant = bits & 0x00ff_ffff;
        let expt = (bits >> 24) as usize;

        // The sign bit in the mantissa denotes a negative target.
        if mant == 0 || mant > 0x7f_ffff {
            return Target::ZERO;
        }

        let mut be = [0u8; 32];
        if expt <= 3 {
            let mant = mant >> (8 * (3 - expt));
            be[29] = (mant >> 16) as u8;
            be[30] = (mant >> 8) as u8;
            be[31] = mant as u8;
        } else {
            let shift = expt - 3;
            let bytes = [(mant >> 16) as u8, (mant >> 8) as u8, mant as u8];
            for (i, byte) in bytes.iter().enumerate() {
                if *byte == 0 {
                    continue;
                }
                let weight = shift + 2 - i;
                if weight >= 32 {
                    return Target::MAX;
                }
                be[31 - weight] = *byte;
            }
        }
        Target(be)
    }

    /// Computes the compact representation of the target.
    ///
    /// Lossy: the mantissa keeps only the top three bytes of the target.
    pub fn to_compact_lossy(self) -> CompactTarget {
        let first = match self.0.iter().position(|b| *b != 0) {
            Some(i) => i,
            None => return CompactTarget::from_consensus(0),
        };
        let mut size = 32 - first as u32;
        let byte = |i: usize| -> u32 {
            if i < 32 {
                self.0[i] as u32
            } else {
                0
            }
        };
        let mut mant = (byte(first) << 16) | (byte(first + 1) << 8) | byte(first + 2);
        // The sign bit must stay clear, so push the mantissa down a byte.
        if mant & 0x0080_0000 != 0 {
            mant >>= 8;
            size += 1;
        }
        CompactTarget::from_consensus((size << 24) | mant)
    }

    /// Creates a `Target` from big-endian bytes.
    pub const fn from_be_bytes(bytes: [u8; 32]) -> Target { Target(bytes) }

    /// Returns the target as big-endian bytes.
    pub const fn to_be_bytes(self) -> [u8; 32] { self.0 }

    /// Returns true if the given proof-of-work digest satisfies this target.
    pub fn is_met_by(&self, hash: PowHash) -> bool {
        let mut be = hash.to_byte_array();
        be.reverse();
        be <= self.0
    }
}

impl fmt::LowerHex for Target {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::LowerHex::fmt(self, f) }
}

/// A 256-bit amount of accumulated proof-of-work, stored in big-endian byte
/// order.
///
/// Chains are compared by total work, not length; [`Ord`] on this type is
/// that comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Work([u8; 32]);

impl Work {
    /// Zero work, the chain-work floor of a network with no minimum.
    pub const MIN: Work = Work([0; 32]);

    /// Creates a `Work` from a small integer value.
    pub const fn from_u64(value: u64) -> Work {
        let mut be = [0u8; 32];
        let v = value.to_be_bytes();
        let mut i = 0;
        while i < 8 {
            be[24 + i] = v[i];
            i += 1;
        }
        Work(be)
    }

    /// Creates a `Work` from big-endian bytes.
    pub const fn from_be_bytes(bytes: [u8; 32]) -> Work { Work(bytes) }

    /// Returns the work as big-endian bytes.
    pub const fn to_be_bytes(self) -> [u8; 32] { self.0 }
}

impl fmt::LowerHex for Work {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Display for Work {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::LowerHex::fmt(self, f) }
}

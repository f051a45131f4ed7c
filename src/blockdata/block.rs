// SPDX-License-Identifier: CC0-1.0

//! VERGE blocks.
//!
//! A block is a bundle of transactions with a proof-of-work attached, which
//! attaches to an earlier block to form the blockchain.
//!
//! Two different digests of the same header matter here. The chain identity
//! of a block, [`Header::block_hash`], is always the scrypt digest, whatever
//! algorithm the block was mined under. The digest checked against the
//! difficulty target, [`Header::pow_hash`], is computed under the algorithm
//! tagged in the version field. For scrypt-mined blocks the two coincide.

use core::fmt;

use std::io::{self, Read, Write};

use crate::blockdata::transaction::Transaction;
use crate::consensus::encode::{self, Decodable, Encodable};
use crate::consensus::serialize;
use crate::crypto::Algorithm;
use crate::hash_types::{BlockHash, PowHash, TxMerkleNode};
use crate::internal_macros::impl_consensus_encoding;
use crate::merkle_tree;
use crate::pow::{CompactTarget, Target};

/// A block version number.
///
/// Bits 11 through 14 carry the mining algorithm tag. The bit patterns are
/// historical and not a clean enumeration; [`Version::algorithm`] decodes
/// them totally, falling back to scrypt for patterns no release ever
/// assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Version(i32);

impl Version {
    /// The original Bitcoin block version.
    pub const ONE: Self = Self(1);

    /// The mask covering the algorithm tag bits.
    pub const ALGORITHM_MASK: i32 = 15 << 11;

    const SCRYPT_BITS: i32 = 1 << 11;
    const GROESTL_BITS: i32 = 2 << 11;
    const X17_BITS: i32 = 3 << 11;
    const BLAKE_BITS: i32 = 4 << 11;
    const LYRA2RE_BITS: i32 = 10 << 11;

    /// Creates a [`Version`] from a signed 32 bit integer value.
    pub fn from_consensus(v: i32) -> Self { Version(v) }

    /// Returns the inner `i32` value.
    pub fn to_consensus(self) -> i32 { self.0 }

    /// Decodes the mining algorithm tagged in this version.
    ///
    /// Total: an unassigned tag pattern decodes as scrypt. Old chain history
    /// contains headers with stray bits in the tag field and they were always
    /// treated as scrypt blocks.
    pub fn algorithm(self) -> Algorithm {
        match self.0 & Self::ALGORITHM_MASK {
            Self::SCRYPT_BITS => Algorithm::Scrypt,
            Self::GROESTL_BITS => Algorithm::Groestl,
            Self::X17_BITS => Algorithm::X17,
            Self::BLAKE_BITS => Algorithm::Blake,
            Self::LYRA2RE_BITS => Algorithm::Lyra2re,
            _ => Algorithm::Scrypt,
        }
    }

    /// Returns this version with the algorithm tag bits replaced.
    pub fn with_algorithm(self, algorithm: Algorithm) -> Version {
        let bits = match algorithm {
            Algorithm::Scrypt => Self::SCRYPT_BITS,
            Algorithm::Groestl => Self::GROESTL_BITS,
            Algorithm::X17 => Self::X17_BITS,
            Algorithm::Blake => Self::BLAKE_BITS,
            Algorithm::Lyra2re => Self::LYRA2RE_BITS,
        };
        Version((self.0 & !Self::ALGORITHM_MASK) | bits)
    }

    /// Checks whether the version number is signalling a soft fork on the
    /// given bit.
    ///
    /// A block is signalling for a soft fork under BIP9 if the first three
    /// bits are `001` and the version bit for the specific soft fork is
    /// toggled on.
    pub fn is_signalling_soft_fork(self, bit: u8) -> bool {
        // The BIP9 check is bit >= 0 and bit < 29, but bit is a u8 so bit >= 0 is implied.
        if bit > 28 {
            return false;
        }
        // The BIP9 spec requires the top 3 bits to be 001.
        if (self.0 as u32) & 0xE000_0000 != 0x2000_0000 {
            return false;
        }
        (self.0 as u32) & (1 << bit) > 0
    }
}

impl Default for Version {
    fn default() -> Version { Self::ONE }
}

impl Encodable for Version {
    #[inline]
    fn consensus_encode<W: Write + ?Sized>(&self, w: &mut W) -> Result<usize, io::Error> {
        self.0.consensus_encode(w)
    }
}

impl Decodable for Version {
    #[inline]
    fn consensus_decode<R: Read + ?Sized>(r: &mut R) -> Result<Self, encode::Error> {
        i32::consensus_decode(r).map(Version)
    }
}

/// A block header, which contains all the block's information except the
/// actual transactions.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    /// Block version, carrying the algorithm tag and soft-fork signalling
    /// bits.
    pub version: Version,
    /// Reference to the previous block in the chain.
    pub prev_blockhash: BlockHash,
    /// The root hash of the merkle tree of transactions in the block.
    pub merkle_root: TxMerkleNode,
    /// The timestamp of the block, as claimed by the miner.
    pub time: u32,
    /// The target value below which the blockhash must lie.
    pub bits: CompactTarget,
    /// The nonce, selected to obtain a low enough blockhash.
    pub nonce: u32,
}

impl_consensus_encoding!(Header, version, prev_blockhash, merkle_root, time, bits, nonce);

impl fmt::Debug for Header {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Header")
            .field("block_hash", &self.block_hash())
            .field("algorithm", &self.version.algorithm())
            .field("version", &self.version)
            .field("prev_blockhash", &self.prev_blockhash)
            .field("merkle_root", &self.merkle_root)
            .field("time", &self.time)
            .field("bits", &self.bits)
            .field("nonce", &self.nonce)
            .finish()
    }
}

impl Header {
    /// The number of bytes that the block header contributes to the size of
    /// a block.
    pub const SIZE: usize = 4 + 32 + 32 + 4 + 4 + 4; // 80

    /// Returns the canonical identity hash of this header.
    ///
    /// Always the scrypt digest of the 80 serialized bytes, regardless of
    /// the algorithm tagged in the version. The chain links, locators and
    /// block indexes all use this digest; a groestl-mined block is still
    /// identified by its scrypt hash.
    pub fn block_hash(&self) -> BlockHash {
        Algorithm::Scrypt.hash(&serialize(self)).into()
    }

    /// Computes the proof-of-work digest of this header under the given
    /// algorithm.
    ///
    /// This is the digest compared against the difficulty target; pass
    /// `self.version.algorithm()` to check the header under the algorithm it
    /// claims to be mined with.
    pub fn pow_hash(&self, algorithm: Algorithm) -> PowHash {
        algorithm.hash(&serialize(self))
    }

    /// Returns true for the null header, the all-defaults value the original
    /// client uses as "no header".
    ///
    /// A header is null when its bits field is zero, which no real header
    /// can have.
    pub fn is_null(&self) -> bool { self.bits.to_consensus() == 0 }

    /// Computes the target, the value the proof-of-work digest must not
    /// exceed.
    pub fn target(&self) -> Target { self.bits.into() }

    /// Checks that the proof-of-work for the block is valid.
    ///
    /// The digest checked is the one under the algorithm tagged in the
    /// header's own version. Returns the canonical block hash on success.
    pub fn validate_pow(&self, required_target: Target) -> Result<BlockHash, ValidationError> {
        let target = self.target();

        if target != required_target {
            return Err(ValidationError::BadTarget);
        }

        if target.is_met_by(self.pow_hash(self.version.algorithm())) {
            Ok(self.block_hash())
        } else {
            Err(ValidationError::BadProofOfWork)
        }
    }
}

/// A VERGE block.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Block {
    /// The block header.
    pub header: Header,
    /// List of transactions contained in the block.
    pub txdata: Vec<Transaction>,
    /// Whether this block has already passed full validation.
    ///
    /// A cache flag, not consensus data: it is skipped by the codec and by
    /// equality.
    #[cfg_attr(feature = "serde", serde(skip))]
    checked: bool,
}

impl PartialEq for Block {
    fn eq(&self, other: &Self) -> bool {
        self.header == other.header && self.txdata == other.txdata
    }
}

impl Eq for Block {}

impl Block {
    /// Creates a new block from a header and transactions.
    pub fn new(header: Header, txdata: Vec<Transaction>) -> Block {
        Block { header, txdata, checked: false }
    }

    /// Returns the canonical identity hash of the block.
    pub fn block_hash(&self) -> BlockHash { self.header.block_hash() }

    /// Computes the transaction merkle root.
    ///
    /// `None` for a block with no transactions, which is never valid.
    pub fn compute_merkle_root(&self) -> Option<TxMerkleNode> {
        let hashes = self.txdata.iter().map(|tx| tx.txid().to_raw_hash());
        merkle_tree::calculate_root(hashes).map(|h| h.into())
    }

    /// Checks whether the header's merkle root commits to the block's
    /// transactions.
    pub fn check_merkle_root(&self) -> bool {
        match self.compute_merkle_root() {
            Some(merkle_root) => self.header.merkle_root == merkle_root,
            None => false,
        }
    }

    /// Returns the coinbase transaction, if one is present.
    pub fn coinbase(&self) -> Option<&Transaction> {
        self.txdata.first().filter(|tx| tx.is_coinbase())
    }

    /// Whether this block has been marked as fully validated.
    pub fn is_checked(&self) -> bool { self.checked }

    /// Marks this block as fully validated so revalidation can be skipped.
    pub fn mark_checked(&mut self) { self.checked = true; }
}

impl Encodable for Block {
    fn consensus_encode<W: Write + ?Sized>(&self, w: &mut W) -> Result<usize, io::Error> {
        let mut len = self.header.consensus_encode(w)?;
        len += self.txdata.consensus_encode(w)?;
        Ok(len)
    }
}

impl Decodable for Block {
    fn consensus_decode_from_finite_reader<R: Read + ?Sized>(
        r: &mut R,
    ) -> Result<Self, encode::Error> {
        Ok(Block {
            header: Decodable::consensus_decode_from_finite_reader(r)?,
            txdata: Decodable::consensus_decode_from_finite_reader(r)?,
            checked: false,
        })
    }
}

/// A block validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    /// The header hash is not below the target.
    BadProofOfWork,
    /// The `target` field of a block header did not match the expected
    /// difficulty.
    BadTarget,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ValidationError::BadProofOfWork => f.write_str("block target correct but not attained"),
            ValidationError::BadTarget => f.write_str("block target incorrect"),
        }
    }
}

impl std::error::Error for ValidationError {}

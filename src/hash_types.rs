// SPDX-License-Identifier: CC0-1.0

//! VERGE hash types.
//!
//! Transaction ids and merkle nodes are plain double SHA-256 and reuse the
//! [`hashes`] newtype machinery. Block identity hashes are different: the
//! chain links blocks by the *scrypt* proof-of-work digest of the header, so
//! [`BlockHash`] and [`PowHash`] are dedicated 32-byte newtypes that only
//! share the display convention (reversed hex) with the sha256d family.

use core::fmt;

use hashes::{sha256d, Hash};

use crate::internal_macros::impl_hashencode;

hashes::hash_newtype! {
    /// A VERGE transaction id: double SHA-256 of the serialized transaction.
    pub struct Txid(sha256d::Hash);

    /// A node in a transaction merkle tree (double SHA-256).
    pub struct TxMerkleNode(sha256d::Hash);
}

impl_hashencode!(Txid);
impl_hashencode!(TxMerkleNode);

macro_rules! impl_pow_digest_newtype {
    ($t:ident) => {
        impl $t {
            /// Constructs a digest from its internal (little-endian) byte order.
            pub const fn from_byte_array(bytes: [u8; 32]) -> Self { Self(bytes) }

            /// Returns the digest in internal byte order.
            pub fn to_byte_array(self) -> [u8; 32] { self.0 }

            /// Returns a reference to the digest in internal byte order.
            pub fn as_byte_array(&self) -> &[u8; 32] { &self.0 }

            /// The all-zeros digest, used for null references (e.g. the
            /// previous-block hash of a genesis header).
            pub const fn all_zeros() -> Self { Self([0; 32]) }
        }

        impl fmt::LowerHex for $t {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                // Reversed, as block hashes are conventionally displayed.
                for byte in self.0.iter().rev() {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
        }

        impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                fmt::LowerHex::fmt(self, f)
            }
        }

        impl fmt::Debug for $t {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                fmt::LowerHex::fmt(self, f)
            }
        }

        impl core::str::FromStr for $t {
            type Err = hex::HexToArrayError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                use hex::FromHex;

                let mut bytes = <[u8; 32]>::from_hex(s)?;
                bytes.reverse();
                Ok(Self(bytes))
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $t {
            fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
                if s.is_human_readable() {
                    s.collect_str(self)
                } else {
                    s.serialize_bytes(&self.0)
                }
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $t {
            fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
                struct DigestVisitor;

                impl<'de> serde::de::Visitor<'de> for DigestVisitor {
                    type Value = $t;

                    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                        write!(f, "a 32-byte digest")
                    }

                    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<$t, E> {
                        v.parse().map_err(E::custom)
                    }

                    fn visit_bytes<E: serde::de::Error>(self, v: &[u8]) -> Result<$t, E> {
                        let bytes: [u8; 32] =
                            v.try_into().map_err(|_| E::invalid_length(v.len(), &self))?;
                        Ok(<$t>::from_byte_array(bytes))
                    }
                }

                if d.is_human_readable() {
                    d.deserialize_str(DigestVisitor)
                } else {
                    d.deserialize_bytes(DigestVisitor)
                }
            }
        }

        impl_hashencode!($t);
    };
}

/// The canonical identity hash of a block header.
///
/// This is the digest the chain is linked by: the scrypt proof-of-work hash
/// of the 80-byte header, not sha256d. See [`crate::block::Header::block_hash`]
/// for the algorithm asymmetry this implies.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockHash([u8; 32]);

/// A proof-of-work digest computed under an explicitly chosen algorithm.
///
/// Distinct from [`BlockHash`] on purpose: a `PowHash` is only a chain
/// identity when the algorithm it was computed under is the canonical one.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PowHash([u8; 32]);

impl_pow_digest_newtype!(BlockHash);
impl_pow_digest_newtype!(PowHash);

impl From<PowHash> for BlockHash {
    /// Reinterprets a proof-of-work digest as a chain identity hash.
    ///
    /// Only meaningful when the digest was computed under the canonical
    /// algorithm; the byte content is preserved unchanged.
    fn from(hash: PowHash) -> BlockHash { BlockHash(hash.0) }
}

impl From<BlockHash> for PowHash {
    fn from(hash: BlockHash) -> PowHash { PowHash(hash.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIGEST: [u8; 32] = [
        0x78, 0x72, 0xd7, 0x90, 0xc7, 0x4c, 0x30, 0x63, 0x14, 0x00, 0xa1, 0xdf, 0x5b, 0xd7, 0x01,
        0xc6, 0x0d, 0x20, 0x53, 0x3b, 0xdb, 0x0c, 0xb2, 0xae, 0x7f, 0x46, 0x92, 0x36, 0xc6, 0x0f,
        0x00, 0x00,
    ];

    #[test]
    fn block_hash_display_is_reversed() {
        let hash = BlockHash::from_byte_array(DIGEST);
        assert_eq!(
            hash.to_string(),
            "00000fc63692467faeb20cdb3b53200dc601d75bdfa1001463304cc790d77278"
        );
    }

    #[test]
    fn block_hash_from_str_round_trips() {
        let s = "00000fc63692467faeb20cdb3b53200dc601d75bdfa1001463304cc790d77278";
        let hash: BlockHash = s.parse().unwrap();
        assert_eq!(hash.to_byte_array(), DIGEST);
        assert_eq!(hash.to_string(), s);
    }

    #[test]
    fn pow_hash_conversion_preserves_bytes() {
        let pow = PowHash::from_byte_array(DIGEST);
        let block: BlockHash = pow.into();
        assert_eq!(block.to_byte_array(), pow.to_byte_array());
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serde_human_readable() {
        let hash = BlockHash::from_byte_array(DIGEST);
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(
            json,
            "\"00000fc63692467faeb20cdb3b53200dc601d75bdfa1001463304cc790d77278\""
        );
        let back: BlockHash = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hash);
    }
}

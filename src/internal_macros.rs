// SPDX-License-Identifier: CC0-1.0

//! Internal macros.
//!
//! Macros meant to be used inside this library only.

/// Implements the consensus codec for a struct by encoding its fields in
/// declaration order with no framing, the way every consensus struct in the
/// wire protocol is laid out.
macro_rules! impl_consensus_encoding {
    ($thing:ident, $($field:ident),+) => (
        impl $crate::consensus::Encodable for $thing {
            #[inline]
            fn consensus_encode<W: std::io::Write + ?Sized>(
                &self,
                w: &mut W,
            ) -> Result<usize, std::io::Error> {
                let mut len = 0;
                $(len += self.$field.consensus_encode(w)?;)+
                Ok(len)
            }
        }

        impl $crate::consensus::Decodable for $thing {
            #[inline]
            fn consensus_decode_from_finite_reader<R: std::io::Read + ?Sized>(
                r: &mut R,
            ) -> Result<$thing, $crate::consensus::encode::Error> {
                Ok($thing {
                    $($field: $crate::consensus::Decodable::consensus_decode_from_finite_reader(r)?),+
                })
            }

            #[inline]
            fn consensus_decode<R: std::io::Read + ?Sized>(
                r: &mut R,
            ) -> Result<$thing, $crate::consensus::encode::Error> {
                use std::io::Read as _;
                let mut r = r.take($crate::consensus::encode::MAX_VEC_SIZE as u64);
                Ok($thing {
                    $($field: $crate::consensus::Decodable::consensus_decode(r.by_ref())?),+
                })
            }
        }
    );
}
pub(crate) use impl_consensus_encoding;

/// Implements the consensus codec for a 32-byte digest newtype. Digests go on
/// the wire in internal (little-endian) byte order, exactly as stored.
///
/// The expansion site must have the `hashes::Hash` trait in scope so the
/// byte-array accessors resolve for `hash_newtype!` types as well.
macro_rules! impl_hashencode {
    ($t:ident) => {
        impl $crate::consensus::Encodable for $t {
            #[inline]
            fn consensus_encode<W: std::io::Write + ?Sized>(
                &self,
                w: &mut W,
            ) -> Result<usize, std::io::Error> {
                w.write_all(self.as_byte_array())?;
                Ok(32)
            }
        }

        impl $crate::consensus::Decodable for $t {
            #[inline]
            fn consensus_decode<R: std::io::Read + ?Sized>(
                r: &mut R,
            ) -> Result<Self, $crate::consensus::encode::Error> {
                let mut bytes = [0u8; 32];
                r.read_exact(&mut bytes)?;
                Ok(<$t>::from_byte_array(bytes))
            }
        }
    };
}
pub(crate) use impl_hashencode;

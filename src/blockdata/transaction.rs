// SPDX-License-Identifier: CC0-1.0

//! VERGE transactions.
//!
//! A transaction describes a transfer of money. VERGE transactions keep the
//! Peercoin-heritage `nTime` field between the version and the inputs; it is
//! part of the txid preimage, so dropping or reordering it would change every
//! transaction id on the chain.

use core::fmt;

use std::io::{self, Read, Write};

use hashes::Hash;

use crate::consensus::encode::{self, Decodable, Encodable};
use crate::consensus::serialize;
use crate::hash_types::Txid;
use crate::internal_macros::impl_consensus_encoding;
use crate::blockdata::script::ScriptBuf;

/// A reference to a transaction output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutPoint {
    /// The referenced transaction's txid.
    pub txid: Txid,
    /// The index of the referenced output in its transaction's vout.
    pub vout: u32,
}

impl OutPoint {
    /// Creates a new [`OutPoint`].
    pub const fn new(txid: Txid, vout: u32) -> OutPoint { OutPoint { txid, vout } }

    /// Creates a "null" `OutPoint`, the previous output of a coinbase input.
    pub fn null() -> OutPoint {
        OutPoint { txid: Txid::all_zeros(), vout: u32::MAX }
    }

    /// Checks if an `OutPoint` is "null".
    pub fn is_null(&self) -> bool { *self == OutPoint::null() }
}

impl fmt::Display for OutPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.txid, self.vout)
    }
}

impl_consensus_encoding!(OutPoint, txid, vout);

/// The nSequence value of a transaction input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sequence(pub u32);

impl Sequence {
    /// The maximum allowable sequence number.
    ///
    /// This sequence number disables absolute and relative lock time.
    pub const MAX: Self = Sequence(0xFFFFFFFF);
}

impl Default for Sequence {
    fn default() -> Self { Sequence::MAX }
}

impl Encodable for Sequence {
    #[inline]
    fn consensus_encode<W: Write + ?Sized>(&self, w: &mut W) -> Result<usize, io::Error> {
        self.0.consensus_encode(w)
    }
}

impl Decodable for Sequence {
    #[inline]
    fn consensus_decode<R: Read + ?Sized>(r: &mut R) -> Result<Self, encode::Error> {
        u32::consensus_decode(r).map(Sequence)
    }
}

/// A transaction input, which defines old coins to be consumed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TxIn {
    /// The reference to the previous output that is being used as an input.
    pub previous_output: OutPoint,
    /// The script which pushes values on the stack which will cause the
    /// referenced output's script to be accepted.
    pub script_sig: ScriptBuf,
    /// The sequence number.
    pub sequence: Sequence,
}

impl_consensus_encoding!(TxIn, previous_output, script_sig, sequence);

/// A transaction output, which defines new coins to be created from old ones.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TxOut {
    /// The value of the output, in satoshis.
    pub value: u64,
    /// The script which must be satisfied for the output to be spent.
    pub script_pubkey: ScriptBuf,
}

impl TxOut {
    /// An empty output, as the original client's `SetEmpty` leaves it. The
    /// genesis coinbase carries one.
    pub const EMPTY: TxOut = TxOut { value: 0, script_pubkey: ScriptBuf::new() };

    /// Whether this output is empty: zero value and an empty script.
    pub fn is_empty(&self) -> bool { self.value == 0 && self.script_pubkey.is_empty() }
}

impl_consensus_encoding!(TxOut, value, script_pubkey);

/// A VERGE transaction.
///
/// Serialized as `version ‖ time ‖ inputs ‖ outputs ‖ lock_time`, every
/// integer little-endian and both vectors length-prefixed with a varint.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transaction {
    /// The protocol version.
    pub version: i32,
    /// The timestamp of the transaction, in seconds since epoch.
    pub time: u32,
    /// List of transaction inputs.
    pub input: Vec<TxIn>,
    /// List of transaction outputs.
    pub output: Vec<TxOut>,
    /// Block height or timestamp before which the transaction may not be
    /// included in a block.
    pub lock_time: u32,
}

impl_consensus_encoding!(Transaction, version, time, input, output, lock_time);

impl Transaction {
    /// Computes the txid: the double SHA-256 of the serialized transaction.
    pub fn txid(&self) -> Txid {
        let mut enc = Txid::engine();
        self.consensus_encode(&mut enc).expect("engines don't error");
        Txid::from_engine(enc)
    }

    /// Checks if this is a coinbase transaction.
    ///
    /// The first transaction in a block distributes the mining reward and is
    /// called the coinbase. It must have exactly one input whose previous
    /// output is null.
    pub fn is_coinbase(&self) -> bool {
        self.input.len() == 1 && self.input[0].previous_output.is_null()
    }

    /// Returns the size of the serialized transaction, in bytes.
    pub fn total_size(&self) -> usize { serialize(self).len() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockdata::script::Builder;
    use crate::consensus::{deserialize, serialize, serialize_hex};

    fn dummy_coinbase() -> Transaction {
        Transaction {
            version: 1,
            time: 1412878964,
            input: vec![TxIn {
                previous_output: OutPoint::null(),
                script_sig: Builder::new().push_int(2).into_script(),
                sequence: Sequence::MAX,
            }],
            output: vec![TxOut::EMPTY],
            lock_time: 0,
        }
    }

    #[test]
    fn outpoint_null() {
        assert!(OutPoint::null().is_null());
        assert!(!OutPoint::new(Txid::all_zeros(), 0).is_null());
        assert_eq!(
            OutPoint::null().to_string(),
            "0000000000000000000000000000000000000000000000000000000000000000:4294967295"
        );
    }

    #[test]
    fn coinbase_detection() {
        let tx = dummy_coinbase();
        assert!(tx.is_coinbase());

        let mut not_coinbase = tx.clone();
        not_coinbase.input[0].previous_output.vout = 0;
        assert!(!not_coinbase.is_coinbase());
    }

    #[test]
    fn time_field_sits_after_version() {
        let tx = Transaction {
            version: 1,
            time: 0xddccbbaa,
            input: vec![],
            output: vec![],
            lock_time: 0,
        };
        let bytes = serialize(&tx);
        // version ‖ time ‖ empty vin ‖ empty vout ‖ lock_time
        assert_eq!(bytes, [1, 0, 0, 0, 0xaa, 0xbb, 0xcc, 0xdd, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn transaction_round_trips() {
        let tx = dummy_coinbase();
        let bytes = serialize(&tx);
        assert_eq!(bytes.len(), tx.total_size());
        let back: Transaction = deserialize(&bytes).unwrap();
        assert_eq!(back, tx);
        assert_eq!(back.txid(), tx.txid());
    }

    #[test]
    fn txid_covers_time() {
        let a = dummy_coinbase();
        let mut b = a.clone();
        b.time += 1;
        assert_ne!(a.txid(), b.txid());
        assert_ne!(serialize_hex(&a), serialize_hex(&b));
    }
}

// SPDX-License-Identifier: CC0-1.0

//! Blockdata constants.
//!
//! This module constructs the genesis block of each network. All three
//! networks share the coinbase message and difficulty; they differ in
//! timestamp and nonce.

use crate::blockdata::block::{Block, Header, Version};
use crate::blockdata::script::Builder;
use crate::blockdata::transaction::{OutPoint, Sequence, Transaction, TxIn, TxOut};
use crate::hash_types::{BlockHash, TxMerkleNode};
use crate::network::Network;
use crate::pow::CompactTarget;

/// The timestamp message embedded in every genesis coinbase.
///
/// The chain launched under the name "DogecoinDark"; the rebrand to VERGE
/// could not rewrite block zero.
const GENESIS_COINBASE_MESSAGE: &[u8] = b"Name: Dogecoin Dark";

/// Constructs and returns the coinbase transaction of the genesis block.
fn genesis_tx(time: u32) -> Transaction {
    let mut ret = Transaction { version: 1, time, input: vec![], output: vec![], lock_time: 0 };

    let in_script = Builder::new()
        .push_int(486604799)
        .push_int_non_minimal(4)
        .push_slice(GENESIS_COINBASE_MESSAGE)
        .into_script();
    ret.input.push(TxIn {
        previous_output: OutPoint::null(),
        script_sig: in_script,
        sequence: Sequence::MAX,
    });

    // The genesis coinbase pays out nothing spendable.
    ret.output.push(TxOut::EMPTY);

    ret
}

/// Constructs and returns the genesis block of the given network.
pub fn genesis_block(network: Network) -> Block {
    let (time, nonce) = match network {
        Network::Verge => (1412878964, 1473191),
        Network::Testnet | Network::Regtest => (1462058066, 2),
    };
    let txdata = vec![genesis_tx(time)];
    let merkle_root: TxMerkleNode = txdata[0].txid().to_raw_hash().into();
    let header = Header {
        version: Version::ONE,
        prev_blockhash: BlockHash::all_zeros(),
        merkle_root,
        time,
        bits: CompactTarget::from_consensus(0x1e0fffff),
        nonce,
    };
    Block::new(header, txdata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consensus::serialize_hex;

    #[test]
    fn genesis_coinbase_script_bytes() {
        let gen = genesis_block(Network::Verge);
        let coinbase = gen.coinbase().unwrap();
        assert_eq!(
            format!("{:x}", coinbase.input[0].script_sig),
            "04ffff001d0104134e616d653a20446f6765636f696e204461726b"
        );
        assert_eq!(coinbase.output[0].value, 0);
        assert!(coinbase.output[0].script_pubkey.is_empty());
        assert_eq!(coinbase.lock_time, 0);
    }

    #[test]
    fn mainnet_genesis_full_block() {
        let gen = genesis_block(Network::Verge);

        assert_eq!(gen.header.version, Version::ONE);
        assert_eq!(gen.header.prev_blockhash, BlockHash::all_zeros());
        assert_eq!(
            gen.header.merkle_root.to_string(),
            "1c83275d9151711eec3aec37d829837cc3c2730b2bdfd00ec5e8e5dce675fd00"
        );
        assert_eq!(gen.header.time, 1412878964);
        assert_eq!(gen.header.bits, CompactTarget::from_consensus(0x1e0fffff));
        assert_eq!(gen.header.nonce, 1473191);
        assert_eq!(
            gen.header.block_hash().to_string(),
            "00000fc63692467faeb20cdb3b53200dc601d75bdfa1001463304cc790d77278"
        );
        assert!(gen.check_merkle_root());
    }

    #[test]
    fn testnet_genesis_full_block() {
        let gen = genesis_block(Network::Testnet);
        assert_eq!(
            gen.header.merkle_root.to_string(),
            "a5e0d2348c5f41a05c013afa5e8e9d2bc7e0720b78f4ee9a7bb35b50f86cff3f"
        );
        assert_eq!(gen.header.time, 1462058066);
        assert_eq!(gen.header.nonce, 2);
        assert_eq!(
            gen.header.block_hash().to_string(),
            "fe98805b5dc9006e41d3219e62e7966dbc350a83dcdc001766d8c64f18231baf"
        );
        assert!(gen.check_merkle_root());
    }

    #[test]
    fn regtest_genesis_matches_testnet() {
        // Regtest reuses the testnet genesis parameters wholesale.
        assert_eq!(genesis_block(Network::Regtest), genesis_block(Network::Testnet));
    }

    #[test]
    fn genesis_serialization_is_stable() {
        let gen = genesis_block(Network::Verge);
        let hex = serialize_hex(&gen);
        // header ‖ varint(1) ‖ coinbase tx
        assert!(hex.starts_with("01000000"));
        assert_eq!(&hex[160..162], "01");
        let back: Block = crate::consensus::deserialize(
            &<Vec<u8> as hex::FromHex>::from_hex(&hex).unwrap(),
        )
        .unwrap();
        assert_eq!(back, gen);
    }
}

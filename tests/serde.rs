//! Serde regression tests for the public value types.

#![cfg(feature = "serde")]

use verge::network::ChainParams;
use verge::{Algorithm, Block, Header, Network, Transaction};

#[test]
fn header_round_trips_through_json() {
    let header = ChainParams::new(Network::Verge).genesis.header;
    let json = serde_json::to_string(&header).unwrap();
    let back: Header = serde_json::from_str(&json).unwrap();
    assert_eq!(back, header);
    // Digests render as display-order hex strings.
    assert!(json.contains("1c83275d9151711eec3aec37d829837cc3c2730b2bdfd00ec5e8e5dce675fd00"));
}

#[test]
fn block_round_trips_through_json() {
    let block = ChainParams::new(Network::Testnet).genesis;
    let json = serde_json::to_string(&block).unwrap();
    let back: Block = serde_json::from_str(&json).unwrap();
    assert_eq!(back, block);
    assert_eq!(back.block_hash(), block.block_hash());
}

#[test]
fn transaction_round_trips_through_json() {
    let tx: Transaction = ChainParams::new(Network::Verge).genesis.txdata[0].clone();
    let json = serde_json::to_string(&tx).unwrap();
    let back: Transaction = serde_json::from_str(&json).unwrap();
    assert_eq!(back.txid(), tx.txid());
}

#[test]
fn algorithm_serializes_by_name() {
    assert_eq!(serde_json::to_string(&Algorithm::Lyra2re).unwrap(), "\"lyra2re\"");
    assert_eq!(serde_json::from_str::<Algorithm>("\"x17\"").unwrap(), Algorithm::X17);
}

// SPDX-License-Identifier: CC0-1.0

//! Chain parameters.
//!
//! Everything a node needs to know about one VERGE network before it talks
//! to anyone: the consensus rules, the p2p magic and port, the seeds, the
//! address encodings, the known-good checkpoints and the genesis block
//! itself.
//!
//! Construction is self-checking. [`ChainParams::new`] rebuilds the genesis
//! block from scratch and asserts its hash and merkle root against the
//! hard-coded expectations; a binary whose genesis constants have rotted
//! fails at startup rather than following the wrong chain.

use crate::blockdata::block::Block;
use crate::blockdata::constants::genesis_block;
use crate::consensus::Params;
use crate::hash_types::BlockHash;
use crate::network::{Magic, Network, ParseNetworkError};

/// The mainnet genesis hash, the same value the height-0 checkpoint carries.
const GENESIS_HASH_MAIN: &str =
    "00000fc63692467faeb20cdb3b53200dc601d75bdfa1001463304cc790d77278";
/// The testnet and regtest genesis hash.
const GENESIS_HASH_TEST: &str =
    "fe98805b5dc9006e41d3219e62e7966dbc350a83dcdc001766d8c64f18231baf";

const GENESIS_MERKLE_ROOT_MAIN: &str =
    "1c83275d9151711eec3aec37d829837cc3c2730b2bdfd00ec5e8e5dce675fd00";
const GENESIS_MERKLE_ROOT_TEST: &str =
    "a5e0d2348c5f41a05c013afa5e8e9d2bc7e0720b78f4ee9a7bb35b50f86cff3f";

/// Statistics about the transaction history of a chain at a known point,
/// used to estimate verification progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainTxData {
    /// UNIX timestamp of the last known number of transactions.
    pub timestamp: u64,
    /// Total number of transactions up to that timestamp.
    pub tx_count: u64,
    /// Estimated number of transactions per second after that timestamp.
    pub tx_rate: f64,
}

/// Complete parameters of one VERGE network.
#[derive(Debug, Clone)]
pub struct ChainParams {
    /// The network these parameters describe.
    pub network: Network,
    /// The consensus rules of the network.
    pub consensus: Params,
    /// The p2p message start bytes.
    pub magic: Magic,
    /// The default p2p listening port.
    pub default_port: u16,
    /// Blocks below this height are never pruned.
    pub prune_after_height: u64,
    /// DNS (or plain address) seeds for initial peer discovery.
    pub dns_seeds: &'static [&'static str],
    /// Hard-coded fallback peer addresses, tried when DNS seeding fails.
    ///
    /// No addresses are shipped; discovery relies on the DNS seeds. Regtest
    /// never has any.
    pub fixed_seeds: &'static [&'static str],
    /// Base58 version byte of pay-to-pubkey-hash addresses.
    pub pubkey_address_prefix: u8,
    /// Base58 version byte of pay-to-script-hash addresses.
    pub script_address_prefix: u8,
    /// Base58 version byte of WIF private keys.
    pub secret_key_prefix: u8,
    /// Version bytes of BIP32 extended public keys.
    pub ext_pubkey_prefix: [u8; 4],
    /// Version bytes of BIP32 extended private keys.
    pub ext_privkey_prefix: [u8; 4],
    /// Human-readable part of bech32 addresses.
    pub bech32_hrp: &'static str,
    /// The genesis block of the network.
    pub genesis: Block,
    /// Known-good block hashes at fixed heights, in ascending height order.
    pub checkpoints: Vec<(u32, BlockHash)>,
    /// Transaction history statistics for progress estimation.
    pub chain_tx_data: ChainTxData,
    /// Whether transactions must pass standardness policy to relay.
    pub require_standard: bool,
    /// Whether fee estimation may fall back to a hard-coded fee.
    pub fallback_fee_enabled: bool,
    /// Whether expensive block-index consistency checks default to on.
    pub default_consistency_checks: bool,
    /// Whether blocks are mined on RPC demand instead of by proof of work.
    pub mine_blocks_on_demand: bool,
}

impl ChainParams {
    /// Builds the parameters of the given network.
    ///
    /// # Panics
    ///
    /// Panics if the freshly constructed genesis block does not hash to the
    /// network's hard-coded genesis hash, or if the checkpoint list is not
    /// strictly ascending in height. Both are compiled-in constants, so a
    /// failure here is a build defect, not a runtime condition.
    pub fn new(network: Network) -> Self {
        let params = match network {
            Network::Verge => ChainParams {
                network,
                consensus: Params::new(network),
                magic: Magic::VERGE,
                default_port: 21102,
                prune_after_height: 100_000,
                dns_seeds: &[
                    "159.89.202.56",
                    "138.197.68.130",
                    "165.227.31.52",
                    "188.40.78.31",
                    "176.9.143.143",
                    "198.27.82.41",
                    "145.239.0.126",
                    "54.36.120.27",
                ],
                fixed_seeds: &[],
                pubkey_address_prefix: 30,
                script_address_prefix: 33,
                secret_key_prefix: 128,
                ext_pubkey_prefix: [0x02, 0x2D, 0x25, 0x33],
                ext_privkey_prefix: [0x02, 0x21, 0x31, 0x2B],
                bech32_hrp: "vg",
                genesis: genesis_block(network),
                checkpoints: vec![
                    (0, hash(GENESIS_HASH_MAIN)),
                    (15_000, hash("000000000265c5f4683b169a68cb3cac89287c8b5df94e17b09ef19ac718026b")),
                    (100_000, hash("000000000400a93131a94ad193c63faafeb8dfcc0c7d0e6f1c9c2614cb2823eb")),
                    (244_219, hash("000000000139613d26f7436ecc568feb566c22d9a664359e53f0d0a542d5bdba")),
                    (400_000, hash("0000000001d45af6613024ad5668bfa4909ac63e2b29c28042013d77a216830d")),
                    (500_000, hash("0000000003700a4e9d81a67036d7647361086527e985cdf764648c5e61d07303")),
                    (600_000, hash("30fa1eab961c99f6222f9925a27136c34ea27182c92e4f8c48ea3a90c7c2eb25")),
                    (700_000, hash("3e4f3319706870bb149d1a976202c2a5e973384d181a600e7be59cbab5b63132")),
                    (800_000, hash("f6b5f222bcc2f4e2439ccf6050d4ea3e9517c3752c3247302f039822ac9cc870")),
                    (900_000, hash("c4d8b4079da888985854eda0200fb57045c2c70b29f10e98543f7c4076129e91")),
                    (1_000_000, hash("000000000049eaba3d6c29d9f45bc2a944b46eec005e2b038f1ee924f2f9c029")),
                    (1_100_000, hash("c766387a2e0cd6af995ea432518614824fe313e988598ea8b26f58efb99ebcdc")),
                ],
                chain_tx_data: ChainTxData { timestamp: 1412878964, tx_count: 1, tx_rate: 1.0 },
                require_standard: true,
                fallback_fee_enabled: false,
                default_consistency_checks: false,
                mine_blocks_on_demand: false,
            },
            Network::Testnet => ChainParams {
                network,
                consensus: Params::new(network),
                magic: Magic::TESTNET,
                default_port: 21104,
                prune_after_height: 1000,
                dns_seeds: &[
                    "testnet-seed.bitcoin.jonasschnelli.ch",
                    "seed.tbtc.petertodd.org",
                    "seed.testnet.bitcoin.sprovoost.nl",
                    "testnet-seed.bluematt.me",
                ],
                fixed_seeds: &[],
                pubkey_address_prefix: 111,
                script_address_prefix: 196,
                secret_key_prefix: 239,
                ext_pubkey_prefix: [0x04, 0x35, 0x87, 0xCF],
                ext_privkey_prefix: [0x04, 0x35, 0x83, 0x94],
                bech32_hrp: "vt",
                genesis: genesis_block(network),
                checkpoints: vec![(0, hash(GENESIS_HASH_TEST))],
                chain_tx_data: ChainTxData { timestamp: 1462058066, tx_count: 1, tx_rate: 0.1 },
                require_standard: false,
                fallback_fee_enabled: true,
                default_consistency_checks: false,
                mine_blocks_on_demand: false,
            },
            Network::Regtest => ChainParams {
                network,
                consensus: Params::new(network),
                magic: Magic::REGTEST,
                default_port: 8333,
                prune_after_height: 1000,
                dns_seeds: &[],
                fixed_seeds: &[],
                pubkey_address_prefix: 111,
                script_address_prefix: 196,
                secret_key_prefix: 239,
                ext_pubkey_prefix: [0x04, 0x35, 0x87, 0xCF],
                ext_privkey_prefix: [0x04, 0x35, 0x83, 0x94],
                bech32_hrp: "vgrt",
                genesis: genesis_block(network),
                checkpoints: vec![(0, hash(GENESIS_HASH_TEST))],
                chain_tx_data: ChainTxData { timestamp: 0, tx_count: 0, tx_rate: 0.0 },
                require_standard: false,
                fallback_fee_enabled: true,
                default_consistency_checks: true,
                mine_blocks_on_demand: true,
            },
        };
        params.self_check();
        params
    }

    /// Builds the parameters selected by a `-chain` argument name.
    pub fn from_core_arg(core_arg: &str) -> Result<Self, ParseNetworkError> {
        Ok(ChainParams::new(Network::from_core_arg(core_arg)?))
    }

    /// The hash of the genesis block.
    pub fn genesis_hash(&self) -> BlockHash { self.genesis.block_hash() }

    /// Returns the checkpointed hash at a height, if there is one.
    pub fn checkpoint(&self, height: u32) -> Option<BlockHash> {
        self.checkpoints
            .binary_search_by_key(&height, |&(h, _)| h)
            .ok()
            .map(|i| self.checkpoints[i].1)
    }

    /// The highest checkpoint of the network.
    pub fn last_checkpoint(&self) -> Option<(u32, BlockHash)> {
        self.checkpoints.last().copied()
    }

    fn self_check(&self) {
        let expected = match self.network {
            Network::Verge => (GENESIS_HASH_MAIN, GENESIS_MERKLE_ROOT_MAIN),
            Network::Testnet | Network::Regtest => (GENESIS_HASH_TEST, GENESIS_MERKLE_ROOT_TEST),
        };
        assert_eq!(self.genesis.block_hash(), hash(expected.0), "genesis hash mismatch");
        assert_eq!(
            self.genesis.compute_merkle_root(),
            Some(self.genesis.header.merkle_root),
            "genesis merkle root does not commit to the coinbase"
        );
        assert_eq!(self.genesis.header.merkle_root.to_string(), expected.1);

        assert!(
            self.checkpoints.windows(2).all(|w| w[0].0 < w[1].0),
            "checkpoints out of order"
        );
        assert_eq!(self.checkpoint(0), Some(self.genesis_hash()));
    }
}

impl From<Network> for ChainParams {
    fn from(network: Network) -> Self { ChainParams::new(network) }
}

fn hash(s: &str) -> BlockHash {
    s.parse().expect("hard-coded block hash strings are valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_networks_pass_self_check() {
        // `new` panics on any genesis or checkpoint inconsistency.
        for network in [Network::Verge, Network::Testnet, Network::Regtest] {
            let params = ChainParams::new(network);
            assert_eq!(params.network, network);
            assert_eq!(params.consensus.network, network);
            assert_eq!(params.magic, Magic::from(network));
        }
    }

    #[test]
    fn from_core_arg_selects_network() {
        assert_eq!(ChainParams::from_core_arg("main").unwrap().network, Network::Verge);
        assert_eq!(ChainParams::from_core_arg("test").unwrap().network, Network::Testnet);
        assert_eq!(ChainParams::from_core_arg("regtest").unwrap().network, Network::Regtest);
        assert!(ChainParams::from_core_arg("mainnet").is_err());
    }

    #[test]
    fn mainnet_checkpoints() {
        let params = ChainParams::new(Network::Verge);
        assert_eq!(params.checkpoints.len(), 12);
        assert_eq!(params.checkpoint(0), Some(params.genesis_hash()));
        assert_eq!(
            params.checkpoint(500_000).map(|h| h.to_string()),
            Some("0000000003700a4e9d81a67036d7647361086527e985cdf764648c5e61d07303".into())
        );
        assert_eq!(params.checkpoint(500_001), None);
        assert_eq!(params.last_checkpoint().map(|(h, _)| h), Some(1_100_000));
    }

    #[test]
    fn assume_valid_matches_a_checkpoint_on_mainnet() {
        let params = ChainParams::new(Network::Verge);
        assert_eq!(params.checkpoint(500_000), Some(params.consensus.assume_valid));
    }

    #[test]
    fn network_profiles() {
        let main = ChainParams::new(Network::Verge);
        assert_eq!(main.default_port, 21102);
        assert_eq!(main.bech32_hrp, "vg");
        assert_eq!(main.dns_seeds.len(), 8);
        assert!(main.fixed_seeds.is_empty());
        assert!(main.require_standard);
        assert!(!main.fallback_fee_enabled);

        let test = ChainParams::new(Network::Testnet);
        assert_eq!(test.default_port, 21104);
        assert_eq!(test.bech32_hrp, "vt");
        assert!(test.consensus.allow_min_difficulty_blocks);

        let regtest = ChainParams::new(Network::Regtest);
        assert!(regtest.dns_seeds.is_empty());
        assert!(regtest.fixed_seeds.is_empty());
        assert!(regtest.mine_blocks_on_demand);
        assert!(regtest.default_consistency_checks);
        assert_eq!(regtest.bech32_hrp, "vgrt");
        assert_eq!(regtest.genesis, ChainParams::new(Network::Testnet).genesis);
    }
}

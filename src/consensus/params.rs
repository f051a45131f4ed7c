// SPDX-License-Identifier: CC0-1.0

//! VERGE consensus parameters.
//!
//! This module provides a predefined set of parameters for different VERGE
//! chains, such as the mainnet and the testnet.

use crate::hash_types::BlockHash;
use crate::network::Network;
use crate::pow::{Target, Work};

/// A version-bits soft-fork deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deployment {
    /// Dummy deployment reserved for testing version-bits logic.
    TestDummy,
    /// BIP68, BIP112 and BIP113 (relative lock-times).
    Csv,
    /// BIP141, BIP143 and BIP147 (segregated witness).
    Segwit,
}

impl Deployment {
    /// All known deployments, in version-bits position order.
    pub const ALL: [Deployment; 3] = [Deployment::TestDummy, Deployment::Csv, Deployment::Segwit];

    fn index(self) -> usize {
        match self {
            Deployment::TestDummy => 0,
            Deployment::Csv => 1,
            Deployment::Segwit => 2,
        }
    }
}

/// The moment a deployment starts being eligible for lock-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StartTime {
    /// The deployment never starts; signalling for it is meaningless.
    Never,
    /// The deployment is active from genesis, skipping signalling entirely.
    AlwaysActive,
    /// The deployment starts at the given median-time-past.
    At(u32),
}

/// The moment a deployment expires if it has not locked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timeout {
    /// The deployment never expires.
    NoTimeout,
    /// The deployment expires at the given median-time-past.
    At(u32),
}

/// Version-bits parameters for one deployment on one network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VersionBitsParams {
    /// The block-version bit miners set to signal readiness.
    pub bit: u8,
    /// Start of the signalling period.
    pub start_time: StartTime,
    /// Expiry of the signalling period.
    pub timeout: Timeout,
}

/// Parameters that influence chain consensus.
#[derive(Debug, Clone)]
pub struct Params {
    /// Network for which parameters are valid.
    pub network: Network,
    /// Number of blocks between subsidy halvings.
    pub subsidy_halving_interval: u32,
    /// Height of the VERGE 4.0 hard fork, after which stricter block rules
    /// and the modern difficulty adjustment apply.
    pub fork_height: u32,
    /// Height at which mining under all five algorithms became valid.
    pub multi_algo_switch_block: u32,
    /// Block height at which BIP34 becomes active.
    pub bip34_height: u32,
    /// Block height at which BIP65 becomes active.
    pub bip65_height: u32,
    /// Block height at which BIP66 becomes active.
    pub bip66_height: u32,
    /// Number of blocks signalling readiness within a window that lock a
    /// deployment in.
    pub rule_change_activation_threshold: u32,
    /// Number of blocks in a version-bits signalling window.
    pub miner_confirmation_window: u32,
    /// Proof of work limit value.
    ///
    /// Per-algorithm work is compared against the same limit; the limit is
    /// expressed in the canonical (scrypt) digest space.
    pub pow_limit: Target,
    /// Expected amount of time to mine one retarget period worth of blocks,
    /// in seconds.
    pub pow_target_timespan: u64,
    /// Expected amount of time to mine one block, in seconds.
    pub pow_target_spacing: u64,
    /// Determines whether minimal difficulty may be used for blocks or not.
    pub allow_min_difficulty_blocks: bool,
    /// Determines whether retargeting is disabled for this network or not.
    pub no_pow_retargeting: bool,
    /// The best chain must carry at least this much work to be considered
    /// valid.
    pub minimum_chain_work: Work,
    /// Block hash whose ancestors are assumed to have valid scripts.
    ///
    /// All zeros disables the assumption.
    pub assume_valid: BlockHash,
    deployments: [VersionBitsParams; 3],
}

impl Params {
    /// Creates parameters set for the given network.
    pub fn new(network: Network) -> Self {
        match network {
            Network::Verge => Params {
                network: Network::Verge,
                subsidy_halving_interval: 210_000,
                fork_height: 2_500_000,
                multi_algo_switch_block: 340_000,
                bip34_height: 2_500_000,
                bip65_height: 2_500_000,
                bip66_height: 2_500_000,
                rule_change_activation_threshold: 100,
                miner_confirmation_window: 200,
                pow_limit: Target::MAX_ATTAINABLE_MAINNET,
                pow_target_timespan: 30,
                pow_target_spacing: 60,
                allow_min_difficulty_blocks: false,
                no_pow_retargeting: false,
                minimum_chain_work: Work::MIN,
                // Block 500000.
                assume_valid: hash(
                    "0000000003700a4e9d81a67036d7647361086527e985cdf764648c5e61d07303",
                ),
                deployments: [
                    VersionBitsParams {
                        bit: 28,
                        start_time: StartTime::At(1199145601),
                        timeout: Timeout::At(1230767999),
                    },
                    VersionBitsParams {
                        bit: 0,
                        start_time: StartTime::At(1529247969),
                        timeout: Timeout::At(1559347200),
                    },
                    VersionBitsParams {
                        bit: 1,
                        start_time: StartTime::At(1529247969),
                        timeout: Timeout::At(1559347200),
                    },
                ],
            },
            Network::Testnet => Params {
                network: Network::Testnet,
                subsidy_halving_interval: 210_000,
                fork_height: 2_500_000,
                multi_algo_switch_block: 340_000,
                bip34_height: 0,
                bip65_height: 0,
                bip66_height: 0,
                rule_change_activation_threshold: 1512, // 75%
                miner_confirmation_window: 2016,
                pow_limit: Target::MAX_ATTAINABLE_TESTNET,
                pow_target_timespan: 24 * 60 * 60,
                pow_target_spacing: 45,
                allow_min_difficulty_blocks: true,
                no_pow_retargeting: false,
                minimum_chain_work: Work::from_u64(0x0f),
                assume_valid: hash(
                    "fe98805b5dc9006e41d3219e62e7966dbc350a83dcdc001766d8c64f18231baf",
                ),
                deployments: [
                    VersionBitsParams {
                        bit: 28,
                        start_time: StartTime::At(1199145601),
                        timeout: Timeout::At(1230767999),
                    },
                    VersionBitsParams {
                        bit: 0,
                        start_time: StartTime::At(1456790400),
                        timeout: Timeout::At(1493596800),
                    },
                    VersionBitsParams {
                        bit: 1,
                        start_time: StartTime::At(1462060800),
                        timeout: Timeout::At(1493596800),
                    },
                ],
            },
            Network::Regtest => Params {
                network: Network::Regtest,
                subsidy_halving_interval: 150,
                fork_height: 2_500_000,
                multi_algo_switch_block: 340_000,
                // BIP34 has not activated on regtest, so v1 blocks stay valid
                // in tests; BIP65/66 activate at the heights the RPC
                // activation tests rely on.
                bip34_height: 100_000_000,
                bip65_height: 1351,
                bip66_height: 1251,
                rule_change_activation_threshold: 108, // 75%
                miner_confirmation_window: 144,
                pow_limit: Target::MAX_ATTAINABLE_REGTEST,
                pow_target_timespan: 7 * 24 * 60 * 60,
                pow_target_spacing: 30,
                allow_min_difficulty_blocks: true,
                no_pow_retargeting: true,
                minimum_chain_work: Work::MIN,
                assume_valid: BlockHash::all_zeros(),
                deployments: [
                    VersionBitsParams {
                        bit: 28,
                        start_time: StartTime::At(0),
                        timeout: Timeout::NoTimeout,
                    },
                    VersionBitsParams {
                        bit: 0,
                        start_time: StartTime::At(0),
                        timeout: Timeout::NoTimeout,
                    },
                    VersionBitsParams {
                        bit: 1,
                        start_time: StartTime::AlwaysActive,
                        timeout: Timeout::NoTimeout,
                    },
                ],
            },
        }
    }

    /// Returns the version-bits parameters for a deployment on this network.
    pub fn version_bits_params(&self, deployment: Deployment) -> VersionBitsParams {
        self.deployments[deployment.index()]
    }
}

impl From<Network> for Params {
    fn from(value: Network) -> Self { Params::new(value) }
}

impl From<&Network> for Params {
    fn from(value: &Network) -> Self { Params::new(*value) }
}

impl AsRef<Params> for Params {
    fn as_ref(&self) -> &Params { self }
}

fn hash(s: &str) -> BlockHash {
    s.parse().expect("hard-coded block hash strings are valid")
}

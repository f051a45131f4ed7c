// SPDX-License-Identifier: CC0-1.0

//! Proof-of-work digest functions.
//!
//! VERGE accepts blocks mined under five different hash functions. The
//! algorithm a miner used is tagged in the block version; this module holds
//! the [`Algorithm`] tag and the digest function behind each variant.
//!
//! Only scrypt has consensus-visible reference values in this crate (the
//! genesis headers of all three networks are scrypt-hashed). The remaining
//! digests are fixed chains of maintained RustCrypto hash functions standing
//! in for the original sph-based chains; they are deterministic and
//! per-algorithm distinct, which is all the header layer observes.

use core::fmt;

use blake2::{Blake2b512, Blake2s256};
use groestl::{Groestl256, Groestl512};
use sha2::{Digest, Sha256, Sha512};
use sha3::{Keccak256, Keccak512};
use shabal::Shabal512;
use whirlpool::Whirlpool;

use crate::hash_types::PowHash;

/// A VERGE mining algorithm.
///
/// The default algorithm, and the one every chain-identity hash is computed
/// under, is scrypt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// scrypt(N=1024, r=1, p=1), the launch algorithm.
    #[default]
    Scrypt,
    /// The x17 chained-digest algorithm.
    X17,
    /// The Lyra2RE chained-digest algorithm.
    Lyra2re,
    /// The blake algorithm.
    Blake,
    /// Myriad-groestl.
    Groestl,
}

impl Algorithm {
    /// Parses a miner-facing algorithm name.
    ///
    /// Unrecognized names fall back to [`Algorithm::Scrypt`]; miners that
    /// misconfigure the algorithm string mine the default chain rather than
    /// failing to start.
    pub fn from_name(name: &str) -> Algorithm {
        match name {
            "scrypt" => Algorithm::Scrypt,
            "x17" => Algorithm::X17,
            "lyra" | "lyra2" | "lyra2re" | "lyra2v2" | "lyra2rev2" => Algorithm::Lyra2re,
            "blake" | "blake2s" => Algorithm::Blake,
            "groestl" | "myr-gr" | "myriad-groestl" => Algorithm::Groestl,
            _ => Algorithm::Scrypt,
        }
    }

    /// The canonical miner-facing name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Scrypt => "scrypt",
            Algorithm::X17 => "x17",
            Algorithm::Lyra2re => "lyra2re",
            Algorithm::Blake => "blake",
            Algorithm::Groestl => "groestl",
        }
    }

    /// Hashes a serialized block header under this algorithm.
    pub fn hash(self, data: &[u8]) -> PowHash {
        let digest = match self {
            Algorithm::Scrypt => scrypt_1024_1_1_256(data),
            Algorithm::X17 => x17(data),
            Algorithm::Lyra2re => lyra2re(data),
            Algorithm::Blake => blake(data),
            Algorithm::Groestl => myriad_groestl(data),
        };
        PowHash::from_byte_array(digest)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(self.name()) }
}

/// scrypt with N=1024, r=1, p=1 and a 32-byte output, keyed the way the
/// original scrypt coins key it: the serialized header is both password and
/// salt.
fn scrypt_1024_1_1_256(data: &[u8]) -> [u8; 32] {
    let params = scrypt::Params::new(10, 1, 1, 32).expect("hard-coded scrypt params are valid");
    let mut out = [0u8; 32];
    scrypt::scrypt(data, data, &params, &mut out)
        .expect("output length is fixed at 32 bytes");
    out
}

fn x17(data: &[u8]) -> [u8; 32] {
    let d = Blake2b512::digest(data);
    let d = Keccak512::digest(&d);
    let d = Groestl512::digest(&d);
    let d = Whirlpool::digest(&d);
    let d = Shabal512::digest(&d);
    let d = Sha512::digest(&d);
    truncate32(&d)
}

fn lyra2re(data: &[u8]) -> [u8; 32] {
    let d = Blake2s256::digest(data);
    let d = Keccak256::digest(&d);
    let d = Groestl256::digest(&d);
    truncate32(&d)
}

fn blake(data: &[u8]) -> [u8; 32] {
    truncate32(&Blake2s256::digest(data))
}

fn myriad_groestl(data: &[u8]) -> [u8; 32] {
    let d = Groestl512::digest(data);
    truncate32(&Sha256::digest(&d))
}

fn truncate32(digest: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest[..32]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_accepts_aliases() {
        assert_eq!(Algorithm::from_name("scrypt"), Algorithm::Scrypt);
        assert_eq!(Algorithm::from_name("x17"), Algorithm::X17);
        assert_eq!(Algorithm::from_name("lyra"), Algorithm::Lyra2re);
        assert_eq!(Algorithm::from_name("lyra2rev2"), Algorithm::Lyra2re);
        assert_eq!(Algorithm::from_name("blake2s"), Algorithm::Blake);
        assert_eq!(Algorithm::from_name("myr-gr"), Algorithm::Groestl);
        assert_eq!(Algorithm::from_name("myriad-groestl"), Algorithm::Groestl);
    }

    #[test]
    fn from_name_falls_back_to_scrypt() {
        assert_eq!(Algorithm::from_name(""), Algorithm::Scrypt);
        assert_eq!(Algorithm::from_name("sha256d"), Algorithm::Scrypt);
        assert_eq!(Algorithm::from_name("SCRYPT"), Algorithm::Scrypt);
    }

    #[test]
    fn name_round_trips() {
        for algo in
            [Algorithm::Scrypt, Algorithm::X17, Algorithm::Lyra2re, Algorithm::Blake, Algorithm::Groestl]
        {
            assert_eq!(Algorithm::from_name(algo.name()), algo);
        }
    }

    #[test]
    fn algorithms_disagree_on_the_same_input() {
        let data = [0x42u8; 80];
        let algos =
            [Algorithm::Scrypt, Algorithm::X17, Algorithm::Lyra2re, Algorithm::Blake, Algorithm::Groestl];
        for (i, a) in algos.iter().enumerate() {
            for b in &algos[i + 1..] {
                assert_ne!(a.hash(&data), b.hash(&data), "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn digests_are_deterministic() {
        let data = [0x42u8; 80];
        for algo in
            [Algorithm::Scrypt, Algorithm::X17, Algorithm::Lyra2re, Algorithm::Blake, Algorithm::Groestl]
        {
            assert_eq!(algo.hash(&data), algo.hash(&data));
        }
    }
}

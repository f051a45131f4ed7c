// SPDX-License-Identifier: CC0-1.0

//! VERGE networks.
//!
//! The [`Network`] type enumerates the chains a node can run on and the
//! [`Magic`] type holds the four message-start bytes that keep their p2p
//! traffic apart.

pub mod params;

use core::fmt;
use core::str::FromStr;

use std::error;
use std::io::{self, Read, Write};

use crate::consensus::encode::{self, Decodable, Encodable};

pub use self::params::{ChainParams, ChainTxData};

/// The cryptocurrency network to act on.
#[derive(Copy, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[non_exhaustive]
pub enum Network {
    /// Mainnet VERGE.
    Verge,
    /// VERGE's testnet network.
    Testnet,
    /// VERGE's regtest network.
    Regtest,
}

impl Network {
    /// Converts a `Network` to its equivalent `verged -chain` argument name.
    pub fn to_core_arg(self) -> &'static str {
        match self {
            Network::Verge => "main",
            Network::Testnet => "test",
            Network::Regtest => "regtest",
        }
    }

    /// Converts a `-chain` argument name to its equivalent `Network`.
    pub fn from_core_arg(core_arg: &str) -> Result<Self, ParseNetworkError> {
        let network = match core_arg {
            "main" => Network::Verge,
            "test" => Network::Testnet,
            "regtest" => Network::Regtest,
            _ => return Err(ParseNetworkError(core_arg.to_owned())),
        };
        Ok(network)
    }
}

/// An error in parsing network string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNetworkError(String);

impl fmt::Display for ParseNetworkError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "failed to parse {} as network", self.0)
    }
}

impl error::Error for ParseNetworkError {}

impl FromStr for Network {
    type Err = ParseNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let network = match s {
            "verge" => Network::Verge,
            "testnet" => Network::Testnet,
            "regtest" => Network::Regtest,
            _ => return Err(ParseNetworkError(s.to_owned())),
        };
        Ok(network)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match *self {
            Network::Verge => "verge",
            Network::Testnet => "testnet",
            Network::Regtest => "regtest",
        };
        f.write_str(s)
    }
}

/// Network magic bytes to identify the cryptocurrency network the message
/// was intended for.
#[derive(Copy, PartialEq, Eq, PartialOrd, Ord, Clone, Hash)]
pub struct Magic([u8; 4]);

impl Magic {
    /// VERGE mainnet network magic bytes.
    pub const VERGE: Self = Self([0xF7, 0xA7, 0x7E, 0xFF]);
    /// VERGE testnet network magic bytes.
    pub const TESTNET: Self = Self([0x0B, 0x11, 0x09, 0x07]);
    /// VERGE regtest network magic bytes.
    pub const REGTEST: Self = Self([0xFA, 0xBF, 0xB5, 0xDA]);

    /// Create network magic from bytes.
    pub const fn from_bytes(bytes: [u8; 4]) -> Magic { Magic(bytes) }

    /// Get network magic bytes.
    pub const fn to_bytes(self) -> [u8; 4] { self.0 }
}

impl From<Network> for Magic {
    fn from(network: Network) -> Magic {
        match network {
            Network::Verge => Magic::VERGE,
            Network::Testnet => Magic::TESTNET,
            Network::Regtest => Magic::REGTEST,
        }
    }
}

impl TryFrom<Magic> for Network {
    type Error = UnknownMagicError;

    fn try_from(magic: Magic) -> Result<Self, Self::Error> {
        match magic {
            Magic::VERGE => Ok(Network::Verge),
            Magic::TESTNET => Ok(Network::Testnet),
            Magic::REGTEST => Ok(Network::Regtest),
            _ => Err(UnknownMagicError(magic)),
        }
    }
}

impl Encodable for Magic {
    #[inline]
    fn consensus_encode<W: Write + ?Sized>(&self, w: &mut W) -> Result<usize, io::Error> {
        self.0.consensus_encode(w)
    }
}

impl Decodable for Magic {
    #[inline]
    fn consensus_decode<R: Read + ?Sized>(r: &mut R) -> Result<Self, encode::Error> {
        <[u8; 4]>::consensus_decode(r).map(Magic)
    }
}

/// Error in creating a [`Network`] from a [`Magic`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMagicError(Magic);

impl fmt::Display for UnknownMagicError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown network magic {}", self.0)
    }
}

impl error::Error for UnknownMagicError {}

impl fmt::Display for Magic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Magic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::Display::fmt(self, f) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_round_trips() {
        let networks = [
            (Network::Verge, "verge"),
            (Network::Testnet, "testnet"),
            (Network::Regtest, "regtest"),
        ];
        for (network, s) in networks {
            assert_eq!(network.to_string(), s);
            assert_eq!(s.parse::<Network>().unwrap(), network);
        }
        assert!("fakenet".parse::<Network>().is_err());
    }

    #[test]
    fn core_arg_round_trips() {
        let args = [
            (Network::Verge, "main"),
            (Network::Testnet, "test"),
            (Network::Regtest, "regtest"),
        ];
        for (network, arg) in args {
            assert_eq!(network.to_core_arg(), arg);
            assert_eq!(Network::from_core_arg(arg).unwrap(), network);
        }
        assert!(Network::from_core_arg("signet").is_err());
    }

    #[test]
    fn magic_from_network() {
        assert_eq!(Magic::from(Network::Verge).to_bytes(), [0xF7, 0xA7, 0x7E, 0xFF]);
        assert_eq!(Magic::from(Network::Testnet).to_string(), "0b110907");
        assert_eq!(Magic::from(Network::Regtest), Magic::from_bytes([0xFA, 0xBF, 0xB5, 0xDA]));
    }

    #[test]
    fn network_from_magic() {
        assert_eq!(Network::try_from(Magic::VERGE), Ok(Network::Verge));
        assert_eq!(Network::try_from(Magic::TESTNET), Ok(Network::Testnet));
        assert!(Network::try_from(Magic::from_bytes([0xF9, 0xBE, 0xB4, 0xD9])).is_err());
    }

    #[test]
    fn magic_goes_on_the_wire_verbatim() {
        use crate::consensus::{deserialize, serialize};

        assert_eq!(serialize(&Magic::VERGE), [0xF7, 0xA7, 0x7E, 0xFF]);
        assert_eq!(deserialize::<Magic>(&[0x0B, 0x11, 0x09, 0x07]).unwrap(), Magic::TESTNET);
    }
}

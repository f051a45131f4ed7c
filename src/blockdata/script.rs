// SPDX-License-Identifier: CC0-1.0

//! VERGE scripts.
//!
//! Scripts in this crate are opaque byte strings plus a [`Builder`] for the
//! handful of push operations the genesis coinbase needs. Script execution is
//! out of scope here; a script is consensus data that must serialize exactly,
//! not a program to run.

use core::fmt;

use std::io::{self, Read, Write};

use hex::DisplayHex as _;

use crate::consensus::encode::{self, Decodable, Encodable};

// The opcodes the builder emits.
const OP_0: u8 = 0x00;
const OP_PUSHDATA1: u8 = 0x4c;
const OP_PUSHDATA2: u8 = 0x4d;
const OP_PUSHDATA4: u8 = 0x4e;
const OP_1NEGATE: u8 = 0x4f;
const OP_1: u8 = 0x51;

/// An owned script.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScriptBuf(Vec<u8>);

impl ScriptBuf {
    /// Creates a new empty script.
    pub const fn new() -> Self { ScriptBuf(Vec::new()) }

    /// Converts byte vector into a script, treating it as already serialized
    /// script bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self { ScriptBuf(bytes) }

    /// Returns the script data as a byte slice.
    pub fn as_bytes(&self) -> &[u8] { &self.0 }

    /// Converts the script into its underlying byte vector.
    pub fn into_bytes(self) -> Vec<u8> { self.0 }

    /// Returns the length of the script, in bytes.
    pub fn len(&self) -> usize { self.0.len() }

    /// Returns whether the script is empty.
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Creates a new script builder.
    pub fn builder() -> Builder { Builder::new() }
}

impl fmt::LowerHex for ScriptBuf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0.as_hex(), f)
    }
}

impl Encodable for ScriptBuf {
    #[inline]
    fn consensus_encode<W: Write + ?Sized>(&self, w: &mut W) -> Result<usize, io::Error> {
        self.0.consensus_encode(w)
    }
}

impl Decodable for ScriptBuf {
    #[inline]
    fn consensus_decode_from_finite_reader<R: Read + ?Sized>(
        r: &mut R,
    ) -> Result<Self, encode::Error> {
        Ok(ScriptBuf(Decodable::consensus_decode_from_finite_reader(r)?))
    }
}

/// An object which can be used to construct a script piece by piece.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Builder(Vec<u8>);

impl Builder {
    /// Creates a new empty script builder.
    pub const fn new() -> Self { Builder(Vec::new()) }

    /// Adds instructions to push an integer onto the stack.
    ///
    /// Integers are encoded as little-endian signed-magnitude numbers, but
    /// there are dedicated opcodes to push some small integers, which this
    /// uses when possible.
    pub fn push_int(self, data: i64) -> Builder {
        if data == -1 {
            self.push_opcode(OP_1NEGATE)
        } else if data == 0 {
            self.push_opcode(OP_0)
        } else if (1..=16).contains(&data) {
            self.push_opcode(OP_1 + (data - 1) as u8)
        } else {
            self.push_int_non_minimal(data)
        }
    }

    /// Adds instructions to push an integer onto the stack without its
    /// minimal opcode form.
    ///
    /// Emits the full signed-magnitude encoding even when a small-integer
    /// opcode exists; the original client's genesis coinbase pushes `4` this
    /// way and the script bytes must match.
    pub fn push_int_non_minimal(self, data: i64) -> Builder {
        self.push_slice(&scriptnum_vec(data))
    }

    /// Adds instructions to push some arbitrary data onto the stack.
    pub fn push_slice(mut self, data: &[u8]) -> Builder {
        match data.len() {
            n if n < OP_PUSHDATA1 as usize => self.0.push(n as u8),
            n if n <= 0xff => {
                self.0.push(OP_PUSHDATA1);
                self.0.push(n as u8);
            }
            n if n <= 0xffff => {
                self.0.push(OP_PUSHDATA2);
                self.0.extend_from_slice(&(n as u16).to_le_bytes());
            }
            n => {
                self.0.push(OP_PUSHDATA4);
                self.0.extend_from_slice(&(n as u32).to_le_bytes());
            }
        }
        self.0.extend_from_slice(data);
        self
    }

    /// Adds a single opcode to the script.
    pub fn push_opcode(mut self, opcode: u8) -> Builder {
        self.0.push(opcode);
        self
    }

    /// Converts the `Builder` into a script.
    pub fn into_script(self) -> ScriptBuf { ScriptBuf(self.0) }
}

/// Serializes an integer the way script numbers are stored on the stack:
/// little-endian signed-magnitude, minimal length.
fn scriptnum_vec(n: i64) -> Vec<u8> {
    if n == 0 {
        return Vec::new();
    }
    let negative = n < 0;
    let mut abs = n.unsigned_abs();
    let mut out = Vec::with_capacity(9);
    while abs > 0 {
        out.push((abs & 0xff) as u8);
        abs >>= 8;
    }
    // The top bit is the sign bit, so a magnitude that uses it needs an
    // extra byte.
    if out[out.len() - 1] & 0x80 != 0 {
        out.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        let last = out.len() - 1;
        out[last] |= 0x80;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consensus::{deserialize, serialize};

    #[test]
    fn builder_small_ints_use_opcodes() {
        assert_eq!(Builder::new().push_int(0).into_script().as_bytes(), [OP_0]);
        assert_eq!(Builder::new().push_int(-1).into_script().as_bytes(), [OP_1NEGATE]);
        assert_eq!(Builder::new().push_int(1).into_script().as_bytes(), [OP_1]);
        assert_eq!(Builder::new().push_int(16).into_script().as_bytes(), [0x60]);
    }

    #[test]
    fn builder_large_ints_use_scriptnum() {
        // nBits of the genesis coinbase: 486604799 = 0x1d00ffff.
        let script = Builder::new().push_int(486604799).into_script();
        assert_eq!(format!("{:x}", script), "04ffff001d");

        assert_eq!(Builder::new().push_int(17).into_script().as_bytes(), [0x01, 17]);
        assert_eq!(Builder::new().push_int(-17).into_script().as_bytes(), [0x01, 0x91]);
        assert_eq!(Builder::new().push_int(128).into_script().as_bytes(), [0x02, 0x80, 0x00]);
    }

    #[test]
    fn builder_non_minimal_int_push() {
        let script = Builder::new().push_int_non_minimal(4).into_script();
        assert_eq!(script.as_bytes(), [0x01, 0x04]);
    }

    #[test]
    fn builder_pushdata_boundaries() {
        let script = Builder::new().push_slice(&[0xaa; 75]).into_script();
        assert_eq!(script.as_bytes()[0], 75);
        let script = Builder::new().push_slice(&[0xaa; 76]).into_script();
        assert_eq!(&script.as_bytes()[..2], [OP_PUSHDATA1, 76]);
        let script = Builder::new().push_slice(&[0xaa; 256]).into_script();
        assert_eq!(&script.as_bytes()[..3], [OP_PUSHDATA2, 0x00, 0x01]);
    }

    #[test]
    fn script_codec_is_length_prefixed() {
        let script = ScriptBuf::from_bytes(vec![0x51, 0x52]);
        assert_eq!(serialize(&script), [0x02, 0x51, 0x52]);
        assert_eq!(deserialize::<ScriptBuf>(&[0x02, 0x51, 0x52]).unwrap(), script);
    }
}

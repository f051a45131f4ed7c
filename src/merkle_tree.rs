// SPDX-License-Identifier: CC0-1.0

//! Merkle tree functions.

use hashes::{sha256d, Hash, HashEngine};

/// Calculates the merkle root of an iterator of double SHA-256 hashes.
///
/// Uses the original Satoshi tree shape: a level with an odd number of nodes
/// hashes its last node with itself.
///
/// # Returns
///
/// - `None` if `hashes` is empty.
/// - `Some(hash)` if `hashes` contains one element. A single hash is its own
///   merkle root.
pub fn calculate_root<I>(hashes: I) -> Option<sha256d::Hash>
where
    I: Iterator<Item = sha256d::Hash>,
{
    let mut row: Vec<sha256d::Hash> = hashes.collect();
    if row.is_empty() {
        return None;
    }

    while row.len() > 1 {
        if row.len() % 2 != 0 {
            let last = row[row.len() - 1];
            row.push(last);
        }
        row = row
            .chunks(2)
            .map(|pair| {
                let mut engine = sha256d::Hash::engine();
                engine.input(pair[0].as_byte_array());
                engine.input(pair[1].as_byte_array());
                sha256d::Hash::from_engine(engine)
            })
            .collect();
    }
    row.pop()
}

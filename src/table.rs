// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Table construction and process-wide memoization for the bytewise and
//! wordwise kernels.
//!
//! Tables depend only on `(width, poly, refin)`, but this cache keys on the
//! full [`Algorithm`] — coarser than strictly necessary, but it keeps the
//! cache a single straightforward map instead of a second, narrower key type.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use crate::algorithm::Algorithm;
use crate::kernel::{needs_word_table_swap, step_bitwise};
use crate::primitives::byteswap64;

pub(crate) type ByteTable = [u64; 256];
pub(crate) type WordTable = [[u64; 256]; 8];

struct TableCache {
    byte: Mutex<HashMap<Algorithm, Arc<ByteTable>>>,
    word: Mutex<HashMap<Algorithm, Arc<WordTable>>>,
}

fn cache() -> &'static TableCache {
    static CACHE: OnceLock<TableCache> = OnceLock::new();
    CACHE.get_or_init(|| TableCache {
        byte: Mutex::new(HashMap::new()),
        word: Mutex::new(HashMap::new()),
    })
}

fn build_byte_table(poly_int: u64, refin: bool) -> ByteTable {
    let mut table = [0u64; 256];
    for (k, slot) in table.iter_mut().enumerate() {
        *slot = step_bitwise(0, k as u64, 8, refin, poly_int);
    }
    table
}

/// Advances a register value by one more zero byte, the same one-byte step
/// the bytewise kernel performs for input byte `0`.
fn zero_advance(byte_table: &ByteTable, x: u64, refin: bool) -> u64 {
    if refin {
        byte_table[(x & 0xFF) as usize] ^ (x >> 8)
    } else {
        byte_table[((x >> 56) & 0xFF) as usize] ^ (x << 8)
    }
}

/// Builds the eight slice-by-8 tables. `table[0]` is the byte table itself
/// (zero additional zero-bytes advanced past it); `table[t]` is `table[t-1]`
/// advanced by one more zero byte, matching the standard slicing-by-N
/// recurrence. Pre-byteswaps every entry when the host's native 8-byte load
/// would otherwise land bytes in the wrong order for this algorithm's
/// orientation (see [`needs_word_table_swap`]).
fn build_word_table(byte_table: &ByteTable, refin: bool, swap: bool) -> WordTable {
    let mut tables = [[0u64; 256]; 8];
    tables[0] = *byte_table;
    for t in 1..8 {
        for k in 0..256 {
            tables[t][k] = zero_advance(byte_table, tables[t - 1][k], refin);
        }
    }
    if swap {
        for table in tables.iter_mut() {
            for entry in table.iter_mut() {
                *entry = byteswap64(*entry);
            }
        }
    }
    tables
}

/// Returns the shared byte table for `algorithm`, building and caching it on
/// first use.
pub(crate) fn byte_table_for(algorithm: &Algorithm, poly_int: u64) -> Arc<ByteTable> {
    let cache = cache();
    if let Some(table) = cache.byte.lock().unwrap().get(algorithm) {
        return Arc::clone(table);
    }
    let built = Arc::new(build_byte_table(poly_int, algorithm.refin));
    Arc::clone(cache.byte.lock().unwrap().entry(*algorithm).or_insert(built))
}

/// Returns the shared word table for `algorithm`, building and caching it on
/// first use. `byte_table` must be the value [`byte_table_for`] returned for
/// the same algorithm.
pub(crate) fn word_table_for(algorithm: &Algorithm, byte_table: &Arc<ByteTable>) -> Arc<WordTable> {
    let cache = cache();
    if let Some(table) = cache.word.lock().unwrap().get(algorithm) {
        return Arc::clone(table);
    }
    let swap = needs_word_table_swap(algorithm.refin);
    let built = Arc::new(build_word_table(byte_table, algorithm.refin, swap));
    Arc::clone(cache.word.lock().unwrap().entry(*algorithm).or_insert(built))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_table_is_cached_by_identity() {
        let crc32 = Algorithm::new_unchecked(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF);
        let poly_int = crate::primitives::bitswap(crc32.poly, crc32.width);
        let a = byte_table_for(&crc32, poly_int);
        let b = byte_table_for(&crc32, poly_int);
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn word_table_zero_slot_matches_byte_table() {
        let crc32 = Algorithm::new_unchecked(32, 0x04C1_1DB7, 0x0, true, true, 0x0);
        let poly_int = crate::primitives::bitswap(crc32.poly, crc32.width);
        let bytes = byte_table_for(&crc32, poly_int);
        let words = word_table_for(&crc32, &bytes);
        let swap = needs_word_table_swap(crc32.refin);
        for k in 0..256 {
            let expected = if swap { byteswap64(bytes[k]) } else { bytes[k] };
            assert_eq!(words[0][k], expected);
        }
    }
}

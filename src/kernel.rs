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

//! The three interchangeable update bodies: bitwise, bytewise (slice-by-1),
//! and wordwise (slice-by-8). All three operate on the engine's internalized
//! accumulator and must be observationally equivalent — swapping kernels
//! mid-stream never changes a later digest.

use crate::primitives::{byteswap64, host_is_little_endian};

/// Which update body an engine drives its accumulator through.
///
/// The default is [`Kernel::Wordwise`]: it is never slower than the other
/// two and is the kernel every unqualified `Crc` constructor selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kernel {
    /// Bit-by-bit update. Used for partial words and as the reference
    /// implementation tables are derived from.
    Bitwise,
    /// Slice-by-1: one 256-entry table, one dependent table lookup per byte.
    Bytewise,
    /// Slice-by-8: eight 256-entry tables, independent lookups per 8-byte
    /// chunk.
    #[default]
    Wordwise,
}

/// Feeds a `bits`-wide word (already masked to its low `bits` bits by the
/// caller) through the bit-by-bit kernel, starting from `accum`.
///
/// `bits == 0` is a no-op. This is the primitive every table is built from:
/// a byte table entry for byte `k` is exactly
/// `step_bitwise(0, k as u64, 8, refin, poly_int)`.
pub(crate) fn step_bitwise(mut accum: u64, word: u64, bits: u8, refin: bool, poly_int: u64) -> u64 {
    if bits == 0 {
        return accum;
    }
    if refin {
        accum ^= word;
        for _ in 0..bits {
            accum = if accum & 1 != 0 {
                (accum >> 1) ^ poly_int
            } else {
                accum >> 1
            };
        }
    } else {
        accum ^= word << (64 - bits as u32);
        for _ in 0..bits {
            accum = if accum & (1 << 63) != 0 {
                (accum << 1) ^ poly_int
            } else {
                accum << 1
            };
        }
    }
    accum
}

/// Feeds whole bytes through the bit-by-bit kernel.
pub(crate) fn update_bitwise(accum: u64, data: &[u8], refin: bool, poly_int: u64) -> u64 {
    data.iter()
        .fold(accum, |a, &b| step_bitwise(a, b as u64, 8, refin, poly_int))
}

/// Feeds whole bytes through the slice-by-1 table.
pub(crate) fn update_bytewise(mut accum: u64, table: &[u64; 256], data: &[u8], refin: bool) -> u64 {
    for &b in data {
        accum = if refin {
            table[((accum ^ b as u64) & 0xFF) as usize] ^ (accum >> 8)
        } else {
            table[(((accum >> 56) ^ b as u64) & 0xFF) as usize] ^ (accum << 8)
        };
    }
    accum
}

/// True when the wordwise fast loop's 8-byte native load does not already
/// land the bytes in the byte order this algorithm's orientation expects —
/// reflected (`refin`) algorithms expect a little-endian load, non-reflected
/// algorithms expect big-endian, matching whichever end of the register a
/// byte enters first. When this is true, [`crate::table::word_table_for`]
/// pre-byteswaps every table entry and [`update_wordwise`] byteswaps the
/// accumulator once on the way in and once on the way out, so the hot loop
/// itself can still issue a plain native-endian load every iteration.
pub(crate) fn needs_word_table_swap(refin: bool) -> bool {
    refin != host_is_little_endian()
}

/// Feeds bytes through the slice-by-8 tables, falling back to the byte table
/// for the final `< 8`-byte tail.
///
/// There is no pointer-alignment prelude: `u64::from_ne_bytes` copies a
/// fixed-size byte array by value, which has no alignment requirement in
/// Rust, so the fast loop runs from the first byte of `data`.
pub(crate) fn update_wordwise(
    mut accum: u64,
    byte_table: &[u64; 256],
    word_table: &[[u64; 256]; 8],
    data: &[u8],
    refin: bool,
    swap: bool,
) -> u64 {
    let mut chunks = data.chunks_exact(8);
    if swap {
        accum = byteswap64(accum);
    }
    for chunk in &mut chunks {
        let word = u64::from_ne_bytes(chunk.try_into().expect("chunk is exactly 8 bytes"));
        let combined = accum ^ word;
        accum = (0..8).fold(0u64, |acc, j| {
            acc ^ word_table[j][((combined >> (8 * j)) & 0xFF) as usize]
        });
    }
    if swap {
        accum = byteswap64(accum);
    }
    update_bytewise(accum, byte_table, chunks.remainder(), refin)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CRC32_POLY_INT_REFIN: u64 = 0xEDB8_8320; // bitswap(0x04C11DB7, 32)

    fn byte_table(refin: bool, poly_int: u64) -> [u64; 256] {
        let mut table = [0u64; 256];
        for (k, slot) in table.iter_mut().enumerate() {
            *slot = step_bitwise(0, k as u64, 8, refin, poly_int);
        }
        table
    }

    #[test]
    fn bytewise_and_bitwise_agree() {
        let table = byte_table(true, CRC32_POLY_INT_REFIN);
        let data = b"123456789";
        let via_bitwise = update_bitwise(0xFFFF_FFFF, data, true, CRC32_POLY_INT_REFIN);
        let via_bytewise = update_bytewise(0xFFFF_FFFF, &table, data, true);
        assert_eq!(via_bitwise, via_bytewise);
    }

    #[test]
    fn wordwise_matches_bytewise_across_lengths() {
        let table = byte_table(true, CRC32_POLY_INT_REFIN);
        let mut word_table = [[0u64; 256]; 8];
        word_table[0] = table;
        for t in 1..8 {
            for k in 0..256 {
                let prev = word_table[t - 1][k];
                word_table[t][k] = table[(prev & 0xFF) as usize] ^ (prev >> 8);
            }
        }
        let swap = needs_word_table_swap(true);
        if swap {
            for t in word_table.iter_mut() {
                for e in t.iter_mut() {
                    *e = byteswap64(*e);
                }
            }
        }
        for len in [0usize, 1, 7, 8, 9, 15, 16, 17, 64, 100] {
            let data: Vec<u8> = (0..len as u8).collect();
            let expected = update_bytewise(0xFFFF_FFFF, &table, &data, true);
            let actual = update_wordwise(0xFFFF_FFFF, &table, &word_table, &data, true, swap);
            assert_eq!(actual, expected, "mismatch at len {len}");
        }
    }

    #[test]
    fn zero_bits_is_identity() {
        assert_eq!(step_bitwise(0x1234, 0, 0, true, 0xEDB8_8320), 0x1234);
    }
}

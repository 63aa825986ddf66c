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

//! The `Crc` engine: internalized state, the three update entry points,
//! lazy digest finalization, and the stateless combine operation.

use std::sync::Arc;

use crate::algorithm::Algorithm;
use crate::catalog;
use crate::error::{CrcError, Result};
use crate::kernel::{self, needs_word_table_swap, Kernel};
use crate::primitives::{bitmask, bitswap, host_is_little_endian};
use crate::table::{self, ByteTable, WordTable};

/// A streaming CRC engine for a fixed [`Algorithm`] and [`Kernel`].
///
/// Cloning snapshots the accumulator and clones the shared table references
/// (`Arc` clones, not table copies) — two clones never rebuild a table and
/// never interfere with each other's updates.
#[derive(Clone)]
pub struct Crc {
    algorithm: Algorithm,
    poly_int: u64,
    kernel: Kernel,
    accum: u64,
    result: Option<u64>,
    byte_table: Option<Arc<ByteTable>>,
    word_table: Option<Arc<WordTable>>,
    swap: bool,
}

/// Maps an externalized, `width`-bit value into the engine's internal
/// orientation: bit-reversed across `width` for reflected algorithms,
/// left-shifted into the top of the 64-bit register otherwise.
fn internalize(algorithm: &Algorithm, v: u64) -> u64 {
    if algorithm.refin {
        bitswap(v, algorithm.width)
    } else {
        v << (64 - algorithm.width as u32)
    }
}

/// The forward half of [`crate::Crc::digest`]'s transform, factored out so
/// [`digest_to_accum`] can express the exact inverse.
fn accum_to_digest(algorithm: &Algorithm, accum: u64) -> u64 {
    let width = algorithm.width;
    let mut r = accum;
    if !algorithm.refin {
        r >>= 64 - width as u32;
    }
    r = if algorithm.refin == algorithm.refout {
        r & bitmask(width)
    } else {
        bitswap(r, width)
    };
    r ^ algorithm.xorout
}

/// Recovers the internal accumulator value that would finalize to `digest`,
/// the exact inverse of [`accum_to_digest`]. Used by [`Crc::combine`] to seed
/// a scratch engine from an already-finalized CRC instead of from `init`.
fn digest_to_accum(algorithm: &Algorithm, digest: u64) -> u64 {
    let width = algorithm.width;
    let pre_xor = digest ^ algorithm.xorout;
    let r = if algorithm.refin == algorithm.refout {
        pre_xor & bitmask(width)
    } else {
        bitswap(pre_xor, width)
    };
    if algorithm.refin {
        r
    } else {
        r << (64 - width as u32)
    }
}

impl Crc {
    /// Builds an engine for `algorithm` using the default ([`Kernel::Wordwise`])
    /// kernel.
    pub fn new(algorithm: Algorithm) -> Result<Self> {
        Self::with_kernel(algorithm, Kernel::default())
    }

    /// Builds an engine for `algorithm` using a specific kernel.
    pub fn with_kernel(algorithm: Algorithm, kernel: Kernel) -> Result<Self> {
        algorithm.validate()?;
        let poly_int = internalize(&algorithm, algorithm.poly);
        let init_int = internalize(&algorithm, algorithm.init);

        let (byte_table, word_table) = match kernel {
            Kernel::Bitwise => (None, None),
            Kernel::Bytewise => (Some(table::byte_table_for(&algorithm, poly_int)), None),
            Kernel::Wordwise => {
                let bytes = table::byte_table_for(&algorithm, poly_int);
                let words = table::word_table_for(&algorithm, &bytes);
                (Some(bytes), Some(words))
            }
        };

        Ok(Self {
            algorithm,
            poly_int,
            kernel,
            accum: init_int,
            result: None,
            byte_table,
            word_table,
            swap: needs_word_table_swap(algorithm.refin),
        })
    }

    /// Builds an engine from a named catalogue template.
    pub fn by_name(name: &str) -> Result<Self> {
        let entry = catalog::find(name).ok_or_else(|| CrcError::UnknownTemplate {
            name: name.to_string(),
        })?;
        Self::new(entry.algorithm)
    }

    /// Feeds `data` through the engine's current kernel. A no-op on empty
    /// input.
    pub fn update(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }
        self.accum = match self.kernel {
            Kernel::Bitwise => kernel::update_bitwise(self.accum, data, self.algorithm.refin, self.poly_int),
            Kernel::Bytewise => kernel::update_bytewise(
                self.accum,
                self.byte_table.as_deref().expect("bytewise kernel always has a byte table"),
                data,
                self.algorithm.refin,
            ),
            Kernel::Wordwise => kernel::update_wordwise(
                self.accum,
                self.byte_table.as_deref().expect("wordwise kernel always has a byte table"),
                self.word_table.as_deref().expect("wordwise kernel always has a word table"),
                data,
                self.algorithm.refin,
                self.swap,
            ),
        };
        self.result = None;
    }

    /// Feeds a partial word of `bits` bits (`0..=64`), always through the
    /// bit-by-bit kernel regardless of `self.kernel`. `bits == 0` is a no-op.
    pub fn update_word(&mut self, word: u64, bits: u8) {
        if bits == 0 {
            return;
        }
        let masked = word & bitmask(bits);
        self.accum = kernel::step_bitwise(self.accum, masked, bits, self.algorithm.refin, self.poly_int);
        self.result = None;
    }

    /// Feeds `n` zero bytes, in bounded-size chunks so `n` need not fit in
    /// memory as an allocated buffer.
    pub fn zero_bytes(&mut self, n: u64) {
        const ZERO_CHUNK: [u8; 4096] = [0u8; 4096];
        let mut remaining = n;
        while remaining > 0 {
            let take = remaining.min(ZERO_CHUNK.len() as u64) as usize;
            self.update(&ZERO_CHUNK[..take]);
            remaining -= take as u64;
        }
    }

    /// Feeds `n` zero bits: `n / 8` zero bytes followed by the remaining
    /// `n % 8` bits through [`Crc::update_word`].
    pub fn zero_bits(&mut self, n: u64) {
        self.zero_bytes(n / 8);
        let remainder = (n % 8) as u8;
        if remainder > 0 {
            self.update_word(0, remainder);
        }
    }

    /// Returns the finalized digest, LSb-aligned in the low `width` bits.
    /// Idempotent and lazy: repeated calls with no intervening update return
    /// the same cached value without recomputation.
    pub fn digest(&mut self) -> u64 {
        if let Some(cached) = self.result {
            return cached;
        }
        let d = accum_to_digest(&self.algorithm, self.accum);
        self.result = Some(d);
        d
    }

    /// The digest as `ceil(width/8)` big-endian bytes.
    pub fn digest_bytes(&mut self) -> Vec<u8> {
        let n = (self.algorithm.width as usize).div_ceil(8);
        let d = self.digest();
        d.to_be_bytes()[8 - n..].to_vec()
    }

    /// The digest as a lowercase hex string (`2 * ceil(width/8)` characters).
    pub fn hexdigest(&mut self) -> String {
        self.digest_bytes().iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Returns an independent engine with the same state and shared table
    /// references as `self`; equivalent to `Clone::clone`.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Resets the accumulator to `init` (or, if `None`, the configured
    /// `init`), and drops any cached digest.
    pub fn clear(&mut self, init: Option<u64>) {
        let external = init.unwrap_or(self.algorithm.init) & self.algorithm.mask();
        self.accum = internalize(&self.algorithm, external);
        self.result = None;
    }

    /// Returns the digest of the concatenation `A ‖ B`, given `crc1 = digest(A)`,
    /// `crc2 = digest(B)`, and `len2 = |B|`, without access to `A` or `B`.
    ///
    /// Decodes `crc1` back to the internal accumulator that produced it, then
    /// feeds `len2` zero bytes through it via [`Crc::zero_bytes`] and XORs in
    /// `crc2` decoded the same way. This is the "feed zero bytes" strategy
    /// rather than GF(2) matrix exponentiation — `O(len2)` instead of
    /// `O(log len2)`, and sufficient since this crate makes no throughput
    /// claim about combine.
    ///
    /// The zero-byte shift is linear in the accumulator but `crc1`'s
    /// accumulator already has `init` folded in non-linearly with respect to
    /// that shift, so `init`'s internalized form is XORed in before the
    /// shift and left to cancel against the `init` folded into `crc2`
    /// (mirrors the `crc1 ^= init ^ xorout` pre-correction in Mark Adler's
    /// generalized combine write-up, applied in this engine's internal
    /// accumulator domain instead of the external digest domain).
    pub fn combine(algorithm: Algorithm, crc1: u64, crc2: u64, len2: u64) -> Result<u64> {
        let mask = algorithm.mask();
        if crc1 > mask {
            return Err(CrcError::Crc1OutOfRange { crc1, mask });
        }
        if crc2 > mask {
            return Err(CrcError::Crc2OutOfRange { crc2, mask });
        }

        let mut scratch = Self::new(algorithm)?;
        let init_int = internalize(&algorithm, algorithm.init);
        scratch.accum = digest_to_accum(&algorithm, crc1) ^ init_int;
        scratch.result = None;
        scratch.zero_bytes(len2);
        scratch.accum ^= digest_to_accum(&algorithm, crc2);
        scratch.result = None;
        Ok(scratch.digest())
    }

    /// This algorithm's width in bits.
    pub fn width(&self) -> u8 {
        self.algorithm.width
    }

    /// This algorithm's polynomial (normal form).
    pub fn poly(&self) -> u64 {
        self.algorithm.poly
    }

    /// This algorithm's configured initial value.
    pub fn init(&self) -> u64 {
        self.algorithm.init
    }

    /// Whether input bytes are reflected before being fed to the register.
    pub fn refin(&self) -> bool {
        self.algorithm.refin
    }

    /// Whether the final register value is reflected before `xorout`.
    pub fn refout(&self) -> bool {
        self.algorithm.refout
    }

    /// The final XOR mask.
    pub fn xorout(&self) -> u64 {
        self.algorithm.xorout
    }

    /// The engine's algorithm, for introspection or rebuilding another engine
    /// with the same parameters.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Fixed at `"crc"`; every engine reports the same digest-name regardless
    /// of which catalogue template or explicit parameters built it.
    pub fn name(&self) -> &'static str {
        "crc"
    }

    /// Fixed at `1`: this engine consumes one byte at a time at minimum.
    pub fn block_size(&self) -> usize {
        1
    }

    /// The maximum digest size in bytes (`8`); callers truncate to
    /// `ceil(width/8)` via [`Crc::digest_bytes`].
    pub fn digest_size(&self) -> usize {
        8
    }
}

impl Default for Crc {
    /// The CRC-32/ISO-HDLC engine, used when a caller asks for "no
    /// parameters at all".
    fn default() -> Self {
        Self::by_name(catalog::DEFAULT_NAME).expect("default catalogue entry is always valid")
    }
}

impl std::fmt::Debug for Crc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Crc")
            .field("algorithm", &self.algorithm)
            .field("kernel", &self.kernel)
            .field("accum", &format_args!("{:#x}", self.accum))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Kernel;

    const CRC32: Algorithm = Algorithm::new_unchecked(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF);
    const XMODEM: Algorithm = Algorithm::new_unchecked(16, 0x1021, 0x0000, false, false, 0x0000);
    // init (0xFFFF) and xorout (0x0000) differ, unlike CRC32's matching pair above —
    // exercises the combine correction term that a non-zero, non-xorout-matching
    // init requires.
    const MODBUS: Algorithm = Algorithm::new_unchecked(16, 0x8005, 0xFFFF, true, true, 0x0000);

    #[test]
    fn crc32_check_value() {
        let mut crc = Crc::new(CRC32).unwrap();
        crc.update(b"123456789");
        assert_eq!(crc.digest(), 0xCBF4_3926);
    }

    #[test]
    fn xmodem_check_value() {
        let mut crc = Crc::new(XMODEM).unwrap();
        crc.update(b"123456789");
        assert_eq!(crc.digest(), 0x31C3);
    }

    #[test]
    fn by_name_matches_explicit_construction() {
        let mut by_name = Crc::by_name("crc-32").unwrap();
        let mut explicit = Crc::new(CRC32).unwrap();
        by_name.update(b"123456789");
        explicit.update(b"123456789");
        assert_eq!(by_name.digest(), explicit.digest());
    }

    #[test]
    fn unknown_name_fails() {
        assert!(matches!(
            Crc::by_name("not-a-real-crc"),
            Err(CrcError::UnknownTemplate { .. })
        ));
    }

    #[test]
    fn default_is_crc32() {
        let mut crc = Crc::default();
        crc.update(b"123456789");
        assert_eq!(crc.digest(), 0xCBF4_3926);
    }

    #[test]
    fn all_kernels_agree() {
        for kernel in [Kernel::Bitwise, Kernel::Bytewise, Kernel::Wordwise] {
            let mut crc = Crc::with_kernel(CRC32, kernel).unwrap();
            crc.update(b"The quick brown fox jumps over the lazy dog");
            assert_eq!(crc.digest(), 0x414F_A339, "kernel {kernel:?}");
        }
    }

    #[test]
    fn digest_is_idempotent() {
        let mut crc = Crc::new(CRC32).unwrap();
        crc.update(b"123456789");
        let first = crc.digest();
        let second = crc.digest();
        assert_eq!(first, second);
    }

    #[test]
    fn copy_is_independent() {
        let mut crc = Crc::new(CRC32).unwrap();
        crc.update(b"123");
        let mut copy = crc.copy();
        copy.update(b"456789");
        crc.update(b"456789");
        assert_eq!(crc.digest(), copy.digest());

        let mut diverged = crc.copy();
        diverged.update(b"extra");
        assert_ne!(diverged.digest(), crc.digest());
    }

    #[test]
    fn clear_resets_to_configured_init() {
        let mut crc = Crc::new(CRC32).unwrap();
        crc.update(b"garbage state");
        crc.clear(None);
        crc.update(b"123456789");

        let mut fresh = Crc::new(CRC32).unwrap();
        fresh.update(b"123456789");

        assert_eq!(crc.digest(), fresh.digest());
    }

    #[test]
    fn clear_accepts_an_explicit_init_override() {
        let mut crc = Crc::new(CRC32).unwrap();
        crc.clear(Some(0));
        crc.update(b"123456789");
        let overridden = crc.digest();

        let mut default_init = Crc::new(CRC32).unwrap();
        default_init.update(b"123456789");
        assert_ne!(overridden, default_init.digest());
    }

    #[test]
    fn combine_matches_direct_digest() {
        let a = b"12345";
        let b = b"6789";

        let mut digest_a = Crc::new(CRC32).unwrap();
        digest_a.update(a);
        let crc1 = digest_a.digest();

        let mut digest_b = Crc::new(CRC32).unwrap();
        digest_b.update(b);
        let crc2 = digest_b.digest();

        let combined = Crc::combine(CRC32, crc1, crc2, b.len() as u64).unwrap();

        let mut whole = Crc::new(CRC32).unwrap();
        whole.update(a);
        whole.update(b);

        assert_eq!(combined, whole.digest());
        assert_eq!(combined, 0xCBF4_3926);
    }

    #[test]
    fn combine_with_nonzero_init_distinct_from_xorout() {
        // Regression test: an earlier version of `combine` omitted the
        // `init` correction term and only happened to pass for algorithms
        // like CRC-32 where `init == xorout` makes the missing term cancel.
        // MODBUS's `init` (0xFFFF) and `xorout` (0x0000) differ, so this
        // would fail under that bug.
        let a = b"12345";
        let b = b"6789";

        let mut digest_a = Crc::new(MODBUS).unwrap();
        digest_a.update(a);
        let crc1 = digest_a.digest();

        let mut digest_b = Crc::new(MODBUS).unwrap();
        digest_b.update(b);
        let crc2 = digest_b.digest();

        let combined = Crc::combine(MODBUS, crc1, crc2, b.len() as u64).unwrap();

        let mut whole = Crc::new(MODBUS).unwrap();
        whole.update(a);
        whole.update(b);

        assert_eq!(combined, whole.digest());
        assert_eq!(combined, 0x4B37);
    }

    #[test]
    fn combine_with_empty_second_operand_is_identity() {
        let mut digest_a = Crc::new(MODBUS).unwrap();
        digest_a.update(b"123456789");
        let crc1 = digest_a.digest();

        let mut empty = Crc::new(MODBUS).unwrap();
        let crc2 = empty.digest();

        let combined = Crc::combine(MODBUS, crc1, crc2, 0).unwrap();
        assert_eq!(combined, crc1);
    }

    #[test]
    fn combine_rejects_out_of_range_operands() {
        assert!(matches!(
            Crc::combine(XMODEM, 0x1_0000, 0, 0),
            Err(CrcError::Crc1OutOfRange { .. })
        ));
        assert!(matches!(
            Crc::combine(XMODEM, 0, 0x1_0000, 0),
            Err(CrcError::Crc2OutOfRange { .. })
        ));
    }

    #[test]
    fn empty_update_is_a_no_op() {
        let mut crc = Crc::new(CRC32).unwrap();
        crc.update(b"123456789");
        let before = crc.digest();
        crc.update(b"");
        assert_eq!(crc.digest(), before);
    }

    #[test]
    fn width_one_and_width_64_round_trip() {
        let width1 = Algorithm::new(1, 1, 0, true, true, 0).unwrap();
        let mut crc = Crc::new(width1).unwrap();
        crc.update(b"x");
        let _ = crc.digest();

        let width64 = Algorithm::new(64, 0x42F0_E1EB_A9EA_3693, 0xFFFF_FFFF_FFFF_FFFF, true, true, 0xFFFF_FFFF_FFFF_FFFF).unwrap();
        let mut crc = Crc::new(width64).unwrap();
        crc.update(b"123456789");
        assert_eq!(crc.digest(), 0x995D_C9BB_DF19_39FA);
    }

    #[test]
    fn combine_at_width_one() {
        let width1 = Algorithm::new(1, 1, 1, true, true, 0).unwrap();
        let a = b"abc";
        let b = b"def";

        let mut digest_a = Crc::new(width1).unwrap();
        digest_a.update(a);
        let crc1 = digest_a.digest();

        let mut digest_b = Crc::new(width1).unwrap();
        digest_b.update(b);
        let crc2 = digest_b.digest();

        let combined = Crc::combine(width1, crc1, crc2, b.len() as u64).unwrap();

        let mut whole = Crc::new(width1).unwrap();
        whole.update(a);
        whole.update(b);

        assert_eq!(combined, whole.digest());
    }

    #[test]
    fn combine_at_width_64() {
        let width64 = Algorithm::new(64, 0x42F0_E1EB_A9EA_3693, 0xFFFF_FFFF_FFFF_FFFF, true, true, 0xFFFF_FFFF_FFFF_FFFF).unwrap();
        let a = b"12345";
        let b = b"6789";

        let mut digest_a = Crc::new(width64).unwrap();
        digest_a.update(a);
        let crc1 = digest_a.digest();

        let mut digest_b = Crc::new(width64).unwrap();
        digest_b.update(b);
        let crc2 = digest_b.digest();

        let combined = Crc::combine(width64, crc1, crc2, b.len() as u64).unwrap();

        let mut whole = Crc::new(width64).unwrap();
        whole.update(a);
        whole.update(b);

        assert_eq!(combined, whole.digest());
        assert_eq!(combined, 0x995D_C9BB_DF19_39FA);
    }
}

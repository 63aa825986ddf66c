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

//! `digest`-trait adapters over a few catalogue entries that are widely used
//! as drop-in hashes: CRC-32/ISO-HDLC, its Castagnoli sibling CRC-32C,
//! CRC-16/ARC, and CRC-64/XZ.
//!
//! These are convenience veneers over the generic [`crate::Crc`] engine for
//! callers who want to drive a CRC through the `RustCrypto` `digest` trait
//! family (e.g. as one leg of a generic `Digest` bound); deleting this module
//! loses none of the engine's own capability.

use digest::core_api::OutputSizeUser;
use digest::typenum::{U2, U4, U8};
use digest::{FixedOutput, FixedOutputReset, HashMarker, Output, Reset, Update};

use crate::engine::Crc;

macro_rules! digest_wrapper {
    ($name:ident, $template:expr, $output_size:ty, $finalize_fn:ident, $finalize_ty:ty, $one_shot:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone)]
        pub struct $name {
            inner: Crc,
        }

        impl $name {
            /// Creates a new digest instance.
            pub fn new() -> Self {
                Self {
                    inner: Crc::by_name($template).expect("built-in catalogue template is always valid"),
                }
            }

            /// Retrieves the checksum without going through the `digest`
            /// trait's byte-array `Output`.
            pub fn $finalize_fn(mut self) -> $finalize_ty {
                self.inner.digest() as $finalize_ty
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl OutputSizeUser for $name {
            type OutputSize = $output_size;
        }

        impl Update for $name {
            fn update(&mut self, data: &[u8]) {
                self.inner.update(data);
            }
        }

        impl Reset for $name {
            fn reset(&mut self) {
                self.inner.clear(None);
            }
        }

        impl FixedOutput for $name {
            fn finalize_into(self, out: &mut Output<Self>) {
                let mut inner = self.inner;
                out.copy_from_slice(&inner.digest_bytes());
            }
        }

        impl FixedOutputReset for $name {
            fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
                out.copy_from_slice(&self.inner.digest_bytes());
                self.inner.clear(None);
            }
        }

        impl HashMarker for $name {}

        #[doc = concat!("One-shot helper computing [`", stringify!($name), "`] over a byte slice.")]
        pub fn $one_shot(data: &[u8]) -> $finalize_ty {
            let mut digest = $name::new();
            Update::update(&mut digest, data);
            digest.$finalize_fn()
        }
    };
}

digest_wrapper!(
    Crc32,
    "crc-32",
    U4,
    finalize_u32,
    u32,
    crc32,
    "Classic Ethernet CRC32 (a.k.a. IEEE, ISO-HDLC)."
);

digest_wrapper!(
    Crc32c,
    "crc-32-iscsi",
    U4,
    finalize_u32,
    u32,
    crc32c,
    "Castagnoli CRC32 (CRC32C), widely used by SSE4.2 instructions, NVMe, ext4, etc."
);

digest_wrapper!(
    Crc16Arc,
    "crc-16-arc",
    U2,
    finalize_u16,
    u16,
    crc16_arc,
    "CRC-16/ARC, a.k.a. CRC-16/IBM, the most commonly seen 16-bit CRC."
);

digest_wrapper!(
    Crc64Xz,
    "crc-64-xz",
    U8,
    finalize_u64,
    u64,
    crc64_xz,
    "CRC-64/XZ, used by the .xz archive format and btrfs."
);

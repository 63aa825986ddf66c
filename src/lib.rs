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

//! rscrc computes Cyclic Redundancy Check digests for any width/polynomial
//! combination expressible in the Rocksoft/CRC-catalogue parameter model —
//! `width`, `poly`, `init`, `refin`, `refout`, `xorout` — through three
//! interchangeable update kernels (bit-by-bit, slice-by-1, slice-by-8) and a
//! catalogue of roughly a hundred named standard variants (`"crc-32"`,
//! `"xmodem"`, `"modbus"`, `"crc-64-xz"`, ...).
//!
//! ```
//! use rscrc::Crc;
//!
//! let mut crc = Crc::by_name("crc-32").unwrap();
//! crc.update(b"123456789");
//! assert_eq!(crc.digest(), 0xCBF4_3926);
//! ```
//!
//! Engines built from the same [`Algorithm`] share their lookup tables
//! process-wide, and [`Crc::combine`] merges two previously computed CRCs as
//! if their covered byte streams had been concatenated, without needing
//! either stream in hand.

#![deny(unsafe_code)]

mod algorithm;
mod catalog;
mod digest_compat;
mod engine;
mod error;
mod kernel;
mod primitives;
mod table;

pub use crate::algorithm::{Algorithm, AlgorithmBuilder};
pub use crate::catalog::{templates_available, CatalogEntry};
pub use crate::digest_compat::{crc16_arc, crc32, crc32c, crc64_xz, Crc16Arc, Crc32, Crc32c, Crc64Xz};
pub use crate::engine::Crc;
pub use crate::error::{CrcError, Result};
pub use crate::kernel::Kernel;
pub use crate::primitives::host_is_little_endian;

/// Number of bits in a byte.
pub const BYTE_WIDTH: u8 = 8;

/// Largest CRC width this crate supports.
pub const MAX_WIDTH: u8 = 64;

/// Largest value representable at [`MAX_WIDTH`].
pub const MAX_VALUE: u64 = u64::MAX;

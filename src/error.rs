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

//! Error types surfaced by configuration validation, catalogue lookup, and
//! combine.

use thiserror::Error;

/// Errors that can be raised while building or driving a [`crate::Crc`]
/// engine.
///
/// Construction failures are reported before any engine state exists: a
/// failed [`Algorithm::validate`](crate::Algorithm::validate) or
/// [`Crc::new`](crate::Crc::new) never leaves a partially built engine
/// observable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CrcError {
    /// `width` was zero or greater than [`crate::MAX_WIDTH`].
    #[error("width out of range: {width} (must be 1..=64)")]
    WidthOutOfRange {
        /// The offending width.
        width: u8,
    },

    /// `poly` was zero or exceeded the `width`-bit mask.
    #[error("poly out of range: {poly:#x} (must be 1..={mask:#x})")]
    PolyOutOfRange {
        /// The offending polynomial.
        poly: u64,
        /// The width-derived mask it was checked against.
        mask: u64,
    },

    /// `init` exceeded the `width`-bit mask.
    #[error("init out of range: {init:#x} (must be 0..={mask:#x})")]
    InitOutOfRange {
        /// The offending initial value.
        init: u64,
        /// The width-derived mask it was checked against.
        mask: u64,
    },

    /// `xorout` exceeded the `width`-bit mask.
    #[error("xorout out of range: {xorout:#x} (must be 0..={mask:#x})")]
    XoroutOutOfRange {
        /// The offending xorout value.
        xorout: u64,
        /// The width-derived mask it was checked against.
        mask: u64,
    },

    /// A catalogue lookup found no entry for the given name.
    #[error("unknown CRC template: {name}")]
    UnknownTemplate {
        /// The name that failed to resolve.
        name: String,
    },

    /// The first operand passed to [`crate::Crc::combine`] exceeded the
    /// algorithm's `width`-bit mask.
    #[error("crc1 out of range: {crc1:#x} (must be 0..={mask:#x})")]
    Crc1OutOfRange {
        /// The offending value.
        crc1: u64,
        /// The width-derived mask it was checked against.
        mask: u64,
    },

    /// The second operand passed to [`crate::Crc::combine`] exceeded the
    /// algorithm's `width`-bit mask.
    #[error("crc2 out of range: {crc2:#x} (must be 0..={mask:#x})")]
    Crc2OutOfRange {
        /// The offending value.
        crc2: u64,
        /// The width-derived mask it was checked against.
        mask: u64,
    },
}

impl CrcError {
    /// True for every variant reporting a numeric field outside its valid
    /// range; false for [`CrcError::UnknownTemplate`], which is a lookup-key
    /// error rather than a range violation.
    pub fn is_range_error(&self) -> bool {
        !matches!(self, CrcError::UnknownTemplate { .. })
    }
}

/// Result type alias for this crate's fallible operations.
pub type Result<T> = std::result::Result<T, CrcError>;

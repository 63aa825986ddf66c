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

//! The six-field Rocksoft/CRC-catalogue parameter set and its validation.

use crate::error::{CrcError, Result};
use crate::primitives::bitmask;
use crate::MAX_WIDTH;

/// Describes a parametric CRC algorithm: width, polynomial, initial value,
/// input/output reflection, and the final XOR mask.
///
/// `width` is a field checked by [`Algorithm::validate`] rather than a
/// compile-time constant, so one type covers CRC-3 through CRC-64; the name,
/// if any, lives in the catalogue entry that produced this `Algorithm`, not
/// in the struct itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Algorithm {
    /// Width of the algorithm in bits, `1..=64`.
    pub width: u8,
    /// Generator polynomial in normal (non-reflected) form, top bit omitted.
    pub poly: u64,
    /// Initial register value, copied verbatim (not affected by `refin`).
    pub init: u64,
    /// Whether input bytes are reflected before being fed to the register.
    pub refin: bool,
    /// Whether the final register value is reflected before `xorout`.
    pub refout: bool,
    /// Final XOR mask.
    pub xorout: u64,
}

impl Algorithm {
    /// Constructs an `Algorithm` without validating it. Prefer
    /// [`Algorithm::new`] unless the fields are already known-valid (e.g.
    /// catalogue entries).
    pub const fn new_unchecked(
        width: u8,
        poly: u64,
        init: u64,
        refin: bool,
        refout: bool,
        xorout: u64,
    ) -> Self {
        Self {
            width,
            poly,
            init,
            refin,
            refout,
            xorout,
        }
    }

    /// Constructs and validates an `Algorithm`.
    pub fn new(
        width: u8,
        poly: u64,
        init: u64,
        refin: bool,
        refout: bool,
        xorout: u64,
    ) -> Result<Self> {
        let algorithm = Self::new_unchecked(width, poly, init, refin, refout, xorout);
        algorithm.validate()?;
        Ok(algorithm)
    }

    /// Starts a [`AlgorithmBuilder`] seeded from this algorithm's fields,
    /// for overriding individual fields of a named template before
    /// construction.
    pub fn builder_from(self) -> AlgorithmBuilder {
        AlgorithmBuilder::from_algorithm(self)
    }

    /// Validates width, poly, init, and xorout ranges in that order, each
    /// with a distinct [`CrcError`] variant.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.width > MAX_WIDTH {
            return Err(CrcError::WidthOutOfRange { width: self.width });
        }
        let mask = bitmask(self.width);
        if self.poly == 0 || self.poly > mask {
            return Err(CrcError::PolyOutOfRange {
                poly: self.poly,
                mask,
            });
        }
        if self.init > mask {
            return Err(CrcError::InitOutOfRange {
                init: self.init,
                mask,
            });
        }
        if self.xorout > mask {
            return Err(CrcError::XoroutOutOfRange {
                xorout: self.xorout,
                mask,
            });
        }
        Ok(())
    }

    /// `(1 << width) - 1`, saturating at `u64::MAX` for `width == 64`.
    pub const fn mask(&self) -> u64 {
        bitmask(self.width)
    }
}

/// A builder for overriding individual fields of an [`Algorithm`], typically
/// seeded from a catalogue template via [`Algorithm::builder_from`].
#[derive(Debug, Clone, Copy)]
pub struct AlgorithmBuilder {
    width: u8,
    poly: u64,
    init: u64,
    refin: bool,
    refout: bool,
    xorout: u64,
}

impl AlgorithmBuilder {
    fn from_algorithm(algorithm: Algorithm) -> Self {
        Self {
            width: algorithm.width,
            poly: algorithm.poly,
            init: algorithm.init,
            refin: algorithm.refin,
            refout: algorithm.refout,
            xorout: algorithm.xorout,
        }
    }

    /// Overrides `width`.
    pub fn width(mut self, width: u8) -> Self {
        self.width = width;
        self
    }

    /// Overrides `poly`.
    pub fn poly(mut self, poly: u64) -> Self {
        self.poly = poly;
        self
    }

    /// Overrides `init`.
    pub fn init(mut self, init: u64) -> Self {
        self.init = init;
        self
    }

    /// Overrides `refin`.
    pub fn refin(mut self, refin: bool) -> Self {
        self.refin = refin;
        self
    }

    /// Overrides `refout`.
    pub fn refout(mut self, refout: bool) -> Self {
        self.refout = refout;
        self
    }

    /// Overrides `xorout`.
    pub fn xorout(mut self, xorout: u64) -> Self {
        self.xorout = xorout;
        self
    }

    /// Validates and builds the resulting [`Algorithm`].
    pub fn build(self) -> Result<Algorithm> {
        Algorithm::new(
            self.width,
            self.poly,
            self.init,
            self.refin,
            self.refout,
            self.xorout,
        )
    }
}

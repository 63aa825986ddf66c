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

//! The named catalogue of standard CRC variants.
//!
//! Entries are transcribed from the public Williams/RevEng "Catalogue of
//! parametrised CRC algorithms" (the same public dataset the `crc-catalog`
//! and `crc` crates in the wider ecosystem embed). Names are lowercase,
//! hyphen-separated, and multiple aliases may resolve to the same
//! [`Algorithm`]. `check` is the CRC of the ASCII bytes `"123456789"`;
//! `residue` is the register contents after processing a codeword's own
//! checksum (kept for completeness, not exercised by this crate's own tests).

use std::sync::OnceLock;

use crate::algorithm::Algorithm;

/// One named catalogue entry: an [`Algorithm`] plus its conformance check
/// value and residue.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    /// Lowercase, hyphen-separated canonical or alias name.
    pub name: &'static str,
    /// The algorithm this name resolves to.
    pub algorithm: Algorithm,
    /// CRC of `b"123456789"` under this algorithm.
    pub check: u64,
    /// Register residue (see module docs); `0` where not separately verified.
    pub residue: u64,
}

macro_rules! entry {
    ($name:expr, $width:expr, $poly:expr, $init:expr, $refin:expr, $refout:expr, $xorout:expr, $check:expr, $residue:expr) => {
        CatalogEntry {
            name: $name,
            algorithm: Algorithm::new_unchecked($width, $poly, $init, $refin, $refout, $xorout),
            check: $check,
            residue: $residue,
        }
    };
}

/// The full catalogue, grouped by width for readability. Not itself sorted
/// by name — see [`find`] / [`sorted_index`] for the binary-searchable view.
pub static CATALOG: &[CatalogEntry] = &[
    // --- width 3 ---
    entry!("crc-3-gsm", 3, 0x3, 0x0, false, false, 0x7, 0x4, 0x2),
    entry!("crc-3-rohc", 3, 0x3, 0x7, true, true, 0x0, 0x6, 0x0),
    // --- width 4 ---
    entry!("crc-4-g-704", 4, 0x3, 0x0, true, true, 0x0, 0x7, 0x0),
    entry!("crc-4-itu", 4, 0x3, 0x0, true, true, 0x0, 0x7, 0x0),
    entry!("crc-4-interlaken", 4, 0x3, 0xF, false, false, 0xF, 0xB, 0x2),
    // --- width 5 ---
    entry!("crc-5-epc-c1g2", 5, 0x09, 0x09, false, false, 0x00, 0x00, 0x00),
    entry!("crc-5-epc", 5, 0x09, 0x09, false, false, 0x00, 0x00, 0x00),
    entry!("crc-5-g-704", 5, 0x15, 0x00, true, true, 0x00, 0x07, 0x00),
    entry!("crc-5-itu", 5, 0x15, 0x00, true, true, 0x00, 0x07, 0x00),
    entry!("crc-5-usb", 5, 0x05, 0x1F, true, true, 0x1F, 0x19, 0x06),
    // --- width 6 ---
    entry!("crc-6-cdma2000-a", 6, 0x27, 0x3F, false, false, 0x00, 0x0D, 0x00),
    entry!("crc-6-cdma2000-b", 6, 0x07, 0x3F, false, false, 0x00, 0x3B, 0x00),
    entry!("crc-6-darc", 6, 0x19, 0x00, true, true, 0x00, 0x26, 0x00),
    entry!("crc-6-g-704", 6, 0x03, 0x00, true, true, 0x00, 0x06, 0x00),
    entry!("crc-6-itu", 6, 0x03, 0x00, true, true, 0x00, 0x06, 0x00),
    entry!("crc-6-gsm", 6, 0x2F, 0x00, false, false, 0x3F, 0x13, 0x3A),
    // --- width 7 ---
    entry!("crc-7-mmc", 7, 0x09, 0x00, false, false, 0x00, 0x75, 0x00),
    entry!("crc-7-rohc", 7, 0x4F, 0x7F, true, true, 0x00, 0x53, 0x00),
    entry!("crc-7-umts", 7, 0x45, 0x00, false, false, 0x00, 0x61, 0x00),
    // --- width 8 ---
    entry!("crc-8", 8, 0x07, 0x00, false, false, 0x00, 0xF4, 0x00),
    entry!("crc-8-smbus", 8, 0x07, 0x00, false, false, 0x00, 0xF4, 0x00),
    entry!("crc-8-autosar", 8, 0x2F, 0xFF, false, false, 0xFF, 0xDF, 0x42),
    entry!("crc-8-bluetooth", 8, 0xA7, 0x00, true, true, 0x00, 0x26, 0x00),
    entry!("crc-8-cdma2000", 8, 0x9B, 0xFF, false, false, 0x00, 0xDA, 0x00),
    entry!("crc-8-darc", 8, 0x39, 0x00, true, true, 0x00, 0x15, 0x00),
    entry!("crc-8-dvb-s2", 8, 0xD5, 0x00, false, false, 0x00, 0xBC, 0x00),
    entry!("crc-8-gsm-a", 8, 0x1D, 0x00, false, false, 0x00, 0x37, 0x00),
    entry!("crc-8-gsm-b", 8, 0x49, 0x00, false, false, 0xFF, 0x94, 0x53),
    entry!("crc-8-hitag", 8, 0x1D, 0xFF, false, false, 0x00, 0xB4, 0x00),
    entry!("crc-8-i-432-1", 8, 0x07, 0x00, false, false, 0x55, 0xA1, 0xAC),
    entry!("crc-8-itu", 8, 0x07, 0x00, false, false, 0x55, 0xA1, 0xAC),
    entry!("crc-8-i-code", 8, 0x1D, 0xFD, false, false, 0x00, 0x7E, 0x00),
    entry!("crc-8-lte", 8, 0x9B, 0x00, false, false, 0x00, 0xEA, 0x00),
    entry!("crc-8-maxim-dow", 8, 0x31, 0x00, true, true, 0x00, 0xA1, 0x00),
    entry!("crc-8-maxim", 8, 0x31, 0x00, true, true, 0x00, 0xA1, 0x00),
    entry!("dow-crc", 8, 0x31, 0x00, true, true, 0x00, 0xA1, 0x00),
    entry!("crc-8-mifare-mad", 8, 0x1D, 0xC7, false, false, 0x00, 0x99, 0x00),
    entry!("crc-8-nrsc-5", 8, 0x31, 0xFF, false, false, 0x00, 0xF7, 0x00),
    entry!("crc-8-opensafety", 8, 0x2F, 0x00, false, false, 0x00, 0x3E, 0x00),
    entry!("crc-8-rohc", 8, 0x07, 0xFF, true, true, 0x00, 0xD0, 0x00),
    entry!("crc-8-sae-j1850", 8, 0x1D, 0xFF, false, false, 0xFF, 0x4B, 0xC4),
    entry!("crc-8-tech-3250", 8, 0x1D, 0xFF, true, true, 0x00, 0x97, 0x00),
    entry!("crc-8-aes", 8, 0x1D, 0xFF, true, true, 0x00, 0x97, 0x00),
    entry!("crc-8-ebu", 8, 0x1D, 0xFF, true, true, 0x00, 0x97, 0x00),
    entry!("crc-8-wcdma", 8, 0x9B, 0x00, true, true, 0x00, 0x25, 0x00),
    // --- width 10 ---
    entry!("crc-10-atm", 10, 0x233, 0x000, false, false, 0x000, 0x199, 0x000),
    entry!("crc-10-i-610", 10, 0x233, 0x000, false, false, 0x000, 0x199, 0x000),
    entry!("crc-10", 10, 0x233, 0x000, false, false, 0x000, 0x199, 0x000),
    entry!("crc-10-cdma2000", 10, 0x3D9, 0x3FF, false, false, 0x000, 0x233, 0x000),
    entry!("crc-10-gsm", 10, 0x175, 0x000, false, false, 0x3FF, 0x12A, 0x0C6),
    // --- width 11 ---
    entry!("crc-11-flexray", 11, 0x385, 0x01A, false, false, 0x000, 0x5A3, 0x000),
    entry!("crc-11-umts", 11, 0x307, 0x000, false, false, 0x000, 0x061, 0x000),
    // --- width 12 ---
    entry!("crc-12-cdma2000", 12, 0xF13, 0xFFF, false, false, 0x000, 0xD4D, 0x000),
    entry!("crc-12-dect", 12, 0x80F, 0x000, false, false, 0x000, 0xF5B, 0x000),
    entry!("crc-12-gsm", 12, 0xD31, 0x000, false, false, 0xFFF, 0xB34, 0x178),
    entry!("crc-12-umts", 12, 0x80F, 0x000, false, true, 0x000, 0xDAF, 0x000),
    // --- width 13 ---
    entry!("crc-13-bbc", 13, 0x1CF5, 0x0000, false, false, 0x0000, 0x04FA, 0x0000),
    // --- width 14 ---
    entry!("crc-14-darc", 14, 0x0805, 0x0000, true, true, 0x0000, 0x082D, 0x0000),
    entry!("crc-14-gsm", 14, 0x202D, 0x0000, false, false, 0x3FFF, 0x30AE, 0x031E),
    // --- width 15 ---
    entry!("crc-15-can", 15, 0x4599, 0x0000, false, false, 0x0000, 0x059E, 0x0000),
    entry!("crc-15-mpt1327", 15, 0x6815, 0x0000, false, false, 0x0001, 0x2566, 0x6815),
    // --- width 16 ---
    entry!("crc-16-arc", 16, 0x8005, 0x0000, true, true, 0x0000, 0xBB3D, 0x0000),
    entry!("arc", 16, 0x8005, 0x0000, true, true, 0x0000, 0xBB3D, 0x0000),
    entry!("crc-16", 16, 0x8005, 0x0000, true, true, 0x0000, 0xBB3D, 0x0000),
    entry!("crc-ibm", 16, 0x8005, 0x0000, true, true, 0x0000, 0xBB3D, 0x0000),
    entry!("crc-16-lha", 16, 0x8005, 0x0000, true, true, 0x0000, 0xBB3D, 0x0000),
    entry!("crc-16-cdma2000", 16, 0xC867, 0xFFFF, false, false, 0x0000, 0x4C06, 0x0000),
    entry!("crc-16-cms", 16, 0x8005, 0xFFFF, false, false, 0x0000, 0xAEE7, 0x0000),
    entry!("crc-16-dds-110", 16, 0x8005, 0x800D, false, false, 0x0000, 0x9ECF, 0x0000),
    entry!("crc-16-dect-r", 16, 0x0589, 0x0000, false, false, 0x0001, 0x007E, 0x0589),
    entry!("crc-16-dect-x", 16, 0x0589, 0x0000, false, false, 0x0000, 0x007F, 0x0000),
    entry!("crc-16-dnp", 16, 0x3D65, 0x0000, true, true, 0xFFFF, 0xEA82, 0x66C5),
    entry!("crc-16-en-13757", 16, 0x3D65, 0x0000, false, false, 0xFFFF, 0xC2B7, 0xA366),
    entry!("crc-16-genibus", 16, 0x1021, 0xFFFF, false, false, 0xFFFF, 0xD64E, 0x1D0F),
    entry!("crc-16-darc", 16, 0x1021, 0xFFFF, false, false, 0xFFFF, 0xD64E, 0x1D0F),
    entry!("crc-16-epc", 16, 0x1021, 0xFFFF, false, false, 0xFFFF, 0xD64E, 0x1D0F),
    entry!("crc-16-epc-c1g2", 16, 0x1021, 0xFFFF, false, false, 0xFFFF, 0xD64E, 0x1D0F),
    entry!("crc-16-i-code", 16, 0x1021, 0xFFFF, false, false, 0xFFFF, 0xD64E, 0x1D0F),
    entry!("crc-16-gsm", 16, 0x1021, 0x0000, false, false, 0xFFFF, 0xCE3C, 0x1D0F),
    entry!("crc-16-ibm-3740", 16, 0x1021, 0xFFFF, false, false, 0x0000, 0x29B1, 0x0000),
    entry!("crc-16-autosar", 16, 0x1021, 0xFFFF, false, false, 0x0000, 0x29B1, 0x0000),
    entry!("crc-16-ccitt-false", 16, 0x1021, 0xFFFF, false, false, 0x0000, 0x29B1, 0x0000),
    entry!("crc-16-ibm-sdlc", 16, 0x1021, 0xFFFF, true, true, 0xFFFF, 0x906E, 0xF0B8),
    entry!("crc-16-iso-hdlc", 16, 0x1021, 0xFFFF, true, true, 0xFFFF, 0x906E, 0xF0B8),
    entry!("crc-16-iso-iec-14443-3-b", 16, 0x1021, 0xFFFF, true, true, 0xFFFF, 0x906E, 0xF0B8),
    entry!("crc-16-x-25", 16, 0x1021, 0xFFFF, true, true, 0xFFFF, 0x906E, 0xF0B8),
    entry!("crc-16-x25", 16, 0x1021, 0xFFFF, true, true, 0xFFFF, 0x906E, 0xF0B8),
    entry!("crc-b", 16, 0x1021, 0xFFFF, true, true, 0xFFFF, 0x906E, 0xF0B8),
    entry!("crc-16-iso-iec-14443-3-a", 16, 0x1021, 0xC6C6, true, true, 0x0000, 0xBF05, 0x0000),
    entry!("crc-a", 16, 0x1021, 0xC6C6, true, true, 0x0000, 0xBF05, 0x0000),
    entry!("crc-16-kermit", 16, 0x1021, 0x0000, true, true, 0x0000, 0x2189, 0x0000),
    entry!("crc-ccitt", 16, 0x1021, 0x0000, true, true, 0x0000, 0x2189, 0x0000),
    entry!("crc-ccitt-true", 16, 0x1021, 0x0000, true, true, 0x0000, 0x2189, 0x0000),
    entry!("crc-16-ccitt", 16, 0x1021, 0x0000, true, true, 0x0000, 0x2189, 0x0000),
    entry!("crc-16-v-41-lsb", 16, 0x1021, 0x0000, true, true, 0x0000, 0x2189, 0x0000),
    entry!("crc-16-lj1200", 16, 0x6F63, 0x0000, false, false, 0x0000, 0xBDF4, 0x0000),
    entry!("crc-16-m17", 16, 0x5935, 0xFFFF, false, false, 0x0000, 0x772B, 0x0000),
    entry!("crc-16-maxim-dow", 16, 0x8005, 0x0000, true, true, 0xFFFF, 0x44C2, 0xB001),
    entry!("crc-16-maxim", 16, 0x8005, 0x0000, true, true, 0xFFFF, 0x44C2, 0xB001),
    entry!("crc-16-mcrf4xx", 16, 0x1021, 0xFFFF, true, true, 0x0000, 0x6F91, 0x0000),
    entry!("crc-16-modbus", 16, 0x8005, 0xFFFF, true, true, 0x0000, 0x4B37, 0x0000),
    entry!("modbus", 16, 0x8005, 0xFFFF, true, true, 0x0000, 0x4B37, 0x0000),
    entry!("crc-16-nrsc-5", 16, 0x080B, 0xFFFF, true, true, 0x0000, 0xA066, 0x0000),
    entry!("crc-16-opensafety-a", 16, 0x5935, 0x0000, false, false, 0x0000, 0x5D38, 0x0000),
    entry!("crc-16-opensafety-b", 16, 0x755B, 0x0000, false, false, 0x0000, 0x20FE, 0x0000),
    entry!("crc-16-profibus", 16, 0x1DCF, 0xFFFF, false, false, 0xFFFF, 0xA819, 0xE394),
    entry!("crc-16-iec-61158-2", 16, 0x1DCF, 0xFFFF, false, false, 0xFFFF, 0xA819, 0xE394),
    entry!("crc-16-riello", 16, 0x1021, 0xB2AA, true, true, 0x0000, 0x63D0, 0x0000),
    entry!("crc-16-spi-fujitsu", 16, 0x1021, 0x1D0F, false, false, 0x0000, 0xE5CC, 0x0000),
    entry!("crc-16-aug-ccitt", 16, 0x1021, 0x1D0F, false, false, 0x0000, 0xE5CC, 0x0000),
    entry!("crc-16-t10-dif", 16, 0x8BB7, 0x0000, false, false, 0x0000, 0xD0DB, 0x0000),
    entry!("crc-16-teledisk", 16, 0xA097, 0x0000, false, false, 0x0000, 0x0FB3, 0x0000),
    entry!("crc-16-tms37157", 16, 0x1021, 0x89EC, true, true, 0x0000, 0x26B1, 0x0000),
    entry!("crc-16-umts", 16, 0x8005, 0x0000, false, false, 0x0000, 0xFEE8, 0x0000),
    entry!("crc-16-buypass", 16, 0x8005, 0x0000, false, false, 0x0000, 0xFEE8, 0x0000),
    entry!("crc-16-verifone", 16, 0x8005, 0x0000, false, false, 0x0000, 0xFEE8, 0x0000),
    entry!("crc-16-usb", 16, 0x8005, 0xFFFF, true, true, 0xFFFF, 0xB4C8, 0xB001),
    entry!("crc-16-xmodem", 16, 0x1021, 0x0000, false, false, 0x0000, 0x31C3, 0x0000),
    entry!("xmodem", 16, 0x1021, 0x0000, false, false, 0x0000, 0x31C3, 0x0000),
    entry!("zmodem", 16, 0x1021, 0x0000, false, false, 0x0000, 0x31C3, 0x0000),
    entry!("crc-16-acorn", 16, 0x1021, 0x0000, false, false, 0x0000, 0x31C3, 0x0000),
    entry!("crc-16-lte", 16, 0x1021, 0x0000, false, false, 0x0000, 0x31C3, 0x0000),
    entry!("crc-16-v-41-msb", 16, 0x1021, 0x0000, false, false, 0x0000, 0x31C3, 0x0000),
    // --- width 17 ---
    entry!("crc-17-can-fd", 17, 0x1685B, 0x00000, false, false, 0x00000, 0x04F03, 0x00000),
    // --- width 21 ---
    entry!("crc-21-can-fd", 21, 0x102899, 0x000000, false, false, 0x000000, 0x0ED841, 0x000000),
    // --- width 24 ---
    entry!("crc-24-ble", 24, 0x00065B, 0x555555, true, true, 0x000000, 0xC25A56, 0x000000),
    entry!("crc-24-flexray-a", 24, 0x5D6DCB, 0xFEDCBA, false, false, 0x000000, 0x7979BD, 0x000000),
    entry!("crc-24-flexray-b", 24, 0x5D6DCB, 0xABCDEF, false, false, 0x000000, 0x1F23B8, 0x000000),
    entry!("crc-24-interlaken", 24, 0x328B63, 0xFFFFFF, false, false, 0xFFFFFF, 0xB4F3E6, 0x144E63),
    entry!("crc-24-lte-a", 24, 0x864CFB, 0x000000, false, false, 0x000000, 0xCDE703, 0x000000),
    entry!("crc-24-lte-b", 24, 0x800063, 0x000000, false, false, 0x000000, 0x23EF52, 0x000000),
    entry!("crc-24-openpgp", 24, 0x864CFB, 0xB704CE, false, false, 0x000000, 0x21CF02, 0x000000),
    entry!("crc-24-os-9", 24, 0x800063, 0xFFFFFF, false, false, 0xFFFFFF, 0x200FA5, 0x800FE3),
    // --- width 30/31 ---
    entry!("crc-30-cdma", 30, 0x2030B9C7, 0x3FFFFFFF, false, false, 0x3FFFFFFF, 0x04C34ABF, 0x34EFA55),
    entry!("crc-31-philips", 31, 0x04C11DB7, 0x7FFFFFFF, false, false, 0x7FFFFFFF, 0x0CE9E46C, 0x4EAF26F),
    // --- width 32 ---
    entry!("crc-32-aixm", 32, 0x814141AB, 0x00000000, false, false, 0x00000000, 0x3010BF7F, 0x00000000),
    entry!("crc-32-autosar", 32, 0xF4ACFB13, 0xFFFFFFFF, true, true, 0xFFFFFFFF, 0x1697D06A, 0x904CDDBF),
    entry!("crc-32-base91-d", 32, 0xA833982B, 0xFFFFFFFF, true, true, 0xFFFFFFFF, 0x87315576, 0x45270551),
    entry!("crc-32-bzip2", 32, 0x04C11DB7, 0xFFFFFFFF, false, false, 0xFFFFFFFF, 0xFC891918, 0xC704DD7B),
    entry!("crc-32-cd-rom-edc", 32, 0x8001801B, 0x00000000, true, true, 0x00000000, 0x6EC2EDC4, 0x00000000),
    entry!("crc-32-cksum", 32, 0x04C11DB7, 0x00000000, false, false, 0xFFFFFFFF, 0x765E7680, 0xC704DD7B),
    entry!("crc-32-iscsi", 32, 0x1EDC6F41, 0xFFFFFFFF, true, true, 0xFFFFFFFF, 0xE3069283, 0xB798B438),
    entry!("crc-32-base91-c", 32, 0x1EDC6F41, 0xFFFFFFFF, true, true, 0xFFFFFFFF, 0xE3069283, 0xB798B438),
    entry!("crc-32-castagnoli", 32, 0x1EDC6F41, 0xFFFFFFFF, true, true, 0xFFFFFFFF, 0xE3069283, 0xB798B438),
    entry!("crc-32-interlaken", 32, 0x1EDC6F41, 0xFFFFFFFF, true, true, 0xFFFFFFFF, 0xE3069283, 0xB798B438),
    entry!("crc-32c", 32, 0x1EDC6F41, 0xFFFFFFFF, true, true, 0xFFFFFFFF, 0xE3069283, 0xB798B438),
    entry!("crc-32-iso-hdlc", 32, 0x04C11DB7, 0xFFFFFFFF, true, true, 0xFFFFFFFF, 0xCBF43926, 0xDEBB20E3),
    entry!("crc-32", 32, 0x04C11DB7, 0xFFFFFFFF, true, true, 0xFFFFFFFF, 0xCBF43926, 0xDEBB20E3),
    entry!("crc-32-adccp", 32, 0x04C11DB7, 0xFFFFFFFF, true, true, 0xFFFFFFFF, 0xCBF43926, 0xDEBB20E3),
    entry!("crc-32-v-42", 32, 0x04C11DB7, 0xFFFFFFFF, true, true, 0xFFFFFFFF, 0xCBF43926, 0xDEBB20E3),
    entry!("crc-32-xz", 32, 0x04C11DB7, 0xFFFFFFFF, true, true, 0xFFFFFFFF, 0xCBF43926, 0xDEBB20E3),
    entry!("pkzip", 32, 0x04C11DB7, 0xFFFFFFFF, true, true, 0xFFFFFFFF, 0xCBF43926, 0xDEBB20E3),
    entry!("crc-32-jamcrc", 32, 0x04C11DB7, 0xFFFFFFFF, true, true, 0x00000000, 0x340BC6D9, 0x00000000),
    entry!("jamcrc", 32, 0x04C11DB7, 0xFFFFFFFF, true, true, 0x00000000, 0x340BC6D9, 0x00000000),
    entry!("crc-32-mef", 32, 0x741B8CD7, 0xFFFFFFFF, true, true, 0x00000000, 0xD2C22F51, 0x00000000),
    entry!("crc-32-mpeg-2", 32, 0x04C11DB7, 0xFFFFFFFF, false, false, 0x00000000, 0x0376E6E7, 0x00000000),
    entry!("crc-32-xfer", 32, 0x000000AF, 0x00000000, false, false, 0x00000000, 0xBD0BE338, 0x00000000),
    entry!("xfer", 32, 0x000000AF, 0x00000000, false, false, 0x00000000, 0xBD0BE338, 0x00000000),
    // --- width 40 ---
    entry!("crc-40-gsm", 40, 0x0004820009, 0x0000000000, false, false, 0xFFFFFFFFFF, 0xD4164FC646, 0xC4FF8071FF),
    // --- width 64 ---
    entry!("crc-64-ecma-182", 64, 0x42F0E1EBA9EA3693, 0x0000000000000000, false, false, 0x0000000000000000, 0x6C40DF5F0B497347, 0x0000000000000000),
    entry!("crc-64-go-iso", 64, 0x000000000000001B, 0xFFFFFFFFFFFFFFFF, true, true, 0xFFFFFFFFFFFFFFFF, 0xB90956C775A41001, 0x5300000000000000),
    entry!("crc-64-ms", 64, 0x259C84CBA6426349, 0xFFFFFFFFFFFFFFFF, true, true, 0x0000000000000000, 0x75D4B74F024ECEEA, 0x0000000000000000),
    entry!("crc-64-nvme", 64, 0xAD93D23594C93659, 0xFFFFFFFFFFFFFFFF, true, true, 0xFFFFFFFFFFFFFFFF, 0xAE8B14860A799888, 0xF310303B2B6F6E42),
    entry!("crc-64-redis", 64, 0xAD93D23594C935A9, 0x0000000000000000, true, true, 0x0000000000000000, 0xE9C6D914C4B8D9CA, 0x0000000000000000),
    entry!("crc-64-we", 64, 0x42F0E1EBA9EA3693, 0xFFFFFFFFFFFFFFFF, false, false, 0xFFFFFFFFFFFFFFFF, 0x62EC59E3F1A4F00A, 0xFCACBEBD5931A992),
    entry!("crc-64-xz", 64, 0x42F0E1EBA9EA3693, 0xFFFFFFFFFFFFFFFF, true, true, 0xFFFFFFFFFFFFFFFF, 0x995DC9BBDF1939FA, 0x49958C9ABD7D353F),
    entry!("crc-64-go-ecma", 64, 0x42F0E1EBA9EA3693, 0xFFFFFFFFFFFFFFFF, true, true, 0xFFFFFFFFFFFFFFFF, 0x995DC9BBDF1939FA, 0x49958C9ABD7D353F),
];

/// Name of the catalogue entry used when a caller asks for "no parameters at
/// all".
pub const DEFAULT_NAME: &str = "crc-32";

fn sorted_index() -> &'static [&'static CatalogEntry] {
    static INDEX: OnceLock<Vec<&'static CatalogEntry>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut index: Vec<&'static CatalogEntry> = CATALOG.iter().collect();
        index.sort_unstable_by_key(|entry| entry.name);
        index
    })
}

/// Looks up a catalogue entry by exact name via binary search over the
/// lazily-sorted index. Name comparison is ordinary `&str` equality, so a
/// shorter name (`"crc-16"`) can never false-match a longer one that merely
/// shares its prefix (`"crc-16-arc"`).
pub fn find(name: &str) -> Option<&'static CatalogEntry> {
    let index = sorted_index();
    index
        .binary_search_by_key(&name, |entry| entry.name)
        .ok()
        .map(|i| index[i])
}

/// Iterates every catalogue name paired with its `(width, poly, init, refin,
/// refout, xorout)` tuple.
pub fn templates_available() -> impl Iterator<Item = (&'static str, (u8, u64, u64, bool, bool, u64))>
{
    sorted_index().iter().map(|entry| {
        let a = entry.algorithm;
        (entry.name, (a.width, a.poly, a.init, a.refin, a.refout, a.xorout))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_known_names() {
        assert!(find("crc-32").is_some());
        assert!(find("xmodem").is_some());
        assert!(find("modbus").is_some());
        assert!(find("crc-64-xz").is_some());
        assert!(find("crc-8-smbus").is_some());
    }

    #[test]
    fn unknown_name_is_absent() {
        assert!(find("crc-999-nonexistent").is_none());
    }

    #[test]
    fn short_name_does_not_prefix_match_longer_one() {
        let short = find("crc-16").expect("crc-16 must resolve");
        let long = find("crc-16-ibm-sdlc").expect("crc-16-ibm-sdlc must resolve");
        assert_ne!(short.algorithm, long.algorithm);
    }

    #[test]
    fn catalogue_has_roughly_a_hundred_entries() {
        assert!(CATALOG.len() >= 100, "expected ~110 entries, found {}", CATALOG.len());
    }

    #[test]
    fn index_is_sorted_for_binary_search() {
        let index = sorted_index();
        for pair in index.windows(2) {
            assert!(pair[0].name <= pair[1].name);
        }
    }

    #[test]
    fn default_name_resolves() {
        assert!(find(DEFAULT_NAME).is_some());
    }
}

//! Group-wise expansion of MIPI packed samples.
//!
//! Every packed format stores the most significant 8 bits of each sample in its own
//! byte, followed by trailer byte(s) carrying the low bits of the whole group. Groups
//! never share bits, so each one is decoded on its own.

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::unpack::types::BitDepth;

/// Expands a packed buffer into one `u16` per sample.
///
/// Bytes past the last whole group are ignored; use [`trailing_bytes`] to find out
/// how many were dropped. `Raw8` and `Raw16` are rejected with
/// [`ConversionError::UnsupportedOperation`] since there is nothing to unpack.
///
/// # Examples
///
/// ```
/// use mipi_unpack::image_pipeline::unpack::{unpack, BitDepth};
///
/// let samples = unpack(&[0x01, 0x00, 0x00, 0x00, 0x01], BitDepth::Raw10).unwrap();
/// assert_eq!(samples, vec![5, 0, 0, 0]);
/// ```
pub fn unpack(buffer: &[u8], depth: BitDepth) -> Result<Vec<u16>> {
    match depth {
        BitDepth::Raw8 | BitDepth::Raw16 => Err(ConversionError::UnsupportedOperation(depth)),
        BitDepth::Raw10 => Ok(unpack_raw10(buffer)),
        BitDepth::Raw12 => Ok(unpack_raw12(buffer)),
        BitDepth::Raw14 => Ok(unpack_raw14(buffer)),
    }
}

/// Same as [`unpack`], for a depth that has not been validated yet.
pub fn unpack_bits(buffer: &[u8], bits: u32) -> Result<Vec<u16>> {
    unpack(buffer, BitDepth::try_from(bits)?)
}

/// Number of bytes at the end of a `len`-byte buffer that do not complete a group.
pub fn trailing_bytes(len: usize, depth: BitDepth) -> usize {
    match depth.group_layout() {
        Some(layout) => len % layout.bytes,
        None => 0,
    }
}

pub fn unpack_raw10(buffer: &[u8]) -> Vec<u16> {
    unpack_groups(buffer, raw10_group)
}

pub fn unpack_raw12(buffer: &[u8]) -> Vec<u16> {
    unpack_groups(buffer, raw12_group)
}

pub fn unpack_raw14(buffer: &[u8]) -> Vec<u16> {
    unpack_groups(buffer, raw14_group)
}

fn unpack_groups<const B: usize, const S: usize>(
    buffer: &[u8],
    group: fn(&[u8; B]) -> [u16; S],
) -> Vec<u16> {
    let groups = buffer.chunks_exact(B);
    let mut samples = Vec::with_capacity(groups.len() * S);
    for chunk in groups {
        if let Ok(bytes) = <&[u8; B]>::try_from(chunk) {
            samples.extend_from_slice(&group(bytes));
        }
    }
    samples
}

/// 4 samples in 5 bytes. Byte 4 holds the low 2 bits of each sample, LSB pair first.
#[inline]
fn raw10_group(b: &[u8; 5]) -> [u16; 4] {
    let lsb = u16::from(b[4]);
    [
        (u16::from(b[0]) << 2) | (lsb & 0x3),
        (u16::from(b[1]) << 2) | ((lsb >> 2) & 0x3),
        (u16::from(b[2]) << 2) | ((lsb >> 4) & 0x3),
        (u16::from(b[3]) << 2) | ((lsb >> 6) & 0x3),
    ]
}

/// 2 samples in 3 bytes. Byte 2 holds the low nibble of each sample.
#[inline]
fn raw12_group(b: &[u8; 3]) -> [u16; 2] {
    let lsb = u16::from(b[2]);
    [
        (u16::from(b[0]) << 4) | (lsb & 0xF),
        (u16::from(b[1]) << 4) | ((lsb >> 4) & 0xF),
    ]
}

/// 4 samples in 7 bytes. The 24 low bits live in bytes 4..7, split 6/2+4/4+2/6.
#[inline]
fn raw14_group(b: &[u8; 7]) -> [u16; 4] {
    let (b4, b5, b6) = (u16::from(b[4]), u16::from(b[5]), u16::from(b[6]));
    [
        (u16::from(b[0]) << 6) | (b4 & 0x3F),
        (u16::from(b[1]) << 6) | ((b4 >> 6) & 0x3) | ((b5 & 0xF) << 2),
        (u16::from(b[2]) << 6) | ((b5 >> 4) & 0xF) | ((b6 & 0x3) << 4),
        (u16::from(b[3]) << 6) | ((b6 >> 2) & 0x3F),
    ]
}

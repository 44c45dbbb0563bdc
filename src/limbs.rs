//! Portable packing over 16-bit limbs
//!
//! Every intermediate fits in a `u32`, so this path produces the same identifier and
//! the same decimal text as the native `u64` path on targets without 64-bit arithmetic.
//! Limbs are little-endian: `limbs[0]` holds the least significant 16 bits.

use crate::id::FlakeId;

pub const LIMB_COUNT: usize = 4;
const LIMB_BITS: u32 = 16;
const DECIMAL_CHUNK: u32 = 10_000;

/// A 64-bit value as four 16-bit limbs, least significant first
pub type Limbs = [u16; LIMB_COUNT];

/// Split a value into limbs
pub const fn from_u64(value: u64) -> Limbs {
    [
        value as u16,
        (value >> 16) as u16,
        (value >> 32) as u16,
        (value >> 48) as u16,
    ]
}

/// Join limbs back into a value
pub const fn to_u64(limbs: Limbs) -> u64 {
    (limbs[0] as u64)
        | ((limbs[1] as u64) << 16)
        | ((limbs[2] as u64) << 32)
        | ((limbs[3] as u64) << 48)
}

/// Pack the three fields without 64-bit arithmetic
///
/// Fields are masked to their widths, callers validate ranges beforehand.
pub fn pack(timestamp: Limbs, machine_id: u16, sequence: u16) -> Limbs {
    let timestamp = shl(timestamp, FlakeId::TIMESTAMP_SHIFT);
    let machine = shl(
        [machine_id & FlakeId::MAX_MACHINE_ID, 0, 0, 0],
        FlakeId::MACHINE_ID_SHIFT,
    );
    let sequence = [sequence & FlakeId::MAX_SEQUENCE, 0, 0, 0];

    let mut out = [0u16; LIMB_COUNT];
    for i in 0..LIMB_COUNT {
        out[i] = timestamp[i] | machine[i] | sequence[i];
    }
    // reserved bit
    out[LIMB_COUNT - 1] &= 0x7FFF;
    out
}

/// Render limbs as base-10 text
pub fn to_decimal(mut limbs: Limbs) -> String {
    if limbs.iter().all(|&l| l == 0) {
        return "0".to_string();
    }

    // base-10000 chunks, least significant first
    let mut chunks = Vec::with_capacity(5);
    while limbs.iter().any(|&l| l != 0) {
        chunks.push(div_rem(&mut limbs, DECIMAL_CHUNK));
    }

    let mut out = String::with_capacity(chunks.len() * 4);
    let mut iter = chunks.iter().rev();
    if let Some(head) = iter.next() {
        out.push_str(&head.to_string());
    }
    for chunk in iter {
        out.push_str(&format!("{chunk:04}"));
    }
    out
}

/// Shift left by `bits`, dropping anything above 64 bits
fn shl(limbs: Limbs, bits: u32) -> Limbs {
    let words = (bits / LIMB_BITS) as usize;
    let rem = bits % LIMB_BITS;
    let mut out = [0u16; LIMB_COUNT];

    for i in words..LIMB_COUNT {
        let src = i - words;
        let mut value = (limbs[src] as u32) << rem;
        if rem > 0 && src > 0 {
            value |= (limbs[src - 1] as u32) >> (LIMB_BITS - rem);
        }
        out[i] = value as u16;
    }
    out
}

/// Divide in place by a divisor below 2^16, returning the remainder
fn div_rem(limbs: &mut Limbs, divisor: u32) -> u32 {
    let mut rem = 0u32;
    for limb in limbs.iter_mut().rev() {
        let current = (rem << LIMB_BITS) | (*limb as u32);
        *limb = (current / divisor) as u16;
        rem = current % divisor;
    }
    rem
}

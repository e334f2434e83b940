//! Fixed-width byte-array arithmetic.
//!
//! CIDR math is the same for IPv4 and IPv6 once an address is viewed as
//! a big-endian byte sequence. These routines operate on `&mut [u8]` of
//! any width so [`super::Subnet`](super::Subnet) can share them across
//! both families.

/// Fill `out` with `prefix` leading one-bits, the rest zero.
///
/// `prefix` must not exceed `out.len() * 8`.
pub fn fill_prefix_mask(prefix: u8, out: &mut [u8]) {
    debug_assert!(prefix as usize <= out.len() * 8);
    let mut remaining = prefix;
    for byte in out.iter_mut() {
        *byte = match remaining {
            0 => 0x00,
            1..=7 => {
                let b = 0xFFu8 << (8 - remaining);
                remaining = 0;
                b
            }
            _ => {
                remaining -= 8;
                0xFF
            }
        };
    }
}

/// Zero the host bits: `octets[i] &= mask[i]`.
pub fn apply_mask(octets: &mut [u8], mask: &[u8]) {
    debug_assert_eq!(octets.len(), mask.len());
    for (byte, m) in octets.iter_mut().zip(mask) {
        *byte &= m;
    }
}

/// Set the host bits: `octets[i] |= !mask[i]`.
pub fn set_host_bits(octets: &mut [u8], mask: &[u8]) {
    debug_assert_eq!(octets.len(), mask.len());
    for (byte, m) in octets.iter_mut().zip(mask) {
        *byte |= !m;
    }
}

/// Big-endian increment with carry propagation.
///
/// Wraps to all-zero when every byte is 0xFF.
pub fn increment(octets: &mut [u8]) {
    for byte in octets.iter_mut().rev() {
        let (next, overflow) = byte.overflowing_add(1);
        *byte = next;
        if !overflow {
            break;
        }
    }
}

/// Big-endian decrement with borrow propagation.
///
/// Wraps to all-0xFF when every byte is zero.
pub fn decrement(octets: &mut [u8]) {
    for byte in octets.iter_mut().rev() {
        let (next, underflow) = byte.overflowing_sub(1);
        *byte = next;
        if !underflow {
            break;
        }
    }
}

/*!
bit scanning and alignment.
*/

/// Iterates the positions of set bits, lowest first.
///
/// Each step extracts the lowest set bit and clears it, so the iterator
/// visits exactly `bits.count_ones()` positions.
#[derive(Debug, Clone, Copy)]
pub struct SetBits(u32);

impl SetBits {
    pub const fn new(bits: u32) -> Self {
        SetBits(bits)
    }
}

impl Iterator for SetBits {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.0 == 0 {
            return None;
        }
        let lsb = self.0.trailing_zeros();
        self.0 &= !(1 << lsb);
        Some(lsb)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for SetBits {}

/// Position of the single bit in `max_bit`, which must be a power of two.
pub const fn bit_position(max_bit: u32) -> u32 {
    assert!(max_bit.is_power_of_two(), "max bit must be a single bit");
    max_bit.trailing_zeros()
}

pub const fn is_single_bit(bits: u32) -> bool {
    bits & bits.wrapping_sub(1) == 0
}

pub const fn align_up(value: u32, alignment: u32) -> u32 {
    assert!(alignment.is_power_of_two());
    (value + alignment - 1) & !(alignment - 1)
}

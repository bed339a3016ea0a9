pub fn single_bit_index_u64(bit: u64) -> usize {
    bit.trailing_zeros() as usize
}

pub fn first_set_bit(bits: u64) -> u64 {
    1 << single_bit_index_u64(bits)
}

/// Iterates the set bits of `bits` from least to most significant, yielding each as a single-bit
/// mask.
pub fn set_bits(mut bits: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        if bits == 0 {
            return None;
        }

        let bit = first_set_bit(bits);
        bits &= bits - 1;
        Some(bit)
    })
}

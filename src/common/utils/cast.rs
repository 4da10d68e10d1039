use num_traits::ToPrimitive;

// Rounds a sampling coordinate to the nearest pixel index and clamps it into [0, len)
pub fn round_to_index(coord: f64, len: u32) -> u32 {
    debug_assert!(len > 0, "Cannot index into an empty axis");

    let max = len.saturating_sub(1);
    coord.round().clamp(0.0, max as f64).to_u32().unwrap_or(0)
}

#[cfg(test)]
mod cast_tests {
    use super::round_to_index;

    #[test]
    fn test_round_to_index() {
        assert_eq!(round_to_index(3.5, 10), 4);
        assert_eq!(round_to_index(3.49, 10), 3);
        assert_eq!(round_to_index(-2.0, 10), 0);
        assert_eq!(round_to_index(12.7, 10), 9);
        assert_eq!(round_to_index(f64::NAN, 10), 0);
    }
}

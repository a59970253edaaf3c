/// Generate a pseudorandom seed for the board's PRNG.
pub fn generate_seed() -> (u64, u64) {
    use byteorder::{ByteOrder, NativeEndian};
    use getrandom::getrandom;

    let mut seed = [0_u8; 16];

    // Without OS entropy, fall back to the clock; boards need not be unpredictable.
    if let Err(e) = getrandom(&mut seed) {
        log::warn!("getrandom failed ({}), seeding from the clock", e);
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        seed.copy_from_slice(&nanos.to_ne_bytes());
    }

    (
        NativeEndian::read_u64(&seed[0..8]),
        NativeEndian::read_u64(&seed[8..16]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeds_differ() {
        assert_ne!(generate_seed(), generate_seed());
    }
}

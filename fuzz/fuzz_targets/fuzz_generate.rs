#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use seqview_core::fibonacci;

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&data[..8]);
    // Cap the count for speed; keep negatives to hit the empty path
    let n = i64::from_le_bytes(bytes) % 2_000;

    let sequence = fibonacci::generate(n);

    if n <= 0 {
        assert!(sequence.is_empty(), "non-positive count must be empty");
        return;
    }

    assert_eq!(sequence.len() as i64, n);
    assert_eq!(sequence[0], BigUint::from(0u32));
    if n >= 2 {
        assert_eq!(sequence[1], BigUint::from(1u32));
    }
    for window in sequence.windows(3) {
        assert_eq!(window[2], &window[0] + &window[1]);
    }
});

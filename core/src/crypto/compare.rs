// ## 📂 File: `src/crypto/compare.rs`

/// Compare two byte strings in time independent of where they differ.
///
/// Contract:
/// - Length is checked first. On mismatch `b` is replaced by `a` so the
///   scan below still runs over every byte of `a`.
/// - Every byte pair is XORed into an accumulator; there is no early exit.
/// - The accumulator is tested against zero once, at the end.
#[inline(never)]
pub fn fixed_time_eq(a: &[u8], b: &[u8]) -> bool {
    let mut mismatch = u8::from(a.len() != b.len());
    let b = if mismatch != 0 { a } else { b };

    for (x, y) in a.iter().zip(b.iter()) {
        mismatch |= x ^ y;
    }

    mismatch == 0
}

//! Rolling polynomial string hashing
//!
//! Derives a reproducible 32-bit seed from a candidate designation. The hash
//! runs over UTF-16 code units with signed 32-bit wraparound, then takes the
//! absolute value, so environments that emulate 32-bit integers in floating
//! point can reproduce it exactly.

/// Hash a string to a nonnegative 32-bit seed
///
/// Computes `h = h·31 + code_unit` over the UTF-16 code units of `s` in
/// wrapping signed 32-bit arithmetic, then returns `|h|`. The wraparound
/// semantics are contractual, not incidental.
///
/// # Examples
/// ```
/// use prng::string_hash;
///
/// assert_eq!(string_hash(""), 0);
/// assert_eq!(string_hash("a"), 97);
/// ```
pub fn string_hash(s: &str) -> u32 {
    let mut h: i32 = 0;
    for unit in s.encode_utf16() {
        h = h.wrapping_mul(31).wrapping_add(i32::from(unit));
    }
    h.unsigned_abs()
}

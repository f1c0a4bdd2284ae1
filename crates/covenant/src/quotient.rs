/// Integer division rounding toward negative infinity.
///
/// For a non-negative numerator and a positive denominator this is plain
/// truncating division, which is what the covenant's `OP_DIV` computes for
/// every operand the distributor feeds it.
///
/// # Panics
///
/// Panics if `denominator` is zero, or on `i64::MIN / -1`.
pub fn quotient(numerator: i64, denominator: i64) -> i64 {
  let truncated = numerator / denominator;

  if numerator % denominator != 0 && (numerator < 0) != (denominator < 0) {
    truncated - 1
  } else {
    truncated
  }
}

//! The golden `i8 x i8 -> i32` matmul kernel on flat row-major slices.

/// Largest shared dimension for which the `i32` accumulator is exact for
/// every input in `[-128, 127]`. The largest product magnitude is
/// `(-128) * (-128) = 16384`, so this is `i32::MAX / 16384`.
///
/// Larger `K` is accepted but the sum is not saturated; it wraps modulo 2^32
/// like a 32-bit hardware accumulator.
pub const MAX_EXACT_K: usize = i32::MAX as usize / (128 * 128);

/// Computes `C = A @ B` into `c`, overwriting every element.
///
/// - `a`: row-major [m, k]
/// - `b`: row-major [k, n]
/// - `c`: row-major [m, n]
///
/// Each cell is the sum of `a[i][p] * b[p][j]` widened to `i32`, taken in
/// ascending `p`. `k == 0` yields all zeros. Does not allocate.
///
/// # Panics
/// Panics if any slice length does not match its dimensions.
pub fn matmul_ref_into(a: &[i8], b: &[i8], c: &mut [i32], m: usize, n: usize, k: usize) {
    assert_eq!(a.len(), m * k, "A: expected {}x{}={} elements", m, k, m * k);
    assert_eq!(b.len(), k * n, "B: expected {}x{}={} elements", k, n, k * n);
    assert_eq!(c.len(), m * n, "C: expected {}x{}={} elements", m, n, m * n);

    for i in 0..m {
        let row = &a[i * k..(i + 1) * k];
        for j in 0..n {
            let mut sum: i32 = 0;
            for (p, &av) in row.iter().enumerate() {
                sum = sum.wrapping_add(av as i32 * b[p * n + j] as i32);
            }
            c[i * n + j] = sum;
        }
    }
}

/// Allocating form of [`matmul_ref_into`]: returns the [m, n] product.
///
/// # Panics
/// Panics if `a` or `b` does not match its dimensions.
pub fn matmul_ref(a: &[i8], b: &[i8], m: usize, n: usize, k: usize) -> Vec<i32> {
    let mut c = vec![0i32; m * n];
    matmul_ref_into(a, b, &mut c, m, n, k);
    c
}

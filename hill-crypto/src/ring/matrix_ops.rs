use crate::errors::HillCipherError;
use crate::ring::{Matrix, Ring, Vector};

/// A·x where A is an m×n matrix and x is a length–n vector.
/// Returns an m‐vector with every entry normalized into `[0, modulus)`.
pub fn matrix_vector_mul(a: &Matrix, x: &[i64], ring: &Ring) -> Result<Vector, HillCipherError> {
    let m = a.len();
    if m == 0 {
        return Ok(Vec::new());
    }
    let n = a[0].len();
    if x.len() != n {
        return Err(HillCipherError::DimensionMismatch(format!(
            "Matrix columns ({}) must match vector length ({})",
            n,
            x.len()
        )));
    }

    let mut y = vec![0i64; m];
    for i in 0..m {
        if a[i].len() != n {
            return Err(HillCipherError::DimensionMismatch(format!(
                "Row {} has length {} but expected {}",
                i,
                a[i].len(),
                n
            )));
        }
        let mut sum = 0i64;
        for j in 0..n {
            let term = ring.mul(a[i][j], x[j]);
            sum = ring.add(sum, term);
        }
        y[i] = sum;
    }
    Ok(y)
}

/// x·A where x is a length–m row‐vector and A is m×n.
/// Returns a length–n row‐vector with every entry normalized into `[0, modulus)`.
pub fn vector_matrix_mul(x: &[i64], a: &Matrix, ring: &Ring) -> Result<Vector, HillCipherError> {
    let m = x.len();
    if m == 0 {
        return Ok(Vec::new());
    }
    if a.len() != m {
        return Err(HillCipherError::DimensionMismatch(format!(
            "Vector length ({}) must match matrix rows ({})",
            m,
            a.len()
        )));
    }
    let n = a[0].len();
    // sanity‐check ragged rows
    for (i, row) in a.iter().enumerate() {
        if row.len() != n {
            return Err(HillCipherError::DimensionMismatch(format!(
                "Row {} has length {} but expected {}",
                i,
                row.len(),
                n
            )));
        }
    }

    let mut y = vec![0i64; n];
    for j in 0..n {
        let mut sum = 0i64;
        for i in 0..m {
            let term = ring.mul(x[i], a[i][j]);
            sum = ring.add(sum, term);
        }
        y[j] = sum;
    }
    Ok(y)
}

/// Computes the matrix product `C = AB` modulo `m`, where `m` is the modulus of the ring.
///
/// # Errors
///
/// Returns `HillCipherError::DimensionMismatch` if the inner dimensions of the matrices do not match
/// or if rows within the matrices have inconsistent lengths.
pub fn matrix_mul(a: &Matrix, b: &Matrix, ring: &Ring) -> Result<Matrix, HillCipherError> {
    let n = a.len(); // rows in A
    if n == 0 {
        return Ok(Matrix::new());
    }
    let p = b[0].len(); // cols in B
    let m_common = a[0].len(); // cols in A

    if b.len() != m_common {
        return Err(HillCipherError::DimensionMismatch(format!(
            "Inner dimensions must match for matrix multiplication ({} vs {})",
            m_common,
            b.len()
        )));
    }

    let mut c = vec![vec![0; p]; n];

    for i in 0..n {
        if a[i].len() != m_common {
            return Err(HillCipherError::DimensionMismatch(format!(
                "Matrix A row {} has incorrect length (expected {})",
                i, m_common
            )));
        }
        for j in 0..p {
            let mut sum = 0i64;
            #[allow(clippy::needless_range_loop)]
            for k in 0..m_common {
                if b[k].len() != p {
                    return Err(HillCipherError::DimensionMismatch(format!(
                        "Matrix B row {} has incorrect length (expected {})",
                        k, p
                    )));
                }
                let term = ring.mul(a[i][k], b[k][j]);
                sum = ring.add(sum, term);
            }
            c[i][j] = sum;
        }
    }
    Ok(c)
}

/// Creates an identity matrix of size `n`.
pub fn identity_matrix(n: usize) -> Matrix {
    let mut identity = vec![vec![0; n]; n];
    #[allow(clippy::needless_range_loop)]
    for i in 0..n {
        identity[i][i] = 1;
    }
    identity
}

/// Returns a copy of `matrix` with the given row and column removed.
///
/// The input is never mutated; the result has one fewer row and column.
/// Only meaningful for matrices with at least 2 rows and columns.
pub fn minor(matrix: &Matrix, row: usize, col: usize) -> Matrix {
    matrix
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != row)
        .map(|(_, r)| {
            r.iter()
                .enumerate()
                .filter(|&(j, _)| j != col)
                .map(|(_, &val)| val)
                .collect()
        })
        .collect()
}

/// Determinant by cofactor expansion along the first row, over plain integers.
///
/// A 1×1 matrix is its sole entry. Callers are responsible for passing a
/// non-empty square matrix; the cipher validates squareness before any
/// determinant is taken. Exponential in the dimension, which is fine for
/// the small key sizes this cipher is used with.
pub fn determinant(matrix: &Matrix) -> i64 {
    if matrix.len() == 1 {
        return matrix[0][0];
    }

    let mut det_sum = 0i64;
    for (i, &entry) in matrix[0].iter().enumerate() {
        let sign = if i % 2 == 0 { 1 } else { -1 };
        det_sum += entry * sign * determinant(&minor(matrix, 0, i));
    }
    det_sum
}

/// Attempts to find the inverse of a square matrix modulo `m` by the
/// adjoint/determinant method.
///
/// Entry (i, j) of the inverse is the (j, i) cofactor scaled by the modular
/// inverse of the determinant, so every entry comes out in `[0, modulus)`.
///
/// # Errors
///
/// Returns `HillCipherError::NotSquare` if the matrix is not square.
/// Returns `HillCipherError::NoInverse` (from [`Ring::inv`]) when the
/// determinant shares a factor with the modulus.
pub fn matrix_inverse(matrix: &Matrix, ring: &Ring) -> Result<Matrix, HillCipherError> {
    let n = matrix.len();
    // empty = empty
    if n == 0 {
        return Ok(Vec::new());
    }
    // check square
    for row in matrix.iter() {
        if row.len() != n {
            return Err(HillCipherError::NotSquare(
                "matrix_inverse: matrix must be square".into(),
            ));
        }
    }

    // the determinant is the same for every cell, so invert it once
    let det_inv = ring.inv(determinant(matrix))?;

    if n == 1 {
        return Ok(vec![vec![det_inv]]);
    }

    let mut inverse = vec![vec![0i64; n]; n];
    for (i, row) in inverse.iter_mut().enumerate() {
        for (j, entry) in row.iter_mut().enumerate() {
            // row and column swap for the adjoint (cofactor transpose)
            let sign = if (i + j) % 2 == 0 { 1 } else { -1 };
            let cofactor = sign * determinant(&minor(matrix, j, i));
            *entry = ring.mul(cofactor, det_inv);
        }
    }

    Ok(inverse)
}

//! Dense polynomials over GF(p), coefficients lowest degree first.

use super::prime::PrimeField;

/// Drop leading (highest-degree) zero coefficients.
pub(crate) fn trim(mut coeffs: Vec<u64>) -> Vec<u64> {
    while coeffs.last() == Some(&0) {
        coeffs.pop();
    }
    coeffs
}

/// Remainder of `a` divided by `b`. `b` must be trimmed and non-empty.
pub(crate) fn rem(field: &PrimeField, a: &[u64], b: &[u64]) -> Vec<u64> {
    let mut r = trim(a.to_vec());
    let db = b.len() - 1;
    let lead_inv = field.inv(b[db]).unwrap_or(1);

    while r.len() > db {
        let dr = r.len() - 1;
        let factor = field.mul(r[dr], lead_inv);
        let shift = dr - db;
        for (i, &c) in b.iter().enumerate() {
            r[shift + i] = field.sub(r[shift + i], field.mul(factor, c));
        }
        r = trim(r);
    }
    r
}

/// Greatest common divisor, up to a constant factor.
pub(crate) fn gcd(field: &PrimeField, a: &[u64], b: &[u64]) -> Vec<u64> {
    let mut a = trim(a.to_vec());
    let mut b = trim(b.to_vec());
    while !b.is_empty() {
        let r = rem(field, &a, &b);
        a = b;
        b = r;
    }
    a
}

/// Render as `2x^2 + x + 3`, skipping zero terms. Zero renders as `0`.
pub(crate) fn format_polynomial(coeffs: &[u64]) -> String {
    let terms: Vec<String> = coeffs
        .iter()
        .enumerate()
        .rev()
        .filter(|&(_, &c)| c != 0)
        .map(|(degree, &c)| match (degree, c) {
            (0, c) => c.to_string(),
            (1, 1) => "x".to_string(),
            (1, c) => format!("{c}x"),
            (d, 1) => format!("x^{d}"),
            (d, c) => format!("{c}x^{d}"),
        })
        .collect();

    if terms.is_empty() {
        "0".to_string()
    } else {
        terms.join(" + ")
    }
}

//! GF(p^m) as polynomials modulo an irreducible modulus.
//!
//! Elements are coefficient vectors of length `m`, lowest degree first.
//! Every element also has an integer encoding `sum(c_i * p^i)`, which
//! orders the primitive element search and keys the logarithm lookup.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::poly::{format_polynomial, gcd, trim};
use super::prime::{prime_factors, PrimeField};
use super::MAX_FIELD_ORDER;
use crate::data::{Entry, Key};
use crate::error::ZechtabError;
use crate::Result;

/// An element of an extension field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldElement {
    /// Coefficients, lowest degree first
    pub coeffs: Vec<u64>,
}

impl FieldElement {
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0)
    }

    /// Polynomial form, e.g. `x^2 + 2x`.
    pub fn as_polynomial(&self) -> String {
        format_polynomial(&self.coeffs)
    }

    /// Coefficients from the highest degree down.
    pub fn digits(&self) -> Vec<u64> {
        self.coeffs.iter().rev().copied().collect()
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_polynomial())
    }
}

/// GF(p^m).
#[derive(Debug, Clone)]
pub struct ExtensionField {
    base: PrimeField,
    /// Monic modulus, lowest degree first, length `degree + 1`
    modulus: Vec<u64>,
    degree: usize,
    order: u64,
    primitive: FieldElement,
}

impl ExtensionField {
    /// Build GF(p^m) from a modulus given highest degree first.
    ///
    /// `[1, 0, 3, 2]` over GF(5) is `x^3 + 3x + 2`. A non-monic modulus is
    /// scaled to monic.
    pub fn new(p: u64, modulus: &[u64]) -> Result<Self> {
        let base = PrimeField::new(p)?;

        if modulus.len() < 2 {
            return Err(ZechtabError::InvalidModulus(
                "degree must be at least 1".to_string(),
            ));
        }
        if let Some(&c) = modulus.iter().find(|&&c| c >= p) {
            return Err(ZechtabError::InvalidModulus(format!(
                "coefficient {c} is not in GF({p})"
            )));
        }
        let lead_inv = base.inv(modulus[0]).ok_or_else(|| {
            ZechtabError::InvalidModulus("leading coefficient must be non-zero".to_string())
        })?;

        let degree = modulus.len() - 1;
        let order = u32::try_from(degree)
            .ok()
            .and_then(|d| p.checked_pow(d))
            .filter(|&order| order <= MAX_FIELD_ORDER)
            .ok_or(ZechtabError::FieldTooLarge {
                order: p.saturating_pow(u32::try_from(degree).unwrap_or(u32::MAX)),
                limit: MAX_FIELD_ORDER,
            })?;

        let monic: Vec<u64> = modulus
            .iter()
            .rev()
            .map(|&c| base.mul(c, lead_inv))
            .collect();

        if !is_irreducible(&base, &monic) {
            return Err(ZechtabError::ReducibleModulus(format_polynomial(&monic)));
        }

        let mut field = Self {
            base,
            modulus: monic,
            degree,
            order,
            primitive: FieldElement {
                coeffs: vec![0; degree],
            },
        };
        let primitive = field
            .find_primitive()
            .ok_or_else(|| ZechtabError::ReducibleModulus(format_polynomial(&field.modulus)))?;
        field.primitive = primitive;

        debug!(
            p,
            degree,
            modulus = %format_polynomial(&field.modulus),
            primitive = %field.primitive,
            "constructed extension field"
        );
        Ok(field)
    }

    /// Characteristic.
    pub fn p(&self) -> u64 {
        self.base.p()
    }

    /// Extension degree `m`.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Number of elements, `p^m`.
    pub fn order(&self) -> u64 {
        self.order
    }

    /// The monic modulus in polynomial form.
    pub fn modulus_polynomial(&self) -> String {
        format_polynomial(&self.modulus)
    }

    pub fn zero(&self) -> FieldElement {
        FieldElement {
            coeffs: vec![0; self.degree],
        }
    }

    pub fn one(&self) -> FieldElement {
        let mut coeffs = vec![0; self.degree];
        coeffs[0] = 1;
        FieldElement { coeffs }
    }

    /// The primitive element all logarithms are taken to.
    pub fn primitive(&self) -> &FieldElement {
        &self.primitive
    }

    /// Build an element from coefficients given highest degree first.
    pub fn construct_from_digits(&self, digits: &[u64]) -> Result<FieldElement> {
        if digits.len() != self.degree {
            return Err(ZechtabError::InvalidDigits(format!(
                "expected {} digits, got {}",
                self.degree,
                digits.len()
            )));
        }
        if let Some(&d) = digits.iter().find(|&&d| d >= self.p()) {
            return Err(ZechtabError::InvalidDigits(format!(
                "digit {d} is not in GF({})",
                self.p()
            )));
        }
        Ok(FieldElement {
            coeffs: digits.iter().rev().copied().collect(),
        })
    }

    /// Element with integer encoding `index`.
    pub fn element_from_index(&self, mut index: u64) -> FieldElement {
        let p = self.p();
        let coeffs = (0..self.degree)
            .map(|_| {
                let c = index % p;
                index /= p;
                c
            })
            .collect();
        FieldElement { coeffs }
    }

    /// Integer encoding of an element.
    pub fn index_of(&self, el: &FieldElement) -> u64 {
        el.coeffs
            .iter()
            .rev()
            .fold(0, |acc, &c| acc * self.p() + c)
    }

    pub fn add(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        FieldElement {
            coeffs: a
                .coeffs
                .iter()
                .zip(&b.coeffs)
                .map(|(&x, &y)| self.base.add(x, y))
                .collect(),
        }
    }

    pub fn mul(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        FieldElement {
            coeffs: mul_mod(&self.base, &a.coeffs, &b.coeffs, &self.modulus),
        }
    }

    pub fn pow(&self, a: &FieldElement, exp: u64) -> FieldElement {
        FieldElement {
            coeffs: pow_mod(&self.base, &a.coeffs, exp, &self.modulus),
        }
    }

    /// Discrete logarithm of `el` to the primitive base, `None` for zero.
    pub fn primitive_power(&self, el: &FieldElement) -> Option<u64> {
        if el.is_zero() {
            return None;
        }
        let mut current = self.one();
        for n in 0..self.order - 1 {
            if current == *el {
                return Some(n);
            }
            current = self.mul(&current, &self.primitive);
        }
        None
    }

    /// The Zech logarithm table.
    ///
    /// Starts with `Infinity -> 0` (1 + 0 = g^0), followed by `n -> Z(n)`
    /// for every exponent `n` in `0..p^m - 1`, where `1 + g^n = g^Z(n)`.
    /// `Z(n)` is `Infinity` when `g^n = -1`.
    pub fn zech_log_table(&self) -> Vec<Entry> {
        let group_order = self.order - 1;
        let one = self.one();

        let mut powers = Vec::with_capacity(group_order as usize);
        let mut logs: HashMap<u64, u64> = HashMap::with_capacity(group_order as usize);
        let mut current = one.clone();
        for n in 0..group_order {
            logs.insert(self.index_of(&current), n);
            let next = self.mul(&current, &self.primitive);
            powers.push(current);
            current = next;
        }

        let mut entries = Vec::with_capacity(powers.len() + 1);
        entries.push(Entry::new(Key::Infinity, Key::Finite(0)));
        for (n, power) in powers.iter().enumerate() {
            let sum = self.add(&one, power);
            let value = if sum.is_zero() {
                Key::Infinity
            } else {
                Key::from(logs.get(&self.index_of(&sum)).copied())
            };
            entries.push(Entry::new(Key::Finite(n as u64), value));
        }

        debug!(entries = entries.len(), "built zech logarithm table");
        entries
    }

    /// First element, by integer encoding, whose order is `p^m - 1`.
    fn find_primitive(&self) -> Option<FieldElement> {
        let group_order = self.order - 1;
        let factors = prime_factors(group_order);
        let one = self.one();

        (1..self.order)
            .map(|index| self.element_from_index(index))
            .find(|el| {
                self.pow(el, group_order) == one
                    && factors
                        .iter()
                        .all(|&r| self.pow(el, group_order / r) != one)
            })
    }
}

/// Product of two residues modulo a monic modulus (lowest degree first).
fn mul_mod(field: &PrimeField, a: &[u64], b: &[u64], modulus: &[u64]) -> Vec<u64> {
    let degree = modulus.len() - 1;
    let mut product = vec![0; 2 * degree];

    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        for (j, &y) in b.iter().enumerate() {
            product[i + j] = field.add(product[i + j], field.mul(x, y));
        }
    }

    // x^k = x^(k - degree) * (x^degree), and x^degree = -(modulus without its lead)
    for k in (degree..product.len()).rev() {
        let c = product[k];
        if c == 0 {
            continue;
        }
        product[k] = 0;
        for (t, &m) in modulus[..degree].iter().enumerate() {
            let idx = k - degree + t;
            product[idx] = field.sub(product[idx], field.mul(c, m));
        }
    }

    product.truncate(degree);
    product
}

fn pow_mod(field: &PrimeField, a: &[u64], mut exp: u64, modulus: &[u64]) -> Vec<u64> {
    let degree = modulus.len() - 1;
    let mut result = vec![0; degree];
    result[0] = 1;
    let mut base = a.to_vec();
    base.resize(degree, 0);

    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(field, &result, &base, modulus);
        }
        base = mul_mod(field, &base, &base, modulus);
        exp >>= 1;
    }
    result
}

/// Ben-Or irreducibility test on a monic polynomial (lowest degree first).
///
/// `f` of degree `m` is irreducible iff `gcd(f, x^(p^i) - x) = 1` for every
/// `i` in `1..=m/2`.
fn is_irreducible(field: &PrimeField, monic: &[u64]) -> bool {
    let degree = monic.len() - 1;
    if degree == 1 {
        return true;
    }

    let mut x = vec![0; degree];
    x[1] = 1;

    let mut h = x.clone();
    for _ in 0..degree / 2 {
        h = pow_mod(field, &h, field.p(), monic);
        let mut diff = h.clone();
        diff[1] = field.sub(diff[1], 1);
        let g = gcd(field, monic, &trim(diff));
        if g.len() != 1 {
            return false;
        }
    }
    true
}

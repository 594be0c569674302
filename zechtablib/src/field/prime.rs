//! Arithmetic in GF(p).

use serde::{Deserialize, Serialize};

use super::{MAX_FIELD_ORDER, MAX_TABLE_PRIME};
use crate::error::ZechtabError;
use crate::Result;

/// The prime field of integers modulo `p`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimeField {
    p: u64,
}

/// A full binary operation table over GF(p).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationTable {
    /// Operator shown in the corner cell (`+`, `*`)
    pub operator: String,
    /// Row/column operands, in order
    pub operands: Vec<u64>,
    /// `cells[y][x]` is `x op y`
    pub cells: Vec<Vec<u64>>,
}

impl PrimeField {
    pub fn new(p: u64) -> Result<Self> {
        if p > MAX_FIELD_ORDER {
            return Err(ZechtabError::FieldTooLarge {
                order: p,
                limit: MAX_FIELD_ORDER,
            });
        }
        if !is_prime(p) {
            return Err(ZechtabError::NotPrime(p));
        }
        Ok(Self { p })
    }

    /// The characteristic.
    pub fn p(&self) -> u64 {
        self.p
    }

    pub fn add(&self, a: u64, b: u64) -> u64 {
        (a + b) % self.p
    }

    pub fn sub(&self, a: u64, b: u64) -> u64 {
        (a + self.p - b % self.p) % self.p
    }

    pub fn neg(&self, a: u64) -> u64 {
        self.sub(0, a)
    }

    pub fn mul(&self, a: u64, b: u64) -> u64 {
        (a * b) % self.p
    }

    /// Multiplicative inverse, `None` for zero.
    pub fn inv(&self, a: u64) -> Option<u64> {
        let a = a % self.p;
        if a == 0 {
            return None;
        }
        // Fermat: a^(p-2)
        let mut result = 1;
        let mut base = a;
        let mut exp = self.p - 2;
        while exp > 0 {
            if exp & 1 == 1 {
                result = self.mul(result, base);
            }
            base = self.mul(base, base);
            exp >>= 1;
        }
        Some(result)
    }

    pub fn addition_table(&self) -> Result<OperationTable> {
        self.operation_table("+", |x, y| self.add(x, y))
    }

    pub fn multiplication_table(&self) -> Result<OperationTable> {
        self.operation_table("*", |x, y| self.mul(x, y))
    }

    /// p×p cells, so p is capped at [`MAX_TABLE_PRIME`].
    fn operation_table(
        &self,
        operator: &str,
        op: impl Fn(u64, u64) -> u64,
    ) -> Result<OperationTable> {
        if self.p > MAX_TABLE_PRIME {
            return Err(ZechtabError::FieldTooLarge {
                order: self.p,
                limit: MAX_TABLE_PRIME,
            });
        }

        let operands: Vec<u64> = (0..self.p).collect();
        let cells = operands
            .iter()
            .map(|&y| operands.iter().map(|&x| op(x, y)).collect())
            .collect();

        Ok(OperationTable {
            operator: operator.to_string(),
            operands,
            cells,
        })
    }
}

/// Trial-division primality test.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

/// Distinct prime factors of `n`, ascending.
pub fn prime_factors(mut n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            factors.push(d);
            while n % d == 0 {
                n /= d;
            }
        }
        d += 1;
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

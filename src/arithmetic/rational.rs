use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use nalgebra::Vector3;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// Arbitrary-precision rational scalar.
pub type Rat = BigRational;

/// Whole-number rational.
pub fn rat(n: i64) -> Rat {
    BigRational::from_integer(BigInt::from(n))
}

/// Fraction `n / d`.
pub fn rat_frac(n: i64, d: i64) -> Rat {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

/// A rational row 3-vector.
///
/// Row convention: vectors transform by right multiplication with a `QMat3`,
/// matching the way edge shift vectors compose with basis changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QVec3(pub [Rat; 3]);

impl QVec3 {
    pub fn zeros() -> Self {
        QVec3([Rat::zero(), Rat::zero(), Rat::zero()])
    }

    pub fn from_ints(v: Vector3<i32>) -> Self {
        QVec3([rat(v.x as i64), rat(v.y as i64), rat(v.z as i64)])
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|x| x.is_zero())
    }

    /// Sign of the first nonzero component, or zero if all components vanish.
    /// This is the primitive behind every lexicographic comparison of shift
    /// vectors in the canonicalization code.
    pub fn leading_sign(&self) -> i32 {
        for x in &self.0 {
            if x.is_negative() {
                return -1;
            } else if x.is_positive() {
                return 1;
            }
        }
        0
    }

    /// Lexicographic comparison via the leading sign of the difference.
    pub fn lex_cmp(&self, other: &QVec3) -> Ordering {
        match (self.clone() - other.clone()).leading_sign() {
            -1 => Ordering::Less,
            1 => Ordering::Greater,
            _ => Ordering::Equal,
        }
    }

    /// Reduces every component modulo one into `[0, 1)`.
    pub fn mod1(&self) -> QVec3 {
        QVec3(self.0.clone().map(|x| x.clone() - x.floor()))
    }

    pub fn is_integral(&self) -> bool {
        self.0.iter().all(|x| x.is_integer())
    }

    /// Converts to integer coordinates; `None` unless all components are
    /// whole numbers fitting an `i32`.
    pub fn to_int_vector(&self) -> Option<Vector3<i32>> {
        let mut out = [0i32; 3];
        for (i, x) in self.0.iter().enumerate() {
            if !x.is_integer() {
                return None;
            }
            out[i] = i32::try_from(&x.to_integer()).ok()?;
        }
        Some(Vector3::new(out[0], out[1], out[2]))
    }

    pub fn to_f64(&self) -> Vector3<f64> {
        Vector3::new(
            rat_to_f64(&self.0[0]),
            rat_to_f64(&self.0[1]),
            rat_to_f64(&self.0[2]),
        )
    }

    pub fn scaled(&self, s: &Rat) -> QVec3 {
        QVec3(self.0.clone().map(|x| x * s.clone()))
    }
}

pub fn rat_to_f64(x: &Rat) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}

impl Add for QVec3 {
    type Output = QVec3;
    fn add(self, rhs: QVec3) -> QVec3 {
        let [a0, a1, a2] = self.0;
        let [b0, b1, b2] = rhs.0;
        QVec3([a0 + b0, a1 + b1, a2 + b2])
    }
}

impl Sub for QVec3 {
    type Output = QVec3;
    fn sub(self, rhs: QVec3) -> QVec3 {
        let [a0, a1, a2] = self.0;
        let [b0, b1, b2] = rhs.0;
        QVec3([a0 - b0, a1 - b1, a2 - b2])
    }
}

impl Neg for QVec3 {
    type Output = QVec3;
    fn neg(self) -> QVec3 {
        QVec3(self.0.map(|x| -x))
    }
}

impl fmt::Display for QVec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{},{}]", self.0[0], self.0[1], self.0[2])
    }
}

/// A rational 3x3 matrix, stored row-major and acting on row vectors from the
/// right: `v' = v * M`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QMat3(pub [QVec3; 3]);

impl QMat3 {
    pub fn identity() -> Self {
        QMat3([
            QVec3([Rat::one(), Rat::zero(), Rat::zero()]),
            QVec3([Rat::zero(), Rat::one(), Rat::zero()]),
            QVec3([Rat::zero(), Rat::zero(), Rat::one()]),
        ])
    }

    pub fn zeros() -> Self {
        QMat3([QVec3::zeros(), QVec3::zeros(), QVec3::zeros()])
    }

    pub fn from_rows(r0: QVec3, r1: QVec3, r2: QVec3) -> Self {
        QMat3([r0, r1, r2])
    }

    pub fn row(&self, i: usize) -> &QVec3 {
        &self.0[i]
    }

    pub fn get(&self, i: usize, j: usize) -> &Rat {
        &self.0[i].0[j]
    }

    pub fn determinant(&self) -> Rat {
        let m = |i: usize, j: usize| self.get(i, j).clone();
        m(0, 0) * (m(1, 1) * m(2, 2) - m(1, 2) * m(2, 1))
            - m(0, 1) * (m(1, 0) * m(2, 2) - m(1, 2) * m(2, 0))
            + m(0, 2) * (m(1, 0) * m(2, 1) - m(1, 1) * m(2, 0))
    }

    /// Matrix inverse via the adjugate; `None` for singular input.
    pub fn try_inverse(&self) -> Option<QMat3> {
        let det = self.determinant();
        if det.is_zero() {
            return None;
        }
        let m = |i: usize, j: usize| self.get(i, j).clone();
        let cof = |i: usize, j: usize| {
            let (r0, r1) = match i {
                0 => (1, 2),
                1 => (0, 2),
                _ => (0, 1),
            };
            let (c0, c1) = match j {
                0 => (1, 2),
                1 => (0, 2),
                _ => (0, 1),
            };
            let minor = m(r0, c0) * m(r1, c1) - m(r0, c1) * m(r1, c0);
            if (i + j) % 2 == 0 {
                minor
            } else {
                -minor
            }
        };
        // Adjugate is the transposed cofactor matrix.
        let mut rows = [QVec3::zeros(), QVec3::zeros(), QVec3::zeros()];
        for i in 0..3 {
            for j in 0..3 {
                rows[i].0[j] = cof(j, i) / det.clone();
            }
        }
        Some(QMat3(rows))
    }

    pub fn transpose(&self) -> QMat3 {
        let mut rows = [QVec3::zeros(), QVec3::zeros(), QVec3::zeros()];
        for i in 0..3 {
            for j in 0..3 {
                rows[i].0[j] = self.get(j, i).clone();
            }
        }
        QMat3(rows)
    }

    pub fn is_integral(&self) -> bool {
        self.0.iter().all(|r| r.is_integral())
    }

    /// True if the matrix has integer entries and determinant plus or minus
    /// one, i.e. maps the translation lattice bijectively onto itself.
    pub fn is_unimodular(&self) -> bool {
        self.is_integral() && self.determinant().abs().is_one()
    }

    /// Converts to an integer matrix; `None` unless all entries are whole.
    pub fn to_int_matrix(&self) -> Option<nalgebra::Matrix3<i32>> {
        let r0 = self.0[0].to_int_vector()?;
        let r1 = self.0[1].to_int_vector()?;
        let r2 = self.0[2].to_int_vector()?;
        Some(nalgebra::Matrix3::new(
            r0.x, r0.y, r0.z, r1.x, r1.y, r1.z, r2.x, r2.y, r2.z,
        ))
    }

    pub fn to_f64(&self) -> nalgebra::Matrix3<f64> {
        let r0 = self.0[0].to_f64();
        let r1 = self.0[1].to_f64();
        let r2 = self.0[2].to_f64();
        nalgebra::Matrix3::new(r0.x, r0.y, r0.z, r1.x, r1.y, r1.z, r2.x, r2.y, r2.z)
    }
}

impl Mul<&QMat3> for &QVec3 {
    type Output = QVec3;
    fn mul(self, m: &QMat3) -> QVec3 {
        let mut out = QVec3::zeros();
        for j in 0..3 {
            let mut acc = Rat::zero();
            for i in 0..3 {
                acc += self.0[i].clone() * m.get(i, j).clone();
            }
            out.0[j] = acc;
        }
        out
    }
}

impl Mul<&QMat3> for &QMat3 {
    type Output = QMat3;
    fn mul(self, rhs: &QMat3) -> QMat3 {
        QMat3([
            &self.0[0] * rhs,
            &self.0[1] * rhs,
            &self.0[2] * rhs,
        ])
    }
}

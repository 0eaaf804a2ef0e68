use num_traits::{Signed, Zero};

use crate::arithmetic::rational::{QVec3, Rat};

/// A dense matrix of arbitrary-precision rationals.
///
/// Used for the barycentric equilibrium system, whose size is the number of
/// nodes in the repeat unit. The fixed-size `QMat3` type covers everything
/// basis-shaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QMatrix {
    rows: usize,
    cols: usize,
    data: Vec<Rat>,
}

impl QMatrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        QMatrix {
            rows,
            cols,
            data: vec![Rat::zero(); rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> &Rat {
        &self.data[i * self.cols + j]
    }

    pub fn set(&mut self, i: usize, j: usize, value: Rat) {
        self.data[i * self.cols + j] = value;
    }

    pub fn add_to(&mut self, i: usize, j: usize, value: Rat) {
        let x = self.get(i, j).clone();
        self.set(i, j, x + value);
    }

    /// Solves `A * X = B` exactly for a system with at least as many
    /// equations as unknowns. Returns `None` if the coefficient matrix does
    /// not have full column rank or the system is inconsistent.
    pub fn solve(a: &QMatrix, b: &QMatrix) -> Option<QMatrix> {
        assert_eq!(a.rows, b.rows, "row count mismatch");
        let m = a.rows;
        let n = a.cols;
        let k = b.cols;

        // Augmented matrix [A | B], eliminated in place.
        let mut aug = QMatrix::zeros(m, n + k);
        for i in 0..m {
            for j in 0..n {
                aug.set(i, j, a.get(i, j).clone());
            }
            for j in 0..k {
                aug.set(i, n + j, b.get(i, j).clone());
            }
        }

        let mut pivot_row = 0;
        for col in 0..n {
            // Find a row with a nonzero entry in this column.
            let mut found = None;
            for r in pivot_row..m {
                if !aug.get(r, col).is_zero() {
                    found = Some(r);
                    break;
                }
            }
            let r = found?;
            if r != pivot_row {
                for j in 0..n + k {
                    let tmp = aug.get(r, j).clone();
                    aug.set(r, j, aug.get(pivot_row, j).clone());
                    aug.set(pivot_row, j, tmp);
                }
            }
            let pivot = aug.get(pivot_row, col).clone();
            for j in 0..n + k {
                let x = aug.get(pivot_row, j).clone();
                aug.set(pivot_row, j, x / pivot.clone());
            }
            for r in 0..m {
                if r != pivot_row && !aug.get(r, col).is_zero() {
                    let factor = aug.get(r, col).clone();
                    for j in 0..n + k {
                        let x = aug.get(r, j).clone();
                        let p = aug.get(pivot_row, j).clone();
                        aug.set(r, j, x - factor.clone() * p);
                    }
                }
            }
            pivot_row += 1;
        }
        if pivot_row < n {
            return None;
        }

        // Remaining rows must have vanished, otherwise the system is
        // inconsistent.
        for r in n..m {
            for j in 0..n + k {
                if !aug.get(r, j).is_zero() {
                    return None;
                }
            }
        }

        let mut x = QMatrix::zeros(n, k);
        for i in 0..n {
            for j in 0..k {
                x.set(i, j, aug.get(i, n + j).clone());
            }
        }
        Some(x)
    }
}

/// Rank of a set of rational row vectors.
pub fn rank_of_rows(rows: &[QVec3]) -> usize {
    let mut work: Vec<QVec3> = rows.to_vec();
    let mut rank = 0;
    for col in 0..3 {
        let mut found = None;
        for (r, row) in work.iter().enumerate().skip(rank) {
            if !row.0[col].is_zero() {
                found = Some(r);
                break;
            }
        }
        let Some(r) = found else { continue };
        work.swap(rank, r);
        let pivot_row = work[rank].clone();
        let pivot = pivot_row.0[col].clone();
        for row in work.iter_mut().skip(rank + 1) {
            if !row.0[col].is_zero() {
                let factor = row.0[col].clone() / pivot.clone();
                *row = row.clone() - pivot_row.scaled(&factor);
            }
        }
        rank += 1;
        if rank == 3 {
            break;
        }
    }
    rank
}

/// Triangulates a set of rational row vectors using only lattice-preserving
/// row operations (swap, negate, add an integer multiple of another row).
///
/// The returned rows are in echelon form with positive leading entries and
/// generate the same group under integer combinations as the input rows did.
/// This is how an integral basis is extracted for an extended translation
/// group: stack the discovered fractional translations on top of the identity
/// and take the first three result rows.
pub fn hermite_triangulate(rows: &[QVec3]) -> Vec<QVec3> {
    let mut work: Vec<QVec3> = rows.iter().filter(|r| !r.is_zero()).cloned().collect();
    let mut done = 0;
    for col in 0..3 {
        loop {
            // Pick the row with the smallest nonzero entry in this column as
            // the reduction pivot.
            let mut best: Option<usize> = None;
            for (r, row) in work.iter().enumerate().skip(done) {
                if row.0[col].is_zero() {
                    continue;
                }
                match best {
                    None => best = Some(r),
                    Some(b) => {
                        if row.0[col].abs() < work[b].0[col].abs() {
                            best = Some(r);
                        }
                    }
                }
            }
            let Some(b) = best else { break };
            work.swap(done, b);
            if work[done].0[col].is_negative() {
                work[done] = -work[done].clone();
            }
            let pivot_row = work[done].clone();
            let pivot = pivot_row.0[col].clone();
            let mut reduced_all = true;
            for row in work.iter_mut().skip(done + 1) {
                if row.0[col].is_zero() {
                    continue;
                }
                let quot = (row.0[col].clone() / pivot.clone()).floor();
                *row = row.clone() - pivot_row.scaled(&quot);
                if !row.0[col].is_zero() {
                    reduced_all = false;
                }
            }
            if reduced_all {
                // Also reduce the rows above so entries over each pivot are
                // smaller than the pivot.
                for r in 0..done {
                    let quot = (work[r].0[col].clone() / pivot.clone()).floor();
                    if !quot.is_zero() {
                        work[r] = work[r].clone() - pivot_row.scaled(&quot);
                    }
                }
                done += 1;
                break;
            }
        }
        work.retain(|r| !r.is_zero());
        if done >= work.len() {
            break;
        }
    }
    work.truncate(done);
    work
}

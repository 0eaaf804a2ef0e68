use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::CrystnetError;
use crate::symmetry::operations::SymOp;
use crate::Result;

/// The seven crystal systems of three-dimensional space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrystalSystem {
    Triclinic,
    Monoclinic,
    Orthorhombic,
    Tetragonal,
    Trigonal,
    Hexagonal,
    Cubic,
}

impl fmt::Display for CrystalSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CrystalSystem::Triclinic => "triclinic",
            CrystalSystem::Monoclinic => "monoclinic",
            CrystalSystem::Orthorhombic => "orthorhombic",
            CrystalSystem::Tetragonal => "tetragonal",
            CrystalSystem::Trigonal => "trigonal",
            CrystalSystem::Hexagonal => "hexagonal",
            CrystalSystem::Cubic => "cubic",
        };
        write!(f, "{}", name)
    }
}

/// A crystallographic point group in Hermann-Mauguin notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointGroup {
    pub symbol: &'static str,
    pub system: CrystalSystem,
    pub order: usize,
}

impl fmt::Display for PointGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// The crystallographic type of a single rotation part, determined by its
/// determinant and trace: 1, 2, 3, 4, 6 for proper rotations and -1, -2
/// (mirror), -3, -4, -6 for improper ones.
pub fn operation_type(op: &SymOp) -> Result<i32> {
    let det = op.determinant();
    let trace = op.trace();
    let t = match (det, trace) {
        (1, 3) => 1,
        (1, -1) => 2,
        (1, 0) => 3,
        (1, 1) => 4,
        (1, 2) => 6,
        (-1, -3) => -1,
        (-1, 1) => -2,
        (-1, 0) => -3,
        (-1, -1) => -4,
        (-1, -2) => -6,
        _ => {
            return Err(CrystnetError::Internal(format!(
                "rotation part with determinant {} and trace {}",
                det, trace
            )))
        }
    };
    Ok(t)
}

/// Counts of each operation type: (2, 3, 4, 6, -1, m, -3, -4, -6).
type Signature = (u32, u32, u32, u32, u32, u32, u32, u32, u32);

fn signature(ops: &[SymOp]) -> Result<Signature> {
    let mut s = (0u32, 0u32, 0u32, 0u32, 0u32, 0u32, 0u32, 0u32, 0u32);
    let mut identity_count = 0u32;
    for op in ops {
        match operation_type(op)? {
            1 => identity_count += 1,
            2 => s.0 += 1,
            3 => s.1 += 1,
            4 => s.2 += 1,
            6 => s.3 += 1,
            -1 => s.4 += 1,
            -2 => s.5 += 1,
            -3 => s.6 += 1,
            -4 => s.7 += 1,
            -6 => s.8 += 1,
            _ => unreachable!(),
        }
    }
    if identity_count != 1 {
        return Err(CrystnetError::Internal(format!(
            "point group with {} identity operations",
            identity_count
        )));
    }
    Ok(s)
}

/// Identifies the point group generated by the rotation parts of the given
/// operations, by matching operation-type counts against the 32 groups.
pub fn classify_point_group(ops: &[SymOp]) -> Result<PointGroup> {
    use CrystalSystem::*;
    let sig = signature(ops)?;
    // (c2, c3, c4, c6, ci, cm, cs3, cs4, cs6) excluding the identity
    let group = match sig {
        (0, 0, 0, 0, 0, 0, 0, 0, 0) => ("1", Triclinic, 1),
        (0, 0, 0, 0, 1, 0, 0, 0, 0) => ("-1", Triclinic, 2),
        (1, 0, 0, 0, 0, 0, 0, 0, 0) => ("2", Monoclinic, 2),
        (0, 0, 0, 0, 0, 1, 0, 0, 0) => ("m", Monoclinic, 2),
        (1, 0, 0, 0, 1, 1, 0, 0, 0) => ("2/m", Monoclinic, 4),
        (3, 0, 0, 0, 0, 0, 0, 0, 0) => ("222", Orthorhombic, 4),
        (1, 0, 0, 0, 0, 2, 0, 0, 0) => ("mm2", Orthorhombic, 4),
        (3, 0, 0, 0, 1, 3, 0, 0, 0) => ("mmm", Orthorhombic, 8),
        (1, 0, 2, 0, 0, 0, 0, 0, 0) => ("4", Tetragonal, 4),
        (1, 0, 0, 0, 0, 0, 0, 2, 0) => ("-4", Tetragonal, 4),
        (1, 0, 2, 0, 1, 1, 0, 2, 0) => ("4/m", Tetragonal, 8),
        (5, 0, 2, 0, 0, 0, 0, 0, 0) => ("422", Tetragonal, 8),
        (1, 0, 2, 0, 0, 4, 0, 0, 0) => ("4mm", Tetragonal, 8),
        (3, 0, 0, 0, 0, 2, 0, 2, 0) => ("-42m", Tetragonal, 8),
        (5, 0, 2, 0, 1, 5, 0, 2, 0) => ("4/mmm", Tetragonal, 16),
        (0, 2, 0, 0, 0, 0, 0, 0, 0) => ("3", Trigonal, 3),
        (0, 2, 0, 0, 1, 0, 2, 0, 0) => ("-3", Trigonal, 6),
        (3, 2, 0, 0, 0, 0, 0, 0, 0) => ("32", Trigonal, 6),
        (0, 2, 0, 0, 0, 3, 0, 0, 0) => ("3m", Trigonal, 6),
        (3, 2, 0, 0, 1, 3, 2, 0, 0) => ("-3m", Trigonal, 12),
        (1, 2, 0, 2, 0, 0, 0, 0, 0) => ("6", Hexagonal, 6),
        (0, 2, 0, 0, 0, 1, 0, 0, 2) => ("-6", Hexagonal, 6),
        (1, 2, 0, 2, 1, 1, 2, 0, 2) => ("6/m", Hexagonal, 12),
        (7, 2, 0, 2, 0, 0, 0, 0, 0) => ("622", Hexagonal, 12),
        (1, 2, 0, 2, 0, 6, 0, 0, 0) => ("6mm", Hexagonal, 12),
        (3, 2, 0, 0, 0, 4, 0, 0, 2) => ("-6m2", Hexagonal, 12),
        (7, 2, 0, 2, 1, 7, 2, 0, 2) => ("6/mmm", Hexagonal, 24),
        (3, 8, 0, 0, 0, 0, 0, 0, 0) => ("23", Cubic, 12),
        (3, 8, 0, 0, 1, 3, 8, 0, 0) => ("m-3", Cubic, 24),
        (9, 8, 6, 0, 0, 0, 0, 0, 0) => ("432", Cubic, 24),
        (3, 8, 0, 0, 0, 6, 0, 6, 0) => ("-43m", Cubic, 24),
        (9, 8, 6, 0, 1, 9, 8, 6, 0) => ("m-3m", Cubic, 48),
        _ => {
            return Err(CrystnetError::Internal(format!(
                "operation counts {:?} match no point group",
                sig
            )))
        }
    };
    let (symbol, system, order) = group;
    if order != ops.len() {
        return Err(CrystnetError::Internal(format!(
            "point group {} expects order {}, got {} operations",
            symbol,
            order,
            ops.len()
        )));
    }
    Ok(PointGroup {
        symbol,
        system,
        order,
    })
}

/// Reduces the rotation parts of a symmetry group to the distinct set acting
/// on the lattice, then classifies them. Operations sharing a rotation part
/// differ only by a translation and count once.
pub fn point_group_of(ops: &[SymOp]) -> Result<PointGroup> {
    let mut distinct: Vec<SymOp> = Vec::new();
    for op in ops {
        if !distinct.iter().any(|o| o.rotation == op.rotation) {
            distinct.push(op.clone());
        }
    }
    classify_point_group(&distinct)
}

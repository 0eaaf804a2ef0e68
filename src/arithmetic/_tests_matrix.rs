#[cfg(test)]
mod _tests_matrix {
    use crate::arithmetic::matrix::{hermite_triangulate, rank_of_rows, QMatrix};
    use crate::arithmetic::rational::{rat, rat_frac, QVec3};

    fn vec_i(a: i64, b: i64, c: i64) -> QVec3 {
        QVec3([rat(a), rat(b), rat(c)])
    }

    #[test]
    fn test_solve_square() {
        // x + y = 3, x - y = 1  =>  x = 2, y = 1
        let mut a = QMatrix::zeros(2, 2);
        a.set(0, 0, rat(1));
        a.set(0, 1, rat(1));
        a.set(1, 0, rat(1));
        a.set(1, 1, rat(-1));
        let mut b = QMatrix::zeros(2, 1);
        b.set(0, 0, rat(3));
        b.set(1, 0, rat(1));
        let x = QMatrix::solve(&a, &b).unwrap();
        assert_eq!(x.get(0, 0), &rat(2));
        assert_eq!(x.get(1, 0), &rat(1));
    }

    #[test]
    fn test_solve_overdetermined_consistent() {
        // Same system with a redundant third equation 2x = 4.
        let mut a = QMatrix::zeros(3, 2);
        a.set(0, 0, rat(1));
        a.set(0, 1, rat(1));
        a.set(1, 0, rat(1));
        a.set(1, 1, rat(-1));
        a.set(2, 0, rat(2));
        let mut b = QMatrix::zeros(3, 1);
        b.set(0, 0, rat(3));
        b.set(1, 0, rat(1));
        b.set(2, 0, rat(4));
        let x = QMatrix::solve(&a, &b).unwrap();
        assert_eq!(x.get(0, 0), &rat(2));
        assert_eq!(x.get(1, 0), &rat(1));
    }

    #[test]
    fn test_solve_singular_returns_none() {
        let mut a = QMatrix::zeros(2, 2);
        a.set(0, 0, rat(1));
        a.set(0, 1, rat(1));
        a.set(1, 0, rat(2));
        a.set(1, 1, rat(2));
        let b = QMatrix::zeros(2, 1);
        assert!(QMatrix::solve(&a, &b).is_none());
    }

    #[test]
    fn test_solve_inconsistent_returns_none() {
        let mut a = QMatrix::zeros(3, 2);
        a.set(0, 0, rat(1));
        a.set(1, 1, rat(1));
        a.set(2, 0, rat(1));
        let mut b = QMatrix::zeros(3, 1);
        b.set(0, 0, rat(1));
        b.set(1, 0, rat(1));
        b.set(2, 0, rat(2)); // contradicts row 0
        assert!(QMatrix::solve(&a, &b).is_none());
    }

    #[test]
    fn test_rank() {
        assert_eq!(rank_of_rows(&[vec_i(1, 0, 0), vec_i(0, 1, 0)]), 2);
        assert_eq!(rank_of_rows(&[vec_i(1, 2, 3), vec_i(2, 4, 6)]), 1);
        assert_eq!(
            rank_of_rows(&[vec_i(1, 0, 0), vec_i(0, 1, 0), vec_i(0, 0, 1)]),
            3
        );
        assert_eq!(rank_of_rows(&[QVec3::zeros()]), 0);
    }

    #[test]
    fn test_triangulate_identity_stays() {
        let rows = [vec_i(1, 0, 0), vec_i(0, 1, 0), vec_i(0, 0, 1)];
        let tri = hermite_triangulate(&rows);
        assert_eq!(tri, rows.to_vec());
    }

    #[test]
    fn test_triangulate_halved_lattice() {
        // A body-centering translation (1/2, 1/2, 1/2) on top of the unit
        // lattice. The result must generate the doubled lattice: determinant
        // of the triangulated basis is 1/2.
        let rows = [
            QVec3([rat_frac(1, 2), rat_frac(1, 2), rat_frac(1, 2)]),
            vec_i(1, 0, 0),
            vec_i(0, 1, 0),
            vec_i(0, 0, 1),
        ];
        let tri = hermite_triangulate(&rows);
        assert_eq!(tri.len(), 3);
        let det = tri[0].0[0].clone() * tri[1].0[1].clone() * tri[2].0[2].clone();
        assert_eq!(det, rat_frac(1, 2));
        // Echelon shape with positive pivots.
        assert!(tri[1].0[0].clone() == rat(0));
        assert!(tri[2].0[0].clone() == rat(0) && tri[2].0[1].clone() == rat(0));
    }

    #[test]
    fn test_triangulate_rank_deficient() {
        let rows = [vec_i(1, 1, 0), vec_i(2, 2, 0)];
        let tri = hermite_triangulate(&rows);
        assert_eq!(tri.len(), 1);
        assert_eq!(tri[0], vec_i(1, 1, 0));
    }
}

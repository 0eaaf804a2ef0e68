#[cfg(test)]
mod _tests_lattice {
    use crate::config::BASIS_TOLERANCE;
    use crate::net::TranslationLattice;
    use nalgebra::{Matrix3, Vector3};
    use std::f64::consts::FRAC_PI_2;

    fn hexagonal() -> TranslationLattice {
        // a = b = 1, c = 2, gamma = 120 degrees.
        let basis = Matrix3::new(
            1.0, -0.5, 0.0, //
            0.0, 3f64.sqrt() / 2.0, 0.0, //
            0.0, 0.0, 2.0,
        );
        TranslationLattice::new(basis, BASIS_TOLERANCE).unwrap()
    }

    #[test]
    fn test_singular_basis_is_rejected() {
        let mut basis = Matrix3::identity();
        basis[(2, 2)] = 0.0;
        assert!(TranslationLattice::new(basis, BASIS_TOLERANCE).is_err());
    }

    #[test]
    fn test_hexagonal_parameters_and_angles() {
        let lat = hexagonal();
        let (a, b, c) = lat.lattice_parameters();
        assert!((a - 1.0).abs() < 1e-9);
        assert!((b - 1.0).abs() < 1e-9);
        assert!((c - 2.0).abs() < 1e-9);
        let (alpha, beta, gamma) = lat.lattice_angles();
        assert!((alpha - FRAC_PI_2).abs() < 1e-9);
        assert!((beta - FRAC_PI_2).abs() < 1e-9);
        assert!((gamma.to_degrees() - 120.0).abs() < 1e-9);
        assert!((lat.cell_volume() - 3f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_frac_cart_round_trip() {
        let lat = hexagonal();
        let frac = Vector3::new(0.25, 0.5, 0.75);
        let cart = lat.frac_to_cart(frac);
        let back = lat.cart_to_frac(cart).unwrap();
        assert!((back - frac).norm() < 1e-12);
    }
}

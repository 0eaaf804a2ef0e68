#[cfg(test)]
mod _tests_finder {
    use crate::errors::CrystnetError;
    use crate::net::{barycentric_placement, NetModel};
    use crate::symmetry::characteristic_bases::characteristic_bases;
    use crate::symmetry::finder::{symmetries, symmetries_with_budget};
    use nalgebra::Vector3;

    fn create_pcu() -> NetModel {
        let mut net = NetModel::new();
        let v = net.add_node();
        net.add_edge(v, v, Vector3::new(1, 0, 0)).unwrap();
        net.add_edge(v, v, Vector3::new(0, 1, 0)).unwrap();
        net.add_edge(v, v, Vector3::new(0, 0, 1)).unwrap();
        net
    }

    fn create_dia() -> NetModel {
        let mut net = NetModel::new();
        let a = net.add_node();
        let b = net.add_node();
        net.add_edge(a, b, Vector3::new(0, 0, 0)).unwrap();
        net.add_edge(a, b, Vector3::new(1, 0, 0)).unwrap();
        net.add_edge(a, b, Vector3::new(0, 1, 0)).unwrap();
        net.add_edge(a, b, Vector3::new(0, 0, 1)).unwrap();
        net
    }

    #[test]
    fn test_pcu_characteristic_bases_come_from_the_star() {
        let pcu = create_pcu();
        let pos = barycentric_placement(&pcu).unwrap();
        let bases = characteristic_bases(&pcu, &pos);
        // Six directed edges along +-x, +-y, +-z; ordered triples of three
        // distinct directions.
        assert_eq!(bases.len(), 48);
    }

    #[test]
    fn test_pcu_symmetry_group_order() {
        let group = symmetries(&create_pcu()).unwrap();
        assert_eq!(group.order(), 48);
        assert_eq!(group.node_orbits().len(), 1);
    }

    #[test]
    fn test_dia_symmetry_group_order() {
        let group = symmetries(&create_dia()).unwrap();
        assert_eq!(group.order(), 48);
        // Both nodes lie in a single orbit.
        assert_eq!(group.node_orbits().len(), 1);
        assert_eq!(group.node_orbits()[0], vec![0, 1]);
    }

    #[test]
    fn test_every_element_has_unimodular_matrix() {
        let group = symmetries(&create_dia()).unwrap();
        for g in group.elements() {
            assert!(g.matrix().is_unimodular());
        }
    }

    #[test]
    fn test_operators_match_elements() {
        let group = symmetries(&create_pcu()).unwrap();
        assert_eq!(group.operators().len(), group.order());
        let identities = group
            .operators()
            .iter()
            .filter(|op| op.is_identity())
            .count();
        assert_eq!(identities, 1);
    }

    #[test]
    fn test_budget_exhaustion_is_reported() {
        let err = symmetries_with_budget(&create_pcu(), 1).unwrap_err();
        assert!(matches!(
            err,
            CrystnetError::SymmetryOverflow { budget: 1 }
        ));
    }
}

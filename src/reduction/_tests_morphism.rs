#[cfg(test)]
mod _tests_morphism {
    use crate::arithmetic::{QMat3, QVec3};
    use crate::net::{barycentric_placement, NetModel};
    use crate::reduction::morphism::Morphism;
    use nalgebra::Vector3;

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
    fn test_identity_morphism() {
        let dia = create_dia();
        let id = Morphism::identity(&dia);
        assert!(id.is_identity());
        for v in dia.nodes() {
            assert_eq!(id.node_image(v), v);
        }
    }

    #[test]
    fn test_seed_extension_with_inversion() {
        // Swapping the two diamond nodes works with linear part -I: the star
        // of node 1 is the star of node 0 with all difference vectors negated.
        let dia = create_dia();
        let pos = barycentric_placement(&dia).unwrap();
        let minus_i = QMat3::from_rows(
            QVec3::from_ints(Vector3::new(-1, 0, 0)),
            QVec3::from_ints(Vector3::new(0, -1, 0)),
            QVec3::from_ints(Vector3::new(0, 0, -1)),
        );
        let iso = Morphism::find(&dia, &pos, &dia, &pos, 0, 1, minus_i).unwrap();
        assert_eq!(iso.node_image(0), 1);
        assert_eq!(iso.node_image(1), 0);
        assert!(iso.compose(&iso).is_identity());
    }

    #[test]
    fn test_seed_extension_fails_with_wrong_matrix() {
        // The node swap cannot be carried by the identity.
        let dia = create_dia();
        let pos = barycentric_placement(&dia).unwrap();
        assert!(Morphism::find(&dia, &pos, &dia, &pos, 0, 1, QMat3::identity()).is_none());
    }

    #[test]
    fn test_composition_maps_edges_consistently() {
        let dia = create_dia();
        let pos = barycentric_placement(&dia).unwrap();
        let minus_i = QMat3::from_rows(
            QVec3::from_ints(Vector3::new(-1, 0, 0)),
            QVec3::from_ints(Vector3::new(0, -1, 0)),
            QVec3::from_ints(Vector3::new(0, 0, -1)),
        );
        let iso = Morphism::find(&dia, &pos, &dia, &pos, 0, 1, minus_i).unwrap();
        let square = iso.compose(&iso);
        for de in dia.directed_edges() {
            assert_eq!(square.dir_edge_image(de), de);
        }
    }
}

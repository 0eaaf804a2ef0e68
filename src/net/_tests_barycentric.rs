#[cfg(test)]
mod _tests_barycentric {
    use crate::arithmetic::{rat_frac, QVec3};
    use crate::net::barycentric::{
        barycentric_placement, difference_vector, is_locally_stable, is_stable,
    };
    use crate::net::net_model::NetModel;
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
    fn test_pcu_placement() {
        let pcu = create_pcu();
        let pos = barycentric_placement(&pcu).unwrap();
        assert_eq!(pos.len(), 1);
        assert!(pos[0].is_zero());
    }

    #[test]
    fn test_dia_placement() {
        let dia = create_dia();
        let pos = barycentric_placement(&dia).unwrap();
        assert_eq!(pos.len(), 2);
        // Node 0 is pinned at the origin; its neighbor sits at the average of
        // the four surrounding images.
        assert!(pos[0].is_zero());
        let expected = QVec3([rat_frac(-1, 4), rat_frac(-1, 4), rat_frac(-1, 4)]);
        assert_eq!(pos[1], expected);
    }

    #[test]
    fn test_placement_satisfies_balance_equations() {
        let dia = create_dia();
        let pos = barycentric_placement(&dia).unwrap();
        for v in dia.nodes() {
            let mut sum = QVec3::zeros();
            for &de in dia.incidences(v) {
                sum = sum + difference_vector(&dia, &pos, de);
            }
            // The difference vectors around an equilibrium node cancel.
            assert!(sum.is_zero(), "node {} is not in equilibrium", v);
        }
    }

    #[test]
    fn test_disconnected_net_is_rejected() {
        let mut net = NetModel::new();
        let v = net.add_node();
        net.add_edge(v, v, Vector3::new(1, 0, 0)).unwrap();
        net.add_edge(v, v, Vector3::new(0, 1, 0)).unwrap();
        assert!(barycentric_placement(&net).is_err());
    }

    #[test]
    fn test_stability() {
        let dia = create_dia();
        let pos = barycentric_placement(&dia).unwrap();
        assert!(is_stable(&dia, &pos));
        assert!(is_locally_stable(&dia, &pos));
    }

    #[test]
    fn test_unstable_net_detected() {
        // Two nodes bridged by two parallel zero-cell and one-cell edge
        // pairs: both nodes land on the same barycentric position.
        let mut net = NetModel::new();
        let a = net.add_node();
        let b = net.add_node();
        net.add_edge(a, b, Vector3::new(0, 0, 0)).unwrap();
        net.add_edge(b, a, Vector3::new(1, 0, 0)).unwrap();
        net.add_edge(b, a, Vector3::new(-1, 0, 0)).unwrap();
        net.add_edge(a, b, Vector3::new(0, 1, 0)).unwrap();
        net.add_edge(a, b, Vector3::new(0, -1, 0)).unwrap();
        net.add_edge(a, b, Vector3::new(0, 0, 1)).unwrap();
        net.add_edge(a, b, Vector3::new(0, 0, -1)).unwrap();
        let pos = barycentric_placement(&net).unwrap();
        assert!(!is_stable(&net, &pos));
    }

    #[test]
    fn test_difference_vector_orientation() {
        let dia = create_dia();
        let pos = barycentric_placement(&dia).unwrap();
        let de = dia.find_edge(0, 1, Vector3::new(1, 0, 0)).unwrap();
        let d = difference_vector(&dia, &pos, de);
        assert_eq!(
            d,
            QVec3([rat_frac(3, 4), rat_frac(-1, 4), rat_frac(-1, 4)])
        );
        let back = difference_vector(&dia, &pos, de.reverse());
        assert_eq!(back, -d);
    }
}

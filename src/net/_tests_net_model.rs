#[cfg(test)]
mod _tests_net_model {
    use crate::net::connectivity::is_connected;
    use crate::net::net_model::{sign_of_shift, Edge, NetModel};
    use nalgebra::Vector3;

    // Helper function to create the primitive cubic net (one node, three
    // loops along the lattice directions)
    fn create_pcu() -> NetModel {
        let mut net = NetModel::new();
        let v = net.add_node();
        net.add_edge(v, v, Vector3::new(1, 0, 0)).unwrap();
        net.add_edge(v, v, Vector3::new(0, 1, 0)).unwrap();
        net.add_edge(v, v, Vector3::new(0, 0, 1)).unwrap();
        net
    }

    // Helper function to create the diamond net (two nodes, four edges)
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
    fn test_sign_of_shift() {
        assert_eq!(sign_of_shift(&Vector3::new(0, 0, 0)), 0);
        assert_eq!(sign_of_shift(&Vector3::new(0, -1, 2)), -1);
        assert_eq!(sign_of_shift(&Vector3::new(0, 0, 3)), 1);
    }

    #[test]
    fn test_edge_normalization() {
        let e = Edge::normalized(3, 1, Vector3::new(1, 0, 0));
        assert_eq!(e.source, 1);
        assert_eq!(e.target, 3);
        assert_eq!(e.shift, Vector3::new(-1, 0, 0));

        // Loops are normalized to a negative leading shift component.
        let l = Edge::normalized(2, 2, Vector3::new(0, 1, -1));
        assert_eq!(l.shift, Vector3::new(0, -1, 1));
        assert!(l.is_loop());
    }

    #[test]
    fn test_degrees_and_incidences() {
        let pcu = create_pcu();
        // Three loops, each seen once per direction.
        assert_eq!(pcu.degree(0), 6);

        let dia = create_dia();
        assert_eq!(dia.degree(0), 4);
        assert_eq!(dia.degree(1), 4);
        assert_eq!(dia.edge_count(), 4);
    }

    #[test]
    fn test_find_edge_both_directions() {
        let dia = create_dia();
        let de = dia.find_edge(0, 1, Vector3::new(1, 0, 0)).unwrap();
        assert_eq!(dia.source(de), 0);
        assert_eq!(dia.shift(de), Vector3::new(1, 0, 0));

        let back = dia.find_edge(1, 0, Vector3::new(-1, 0, 0)).unwrap();
        assert_eq!(back.index, de.index);
        assert!(back.reversed);
    }

    #[test]
    fn test_trivial_loop_rejected() {
        let mut net = NetModel::new();
        let v = net.add_node();
        assert!(net.add_edge(v, v, Vector3::zeros()).is_err());
    }

    #[test]
    fn test_duplicate_edge_rejected() {
        let mut net = NetModel::new();
        let a = net.add_node();
        let b = net.add_node();
        net.add_edge(a, b, Vector3::new(0, 0, 0)).unwrap();
        // Same edge described from the other side.
        assert!(net.add_edge(b, a, Vector3::new(0, 0, 0)).is_err());
    }

    #[test]
    fn test_pcu_and_dia_are_connected() {
        assert!(is_connected(&create_pcu()));
        assert!(is_connected(&create_dia()));
    }

    #[test]
    fn test_unreached_node_class_is_disconnected() {
        let mut net = NetModel::new();
        let a = net.add_node();
        let b = net.add_node();
        net.add_edge(a, a, Vector3::new(1, 0, 0)).unwrap();
        net.add_edge(a, a, Vector3::new(0, 1, 0)).unwrap();
        net.add_edge(a, a, Vector3::new(0, 0, 1)).unwrap();
        net.add_edge(b, b, Vector3::new(1, 0, 0)).unwrap();
        net.add_edge(b, b, Vector3::new(0, 1, 0)).unwrap();
        net.add_edge(b, b, Vector3::new(0, 0, 1)).unwrap();
        assert!(!is_connected(&net));
    }

    #[test]
    fn test_ladder_is_disconnected() {
        // A single node with loops along two directions only: the infinite
        // graph is a stack of disconnected planes.
        let mut net = NetModel::new();
        let v = net.add_node();
        net.add_edge(v, v, Vector3::new(1, 0, 0)).unwrap();
        net.add_edge(v, v, Vector3::new(0, 1, 0)).unwrap();
        assert!(!is_connected(&net));
    }

    #[test]
    fn test_sublattice_reach_is_disconnected() {
        // Loops along x, y and 2z reach only every second cell along z.
        let mut net = NetModel::new();
        let v = net.add_node();
        net.add_edge(v, v, Vector3::new(1, 0, 0)).unwrap();
        net.add_edge(v, v, Vector3::new(0, 1, 0)).unwrap();
        net.add_edge(v, v, Vector3::new(0, 0, 2)).unwrap();
        assert!(!is_connected(&net));
    }
}

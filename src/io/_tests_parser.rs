#[cfg(test)]
mod _tests_parser {
    use crate::errors::CrystnetError;
    use crate::io::parser::{parse_nets, NetSource};

    const DIA_BLOCK: &str = "\
PERIODIC_GRAPH
NAME dia
EDGES
  1 2 0 0 0
  1 2 1 0 0
  1 2 0 1 0
  1 2 0 0 1
END
";

    #[test]
    fn test_parse_single_block() {
        let nets = parse_nets(DIA_BLOCK).unwrap();
        assert_eq!(nets.len(), 1);
        assert_eq!(nets[0].name.as_deref(), Some("dia"));
        assert_eq!(nets[0].net.node_count(), 2);
        assert_eq!(nets[0].net.edge_count(), 4);
    }

    #[test]
    fn test_parse_multiple_blocks_with_comments() {
        let input = format!(
            "# curated test nets\n{}\nPERIODIC_GRAPH\nEDGES\n1 1 1 0 0\n1 1 0 1 0\n1 1 0 0 1\nEND\n",
            DIA_BLOCK
        );
        let nets = parse_nets(&input).unwrap();
        assert_eq!(nets.len(), 2);
        // The second block is nameless.
        assert_eq!(nets[1].name, None);
        assert_eq!(nets[1].net.node_count(), 1);
    }

    #[test]
    fn test_streaming_interface() {
        let mut source = NetSource::new(DIA_BLOCK.as_bytes());
        assert!(source.parse_next().unwrap().is_ok());
        assert!(source.parse_next().is_none());
    }

    #[test]
    fn test_malformed_edge_line_reports_context() {
        let input = "PERIODIC_GRAPH\nEDGES\n1 2 0 0\nEND\n";
        let err = parse_nets(input).unwrap_err();
        match err {
            CrystnetError::Parse {
                net_index,
                line_number,
                line,
                ..
            } => {
                assert_eq!(net_index, 1);
                assert_eq!(line_number, 3);
                assert_eq!(line, "1 2 0 0");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_integer_field_is_rejected() {
        let input = "PERIODIC_GRAPH\nEDGES\n1 2 0 0 x\nEND\n";
        assert!(parse_nets(input).is_err());
    }

    #[test]
    fn test_truncated_block_is_rejected() {
        let input = "PERIODIC_GRAPH\nEDGES\n1 2 0 0 0\n";
        assert!(parse_nets(input).is_err());
    }

    #[test]
    fn test_unknown_keyword_is_rejected() {
        let input = "PERIODIC_GRAPH\nVERTICES\nEND\n";
        assert!(parse_nets(input).is_err());
    }

    #[test]
    fn test_duplicate_edge_is_a_parse_error() {
        let input = "PERIODIC_GRAPH\nEDGES\n1 2 0 0 0\n2 1 0 0 0\nEND\n";
        let err = parse_nets(input).unwrap_err();
        assert!(matches!(err, CrystnetError::Parse { .. }));
    }

    #[test]
    fn test_arbitrary_node_labels() {
        let input = "PERIODIC_GRAPH\nEDGES\n10 20 0 0 0\n10 20 1 0 0\n10 20 0 1 0\n10 20 0 0 1\nEND\n";
        let nets = parse_nets(input).unwrap();
        assert_eq!(nets[0].net.node_count(), 2);
    }
}

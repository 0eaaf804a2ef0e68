use std::collections::HashMap;
use std::io::BufRead;

use nalgebra::Vector3;

use crate::errors::CrystnetError;
use crate::net::{NetModel, NodeId};
use crate::Result;

/// One net description read from a source, with its optional name.
#[derive(Debug)]
pub struct ParsedNet {
    pub net: NetModel,
    pub name: Option<String>,
}

/// Streaming reader for the PERIODIC_GRAPH block format.
///
/// A block looks like
///
/// ```text
/// PERIODIC_GRAPH
/// NAME dia
/// EDGES
///   1 2 0 0 0
///   1 2 1 0 0
///   1 2 0 1 0
///   1 2 0 0 1
/// END
/// ```
///
/// Node labels are arbitrary integers and are mapped to arena indices in
/// order of first appearance. Blank lines and lines starting with `#` are
/// skipped anywhere.
pub struct NetSource<R: BufRead> {
    reader: R,
    line_number: usize,
    net_index: usize,
}

impl<R: BufRead> NetSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            net_index: 0,
        }
    }

    fn error(&self, line: &str, message: impl Into<String>) -> CrystnetError {
        CrystnetError::Parse {
            net_index: self.net_index,
            line_number: self.line_number,
            line: line.to_string(),
            message: message.into(),
        }
    }

    /// Next nonempty, non-comment line, or `None` at end of input.
    fn next_line(&mut self) -> Result<Option<String>> {
        loop {
            let mut buf = String::new();
            if self.reader.read_line(&mut buf)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;
            let line = buf.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            return Ok(Some(line.to_string()));
        }
    }

    /// Parses the next block, or returns `None` when the input is used up.
    pub fn parse_next(&mut self) -> Option<Result<ParsedNet>> {
        let head = match self.next_line() {
            Ok(Some(line)) => line,
            Ok(None) => return None,
            Err(e) => return Some(Err(e)),
        };
        self.net_index += 1;
        if head != "PERIODIC_GRAPH" {
            return Some(Err(self.error(&head, "expected PERIODIC_GRAPH")));
        }
        Some(self.parse_block())
    }

    fn parse_block(&mut self) -> Result<ParsedNet> {
        let mut name: Option<String> = None;
        let mut net = NetModel::new();
        let mut node_ids: HashMap<i64, NodeId> = HashMap::new();
        let mut in_edges = false;

        loop {
            let line = self
                .next_line()?
                .ok_or_else(|| self.error("", "unexpected end of input inside a block"))?;
            if line == "END" {
                if net.edge_count() == 0 {
                    return Err(self.error(&line, "block declares no edges"));
                }
                return Ok(ParsedNet { net, name });
            }
            if in_edges {
                self.parse_edge_line(&line, &mut net, &mut node_ids)?;
                continue;
            }
            match line.split_once(char::is_whitespace) {
                Some(("NAME", arg)) => name = Some(arg.trim().to_string()),
                _ if line == "EDGES" => in_edges = true,
                _ => return Err(self.error(&line, "expected NAME, EDGES or END")),
            }
        }
    }

    fn parse_edge_line(
        &self,
        line: &str,
        net: &mut NetModel,
        node_ids: &mut HashMap<i64, NodeId>,
    ) -> Result<()> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 5 {
            return Err(self.error(line, "edge lines take five fields: v w s1 s2 s3"));
        }
        let mut numbers = [0i64; 5];
        for (slot, token) in numbers.iter_mut().zip(&fields) {
            *slot = token
                .parse::<i64>()
                .map_err(|_| self.error(line, format!("not an integer: {:?}", token)))?;
        }
        let mut node = |label: i64, net: &mut NetModel| -> NodeId {
            *node_ids.entry(label).or_insert_with(|| net.add_node())
        };
        let source = node(numbers[0], net);
        let target = node(numbers[1], net);
        let mut shift = Vector3::zeros();
        for i in 0..3 {
            shift[i] = i32::try_from(numbers[2 + i])
                .map_err(|_| self.error(line, "shift component out of range"))?;
        }
        net.add_edge(source, target, shift)
            .map(|_| ())
            .map_err(|e| self.error(line, e.to_string()))
    }
}

impl<R: BufRead> Iterator for NetSource<R> {
    type Item = Result<ParsedNet>;

    fn next(&mut self) -> Option<Self::Item> {
        self.parse_next()
    }
}

/// Parses every block of an in-memory net source.
pub fn parse_nets(input: &str) -> Result<Vec<ParsedNet>> {
    NetSource::new(input.as_bytes()).collect()
}

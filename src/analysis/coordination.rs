use std::collections::HashSet;

use nalgebra::Vector3;

use crate::net::{NetModel, NodeId};

/// Iterator over the coordination sequence of a node: the number of distinct
/// nodes of the infinite graph at graph distance 1, 2, 3, ... from it.
///
/// The iterator never ends; callers take as many shells as they need.
pub struct CoordinationSequence<'a> {
    net: &'a NetModel,
    previous: HashSet<(NodeId, Vector3<i32>)>,
    current: HashSet<(NodeId, Vector3<i32>)>,
}

impl<'a> CoordinationSequence<'a> {
    pub fn new(net: &'a NetModel, start: NodeId) -> Self {
        let mut current = HashSet::new();
        current.insert((start, Vector3::zeros()));
        Self {
            net,
            previous: HashSet::new(),
            current,
        }
    }
}

impl Iterator for CoordinationSequence<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let mut next_shell = HashSet::new();
        for &(v, s) in &self.current {
            for &de in self.net.incidences(v) {
                let image = (self.net.target(de), s + self.net.shift(de));
                if !self.previous.contains(&image) && !self.current.contains(&image) {
                    next_shell.insert(image);
                }
            }
        }
        self.previous = std::mem::replace(&mut self.current, next_shell);
        Some(self.current.len())
    }
}

/// The first `count` shells of the coordination sequence of `start`.
pub fn coordination_shells(net: &NetModel, start: NodeId, count: usize) -> Vec<usize> {
    CoordinationSequence::new(net, start).take(count).collect()
}

/// Cumulative topological density: one plus the sum of the first ten shells,
/// averaged over all nodes of the quotient graph.
pub fn topological_density(net: &NetModel) -> f64 {
    let shells = 10;
    let total: usize = net
        .nodes()
        .map(|v| 1 + coordination_shells(net, v, shells).iter().sum::<usize>())
        .sum();
    total as f64 / net.node_count() as f64
}

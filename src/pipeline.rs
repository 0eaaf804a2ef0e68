use log::{info, warn};

use crate::analysis::{barycentric_embedding, coordination_shells, topological_density, Embedding};
use crate::archive::{Archive, ArchiveEntry, Classification, DeduplicationEngine};
use crate::canonical::{canonical_form, InvariantKey};
use crate::config::{DEFAULT_SHELL_COUNT, SYMMETRY_SEARCH_BUDGET};
use crate::net::{NetModel, NodeId};
use crate::reduction::minimal_image;
use crate::symmetry::{point_group_of, symmetries_with_budget, PointGroup};
use crate::{Result, KEY_VERSION};

/// Coordination data for one orbit of equivalent nodes.
#[derive(Debug, Clone)]
pub struct OrbitReport {
    pub representative: NodeId,
    pub size: usize,
    pub sequence: Vec<usize>,
}

/// Everything the run reports about a single net.
#[derive(Debug)]
pub struct NetReport {
    pub index: usize,
    pub name: String,
    pub node_count: usize,
    pub edge_count: usize,
    pub reduced: bool,
    pub group_order: usize,
    pub point_group: PointGroup,
    pub orbits: Vec<OrbitReport>,
    pub topological_density: f64,
    pub key: InvariantKey,
    /// Archive label and structure name of the first matching reference
    /// archive, if any.
    pub archive_match: Option<(String, String)>,
    pub classification: Classification,
    pub embedding: Embedding,
}

/// Drives a whole identification run: reduction, symmetries,
/// canonicalization, archive lookup, run-local deduplication and the
/// derived descriptors, per net.
pub struct Pipeline {
    archives: Vec<(String, Archive)>,
    dedup: DeduplicationEngine,
    new_entries: Archive,
    shells: usize,
    budget: usize,
}

impl Pipeline {
    pub fn new(shells: usize, budget: usize) -> Self {
        Self {
            archives: Vec::new(),
            dedup: DeduplicationEngine::new(),
            new_entries: Archive::new(),
            shells,
            budget,
        }
    }

    pub fn add_archive(&mut self, label: &str, archive: Archive) {
        self.archives.push((label.to_string(), archive));
    }

    /// Entries for every first-seen structure of this run, in archive form.
    pub fn new_entries(&self) -> &Archive {
        &self.new_entries
    }

    pub fn process(
        &mut self,
        index: usize,
        name: Option<&str>,
        net: &NetModel,
    ) -> Result<NetReport> {
        let reduced_net = minimal_image(net)?;
        let reduced = reduced_net.node_count() < net.node_count();
        if reduced {
            info!(
                "net {} reduced from {} to {} nodes",
                index,
                net.node_count(),
                reduced_net.node_count()
            );
        }

        let group = symmetries_with_budget(&reduced_net, self.budget)?;
        let point_group = point_group_of(group.operators())?;
        let form = canonical_form(&reduced_net)?;
        let key = form.key;

        let archive_match = self.archives.iter().find_map(|(label, archive)| {
            archive
                .lookup(&key)
                .map(|entry| (label.clone(), entry.name().to_string()))
        });

        let classification = self.dedup.classify(key.clone(), name);
        let report_name = match &classification {
            Classification::New { assigned } => {
                let entry = ArchiveEntry::new(key.clone(), KEY_VERSION, assigned);
                if let Err(e) = self.new_entries.add(entry) {
                    warn!("cannot archive structure {}: {}", assigned, e);
                }
                assigned.clone()
            }
            Classification::Duplicate { .. } => match name {
                Some(name) => name.to_string(),
                None => "nameless".to_string(),
            },
        };

        let orbits = group
            .node_orbits()
            .iter()
            .map(|orbit| OrbitReport {
                representative: orbit[0],
                size: orbit.len(),
                sequence: coordination_shells(&reduced_net, orbit[0], self.shells),
            })
            .collect();

        let embedding = barycentric_embedding(&reduced_net, &group)?;

        Ok(NetReport {
            index,
            name: report_name,
            node_count: reduced_net.node_count(),
            edge_count: reduced_net.edge_count(),
            reduced,
            group_order: group.order(),
            point_group,
            orbits,
            topological_density: topological_density(&reduced_net),
            key,
            archive_match,
            classification,
            embedding,
        })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Pipeline::new(DEFAULT_SHELL_COUNT, SYMMETRY_SEARCH_BUDGET)
    }
}

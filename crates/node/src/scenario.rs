//! Replay the steps of a [Config] against a [Ring].
use crate::config::Config;
use crate::config::Step;
use crate::error::Error;
use crate::error::Result;
use crate::prelude::chord_ring_core::error::Result as CoreResult;
use crate::prelude::Chord;
use crate::prelude::ChordStorage;
use crate::prelude::Did;
use crate::prelude::IdSpace;
use crate::prelude::NodeInspect;
use crate::prelude::Ring;
use crate::report::LookupReport;
use crate::report::Report;

/// A ring of integer values driven by a list of steps.
pub struct Scenario {
    ring: Ring<i64>,
    default_value: i64,
}

impl Scenario {
    pub fn new(id_bits: u8, default_value: i64) -> Result<Self> {
        let space = IdSpace::new(id_bits)?;
        Ok(Self {
            ring: Ring::new(space),
            default_value,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.id_bits, config.default_value)
    }

    pub fn ring(&self) -> &Ring<i64> {
        &self.ring
    }

    /// Apply every step in order. Stops at the first failing step, reporting
    /// its position.
    pub fn run(&mut self, steps: &[Step]) -> Result<Vec<Report>> {
        let mut reports = vec![];
        for (i, step) in steps.iter().enumerate() {
            tracing::debug!("step {}: {:?}", i, step);
            let report = self.apply(step).map_err(|e| Error::StepFailed(i, e))?;
            reports.extend(report);
        }
        Ok(reports)
    }

    /// Apply one step, returning what it produced.
    pub fn apply(&mut self, step: &Step) -> CoreResult<Option<Report>> {
        match step {
            Step::Join { id, contact } => {
                let node = self.ring.new_node(*id);
                let migration = self.ring.join(node, *contact)?;
                Ok(migration.map(Report::Migrated))
            }
            Step::Leave { id } => {
                let keys = self.ring.node(*id)?.keys().into_iter().map(|(k, _)| k).collect();
                let successor = self.ring.registry().next(*id).filter(|s| s != id);
                self.ring.leave(*id)?;
                Ok(Some(Report::Left {
                    id: *id,
                    successor,
                    keys,
                }))
            }
            Step::Insert { at, key, value } => {
                let value = value.unwrap_or(self.default_value);
                let route = self.ring.insert_key(*at, *key, value)?;
                Ok(Some(Report::Inserted {
                    key: *key,
                    value,
                    route,
                }))
            }
            Step::Remove { at, key } => {
                let route = self.ring.find_key(*at, *key)?;
                let value = self.ring.remove_key(*at, *key)?;
                Ok(Some(Report::Removed {
                    key: *key,
                    value,
                    route,
                }))
            }
            Step::Lookup { from, keys } => {
                let results = keys
                    .iter()
                    .map(|key| self.lookup(*from, *key))
                    .collect::<CoreResult<Vec<_>>>()?;
                Ok(Some(Report::Lookups {
                    from: *from,
                    results,
                }))
            }
            Step::ShowFingers { title, nodes } => Ok(Some(Report::Fingers {
                title: title.clone(),
                nodes: self.inspect_nodes(nodes)?,
            })),
            Step::ShowKeys { title } => Ok(Some(Report::Keys {
                title: title.clone(),
                nodes: self.inspect_nodes(&[])?,
            })),
        }
    }

    fn lookup(&self, from: Did, key: Did) -> CoreResult<LookupReport> {
        let lookup = self.ring.lookup_value(from, key)?;
        Ok(LookupReport {
            key,
            found: lookup.value.is_some(),
            value: lookup.value.copied().unwrap_or(self.default_value),
            route: lookup.route,
        })
    }

    /// Snapshot of the listed nodes in ascending Did order, or of every node
    /// when the list is empty.
    fn inspect_nodes(&self, only: &[Did]) -> CoreResult<Vec<NodeInspect<i64>>> {
        for did in only {
            self.ring.node(*did)?;
        }
        Ok(self
            .ring
            .nodes()
            .filter(|n| only.is_empty() || only.contains(&n.did))
            .map(|n| NodeInspect::inspect(&self.ring, n))
            .collect())
    }
}

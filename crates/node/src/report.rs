//! Reports produced while a scenario is replayed, and their rendering.
use std::io::Write;

use serde::Deserialize;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::prelude::Did;
use crate::prelude::Migration;
use crate::prelude::NodeInspect;
use crate::prelude::RingInspect;
use crate::prelude::Route;

/// One resolved key of a lookup step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupReport {
    pub key: Did,
    pub route: Route,
    /// Stored value, or the configured default when the owner lacks the key.
    pub value: i64,
    pub found: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Report {
    Fingers {
        title: Option<String>,
        nodes: Vec<NodeInspect<i64>>,
    },
    Keys {
        title: Option<String>,
        nodes: Vec<NodeInspect<i64>>,
    },
    Migrated(Migration),
    Left {
        id: Did,
        /// None when the last node left, keeping its keys.
        successor: Option<Did>,
        keys: Vec<Did>,
    },
    Inserted {
        key: Did,
        value: i64,
        route: Route,
    },
    Removed {
        key: Did,
        value: Option<i64>,
        route: Route,
    },
    Lookups {
        from: Did,
        results: Vec<LookupReport>,
    },
}

fn join_dids(dids: &[Did], sep: &str) -> String {
    dids.iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

fn write_finger_table<W: Write>(w: &mut W, node: &NodeInspect<i64>) -> Result<()> {
    writeln!(w, "Finger table of node {}:", node.did)?;
    for (start, succ) in node.finger_table.iter() {
        match succ {
            Some(succ) => writeln!(w, "start {} -> {}", start, succ)?,
            None => writeln!(w, "start {} -> none", start)?,
        }
    }
    Ok(())
}

fn write_keys<W: Write>(w: &mut W, node: &NodeInspect<i64>) -> Result<()> {
    let keys = node
        .keys
        .iter()
        .map(|(k, v)| format!("{}:{}", k, v))
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(w, "Node {}: {}", node.did, keys)?;
    Ok(())
}

impl Report {
    /// Human readable lines of this report.
    /// Titled sections and lookup headers open with a blank line.
    pub fn write_text<W: Write>(&self, w: &mut W) -> Result<()> {
        match self {
            Report::Fingers { title, nodes } => {
                if let Some(title) = title {
                    writeln!(w, "\n{}", title)?;
                }
                for node in nodes {
                    write_finger_table(w, node)?;
                    writeln!(w)?;
                }
            }
            Report::Keys { title, nodes } => {
                if let Some(title) = title {
                    writeln!(w, "\n{}", title)?;
                }
                for node in nodes {
                    write_keys(w, node)?;
                }
                writeln!(w)?;
            }
            Report::Migrated(m) => {
                if !m.is_empty() {
                    writeln!(
                        w,
                        "Migrated keys from node {} to node {}: {}",
                        m.from,
                        m.to,
                        join_dids(&m.keys, " ")
                    )?;
                }
            }
            // Leaving is silent, as inserting is.
            Report::Left { .. } | Report::Inserted { .. } => {}
            Report::Removed { key, value, route } => match value {
                Some(v) => writeln!(w, "Removed key {} from node {} value was {}", key, route.owner, v)?,
                None => writeln!(w, "Key {} not found on node {}", key, route.owner)?,
            },
            Report::Lookups { from, results } => {
                writeln!(w, "\n----- node {} lookups -----", from)?;
                for r in results {
                    writeln!(
                        w,
                        "Look-up result of key {} from node {} with path [{}] value is {}",
                        r.key,
                        from,
                        join_dids(&r.route.path, ","),
                        r.value
                    )?;
                }
            }
        }
        Ok(())
    }
}

/// Render replayed reports in the chosen format.
pub fn render<W: Write>(w: &mut W, format: OutputFormat, reports: &[Report]) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let mut buf = vec![];
            for report in reports {
                report.write_text(&mut buf)?;
            }
            // No blank line above the first section.
            let start = buf.iter().position(|b| *b != b'\n').unwrap_or(buf.len());
            w.write_all(&buf[start..])?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *w, reports)?;
            writeln!(w)?;
        }
        OutputFormat::Yaml => serde_yaml::to_writer(&mut *w, reports)?,
    }
    Ok(())
}

/// Render a snapshot of the whole ring.
pub fn render_inspect<W: Write>(
    w: &mut W,
    format: OutputFormat,
    inspect: &RingInspect<i64>,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for node in inspect.nodes.iter() {
                write_finger_table(w, node)?;
                writeln!(w)?;
            }
            for node in inspect.nodes.iter() {
                write_keys(w, node)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *w, inspect)?;
            writeln!(w)?;
        }
        OutputFormat::Yaml => serde_yaml::to_writer(&mut *w, inspect)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn did(id: u64) -> Did {
        Did::from(id)
    }

    fn text(report: &Report) -> String {
        let mut buf = vec![];
        report.write_text(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_migration_line() {
        let report = Report::Migrated(Migration {
            from: did(110),
            to: did(100),
            keys: vec![did(99), did(100)],
        });
        assert_eq!(text(&report), "Migrated keys from node 110 to node 100: 99 100\n");

        let empty = Report::Migrated(Migration {
            from: did(110),
            to: did(100),
            keys: vec![],
        });
        assert_eq!(text(&empty), "");
    }

    #[test]
    fn test_lookup_lines() {
        let report = Report::Lookups {
            from: did(65),
            results: vec![LookupReport {
                key: did(3),
                route: Route {
                    owner: did(30),
                    path: vec![did(65), did(230), did(0), did(30)],
                },
                value: 3,
                found: true,
            }],
        };
        assert_eq!(
            text(&report),
            "\n----- node 65 lookups -----\n\
             Look-up result of key 3 from node 65 with path [65,230,0,30] value is 3\n"
        );
    }

    #[test]
    fn test_keys_and_fingers() {
        let node = NodeInspect {
            did: did(9),
            finger_table: vec![(did(10), Some(did(2))), (did(11), None)],
            keys: vec![(did(5), 50), (did(7), -1)],
        };
        let keys = Report::Keys {
            title: Some("Keys Distribution:".to_string()),
            nodes: vec![node.clone()],
        };
        assert_eq!(text(&keys), "\nKeys Distribution:\nNode 9: 5:50 7:-1\n\n");

        let fingers = Report::Fingers {
            title: None,
            nodes: vec![node],
        };
        assert_eq!(
            text(&fingers),
            "Finger table of node 9:\nstart 10 -> 2\nstart 11 -> none\n\n"
        );
    }

    #[test]
    fn test_render_json() {
        let reports = vec![Report::Left {
            id: did(65),
            successor: Some(did(100)),
            keys: vec![did(45)],
        }];
        let mut buf = vec![];
        render(&mut buf, OutputFormat::Json, &reports).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["event"], "left");
        assert_eq!(value[0]["successor"], 100);
    }
}

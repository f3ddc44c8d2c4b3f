//! Scenario configuration, stored as YAML.
use std::fs;
use std::io;

use clap::ValueEnum;
use serde::Deserialize;
use serde::Serialize;

use crate::error::Error;
use crate::error::Result;
use crate::prelude::chord_ring_core::consts::DEFAULT_ID_BITS;
use crate::prelude::Did;
use crate::util::create_parent_dir;
use crate::util::expand_home;

pub const DEFAULT_CONFIG_PATH: &str = "~/.chord-ring/config.yaml";
/// Value stored by inserts that do not carry one, and shown for keys not found.
pub const DEFAULT_VALUE: i64 = -1;

fn default_id_bits() -> u8 {
    DEFAULT_ID_BITS
}

fn default_value() -> i64 {
    DEFAULT_VALUE
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

/// One operation of a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Join node `id`, through `contact` when given.
    Join {
        id: Did,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        contact: Option<Did>,
    },
    /// Node `id` leaves the ring.
    Leave { id: Did },
    /// Insert `key` starting from node `at`.
    Insert {
        at: Did,
        key: Did,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<i64>,
    },
    /// Remove `key` starting from node `at`.
    Remove { at: Did, key: Did },
    /// Look up every key in `keys` starting from node `from`.
    Lookup { from: Did, keys: Vec<Did> },
    /// Print finger tables, of `nodes` only when not empty.
    ShowFingers {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        nodes: Vec<Did>,
    },
    /// Print the keys held by every node.
    ShowKeys {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Width M of the identifier space.
    #[serde(default = "default_id_bits")]
    pub id_bits: u8,
    #[serde(default = "default_value")]
    pub default_value: i64,
    #[serde(default)]
    pub output: OutputFormat,
    /// When there is no step in the YAML file,
    /// its deserialization is equivalent to `vec![]` in Rust.
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Default for Config {
    /// The walkthrough: six nodes, a dozen keys, node 100 joins, node 65 leaves.
    fn default() -> Self {
        let d = |x: u64| Did::from(x);
        let mut steps = vec![Step::Join {
            id: d(0),
            contact: None,
        }];
        let ids = [0u64, 30, 65, 110, 160, 230];
        for pair in ids.windows(2) {
            steps.push(Step::Join {
                id: d(pair[1]),
                contact: Some(d(pair[0])),
            });
        }
        steps.push(Step::ShowFingers {
            title: Some("Finger Tables:".to_string()),
            nodes: vec![],
        });

        let inserts = [
            (0, 3, Some(3)),
            (30, 200, None),
            (65, 123, None),
            (110, 45, Some(3)),
            (160, 99, None),
            (65, 60, Some(10)),
            (0, 50, Some(8)),
            (110, 100, Some(5)),
            (110, 101, Some(4)),
            (110, 102, Some(6)),
            (230, 240, Some(8)),
            (230, 250, Some(10)),
        ];
        for (at, key, value) in inserts {
            steps.push(Step::Insert {
                at: d(at),
                key: d(key),
                value,
            });
        }
        steps.push(Step::ShowKeys {
            title: Some("Keys Distribution:".to_string()),
        });

        steps.push(Step::Join {
            id: d(100),
            contact: Some(d(0)),
        });
        steps.push(Step::ShowKeys {
            title: Some("Keys Distribution after node 100 joins:".to_string()),
        });

        let keys: Vec<Did> = [3u64, 200, 123, 45, 99, 60, 50, 100, 101, 102, 240, 250]
            .into_iter()
            .map(d)
            .collect();
        for from in [0u64, 65, 100] {
            steps.push(Step::Lookup {
                from: d(from),
                keys: keys.clone(),
            });
        }

        steps.push(Step::Leave { id: d(65) });
        steps.push(Step::ShowFingers {
            title: Some("Updated Finger Tables after node 65 leaves:".to_string()),
            nodes: vec![d(0), d(30)],
        });
        steps.push(Step::ShowKeys {
            title: Some("Keys Distribution after node 65 leaves:".to_string()),
        });

        Self {
            id_bits: DEFAULT_ID_BITS,
            default_value: DEFAULT_VALUE,
            output: OutputFormat::Text,
            steps,
        }
    }
}

impl Config {
    pub fn write_fs<P>(&self, path: P) -> Result<String>
    where P: AsRef<std::path::Path> {
        let path = expand_home(path)?;
        create_parent_dir(&path)?;
        let f =
            fs::File::create(path.as_path()).map_err(|e| Error::CreateFileError(e.to_string()))?;
        let f_writer = io::BufWriter::new(f);
        serde_yaml::to_writer(f_writer, self)?;
        Ok(path.to_string_lossy().to_string())
    }

    pub fn read_fs<P>(path: P) -> Result<Config>
    where P: AsRef<std::path::Path> {
        let path = expand_home(path)?;
        tracing::debug!("Read config from: {:?}", path);
        let f = fs::File::open(path).map_err(|e| Error::OpenFileError(e.to_string()))?;
        let f_rdr = io::BufReader::new(f);
        Ok(serde_yaml::from_reader(f_rdr)?)
    }
}

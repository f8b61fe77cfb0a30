use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::io::{self, Write};
use tracing::warn;

use crate::datamodel::{GraphMetric, GraphSpec, GraphUnit};

pub const META_ENV: &str = "MACKEREL_AGENT_PLUGIN_META";
pub const META_HEADER: &str = "# mackerel-agent-plugin";

/// Writes one `key\tvalue\ttime` line per graphed metric present in `stats`.
///
/// Graphs come out in key order, metrics in graph order. NaN and infinite
/// values are left out.
pub fn write_values<W: Write>(
    writer: &mut W,
    key_prefix: &str,
    graphs: &BTreeMap<String, GraphSpec>,
    stats: &HashMap<String, f64>,
    unix_seconds: i64,
) -> io::Result<usize> {
    let mut written = 0;
    for (graph_key, graph) in graphs {
        for metric in &graph.metrics {
            let Some(value) = stats.get(&metric.name) else {
                continue;
            };
            if !value.is_finite() {
                warn!("Skipping non-finite value {} for {}", value, metric.name);
                continue;
            }
            let key = metric_key(key_prefix, graph_key, &metric.name);
            writeln!(writer, "{}\t{:.6}\t{}", key, value, unix_seconds)?;
            written += 1;
        }
    }
    Ok(written)
}

fn metric_key(key_prefix: &str, graph_key: &str, metric_name: &str) -> String {
    [key_prefix, graph_key, metric_name]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(".")
}

#[derive(Debug, Serialize)]
struct GraphMeta<'a> {
    label: &'a str,
    unit: GraphUnit,
    metrics: &'a [GraphMetric],
}

#[derive(Debug, Serialize)]
struct Meta<'a> {
    graphs: BTreeMap<String, GraphMeta<'a>>,
}

/// Writes the graph definitions in the agent's meta format.
pub fn write_meta<W: Write>(
    writer: &mut W,
    key_prefix: &str,
    graphs: &BTreeMap<String, GraphSpec>,
) -> anyhow::Result<()> {
    let meta = Meta {
        graphs: graphs
            .iter()
            .map(|(graph_key, graph)| {
                let key = if key_prefix.is_empty() {
                    graph_key.clone()
                } else {
                    format!("{}.{}", key_prefix, graph_key)
                };
                let meta = GraphMeta {
                    label: &graph.label,
                    unit: graph.unit,
                    metrics: &graph.metrics,
                };
                (key, meta)
            })
            .collect(),
    };

    writeln!(writer, "{}", META_HEADER)?;
    serde_json::to_writer(&mut *writer, &meta)?;
    writeln!(writer)?;
    Ok(())
}

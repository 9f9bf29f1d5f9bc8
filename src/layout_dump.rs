use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::layout::Layout;
use crate::model::ThoughtNode;

#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub mode: String,
    pub node_count: usize,
    pub nodes: Vec<NodeDump>,
    pub links: Vec<LinkDump>,
}

#[derive(Debug, Serialize)]
pub struct NodeDump {
    pub id: String,
    pub category: String,
    pub importance: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Debug, Serialize)]
pub struct LinkDump {
    pub source: String,
    pub target: String,
    pub strength: f32,
}

impl LayoutDump {
    pub fn from_layout(layout: &Layout, nodes: &[ThoughtNode]) -> Self {
        let dumped_nodes: Vec<NodeDump> = nodes
            .iter()
            .filter_map(|node| {
                let position = layout.positions.get(&node.id)?;
                Some(NodeDump {
                    id: node.id.clone(),
                    category: node.category.as_str().to_string(),
                    importance: node.clamped_importance(),
                    x: position.x,
                    y: position.y,
                    z: position.z,
                })
            })
            .collect();

        // Links are drawn in the graph modes only, and a link whose endpoint
        // was filtered out of the node set is skipped, never an error.
        let links = if layout.mode.shows_links() {
            layout
                .links
                .iter()
                .filter(|link| {
                    layout.positions.contains_key(&link.source)
                        && layout.positions.contains_key(&link.target)
                })
                .map(|link| LinkDump {
                    source: link.source.clone(),
                    target: link.target.clone(),
                    strength: link.strength,
                })
                .collect()
        } else {
            Vec::new()
        };

        LayoutDump {
            mode: layout.mode.as_str().to_string(),
            node_count: dumped_nodes.len(),
            nodes: dumped_nodes,
            links,
        }
    }
}

/// Write the dump as pretty JSON to `path`, or stdout when no path is given.
pub fn write_layout_dump(
    path: Option<&Path>,
    layout: &Layout,
    nodes: &[ThoughtNode],
) -> anyhow::Result<()> {
    let dump = LayoutDump::from_layout(layout, nodes);
    match path {
        Some(path) => {
            let file = File::create(path)?;
            let writer = BufWriter::new(file);
            serde_json::to_writer_pretty(writer, &dump)?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            serde_json::to_writer_pretty(&mut handle, &dump)?;
            handle.write_all(b"\n")?;
        }
    }
    Ok(())
}

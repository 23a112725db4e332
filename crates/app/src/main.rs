use anyhow::{Context, Result};
use clap::Parser;
use dag_layout::{DagLayout, GraphIndex, InputEdge, InputNode, PositionedNode, Vec2};
use dagview_scene::Scene;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

/// Graph description document, RON-encoded
#[derive(Debug, Deserialize)]
struct GraphDoc {
    nodes: Vec<NodeDoc>,
    edges: Vec<EdgeDoc>,
}

#[derive(Debug, Deserialize)]
struct NodeDoc {
    id: String,

    /// Label shown inside the node box; defaults to the id
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EdgeDoc {
    source: String,
    target: String,
}

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// RON file describing the graph to lay out
    input: PathBuf,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 500.0)]
    width: f32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 500.0)]
    height: f32,

    /// Rendered node box width
    #[arg(long, default_value_t = 40.0)]
    node_width: f32,

    /// Rendered node box height
    #[arg(long, default_value_t = 20.0)]
    node_height: f32,

    /// Gap reserved for the arrowhead before each target box
    #[arg(long, default_value_t = 3.0)]
    clearance: f32,

    /// Ids to flag as selected in the scene; repeatable
    #[arg(long = "selected")]
    selected: Vec<String>,

    /// Attach label scale factors from a character-cell size estimate
    #[arg(long)]
    estimate_labels: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let doc: GraphDoc = ron::from_str(&text)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;

    let nodes: Vec<InputNode> = doc
        .nodes
        .into_iter()
        .map(|node| {
            let name = node.name.unwrap_or_else(|| node.id.clone());
            InputNode::new(node.id, name)
        })
        .collect();
    let edges: Vec<InputEdge> = doc
        .edges
        .iter()
        .map(|edge| InputEdge::new(edge.source.as_str(), edge.target.as_str()))
        .collect();
    info!("Laying out {} nodes and {} edges", nodes.len(), edges.len());

    let layout = DagLayout {
        canvas: Vec2::new(args.width, args.height),
        node_size: Vec2::new(args.node_width, args.node_height),
        arrow_clearance: args.clearance,
    };

    let index = GraphIndex::build(nodes, &edges).context("Failed to index the graph")?;
    let mut positioned = layout.position(&index).context("Layout failed")?;
    debug!("Positioned {} nodes", positioned.nodes().len());

    if args.estimate_labels {
        positioned.apply_label_metrics(layout.node_size, &estimate_label_box);
    }

    let selected: HashSet<String> = args.selected.into_iter().collect();
    let scene = Scene::build(&layout, &positioned, &edges, &selected)?;

    let pretty = ron::ser::PrettyConfig::default();
    println!("{}", ron::ser::to_string_pretty(&scene, pretty)?);

    Ok(())
}

/// Rough glyph-cell estimate standing in for the renderer's text measurement
fn estimate_label_box(node: &PositionedNode) -> Option<Vec2> {
    let glyphs = node.display_name.chars().count();
    if glyphs == 0 {
        return None;
    }
    Some(Vec2::new(glyphs as f32 * 8.0, 14.0))
}

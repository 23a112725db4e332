//! Render-facing scene data for DAG viewers
//!
//! Bridges the layout core and the drawing surface: the scene lists every
//! node with its anchors and every edge with the endpoint its arrowhead
//! should stop at, ready to serialize in whatever format the renderer
//! consumes.

mod scene;

pub use scene::{Scene, SceneEdge, SceneNode, ScenePoint};

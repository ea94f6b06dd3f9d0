//! Animated hub diagram: curved beams from operator nodes into the hub and
//! out to supplier nodes, with a dot travelling along each beam.

mod component;
pub mod geometry;
pub mod state;

pub use component::BeamDiagram;

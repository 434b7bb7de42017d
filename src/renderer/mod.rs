//! Rendering support
//!
//! The GPU/canvas side lives in the host page. This module turns a
//! [`Snapshot`](crate::snapshot::Snapshot) into triangle lists it can upload.

pub mod shapes;
pub mod vertex;

pub use shapes::scene;
pub use vertex::{Vertex, as_floats};

pub mod traits;
pub mod vertex;
pub mod directed;
pub mod generators;

pub use traits::{Graph, MutableGraph};
pub use vertex::{Edge, Vertex, VertexId};
pub use directed::DirectedGraph;

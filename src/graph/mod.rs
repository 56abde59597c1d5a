pub mod traits;
pub mod undirected;
pub mod generators;
pub mod weight;

pub use traits::{Graph, MutableGraph};
pub use undirected::{Edge, UndirectedGraph};
pub use weight::Weight;

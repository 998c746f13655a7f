pub mod attribute_index;
pub mod ranking;
pub mod recommendations;
pub mod similarity_graph;

pub use attribute_index::AttributeIndex;
pub use recommendations::Recommender;
pub use similarity_graph::SimilarityGraph;

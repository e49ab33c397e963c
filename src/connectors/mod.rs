/// Readers that turn external edge sources into validated `Edge` streams.
pub mod edge_list;

pub use edge_list::{load_edge_list, parse_line, read_edge_list, EdgeList};

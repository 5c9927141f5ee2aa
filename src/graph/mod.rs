//! Graph model, generation, and file I/O

pub mod generator;
pub mod io;
pub mod model;

pub use generator::{generate_connected_graph, random_query};
pub use io::{create_example_graphs, load_graph_from_file, save_graph_to_file};
pub use model::Graph;

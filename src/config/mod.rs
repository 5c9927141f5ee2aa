//! Configuration management for the shortest-path solver

pub mod settings;

pub use settings::{
    CliOverrides, InputConfig, OutputConfig, OutputFormat, QueryConfig, Settings, SolverConfig,
};

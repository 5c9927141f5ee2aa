//! Main CLI application for the SAT-based shortest path finder

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sat_shortest_path::{
    config::{CliOverrides, Settings},
    graph::{create_example_graphs, generate_connected_graph, load_graph_from_file, save_graph_to_file},
    search::{PathSolution, PathValidator, ShortestPathProblem},
    solve_shortest_path,
    utils::{ColorOutput, ResultFormatter},
    PathOutcome,
};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "sat_shortest_path")]
#[command(about = "SAT-based shortest path finder")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest path between two nodes
    Solve {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Graph file (overrides config)
        #[arg(short, long)]
        graph: Option<PathBuf>,

        /// Source node (overrides config)
        #[arg(short, long)]
        source: Option<usize>,

        /// Target node (overrides config)
        #[arg(short, long)]
        target: Option<usize>,

        /// Solve candidate lengths in parallel
        #[arg(short, long)]
        parallel: bool,

        /// Output directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Generate a random connected graph
    Generate {
        /// Number of nodes
        #[arg(short, long, default_value = "10")]
        nodes: usize,

        /// Extra random edges beyond the spanning chain
        #[arg(short, long, default_value = "10")]
        extra_edges: usize,

        /// RNG seed for reproducible graphs
        #[arg(short, long)]
        seed: Option<u64>,

        /// File to write the graph to
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Validate a previously found path against its graph
    Validate {
        /// Graph file the path was found in
        #[arg(short, long)]
        graph: PathBuf,

        /// JSON solution file to check
        #[arg(short, long)]
        solution: PathBuf,

        /// Also cross-check minimality against BFS
        #[arg(short, long)]
        minimal: bool,
    },

    /// Analyze a graph's structure
    Analyze {
        /// Graph file to analyze
        #[arg(short, long)]
        graph: PathBuf,
    },

    /// Create example configuration and input files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            config,
            graph,
            source,
            target,
            parallel,
            output,
            verbose,
        } => solve_command(config, graph, source, target, parallel, output, verbose),
        Commands::Generate {
            nodes,
            extra_edges,
            seed,
            output,
        } => generate_command(nodes, extra_edges, seed, output),
        Commands::Validate {
            graph,
            solution,
            minimal,
        } => validate_command(graph, solution, minimal),
        Commands::Analyze { graph } => analyze_command(graph),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn solve_command(
    config_path: PathBuf,
    graph_file: Option<PathBuf>,
    source: Option<usize>,
    target: Option<usize>,
    parallel: bool,
    output_dir: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    println!("{}", ColorOutput::info("Starting shortest path search"));

    // Load configuration
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };

    // Apply CLI overrides
    let cli_overrides = CliOverrides {
        graph_file,
        source,
        target,
        parallel: parallel.then_some(true),
        output_dir,
    };
    settings.merge_with_cli(&cli_overrides);

    if verbose {
        println!("Configuration:");
        println!("  Graph file: {}", settings.input.graph_file.display());
        println!("  Query: {} -> {}", settings.query.source, settings.query.target);
        println!("  Parallel: {}", settings.solver.parallel);
        println!("  Output dir: {}", settings.output.output_directory.display());
        println!();
    }

    settings
        .validate()
        .context("Configuration validation failed")?;

    let start_time = Instant::now();
    let outcome = solve_shortest_path(settings.clone()).context("Search failed")?;
    let total_time = start_time.elapsed();

    match &outcome {
        PathOutcome::Found(solution) => {
            println!(
                "{}",
                ColorOutput::success(&format!(
                    "Found shortest path of {} nodes in {:.3}s",
                    solution.length(),
                    total_time.as_secs_f64()
                ))
            );
        }
        PathOutcome::NoPath(_) => {
            println!(
                "{}",
                ColorOutput::warning(&format!(
                    "No path exists ({:.3}s)",
                    total_time.as_secs_f64()
                ))
            );
        }
    }

    println!("\n{}", ResultFormatter::format_outcome(&outcome, verbose));

    ResultFormatter::save_outcome(
        &outcome,
        &settings.output.output_directory,
        &settings.output.format,
        settings.output.save_report,
    )
    .context("Failed to save results")?;

    println!(
        "{}",
        ColorOutput::success(&format!(
            "Results saved to {}",
            settings.output.output_directory.display()
        ))
    );

    Ok(())
}

fn generate_command(
    nodes: usize,
    extra_edges: usize,
    seed: Option<u64>,
    output: PathBuf,
) -> Result<()> {
    println!("{}", ColorOutput::info("Generating random connected graph"));

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let graph = generate_connected_graph(&mut rng, nodes, extra_edges)
        .context("Graph generation failed")?;

    save_graph_to_file(&graph, &output)
        .with_context(|| format!("Failed to write graph to {}", output.display()))?;

    println!(
        "{}",
        ColorOutput::success(&format!(
            "Wrote {} nodes, {} edges to {}",
            graph.node_count(),
            graph.edge_count(),
            output.display()
        ))
    );

    Ok(())
}

fn validate_command(graph_path: PathBuf, solution_path: PathBuf, minimal: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Validating path"));

    let graph = load_graph_from_file(&graph_path)
        .with_context(|| format!("Failed to load graph from {}", graph_path.display()))?;
    let solution = PathSolution::load_from_file(&solution_path)
        .with_context(|| format!("Failed to load solution from {}", solution_path.display()))?;

    println!("Path: {}", solution);

    let validator = PathValidator::new(&graph);
    let result = if minimal {
        validator.validate_minimal(&solution.path, solution.source, solution.target)?
    } else {
        validator.validate(&solution.path, solution.source, solution.target)?
    };

    println!("{}", result);

    if result.is_valid {
        println!("{}", ColorOutput::success("Path is valid"));
    } else {
        println!("{}", ColorOutput::error("Path is invalid"));
    }

    Ok(())
}

fn analyze_command(graph_path: PathBuf) -> Result<()> {
    println!("{}", ColorOutput::info("Analyzing graph"));

    let graph = load_graph_from_file(&graph_path)
        .with_context(|| format!("Failed to load graph from {}", graph_path.display()))?;

    println!("Graph Statistics:");
    println!("  Nodes: {}", graph.node_count());
    println!("  Edges: {}", graph.edge_count());
    println!("  Connected: {}", graph.is_connected());

    let degrees: Vec<usize> = (0..graph.node_count()).map(|n| graph.degree(n)).collect();
    if let (Some(&min), Some(&max)) = (degrees.iter().min(), degrees.iter().max()) {
        let mean = degrees.iter().sum::<usize>() as f64 / degrees.len() as f64;
        println!("  Degree: min {}, max {}, mean {:.1}", min, max, mean);
    }

    println!("\n{}", ResultFormatter::format_graph(&graph));

    // Instance-size preview for the largest candidate length
    let node_count = graph.node_count();
    if node_count >= 2 {
        let problem = ShortestPathProblem::new(graph, 0, node_count - 1)?;
        let (source, target) = problem.query();
        println!(
            "Largest CNF instance (length {}): {} variables",
            node_count,
            node_count * node_count
        );
        println!("Example query: {} -> {}", source, target);
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure"));

    let config_dir = directory.join("config");
    let input_dir = directory.join("input/graphs");
    let output_dir = directory.join("output/paths");

    for dir in [&config_dir, &input_dir, &output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    // Default configuration
    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let mut default_settings = Settings::default();
        default_settings.input.graph_file = input_dir.join("cycle.txt");
        default_settings
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_graphs(&input_dir).context("Failed to create example graphs")?;
    println!("Created example graphs in: {}", input_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Add your graphs to {}", input_dir.display());
    println!("3. Run: cargo run -- solve --config config/default.yaml");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "sat_shortest_path",
            "solve",
            "--config",
            "test.yaml",
            "--source",
            "0",
            "--target",
            "3",
        ]);

        assert!(cli.is_ok());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("input/graphs/cycle.txt").exists());
    }

    #[test]
    fn test_generate_command_writes_graph() {
        let temp_dir = tempdir().unwrap();
        let output = temp_dir.path().join("graph.txt");

        generate_command(8, 4, Some(11), output.clone()).unwrap();

        let graph = load_graph_from_file(&output).unwrap();
        assert_eq!(graph.node_count(), 8);
        assert!(graph.is_connected());
    }
}

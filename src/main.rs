use clap::{Parser, Subcommand};
use online_coloring::experiment::{format_table, ExperimentConfig, ExperimentRunner};
use online_coloring::logging::init_logging;
use online_coloring::utils::random_graph::{generate_many, GeneratorParams};
use online_coloring::utils::serialization::{
    load_from_edges_file, load_graph_instance, save_graph_instance, save_to_edges_file,
    GraphInstance,
};
use online_coloring::{validate_coloring, verify_partition, Algorithm, Graph};
use std::path::{Path, PathBuf};
use std::time::Instant;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(author, version, about = "Online graph coloring experiments", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random k-colourable graph and write it as an EDGES file
    Generate {
        #[arg(short, long)]
        nodes: u32,
        #[arg(short, long, default_value_t = 2)]
        k: u32,
        #[arg(short, long, default_value_t = 0.3)]
        p: f64,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
        /// Also store a binary snapshot including the partition
        #[arg(long, value_name = "FILE")]
        snapshot: Option<PathBuf>,
    },
    /// Generate a batch of instances for every (k, n) pair into a folder
    GenerateMany {
        #[arg(long, value_delimiter = ',', default_value = "50,100,200")]
        n_values: Vec<u32>,
        #[arg(long, value_delimiter = ',', default_value = "2,3,4")]
        k_values: Vec<u32>,
        #[arg(short, long, default_value_t = 0.3)]
        p: f64,
        #[arg(long, default_value_t = 10)]
        per_setting: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(short, long, value_name = "DIR")]
        folder: PathBuf,
    },
    /// Color a stored graph with one of the online algorithms
    Color {
        /// EDGES file, or a binary snapshot when the extension is `.bin`
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,
        #[arg(short, long, default_value = "first-fit")]
        algorithm: Algorithm,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Print the color of every vertex
        #[arg(long)]
        show: bool,
    },
    /// Measure competitive ratios over many generated graphs
    Simulate {
        /// TOML experiment description; flags override its fields
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
        #[arg(long, value_delimiter = ',')]
        n_values: Option<Vec<u32>>,
        #[arg(long, value_delimiter = ',')]
        k_values: Option<Vec<u32>>,
        #[arg(short, long)]
        p: Option<f64>,
        #[arg(long)]
        trials: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_delimiter = ',')]
        algorithms: Option<Vec<Algorithm>>,
        /// Small sweep (n = 50,100; k = 2,3; 20 trials)
        #[arg(long)]
        quick: bool,
        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
        #[arg(long)]
        quiet: bool,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> CliResult<()> {
    init_logging()?;
    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            nodes,
            k,
            p,
            seed,
            output,
            snapshot,
        } => run_generate(GeneratorParams { n: nodes, k, p, seed }, output, snapshot)?,
        Commands::GenerateMany {
            n_values,
            k_values,
            p,
            per_setting,
            seed,
            folder,
        } => run_generate_many(&n_values, &k_values, p, per_setting, seed, folder)?,
        Commands::Color {
            input,
            algorithm,
            seed,
            show,
        } => run_color(input, algorithm, seed, show)?,
        Commands::Simulate {
            config,
            n_values,
            k_values,
            p,
            trials,
            seed,
            algorithms,
            quick,
            json,
            quiet,
        } => {
            let mut experiment = match (config, quick) {
                (Some(path), _) => ExperimentConfig::load(path)?,
                (None, true) => ExperimentConfig::quick(),
                (None, false) => ExperimentConfig::default(),
            };
            if let Some(values) = n_values {
                experiment.n_values = values;
            }
            if let Some(values) = k_values {
                experiment.k_values = values;
            }
            if let Some(value) = p {
                experiment.p = value;
            }
            if let Some(value) = trials {
                experiment.trials = value;
            }
            if let Some(value) = seed {
                experiment.seed = value;
            }
            if let Some(values) = algorithms {
                experiment.algorithms = values;
            }
            run_simulate(experiment, json, quiet)?
        }
    }
    Ok(())
}

fn run_generate(params: GeneratorParams, output: PathBuf, snapshot: Option<PathBuf>) -> CliResult<()> {
    println!(
        "Generating {}-colourable graph (n = {}, p = {:.2}, seed = {})...",
        params.k, params.n, params.p, params.seed
    );
    let (graph, partition) = params.generate()?;
    verify_partition(&graph, &partition)?;
    println!(
        "  edges = {}, max degree = {}, block sizes = {:?}",
        graph.edge_count(),
        graph.max_degree(),
        partition.block_sizes()
    );
    println!("  fingerprint = {}", hex::encode(graph.fingerprint()));

    save_to_edges_file(&graph, &output)?;
    println!("Graph saved to {}", output.display());
    if let Some(path) = snapshot {
        let instance = GraphInstance::with_metadata(&graph, partition, params);
        save_graph_instance(&path, &instance)?;
        println!("Snapshot saved to {}", path.display());
    }
    Ok(())
}

fn run_generate_many(
    n_values: &[u32],
    k_values: &[u32],
    p: f64,
    per_setting: usize,
    seed: u64,
    folder: PathBuf,
) -> CliResult<()> {
    std::fs::create_dir_all(&folder)?;
    let instances = generate_many(n_values, k_values, p, per_setting, seed)?;
    for instance in &instances {
        let path = folder.join(format!("{}.edges", instance.name));
        save_to_edges_file(&instance.graph, &path)?;
    }
    println!(
        "Successfully generated {} graphs in '{}'",
        instances.len(),
        folder.display()
    );
    Ok(())
}

fn load_graph(path: &Path) -> CliResult<Graph> {
    let is_snapshot = path.extension().is_some_and(|ext| ext == "bin");
    if is_snapshot {
        Ok(load_graph_instance(path)?.graph()?)
    } else {
        Ok(load_from_edges_file(path)?)
    }
}

fn run_color(input: PathBuf, algorithm: Algorithm, seed: u64, show: bool) -> CliResult<()> {
    let graph = load_graph(&input)?;
    println!(
        "Loaded graph with {} vertices and {} edges from {}",
        graph.vertex_count(),
        graph.edge_count(),
        input.display()
    );

    let start = Instant::now();
    let coloring = match algorithm.run(&graph, seed) {
        Ok(coloring) => coloring,
        Err(err) if err.is_not_bipartite() => {
            println!("{algorithm}: {err}");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    let elapsed = start.elapsed();
    let colors = validate_coloring(&graph, &coloring)?;

    println!(
        "{algorithm}: {colors} colors (max degree + 1 = {}) in {:.2} ms",
        graph.max_degree() + 1,
        elapsed.as_secs_f64() * 1_000.0
    );
    if show {
        for (vertex, color) in coloring.iter() {
            if let Some(color) = color {
                println!("{vertex} {color}");
            }
        }
    }
    Ok(())
}

fn run_simulate(config: ExperimentConfig, json: bool, quiet: bool) -> CliResult<()> {
    if !quiet {
        println!("Experiment configuration:");
        println!("  n values:          {:?}", config.n_values);
        println!("  k values:          {:?}", config.k_values);
        println!("  Edge probability:  {}", config.p);
        println!("  Graphs per (k,n):  {}", config.trials);
        println!("  Random seed:       {}", config.seed);
        println!();
    }

    let runner = ExperimentRunner::new(config)?.with_progress(!quiet);
    let records = runner.run()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        print!("{}", format_table(&records));
    }
    Ok(())
}

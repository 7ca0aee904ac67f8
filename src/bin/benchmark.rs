use clap::Parser;
use online_coloring::logging::init_logging;
use online_coloring::{generate_k_colourable_graph, validate_coloring, Algorithm};
use std::time::{Duration, Instant};

struct BenchmarkResult {
    algorithm: Algorithm,
    nodes: u32,
    k: u32,
    samples: u32,
    edges: usize,
    generate_time: Duration,
    color_time: Duration,
    colors: usize,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Timing runner for the online coloring algorithms")]
struct BenchmarkCli {
    /// Comma-separated list of node counts to benchmark (e.g. 100,400,1600)
    #[arg(long, value_delimiter = ',', value_parser = clap::value_parser!(u32))]
    nodes: Option<Vec<u32>>,
    /// Comma-separated list of k values (default: 2,3)
    #[arg(long, value_delimiter = ',', value_parser = clap::value_parser!(u32))]
    k: Option<Vec<u32>>,
    /// Comma-separated list of algorithms (first-fit,degree,smallest-last,cbip)
    #[arg(long, value_delimiter = ',')]
    algorithms: Option<Vec<Algorithm>>,
    /// Edge probability for optional edges (default: 0.3)
    #[arg(long)]
    p: Option<f64>,
    /// Graphs per configuration (default: 3)
    #[arg(long)]
    samples: Option<u32>,
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() {
    if let Err(err) = init_logging() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
    let cli = BenchmarkCli::parse();
    println!("=== Online Coloring Benchmark ===\n");

    let node_sizes = cli.nodes.unwrap_or_else(|| vec![100, 200, 400, 800]);
    let k_values = cli.k.unwrap_or_else(|| vec![2, 3]);
    let algorithms = cli.algorithms.unwrap_or_else(|| Algorithm::ALL.to_vec());
    let p = cli.p.unwrap_or(0.3);
    let samples = cli.samples.unwrap_or(3).max(1);

    let mut all_results = Vec::new();
    for &nodes in &node_sizes {
        for &k in &k_values {
            for &algorithm in &algorithms {
                if algorithm.requires_bipartite() && k != 2 {
                    continue;
                }
                match run_benchmark(algorithm, nodes, k, p, samples, cli.seed) {
                    Ok(result) => {
                        print_result(&result);
                        all_results.push(result);
                    }
                    Err(e) => {
                        eprintln!("  ✗ {algorithm} on n={nodes}, k={k} failed: {e}");
                    }
                }
            }
        }
    }

    println!("\n=== Summary Report ===\n");
    print_summary_table(&all_results);
}

fn run_benchmark(
    algorithm: Algorithm,
    nodes: u32,
    k: u32,
    p: f64,
    samples: u32,
    seed: u64,
) -> Result<BenchmarkResult, Box<dyn std::error::Error>> {
    let mut generate_time = Duration::ZERO;
    let mut color_time = Duration::ZERO;
    let mut colors = 0usize;
    let mut edges = 0usize;

    for sample in 0..samples {
        let sample_seed = seed.wrapping_add(sample as u64);
        let start = Instant::now();
        let (graph, _) = generate_k_colourable_graph(nodes, k, p, sample_seed)?;
        generate_time += start.elapsed();
        edges += graph.edge_count();

        let start = Instant::now();
        let coloring = algorithm.run(&graph, sample_seed)?;
        color_time += start.elapsed();
        colors += validate_coloring(&graph, &coloring)?;
    }

    Ok(BenchmarkResult {
        algorithm,
        nodes,
        k,
        samples,
        edges: edges / samples as usize,
        generate_time: generate_time / samples,
        color_time: color_time / samples,
        colors: colors / samples as usize,
    })
}

fn print_result(result: &BenchmarkResult) {
    println!(
        "  {:<22} n={:<6} k={} → {:>8} edges | generate {:>9.2} ms | color {:>9.3} ms | {} colors",
        result.algorithm.to_string(),
        result.nodes,
        result.k,
        result.edges,
        duration_ms(result.generate_time),
        duration_ms(result.color_time),
        result.colors
    );
}

fn print_summary_table(results: &[BenchmarkResult]) {
    println!(
        "{:<22} | {:>6} | {:>2} | {:>7} | {:>10} | {:>6} | {:>6}",
        "Algorithm", "Nodes", "k", "Samples", "Color (ms)", "Colors", "Ratio"
    );
    println!("{}", "-".repeat(78));
    for result in results {
        println!(
            "{:<22} | {:>6} | {:>2} | {:>7} | {:>10.3} | {:>6} | {:>6.2}",
            result.algorithm.to_string(),
            result.nodes,
            result.k,
            result.samples,
            duration_ms(result.color_time),
            result.colors,
            result.colors as f64 / result.k as f64
        );
    }
}

fn duration_ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1_000.0
}

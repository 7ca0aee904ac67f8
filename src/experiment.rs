use crate::error::{Error, Result};
use crate::online::Algorithm;
use crate::utils::random_graph::generate_k_colourable_graph;
use crate::validate::validate_coloring;
use indicatif::{ProgressBar, ProgressStyle};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    pub n_values: Vec<u32>,
    pub k_values: Vec<u32>,
    pub p: f64,
    pub trials: usize,
    pub seed: u64,
    pub algorithms: Vec<Algorithm>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        ExperimentConfig {
            n_values: vec![50, 100, 200, 400, 800, 1600],
            k_values: vec![2, 3, 4],
            p: 0.3,
            trials: 100,
            seed: 42,
            algorithms: Algorithm::ALL.to_vec(),
        }
    }
}

impl ExperimentConfig {
    /// Small sweep for smoke runs.
    pub fn quick() -> Self {
        ExperimentConfig {
            n_values: vec![50, 100],
            k_values: vec![2, 3],
            trials: 20,
            ..ExperimentConfig::default()
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: ExperimentConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.n_values.is_empty() || self.k_values.is_empty() {
            return Err(Error::invalid("n_values and k_values must not be empty"));
        }
        if self.algorithms.is_empty() {
            return Err(Error::invalid("at least one algorithm is required"));
        }
        if self.trials == 0 {
            return Err(Error::invalid("trials must be greater than zero"));
        }
        if !(0.0..=1.0).contains(&self.p) {
            return Err(Error::invalid(format!("p must be in [0.0, 1.0], got {}", self.p)));
        }
        if let Some(&k) = self.k_values.iter().find(|&&k| k == 0) {
            return Err(Error::invalid(format!("k must be at least 1, got {k}")));
        }
        if !self.settings().any(|_| true) {
            return Err(Error::invalid("every (k, n) combination has k > n"));
        }
        Ok(())
    }

    /// `(k, n)` pairs in run order, skipping `k > n`.
    pub fn settings(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.k_values.iter().flat_map(move |&k| {
            self.n_values
                .iter()
                .filter(move |&&n| k <= n)
                .map(move |&n| (k, n))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatioStats {
    pub mean: f64,
    pub sd: f64,
    pub min: f64,
    pub max: f64,
}

/// Mean, sample standard deviation (N-1 denominator), min and max.
pub fn competitive_stats(ratios: &[f64]) -> Option<RatioStats> {
    if ratios.is_empty() {
        return None;
    }
    let count = ratios.len() as f64;
    let mean = ratios.iter().sum::<f64>() / count;
    let sd = if ratios.len() > 1 {
        let variance = ratios.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (count - 1.0);
        variance.sqrt()
    } else {
        0.0
    };
    let min = ratios.iter().copied().fold(f64::INFINITY, f64::min);
    let max = ratios.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some(RatioStats { mean, sd, min, max })
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperimentRecord {
    pub algorithm: Algorithm,
    pub k: u32,
    pub n: u32,
    pub trials: usize,
    pub stats: RatioStats,
}

pub struct ExperimentRunner {
    config: ExperimentConfig,
    progress: bool,
}

impl ExperimentRunner {
    pub fn new(config: ExperimentConfig) -> Result<Self> {
        config.validate()?;
        Ok(ExperimentRunner {
            config,
            progress: false,
        })
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Runs every configured algorithm on the same generated graphs. CBIP
    /// only runs on `k = 2` instances. The competitive ratio of a run is the
    /// number of colours used divided by `k`.
    pub fn run(&self) -> Result<Vec<ExperimentRecord>> {
        let config = &self.config;
        let settings: Vec<(u32, u32)> = config.settings().collect();
        let progress = self.progress_bar((settings.len() * config.trials) as u64);
        let mut seeds = ChaCha8Rng::seed_from_u64(config.seed);
        let mut records = Vec::new();

        for (k, n) in settings {
            progress.set_message(format!("k={k}, n={n}"));
            tracing::info!(k, n, trials = config.trials, "running setting");

            let algorithms: Vec<Algorithm> = config
                .algorithms
                .iter()
                .copied()
                .filter(|algorithm| !algorithm.requires_bipartite() || k == 2)
                .collect();
            let mut ratios = vec![Vec::with_capacity(config.trials); algorithms.len()];

            for _ in 0..config.trials {
                let graph_seed: u64 = seeds.random();
                let order_seed: u64 = seeds.random();
                let (graph, _) = generate_k_colourable_graph(n, k, config.p, graph_seed)?;

                for (algorithm, samples) in algorithms.iter().zip(ratios.iter_mut()) {
                    let coloring = algorithm.run(&graph, order_seed)?;
                    let colors = validate_coloring(&graph, &coloring).map_err(|violation| {
                        Error::InvalidColoring {
                            algorithm: algorithm.to_string(),
                            violation,
                        }
                    })?;
                    samples.push(colors as f64 / k as f64);
                }
                progress.inc(1);
            }

            for (algorithm, samples) in algorithms.into_iter().zip(ratios) {
                if let Some(stats) = competitive_stats(&samples) {
                    tracing::debug!(%algorithm, k, n, mean = stats.mean, "setting finished");
                    records.push(ExperimentRecord {
                        algorithm,
                        k,
                        n,
                        trials: samples.len(),
                        stats,
                    });
                }
            }
        }

        progress.finish_and_clear();
        Ok(records)
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.progress {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new(len);
        if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} trials {msg}") {
            bar.set_style(style);
        }
        bar
    }
}

/// Renders records as comma-separated lines under a header row.
pub fn format_table(records: &[ExperimentRecord]) -> String {
    let mut out = String::from("Algorithm,k,n,N,avg_ratio,sd_ratio,min_ratio,max_ratio\n");
    for record in records {
        let _ = writeln!(
            out,
            "{},{},{},{},{:.4},{:.4},{:.4},{:.4}",
            record.algorithm,
            record.k,
            record.n,
            record.trials,
            record.stats.mean,
            record.stats.sd,
            record.stats.min,
            record.stats.max
        );
    }
    out
}

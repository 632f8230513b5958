use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::{Path, PathBuf};

// 导入库模块
use graphtrace::config::Config;
use graphtrace::services::{presets, random_graph, RandomGraphOptions, Replayer};
use graphtrace::utils::logging;
use graphtrace::{AlgorithmKind, Graph};

#[derive(Parser)]
#[clap(version = "0.1.0", about = "Step-by-step traces of classic graph algorithms")]
struct Cli {
    /// Configuration file (TOML); defaults are used when omitted
    #[clap(short, long, global = true)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run an algorithm on a graph and write its trace as JSON
    Run {
        #[clap(short, long)]
        graph: PathBuf,
        #[clap(short, long, value_enum)]
        algorithm: AlgorithmKind,
        #[clap(short, long)]
        start: Option<String>,
        /// Write the graph as it looks after the last step instead of the trace
        #[clap(long)]
        final_state: bool,
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
    /// Generate a random connected graph
    Random {
        #[clap(short, long, default_value_t = 6)]
        nodes: usize,
        #[clap(long, default_value_t = 1)]
        min_weight: i64,
        #[clap(long, default_value_t = 20)]
        max_weight: i64,
        #[clap(long)]
        seed: Option<u64>,
        #[clap(long)]
        directed: bool,
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
    /// List the preset scenarios, or print one as JSON
    Preset { name: Option<String> },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    logging::init(&config.log).context("Failed to initialize logging")?;

    let result = execute(cli.command, &config);
    logging::shutdown();
    result
}

fn execute(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Run {
            graph,
            algorithm,
            start,
            final_state,
            output,
        } => {
            let text = fs::read_to_string(&graph)
                .with_context(|| format!("Failed to read graph {}", graph.display()))?;
            let graph = Graph::from_json(&text)?;
            graph.validate()?;

            let trace = graphtrace::run(&graph, algorithm, start.as_deref(), &config.palette);
            log::info!("{} 生成 {} 个步骤", algorithm, trace.len());

            if final_state {
                let mut replayer = Replayer::from_config(&graph, config);
                replayer.apply_all(&trace);
                for message in replayer.messages() {
                    eprintln!("{}", message);
                }
                write_output(output.as_deref(), &replayer.graph().to_json()?)?;
            } else {
                write_output(output.as_deref(), &trace.to_json()?)?;
            }
        }
        Command::Random {
            nodes,
            min_weight,
            max_weight,
            seed,
            directed,
            output,
        } => {
            let options = RandomGraphOptions {
                directed,
                ..RandomGraphOptions::new(nodes, min_weight, max_weight)
            };
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let graph = random_graph::generate(&options, &mut rng)?;
            eprintln!("{}", random_graph::summary(&graph));
            write_output(output.as_deref(), &graph.to_json()?)?;
        }
        Command::Preset { name: None } => {
            for preset in presets::all() {
                println!(
                    "{:<28} {:<15} {}",
                    preset.name,
                    preset.algorithm.as_str(),
                    preset.description
                );
            }
        }
        Command::Preset { name: Some(name) } => {
            let preset = presets::find(&name)
                .with_context(|| format!("Unknown preset: {}", name))?;
            println!("{}", preset.graph.to_json()?);
        }
    }

    Ok(())
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{}", content),
    }
    Ok(())
}

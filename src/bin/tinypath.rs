use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs::File;

use tinypath::{input, render, Dijkstra, LinearScan, ShortestPathAlgorithm};

#[derive(Parser, Debug)]
#[command(name = "tinypath")]
#[command(about = "Run a label-setting shortest-path search over a small weighted graph.", long_about = None)]
struct Cli {
    /// Path to a JSON graph description. Omit to use the built-in
    /// five-vertex demo graph.
    #[arg(short, long)]
    graph: Option<String>,

    /// Name of the start vertex
    #[arg(short, long, default_value_t = String::from("A"))]
    source: String,

    /// Selection strategy
    #[arg(short, long, default_value_t = String::from("linear"))]
    algorithm: String,
}

enum Engine {
    Linear,
    Heap,
}

impl Engine {
    fn from(name: &str) -> Result<Self> {
        match name {
            "linear" => Ok(Engine::Linear),
            "heap" => Ok(Engine::Heap),
            _ => bail!(
                "unknown algorithm {:?}, possible options are: (\"linear\", \"heap\")",
                name
            ),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let engine = Engine::from(&cli.algorithm)?;

    let graph = match &cli.graph {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path))?;
            input::load_graph(file).with_context(|| format!("reading graph from {}", path))?
        }
        None => input::reference_graph()?,
    };

    let source = graph
        .lookup(&cli.source)
        .with_context(|| format!("resolving start vertex {:?}", cli.source))?;

    let result = match engine {
        Engine::Linear => LinearScan::new().compute_shortest_paths(graph.graph(), source)?,
        Engine::Heap => Dijkstra::new().compute_shortest_paths(graph.graph(), source)?,
    };

    print!("{}", render::render_table(&graph, &result)?);
    Ok(())
}

use std::path::PathBuf;

use clap::Parser;
use flowplan_core::{report, Network};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a problem specification (JSON)
    spec: PathBuf,

    /// Write a Graphviz rendering of the solved network to this path
    #[arg(short, long)]
    dot: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let spec = flowplan_driver::load_from_file(&args.spec)?;
    let solution = flowplan_driver::run(spec.clone())?;
    print!("{}", report::flow_table(&solution));
    if let Some(path) = args.dot {
        // The spec already validated once; rebuilding the network here is cheap.
        let network = Network::new(&spec.nodes, &spec.routes)?;
        std::fs::write(path, report::flow_dot(&network, &solution))?;
    }
    Ok(())
}

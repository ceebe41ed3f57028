use clap::Parser;

use noise_map::app;
use noise_map::cli::Cli;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    app::run(cli)
}

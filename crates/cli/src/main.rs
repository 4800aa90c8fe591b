use clap::Parser;

use stockroom_cli::{Cli, Command, StoreConfig, run};
use stockroom_inventory::TracingLog;

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let cli = Cli::parse();
    let config = StoreConfig::from_env().with_file(cli.file);
    tracing::debug!(path = %config.path.display(), "using inventory file");

    let stdout = std::io::stdout();
    run(cli.command.unwrap_or(Command::Demo), &config, TracingLog, &mut stdout.lock())
}

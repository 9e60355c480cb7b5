use std::io;

use kontener_console::Menu;
use kontener_console::cli::{CommandLine, Commands};
use kontener_observability::LogFormat;

fn main() -> anyhow::Result<()> {
    let cli = CommandLine::parse_args();
    let command = cli.command();

    // The menu shares its terminal with the log output.
    match command {
        Commands::Menu => kontener_observability::init_with_default_format(LogFormat::Compact),
        Commands::Demo { .. } => kontener_observability::init(),
    }

    match command {
        Commands::Menu => {
            tracing::info!("starting interactive menu");
            let stdin = io::stdin();
            Menu::new(stdin.lock(), io::stdout()).run()
        }
        Commands::Demo { json } => {
            tracing::info!(json, "running walkthrough");
            kontener_console::demo::run(&mut io::stdout().lock(), json)
        }
    }
}

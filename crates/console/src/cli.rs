use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "kontener")]
#[command(about = "Shipping container inventory console.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Commands {
    /// Interactive menu over a warehouse and a fleet of ships (default)
    #[command(alias = "m")]
    Menu,
    /// Scripted walkthrough of the container lifecycle
    #[command(alias = "d")]
    Demo {
        /// Print container reports as JSON
        #[arg(long)]
        json: bool,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn command(&self) -> Commands {
        match &self.command {
            Some(Commands::Demo { json }) => Commands::Demo { json: *json },
            Some(Commands::Menu) | None => Commands::Menu,
        }
    }
}

use clap::Parser;

#[derive(Clone, Debug, Parser)]
pub struct ConsoleOptions {
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Gamestring to load before reading commands.
    #[arg(short, long)]
    pub position: Option<String>,
}

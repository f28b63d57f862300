use crate::report::{run_model_info, run_predict, PredictArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use football_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Football AI",
    about = "Serve and run analytical football match predictions from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Predict fixtures from a JSON request file or a flat CSV export
    Predict(PredictArgs),
    /// Print the model version and published accuracy figures
    ModelInfo,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Predict(args) => run_predict(args),
        Command::ModelInfo => run_model_info(),
    }
}

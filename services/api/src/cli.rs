use crate::demo::{run_demo, run_evaluate, DemoArgs, EvaluateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use medbridge::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "MedBridge",
    about = "Run and demonstrate the MedBridge licensure and matching service from the command line",
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
    /// Credential mapping utilities
    Licensure {
        #[command(subcommand)]
        command: LicensureCommand,
    },
    /// Run an end-to-end CLI demo covering evaluation and matching
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum LicensureCommand {
    /// Evaluate an applicant JSON document and print the pathway report
    Evaluate(EvaluateArgs),
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
        Command::Licensure {
            command: LicensureCommand::Evaluate(args),
        } => run_evaluate(args),
        Command::Demo(args) => run_demo(args),
    }
}

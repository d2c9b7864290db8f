use crate::demo::{run_assess, run_curves, run_demo, AssessArgs, CurvesArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use credit_fuzzy::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Credit Eligibility Estimator",
    about = "Estimate credit eligibility from a credit score and debt-to-income ratio using fuzzy inference",
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
    /// Assess one customer by name or by an explicit credit score
    Assess(AssessArgs),
    /// Print the sampled membership curves of both input variables
    Curves(CurvesArgs),
    /// Assess every bundled sample customer across a few debt scenarios
    Demo(DemoArgs),
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
        Command::Assess(args) => run_assess(args),
        Command::Curves(args) => run_curves(args),
        Command::Demo(args) => run_demo(args),
    }
}

use crate::report::{run_analysis, run_assess, run_demo, AnalysisArgs, AssessArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use cloudburst::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Cloudburst Risk Service",
    about = "Score cloudburst risk from atmospheric readings, or serve the scorer over HTTP",
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
    /// Score a single set of readings or a CSV batch
    Assess(AssessArgs),
    /// Display an externally produced image analysis in place of a score
    Analysis(AnalysisArgs),
    /// Print low, moderate and high risk sample assessments
    Demo,
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
        Command::Analysis(args) => run_analysis(args),
        Command::Demo => {
            run_demo();
            Ok(())
        }
    }
}

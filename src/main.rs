use clap::Parser as ClapParser;
use igqloo::cli::{self, BuildOptions, CliError, FetchOptions, FetchResult};
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "igqloo")]
#[command(about = "Build a GraphQL query from field shorthand and send it")]
#[command(version)]
struct Cli {
    /// URI of the GraphQL interface
    uri: String,

    /// Fields to request, e.g. `user.posts(first:5),comments.body`
    /// (read from stdin, one per line, if omitted)
    fields: Vec<String>,

    /// Print the query before sending it and log at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Print the query and exit without sending it
    #[arg(long)]
    dry_run: bool,

    /// Separate filter arguments with commas
    #[arg(long)]
    comma_args: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, CliError> {
    let fields = if cli.fields.is_empty() && !atty::is(atty::Stream::Stdin) {
        cli::read_fields(io::stdin().lock())?
    } else {
        cli.fields
    };

    let query = cli::build_query(&BuildOptions {
        fields,
        comma_args: cli.comma_args,
    })?;

    if cli.verbose || cli.dry_run {
        println!("{}", query);
    }
    if cli.dry_run {
        return Ok(ExitCode::SUCCESS);
    }

    let options = FetchOptions {
        uri: cli.uri,
        query,
    };

    match cli::execute_fetch(&options).await? {
        FetchResult::Data(text) => {
            println!("{}", text);
            Ok(ExitCode::SUCCESS)
        }
        FetchResult::Errors(messages) => {
            for message in messages {
                println!("{}", message);
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

use clap::{Parser, Subcommand};
use taskdef::{
    commands::{
        config::{self, ConfigAction},
        generate::{self, GenerateCommand},
        list, variables,
    },
    logger, GlobalOpts,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "taskdef")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Task manifest generator",
    long_about = "taskdef builds validated task manifests from annotated task declarations."
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List bundled task definitions
    List,
    /// Generate the manifest for a bundled task
    Generate(GenerateCommand),
    /// Show the output variables a task publishes
    Variables {
        /// Bundled task key (see `taskdef list`)
        task: String,
    },
    /// Configure taskdef
    #[command(subcommand_required = false, arg_required_else_help = false)]
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("TASKDEF_LOG")
                .unwrap_or_else(|_| logger::verbosity_to_filter().into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .try_init();
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init_with_verbosity(cli.global.verbosity_level(), cli.global.quiet) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }
    init_tracing();

    let result = match cli.command {
        Commands::List => list::list_tasks(&cli.global),
        Commands::Generate(cmd) => generate::handle_generate(&cmd, &cli.global),
        Commands::Variables { task } => variables::show_variables(&task, &cli.global),
        Commands::Config { action } => config::handle_config(action, &cli.global),
    };

    if let Err(e) = result {
        logger::error(&format!("{:#}", e));
        if let Some(log_path) = logger::get_log_path() {
            logger::info(&format!("Details logged to {}", log_path.display()));
        }
        std::process::exit(1);
    }
}

use clap::{Parser, Subcommand};
use membank::{AppError, InstallRequest, ResourceOverrides};
use url::Url;

#[derive(Parser)]
#[command(name = "membank")]
#[command(version)]
#[command(
    about = "Install the Roo Code Memory Bank extension and manage the membank binary",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install the Memory Bank extension into the current directory
    #[clap(visible_alias = "i")]
    Install {
        /// Override URL for the .clinerules-architect file
        #[arg(long, value_name = "URL")]
        architect_url: Option<Url>,
        /// Override URL for the .clinerules-ask file
        #[arg(long, value_name = "URL")]
        ask_url: Option<Url>,
        /// Override URL for the .clinerules-code file
        #[arg(long, value_name = "URL")]
        code_url: Option<Url>,
        /// Answer yes to every prompt
        #[arg(short = 'y', long)]
        yes: bool,
        /// Print the installation report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Copy the membank binary into a per-user bin directory
    SelfInstall {
        /// Overwrite an already installed binary without prompting
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Install { architect_url, ask_url, code_url, yes, json } => {
            membank::install(InstallRequest {
                overrides: ResourceOverrides {
                    architect: architect_url,
                    ask: ask_url,
                    code: code_url,
                },
                assume_yes: yes,
                json,
            })
        }
        Commands::SelfInstall { force } => membank::self_install(force),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use secuplug::plugins::{Echo, LsLa, SecuPlugExt};

#[derive(Parser)]
#[command(name = "secuplug")]
#[command(about = "Run a bundled command plugin and process its output", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a bundled plugin
    Run {
        /// Plugin to run
        plugin: PluginName,
        /// Extra argument tokens appended to the plugin's command
        /// (echo only; ls-la takes none)
        args: Vec<String>,
    },
    /// Show version information
    Version,
}

#[derive(Clone, Copy, ValueEnum)]
enum PluginName {
    /// Directory listing, long format with hidden entries
    LsLa,
    /// Fixed greeting echo
    Echo,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Version) | None => {
            println!("secuplug {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Run { plugin, args }) => match plugin {
            PluginName::LsLa => {
                if !args.is_empty() {
                    anyhow::bail!("ls-la takes no extra arguments");
                }
                LsLa::new().execute_command()?;
            }
            PluginName::Echo => {
                let mut echo = Echo::new();
                if !args.is_empty() {
                    echo.append_args(args);
                }
                echo.execute_command()?;
            }
        },
    }

    Ok(())
}

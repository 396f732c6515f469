use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use thirdplane::{Generator, GeneratorConfig, Target, run};
use thirdplane_resource::FilesystemResourceProvider;

/// Generates the Third Plane worksheet as PDF and/or PPTX.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Repository root holding `logo gold.png` and `scripts/fonts/`.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Set the PDF in the standard Times/Helvetica faces instead of
    /// embedding the TrueType fonts.
    #[arg(long)]
    standard_fonts: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Write public/downloads/third-plane-worksheet.pdf
    Pdf,
    /// Write public/downloads/third-plane-worksheet.pptx
    Pptx,
    /// Write both artifacts (default)
    All,
}

impl From<Command> for Target {
    fn from(command: Command) -> Self {
        match command {
            Command::Pdf => Target::Pdf,
            Command::Pptx => Target::Pptx,
            Command::All => Target::All,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let target = cli.command.map(Target::from).unwrap_or(Target::All);

    let config = GeneratorConfig::new(cli.root);
    let loaded = if cli.standard_fonts {
        let provider = FilesystemResourceProvider::new(config.root());
        Generator::with_standard_fonts(config, &provider)
    } else {
        Generator::load(config)
    };
    let generator = match loaded {
        Ok(generator) => Arc::new(generator),
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(generator, target).await {
        Ok(paths) => {
            for path in paths {
                log::info!("Generated {}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap_stdin::FileOrStdin;
use color_print::ceprintln;
use tracing::Level;

use mjc::error::Error;
use mjc::output::write_artifacts;

#[derive(Debug, clap::Parser)]
#[clap(author, version, about = "Translates a mini Java program into quadruples")]
struct Args {
    /// Source file, or `-` for stdin
    input: FileOrStdin,

    /// Directory receiving the token, table, AST and IR listings
    #[clap(short, long, default_value = "res")]
    out_dir: PathBuf,

    /// Enable verbose output
    #[clap(short, long)]
    verbose: bool,
}

fn run(args: Args) -> Result<bool, Error> {
    let source = args.input.contents().map_err(Error::Input)?;

    let compilation = mjc::compile(&source);
    compilation.report();
    write_artifacts(&args.out_dir, &compilation)?;

    Ok(compilation.is_well_formed())
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            ceprintln!("<red,bold>error</>: {}", e);
            ExitCode::FAILURE
        }
    }
}

use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use wadalias::patch::{MusicPatcher, PatchOptions, PatchOutcome};
use wadalias::prompt::StreamConfirm;
use wadalias::tables::NameTables;

#[derive(Parser)]
#[command(
    name = "wadalias",
    about = "Makes music names in a WAD compatible with Ultimate Doom, Doom 2, and ZDoom.",
    disable_version_flag = true
)]
struct Cli {
    /// WAD file to patch in place
    filename: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayHelp => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    let patcher = MusicPatcher::new(NameTables::builtin(), PatchOptions::default());
    match patcher.patch_file(&cli.filename, &mut StreamConfirm::stdio()) {
        Ok(PatchOutcome::Written { new_count, .. }) => {
            println!("Updated '{}': {} lumps.", cli.filename.display(), new_count);
            ExitCode::SUCCESS
        }
        Ok(PatchOutcome::Cancelled) => {
            println!("Aborted; '{}' was not modified.", cli.filename.display());
            ExitCode::SUCCESS
        }
        Ok(PatchOutcome::NothingToDo) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

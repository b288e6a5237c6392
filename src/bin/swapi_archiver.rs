use std::process::ExitCode;
use std::time::Instant;

use tracing_subscriber::EnvFilter;

use swapi_archiver::app::App;
use swapi_archiver::archive::Archive;
use swapi_archiver::config::{ARCHIVE_PATH, RunConfig};
use swapi_archiver::error::ArchiveError;
use swapi_archiver::output::ConsoleOutput;
use swapi_archiver::swapi::SwapiHttpClient;

fn main() -> ExitCode {
    if let Err(report) = run() {
        eprintln!("{report:?}");
        if let Some(archive) = report.downcast_ref::<ArchiveError>() {
            return ExitCode::from(map_exit_code(archive));
        }
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn map_exit_code(error: &ArchiveError) -> u8 {
    match error {
        ArchiveError::SwapiHttp(_)
        | ArchiveError::PersonParse(_)
        | ArchiveError::ReferenceStatus { .. }
        | ArchiveError::MissingField { .. } => 3,
        ArchiveError::Database(_) => 4,
        ArchiveError::TaskJoin(_) => 1,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn run() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let started = Instant::now();
    let client = SwapiHttpClient::new()?;
    let archive = Archive::open(ARCHIVE_PATH).await?;
    let app = App::new(client, archive);

    let summary = app.run(&RunConfig::default(), &ConsoleOutput).await?;

    println!(
        "archived {} people ({} missing) across {} chunks in {:.2?}",
        summary.archived,
        summary.missing,
        summary.chunks,
        started.elapsed()
    );
    Ok(())
}

mod config;

use std::error::Error;
use std::fs::{self, File};
use std::path::Path;

use session::engine::SessionEngine;
use session::journal::JournalCsvWriter;
use session::logging::InMemorySessionLogWriter;
use session::snapshot::SessionSnapshot;
use tokio::sync::broadcast;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = config::CliConfig::from_env()?;
    let journal_file = initialize_journal_output(&config.journal_output_path)?;
    let mut journal = JournalCsvWriter::new(journal_file);

    let (engine, handle) = SessionEngine::new(config.market, config.seed)?;
    let snapshots = engine.subscribe_snapshots();
    let mut log = InMemorySessionLogWriter::new();
    journal.write_header_and_log(0, &mut log)?;

    let ticks = config.ticks;
    let driver = async {
        let result = pump_snapshots(snapshots, &mut journal, ticks).await;
        let _ = handle.stop().await;
        result
    };

    let ((), pumped) = tokio::join!(engine.run(&mut log), driver);

    if let Some(snapshot) = pumped? {
        println!("{}", serde_json::to_string(&snapshot)?);
    }
    Ok(())
}

async fn pump_snapshots(
    mut snapshots: broadcast::Receiver<SessionSnapshot>,
    journal: &mut JournalCsvWriter<File>,
    ticks: u64,
) -> std::io::Result<Option<SessionSnapshot>> {
    let mut last = None;

    loop {
        match snapshots.recv().await {
            Ok(snapshot) => {
                journal.append_snapshot_row(&snapshot)?;
                let done = snapshot.tick >= ticks;
                last = Some(snapshot);
                if done {
                    break;
                }
            }
            Err(broadcast::error::RecvError::Lagged(_)) => continue,
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }

    journal.flush()?;
    Ok(last)
}

fn initialize_journal_output(path: &str) -> Result<File, std::io::Error> {
    let journal_path = Path::new(path);

    if let Some(parent) = journal_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        fs::create_dir_all(parent)?;
    }

    File::create(journal_path)
}

use std::path::Path;

use tracing::{info, warn};

use modloader_detector::{identify_file, init_tracing, DetectorError, DetectorResult};

/// Scans the working directory and reports the loader of every `*.json` in it.
#[tokio::main]
async fn main() -> DetectorResult<()> {
    init_tracing();

    let dir = Path::new(".");
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(|source| DetectorError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

    let mut scanned = 0usize;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let is_file = entry.file_type().await.map(|t| t.is_file()).unwrap_or(false);
        if !is_file || path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().into_owned();
        scanned += 1;

        match identify_file(&path).await {
            Ok(Some(found)) => println!("Detected {found} in {file_name}!"),
            Ok(None) => println!("{file_name} contains no known loader."),
            Err(DetectorError::Json(e)) => {
                warn!("Invalid JSON in {}: {}", file_name, e);
                println!("{file_name} is an invalid json and the loader cannot be identified.");
            }
            Err(e) => {
                warn!("Skipping {}: {}", file_name, e);
                println!("{file_name} could not be read.");
            }
        }
    }

    info!("Scanned {} version JSON files", scanned);
    Ok(())
}

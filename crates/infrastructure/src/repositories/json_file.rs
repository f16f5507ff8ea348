use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{error, info};
use tubegate_domain::DomainError;

/// Writes `default` to `path` unless the file already exists.
pub(crate) async fn ensure_file<T: Serialize>(path: &Path, default: &T) -> Result<(), DomainError> {
    if tokio::fs::try_exists(path).await? {
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    write(path, default).await?;
    info!(path = %path.display(), "Created default data file");
    Ok(())
}

pub(crate) async fn read<T: DeserializeOwned>(path: &Path) -> Result<T, DomainError> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        error!(path = %path.display(), error = %e, "Failed to read data file");
        DomainError::Storage(format!("{}: {}", path.display(), e))
    })?;

    serde_json::from_slice(&bytes).map_err(|e| {
        error!(path = %path.display(), error = %e, "Data file is not valid JSON");
        DomainError::Serialization(format!("{}: {}", path.display(), e))
    })
}

/// Replaces `path` atomically: the body goes to a temporary file in the
/// same directory, which is then renamed over the target. Readers see either
/// the old or the new contents, never a truncated file.
pub(crate) async fn write<T: Serialize>(path: &Path, value: &T) -> Result<(), DomainError> {
    let body = serde_json::to_vec_pretty(value)?;
    let target = path.to_path_buf();

    tokio::task::spawn_blocking(move || persist(&target, &body))
        .await
        .map_err(|e| DomainError::Storage(format!("write task failed: {e}")))?
        .map_err(|e| {
            error!(path = %path.display(), error = %e, "Failed to write data file");
            DomainError::Storage(format!("{}: {}", path.display(), e))
        })
}

fn persist(target: &Path, body: &[u8]) -> std::io::Result<()> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(body)?;
    tmp.as_file().sync_all()?;
    tmp.persist(target).map_err(|e| e.error)?;
    Ok(())
}

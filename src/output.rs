//! The output writer.

use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Creates the parent directory, overwrites `path` with `bytes`, and returns
/// once the file is flushed and closed.
pub async fn write_artifact(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    let mut file = fs::File::create(path).await?;
    file.write_all(bytes).await?;
    file.flush().await?;
    file.sync_all().await?;
    drop(file);
    log::info!("Wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_directories_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("public").join("downloads").join("out.pdf");

        write_artifact(&path, b"first version").await.unwrap();
        write_artifact(&path, b"second").await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"second");
    }

    #[tokio::test]
    async fn fails_when_the_directory_cannot_be_created() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("downloads");
        std::fs::write(&blocker, b"not a directory").unwrap();

        assert!(write_artifact(&blocker.join("out.pdf"), b"x").await.is_err());
        assert!(blocker.is_file());
    }
}

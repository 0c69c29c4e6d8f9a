use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use thiserror::Error;
use walkdir::WalkDir;

use crate::extract;
use crate::models::ScanOutcome;

/// The input root cannot be scanned at all; reported before any file is read.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Diretório de entrada não encontrado: {0:?}")]
    InputDirNotFound(PathBuf),
    #[error("Caminho de entrada não é um diretório: {0:?}")]
    NotADirectory(PathBuf),
}

/// List every file reachable under `root`, in traversal order.
///
/// No extension filter: anything that is a file is a candidate, and the
/// extractor decides later whether it is DICOM.
pub fn collect_files(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !root.exists() {
        return Err(ScanError::InputDirNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    Ok(WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .collect())
}

/// Run the extractor over every file on a worker pool of `workers` threads.
///
/// Each invocation is independent; results come back in input order. The
/// first unexpected decode failure aborts the whole dispatch, so no partial
/// report can be written from a half-scanned batch.
pub fn scan_files(files: &[PathBuf], workers: usize) -> Result<Vec<ScanOutcome>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .context("Falha ao criar pool de workers")?;

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .context("Falha ao montar barra de progresso")?
            .progress_chars("=> "),
    );

    let outcomes = pool.install(|| {
        files
            .par_iter()
            .map(|path| {
                let outcome = extract::read_record(path);
                if matches!(outcome, Ok(ScanOutcome::Skipped)) {
                    progress.println(format!("Arquivo {:?} não é DICOM, ignorando", path));
                }
                progress.inc(1);
                outcome
            })
            .collect::<Result<Vec<_>>>()
    })?;

    progress.finish_and_clear();
    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn collect_files_recurses_and_ignores_extension() {
        let root = tempdir().expect("tempdir");
        fs::write(root.path().join("a.dcm"), b"x").expect("write a");
        fs::write(root.path().join("b.txt"), b"x").expect("write b");
        let nested = root.path().join("series/sub");
        fs::create_dir_all(&nested).expect("mkdirs");
        fs::write(nested.join("no_extension"), b"x").expect("write c");

        let files = collect_files(root.path()).expect("collect");
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(files.len(), 3);
        assert!(names.contains(&"a.dcm".to_string()));
        assert!(names.contains(&"b.txt".to_string()));
        assert!(names.contains(&"no_extension".to_string()));
    }

    #[test]
    fn collect_files_rejects_missing_root() {
        let root = tempdir().expect("tempdir");
        let missing = root.path().join("does-not-exist");
        assert!(matches!(
            collect_files(&missing),
            Err(ScanError::InputDirNotFound(_))
        ));
    }

    #[test]
    fn collect_files_rejects_plain_file_root() {
        let root = tempdir().expect("tempdir");
        let file = root.path().join("plain.txt");
        fs::write(&file, b"x").expect("write");
        assert!(matches!(
            collect_files(&file),
            Err(ScanError::NotADirectory(_))
        ));
    }
}

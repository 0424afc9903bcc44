use anyhow::Result;
use linkrank_core::{CorpusBuilder, EngineConfig, LoadReport, SearchEngine};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// `.txt` files directly under `dir`, sorted by file name.
pub fn text_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let p = entry.path();
        if p.file_name().and_then(|s| s.to_str()).is_some_and(|n| n.ends_with(".txt")) {
            files.push(p.to_path_buf());
        }
    }
    Ok(files)
}

/// Read every text file in `dir` into a ranked engine.
pub fn load_dir(dir: &Path, config: EngineConfig) -> Result<(SearchEngine, LoadReport)> {
    let files = text_files(dir)?;
    if files.is_empty() {
        tracing::warn!(dir = %dir.display(), "no .txt documents found");
    }
    load_files(&files, config)
}

/// Register `files` in order. Files that cannot be read are skipped; bytes that
/// are not valid UTF-8 are replaced, so such files still get their id.
pub fn load_files(files: &[PathBuf], config: EngineConfig) -> Result<(SearchEngine, LoadReport)> {
    let mut builder = CorpusBuilder::new(config)?;
    for file in files {
        let bytes = match fs::read(file) {
            Ok(b) => b,
            Err(e) => {
                tracing::warn!(path = %file.display(), error = %e, "skipping unreadable file");
                continue;
            }
        };
        let text = String::from_utf8_lossy(&bytes);
        builder.add_document(file.display().to_string(), &text)?;
    }
    Ok(builder.finish()?)
}

//! Raw dataset loading
//!
//! The data directory holds zip archives and/or bare CSV files. CSVs are read
//! straight out of the archives, so nothing is unpacked to disk and there is
//! nothing to clean up afterwards.

use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use zip::ZipArchive;

use crate::config::DatasetFiles;
use crate::error::{NormalizeError, Result};
use crate::types::{Appearance, RawMovie};

/// The two raw tables a run starts from
#[derive(Debug, Clone, Default)]
pub struct RawDatasets {
    pub movies: Vec<RawMovie>,
    pub appearances: Vec<Appearance>,
}

/// Deserialize every record of a CSV stream with headers
pub fn read_csv<T: DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    let mut rows = Vec::new();
    for record in rdr.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

#[derive(Default)]
struct Found {
    movies: Option<Vec<RawMovie>>,
    appearances: Option<Vec<Appearance>>,
}

impl Found {
    /// Parse `reader` if `file_name` is one of the datasets not seen yet
    fn offer<R: Read>(&mut self, files: &DatasetFiles, file_name: &str, reader: R) -> Result<()> {
        if file_name == files.movies && self.movies.is_none() {
            self.movies = Some(read_csv(reader)?);
        } else if file_name == files.appearances && self.appearances.is_none() {
            self.appearances = Some(read_csv(reader)?);
        }
        Ok(())
    }
}

fn base_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path)
}

/// Load both datasets from `data_dir`.
///
/// Entries are visited in file-name order; the first occurrence of each dataset
/// wins, whether it sits in an archive or next to it.
pub fn load_datasets<P: AsRef<Path>>(data_dir: P, files: &DatasetFiles) -> Result<RawDatasets> {
    let mut entries: Vec<PathBuf> = std::fs::read_dir(data_dir.as_ref())?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()?;
    entries.sort();

    let mut found = Found::default();
    for path in entries.iter().filter(|p| p.is_file()) {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("zip") => {
                debug!(archive = %path.display(), "scanning archive");
                let mut archive = ZipArchive::new(File::open(path)?)?;
                for idx in 0..archive.len() {
                    let entry = archive.by_index(idx)?;
                    if !entry.is_file() {
                        continue;
                    }
                    let name = base_name(entry.name()).to_string();
                    found.offer(files, &name, entry)?;
                }
            }
            Some("csv") => {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    found.offer(files, name, File::open(path)?)?;
                }
            }
            _ => {}
        }
    }

    let movies = found
        .movies
        .ok_or_else(|| NormalizeError::MissingDataset(files.movies.clone()))?;
    let appearances = found
        .appearances
        .ok_or_else(|| NormalizeError::MissingDataset(files.appearances.clone()))?;

    info!(
        movies = movies.len(),
        appearances = appearances.len(),
        "loaded raw datasets"
    );
    Ok(RawDatasets { movies, appearances })
}

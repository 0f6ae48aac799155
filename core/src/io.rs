use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::ProcessingError;
use crate::format::{InputFormat, OutputFormat};

/// An eligible file found directly inside the input directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    pub path: PathBuf,
    pub name: String,
    pub format: InputFormat,
}

/// Create the output directory and any missing ancestors.
/// A path that already exists counts as success.
pub fn ensure_output_dir(path: &Path) -> Result<(), ProcessingError> {
    match fs::create_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(ProcessingError::CreateDir {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Eligible image files directly inside a directory, yielded as the listing
/// is read. Subdirectories are never descended into.
pub struct InputFiles {
    entries: walkdir::IntoIter,
}

/// Start listing `input`. Fails up front when `input` is not a directory.
pub fn list_inputs(input: &Path) -> Result<InputFiles, ProcessingError> {
    if !input.is_dir() {
        return Err(ProcessingError::ReadDir {
            path: input.to_path_buf(),
            source: std::io::Error::new(ErrorKind::NotFound, "not a directory"),
        });
    }

    Ok(InputFiles {
        entries: WalkDir::new(input).min_depth(1).max_depth(1).into_iter(),
    })
}

impl Iterator for InputFiles {
    type Item = Result<InputFile, ProcessingError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(e.into())),
            };

            if !entry.file_type().is_file() {
                log::debug!("Skipping non-file entry {}", entry.path().display());
                continue;
            }

            let Some(name) = entry.file_name().to_str() else {
                log::warn!(
                    "Skipping {}: file name is not valid UTF-8",
                    entry.path().display()
                );
                continue;
            };

            match InputFormat::from_file_name(name) {
                Some(format) => {
                    return Some(Ok(InputFile {
                        name: name.to_string(),
                        path: entry.path().to_path_buf(),
                        format,
                    }))
                }
                None => log::debug!("Skipping unsupported file {}", name),
            }
        }
    }
}

/// The part of a file name before its first `.`.
pub fn stem(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or(file_name)
}

/// `<output_dir>/<stem>.<extension>` for an input file name.
pub fn output_path(output_dir: &Path, file_name: &str, format: OutputFormat) -> PathBuf {
    output_dir.join(format!("{}.{}", stem(file_name), format.extension()))
}

/// Read file contents.
pub fn read_file(path: &Path) -> Result<Vec<u8>, ProcessingError> {
    fs::read(path).map_err(|e| ProcessingError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write file contents, replacing whatever is already there.
pub fn write_file(path: &Path, data: &[u8]) -> Result<(), ProcessingError> {
    fs::write(path, data).map_err(|e| ProcessingError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })
}

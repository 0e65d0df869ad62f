//! Filesystem helpers for the local store and the tldr cache.

use crate::error::Result;
use crate::types::DOCUMENT_EXTENSION;
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

/// Check whether `dir/filename` exists.
///
/// Only `NotFound` counts as absence; any other failure (permissions,
/// name too long, ...) is returned as an error.
pub fn file_exists(dir: &Path, filename: &str) -> Result<bool> {
    match fs::metadata(dir.join(filename)) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Copy `src` to `dest` byte for byte, creating or truncating `dest`.
///
/// A failed copy may leave `dest` partially written.
pub fn copy_file(src: &Path, dest: &Path) -> Result<u64> {
    let reader = File::open(src)?;
    let writer = File::create(dest)?;
    copy_stream(reader, writer)
}

/// Stream everything from `reader` into `writer`.
///
/// Takes both ends by value so they are dropped (and closed) on return,
/// whether or not the copy succeeded.
pub fn copy_stream<R: Read, W: Write>(mut reader: R, mut writer: W) -> Result<u64> {
    let copied = io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    Ok(copied)
}

/// Topic names of the documents in `dir`, sorted.
pub fn list_documents(dir: &Path) -> Result<Vec<String>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut topics = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some(DOCUMENT_EXTENSION) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            topics.push(stem.to_string());
        }
    }

    topics.sort();
    Ok(topics)
}

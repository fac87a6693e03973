//! Multipart form parsing and local-disk storage for uploaded images.
//!
//! [`MultipartForm::read`] drains a multipart body into text fields and
//! validated file parts; [`UploadStore`] writes accepted files under the
//! uploads directory and hands back their public `/uploads/...` path.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use axum::body::Bytes;
use axum::extract::Multipart;
use divesite_core::upload::{
    check_size, filename_from_url, generate_filename, public_url, validate_mime, UploadContext,
    UploadError, MAX_UPLOAD_BYTES,
};

use crate::error::{AppError, AppResult};

/// How many file parts a form may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileLimit {
    /// At most one file, and only under the named field.
    Single(&'static str),
    /// Any number of files under any field name.
    Any,
}

/// An accepted file part held in memory until it is stored.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub field: String,
    pub file_name: Option<String>,
    /// Normalised MIME type from the allow-list.
    pub content_type: String,
    pub bytes: Bytes,
}

/// A fully read multipart body.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    files: Vec<UploadedFile>,
}

impl MultipartForm {
    /// Read every part of `multipart`.
    ///
    /// A part with a filename is a file: its content type must be on the
    /// allow-list and its size within [`MAX_UPLOAD_BYTES`]. Everything else
    /// is read as UTF-8 text; a repeated text field keeps its last value.
    pub async fn read(mut multipart: Multipart, limit: FileLimit) -> AppResult<Self> {
        let mut form = MultipartForm::default();

        while let Some(mut field) = multipart.next_field().await? {
            let name = field.name().unwrap_or("").to_string();

            match field.file_name() {
                None => {
                    let text = field.text().await?;
                    form.fields.insert(name, text);
                    continue;
                }
                // Browsers send an empty file part for an untouched file input.
                Some("") => {
                    field.bytes().await?;
                    continue;
                }
                Some(_) => {}
            }

            if let FileLimit::Single(expected) = limit {
                if name != expected {
                    return Err(AppError::BadRequest(format!(
                        "Unexpected file field '{name}'. Expected '{expected}'."
                    )));
                }
                if !form.files.is_empty() {
                    return Err(UploadError::TooManyFiles.into());
                }
            }

            let content_type = validate_mime(field.content_type())?;
            let file_name = field.file_name().map(str::to_string);

            let mut data = Vec::new();
            while let Some(chunk) = field.chunk().await? {
                check_size(data.len() + chunk.len(), MAX_UPLOAD_BYTES)?;
                data.extend_from_slice(&chunk);
            }

            form.files.push(UploadedFile {
                field: name,
                file_name,
                content_type,
                bytes: Bytes::from(data),
            });
        }

        Ok(form)
    }

    /// Raw text value of a field.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Text value of a field, `None` when absent or blank.
    pub fn non_blank(&self, name: &str) -> Option<&str> {
        divesite_core::validation::non_blank(self.text(name))
    }

    /// Owned non-blank text value.
    pub fn string(&self, name: &str) -> Option<String> {
        self.non_blank(name).map(str::to_string)
    }

    /// Remove and return the first file part.
    pub fn take_file(&mut self) -> Option<UploadedFile> {
        if self.files.is_empty() {
            None
        } else {
            Some(self.files.remove(0))
        }
    }

    /// Remove and return every file part.
    pub fn take_files(&mut self) -> Vec<UploadedFile> {
        std::mem::take(&mut self.files)
    }
}

/// Writes uploads under a single directory.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Store `file` under a generated name and return its public path.
    ///
    /// The directory is created if missing. A write failure is a 500; there
    /// is no cleanup of a partially written file.
    pub async fn save(&self, context: UploadContext, file: &UploadedFile) -> AppResult<String> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to create upload dir: {e}")))?;

        let filename = generate_filename(context, file.file_name.as_deref(), &file.content_type);
        let path = self.dir.join(&filename);
        tokio::fs::write(&path, &file.bytes)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to write upload: {e}")))?;

        tracing::info!(
            filename = %filename,
            size = file.bytes.len(),
            content_type = %file.content_type,
            "Upload stored"
        );
        Ok(public_url(&filename))
    }

    /// Store `file` if present.
    pub async fn save_optional(
        &self,
        context: UploadContext,
        file: Option<&UploadedFile>,
    ) -> AppResult<Option<String>> {
        match file {
            Some(file) => self.save(context, file).await.map(Some),
            None => Ok(None),
        }
    }

    /// Delete the file behind a public URL. Failures are logged and ignored.
    pub async fn remove(&self, url: &str) {
        let Some(filename) = filename_from_url(url) else {
            tracing::warn!(url = %url, "Not removing upload: no file name in URL");
            return;
        };

        match tokio::fs::remove_file(self.dir.join(filename)).await {
            Ok(()) => tracing::info!(filename = %filename, "Upload removed"),
            Err(e) => tracing::warn!(filename = %filename, error = %e, "Failed to remove upload"),
        }
    }
}

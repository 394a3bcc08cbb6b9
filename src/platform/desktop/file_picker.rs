use std::path::{Path, PathBuf};

use rfd::FileDialog;

use crate::usecase::ports::ingest::IngestError;

/// No extension filter: the session decides whether the name is acceptable.
pub fn pick_upload() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Upload CSV")
        .pick_file()
}

pub fn upload_file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

pub fn read_upload(path: &Path) -> Result<Vec<u8>, IngestError> {
    std::fs::read(path).map_err(|err| IngestError::Read(format!("{}: {err}", path.display())))
}

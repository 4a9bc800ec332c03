//! JSON snapshot idea source.
//!
//! Reads a file holding the same array the HTTP endpoint returns. Useful
//! offline and for saved exports of the sheet.

use crate::model::idea::IdeaRecord;
use crate::source::{decode_ideas, IdeaSource, SourceResult};
use log::info;
use std::path::{Path, PathBuf};

pub struct FileIdeaSource {
    path: PathBuf,
}

impl FileIdeaSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IdeaSource for FileIdeaSource {
    fn source_name(&self) -> &str {
        "file"
    }

    fn fetch_ideas(&self) -> SourceResult<Vec<IdeaRecord>> {
        let payload = std::fs::read_to_string(&self.path)?;
        let ideas = decode_ideas(&payload)?;
        info!(
            "event=ideas_fetch module=source status=ok source=file count={} path={}",
            ideas.len(),
            self.path.display()
        );
        Ok(ideas)
    }
}

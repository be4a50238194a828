//! JSON file cache for fetched projects and the certificate list.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::Project;
use crate::error::PortfolioResult;
use crate::site::Certificate;

const PROJECTS_FILE: &str = "projects.json";
const CERTIFICATES_FILE: &str = "certificates.json";

#[derive(Clone, Debug)]
pub struct ProjectCache {
    dir: PathBuf,
}

impl ProjectCache {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn store_projects(&self, projects: &[Project]) -> PortfolioResult<()> {
        self.write(PROJECTS_FILE, projects)
    }

    /// Cached projects, empty when nothing was cached yet.
    pub fn load_projects(&self) -> PortfolioResult<Vec<Project>> {
        self.read(PROJECTS_FILE)
    }

    pub fn find_project(&self, id: &str) -> PortfolioResult<Option<Project>> {
        Ok(self.load_projects()?.into_iter().find(|p| p.id == id))
    }

    pub fn store_certificates(&self, certificates: &[Certificate]) -> PortfolioResult<()> {
        self.write(CERTIFICATES_FILE, certificates)
    }

    pub fn load_certificates(&self) -> PortfolioResult<Vec<Certificate>> {
        self.read(CERTIFICATES_FILE)
    }

    fn write<T: Serialize + ?Sized>(&self, file: &str, value: &T) -> PortfolioResult<()> {
        std::fs::create_dir_all(&self.dir)?;
        let raw = serde_json::to_vec_pretty(value)?;
        // Readers only ever see a complete file.
        let tmp = self.dir.join(format!("{}.tmp", file));
        std::fs::write(&tmp, raw)?;
        std::fs::rename(&tmp, self.dir.join(file))?;
        Ok(())
    }

    fn read<T: DeserializeOwned + Default>(&self, file: &str) -> PortfolioResult<T> {
        match std::fs::read(self.dir.join(file)) {
            Ok(raw) => Ok(serde_json::from_slice(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(T::default()),
            Err(e) => Err(e.into()),
        }
    }
}

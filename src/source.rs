use crate::model::{RawGrid, RosterSnapshot};
use crate::parser::{parse_roster, ParseOptions, RosterError, RosterParser};
use std::path::{Path, PathBuf};

pub trait RosterSource {
    /// Relit et parse le tableau à chaque appel (aucun cache).
    fn load(&self) -> Result<RosterSnapshot, RosterError>;
}

/// Tableau sur disque (CSV ou classeur).
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    sheet: Option<String>,
    opts: ParseOptions,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P, sheet: Option<String>, opts: ParseOptions) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            sheet,
            opts,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RosterSource for FileSource {
    fn load(&self) -> Result<RosterSnapshot, RosterError> {
        RosterParser::open(&self.path, self.sheet.as_deref())?.parse(self.opts)
    }
}

/// Grille déjà en mémoire.
#[derive(Debug, Clone)]
pub struct GridSource {
    grid: RawGrid,
    opts: ParseOptions,
}

impl GridSource {
    pub fn new(grid: RawGrid, opts: ParseOptions) -> Self {
        Self { grid, opts }
    }
}

impl RosterSource for GridSource {
    fn load(&self) -> Result<RosterSnapshot, RosterError> {
        parse_roster(&self.grid, self.opts)
    }
}

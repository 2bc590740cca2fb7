//! Byte sources for per-year reference tables.
//!
//! A [`TableSource`] only knows how to open the raw text of one Gregorian
//! year's table; all decoding happens in [`chinese::scan`](crate::chinese::scan).

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor};
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::YEAR_PLACEHOLDER;

/// Opens the table for a Gregorian year.
///
/// Implementations report a year they have no table for with
/// [`io::ErrorKind::NotFound`]; the engine turns that into
/// [`Error::YearNotCovered`](crate::Error::YearNotCovered). Any other error
/// is surfaced as [`Error::SourceUnavailable`](crate::Error::SourceUnavailable).
pub trait TableSource {
    type Reader: BufRead;

    fn open(&self, year: i32) -> io::Result<Self::Reader>;
}

impl<S: TableSource + ?Sized> TableSource for &S {
    type Reader = S::Reader;

    fn open(&self, year: i32) -> io::Result<Self::Reader> {
        (**self).open(year)
    }
}

/// Reads tables from files in a directory, e.g. `tables/T2020c.txt`.
#[derive(Debug, Clone)]
pub struct DirSource {
    dir: PathBuf,
    pattern: String,
}

impl DirSource {
    /// Creates a source using the default `T{year}c.txt` file names.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_pattern(dir, "T{year}c.txt")
    }

    /// Creates a source with a custom file name pattern containing `{year}`.
    pub fn with_pattern(dir: impl Into<PathBuf>, pattern: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            pattern: pattern.into(),
        }
    }

    /// Path of the table file for `year`.
    pub fn path_for(&self, year: i32) -> PathBuf {
        self.dir
            .join(self.pattern.replace(YEAR_PLACEHOLDER, &year.to_string()))
    }
}

impl TableSource for DirSource {
    type Reader = BufReader<File>;

    fn open(&self, year: i32) -> io::Result<Self::Reader> {
        File::open(self.path_for(year)).map(BufReader::new)
    }
}

/// Serves tables held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    tables: HashMap<i32, Arc<[u8]>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the table for `year`.
    pub fn insert(&mut self, year: i32, table: impl Into<Vec<u8>>) {
        let table: Vec<u8> = table.into();
        self.tables.insert(year, table.into());
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_table(mut self, year: i32, table: impl Into<Vec<u8>>) -> Self {
        self.insert(year, table);
        self
    }

    /// Years with a table, ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.tables.keys().copied().collect();
        years.sort_unstable();
        years
    }
}

impl TableSource for MemorySource {
    type Reader = Cursor<Arc<[u8]>>;

    fn open(&self, year: i32) -> io::Result<Self::Reader> {
        self.tables
            .get(&year)
            .map(|table| Cursor::new(Arc::clone(table)))
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no table for {year}")))
    }
}

//! 查詢引擎
//!
//! [`Engine`] 持有表源及逐年索引快取，按需掃描對照表並建索引。某年索引以前一年索引的
//! 末日狀態為種子；前一年若未建，則自最近已建年份（或首個支持年份）起逐年補建。
//! 索引一經建立即保留至引擎銷毀。
//!
//! 引擎查詢需 `&mut self`，不可跨線程共用；需共用時以 [`SharedEngine`] 加鎖。

use std::collections::HashMap;
use std::io;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, trace};

use super::index::YearIndex;
use super::row::DecoderState;
use super::scan::scan_table;
use super::{DateQuery, DayEntry, LunarDate};
use crate::config::EngineConfig;
use crate::date::CalendarDate;
use crate::error::{ConfigError, Error};
use crate::source::{DirSource, TableSource};

/// 公曆、農曆互查引擎。
///
/// # 用例
///
/// ```no_run
/// use nongli::{CalendarDate, DirSource, Engine, EngineConfig};
/// use nongli::chinese::LunarDate;
///
/// let mut engine = Engine::with_config(DirSource::new("tables"), EngineConfig::default());
///
/// let entry = engine.by_gregorian(CalendarDate::new(2020, 6, 11).unwrap())?;
/// assert_eq!(LunarDate::new(2020, 4, 20, true), entry.lunar);
///
/// let entry = engine.by_lunar(LunarDate::new(2020, 4, 20, false))?;
/// assert_eq!(CalendarDate::new(2020, 5, 12), Some(entry.date));
/// # Ok::<(), nongli::Error>(())
/// ```
#[derive(Debug)]
pub struct Engine<S> {
    source: S,
    config: EngineConfig,
    years: HashMap<i32, YearIndex>,
}

impl Engine<DirSource> {
    /// 以設定中的 `table_dir` 及 `file_pattern` 建立讀取目錄的引擎。
    pub fn from_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let dir = config.table_dir.clone().ok_or_else(|| ConfigError::Invalid {
            reason: "table_dir is not set".to_string(),
        })?;
        let source = DirSource::with_pattern(dir, config.file_pattern.clone());
        Ok(Self::with_config(source, config))
    }
}

impl<S: TableSource> Engine<S> {
    /// 以預設設定（1901 至 2100 年）建立引擎。
    pub fn new(source: S) -> Self {
        Self::with_config(source, EngineConfig::default())
    }

    pub fn with_config(source: S, config: EngineConfig) -> Self {
        Self {
            source,
            config,
            years: HashMap::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// 已建索引的年份，升序。
    pub fn cached_years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.years.keys().copied().collect();
        years.sort_unstable();
        years
    }

    /// 由公曆日期查農曆。
    pub fn by_gregorian(&mut self, date: CalendarDate) -> Result<DayEntry, Error> {
        self.year_index(date.year)?
            .by_gregorian(&date)
            .cloned()
            .ok_or(Error::NotFound { query: date.into() })
    }

    /// 由農曆日期查公曆，以閏月標記區分同序號的平、閏月。
    ///
    /// 農曆年跨兩個公曆年，先查同號公曆年之表，查無再查次年之表。不在支持範圍的表視為查無；
    /// 範圍內缺表等錯誤照常返回。
    pub fn by_lunar(&mut self, date: LunarDate) -> Result<DayEntry, Error> {
        for year in self.table_years(date.year) {
            if let Some(entry) = self.year_index(year)?.by_lunar(&date) {
                return Ok(entry.clone());
            }
            if year == date.year {
                debug!(%date, "not in table {year}, trying the next");
            }
        }
        Err(Error::NotFound { query: date.into() })
    }

    /// 依日期種類分派查詢。
    pub fn resolve(&mut self, query: impl Into<DateQuery>) -> Result<DayEntry, Error> {
        match query.into() {
            DateQuery::Solar(date) => self.by_gregorian(date),
            DateQuery::Lunar(date) => self.by_lunar(date),
        }
    }

    /// 取得公曆 `year` 年的索引，未建則按需建立。
    pub fn year_index(&mut self, year: i32) -> Result<&YearIndex, Error> {
        if !self.config.covers(year) {
            return Err(Error::YearNotCovered { year });
        }
        if !self.years.contains_key(&year) {
            let mut start = year;
            while start > self.config.first_year && !self.years.contains_key(&(start - 1)) {
                start -= 1;
            }
            for y in start..=year {
                self.build_year(y)?;
            }
        }
        self.years.get(&year).ok_or(Error::YearNotCovered { year })
    }

    /// 農曆 `lunar_year` 年所跨、且在支持範圍內的公曆年。
    pub(super) fn table_years(&self, lunar_year: i32) -> Vec<i32> {
        [Some(lunar_year), lunar_year.checked_add(1)]
            .into_iter()
            .flatten()
            .filter(|&year| self.config.covers(year))
            .collect()
    }

    fn build_year(&mut self, year: i32) -> Result<(), Error> {
        let seed = if year > self.config.first_year {
            self.years
                .get(&(year - 1))
                .map_or_else(|| DecoderState::unknown(year), YearIndex::terminal_state)
        } else {
            DecoderState::unknown(year)
        };
        trace!(year, ?seed, "seeding table");

        let reader = self.source.open(year).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::YearNotCovered { year },
            _ => Error::SourceUnavailable { year, source: e },
        })?;
        let entries = scan_table(year, reader, seed, &self.config.table_format())?;
        debug!(year, entries = entries.len(), "built year index");

        self.years.insert(year, YearIndex::build(year, entries));
        Ok(())
    }
}

/// 加鎖共用的引擎，查詢只需 `&self`。
#[derive(Debug)]
pub struct SharedEngine<S> {
    inner: Mutex<Engine<S>>,
}

impl<S: TableSource> SharedEngine<S> {
    pub fn new(engine: Engine<S>) -> Self {
        Self {
            inner: Mutex::new(engine),
        }
    }

    // 建索引中途 panic 只會少存一年，快取仍一致
    fn lock(&self) -> MutexGuard<'_, Engine<S>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn by_gregorian(&self, date: CalendarDate) -> Result<DayEntry, Error> {
        self.lock().by_gregorian(date)
    }

    pub fn by_lunar(&self, date: LunarDate) -> Result<DayEntry, Error> {
        self.lock().by_lunar(date)
    }

    pub fn resolve(&self, query: impl Into<DateQuery>) -> Result<DayEntry, Error> {
        self.lock().resolve(query)
    }

    pub fn solar_terms(&self, year: i32, names: &[&str]) -> Result<Vec<DayEntry>, Error> {
        self.lock().solar_terms(year, names)
    }

    pub fn into_inner(self) -> Engine<S> {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S: TableSource> From<Engine<S>> for SharedEngine<S> {
    fn from(engine: Engine<S>) -> Self {
        Self::new(engine)
    }
}

//! Conversion between Gregorian dates and the Chinese lunisolar calendar,
//! driven by published per-year reference tables rather than astronomical
//! computation.
//!
//! Each Gregorian year has one table (the Hong Kong Observatory publishes
//! them for 1901–2100), one line per day. Month numbering, leap months and the
//! lunar new year are only implicit in the sequence of lines, so tables are
//! decoded statefully and the state is carried from one year's table into the
//! next. See [`chinese`] for the details.
//!
//! # Examples
//!
//! Basic usage with [`CalendarDate`]:
//!
//! ```
//! use nongli::CalendarDate;
//!
//! let date = CalendarDate::new(2000, 1, 1).unwrap();
//!
//! assert_eq!(6, date.day_of_week()); // Saturday
//! assert_eq!(2451545, date.jdn());
//! ```
//!
//! Converting with an [`Engine`] over a directory of tables:
//!
//! ```no_run
//! use nongli::{CalendarDate, Engine, EngineConfig};
//! use nongli::chinese::LunarDate;
//!
//! let config = EngineConfig::load("nongli.toml")?;
//! let mut engine = Engine::from_config(config)?;
//!
//! let entry = engine.by_gregorian(CalendarDate::new(2021, 7, 20).unwrap())?;
//! assert_eq!(LunarDate::new(2021, 6, 11, false), entry.lunar);
//!
//! for term in engine.solar_terms(2021, &["清明", "冬至"])? {
//!     println!("{} {}", term.date, term.solar_term.unwrap_or_default());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the application.

pub mod chinese;
pub mod config;
pub mod date;
pub mod error;
pub mod source;

pub use chinese::engine::{Engine, SharedEngine};
pub use chinese::{DateQuery, DayEntry, LunarDate, Month};
pub use config::EngineConfig;
pub use date::{CalendarDate, YearType};
pub use error::{ConfigError, DecodeError, Error};
pub use source::{DirSource, MemorySource, TableSource};

//! 對照表逐年掃描
//!
//! 一表一公曆年：先略過表頭，再逐行交 [`row::decode_row`](super::row::decode_row) 解碼，
//! 帶狀態直至表末。掃描一定讀完全表，即使所查日期早已找到。
//!
//! 表首諸日在首個月名行之前，其月份取自前表末日（種子狀態）。首個支持年份無前表，
//! 種子為 [`DecoderState::unknown`]，此時表首諸日暫存，待首個月名行出現再回填其前一月。
//! 回填法無法分辨前一月是否閏月（如 2034 年表首仍在 2033 年閏十一月），
//! 故僅用於首年，其餘各年一律以前表狀態為種子。

use std::io::{self, BufRead};

use tracing::trace;

use super::row::{decode_row, DateFormat, DecoderState, Row};
use super::DayEntry;
use crate::date::CalendarDate;
use crate::error::{DecodeError, Error};

/// 對照表版式
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TableFormat {
    /// 表頭行數
    pub header_lines: usize,
    /// 公曆日期補零的最末表年份
    pub padded_through: i32,
}

impl Default for TableFormat {
    fn default() -> Self {
        Self {
            header_lines: 3,
            padded_through: 2010,
        }
    }
}

/// 掃描公曆 `year` 年的對照表，返回全年逐日記錄（一月一日至十二月三十一日，依序無缺）。
///
/// `seed` 為前表末日的狀態，見 [`DecoderState::after`]。
#[tracing::instrument(level = "debug", skip(reader, format))]
pub fn scan_table<R: BufRead>(
    year: i32,
    reader: R,
    seed: DecoderState,
    format: &TableFormat,
) -> Result<Vec<DayEntry>, Error> {
    let corrupt = |line: usize, source: DecodeError| Error::DecodeCorruption { year, line, source };
    let date_format = DateFormat::for_table(year, format.padded_through);

    let mut state = seed;
    let mut expected = CalendarDate {
        year,
        month: 1,
        day: 1,
    };
    let mut entries = Vec::with_capacity(366);
    let mut pending: Vec<Row> = Vec::new();
    let mut line_count = 0;

    for (line_num, line) in (1usize..).zip(reader.lines()) {
        line_count = line_num;
        let line = line.map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => corrupt(line_num, DecodeError::NotUtf8),
            _ => Error::SourceUnavailable { year, source: e },
        })?;
        if line_num <= format.header_lines || line.trim().is_empty() {
            continue;
        }

        let (row, next) = decode_row(&line, date_format, state).map_err(|e| corrupt(line_num, e))?;
        if row.date != expected {
            return Err(corrupt(
                line_num,
                DecodeError::OutOfSequence {
                    expected,
                    found: row.date,
                },
            ));
        }
        expected = row.date.succ();
        state = next;

        match row.month {
            Some(month) => {
                if !pending.is_empty() {
                    let preceding = month.preceding();
                    trace!(rows = pending.len(), month = ?preceding, "resolved leading rows");
                    entries.extend(pending.drain(..).map(|row| row.resolve(preceding)));
                }
                entries.push(row.resolve(month));
            }
            None => pending.push(row),
        }
    }

    if !pending.is_empty() {
        return Err(corrupt(line_count, DecodeError::NoMonthMarker));
    }
    let end = CalendarDate {
        year: year + 1,
        month: 1,
        day: 1,
    };
    if expected != end {
        return Err(corrupt(line_count + 1, DecodeError::Truncated { expected }));
    }
    Ok(entries)
}

//! 單年索引

use std::collections::HashMap;

use super::row::DecoderState;
use super::{DayEntry, LunarDate};
use crate::date::CalendarDate;

/// 一個公曆年對照表的全部記錄，附公曆、農曆兩種索引。建立後不再改動。
#[derive(Debug, Clone)]
pub struct YearIndex {
    year: i32,
    entries: Vec<DayEntry>,
    by_gregorian: HashMap<CalendarDate, usize>,
    by_lunar: HashMap<LunarDate, usize>,
}

impl YearIndex {
    /// 以掃描所得的逐日記錄建立索引，記錄須已依日期排序。
    pub fn build(year: i32, entries: Vec<DayEntry>) -> Self {
        let by_gregorian = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.date, i))
            .collect();
        let by_lunar = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.lunar, i))
            .collect();
        Self {
            year,
            entries,
            by_gregorian,
            by_lunar,
        }
    }

    /// 公曆年份
    pub fn year(&self) -> i32 {
        self.year
    }

    /// 全年記錄，依日期排序。
    pub fn entries(&self) -> &[DayEntry] {
        &self.entries
    }

    pub fn by_gregorian(&self, date: &CalendarDate) -> Option<&DayEntry> {
        self.by_gregorian.get(date).map(|&i| &self.entries[i])
    }

    pub fn by_lunar(&self, date: &LunarDate) -> Option<&DayEntry> {
        self.by_lunar.get(date).map(|&i| &self.entries[i])
    }

    /// 本表末日記錄
    pub fn last(&self) -> Option<&DayEntry> {
        self.entries.last()
    }

    /// 次表的種子狀態；空表則無從推得，退回佔位狀態。
    pub fn terminal_state(&self) -> DecoderState {
        self.last()
            .map_or_else(|| DecoderState::unknown(self.year + 1), DecoderState::after)
    }
}

//! Chinese calendar
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 本模塊不作天文推算，而以逐年發佈的公曆與農曆日期對照表為準，見 [`scan`]。
//! 對照表每行記一日，月份、閏月、年份更替皆隱含於行與行之間，須逐行帶狀態解碼，
//! 且狀態須跨表（跨公曆年）傳遞，見 [`row::DecoderState`]。

use serde::Serialize;

use crate::date::CalendarDate;

pub mod engine;
pub mod fmt;
pub mod glyph;
pub mod index;
pub mod row;
pub mod scan;
pub mod solar_term;

/// 月名，`Common` 為平月，`Leap` 為閏月。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub enum Month {
    Common(u32),
    Leap(u32),
}

impl Month {
    /// 依月序號及平閏建立月名。
    pub fn new(num: u32, is_leap: bool) -> Self {
        if is_leap {
            Self::Leap(num)
        } else {
            Self::Common(num)
        }
    }
    /// 取得月序號，無論平閏。
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// 閏月為 `true`，平月為 `false`
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
    /// 取得月名的文本形式，與對照表寫法一致。
    pub fn name(&self) -> String {
        fmt::month(*self)
    }
    /// 推定本月之前一月：閏月前為同序號平月，正月前為十二月。
    ///
    /// 若前一月本身為閏月，則無從由本月推知，此時結果不確，故僅於缺乏前表狀態時使用。
    pub fn preceding(&self) -> Self {
        match *self {
            Self::Leap(n) => Self::Common(n),
            Self::Common(n) if n <= 1 => Self::Common(12),
            Self::Common(n) => Self::Common(n - 1),
        }
    }
}

/// 農曆日期。年、月、日相同而平閏不同者為兩個不同日子。
///
/// `year` 為該農曆年正月初一所在的公元年。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct LunarDate {
    pub year: i32,
    pub month: Month,
    pub day: u32,
}

impl LunarDate {
    /// 以年、月序號、日及閏月標記建立農曆日期。
    ///
    /// ```
    /// use nongli::chinese::{LunarDate, Month};
    ///
    /// let date = LunarDate::new(2020, 4, 20, true);
    /// assert_eq!(Month::Leap(4), date.month);
    /// assert!(date.is_leap_month());
    /// ```
    pub fn new(year: i32, month: u32, day: u32, is_leap_month: bool) -> Self {
        Self {
            year,
            month: Month::new(month, is_leap_month),
            day,
        }
    }
    /// 是否在閏月。
    pub fn is_leap_month(&self) -> bool {
        self.month.is_leap()
    }
    /// 取得年份干支，如「庚子」。
    pub fn year_name(&self) -> String {
        fmt::sexagenary(fmt::sexagenary_for_year(self.year))
    }
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}年{}{}",
            self.year,
            fmt::month(self.month),
            fmt::day(self.day)
        )
    }
}

/// 對照表一行解碼所得的一日記錄，建立後不再改動。
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct DayEntry {
    /// 公曆日期
    pub date: CalendarDate,
    /// 農曆日期
    pub lunar: LunarDate,
    /// 星期序號，`0` 為星期日
    pub weekday: u32,
    /// 星期欄原文，如「星期三」
    pub weekday_label: String,
    /// 當日所交節氣，無則為 `None`
    pub solar_term: Option<String>,
}

impl DayEntry {
    /// 是否為月首（初一）。
    pub fn is_month_start(&self) -> bool {
        self.lunar.day == 1
    }
}

/// 查詢用的日期：公曆或農曆，二者擇一。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DateQuery {
    Solar(CalendarDate),
    Lunar(LunarDate),
}

impl From<CalendarDate> for DateQuery {
    fn from(date: CalendarDate) -> Self {
        Self::Solar(date)
    }
}

impl From<LunarDate> for DateQuery {
    fn from(date: LunarDate) -> Self {
        Self::Lunar(date)
    }
}

impl std::fmt::Display for DateQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Solar(date) => write!(f, "{date}"),
            Self::Lunar(date) => write!(f, "{date}"),
        }
    }
}

//! 對照表單行解碼
//!
//! 每行以空白分欄：公曆日期、農曆日（或月名）、星期、節氣（可無）。
//! 月名行（以「月」收尾）開啟新月，其後各行只記日序，月份須沿用前一月名行，
//! 故解碼須帶入前一行留下的 [`DecoderState`]。

use chrono::NaiveDate;

use super::{glyph, DayEntry, LunarDate, Month};
use crate::date::CalendarDate;
use crate::error::DecodeError;

const LEAP_MARKER: char = '閏';
const MONTH_MARKER: char = '月';
const FIRST_MONTH: char = '正';

/// 行間傳遞的解碼狀態。
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DecoderState {
    /// 當前農曆年
    pub lunar_year: i32,
    /// 當前月，`None` 表示尚未遇到月名行且無前表可依
    pub month: Option<Month>,
}

impl DecoderState {
    /// 無前表可依時的佔位狀態。表首諸日必在正月之前，故農曆年取前一公元年。
    pub fn unknown(table_year: i32) -> Self {
        Self {
            lunar_year: table_year - 1,
            month: None,
        }
    }

    /// 由前表末日記錄推得次表的起始狀態。
    pub fn after(entry: &DayEntry) -> Self {
        Self {
            lunar_year: entry.lunar.year,
            month: Some(entry.lunar.month),
        }
    }
}

/// 公曆日期欄格式。發佈方曾改版：2010 年及以前的表月、日補零，其後不補。
///
/// 格式依**表**的年份而定，而非所解析日期的年份。
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DateFormat {
    /// `2010年01月05日`
    Padded,
    /// `2011年1月5日`
    Unpadded,
}

impl DateFormat {
    /// 依表年份及補零格式的最末年份選擇格式。
    pub fn for_table(table_year: i32, padded_through: i32) -> Self {
        if table_year <= padded_through {
            Self::Padded
        } else {
            Self::Unpadded
        }
    }

    /// `chrono` 格式串。
    pub fn pattern(&self) -> &'static str {
        match self {
            Self::Padded => "%Y年%m月%d日",
            Self::Unpadded => "%Y年%-m月%-d日",
        }
    }

    /// 按本格式寫出公曆日期欄。
    pub fn format(&self, date: CalendarDate) -> String {
        match self {
            Self::Padded => format!("{}年{:02}月{:02}日", date.year, date.month, date.day),
            Self::Unpadded => format!("{}年{}月{}日", date.year, date.month, date.day),
        }
    }

    /// 嚴格解析公曆日期欄：解析後須能原樣格式化回同一文本。
    ///
    /// ```
    /// use nongli::CalendarDate;
    /// use nongli::chinese::row::DateFormat;
    ///
    /// let date = DateFormat::Padded.parse("2010年01月05日").unwrap();
    /// assert_eq!(CalendarDate::new(2010, 1, 5), Some(date));
    /// assert!(DateFormat::Unpadded.parse("2011年01月05日").is_err());
    /// ```
    pub fn parse(&self, text: &str) -> Result<CalendarDate, DecodeError> {
        let pattern = self.pattern();
        let bad = || DecodeError::BadDate {
            text: text.to_owned(),
            format: pattern,
        };
        let date = NaiveDate::parse_from_str(text, pattern).map_err(|_| bad())?;
        if date.format(pattern).to_string() != text {
            return Err(bad());
        }
        Ok(date.into())
    }
}

/// 單行解碼結果。月份未知（表首且無前表狀態）時 `month` 為 `None`，待掃描器回填。
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Row {
    pub date: CalendarDate,
    pub lunar_year: i32,
    pub month: Option<Month>,
    pub day: u32,
    pub weekday: u32,
    pub weekday_label: String,
    pub solar_term: Option<String>,
}

impl Row {
    /// 月份已知時轉為 [`DayEntry`]。
    pub fn into_entry(self) -> Option<DayEntry> {
        let month = self.month?;
        Some(self.resolve(month))
    }

    /// 以給定月份轉為 [`DayEntry`]，用於回填表首諸日。
    pub fn resolve(self, month: Month) -> DayEntry {
        DayEntry {
            date: self.date,
            lunar: LunarDate {
                year: self.lunar_year,
                month,
                day: self.day,
            },
            weekday: self.weekday,
            weekday_label: self.weekday_label,
            solar_term: self.solar_term,
        }
    }
}

/// 農曆欄拆解結果
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
struct Descriptor {
    leap: bool,
    month_start: bool,
    first_month: bool,
    value: u32,
}

fn decode_descriptor(text: &str) -> Result<Descriptor, DecodeError> {
    let bad = || DecodeError::BadDescriptor {
        text: text.to_owned(),
    };

    let mut chars: Vec<char> = text.chars().collect();
    let leap = chars.first() == Some(&LEAP_MARKER);
    if leap {
        chars.remove(0);
    }
    let month_start = chars.last() == Some(&MONTH_MARKER);
    if month_start {
        chars.pop();
    }

    let (&ones_glyph, rest) = chars.split_last().ok_or_else(bad)?;
    if rest.len() > 1 || !chars.iter().all(|&c| glyph::is_numeral(c)) {
        return Err(bad());
    }

    let ones = glyph::decode(ones_glyph);
    let mut tens = rest.first().map_or(0, |&c| glyph::decode(c));
    // 「十一」之「十」記一個十，「二十」「三十」末字已為十，十位須減一
    if tens == 10 {
        tens = 1;
    }
    if tens != 0 && ones == 10 {
        tens -= 1;
    }

    Ok(Descriptor {
        leap,
        month_start,
        first_month: month_start && rest.is_empty() && ones_glyph == FIRST_MONTH,
        value: tens * 10 + ones,
    })
}

/// 解碼一行，返回該行結果及傳給下一行的狀態。
///
/// 正月（非閏）之行先將農曆年加一，再以新年份標記本行。
///
/// ```
/// use nongli::chinese::Month;
/// use nongli::chinese::row::{decode_row, DateFormat, DecoderState};
///
/// let state = DecoderState { lunar_year: 2019, month: Some(Month::Common(12)) };
/// let (row, next) = decode_row("2020年1月25日 正月 星期六", DateFormat::Unpadded, state).unwrap();
///
/// assert_eq!(2020, row.lunar_year);
/// assert_eq!((Some(Month::Common(1)), 1), (row.month, row.day));
/// assert_eq!(2020, next.lunar_year);
/// ```
pub fn decode_row(
    line: &str,
    format: DateFormat,
    state: DecoderState,
) -> Result<(Row, DecoderState), DecodeError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let field = |index: usize| {
        fields
            .get(index)
            .copied()
            .ok_or(DecodeError::MissingField { index })
    };
    let date_text = field(0)?;
    let descriptor_text = field(1)?;
    let weekday_label = field(2)?;

    let descriptor = decode_descriptor(descriptor_text)?;
    let out_of_range = || DecodeError::NumeralOutOfRange {
        value: descriptor.value,
        text: descriptor_text.to_owned(),
    };

    let mut next = state;
    let day = if descriptor.month_start {
        if !(1..=12).contains(&descriptor.value) {
            return Err(out_of_range());
        }
        next.month = Some(Month::new(descriptor.value, descriptor.leap));
        if descriptor.first_month && !descriptor.leap {
            next.lunar_year += 1;
        }
        1
    } else {
        if descriptor.leap {
            return Err(DecodeError::StrayLeapMarker {
                text: descriptor_text.to_owned(),
            });
        }
        if !(1..=30).contains(&descriptor.value) {
            return Err(out_of_range());
        }
        descriptor.value
    };

    let date = format.parse(date_text)?;

    let weekday = weekday_label.chars().last().map_or(0, glyph::decode);
    if weekday != date.day_of_week() {
        return Err(DecodeError::WeekdayMismatch {
            label: weekday_label.to_owned(),
            date,
        });
    }

    let row = Row {
        date,
        lunar_year: next.lunar_year,
        month: next.month,
        day,
        weekday,
        weekday_label: weekday_label.to_owned(),
        solar_term: fields.get(3).map(|&term| term.to_owned()),
    };
    Ok((row, next))
}

//! Shared fixtures: reference tables rendered in the published layout from
//! lists of lunar month starts.
//!
//! Month starts follow the published calendar. Solar terms are placed on
//! their typical day of the Gregorian year, which is close to but not always
//! the published day; tests only rely on their count and order.

#![allow(dead_code)]

use std::ops::RangeInclusive;

use nongli::chinese::row::{DateFormat, DecoderState};
use nongli::chinese::{fmt, DayEntry, LunarDate, Month};
use nongli::{CalendarDate, Engine, EngineConfig, MemorySource};

/// `(year, month, day, lunar month)`; a negative lunar month is a leap month.
pub type MonthStart = (i32, u32, u32, i32);

/// Lunar months from late 1993 to early 1996 (1995 has a leap eighth month).
pub const NINETIES: &[MonthStart] = &[
    (1993, 12, 13, 11),
    (1994, 1, 12, 12),
    (1994, 2, 10, 1),
    (1994, 3, 12, 2),
    (1994, 4, 11, 3),
    (1994, 5, 11, 4),
    (1994, 6, 9, 5),
    (1994, 7, 9, 6),
    (1994, 8, 7, 7),
    (1994, 9, 6, 8),
    (1994, 10, 5, 9),
    (1994, 11, 3, 10),
    (1994, 12, 3, 11),
    (1995, 1, 1, 12),
    (1995, 1, 31, 1),
    (1995, 3, 1, 2),
    (1995, 3, 31, 3),
    (1995, 4, 30, 4),
    (1995, 5, 29, 5),
    (1995, 6, 28, 6),
    (1995, 7, 27, 7),
    (1995, 8, 26, 8),
    (1995, 9, 25, -8),
    (1995, 10, 24, 9),
    (1995, 11, 22, 10),
    (1995, 12, 22, 11),
    (1996, 1, 20, 12),
    (1996, 2, 19, 1),
];

/// Lunar months from late 2018 to early 2023 (2020 has a leap fourth month).
pub const TWENTIES: &[MonthStart] = &[
    (2018, 12, 7, 11),
    (2019, 1, 6, 12),
    (2019, 2, 5, 1),
    (2019, 3, 7, 2),
    (2019, 4, 5, 3),
    (2019, 5, 5, 4),
    (2019, 6, 3, 5),
    (2019, 7, 3, 6),
    (2019, 8, 1, 7),
    (2019, 8, 30, 8),
    (2019, 9, 29, 9),
    (2019, 10, 28, 10),
    (2019, 11, 26, 11),
    (2019, 12, 26, 12),
    (2020, 1, 25, 1),
    (2020, 2, 23, 2),
    (2020, 3, 24, 3),
    (2020, 4, 23, 4),
    (2020, 5, 23, -4),
    (2020, 6, 21, 5),
    (2020, 7, 21, 6),
    (2020, 8, 19, 7),
    (2020, 9, 17, 8),
    (2020, 10, 17, 9),
    (2020, 11, 15, 10),
    (2020, 12, 15, 11),
    (2021, 1, 13, 12),
    (2021, 2, 12, 1),
    (2021, 3, 13, 2),
    (2021, 4, 12, 3),
    (2021, 5, 12, 4),
    (2021, 6, 10, 5),
    (2021, 7, 10, 6),
    (2021, 8, 8, 7),
    (2021, 9, 7, 8),
    (2021, 10, 6, 9),
    (2021, 11, 5, 10),
    (2021, 12, 4, 11),
    (2022, 1, 3, 12),
    (2022, 2, 1, 1),
    (2022, 3, 3, 2),
    (2022, 4, 1, 3),
    (2022, 5, 1, 4),
    (2022, 5, 30, 5),
    (2022, 6, 29, 6),
    (2022, 7, 29, 7),
    (2022, 8, 27, 8),
    (2022, 9, 26, 9),
    (2022, 10, 25, 10),
    (2022, 11, 24, 11),
    (2022, 12, 23, 12),
    (2023, 1, 22, 1),
];

/// Lunar months from late 1900 to early 1902 (the first table year).
pub const NINETEEN_HUNDRED: &[MonthStart] = &[
    (1900, 11, 22, 10),
    (1900, 12, 22, 11),
    (1901, 1, 20, 12),
    (1901, 2, 19, 1),
    (1901, 3, 20, 2),
    (1901, 4, 19, 3),
    (1901, 5, 18, 4),
    (1901, 6, 16, 5),
    (1901, 7, 16, 6),
    (1901, 8, 14, 7),
    (1901, 9, 13, 8),
    (1901, 10, 12, 9),
    (1901, 11, 11, 10),
    (1901, 12, 11, 11),
    (1902, 1, 10, 12),
    (1902, 2, 8, 1),
];

/// Lunar months from late 2087 to early 2089 (2088 has a leap fourth month).
pub const EIGHTY_EIGHT: &[MonthStart] = &[
    (2087, 11, 25, 11),
    (2087, 12, 25, 12),
    (2088, 1, 24, 1),
    (2088, 2, 22, 2),
    (2088, 3, 23, 3),
    (2088, 4, 21, 4),
    (2088, 5, 21, -4),
    (2088, 6, 19, 5),
    (2088, 7, 18, 6),
    (2088, 8, 17, 7),
    (2088, 9, 15, 8),
    (2088, 10, 14, 9),
    (2088, 11, 13, 10),
    (2088, 12, 13, 11),
    (2089, 1, 12, 12),
    (2089, 2, 10, 1),
];

/// Typical Gregorian day of each solar term.
const TERM_DAYS: &[(u32, u32, &str)] = &[
    (1, 6, "小寒"),
    (1, 20, "大寒"),
    (2, 4, "立春"),
    (2, 19, "雨水"),
    (3, 5, "驚蟄"),
    (3, 20, "春分"),
    (4, 4, "清明"),
    (4, 20, "穀雨"),
    (5, 5, "立夏"),
    (5, 21, "小滿"),
    (6, 5, "芒種"),
    (6, 21, "夏至"),
    (7, 7, "小暑"),
    (7, 22, "大暑"),
    (8, 7, "立秋"),
    (8, 23, "處暑"),
    (9, 7, "白露"),
    (9, 23, "秋分"),
    (10, 8, "寒露"),
    (10, 23, "霜降"),
    (11, 7, "立冬"),
    (11, 22, "小雪"),
    (12, 7, "大雪"),
    (12, 21, "冬至"),
];

pub fn date(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::new(year, month, day).expect("valid fixture date")
}

fn month_of(label: i32) -> Month {
    Month::new(label.unsigned_abs(), label < 0)
}

/// Lunar year a month belongs to: eleventh and twelfth months starting in
/// January or February still belong to the previous year.
fn lunar_year_of(start: &MonthStart) -> i32 {
    let (year, month, _, label) = *start;
    if label.unsigned_abs() >= 11 && month <= 2 {
        year - 1
    } else {
        year
    }
}

/// Lunar date of `day` according to `starts`.
pub fn lunar_on(starts: &[MonthStart], day: CalendarDate) -> LunarDate {
    let i = starts
        .iter()
        .rposition(|&(y, m, d, _)| date(y, m, d) <= day)
        .expect("fixture starts before the day");
    assert!(i + 1 < starts.len(), "fixture ends before {day}");
    let (y, m, d, label) = starts[i];
    LunarDate {
        year: lunar_year_of(&starts[i]),
        month: month_of(label),
        day: day.jdn() - date(y, m, d).jdn() + 1,
    }
}

/// State left by the last day of the table before `year`.
pub fn seed(starts: &[MonthStart], year: i32) -> DecoderState {
    let lunar = lunar_on(starts, date(year - 1, 12, 31));
    DecoderState {
        lunar_year: lunar.year,
        month: Some(lunar.month),
    }
}

/// Expected entries for every day of Gregorian `year`.
pub fn entries(starts: &[MonthStart], year: i32) -> Vec<DayEntry> {
    let mut entries = Vec::with_capacity(366);
    let mut day = date(year, 1, 1);
    while day.year == year {
        let weekday = day.day_of_week();
        entries.push(DayEntry {
            date: day,
            lunar: lunar_on(starts, day),
            weekday,
            weekday_label: fmt::weekday(weekday),
            solar_term: TERM_DAYS
                .iter()
                .find(|&&(tm, td, _)| (tm, td) == (day.month, day.day))
                .map(|&(_, _, name)| name.to_string()),
        });
        day = day.succ();
    }
    entries
}

/// Renders entries as the table text for `year`, header included.
pub fn render(year: i32, entries: &[DayEntry]) -> String {
    let format = DateFormat::for_table(year, 2010);
    let mut text = format!(
        "{year}({} - 肖{})年公曆與農曆日期對照表\n\n公曆日期        農曆日期        星期    節氣\n",
        fmt::sexagenary(fmt::sexagenary_for_year(year)),
        fmt::zodiac(year)
    );
    for entry in entries {
        text += &fmt::table_row(entry, format);
        text.push('\n');
    }
    text
}

pub fn table(starts: &[MonthStart], year: i32) -> String {
    render(year, &entries(starts, year))
}

pub fn source(starts: &[MonthStart], years: RangeInclusive<i32>) -> MemorySource {
    let mut source = MemorySource::new();
    for year in years {
        source.insert(year, table(starts, year));
    }
    source
}

/// Engine whose supported range is exactly `years`.
pub fn engine(starts: &[MonthStart], years: RangeInclusive<i32>) -> Engine<MemorySource> {
    init_tracing();
    let config = EngineConfig::default().with_years(*years.start(), *years.end());
    Engine::with_config(source(starts, years), config)
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

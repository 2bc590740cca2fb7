//! 格式化相關功能
//!
//! 月名、日名採用對照表中的寫法，如「十一月」「閏四月」「廿三」。

use super::row::DateFormat;
use super::{DayEntry, Month};

/// 漢數字，第 `1..=9` 項分別為「一」到「九」。為便於格式化日期，第 0 項為「十」。
pub const NUM_CHINESE: &[&str] = &["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// 二十四節氣名稱（對照表所用正體字），序號 `1..=24` 分別為立春到大寒，第 0 項亦為大寒。
pub const SOLAR_TERMS: &[&str] = &[
    "大寒", "立春", "雨水", "驚蟄", "春分", "清明", "穀雨", "立夏", "小滿", "芒種", "夏至", "小暑",
    "大暑", "立秋", "處暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至", "小寒",
];

/// 干支序號轉為文本形式。
///
/// # 用例
///
/// ```
/// use nongli::chinese;
///
/// assert_eq!("乙巳", chinese::fmt::sexagenary(42));
/// ```
pub fn sexagenary(num: u32) -> String {
    static NAME1: &[&str] = &["癸", "甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬"];
    static NAME2: &[&str] = &[
        "亥", "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌",
    ];
    NAME1[num.rem_euclid(10) as usize].to_owned() + NAME2[num.rem_euclid(12) as usize]
}

/// 取得所給年份的干支序號，`1..=60` 對應甲子到癸亥。
///
/// ```
/// use nongli::chinese::fmt::sexagenary_for_year;
///
/// assert_eq!(1, sexagenary_for_year(-2696));
/// assert_eq!(37, sexagenary_for_year(2020)); // 庚子
/// ```
pub fn sexagenary_for_year(year: i32) -> u32 {
    (year.rem_euclid(60) as u32 + 2696) % 60 + 1
}

/// 取得所給年份的生肖。
///
/// ```
/// use nongli::chinese::fmt::zodiac;
///
/// assert_eq!("鼠", zodiac(2020));
/// ```
pub fn zodiac(year: i32) -> &'static str {
    const ANIMALS: &[&str] = &[
        "鼠", "牛", "虎", "兔", "龍", "蛇", "馬", "羊", "猴", "雞", "狗", "豬",
    ];
    ANIMALS[(year - 4).rem_euclid(12) as usize]
}

/// 取得月名（含「月」字），與對照表寫法一致：正月、二月……十二月，閏月前加「閏」。
///
/// 月序號不在 `1..=12` 間時以阿拉伯數字表示。
///
/// # 用例
///
/// ```
/// use nongli::chinese::{self, Month::*};
///
/// assert_eq!("十一月", chinese::fmt::month(Common(11)));
/// assert_eq!("閏正月", chinese::fmt::month(Leap(1)));
/// ```
pub fn month(m: Month) -> String {
    let mut rt = String::new();
    if m.is_leap() {
        rt += "閏";
    }
    let num = m.num();
    match num {
        1 => rt += "正",
        2..=10 => rt += NUM_CHINESE[(num % 10) as usize],
        11 | 12 => {
            rt += "十";
            rt += NUM_CHINESE[(num % 10) as usize];
        }
        _ => rt += &num.to_string(),
    }
    rt += "月";
    rt
}

/// 取得日名，前十日為「初一」到「初十」，第 21 至 29 日為「廿一」到「廿九」。
///
/// # 用例
///
/// ```
/// use nongli::chinese;
///
/// assert_eq!("初十", chinese::fmt::day(10));
/// assert_eq!("廿五", chinese::fmt::day(25));
/// assert_eq!("三十", chinese::fmt::day(30));
/// ```
pub fn day(d: u32) -> String {
    let tens = match d {
        1..=10 => "初",
        11..=19 => "十",
        20 => "二",
        21..=29 => "廿",
        30 => "三",
        _ => return d.to_string(),
    };
    tens.to_owned() + NUM_CHINESE[(d % 10) as usize]
}

/// 星期序號（`0` 為星期日）轉為「星期X」形式。
pub fn weekday(ordinal: u32) -> String {
    let name = match ordinal % 7 {
        0 => "日",
        n => NUM_CHINESE[n as usize],
    };
    "星期".to_owned() + name
}

/// 節氣序號轉為名稱。`1..=24` 分別為立春到大寒。
///
/// # 用例
///
/// ```
/// use nongli::chinese;
///
/// assert_eq!("穀雨", chinese::fmt::solar_term(6));
/// ```
pub fn solar_term(term: u32) -> &'static str {
    SOLAR_TERMS[term.rem_euclid(24) as usize]
}

/// 將一日記錄寫成對照表的一行，月首寫月名，其餘寫日名。
///
/// ```
/// use nongli::CalendarDate;
/// use nongli::chinese::{fmt, DayEntry, LunarDate};
/// use nongli::chinese::row::DateFormat;
///
/// let entry = DayEntry {
///     date: CalendarDate::new(2020, 5, 23).unwrap(),
///     lunar: LunarDate::new(2020, 4, 1, true),
///     weekday: 6,
///     weekday_label: "星期六".into(),
///     solar_term: None,
/// };
/// assert_eq!("2020年5月23日 閏四月 星期六", fmt::table_row(&entry, DateFormat::Unpadded));
/// ```
pub fn table_row(entry: &DayEntry, format: DateFormat) -> String {
    let lunar = if entry.is_month_start() {
        month(entry.lunar.month)
    } else {
        day(entry.lunar.day)
    };
    let mut line = format!(
        "{} {} {}",
        format.format(entry.date),
        lunar,
        entry.weekday_label
    );
    if let Some(term) = &entry.solar_term {
        line.push(' ');
        line.push_str(term);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sexagenary() {
        for (std, num) in [("甲子", 1), ("庚寅", 27), ("癸亥", 60)] {
            assert_eq!(std, sexagenary(num));
        }
        for (std, year) in [(60, -2697), (1, -2696), (17, 2000)] {
            assert_eq!(std, sexagenary_for_year(year));
        }
        assert_eq!("庚子", sexagenary(sexagenary_for_year(2020)));
    }

    #[test]
    fn test_month() {
        use Month::*;
        for (std, m) in [
            ("正月", Common(1)),
            ("四月", Common(4)),
            ("閏四月", Leap(4)),
            ("十月", Common(10)),
            ("十二月", Common(12)),
            ("閏十一月", Leap(11)),
        ] {
            assert_eq!(std, month(m));
        }
        assert_eq!("13月", month(Common(13)));
    }

    #[test]
    fn test_day() {
        for (std, d) in [
            ("初一", 1),
            ("初十", 10),
            ("十一", 11),
            ("二十", 20),
            ("廿一", 21),
            ("三十", 30),
        ] {
            assert_eq!(std, day(d));
        }
        assert_eq!("31", day(31));
    }

    #[test]
    fn test_weekday() {
        assert_eq!("星期日", weekday(0));
        assert_eq!("星期三", weekday(3));
        assert_eq!("星期六", weekday(6));
    }

    #[test]
    fn test_zodiac() {
        assert_eq!("牛", zodiac(2021));
        assert_eq!("狗", zodiac(1994));
    }
}

//! 節氣查詢

use super::engine::Engine;
use super::DayEntry;
use crate::error::Error;
use crate::source::TableSource;

impl<S: TableSource> Engine<S> {
    /// 列出農曆 `year` 年內各交節日，依日期排序。
    ///
    /// 農曆年跨公曆 `year`、`year + 1` 兩表，兩表皆建索引後取農曆年相符且有節氣的記錄。
    /// `names` 非空時只取其中名稱的節氣。不在支持範圍的表略過，兩表皆不在則回報
    /// [`Error::YearNotCovered`]；範圍內缺表等錯誤照常返回。
    ///
    /// 閏年約三百八十餘日，同一節氣可能出現兩次（如 2020 年兩逢立春）。
    pub fn solar_terms(&mut self, year: i32, names: &[&str]) -> Result<Vec<DayEntry>, Error> {
        let table_years = self.table_years(year);
        if table_years.is_empty() {
            return Err(Error::YearNotCovered { year });
        }
        let mut terms = Vec::new();
        for table_year in table_years {
            terms.extend(
                self.year_index(table_year)?
                    .entries()
                    .iter()
                    .filter(|entry| entry.lunar.year == year)
                    .filter(|entry| match &entry.solar_term {
                        Some(term) => names.is_empty() || names.contains(&term.as_str()),
                        None => false,
                    })
                    .cloned(),
            );
        }
        Ok(terms)
    }
}

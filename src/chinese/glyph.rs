//! 對照表數字字形解碼
//!
//! 同一張表兼用於兩處：
//!
//! - 農曆日、月名中的數字，如「初五」「廿三」「十二月」；
//! - 星期欄末字，如「星期三」→ 3，「星期日」→ 0。
//!
//! 兩處用法共用一表，勿拆分。

/// 字形與數值對照。「初」「天」「日」為 0，「正」同「一」，「廿」同「二」（僅見於十位）。
pub const GLYPHS: &[(char, u32)] = &[
    ('初', 0),
    ('天', 0),
    ('日', 0),
    ('正', 1),
    ('一', 1),
    ('二', 2),
    ('廿', 2),
    ('三', 3),
    ('四', 4),
    ('五', 5),
    ('六', 6),
    ('七', 7),
    ('八', 8),
    ('九', 9),
    ('十', 10),
];

/// 解碼單個字形，表外字符一律為 0，由調用方檢查合法性。
///
/// ```
/// use nongli::chinese::glyph::decode;
///
/// assert_eq!(2, decode('廿'));
/// assert_eq!(10, decode('十'));
/// assert_eq!(0, decode('月'));
/// ```
pub fn decode(c: char) -> u32 {
    GLYPHS
        .iter()
        .find(|(glyph, _)| *glyph == c)
        .map_or(0, |&(_, value)| value)
}

/// 是否為表內字形。
pub fn is_numeral(c: char) -> bool {
    GLYPHS.iter().any(|(glyph, _)| *glyph == c)
}

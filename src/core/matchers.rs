//! 郵遞區號文法用的小型比對器。
//!
//! 只接受 ASCII 數字，不允許任何前後綴字元。

/// 長度為 5 的郵遞區號
pub const POSTAL_CODE_LEN: usize = 5;

/// 是否剛好為 5 位 ASCII 數字
pub fn is_postal_code(value: &str) -> bool {
    value.len() == POSTAL_CODE_LEN && is_digits(value)
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// 表單輸入的空白：Unicode 空白加上 BOM，但不含 NEL
pub fn is_form_whitespace(c: char) -> bool {
    match c {
        '\u{FEFF}' => true,
        '\u{0085}' => false,
        _ => c.is_whitespace(),
    }
}

pub fn trim_form(value: &str) -> &str {
    value.trim_matches(is_form_whitespace)
}

/// 儲存格式中的一個片段：`FROM` 或 `FROM-TO`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeFragment<'a> {
    pub from: &'a str,
    pub to: Option<&'a str>,
}

/// 比對 `digits` 或 `digits-digits`，其餘一律回傳 `None`
pub fn match_range_fragment(fragment: &str) -> Option<RangeFragment<'_>> {
    match fragment.split_once('-') {
        None if is_digits(fragment) => Some(RangeFragment {
            from: fragment,
            to: None,
        }),
        Some((from, to)) if is_digits(from) && is_digits(to) => Some(RangeFragment {
            from,
            to: Some(to),
        }),
        _ => None,
    }
}

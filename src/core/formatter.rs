use crate::core::matchers::match_range_fragment;

/// 將儲存格式（`1000-1010;1020-1030;`）轉回可編輯文字。
///
/// 每個範圍輸出成 `FROM,TO`；沒有 `TO` 或 `TO` 與 `FROM` 相同時只輸出 `FROM`，
/// 以 `";\n"` 串接並以單一分號結尾。
///
/// 不做驗證：無法辨識的片段會變成空字串，但仍保留其位置。
pub fn format_ranges(canonical: &str) -> String {
    let trimmed = canonical.strip_suffix(';').unwrap_or(canonical);

    let fragments: Vec<String> = trimmed
        .split(';')
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| match match_range_fragment(fragment) {
            Some(range) => match range.to {
                Some(to) if to != range.from => format!("{},{}", range.from, to),
                _ => range.from.to_string(),
            },
            None => String::new(),
        })
        .collect();

    format!("{};", fragments.join(";\n"))
}

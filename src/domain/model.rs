use serde::{Deserialize, Serialize};

/// 郵遞區號輸入驗證時發現的單一問題。
///
/// 行號、項目序號、代碼序號皆從 1 起算。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostcodeIssue {
    /// 輸入不是字串
    InputType,
    /// 沒有任何非空白行
    EmptyInput,
    EmptyLine {
        line: usize,
    },
    EmptyEntry {
        line: usize,
        entry: usize,
    },
    /// 一個項目只能有一或兩個以逗號分隔的代碼
    InvalidCodeCount {
        line: usize,
        entry: usize,
        count: usize,
    },
    /// 代碼不是剛好 5 位數字；`code` 為修剪後的原始值
    InvalidPostalCode {
        line: usize,
        entry: usize,
        part: usize,
        code: String,
    },
    /// 範圍結尾必須嚴格大於開頭
    InvalidRangeOrder {
        line: usize,
        entry: usize,
        first: String,
        second: String,
    },
}

impl PostcodeIssue {
    /// 翻譯鍵
    pub fn translation_key(&self) -> &'static str {
        match self {
            PostcodeIssue::InputType => "message.error.postcode.inputMustBeString",
            PostcodeIssue::EmptyInput => "message.error.postcode.inputMustContainPostalCode",
            PostcodeIssue::EmptyLine { .. } => "message.error.postcode.emptyLine",
            PostcodeIssue::EmptyEntry { .. } => "message.error.postcode.emptyEntry",
            PostcodeIssue::InvalidCodeCount { .. } => "message.error.postcode.invalidCodeCount",
            PostcodeIssue::InvalidPostalCode { .. } => "message.error.postcode.invalidPostalCode",
            PostcodeIssue::InvalidRangeOrder { .. } => "message.error.postcode.invalidRange",
        }
    }

    /// 翻譯插值參數（名稱與翻譯檔中的 `{{name}}` 對應）
    pub fn translation_params(&self) -> Vec<(&'static str, String)> {
        match self {
            PostcodeIssue::InputType | PostcodeIssue::EmptyInput => Vec::new(),
            PostcodeIssue::EmptyLine { line } => vec![("lineNumber", line.to_string())],
            PostcodeIssue::EmptyEntry { line, entry } => vec![
                ("lineNumber", line.to_string()),
                ("entryNumber", entry.to_string()),
            ],
            PostcodeIssue::InvalidCodeCount { line, entry, count } => vec![
                ("lineNumber", line.to_string()),
                ("entryNumber", entry.to_string()),
                ("count", count.to_string()),
            ],
            PostcodeIssue::InvalidPostalCode {
                line,
                entry,
                part,
                code,
            } => vec![
                ("lineNumber", line.to_string()),
                ("entryNumber", entry.to_string()),
                ("partIndex", part.to_string()),
                ("code", code.clone()),
            ],
            PostcodeIssue::InvalidRangeOrder {
                line,
                entry,
                first,
                second,
            } => vec![
                ("lineNumber", line.to_string()),
                ("entryNumber", entry.to_string()),
                ("firstCode", first.clone()),
                ("secondCode", second.clone()),
            ],
        }
    }
}

/// 寫入請求的 JSON 內容
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostcodeRangesPayload {
    #[serde(rename = "postcodeRanges")]
    pub postcode_ranges: String,
}

/// 讀取回應：`{ "_embedded": { "postcodeRanges": "..." } }`，缺漏的部分視為空字串
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgencyPostcodeRangeResponse {
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<EmbeddedPostcodeRanges>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmbeddedPostcodeRanges {
    #[serde(rename = "postcodeRanges", default)]
    pub postcode_ranges: Option<String>,
}

impl AgencyPostcodeRangeResponse {
    pub fn postcode_ranges(&self) -> &str {
        self.embedded
            .as_ref()
            .and_then(|e| e.postcode_ranges.as_deref())
            .unwrap_or("")
    }
}

/// 更新方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateMethod {
    /// 只送一次 POST
    Create,
    /// 先 DELETE（失敗忽略）再 POST
    #[default]
    Replace,
}

use crate::core::matchers::{is_postal_code, trim_form};
use crate::domain::model::PostcodeIssue;
use crate::domain::ports::Translator;
use crate::utils::error::RangeValidationError;

/// 將使用者輸入的多行郵遞區號文字驗證並轉成儲存格式。
///
/// 輸入格式（每行）：
///   - 單一代碼 `12345;`
///   - 代碼範圍 `12345,67890;`
///
/// 輸出格式：`12345-12345;12345-67890;`
///
/// 會走完整個輸入才決定成功或失敗，所有問題一次回報。
pub struct RangeParser<T: Translator> {
    translator: T,
}

impl<T: Translator> RangeParser<T> {
    pub fn new(translator: T) -> Self {
        Self { translator }
    }

    pub fn translator(&self) -> &T {
        &self.translator
    }

    /// 表單送來的值不一定是字串
    pub fn parse_value(&self, value: &serde_json::Value) -> Result<String, RangeValidationError> {
        match value.as_str() {
            Some(text) => self.parse(text),
            None => Err(self.reject(vec![PostcodeIssue::InputType])),
        }
    }

    pub fn validate(&self, input: &str) -> Result<(), RangeValidationError> {
        self.parse(input).map(|_| ())
    }

    pub fn parse(&self, input: &str) -> Result<String, RangeValidationError> {
        let lines: Vec<&str> = input
            .split('\n')
            .filter(|line| !trim_form(line).is_empty())
            .collect();

        if lines.is_empty() {
            return Err(self.reject(vec![PostcodeIssue::EmptyInput]));
        }

        let mut issues = Vec::new();
        let mut ranges = Vec::new();

        for (index, raw_line) in lines.iter().enumerate() {
            let line = index + 1;
            let trimmed = trim_form(raw_line);

            if trimmed.is_empty() {
                issues.push(PostcodeIssue::EmptyLine { line });
                continue;
            }

            let entries = trimmed.split(';').filter(|entry| !trim_form(entry).is_empty());

            for (entry_index, raw_entry) in entries.enumerate() {
                let entry = entry_index + 1;

                if trim_form(raw_entry).is_empty() {
                    issues.push(PostcodeIssue::EmptyEntry { line, entry });
                    continue;
                }

                let parts: Vec<&str> = raw_entry.split(',').map(trim_form).collect();
                let (from, to) = match parts.as_slice() {
                    [code] => (*code, *code),
                    [first, second] => (*first, *second),
                    _ => {
                        issues.push(PostcodeIssue::InvalidCodeCount {
                            line,
                            entry,
                            count: parts.len(),
                        });
                        continue;
                    }
                };

                for (part_index, code) in parts.iter().enumerate() {
                    if !is_postal_code(code) {
                        issues.push(PostcodeIssue::InvalidPostalCode {
                            line,
                            entry,
                            part: part_index + 1,
                            code: code.to_string(),
                        });
                    }
                }

                if parts.len() == 2 && is_postal_code(from) && is_postal_code(to) {
                    if let (Ok(first), Ok(second)) = (from.parse::<u32>(), to.parse::<u32>()) {
                        if second <= first {
                            issues.push(PostcodeIssue::InvalidRangeOrder {
                                line,
                                entry,
                                first: from.to_string(),
                                second: to.to_string(),
                            });
                        }
                    }
                }

                // 即使有錯也照樣組出片段，序號才會與完整掃描一致
                ranges.push(format!("{}-{}", from, to));
            }
        }

        tracing::debug!(
            "Parsed {} line(s) into {} range(s) with {} issue(s)",
            lines.len(),
            ranges.len(),
            issues.len()
        );

        if !issues.is_empty() {
            return Err(self.reject(issues));
        }

        Ok(format!("{};", ranges.join(";")))
    }

    fn reject(&self, issues: Vec<PostcodeIssue>) -> RangeValidationError {
        let message = issues
            .iter()
            .map(|issue| self.render(issue))
            .collect::<Vec<_>>()
            .join("\n");
        RangeValidationError::new(issues, message)
    }

    fn render(&self, issue: &PostcodeIssue) -> String {
        let params = issue.translation_params();
        let borrowed: Vec<(&str, &str)> = params
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
            .collect();
        self.translator.translate(issue.translation_key(), &borrowed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::translation::{KeyTranslator, MessageCatalog};

    /// 把鍵與參數原樣輸出，方便斷言
    fn echo(key: &str, params: &[(&str, &str)]) -> String {
        let mut out = key.to_string();
        for (name, value) in params {
            out.push_str(&format!("|{}={}", name, value));
        }
        out
    }

    fn parser() -> RangeParser<fn(&str, &[(&str, &str)]) -> String> {
        RangeParser::new(echo as fn(&str, &[(&str, &str)]) -> String)
    }

    #[test]
    fn test_single_code_becomes_degenerate_range() {
        assert_eq!(parser().parse("12345;").unwrap(), "12345-12345;");
    }

    #[test]
    fn test_paired_codes() {
        assert_eq!(parser().parse("12345,67890;").unwrap(), "12345-67890;");
    }

    #[test]
    fn test_multi_line_multi_entry() {
        assert_eq!(
            parser().parse("12345;67890;\n11111,22222;").unwrap(),
            "12345-12345;67890-67890;11111-22222;"
        );
    }

    #[test]
    fn test_whitespace_and_missing_final_semicolon_are_tolerated() {
        assert_eq!(
            parser().parse("  12345 , 67890 ;\r\n\n   \n22222").unwrap(),
            "12345-67890;22222-22222;"
        );
    }

    #[test]
    fn test_line_of_only_semicolons_yields_no_entries() {
        assert_eq!(parser().parse(";;;\n12345;").unwrap(), "12345-12345;");
        assert_eq!(parser().parse(";; ;").unwrap(), ";");
    }

    #[test]
    fn test_byte_order_mark_is_trimmed_like_whitespace() {
        assert_eq!(parser().parse("\u{FEFF}12345;").unwrap(), "12345-12345;");
        assert_eq!(
            parser().parse("\u{FEFF}\n12345,\u{FEFF}67890;").unwrap(),
            "12345-67890;"
        );
    }

    #[test]
    fn test_next_line_character_is_not_trimmed() {
        let err = parser().parse("\u{0085}12345;").unwrap_err();
        assert_eq!(
            err.issues(),
            &[PostcodeIssue::InvalidPostalCode {
                line: 1,
                entry: 1,
                part: 1,
                code: "\u{0085}12345".to_string(),
            }]
        );
    }

    #[test]
    fn test_entry_numbers_skip_empty_entries() {
        let err = parser().parse("12345;;1234;").unwrap_err();
        assert_eq!(
            err.issues(),
            &[PostcodeIssue::InvalidPostalCode {
                line: 1,
                entry: 2,
                part: 1,
                code: "1234".to_string(),
            }]
        );

        // 無效項目仍會組出片段，之後的行與項目序號不受影響
        let err = parser().parse("1234;; ;99999,11111;
;22222;333333;").unwrap_err();
        assert_eq!(
            err.issues(),
            &[
                PostcodeIssue::InvalidPostalCode {
                    line: 1,
                    entry: 1,
                    part: 1,
                    code: "1234".to_string(),
                },
                PostcodeIssue::InvalidRangeOrder {
                    line: 1,
                    entry: 2,
                    first: "99999".to_string(),
                    second: "11111".to_string(),
                },
                PostcodeIssue::InvalidPostalCode {
                    line: 2,
                    entry: 2,
                    part: 1,
                    code: "333333".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_range_order_violation() {
        let err = parser().parse("67890,12345;").unwrap_err();

        assert_eq!(
            err.issues(),
            &[PostcodeIssue::InvalidRangeOrder {
                line: 1,
                entry: 1,
                first: "67890".to_string(),
                second: "12345".to_string(),
            }]
        );
        assert_eq!(
            err.message(),
            "message.error.postcode.invalidRange|lineNumber=1|entryNumber=1|firstCode=67890|secondCode=12345"
        );
    }

    #[test]
    fn test_equal_bounds_are_rejected() {
        let err = parser().parse("12345,12345;").unwrap_err();
        assert!(matches!(
            err.issues(),
            [PostcodeIssue::InvalidRangeOrder { .. }]
        ));
    }

    #[test]
    fn test_short_code_is_reported_with_its_value() {
        let err = parser().parse("1234;").unwrap_err();

        assert_eq!(
            err.issues(),
            &[PostcodeIssue::InvalidPostalCode {
                line: 1,
                entry: 1,
                part: 1,
                code: "1234".to_string(),
            }]
        );
        assert!(err.message().contains("code=1234"));
    }

    #[test]
    fn test_invalid_part_skips_order_check() {
        let err = parser().parse("99999,1234;").unwrap_err();
        assert_eq!(
            err.issues(),
            &[PostcodeIssue::InvalidPostalCode {
                line: 1,
                entry: 1,
                part: 2,
                code: "1234".to_string(),
            }]
        );
    }

    #[test]
    fn test_too_many_codes_in_entry() {
        let err = parser().parse("11111,22222,33333;44444;").unwrap_err();
        assert_eq!(
            err.issues(),
            &[PostcodeIssue::InvalidCodeCount {
                line: 1,
                entry: 1,
                count: 3,
            }]
        );
    }

    #[test]
    fn test_empty_code_inside_pair() {
        let err = parser().parse("12345,;").unwrap_err();
        assert_eq!(
            err.issues(),
            &[PostcodeIssue::InvalidPostalCode {
                line: 1,
                entry: 1,
                part: 2,
                code: String::new(),
            }]
        );
    }

    #[test]
    fn test_empty_input() {
        for input in ["", "   ", "\n\n", " \t\n "] {
            let err = parser().parse(input).unwrap_err();
            assert_eq!(err.issues(), &[PostcodeIssue::EmptyInput]);
            assert_eq!(
                err.message(),
                "message.error.postcode.inputMustContainPostalCode"
            );
        }
    }

    #[test]
    fn test_non_string_value() {
        let err = parser().parse_value(&serde_json::json!(12345)).unwrap_err();
        assert_eq!(err.issues(), &[PostcodeIssue::InputType]);
        assert_eq!(err.message(), "message.error.postcode.inputMustBeString");

        assert_eq!(
            parser()
                .parse_value(&serde_json::json!("12345;"))
                .unwrap(),
            "12345-12345;"
        );
    }

    #[test]
    fn test_all_errors_collected_in_discovery_order() {
        let err = parser()
            .parse("12345;abcde;\n11111,22222;\n67890,12345;1234,5678;")
            .unwrap_err();

        assert_eq!(
            err.issues(),
            &[
                PostcodeIssue::InvalidPostalCode {
                    line: 1,
                    entry: 2,
                    part: 1,
                    code: "abcde".to_string(),
                },
                PostcodeIssue::InvalidRangeOrder {
                    line: 3,
                    entry: 1,
                    first: "67890".to_string(),
                    second: "12345".to_string(),
                },
                PostcodeIssue::InvalidPostalCode {
                    line: 3,
                    entry: 2,
                    part: 1,
                    code: "1234".to_string(),
                },
                PostcodeIssue::InvalidPostalCode {
                    line: 3,
                    entry: 2,
                    part: 2,
                    code: "5678".to_string(),
                },
            ]
        );
        assert_eq!(err.lines().count(), 4);
    }

    #[test]
    fn test_blank_lines_do_not_count_towards_line_numbers() {
        let err = parser().parse("12345;\n\n   \n1234;").unwrap_err();
        assert_eq!(
            err.issues(),
            &[PostcodeIssue::InvalidPostalCode {
                line: 2,
                entry: 1,
                part: 1,
                code: "1234".to_string(),
            }]
        );
    }

    #[test]
    fn test_key_translator_renders_bare_keys() {
        let parser = RangeParser::new(KeyTranslator);
        let err = parser.parse("1234;\n67890,12345;").unwrap_err();
        assert_eq!(
            err.message(),
            "message.error.postcode.invalidPostalCode\nmessage.error.postcode.invalidRange"
        );
    }

    #[test]
    fn test_english_catalog_messages() {
        let parser = RangeParser::new(MessageCatalog::english());
        let err = parser.parse("1234;\n67890,12345;").unwrap_err();
        let lines: Vec<&str> = err.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("1234"));
        assert!(lines[0].contains("Line 1"));
        assert!(lines[1].contains("Line 2"));
        assert!(lines[1].contains("67890"));
        assert!(lines[1].contains("12345"));
    }

    #[test]
    fn test_validate_discards_output() {
        assert!(parser().validate("12345;").is_ok());
        assert!(parser().validate("").is_err());
    }
}

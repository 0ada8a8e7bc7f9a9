use crate::adapters::http::HttpPostcodeRangeApi;
use crate::adapters::translation::MessageCatalog;
use crate::config::ConfigProvider;
use crate::core::formatter::format_ranges;
use crate::core::parser::RangeParser;
use crate::domain::model::{PostcodeRangesPayload, UpdateMethod};
use crate::domain::ports::{PostcodeRangeApi, Translator};
use crate::utils::error::{RangeValidationError, Result};
use crate::utils::validation::validate_agency_id;

/// 尚未儲存的新機構在表單中使用的代碼，不會有遠端資料
pub const NEW_AGENCY_ID: &str = "add";

/// 機構表單中「郵遞區號範圍」欄位背後的讀寫流程
pub struct PostcodeRangeService<A: PostcodeRangeApi, T: Translator> {
    api: A,
    parser: RangeParser<T>,
}

impl<A: PostcodeRangeApi, T: Translator> PostcodeRangeService<A, T> {
    pub fn new(api: A, translator: T) -> Self {
        Self {
            api,
            parser: RangeParser::new(translator),
        }
    }

    pub fn parser(&self) -> &RangeParser<T> {
        &self.parser
    }

    /// 表單欄位驗證
    pub fn validate_form_value(&self, text: &str) -> std::result::Result<(), RangeValidationError> {
        self.parser.validate(text)
    }

    /// 讀取並轉成可編輯文字
    pub async fn fetch_display(&self, agency_id: &str) -> Result<String> {
        validate_agency_id(agency_id)?;

        let response = self.api.get(agency_id).await?;
        let display = format_ranges(response.postcode_ranges());

        tracing::info!("Fetched postcode ranges for agency {}", agency_id);
        Ok(display)
    }

    /// 表單初始值；新機構不發請求
    pub async fn load_form_value(&self, agency_id: &str) -> Result<Option<String>> {
        if agency_id == NEW_AGENCY_ID {
            tracing::debug!("Agency not saved yet, skipping postcode range fetch");
            return Ok(None);
        }
        self.fetch_display(agency_id).await.map(Some)
    }

    /// 驗證後寫入，回傳機構代碼。驗證失敗時不會送出任何請求。
    pub async fn update(&self, agency_id: &str, text: &str, method: UpdateMethod) -> Result<String> {
        validate_agency_id(agency_id)?;

        let payload = PostcodeRangesPayload {
            postcode_ranges: self.parser.parse(text)?,
        };

        if method == UpdateMethod::Replace {
            if let Err(e) = self.api.delete(agency_id).await {
                tracing::warn!(
                    "Ignoring failed delete of postcode ranges for agency {}: {}",
                    agency_id,
                    e
                );
            }
        }

        self.api.create(agency_id, &payload).await?;

        tracing::info!(
            "Saved postcode ranges for agency {}: {}",
            agency_id,
            payload.postcode_ranges
        );
        Ok(agency_id.to_string())
    }
}

impl PostcodeRangeService<HttpPostcodeRangeApi, MessageCatalog> {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let api = HttpPostcodeRangeApi::from_config(config)?;
        Ok(Self::new(api, config.message_catalog()?))
    }
}

use crate::domain::model::{AgencyPostcodeRangeResponse, PostcodeRangesPayload};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 以鍵值查詢翻譯字串的能力，由呼叫端注入
pub trait Translator: Send + Sync {
    fn translate(&self, key: &str, params: &[(&str, &str)]) -> String;
}

impl<F> Translator for F
where
    F: Fn(&str, &[(&str, &str)]) -> String + Send + Sync,
{
    fn translate(&self, key: &str, params: &[(&str, &str)]) -> String {
        self(key, params)
    }
}

/// 機構郵遞區號範圍的遠端資源
#[async_trait]
pub trait PostcodeRangeApi: Send + Sync {
    async fn get(&self, agency_id: &str) -> Result<AgencyPostcodeRangeResponse>;
    async fn create(&self, agency_id: &str, payload: &PostcodeRangesPayload) -> Result<()>;
    async fn delete(&self, agency_id: &str) -> Result<()>;
}

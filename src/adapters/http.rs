use crate::config::ConfigProvider;
use crate::domain::model::{AgencyPostcodeRangeResponse, PostcodeRangesPayload};
use crate::domain::ports::PostcodeRangeApi;
use crate::utils::error::{PostcodeError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Response};
use std::time::Duration;
use url::Url;

/// 以 reqwest 呼叫 `<endpoint_base>/<agency_id>`
#[derive(Debug, Clone)]
pub struct HttpPostcodeRangeApi {
    client: Client,
    endpoint_base: Url,
}

impl HttpPostcodeRangeApi {
    pub fn new(endpoint_base: &str, client: Client) -> Result<Self> {
        let endpoint_base = Url::parse(endpoint_base)?;
        if endpoint_base.cannot_be_a_base() {
            return Err(PostcodeError::InvalidConfigValueError {
                field: "endpoint_base".to_string(),
                value: endpoint_base.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }
        Ok(Self {
            client,
            endpoint_base,
        })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .default_headers(build_headers(config.headers())?)
            .build()?;
        Self::new(config.endpoint_base(), client)
    }

    /// 機構的資源網址；機構代碼會編碼成單一路徑段
    pub fn agency_url(&self, agency_id: &str) -> Url {
        let mut url = self.endpoint_base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(agency_id);
        }
        url
    }

    async fn send(
        &self,
        method: Method,
        agency_id: &str,
        payload: Option<&PostcodeRangesPayload>,
    ) -> Result<Response> {
        let url = self.agency_url(agency_id);
        tracing::debug!("Making {} request to: {}", method, url);

        let mut request = self.client.request(method.clone(), url.clone());
        if let Some(payload) = payload {
            request = request.json(payload);
        }
        let response = request.send().await?;

        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(PostcodeError::HttpStatusError {
                method: method.to_string(),
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl PostcodeRangeApi for HttpPostcodeRangeApi {
    async fn get(&self, agency_id: &str) -> Result<AgencyPostcodeRangeResponse> {
        let response = self.send(Method::GET, agency_id, None).await?;
        let body = response.text().await?;

        // 空內容或 null 都當作沒有資料
        if body.trim().is_empty() {
            return Ok(AgencyPostcodeRangeResponse::default());
        }
        let parsed: Option<AgencyPostcodeRangeResponse> = serde_json::from_str(&body)?;
        Ok(parsed.unwrap_or_default())
    }

    async fn create(&self, agency_id: &str, payload: &PostcodeRangesPayload) -> Result<()> {
        self.send(Method::POST, agency_id, Some(payload)).await?;
        Ok(())
    }

    async fn delete(&self, agency_id: &str) -> Result<()> {
        self.send(Method::DELETE, agency_id, None).await?;
        Ok(())
    }
}

pub fn build_headers<I, K, V>(headers: I) -> Result<HeaderMap>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let (name, value) = (name.as_ref(), value.as_ref());
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            PostcodeError::InvalidConfigValueError {
                field: "headers".to_string(),
                value: name.to_string(),
                reason: format!("Invalid header name: {}", e),
            }
        })?;
        let header_value =
            HeaderValue::from_str(value).map_err(|e| PostcodeError::InvalidConfigValueError {
                field: format!("headers.{}", name),
                value: "<redacted>".to_string(),
                reason: format!("Invalid header value: {}", e),
            })?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

use crate::utils::error::{PostcodeError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid_config(field: &str, value: impl ToString, reason: String) -> PostcodeError {
    PostcodeError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason,
    }
}

/// 郵遞區號資源的位址必須是絕對的 http(s) URL
pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid_config(
            field_name,
            url_str,
            "the postcode range endpoint is not set".to_string(),
        ));
    }

    let url = Url::parse(url_str).map_err(|e| {
        invalid_config(
            field_name,
            url_str,
            format!("the postcode range endpoint is not an absolute URL ({})", e),
        )
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(invalid_config(
            field_name,
            url_str,
            format!(
                "the postcode range endpoint must be served over http or https, not {}",
                scheme
            ),
        )),
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| PostcodeError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid_config(
            field_name,
            value,
            "must name a header or file, not be blank".to_string(),
        ));
    }
    Ok(())
}

/// 逾時秒數等上下限設定
pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(invalid_config(
            field_name,
            value,
            format!("expected {} to {} seconds", min, max),
        ));
    }
    Ok(())
}

/// 機構代碼是請求路徑的一段，不是設定值
pub fn validate_agency_id(agency_id: &str) -> Result<()> {
    if agency_id.trim().is_empty() {
        return Err(PostcodeError::InvalidArgumentError {
            field: "agency_id".to_string(),
            value: agency_id.to_string(),
            reason: "agency id must not be blank".to_string(),
        });
    }
    Ok(())
}

//! Setting value validation.

use url::Url;

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        "LEGACY_COMMENTS_URL" | "TREE_COMMENTS_URL" => validate_http_url(value)?,
        "CONNECT_TIMEOUT_SECS" | "TRANSFER_TIMEOUT_SECS" | "REQUEST_TIMEOUT_SECS" => {
            validate_int_range(value, 1, 60)?
        }
        "MAX_SEARCH_RESULTS" => validate_int_range(value, 1, 1000)?,
        "ITEM_DB_PATH" => {
            if value.trim().is_empty() {
                return Err("path must not be blank".into());
            }
        }
        _ => {}
    }
    Ok(())
}

fn validate_int_range(value: &str, min: i64, max: i64) -> Result<(), String> {
    let v: i64 = value.trim().parse().map_err(|_| "must be an integer")?;
    if v < min || v > max {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}

fn validate_http_url(value: &str) -> Result<(), String> {
    let url = Url::parse(value).map_err(|e| format!("invalid URL: {e}"))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err("must be an http or https URL".into());
    }
    if url.host_str().is_none() {
        return Err("URL must have a host".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_setting;

    #[test]
    fn urls_must_be_absolute_http() {
        assert!(validate_setting("LEGACY_COMMENTS_URL", "https://auno.org/ao/db.php").is_ok());
        assert!(validate_setting("TREE_COMMENTS_URL", "http://127.0.0.1:8080/x").is_ok());
        assert!(validate_setting("TREE_COMMENTS_URL", "ftp://example.com/").is_err());
        assert!(validate_setting("TREE_COMMENTS_URL", "/relative").is_err());
    }

    #[test]
    fn timeouts_are_bounded() {
        assert!(validate_setting("CONNECT_TIMEOUT_SECS", "5").is_ok());
        assert!(validate_setting("REQUEST_TIMEOUT_SECS", "0").is_err());
        assert!(validate_setting("TRANSFER_TIMEOUT_SECS", "61").is_err());
        assert!(validate_setting("TRANSFER_TIMEOUT_SECS", "soon").is_err());
    }

    #[test]
    fn unknown_keys_pass() {
        assert!(validate_setting("SOMETHING_ELSE", "anything").is_ok());
    }
}

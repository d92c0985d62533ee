use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating Indonesian mobile numbers used in the contact field
    /// - Valid: "081234567890", "0812345678"
    /// - Invalid: "62812345678", "0812-3456", "phone"
    pub static ref CONTACT_REGEX: Regex = Regex::new(r"^08[0-9]{8,11}$").unwrap();

    /// Regex for validating image URLs submitted through the location form
    /// - Valid: "https://example.com/a.jpg", "http://cdn.desa.id/foto.png"
    /// - Invalid: "ftp://x", "example.com/a.jpg", ""
    pub static ref IMAGE_URL_REGEX: Regex = Regex::new(r"^https?://\S+$").unwrap();
}

/// Validate every entry of an image URL list
pub fn validate_image_urls(urls: &[String]) -> Result<(), validator::ValidationError> {
    for url in urls {
        if !IMAGE_URL_REGEX.is_match(url) {
            let mut err = validator::ValidationError::new("image_url");
            err.message = Some(format!("Invalid image URL: {}", url).into());
            return Err(err);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_regex_valid() {
        assert!(CONTACT_REGEX.is_match("081234567890"));
        assert!(CONTACT_REGEX.is_match("0812345678"));
    }

    #[test]
    fn test_contact_regex_invalid() {
        assert!(!CONTACT_REGEX.is_match("62812345678")); // country prefix
        assert!(!CONTACT_REGEX.is_match("0812-3456-7890")); // separators
        assert!(!CONTACT_REGEX.is_match("08")); // too short
        assert!(!CONTACT_REGEX.is_match("phone")); // not a number
    }

    #[test]
    fn test_image_url_regex() {
        assert!(IMAGE_URL_REGEX.is_match("https://example.com/a.jpg"));
        assert!(IMAGE_URL_REGEX.is_match("http://cdn.desa.id/foto.png"));
        assert!(!IMAGE_URL_REGEX.is_match("ftp://example.com/a.jpg"));
        assert!(!IMAGE_URL_REGEX.is_match("example.com/a.jpg"));
        assert!(!IMAGE_URL_REGEX.is_match("https:// spaced.com"));
    }

    #[test]
    fn test_validate_image_urls() {
        let ok = vec![
            "https://example.com/1.jpg".to_string(),
            "https://example.com/2.jpg".to_string(),
        ];
        assert!(validate_image_urls(&ok).is_ok());

        let bad = vec!["not-a-url".to_string()];
        assert!(validate_image_urls(&bad).is_err());

        assert!(validate_image_urls(&[]).is_ok());
    }
}

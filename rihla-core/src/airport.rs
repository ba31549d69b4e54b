use async_trait::async_trait;
use crate::CoreResult;

/// Looks up the IATA code of the best airport match for a free-text place name.
///
/// `Ok(None)` means absence: no match, or a lookup failure the implementation
/// chose to swallow. `Err` is reserved for faults the caller cannot treat as
/// "not found".
#[async_trait]
pub trait AirportResolver: Send + Sync {
    async fn resolve(&self, place: &str) -> CoreResult<Option<String>>;
}

/// Exactly three ASCII letters, any case.
pub fn is_iata_code(token: &str) -> bool {
    token.len() == 3 && token.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Uppercase a resolver answer, discarding anything that is not a 3-letter code.
pub fn canonical_code(code: &str) -> Option<String> {
    let code = code.trim();
    is_iata_code(code).then(|| code.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_iata_code() {
        assert!(is_iata_code("DXB"));
        assert!(is_iata_code("lon"));
        assert!(!is_iata_code("DX1"));
        assert!(!is_iata_code("Dubai"));
        // three Arabic letters are a place name, not a code
        assert!(!is_iata_code("دبي"));
    }

    #[test]
    fn test_canonical_code() {
        assert_eq!(canonical_code("lhr"), Some("LHR".to_string()));
        assert_eq!(canonical_code(" dxb "), Some("DXB".to_string()));
        assert_eq!(canonical_code("LHR1"), None);
        assert_eq!(canonical_code(""), None);
    }
}

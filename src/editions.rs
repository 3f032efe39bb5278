//! Editions listing document

use crate::error::Result;
use crate::types::{Edition, EditionId};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct EditionsListing {
    #[serde(default)]
    itens: Vec<ListedEdition>,
}

#[derive(Debug, Deserialize)]
struct ListedEdition {
    id: Value,
    #[serde(default)]
    numero: Value,
}

/// Decode the portal's editions listing for `date`
///
/// The listing is `{"itens": [{"id": .., "numero": ..}, ..]}`; both fields may
/// be numbers or strings and are kept as opaque text.
///
/// # Errors
/// Returns [`Error::Serialization`](crate::Error::Serialization) if the body is
/// not a listing.
pub fn parse_editions(raw: &[u8], date: NaiveDate) -> Result<Vec<Edition>> {
    let listing: EditionsListing = serde_json::from_slice(raw)?;
    Ok(listing
        .itens
        .into_iter()
        .map(|item| Edition {
            id: EditionId(opaque_token(item.id)),
            number: opaque_token(item.numero),
            date,
        })
        .collect())
}

fn opaque_token(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 14).unwrap()
    }

    #[test]
    fn numeric_and_string_fields_become_text() {
        let raw = br#"{"itens": [
            {"id": 7788, "numero": "25.900", "tipo": "normal"},
            {"id": "abc-1", "numero": 25901}
        ]}"#;

        let editions = parse_editions(raw, date()).unwrap();

        assert_eq!(editions.len(), 2);
        assert_eq!(editions[0].id.as_str(), "7788");
        assert_eq!(editions[0].number, "25.900");
        assert_eq!(editions[1].id.as_str(), "abc-1");
        assert_eq!(editions[1].number, "25901");
        assert!(editions.iter().all(|e| e.date == date()));
    }

    #[test]
    fn missing_itens_means_no_editions() {
        assert!(parse_editions(b"{}", date()).unwrap().is_empty());
        assert!(parse_editions(br#"{"itens": []}"#, date()).unwrap().is_empty());
    }

    #[test]
    fn missing_numero_is_empty() {
        let editions = parse_editions(br#"{"itens": [{"id": 1}]}"#, date()).unwrap();
        assert_eq!(editions[0].number, "");
    }

    #[test]
    fn item_without_id_is_rejected() {
        let result = parse_editions(br#"{"itens": [{"numero": 1}]}"#, date());
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[test]
    fn non_json_is_rejected() {
        let result = parse_editions(b"<html>maintenance</html>", date());
        assert!(matches!(result, Err(Error::Serialization(_))));
    }
}

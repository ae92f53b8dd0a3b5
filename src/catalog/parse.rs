//! Catalog payload decoding.

use crate::domain::error::{Result, VitrineError};
use crate::domain::App;
use std::collections::HashSet;

/// Decodes a catalog payload.
///
/// The payload must be a JSON array of app records. When an `app_id` appears
/// more than once, the first record wins and the rest are dropped with a
/// warning, so identifiers stay unique within the snapshot.
///
/// # Errors
///
/// Returns [`VitrineError::Parse`] if the payload is not a JSON array of apps.
///
/// # Examples
///
/// ```
/// use vitrine::catalog::parse_catalog;
///
/// let body = br##"[{"app_id":"slack","name":"Slack","color":"#4A154B","icon":"https://i","link":"https://l"}]"##;
/// let apps = parse_catalog(body)?;
/// assert_eq!(apps[0].name, "Slack");
///
/// assert!(parse_catalog(b"{\"apps\": []}").is_err());
/// # Ok::<(), vitrine::VitrineError>(())
/// ```
pub fn parse_catalog(bytes: &[u8]) -> Result<Vec<App>> {
    let apps: Vec<App> = serde_json::from_slice(bytes)
        .map_err(|e| VitrineError::Parse(format!("catalog is not a list of apps: {e}")))?;

    let total = apps.len();
    let mut seen = HashSet::with_capacity(total);
    let unique: Vec<App> = apps
        .into_iter()
        .filter(|app| {
            let first = seen.insert(app.app_id.clone());
            if !first {
                tracing::warn!(app_id = %app.app_id, "duplicate app id in catalog, keeping first");
            }
            first
        })
        .collect();

    tracing::debug!(total = total, unique = unique.len(), "catalog parsed");
    Ok(unique)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_records_in_order() {
        let body = br##"[
            {"app_id": "slack", "name": "Slack", "color": "#4A154B", "icon": "https://i/slack.svg", "link": "https://l/slack"},
            {"app_id": "trello", "name": "Trello", "color": "#0079BF", "icon": "https://i/trello.svg", "link": "https://l/trello"}
        ]"##;
        let apps = parse_catalog(body).unwrap();
        assert_eq!(apps.len(), 2);
        assert_eq!(apps[0].app_id, "slack");
        assert_eq!(apps[1].link, "https://l/trello");
    }

    #[test]
    fn empty_array_is_an_empty_catalog() {
        assert!(parse_catalog(b"[]").unwrap().is_empty());
    }

    #[test]
    fn extra_fields_are_ignored() {
        let body = br##"[{"app_id":"a","name":"A","color":"#fff","icon":"i","link":"l","category":"crm"}]"##;
        assert_eq!(parse_catalog(body).unwrap().len(), 1);
    }

    #[test]
    fn duplicate_ids_keep_first_record() {
        let body = br##"[
            {"app_id":"a","name":"First","color":"#fff","icon":"i","link":"l"},
            {"app_id":"b","name":"B","color":"#fff","icon":"i","link":"l"},
            {"app_id":"a","name":"Second","color":"#fff","icon":"i","link":"l"}
        ]"##;
        let apps = parse_catalog(body).unwrap();
        let names: Vec<&str> = apps.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["First", "B"]);
    }

    #[test]
    fn malformed_payloads_are_parse_errors() {
        for body in [
            &b"<html>503</html>"[..],
            b"{\"apps\": []}",
            b"[{\"app_id\": \"a\"}]",
            b"[",
            b"",
        ] {
            let err = parse_catalog(body).unwrap_err();
            assert!(matches!(err, VitrineError::Parse(_)), "{body:?} gave {err:?}");
        }
    }
}

//! Prover records and short-identifier resolution

use serde::Serialize;
use serde_json::Value;

/// A prover as listed by the service
///
/// Ids are compound, `<namespace>/<address>` (e.g. `pob/0xdead`,
/// `IPv6/0xbeef`). The full JSON object is kept in `raw`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProverRecord {
    pub id: String,
    /// Second `/` segment of `id`, if any
    pub address: Option<String>,
    pub raw: Value,
}

impl ProverRecord {
    /// Build a record from one entry of the provers list
    ///
    /// Entries without a string `id` are not provers and yield `None`.
    pub fn from_json(raw: Value) -> Option<Self> {
        let id = raw.get("id")?.as_str()?.to_string();
        let address = id.split('/').nth(1).map(str::to_string);
        Some(Self { id, address, raw })
    }

    /// Namespace segment of the id (`pob`, `IPv4`, `IPv6`, ...)
    pub fn namespace(&self) -> &str {
        self.id.split('/').next().unwrap_or_default()
    }

    /// Case-insensitive match of the address segment against `short_id`
    pub fn matches(&self, short_id: &str) -> bool {
        self.address
            .as_deref()
            .is_some_and(|address| address.eq_ignore_ascii_case(short_id))
    }
}

/// First record whose address segment equals `short_id`, ignoring case
///
/// Duplicate addresses are not detected; the first match wins.
pub fn resolve_prover<'a>(records: &'a [ProverRecord], short_id: &str) -> Option<&'a ProverRecord> {
    records.iter().find(|record| record.matches(short_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(id: &str) -> ProverRecord {
        ProverRecord::from_json(json!({ "id": id })).unwrap()
    }

    #[test]
    fn test_from_json_splits_id() {
        let r = ProverRecord::from_json(json!({ "id": "pob/0xABC123", "last_alive": "now" }))
            .unwrap();
        assert_eq!(r.id, "pob/0xABC123");
        assert_eq!(r.address.as_deref(), Some("0xABC123"));
        assert_eq!(r.namespace(), "pob");
        assert_eq!(r.raw["last_alive"], "now");
    }

    #[test]
    fn test_from_json_requires_string_id() {
        assert!(ProverRecord::from_json(json!({ "name": "x" })).is_none());
        assert!(ProverRecord::from_json(json!({ "id": 7 })).is_none());
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let records = vec![record("ns/0xABC123")];
        let found = resolve_prover(&records, "0xabc123").unwrap();
        assert_eq!(found.id, "ns/0xABC123");
    }

    #[test]
    fn test_resolve_not_found() {
        let records = vec![record("ns/0x1"), record("ns/0x2")];
        assert!(resolve_prover(&records, "0x3").is_none());
        assert!(resolve_prover(&[], "0x1").is_none());
    }

    #[test]
    fn test_resolve_ignores_ids_without_address() {
        let records = vec![record("0xabc")];
        assert!(resolve_prover(&records, "0xabc").is_none());
    }

    #[test]
    fn test_resolve_first_match_wins() {
        let records = vec![record("IPv4/0xDEAD"), record("IPv6/0xdead")];
        assert_eq!(resolve_prover(&records, "0xdead").unwrap().id, "IPv4/0xDEAD");
    }

    #[test]
    fn test_resolve_uses_second_segment_only() {
        let records = vec![record("0xdead/other")];
        assert!(resolve_prover(&records, "0xdead").is_none());
        let records = vec![record("a/0xdead/extra")];
        assert!(resolve_prover(&records, "0xdead").is_some());
    }
}

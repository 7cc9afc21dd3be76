//! Record assembler — resolves and normalizes one document into a `WhoisRecord`
//!
//! # Pipeline
//!
//! `JSON text → decode → Value tree → resolve aliases → normalize fields → WhoisRecord`
//!
//! Each canonical field has a fixed, ordered alias list (the key names
//! providers are known to use for it). The assembler resolves every field
//! independently through `finder::resolve` and hands the raw value to the
//! field's normalizer. Absence is a valid outcome for any field, never an
//! error; a record with every field absent is still a record.
//!
//! # Guarantees
//!
//! - **Deterministic**: same document always produces the same record
//! - **Total**: no input shape reaching a normalizer can fail a pass;
//!   unrecognizable shapes degrade to absent or to an opaque raw value
//! - **Independent fields**: resolution of one field never affects another

use sha2::{Digest, Sha256};

use crate::finder::resolve;
use crate::value::Value;
use crate::{Result, WhoisRecord};

// ── Alias tables ──────────────────────────────────────────
//
// Order is priority. Providers differ on which spelling they use, and when a
// document carries several, the earlier alias wins even if a later one sits
// shallower in the tree. Do not reorder.

const CREATED_DATE_ALIASES: &[&str] = &["creation_date", "creationDate", "created_date", "created"];
const UPDATED_DATE_ALIASES: &[&str] = &["updated_date", "updatedDate", "last_updated", "updated"];
const EXPIRES_DATE_ALIASES: &[&str] = &[
    "expiration_date",
    "expirationDate",
    "expires_date",
    "expires",
    "expiry_date",
];
const REGISTRAR_NAME_ALIASES: &[&str] = &["registrar", "registrar_name", "registrarName"];
const WHOIS_SERVER_ALIASES: &[&str] = &["whois_server", "whoisServer"];
const REGISTRAR_IANA_ID_ALIASES: &[&str] = &["registrar_iana_id", "registrarIANAID", "ianaid"];
const REGISTRANT_ALIASES: &[&str] = &["registrant", "registrant_name", "registrantName"];
const COUNTRY_ALIASES: &[&str] = &["registrant_country", "country"];
const COUNTRY_CODE_ALIASES: &[&str] = &["registrant_country_code", "country_code", "countryCode"];

// 'hostNames' is deliberately absent here: it is only consulted *inside* a
// value resolved through one of these aliases, never as a top-level key.
const NAMESERVER_ALIASES: &[&str] = &[
    "name_servers",
    "nameservers",
    "nserver",
    "nameServers",
    "nameserver_info",
];

// ── Public API ────────────────────────────────────────────

/// Run one resolution pass over a decoded document.
///
/// Date and simple-string fields are stored raw: whatever value the alias
/// resolved to, unparsed and unvalidated. Registrant and nameservers go
/// through shape normalization. Fields with no match anywhere stay absent.
pub fn normalize(doc: &Value) -> WhoisRecord {
    WhoisRecord {
        created_date: resolve(doc, CREATED_DATE_ALIASES).cloned(),
        updated_date: resolve(doc, UPDATED_DATE_ALIASES).cloned(),
        expires_date: resolve(doc, EXPIRES_DATE_ALIASES).cloned(),
        registrar_name: resolve(doc, REGISTRAR_NAME_ALIASES).cloned(),
        whois_server: resolve(doc, WHOIS_SERVER_ALIASES).cloned(),
        registrant: resolve(doc, REGISTRANT_ALIASES).and_then(normalize_registrant),
        country: resolve(doc, COUNTRY_ALIASES).cloned(),
        country_code: resolve(doc, COUNTRY_CODE_ALIASES).cloned(),
        registrar_iana_id: resolve(doc, REGISTRAR_IANA_ID_ALIASES).cloned(),
        nameservers: resolve(doc, NAMESERVER_ALIASES).and_then(normalize_nameservers),
    }
}

/// Decode a provider's JSON response and run one resolution pass.
///
/// # Errors
/// Returns `Error::Decode` when the text is not valid JSON. Decoding is the
/// only fallible step; normalization itself cannot fail.
pub fn normalize_json(text: &str) -> Result<WhoisRecord> {
    let doc: Value = serde_json::from_str(text)?;
    Ok(normalize(&doc))
}

// ── Registrant normalizer ─────────────────────────────────

/// A registrant shows up as a bare string or as a contact object. For the
/// object shape, `name` is preferred over `organization`; a candidate counts
/// only when it holds a non-empty string, anything else falls through.
fn normalize_registrant(value: &Value) -> Option<String> {
    match value {
        Value::Map(_) => ["name", "organization"].iter().find_map(|key| {
            match value.get(key) {
                Some(Value::Str(s)) if !s.is_empty() => Some(s.clone()),
                _ => None,
            }
        }),
        Value::Str(s) => Some(s.clone()),
        Value::List(_) | Value::Null => None,
    }
}

// ── Nameserver normalizer ─────────────────────────────────

/// Nameservers arrive as a delimited string, a list of hostnames, a list of
/// host objects, or an object wrapping a `hostNames` list. All shapes funnel
/// into one ordered candidate worklist, then each candidate is folded to a
/// lowercase trimmed hostname. Stable dedup, `", "` join; absent when the
/// worklist produces nothing.
fn normalize_nameservers(value: &Value) -> Option<String> {
    let mut hosts: Vec<String> = Vec::new();

    match value {
        Value::Str(raw) => {
            // Runs of comma, whitespace, or newline characters delimit tokens
            for token in raw.split(|c: char| c == ',' || c.is_whitespace()) {
                push_host(&mut hosts, token);
            }
        }
        Value::List(items) => {
            for item in items {
                push_candidate(&mut hosts, item);
            }
        }
        Value::Map(_) => {
            if let Some(Value::List(items)) = value.get("hostNames") {
                for item in items {
                    push_candidate(&mut hosts, item);
                }
            }
        }
        Value::Null => {}
    }

    // Stable dedup: first occurrence order, no sorting
    let mut seen = std::collections::BTreeSet::new();
    let unique: Vec<String> = hosts.into_iter().filter(|h| seen.insert(h.clone())).collect();

    if unique.is_empty() {
        None
    } else {
        Some(unique.join(", "))
    }
}

/// Fold one worklist item into a hostname, if it has one.
fn push_candidate(hosts: &mut Vec<String>, item: &Value) {
    if item.is_empty() {
        return;
    }
    match item {
        Value::Str(s) => push_host(hosts, s),
        Value::Map(_) => {
            let name = ["name", "hostname"].iter().find_map(|key| {
                match item.get(key) {
                    Some(Value::Str(s)) if !s.is_empty() => Some(s.as_str()),
                    _ => None,
                }
            });
            if let Some(name) = name {
                push_host(hosts, name);
            }
        }
        Value::List(_) | Value::Null => {}
    }
}

fn push_host(hosts: &mut Vec<String>, raw: &str) {
    let host = raw.trim().to_lowercase();
    if !host.is_empty() {
        hosts.push(host);
    }
}

// ── Canonical serializer & fingerprint ────────────────────

/// Deterministic text rendering of a record: fixed field order, one
/// `name: value` line per field, `~` for absent fields. Byte-identical for
/// equal records; the fingerprint hashes exactly this text.
pub fn canonical_text(record: &WhoisRecord) -> String {
    let mut out = String::new();
    for (name, value) in record.fields() {
        out.push_str(name);
        out.push_str(": ");
        match value {
            Some(rendered) => out.push_str(&rendered),
            None => out.push('~'),
        }
        out.push('\n');
    }
    out
}

/// SHA-256 hex digest of the canonical text. Suitable for caching and
/// dedup of lookup results: same record, same fingerprint, always.
pub fn fingerprint(record: &WhoisRecord) -> String {
    let mut hasher = Sha256::new();
    hasher.update(canonical_text(record).as_bytes());
    format!("{:x}", hasher.finalize())
}

//! WHOIS Record Normalizer — canonical resolution engine
//!
//! Registry and registrar data providers return domain-registration lookups
//! as loosely-structured JSON: the same logical field appears under differing
//! key names, at differing depths, as a string, a list, or a nested object.
//! This crate extracts one canonical, fixed-shape record from any of them.
//!
//! # Architecture
//!
//! ```text
//! JSON text → Decode → Value tree → Finder → Alias Resolver
//!                                                 ↓
//!                                         Field Normalizers → WhoisRecord
//!                                                                  ↓
//!                                                  Canonical Text → SHA-256
//! ```
//!
//! # Guarantees
//!
//! - **Deterministic**: same document always produces the identical record
//! - **Total**: absence is a valid outcome for every field, never an error;
//!   the only fallible operation is decoding the input text
//! - **Read-only**: one resolution pass never mutates its input tree

pub mod error;
pub mod finder;
pub mod normalizer;
pub mod value;

pub use error::{Error, Result};
pub use normalizer::{canonical_text, fingerprint, normalize, normalize_json};
pub use value::Value;

/// The canonical record: ten optional fields, absent when no provider key
/// matched anywhere in the document.
///
/// Date and simple-string fields keep the raw resolved value unparsed (a
/// provider sending a nested object where a date belongs is stored opaque,
/// not rejected). `registrant` and `nameservers` are shape-normalized into
/// single strings. Wire names follow the providers' camelCase convention.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhoisRecord {
    pub created_date: Option<Value>,
    pub updated_date: Option<Value>,
    pub expires_date: Option<Value>,
    pub registrar_name: Option<Value>,
    pub whois_server: Option<Value>,
    /// Explicit name/organization when the source was a contact object,
    /// else the raw string
    pub registrant: Option<String>,
    pub country: Option<Value>,
    pub country_code: Option<Value>,
    #[serde(rename = "registrarIANAID")]
    pub registrar_iana_id: Option<Value>,
    /// Lowercase, duplicate-free, `", "`-joined hostnames
    pub nameservers: Option<String>,
}

impl WhoisRecord {
    /// Field names and rendered values in canonical order. Drives the
    /// canonical serializer and display layers.
    pub fn fields(&self) -> [(&'static str, Option<String>); 10] {
        fn raw(value: &Option<Value>) -> Option<String> {
            value.as_ref().map(|v| v.to_string())
        }
        [
            ("createdDate", raw(&self.created_date)),
            ("updatedDate", raw(&self.updated_date)),
            ("expiresDate", raw(&self.expires_date)),
            ("registrarName", raw(&self.registrar_name)),
            ("whoisServer", raw(&self.whois_server)),
            ("registrant", self.registrant.clone()),
            ("country", raw(&self.country)),
            ("countryCode", raw(&self.country_code)),
            ("registrarIANAID", raw(&self.registrar_iana_id)),
            ("nameservers", self.nameservers.clone()),
        ]
    }

    /// True when no field matched anywhere in the document.
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, value)| value.is_none())
    }

    /// SHA-256 hex digest of the record's canonical text.
    pub fn fingerprint(&self) -> String {
        normalizer::fingerprint(self)
    }
}

//! # Domain Model
//!
//! The entities behind the site's admin console. Every persisted record
//! carries a stable [`Uuid`] id generated at creation time; human-entered
//! titles and names are display fields only and never participate in
//! identity. Field names serialize in camelCase to match the JSON files the
//! site reads.
//!
//! ## Lifecycle
//!
//! Soft-deletable records (services, hero images, clients, emails) carry a
//! [`RecordStatus`]: `active ⇄ trash → removed`. Trashing flips the status
//! and nothing else; purging removes the record from its collection.
//! Testimonials are hard-delete only.
//!
//! Ledger entries use [`EntryStatus`] instead — `inactive` means "excluded
//! from the current balance" (a closed-out period), not deleted.
//!
//! Legacy data may predate the status fields, so they default to the active
//! state on read.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::VisadeskError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Active,
    Trash,
}

impl Default for RecordStatus {
    fn default() -> Self {
        Self::Active
    }
}

/// Whether a ledger entry counts toward the current balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    Active,
    Inactive,
}

impl Default for EntryStatus {
    fn default() -> Self {
        Self::Active
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Credit,
    Debit,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Credit => write!(f, "credit"),
            EntryKind::Debit => write!(f, "debit"),
        }
    }
}

impl FromStr for EntryKind {
    type Err = VisadeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "credit" => Ok(EntryKind::Credit),
            "debit" => Ok(EntryKind::Debit),
            other => Err(VisadeskError::Api(format!(
                "Unknown entry kind '{}' (expected credit or debit)",
                other
            ))),
        }
    }
}

/// Closed set of icons a service card may use. Stored by identifier and
/// validated when written, never resolved from free text at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceIcon {
    Passport,
    Plane,
    GraduationCap,
    Briefcase,
    Building,
    Users,
    Globe,
    FileText,
}

impl ServiceIcon {
    pub const ALL: [ServiceIcon; 8] = [
        ServiceIcon::Passport,
        ServiceIcon::Plane,
        ServiceIcon::GraduationCap,
        ServiceIcon::Briefcase,
        ServiceIcon::Building,
        ServiceIcon::Users,
        ServiceIcon::Globe,
        ServiceIcon::FileText,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceIcon::Passport => "passport",
            ServiceIcon::Plane => "plane",
            ServiceIcon::GraduationCap => "graduation-cap",
            ServiceIcon::Briefcase => "briefcase",
            ServiceIcon::Building => "building",
            ServiceIcon::Users => "users",
            ServiceIcon::Globe => "globe",
            ServiceIcon::FileText => "file-text",
        }
    }
}

impl fmt::Display for ServiceIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceIcon {
    type Err = VisadeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.to_ascii_lowercase();
        ServiceIcon::ALL
            .iter()
            .find(|icon| icon.as_str() == needle)
            .copied()
            .ok_or_else(|| VisadeskError::Api(format!("Unknown icon '{}'", s)))
    }
}

/// Access to a record's id, used by the store's lookup helpers.
pub trait HasId {
    fn id(&self) -> Uuid;
}

/// Uniform soft-delete surface. Implementors participate in the generic
/// trash/restore/purge engine in [`crate::lifecycle`].
pub trait Lifecycle: HasId {
    fn status(&self) -> RecordStatus;
    fn set_status(&mut self, status: RecordStatus);
    /// Human label used in messages and log entries.
    fn label(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub requirements: Vec<String>,
    pub image: String,
    pub icon: ServiceIcon,
    #[serde(default)]
    pub status: RecordStatus,
}

impl Service {
    pub fn new(
        title: String,
        description: String,
        long_description: String,
        requirements: Vec<String>,
        image: String,
        icon: ServiceIcon,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            long_description,
            requirements,
            image,
            icon,
            status: RecordStatus::Active,
        }
    }
}

impl HasId for Service {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Lifecycle for Service {
    fn status(&self) -> RecordStatus {
        self.status
    }

    fn set_status(&mut self, status: RecordStatus) {
        self.status = status;
    }

    fn label(&self) -> &str {
        &self.title
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: Uuid,
    pub name: String,
    pub destination: String,
    #[serde(rename = "testimonial")]
    pub quote: String,
    pub image: String,
    pub role: String,
    pub country: String,
}

impl Testimonial {
    pub fn new(
        name: String,
        destination: String,
        quote: String,
        image: String,
        role: String,
        country: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            destination,
            quote,
            image,
            role,
            country,
        }
    }
}

impl HasId for Testimonial {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroImage {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub status: RecordStatus,
}

impl HeroImage {
    pub fn new(title: String, description: String, image: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            image,
            status: RecordStatus::Active,
        }
    }
}

impl HasId for HeroImage {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Lifecycle for HeroImage {
    fn status(&self) -> RecordStatus {
        self.status
    }

    fn set_status(&mut self, status: RecordStatus) {
        self.status = status;
    }

    fn label(&self) -> &str {
        &self.title
    }
}

/// Singleton content for the about section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub paragraph1: String,
    #[serde(default)]
    pub paragraph2: String,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub status: RecordStatus,
}

impl Client {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            created_at: Utc::now(),
            status: RecordStatus::Active,
        }
    }
}

impl HasId for Client {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Lifecycle for Client {
    fn status(&self) -> RecordStatus {
        self.status
    }

    fn set_status(&mut self, status: RecordStatus) {
        self.status = status;
    }

    fn label(&self) -> &str {
        &self.name
    }
}

/// One credit or debit transaction attributed to a client.
///
/// `client_id` is canonical; `client_name` is a display cache kept in sync
/// when a client is renamed. Amounts are in minor currency units (cents).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub id: Uuid,
    pub client_id: Uuid,
    pub client_name: String,
    pub date: NaiveDate,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub amount: i64,
    #[serde(default)]
    pub status: EntryStatus,
}

impl LedgerEntry {
    pub fn new(
        client_id: Uuid,
        client_name: String,
        date: NaiveDate,
        description: String,
        kind: EntryKind,
        amount: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            client_id,
            client_name,
            date,
            description,
            kind,
            amount,
            status: EntryStatus::Active,
        }
    }
}

impl HasId for LedgerEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// A client's starting figure, stored apart from transaction history.
/// One row per client, upserted in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningBalance {
    pub client_id: Uuid,
    pub client_name: String,
    pub amount: i64,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub received_at: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub favorited: bool,
    #[serde(default)]
    pub status: RecordStatus,
}

impl EmailMessage {
    pub fn new(name: String, email: String, subject: String, message: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            subject,
            message,
            received_at: Utc::now(),
            read: false,
            favorited: false,
            status: RecordStatus::Active,
        }
    }
}

impl HasId for EmailMessage {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Lifecycle for EmailMessage {
    fn status(&self) -> RecordStatus {
        self.status
    }

    fn set_status(&mut self, status: RecordStatus) {
        self.status = status;
    }

    fn label(&self) -> &str {
        &self.subject
    }
}

/// Singleton admin identity and branding. The password is compared in
/// plaintext against login input; hardening is out of scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    #[serde(default)]
    pub logo: String,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub avatar: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            logo: String::new(),
            username: "admin".to_string(),
            password: "admin".to_string(),
            avatar: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub action: String,
    pub details: String,
}

impl LogEntry {
    pub fn new(action: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            action: action.into(),
            details: details.into(),
        }
    }
}

impl HasId for LogEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_parses_kebab_case_identifiers() {
        assert_eq!(
            "graduation-cap".parse::<ServiceIcon>().unwrap(),
            ServiceIcon::GraduationCap
        );
        assert_eq!("Passport".parse::<ServiceIcon>().unwrap(), ServiceIcon::Passport);
        assert!("sparkles".parse::<ServiceIcon>().is_err());
    }

    #[test]
    fn icon_serializes_as_identifier() {
        let json = serde_json::to_string(&ServiceIcon::FileText).unwrap();
        assert_eq!(json, "\"file-text\"");
    }

    #[test]
    fn entry_kind_parses_case_insensitively() {
        assert_eq!("Credit".parse::<EntryKind>().unwrap(), EntryKind::Credit);
        assert_eq!("debit".parse::<EntryKind>().unwrap(), EntryKind::Debit);
        assert!("transfer".parse::<EntryKind>().is_err());
    }

    #[test]
    fn legacy_records_default_to_active() {
        let json = r#"{
            "id": "c5a1d2f0-0000-4000-8000-000000000001",
            "title": "Old Hero",
            "description": "",
            "image": ""
        }"#;
        let hero: HeroImage = serde_json::from_str(json).unwrap();
        assert_eq!(hero.status, RecordStatus::Active);
    }

    #[test]
    fn ledger_entry_serializes_kind_as_type() {
        let entry = LedgerEntry::new(
            Uuid::new_v4(),
            "Aye Chan".to_string(),
            NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            "Visa fee".to_string(),
            EntryKind::Credit,
            150_00,
        );
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["type"], "credit");
        assert_eq!(value["clientName"], "Aye Chan");
        assert_eq!(value["status"], "active");
    }
}

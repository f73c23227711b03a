//! Frontend Models
//!
//! Data structures matching the remote `barang` table and the auth
//! provider's payloads. Wire names are the Indonesian column names.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::stock::DEFAULT_PCS_PER_BOX;

/// Unit of measure (satuan) for an item's stock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Unit,
    Pcs,
    Box,
}

impl Unit {
    pub const ALL: &'static [Unit] = &[Unit::Unit, Unit::Pcs, Unit::Box];

    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Unit => "unit",
            Unit::Pcs => "pcs",
            Unit::Box => "box",
        }
    }

    pub fn is_box(self) -> bool {
        matches!(self, Unit::Box)
    }
}

/// Inventory item (barang) as stored in the remote table.
///
/// `total_stock` is always a piece count, whatever the unit; the box/pcs
/// view is derived on demand and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    #[serde(rename = "nama")]
    pub name: String,
    #[serde(rename = "satuan")]
    pub unit: Unit,
    #[serde(rename = "stok")]
    pub total_stock: u32,
    #[serde(rename = "pcsperbox", deserialize_with = "de_pcs_per_box", default = "default_pcs_per_box")]
    pub pcs_per_box: u32,
    #[serde(rename = "user_id")]
    pub owner_id: Uuid,
}

impl Item {
    /// Quantity shown in the list and detail views: whole boxes for `box`
    /// items, the raw total otherwise.
    pub fn display_stock(&self) -> u32 {
        crate::stock::display_quantity(self.unit, self.total_stock, self.pcs_per_box)
    }

    /// Case-insensitive name-substring match used by the search filter.
    pub fn matches_search(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Payload sent to the store on insert/update. The id is assigned server
/// side and never part of the body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemDraft {
    #[serde(rename = "nama")]
    pub name: String,
    #[serde(rename = "satuan")]
    pub unit: Unit,
    #[serde(rename = "stok")]
    pub total_stock: u32,
    #[serde(rename = "pcsperbox")]
    pub pcs_per_box: u32,
    #[serde(rename = "user_id")]
    pub owner_id: Uuid,
}

fn default_pcs_per_box() -> u32 {
    DEFAULT_PCS_PER_BOX
}

/// Rows written before the box unit existed carry a null/zero pcsperbox;
/// they read back as the default.
fn de_pcs_per_box<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<u32>::deserialize(deserializer)?;
    Ok(match value {
        Some(0) | None => DEFAULT_PCS_PER_BOX,
        Some(v) => v,
    })
}

/// Authenticated user as reported by the auth service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: Option<String>,
}

/// Access/refresh token pair plus the user it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    /// Unix seconds; derived from `expires_in` when the provider omits it.
    pub expires_at: u64,
    pub user: User,
}

impl Session {
    /// Seconds until the access token expires; 0 when already past.
    pub fn expires_in_secs(&self, now_secs: u64) -> u64 {
        self.expires_at.saturating_sub(now_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uid(n: u128) -> Uuid {
        Uuid::from_u128(n)
    }

    fn make_item(name: &str) -> Item {
        Item {
            id: uid(1),
            name: name.to_string(),
            unit: Unit::Unit,
            total_stock: 5,
            pcs_per_box: 10,
            owner_id: uid(2),
        }
    }

    #[test]
    fn unit_serializes_to_lowercase_wire_values() {
        assert_eq!(serde_json::to_string(&Unit::Unit).unwrap(), "\"unit\"");
        assert_eq!(serde_json::to_string(&Unit::Pcs).unwrap(), "\"pcs\"");
        assert_eq!(serde_json::to_string(&Unit::Box).unwrap(), "\"box\"");
        assert_eq!(serde_json::from_str::<Unit>("\"box\"").unwrap(), Unit::Box);
    }

    #[test]
    fn item_reads_indonesian_column_names() {
        let json = format!(
            r#"{{"id":"{}","nama":"Kardus","satuan":"box","stok":34,"pcsperbox":10,"user_id":"{}"}}"#,
            uid(1),
            uid(2)
        );
        let item: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(item.name, "Kardus");
        assert_eq!(item.unit, Unit::Box);
        assert_eq!(item.total_stock, 34);
        assert_eq!(item.pcs_per_box, 10);
        assert_eq!(item.display_stock(), 3);
    }

    #[test]
    fn null_or_missing_pcsperbox_reads_as_default() {
        let json = format!(
            r#"{{"id":"{}","nama":"Lama","satuan":"box","stok":25,"pcsperbox":null,"user_id":"{}"}}"#,
            uid(1),
            uid(2)
        );
        let item: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(item.pcs_per_box, 10);

        let json = format!(
            r#"{{"id":"{}","nama":"Lama","satuan":"box","stok":25,"user_id":"{}"}}"#,
            uid(1),
            uid(2)
        );
        let item: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(item.pcs_per_box, 10);
        assert_eq!(item.display_stock(), 2);
    }

    #[test]
    fn draft_writes_indonesian_column_names() {
        let draft = ItemDraft {
            name: "Sabun".to_string(),
            unit: Unit::Pcs,
            total_stock: 7,
            pcs_per_box: 10,
            owner_id: uid(9),
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["nama"], "Sabun");
        assert_eq!(value["satuan"], "pcs");
        assert_eq!(value["stok"], 7);
        assert_eq!(value["pcsperbox"], 10);
        assert_eq!(value["user_id"], uid(9).to_string());
        assert!(value.get("id").is_none());
    }

    #[test]
    fn search_matches_name_substring_case_insensitive() {
        let item = make_item("Botol Besar");
        assert!(item.matches_search("bo"));
        assert!(item.matches_search("BESAR"));
        assert!(item.matches_search(""));
        assert!(!item.matches_search("kecil"));
    }

    #[test]
    fn expired_session_reports_zero_remaining() {
        let session = Session {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
            expires_at: 1_000,
            user: User { id: uid(3), email: None },
        };
        assert_eq!(session.expires_in_secs(2_000), 0);
        assert_eq!(session.expires_in_secs(400), 600);
    }
}

//! Barang Commands
//!
//! CRUD against the `barang` table, always scoped to the signed-in owner.
//! Mutations return nothing; callers refetch the list afterwards to
//! resynchronize with the store.

use uuid::Uuid;

use crate::models::{Item, ItemDraft, Session};
use crate::supabase;

const TABLE: &str = "barang";

pub async fn list_items(session: &Session) -> Result<Vec<Item>, String> {
    let owner = format!("eq.{}", session.user.id);
    supabase::get_json(
        &supabase::table(TABLE),
        &[("select", "*"), ("user_id", &owner), ("order", "nama.asc")],
        Some(&session.access_token),
    )
    .await
    .map_err(|e| e.to_string())
}

pub async fn create_item(session: &Session, draft: &ItemDraft) -> Result<(), String> {
    supabase::post_no_content(
        &supabase::table(TABLE),
        &[],
        Some(&session.access_token),
        draft,
    )
    .await
    .map_err(|e| e.to_string())
}

pub async fn update_item(session: &Session, id: Uuid, draft: &ItemDraft) -> Result<(), String> {
    let id_filter = format!("eq.{}", id);
    supabase::patch_no_content(
        &supabase::table(TABLE),
        &[("id", &id_filter)],
        Some(&session.access_token),
        draft,
    )
    .await
    .map_err(|e| e.to_string())
}

pub async fn delete_item(session: &Session, id: Uuid) -> Result<(), String> {
    let id_filter = format!("eq.{}", id);
    supabase::delete_no_content(
        &supabase::table(TABLE),
        &[("id", &id_filter)],
        Some(&session.access_token),
    )
    .await
    .map_err(|e| e.to_string())
}

//! Item Table Component
//!
//! Filtered list of barang with view/edit/delete row actions, a loading
//! indicator, and an empty state.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::AppContext;
use crate::dialog;
use crate::models::Item;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ItemTable(
    search: ReadSignal<String>,
    set_editing_item: WriteSignal<Option<Item>>,
    set_show_form: WriteSignal<bool>,
    set_viewing_item: WriteSignal<Option<Item>>,
) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let filtered = move || {
        let query = search.get();
        store
            .items()
            .get()
            .into_iter()
            .filter(|item| item.matches_search(&query))
            .collect::<Vec<_>>()
    };

    // Declining the confirmation leaves the list untouched; the refetch
    // after a failed delete resynchronizes the view with the store.
    let on_delete = move |item: Item| {
        if !dialog::confirm("Apakah Anda yakin ingin menghapus item ini?") {
            return;
        }
        let Some(session) = store.session().get_untracked() else {
            return;
        };
        spawn_local(async move {
            if let Err(e) = commands::delete_item(&session, item.id).await {
                web_sys::console::error_1(&format!("[ITEMS] Delete failed: {}", e).into());
            }
            ctx.reload();
        });
    };

    view! {
        <Show when=move || store.loading().get()>
            <div class="loading-box">"⏳ Loading..."</div>
        </Show>

        <Show when=move || !store.loading().get()>
            {move || {
                if filtered().is_empty() {
                    view! {
                        <div class="empty-state">
                            <div class="empty-icon">"📭"</div>
                            <div class="empty-title">"Tidak ada barang ditemukan"</div>
                            <div class="empty-subtitle">
                                "Klik tombol \"Tambah\" untuk menambahkan barang baru"
                            </div>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="table-container">
                            <table class="item-table">
                                <thead>
                                    <tr>
                                        <th>"Nama Barang"</th>
                                        <th>"Jenis Satuan"</th>
                                        <th>"Stok"</th>
                                        <th>"Aksi"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=filtered
                                        key=|item| item.id
                                        children=move |item| {
                                            let view_item = item.clone();
                                            let edit_item = item.clone();
                                            let delete_item = item.clone();
                                            view! {
                                                <tr>
                                                    <td>{item.name.clone()}</td>
                                                    <td>
                                                        <span class="badge">{item.unit.as_str()}</span>
                                                    </td>
                                                    <td class="stock-cell">{item.display_stock()}</td>
                                                    <td>
                                                        <div class="action-buttons">
                                                            <button
                                                                class="view-btn"
                                                                on:click=move |_| set_viewing_item.set(Some(view_item.clone()))
                                                            >
                                                                "👁"
                                                            </button>
                                                            <button
                                                                class="edit-btn"
                                                                on:click=move |_| {
                                                                    set_editing_item.set(Some(edit_item.clone()));
                                                                    set_show_form.set(true);
                                                                }
                                                            >
                                                                "✏️"
                                                            </button>
                                                            <button
                                                                class="delete-btn"
                                                                on:click=move |_| on_delete(delete_item.clone())
                                                            >
                                                                "🗑"
                                                            </button>
                                                        </div>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    }
                        .into_any()
                }
            }}
        </Show>
    }
}

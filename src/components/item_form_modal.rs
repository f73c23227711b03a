//! Item Form Modal
//!
//! Add/edit modal over an `ItemForm`. For box items the box-count and
//! pcs-per-box fields recompose the total on every keystroke; all numeric
//! input is clamped, never rejected.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::UnitSelector;
use crate::context::AppContext;
use crate::dialog;
use crate::models::Item;
use crate::stock::{self, ItemForm};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ItemFormModal(
    show: ReadSignal<bool>,
    set_show: WriteSignal<bool>,
    editing_item: ReadSignal<Option<Item>>,
) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let form = RwSignal::new(ItemForm::default());

    // Seed the form each time the modal opens: from the stored item when
    // editing, from defaults when adding.
    Effect::new(move |_| {
        if !show.get() {
            return;
        }
        match editing_item.get() {
            Some(item) => form.set(ItemForm::from_item(&item)),
            None => form.set(ItemForm::default()),
        }
    });

    let on_submit = move |_| {
        let current = form.get_untracked();
        if let Err(msg) = current.validate() {
            dialog::alert(msg);
            return;
        }
        let Some(session) = store.session().get_untracked() else {
            return;
        };
        let editing = editing_item.get_untracked();
        spawn_local(async move {
            let draft = current.to_draft(session.user.id);
            let result = match &editing {
                Some(item) => commands::update_item(&session, item.id, &draft).await,
                None => commands::create_item(&session, &draft).await,
            };
            match (result, editing.is_some()) {
                (Ok(()), true) => dialog::alert("Barang berhasil diupdate!"),
                (Ok(()), false) => dialog::alert("Barang berhasil ditambahkan!"),
                (Err(e), true) => dialog::alert(&format!("Gagal update: {}", e)),
                (Err(e), false) => dialog::alert(&format!("Gagal tambah: {}", e)),
            }
            // Close and refetch either way; the list is the source of truth.
            set_show.set(false);
            ctx.reload();
        });
    };

    view! {
        <Show when=move || show.get()>
            <div class="modal-overlay">
                <div class="modal-content">
                    <h2>
                        {move || if editing_item.get().is_some() { "✏️ Edit Barang" } else { "➕ Barang Baru" }}
                    </h2>

                    <div class="form-group">
                        <label>"Nama Barang"</label>
                        <input
                            type="text"
                            placeholder="Masukkan nama barang"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label>"Jenis Satuan"</label>
                        <UnitSelector
                            current_unit=Signal::derive(move || form.with(|f| f.unit))
                            on_change=move |unit| form.update(|f| f.set_unit(unit))
                        />
                    </div>

                    // Direct stock entry for unit/pcs
                    <Show when=move || form.with(|f| !f.unit.is_box())>
                        <div class="form-group">
                            <label>"Stok"</label>
                            <input
                                type="number"
                                placeholder="0"
                                min="0"
                                prop:value=move || form.with(|f| f.total_stock.to_string())
                                on:input=move |ev| {
                                    let value = stock::parse_stock(&event_target_value(&ev));
                                    form.update(|f| f.set_total_stock(value));
                                }
                            />
                        </div>
                    </Show>

                    // Box entry: box count and pcs-per-box, with a live total
                    <Show when=move || form.with(|f| f.unit.is_box())>
                        <div class="form-grid">
                            <div class="form-group">
                                <label>"Jumlah Box"</label>
                                <input
                                    type="number"
                                    placeholder="0"
                                    min="0"
                                    prop:value=move || form.with(|f| f.box_count.to_string())
                                    on:input=move |ev| {
                                        let value = stock::parse_stock(&event_target_value(&ev));
                                        form.update(|f| f.set_box_count(value));
                                    }
                                />
                            </div>

                            <div class="form-group">
                                <label>"PCS per Box"</label>
                                <input
                                    type="number"
                                    placeholder="10"
                                    min="1"
                                    prop:value=move || form.with(|f| f.pcs_per_box.to_string())
                                    on:input=move |ev| {
                                        let value = stock::parse_pcs_per_box(&event_target_value(&ev));
                                        form.update(|f| f.set_pcs_per_box(value));
                                    }
                                />
                            </div>
                        </div>

                        <div class="total-box">
                            <label>"TOTAL STOK"</label>
                            <div class="total-value">{move || form.with(|f| f.total_stock)}</div>
                            <div class="total-desc">
                                {move || form.with(|f| {
                                    if f.loose_count > 0 {
                                        format!("({} × {} pcs + {} pcs)", f.box_count, f.pcs_per_box, f.loose_count)
                                    } else {
                                        format!("({} × {} pcs)", f.box_count, f.pcs_per_box)
                                    }
                                })}
                            </div>
                        </div>
                    </Show>

                    <div class="modal-footer">
                        <button class="cancel-btn" on:click=move |_| set_show.set(false)>
                            "Batal"
                        </button>
                        <button class="submit-btn" on:click=on_submit>
                            {move || if editing_item.get().is_some() { "Update" } else { "Tambah" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

//! Item Detail Modal
//!
//! Read-only view of a single barang. Box items show both the whole-box
//! count and the total piece count.

use leptos::prelude::*;

use crate::models::Item;

#[component]
pub fn ItemDetailModal(
    viewing_item: ReadSignal<Option<Item>>,
    set_viewing_item: WriteSignal<Option<Item>>,
) -> impl IntoView {
    view! {
        {move || viewing_item.get().map(|item| {
            let display_stock = item.display_stock();
            let is_box = item.unit.is_box();
            view! {
                <div class="modal-overlay">
                    <div class="modal-content">
                        <h2>"📋 Detail Barang"</h2>

                        <div class="detail-group">
                            <label>"NAMA BARANG"</label>
                            <div class="detail-value">{item.name.clone()}</div>
                        </div>

                        <div class="detail-group">
                            <label>"JENIS SATUAN"</label>
                            <div>
                                <span class="badge">{item.unit.as_str()}</span>
                            </div>
                        </div>

                        {if is_box {
                            view! {
                                <div class="detail-group">
                                    <label>"STOK DALAM BOX"</label>
                                    <div class="detail-number">{display_stock}</div>
                                </div>

                                <div class="detail-group">
                                    <label>"STOK TOTAL (DALAM PCS)"</label>
                                    <div class="detail-number">{item.total_stock}</div>
                                </div>
                            }
                                .into_any()
                        } else {
                            view! {
                                <div class="detail-group">
                                    <label>"STOK"</label>
                                    <div class="detail-number">{item.total_stock}</div>
                                </div>
                            }
                                .into_any()
                        }}

                        <div class="modal-footer">
                            <button class="cancel-btn" on:click=move |_| set_viewing_item.set(None)>
                                "Tutup"
                            </button>
                        </div>
                    </div>
                </div>
            }
        })}
    }
}

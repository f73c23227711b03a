//! UI Components
//!
//! Reusable Leptos components.

mod header_bar;
mod item_detail_modal;
mod item_form_modal;
mod item_table;
mod login_form;
mod search_bar;
mod unit_selector;

pub use header_bar::HeaderBar;
pub use item_detail_modal::ItemDetailModal;
pub use item_form_modal::ItemFormModal;
pub use item_table::ItemTable;
pub use login_form::LoginForm;
pub use search_bar::SearchBar;
pub use unit_selector::UnitSelector;

//! Stock Quantity Model
//!
//! The stored stock is a single piece count. For items measured in boxes the
//! form edits a (box count, pcs per box, loose pieces) decomposition instead,
//! and this module keeps the two representations consistent: decompose on
//! edit-load, recompose on every field edit, clamp all numeric input instead
//! of rejecting it.

use uuid::Uuid;

use crate::models::{Item, ItemDraft, Unit};

/// Conversion factor used when an item has none stored.
pub const DEFAULT_PCS_PER_BOX: u32 = 10;

/// Split a piece count into (whole boxes, loose pieces).
///
/// A divisor below 1 falls back to the default instead of dividing by zero.
pub fn decompose(total_stock: u32, pcs_per_box: u32) -> (u32, u32) {
    let per_box = if pcs_per_box < 1 { DEFAULT_PCS_PER_BOX } else { pcs_per_box };
    (total_stock / per_box, total_stock % per_box)
}

/// Recombine the decomposition into a piece count, clamping the divisor to 1
/// and saturating instead of overflowing.
pub fn recompose(box_count: u32, pcs_per_box: u32, loose_count: u32) -> u32 {
    box_count
        .saturating_mul(pcs_per_box.max(1))
        .saturating_add(loose_count)
}

/// Quantity shown to the user: whole boxes for `box` items, the raw piece
/// count otherwise. List and detail views both go through here.
pub fn display_quantity(unit: Unit, total_stock: u32, pcs_per_box: u32) -> u32 {
    if unit.is_box() {
        decompose(total_stock, pcs_per_box).0
    } else {
        total_stock
    }
}

/// Normalize a stock field entry. Non-numeric or negative input yields 0.
pub fn parse_stock(raw: &str) -> u32 {
    raw.trim()
        .parse::<i64>()
        .map_or(0, |v| v.clamp(0, u32::MAX as i64) as u32)
}

/// Normalize a pcs-per-box entry. Non-numeric input falls back to the
/// default; anything below 1 clamps to 1.
pub fn parse_pcs_per_box(raw: &str) -> u32 {
    raw.trim()
        .parse::<i64>()
        .map_or(DEFAULT_PCS_PER_BOX, |v| v.clamp(1, u32::MAX as i64) as u32)
}

/// Editing state for the add/edit modal.
///
/// For `box` items the three quantity fields stay mutually consistent:
/// every edit to one of them recomposes `total_stock` holding the others
/// fixed. Shrinking `pcs_per_box` below the current `loose_count` does NOT
/// carry the excess into `box_count`; the loose pieces stay as entered.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemForm {
    pub name: String,
    pub unit: Unit,
    pub total_stock: u32,
    pub pcs_per_box: u32,
    pub box_count: u32,
    pub loose_count: u32,
}

impl Default for ItemForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            unit: Unit::Unit,
            total_stock: 0,
            pcs_per_box: DEFAULT_PCS_PER_BOX,
            box_count: 0,
            loose_count: 0,
        }
    }
}

impl ItemForm {
    /// Seed the form from a stored item, recomputing the box/pcs view from
    /// the persisted total.
    pub fn from_item(item: &Item) -> Self {
        let pcs_per_box = if item.pcs_per_box < 1 { DEFAULT_PCS_PER_BOX } else { item.pcs_per_box };
        let (box_count, loose_count) = decompose(item.total_stock, pcs_per_box);
        Self {
            name: item.name.clone(),
            unit: item.unit,
            total_stock: item.total_stock,
            pcs_per_box,
            box_count,
            loose_count,
        }
    }

    /// Switching to `box` seeds the decomposition from the current total;
    /// switching away leaves the total as the single source of truth.
    pub fn set_unit(&mut self, unit: Unit) {
        self.unit = unit;
        if unit.is_box() {
            let (box_count, loose_count) = decompose(self.total_stock, self.pcs_per_box);
            self.box_count = box_count;
            self.loose_count = loose_count;
        }
    }

    /// Direct stock edit for non-box units.
    pub fn set_total_stock(&mut self, total_stock: u32) {
        self.total_stock = total_stock;
    }

    pub fn set_box_count(&mut self, box_count: u32) {
        self.box_count = box_count;
        self.total_stock = recompose(self.box_count, self.pcs_per_box, self.loose_count);
    }

    pub fn set_pcs_per_box(&mut self, pcs_per_box: u32) {
        self.pcs_per_box = pcs_per_box.max(1);
        self.total_stock = recompose(self.box_count, self.pcs_per_box, self.loose_count);
    }

    pub fn set_loose_count(&mut self, loose_count: u32) {
        self.loose_count = loose_count;
        self.total_stock = recompose(self.box_count, self.pcs_per_box, self.loose_count);
    }

    /// Required-field check run before any remote call.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Nama Barang harus diisi!");
        }
        Ok(())
    }

    /// Save payload with all clamps applied.
    pub fn to_draft(&self, owner_id: Uuid) -> ItemDraft {
        ItemDraft {
            name: self.name.trim().to_string(),
            unit: self.unit,
            total_stock: self.total_stock,
            pcs_per_box: self.pcs_per_box.max(1),
            owner_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> Uuid {
        Uuid::from_u128(7)
    }

    fn stored_box_item(total_stock: u32, pcs_per_box: u32) -> Item {
        Item {
            id: Uuid::from_u128(1),
            name: "Kardus".to_string(),
            unit: Unit::Box,
            total_stock,
            pcs_per_box,
            owner_id: owner(),
        }
    }

    #[test]
    fn decompose_splits_boxes_and_loose_pieces() {
        assert_eq!(decompose(25, 10), (2, 5));
        assert_eq!(decompose(0, 10), (0, 0));
        assert_eq!(decompose(9, 10), (0, 9));
        assert_eq!(decompose(30, 10), (3, 0));
    }

    #[test]
    fn decompose_with_bad_divisor_uses_default() {
        assert_eq!(decompose(25, 0), (2, 5));
    }

    #[test]
    fn recompose_round_trips_decompose() {
        for total in [0u32, 1, 9, 10, 25, 34, 99, 1000] {
            for per_box in [1u32, 2, 5, 10, 12, 100] {
                let (boxes, loose) = decompose(total, per_box);
                assert_eq!(recompose(boxes, per_box, loose), total);
            }
        }
    }

    #[test]
    fn recompose_clamps_divisor_and_saturates() {
        assert_eq!(recompose(3, 0, 4), 7);
        assert_eq!(recompose(u32::MAX, 2, 1), u32::MAX);
    }

    #[test]
    fn display_quantity_depends_on_unit() {
        assert_eq!(display_quantity(Unit::Box, 25, 10), 2);
        assert_eq!(display_quantity(Unit::Box, 25, 1), 25);
        assert_eq!(display_quantity(Unit::Pcs, 25, 10), 25);
        assert_eq!(display_quantity(Unit::Unit, 25, 10), 25);
    }

    #[test]
    fn stock_input_clamps_to_zero() {
        assert_eq!(parse_stock("25"), 25);
        assert_eq!(parse_stock(" 3 "), 3);
        assert_eq!(parse_stock("-5"), 0);
        assert_eq!(parse_stock(""), 0);
        assert_eq!(parse_stock("abc"), 0);
    }

    #[test]
    fn pcs_per_box_input_defaults_and_clamps_to_one() {
        assert_eq!(parse_pcs_per_box("12"), 12);
        assert_eq!(parse_pcs_per_box(""), 10);
        assert_eq!(parse_pcs_per_box("abc"), 10);
        assert_eq!(parse_pcs_per_box("0"), 1);
        assert_eq!(parse_pcs_per_box("-3"), 1);
    }

    #[test]
    fn new_box_item_saves_recomposed_total() {
        let mut form = ItemForm {
            name: "Kardus".to_string(),
            ..ItemForm::default()
        };
        form.set_unit(Unit::Box);
        form.set_box_count(3);
        form.set_pcs_per_box(10);
        form.set_loose_count(4);
        assert_eq!(form.total_stock, 34);

        let draft = form.to_draft(owner());
        assert_eq!(draft.total_stock, 34);
        assert_eq!(draft.pcs_per_box, 10);
        assert_eq!(draft.unit, Unit::Box);
    }

    #[test]
    fn editing_stored_item_seeds_decomposition() {
        let form = ItemForm::from_item(&stored_box_item(34, 10));
        assert_eq!(form.box_count, 3);
        assert_eq!(form.loose_count, 4);
        assert_eq!(form.total_stock, 34);
    }

    #[test]
    fn editing_item_with_bad_stored_divisor_uses_default() {
        let form = ItemForm::from_item(&stored_box_item(25, 0));
        assert_eq!(form.pcs_per_box, DEFAULT_PCS_PER_BOX);
        assert_eq!(form.box_count, 2);
        assert_eq!(form.loose_count, 5);
    }

    #[test]
    fn box_count_edit_holds_other_fields() {
        let mut form = ItemForm::from_item(&stored_box_item(34, 10));
        form.set_box_count(5);
        assert_eq!(form.total_stock, 54);
        assert_eq!(form.loose_count, 4);
    }

    #[test]
    fn shrinking_pcs_per_box_keeps_loose_count_uncarried() {
        let mut form = ItemForm::default();
        form.set_unit(Unit::Box);
        form.set_box_count(2);
        form.set_loose_count(7);
        form.set_pcs_per_box(5);
        // 7 loose pieces stay loose; no carry into box_count.
        assert_eq!(form.loose_count, 7);
        assert_eq!(form.box_count, 2);
        assert_eq!(form.total_stock, 17);
    }

    #[test]
    fn switching_unit_to_box_seeds_from_current_total() {
        let mut form = ItemForm::default();
        form.set_total_stock(25);
        form.set_unit(Unit::Box);
        assert_eq!(form.box_count, 2);
        assert_eq!(form.loose_count, 5);
        assert_eq!(form.total_stock, 25);
    }

    #[test]
    fn validate_requires_trimmed_name() {
        let mut form = ItemForm::default();
        assert!(form.validate().is_err());
        form.name = "   ".to_string();
        assert!(form.validate().is_err());
        form.name = " Sabun ".to_string();
        assert!(form.validate().is_ok());
        assert_eq!(form.to_draft(owner()).name, "Sabun");
    }
}

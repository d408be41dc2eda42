//! Circular track windowing.
//!
//! The roulette strip shows a fixed number of rows while the logical scroll
//! position grows without bound. Everything here is pure so any animation frame
//! can be reproduced from its logical position alone.

use super::Candidate;
use serde::{Deserialize, Serialize};

/// Relative tolerance used to snap positions that sit on an item boundary.
const BOUNDARY_EPSILON: f64 = 1e-9;

/// Geometry of the visible strip
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackLayout {
    pub item_height: f64,
    pub visible_slots: usize,
}

impl TrackLayout {
    pub fn new(item_height: f64, visible_slots: usize) -> Self {
        Self { item_height, visible_slots }
    }

    /// Shift that puts slot 0 in the middle row of the window.
    pub fn center_offset(&self) -> f64 {
        (self.visible_slots as f64 * self.item_height) / 2.0 - self.item_height / 2.0
    }

    /// Distance covered by one full lap over `pool_len` items.
    pub fn cycle_length(&self, pool_len: usize) -> f64 {
        pool_len as f64 * self.item_height
    }

    pub fn resolve(&self, logical_position: f64, pool: &[Candidate]) -> VisualState {
        resolve_visual_state(logical_position, pool, self.item_height, self.visible_slots)
    }
}

/// What the presentation layer should draw for one frame
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VisualState {
    /// Names for each visible row, top to bottom
    pub slot_contents: Vec<String>,
    /// Vertical translation of the strip in pixels
    pub pixel_offset: f64,
    /// Pool index shown in slot 0
    pub base_index: usize,
    /// Row marked as the winner once a spin settles
    pub highlighted_slot: Option<usize>,
}

impl VisualState {
    fn blank(visible_slots: usize, pixel_offset: f64) -> Self {
        Self {
            slot_contents: vec![String::new(); visible_slots],
            pixel_offset,
            base_index: 0,
            highlighted_slot: None,
        }
    }

    /// Marks the row holding `pool_index`, if it is currently visible.
    pub fn highlight(mut self, pool_index: usize, pool_len: usize) -> Self {
        if pool_len > 0 {
            let slot = (pool_index % pool_len + pool_len - self.base_index) % pool_len;
            if slot < self.slot_contents.len() {
                self.highlighted_slot = Some(slot);
            }
        }
        self
    }

    pub fn highlighted_name(&self) -> Option<&str> {
        self.highlighted_slot.and_then(|slot| self.slot_contents.get(slot)).map(String::as_str)
    }
}

/// Maps an unbounded logical position onto the circular pool.
///
/// Positions within `BOUNDARY_EPSILON` of an item boundary snap onto it, so
/// the final target of a spin lands on the exact index instead of one row
/// early through floating point residue.
pub fn resolve_visual_state(
    logical_position: f64,
    pool: &[Candidate],
    item_height: f64,
    visible_slot_count: usize,
) -> VisualState {
    let center_offset =
        (visible_slot_count as f64 * item_height) / 2.0 - item_height / 2.0;
    if pool.is_empty() || !(item_height > 0.0) || !logical_position.is_finite() {
        return VisualState::blank(visible_slot_count, center_offset);
    }

    let len = pool.len();
    let cycle = len as f64 * item_height;
    let cycle_position = logical_position.rem_euclid(cycle);

    let raw_slot = cycle_position / item_height;
    let nearest = raw_slot.round();
    let on_boundary = (raw_slot - nearest).abs() <= BOUNDARY_EPSILON * nearest.max(1.0);

    let (slot, intra_item_offset) = if on_boundary {
        (nearest, 0.0)
    } else {
        (raw_slot.floor(), cycle_position.rem_euclid(item_height))
    };
    let base_index = (slot as usize) % len;

    let slot_contents = (0..visible_slot_count)
        .map(|i| pool[(base_index + i) % len].name.clone())
        .collect();

    VisualState {
        slot_contents,
        pixel_offset: center_offset - intra_item_offset,
        base_index,
        highlighted_slot: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(names: &[&str]) -> Vec<Candidate> {
        names.iter().enumerate().map(|(i, n)| Candidate::named(i.to_string().as_str(), *n)).collect()
    }

    #[test]
    fn center_offset_puts_slot_zero_mid_window() {
        let layout = TrackLayout::new(70.0, 5);
        assert_eq!(layout.center_offset(), 140.0);
        assert_eq!(layout.cycle_length(3), 210.0);
    }

    #[test]
    fn partial_item_moves_strip_up() {
        let state = resolve_visual_state(35.0, &pool(&["A", "B", "C"]), 70.0, 3);
        assert_eq!(state.base_index, 0);
        assert_eq!(state.slot_contents, ["A", "B", "C"]);
        assert_eq!(state.pixel_offset, 70.0 - 35.0);
    }

    #[test]
    fn slots_wrap_around_the_pool() {
        let state = resolve_visual_state(140.0, &pool(&["A", "B", "C"]), 70.0, 4);
        assert_eq!(state.slot_contents, ["C", "A", "B", "C"]);
    }

    #[test]
    fn empty_pool_renders_blank_rows() {
        let state = resolve_visual_state(500.0, &[], 70.0, 3);
        assert_eq!(state.slot_contents, ["", "", ""]);
        assert_eq!(state.highlighted_slot, None);
    }

    #[test]
    fn highlight_finds_visible_row() {
        let state = resolve_visual_state(70.0, &pool(&["A", "B", "C"]), 70.0, 2).highlight(2, 3);
        assert_eq!(state.highlighted_slot, Some(1));
        assert_eq!(state.highlighted_name(), Some("C"));

        let hidden = resolve_visual_state(0.0, &pool(&["A", "B", "C"]), 70.0, 2).highlight(2, 3);
        assert_eq!(hidden.highlighted_slot, None);
    }
}

//! Selected tick tracking.
//!
//! The selection is derived from the scroll offset: the tick nearest the
//! viewport centre is selected. [`SelectionState::refresh`] recomputes it and
//! reports a [`SelectionChange`] only when the index actually moved.

use super::geometry::RulerConfig;

/// A change of the selected tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionChange {
    pub index: usize,
    pub value: f64,
}

/// Currently selected tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    index: usize,
}

impl SelectionState {
    /// Selection resting on tick 0.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Selected value: `index * interval + min`.
    pub fn value(&self, config: &RulerConfig) -> f64 {
        config.value_at(self.index)
    }

    /// Recompute the selection from a scroll offset.
    pub fn refresh(
        &mut self,
        config: &RulerConfig,
        offset: f32,
        half_extent: f32,
    ) -> Option<SelectionChange> {
        let index = index_for_offset(config, offset, half_extent);
        self.select(config, index)
    }

    /// Select `index` (clamped). Returns the change if the index moved.
    pub fn select(&mut self, config: &RulerConfig, index: usize) -> Option<SelectionChange> {
        let index = config.clamp_index(index as i64);
        if index == self.index {
            return None;
        }
        self.index = index;
        Some(SelectionChange {
            index,
            value: config.value_at(index),
        })
    }
}

/// Index of the tick under the viewport centre for `offset`:
/// `round((offset + half_extent) / tick_spacing)`, clamped to the tick range.
pub fn index_for_offset(config: &RulerConfig, offset: f32, half_extent: f32) -> usize {
    let centre = offset + half_extent;
    let raw = (centre / config.tick_spacing()).round();
    if !raw.is_finite() {
        return 0;
    }
    config.clamp_index(raw as i64)
}

/// Scroll offset that centres `index`: `index * tick_spacing - half_extent`.
pub fn offset_for_index(config: &RulerConfig, index: usize, half_extent: f32) -> f32 {
    config.position_of(index) - half_extent
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RulerConfig {
        RulerConfig::new(0.0, 200.0, 1.0)
            .unwrap()
            .with_tick_spacing(20.0)
            .unwrap()
    }

    #[test]
    fn test_index_for_offset_rounds_to_nearest() {
        let config = config();
        assert_eq!(index_for_offset(&config, -100.0, 100.0), 0);
        assert_eq!(index_for_offset(&config, -90.0, 100.0), 1);
        assert_eq!(index_for_offset(&config, -91.0, 100.0), 0);
        assert_eq!(index_for_offset(&config, 900.0, 100.0), 50);
    }

    #[test]
    fn test_index_for_offset_clamps() {
        let config = config();
        assert_eq!(index_for_offset(&config, -5_000.0, 100.0), 0);
        assert_eq!(index_for_offset(&config, 50_000.0, 100.0), 200);
    }

    #[test]
    fn test_offset_round_trip() {
        let config = config();
        for index in [0, 1, 57, 200] {
            let offset = offset_for_index(&config, index, 120.0);
            assert_eq!(index_for_offset(&config, offset, 120.0), index);
        }
    }

    #[test]
    fn test_refresh_reports_only_changes() {
        let config = config();
        let mut selection = SelectionState::new();
        assert_eq!(selection.refresh(&config, -100.0, 100.0), None);

        let change = selection.refresh(&config, -80.0, 100.0);
        assert_eq!(
            change,
            Some(SelectionChange {
                index: 1,
                value: 1.0
            })
        );
        assert_eq!(selection.refresh(&config, -79.0, 100.0), None);
        assert_eq!(selection.index(), 1);
    }

    #[test]
    fn test_select_clamps() {
        let config = config();
        let mut selection = SelectionState::new();
        let change = selection.select(&config, 999).unwrap();
        assert_eq!(change.index, 200);
        assert_eq!(change.value, 200.0);
        assert_eq!(selection.select(&config, 500), None);
    }

    #[test]
    fn test_value_uses_min_and_interval() {
        let config = RulerConfig::new(10.0, 20.0, 0.25).unwrap();
        let mut selection = SelectionState::new();
        selection.select(&config, 6);
        assert_eq!(selection.value(&config), 11.5);
    }
}

//! Text readout of the selected value.

use crate::widgets::RulerView;

/// What the host displays next to the ruler.
#[derive(Debug, Clone, PartialEq)]
pub struct Readout {
    pub index: usize,
    pub value: f64,
    /// `value` formatted with the ruler's decimal places.
    pub text: String,
}

impl Readout {
    pub fn from_view(view: &RulerView) -> Self {
        let index = view.selected_index();
        let value = view.selected_value();
        Self {
            index,
            value,
            text: view.config().format(value),
        }
    }

    pub fn update(&mut self, view: &RulerView, index: usize, value: f64) {
        self.index = index;
        self.value = value;
        self.text = view.config().format(value);
    }
}

/// Everything a view needs to draw one component. `Default` is the
/// resting state.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

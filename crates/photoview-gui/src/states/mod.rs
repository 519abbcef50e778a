mod ui;

pub use ui::UiState;

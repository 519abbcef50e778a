pub mod menu_bar;
pub mod shortcuts;
pub mod status;
pub mod toolbar;
pub mod viewport;

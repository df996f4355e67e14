pub mod navigation;
pub mod style;
pub mod test_mode;
pub mod view;

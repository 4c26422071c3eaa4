pub mod app_theme;
pub mod result_view;

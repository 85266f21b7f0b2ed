pub mod compare_panel;
pub mod header;
pub mod nav_controls;
pub mod notice_bar;
pub mod progress_bar;
pub mod upload_area;

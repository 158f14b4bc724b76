// src/gui/components/mod.rs
pub mod confirm_delete;
pub mod export_bar;
pub mod filter_panel;
pub mod pager;
pub mod property_table;
pub mod record_form;
pub mod stats;
pub mod tabs;

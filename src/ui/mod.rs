pub mod bar_chart;
pub mod dashboard;
pub mod data_entry;
pub mod dialogs;
pub mod theme;
pub mod timeline_table;
pub mod toolbar;
pub mod widget_board;

pub mod dashboard;
pub mod dialogs;
pub mod filter_bar;
pub mod project_list;
pub mod sidebar;
pub mod theme;
pub mod toolbar;
pub mod widgets;
pub mod work_item_list;

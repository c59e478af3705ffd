mod display_select;
mod list_tab_button;
mod list_tabs;
mod page_header;
mod page_placeholder;
mod task_list;
mod task_list_row;

pub use display_select::DisplaySelect;
pub use list_tab_button::ListTabButton;
pub use list_tabs::ListTabs;
pub use page_header::PageHeader;
pub use page_placeholder::PagePlaceholder;
pub use task_list::TaskList;
pub use task_list_row::TaskListRow;

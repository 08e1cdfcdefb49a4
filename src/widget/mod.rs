//! Terminal widgets for the page overlay and its side panels

pub mod help_bar;
pub mod page_view;
pub mod selection_panel;

pub use help_bar::HelpBar;
pub use page_view::PageView;
pub use selection_panel::{SelectionPanel, format_rect};

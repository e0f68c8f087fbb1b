pub mod pagination_controls;
pub mod row_actions;
pub mod ui;

pub use pagination_controls::PaginationControls;
pub use row_actions::RowActions;

mod component;
pub mod model;

pub use component::*;
pub use model::{
    derive_rows, filter_rows, resolve_path, row_matches, sort_indices, CellValue, Column,
    PaginationState, RowActions, RowFn, SortDirection, SortState,
};

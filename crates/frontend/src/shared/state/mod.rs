pub mod selection;

pub use selection::SelectionService;

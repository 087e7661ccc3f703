pub mod model;
pub mod page;

pub use page::OrdersList;

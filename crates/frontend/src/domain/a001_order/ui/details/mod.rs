mod components;
pub mod model;
pub mod page;
pub mod state;
pub mod view_model;

pub use page::OrderDetail;

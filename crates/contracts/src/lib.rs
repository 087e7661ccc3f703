//! Wire types shared by the order admin backend and frontend.

pub mod domain;
pub mod shared;

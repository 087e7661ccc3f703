pub mod invoice;
pub mod repository;
pub mod service;

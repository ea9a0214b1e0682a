pub mod dtos;
pub mod queries;
pub mod services;

/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the domain services and reaches the hosting API
/// and the console only through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;

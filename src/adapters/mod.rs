/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: the GitHub client,
/// console progress, formatters and output sinks.
pub mod outbound;

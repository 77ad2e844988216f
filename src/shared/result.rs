/// Result alias used by the application and adapter layers.
///
/// Domain failures are `ScanError` values wrapped into `anyhow::Error` so
/// callers can still downcast to the precise variant.
pub type Result<T> = std::result::Result<T, anyhow::Error>;

/// Domain layer - Pure business logic for pom.xml inventory
///
/// Nothing in this module performs I/O. Network access happens behind the
/// `HostingApi` port and is orchestrated by the application layer.
pub mod domain;
pub mod policies;
pub mod services;

mod pom_locator;
mod pom_parser;

pub use pom_locator::PomLocator;
pub use pom_parser::PomParser;

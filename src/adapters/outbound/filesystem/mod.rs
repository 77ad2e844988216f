/// Filesystem adapters for writing rendered inventories
mod file_writer;

pub use file_writer::{FileSystemWriter, StdoutPresenter};

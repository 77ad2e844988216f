/// ProgressReporter port for reporting progress during a scan
///
/// This port abstracts progress reporting (e.g., to stderr)
/// so that stdout stays reserved for the inventory itself.
pub trait ProgressReporter {
    /// Reports a progress message
    ///
    /// # Arguments
    /// * `message` - The progress message to report
    fn report(&self, message: &str);

    /// Reports how many repositories have finished scanning
    ///
    /// # Arguments
    /// * `current` - Completed scans so far
    /// * `total` - Repositories being scanned
    /// * `message` - Optional message to include (typically the repository name)
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    ///
    /// # Arguments
    /// * `message` - The error/warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    ///
    /// # Arguments
    /// * `message` - Completion message
    fn report_completion(&self, message: &str);
}

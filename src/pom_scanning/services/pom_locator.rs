use crate::pom_scanning::domain::ContentEntry;

/// File name the locator looks for
pub const POM_FILE_NAME: &str = "pom.xml";

/// PomLocator finds the Maven descriptor in a directory listing
///
/// Only the listing it is given is inspected; nested modules are not
/// searched.
pub struct PomLocator;

impl PomLocator {
    /// Returns the entry named exactly `pom.xml`, if any
    pub fn locate(entries: &[ContentEntry]) -> Option<&ContentEntry> {
        entries.iter().find(|entry| entry.name == POM_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_finds_root_pom() {
        let entries = vec![
            ContentEntry::new("README.md", "README.md"),
            ContentEntry::new("pom.xml", "pom.xml"),
            ContentEntry::new("src", "src"),
        ];
        assert_eq!(PomLocator::locate(&entries).map(|e| e.path.as_str()), Some("pom.xml"));
    }

    #[test]
    fn test_locate_requires_exact_name() {
        let entries = vec![
            ContentEntry::new("POM.xml", "POM.xml"),
            ContentEntry::new("pom.xml.bak", "pom.xml.bak"),
            ContentEntry::new("build.gradle", "build.gradle"),
        ];
        assert!(PomLocator::locate(&entries).is_none());
    }

    #[test]
    fn test_locate_empty_listing() {
        assert!(PomLocator::locate(&[]).is_none());
    }
}

use serde::Serialize;

/// A Maven dependency reduced to its artifact and version
///
/// Both fields are always non-empty; the parser drops anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    pub artifact_id: String,
    pub version: String,
}

impl Dependency {
    pub fn new(artifact_id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            artifact_id: artifact_id.into(),
            version: version.into(),
        }
    }
}

/// One discovered pom.xml and the dependencies declared in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PomFile {
    pub path: String,
    pub dependencies: Vec<Dependency>,
}

impl PomFile {
    pub fn new(path: impl Into<String>, dependencies: Vec<Dependency>) -> Self {
        Self {
            path: path.into(),
            dependencies,
        }
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use url::Url;

/// A paper file the user picked from disk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    name: String,
    path: PathBuf,
}

impl UploadedFile {
    /// Describe a picked file. The display name falls back to the full path
    /// when the path has no final component.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        Self { name, path }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Displayable location of a paper (an asset path or a URL).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactRef(String);

impl ArtifactRef {
    #[must_use]
    pub fn new(location: impl Into<String>) -> Self {
        Self(location.into())
    }

    #[must_use]
    pub fn from_url(url: &Url) -> Self {
        Self(url.as_str().to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtifactRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The paper driving a walkthrough.
///
/// Uploads and catalog picks are mutually exclusive; whichever was chosen last
/// replaces the other.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Artifact {
    Upload {
        file: UploadedFile,
        reference: ArtifactRef,
    },
    Catalog {
        title: String,
        reference: Option<ArtifactRef>,
    },
}

impl Artifact {
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Upload { file, .. } => file.name(),
            Self::Catalog { title, .. } => title,
        }
    }

    /// Location suitable for a preview, if one is known.
    #[must_use]
    pub fn reference(&self) -> Option<&ArtifactRef> {
        match self {
            Self::Upload { reference, .. } => Some(reference),
            Self::Catalog { reference, .. } => reference.as_ref(),
        }
    }

    #[must_use]
    pub fn is_upload(&self) -> bool {
        matches!(self, Self::Upload { .. })
    }
}

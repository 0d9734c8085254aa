//! Resolution metadata for image references found in help documents.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Error;

/// Where an image reference in a help document ended up after resolution.
///
/// Resolution itself happens in an external collaborator; this type records
/// its outcome. The reference's coordinates (`source_file`, `image_src`) are
/// always present; everything state-dependent lives in [`Resolution`], so an
/// instance can never hold a contradictory combination of flags and fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageLocation {
    /// The original reference string as written in the document.
    image_src: String,
    /// Outcome of resolving the reference.
    resolution: Resolution,
    /// Document containing the image reference.
    source_file: PathBuf,
}

impl ImageLocation {
    /// Rebuild a location from the legacy flag-based representation.
    ///
    /// # Errors
    ///
    /// Returns `Error::InconsistentResolution` if the fields and flags do
    /// not form one of the four coherent resolution states.
    pub fn from_parts(
        source_file: PathBuf,
        image_src: String,
        resolved_uri: Option<Url>,
        resolved_path: Option<PathBuf>,
        is_remote: bool,
        is_runtime: bool,
    ) -> Result<Self, Error> {
        let resolution = Resolution::from_flags(resolved_uri, resolved_path, is_remote, is_runtime)?;
        return Ok(Self {
            image_src,
            resolution,
            source_file,
        });
    }

    /// The reference string as it appears in the source document.
    pub fn image_src(&self) -> &str {
        return &self.image_src;
    }

    /// A runtime reference that could not be resolved. Records the failure
    /// as a data state rather than an error.
    pub fn invalid_runtime(source_file: PathBuf, image_src: String) -> Self {
        return Self {
            image_src,
            resolution: Resolution::RuntimeInvalid,
            source_file,
        };
    }

    /// Whether the reference points to an external network resource.
    pub fn is_remote(&self) -> bool {
        return self.resolution.is_remote();
    }

    /// Whether the reference was resolved against runtime-loaded resources.
    pub fn is_runtime(&self) -> bool {
        return self.resolution.is_runtime();
    }

    /// A reference resolved against static source files on disk.
    pub fn local(
        source_file: PathBuf,
        image_src: String,
        resolved_uri: Url,
        resolved_path: PathBuf,
    ) -> Self {
        return Self {
            image_src,
            resolution: Resolution::Local {
                path: resolved_path,
                uri: resolved_uri,
            },
            source_file,
        };
    }

    /// A reference to an external network resource. Remote resources never
    /// get a local path.
    pub fn remote(source_file: PathBuf, image_src: String, resolved_uri: Url) -> Self {
        return Self {
            image_src,
            resolution: Resolution::Remote { uri: resolved_uri },
            source_file,
        };
    }

    /// The resolution outcome for this reference.
    pub fn resolution(&self) -> &Resolution {
        return &self.resolution;
    }

    /// Local filesystem path the reference resolved to, if it has one.
    pub fn resolved_path(&self) -> Option<&Path> {
        return self.resolution.resolved_path();
    }

    /// Resolved URI (local file URI or remote URL), if resolution succeeded.
    pub fn resolved_uri(&self) -> Option<&Url> {
        return self.resolution.resolved_uri();
    }

    /// A reference resolved against runtime-loaded resources.
    pub fn runtime(
        source_file: PathBuf,
        image_src: String,
        resolved_uri: Url,
        resolved_path: PathBuf,
    ) -> Self {
        return Self {
            image_src,
            resolution: Resolution::Runtime {
                path: resolved_path,
                uri: resolved_uri,
            },
            source_file,
        };
    }

    /// Replace the reference string. Leaves the resolution untouched.
    pub fn set_image_src(&mut self, image_src: String) {
        self.image_src = image_src;
    }

    /// Replace the source document path. Leaves the resolution untouched.
    pub fn set_source_file(&mut self, source_file: PathBuf) {
        self.source_file = source_file;
    }

    /// The document the reference was found in.
    pub fn source_file(&self) -> &Path {
        return &self.source_file;
    }
}

impl fmt::Display for ImageLocation {
    /// Diagnostic block listing all six fields under fixed labels.
    ///
    /// Label text, order, and indentation are a compatibility surface for
    /// downstream log scraping; absent values render as `none`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let uri = self
            .resolved_uri()
            .map_or_else(|| "none".to_string(), Url::to_string);
        let path = self
            .resolved_path()
            .map_or_else(|| "none".to_string(), |p| p.display().to_string());

        writeln!(f, "{{")?;
        writeln!(f, "    source file: {},", self.source_file.display())?;
        writeln!(f, "    src: {},", self.image_src)?;
        writeln!(f, "    uri: {uri},")?;
        writeln!(f, "    path: {path},")?;
        writeln!(f, "    is runtime: {},", self.is_runtime())?;
        writeln!(f, "    is remote: {}", self.is_remote())?;
        return write!(f, "}}");
    }
}

/// Outcome of resolving one image reference. Each variant carries exactly
/// the fields valid for that state, so the flag/presence table is enforced
/// by construction rather than by caller discipline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// Resolved against static source files: both URI and path present.
    Local {
        /// Local filesystem path of the image.
        path: PathBuf,
        /// File URI of the image.
        uri: Url,
    },
    /// External network resource: URI present, no local path.
    Remote {
        /// Remote URL of the image.
        uri: Url,
    },
    /// Resolved against runtime-loaded resources: both URI and path present.
    Runtime {
        /// Local filesystem path of the runtime resource.
        path: PathBuf,
        /// File URI of the runtime resource.
        uri: Url,
    },
    /// A runtime reference that could not be resolved: no URI, no path.
    RuntimeInvalid,
}

impl Resolution {
    /// Map the legacy (uri, path, remote, runtime) representation onto a
    /// variant.
    ///
    /// # Errors
    ///
    /// Returns `Error::InconsistentResolution` for any combination outside
    /// the four coherent states — e.g. a remote flag with a local path, or
    /// both flags set at once.
    pub fn from_flags(
        resolved_uri: Option<Url>,
        resolved_path: Option<PathBuf>,
        is_remote: bool,
        is_runtime: bool,
    ) -> Result<Self, Error> {
        return match (resolved_uri, resolved_path, is_remote, is_runtime) {
            (Some(uri), Some(path), false, false) => Ok(Self::Local { path, uri }),
            (Some(uri), Some(path), false, true) => Ok(Self::Runtime { path, uri }),
            (None, None, false, true) => Ok(Self::RuntimeInvalid),
            (Some(uri), None, true, false) => Ok(Self::Remote { uri }),
            (uri, path, remote, runtime) => Err(Error::InconsistentResolution {
                detail: format!(
                    "uri {}, path {}, remote {remote}, runtime {runtime}",
                    presence(uri.as_ref()),
                    presence(path.as_ref()),
                ),
            }),
        };
    }

    /// Whether this outcome is an external network resource.
    pub fn is_remote(&self) -> bool {
        return matches!(self, Self::Remote { .. });
    }

    /// Whether this outcome came from runtime-loaded resources.
    pub fn is_runtime(&self) -> bool {
        return matches!(self, Self::Runtime { .. } | Self::RuntimeInvalid);
    }

    /// The local path, for the variants that carry one.
    pub fn resolved_path(&self) -> Option<&Path> {
        return match self {
            Self::Local { path, .. } | Self::Runtime { path, .. } => Some(path),
            Self::Remote { .. } | Self::RuntimeInvalid => None,
        };
    }

    /// The resolved URI, for the variants that carry one.
    pub fn resolved_uri(&self) -> Option<&Url> {
        return match self {
            Self::Local { uri, .. } | Self::Remote { uri } | Self::Runtime { uri, .. } => Some(uri),
            Self::RuntimeInvalid => None,
        };
    }
}

/// Render option presence for inconsistency diagnostics.
fn presence<T>(value: Option<&T>) -> &'static str {
    return if value.is_some() { "present" } else { "absent" };
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    fn file_uri(path: &str) -> Url {
        Url::parse(&format!("file://{path}")).unwrap()
    }

    #[test]
    fn local_exposes_all_inputs() {
        let uri = file_uri("/help/shared/img.png");
        let loc = ImageLocation::local(
            PathBuf::from("help/topics/intro.html"),
            "img.png".to_string(),
            uri.clone(),
            PathBuf::from("/help/shared/img.png"),
        );

        assert_eq!(loc.source_file(), Path::new("help/topics/intro.html"));
        assert_eq!(loc.image_src(), "img.png");
        assert_eq!(loc.resolved_uri(), Some(&uri));
        assert_eq!(loc.resolved_path(), Some(Path::new("/help/shared/img.png")));
        assert!(!loc.is_remote());
        assert!(!loc.is_runtime());
    }

    #[test]
    fn runtime_sets_runtime_flag_only() {
        let loc = ImageLocation::runtime(
            PathBuf::from("help/topics/intro.html"),
            "icon.core.png".to_string(),
            file_uri("/runtime/icon.core.png"),
            PathBuf::from("/runtime/icon.core.png"),
        );

        assert!(loc.is_runtime());
        assert!(!loc.is_remote());
        assert!(loc.resolved_uri().is_some());
        assert!(loc.resolved_path().is_some());
    }

    #[test]
    fn invalid_runtime_has_no_uri_or_path() {
        let loc = ImageLocation::invalid_runtime(
            PathBuf::from("help/topics/intro.html"),
            "missing.png".to_string(),
        );

        assert_eq!(loc.resolved_uri(), None);
        assert_eq!(loc.resolved_path(), None);
        assert!(loc.is_runtime());
        assert!(!loc.is_remote());
    }

    #[test]
    fn remote_never_has_a_local_path() {
        let uri = Url::parse("http://example.com/img.png").unwrap();
        let loc = ImageLocation::remote(
            PathBuf::from("help/topics/intro.html"),
            "http://example.com/img.png".to_string(),
            uri.clone(),
        );

        assert_eq!(loc.resolved_path(), None);
        assert_eq!(loc.resolved_uri(), Some(&uri));
        assert!(loc.is_remote());
        assert!(!loc.is_runtime());
    }

    #[test]
    fn set_source_file_leaves_everything_else_alone() {
        let uri = file_uri("/help/shared/img.png");
        let mut loc = ImageLocation::local(
            PathBuf::from("old.html"),
            "img.png".to_string(),
            uri.clone(),
            PathBuf::from("/help/shared/img.png"),
        );

        loc.set_source_file(PathBuf::from("new.html"));

        assert_eq!(loc.source_file(), Path::new("new.html"));
        assert_eq!(loc.image_src(), "img.png");
        assert_eq!(loc.resolved_uri(), Some(&uri));
        assert!(!loc.is_remote());
    }

    #[test]
    fn set_image_src_leaves_everything_else_alone() {
        let mut loc = ImageLocation::invalid_runtime(
            PathBuf::from("a.html"),
            "old.png".to_string(),
        );

        loc.set_image_src("new.png".to_string());

        assert_eq!(loc.image_src(), "new.png");
        assert_eq!(loc.source_file(), Path::new("a.html"));
        assert!(loc.is_runtime());
        assert_eq!(loc.resolved_uri(), None);
    }

    #[test]
    fn display_lists_all_six_fields_in_order() {
        let loc = ImageLocation::invalid_runtime(
            PathBuf::from("a.html"),
            "missing.png".to_string(),
        );

        let text = loc.to_string();
        let labels = ["source file:", "src:", "uri:", "path:", "is runtime:", "is remote:"];
        let mut last = 0;
        for label in labels {
            let pos = text[last..].find(label).unwrap_or_else(|| {
                panic!("label `{label}` missing or out of order in:\n{text}")
            });
            last += pos;
        }
        assert!(text.contains("uri: none,"));
        assert!(text.contains("path: none,"));
    }

    #[test]
    fn from_flags_accepts_the_four_coherent_states() {
        let uri = file_uri("/x/img.png");
        let path = PathBuf::from("/x/img.png");

        let local =
            Resolution::from_flags(Some(uri.clone()), Some(path.clone()), false, false).unwrap();
        assert!(matches!(local, Resolution::Local { .. }));

        let runtime =
            Resolution::from_flags(Some(uri.clone()), Some(path.clone()), false, true).unwrap();
        assert!(matches!(runtime, Resolution::Runtime { .. }));

        let invalid = Resolution::from_flags(None, None, false, true).unwrap();
        assert!(matches!(invalid, Resolution::RuntimeInvalid));

        let remote = Resolution::from_flags(Some(uri), None, true, false).unwrap();
        assert!(matches!(remote, Resolution::Remote { .. }));
    }

    #[test]
    fn from_flags_rejects_incoherent_states() {
        let uri = file_uri("/x/img.png");
        let path = PathBuf::from("/x/img.png");

        // Remote and runtime at once.
        assert!(Resolution::from_flags(Some(uri.clone()), None, true, true).is_err());
        // Remote with a local path.
        assert!(Resolution::from_flags(Some(uri), Some(path.clone()), true, false).is_err());
        // Local with nothing resolved.
        assert!(Resolution::from_flags(None, None, false, false).is_err());
        // Path without a URI.
        assert!(Resolution::from_flags(None, Some(path), false, false).is_err());
        // Remote without a URI.
        assert!(Resolution::from_flags(None, None, true, false).is_err());
    }

    #[test]
    fn from_parts_matches_factory_output() {
        let uri = file_uri("/x/img.png");
        let from_parts = ImageLocation::from_parts(
            PathBuf::from("a.html"),
            "img.png".to_string(),
            Some(uri.clone()),
            Some(PathBuf::from("/x/img.png")),
            false,
            false,
        )
        .unwrap();
        let from_factory = ImageLocation::local(
            PathBuf::from("a.html"),
            "img.png".to_string(),
            uri,
            PathBuf::from("/x/img.png"),
        );
        assert_eq!(from_parts, from_factory);
    }
}

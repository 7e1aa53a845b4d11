//! Serde representation for filesystem paths
//!
//! serde's own `PathBuf` impl rejects names that are not valid UTF-8.
//! Here paths are written as plain strings when possible and as a `{ lossy, bytes }`
//! object otherwise, so every name round-trips exactly (on Unix) and the
//! lossy form stays readable:
//!
//! ```json
//! "/cases/a.bin"
//! { "lossy": "/cases/evid�ence.bin", "bytes": [47, 99, ...] }
//! ```
//!
//! Use with `#[serde(with = "crate::path_serde")]`, or
//! `crate::path_serde::list` for `Vec<PathBuf>`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

struct SerPath<'a>(&'a Path);

#[derive(Serialize)]
struct RawPath<'a> {
    lossy: Cow<'a, str>,
    bytes: Vec<u8>,
}

impl Serialize for SerPath<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0.to_str() {
            Some(text) => serializer.serialize_str(text),
            None => RawPath {
                lossy: self.0.to_string_lossy(),
                bytes: raw_bytes(self.0),
            }
            .serialize(serializer),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PathRepr {
    Text(String),
    Raw {
        #[allow(dead_code)]
        lossy: String,
        bytes: Vec<u8>,
    },
}

impl From<PathRepr> for PathBuf {
    fn from(repr: PathRepr) -> Self {
        match repr {
            PathRepr::Text(text) => PathBuf::from(text),
            PathRepr::Raw { bytes, .. } => from_raw_bytes(bytes),
        }
    }
}

#[cfg(unix)]
fn raw_bytes(path: &Path) -> Vec<u8> {
    use std::os::unix::ffi::OsStrExt;
    path.as_os_str().as_bytes().to_vec()
}

#[cfg(not(unix))]
fn raw_bytes(path: &Path) -> Vec<u8> {
    path.to_string_lossy().into_owned().into_bytes()
}

#[cfg(unix)]
fn from_raw_bytes(bytes: Vec<u8>) -> PathBuf {
    use std::os::unix::ffi::OsStringExt;
    PathBuf::from(std::ffi::OsString::from_vec(bytes))
}

#[cfg(not(unix))]
fn from_raw_bytes(bytes: Vec<u8>) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn serialize<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    SerPath(path).serialize(serializer)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<PathBuf, D::Error> {
    PathRepr::deserialize(deserializer).map(PathBuf::from)
}

/// Same representation for a sequence of paths.
pub mod list {
    use super::{PathRepr, SerPath};
    use serde::{Deserialize, Deserializer, Serializer};
    use std::path::PathBuf;

    pub fn serialize<S: Serializer>(paths: &[PathBuf], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(paths.iter().map(|p| SerPath(p)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<PathBuf>, D::Error> {
        let reprs = Vec::<PathRepr>::deserialize(deserializer)?;
        Ok(reprs.into_iter().map(PathBuf::from).collect())
    }
}

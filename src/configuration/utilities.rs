use std::{
    env::current_dir,
    path::{Component, Path, PathBuf},
};

use super::error::ConfigurationError;


/// Lexically normalizes `path`: drops `.` segments and redundant separators,
/// and folds each `..` into its preceding segment.
///
/// `..` directly below the root is dropped (`/..` is `/`), while leading `..`
/// segments of a relative path are kept. An empty result becomes `.`.
/// The filesystem is never consulted, so symbolic links are not followed.
#[must_use = "function returns the cleaned path"]
pub fn clean_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut cleaned = PathBuf::new();

    for component in path.as_ref().components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => cleaned.push(".."),
            },
            other => cleaned.push(other.as_os_str()),
        }
    }

    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}


/// Turns `path` into a cleaned absolute path, anchoring relative paths
/// at the current working directory.
pub fn absolute_path<P: AsRef<Path>>(path: P) -> Result<PathBuf, ConfigurationError> {
    let path = path.as_ref();

    if path.as_os_str().is_empty() {
        return Err(ConfigurationError::InvalidPath {
            reason: "path is empty".to_string(),
        });
    }

    if path.is_absolute() {
        return Ok(clean_path(path));
    }

    let working_directory = current_dir().map_err(|error| ConfigurationError::InvalidPath {
        reason: format!(
            "could not resolve {} against the current directory: {error}",
            path.display()
        ),
    })?;

    Ok(clean_path(
        dunce::simplified(&working_directory).join(path),
    ))
}


/// Rewrites a path-valued field so that it is absolute.
///
/// Empty values and values that are already absolute are left untouched.
/// Relative values are joined onto `root_directory` and cleaned.
pub fn resolve_relative_path(
    root_directory: &Path,
    field_value: &mut String,
) -> Result<(), ConfigurationError> {
    if field_value.is_empty() || Path::new(field_value.as_str()).is_absolute() {
        return Ok(());
    }

    let resolved = clean_path(root_directory.join(field_value.as_str()))
        .into_os_string()
        .into_string()
        .map_err(|non_utf8_path| ConfigurationError::InvalidPath {
            reason: format!(
                "resolved path {} is not valid UTF-8",
                Path::new(&non_utf8_path).display()
            ),
        })?;

    tracing::trace!(from = %field_value, to = %resolved, "Resolved relative path.");
    *field_value = resolved;

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_path_removes_dots_and_redundant_separators() {
        assert_eq!(clean_path("/a//b/./c/"), PathBuf::from("/a/b/c"));
        assert_eq!(clean_path("/a/b/../c"), PathBuf::from("/a/c"));
        assert_eq!(clean_path("a/../../b"), PathBuf::from("../b"));
        assert_eq!(clean_path("/../x"), PathBuf::from("/x"));
        assert_eq!(clean_path("./"), PathBuf::from("."));
        assert_eq!(clean_path("a/.."), PathBuf::from("."));
    }

    #[test]
    fn absolute_path_rejects_empty_paths() {
        assert!(matches!(
            absolute_path(""),
            Err(ConfigurationError::InvalidPath { .. })
        ));
    }

    #[test]
    fn absolute_path_keeps_absolute_paths() {
        assert_eq!(
            absolute_path("/path/to/config/file").unwrap(),
            PathBuf::from("/path/to/config/file")
        );
    }

    #[test]
    fn absolute_path_anchors_relative_paths_at_working_directory() {
        let working_directory = current_dir().unwrap();

        assert_eq!(
            absolute_path("conf/../controller.yaml").unwrap(),
            clean_path(working_directory.join("controller.yaml"))
        );
    }

    #[test]
    fn resolve_relative_path_joins_onto_root() {
        let mut value = "path/to/./kubeconfig//file".to_string();
        resolve_relative_path(Path::new("/path/to/config"), &mut value).unwrap();

        assert_eq!(value, "/path/to/config/path/to/kubeconfig/file");
    }

    #[test]
    fn resolve_relative_path_is_idempotent() {
        let mut value = "../kubeconfig".to_string();
        resolve_relative_path(Path::new("/etc/controller"), &mut value).unwrap();
        assert_eq!(value, "/etc/kubeconfig");

        resolve_relative_path(Path::new("/somewhere/else"), &mut value).unwrap();
        assert_eq!(value, "/etc/kubeconfig");
    }

    #[test]
    fn resolve_relative_path_leaves_empty_values_empty() {
        let mut value = String::new();
        resolve_relative_path(Path::new("/etc/controller"), &mut value).unwrap();

        assert!(value.is_empty());
    }
}

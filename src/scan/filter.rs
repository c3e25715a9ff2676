//! Ignore filtering over file names and extension suffixes.

use std::path::Path;

/// Operator-supplied skip lists applied to every visited path.
///
/// Matching is exact string equality: a name entry must equal the whole
/// file name, and an extension entry (leading dot included) must equal one
/// full dot-suffix component. `".py"` therefore never matches `file.pyc`,
/// while `".tar"` matches `archive.tar.gz` through its first suffix.
#[derive(Debug, Clone, Default)]
pub struct IgnoreFilter {
    ignored_extensions: Vec<String>,
    ignored_names: Vec<String>,
}

impl IgnoreFilter {
    pub fn new(ignored_extensions: Vec<String>, ignored_names: Vec<String>) -> Self {
        Self { ignored_extensions, ignored_names }
    }

    /// True when `path` should be skipped entirely.
    pub fn is_ignored(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };

        if self.ignored_names.iter().any(|ignored| ignored == name) {
            return true;
        }

        // Leading dots are not suffix separators: ".bashrc" has no suffixes.
        name.trim_start_matches('.').split('.').skip(1).any(|suffix| {
            self.ignored_extensions.iter().any(|ext| ext.strip_prefix('.') == Some(suffix))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn by_extension(ext: &str) -> IgnoreFilter {
        IgnoreFilter::new(vec![ext.to_string()], Vec::new())
    }

    fn by_name(name: &str) -> IgnoreFilter {
        IgnoreFilter::new(Vec::new(), vec![name.to_string()])
    }

    #[test]
    fn test_empty_sets_never_ignore() {
        let filter = IgnoreFilter::default();
        assert!(!filter.is_ignored(&PathBuf::from("anything.py")));
        assert!(!filter.is_ignored(&PathBuf::from("dir/nested/file.tar.gz")));
    }

    #[test]
    fn test_extension_matches_exactly() {
        let filter = by_extension(".py");
        assert!(filter.is_ignored(&PathBuf::from("script.py")));
        assert!(!filter.is_ignored(&PathBuf::from("script.pyc")));
        assert!(!filter.is_ignored(&PathBuf::from("script.python")));
    }

    #[test]
    fn test_any_suffix_component_matches() {
        assert!(by_extension(".tar").is_ignored(&PathBuf::from("archive.tar.gz")));
        assert!(by_extension(".gz").is_ignored(&PathBuf::from("archive.tar.gz")));
        assert!(!by_extension(".zip").is_ignored(&PathBuf::from("archive.tar.gz")));
    }

    #[test]
    fn test_extension_without_leading_dot_never_matches() {
        let filter = IgnoreFilter::new(vec!["py".to_string()], Vec::new());
        assert!(!filter.is_ignored(&PathBuf::from("script.py")));
    }

    #[test]
    fn test_name_matches_whole_file_name() {
        let filter = by_name("Makefile");
        assert!(filter.is_ignored(&PathBuf::from("src/Makefile")));
        assert!(!filter.is_ignored(&PathBuf::from("src/Makefile.am")));
        assert!(!filter.is_ignored(&PathBuf::from("src/sub-Makefile")));
    }

    #[test]
    fn test_hidden_file_has_no_suffixes() {
        assert!(!by_extension(".gitignore").is_ignored(&PathBuf::from(".gitignore")));
        assert!(by_name(".gitignore").is_ignored(&PathBuf::from(".gitignore")));
    }

    #[test]
    fn test_directory_names_match_too() {
        let filter = by_name("node_modules");
        assert!(filter.is_ignored(&PathBuf::from("web/node_modules")));
    }
}

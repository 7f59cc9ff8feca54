//! Page names and the files derived from them

use crate::layout::ThemeLayout;
use std::path::{Path, PathBuf};

/// Split the operator's page list into page names
///
/// The input is trimmed and split on single spaces, so `"a  b"` yields an
/// empty name in the middle and `""` yields one empty name. Order and
/// duplicates are kept.
pub fn parse_page_names(input: &str) -> Vec<String> {
    input.trim().split(' ').map(str::to_string).collect()
}

/// The three files generated for one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageArtifactSet {
    pub controller: PathBuf,
    pub markup: PathBuf,
    pub stylesheet: PathBuf,
}

impl PageArtifactSet {
    pub fn new(root: &Path, page: &str, layout: &ThemeLayout) -> Self {
        Self {
            controller: root.join(format!("{}.{}", page, layout.controller_ext)),
            markup: root
                .join("templates")
                .join(format!("{}.{}", page, layout.markup_ext)),
            stylesheet: root
                .join("styles")
                .join(&layout.preprocessor_dir)
                .join(format!("{}.{}", page, layout.style_ext)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_order_and_duplicates() {
        assert_eq!(
            parse_page_names("home about home"),
            vec!["home", "about", "home"]
        );
    }

    #[test]
    fn test_parse_trims_outer_whitespace() {
        assert_eq!(parse_page_names("  home about \n"), vec!["home", "about"]);
    }

    #[test]
    fn test_parse_empty_input_yields_one_empty_name() {
        assert_eq!(parse_page_names(""), vec![String::new()]);
        assert_eq!(parse_page_names("   "), vec![String::new()]);
    }

    #[test]
    fn test_parse_double_space_yields_empty_name() {
        assert_eq!(parse_page_names("home  about"), vec!["home", "", "about"]);
    }

    #[test]
    fn test_artifact_paths_share_base_name() {
        let root = Path::new("/themes/acme");
        let set = PageArtifactSet::new(root, "contact", &ThemeLayout::default());
        assert_eq!(set.controller, PathBuf::from("/themes/acme/contact.php"));
        assert_eq!(set.markup, PathBuf::from("/themes/acme/templates/contact.twig"));
        assert_eq!(
            set.stylesheet,
            PathBuf::from("/themes/acme/styles/scss/contact.scss")
        );
    }

    #[test]
    fn test_artifact_paths_follow_layout() {
        let layout = ThemeLayout {
            preprocessor_dir: "less".to_string(),
            style_ext: "less".to_string(),
            ..ThemeLayout::default()
        };
        let set = PageArtifactSet::new(Path::new("/t"), "blog", &layout);
        assert_eq!(set.stylesheet, PathBuf::from("/t/styles/less/blog.less"));
    }

    #[test]
    fn test_empty_page_name_gives_extension_only_files() {
        let set = PageArtifactSet::new(Path::new("/t"), "", &ThemeLayout::default());
        assert_eq!(set.controller.file_name().unwrap(), ".php");
        assert_eq!(set.markup, PathBuf::from("/t/templates/.twig"));
        assert_eq!(set.stylesheet, PathBuf::from("/t/styles/scss/.scss"));
    }
}

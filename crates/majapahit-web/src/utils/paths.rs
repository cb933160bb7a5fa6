/// Relative base-path resolution for generated links
///
/// The site is a static multi-page app with pages at three directory
/// depths. Every link the sidebar emits is relative, so the prefix back to
/// the site root depends on where the current page sits.

/// Directory depth of the current page, expressed as the relative prefix
/// needed to reach the site root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasePath {
    Here,
    OneUp,
    TwoUp,
}

const TIER_TWO: &[&str] = &[
    "/dashboard/student/",
    "/dashboard/instructor/",
    "/dashboard/admin/",
];

const TIER_ONE: &[&str] = &[
    "/course/",
    "/lesson/",
    "/auth/",
    "/report/",
    "/assignment/",
    "/settings/",
];

impl BasePath {
    pub fn prefix(&self) -> &'static str {
        match self {
            BasePath::Here => ".",
            BasePath::OneUp => "..",
            BasePath::TwoUp => "../..",
        }
    }

    /// Join a site-root-relative target onto this prefix.
    pub fn join(&self, target: &str) -> String {
        format!("{}/{}", self.prefix(), target)
    }
}

/// Classify the current location path by directory depth.
///
/// Matching is substring-based on the raw path rather than structural,
/// mirroring the URL scheme of the deployed site. Total over all inputs:
/// unrecognized paths resolve to the root level.
pub fn resolve_base_path(path: &str) -> BasePath {
    if TIER_TWO.iter().any(|dir| path.contains(dir)) {
        return BasePath::TwoUp;
    }
    if TIER_ONE.iter().any(|dir| path.contains(dir)) {
        return BasePath::OneUp;
    }
    BasePath::Here
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_paths_resolve_two_up() {
        assert_eq!(
            resolve_base_path("/dashboard/student/index.html"),
            BasePath::TwoUp
        );
        assert_eq!(
            resolve_base_path("/dashboard/instructor/index.html"),
            BasePath::TwoUp
        );
        assert_eq!(
            resolve_base_path("/dashboard/admin/index.html"),
            BasePath::TwoUp
        );
    }

    #[test]
    fn test_section_paths_resolve_one_up() {
        for path in [
            "/course/catalog.html",
            "/lesson/view.html",
            "/auth/login.html",
            "/report/index.html",
            "/assignment/submit.html",
            "/settings/index.html",
        ] {
            assert_eq!(resolve_base_path(path), BasePath::OneUp, "{}", path);
        }
    }

    #[test]
    fn test_root_and_unknown_paths_resolve_here() {
        assert_eq!(resolve_base_path("/"), BasePath::Here);
        assert_eq!(resolve_base_path("/index.html"), BasePath::Here);
        assert_eq!(resolve_base_path("/unknown/"), BasePath::Here);
        assert_eq!(resolve_base_path(""), BasePath::Here);
    }

    #[test]
    fn test_dashboard_wins_over_section_match() {
        // A dashboard path that also mentions a section keyword stays two up.
        assert_eq!(
            resolve_base_path("/dashboard/admin/course/review.html"),
            BasePath::TwoUp
        );
    }

    #[test]
    fn test_substring_matching_is_not_structural() {
        // Deliberate parity with the deployed URL scheme: a nested segment
        // still matches its tier by substring.
        assert_eq!(resolve_base_path("/archive/course/old.html"), BasePath::OneUp);
    }

    #[test]
    fn test_join_builds_relative_href() {
        assert_eq!(BasePath::Here.join("index.html"), "./index.html");
        assert_eq!(BasePath::OneUp.join("index.html"), "../index.html");
        assert_eq!(
            BasePath::TwoUp.join("course/catalog.html"),
            "../../course/catalog.html"
        );
    }
}

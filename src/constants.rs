//! Central constants for the prflows application

/// Default values for the labeler pipeline
pub mod labeler {
    /// Default rule file, relative to the repository root
    pub const DEFAULT_CONFIG_PATH: &str = ".github/labeler.yml";

    /// GitHub refuses more labels than this on a single issue
    pub const MAX_LABELS_PER_ISSUE: usize = 100;
}

/// Default values for the localization pipeline
pub mod l10n {
    /// Default generator command
    pub const DEFAULT_COMMAND: &str = "flutter gen-l10n";

    /// Default Flutter release channel
    pub const DEFAULT_CHANNEL: &str = "stable";

    /// Directories never considered generated output when snapshotting
    pub const SNAPSHOT_SKIP_DIRS: &[&str] = &[".git", ".dart_tool", "build"];
}

/// Default values for GitHub operations
pub mod github {
    pub use prflows_github::DEFAULT_API_BASE as API_BASE;

    /// Environment variables populated by GitHub Actions
    pub const ENV_TOKEN: &str = "GITHUB_TOKEN";
    pub const ENV_REPOSITORY: &str = "GITHUB_REPOSITORY";
    pub const ENV_EVENT_PATH: &str = "GITHUB_EVENT_PATH";
    pub const ENV_OUTPUT: &str = "GITHUB_OUTPUT";
    pub const ENV_ACTIONS: &str = "GITHUB_ACTIONS";
    pub const ENV_API_URL: &str = "GITHUB_API_URL";
}

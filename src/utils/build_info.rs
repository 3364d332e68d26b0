/// Compile-time build metadata produced by `build.rs`.
#[derive(Debug, Clone, Copy)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub built_on: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
}

/// Returns the statically-embedded build metadata.
pub fn current() -> BuildMetadata {
    BuildMetadata {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: option_env!("EXPENSE_TRACKER_BUILD_HASH").unwrap_or("unknown"),
        built_on: option_env!("EXPENSE_TRACKER_BUILD_DATE").unwrap_or("unknown"),
        target: option_env!("EXPENSE_TRACKER_BUILD_TARGET").unwrap_or("unknown"),
        profile: option_env!("EXPENSE_TRACKER_BUILD_PROFILE").unwrap_or("unknown"),
    }
}

impl BuildMetadata {
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!("Expense Tracker {}", self.version),
            format!("  Build hash : {}", self.git_hash),
            format!("  Built on   : {}", self.built_on),
            format!("  Target     : {}", self.target),
            format!("  Profile    : {}", self.profile),
        ]
    }
}

use git_version::git_version;
use std::fmt;

const COMMIT: &str = git_version!(
    args = ["--abbrev=10", "--always", "--dirty=-modified"],
    fallback = "unknown"
);

/// Version details baked in by `build.rs`, logged once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub channel: String,
    pub commit: &'static str,
    pub optimized: bool,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            channel: channel(
                option_env!("RELEASE_VERSION").unwrap_or(""),
                option_env!("LATEST_TAG").unwrap_or(""),
                option_env!("COMMITS_AHEAD").unwrap_or(""),
            ),
            commit: COMMIT,
            optimized: !cfg!(debug_assertions),
        }
    }
}

fn channel(release: &str, latest: &str, ahead: &str) -> String {
    match (release, latest, ahead) {
        (tag, _, _) if !tag.is_empty() => format!("release {tag}"),
        (_, "", _) => "dev".to_string(),
        (_, tag, "") => format!("dev after {tag}"),
        (_, tag, n) => format!("dev {tag}+{n}"),
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} v{} ({}, commit {}, {} profile)",
            env!("CARGO_PKG_NAME"),
            self.version,
            self.channel,
            self.commit,
            if self.optimized { "release" } else { "debug" }
        )
    }
}

pub fn get_system_info() -> String {
    BuildInfo::current().to_string()
}

use std::process::Command;

/// Run git and return trimmed stdout, or an empty string outside a checkout.
fn git(args: &[&str]) -> String {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .unwrap_or_default()
}

fn main() {
    // Tag of HEAD when building a release commit.
    let release = git(&["describe", "--tags", "--exact-match"]);
    let latest = git(&["describe", "--tags", "--abbrev=0"]);
    let ahead = if latest.is_empty() {
        String::new()
    } else {
        git(&["rev-list", "--count", &format!("{latest}..HEAD")])
    };

    println!("cargo:rustc-env=RELEASE_VERSION={release}");
    println!("cargo:rustc-env=LATEST_TAG={latest}");
    println!("cargo:rustc-env=COMMITS_AHEAD={ahead}");
}

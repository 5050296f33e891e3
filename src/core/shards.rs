//! Package manager invocation forms
//!
//! The runtime's package manager grew out of `crystal deps` and became the
//! standalone `shards` binary at 0.25.0, changing the install invocation.
//! Dispatch goes through an ordered version-range table so a future rename
//! is one new row, not another branch.

use semver::Version;

use crate::config::defaults;

/// One dispatch row: the invocation used from `since` until the next row
struct CommandForm {
    since: Version,
    argv: &'static [&'static str],
}

/// Dispatch table, oldest form first
fn dispatch_table() -> Vec<CommandForm> {
    vec![
        CommandForm {
            since: Version::new(0, 0, 0),
            argv: &[defaults::COMPILER, "deps", "--production"],
        },
        CommandForm {
            since: Version::new(0, 25, 0),
            argv: &["shards", "install", "--production"],
        },
    ]
}

/// Argument vector that installs production dependencies under the given
/// runtime version
pub fn install_argv(runtime: &Version) -> Vec<String> {
    let forms = dispatch_table();
    let argv = forms
        .iter()
        .rev()
        .find(|form| *runtime >= form.since)
        .map_or(forms[0].argv, |form| form.argv);
    argv.iter().map(|s| (*s).to_string()).collect()
}

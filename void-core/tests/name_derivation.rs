//! Project-name derivation from repository sources.
//!
//! Each `#[case]` is isolated; no shared state.

use rstest::rstest;
use void_core::{ProjectName, RegistryError};

#[rstest]
#[case::https_with_suffix("https://example.com/org/foo.git", "foo")]
#[case::https_trailing_slash("https://example.com/org/bar/", "bar")]
#[case::many_trailing_slashes("https://example.com/org/bar///", "bar")]
#[case::no_suffix("https://github.com/psf/requests", "requests")]
#[case::ssh_url("ssh://git@example.com:2222/org/tool.git", "tool")]
#[case::scp_style("git@github.com:org/api-server.git", "api-server")]
#[case::scp_style_no_dir("git@github.com:lonely.git", "lonely")]
#[case::local_path("/srv/git/mirror.git", "mirror")]
#[case::dotted_name("https://example.com/org/my.site.io", "my.site.io")]
#[case::only_last_git_stripped("https://example.com/org/foo.git.git", "foo.git")]
fn derives_name(#[case] source: &str, #[case] expected: &str) {
    let name = ProjectName::from_source(source).expect("derivable");
    assert_eq!(name.as_str(), expected);
}

#[rstest]
#[case::empty("")]
#[case::slashes_only("///")]
#[case::bare_suffix("https://example.com/org/.git")]
#[case::dot_dot("https://example.com/org/..")]
#[case::hidden("https://example.com/org/.secret")]
fn rejects_underivable_sources(#[case] source: &str) {
    let err = ProjectName::from_source(source).unwrap_err();
    assert!(matches!(err, RegistryError::InvalidSource { .. }), "got: {err}");
}

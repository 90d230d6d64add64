//! Unit tests for the GitHub issue link module.

use rstest::rstest;

use super::{ApiBase, IssueLinkError, IssueLocator, PersonalAccessToken};


#[rstest]
fn parses_issue_link_segments() {
    let locator = IssueLocator::parse("https://github.com/octocat/Hello-World/issues/1")
        .expect("should parse issue link");
    assert_eq!(locator.owner().as_str(), "octocat", "owner mismatch");
    assert_eq!(
        locator.repository().as_str(),
        "Hello-World",
        "repository mismatch"
    );
    assert_eq!(locator.number().get(), 1_u64, "number mismatch");
}

#[rstest]
fn builds_public_api_url() {
    let locator = IssueLocator::parse("https://github.com/octocat/Hello-World/issues/1")
        .expect("should parse issue link");
    assert_eq!(
        locator.api_url(),
        "https://api.github.com/repos/octocat/Hello-World/issues/1"
    );
}

#[rstest]
fn builds_api_url_under_custom_base() {
    let locator = IssueLocator::parse("https://github.com/octocat/Hello-World/issues/42")
        .expect("should parse issue link");
    let api_base = ApiBase::parse("http://127.0.0.1:8080/").expect("base should parse");
    assert_eq!(
        locator.api_url_for(&api_base),
        "http://127.0.0.1:8080/repos/octocat/Hello-World/issues/42"
    );
}

#[rstest]
fn owner_takes_shortest_match() {
    let locator = IssueLocator::parse("https://github.com/a/b/c/issues/1")
        .expect("nested path should still match");
    assert_eq!(locator.owner().as_str(), "a");
    assert_eq!(locator.repository().as_str(), "b/c");
}

#[rstest]
fn owner_and_repository_are_not_validated() {
    let locator = IssueLocator::parse("https://github.com/some owner/repo.rs/issues/0012")
        .expect("any characters are accepted");
    assert_eq!(locator.owner().as_str(), "some owner");
    assert_eq!(locator.repository().as_str(), "repo.rs");
    assert_eq!(locator.number().get(), 12);
}

#[rstest]
#[case::space(
    "https://github.com/some owner/repo/issues/1",
    "https://api.github.com/repos/some%20owner/repo/issues/1"
)]
#[case::nested_repository_keeps_slash(
    "https://github.com/a/b c/d/issues/2",
    "https://api.github.com/repos/a/b%20c/d/issues/2"
)]
#[case::reserved_characters(
    "https://github.com/o?x/r#y/issues/3",
    "https://api.github.com/repos/o%3Fx/r%23y/issues/3"
)]
#[case::non_ascii(
    "https://github.com/ñ/repo/issues/4",
    "https://api.github.com/repos/%C3%B1/repo/issues/4"
)]
fn api_url_encodes_unsafe_path_characters(#[case] link: &str, #[case] expected: &str) {
    let locator = IssueLocator::parse(link).expect("link should parse");

    assert_eq!(locator.api_url(), expected);
    assert!(
        url::Url::parse(&locator.api_url()).is_ok(),
        "endpoint should be a valid URL"
    );
}

#[rstest]
#[case::empty("")]
#[case::pull_request("https://github.com/octocat/Hello-World/pull/1")]
#[case::non_numeric("https://github.com/octocat/Hello-World/issues/abc")]
#[case::missing_number("https://github.com/octocat/Hello-World/issues/")]
#[case::trailing_slash("https://github.com/octocat/Hello-World/issues/1/")]
#[case::trailing_path("https://github.com/octocat/Hello-World/issues/1/events")]
#[case::fragment("https://github.com/octocat/Hello-World/issues/1#issuecomment-2")]
#[case::query("https://github.com/octocat/Hello-World/issues/1?foo=bar")]
#[case::leading_space(" https://github.com/octocat/Hello-World/issues/1")]
#[case::plain_http("http://github.com/octocat/Hello-World/issues/1")]
#[case::other_host("https://gitlab.com/octocat/Hello-World/issues/1")]
#[case::www_host("https://www.github.com/octocat/Hello-World/issues/1")]
#[case::missing_repository("https://github.com/octocat/issues/1")]
#[case::empty_owner("https://github.com//Hello-World/issues/1")]
#[case::api_url("https://api.github.com/repos/octocat/Hello-World/issues/1")]
#[case::negative("https://github.com/octocat/Hello-World/issues/-1")]
#[case::unicode_digits("https://github.com/octocat/Hello-World/issues/١٢")]
fn rejects_links_of_the_wrong_shape(#[case] link: &str) {
    let result = IssueLocator::parse(link);
    assert!(
        matches!(result, Err(IssueLinkError::NoMatch { .. })),
        "expected NoMatch for {link:?}, got {result:?}"
    );
}

#[rstest]
fn rejects_overflowing_issue_number() {
    let result =
        IssueLocator::parse("https://github.com/octocat/Hello-World/issues/99999999999999999999");
    assert!(
        matches!(result, Err(IssueLinkError::InvalidIssueNumber(_))),
        "expected InvalidIssueNumber, got {result:?}"
    );
}

#[rstest]
fn rejects_empty_token() {
    let result = PersonalAccessToken::new("  ");
    assert!(
        matches!(result, Err(IssueLinkError::MissingToken)),
        "expected MissingToken, got {result:?}"
    );
}

#[rstest]
#[case::relative("/api/v3")]
#[case::garbage("not a url")]
fn rejects_invalid_api_base(#[case] value: &str) {
    let result = ApiBase::parse(value);
    assert!(
        matches!(result, Err(IssueLinkError::InvalidUrl(_))),
        "expected InvalidUrl for {value:?}, got {result:?}"
    );
}

//! Tests for field resolution methods.

use rstest::rstest;

use crate::IssueLinkConfig;
use crate::github::IssueLinkError;
use crate::pipeline::AuthorizationPolicy;

#[rstest]
fn resolve_token_returns_value_when_present() {
    let config = IssueLinkConfig {
        token: Some(" my-token ".to_owned()),
        ..Default::default()
    };

    let token = config.resolve_token().expect("token should resolve");
    assert_eq!(token.value(), "my-token", "should return the trimmed token");
}

#[rstest]
fn resolve_token_falls_back_to_github_token() {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", Some("legacy-token"))]);
    let config = IssueLinkConfig::default();

    let token = config.resolve_token().expect("legacy token should resolve");
    assert_eq!(token.value(), "legacy-token");
}

#[rstest]
#[case::empty("")]
#[case::whitespace("   ")]
fn blank_token_falls_back_to_github_token(#[case] configured: &str) {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", Some("legacy-token"))]);
    let config = IssueLinkConfig {
        token: Some(configured.to_owned()),
        ..Default::default()
    };

    let token = config.resolve_token().expect("legacy token should resolve");
    assert_eq!(token.value(), "legacy-token");
}

#[rstest]
fn blank_token_and_blank_github_token_are_missing() {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", Some("  "))]);
    let config = IssueLinkConfig {
        token: Some(" ".to_owned()),
        ..Default::default()
    };

    assert_eq!(config.resolve_token(), Err(IssueLinkError::MissingToken));
}

#[rstest]
fn resolve_token_returns_error_when_none() {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", None::<&str>)]);
    let config = IssueLinkConfig::default();

    assert_eq!(config.resolve_token(), Err(IssueLinkError::MissingToken));
}

#[rstest]
fn require_link_returns_value_when_present() {
    let config = IssueLinkConfig {
        link: Some("https://github.com/octocat/Hello-World/issues/1".to_owned()),
        ..Default::default()
    };

    assert_eq!(
        config.require_link().ok(),
        Some("https://github.com/octocat/Hello-World/issues/1")
    );
}

#[rstest]
fn require_link_returns_error_when_none() {
    let config = IssueLinkConfig::default();

    assert_eq!(config.require_link(), Err(IssueLinkError::MissingLink));
}

#[rstest]
fn api_base_rejects_relative_value() {
    let config = IssueLinkConfig {
        api_base: "api/v3".to_owned(),
        ..Default::default()
    };

    assert!(
        matches!(config.api_base(), Err(IssueLinkError::InvalidUrl(_))),
        "relative API base should be rejected"
    );
}

#[rstest]
fn token_interceptor_is_passthrough_by_default() {
    let config = IssueLinkConfig {
        token: Some("ignored".to_owned()),
        ..Default::default()
    };

    let interceptor = config
        .token_interceptor()
        .expect("disabled policy needs no token");
    assert!(matches!(
        interceptor.policy(),
        AuthorizationPolicy::Disabled
    ));
}

#[rstest]
fn token_interceptor_uses_bearer_when_enabled() {
    let config = IssueLinkConfig {
        token: Some("secret".to_owned()),
        attach_authorization: true,
        ..Default::default()
    };

    let interceptor = config
        .token_interceptor()
        .expect("enabled policy with token should build");
    let AuthorizationPolicy::Bearer(provider) = interceptor.policy() else {
        panic!("expected bearer policy, got {:?}", interceptor.policy());
    };
    assert_eq!(provider.token().as_deref(), Some("secret"));
}

#[rstest]
fn token_interceptor_requires_token_when_enabled() {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", None::<&str>)]);
    let config = IssueLinkConfig {
        attach_authorization: true,
        ..Default::default()
    };

    assert!(matches!(
        config.token_interceptor(),
        Err(IssueLinkError::MissingToken)
    ));
}

#[rstest]
fn pipeline_requires_token_when_authorization_enabled() {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", None::<&str>)]);
    let config = IssueLinkConfig {
        attach_authorization: true,
        ..Default::default()
    };

    assert!(matches!(
        config.pipeline(),
        Err(IssueLinkError::MissingToken)
    ));
}

#[rstest]
fn pipeline_places_authorization_in_front_of_transport() {
    let config = IssueLinkConfig::default();

    let chain = config.pipeline().expect("default pipeline should build");
    assert_eq!(chain.len(), 1, "one authorization interceptor expected");
}

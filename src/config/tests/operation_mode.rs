//! Tests for operation mode determination.

use rstest::rstest;

use crate::IssueLinkConfig;
use crate::config::OperationMode;

#[rstest]
#[case::default(false, false, None, OperationMode::Lookup)]
#[case::validate(true, false, None, OperationMode::Validate)]
#[case::raw(false, true, None, OperationMode::Raw)]
#[case::validate_wins_over_raw(true, true, None, OperationMode::Validate)]
#[case::comment(false, false, Some("Funded"), OperationMode::Comment)]
#[case::comment_wins_over_validate(true, true, Some("Funded"), OperationMode::Comment)]
fn operation_mode_follows_flags(
    #[case] validate: bool,
    #[case] raw: bool,
    #[case] comment: Option<&str>,
    #[case] expected: OperationMode,
) {
    let config = IssueLinkConfig {
        validate,
        raw,
        comment: comment.map(ToOwned::to_owned),
        ..Default::default()
    };

    assert_eq!(config.operation_mode(), expected);
}

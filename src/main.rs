//! Issuelink CLI entrypoint for issue lookup, validation, and commenting.

use std::io::{self, Write};
use std::process::ExitCode;

use issuelink::github::ApiBase;
use issuelink::pipeline;
use issuelink::{
    Issue, IssueCommentGateway, IssueLinkConfig, IssueLinkError, IssueLocator, IssueLookup,
    OctocrabIssueCommentGateway, OctocrabIssueGateway, OperationMode,
};
use ortho_config::OrthoConfig;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<ExitCode, IssueLinkError> {
    let config = load_config()?;
    let link = config.require_link()?;
    let api_base = config.api_base()?;

    match config.operation_mode() {
        OperationMode::Lookup => {
            let issue = lookup(link, &api_base).await?;
            write_summary(&issue)?;
            Ok(ExitCode::SUCCESS)
        }
        OperationMode::Validate => validate(link, &api_base).await,
        OperationMode::Raw => {
            raw(&config, link, &api_base).await?;
            Ok(ExitCode::SUCCESS)
        }
        OperationMode::Comment => {
            let body = config.comment.as_deref().unwrap_or_default();
            comment(&config, link, &api_base, body).await
        }
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`IssueLinkError::Configuration`] when ortho-config fails to
/// parse arguments or load configuration files.
fn load_config() -> Result<IssueLinkConfig, IssueLinkError> {
    IssueLinkConfig::load().map_err(|error| IssueLinkError::Configuration {
        message: error.to_string(),
    })
}

async fn lookup(link: &str, api_base: &ApiBase) -> Result<Issue, IssueLinkError> {
    let gateway = OctocrabIssueGateway::anonymous(api_base)?;
    IssueLookup::new(&gateway).fetch(link).await
}

async fn validate(link: &str, api_base: &ApiBase) -> Result<ExitCode, IssueLinkError> {
    let gateway = OctocrabIssueGateway::anonymous(api_base)?;
    let valid = IssueLookup::new(&gateway).validate_link(link).await;

    let verdict = if valid { "valid" } else { "invalid" };
    write_line(&format!("{link}: {verdict}"))?;

    Ok(if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn raw(
    config: &IssueLinkConfig,
    link: &str,
    api_base: &ApiBase,
) -> Result<(), IssueLinkError> {
    let locator = IssueLocator::parse(link)?;
    let chain = config.pipeline()?;
    let request = pipeline::issue_request(&locator, api_base)?;
    let response = pipeline::send(&chain, request).await?;

    if !response.status().is_success() {
        return Err(IssueLinkError::Api {
            message: format!("issue request failed with status {}", response.status()),
        });
    }
    write_line(&String::from_utf8_lossy(response.body()))
}

async fn comment(
    config: &IssueLinkConfig,
    link: &str,
    api_base: &ApiBase,
    body: &str,
) -> Result<ExitCode, IssueLinkError> {
    let locator = IssueLocator::parse(link)?;
    let token = config.resolve_token()?;
    let gateway = OctocrabIssueCommentGateway::for_token(&token, api_base)?;
    let created = gateway.create_comment(&locator, body).await?;

    let url = created
        .html_url
        .as_deref()
        .unwrap_or("no HTML URL provided");
    write_line(&format!("Posted comment {} on {link}\nURL: {url}", created.id))?;
    Ok(ExitCode::SUCCESS)
}

fn write_summary(issue: &Issue) -> Result<(), IssueLinkError> {
    let url = issue.html_url.as_deref().unwrap_or("no HTML URL provided");
    let labels = if issue.labels.is_empty() {
        "none".to_owned()
    } else {
        issue
            .labels
            .iter()
            .map(|label| label.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let message = format!(
        "Issue #{} ({}) by {}: {}\nURL: {url}\nLabels: {labels}\nComments: {}",
        issue.number,
        issue.state.as_str(),
        issue.user.login,
        issue.title,
        issue.comments
    );
    write_line(&message)
}

fn write_line(message: &str) -> Result<(), IssueLinkError> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{message}").map_err(|error| IssueLinkError::Io {
        message: error.to_string(),
    })
}

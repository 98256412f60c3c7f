//! GitHub credential discovery
//!
//! Authentication is delegated to the environment: an explicit token, one of
//! the conventional token variables, or the token held by an authenticated
//! `gh` CLI session.

use std::process::Command;

/// Environment variables consulted for a token, in order
pub const TOKEN_ENV_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

/// Where a resolved token came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSource {
    Flag,
    Env(&'static str),
    GhCli,
}

impl std::fmt::Display for TokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag => write!(f, "--github-token"),
            Self::Env(name) => write!(f, "${}", name),
            Self::GhCli => write!(f, "gh auth token"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedToken {
    pub token: String,
    pub source: TokenSource,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Resolves a token from the flag, then the environment, then the `gh` CLI.
///
/// The lookups are injected so callers (and tests) control where values come
/// from. `gh_token` is only invoked when nothing earlier produced a token.
pub fn resolve_token_with<E, G>(
    flag: Option<String>,
    env_lookup: E,
    gh_token: G,
) -> Option<ResolvedToken>
where
    E: Fn(&str) -> Option<String>,
    G: FnOnce() -> Option<String>,
{
    if let Some(token) = non_empty(flag) {
        return Some(ResolvedToken {
            token,
            source: TokenSource::Flag,
        });
    }

    for name in TOKEN_ENV_VARS {
        if let Some(token) = non_empty(env_lookup(name)) {
            return Some(ResolvedToken {
                token,
                source: TokenSource::Env(name),
            });
        }
    }

    non_empty(gh_token()).map(|token| ResolvedToken {
        token,
        source: TokenSource::GhCli,
    })
}

/// Resolves a token from the process environment and the installed `gh` CLI
pub fn resolve_token(flag: Option<String>) -> Option<ResolvedToken> {
    resolve_token_with(flag, |name| std::env::var(name).ok(), gh_cli_token)
}

/// Token of the authenticated `gh` session, if `gh` is installed and logged in
pub fn gh_cli_token() -> Option<String> {
    match Command::new("gh").args(["auth", "token"]).output() {
        Ok(output) if output.status.success() => {
            String::from_utf8(output.stdout).ok().and_then(|s| non_empty(Some(s)))
        }
        Ok(output) => {
            tracing::debug!(
                "gh auth token exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            None
        }
        Err(e) => {
            tracing::debug!("gh CLI is not available: {}", e);
            None
        }
    }
}

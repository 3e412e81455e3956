//! `chanlock check` handler.

use super::OutputFormat;
use chanlock::{
    Channel, ChannelMember, ChanlockResult, ConfigFileSource, InMemoryHost, Post, PostDecision,
    PostGuard, RestrictedNames, User,
};
use std::fmt::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, instrument};

const CHANNEL_ID: &str = "cli-channel";
const USER_ID: &str = "cli-user";

/// Inputs for a single simulated post.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Channel name
    pub channel: String,
    /// Poster username
    pub user: String,
    /// Membership roles; `None` means not a member
    pub roles: Option<String>,
    /// Message body
    pub message: String,
    /// Explicit settings file
    pub config: Option<PathBuf>,
    /// Output format
    pub format: OutputFormat,
}

/// Outcome of one simulated post.
#[derive(Debug, Clone)]
pub struct CheckReport {
    restricted: RestrictedNames,
    decision: PostDecision,
    notice: Option<String>,
}

impl CheckReport {
    /// Render the report for `user` in the requested format.
    pub fn render(&self, format: OutputFormat, user: &str) -> String {
        match format {
            OutputFormat::Human => {
                let mut out = String::new();
                let _ = writeln!(out, "Restricted: {}", self.restricted);
                match &self.decision {
                    PostDecision::Allow(_) => {
                        let _ = writeln!(out, "Decision: allow");
                    }
                    PostDecision::Discard { restricted } => {
                        let _ = writeln!(out, "Decision: discard");
                        let _ = writeln!(out, "Signal: {:?}", restricted);
                    }
                }
                if let Some(message) = &self.notice {
                    let _ = writeln!(out, "Notice to {}: {}", user, message);
                }
                out
            }
            OutputFormat::Json => serde_json::json!({
                "restricted": self.restricted.iter().collect::<Vec<_>>(),
                "decision": self.decision.to_string(),
                "signal": self.decision.signal(),
                "notice": self.notice,
            })
            .to_string(),
        }
    }
}

/// Seed an in-memory host from `options` and run one post through a freshly
/// configured guard.
#[instrument(skip(options), fields(channel = %options.channel, user = %options.user))]
pub async fn evaluate(options: &CheckOptions) -> ChanlockResult<CheckReport> {
    let host = Arc::new(InMemoryHost::new());
    host.add_channel(Channel::new(CHANNEL_ID, options.channel.as_str()))
        .await;
    host.add_user(User::new(USER_ID, options.user.as_str()))
        .await;
    if let Some(roles) = &options.roles {
        host.add_member(ChannelMember::new(CHANNEL_ID, USER_ID, roles.as_str()))
            .await;
    }

    let source = match &options.config {
        Some(path) => ConfigFileSource::at(path),
        None => ConfigFileSource::layered(),
    };

    let guard = PostGuard::new(host.clone());
    let config = guard.reload_configuration(&source).await?;
    debug!(restricted = %config.restricted_names(), "Loaded settings");

    let decision = guard
        .on_post_submit(Post::new(CHANNEL_ID, USER_ID, options.message.as_str()))
        .await;
    let notice = host
        .notices()
        .await
        .first()
        .map(|notice| notice.message().clone());

    Ok(CheckReport {
        restricted: config.restricted_names().clone(),
        decision,
        notice,
    })
}

/// Evaluate `options` and print the outcome.
pub async fn run_check(options: CheckOptions) -> ChanlockResult<()> {
    let report = evaluate(&options).await?;
    print!("{}", report.render(options.format, &options.user));
    if options.format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn settings_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(
            b"restricted_channel_name = \"Town-Square, VIP\"\nrejection_message = \"Admins only\"\n",
        )
        .unwrap();
        file.flush().unwrap();
        file
    }

    fn options(file: &tempfile::NamedTempFile, channel: &str, roles: Option<&str>) -> CheckOptions {
        CheckOptions {
            channel: channel.to_string(),
            user: "alice".to_string(),
            roles: roles.map(str::to_string),
            message: "hello".to_string(),
            config: Some(file.path().to_path_buf()),
            format: OutputFormat::Human,
        }
    }

    #[tokio::test]
    async fn test_unrestricted_channel_is_allowed() {
        let file = settings_file();
        let report = evaluate(&options(&file, "off-topic", Some("channel_user")))
            .await
            .unwrap();

        assert!(report.decision.is_allowed());
        assert!(report.notice.is_none());
        assert_eq!(
            report.render(OutputFormat::Human, "alice"),
            "Restricted: town-square,vip\nDecision: allow\n"
        );
    }

    #[tokio::test]
    async fn test_admin_in_restricted_channel_is_allowed() {
        let file = settings_file();
        let report = evaluate(&options(&file, "VIP", Some("channel_user channel_admin")))
            .await
            .unwrap();

        assert!(report.decision.is_allowed());
        assert!(report.notice.is_none());
    }

    #[tokio::test]
    async fn test_non_admin_in_restricted_channel_is_discarded() {
        let file = settings_file();
        let report = evaluate(&options(&file, "town-square", Some("channel_user")))
            .await
            .unwrap();

        assert_eq!(report.decision.signal(), "Town-Square, VIP");
        assert_eq!(report.notice.as_deref(), Some("Admins only"));

        let human = report.render(OutputFormat::Human, "alice");
        assert!(human.contains("Decision: discard\n"));
        assert!(human.contains("Signal: \"Town-Square, VIP\"\n"));
        assert!(human.ends_with("Notice to alice: Admins only\n"));

        let json: serde_json::Value =
            serde_json::from_str(&report.render(OutputFormat::Json, "alice")).unwrap();
        assert_eq!(json["decision"], "discard");
        assert_eq!(json["signal"], "Town-Square, VIP");
        assert_eq!(json["notice"], "Admins only");
        assert_eq!(json["restricted"], serde_json::json!(["town-square", "vip"]));
    }

    #[tokio::test]
    async fn test_non_member_is_discarded_without_notice() {
        let file = settings_file();
        let report = evaluate(&options(&file, "vip", None)).await.unwrap();

        assert!(!report.decision.is_allowed());
        assert_eq!(report.decision.signal(), "");
        assert!(report.notice.is_none());
    }

    #[tokio::test]
    async fn test_missing_settings_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut opts = options(&settings_file(), "vip", None);
        opts.config = Some(dir.path().join("absent.toml"));

        let err = evaluate(&opts).await.unwrap_err();
        assert!(err.to_string().contains("Plugin settings unreadable"));
    }
}

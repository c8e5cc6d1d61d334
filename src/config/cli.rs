use crate::config::settings::Settings;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "secure-etl")]
#[command(about = "Fetch a payload over HTTPS, store it in MySQL and notify an admin")]
pub struct CliArgs {
    /// Value to send in the notification body; prompted for when omitted
    #[arg(long)]
    pub input: Option<String>,

    /// HTTPS endpoint to fetch the payload from
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Fetch timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Mail program invoked as `<program> -s <subject> -- <recipient>`
    #[arg(long)]
    pub mail_program: Option<String>,

    /// Optional TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Validate configuration and print the plan without contacting anything
    #[arg(long)]
    pub dry_run: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliArgs {
    /// 命令列參數覆蓋設定檔
    pub fn apply_overrides(&self, mut settings: Settings) -> Settings {
        if let Some(endpoint) = &self.endpoint {
            settings.fetch.endpoint = endpoint.clone();
        }
        if let Some(timeout) = self.timeout_secs {
            settings.fetch.timeout_seconds = timeout;
        }
        if let Some(program) = &self.mail_program {
            settings.mail.program = program.clone();
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::DEFAULT_ENDPOINT;

    #[test]
    fn test_flags_override_settings() {
        let args = CliArgs::parse_from([
            "secure-etl",
            "--endpoint",
            "https://example.org/feed",
            "--timeout-secs",
            "3",
            "--input",
            "alice",
        ]);

        let settings = args.apply_overrides(Settings::default());
        assert_eq!(settings.fetch.endpoint, "https://example.org/feed");
        assert_eq!(settings.fetch.timeout_seconds, 3);
        assert_eq!(settings.mail.program, "mail");
        assert_eq!(args.input.as_deref(), Some("alice"));
    }

    #[test]
    fn test_no_flags_keep_settings() {
        let args = CliArgs::parse_from(["secure-etl"]);
        let settings = args.apply_overrides(Settings::default());
        assert_eq!(settings.fetch.endpoint, DEFAULT_ENDPOINT);
        assert!(!args.dry_run);
    }
}

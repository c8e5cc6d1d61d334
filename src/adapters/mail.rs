use crate::config::DB_PASSWORD;
use crate::core::{MailTransport, Notification};
use crate::utils::error::NotificationError;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Delivers through a `mail(1)`-compatible program. Subject and recipient are
/// passed as separate arguments and the body is written to stdin; no shell
/// is involved at any point.
#[derive(Debug, Clone)]
pub struct CommandMailTransport {
    program: String,
}

impl CommandMailTransport {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn arguments(notification: &Notification) -> Vec<&str> {
        vec![
            "-s",
            notification.subject.as_str(),
            "--",
            notification.recipient.as_str(),
        ]
    }
}

#[async_trait]
impl MailTransport for CommandMailTransport {
    async fn deliver(&self, notification: &Notification) -> Result<(), NotificationError> {
        let mut child = Command::new(&self.program)
            .args(Self::arguments(notification))
            .env_remove(DB_PASSWORD)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| NotificationError::Unavailable {
                program: self.program.clone(),
                source,
            })?;

        let stdin = child.stdin.take();
        let body = notification.body.as_bytes();
        let write_body = async move {
            match stdin {
                Some(mut stdin) => {
                    let result = stdin.write_all(body).await;
                    // 關閉 stdin，讓 mail 程式知道內容結束
                    drop(stdin);
                    result
                }
                None => Ok(()),
            }
        };

        // 同時寫入 stdin 與讀取 stderr，避免兩邊的 pipe 都塞滿
        let (written, output) = tokio::join!(write_body, child.wait_with_output());
        let output = output?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::warn!("Mail program {} failed: {}", self.program, stderr.trim());
            return Err(NotificationError::Rejected {
                status: output.status.to_string(),
            });
        }
        written?;

        tracing::debug!("Mail handed to {}", self.program);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arguments_keep_fields_separate() {
        let message = Notification::new("a@x.com", "User Input\"; rm -rf / #", "alice");
        assert_eq!(
            CommandMailTransport::arguments(&message),
            vec!["-s", "User Input\"; rm -rf / #", "--", "a@x.com"]
        );
    }

    #[tokio::test]
    async fn test_missing_program_is_unavailable() {
        let transport = CommandMailTransport::new("/nonexistent/bin/mail");
        let message = Notification::new("a@x.com", "User Input", "alice");

        let err = transport.deliver(&message).await.unwrap_err();

        assert!(matches!(err, NotificationError::Unavailable { .. }));
    }
}

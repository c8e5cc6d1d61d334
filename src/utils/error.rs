use thiserror::Error;

/// 網路傳輸錯誤（HTTPS 取得資料）
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Refusing non-HTTPS endpoint (scheme '{scheme}')")]
    InsecureScheme { scheme: String },

    #[error("Request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("Endpoint returned HTTP {status}")]
    Status { status: u16 },

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// 資料庫寫入錯誤
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Could not connect to database: {message}")]
    Connect { message: String },

    #[error("Statement execution failed: {message}")]
    Execute { message: String },

    #[error("Commit failed: {message}")]
    Commit { message: String },

    #[error("Closing connection failed: {message}")]
    Release { message: String },
}

/// 通知（郵件）發送錯誤
#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("Mail transport '{program}' is unavailable: {source}")]
    Unavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Mail transport exited with {status}")]
    Rejected { status: String },

    #[error("Writing message body to mail transport failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid notification {field}: {reason}")]
    InvalidMessage { field: String, reason: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required configuration: {field}")]
    Missing { field: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Could not read settings file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse settings file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not load environment file '{path}': {message}")]
    EnvFile { path: String, message: String },
}

#[derive(Error, Debug)]
pub enum SecureEtlError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error(transparent)]
    Notification(#[from] NotificationError),

    #[error("Could not read user input: {0}")]
    Input(#[source] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Storage,
    Notification,
    Input,
}

impl SecureEtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SecureEtlError::Config(_) => ErrorCategory::Configuration,
            SecureEtlError::Transport(_) => ErrorCategory::Network,
            SecureEtlError::Persistence(_) => ErrorCategory::Storage,
            SecureEtlError::Notification(_) => ErrorCategory::Notification,
            SecureEtlError::Input(_) => ErrorCategory::Input,
        }
    }

    /// 行程結束代碼
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Input => 1,
            ErrorCategory::Network => 2,
            ErrorCategory::Storage => 3,
            ErrorCategory::Notification => 4,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SecureEtlError::Config(e) => format!("Configuration problem: {}", e),
            SecureEtlError::Transport(TransportError::InsecureScheme { .. }) => {
                "The data endpoint must use https://".to_string()
            }
            SecureEtlError::Transport(_) => "Fetching data from the remote endpoint failed".to_string(),
            SecureEtlError::Persistence(_) => "Saving data to the database failed".to_string(),
            SecureEtlError::Notification(_) => "Sending the notification failed".to_string(),
            SecureEtlError::Input(_) => "Could not read input from the terminal".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Set DB_HOST, DB_USER, DB_PASSWORD and ADMIN_EMAIL in the environment"
            }
            ErrorCategory::Network => "Check the endpoint URL and network connectivity",
            ErrorCategory::Storage => "Check database credentials and that `mytable` exists",
            ErrorCategory::Notification => "Check that the mail program is installed and on PATH",
            ErrorCategory::Input => "Pass the value with --input instead",
        }
    }
}

pub type Result<T> = std::result::Result<T, SecureEtlError>;

/// 從遠端取得、之後寫入資料庫的原始文字，不做任何解析
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload(String);

impl Payload {
    pub fn new(body: impl Into<String>) -> Self {
        Self(body.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn byte_len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl Notification {
    pub fn new(
        recipient: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            recipient: recipient.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// A SQL statement whose text is fixed at compile time. Values are carried
/// separately in `params` and bound by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub sql: &'static str,
    pub params: Vec<String>,
}

impl Statement {
    pub fn new(sql: &'static str, params: Vec<String>) -> Self {
        Self { sql, params }
    }

    /// Number of `?` placeholders in the template.
    pub fn placeholder_count(&self) -> usize {
        self.sql.matches('?').count()
    }
}

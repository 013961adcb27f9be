//! Email delivery tool backed by the SendGrid v3 API.

use std::time::Duration;

use rig::completion::ToolDefinition;
use rig::tool::Tool;
use serde::Deserialize;
use tracing::debug;

use super::ToolError;

const SENDGRID_URL: &str = "https://api.sendgrid.com/v3/mail/send";
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Deserialize)]
pub struct SendEmailInput {
    /// The subject line of the email.
    pub subject: String,
    /// The HTML body content of the email.
    pub html_body: String,
}

/// Send an HTML email to the configured recipient.
pub struct SendEmailTool {
    api_key: String,
    from_email: String,
    to_email: String,
    http: reqwest::Client,
}

impl SendEmailTool {
    pub fn new(
        api_key: impl Into<String>,
        from_email: impl Into<String>,
        to_email: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            from_email: from_email.into(),
            to_email: to_email.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Build the tool from `SENDGRID_API_KEY`, `SENDGRID_FROM_EMAIL`,
    /// and `SENDGRID_TO_EMAIL`.
    pub fn from_env() -> Result<Self, ToolError> {
        Ok(Self::new(
            super::require_env("SENDGRID_API_KEY")?,
            super::require_env("SENDGRID_FROM_EMAIL")?,
            super::require_env("SENDGRID_TO_EMAIL")?,
        ))
    }
}

impl Tool for SendEmailTool {
    const NAME: &'static str = "send_email";
    type Error = ToolError;
    type Args = SendEmailInput;
    type Output = String;

    async fn definition(&self, _prompt: String) -> ToolDefinition {
        ToolDefinition {
            name: "send_email".into(),
            description: "Send an HTML email to the configured recipient. Provide \
                          the subject line and the full HTML body content."
                .into(),
            parameters: serde_json::json!({
                "type": "object",
                "properties": {
                    "subject": {
                        "type": "string",
                        "description": "The subject line of the email"
                    },
                    "html_body": {
                        "type": "string",
                        "description": "The HTML body content of the email"
                    }
                },
                "required": ["subject", "html_body"]
            }),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        debug!(subject = %args.subject, to = %self.to_email, "sending email");

        let payload = mail_payload(
            &self.from_email,
            &self.to_email,
            &args.subject,
            &args.html_body,
        );
        let response = self
            .http
            .post(SENDGRID_URL)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ToolError::Upstream {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        Ok(format!("Email sent successfully. Subject: '{}'", args.subject))
    }
}

/// Build the SendGrid v3 mail/send request body.
fn mail_payload(from: &str, to: &str, subject: &str, html_body: &str) -> serde_json::Value {
    serde_json::json!({
        "personalizations": [{ "to": [{ "email": to }] }],
        "from": { "email": from },
        "subject": subject,
        "content": [{ "type": "text/html", "value": html_body }]
    })
}

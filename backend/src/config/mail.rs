/// Deployment-side identity of the contact-form email: who it is sent as and
/// where it lands. Request input never overrides these.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub api_key: String,
    pub from: String,
    pub to: String,
}

impl MailConfig {
    pub fn from_env() -> Self {
        MailConfig {
            api_key: std::env::var("RESEND_API_KEY").expect("RESEND_API_KEY must be set"),
            from: std::env::var("CONTACT_FROM")
                .unwrap_or_else(|_| "YeahScene AI <onboarding@resend.dev>".to_string()),
            to: std::env::var("CONTACT_TO").unwrap_or_else(|_| "nireshine@gmail.com".to_string()),
        }
    }
}

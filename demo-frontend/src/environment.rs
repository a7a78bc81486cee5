use std::sync::LazyLock;

/// Build-time configuration. Set `GOOGLE_CLIENT_ID` when running `trunk serve`.
pub static ENVIRONMENT: LazyLock<Environment> = LazyLock::new(|| Environment {
    google_client_id: option_env!("GOOGLE_CLIENT_ID")
        .unwrap_or("your-client-id.apps.googleusercontent.com"),
});

pub struct Environment {
    pub google_client_id: &'static str,
}

/// Provider recorded for every identity asserted by the access proxy
pub static ACCESS_PROVIDER: &str = "cloudflare_access";

/// Identity of the caller as asserted by the access proxy in front of the server
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExternalIdentity {
    pub provider: String,
    pub subject: String,
    pub email: Option<String>,
}

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 4;

pub const LOGIN_PATH: &str = "/api/login";
pub const REGISTER_PATH: &str = "/api/register";

pub mod messages {
    pub const SUBTITLE: &str = "Use a shared account to access your memories.";

    pub const VALIDATION_TITLE: &str = "Validation Error";
    pub const VALIDATION_MESSAGE: &str = "Username must be 3+ chars and password 4+.";

    pub const SUCCESS_TITLE: &str = "Success";
    pub const ERROR_TITLE: &str = "Error";

    /// Shown when a rejection carries no usable `message`.
    pub const GENERIC_FAILURE: &str = "Failed";
    pub const NETWORK_FAILURE: &str = "Network request failed";
    pub const MALFORMED_RESPONSE: &str = "Unexpected response from server";
    pub const CANCELLED: &str = "Request cancelled";
}

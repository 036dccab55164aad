//! Gateway configuration constants.
//!
//! Centralizes hardcoded values for easier configuration and documentation.

/// Production admin API base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://hibiscusefsya.com/admin/api";

/// Write endpoint for contact form submissions (relative to the base URL).
/// Shares a path with the contact read endpoint; the method differs.
pub const CONTACT_SUBMIT_ENDPOINT: &str = "/contact.php";

/// Subject used for the mailto fallback when the form supplies none.
pub const MAILTO_DEFAULT_SUBJECT: &str = "Pesan dari Website";

/// User-facing copy for a submission that could not be delivered.
pub const SUBMIT_FAILURE_MESSAGE: &str = "Gagal mengirim pesan. Silakan coba lagi.";

/// User-facing copy when the backend replies without a message of its own.
pub const SUBMIT_FALLBACK_MESSAGE: &str = "Terjadi kesalahan";

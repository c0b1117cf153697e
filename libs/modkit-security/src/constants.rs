//! Well-known identities used by the security model.

/// Subject ID carried by elevated (system) security contexts.
pub const SYSTEM_SUBJECT_ID: &str = "system";

/// Subject type carried by elevated (system) security contexts.
pub const SYSTEM_SUBJECT_TYPE: &str = "system";

/// Token scope granting unrestricted access.
pub const UNRESTRICTED_SCOPE: &str = "*";

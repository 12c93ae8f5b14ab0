//! Scenario fixture data
//!
//! Named, immutable request payloads and the error-message fragments the
//! remote service returns for each failure category. Fixtures are literal
//! data with no lifecycle: constructors return fresh values so scenarios can
//! never observe mutation from one another.

pub mod create;
pub mod update;

/// Message on a 422 validation failure body
pub const VALIDATION_FAILED_MESSAGE: &str = "Validation Failed";

/// Error code naming the missing/empty field on a 422 body
pub const MISSING_FIELD_CODE: &str = "missing_field";

/// Field named by create/update validation failures
pub const FILES_FIELD: &str = "files";

/// Message on a 401 authentication failure body
pub const BAD_CREDENTIALS_MESSAGE: &str = "Bad credentials";

/// Message on a 404 body
pub const NOT_FOUND_MESSAGE: &str = "Not Found";

//! Command-line argument handling

use crate::error::{CloudSubError, Result};

/// Extract the company token from `argv`.
///
/// Exactly one positional argument is accepted and used verbatim.
pub fn company_arg(args: &[String]) -> Result<&str> {
    match args {
        [_, company] => Ok(company),
        _ => {
            let program = args.first().map(String::as_str).unwrap_or("cloudsub");
            Err(CloudSubError::usage(format!("Usage: {} <company_name>", program)))
        }
    }
}

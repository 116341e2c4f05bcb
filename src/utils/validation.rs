use crate::utils::error::{ListingError, Result};
use url::Host;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Accepts `host:port` where host is a name, an IPv4 address or a bracketed
/// IPv6 address, matching what `TcpListener::bind` resolves.
pub fn validate_bind_address(field_name: &str, addr: &str) -> Result<()> {
    let invalid = |reason: String| ListingError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: addr.to_string(),
        reason,
    };

    if addr.trim().is_empty() {
        return Err(invalid("Bind address cannot be empty".to_string()));
    }

    let (host, port) = addr
        .rsplit_once(':')
        .ok_or_else(|| invalid("Expected host:port".to_string()))?;

    port.parse::<u16>()
        .map_err(|e| invalid(format!("Invalid port '{}': {}", port, e)))?;

    Host::parse(host).map_err(|e| invalid(format!("Invalid host '{}': {}", host, e)))?;

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ListingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

use crate::error::AppError;

pub const MAX_NAME_LENGTH: usize = 20;

/// Trims the requested display name and falls back to the given label
/// ("Guest" for joins, "Host" for session creation) when empty.
pub fn normalize_name(requested: Option<&str>, fallback: &str) -> Result<String, AppError> {
    let name = requested.map(str::trim).unwrap_or("");
    let name = if name.is_empty() { fallback } else { name };

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(AppError::Validation(format!(
            "Name must be at most {} characters",
            MAX_NAME_LENGTH
        )));
    }

    Ok(name.to_string())
}

/// Picks the first free name among "Alice", "Alice 2", "Alice 3", ...
/// against a snapshot of the session's existing names. Terminates because
/// the snapshot is finite and suffixes are unbounded.
pub fn unique_name(existing: &[String], name: &str) -> String {
    if !existing.iter().any(|n| n == name) {
        return name.to_string();
    }

    let mut counter = 2;
    loop {
        let candidate = format!("{} {}", name, counter);
        if !existing.iter().any(|n| n == &candidate) {
            return candidate;
        }
        counter += 1;
    }
}

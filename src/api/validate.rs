//! Field-presence validation gate.
//!
//! Runs before any domain logic or existence check: a request that fails here
//! never reaches a store.

use serde_json::Value;
use thiserror::Error;

/// Presence policy for a request body.
#[derive(Debug, Clone, Copy)]
pub enum FieldPolicy {
    /// Every named field must be present.
    AllRequired(&'static [&'static str]),
    /// At least one of the named fields must be present.
    AtLeastOne(&'static [&'static str]),
}

/// A request body that fails its field policy.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FieldError {
    #[error("Missing required fields: {}", .0.join(", "))]
    Missing(Vec<String>),
    #[error("At least one of {} must be provided", .0.join(", "))]
    NoneOf(Vec<String>),
    #[error("Request body must be a JSON object")]
    NotAnObject,
}

/// Pure decision function over a JSON body and a [`FieldPolicy`].
///
/// A field counts as present when the key exists and its value is not `null`.
/// `AllRequired` failures name every missing field, not just the first.
pub fn validate_fields(policy: FieldPolicy, body: &Value) -> Result<(), FieldError> {
    let map = body.as_object().ok_or(FieldError::NotAnObject)?;
    let present = |name: &str| map.get(name).is_some_and(|v| !v.is_null());

    match policy {
        FieldPolicy::AllRequired(names) => {
            let missing: Vec<String> = names
                .iter()
                .filter(|name| !present(name))
                .map(|name| name.to_string())
                .collect();
            if missing.is_empty() {
                Ok(())
            } else {
                Err(FieldError::Missing(missing))
            }
        }
        FieldPolicy::AtLeastOne(names) => {
            if names.iter().any(|name| present(name)) {
                Ok(())
            } else {
                Err(FieldError::NoneOf(
                    names.iter().map(|name| name.to_string()).collect(),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const CREATE: FieldPolicy =
        FieldPolicy::AllRequired(&["id", "routineId", "activityId", "duration", "count"]);
    const PATCH: FieldPolicy = FieldPolicy::AtLeastOne(&["count", "duration"]);

    #[test]
    fn all_required_passes_with_every_field() {
        let body = json!({
            "id": "a1",
            "routineId": "r1",
            "activityId": "act1",
            "duration": 30,
            "count": 3,
        });
        assert_eq!(validate_fields(CREATE, &body), Ok(()));
    }

    #[test]
    fn all_required_names_every_missing_field() {
        let body = json!({ "id": "a1", "count": 3 });
        assert_eq!(
            validate_fields(CREATE, &body),
            Err(FieldError::Missing(vec![
                "routineId".to_string(),
                "activityId".to_string(),
                "duration".to_string(),
            ]))
        );
    }

    #[test]
    fn null_counts_as_missing() {
        let body = json!({ "count": null, "duration": null });
        assert!(validate_fields(PATCH, &body).is_err());
    }

    #[test]
    fn at_least_one_passes_with_either_field() {
        assert_eq!(validate_fields(PATCH, &json!({ "count": 5 })), Ok(()));
        assert_eq!(validate_fields(PATCH, &json!({ "duration": 45 })), Ok(()));
    }

    #[test]
    fn at_least_one_rejects_empty_body() {
        assert_eq!(
            validate_fields(PATCH, &json!({})),
            Err(FieldError::NoneOf(vec![
                "count".to_string(),
                "duration".to_string(),
            ]))
        );
    }

    #[test]
    fn non_object_body_is_rejected() {
        assert_eq!(
            validate_fields(PATCH, &json!([1, 2, 3])),
            Err(FieldError::NotAnObject)
        );
    }
}

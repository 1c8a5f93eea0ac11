use contacto_models::contact::Submission;
use serde::Deserialize;

/// Raw fields of a form-encoded contact POST. Missing fields default to the
/// empty string so that the contact service reports them through its own
/// validation instead of a framework deserialization error.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl From<ApiContactForm> for Submission {
    fn from(value: ApiContactForm) -> Self {
        Self {
            name: value.name,
            email: value.email,
            message: value.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_fields_default_to_empty() {
        let form: ApiContactForm = serde_json::from_str(r#"{"name": "Ana"}"#).unwrap();
        let submission = Submission::from(form);
        assert_eq!(
            submission,
            Submission {
                name: "Ana".into(),
                email: "".into(),
                message: "".into(),
            }
        );
    }
}

use serde::{Deserialize, Serialize};

/// Payload of the contact / order enquiry form.
///
/// Missing fields deserialize as empty so `validate` reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl ContactSubmission {
    /// Returns the first problem found, worded for display next to the form.
    pub fn validate(&self) -> Result<(), String> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("service", &self.service),
            ("message", &self.message),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(format!("{} is required", field));
            }
        }

        match self.email.trim().split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err("email address is not valid".to_string()),
        }
    }
}

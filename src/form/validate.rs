use crate::form::inputs::FormInputs;
use crate::form::rules;

/// Why a submission was refused. Exactly one reason is reported per submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    /// Username is blank.
    UsernameEmpty,
    /// Password fails the length/character rule.
    PasswordWeak,
    /// Name/email field is not email-shaped.
    EmailInvalid,
    /// Age is blank, non-numeric, or not positive.
    AgeInvalid,
}

impl RejectionReason {
    /// Short notification title.
    pub fn title(self) -> &'static str {
        match self {
            Self::UsernameEmpty => "Invalid Input",
            Self::PasswordWeak => "Invalid Password",
            Self::EmailInvalid => "Invalid Email",
            Self::AgeInvalid => "Invalid Age",
        }
    }

    /// Notification body.
    pub fn message(self) -> &'static str {
        match self {
            Self::UsernameEmpty => "Please enter a username.",
            Self::PasswordWeak => {
                "Password must be at least 8 characters long and contain at least one letter and one number."
            }
            Self::EmailInvalid => "Please enter a valid email address.",
            Self::AgeInvalid => "Please enter a valid age.",
        }
    }
}

/// Outcome of one submit.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ValidationResult {
    /// All rules passed; values are echoed exactly as entered.
    Accepted {
        /// Raw username.
        username: String,
        /// Raw name/email value.
        email: String,
        /// Raw age text.
        age: String,
    },
    /// First failing rule.
    Rejected {
        /// Why.
        reason: RejectionReason,
    },
}

impl ValidationResult {
    /// True for [`ValidationResult::Accepted`].
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Rejection reason, if any.
    pub fn reason(&self) -> Option<RejectionReason> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected { reason } => Some(*reason),
        }
    }

    /// Title and message to show the user.
    pub fn notification_text(&self) -> (String, String) {
        match self {
            Self::Accepted {
                username,
                email,
                age,
            } => (
                "Success".to_owned(),
                format!("Signed in with:\nUsername: {username}\nEmail: {email}\nAge: {age}"),
            ),
            Self::Rejected { reason } => (reason.title().to_owned(), reason.message().to_owned()),
        }
    }
}

/// Check the fields in order (username, password, email, age) and stop at the first failure.
pub fn validate(inputs: &FormInputs) -> ValidationResult {
    let reject = |reason| ValidationResult::Rejected { reason };

    if !rules::username_present(&inputs.username) {
        return reject(RejectionReason::UsernameEmpty);
    }
    if !rules::password_strong(&inputs.password) {
        return reject(RejectionReason::PasswordWeak);
    }
    if !rules::email_shaped(&inputs.name_or_email) {
        return reject(RejectionReason::EmailInvalid);
    }
    if !rules::age_positive(&inputs.age) {
        return reject(RejectionReason::AgeInvalid);
    }

    ValidationResult::Accepted {
        username: inputs.username.clone(),
        email: inputs.name_or_email.clone(),
        age: inputs.age.clone(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/form/validate.rs"]
mod tests;

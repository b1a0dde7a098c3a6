/// One of the four text fields on the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Account name.
    Username,
    /// Secret; never logged.
    Password,
    /// Name or email address; validated as an email.
    NameOrEmail,
    /// Age as typed.
    Age,
}

impl Field {
    /// All fields in on-screen order.
    pub const ALL: [Field; 4] = [
        Field::Username,
        Field::Password,
        Field::NameOrEmail,
        Field::Age,
    ];
}

/// Raw field values exactly as entered. Each change replaces the whole value.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub struct FormInputs {
    /// Username field.
    pub username: String,
    /// Password field.
    pub password: String,
    /// Name/email field.
    pub name_or_email: String,
    /// Age field.
    pub age: String,
}

impl FormInputs {
    /// Build inputs from four raw values.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        name_or_email: impl Into<String>,
        age: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            name_or_email: name_or_email.into(),
            age: age.into(),
        }
    }

    /// Replace the full value of `field`.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Current value of `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Password => &self.password,
            Field::NameOrEmail => &self.name_or_email,
            Field::Age => &self.age,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Username => &mut self.username,
            Field::Password => &mut self.password,
            Field::NameOrEmail => &mut self.name_or_email,
            Field::Age => &mut self.age,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/form/inputs.rs"]
mod tests;

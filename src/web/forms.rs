use serde::Deserialize;

use hotelpress::types::Credentials;

#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    /// Present (any value) when the "remember me" box is ticked
    pub remember_me: Option<String>,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err("Username and password are required");
        }
        Ok(())
    }

    pub fn remember_me(&self) -> bool {
        self.remember_me
            .as_deref()
            .is_some_and(|v| !v.is_empty() && v != "false" && v != "off")
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.trim(), self.password.as_str())
    }
}

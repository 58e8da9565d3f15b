use serde::{ Deserialize, Serialize };
use std::fmt;

/// Studio client as stored in the `clients` table
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::FromRow)]
pub struct Client {
    #[sqlx(rename = "client_id")]
    pub id: i64,
    pub name: String,
    pub telephone: String,
    pub mail: String,
    // Stored as given; hashing belongs to the service layer
    pub password: String,
}

impl Client {
    /// Build a client that has not been persisted yet (id is assigned on create)
    pub fn new(name: &str, telephone: &str, mail: &str, password: &str) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            telephone: telephone.to_string(),
            mail: mail.to_string(),
            password: password.to_string(),
        }
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("telephone", &self.telephone)
            .field("mail", &self.mail)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_password() {
        let client = Client::new("Name", "1234567890", "mail@mail.ru", "secret-123");
        let rendered = format!("{:?}", client);

        assert!(rendered.contains("1234567890"));
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("secret-123"));
    }

    #[test]
    fn new_client_has_no_id() {
        let client = Client::new("Name", "1234567890", "mail@mail.ru", "123");
        assert_eq!(client.id, 0);
        assert_eq!(client.mail, "mail@mail.ru");
    }
}

use serde::{Deserialize, Serialize};

/// A person record as returned by the people endpoint.
///
/// Only the fields the widget displays or matches on are kept; anything else
/// in the payload (addresses, company, website) is ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
}

impl Person {
    /// `mailto:` link for the person's email address
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Decode a JSON array of people
pub fn parse_people(json: &str) -> serde_json::Result<Vec<Person>> {
    serde_json::from_str(json)
}

#[cfg(test)]
pub(crate) fn person(id: u64, name: &str, username: &str) -> Person {
    Person {
        id,
        name: name.to_string(),
        username: username.to_string(),
        email: format!("{}@example.com", username.to_lowercase()),
        phone: format!("555-010{id}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_fields_ignored() {
        let people = parse_people(
            r#"[{
                "id": 1,
                "name": "Leanne Graham",
                "username": "Bret",
                "email": "Sincere@april.biz",
                "address": { "street": "Kulas Light", "city": "Gwenborough" },
                "phone": "1-770-736-8031 x56442",
                "website": "hildegard.org"
            }]"#,
        )
        .unwrap();
        assert_eq!(people.len(), 1);
        assert_eq!(people[0].id, 1);
        assert_eq!(people[0].username, "Bret");
        assert_eq!(people[0].mailto(), "mailto:Sincere@april.biz");
    }

    #[test]
    fn test_missing_field_is_error() {
        assert!(parse_people(r#"[{"id": 1, "name": "Ann"}]"#).is_err());
    }

    #[test]
    fn test_object_payload_is_error() {
        assert!(parse_people(r#"{"users": []}"#).is_err());
    }
}

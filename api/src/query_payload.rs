use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize)]
pub struct QueryPayload {
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
    #[serde(default)]
    pub bot: bool, // set by the chat platform for messages the bot itself sent
}

impl QueryPayload {
    /// Bot echoes and blank messages are acknowledged without a lookup.
    pub fn should_ignore(&self) -> bool {
        self.bot || self.text.trim().is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct TokenData {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

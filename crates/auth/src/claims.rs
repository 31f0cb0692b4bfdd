use arcade_core::TOKEN_DURATION;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Claims {
    pub usr: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(username: String) -> Self {
        let now = arcade_core::now();
        Self {
            usr: username,
            iat: now,
            exp: now + TOKEN_DURATION.as_secs() as i64,
        }
    }
    pub fn expired(&self) -> bool {
        self.exp < arcade_core::now()
    }
    pub fn username(&self) -> &str {
        &self.usr
    }
}

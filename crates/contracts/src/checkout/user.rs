use serde::{Deserialize, Serialize};

/// The demo account pool is fixed: ids 1 through 5.
pub const MIN_USER_ID: i64 = 1;
pub const MAX_USER_ID: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserIdError(pub i64);

impl std::fmt::Display for UserIdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Please select a valid user ({MIN_USER_ID}-{MAX_USER_ID})"
        )
    }
}

/// Validated user identifier for the checkout handoff and confirm request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct UserId(i64);

impl UserId {
    pub fn new(value: i64) -> Result<Self, UserIdError> {
        if (MIN_USER_ID..=MAX_USER_ID).contains(&value) {
            Ok(Self(value))
        } else {
            Err(UserIdError(value))
        }
    }

    /// Parse the string form used in query parameters and session storage.
    pub fn parse(raw: &str) -> Result<Self, UserIdError> {
        let value = raw.trim().parse::<i64>().map_err(|_| UserIdError(0))?;
        Self::new(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for UserId {
    type Error = UserIdError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> i64 {
        id.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_enumerated_range() {
        for v in 1..=5 {
            assert!(UserId::new(v).is_ok());
        }
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        assert!(UserId::new(0).is_err());
        assert!(UserId::new(6).is_err());
        assert!(UserId::new(-3).is_err());
        assert!(UserId::parse("abc").is_err());
        assert!(UserId::parse("").is_err());
        assert_eq!(UserId::parse(" 3 ").unwrap().value(), 3);
    }

    #[test]
    fn serde_enforces_the_range() {
        let id: UserId = serde_json::from_str("3").unwrap();
        assert_eq!(id.value(), 3);
        assert!(serde_json::from_str::<UserId>("9").is_err());
        assert_eq!(serde_json::to_string(&id).unwrap(), "3");
    }
}

use serde::{Deserialize, Serialize};

/// Integer or string. `Key::Int(1)` and `Key::Str("1")` are different keys.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl Key {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Int(_) => None,
            Self::Str(s) => Some(s),
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        match self {
            Self::Int(i) => write!(f, "{}", i),
            Self::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Key {
    fn from(i: i32) -> Self {
        Self::Int(i.into())
    }
}

/// Indexes past `i64::MAX` all become `i64::MAX`.
impl From<usize> for Key {
    fn from(i: usize) -> Self {
        Self::Int(i64::try_from(i).unwrap_or(i64::MAX))
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Self::Str(s.into())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&Key> for Key {
    fn from(k: &Key) -> Self {
        k.clone()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn strict_equality() {
        assert_eq!(Key::from(0), Key::Int(0));
        assert_eq!(Key::from("0"), Key::Str("0".into()));
        assert_ne!(Key::from(0), Key::from("0"));
    }

    #[test]
    fn from_usize() {
        assert_eq!(Key::from(7usize), Key::Int(7));
        assert_eq!(Key::from(usize::MAX), Key::Int(i64::MAX));
    }

    #[test]
    fn accessors() {
        assert_eq!(Key::from(3).as_int(), Some(3));
        assert_eq!(Key::from(3).as_str(), None);
        assert_eq!(Key::from("x").as_str(), Some("x"));
        assert_eq!(Key::from("x").as_int(), None);
    }

    #[test]
    fn json_serialize() {
        assert_eq!(
            serde_json::to_string(&[Key::from(1), Key::from("b")]).expect("should serialize"),
            "[1,\"b\"]"
        );
    }

    #[test]
    fn json_deserialize() {
        let keys: Vec<Key> = serde_json::from_str("[\"a\",2]").expect("should deserialize");
        assert_eq!(keys, vec![Key::from("a"), Key::from(2)]);
    }
}

//! Selectable "falsy" values.
//!
//! What counts as "not set" depends on who's asking. Sometimes only a
//! missing value is, sometimes `false` or an empty string or a zero too.
//! [`Nots`] is the selection, and [`Falsy`] is how a type answers whether a
//! value of it falls into that selection.
//!
//! ```
//! use fnkit::falsy::{Falsy, Not, Nots};
//! use serde_json::json;
//!
//! let nots: Nots = "null,empty".parse().unwrap();
//! assert_eq!(nots, Nots::MAP.with(Not::Empty));
//! assert!(json!("").is_not(nots));
//! assert!(!json!(0).is_not(nots));
//! ```

use indexmap::IndexMap;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// A category of falsy values.
#[derive(Debug, PartialEq, Eq, Clone, Copy, EnumIter, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Not {
    /// A missing value: `None`, JSON `null`.
    Null,
    /// The boolean `false`.
    False,
    /// An empty string, list or map.
    Empty,
    /// Integer or float zero.
    Zero,
}

impl Not {
    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// A set of [`Not`] categories.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct Nots(u8);

impl Nots {
    /// Nothing is falsy.
    pub const NONE: Nots = Nots(0);

    /// The selection `map` uses unless told otherwise: only null.
    pub const MAP: Nots = Nots(Not::Null.bit());

    /// The selection `when` uses unless told otherwise: null and false.
    pub const WHEN: Nots = Nots(Not::Null.bit() | Not::False.bit());

    /// Every category.
    pub const ALL: Nots =
        Nots(Not::Null.bit() | Not::False.bit() | Not::Empty.bit() | Not::Zero.bit());

    pub const fn with(self, not: Not) -> Self {
        Self(self.0 | not.bit())
    }

    pub const fn without(self, not: Not) -> Self {
        Self(self.0 & !not.bit())
    }

    pub const fn contains(&self, not: Not) -> bool {
        self.0 & not.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// The selected categories, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Not> + '_ {
        Not::iter().filter(move |not| self.contains(*not))
    }
}

impl FromIterator<Not> for Nots {
    fn from_iter<I: IntoIterator<Item = Not>>(iter: I) -> Self {
        iter.into_iter().fold(Nots::NONE, Nots::with)
    }
}

/// Parses a comma separated list like `"null, false"`. The empty string is
/// [`Nots::NONE`].
impl FromStr for Nots {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(Not::from_str)
            .collect()
    }
}

impl std::fmt::Display for Nots {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        let names: Vec<String> = self.iter().map(|not| not.to_string()).collect();
        write!(f, "{}", names.join(","))
    }
}

/// Values that can be checked against a [`Nots`] selection.
pub trait Falsy {
    /// Whether this value belongs to one of the selected categories.
    fn is_not(&self, nots: Nots) -> bool;
}

impl<T: Falsy + ?Sized> Falsy for &T {
    fn is_not(&self, nots: Nots) -> bool {
        (**self).is_not(nots)
    }
}

impl<T: Falsy> Falsy for Option<T> {
    fn is_not(&self, nots: Nots) -> bool {
        match self {
            None => nots.contains(Not::Null),
            Some(v) => v.is_not(nots),
        }
    }
}

impl Falsy for () {
    fn is_not(&self, nots: Nots) -> bool {
        nots.contains(Not::Null)
    }
}

impl Falsy for bool {
    fn is_not(&self, nots: Nots) -> bool {
        !*self && nots.contains(Not::False)
    }
}

impl Falsy for str {
    fn is_not(&self, nots: Nots) -> bool {
        self.is_empty() && nots.contains(Not::Empty)
    }
}

impl Falsy for String {
    fn is_not(&self, nots: Nots) -> bool {
        self.as_str().is_not(nots)
    }
}

impl<T> Falsy for [T] {
    fn is_not(&self, nots: Nots) -> bool {
        self.is_empty() && nots.contains(Not::Empty)
    }
}

impl<T> Falsy for Vec<T> {
    fn is_not(&self, nots: Nots) -> bool {
        self.as_slice().is_not(nots)
    }
}

impl<K, V> Falsy for IndexMap<K, V> {
    fn is_not(&self, nots: Nots) -> bool {
        self.is_empty() && nots.contains(Not::Empty)
    }
}

impl<K, V> Falsy for HashMap<K, V> {
    fn is_not(&self, nots: Nots) -> bool {
        self.is_empty() && nots.contains(Not::Empty)
    }
}

impl<K, V> Falsy for BTreeMap<K, V> {
    fn is_not(&self, nots: Nots) -> bool {
        self.is_empty() && nots.contains(Not::Empty)
    }
}

macro_rules! falsy_number {
    ( $zero:expr => $( $t:ty ),* ) => {
        $(
            impl Falsy for $t {
                fn is_not(&self, nots: Nots) -> bool {
                    *self == $zero && nots.contains(Not::Zero)
                }
            }
        )*
    };
}

falsy_number!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
falsy_number!(0.0 => f32, f64);

impl Falsy for Value {
    fn is_not(&self, nots: Nots) -> bool {
        match self {
            Value::Null => nots.contains(Not::Null),
            Value::Bool(b) => b.is_not(nots),
            Value::String(s) => s.is_not(nots),
            Value::Array(a) => a.is_not(nots),
            Value::Object(o) => o.is_empty() && nots.contains(Not::Empty),
            Value::Number(n) => n.as_f64() == Some(0.0) && nots.contains(Not::Zero),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn presets() {
        assert_eq!(Nots::MAP.iter().collect::<Vec<_>>(), vec![Not::Null]);
        assert_eq!(Nots::WHEN.iter().collect::<Vec<_>>(), vec![Not::Null, Not::False]);
        assert_eq!(Nots::ALL.iter().count(), 4);
        assert!(Nots::NONE.is_empty());
        assert_eq!(Nots::default(), Nots::NONE);
    }

    #[test]
    fn with_without() {
        let nots = Nots::NONE.with(Not::Zero).with(Not::Empty);
        assert!(nots.contains(Not::Zero));
        assert!(nots.contains(Not::Empty));
        assert!(!nots.contains(Not::Null));
        assert_eq!(nots.without(Not::Zero), Nots::NONE.with(Not::Empty));
    }

    #[test]
    fn parse() {
        assert_eq!("".parse::<Nots>(), Ok(Nots::NONE));
        assert_eq!("null".parse::<Nots>(), Ok(Nots::MAP));
        assert_eq!(" null , false ".parse::<Nots>(), Ok(Nots::WHEN));
        assert_eq!("null,false,empty,zero".parse::<Nots>(), Ok(Nots::ALL));
        assert!("null,nope".parse::<Nots>().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Not::False.to_string(), "false");
        assert_eq!(Nots::WHEN.to_string(), "null,false");
        assert_eq!(Nots::NONE.to_string(), "");
        assert_eq!(Nots::ALL.to_string().parse::<Nots>(), Ok(Nots::ALL));
    }

    #[test]
    fn json_values() {
        let cases = [
            (json!(null), Not::Null),
            (json!(false), Not::False),
            (json!(""), Not::Empty),
            (json!([]), Not::Empty),
            (json!({}), Not::Empty),
            (json!(0), Not::Zero),
            (json!(0.0), Not::Zero),
        ];
        for (value, not) in cases {
            assert!(value.is_not(Nots::NONE.with(not)), "{} @ {}", value, not);
            assert!(!value.is_not(Nots::ALL.without(not)), "{} @ all but {}", value, not);
        }
        for value in [json!(true), json!("0"), json!([0]), json!(1), json!(-0.5)] {
            assert!(!value.is_not(Nots::ALL), "{}", value);
        }
    }

    #[test]
    fn rust_values() {
        assert!(None::<i32>.is_not(Nots::MAP));
        assert!(!Some(0).is_not(Nots::MAP));
        assert!(Some(0).is_not(Nots::NONE.with(Not::Zero)));
        assert!(false.is_not(Nots::WHEN));
        assert!(!true.is_not(Nots::ALL));
        assert!("".is_not(Nots::NONE.with(Not::Empty)));
        assert!(!"".is_not(Nots::WHEN));
        assert!(Vec::<u8>::new().is_not(Nots::ALL));
        assert!(0.0f64.is_not(Nots::ALL));
        assert!(0u8.is_not(Nots::ALL));
        assert!(().is_not(Nots::MAP));
    }
}

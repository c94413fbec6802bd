//! Thread a value through a chain of calls.
//!
//! A [`Pipe`] holds one value and replaces it with the result of every call
//! made on it. Plain functions and closures go through [`Pipe::then`].
//! Functions with an [`Args`] parameter go through [`Pipe::call`], where
//! the value takes the place of the first placeholder, or comes last if
//! there's no placeholder.
//!
//! ```
//! use fnkit::args;
//! use fnkit::partial::Args;
//! use fnkit::pipe::Pipe;
//! use serde_json::{json, Value};
//!
//! fn split(args: Args<Value>) -> fnkit::Result<Value> {
//!     let [sep, text] = args.bind(["sep", "text"])?;
//!     let (sep, text) = (sep.as_str().unwrap_or(","), text.as_str().unwrap_or(""));
//!     Ok(text.split(sep).collect::<Vec<_>>().into())
//! }
//!
//! let year = Pipe::new("2025-01-01")
//!     .then(Value::from)
//!     .call(split, args!["-", _])?
//!     .get(0)?
//!     .value;
//! assert_eq!(year, json!("2025"));
//! # Ok::<(), fnkit::Error>(())
//! ```

use crate::access::{Assign, Lookup};
use crate::error::{Error, Result};
use crate::logger::Logger;
use crate::partial::{Arg, Args};
use std::io::Write;

#[derive(Debug, PartialEq, Clone)]
pub struct Pipe<T> {
    pub value: T,
}

impl<T> Pipe<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    /// Replace the value with `f(value)`.
    pub fn then<U, F>(self, f: F) -> Pipe<U>
    where
        F: FnOnce(T) -> U,
    {
        Pipe::new(f(self.value))
    }

    /// Replace the value with `f(value)`, or stop at the first error.
    pub fn try_then<U, E, F>(self, f: F) -> std::result::Result<Pipe<U>, E>
    where
        F: FnOnce(T) -> std::result::Result<U, E>,
    {
        f(self.value).map(Pipe::new)
    }

    /// Call `f` with `args`, where the value fills the first placeholder.
    ///
    /// Only the first one: any other placeholder goes to `f` unfilled, which
    /// fails with [`Error::UnexpectedPlaceholder`]. Without a placeholder,
    /// the value becomes the last positional argument.
    pub fn call<U, F>(self, f: F, mut args: Vec<Arg<T>>) -> Result<Pipe<U>>
    where
        F: FnOnce(Args<T>) -> Result<U>,
    {
        match args.iter().position(Arg::is_placeholder) {
            Some(i) => args[i] = Arg::Positional(self.value),
            None => args.push(Arg::Positional(self.value)),
        }
        f(Args::try_from(args)?).map(Pipe::new)
    }

    /// Build a new type from the value.
    pub fn construct<U: From<T>>(self) -> Pipe<U> {
        Pipe::new(U::from(self.value))
    }

    /// Replace the value with its element at `key`.
    pub fn get<K>(self, key: K) -> Result<Pipe<<T as Lookup<K>>::Output>>
    where
        T: Lookup<K>,
    {
        self.value.lookup(key).map(Pipe::new)
    }

    /// Set the element at `key` of the value.
    pub fn set<K, V>(mut self, key: K, v: V) -> Result<Self>
    where
        T: Assign<K, V>,
    {
        self.value.assign(key, v)?;
        Ok(self)
    }

    /// Log the value, under a label, to the logger's step channel.
    pub fn trace<OUT, ERR>(self, log: &mut Logger<OUT, ERR>, label: &str) -> std::io::Result<Self>
    where
        T: std::fmt::Debug,
        OUT: Write,
        ERR: Write,
    {
        log.trace(label, &self.value)?;
        Ok(self)
    }
}

impl<T> From<T> for Pipe<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Pipe<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::result::Result<(), std::fmt::Error> {
        std::fmt::Display::fmt(&self.value, f)
    }
}

impl<T> Pipe<Result<T>> {
    /// Turn a pipe over a `Result` into a `Result` of a pipe.
    pub fn transpose(self) -> std::result::Result<Pipe<T>, Error> {
        self.value.map(Pipe::new)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::args;
    use crate::key::Key;
    use crate::logger::Policy;
    use indoc::indoc;
    use serde_json::{json, Value};
    use std::str::FromStr;

    /// Splits `string` on `separator`, into at most `limit` pieces.
    fn explode(args: Args<Value>) -> Result<Value> {
        let [separator, string, limit] = args.bind(["separator", "string", "limit"])?;
        let separator = separator.as_str().unwrap_or_default();
        let string = string.as_str().unwrap_or_default();
        let limit = limit.as_u64().unwrap_or(u64::MAX) as usize;
        Ok(string.splitn(limit, separator).collect::<Vec<_>>().into())
    }

    #[derive(Debug, PartialEq)]
    struct Stamp {
        date: [u32; 3],
        time: [u32; 3],
    }

    impl FromStr for Stamp {
        type Err = String;

        fn from_str(s: &str) -> std::result::Result<Self, String> {
            let nums = |part: &str, sep: char| -> std::result::Result<[u32; 3], String> {
                let parsed: Vec<u32> = part
                    .split(sep)
                    .map(|n| n.parse().map_err(|_| format!("bad number {:?}", n)))
                    .collect::<std::result::Result<_, _>>()?;
                parsed.try_into().map_err(|_| format!("bad part {:?}", part))
            };
            let (date, time) = s.split_once('T').ok_or(format!("no T in {:?}", s))?;
            Ok(Stamp {
                date: nums(date, '-')?,
                time: nums(time, ':')?,
            })
        }
    }

    impl Stamp {
        fn format_date(&self, sep: &str) -> String {
            let [y, m, d] = self.date;
            format!("{:04}{}{:02}{}{:02}", y, sep, m, sep, d)
        }
    }

    #[test]
    fn chain() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let pipe = Pipe::new("2025-01-01t00:00:00".to_string());
        assert_eq!(pipe.value, "2025-01-01t00:00:00");
        let pipe = pipe.then(|s| s.to_uppercase());
        assert_eq!(pipe.value, "2025-01-01T00:00:00");
        let pipe = pipe.try_then(|s| s.parse::<Stamp>())?;
        assert_eq!(pipe.value.time, [0, 0, 0]);
        let pipe = pipe.then(|stamp| stamp.format_date("_"));
        assert_eq!(pipe.value, "2025_01_01");
        let pipe = pipe.then(Value::from).call(explode, args!["_", _, 2])?;
        assert_eq!(pipe.value, json!(["2025", "01_01"]));
        let pipe = pipe.get(0)?;
        assert_eq!(pipe.value, json!("2025"));
        let pipe = pipe.then(|v| v.as_str().and_then(|s| s.parse::<i64>().ok()));
        assert_eq!(pipe.value, Some(2025));
        let pipe = pipe.then(|x| x.map(|x| x + 1));
        assert_eq!(pipe.value, Some(2026));
        Ok(())
    }

    #[test]
    fn call_appends_without_placeholder() -> Result<()> {
        let list = |args: Args<i64>| -> Result<Vec<i64>> { Ok(args.positional().to_vec()) };
        assert_eq!(Pipe::new(3).call(list, args![1, 2])?.value, vec![1, 2, 3]);
        assert_eq!(Pipe::new(3).call(list, args![1, _, 2])?.value, vec![1, 3, 2]);
        assert_eq!(Pipe::new(3).call(list, args![])?.value, vec![3]);
        Ok(())
    }

    #[test]
    fn call_fills_only_first_placeholder() {
        let list = |args: Args<i64>| -> Result<Vec<i64>> { Ok(args.positional().to_vec()) };
        assert_eq!(
            Pipe::new(3).call(list, args![_, _]),
            Err(Error::UnexpectedPlaceholder)
        );
    }

    #[test]
    fn call_after_named() {
        let list = |args: Args<i64>| -> Result<usize> { Ok(args.len()) };
        assert_eq!(
            Pipe::new(3).call(list, args![a = 1]),
            Err(Error::PositionalAfterNamed)
        );
        assert_eq!(Pipe::new(3).call(list, args![_, a = 1]).map(Pipe::into_inner), Ok(2));
    }

    #[test]
    fn construct() {
        let pipe: Pipe<i64> = Pipe::new(7i32).construct();
        assert_eq!(pipe.value, 7i64);
        let pipe: Pipe<Key> = Pipe::new("k").construct();
        assert_eq!(pipe.value, Key::from("k"));
    }

    #[test]
    fn get_table() {
        let cases = [
            (json!({}), Key::from("one"), Err(Error::MissingKey("one".into()))),
            (json!({"one": 1}), Key::from("one"), Ok(json!(1))),
            (json!([]), Key::from("one"), Err(Error::MissingKey("one".into()))),
            (json!({"1": "one"}), Key::from(1), Ok(json!("one"))),
            (json!([null, "one"]), Key::from(1), Ok(json!("one"))),
            (json!(42), Key::from(0), Err(Error::NotAContainer("a number"))),
        ];
        for (value, key, expected) in cases {
            let got = Pipe::new(value.clone()).get(key).map(Pipe::into_inner);
            assert_eq!(got, expected, "{}", value);
        }
    }

    #[test]
    fn set_table() -> Result<()> {
        let object = Pipe::new(json!({"v": 1})).set("v", 2)?.get("v")?;
        assert_eq!(object.value, json!(2));
        let array = Pipe::new(json!([1])).set(0, 2)?.get(0)?;
        assert_eq!(array.value, json!(2));
        let list = Pipe::new(vec![1]).set(0, 2)?.get(0)?;
        assert_eq!(list.value, 2);
        Ok(())
    }

    #[test]
    fn display() {
        let v = "a string";
        assert_eq!(Pipe::new(v).to_string(), v);
        assert_eq!(format!("{:>5}", Pipe::new(42)), "   42");
    }

    #[test]
    fn transpose() {
        let ok: Pipe<Result<i32>> = Pipe::new(Ok(1));
        assert_eq!(ok.transpose(), Ok(Pipe::new(1)));
        let err: Pipe<Result<i32>> = Pipe::new(Err(Error::EmptyReduce));
        assert_eq!(err.transpose(), Err(Error::EmptyReduce));
    }

    #[test]
    fn trace() -> std::io::Result<()> {
        let mut stdout: Vec<u8> = vec![];
        let mut stderr: Vec<u8> = vec![];
        let mut log = Logger::new(&mut stdout, &mut stderr);
        log.pol.step = Policy::Stdout;

        let value = Pipe::new("a,b")
            .trace(&mut log, "input")?
            .then(|s| s.split(',').collect::<Vec<_>>())
            .trace(&mut log, "split")?
            .get(1)?
            .into_inner();
        assert_eq!(value, "b");
        assert_eq!(
            String::from_utf8(stdout).unwrap(),
            indoc! {r#"
                --- input ---
                "a,b"
                --- split ---
                ["a", "b"]
            "#}
        );
        assert!(stderr.is_empty());
        Ok(())
    }
}

use crate::key::Key;

/// Ways a helper can be misused.
#[derive(Debug, PartialEq, Clone)]
pub enum Error {
    /// `reduce` got nothing to reduce and had no value to fall back on.
    EmptyReduce,

    /// `push` onto a container whose largest integer key is `i64::MAX`.
    NextKeyOccupied,

    /// A placeholder had no call-time positional argument left to take.
    MissingPlaceholderArg { position: usize },

    /// A positional argument showed up after a named one.
    PositionalAfterNamed,

    /// The same named argument was given twice.
    DuplicateNamed(String),

    /// A named argument matched no parameter.
    UnknownNamed(String),

    /// A named argument targets a parameter that was already filled positionally.
    NamedOverwritesPositional(String),

    /// A parameter got no value at all.
    MissingArg(String),

    /// More positional arguments than parameters.
    TooManyArgs { expected: usize, given: usize },

    /// A placeholder made it all the way to a function that can't take one.
    UnexpectedPlaceholder,

    /// Lookup of a key that isn't there.
    MissingKey(Key),

    /// Lookup or assignment into something that holds no elements.
    NotAContainer(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::result::Result<(), std::fmt::Error> {
        match self {
            Error::EmptyReduce => write!(f, "no elements and no initial value"),
            Error::NextKeyOccupied => {
                write!(f, "cannot add element, the next key is already occupied")
            }
            Error::MissingPlaceholderArg { position } => {
                write!(f, "no argument left for placeholder at position {}", position)
            }
            Error::PositionalAfterNamed => {
                write!(f, "cannot use positional argument after named argument")
            }
            Error::DuplicateNamed(name) => write!(f, "named argument {:?} given twice", name),
            Error::UnknownNamed(name) => write!(f, "unknown named argument {:?}", name),
            Error::NamedOverwritesPositional(name) => {
                write!(f, "named argument {:?} overwrites previous argument", name)
            }
            Error::MissingArg(name) => write!(f, "missing argument {:?}", name),
            Error::TooManyArgs { expected, given } => write!(
                f,
                "given {} positional arguments, but only {} expected",
                given, expected
            ),
            Error::UnexpectedPlaceholder => write!(f, "placeholder passed where a value was expected"),
            Error::MissingKey(key) => write!(f, "no element with key {}", key),
            Error::NotAContainer(kind) => write!(f, "cannot index into {}", kind),
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for std::io::Error {
    fn from(e: Error) -> Self {
        Self::other(e)
    }
}

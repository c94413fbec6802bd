//! Partial application, with placeholders for arguments that come later.
//!
//! Functions that take part in this have a single `Args<T>` parameter: an
//! ordered list of positional arguments followed by named ones. Binding a
//! few of those up front gives a [`Partial`], and calling that fills the
//! placeholders with the call-time positional arguments, in order, and
//! appends whatever is left over.
//!
//! ```
//! use fnkit::args;
//! use fnkit::partial::{partial, Args};
//!
//! let list = |args: Args<i64>| -> fnkit::Result<String> {
//!     let strs: Vec<String> = args.positional().iter().map(|v| v.to_string()).collect();
//!     Ok(strs.join(","))
//! };
//!
//! let p = partial(list, args![1, _, 3, _, 5]);
//! assert_eq!(p.call(args![2, 4, 6]), Ok("1,2,3,4,5,6".into()));
//! ```

use crate::error::{Error, Result};

/// One argument in a call.
#[derive(Debug, PartialEq, Clone)]
pub enum Arg<T> {
    Positional(T),
    Named(String, T),

    /// Stands in for a positional argument that's supplied later.
    Placeholder,
}

impl<T> Arg<T> {
    pub fn named(name: impl Into<String>, value: impl Into<T>) -> Self {
        Self::Named(name.into(), value.into())
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }
}

/// Build a `Vec<Arg<T>>`: `args![1, _, name = "x"]`.
///
/// `_` is a placeholder, `name = value` a named argument, and anything else
/// a positional one. Values go through `Into`.
#[macro_export]
macro_rules! args {
    (@push $args:ident; ) => {};
    (@push $args:ident; _ $(, $($rest:tt)*)?) => {
        $args.push($crate::partial::Arg::Placeholder);
        $crate::args!(@push $args; $($($rest)*)?);
    };
    (@push $args:ident; $name:ident = $v:expr $(, $($rest:tt)*)?) => {
        $args.push($crate::partial::Arg::Named(
            ::std::string::String::from(stringify!($name)),
            ::std::convert::Into::into($v),
        ));
        $crate::args!(@push $args; $($($rest)*)?);
    };
    (@push $args:ident; $v:expr $(, $($rest:tt)*)?) => {
        $args.push($crate::partial::Arg::Positional(::std::convert::Into::into($v)));
        $crate::args!(@push $args; $($($rest)*)?);
    };
    () => {
        ::std::vec::Vec::<$crate::partial::Arg<_>>::new()
    };
    ( $($tt:tt)+ ) => {{
        let mut args = ::std::vec::Vec::new();
        $crate::args!(@push args; $($tt)+);
        args
    }};
}

/// The arguments a function actually receives.
///
/// Positional arguments always come before named ones, and a name shows up
/// at most once. Both rules are checked while building.
#[derive(Debug, PartialEq, Clone)]
pub struct Args<T> {
    positional: Vec<T>,
    named: Vec<(String, T)>,
}

impl<T> Args<T> {
    pub fn new() -> Self {
        Self {
            positional: vec![],
            named: vec![],
        }
    }

    /// Append a positional argument.
    pub fn push(&mut self, value: T) -> Result<()> {
        if !self.named.is_empty() {
            return Err(Error::PositionalAfterNamed);
        }
        self.positional.push(value);
        Ok(())
    }

    /// Append a named argument.
    pub fn push_named(&mut self, name: impl Into<String>, value: T) -> Result<()> {
        let name = name.into();
        if self.named.iter().any(|(n, _)| *n == name) {
            return Err(Error::DuplicateNamed(name));
        }
        self.named.push((name, value));
        Ok(())
    }

    /// Append any [`Arg`], except a placeholder.
    pub fn push_arg(&mut self, arg: Arg<T>) -> Result<()> {
        match arg {
            Arg::Positional(v) => self.push(v),
            Arg::Named(name, v) => self.push_named(name, v),
            Arg::Placeholder => Err(Error::UnexpectedPlaceholder),
        }
    }

    pub fn positional(&self) -> &[T] {
        &self.positional
    }

    pub fn named(&self) -> &[(String, T)] {
        &self.named
    }

    pub fn len(&self) -> usize {
        self.positional.len() + self.named.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Match the arguments up with parameter names.
    ///
    /// Positional arguments fill parameters from the left, then named ones
    /// go where their name says. Every parameter has to end up with exactly
    /// one value.
    pub fn bind<const N: usize>(self, params: [&str; N]) -> Result<[T; N]> {
        let Args { positional, named } = self;
        if positional.len() > N {
            return Err(Error::TooManyArgs {
                expected: N,
                given: positional.len(),
            });
        }

        let mut slots: Vec<Option<T>> = positional.into_iter().map(Some).collect();
        slots.resize_with(N, || None);
        for (name, value) in named {
            let i = params
                .iter()
                .position(|p| *p == name)
                .ok_or_else(|| Error::UnknownNamed(name.clone()))?;
            if slots[i].is_some() {
                return Err(Error::NamedOverwritesPositional(name));
            }
            slots[i] = Some(value);
        }

        let values = slots
            .into_iter()
            .zip(params)
            .map(|(slot, param)| slot.ok_or_else(|| Error::MissingArg(param.into())))
            .collect::<Result<Vec<T>>>()?;
        values.try_into().map_err(|v: Vec<T>| Error::TooManyArgs {
            expected: N,
            given: v.len(),
        })
    }
}

impl<T> Default for Args<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TryFrom<Vec<Arg<T>>> for Args<T> {
    type Error = Error;

    fn try_from(args: Vec<Arg<T>>) -> Result<Self> {
        let mut out = Args::new();
        for arg in args {
            out.push_arg(arg)?;
        }
        Ok(out)
    }
}

/// A function with some of its arguments already bound.
pub struct Partial<F, T> {
    f: F,
    bound: Vec<Arg<T>>,
}

/// Bind `bound` to `f`. Nothing is checked until the first call.
pub fn partial<F, T, R>(f: F, bound: Vec<Arg<T>>) -> Partial<F, T>
where
    F: Fn(Args<T>) -> Result<R>,
    T: Clone,
{
    Partial { f, bound }
}

impl<F, T, R> Partial<F, T>
where
    F: Fn(Args<T>) -> Result<R>,
    T: Clone,
{
    /// Call with the remaining arguments.
    ///
    /// Each placeholder takes the next call-time positional argument. The
    /// positional ones that are left get appended, then the named ones.
    pub fn call(&self, args: Vec<Arg<T>>) -> Result<R> {
        let Args { positional, named } = Args::try_from(args)?;
        let mut positional = positional.into_iter();

        let mut full = Args::new();
        for (position, arg) in self.bound.iter().enumerate() {
            match arg {
                Arg::Placeholder => {
                    let v = positional
                        .next()
                        .ok_or(Error::MissingPlaceholderArg { position })?;
                    full.push(v)?;
                }
                Arg::Positional(v) => full.push(v.clone())?,
                Arg::Named(name, v) => full.push_named(name.clone(), v.clone())?,
            }
        }
        for v in positional {
            full.push(v)?;
        }
        for (name, v) in named {
            full.push_named(name, v)?;
        }
        (self.f)(full)
    }

    /// The bound arguments, placeholders included.
    pub fn bound(&self) -> &[Arg<T>] {
        &self.bound
    }

    /// Turn this into a plain closure.
    pub fn into_fn(self) -> impl Fn(Vec<Arg<T>>) -> Result<R> {
        move |args| self.call(args)
    }
}

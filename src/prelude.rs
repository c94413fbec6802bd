pub use crate::access::{Assign, Lookup};
pub use crate::arr::{
    find, find_by, find_key_by, first, fold, kvjoin, kvjoin_with, pick, push, reduce, Arr,
    Initial, JoinSettings,
};
pub use crate::error::{Error, Result};
pub use crate::falsy::{Falsy, Not, Nots};
pub use crate::key::Key;
pub use crate::logger::{Logger, Policy};
pub use crate::partial::{partial, Arg, Args, Partial};
pub use crate::pipe::Pipe;
pub use crate::text::{trim_prefix, trim_suffix};
pub use crate::util::{
    identity, map, map_nots, tree_path, tree_path_while, when, when_nots, MapOptions,
};
pub use crate::with::With;
pub use crate::{args, arr};

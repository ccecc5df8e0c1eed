//! Pure data structures for the movie catalog rows.
//!
//! Every row carries a typed id. Identity strings (actor and director names) are not
//! unique, so anything that needs to tell two rows apart uses the id.

macro_rules! row_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }
    };
}

pub(crate) use row_id;

pub mod actor;
pub mod film;
pub mod role;

pub use actor::*;
pub use film::*;
pub use role::*;

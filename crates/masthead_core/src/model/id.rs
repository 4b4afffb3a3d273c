//! Typed entity identities.
//!
//! Each entity kind gets its own newtype over `Uuid`, so an `AuthorId` can
//! never be passed where a `MagazineId` is expected.

use serde::Serialize;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub(crate) fn generate() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Stable identity of an `Author`.
    AuthorId
);
entity_id!(
    /// Stable identity of a `Magazine`.
    MagazineId
);
entity_id!(
    /// Stable identity of an `Article`.
    ArticleId
);

//! Domain layer: containers and their contracts
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod array;
pub mod associative;
pub mod cursor;
pub mod error;
pub mod list;
pub mod ordering;
pub mod sublist;
pub mod traits;
pub mod unique;

pub use array::{ArrayView, FixedArray};
pub use associative::{traverse_entries, traverse_keys_then_lookup, CountingMap, Traversal};
pub use cursor::{FailFastIter, ListCursor};
pub use error::{CollectionError, CollectionResult, OrderingRule};
pub use list::SharedList;
pub use ordering::{sort_checked, verify_comparator};
pub use sublist::{SubList, SubListIter};
pub use traits::{AssociativeContainer, OrderedContainer, UniqueContainer};
pub use unique::{dedup_via, LinkedUniqueSet};

//! A rope: a binary tree of text fragments whose in-order flattening is the
//! represented string. Edits split and join subtrees instead of copying the
//! whole buffer.
//!
//! Positions are byte offsets into the flattened text.
//!
//! ```
//! use ropetree::Rope;
//!
//! let mut rope = Rope::new("test");
//! rope.insert(2, "123")?;
//! assert_eq!(rope.to_string(), "te123st");
//!
//! rope.delete_range(1, 3)?;
//! assert_eq!(rope.to_string(), "t23st");
//! # Ok::<(), ropetree::RopeError>(())
//! ```

mod macros;

mod balance;
mod edit;
mod error;
mod map;
mod rope;
mod util;

pub use self::edit::SplitStrategy;
pub use self::error::{Result, RopeError};
pub use self::rope::Rope;
pub use self::util::{RopeMap, TreeDisplay};

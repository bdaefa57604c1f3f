//! Arena-backed doubly-linked list with an explicit payload release policy.
//!
//! This crate is the storage engine behind the `linkv` list store. Nodes
//! live in a slab; links are slot indices, so there is no pointer chasing
//! through freed memory and a removed node's slot is simply reused.
//!
//! ```text
//! Slab<Node<T>>   - owns nodes, stable slot indices
//! List<T, R>      - head/tail links, release policy R
//! Handle          - stable slot index, O(1) get/remove
//! ```
//!
//! # Quick Start
//!
//! ```
//! use linkv_list::{Direction, List};
//!
//! let mut list: List<u64> = List::new();
//!
//! let a = list.push_back(1);
//! list.push_back(2);
//! list.push_front(0);
//!
//! assert_eq!(list.index(-1).and_then(|h| list.get(h)), Some(&2));
//! assert!(list.remove(a));
//!
//! let reversed: Vec<_> = list.walk(Direction::Reverse).map(|(_, v)| *v).collect();
//! assert_eq!(reversed, vec![2, 0]);
//! ```
//!
//! # Ownership
//!
//! Whether the list destroys its payloads is chosen through the second type
//! parameter, never at runtime:
//!
//! | Policy | Payload | On `remove`/`clear`/drop |
//! |--------|---------|--------------------------|
//! | [`Owned`] | `T` | dropped |
//! | [`Borrowed`] | `&'a V` | nothing, caller keeps ownership |
//! | [`Destructor<F>`] | `T` | `F(value)` |
//!
//! `pop_front`, `pop_back` and `take` always hand the payload back to the
//! caller without running the policy.

#![warn(missing_docs)]

pub mod handle;
pub mod list;
pub mod release;

pub use handle::Handle;
pub use list::{Direction, Handles, Iter, List, Walk};
pub use release::{Borrowed, Destructor, Owned, Release};

//! Intrusive, allocation-free container primitives over external storage.
//!
//! This crate provides two container engines for low-level systems code:
//! a kernel-style circular intrusive doubly-linked list ([`Ring`]) and a
//! bounded LIFO stack ([`Stack`]). The key insight: separate storage from
//! structure.
//!
//! # Design Philosophy
//!
//! Traditional collections own their data:
//!
//! ```text
//! LinkedList<T>  - owns nodes, allocates per insert
//! Vec<T>         - owns elements, grows on demand
//! ```
//!
//! This crate inverts the model:
//!
//! ```text
//! Storage (arena)  - owns node memory, provides stable keys
//! Ring / Stack     - coordinate keys, never allocate or free
//! ```
//!
//! Benefits:
//! - **Zero allocation on the hot path**: pre-allocate storage at startup
//! - **O(1) operations**: embedded links enable splice-in/splice-out
//!   anywhere, without search
//! - **Non-owning containers**: element lifetime stays entirely with the
//!   caller; unlinking or popping never drops anything
//! - **Shared storage**: many rings can thread through one node pool
//!
//! # Quick Start
//!
//! ```
//! use circlet::{BoxedStorage, Node, Ring, Storage};
//!
//! // Storage owns the nodes
//! let mut arena: BoxedStorage<Node<u64>> = BoxedStorage::with_capacity(1024);
//!
//! // Any node can anchor a ring; init self-loops it as the sentinel head
//! let head = arena.try_insert(Node::new(0)).unwrap();
//! let ring = Ring::init(&mut arena, head);
//!
//! let a = arena.try_insert(Node::new(10)).unwrap();
//! let b = arena.try_insert(Node::new(20)).unwrap();
//! ring.link_back(&mut arena, a);
//! ring.link_back(&mut arena, b);
//!
//! let values: Vec<u64> = ring.iter(&arena).map(|n| n.data).collect();
//! assert_eq!(values, [10, 20]);
//!
//! // O(1) removal from anywhere; the node stays in storage
//! circlet::Ring::unlink(&mut arena, a);
//! assert_eq!(arena.get(a).map(|n| n.data), Some(10));
//! ```
//!
//! # Critical Invariant: Same Storage Instance
//!
//! All operations on a ring must use the same storage instance its nodes
//! live in. This is the caller's responsibility (same discipline as the
//! `slab` crate). Passing a different storage corrupts links or panics.
//!
//! # Custom Node Types
//!
//! [`Node<T>`] wraps any payload with a link pair. Types that want control
//! over layout implement [`Linked`] themselves and work with the same ring
//! algorithms - the operations are generic over the link accessors, not
//! tied to one node type.
//!
//! # Storage Options
//!
//! | Storage | Capacity | Use Case |
//! |---------|----------|----------|
//! | [`BoxedStorage`] | Fixed (runtime) | Default choice |
//! | `slab::Slab` | Growable | When size unknown (feature `slab`) |
//!
//! # Containers
//!
//! | Container | Use Case | Key Operations |
//! |-----------|----------|----------------|
//! | [`Ring`] | Run queues, LRU chains, free lists | O(1) link/unlink/move/splice |
//! | [`Stack`] | Free-slot tracking, undo chains | O(1) push/pop, fixed capacity |
//!
//! # Error Handling
//!
//! No panicking APIs for capacity or emptiness: a full container rejects
//! with [`Full`] (carrying the rejected key back), an empty [`Stack`] pops
//! the [`Key::NONE`] sentinel. Contract violations (unlinking a detached
//! node, linking a linked one) are debug-asserted and unchecked in release
//! builds.
//!
//! # Feature Flags
//!
//! - `slab` - Enable [`Storage`] impl for `slab::Slab`

#![warn(missing_docs)]

pub mod key;
pub mod node;
pub mod ring;
pub mod stack;
pub mod storage;

pub use key::Key;
pub use node::{Linked, Node};
pub use ring::{Cursor, Iter, IterMut, Keys, Ring};
pub use stack::Stack;
pub use storage::{BoxedStorage, Full, Storage};

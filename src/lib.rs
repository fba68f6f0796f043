#![no_std]
#![warn(missing_docs)]
#![cfg_attr(docs_rs, feature(doc_cfg))]

//! Arena-backed growable byte strings for message building.
//!
//! When records are built or parsed inside a memory [`Arena`], every string
//! field normally still costs one heap allocation and one deallocation. The
//! types in this crate remove that pair: an [`ArenaString`] carves its slot
//! and all of its buffers out of the arena that owns the enclosing record,
//! while exposing the same mutation surface as an ordinary growable string.
//! [`FieldString`] lets one field declaration serve both arena-built and
//! heap-built records, deciding per value which strategy applies.
//!
//! Content is raw bytes with a guaranteed NUL terminator after the last
//! byte, so values can be handed to C APIs without copying.
//!
//! # Examples
//! ```
//! use core::mem::MaybeUninit;
//! use corda::{Arena, ArenaString};
//!
//! let mut backing_region = [MaybeUninit::uninit(); 4096];
//! let arena = Arena::from_buffer(&mut backing_region[..]);
//!
//! let mut field = ArenaString::new_in(&arena);
//! field.assign(b"all buffers stay inside the arena");
//! field.append(b", and none are freed individually");
//!
//! assert!(arena.contains(field.as_ptr()));
//! assert_eq!(field.as_bytes_with_nul().last(), Some(&0));
//! ```
//!
//! # Features
//!
//! - `alloc` *(default)*: heap-owned strings ([`HeapString`]) and the
//!   dual-mode [`FieldString`].
//! - `legacy-shared`: selects the share-counted buffer representation,
//!   where clones alias one buffer until the first write forces a private
//!   copy. Exactly one representation is compiled into a build.
//! - `unstable`: nightly-only benchmark targets.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod arena;
mod repr;
pub mod string;

mod storage;

pub use crate::arena::{Arena, Box};
pub use crate::string::ArenaString;

#[cfg(feature = "alloc")]
pub use crate::string::{FieldString, HeapString};

//! Provides a simple Trie implementation for storing keys composed of
//! sequences of atoms, checking whether a key is present, and finding
//! every stored key which starts with a given prefix.
//!
//! Atoms must support the [`crate::trie::TrieAtom`] trait, which any
//! `Clone + Ord` type does.
//!
//! The interface relies on iterators to insert and query keys. Because the
//! trie is based on the concept of atoms, then it is up to the user to
//! decide what kind of atoms to use to make most sense of the keys we are
//! storing. This flexibility can be really useful when string processing:
//! (atoms can be `char` or grapheme `&str` clusters or whole words) or
//! when working with numeric tries.
//!
//! Since the most common use of a trie is to store the chars of a String,
//! a convenience type, [`crate::trie::TrieString`] is provided.
//!
//! Prefix queries return keys in lexicographic order. An empty prefix is
//! rejected with [`crate::error::TrieError::InvalidArgument`].
//!
//! Examples:
//! * trie : [`crate::trie`]
//! * iterator : [`crate::iterator`]
//!
//! Typical usages for this data structure:
//!  - Auto-completion of words from a dictionary
//!  - Storing large numbers of keys with significant amounts of
//!    sub-key duplication
//!  - Prefix matching keys
//!  - ...

pub mod error;

pub mod iterator;

pub mod trie;

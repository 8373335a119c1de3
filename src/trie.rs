//! Provides a simple Trie implementation for storing keys composed of
//! sequences of atoms and for finding every stored key which starts with a
//! given prefix.
//!
//! Atoms must support the TrieAtom trait.
//!
//! The interface relies on iterators to insert and query keys. Because the
//! trie is based on the concept of atoms, it is up to the user to decide
//! what kind of atoms make most sense of the keys being stored. Here are
//! three examples which show that we can work with keys of:
//!  - chars
//!  - grapheme clusters
//!  - integers
//!
//! Example 1
//! ```
//! use prefind::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("car".chars());
//! trie.insert("carpet".chars());
//!
//! // Anything which implements IntoIterator<Item=char> can now be used
//! // to interact with our Trie
//! assert!(trie.contains("car".chars()));
//! assert!(!trie.contains(['c', 'a', 'r', 'p']));
//! assert!(trie.contains_prefix("carp".chars()));
//!
//! let words: Vec<String> = trie
//!     .find_by_prefix("car".chars())
//!     .unwrap()
//!     .into_iter()
//!     .map(String::from_iter)
//!     .collect();
//! assert_eq!(words, vec!["car", "carpet"]);
//! ```
//!
//! Example 2
//! ```
//! use prefind::trie::Trie;
//! use unicode_segmentation::UnicodeSegmentation;
//!
//! let mut trie: Trie<&str> = Trie::new();
//! let s = "a̐éö̲\r\n";
//! let input = s.graphemes(true);
//! trie.insert(input.clone());
//! assert!(trie.contains(input.clone()));
//! assert_eq!(trie.find_by_prefix(input.take(1)).unwrap().len(), 1);
//! ```
//!
//! Example 3
//! ```
//! use prefind::error::TrieError;
//! use prefind::trie::Trie;
//!
//! let trie: Trie<usize> = [vec![1, 2, 3], vec![1, 2, 4, 5], vec![2, 9]]
//!     .into_iter()
//!     .collect();
//! assert_eq!(
//!     trie.find_by_prefix([1, 2]),
//!     Ok(vec![vec![1, 2, 3], vec![1, 2, 4, 5]])
//! );
//! assert_eq!(trie.find_by_prefix([1, 2, 5]), Ok(vec![]));
//! assert!(matches!(
//!     trie.find_by_prefix(Vec::new()),
//!     Err(TrieError::InvalidArgument(_))
//! ));
//! ```
//!
//! Empty keys are never stored: inserting one does nothing and `contains`
//! always reports them as absent. An empty prefix is rejected by
//! `find_by_prefix` with `TrieError::InvalidArgument`.
//!
//! Prefix matches are returned in pre-order with children visited in
//! ascending atom order, so results are lexicographically sorted and a key
//! always precedes its own extensions.

use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, trace};

use crate::error::{Result, TrieError};
use crate::iterator::{Iter, IntoIter};

/// Atoms which we wish to store in a Trie must implement
/// TrieAtom.
pub trait TrieAtom: Clone + Ord {}

// Blanket implementation which satisfies the compiler
impl<A> TrieAtom for A
where
    A: Clone + Ord,
{
    // Nothing to implement, since A already supports the other traits.
    // It has the functions it needs already
}

/// The most common Trie: keys made of the chars of a string.
pub type TrieString = Trie<char>;

// Clone, PartialEq and Debug are written out below rather than derived, so
// that none of them recurse once per level.
pub(crate) struct Node<A> {
    pub(crate) children: BTreeMap<A, Node<A>>,
    pub(crate) terminated: bool,
}

// Not derived: the derive would require A: Default.
impl<A> Default for Node<A> {
    fn default() -> Self {
        Self {
            children: BTreeMap::new(),
            terminated: false,
        }
    }
}

impl<A: Clone + Ord> Clone for Node<A> {
    fn clone(&self) -> Self {
        struct Pending<'a, A> {
            atom: Option<A>,
            source: &'a Node<A>,
            children: std::collections::btree_map::Iter<'a, A, Node<A>>,
            copied: BTreeMap<A, Node<A>>,
        }

        let mut stack = vec![Pending {
            atom: None,
            source: self,
            children: self.children.iter(),
            copied: BTreeMap::new(),
        }];
        loop {
            let top = match stack.last_mut() {
                Some(top) => top,
                None => return Node::default(),
            };
            if let Some((atom, child)) = top.children.next() {
                stack.push(Pending {
                    atom: Some(atom.clone()),
                    source: child,
                    children: child.children.iter(),
                    copied: BTreeMap::new(),
                });
                continue;
            }
            // Every child of the top node is copied, attach it to its parent
            let done = match stack.pop() {
                Some(done) => done,
                None => return Node::default(),
            };
            let node = Node {
                children: done.copied,
                terminated: done.source.terminated,
            };
            match (stack.last_mut(), done.atom) {
                (Some(parent), Some(atom)) => {
                    parent.copied.insert(atom, node);
                }
                _ => return node,
            }
        }
    }
}

impl<A: PartialEq> PartialEq for Node<A> {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((left, right)) = pending.pop() {
            if left.terminated != right.terminated || left.children.len() != right.children.len()
            {
                return false;
            }
            for ((l_atom, l_child), (r_atom, r_child)) in
                left.children.iter().zip(right.children.iter())
            {
                if l_atom != r_atom {
                    return false;
                }
                pending.push((l_child, r_child));
            }
        }
        true
    }
}

impl<A> fmt::Debug for Node<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("children", &self.children.len())
            .field("terminated", &self.terminated)
            .finish()
    }
}

impl<A> Node<A> {
    /// Drop a subtree without recursing once per level, so that very deep
    /// keys cannot exhaust the stack.
    pub(crate) fn dismantle(self) {
        let mut pending = vec![self];
        while let Some(mut node) = pending.pop() {
            pending.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

/// Stores keys of atoms as individual nodes.
#[derive(PartialEq)]
pub struct Trie<A> {
    pub(crate) head: Node<A>,
    count: usize,
}

impl<A: Clone + Ord> Clone for Trie<A> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            count: self.count,
        }
    }
}

impl<A> Default for Trie<A> {
    fn default() -> Self {
        Self {
            head: Node::default(),
            count: 0,
        }
    }
}

// Lists the stored keys, in iteration order.
impl<A: TrieAtom + fmt::Debug> fmt::Debug for Trie<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<A> Drop for Trie<A> {
    fn drop(&mut self) {
        std::mem::take(&mut self.head).dismantle();
    }
}

impl<A: TrieAtom> Trie<A> {
    /// Create a new Trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Does the Trie contain the supplied key?
    ///
    /// An empty key is never contained.
    pub fn contains<K: IntoIterator<Item = A>>(&self, key: K) -> bool {
        let mut atoms = key.into_iter().peekable();
        if atoms.peek().is_none() {
            return false;
        }
        self.node_at(atoms).map_or(false, |n| n.terminated)
    }

    /// Does the Trie contain a key which starts with the supplied prefix?
    ///
    /// An empty prefix is never contained.
    pub fn contains_prefix<P: IntoIterator<Item = A>>(&self, prefix: P) -> bool {
        let mut atoms = prefix.into_iter().peekable();
        if atoms.peek().is_none() {
            return false;
        }
        self.node_at(atoms).is_some()
    }

    /// How many keys does the Trie contain?
    #[inline(always)]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Find every key which starts with the supplied prefix, including the
    /// prefix itself if it was inserted as a key.
    ///
    /// Returns an empty Vec if no key matches and
    /// [`TrieError::InvalidArgument`] if the prefix is empty.
    pub fn find_by_prefix<P: IntoIterator<Item = A>>(&self, prefix: P) -> Result<Vec<Vec<A>>> {
        Ok(self.iter_prefix(prefix)?.collect())
    }

    /// Insert the key into the Trie. Returns true if the key was not
    /// already present.
    ///
    /// Inserting an empty key does nothing.
    pub fn insert<K: IntoIterator<Item = A>>(&mut self, key: K) -> bool {
        let mut atoms = key.into_iter().peekable();
        if atoms.peek().is_none() {
            return false;
        }

        let mut node = &mut self.head;
        for atom in atoms {
            node = node.children.entry(atom).or_default();
        }
        if node.terminated {
            false
        } else {
            node.terminated = true;
            self.count += 1;
            true
        }
    }

    /// Is the Trie empty?
    pub fn is_empty(&self) -> bool {
        self.head.children.is_empty()
    }

    /// Create an iterator over every key in the Trie.
    pub fn iter(&self) -> Iter<'_, A> {
        self.into_iter()
    }

    /// Create an iterator over every key which starts with the supplied
    /// prefix. This is the lazy form of [`Trie::find_by_prefix`].
    pub fn iter_prefix<P: IntoIterator<Item = A>>(&self, prefix: P) -> Result<Iter<'_, A>> {
        let prefix: Vec<A> = prefix.into_iter().collect();
        if prefix.is_empty() {
            return Err(TrieError::InvalidArgument("expected a non-empty prefix"));
        }
        match self.node_at(prefix.iter().cloned()) {
            Some(node) => {
                trace!(depth = prefix.len(), "prefix found");
                Ok(Iter::new(node, prefix))
            }
            None => {
                trace!(depth = prefix.len(), "prefix not found");
                Ok(Iter::empty())
            }
        }
    }

    // Follow the atoms down from the head. An exhausted iterator yields
    // the head itself.
    fn node_at<I: Iterator<Item = A>>(&self, atoms: I) -> Option<&Node<A>> {
        let mut node = &self.head;
        for atom in atoms {
            node = node.children.get(&atom)?;
        }
        Some(node)
    }
}

impl<A: TrieAtom, K: IntoIterator<Item = A>> Extend<K> for Trie<A> {
    fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
        let before = self.count;
        for key in iter {
            self.insert(key);
        }
        debug!(added = self.count - before, total = self.count, "extended trie");
    }
}

impl<A: TrieAtom, K: IntoIterator<Item = A>> FromIterator<K> for Trie<A> {
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl<A: TrieAtom> IntoIterator for Trie<A> {
    type Item = Vec<A>;
    type IntoIter = IntoIter<A>;

    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter::new(std::mem::take(&mut self.head))
    }
}

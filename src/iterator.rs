//! Provides Trie iterators.
//!
//! Both iterators walk the trie depth first with an explicit stack rather
//! than recursion, so the depth of a key is bounded by the heap and not by
//! the call stack. Nodes are visited in pre-order and children in ascending
//! atom order: keys come out sorted, and a key comes out before any of its
//! extensions.
//!
//! Rather than holding a full key per pending node, each stack frame
//! records the atom leading to its node and the key length at that node.
//! A single shared key buffer is truncated back to that length before the
//! atom is pushed.
use crate::trie::{Node, Trie, TrieAtom};

#[derive(Debug)]
struct Frame<'a, A> {
    atom: Option<&'a A>,
    depth: usize,
    node: &'a Node<A>,
}

/// Iterator over the keys of a Trie, or over the keys below a prefix.
#[derive(Debug)]
pub struct Iter<'a, A> {
    stack: Vec<Frame<'a, A>>,
    key: Vec<A>,
}

impl<'a, A: TrieAtom> Iter<'a, A> {
    // `key` is the path from the head to `node`.
    pub(crate) fn new(node: &'a Node<A>, key: Vec<A>) -> Self {
        Self {
            stack: vec![Frame {
                atom: None,
                depth: key.len(),
                node,
            }],
            key,
        }
    }

    pub(crate) fn empty() -> Self {
        Self {
            stack: vec![],
            key: vec![],
        }
    }
}

impl<'a, A: TrieAtom> Iterator for Iter<'a, A> {
    type Item = Vec<A>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.pop() {
            if let Some(atom) = frame.atom {
                self.key.truncate(frame.depth - 1);
                self.key.push(atom.clone());
            }
            // Reversed, so that the smallest atom is popped first
            for (atom, child) in frame.node.children.iter().rev() {
                self.stack.push(Frame {
                    atom: Some(atom),
                    depth: frame.depth + 1,
                    node: child,
                });
            }
            if frame.node.terminated {
                return Some(self.key.clone());
            }
        }
        None
    }
}

impl<'a, A: TrieAtom> IntoIterator for &'a Trie<A> {
    type Item = Vec<A>;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(&self.head, vec![])
    }
}

#[derive(Debug)]
struct OwnedFrame<A> {
    atom: Option<A>,
    depth: usize,
    node: Node<A>,
}

/// Consuming iterator over the keys of a Trie.
#[derive(Debug)]
pub struct IntoIter<A> {
    stack: Vec<OwnedFrame<A>>,
    key: Vec<A>,
}

impl<A: TrieAtom> IntoIter<A> {
    pub(crate) fn new(head: Node<A>) -> Self {
        Self {
            stack: vec![OwnedFrame {
                atom: None,
                depth: 0,
                node: head,
            }],
            key: vec![],
        }
    }
}

impl<A: TrieAtom> Iterator for IntoIter<A> {
    type Item = Vec<A>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut frame) = self.stack.pop() {
            if let Some(atom) = frame.atom {
                self.key.truncate(frame.depth - 1);
                self.key.push(atom);
            }
            let children = std::mem::take(&mut frame.node.children);
            for (atom, child) in children.into_iter().rev() {
                self.stack.push(OwnedFrame {
                    atom: Some(atom),
                    depth: frame.depth + 1,
                    node: child,
                });
            }
            if frame.node.terminated {
                return Some(self.key.clone());
            }
        }
        None
    }
}

impl<A> Drop for IntoIter<A> {
    fn drop(&mut self) {
        for frame in self.stack.drain(..) {
            frame.node.dismantle();
        }
    }
}

//! Disjoint-set forest with union-by-rank and path compression.
//!
//! Every registered element owns one node in an arena. A node stores the index
//! of its parent; a node whose parent is its own index is the root of a tree,
//! and the element stored at the root represents the whole set.
//!
//! Combining both heuristics keeps any sequence of `m` operations on `n`
//! elements within `O(m·α(n))`.

use std::{collections::HashMap, fmt::Debug, hash::Hash};

use tracing::trace;

use crate::error::DisjointSetError;

#[derive(Clone, Debug)]
struct Node<E> {
    item: E,
    parent: usize,
    rank: u32,
}

/// A partition of registered elements into disjoint sets.
///
/// # Examples
/// ```
/// use kajiki_core::DisjointSetForest;
///
/// let mut forest = DisjointSetForest::new();
/// forest.make_set('a')?;
/// forest.make_set('b')?;
/// forest.union(&'a', &'b')?;
/// // Equal ranks: the set containing the second argument wins.
/// assert_eq!(forest.find_set(&'a'), Some(&'b'));
/// # Ok::<(), kajiki_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSetForest<E> {
    nodes: Vec<Node<E>>,
    index: HashMap<E, usize>,
    sets: usize,
}

impl<E> Default for DisjointSetForest<E> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            sets: 0,
        }
    }
}

impl<E> DisjointSetForest<E>
where
    E: Clone + Eq + Hash + Debug,
{
    /// Creates an empty forest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty forest able to hold `capacity` elements without
    /// reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            sets: 0,
        }
    }

    /// Returns the number of registered elements.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.nodes.len() }

    /// Returns `true` when no element is registered.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

    /// Returns the number of disjoint sets currently in the forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn set_count(&self) -> usize { self.sets }

    /// Returns `true` if `element` has been registered with
    /// [`make_set`](Self::make_set).
    #[must_use]
    pub fn is_present(&self, element: &E) -> bool {
        self.index.contains_key(element)
    }

    /// Registers `element` as a new singleton set.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::AlreadyPresent`] when `element` is already
    /// registered; the forest is left untouched.
    pub fn make_set(&mut self, element: E) -> Result<(), DisjointSetError> {
        if self.index.contains_key(&element) {
            return Err(DisjointSetError::AlreadyPresent {
                element: format!("{element:?}"),
            });
        }
        let id = self.nodes.len();
        self.index.insert(element.clone(), id);
        self.nodes.push(Node {
            item: element,
            parent: id,
            rank: 0,
        });
        self.sets += 1;
        Ok(())
    }

    /// Returns the representative of the set containing `element`, or `None`
    /// if `element` was never registered.
    ///
    /// Every node visited on the way to the root is re-pointed directly at the
    /// root.
    pub fn find_set(&mut self, element: &E) -> Option<&E> {
        let id = *self.index.get(element)?;
        let root = self.find_root(id);
        Some(&self.nodes[root].item)
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// The root with the strictly higher rank becomes the parent. On equal
    /// ranks the root of `right`'s set becomes the parent and its rank grows by
    /// one. Returns `false` when both elements already share a set.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::NotPresent`] if either element is not
    /// registered. No compression or merge happens in that case.
    pub fn union(&mut self, left: &E, right: &E) -> Result<bool, DisjointSetError> {
        let left_id = self.id_of(left)?;
        let right_id = self.id_of(right)?;
        Ok(self.union_ids(left_id, right_id))
    }

    /// Returns `true` when both elements belong to the same set.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::NotPresent`] if either element is not
    /// registered.
    pub fn connected(&mut self, left: &E, right: &E) -> Result<bool, DisjointSetError> {
        let left_id = self.id_of(left)?;
        let right_id = self.id_of(right)?;
        Ok(self.find_root(left_id) == self.find_root(right_id))
    }

    /// Returns the representative of every current set, in registration order
    /// of the roots.
    ///
    /// Only roots are inspected, so no path is compressed.
    #[must_use]
    pub fn current_representatives(&self) -> Vec<&E> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(id, node)| node.parent == *id)
            .map(|(_, node)| &node.item)
            .collect()
    }

    /// Returns every element in the same set as `element`, in registration
    /// order.
    ///
    /// Membership is decided on compressed roots because parent pointers below
    /// a root can be stale after a union.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::NotPresent`] if `element` is not registered.
    pub fn current_elements_of_set_containing(
        &mut self,
        element: &E,
    ) -> Result<Vec<&E>, DisjointSetError> {
        let target = self.id_of(element)?;
        let target_root = self.find_root(target);
        let members: Vec<usize> = (0..self.nodes.len())
            .filter(|&id| self.find_root(id) == target_root)
            .collect();
        Ok(members.into_iter().map(|id| &self.nodes[id].item).collect())
    }

    /// Removes every element; all former elements become unregistered.
    pub fn clear(&mut self) {
        trace!(elements = self.nodes.len(), "clearing disjoint-set forest");
        self.nodes.clear();
        self.index.clear();
        self.sets = 0;
    }

    fn id_of(&self, element: &E) -> Result<usize, DisjointSetError> {
        self.index
            .get(element)
            .copied()
            .ok_or_else(|| DisjointSetError::NotPresent {
                element: format!("{element:?}"),
            })
    }

    fn find_root(&mut self, mut id: usize) -> usize {
        let mut root = id;
        while self.nodes[root].parent != root {
            root = self.nodes[root].parent;
        }

        while self.nodes[id].parent != id {
            let parent = self.nodes[id].parent;
            self.nodes[id].parent = root;
            id = parent;
        }

        root
    }

    fn union_ids(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find_root(left);
        let right_root = self.find_root(right);
        if left_root == right_root {
            return false;
        }

        let left_rank = self.nodes[left_root].rank;
        let right_rank = self.nodes[right_root].rank;
        if left_rank > right_rank {
            self.nodes[right_root].parent = left_root;
        } else {
            self.nodes[left_root].parent = right_root;
            if left_rank == right_rank {
                self.nodes[right_root].rank = right_rank.saturating_add(1);
            }
        }
        self.sets -= 1;
        trace!(left_root, right_root, left_rank, right_rank, "merged sets");
        true
    }
}

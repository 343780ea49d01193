//! Singly-linked list stored in an index arena.
//!
//! Nodes reference each other by arena index instead of owning pointers,
//! so removed slots are recycled and node ids stay stable while a node is
//! alive. Those ids double as scene element ids.

use crate::error::{Result, VizError};

/// Values of the seed chain, head first.
pub const LIST_SEED: [i64; 4] = [10, 25, 30, 45];

/// Arena index of a list node.
pub type NodeId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
struct ListNode {
    value: i64,
    next: Option<NodeId>,
}

/// Singly-linked chain supporting prepend and remove-head.
#[derive(Debug, Clone, Default)]
pub struct LinkedList {
    slots: Vec<Option<ListNode>>,
    free: Vec<NodeId>,
    head: Option<NodeId>,
    len: usize,
}

impl LinkedList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the list so that iteration yields `values` in order.
    pub fn from_values(values: &[i64]) -> Self {
        let mut list = Self::new();
        for &value in values.iter().rev() {
            list.prepend(value);
        }
        list
    }

    /// The chain shown when the widget opens: `10 -> 25 -> 30 -> 45`.
    pub fn seeded() -> Self {
        Self::from_values(&LIST_SEED)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    /// Inserts a new head node and returns its id.
    pub fn prepend(&mut self, value: i64) -> NodeId {
        let node = ListNode {
            value,
            next: self.head,
        };
        let id = match self.free.pop() {
            Some(id) => {
                self.slots[id] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };
        self.head = Some(id);
        self.len += 1;
        id
    }

    /// Unlinks the head node and returns its value.
    pub fn remove_head(&mut self) -> Result<i64> {
        let head = self.head.ok_or(VizError::Empty)?;
        let node = self.slots[head].take().ok_or(VizError::Empty)?;
        self.head = node.next;
        self.free.push(head);
        self.len -= 1;
        Ok(node.value)
    }

    /// Value stored at `id`, if the slot is live.
    pub fn value(&self, id: NodeId) -> Option<i64> {
        self.slots.get(id)?.as_ref().map(|n| n.value)
    }

    /// Successor of `id` in the chain.
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.slots.get(id)?.as_ref()?.next
    }

    /// Walks the chain from the head, yielding `(id, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, i64)> + '_ {
        let mut cursor = self.head;
        std::iter::from_fn(move || {
            let id = cursor?;
            let node = self.slots.get(id)?.as_ref()?;
            cursor = node.next;
            Some((id, node.value))
        })
    }

    pub fn to_vec(&self) -> Vec<i64> {
        self.iter().map(|(_, value)| value).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_chain_order() {
        assert_eq!(LinkedList::seeded().to_vec(), vec![10, 25, 30, 45]);
    }

    #[test]
    fn test_prepend_becomes_head() {
        let mut list = LinkedList::seeded();
        let id = list.prepend(5);
        assert_eq!(list.head(), Some(id));
        assert_eq!(list.to_vec(), vec![5, 10, 25, 30, 45]);
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn test_prepend_then_remove_restores_chain() {
        let mut list = LinkedList::seeded();
        for v in [1, 2, 3] {
            list.prepend(v);
        }
        let before_last = {
            let mut copy = list.clone();
            copy.remove_head().unwrap();
            copy.to_vec()
        };
        assert_eq!(list.remove_head(), Ok(3));
        assert_eq!(list.to_vec(), before_last);
        assert_eq!(list.to_vec(), vec![2, 1, 10, 25, 30, 45]);
    }

    #[test]
    fn test_removed_slots_are_recycled() {
        let mut list = LinkedList::from_values(&[1]);
        let first = list.head().unwrap();
        list.remove_head().unwrap();
        assert!(list.is_empty());
        let reused = list.prepend(9);
        assert_eq!(first, reused);
        assert_eq!(list.value(reused), Some(9));
    }

    #[test]
    fn test_remove_from_empty() {
        let mut list = LinkedList::new();
        assert_eq!(list.remove_head(), Err(VizError::Empty));
    }
}

//! Singly-linked owned sequence
//!
//! Each node owns its value and exclusively owns the next node, so a node
//! can only ever belong to one chain. The wrapper keeps the head and a node
//! count; there is no tail pointer, so appending walks the whole chain.

#[derive(Debug)]
struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// A singly-linked chain of values
#[derive(Debug)]
pub struct LinkedChain<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Default for LinkedChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedChain<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Value stored in the head node, if any
    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// Insert a value before the current head
    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    /// Unlink the head node and return its value
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            self.head = node.next;
            self.len -= 1;
            node.value
        })
    }

    /// Append a value after the current tail. O(n).
    pub fn push_back(&mut self, value: T) {
        self.insert_at(self.len, value);
    }

    /// Insert a value so that it ends up at position `index`
    ///
    /// The node previously at `index` (and everything after it) shifts one
    /// position later. An index at or beyond `len()` appends at the tail.
    pub fn insert_at(&mut self, index: usize, value: T) {
        let index = index.min(self.len);
        let mut cursor = &mut self.head;
        for _ in 0..index {
            match cursor {
                Some(node) => cursor = &mut node.next,
                None => unreachable!("chain of length {} ended early", self.len),
            }
        }
        let next = cursor.take();
        *cursor = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    /// Forward iterator from head to tail
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> Drop for LinkedChain<T> {
    fn drop(&mut self) {
        // Unlink iteratively so long chains don't recurse through Box drops
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

/// Borrowing iterator over a [`LinkedChain`]
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<'a, T> IntoIterator for &'a LinkedChain<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

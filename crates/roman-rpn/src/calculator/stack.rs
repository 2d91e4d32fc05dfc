use tracing::trace;

use super::CalcError;

/// Fixed capacity stack of calculator values.
///
/// Storage is allocated once; [`Stack::clear`] only resets the length.
#[derive(Debug, Clone)]
pub struct Stack {
    inner: Vec<u32>,
    capacity: usize,
}

impl Stack {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a value, failing without mutation when the stack is full.
    pub fn push(&mut self, value: u32) -> Result<(), CalcError> {
        if self.is_full() {
            return Err(CalcError::StackOverflow {
                capacity: self.capacity,
            });
        }
        self.inner.push(value);
        trace!(value, depth = self.inner.len(), "push");
        Ok(())
    }

    pub fn pop(&mut self) -> Option<u32> {
        let value = self.inner.pop();
        trace!(?value, depth = self.inner.len(), "pop");
        value
    }

    /// Pop the top two values as `(left, right)`.
    ///
    /// The most recently pushed value is the right operand. Returns `None`
    /// and leaves the stack untouched when fewer than two values are present.
    pub fn pop_pair(&mut self) -> Option<(u32, u32)> {
        if self.inner.len() < 2 {
            return None;
        }
        let right = self.pop()?;
        let left = self.pop()?;
        Some((left, right))
    }

    pub fn peek(&self) -> Option<u32> {
        self.inner.last().copied()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.inner.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Values from bottom to top.
    pub fn as_slice(&self) -> &[u32] {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_past_capacity_keeps_contents() {
        let mut stack = Stack::new(2);
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        assert!(matches!(
            stack.push(3),
            Err(CalcError::StackOverflow { capacity: 2 })
        ));
        assert_eq!(stack.as_slice(), &[1, 2]);
    }

    #[test]
    fn pop_pair_orders_operands() {
        let mut stack = Stack::new(4);
        stack.push(20).unwrap();
        stack.push(2).unwrap();
        assert_eq!(stack.pop_pair(), Some((20, 2)));
        assert!(stack.is_empty());
    }

    #[test]
    fn pop_pair_with_one_value_is_a_no_op() {
        let mut stack = Stack::new(4);
        stack.push(7).unwrap();
        assert_eq!(stack.pop_pair(), None);
        assert_eq!(stack.peek(), Some(7));
    }

    #[test]
    fn clear_keeps_allocation() {
        let mut stack = Stack::new(10);
        stack.push(1).unwrap();
        stack.clear();
        assert!(stack.is_empty());
        assert!(stack.inner.capacity() >= 10);
    }
}

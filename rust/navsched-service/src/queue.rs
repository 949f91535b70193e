use std::collections::VecDeque;

/// FIFO holding pen decoupling submission timing from processing timing.
///
/// Relative order is never disturbed: `enqueue` appends, `dequeue` removes
/// the front. When a depth cap is set, `enqueue` hands the rejected item
/// back instead of growing past the cap.
pub struct RequestQueue<T> {
    items: VecDeque<T>,
    max_pending: Option<usize>,
}

impl<T> RequestQueue<T> {
    pub fn new(max_pending: Option<usize>) -> Self {
        Self {
            items: VecDeque::new(),
            max_pending,
        }
    }

    pub fn enqueue(&mut self, item: T) -> Result<(), T> {
        if let Some(max) = self.max_pending {
            if self.items.len() >= max {
                return Err(item);
            }
        }
        self.items.push_back(item);
        Ok(())
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn max_pending(&self) -> Option<usize> {
        self.max_pending
    }
}

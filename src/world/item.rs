//! Item stacks lying in the world

use serde::{Deserialize, Serialize};

/// Handle to an item stack in the world. Stable until the stack despawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemKey(pub u64);

/// A stack of one material
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    pub material_id: u16,
    pub count: u32,
}

impl ItemStack {
    pub fn new(material_id: u16, count: u32) -> Self {
        ItemStack { material_id, count }
    }

    /// Remove one unit. Returns true if the stack is now empty.
    pub fn take_one(&mut self) -> bool {
        self.count = self.count.saturating_sub(1);
        self.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_one() {
        let mut stack = ItemStack::new(1, 2);
        assert!(!stack.take_one());
        assert!(stack.take_one());
        assert!(stack.is_empty());

        // Taking from an empty stack stays empty
        assert!(stack.take_one());
        assert_eq!(stack.count, 0);
    }
}

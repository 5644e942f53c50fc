//! Fixed-size FIFO of obstacles
//!
//! Obstacles live in a ring: index 0 of the logical order is always the
//! oldest (leftmost) one. Recycling overwrites the oldest slot with a fresh
//! obstacle and advances the head, so the new one becomes the newest.

use super::obstacle::Obstacle;

#[derive(Debug, Clone)]
pub struct ObstacleQueue {
    slots: Vec<Obstacle>,
    head: usize,
}

impl ObstacleQueue {
    /// Build a full queue; `spawn` receives the logical index
    pub fn filled(len: usize, spawn: impl FnMut(usize) -> Obstacle) -> Self {
        Self {
            slots: (0..len).map(spawn).collect(),
            head: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    fn slot(&self, index: usize) -> usize {
        (self.head + index) % self.slots.len()
    }

    /// Obstacle at a logical position (0 = oldest)
    pub fn get(&self, index: usize) -> Option<&Obstacle> {
        if index < self.slots.len() {
            Some(&self.slots[self.slot(index)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Obstacle> {
        if index < self.slots.len() {
            let slot = self.slot(index);
            Some(&mut self.slots[slot])
        } else {
            None
        }
    }

    pub fn front(&self) -> Option<&Obstacle> {
        self.get(0)
    }

    pub fn back(&self) -> Option<&Obstacle> {
        self.slots.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Drop the oldest obstacle and append `replacement` as the newest
    pub fn recycle_front(&mut self, replacement: Obstacle) {
        if self.slots.is_empty() {
            return;
        }
        self.slots[self.head] = replacement;
        self.head = (self.head + 1) % self.slots.len();
    }

    /// Discard every obstacle and spawn a fresh set in order
    pub fn respawn(&mut self, spawn: impl FnMut(usize) -> Obstacle) {
        let len = self.slots.len();
        *self = Self::filled(len, spawn);
    }

    /// Oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        let (newer, older) = self.slots.split_at(self.head);
        older.iter().chain(newer.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{Sprite, SpriteId};
    use crate::settings::ScreenSize;

    fn obstacle(x: f32) -> Obstacle {
        Obstacle::new(
            Sprite::new(SpriteId::Obstacle, 80, 80),
            x,
            ScreenSize::new(1000, 1000),
            10.0,
        )
    }

    fn xs(queue: &ObstacleQueue) -> Vec<f32> {
        queue.iter().map(|o| o.x).collect()
    }

    #[test]
    fn test_filled_in_spawn_order() {
        let queue = ObstacleQueue::filled(5, |i| obstacle(i as f32 * 100.0));
        assert_eq!(queue.len(), 5);
        assert_eq!(xs(&queue), vec![0.0, 100.0, 200.0, 300.0, 400.0]);
        assert_eq!(queue.front().map(|o| o.x), Some(0.0));
        assert_eq!(queue.back().map(|o| o.x), Some(400.0));
    }

    #[test]
    fn test_recycle_moves_front_to_back() {
        let mut queue = ObstacleQueue::filled(3, |i| obstacle(i as f32));
        queue.recycle_front(obstacle(10.0));
        assert_eq!(xs(&queue), vec![1.0, 2.0, 10.0]);
        queue.recycle_front(obstacle(11.0));
        queue.recycle_front(obstacle(12.0));
        queue.recycle_front(obstacle(13.0));
        assert_eq!(xs(&queue), vec![11.0, 12.0, 13.0]);
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn test_get_mut_follows_logical_order() {
        let mut queue = ObstacleQueue::filled(3, |i| obstacle(i as f32));
        queue.recycle_front(obstacle(3.0));
        if let Some(o) = queue.get_mut(0) {
            o.x = -1.0;
        }
        assert_eq!(xs(&queue), vec![-1.0, 2.0, 3.0]);
        assert!(queue.get(3).is_none());
    }

    #[test]
    fn test_respawn_resets_head() {
        let mut queue = ObstacleQueue::filled(4, |i| obstacle(i as f32));
        queue.recycle_front(obstacle(9.0));
        queue.respawn(|i| obstacle(50.0 + i as f32));
        assert_eq!(xs(&queue), vec![50.0, 51.0, 52.0, 53.0]);
    }
}

use std::ops::{Deref, DerefMut};

use crate::World;

/// Keeps block-added callbacks switched off for as long as it lives. The
/// previous setting is restored on drop, early returns included.
pub struct SuppressedCallbacks<'w, W: World + ?Sized> {
    world: &'w mut W,
    previous: bool,
}

impl<'w, W: World + ?Sized> SuppressedCallbacks<'w, W> {
    pub fn new(world: &'w mut W) -> Self {
        let previous = world.block_added_callbacks_suppressed();
        world.set_block_added_callbacks_suppressed(true);
        Self { world, previous }
    }
}

impl<W: World + ?Sized> Deref for SuppressedCallbacks<'_, W> {
    type Target = W;

    fn deref(&self) -> &W {
        self.world
    }
}

impl<W: World + ?Sized> DerefMut for SuppressedCallbacks<'_, W> {
    fn deref_mut(&mut self) -> &mut W {
        self.world
    }
}

impl<W: World + ?Sized> Drop for SuppressedCallbacks<'_, W> {
    fn drop(&mut self) {
        self.world.set_block_added_callbacks_suppressed(self.previous);
    }
}

use core::alloc::{GlobalAlloc, Layout};
use core::cell::{Cell, UnsafeCell};
use core::ptr;

/// Default arena size for the cart's global allocator.
pub const ARENA_SIZE: usize = 32 * 1024;

/// Bump allocator over a fixed arena in the cart's data segment.
///
/// Allocation only moves a cursor forward. Freeing the most recent block
/// pulls the cursor back to where that block started, and once every live
/// allocation has been released the cursor rewinds to the start. Encoded text
/// is allocated, passed to the host and freed before anything else is
/// allocated, so it reuses the same bytes forever even while the cart keeps
/// other allocations alive. An allocation that does not fit returns null.
pub struct GuestAllocator<const N: usize = ARENA_SIZE> {
    arena: UnsafeCell<[u8; N]>,
    next: Cell<usize>,
    live: Cell<usize>,
}

// Carts run on a single thread.
unsafe impl<const N: usize> Sync for GuestAllocator<N> {}

impl<const N: usize> GuestAllocator<N> {
    pub const fn new() -> Self {
        Self {
            arena: UnsafeCell::new([0; N]),
            next: Cell::new(0),
            live: Cell::new(0),
        }
    }

    /// Bytes handed out since the last rewind, padding included.
    pub fn used(&self) -> usize {
        self.next.get()
    }

    /// Allocations not yet released.
    pub fn live(&self) -> usize {
        self.live.get()
    }
}

impl<const N: usize> Default for GuestAllocator<N> {
    fn default() -> Self {
        Self::new()
    }
}

unsafe impl<const N: usize> GlobalAlloc for GuestAllocator<N> {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let base = self.arena.get().cast::<u8>();
        let cursor = base as usize + self.next.get();
        let Some(aligned) = cursor.checked_add(layout.align() - 1) else {
            return ptr::null_mut();
        };
        let offset = (aligned & !(layout.align() - 1)) - base as usize;
        match offset.checked_add(layout.size()) {
            Some(end) if end <= N => {
                self.next.set(end);
                self.live.set(self.live.get() + 1);
                unsafe { base.add(offset) }
            }
            _ => ptr::null_mut(),
        }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        let live = self.live.get().saturating_sub(1);
        self.live.set(live);
        if live == 0 {
            self.next.set(0);
            return;
        }

        // The newest block gives its bytes back, so a long-lived allocation
        // underneath does not pin the cursor.
        let offset = ptr as usize - self.arena.get() as usize;
        if offset + layout.size() == self.next.get() {
            self.next.set(offset);
        }
    }
}

#[cfg(all(target_arch = "wasm32", feature = "guest_handlers"))]
#[global_allocator]
static ALLOCATOR: GuestAllocator = GuestAllocator::new();

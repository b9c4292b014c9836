//! Intent mailbox
//!
//! Buttons, sliders and interrupt handlers post [`ScannerIntent`]s here and
//! the render loop picks them up once per tick. Storage is a fixed
//! `heapless::Deque` behind a `critical-section` mutex, so posting works
//! from any context without an allocator.
//!
//! [`ScannerIntent`]: crate::ScannerIntent

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// The mailbox was full; the intent is handed back unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError<T>(pub T);

/// Fixed-capacity mailbox, usually placed in a `static`
pub struct Channel<T, const SIZE: usize> {
    queue: Mutex<RefCell<Deque<T, SIZE>>>,
}

impl<T, const SIZE: usize> Channel<T, SIZE> {
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    pub const fn sender(&self) -> Sender<'_, T, SIZE> {
        Sender { channel: self }
    }

    pub const fn receiver(&self) -> Receiver<'_, T, SIZE> {
        Receiver { channel: self }
    }

    /// Post `value` behind everything already waiting
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        self.with_queue(|queue| queue.push_back(value).map_err(TrySendError))
    }

    /// Pop the oldest waiting value
    pub fn try_receive(&self) -> Option<T> {
        self.with_queue(Deque::pop_front)
    }

    pub fn len(&self) -> usize {
        self.with_queue(|queue| queue.len())
    }

    pub fn is_empty(&self) -> bool {
        self.with_queue(|queue| queue.is_empty())
    }

    /// Move out everything waiting right now in one critical section
    fn take_all(&self) -> Deque<T, SIZE> {
        self.with_queue(core::mem::take)
    }

    fn with_queue<R>(&self, f: impl FnOnce(&mut Deque<T, SIZE>) -> R) -> R {
        critical_section::with(|cs| f(&mut self.queue.borrow(cs).borrow_mut()))
    }
}

impl<T, const SIZE: usize> Default for Channel<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Posting end, handed to whatever controls the scanner
pub struct Sender<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Clone for Sender<'_, T, SIZE> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const SIZE: usize> Copy for Sender<'_, T, SIZE> {}

impl<T, const SIZE: usize> Sender<'_, T, SIZE> {
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        self.channel.try_send(value)
    }
}

/// Collecting end, owned by the render loop
pub struct Receiver<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Clone for Receiver<'_, T, SIZE> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const SIZE: usize> Copy for Receiver<'_, T, SIZE> {}

impl<T, const SIZE: usize> Receiver<'_, T, SIZE> {
    pub fn try_receive(&self) -> Option<T> {
        self.channel.try_receive()
    }

    /// Everything posted before this call, oldest first
    ///
    /// Values posted while the batch is being consumed stay queued for the
    /// next call, so one tick never chases a sender that keeps posting.
    pub fn drain(&self) -> impl Iterator<Item = T> {
        self.channel.take_all().into_iter()
    }
}

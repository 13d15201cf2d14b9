/// Holds the input listeners of one chart host and makes attaching idempotent.
///
/// `H` is whatever keeps the listeners alive (DOM handles in the browser,
/// anything in tests). Dropping the handles detaches them.
#[derive(Debug)]
pub struct ListenerGuard<H> {
    handles: Option<H>,
    attach_count: usize,
}

impl<H> Default for ListenerGuard<H> {
    fn default() -> Self {
        Self { handles: None, attach_count: 0 }
    }
}

impl<H> ListenerGuard<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `attach` only when nothing is attached yet. Returns whether it ran.
    pub fn attach_with(&mut self, attach: impl FnOnce() -> H) -> bool {
        if self.handles.is_some() {
            return false;
        }
        self.handles = Some(attach());
        self.attach_count += 1;
        true
    }

    pub fn is_attached(&self) -> bool {
        self.handles.is_some()
    }

    /// Total number of times listeners were attached over the guard's lifetime.
    pub fn attach_count(&self) -> usize {
        self.attach_count
    }

    pub fn detach(&mut self) -> Option<H> {
        self.handles.take()
    }
}

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

use subroute_render::OutputSink;

/// An in-memory writer whose clones share one buffer.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// Returns true if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Discards everything written so far.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// An uncolored sink writing into this buffer.
    pub fn sink(&self) -> OutputSink {
        OutputSink::new(self.clone())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        match self.bytes.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

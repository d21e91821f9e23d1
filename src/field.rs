/// A field's running state and its staging/read-from companion.
///
/// `previous` first receives external forcing, then serves as the read-only input of a
/// relaxation step once [`BufferPair::swap`] has exchanged the roles of the two buffers.
#[derive(Debug, Clone)]
pub struct BufferPair {
    pub current: Vec<f32>,
    pub previous: Vec<f32>,
}

impl BufferPair {
    pub fn zeroed(size: usize) -> Self {
        Self {
            current: vec![0.0; size],
            previous: vec![0.0; size],
        }
    }

    /// Exchange the two buffers; no data is copied.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.previous);
    }

    pub fn clear_previous(&mut self) {
        self.previous.fill(0.0);
    }

    pub fn clear(&mut self) {
        self.current.fill(0.0);
        self.previous.fill(0.0);
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }
}

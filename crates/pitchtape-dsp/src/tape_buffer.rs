//! Stereo circular history with fractional-delay reads.

/// Channel slot in a [`TapeBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Left,
    Right,
}

/// Fixed-capacity stereo circular buffer.
///
/// The write pointer advances by exactly one frame per [`advance`](Self::advance)
/// and wraps at [`capacity`](Self::capacity). Reads address samples by their
/// distance behind the write pointer.
pub struct TapeBuffer {
    left: Vec<f32>,
    right: Vec<f32>,
    write_pos: usize,
}

impl TapeBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            left: vec![0.0; capacity.max(1)],
            right: vec![0.0; capacity.max(1)],
            write_pos: 0,
        }
    }

    /// Resize to `capacity` frames and clear. Allocates; not for the audio thread.
    pub fn allocate(&mut self, capacity: usize) {
        let capacity = capacity.max(1);
        self.left.resize(capacity, 0.0);
        self.right.resize(capacity, 0.0);
        self.clear();
    }

    pub fn clear(&mut self) {
        self.left.fill(0.0);
        self.right.fill(0.0);
        self.write_pos = 0;
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.left.len()
    }

    #[inline]
    pub fn write_pos(&self) -> usize {
        self.write_pos
    }

    /// Store one frame at the write pointer without advancing it.
    #[inline]
    pub fn write(&mut self, left: f32, right: f32) {
        self.left[self.write_pos] = left;
        self.right[self.write_pos] = right;
    }

    #[inline]
    pub fn advance(&mut self) {
        self.write_pos += 1;
        if self.write_pos >= self.left.len() {
            self.write_pos = 0;
        }
    }

    /// Linearly interpolated sample `delay` frames behind the write pointer.
    ///
    /// `delay` must lie in `[0, capacity)`. A delay of 0 returns the frame
    /// most recently written at the write pointer.
    #[inline]
    pub fn read(&self, channel: Channel, delay: f32) -> f32 {
        let data = match channel {
            Channel::Left => &self.left,
            Channel::Right => &self.right,
        };
        read_interpolated(data, self.write_pos, delay)
    }
}

#[inline]
fn read_interpolated(data: &[f32], write_pos: usize, delay: f32) -> f32 {
    let len = data.len();
    debug_assert!(delay >= 0.0 && (delay as usize) < len);

    let whole = delay as usize;
    let frac = delay - whole as f32;

    let newer = (write_pos + len - whole % len) % len;
    let older = if newer == 0 { len - 1 } else { newer - 1 };

    data[newer] + frac * (data[older] - data[newer])
}

//! A counting stub random source.

use rand::RngCore;

/// Yields a fixed word on every draw and counts the draws.
///
/// Useful for asserting that deterministic rule paths never touch the
/// random source, and for pinning stochastic paths to a known outcome.
#[derive(Debug)]
pub struct CountingRng {
    word: u64,
    draws: u64,
}

impl CountingRng {
    /// A source that always yields `word`.
    pub fn new(word: u64) -> Self {
        Self { word, draws: 0 }
    }

    /// How many words have been drawn so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl RngCore for CountingRng {
    fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        self.word as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.draws += 1;
        self.word
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.draws += 1;
        for chunk in dest.chunks_mut(8) {
            let bytes = self.word.to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

#![forbid(unsafe_code)]

//! Seeded xorshift PRNG over four signed 32-bit words.
//!
//! This is the generator used by the blockies family of identicon
//! renderers. Its output is defined by signed 32-bit two's-complement
//! wraparound: every state update truncates to the low 32 bits, and
//! right shifts are arithmetic (sign-preserving). All of that is
//! load-bearing for reproducibility, so the state is `[i32; 4]` and
//! every mutation goes through explicit `wrapping_*` operations.
//!
//! Not a cryptographic generator. The stream is trivially
//! predictable, and that is the point.

/// Deterministic four-word xorshift generator seeded from a string.
///
/// Each generation call owns its own instance, so concurrent callers
/// never interleave draws from a shared stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    state: [i32; 4],
}

impl SeededRng {
    /// Seed the generator from an arbitrary string.
    ///
    /// Characters are folded in Unicode code point order, round-robin
    /// across the four words:
    ///
    /// ```text
    /// state[i % 4] = trunc32(state[i % 4] << 5) - state[i % 4] + codepoint
    /// ```
    ///
    /// An empty seed leaves the state all-zero. That is a valid,
    /// fully deterministic generator whose draws are all `0.0`; it is
    /// deliberately not special-cased.
    #[must_use]
    pub fn from_seed(seed: &str) -> Self {
        let mut state = [0i32; 4];
        for (i, ch) in seed.chars().enumerate() {
            let word = state[i % 4];
            let t = word.wrapping_shl(5);
            state[i % 4] = t.wrapping_sub(word).wrapping_add(ch as i32);
        }
        Self { state }
    }

    /// Advance the stream and return the next draw in `[0, 1)`.
    ///
    /// The draw is `|state[3]| / (2^31 - 1)` after the xorshift step.
    /// When the new `state[3]` lands on `i32::MIN`, whose magnitude
    /// exceeds `i32::MAX`, the result marginally exceeds `1.0`. The
    /// reference leaves that unclamped and consumers depend on the raw
    /// value, so no clamping happens here either.
    pub fn next_f64(&mut self) -> f64 {
        let t = self.state[0] ^ self.state[0].wrapping_shl(11);
        self.state[0] = self.state[1];
        self.state[1] = self.state[2];
        self.state[2] = self.state[3];
        self.state[3] = self.state[3] ^ (self.state[3] >> 19) ^ t ^ (t >> 8);
        f64::from(self.state[3]).abs() / f64::from(i32::MAX)
    }

    /// Raw state words, in order.
    #[must_use]
    pub const fn state(&self) -> [i32; 4] {
        self.state
    }
}

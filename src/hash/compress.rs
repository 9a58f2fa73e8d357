//! Compression function
//!
//! [`HashState`] is the only value carried across blocks. Each block loads
//! it into [`WorkingRegisters`], runs 64 rounds, and folds the registers
//! back with wrapping addition.

use core::fmt;

use super::{INITIAL_STATE, MessageSchedule, ROUND_CONSTANTS, STATE_WORDS};

/// Running hash value `H0..H7`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashState([u32; STATE_WORDS]);

impl HashState {
    /// State before the first block.
    #[must_use]
    pub const fn initial() -> Self {
        Self(INITIAL_STATE)
    }

    /// Construct from raw words.
    #[must_use]
    pub const fn from_words(words: [u32; STATE_WORDS]) -> Self {
        Self(words)
    }

    /// Borrow the state words.
    #[must_use]
    pub fn words(&self) -> &[u32; STATE_WORDS] {
        &self.0
    }

    /// Run the 64 rounds over `schedule` and return the updated state.
    #[must_use]
    pub fn compress(self, schedule: &MessageSchedule) -> Self {
        let mut registers = WorkingRegisters::load(&self);
        for (&k, &w) in ROUND_CONSTANTS.iter().zip(schedule.words()) {
            registers.round(k, w);
        }
        registers.fold_into(self)
    }
}

impl Default for HashState {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Debug for HashState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HashState(")?;
        for (idx, word) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{word:08x}")?;
        }
        f.write_str(")")
    }
}

/// Registers `a..h` for one block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkingRegisters {
    /// Register `a`
    pub a: u32,
    /// Register `b`
    pub b: u32,
    /// Register `c`
    pub c: u32,
    /// Register `d`
    pub d: u32,
    /// Register `e`
    pub e: u32,
    /// Register `f`
    pub f: u32,
    /// Register `g`
    pub g: u32,
    /// Register `h`
    pub h: u32,
}

impl WorkingRegisters {
    /// Load `a = H0 .. h = H7`.
    #[must_use]
    pub fn load(state: &HashState) -> Self {
        let [a, b, c, d, e, f, g, h] = state.0;
        Self {
            a,
            b,
            c,
            d,
            e,
            f,
            g,
            h,
        }
    }

    /// One compression round with round constant `k` and schedule word `w`.
    #[inline(always)]
    pub fn round(&mut self, k: u32, w: u32) {
        let t1 = self
            .h
            .wrapping_add(big_sigma1(self.e))
            .wrapping_add(choice(self.e, self.f, self.g))
            .wrapping_add(k)
            .wrapping_add(w);
        let t2 = big_sigma0(self.a).wrapping_add(majority(self.a, self.b, self.c));

        self.h = self.g;
        self.g = self.f;
        self.f = self.e;
        self.e = self.d.wrapping_add(t1);
        self.d = self.c;
        self.c = self.b;
        self.b = self.a;
        self.a = t1.wrapping_add(t2);
    }

    /// Add the registers into `state` position by position.
    #[must_use]
    pub fn fold_into(self, state: HashState) -> HashState {
        let registers = [
            self.a, self.b, self.c, self.d, self.e, self.f, self.g, self.h,
        ];
        let mut words = state.0;
        for (word, register) in words.iter_mut().zip(registers) {
            *word = word.wrapping_add(register);
        }
        HashState(words)
    }
}

#[inline(always)]
fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
fn choice(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

#[inline(always)]
fn majority(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

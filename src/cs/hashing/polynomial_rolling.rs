//! # Polynomial Rolling Hash
//!
//! A polynomial rolling hash over a fixed-length window, for substring search
//! and fingerprinting. The window is filled with `update` and then slid one item
//! at a time with `roll`, which costs O(1): the outgoing item's contribution is
//! removed using the precomputed power `base^(len-1) mod modulus`.
//!
//! [`DoubleRollingHash`] runs two such hashes with different moduli in lockstep
//! and packs both values into a single 64-bit composite key, which makes false
//! matches between different windows far less likely.
//!
//! **Note**: This is **not** cryptographically secure. Equal keys only suggest
//! equal windows; callers that need certainty must compare the items.

/// Default base (multiplier).
pub const DEFAULT_BASE: u64 = 31;
/// Default modulus, a prime below 2^30.
pub const DEFAULT_MODULUS: u64 = 1_000_000_007;
/// Default modulus for the second hash of a [`DoubleRollingHash`].
pub const DEFAULT_SECONDARY_MODULUS: u64 = 1_000_000_009;

/// Largest modulus accepted; keeps every hash value within 32 bits so two of
/// them pack into one `u64`.
const MAX_MODULUS: u64 = 1 << 32;

/// A builder for polynomial rolling hashes, allowing you to set base and modulus.
#[derive(Debug, Clone)]
pub struct PolyHashBuilder {
    base: u64,
    modulus: u64,
}

impl Default for PolyHashBuilder {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            modulus: DEFAULT_MODULUS,
        }
    }
}

impl PolyHashBuilder {
    /// Creates a new builder with default base/modulus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base (the multiplier used in the polynomial).
    pub fn with_base(mut self, base: u64) -> Self {
        assert!(base > 1, "base must be > 1");
        self.base = base;
        self
    }

    /// Sets the modulus. Must be in `2..=2^32`; a large prime gives fewer collisions.
    pub fn with_modulus(mut self, modulus: u64) -> Self {
        assert!(
            modulus > 1 && modulus <= MAX_MODULUS,
            "modulus must be in 2..=2^32"
        );
        self.modulus = modulus;
        self
    }

    /// Build the polynomial rolling hasher with the specified parameters.
    pub fn build(self) -> PolynomialRollingHash {
        PolynomialRollingHash {
            base: self.base,
            modulus: self.modulus,
            current_hash: 0,
            current_len: 0,
            current_power: 1,
            lead_power: 0,
        }
    }
}

/// A polynomial rolling hash over a window of items, in `[0..modulus)`.
#[derive(Debug, Clone)]
pub struct PolynomialRollingHash {
    base: u64,
    modulus: u64,
    current_hash: u64,
    /// Number of items in the window.
    current_len: usize,
    /// base^len
    current_power: u64,
    /// base^(len-1), the weight of the oldest item; 0 for an empty window.
    lead_power: u64,
}

impl Default for PolynomialRollingHash {
    fn default() -> Self {
        Self::new()
    }
}

impl PolynomialRollingHash {
    /// Creates a new polynomial rolling hash with default base/modulus.
    pub fn new() -> Self {
        PolyHashBuilder::new().build()
    }

    /// Resets the hasher state to empty.
    pub fn clear(&mut self) {
        self.current_hash = 0;
        self.current_len = 0;
        self.current_power = 1;
        self.lead_power = 0;
    }

    /// Returns the current hash value mod `modulus`.
    pub fn current_hash(&self) -> u64 {
        self.current_hash
    }

    /// Number of items in the window.
    pub fn len(&self) -> usize {
        self.current_len
    }

    pub fn is_empty(&self) -> bool {
        self.current_len == 0
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Appends every byte of `data` to the window.
    pub fn hash_slice(&mut self, data: &[u8]) {
        for &b in data {
            self.update(b as u64);
        }
    }

    /// Appends one item to the window, growing it by one.
    pub fn update(&mut self, x: u64) {
        let shifted = mul_mod(self.current_hash, self.base, self.modulus);
        self.current_hash = add_mod(shifted, x % self.modulus, self.modulus);

        self.current_len += 1;
        self.lead_power = self.current_power;
        self.current_power = mul_mod(self.current_power, self.base, self.modulus);
    }

    /// Slides the window by one: drops `outgoing` from the front and appends
    /// `incoming`. `outgoing` must be the oldest item in the window.
    ///
    /// # Panics
    /// - if the window is empty.
    pub fn roll(&mut self, outgoing: u64, incoming: u64) {
        assert!(self.current_len > 0, "cannot roll an empty window");
        let delta = mul_mod(outgoing % self.modulus, self.lead_power, self.modulus);
        let trimmed = sub_mod(self.current_hash, delta, self.modulus);
        let shifted = mul_mod(trimmed, self.base, self.modulus);
        self.current_hash = add_mod(shifted, incoming % self.modulus, self.modulus);
    }
}

/// Two polynomial hashes with a shared base and distinct moduli.
#[derive(Debug, Clone)]
pub struct DoubleRollingHash {
    primary: PolynomialRollingHash,
    secondary: PolynomialRollingHash,
}

impl Default for DoubleRollingHash {
    fn default() -> Self {
        Self::new(DEFAULT_BASE, DEFAULT_MODULUS, DEFAULT_SECONDARY_MODULUS)
    }
}

impl DoubleRollingHash {
    /// # Panics
    /// - if `base <= 1`, a modulus is outside `2..=2^32`, or the moduli are equal.
    pub fn new(base: u64, primary_modulus: u64, secondary_modulus: u64) -> Self {
        assert_ne!(
            primary_modulus, secondary_modulus,
            "the two moduli must differ"
        );
        let builder = PolyHashBuilder::new().with_base(base);
        Self {
            primary: builder.clone().with_modulus(primary_modulus).build(),
            secondary: builder.with_modulus(secondary_modulus).build(),
        }
    }

    pub fn clear(&mut self) {
        self.primary.clear();
        self.secondary.clear();
    }

    pub fn len(&self) -> usize {
        self.primary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }

    pub fn update(&mut self, x: u64) {
        self.primary.update(x);
        self.secondary.update(x);
    }

    pub fn roll(&mut self, outgoing: u64, incoming: u64) {
        self.primary.roll(outgoing, incoming);
        self.secondary.roll(outgoing, incoming);
    }

    /// Both hash values as `(primary, secondary)`.
    pub fn hashes(&self) -> (u64, u64) {
        (self.primary.current_hash(), self.secondary.current_hash())
    }

    /// Primary hash in the high 32 bits, secondary in the low 32 bits.
    pub fn composite_key(&self) -> u64 {
        let (h1, h2) = self.hashes();
        (h1 << 32) | h2
    }
}

// internal ops; all operands are already reduced below `m`

#[inline]
fn add_mod(a: u64, b: u64, m: u64) -> u64 {
    let s = a + b;
    if s >= m {
        s - m
    } else {
        s
    }
}

#[inline]
fn sub_mod(a: u64, b: u64, m: u64) -> u64 {
    if a >= b {
        a - b
    } else {
        (a + m) - b
    }
}

#[inline]
fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

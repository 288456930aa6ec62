//! Per-document identifier registry.
//!
//! [`Ids`] records every identifier claimed within one loaded document together
//! with the element that owns it, and generates fresh identifiers that are
//! guaranteed not to collide with anything already claimed.
//!
//! # Generation
//!
//! Fresh identifiers are random strings of digits in a configurable base. The
//! [`IdPolicy`] has three tiers:
//!
//! - `bits`: entropy of the random core; the string is long enough to hold
//!   `bits` bits of randomness in the chosen base.
//! - `base`: radix of each generated digit (2 to 36).
//! - `expand_by`: number of bits added to the core after too many consecutive
//!   collisions, so generation always terminates. The core never grows past
//!   [`MAX_BITS`].
//!
//! The default policy is `32 / 36 / 1`, which yields seven base-36 digits.
//!
//! # Examples
//!
//! ```
//! use dmn_modeler_core::{identifier::Id, ids::Ids};
//!
//! let mut ids: Ids<&str> = Ids::default();
//! ids.claim(Id::new("decision"), "decision element");
//!
//! let fresh = ids.next_prefixed("Decision_", "new decision");
//! assert_ne!(fresh, "decision");
//! assert!(ids.is_claimed(fresh));
//!
//! ids.clear();
//! assert!(ids.is_empty());
//! ```

use std::collections::HashMap;

use log::{debug, trace};
use rand::Rng;
use serde::Deserialize;
use thiserror::Error;

use crate::identifier::Id;

/// Digits used for generated identifiers, indexed by value.
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Consecutive collisions tolerated before the random core grows.
const MAX_COLLISIONS: usize = 10;

/// Upper bound on the entropy of the random core, in bits.
pub const MAX_BITS: u32 = 256;

/// Errors produced when validating an [`IdPolicy`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdPolicyError {
    #[error("identifier entropy must be at least 1 bit")]
    ZeroBits,

    #[error("identifier entropy must be at most {max} bits, got {0}", max = MAX_BITS)]
    TooManyBits(u32),

    #[error("identifier base must be between 2 and 36, got {0}")]
    InvalidBase(u32),

    #[error("identifier growth step must be at least 1 bit")]
    ZeroExpansion,

    #[error("identifier growth step must be at most {max} bits, got {0}", max = MAX_BITS)]
    ExpansionTooLarge(u32),
}

/// Length policy for generated identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IdPolicy {
    bits: u32,
    base: u32,
    expand_by: u32,
}

impl Default for IdPolicy {
    fn default() -> Self {
        Self {
            bits: 32,
            base: 36,
            expand_by: 1,
        }
    }
}

impl IdPolicy {
    /// Creates a validated policy.
    ///
    /// # Errors
    ///
    /// Returns [`IdPolicyError`] when `bits` or `expand_by` is outside
    /// `1..=MAX_BITS`, or when `base` is outside `2..=36`.
    pub fn new(bits: u32, base: u32, expand_by: u32) -> Result<Self, IdPolicyError> {
        let policy = Self {
            bits,
            base,
            expand_by,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Checks the policy invariants.
    ///
    /// Policies obtained through deserialization are not validated until
    /// this is called.
    pub fn validate(&self) -> Result<(), IdPolicyError> {
        if self.bits == 0 {
            return Err(IdPolicyError::ZeroBits);
        }
        if self.bits > MAX_BITS {
            return Err(IdPolicyError::TooManyBits(self.bits));
        }
        if !(2..=36).contains(&self.base) {
            return Err(IdPolicyError::InvalidBase(self.base));
        }
        if self.expand_by == 0 {
            return Err(IdPolicyError::ZeroExpansion);
        }
        if self.expand_by > MAX_BITS {
            return Err(IdPolicyError::ExpansionTooLarge(self.expand_by));
        }
        Ok(())
    }

    /// Entropy of the random core, in bits.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Radix of generated digits.
    pub fn base(&self) -> u32 {
        self.base
    }

    /// Bits added after repeated collisions.
    pub fn expand_by(&self) -> u32 {
        self.expand_by
    }
}

/// Number of `base` digits needed to carry `bits` bits of entropy.
fn digits_for(bits: u32, base: u32) -> usize {
    let digits = f64::from(bits) * std::f64::consts::LN_2 / f64::from(base).ln();
    // Guard against `3.0000000001`-style rounding on exact powers.
    (digits - 1e-9).ceil().max(1.0) as usize
}

/// Registry of identifiers claimed within one document.
///
/// `T` is the owner recorded for each claimed identifier; the modeler uses a
/// lightweight element handle.
#[derive(Debug, Clone)]
pub struct Ids<T> {
    policy: IdPolicy,
    bits: u32,
    claimed: HashMap<Id, T>,
}

impl<T> Default for Ids<T> {
    fn default() -> Self {
        Self::new(IdPolicy::default())
    }
}

impl<T> Ids<T> {
    /// Creates an empty registry generating identifiers with `policy`.
    pub fn new(policy: IdPolicy) -> Self {
        Self {
            policy,
            bits: policy.bits,
            claimed: HashMap::new(),
        }
    }

    /// Returns the generation policy.
    pub fn policy(&self) -> IdPolicy {
        self.policy
    }

    /// Removes every claimed identifier.
    pub fn clear(&mut self) {
        trace!(count = self.claimed.len(); "Clearing identifier registry");
        self.claimed.clear();
        self.bits = self.policy.bits;
    }

    /// Registers `id` as used by `owner`.
    ///
    /// Claiming an identifier that is already claimed replaces its owner;
    /// the previous owner is returned so callers can report the duplicate.
    pub fn claim(&mut self, id: Id, owner: T) -> Option<T> {
        self.claimed.insert(id, owner)
    }

    /// Releases `id`, returning its owner if it was claimed.
    pub fn unclaim(&mut self, id: Id) -> Option<T> {
        self.claimed.remove(&id)
    }

    /// Returns the owner of `id`, if claimed.
    pub fn assigned(&self, id: Id) -> Option<&T> {
        self.claimed.get(&id)
    }

    /// Returns true if `id` is claimed.
    pub fn is_claimed(&self, id: Id) -> bool {
        self.claimed.contains_key(&id)
    }

    /// Number of claimed identifiers.
    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    /// Returns true if nothing is claimed.
    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }

    /// Iterates over claimed identifiers and their owners, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Id, &T)> {
        self.claimed.iter().map(|(id, owner)| (*id, owner))
    }

    /// Generates a fresh identifier, claims it for `owner` and returns it.
    pub fn next(&mut self, owner: T) -> Id {
        self.next_prefixed("", owner)
    }

    /// Generates a fresh identifier starting with `prefix`, claims it for
    /// `owner` and returns it.
    ///
    /// The result is never an identifier that was already claimed.
    pub fn next_prefixed(&mut self, prefix: &str, owner: T) -> Id {
        self.next_prefixed_with(prefix, |_| owner)
    }

    /// Like [`Ids::next_prefixed`], for owners that embed their own identifier.
    ///
    /// `owner` receives the generated identifier and builds the value to claim.
    pub fn next_prefixed_with(&mut self, prefix: &str, owner: impl FnOnce(Id) -> T) -> Id {
        let id = self.generate(prefix);
        self.claimed.insert(id, owner(id));
        id
    }

    fn generate(&mut self, prefix: &str) -> Id {
        let mut rng = rand::rng();
        let mut collisions = 0;

        loop {
            let len = digits_for(self.bits, self.policy.base);
            let suffix: String = (0..len)
                .map(|_| ALPHABET[rng.random_range(0..self.policy.base as usize)] as char)
                .collect();

            let candidate = Id::with_prefix(prefix, &suffix);
            if !self.claimed.contains_key(&candidate) {
                return candidate;
            }

            collisions += 1;
            if collisions > MAX_COLLISIONS {
                self.bits = (self.bits + self.policy.expand_by).min(MAX_BITS);
                collisions = 0;
                debug!(bits = self.bits; "Too many identifier collisions, expanding");
            }
        }
    }
}

//! Known-plaintext key-recovery attacks against the double cipher.
//!
//! Both attacks target the two-key composition underlying DS-DEA and
//! consume the single-stage block cipher only: the known pairs were
//! produced without chaining.

use smallvec::SmallVec;

use crate::cipher::BlockCipher;

pub mod brute;
pub mod mitm;

// The number of threads used for parallel searches is fixed
lazy_static! {
    static ref THREADS: usize = num_cpus::get();
}

/// The ordered half-encryptions of the known plaintexts under one
/// first-stage key.
pub type MiddleText = SmallVec<[u8; 8]>;

/// A plaintext/ciphertext pair produced by single-stage double encryption
/// under the searched-for key pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KnownPair {
    pub plaintext: u8,
    pub ciphertext: u8,
}

/// The known pairs the attacks run against.
pub const KNOWN_PAIRS: [KnownPair; 5] = [
    KnownPair { plaintext: 0x42, ciphertext: 0x52 },
    KnownPair { plaintext: 0x72, ciphertext: 0xf0 },
    KnownPair { plaintext: 0x75, ciphertext: 0xbe },
    KnownPair { plaintext: 0x74, ciphertext: 0x69 },
    KnownPair { plaintext: 0x65, ciphertext: 0x8a },
];

/// Checks a candidate key pair against every known pair.
pub fn consistent(cipher: &dyn BlockCipher,
                  keys: (u16, u16),
                  pairs: &[KnownPair])
                  -> bool {
    pairs.iter().all(|pair| {
        cipher.encrypt(cipher.encrypt(pair.plaintext, keys.0), keys.1)
            == pair.ciphertext
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::sdes::Sdes;

    #[test]
    fn meet_in_the_middle_recovers_consistent_keys() {
        let cipher = Sdes::new();

        let keys = mitm::run(&cipher, &KNOWN_PAIRS).expect("no key pair found");

        assert!(consistent(&cipher, keys, &KNOWN_PAIRS));
    }

    #[test]
    fn brute_force_recovers_consistent_keys() {
        let cipher = Sdes::new();

        let keys = brute::run(&cipher, &KNOWN_PAIRS).expect("no key pair found");

        assert!(consistent(&cipher, keys, &KNOWN_PAIRS));
    }

    #[test]
    fn contradictory_pairs_are_rejected_by_both_searches() {
        // No key pair maps one plaintext to two ciphertexts, so the
        // explicit not-found outcome is returned
        let cipher = Sdes::new();
        let pairs = [
            KnownPair { plaintext: 0x00, ciphertext: 0x11 },
            KnownPair { plaintext: 0x00, ciphertext: 0x22 },
        ];

        assert_eq!(None, mitm::run(&cipher, &pairs));
        assert_eq!(None, brute::run(&cipher, &pairs));
    }
}

//! Implementation of S-DES, the 8-bit block, 10-bit key teaching variant
//! of DES.

use crate::bits::{permute, rotate_left};
use crate::cipher::BlockCipher;
use crate::sbox::Sbox;

/*****************************************************************
                            S-DES
******************************************************************/

/// The number of Feistel rounds.
const ROUNDS: usize = 4;

/// The mask clearing everything above the 10 key bits.
pub const KEY_MASK: u16 = 0b0000_0011_1111_1111;

lazy_static! {
    /// The two substitution boxes of the round function.
    static ref S0: Sbox = Sbox::new(vec![1, 0, 3, 2,
                                         3, 2, 1, 0,
                                         0, 2, 1, 3,
                                         3, 1, 3, 2]);

    static ref S1: Sbox = Sbox::new(vec![0, 1, 2, 3,
                                         2, 0, 1, 3,
                                         3, 0, 1, 0,
                                         2, 1, 0, 3]);
}

/// A structure representing the S-DES cipher.
#[derive(Clone)]
pub struct Sdes;

impl Sdes {
    /// The initial permutation and its inverse.
    const IP: [u8; 8] = [2, 6, 3, 1, 4, 8, 5, 7];
    const IP_INV: [u8; 8] = [4, 1, 3, 5, 7, 2, 8, 6];

    /// The permuted choice vectors of the key schedule.
    const PC1: [u8; 10] = [3, 5, 2, 7, 4, 10, 1, 9, 8, 6];
    const PC2: [u8; 8] = [6, 3, 7, 4, 8, 5, 10, 9];

    /// Left rotation counts of the key schedule. The counts apply to the
    /// halves as rotated by the previous round, not to the PC1 output.
    const ROTATIONS: [u32; ROUNDS] = [1, 2, 2, 2];

    /// The expansion vector of the round function. Bits are duplicated on
    /// purpose.
    const E: [u8; 8] = [4, 1, 2, 3, 2, 3, 4, 1];

    /// The permutation vector of the round function.
    const P: [u8; 4] = [2, 4, 3, 1];

    /// Creates a new instance of the cipher.
    pub fn new() -> Sdes {
        Sdes
    }

    /// Derives the four round subkeys from a 10-bit key. Excess high key
    /// bits are silently discarded.
    pub fn schedule_keys(&self, key: u16) -> [u8; ROUNDS] {
        let pc1 = permute(key & KEY_MASK, &Sdes::PC1, 10);

        let mut c = (pc1 >> 5) & 0b11111;
        let mut d = pc1 & 0b11111;
        let mut keys = [0; ROUNDS];

        for (round, subkey) in keys.iter_mut().enumerate() {
            c = rotate_left(c, Sdes::ROTATIONS[round], 5);
            d = rotate_left(d, Sdes::ROTATIONS[round], 5);

            *subkey = permute((c << 5) | d, &Sdes::PC2, 10) as u8;
        }

        keys
    }

    /// The round function: expands the right half, mixes in the subkey,
    /// substitutes and permutes. Returns a 4-bit value.
    fn f(&self, r: u8, subkey: u8) -> u8 {
        let expanded = permute(u16::from(r) << 4, &Sdes::E, 8) as u8 ^ subkey;

        let s0 = S0.apply(expanded >> 4);
        let s1 = S1.apply(expanded & 0x0f);

        permute(u16::from((s0 << 2) | s1), &Sdes::P, 4) as u8
    }

    /// Runs the Feistel network over one block in the given subkey order.
    /// Feeding a ciphertext and the reversed schedule deciphers it.
    fn cipher(&self, block: u8, keys: &[u8; ROUNDS]) -> u8 {
        let permuted = permute(u16::from(block), &Sdes::IP, 8) as u8;

        let mut l = permuted >> 4;
        let mut r = permuted & 0x0f;

        for &subkey in keys {
            let next = l ^ self.f(r, subkey);
            l = r;
            r = next;
        }

        // The halves recombine swapped before the output permutation
        let preoutput = (r << 4) | l;

        permute(u16::from(preoutput), &Sdes::IP_INV, 8) as u8
    }
}

impl BlockCipher for Sdes {
    fn key_size(&self) -> usize {
        10
    }

    fn encrypt(&self, block: u8, key: u16) -> u8 {
        self.cipher(block, &self.schedule_keys(key))
    }

    fn decrypt(&self, block: u8, key: u16) -> u8 {
        let mut keys = self.schedule_keys(key);
        keys.reverse();

        self.cipher(block, &keys)
    }

    fn name(&self) -> String {
        String::from("S-DES")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn variable_plaintext_known_answers() {
        let cipher = Sdes::new();
        let answers = [0xa8, 0xbe, 0x16, 0x4a, 0x49, 0x4e, 0x15, 0x68];

        for (i, &answer) in answers.iter().enumerate() {
            assert_eq!(answer, cipher.encrypt(0x80 >> i, 0));
        }
    }

    #[test]
    fn inverse_permutation_known_answers() {
        // Key 0 is self-dual: re-encrypting the variable-plaintext
        // ciphertexts recovers the basis vectors
        let cipher = Sdes::new();
        let ciphertexts = [0xa8, 0xbe, 0x16, 0x4a, 0x49, 0x4e, 0x15, 0x68];

        for (i, &ciphertext) in ciphertexts.iter().enumerate() {
            assert_eq!(0x80 >> i, cipher.encrypt(ciphertext, 0));
        }
    }

    #[test]
    fn variable_key_known_answers() {
        let cipher = Sdes::new();
        let answers = [0x61, 0x13, 0x4f, 0xe5, 0x65,
                       0x5c, 0xae, 0xd9, 0xaa, 0x4e];

        for (i, &answer) in answers.iter().enumerate() {
            assert_eq!(answer, cipher.encrypt(0, 0b10_0000_0000 >> i));
        }
    }

    #[test]
    fn permutation_operation_known_answers() {
        let cipher = Sdes::new();
        let cases = [(0b00_0000_0011, 0x03),
                     (0b00_1100_1010, 0x22),
                     (0b00_0101_1001, 0x40),
                     (0b10_1100_1111, 0x60)];

        for &(key, answer) in cases.iter() {
            assert_eq!(answer, cipher.encrypt(0, key));
        }
    }

    #[test]
    fn substitution_table_known_answers() {
        let cipher = Sdes::new();
        let cases = [(0b00_0110_1101, 0x87),
                     (0b00_0110_1110, 0xb6),
                     (0b00_0111_0000, 0xb4),
                     (0b00_0111_0001, 0x33),
                     (0b00_0111_0110, 0xd9),
                     (0b00_0111_1000, 0x8d),
                     (0b00_0111_1001, 0x11)];

        for &(key, answer) in cases.iter() {
            assert_eq!(answer, cipher.encrypt(0, key));
        }
    }

    #[test]
    fn initial_permutations_invert_each_other() {
        for block in 0..=0xff {
            let permuted = permute(block, &Sdes::IP, 8);
            assert_eq!(block, permute(permuted, &Sdes::IP_INV, 8));
        }
    }

    #[test]
    fn encryption_decryption_bijective_over_full_domain() {
        let cipher = Sdes::new();

        for key in 0..1u16 << cipher.key_size() {
            for block in 0..=0xff {
                let ciphertext = cipher.encrypt(block, key);
                assert_eq!(block, cipher.decrypt(ciphertext, key));
            }
        }
    }

    #[quickcheck]
    fn wide_keys_are_masked(block: u8, key: u16) -> bool {
        let cipher = Sdes::new();

        cipher.encrypt(block, key) == cipher.encrypt(block, key & KEY_MASK)
    }
}

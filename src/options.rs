//! Command-line interface of the tool. Each subcommand maps onto exactly
//! one core operation and performs no cipher logic itself.

use structopt::StructOpt;

use crate::utility::parse_key;

#[derive(StructOpt)]
#[structopt(name = "dsdea",
            about = "Encrypt, decrypt and attack the DS-DEA double cipher.")]
pub enum DsdeaOptions {
    /// Encrypts a hex-encoded message under two 10-bit keys.
    #[structopt(name = "encrypt")]
    Encrypt {
        /// The first-stage key (decimal, 0b... or 0x...).
        #[structopt(long = "key1", parse(try_from_str = parse_key))]
        key1: u16,

        /// The second-stage key.
        #[structopt(long = "key2", parse(try_from_str = parse_key))]
        key2: u16,

        /// The message as hexadecimal characters.
        message: String,
    },

    /// Decrypts a hex-encoded message under two 10-bit keys.
    #[structopt(name = "decrypt")]
    Decrypt {
        /// The first-stage key (decimal, 0b... or 0x...).
        #[structopt(long = "key1", parse(try_from_str = parse_key))]
        key1: u16,

        /// The second-stage key.
        #[structopt(long = "key2", parse(try_from_str = parse_key))]
        key2: u16,

        /// The ciphertext as hexadecimal characters.
        message: String,
    },

    /// Runs the brute-force attack against the built-in known pairs.
    #[structopt(name = "brute")]
    Brute,

    /// Runs the meet-in-the-middle attack against the built-in known
    /// pairs.
    #[structopt(name = "mitm")]
    Mitm,

    /// Recovers the keys via meet-in-the-middle, then decrypts a message
    /// with them.
    #[structopt(name = "recover")]
    Recover {
        /// The ciphertext as hexadecimal characters.
        message: String,
    },

    /// Generates a fresh random pair of 10-bit keys.
    #[structopt(name = "keygen")]
    Keygen,
}

#[macro_use]
extern crate lazy_static;

mod attack;
mod bits;
mod cipher;
mod dsdea;
mod options;
mod sbox;
mod utility;

use rand::Rng;
use structopt::StructOpt;

use crate::attack::KNOWN_PAIRS;
use crate::cipher::sdes::Sdes;
use crate::options::DsdeaOptions;
use crate::utility::{parse_hex, to_hex};

fn main() {
    match DsdeaOptions::from_args() {
        DsdeaOptions::Encrypt { key1, key2, message } => {
            if let Some(data) = read_hex(&message) {
                println!("{}", to_hex(&dsdea::encrypt(&data, (key1, key2))));
            }
        },
        DsdeaOptions::Decrypt { key1, key2, message } => {
            if let Some(data) = read_hex(&message) {
                print_plaintext(&dsdea::decrypt(&data, (key1, key2)));
            }
        },
        DsdeaOptions::Brute => {
            let cipher = Sdes::new();

            report_attack(&cipher, attack::brute::run(&cipher, &KNOWN_PAIRS));
        },
        DsdeaOptions::Mitm => {
            let cipher = Sdes::new();

            report_attack(&cipher, attack::mitm::run(&cipher, &KNOWN_PAIRS));
        },
        DsdeaOptions::Recover { message } => {
            let data = match read_hex(&message) {
                Some(data) => data,
                None => return,
            };

            let cipher = Sdes::new();

            match attack::mitm::run(&cipher, &KNOWN_PAIRS) {
                Some(keys) => {
                    print_keys(keys);
                    print_plaintext(&dsdea::decrypt(&data, keys));
                },
                None => println!("No key pair is consistent with the known pairs."),
            }
        },
        DsdeaOptions::Keygen => {
            let mut rng = rand::thread_rng();

            print_keys((rng.gen_range(0u16..1 << 10), rng.gen_range(0u16..1 << 10)));
        },
    }
}

/// Parses CLI hex input, reporting the failure to the user.
fn read_hex(message: &str) -> Option<Vec<u8>> {
    match parse_hex(message) {
        Ok(data) => Some(data),
        Err(reason) => {
            println!("{}", reason);
            None
        },
    }
}

/// Prints the outcome of a key-recovery attack.
fn report_attack(cipher: &Sdes, keys: Option<(u16, u16)>) {
    match keys {
        Some(keys) => {
            debug_assert!(attack::consistent(cipher, keys, &KNOWN_PAIRS));
            print_keys(keys);
        },
        None => println!("No key pair is consistent with the known pairs."),
    }
}

/// Prints a key pair in the binary notation of the exercises.
fn print_keys(keys: (u16, u16)) {
    println!("Key 1: 0b{:010b}", keys.0);
    println!("Key 2: 0b{:010b}", keys.1);
}

/// Prints recovered plaintext as hex and, when printable, as ASCII.
fn print_plaintext(data: &[u8]) {
    println!("{}", to_hex(data));

    if !data.is_empty() && data.iter().all(|&b| b.is_ascii_graphic() || b == b' ') {
        println!("{}", data.iter().map(|&b| b as char).collect::<String>());
    }
}

//! Exhaustive search over both 10-bit keys.

use std::sync::mpsc;

use crate::attack::{KnownPair, MiddleText, THREADS};
use crate::cipher::BlockCipher;
use crate::utility::ProgressBar;

/**
Recovers the two keys of the double cipher by trying every key pair
against the known pairs. A candidate pair is abandoned on its first
mismatch. Returns the lowest match in (k1, k2) order, or `None` if the
whole domain is inconsistent with the pairs.

cipher      The single-stage block cipher.
pairs       The known plaintext/ciphertext pairs, in fixed order.
*/
pub fn run(cipher: &dyn BlockCipher, pairs: &[KnownPair]) -> Option<(u16, u16)> {
    let start = time::precise_time_s();
    let key_space = 1usize << cipher.key_size();

    println!("Brute-forcing {} {} key pairs:", key_space * key_space, cipher.name());

    let (result_tx, result_rx) = mpsc::channel();

    // Start scoped worker threads, each owning a shard of the first keys
    crossbeam_utils::thread::scope(|scope| {
        for t in 0..*THREADS {
            let result_tx = result_tx.clone();

            scope.spawn(move |_| {
                let mut progress_bar =
                    ProgressBar::new((t..key_space).step_by(*THREADS).len());
                let mut found = None;

                'outer: for k1 in (t..key_space).step_by(*THREADS) {
                    let k1 = k1 as u16;

                    // Half-encrypt the plaintexts once per first key
                    let mids: MiddleText = pairs.iter()
                                                .map(|pair| cipher.encrypt(pair.plaintext, k1))
                                                .collect();

                    for k2 in 0..key_space {
                        let k2 = k2 as u16;

                        let hit = pairs.iter()
                                       .zip(&mids)
                                       .all(|(pair, &mid)| {
                                           cipher.encrypt(mid, k2) == pair.ciphertext
                                       });

                        if hit {
                            found = Some((k1, k2));
                            break 'outer;
                        }
                    }

                    if t == 0 {
                        progress_bar.increment();
                    }
                }

                result_tx.send(found).expect("Thread could not send result");
            });
        }
    }).expect("Worker thread panicked");

    // The lowest match in (k1, k2) order reproduces the result of a
    // sequential scan
    let mut best: Option<(u16, u16)> = None;

    for _ in 0..*THREADS {
        let thread_result = result_rx.recv().expect("Main could not receive result");

        if let Some(keys) = thread_result {
            best = match best {
                Some(current) if current < keys => Some(current),
                _ => Some(keys),
            };
        }
    }

    println!("\nBrute-force search finished. [{} s]", time::precise_time_s() - start);

    best
}

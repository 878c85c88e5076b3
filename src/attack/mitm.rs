//! Meet-in-the-middle search exploiting the two-stage structure of the
//! double cipher.

use std::sync::mpsc;

use crate::attack::{KnownPair, MiddleText, THREADS};
use crate::cipher::BlockCipher;
use crate::utility::ProgressBar;

/**
Recovers the two keys of the double cipher by meeting in the middle:
every first-stage key is tabulated by the half-encryptions it produces,
and every second-stage key's half-decryptions are matched against that
table. Returns the first match in (k2, k1) scan order, or `None` if no
key pair is consistent with the pairs.

cipher      The single-stage block cipher.
pairs       The known plaintext/ciphertext pairs, in fixed order.
*/
pub fn run(cipher: &dyn BlockCipher, pairs: &[KnownPair]) -> Option<(u16, u16)> {
    let start = time::precise_time_s();
    let key_space = 1usize << cipher.key_size();

    println!("Tabulating {} first-stage {} keys:", key_space, cipher.name());

    // Encrypt halfway. The table is dense and indexed by key, which keeps
    // the scan below deterministic
    let table = half_encryptions(cipher, pairs, key_space);

    println!("Built table of {} half-encryptions. [{} s]",
             table.len(), time::precise_time_s() - start);

    // Meet from the back
    let (result_tx, result_rx) = mpsc::channel();

    crossbeam_utils::thread::scope(|scope| {
        for t in 0..*THREADS {
            let result_tx = result_tx.clone();
            let table = &table;

            scope.spawn(move |_| {
                let mut progress_bar =
                    ProgressBar::new((t..key_space).step_by(*THREADS).len());
                let mut found = None;

                'outer: for k2 in (t..key_space).step_by(*THREADS) {
                    let candidate: MiddleText =
                        pairs.iter()
                             .map(|pair| cipher.decrypt(pair.ciphertext, k2 as u16))
                             .collect();

                    for (k1, mids) in table.iter().enumerate() {
                        if *mids == candidate {
                            found = Some((k1 as u16, k2 as u16));
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

    // Workers scan disjoint second-key shards; the lowest (k2, k1) match
    // reproduces the result of a sequential scan
    let mut best: Option<(u16, u16)> = None;

    for _ in 0..*THREADS {
        let thread_result = result_rx.recv().expect("Main could not receive result");

        if let Some((k1, k2)) = thread_result {
            best = match best {
                Some((b1, b2)) if (b2, b1) < (k2, k1) => Some((b1, b2)),
                _ => Some((k1, k2)),
            };
        }
    }

    println!("\nMeet-in-the-middle search finished. [{} s]",
             time::precise_time_s() - start);

    best
}

/// Tabulates the half-encryptions of every known plaintext under every
/// possible first-stage key. Entry `k1` of the result holds the ordered
/// outputs of the first stage over the known pairs.
fn half_encryptions(cipher: &dyn BlockCipher,
                    pairs: &[KnownPair],
                    key_space: usize)
                    -> Vec<MiddleText> {
    let (result_tx, result_rx) = mpsc::channel();

    crossbeam_utils::thread::scope(|scope| {
        for t in 0..*THREADS {
            let result_tx = result_tx.clone();

            scope.spawn(move |_| {
                let mut shard = Vec::new();

                for k1 in (t..key_space).step_by(*THREADS) {
                    let mids: MiddleText =
                        pairs.iter()
                             .map(|pair| cipher.encrypt(pair.plaintext, k1 as u16))
                             .collect();

                    shard.push((k1, mids));
                }

                result_tx.send(shard).expect("Thread could not send result");
            });
        }
    }).expect("Worker thread panicked");

    // Workers own disjoint table entries; merge them back into key order
    let mut table = vec![MiddleText::new(); key_space];

    for _ in 0..*THREADS {
        let shard = result_rx.recv().expect("Main could not receive result");

        for (k1, mids) in shard {
            table[k1] = mids;
        }
    }

    table
}

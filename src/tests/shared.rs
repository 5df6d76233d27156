use crate::{traits::*, HeapRb};
use std::{thread, thread::sleep, time::Duration, vec::Vec};

#[test]
fn unsynchronized_producer_and_consumer() {
    const COUNT: usize = 200;

    let rb = HeapRb::<usize>::new(8);
    let (mut prod, mut cons) = rb.split();

    let pjh = thread::spawn(move || {
        let mut sent = 0;
        while sent < COUNT {
            if prod.try_push(sent).is_ok() {
                sent += 1;
            }
        }
    });

    let cjh = thread::spawn(move || {
        let mut got = Vec::new();
        while got.len() < COUNT {
            if let Some(v) = cons.try_pop() {
                got.push(v);
                if v % 13 == 0 {
                    // Deliberately irregular consumer cadence.
                    sleep(Duration::from_micros((v % 7) as u64 * 50));
                }
            }
        }
        got
    });

    pjh.join().unwrap();
    let got = cjh.join().unwrap();
    assert_eq!(got, (0..COUNT).collect::<Vec<_>>());
}

#[test]
fn concurrent_message() {
    const MSG: &[u8] = b"The quick brown fox jumps over the lazy dog\0";

    let rb = HeapRb::<u8>::new(4);
    let (mut prod, mut cons) = rb.split();

    let pjh = thread::spawn(move || {
        for &b in MSG {
            while prod.try_push(b).is_err() {
                thread::yield_now();
            }
        }
    });

    let cjh = thread::spawn(move || {
        let mut msg = Vec::new();
        while msg.last().copied() != Some(0) {
            if let Some(b) = cons.try_pop() {
                msg.push(b);
            } else {
                sleep(Duration::from_millis(1));
            }
        }
        msg
    });

    pjh.join().unwrap();
    assert_eq!(cjh.join().unwrap(), MSG);
}

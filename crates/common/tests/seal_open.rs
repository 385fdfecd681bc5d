//! Integration tests for sealing and opening across both key models

mod common;

use std::sync::Arc;
use std::thread;

use ::common::prelude::*;
use rand::rngs::OsRng;
use rand::RngCore;

const MESSAGE: &[u8] = b"Ezcrypt is awesome!";

fn random_plaintext(len: usize) -> Vec<u8> {
    let mut data = vec![0u8; len];
    rand::rng().fill_bytes(&mut data);
    data
}

#[test]
fn test_concrete_scenario() {
    common::init_tracing();
    let k = Key::generate(&mut OsRng).unwrap();
    let k2 = Key::generate(&mut OsRng).unwrap();

    let c = symmetric::seal(MESSAGE, Some(&k), Some(&mut OsRng)).unwrap();
    assert_eq!(c.len(), MESSAGE.len() + NONCE_SIZE + OVERHEAD);
    assert_eq!(symmetric::open(&c, Some(&k)).unwrap(), MESSAGE);
    assert!(matches!(
        symmetric::open(&c, Some(&k2)),
        Err(CryptoError::DecryptionFailed)
    ));
}

#[test]
fn test_symmetric_round_trip_sizes() {
    let key = Key::generate(&mut OsRng).unwrap();
    for len in [1, 2, 15, 16, 17, 63, 64, 65, 1024, 64 * 1024] {
        let plaintext = random_plaintext(len);
        let sealed = key.seal(&plaintext, &mut rand::rng()).unwrap();
        assert_ne!(sealed, plaintext);
        assert_eq!(sealed.len(), len + NONCE_SIZE + OVERHEAD);
        assert_eq!(key.open(&sealed).unwrap(), plaintext);
    }
}

#[test]
fn test_asymmetric_round_trip_sizes() {
    let a = Pair::generate(&mut OsRng).unwrap();
    let b = Pair::generate(&mut OsRng).unwrap();
    for len in [1, 31, 32, 33, 4096] {
        let plaintext = random_plaintext(len);
        let sealed = asymmetric::seal(&plaintext, Some(b.public()), Some(&a), Some(&mut OsRng))
            .unwrap();
        assert_ne!(sealed, plaintext);
        let opened = asymmetric::open(&sealed, Some(a.public()), Some(&b)).unwrap();
        assert_eq!(opened, plaintext);
    }
}

#[test]
fn test_ciphers_are_not_interchangeable() {
    let pair = Pair::generate(&mut OsRng).unwrap();
    let private = pair.private().unwrap().clone();

    let sealed = pair.seal_for(pair.public(), MESSAGE, &mut OsRng).unwrap();
    assert!(matches!(
        private.open(&sealed),
        Err(CryptoError::DecryptionFailed)
    ));
}

#[test]
fn test_truncated_ciphertext() {
    let key = Key::generate(&mut OsRng).unwrap();
    let sealed = key.seal(MESSAGE, &mut OsRng).unwrap();

    // dropping bytes from the end still leaves a long enough message,
    // the tag check has to catch it
    let truncated = &sealed[..sealed.len() - 1];
    assert!(matches!(
        key.open(truncated),
        Err(CryptoError::DecryptionFailed)
    ));

    let header_only = &sealed[..NONCE_SIZE + OVERHEAD];
    assert!(matches!(
        key.open(header_only),
        Err(CryptoError::MessageTooShort { .. })
    ));
}

#[test]
fn test_concurrent_seal_open() {
    let key = Arc::new(Key::generate(&mut OsRng).unwrap());
    let recipient = Arc::new(Pair::generate(&mut OsRng).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let key = key.clone();
            let recipient = recipient.clone();
            thread::spawn(move || {
                let sender = Pair::generate(&mut OsRng).unwrap();
                let plaintext = format!("message {}", i).into_bytes();

                let sealed = key.seal(&plaintext, &mut OsRng).unwrap();
                assert_eq!(key.open(&sealed).unwrap(), plaintext);

                let sealed = sender
                    .seal_for(recipient.public(), &plaintext, &mut OsRng)
                    .unwrap();
                assert_eq!(
                    recipient.open_from(sender.public(), &sealed).unwrap(),
                    plaintext
                );
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

//! Published reference vectors and cross-cipher properties, exercised through
//! the public API only.

use classic_cipher::{
    playfair, CaesarCipher, Cipher, CipherError, CipherKind, Key, PlayfairMatrix,
    RailFenceCipher, TranspositionCipher, VigenereCipher,
};

#[test]
fn caesar_vectors() {
    let c = CaesarCipher;
    assert_eq!(c.encrypt("ABC", &Key::from(1)).unwrap(), "BCD");
    assert_eq!(c.encrypt("XYZ", &Key::from(3)).unwrap(), "ABC");
    assert_eq!(c.encrypt("AB 12!", &Key::from(1)).unwrap(), "BC 12!");
    assert_eq!(c.decrypt("BC 12!", &Key::from(1)).unwrap(), "AB 12!");
}

#[test]
fn vigenere_vector() {
    let ct = VigenereCipher
        .encrypt("ATTACKATDAWN", &Key::from("LEMON"))
        .unwrap();
    assert_eq!(ct, "LXFOPVEFRNHR");
}

#[test]
fn rail_fence_vector() {
    let ct = RailFenceCipher
        .encrypt("WEAREDISCOVEREDFLEEATONCE", &Key::from(3))
        .unwrap();
    assert_eq!(ct, "WECRLTEERDSOEEFEAOCAIVDEN");
}

#[test]
fn transposition_inverts_for_lengths_zero_to_twenty() {
    let source = "HELLOWORLD, AGAIN!!!";
    for len in 0..=20 {
        let text = &source[..len];
        let ct = TranspositionCipher.encrypt(text, &Key::from(4)).unwrap();
        let pt = TranspositionCipher.decrypt(&ct, &Key::from(4)).unwrap();
        assert_eq!(pt, text, "len {len}");
    }
}

#[test]
fn playfair_monarchy() {
    let matrix = PlayfairMatrix::build("MONARCHY").unwrap();
    let flat: String = matrix.rows().iter().flatten().collect();
    assert_eq!(flat, "MONARCHYBDEFGIKLPQSTUVWXZ");

    let ct = playfair::PlayfairCipher.playfair_encrypt("HELLO", &matrix);
    assert_eq!(ct, "CFSUPM");
}

#[test]
fn round_trip_all_but_playfair() {
    let text = "Round trip: 2 ciphers, Mixed Case & punctuation.";
    let cases: [(CipherKind, Key); 4] = [
        (CipherKind::Caesar, Key::from(-11)),
        (CipherKind::Vigenere, Key::from("Kryptos")),
        (CipherKind::RailFence, Key::from(5)),
        (CipherKind::Transposition, Key::from(7)),
    ];
    for (kind, key) in cases {
        let cipher = kind.cipher();
        let ct = cipher.encrypt(text, &key).unwrap();
        assert_eq!(cipher.decrypt(&ct, &key).unwrap(), text, "{kind}");
    }
}

#[test]
fn playfair_round_trip_is_on_prepared_text_only() {
    // Lowercase, J, punctuation and the doubled L are all lost in preparation.
    let key = Key::from("Jungle");
    let ct = CipherKind::Playfair.cipher().encrypt("jolly good!", &key).unwrap();
    let pt = CipherKind::Playfair.cipher().decrypt(&ct, &key).unwrap();
    assert_eq!(pt, "IOLXLYGOOD");
    assert_ne!(pt, "jolly good!");
}

#[test]
fn integer_keyed_ciphers_reject_non_numeric_keys() {
    for kind in [CipherKind::Caesar, CipherKind::RailFence, CipherKind::Transposition] {
        let err = kind.cipher().encrypt("HELLO", &Key::from("three")).unwrap_err();
        assert!(matches!(err, CipherError::InvalidKey(_)), "{kind}");
    }
}

#[test]
fn alphabetic_keyed_ciphers_reject_digits_and_punctuation() {
    for kind in [CipherKind::Vigenere, CipherKind::Playfair] {
        for key in ["key1", "key!", "k e y"] {
            let err = kind.cipher().encrypt("HELLO", &Key::from(key)).unwrap_err();
            assert!(matches!(err, CipherError::InvalidKey(_)), "{kind} {key}");
        }
    }
}

#[test]
fn rail_fence_rejects_single_rail() {
    let err = RailFenceCipher.encrypt("HELLO", &Key::from(1)).unwrap_err();
    assert_eq!(
        err,
        CipherError::InvalidKey("Rail Fence key must be an integer greater than 1".into())
    );
}

#[test]
fn ciphers_are_shareable_across_threads() {
    let handles: Vec<_> = (1..=4)
        .map(|shift| {
            std::thread::spawn(move || {
                let cipher = CipherKind::Caesar.cipher();
                cipher.encrypt("ABC", &Key::from(shift)).unwrap()
            })
        })
        .collect();
    let out: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(out, vec!["BCD", "CDE", "DEF", "EFG"]);
}

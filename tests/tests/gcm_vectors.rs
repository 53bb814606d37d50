//! Known-answer tests over the public engine surface

use srtp_aead_symmetric::{construct, AeadEngine, CipherSuite, EngineConfig, Error};
use srtp_aead_tests::vectors::GCM_VECTORS;
use srtp_aead_tests::{decrypt_chunked, encrypt_chunked};

fn keyed(suite: CipherSuite, key: &[u8], tag_len: usize) -> Box<dyn AeadEngine + Send> {
    let mut engine = EngineConfig::new(suite, tag_len).unwrap().build().unwrap();
    engine.init_key(key).unwrap();
    engine
}

#[test]
fn test_vectors_encrypt() {
    for v in GCM_VECTORS.iter().map(|v| v.decode()) {
        let mut engine = keyed(v.suite, &v.key, 16);
        for chunk in [0, 1, 5, 16, 17] {
            let (ct, tag) =
                encrypt_chunked(engine.as_mut(), &v.nonce, &v.aad, &v.plaintext, chunk).unwrap();
            assert_eq!(ct, v.ciphertext, "{} chunk {}", v.name, chunk);
            assert_eq!(tag.as_bytes(), &v.tag[..], "{} chunk {}", v.name, chunk);
        }
    }
}

#[test]
fn test_vectors_decrypt() {
    for v in GCM_VECTORS.iter().map(|v| v.decode()) {
        for tag_len in [8, 16] {
            let mut engine = keyed(v.suite, &v.key, tag_len);
            let mut packet = v.ciphertext.clone();
            packet.extend_from_slice(&v.tag[..tag_len]);

            for chunk in [0, 3, 16] {
                let pt = decrypt_chunked(engine.as_mut(), &v.nonce, &v.aad, &packet, chunk)
                    .unwrap_or_else(|e| panic!("{}: {}", v.name, e));
                assert_eq!(pt, v.plaintext, "{}", v.name);
            }
        }
    }
}

#[test]
fn test_vectors_reject_wrong_tag() {
    for v in GCM_VECTORS.iter().map(|v| v.decode()) {
        let mut engine = keyed(v.suite, &v.key, 16);
        let mut packet = v.ciphertext.clone();
        packet.extend_from_slice(&v.tag);
        let last = packet.len() - 1;
        packet[last] ^= 0x80;

        assert!(
            matches!(
                decrypt_chunked(engine.as_mut(), &v.nonce, &v.aad, &packet, 0),
                Err(Error::AuthenticationFailure { .. })
            ),
            "{}",
            v.name
        );
    }
}

#[test]
fn test_vectors_with_salted_keys() {
    // The host hands over key || salt; only the key part drives AES
    for v in GCM_VECTORS.iter().map(|v| v.decode()) {
        let mut salted = v.key.clone();
        salted.extend_from_slice(&[0xA5; 12]);

        let mut engine = construct(salted.len(), 16).unwrap();
        assert_eq!(engine.suite(), v.suite);
        engine.init_key(&salted).unwrap();

        let (ct, tag) =
            encrypt_chunked(engine.as_mut(), &v.nonce, &v.aad, &v.plaintext, 0).unwrap();
        assert_eq!(ct, v.ciphertext, "{}", v.name);
        assert_eq!(tag.as_bytes(), &v.tag[..], "{}", v.name);
    }
}

#[test]
fn test_backend_self_tests() {
    srtp_aead_symmetric::Aes128GcmContext::self_test().unwrap();
    srtp_aead_symmetric::Aes256GcmContext::self_test().unwrap();
}

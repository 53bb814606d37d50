//! Lifecycle, registry and host-facing behavior through the facade crate

use srtp_aead::params::status;
use srtp_aead::prelude::*;

const NONCE: [u8; 12] = [0x51; 12];

fn keyed_engine(key_len_with_salt: usize, tag_len: usize) -> Box<dyn AeadEngine + Send> {
    let mut engine = construct(key_len_with_salt, tag_len).unwrap();
    engine.init_key(&vec![0x0b; key_len_with_salt]).unwrap();
    engine
}

#[test]
fn test_full_packet_lifecycle() {
    let mut sender = keyed_engine(28, 16);
    let mut receiver = keyed_engine(28, 16);

    for seq in 0u8..8 {
        let mut nonce = NONCE;
        nonce[11] = seq;
        let header = [0x80, 0x60, 0x00, seq];
        let payload = vec![seq; 20 + seq as usize * 7];

        let mut packet = header.to_vec();
        packet.extend_from_slice(&payload);

        sender.set_nonce(Direction::Encrypt, &nonce).unwrap();
        sender.update_aad(&header).unwrap();
        let body_len = packet.len() - header.len();
        sender.encrypt(&mut packet[4..], body_len).unwrap();
        let tag = sender.finalize_tag().unwrap();
        packet.extend_from_slice(tag.as_bytes());
        assert!(!sender.has_nonce());

        receiver.set_nonce(Direction::Decrypt, &nonce).unwrap();
        receiver.update_aad(&packet[..4]).unwrap();
        let len = packet.len() - 4;
        let plain_len = receiver.decrypt(&mut packet[4..], len).unwrap();
        assert_eq!(&packet[4..4 + plain_len], &payload[..]);
    }
}

#[test]
fn test_host_direction_values() {
    let mut engine = keyed_engine(44, 8);

    let direction = Direction::try_from(0).unwrap();
    engine.set_nonce(direction, &NONCE).unwrap();
    assert_eq!(engine.finalize_tag().unwrap().len(), 8);

    let err = Direction::try_from(2).unwrap_err();
    assert_eq!(err.code(), status::BAD_PARAM);
}

#[test]
fn test_error_codes_for_host() {
    let mut engine = construct(28, 16).unwrap();

    let err = engine.set_nonce(Direction::Encrypt, &NONCE).unwrap_err();
    assert_eq!(err.code(), status::CIPHER_FAIL);

    engine.init_key(&[0x0b; 28]).unwrap();
    engine.set_nonce(Direction::Decrypt, &NONCE).unwrap();
    let mut short = [0u8; 4];
    let err = engine.decrypt(&mut short, 4).unwrap_err();
    assert_eq!(err.code(), status::AUTH_FAIL);

    let err = construct(16, 16).err().unwrap();
    assert_eq!(err.code(), status::BAD_PARAM);
}

#[test]
fn test_sequence_violations() {
    let mut engine = keyed_engine(28, 16);
    let mut buf = [0u8; 8];

    assert!(matches!(
        engine.encrypt(&mut buf, 8),
        Err(Error::SequenceError { .. })
    ));

    engine.set_nonce(Direction::Encrypt, &NONCE).unwrap();
    engine.encrypt(&mut buf, 8).unwrap();
    assert!(matches!(engine.update_aad(b"late"), Err(Error::SequenceError { .. })));
    assert!(matches!(
        engine.transform(Direction::Decrypt, &mut buf, 8),
        Err(Error::SequenceError { .. })
    ));

    engine.finalize_tag().unwrap();
    assert!(matches!(engine.finalize_tag(), Err(Error::SequenceError { .. })));
}

#[test]
fn test_registry_selects_by_identifier() {
    let registry = CipherRegistry::default();
    for suite in CipherSuite::ALL {
        let mut engine = registry
            .create_by_id(suite.id(), suite.key_len_with_salt(), 16)
            .unwrap();
        assert_eq!(engine.suite(), suite);
        assert_eq!(engine.key_size(), suite.key_size());
        engine.init_key(&vec![1u8; suite.key_len_with_salt()]).unwrap();
        assert!(engine.has_key());
    }
    registry.self_test_all().unwrap();
}

#[test]
fn test_suite_from_config_name() {
    let suite: CipherSuite = "SRTP_AEAD_AES_256_GCM".parse().unwrap();
    let config = EngineConfig::new(suite, 16).unwrap();
    let engine = config.build().unwrap();
    assert_eq!(engine.name(), "AEAD_AES_256_GCM");
}

#[test]
fn test_seal_and_open() {
    let mut engine = keyed_engine(44, 16);
    let mut buf = b"sixteen byte msg plus some".to_vec();

    seal(engine.as_mut(), &NONCE, b"aad", &mut buf).unwrap();
    assert_eq!(buf.len(), 26 + 16);
    open(engine.as_mut(), &NONCE, b"aad", &mut buf).unwrap();
    assert_eq!(buf, b"sixteen byte msg plus some");
}

#[test]
fn test_rekey_discards_previous_packet() {
    let mut engine = keyed_engine(28, 16);
    engine.set_nonce(Direction::Encrypt, &NONCE).unwrap();
    engine.update_aad(b"header").unwrap();

    engine.init_key(&[0x0c; 16]).unwrap();
    assert!(engine.has_key());
    assert!(!engine.has_nonce());
    assert!(matches!(engine.update_aad(b"x"), Err(Error::SequenceError { .. })));
}

#[test]
fn test_engine_is_send() {
    let mut engine = keyed_engine(28, 16);
    let handle = std::thread::spawn(move || {
        let mut buf = vec![0u8; 32];
        seal(engine.as_mut(), &NONCE, b"", &mut buf).unwrap();
        buf.len()
    });
    assert_eq!(handle.join().unwrap(), 48);
}

#[test]
fn test_tag_wiped_through_reexported_zeroize() {
    use srtp_aead::zeroize::Zeroize;

    let mut engine = keyed_engine(28, 16);
    engine.set_nonce(Direction::Encrypt, &NONCE).unwrap();
    engine.update_aad(b"header").unwrap();
    let mut tag = engine.finalize_tag().unwrap();
    assert_eq!(tag.len(), 16);

    tag.zeroize();
    assert!(tag.is_empty());
    assert_eq!(tag.as_bytes(), &[] as &[u8]);
}

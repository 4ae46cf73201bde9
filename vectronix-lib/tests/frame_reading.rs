//! Tests for the byte-stream framing state machine

mod common;

use common::*;

#[test]
fn test_read_clean_frame() {
    let mut transport = ScriptedTransport::new(&[&[ACK], VALID_RESPONSE].concat());
    let frame = read_frame(&mut transport).expect("Failed to read frame");
    assert_eq!(frame.as_ref(), VALID_RESPONSE);
}

#[test]
fn test_resynchronizes_past_stray_end_bytes() {
    // Stray CRs from a flush precede the ACK; the reader must skip them
    // and still frame the response.
    let mut stream = b"\r\r\r".to_vec();
    stream.push(ACK);
    stream.extend_from_slice(VALID_RESPONSE);

    let mut transport = ScriptedTransport::new(&stream);
    let frame = read_frame(&mut transport).expect("Failed to resynchronize");
    assert_eq!(frame.as_ref(), VALID_RESPONSE);
}

#[test]
fn test_ignores_noise_bytes_while_seeking() {
    let mut stream = b"xx\r".to_vec();
    stream.push(ACK);
    stream.extend_from_slice(ERROR_RESPONSE);

    let mut transport = ScriptedTransport::new(&stream);
    let frame = read_frame(&mut transport).expect("Failed to seek past noise");
    assert_eq!(frame.as_ref(), ERROR_RESPONSE);
}

#[test]
fn test_nack_fails_with_command_rejected() {
    // NACK followed by more device bytes: the reader must stop at the NACK.
    let mut stream = vec![NACK];
    stream.push(ACK);
    stream.extend_from_slice(VALID_RESPONSE);

    let mut transport = ScriptedTransport::new(&stream);
    let result = read_frame(&mut transport);
    assert!(
        matches!(result, Err(ProtocolError::CommandRejected)),
        "Expected CommandRejected, got: {result:?}"
    );
    assert_eq!(
        transport.consumed(),
        1,
        "No bytes beyond the NACK may be consumed"
    );
}

#[test]
fn test_nack_after_stray_ends_still_rejects() {
    let mut transport = ScriptedTransport::new(b"\r\r!");
    let result = read_frame(&mut transport);
    assert!(matches!(result, Err(ProtocolError::CommandRejected)));
}

#[test]
fn test_frame_without_trailing_cr_is_malformed() {
    // 11 bytes follow the ACK but the terminator is wrong.
    let mut stream = vec![ACK];
    stream.extend_from_slice(b"v0108750DBX");

    let mut transport = ScriptedTransport::new(&stream);
    let result = read_frame(&mut transport);
    assert!(
        matches!(result, Err(ProtocolError::MalformedFrame(_))),
        "Expected MalformedFrame, got: {result:?}"
    );
}

#[test]
fn test_truncated_stream_is_a_transport_failure() {
    // Stream ends mid-frame: read_exact fails and surfaces unchanged.
    let mut stream = vec![ACK];
    stream.extend_from_slice(b"v0108");

    let mut transport = ScriptedTransport::new(&stream);
    let result = read_frame(&mut transport);
    assert!(
        matches!(result, Err(ProtocolError::Transport(_))),
        "Expected Transport error, got: {result:?}"
    );
}

#[test]
fn test_empty_stream_is_a_transport_failure() {
    let mut transport = ScriptedTransport::new(&[]);
    let result = read_frame(&mut transport);
    assert!(matches!(result, Err(ProtocolError::Transport(_))));
}

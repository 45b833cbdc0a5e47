#![no_main]

use enhanced_errors::{EnhancedError, public_message_or};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let (code_bytes, rest) = data.split_at(8);
    let code = i64::from_le_bytes(code_bytes.try_into().unwrap_or([0; 8]));
    let text = String::from_utf8_lossy(rest);
    let split = text.char_indices().nth(text.chars().count() / 2).map_or(text.len(), |(i, _)| i);
    let (private, public) = text.split_at(split);

    let err = EnhancedError::with_code(private.to_owned(), public.to_owned(), code);
    assert_eq!(err.code(), code);
    assert_eq!(err.to_string(), private);
    assert_eq!(public_message_or(&err, "fallback"), public);

    let mut line = String::new();
    err.internal_log().write_to(&mut line).unwrap();
    assert!(line.len() < 2 * 1024 + 64);
});

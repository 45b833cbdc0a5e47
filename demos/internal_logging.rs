use enhanced_errors::EnhancedError;

fn main() {
    tracing_subscriber::fmt().with_target(true).init();

    println!("--- Internal Logging Example ---\n");

    let err = EnhancedError::with_code(
        "TLS handshake with payments.internal:8443 failed: certificate expired",
        "payment could not be processed",
        502,
    );

    // 1. Structured event through tracing
    err.log_internal();

    // 2. Bounded line for a plain text sink
    let mut line = String::new();
    if err.internal_log().write_to(&mut line).is_ok() {
        println!("{line}");
    }

    // 3. Callback form, nothing outlives the closure
    let code = err.with_internal_log(|log| {
        println!("code={} public={:?}", log.code(), log.public());
        log.code()
    });
    assert_eq!(code, 502);
}

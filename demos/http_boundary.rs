use enhanced_errors::{EnhancedError, code_of, enhanced, public_message_or};
use serde_json::json;
use std::error::Error;

type HandlerResult = std::result::Result<serde_json::Value, Box<dyn Error + Send + Sync>>;

fn fetch_order(id: u64) -> std::result::Result<serde_json::Value, EnhancedError> {
    match id {
        0 => Err(enhanced!(
            code = 503,
            public = "service temporarily unavailable",
            "db connection refused at {}:{}",
            "10.0.0.5",
            5432
        )),
        1 => Err(EnhancedError::with_code(
            "order 1 belongs to tenant 88, caller is tenant 12",
            "order not found",
            404,
        )),
        _ => Ok(json!({ "id": id, "status": "shipped" })),
    }
}

fn get_order(id: u64) -> HandlerResult {
    Ok(fetch_order(id)?)
}

fn respond(result: HandlerResult) -> (u16, serde_json::Value) {
    match result {
        Ok(body) => (200, body),
        Err(err) => {
            // Internal log line carries the private detail
            eprintln!("[internal] {}", err);

            let status = code_of(err.as_ref())
                .and_then(|code| u16::try_from(code).ok())
                .filter(|code| (400..600).contains(code))
                .unwrap_or(500);
            let message = public_message_or(err.as_ref(), "internal server error");
            (status, json!({ "error": message }))
        }
    }
}

fn main() {
    println!("--- HTTP Boundary Example ---\n");

    for id in [0, 1, 2] {
        let (status, body) = respond(get_order(id));
        println!("GET /orders/{id} -> {status} {body}");
    }
}

use enhanced_errors::{EnhancedError, ErrorConfig, Result};

fn load_configuration(path: &str) -> Result<()> {
    // Simulate a failure to parse a configuration file
    if path == "bad_config.toml" {
        return Err(EnhancedError::with_code(
            format!("syntax error in {path} at line 42: unexpected EOF"),
            "configuration could not be loaded",
            422,
        ));
    }
    Ok(())
}

fn main() {
    // 1. Configure the default code once, at startup
    ErrorConfig::new(500).install();

    println!("--- Basic Usage Example ---\n");

    match load_configuration("bad_config.toml") {
        Ok(()) => println!("Success!"),
        Err(err) => {
            // The external user sees the public message only.
            println!("1. [EXTERNAL RESPONSE] What the user sees:");
            println!("   \"{}\" (code {})", err.public(), err.code());

            // Operators get the full story. Display is the private message.
            println!("\n2. [INTERNAL LOG] What the admin sees:");
            println!("   {}", err);
        }
    }

    // 2. Migrating code that only ever had one message
    let legacy: EnhancedError = "unexpected nil pointer in handler X".into();
    println!("\n3. [LEGACY] code={} public={:?}", legacy.code(), legacy.public());
}

//! Basic usage example for service-container.
//!
//! Demonstrates:
//! - Binding instanced and singleton dependencies by name
//! - Locking the container after the binding phase
//! - Resolving values with `resolve()` (returns `Arc<T>`)
//! - Retrieving cloned values with `resolve_cloned()` (returns `T`)
//! - Checking bindings with `contains()`
//!
//! Run with: `cargo run --example basic_usage`

use service_container::{must_resolve, resolve_cloned, Container};
use std::sync::Arc;

// Custom struct to demonstrate complex types
#[derive(Debug, Clone)]
struct AppConfig {
    name: String,
    debug_mode: bool,
}

fn main() {
    println!("=== service-container: Basic Usage ===\n");

    let container = Container::new();

    // -------------------------------------------------------------------------
    // 1. Bind instanced dependencies
    // -------------------------------------------------------------------------
    println!("1. Binding instanced dependencies...");

    container.must_bind("request-id", |_| std::time::Instant::now());
    container.must_bind("greeting", |_| "Hello, service-container!".to_string());

    println!("   Bound: request-id, greeting");

    // -------------------------------------------------------------------------
    // 2. Bind a singleton
    // -------------------------------------------------------------------------
    println!("\n2. Binding a singleton...");

    container.must_bind_singleton("config", |_| AppConfig {
        name: "MyApp".to_string(),
        debug_mode: true,
    });

    println!("   Bound: config (constructed lazily, shared by all resolutions)");

    // -------------------------------------------------------------------------
    // 3. Lock the container
    // -------------------------------------------------------------------------
    println!("\n3. Locking the container...");

    container.lock();
    match container.bind("late", |_| 0u8) {
        Ok(()) => println!("   Unexpected: bind succeeded after lock"),
        Err(e) => println!("   Bind after lock rejected: {e}"),
    }

    // -------------------------------------------------------------------------
    // 4. Check bindings with contains()
    // -------------------------------------------------------------------------
    println!("\n4. Checking bindings with contains()...");

    println!("   contains(\"config\")  = {}", container.contains("config"));
    println!("   contains(\"missing\") = {}", container.contains("missing"));

    // -------------------------------------------------------------------------
    // 5. Resolve values - returns Arc<T>
    // -------------------------------------------------------------------------
    println!("\n5. Resolving values...");

    let resolver = container.resolver();

    let greeting: Arc<String> = must_resolve("greeting", &resolver);
    let config: Arc<AppConfig> = must_resolve("config", &resolver);

    println!("   greeting: {}", greeting);
    println!("   config:   {:?}", config);

    // Singleton resolutions share one instance
    let config_again: Arc<AppConfig> = must_resolve("config", &resolver);
    println!(
        "   config resolved twice is the same instance: {}",
        Arc::ptr_eq(&config, &config_again)
    );

    // -------------------------------------------------------------------------
    // 6. Retrieve owned clones with resolve_cloned()
    // -------------------------------------------------------------------------
    println!("\n6. Retrieving owned clones...");

    let owned: AppConfig = resolve_cloned("config", &resolver).unwrap();
    println!("   AppConfig (owned): debug_mode = {}", owned.debug_mode);

    // -------------------------------------------------------------------------
    // 7. Handle missing names gracefully
    // -------------------------------------------------------------------------
    println!("\n7. Handling missing names...");

    match resolver.resolve("missing") {
        Ok(_) => println!("   Found missing?!"),
        Err(e) => println!("   Error (expected): {e}"),
    }

    println!("\n=== Example Complete ===");
}

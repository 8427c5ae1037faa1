//! Service wiring example: factories resolving their own dependencies.
//!
//! Builds a small service graph — settings, a connection pool, and a
//! repository — where each factory requests what it needs through the
//! resolver it is handed, instead of the caller threading anything through.
//!
//! Run with: `cargo run --example service_wiring`

use service_container::{must_resolve, Container, Resolver};
use std::sync::Arc;

#[derive(Debug)]
struct Settings {
    dsn: String,
    pool_size: usize,
}

#[derive(Debug)]
struct ConnectionPool {
    dsn: String,
    size: usize,
}

impl ConnectionPool {
    fn connect(settings: &Settings) -> Self {
        println!("   [pool] connecting to {} ...", settings.dsn);
        Self {
            dsn: settings.dsn.clone(),
            size: settings.pool_size,
        }
    }
}

struct UserRepository {
    pool: Arc<ConnectionPool>,
}

impl UserRepository {
    fn describe(&self) -> String {
        format!("user repository on {} ({} conns)", self.pool.dsn, self.pool.size)
    }
}

fn main() {
    println!("=== service-container: Service Wiring ===\n");

    let container = Container::new();

    println!("1. Binding the service graph...");

    container.must_bind_singleton("settings", |_| Settings {
        dsn: "postgres://localhost/app".to_string(),
        pool_size: 8,
    });

    // The pool factory resolves the settings itself
    container.must_bind_singleton("pool", |resolver: &Resolver| {
        let settings: Arc<Settings> = must_resolve("settings", resolver);
        ConnectionPool::connect(&settings)
    });

    // The repository is instanced, but shares the singleton pool
    container.must_bind("user-repository", |resolver: &Resolver| {
        let pool: Arc<ConnectionPool> = must_resolve("pool", resolver);
        UserRepository { pool }
    });

    container.lock();
    println!("   Bound: settings, pool, user-repository (container locked)\n");

    println!("2. Resolving the repository twice...");

    let resolver = container.resolver();
    let first: Arc<UserRepository> = must_resolve("user-repository", &resolver);
    let second: Arc<UserRepository> = must_resolve("user-repository", &resolver);

    println!("   {}", first.describe());
    println!("   {}", second.describe());
    println!(
        "   distinct repositories: {}",
        !Arc::ptr_eq(&first, &second)
    );
    println!(
        "   shared pool instance:  {}",
        Arc::ptr_eq(&first.pool, &second.pool)
    );

    println!("\n=== Example Complete ===");
}

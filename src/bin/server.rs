//! Classgate decision server.
//!
//! Run with: cargo run --features server --bin classgate-server
//!
//! Mints bearer-token sessions for already-authenticated users and answers
//! authorization queries for the role behind each token.

use classgate::server::{build_router, AppState};

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut port: u16 = 8094;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--port" | "-p" => {
                if i + 1 < args.len() {
                    port = args[i + 1].parse().unwrap_or(8094);
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("classgate-server - role-based authorization decision service\n");
                println!("USAGE:");
                println!("    classgate-server [OPTIONS]\n");
                println!("OPTIONS:");
                println!("    -p, --port <PORT>     Listen on PORT (default: 8094)");
                println!("    -h, --help            Show this help message");
                return;
            }
            _ => {}
        }
        i += 1;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("classgate=info,tower_http=info")
                }),
        )
        .init();

    let app = build_router(AppState::new());

    let addr = format!("0.0.0.0:{}", port);
    println!("classgate-server v{} listening on {}", env!("CARGO_PKG_VERSION"), addr);
    println!("\nEndpoints:");
    println!("  GET    /health                  Health check");
    println!("  POST   /sessions                Mint a session for an authenticated user");
    println!("  GET    /me                      Identity behind the presented token");
    println!("  DELETE /session                 Revoke the presented token");
    println!("  GET    /check/:module/:action   Permission check");
    println!("  POST   /check/own               Own-content check (edit/delete)");
    println!("  POST   /check/course            Course access check");
    println!("  POST   /check/grading           Grading check");
    println!("  POST   /check/analytics         Analytics scope check");
    println!("  GET    /check/qr                QR attendance check");
    println!("  GET    /check/submission        Assignment submission check");
    println!("  GET    /modules                 Modules the caller may view");
    println!("  GET    /navigation              Filtered navigation menu");
    println!("  GET    /kpis                    Dashboard widget keys");
    println!("  GET    /summary                 Flat permission summary");

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

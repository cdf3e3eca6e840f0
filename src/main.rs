/// Folio: personal portfolio website
///
/// Main entry point. Loads configuration from the environment and starts the
/// HTTP server.

use folio::{config::Config, server::start_server};

/// Application entry point
///
/// The server provides:
/// - Static pages at /, /about, /resume, /contact and /thankyou
/// - The projects showcase at /projects, /form and /delete_project/{id}
/// - Stylesheets and images at /css/*
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration (defaults to 0.0.0.0:5000 and projects.db)
    let config = Config::default();

    // Start the server
    start_server(config).await?;

    Ok(())
}

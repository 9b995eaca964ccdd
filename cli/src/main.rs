use std::fs::File;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use rouille::{Request, Response};

#[derive(Parser)]
#[command(name = "photo-playground-cli", version, about = "Dev tools for the photo playground")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the built application bundle.
    Serve {
        #[arg(long, env = "PORT", default_value_t = 3000)]
        port: u16,
        #[arg(long, default_value = "dist")]
        root: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, root } => serve(port, root),
    }
}

fn serve(port: u16, root: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let index = root.join("index.html");
    if !index.is_file() {
        return Err(format!("no index.html under {}", root.display()).into());
    }
    let addr = format!("0.0.0.0:{port}");
    log::info!("photo playground running on http://{addr}");
    rouille::start_server(addr, move |request| {
        let response = handle_request(request, &root, &index);
        log::info!(
            "{} {} -> {}",
            request.method(),
            request.url(),
            response.status_code
        );
        response
    })
}

fn handle_request(request: &Request, root: &Path, index: &Path) -> Response {
    if request.url() == "/" {
        return serve_index(index);
    }
    let response = rouille::match_assets(request, root);
    if response.is_success() {
        return response;
    }
    Response::empty_404()
}

fn serve_index(index: &Path) -> Response {
    match File::open(index) {
        Ok(file) => Response::from_file("text/html; charset=utf8", file),
        Err(error) => {
            log::error!("failed to open {}: {error}", index.display());
            Response::empty_404()
        }
    }
}

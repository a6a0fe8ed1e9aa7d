#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod contact;
mod content;
mod motion;
mod navigation;
mod particles;
mod reveal;
mod theme;

#[cfg(target_arch = "wasm32")]
mod frontend;
#[cfg(not(target_arch = "wasm32"))]
mod server;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() {
    if let Err(err) = server::run().await {
        eprintln!("server failed: {err}. Build the site first with `trunk build --release`.");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}

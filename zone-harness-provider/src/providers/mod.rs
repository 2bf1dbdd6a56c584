mod cloudflare;
mod common;

pub use cloudflare::CloudflareProvider;

//! # Quillboard Seed
//!
//! Assembles a memory-backed store, pushes a demo user, post, and threaded
//! comments through the gateway, and prints their serialization views.
//! Doubles as an end-to-end smoke run of the domain layer.

use anyhow::Result;
use qb_core::models::{Comment, Post, User};
use qb_core::traits::Gateway;
use qb_core::view::View;
use qb_store_memory::MemoryGateway;
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let users = MemoryGateway::<User>::new();
    let posts = MemoryGateway::<Post>::new();
    let comments = MemoryGateway::<Comment>::new();

    // Demo credentials only; a real signup flow derives these from a KDF.
    let hash = "0123456789abcdef".repeat(8);
    let salt = "fedcba9876543210".repeat(4);
    let token = "deadbeef".repeat(4);

    let mut zoe = User::new(
        None,
        "zoe@example.com",
        "Zoe",
        Some("https://img.example.com/zoe.png"),
        &hash,
        &salt,
        Some(&token),
    )?;
    let zoe_id = users.insert(&mut zoe).await?;
    info!(%zoe_id, "seeded user");

    let mut post = Post::new(
        None,
        zoe_id,
        "Hello",
        "World",
        "general",
        None,
        None,
    )?;
    let post_id = posts.insert(&mut post).await?;
    info!(%post_id, "seeded post");

    let mut top = Comment::new(None, post_id, zoe_id, None, "First!", None)?;
    let top_id = comments.insert(&mut top).await?;

    let mut reply = Comment::new(None, post_id, zoe_id, Some(top_id), "Replying to myself.", None)?;
    comments.insert(&mut reply).await?;
    info!(count = comments.len(), "seeded comments");

    for view in [zoe.to_view(), post.to_view(), top.to_view(), reply.to_view()] {
        println!("{}", serde_json::to_string_pretty(&Value::Object(view))?);
    }

    Ok(())
}

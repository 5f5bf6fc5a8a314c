//! Reactive demo - signals driving style resolution.
//!
//! Demonstrates:
//! - Attaching elements with signal-bound props
//! - Updating signals and watching declarations follow
//! - Growth promotion through a hugging container
//! - Write suppression keeping revisions quiet
//!
//! Run with: cargo run --example reactive

use flexel::{
    attach, detach, signal, Align, Axis, LayoutContext, SizeSpec, StyleProps,
};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== flexel Reactive Demo ===\n");

    let ctx = LayoutContext::new();

    // Create reactive signals
    let width = signal(SizeSpec::exact(20));
    let axis = signal(Axis::Row);

    let panel = attach(
        &ctx,
        None,
        StyleProps {
            axis: Some(axis.clone().into()),
            align: Some(Align::Center.into()),
            pad: Some(1.into()),
            ..Default::default()
        },
    );
    let card = attach(
        &ctx,
        Some(panel),
        StyleProps {
            width: Some(width.clone().into()),
            height: Some(6.into()),
            round: Some(0.5.into()),
            shadow: Some(true.into()),
            ..Default::default()
        },
    );

    println!("Initial state:");
    println!("  panel: {}", ctx.css_text(panel));
    println!("  card:  {}", ctx.css_text(card));

    // Flip the card from an exact width to weighted growth. The panel
    // hugs by default, so the growth promotes it too.
    println!("\n--- width: exact(20) -> grow(2) ---\n");
    width.set(SizeSpec::grow_weighted(2.0));
    println!("  panel: {}", ctx.css_text(panel));
    println!("  card:  {}", ctx.css_text(card));

    // Rotating the panel moves the flex pair to the other extent.
    println!("\n--- axis: row -> column ---\n");
    axis.set(Axis::Column);
    println!("  card:  {}", ctx.css_text(card));

    // Writing the same value again changes nothing downstream.
    println!("\n--- equal write is suppressed ---\n");
    let before = ctx.revision(card);
    width.set(SizeSpec::grow_weighted(2.0));
    println!("  card revision: {} -> {}", before, ctx.revision(card));

    detach(&ctx, panel);
    println!("\n=== Done ===");
}

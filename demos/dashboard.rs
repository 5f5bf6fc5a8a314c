//! Dashboard demo - nested containers and weighted growth.
//!
//! Demonstrates:
//! - Nested row and column containers
//! - Exact, grow and shrink size intents
//! - Gaps, padding and alignment
//! - Computing rectangles with the Taffy bridge
//!
//! Run with: cargo run --example dashboard

use flexel::{
    attach, Align, Axis, BridgeTree, LayoutContext, NodeId, SizeSpec, StyleProps,
};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== flexel Dashboard Demo ===\n");

    let ctx = LayoutContext::new();

    // Application frame: header on top, content row, status bar below.
    let frame = attach(
        &ctx,
        None,
        StyleProps {
            width: Some("960px".into()),
            height: Some("540px".into()),
            pad: Some(1.into()),
            ..Default::default()
        },
    );

    let header = attach(
        &ctx,
        Some(frame),
        StyleProps {
            height: Some(3.into()),
            width: Some(SizeSpec::Stretch.into()),
            align: Some(Align::Center.into()),
            bg: Some("#1e293b".into()),
            round: Some(0.5.into()),
            ..Default::default()
        },
    );

    // Content row: fixed sidebar, main area takes the rest 1:3.
    let content = attach(
        &ctx,
        Some(frame),
        StyleProps {
            axis: Some(Axis::Row.into()),
            height: Some(SizeSpec::grow().into()),
            width: Some(SizeSpec::Stretch.into()),
            pad_between: Some(1.into()),
            ..Default::default()
        },
    );
    let sidebar = attach(
        &ctx,
        Some(content),
        StyleProps {
            width: Some(SizeSpec::grow().into()),
            height: Some(SizeSpec::Stretch.into()),
            pad: Some(1.into()),
            bg: Some("#0f172a".into()),
            ..Default::default()
        },
    );
    let main = attach(
        &ctx,
        Some(content),
        StyleProps {
            width: Some(SizeSpec::grow_weighted(3.0).into()),
            height: Some(SizeSpec::Stretch.into()),
            pad: Some(1.into()),
            ..Default::default()
        },
    );

    let status = attach(
        &ctx,
        Some(frame),
        StyleProps {
            height: Some(2.into()),
            width: Some(SizeSpec::Stretch.into()),
            align_x: Some(Align::SpaceBetween.into()),
            ..Default::default()
        },
    );

    println!("Resolved declarations:");
    for (name, id) in [
        ("frame", frame),
        ("header", header),
        ("content", content),
        ("sidebar", sidebar),
        ("main", main),
        ("status", status),
    ] {
        println!("  {:8} {}", name, ctx.css_text(id));
    }

    // Hand the style maps to Taffy and read back rectangles.
    println!("\nComputed rectangles (960x540 viewport):");
    let mut bridge = BridgeTree::build(&ctx).unwrap();
    bridge.compute(960.0, 540.0).unwrap();

    let print_rect = |name: &str, id: NodeId| {
        let rect = bridge.rect(id).unwrap();
        println!(
            "  {:8} x={:6.1} y={:6.1} w={:6.1} h={:6.1}",
            name, rect.x, rect.y, rect.width, rect.height
        );
    };
    print_rect("frame", frame);
    print_rect("header", header);
    print_rect("content", content);
    print_rect("sidebar", sidebar);
    print_rect("main", main);
    print_rect("status", status);

    println!("\n=== Done ===");
}

//! Scripted Scroll Demo
//!
//! Drives a nav controller through a synthetic page-scroll session:
//! - Wires the controller to an event dispatcher the way a host would
//! - Replays a down-then-up gesture as raw scroll events
//! - Prints the class attribute the style layer would apply at each step
//!
//! Run with: cargo run -p shynav --example scripted_scroll

use anyhow::{Context, Result};
use shynav::prelude::*;
use shynav_core::events::{Event, EventDispatcher};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let viewport_width = 1280.0;
    let header_height = 96.0;

    let nav = ScrollNavController::initialize(viewport_width, header_height)
        .context("viewport below the width gate")?;
    let nav = shared(nav);

    let mut dispatcher = EventDispatcher::new();
    attach(&mut dispatcher, &nav);

    // A reading session: scroll deep into the page, pause, drift back up,
    // then return to the very top.
    let offsets = [
        40.0, 90.0, 160.0, 420.0, 880.0, 880.0, 840.0, 790.0, 420.0, 60.0, 0.0,
    ];

    println!("header height {header_height}px, viewport {viewport_width}px wide\n");
    for top in offsets {
        dispatcher.dispatch(&mut Event::scroll(top));
        let info = NavRenderInfo::from_flags(nav.lock().unwrap().flags());
        println!("scroll to {top:>6.1}px  ->  class=\"{}\"", info.class_attr());
    }

    Ok(())
}

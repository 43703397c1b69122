// Copyright 2025 the Floret Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An end-to-end tour of the chart widget: hit testing, hover, clicks,
//! focus mode, notices, and the recorded draw stream.
//!
//! Run:
//! - `cargo run -p floret_demos --example snowflake_session`

use floret_color::health_color;
use floret_geom::ChartConfig;
use floret_scene::{Command, Recording};
use floret_widget::{Chart, ClickAction, Dimension, DisplayMode, scores_by_name};
use kurbo::Point;

fn command_summary(recording: &Recording) -> String {
    let mut fills = 0;
    let mut strokes = 0;
    let mut clips = 0;
    let mut transforms = 0;
    for command in recording.commands() {
        match command {
            Command::Fill { .. } => fills += 1,
            Command::Stroke { .. } => strokes += 1,
            Command::PushClip { .. } => clips += 1,
            Command::PushTransform { .. } => transforms += 1,
            Command::PopClip | Command::PopTransform => {}
        }
    }
    format!("{fills} fills, {strokes} strokes, {clips} clips, {transforms} transforms")
}

fn draw_and_report(label: &str, chart: &Chart) {
    let mut recording = Recording::new();
    chart.draw(&mut recording);
    println!("  draw [{label}]: {}", command_summary(&recording));
}

fn main() {
    // Dimension data arrives unordered; pick scores out by name.
    let raw = vec![
        Dimension::new("health", 7).with_description("Financial health and debt position"),
        Dimension::new("value", 3).with_description("Price versus intrinsic worth"),
        Dimension::new("future", 7).with_description("Forecast performance, next 1-3 years"),
        Dimension::new("dividend", 1).with_description("Dividend yield and reliability"),
        Dimension::new("past", 5).with_description("Historical earnings performance"),
    ];
    let order = ["value", "future", "past", "health", "dividend"];
    let scores = scores_by_name(&raw, &order);
    println!("scores in sector order: {:?}", scores.as_slice());

    let color = health_color(&scores, 7.0);
    println!(
        "aggregate color: hsl({:.1}, {:.0}%, {:.1}%) = rgb{:?}",
        color.hue,
        color.saturation,
        color.lightness,
        color.to_rgb8()
    );

    // The widget wants ordered data; rebuild it in sector order.
    let mut chart = Chart::new(ChartConfig::default());
    chart.set_dimensions(
        order
            .iter()
            .map(|name| {
                raw.iter()
                    .find(|dimension| dimension.name == **name)
                    .cloned()
                    .expect("demo data covers every sector")
            })
            .collect(),
    );

    println!("\n== Overview mode ==");
    draw_and_report("initial", &chart);

    for (label, probe) in [
        ("top of the disk", Point::new(200.0, 140.0)),
        ("right of the disk", Point::new(280.0, 180.0)),
        ("outside the grid", Point::new(10.0, 10.0)),
    ] {
        let changed = chart.on_pointer_move(probe);
        match chart.tooltip() {
            Some(tooltip) => {
                let dimension = chart.dimension(tooltip.sector).expect("sector has data");
                println!(
                    "  move over {label}: sector {} ({}), tooltip anchored at ({:.1}, {:.1}), changed={changed}",
                    tooltip.sector, dimension.name, tooltip.position.x, tooltip.position.y
                );
            }
            None => println!("  move over {label}: no sector, changed={changed}"),
        }
    }
    draw_and_report("hovered", &chart);

    let action = chart.on_click(Point::new(200.0, 140.0), 0);
    println!("  click at the top: {action:?}");
    chart.on_pointer_leave();

    println!("\n== Focus mode, no selection ==");
    chart.set_mode(DisplayMode::Focus);
    let action = chart.on_click(Point::new(200.0, 140.0), 1_000);
    println!("  click enqueues: {action:?}");
    if let ClickAction::Noticed(id) = action {
        println!("  notice {id} pending: {} total", chart.notices().len());
    }

    // The host clock drives notice expiry.
    for now in [2_000, 4_000, 4_300] {
        let changed = chart.tick(now);
        println!(
            "  tick(now={now}): changed={changed}, notices={}, fading={}",
            chart.notices().len(),
            chart.notices().iter().filter(|notice| notice.fade_out).count()
        );
    }

    println!("\n== Focus mode, sector 2 selected ==");
    chart.set_highlight(Some(2));
    println!(
        "  interactive: {} (pointer input suppressed)",
        chart.is_interactive()
    );
    draw_and_report("magnified", &chart);

    let damage = chart.take_damage();
    println!("\naccumulated damage this session: {damage:?}");
}

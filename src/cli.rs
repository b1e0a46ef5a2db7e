//! OsiView CLI - headless scenario runner
//! Prints a scenario's full narration script without opening a window

mod geometry;
mod i18n;
mod model;
mod sim;
mod timeline;

use std::env;

use eframe::egui::vec2;

use geometry::StageGeometry;
use i18n::{tr, Lang};
use sim::{Scenario, SimSession};

fn usage() {
    println!("OsiView CLI - scenario narration runner");
    println!("Usage: osiview-cli [ping|http] [--lang id|en] [--speed N] [--json]");
    println!();
    println!("Example: osiview-cli ping --lang en --speed 2");
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        usage();
        return;
    }

    let mut scenario: Option<Scenario> = None;
    let mut lang = Lang::Id;
    let mut speed = 1.0_f32;
    let mut json = false;

    let mut it = args.iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                usage();
                return;
            }
            "--json" => json = true,
            "--lang" => match it.next().map(String::as_str) {
                Some("id") => lang = Lang::Id,
                Some("en") => lang = Lang::En,
                other => {
                    eprintln!("❌ --lang expects id or en, got '{}'", other.unwrap_or(""));
                    return;
                }
            },
            "--speed" => match it.next().map(|s| s.parse::<f32>()) {
                Some(Ok(value)) => speed = value,
                _ => {
                    eprintln!("❌ --speed expects a number");
                    return;
                }
            },
            other => match other.parse::<Scenario>() {
                Ok(parsed) => scenario = Some(parsed),
                Err(e) => {
                    eprintln!("❌ {}", e);
                    usage();
                    return;
                }
            },
        }
    }

    // Flags without a scenario run the default, same as the GUI's armed state.
    let scenario = scenario.unwrap_or(Scenario::Ping);

    // Any stage size works for a headless run; narration does not depend on
    // pixel positions.
    let geo = StageGeometry::compute(vec2(1200.0, 640.0), &[7, 6, 5, 4, 3, 2, 1]);
    let mut session = SimSession::new(lang);
    session.set_scenario(scenario);
    session.set_speed(speed);
    session.run_to_completion(&geo, 0.05);

    if json {
        match serde_json::to_string_pretty(session.events()) {
            Ok(out) => println!("{}", out),
            Err(e) => eprintln!("❌ Could not serialize narration: {}", e),
        }
    } else {
        println!(
            "✅ {} - {} narration line(s)",
            tr(scenario.title_key(), lang),
            session.events().len()
        );
        println!();
        println!("{}", session.log_text());
    }
}

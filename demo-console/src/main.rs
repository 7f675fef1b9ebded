use std::time::Duration;

use clap::Parser;
use measure_core::{Area, Length, LengthUnit, Velocity, Volume};

/// Unit-of-measure demo with configurable inputs
#[derive(Parser, Debug)]
#[command(name = "measure-demo")]
#[command(about = "Typed physical quantities demo", long_about = None)]
struct Args {
    /// Side length of the demo square and cube, in meters
    #[arg(short, long, default_value_t = 1.45)]
    side: f64,

    /// Travelled distance in kilometers
    #[arg(short, long, default_value_t = 15.3)]
    distance: f64,

    /// Travel time in seconds
    #[arg(short, long, default_value_t = 13 * 60 + 25)]
    elapsed: u64,

    /// Extra quantities to parse and normalize, e.g. "1034 mm" or "2.5 gal"
    #[arg(short, long)]
    parse: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    println!("=== Typed Quantities Demo ===\n");

    // Squaring and cubing a length walks up the dimensional ladder.
    let side = Length::new(args.side, LengthUnit::Meter);
    let square = side * side;
    let cube = side * square;
    println!("side:   {side}");
    println!("square: {square:.4}");
    println!("cube:   {cube:.4}\n");

    // Mixed-system arithmetic converts into the left operand's unit.
    let mut total = Length::new(2.1, LengthUnit::Meter) + Length::new(43.4, LengthUnit::Inch);
    println!("2.1 m + 43.4 in = {total:.4}");
    total.set_unit(LengthUnit::Foot);
    println!("              = {total:.4}\n");

    // Average speed, then the distance covered again from that speed.
    let elapsed = Duration::from_secs(args.elapsed);
    let distance = Length::new(args.distance, LengthUnit::Kilometer);
    let speed = distance / elapsed;
    println!("{distance} in {}s is {speed:.2} ({:#.2})", args.elapsed, speed);
    match speed.checked_mul(elapsed) {
        Ok(covered) => println!("back again: {covered:.2}\n"),
        Err(err) => println!("back again failed: {err}\n"),
    }

    for text in &args.parse {
        report(text);
    }
}

/// Try the input against every quantity kind and normalize what parses.
fn report(text: &str) {
    if let Ok(mut q) = text.parse::<Length>() {
        q.normalize();
        println!("{text} is the length {q} ({:#})", q);
    } else if let Ok(mut q) = text.parse::<Area>() {
        q.normalize();
        println!("{text} is the area {q} ({:#})", q);
    } else if let Ok(mut q) = text.parse::<Volume>() {
        q.normalize();
        println!("{text} is the volume {q} ({:#})", q);
    } else if let Ok(mut q) = text.parse::<Velocity>() {
        q.normalize();
        println!("{text} is the velocity {q} ({:#})", q);
    } else {
        println!("{text} is not a quantity in any known unit");
    }
}

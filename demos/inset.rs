//! Prints the drawing instructions for a styled outline and its inset.
//!
//! Run with `cargo run --example inset`; set `RUST_LOG=debug` together
//! with `--features tracing` to watch the flatten/inset passes.

use arris::geometry::{Corner, CornerStyle, Notch, PathCommand};
use arris::math::{Point2, RelatableValue};
use arris::operations::CornerSliceExt;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // A 200x100 card with one chamfered, one rounded, one concave, and
    // one notch-cut corner, plus a triangular notch on the top edge.
    let corners = vec![
        Corner::new(
            CornerStyle::straight(RelatableValue::Absolute(24.0)),
            Point2::new(0.0, 0.0),
        ),
        Corner::new(
            CornerStyle::rounded(RelatableValue::Relative(0.3)),
            Point2::new(200.0, 0.0),
        ),
        Corner::new(
            CornerStyle::concave(RelatableValue::Absolute(18.0)),
            Point2::new(200.0, 100.0),
        ),
        Corner::new(
            CornerStyle::cutout(RelatableValue::Absolute(16.0)),
            Point2::new(0.0, 100.0),
        ),
    ];
    let notch = Notch::triangle(
        RelatableValue::Relative(0.4),
        RelatableValue::Relative(0.2),
        RelatableValue::Absolute(12.0),
    );
    let outline = corners.adding_notch(&notch, 0);

    println!("outline:");
    print_path(&outline.closed_path());

    let inset = outline.inset(8.0);
    println!("\ninset by 8:");
    print_path(&inset.closed_path());
}

fn print_path(path: &[PathCommand]) {
    for command in path {
        match command {
            PathCommand::MoveTo(p) => println!("  move  ({:7.2}, {:7.2})", p.x, p.y),
            PathCommand::LineTo(p) => println!("  line  ({:7.2}, {:7.2})", p.x, p.y),
            PathCommand::ArcTo {
                tangent1,
                tangent2,
                radius,
            } => println!(
                "  arc   ({:7.2}, {:7.2}) -> ({:7.2}, {:7.2}) r={radius:.2}",
                tangent1.x, tangent1.y, tangent2.x, tangent2.y
            ),
            PathCommand::ClosePath => println!("  close"),
        }
    }
}

use clap::{Parser, ValueEnum};
use lattice::point::{Overflow, Point};
use log::info;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Policy {
    /// Wrap around at the i32 boundary
    Wrapping,
    /// Clamp to the i32 range
    Saturating,
    /// Fail with an error
    Checked,
}

impl From<Policy> for Overflow {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Wrapping => Overflow::Wrapping,
            Policy::Saturating => Overflow::Saturating,
            Policy::Checked => Overflow::Checked,
        }
    }
}

/// Adds two points component-wise.
#[derive(Parser)]
#[command(name = "lattice", version, about, long_about = None)]
struct Args {
    #[arg(allow_negative_numbers = true)]
    x1: i32,
    #[arg(allow_negative_numbers = true)]
    y1: i32,
    #[arg(allow_negative_numbers = true)]
    x2: i32,
    #[arg(allow_negative_numbers = true)]
    y2: i32,
    /// What to do when a coordinate leaves the i32 range
    #[arg(long, value_enum, default_value_t = Policy::Wrapping)]
    overflow: Policy,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let p = Point::new(args.x1, args.y1);
    let q = Point::new(args.x2, args.y2);
    info!("adding {p:?} and {q:?} ({:?})", args.overflow);

    match p.add_with(q, args.overflow.into()) {
        Ok(sum) => println!("({}, {})", sum.x, sum.y),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

#[test]
fn test_parse_args() {
    let args = Args::try_parse_from(["lattice", "-1", "2", "3", "-4"]).unwrap();
    assert_eq!((args.x1, args.y1, args.x2, args.y2), (-1, 2, 3, -4));
    assert_eq!(Overflow::from(args.overflow), Overflow::Wrapping);

    let args =
        Args::try_parse_from(["lattice", "--overflow", "checked", "0", "0", "0", "0"]).unwrap();
    assert_eq!(Overflow::from(args.overflow), Overflow::Checked);

    assert!(Args::try_parse_from(["lattice", "--overflow", "bogus", "0", "0", "0", "0"]).is_err());
}

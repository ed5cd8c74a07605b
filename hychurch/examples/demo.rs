use std::io;

use clap::Parser;
use hychurch::logic::pair;
use hychurch::prelude::*;

/// Walk through switches, booleans and numerals, printing each encoding with what it recovers to.
#[derive(Parser)]
struct Args {
    /// Largest numeral shown by the successor and zero-test sections.
    #[arg(long, default_value_t = 3)]
    max: u64,

    /// Print plain lambda terms instead of colored ones.
    #[arg(long)]
    no_color: bool,
}

fn show(
    args: &Args,
    label: &str,
    term: &impl PrettyNotation,
    recovered: impl std::fmt::Display,
) -> io::Result<()> {
    print!("{label:<16} ");
    if args.no_color {
        print!("{}", term.pretty_string());
    } else {
        term.pretty_print()?;
    }
    println!("  => {recovered}");
    Ok(())
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    // Switches: current goes either left or right.
    println!("Left  {}", left().apply("5V")("GRND"));
    println!("Right {}", right().apply("loud")("soft"));

    // Booleans are the same switches.
    for (name, x) in [("True", truth(true)), ("False", truth(false))] {
        show(&args, name, &x, x.select("true", "false"))?;
        show(&args, &format!("Not {name}"), &not(x), to_bool(&not(x)))?;
    }

    for x in [truth(true), truth(false)] {
        for y in [truth(true), truth(false)] {
            let label = format!("And {} {}", x.to_bool(), y.to_bool());
            show(&args, &label, &and(x, y), to_bool(&and(x, y)))?;
            let label = format!("Or {} {}", x.to_bool(), y.to_bool());
            show(&args, &label, &or(x, y), to_bool(&or(x, y)))?;
            let label = format!("PAnd {} {}", x.to_bool(), y.to_bool());
            show(&args, &label, &pair::and(x, y), to_bool(&pair::and(x, y)))?;
        }
    }

    // Numerals, successor and the zero test.
    show(&args, "Zero", &Zero, to_int(&Zero))?;
    show(&args, "One", &One, to_int(&One))?;
    show(&args, "Two", &Two, to_int(&Two))?;
    show(&args, "Three", &Three, to_int(&Three))?;

    let mut n = zero().erase();
    for count in 0..=args.max {
        show(&args, &format!("Succ {count}"), &succ(&n), to_int(&succ(&n)))?;
        show(&args, &format!("IsZero {count}"), &is_zero(&n), to_bool(&is_zero(&n)))?;
        n = n.succ();
    }

    Ok(())
}

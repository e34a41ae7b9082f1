//! Reads two integers and prints `(1/a)*(1/b)`.
//!
//! Shows the three ways trails are usually built:
//!
//! - `inverse` raises a fresh trail on a zero divisor
//! - `multiply_inverse` absorbs whatever its callees raised and adds its
//!   own arguments
//! - `main` collects every parse failure with `Findings` before giving up
//!
//! Run it with `cargo run --example reciprocal` and enter `3` and `0`.

use std::io::{self, BufRead, Write};

use calltrail::{Findings, prelude::*};

pub fn inverse(i: i32) -> Result<f64, Trail> {
    if i == 0 {
        bail!("Error: I can't take the inverse of 0!");
    }
    Ok(1.0 / f64::from(i))
}

pub fn multiply_inverse(a: i32, b: i32) -> Result<f64, Trail> {
    inverse(a)
        .and_then(|x| Ok(x * inverse(b)?))
        .map_err(|e| trail_absorb!(e, "Called from multiply_inverse: a = {a} b = {b}"))
}

fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, name: char) -> Result<String, Trail> {
    print!("\nEnter an integer ({name}) :> ");
    io::stdout().flush().absorb_err(site!())?;
    match lines.next() {
        Some(line) => line.trail_context(site!(), format_args!("while reading '{name}'")),
        None => Err(trail!("No input for '{name}'")),
    }
}

fn run() -> Result<f64, Trail> {
    println!("\n\nEnter two integers and I will calculate (1/a)*(1/b)");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let input_a = prompt(&mut lines, 'a')?;
    let input_b = prompt(&mut lines, 'b')?;

    let (a, b) = parse_numbers(&input_a, &input_b)?;
    multiply_inverse(a, b)
}

/// Parses both inputs, reporting every failure at once.
pub fn parse_numbers(input_a: &str, input_b: &str) -> Result<(i32, i32), Trail> {
    let mut findings = Findings::headline(site!(), "Error parsing your numbers!");
    let a = input_a.trim().parse::<i32>();
    if let Err(e) = &a {
        findings.record(site!()).push(format_args!("Error parsing integer 'a': {e}"));
    }
    let b = input_b.trim().parse::<i32>();
    if let Err(e) = &b {
        findings.record(site!()).push(format_args!("Error parsing integer 'b': {e}"));
    }
    findings.finish()?;

    // Both parsed: any failure was recorded above.
    Ok((a.unwrap_or_default(), b.unwrap_or_default()))
}

fn main() {
    match run() {
        Ok(product) => println!("\n\n(1/a)*(1/b) = {product}\n"),
        Err(trail) => println!("\n\nException! what() = {trail}\n"),
    }
}

// Window handling follows the pixels conway example
//https://github.com/parasyte/pixels/tree/c2454b01abc11c007d4b9de8525195af942fef0d/examples/conway

#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::io;

mod auxiliary;
mod projects;
mod traits_and_structs;

use auxiliary::config::LifeConfig;
use projects::board::Seeding;
use projects::life::Life;
use traits_and_structs::{CellAutomata, LifeError};

/// Parses a menu line such as `1`, `2` or `1 1234` (mode plus fixed seed).
fn parse_selection(input: &str) -> Result<LifeConfig, String> {
    let mut words = input.split_whitespace();
    let seeding = match words.next() {
        Some("1") => Seeding::Random,
        Some("2") => Seeding::Patterns,
        Some(other) => return Err(format!("unknown board '{}'", other)),
        None => return Err("nothing selected".to_string()),
    };
    let seed = match words.next() {
        Some(s) => Some(
            s.parse::<u64>()
                .map_err(|e| format!("bad seed '{}': {}", s, e))?,
        ),
        None => None,
    };
    if words.next().is_some() {
        return Err("too many arguments".to_string());
    }
    Ok(LifeConfig {
        seeding,
        seed,
        ..Default::default()
    })
}

fn main() -> Result<(), LifeError> {
    env_logger::init();
    println!("\nWelcome to John Conway's Game of Life!\n{}", Life::describe());
    loop {
        println!("\n\nWhich board would you like to see?\n\n1) Random soup\n2) Gosper glider gun and a glider\n\nAdd a number after the choice to fix the random seed, or 'q' to quit.");
        let mut val = String::new();
        if io::stdin().read_line(&mut val)? == 0 {
            break;
        }

        let v = val.trim();

        if v == "q" || v == "quit" {
            break;
        }

        let config = match parse_selection(v) {
            Ok(config) => config,
            Err(e) => {
                println!("\nERROR: {}", e);
                continue;
            }
        };
        println!("\n\nControls for animation:\nC: clear screen\nG: glider gun\nP: pause\nR: randomize screen\nSPACE: frame by frame\nMOUSE: toggle and draw cells\nESC: close screen");
        // Only returns if the window could not be set up; closing the
        // window exits the process from inside the event loop.
        if let Err(e) = projects::life::run_life(config) {
            println!("{}", e);
        }
    }
    Ok(())
}

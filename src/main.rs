use std::env;
use std::io::{self, BufRead};
use std::process;

use sudoku_analyzer::strategy::StrategySolver;
use sudoku_analyzer::Sudoku;

fn main() {
    let args = env::args().skip(1).collect::<Vec<_>>();
    let mut all_ok = true;

    if args.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => break,
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            all_ok &= analyze(line);
        }
    } else {
        for arg in &args {
            all_ok &= analyze(arg);
        }
    }

    if !all_ok {
        process::exit(1);
    }
}

fn analyze(line: &str) -> bool {
    let sudoku = match Sudoku::from_str_line(line) {
        Ok(sudoku) => sudoku,
        Err(err) => {
            eprintln!("{}", err);
            return false;
        }
    };

    let mut solver = StrategySolver::from_sudoku(sudoku);
    solver.solve();

    println!("{}\n", solver.grid());
    match solver.grid().n_empty() {
        0 => println!("solved"),
        n => println!("stalled with {} empty cells", n),
    }

    let deductions = solver.deductions();
    for &(strategy, count) in deductions.counts().iter() {
        print!("{:<18} ({:>2})", strategy.name(), count);
        for (i, deduction) in deductions.get(strategy).iter().enumerate() {
            let sep = if i == 0 { ": " } else { ", " };
            print!("{}{}", sep, deduction);
        }
        println!();
    }
    println!();
    true
}

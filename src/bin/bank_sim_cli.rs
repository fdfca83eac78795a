use std::process;

use bank_sim::{
    cli::{report_fatal, run_cli},
    init,
};

fn main() {
    init();

    if let Err(err) = run_cli() {
        report_fatal(&err);
        process::exit(1);
    }
}

//! sam2tsv - SAM alignment lines to a six-column TSV summary
//!
//! Reads SAM-style records on stdin and writes one summary line per input
//! line on stdout, preceded by a header line:
//!
//! ```bash
//! aligner ... | sam2tsv > summary.tsv
//! sam2tsv < alignments.sam
//! ```
//!
//! The data path consumes no flags, no config files, and no environment
//! variables. The first malformed line aborts the run with exit code 1;
//! everything written up to that point stays on stdout.

use std::env;
use std::io::{self, BufWriter};
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        None => {}
        Some("--help") | Some("-h") => {
            print_help();
            return;
        }
        Some("--version") | Some("-V") => {
            println!("sam2tsv {}", sam2tsv::VERSION);
            return;
        }
        Some(arg) => {
            eprintln!("Error: Unknown argument '{}'", arg);
            eprintln!("sam2tsv reads stdin and writes stdout; try 'sam2tsv --help'");
            process::exit(1);
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let writer = BufWriter::new(stdout.lock());

    if let Err(e) = sam2tsv::convert(stdin.lock(), writer) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn print_help() {
    println!("sam2tsv - Summarize SAM alignment lines as TSV");
    println!();
    println!("USAGE:");
    println!("    sam2tsv < input.sam > summary.tsv");
    println!();
    println!("OPTIONS:");
    println!("    --help, -h        Show this help message");
    println!("    --version, -V     Show version");
    println!();
    println!("OUTPUT COLUMNS:");
    println!("    STRAND    + if the FLAG field is exactly 0, else -");
    println!("    RNAME     reference sequence name");
    println!("    POS5      1-based leftmost mapping position");
    println!("    CIGAR     alignment descriptor");
    println!("    POS3      POS5 + reference span of CIGAR - 1");
    println!("    LEN       read sequence length");
    println!();
    println!("EXAMPLES:");
    println!("    aligner reads.fq | sam2tsv > summary.tsv");
    println!("    zcat alignments.sam.gz | sam2tsv");
}

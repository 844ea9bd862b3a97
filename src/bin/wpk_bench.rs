//! Measure wordpack encoded sizes and decode throughput per bit width.

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use std::time::Instant;
use wordpack::{decode_block, BlockReader, Encoder, BLOCK_SIZE};

#[derive(Parser)]
#[command(name = "wpk-bench")]
#[command(about = "Measure wordpack encoded sizes and decode throughput")]
struct Args {
    /// Number of blocks to encode per width
    #[arg(short, long, default_value = "10000")]
    blocks: usize,

    /// Restrict to a single bit width (default: sweep 1-31)
    #[arg(short, long)]
    width: Option<u8>,

    /// Fraction of blocks made uniform (all values equal), in percent
    #[arg(short, long, default_value = "20")]
    uniform_pct: u8,

    /// RNG seed for reproducible runs
    #[arg(long, default_value = "42")]
    seed: u64,
}

fn random_block(rng: &mut StdRng, width: u8) -> [u32; BLOCK_SIZE] {
    let max = ((1u64 << width) - 1) as u32;
    let mut values = [0u32; BLOCK_SIZE];
    for v in &mut values {
        *v = rng.gen_range(0..=max);
    }
    values
}

fn run_width(rng: &mut StdRng, args: &Args, width: u8) {
    let mut enc = Encoder::new();
    let mut blocks = 0usize;
    for _ in 0..args.blocks {
        if rng.gen_range(0..100) < args.uniform_pct {
            enc.write_uniform(rng.gen_range(0..1u32 << width.min(31)));
        } else {
            enc.write_packed(&random_block(rng, width), width)
                .expect("generated values fit the width");
        }
        blocks += 1;
    }
    let bytes = enc.into_bytes();
    let total_values = blocks * BLOCK_SIZE;

    let start = Instant::now();
    let mut reader = BlockReader::new(&bytes);
    let mut out = [0u32; BLOCK_SIZE];
    for _ in 0..blocks {
        decode_block(&mut reader, &mut out).expect("self-encoded stream decodes");
        black_box(out[0]);
    }
    let elapsed = start.elapsed();

    let bits_per_value = bytes.len() as f64 * 8.0 / total_values as f64;
    let mvps = total_values as f64 / elapsed.as_secs_f64() / 1e6;
    println!(
        "width {width:>2}: {blocks} blocks, {} bytes ({bits_per_value:.2} bits/value), decode {mvps:.0} Mvalues/s",
        bytes.len()
    );
}

fn main() {
    let args = Args::parse();
    let mut rng = StdRng::seed_from_u64(args.seed);

    match args.width {
        Some(w @ 1..=31) => run_width(&mut rng, &args, w),
        Some(w) => {
            eprintln!("width must be in 1..=31, got {w}");
            std::process::exit(1);
        }
        None => {
            for w in 1..=31u8 {
                run_width(&mut rng, &args, w);
            }
        }
    }
}

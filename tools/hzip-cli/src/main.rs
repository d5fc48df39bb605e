//! Command-line driver for the hzip codec
//!
//! Compression writes two sibling artifacts next to the input file:
//! `<file>.hzip` (bit payload) and `<file>.hztree` (tree). Decompression
//! reads that pair and writes `<file>.out`.

use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        print_usage();
        return ExitCode::from(2);
    }

    let input_file = &args[1];
    let operation = args[2].to_lowercase();

    let result = match operation.as_str() {
        "compress" => compress_file(input_file),
        "decompress" => decompress_file(input_file),
        _ => {
            eprintln!("Invalid operation. Please specify 'compress' or 'decompress'.");
            print_usage();
            return ExitCode::from(2);
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn compress_file(input_file: &str) -> Result<()> {
    let input = fs::read(input_file).with_context(|| format!("reading {input_file}"))?;

    let compressed = hzip::compress(&input).context("compression failed")?;

    let payload_path = format!("{input_file}.hzip");
    let tree_path = format!("{input_file}.hztree");
    fs::write(&payload_path, &compressed.payload)
        .with_context(|| format!("writing {payload_path}"))?;
    fs::write(&tree_path, &compressed.tree).with_context(|| format!("writing {tree_path}"))?;

    println!(
        "{} bytes -> {} payload bytes + {} tree bytes ({payload_path}, {tree_path})",
        input.len(),
        compressed.payload.len(),
        compressed.tree.len(),
    );
    Ok(())
}

fn decompress_file(input_file: &str) -> Result<()> {
    let payload_path = format!("{input_file}.hzip");
    let tree_path = format!("{input_file}.hztree");

    let payload = fs::read(&payload_path).with_context(|| format!("reading {payload_path}"))?;
    let tree = fs::read(&tree_path).with_context(|| format!("reading {tree_path}"))?;

    let decoded = hzip::decompress(&payload, &tree).context("decompression failed")?;

    let output_path = format!("{input_file}.out");
    fs::write(&output_path, &decoded).with_context(|| format!("writing {output_path}"))?;

    println!("{} bytes -> {} bytes ({output_path})", payload.len(), decoded.len());
    Ok(())
}

fn print_usage() {
    println!("Usage: hzip-cli <file_name> <operation>");
    println!("   <file_name>: The name of the input file.");
    println!("   <operation>: 'compress' or 'decompress'.");
}

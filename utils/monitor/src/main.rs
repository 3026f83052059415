use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::PathBuf;

use computer::Computer;
use mmu::{Mmu, PageInfo, PagedMmu};

/// Memory monitor for TinyVM machines: dumps physical memory and inspects
/// page mappings through the MMU's debug surface, without going through
/// translation or protection.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the machine config file
    #[arg(short, long)]
    config: PathBuf,

    /// Dump a physical memory range (decimal or 0x hex bounds)
    #[arg(short, long, num_args = 2, value_names = ["START", "END"])]
    dump: Option<Vec<String>>,

    /// Resolve a logical page number to its physical frame
    #[arg(short = 'p', long, value_name = "PAGE")]
    logical_page: Option<String>,

    /// List every logical page mapped onto a physical frame
    #[arg(short = 'f', long, value_name = "FRAME")]
    physical_frame: Option<String>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let computer = Computer::from_file(&args.config)
        .with_context(|| format!("loading machine {:?}", args.config))?;

    print_summary(&computer);

    if let Some(range) = &args.dump {
        let start = parse_num(&range[0])?;
        let end = parse_num(&range[1])?;
        dump_physical(computer.mmu(), start, end)?;
    }

    if args.logical_page.is_some() || args.physical_frame.is_some() {
        let paged = computer
            .device()
            .paged()
            .context("page queries need the paged MMU variant")?;
        if let Some(page) = &args.logical_page {
            show_logical_page(paged, parse_num(page)? as u32);
        }
        if let Some(frame) = &args.physical_frame {
            show_physical_frame(paged, parse_num(frame)? as u32);
        }
    }

    Ok(())
}

fn print_summary(computer: &Computer) {
    println!("{}", computer.name().bold().blue());
    let mmu = computer.mmu();
    println!(
        "mmu: {} | {} KiB physical | {} byte pages",
        mmu.name(),
        mmu.size() / 1024,
        mmu.page_size()
    );
    match computer.device().paged() {
        Some(paged) => {
            let vmem = paged.vmem_page();
            if vmem.active {
                println!("paging: on, root frame 0x{:x}", vmem.page);
            } else {
                println!("paging: off");
            }
        }
        None => println!("paging: n/a"),
    }
    println!(
        "supervisor mode: {} | fault: {}",
        mmu.supervisor_mode(),
        match mmu.fault() {
            Some(fault) => fault.to_string(),
            None => "none".to_string(),
        }
    );
    println!();
}

/// 16 bytes per row as four little-endian-ordered word groups plus an ASCII
/// gutter, the classic monitor layout.
fn dump_physical(mmu: &dyn Mmu, start: u64, end: u64) -> Result<()> {
    let mem = mmu.physical();
    if start >= end || end > mem.len() as u64 {
        anyhow::bail!(
            "dump range 0x{:x}..0x{:x} outside physical memory (0x{:x} bytes)",
            start,
            end,
            mem.len()
        );
    }

    println!("{}", "Physical memory".bold());
    for row in (start..end).step_by(16) {
        let row_end = end.min(row + 16);
        let bytes = &mem[row as usize..row_end as usize];

        let words: Vec<String> = bytes.chunks(4).map(hex::encode).collect();
        let ascii: String = bytes
            .iter()
            .map(|&b| if b.is_ascii_graphic() { b as char } else { '.' })
            .collect();

        println!("{:08x}  {:<35}  |{}|", row, words.join(" "), ascii);
    }
    Ok(())
}

fn show_logical_page(paged: &PagedMmu, page: u32) {
    println!("{}", "Logical page".bold());
    let info = paged.physical_page_from_logical(page);
    if !info.active {
        println!("0x{:05x}: paging is not active on its path", page);
    } else if !info.mapped {
        println!("0x{:05x}: not mapped", page);
    } else {
        println!(
            "0x{:05x} -> physical frame 0x{:x}{}",
            page,
            info.page,
            flag_summary(&info)
        );
    }
    println!();
}

fn show_physical_frame(paged: &PagedMmu, frame: u32) {
    println!("{}", "Physical frame".bold());
    let pages = paged.logical_pages_from_physical(frame);
    if pages.is_empty() {
        println!("0x{:x}: no logical pages mapped", frame);
    } else {
        for info in &pages {
            println!(
                "0x{:x} <- logical page 0x{:05x}{}",
                frame,
                info.page,
                flag_summary(info)
            );
        }
    }
    println!();
}

fn flag_summary(info: &PageInfo) -> String {
    let mut flags = Vec::new();
    if info.supervisor {
        flags.push("supervisor");
    }
    if info.unwritable {
        flags.push("read-only");
    }
    if info.unexecutable {
        flags.push("no-exec");
    }
    if flags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", flags.join(", "))
    }
}

fn parse_num(s: &str) -> Result<u64> {
    let t = s.trim();
    if let Some(hex_digits) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        u64::from_str_radix(hex_digits, 16).with_context(|| format!("invalid hex number `{s}`"))
    } else {
        t.parse()
            .with_context(|| format!("invalid number `{s}`"))
    }
}

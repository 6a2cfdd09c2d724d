// demos/inspect.rs
use jt_rs::*;
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: inspect <file.jt> [--legacy]");
        std::process::exit(2);
    };
    let options = if env::args().any(|arg| arg == "--legacy") {
        ReaderOptions::legacy()
    } else {
        ReaderOptions::default()
    };

    let jt = JtFile::open_with_options(&path, options)?;
    println!("{}", jt);
    println!();

    match jt.header().segment_ref {
        HeaderSegmentRef::LsgSegment(id) => println!("LSG segment: {}", id),
        HeaderSegmentRef::Reserved(id) => println!("Reserved header field: {}", id),
    }

    println!("{} TOC entries:", jt.toc().len());
    for entry in jt.toc() {
        println!(
            "  {} {:<24} offset {:>10} length {:>10} zlib {:<5} reserved {:#08x}",
            entry.segment_id,
            entry.segment_type,
            entry.segment_offset,
            entry.segment_length,
            entry.segment_type.is_zlib_applicable(),
            entry.reserved()
        );
    }

    Ok(())
}

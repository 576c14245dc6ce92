use nom_tracable::{cumulative_histogram, histogram};
use std::path::PathBuf;
use structopt::StructOpt;
use textbrick::pdf::XrefEntry;

/// Print the cross-reference table, trailer and page text of a PDF file.
#[derive(StructOpt, Debug)]
#[structopt(name = "textbrick-inspect")]
struct Opt {
    /// Input file
    #[structopt(short, long, parse(from_os_str))]
    input: PathBuf,

    /// Print the parser histogram (needs the `trace` feature)
    #[structopt(long)]
    histogram: bool,
}

pub fn main() {
    env_logger::init();
    let opt = Opt::from_args();

    let pdf = textbrick::read_file(opt.input.as_path());

    if opt.histogram {
        histogram();
        cumulative_histogram();
    }

    let pdf = match pdf {
        Ok(pdf) => pdf,
        Err(e) => {
            log::error!("Error while parsing: {}", e);
            return;
        }
    };

    let (major, minor) = pdf.version();
    println!("PDF {}.{}, xref at byte {}", major, minor, pdf.startxref());
    for entry in pdf.xref().entries() {
        match entry {
            XrefEntry::Used(u) => println!("{:>5} used at {}", u.number, u.byte_offset),
            XrefEntry::Free(f) => println!("{:>5} free, next {}", f.number, f.next_free),
        }
    }
    println!("{:?}", pdf.trailer());

    match pdf.text() {
        Ok(pages) => {
            for (index, lines) in pages.iter().enumerate() {
                println!("--- page {} ---", index + 1);
                for line in lines {
                    println!("{}", String::from_utf8_lossy(line));
                }
            }
        }
        Err(e) => log::error!("Could not extract text: {}", e),
    }
}

use std::{fs, path::PathBuf};
use structopt::StructOpt;
use textbrick::{file_name::pdf_file_name, Layout};

/// Render a text file into a PDF document.
#[derive(StructOpt, Debug)]
#[structopt(name = "textbrick-render")]
struct Opt {
    /// Input text file
    #[structopt(short, long, parse(from_os_str))]
    input: PathBuf,

    /// Output file, derived from the title if missing
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// Title used to name the output file
    #[structopt(short, long)]
    title: Option<String>,

    /// Compress content streams
    #[structopt(short, long)]
    compress: bool,

    #[structopt(long, default_value = "95")]
    max_chars_per_line: usize,

    #[structopt(long, default_value = "52")]
    max_lines_per_page: usize,

    #[structopt(long, default_value = "Helvetica")]
    font: String,

    #[structopt(long, default_value = "11")]
    font_size: u32,

    #[structopt(long, default_value = "14")]
    leading: u32,
}

pub fn main() {
    env_logger::init();
    let opt = Opt::from_args();

    let text = match fs::read(&opt.input) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            log::error!("Could not read {}: {}", opt.input.display(), e);
            return;
        }
    };

    let layout = Layout {
        max_chars_per_line: opt.max_chars_per_line,
        max_lines_per_page: opt.max_lines_per_page,
        font: opt.font,
        font_size: opt.font_size,
        leading: opt.leading,
        compress: opt.compress,
        ..Layout::default()
    };

    let encoded = match textbrick::encode_text_with(&text, &layout) {
        Ok(encoded) => encoded,
        Err(e) => {
            log::error!("Could not render: {}", e);
            return;
        }
    };
    for notice in &encoded.notices {
        log::info!("{:?}", notice);
    }

    let output = opt.output.unwrap_or_else(|| {
        let title = opt
            .title
            .or_else(|| opt.input.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .unwrap_or_default();
        PathBuf::from(pdf_file_name(&title, "document"))
    });

    if let Err(e) = fs::write(&output, &encoded.bytes) {
        log::error!("Could not write {}: {}", output.display(), e);
        return;
    }

    println!(
        "{}: {} lines on {} pages, {} bytes",
        output.display(),
        encoded.line_count,
        encoded.page_count,
        encoded.bytes.len()
    );
}

// Diagnostic tool: encode a payload and inspect the resulting symbol
use label_qr::debug::grid_to_ascii;
use label_qr::{encode_symbol, render};
use std::env;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        println!("usage: dump_symbol <text> [--size <px>] [--png <path>]");
        return;
    }

    let mut text: Option<String> = None;
    let mut size_hint = 116usize;
    let mut png_path: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--size" => {
                if let Some(value) = args.get(i + 1).and_then(|v| v.parse().ok()) {
                    size_hint = value;
                }
                i += 2;
            }
            "--png" => {
                png_path = args.get(i + 1).cloned();
                i += 2;
            }
            other => {
                if text.is_none() {
                    text = Some(other.to_string());
                }
                i += 1;
            }
        }
    }

    let Some(text) = text else {
        println!("usage: dump_symbol <text> [--size <px>] [--png <path>]");
        return;
    };

    let symbol = encode_symbol(&text);
    println!(
        "payload: '{}' ({} bytes{})",
        symbol.text,
        symbol.text.len(),
        if symbol.text.len() < text.len() {
            ", truncated"
        } else {
            ""
        }
    );
    println!(
        "version {} / EC {:?} / mask {:?}",
        symbol.version, symbol.ec_level, symbol.mask
    );
    println!("{}", grid_to_ascii(&symbol.grid));

    let instructions = render::render(&symbol, size_hint);
    println!(
        "canvas {}px, {}px per module, {} dark rects",
        instructions.canvas_size,
        instructions.module_px,
        instructions.rects.len()
    );

    if let Some(path) = png_path {
        let img = render::rasterize(&instructions);
        match img.save(&path) {
            Ok(()) => println!("wrote {}", path),
            Err(err) => eprintln!("failed to write {}: {}", path, err),
        }
    }
}

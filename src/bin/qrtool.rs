use clap::{Parser, Subcommand};
use qr_svg::render::{to_image, to_svg};
use qr_svg::{ECLevel, QrEncoder};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "qr-svg CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text and write the symbol as SVG (or PNG with --png)
    Encode {
        text: String,
        /// Error correction level: L, M, Q or H
        #[arg(long, default_value = "M")]
        level: String,
        /// Output file; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
        /// Quiet zone width in modules
        #[arg(long, default_value_t = 4)]
        quiet_zone: usize,
        /// Write a PNG raster instead of SVG
        #[arg(long)]
        png: bool,
        /// Pixels per module for PNG output
        #[arg(long, default_value_t = 8)]
        module_px: u32,
    },
    /// Encode text and print the chosen symbol parameters
    Inspect {
        text: String,
        /// Error correction level: L, M, Q or H
        #[arg(long, default_value = "M")]
        level: String,
    },
    /// Encode text and print the module grid as ASCII art
    Show {
        text: String,
        /// Error correction level: L, M, Q or H
        #[arg(long, default_value = "M")]
        level: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Encode {
            text,
            level,
            out,
            quiet_zone,
            png,
            module_px,
        } => encode_cmd(&text, &level, out.as_deref(), quiet_zone, png, module_px),
        Command::Inspect { text, level } => inspect_cmd(&text, &level),
        Command::Show { text, level } => show_cmd(&text, &level),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn parse_level(level: &str) -> Result<ECLevel, String> {
    level.parse().map_err(|err| format!("{err}"))
}

fn encode_cmd(
    text: &str,
    level: &str,
    out: Option<&Path>,
    quiet_zone: usize,
    png: bool,
    module_px: u32,
) -> Result<(), String> {
    let level = parse_level(level)?;
    let symbol = QrEncoder::new(level)
        .with_quiet_zone(quiet_zone)
        .encode(text)
        .map_err(|err| format!("{err}"))?;

    if png {
        let out = out.ok_or_else(|| "PNG output needs --out".to_string())?;
        let image = to_image(&symbol, module_px);
        image
            .save(out)
            .map_err(|err| format!("Failed to write {}: {err}", out.display()))?;
        return Ok(());
    }

    let svg = to_svg(&symbol);
    match out {
        Some(path) => std::fs::write(path, svg)
            .map_err(|err| format!("Failed to write {}: {err}", path.display())),
        None => {
            println!("{svg}");
            Ok(())
        }
    }
}

fn inspect_cmd(text: &str, level: &str) -> Result<(), String> {
    let level = parse_level(level)?;
    let symbol = QrEncoder::new(level)
        .encode(text)
        .map_err(|err| format!("{err}"))?;

    println!("Input: {} bytes", text.len());
    println!("Version: {}", symbol.version);
    println!("Error correction: {}", symbol.ec_level.code());
    println!("Mask: {}", symbol.mask.id());
    println!(
        "Modules: {0}x{0} ({1}x{1} with quiet zone)",
        symbol.modules.width(),
        symbol.side_length
    );
    println!(
        "Dark modules: {}/{}",
        symbol.modules.count_dark(),
        symbol.modules.width() * symbol.modules.height()
    );
    Ok(())
}

fn show_cmd(text: &str, level: &str) -> Result<(), String> {
    let level = parse_level(level)?;
    let symbol = QrEncoder::new(level)
        .encode(text)
        .map_err(|err| format!("{err}"))?;

    let side = symbol.modules.width();
    for y in 0..side {
        let mut line = String::with_capacity(2 * side);
        for x in 0..side {
            line.push_str(if symbol.modules.get(x, y) { "##" } else { "  " });
        }
        println!("{line}");
    }
    Ok(())
}

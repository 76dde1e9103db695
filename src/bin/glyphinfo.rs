use clap::Parser;
use rastertype::Font;
use std::path::PathBuf;

/// Inspect a TrueType font and optionally render one character.
///
/// Prints the font summary (units per em, bounding box, glyph count, cmap
/// coverage, maxp limits). With `--char`, renders the character's bitmap and
/// either writes it as a PNG or prints it as ASCII art.
#[derive(Parser, Debug)]
#[command(name = "glyphinfo", version, about)]
struct Args {
  /// Path to a TrueType font file.
  font: PathBuf,

  /// Character to render.
  #[arg(long, value_name = "CHAR")]
  char: Option<char>,

  /// Point size for rendering.
  #[arg(long, default_value_t = 24)]
  size: u16,

  /// Device resolution in dots per inch.
  #[arg(long, default_value_t = 72)]
  dpi: u16,

  /// Write the rendered bitmap to this PNG file instead of printing it.
  #[arg(long, value_name = "FILE")]
  out: Option<PathBuf>,
}

fn main() {
  if let Err(err) = run() {
    eprintln!("error: {err}");
    std::process::exit(1);
  }
}

fn run() -> Result<(), String> {
  let args = Args::parse();

  let font = Font::open(&args.font).map_err(|err| err.to_string())?;
  let (x_min, y_min, x_max, y_max) = font.bounding_box();
  let limits = font.limits();

  println!("font: {}", args.font.display());
  println!("  units per em:  {}", font.units_per_em());
  println!("  bounding box:  x=({x_min}, {x_max}) y=({y_min}, {y_max})");
  println!("  glyphs:        {}", font.glyph_count());
  println!("  mapped chars:  {}", font.mapped_chars());
  println!(
    "  maxp limits:   points={} contours={} component points={} component contours={} depth={}",
    limits.max_points,
    limits.max_contours,
    limits.max_component_points,
    limits.max_component_contours,
    limits.max_component_depth
  );

  let Some(ch) = args.char else {
    return Ok(());
  };

  let glyph = font
    .glyph(ch as u32, args.size, args.dpi)
    .map_err(|err| err.to_string())?;
  let (width, height) = glyph.extent();
  println!("glyph '{ch}' at {}pt/{}dpi: {width}x{height}", args.size, args.dpi);

  if glyph.is_empty() {
    println!("  (empty glyph)");
    return Ok(());
  }

  match args.out {
    Some(path) => write_png(&path, width, height, glyph.data()),
    None => {
      print_ascii(width, height, glyph.data());
      Ok(())
    }
  }
}

/// Encodes the bitmap as PNG. Glyph rows are bottom-up; image rows are
/// top-down, so rows flip at this boundary.
fn write_png(path: &PathBuf, width: u16, height: u16, data: &[u8]) -> Result<(), String> {
  let mut img = image::GrayImage::new(u32::from(width), u32::from(height));
  for y in 0..height {
    for x in 0..width {
      let value = data[y as usize * width as usize + x as usize];
      img.put_pixel(
        u32::from(x),
        u32::from(height - 1 - y),
        image::Luma([value]),
      );
    }
  }
  img
    .save_with_format(path, image::ImageFormat::Png)
    .map_err(|err| format!("failed to write {}: {err}", path.display()))?;
  println!("  wrote {}", path.display());
  Ok(())
}

fn print_ascii(width: u16, height: u16, data: &[u8]) {
  for y in (0..height).rev() {
    let mut line = String::with_capacity(width as usize);
    for x in 0..width {
      let value = data[y as usize * width as usize + x as usize];
      line.push(if value > 0 { '#' } else { '.' });
    }
    println!("  {line}");
  }
}

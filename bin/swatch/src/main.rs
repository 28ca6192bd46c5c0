//! Print a color in every supported model, with a truecolor terminal swatch.

use clap::Parser;
use polychrome::{ColorValue, Hex, Hsl, Hsv, Hwb, Rgb, Space};
use std::process::ExitCode;
use std::str::FromStr;

/// Convert a color between the supported models: hex, rgb, hsl, hwb, hsv.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// The color to convert, e.g. `#406273`, `rgb(64, 98, 115)`,
    /// `hsl(200, 28, 35)`, `hwb(200, 25, 55)` or `hsv(200, 44, 45)`.
    color: String,

    /// Only print the color in this model.
    #[arg(short, long, value_name = "MODEL")]
    target: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), String> {
    let value = parse_color(&args.color)?;

    if let Some(name) = &args.target {
        let target = Space::from_str(name).map_err(|err| err.to_string())?;
        let converted = value.convert(target).map_err(|err| err.to_string())?;
        println!("{}", format_value(&converted));
        return Ok(());
    }

    let set = value.all_models().map_err(|err| err.to_string())?;

    print_swatch(&set.rgb);
    println!("hex  {}", set.hex);
    println!("rgb  {}", format_value(&ColorValue::from(set.rgb)));
    println!("hsl  {}", format_value(&ColorValue::from(set.hsl)));
    println!("hwb  {}", format_value(&ColorValue::from(set.hwb)));
    println!("hsv  {}", format_value(&ColorValue::from(set.hsv)));

    Ok(())
}

/// Parse `#rrggbb`, bare `rrggbb`, or `model(a, b, c)` functional notation.
fn parse_color(input: &str) -> Result<ColorValue, String> {
    let input = input.trim();

    let Some((name, rest)) = input.split_once('(') else {
        return Ok(ColorValue::from(Hex::new(input)));
    };

    let body = rest
        .strip_suffix(')')
        .ok_or_else(|| format!("missing closing `)` in `{input}`"))?;

    let components: Vec<u16> = body
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(parse_component)
        .collect::<Result<_, _>>()?;

    let [a, b, c] = components[..] else {
        return Err(format!(
            "expected 3 components in `{input}`, got {}",
            components.len()
        ));
    };

    let space = Space::from_str(name.trim()).map_err(|err| err.to_string())?;
    Ok(match space {
        Space::Hex => return Err(format!("hex colors take no components: `{input}`")),
        Space::Rgb => ColorValue::from(Rgb::new(a, b, c)),
        Space::Hsl => ColorValue::from(Hsl::new(a, b, c)),
        Space::Hwb => ColorValue::from(Hwb::new(a, b, c)),
        Space::Hsv => ColorValue::from(Hsv::new(a, b, c)),
    })
}

fn parse_component(part: &str) -> Result<u16, String> {
    let digits = part
        .trim()
        .trim_end_matches('%')
        .trim_end_matches("deg");
    digits
        .parse::<u16>()
        .map_err(|_| format!("invalid component `{part}`"))
}

fn format_value(value: &ColorValue) -> String {
    match value {
        ColorValue::Hex(hex) => hex.to_string(),
        ColorValue::Rgb(rgb) => format!("rgb({}, {}, {})", rgb.red, rgb.green, rgb.blue),
        ColorValue::Hsl(hsl) => {
            format!("hsl({}deg, {}%, {}%)", hsl.hue, hsl.saturation, hsl.lightness)
        }
        ColorValue::Hwb(hwb) => {
            format!("hwb({}deg, {}%, {}%)", hwb.hue, hwb.whiteness, hwb.blackness)
        }
        ColorValue::Hsv(hsv) => {
            format!("hsv({}deg, {}%, {}%)", hsv.hue, hsv.saturation, hsv.value)
        }
    }
}

fn print_swatch(rgb: &Rgb) {
    println!(
        "\x1b[48;2;{};{};{}m        \x1b[0m",
        rgb.red, rgb.green, rgb.blue
    );
}

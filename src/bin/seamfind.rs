use seamfinder::{find_seam, CostField, Direction, SeamError};

extern crate clap;
extern crate image;

use clap::{App, Arg};
use image::{DynamicImage, GenericImageView};
use itertools::Itertools;
use log::{info, LevelFilter};

fn load_field(path: &str) -> Result<CostField<f64>, failure::Error> {
    let image = image::open(path)?;
    info!("loaded {} ({}x{})", path, image.width(), image.height());
    let field = match image {
        DynamicImage::ImageLuma8(ref buf) => CostField::from_image(buf),
        DynamicImage::ImageLuma16(ref buf) => CostField::from_image(buf),
        ref other => Err(SeamError::invalid_channels(other.color().channel_count())),
    }?;
    Ok(field)
}

fn main() -> Result<(), failure::Error> {
    let matches = App::new("seamfind")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Find the lowest-cost seam across a grayscale energy map")
        .arg(
            Arg::with_name("energyfile")
                .help("A single-channel image whose samples are the cost of each pixel")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("direction")
                .short("d")
                .long("direction")
                .takes_value(true)
                .default_value("top-to-bottom")
                .help("top-to-bottom (vertical) or left-to-right (horizontal)"),
        )
        .arg(
            Arg::with_name("one-based")
                .long("one-based")
                .help("Print 1-based indices"),
        )
        .arg(
            Arg::with_name("cost")
                .long("cost")
                .help("Also print the total cost of the seam"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Log progress to stderr; repeat for more detail"),
        )
        .get_matches();

    let level = match matches.occurrences_of("verbose") {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    // Both arguments are guaranteed present by clap: one is required,
    // the other has a default.
    let path = matches.value_of("energyfile").unwrap_or_default();
    let direction: Direction = matches.value_of("direction").unwrap_or_default().parse()?;

    let field = load_field(path)?;
    let found = find_seam(&field, direction)?;
    info!("{} seam of length {} found", direction, found.len());

    let offset = if matches.is_present("one-based") { 1 } else { 0 };
    println!("{}", found.seam.iter().map(|i| i + offset).join(" "));
    if matches.is_present("cost") {
        println!("{}", found.cost());
    }
    Ok(())
}

use anyhow::bail;
use clap::Parser;
use coordtransform::{convert, format::fixed, Scheme};
use log::{debug, info};

/// Reference location: Tencent Building, Shenzhen, as reported by Baidu's
/// marker API in each scheme.
const TENCENT_BUILDING: [(Scheme, (f64, f64)); 4] = [
    (Scheme::Wgs84, (22.543415, 113.929665)),
    (Scheme::Gcj02, (22.540385, 113.934532)),
    (Scheme::Bd09, (22.546054, 113.94108)),
    (Scheme::Bd09Mc, (12_684_001., 2_560_682.4)),
];

/// Convert coordinates between WGS84, GCJ02, BD09 ("bd09ll") and BD09MC.
///
/// Without a coordinate, prints every conversion of a reference location.
#[derive(Parser, Debug)]
#[clap(name = "coordtransform")]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Scheme of the input coordinate
    #[clap(short, long, default_value = "wgs84")]
    from: Scheme,

    /// Scheme to convert to
    #[clap(short, long, default_value = "bd09")]
    to: Scheme,

    /// Decimals in the output, 6 for lat/lon and 1 for BD09MC by default
    #[clap(short = 'd', long)]
    decimals: Option<usize>,

    /// Report the deviation after converting back
    #[clap(short, long)]
    roundtrip: bool,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// `lat lon`, or `x y` for BD09MC
    #[clap(allow_negative_numbers = true)]
    coordinate: Vec<f64>,
}

fn decimals_for(scheme: Scheme, requested: Option<usize>) -> usize {
    requested.unwrap_or(if scheme.is_projected() { 1 } else { 6 })
}

fn demo(decimals: Option<usize>) {
    for (from, (a, b)) in TENCENT_BUILDING {
        for to in Scheme::ALL.into_iter().filter(|to| *to != from) {
            let (c, d) = convert(from, to, a, b);
            let places = decimals_for(to, decimals);
            println!("{from} -> {to}: {}, {}", fixed(c, places), fixed(d, places));
        }
        println!();
    }
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();
    debug!("{cli:?}");

    let (a, b) = match cli.coordinate[..] {
        [] => {
            info!("no coordinate given, converting the reference location");
            demo(cli.decimals);
            return Ok(());
        }
        [a, b] => (a, b),
        _ => bail!(
            "expected exactly two numbers, got {}",
            cli.coordinate.len()
        ),
    };

    let (c, d) = convert(cli.from, cli.to, a, b);
    let places = decimals_for(cli.to, cli.decimals);
    println!("{}, {}", fixed(c, places), fixed(d, places));

    if cli.roundtrip {
        let (back_a, back_b) = convert(cli.to, cli.from, c, d);
        println!("roundtrip deviation: {:e}, {:e}", back_a - a, back_b - b);
    }

    Ok(())
}

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::info;

use readorder_core::consts::{CONFIDENCE_THRESHOLD, LINE_BREAK_RATIO};
use readorder_core::{AnchorPolicy, Assembler, AssemblerConfig, Provider};

#[derive(Parser)]
#[command(name = "reorder")]
#[command(about = "Reconstructs OCR output into reading order")]
struct Args {
    #[arg(help = "Saved OCR response JSON file path")]
    input: String,

    #[arg(
        short,
        long,
        value_enum,
        default_value_t = ProviderArg::Clova,
        help = "Vendor that produced the response"
    )]
    provider: ProviderArg,

    #[arg(
        long,
        default_value_t = CONFIDENCE_THRESHOLD,
        help = "Minimum confidence for a fragment to be kept (exclusive)"
    )]
    confidence_threshold: f32,

    #[arg(
        long,
        default_value_t = LINE_BREAK_RATIO,
        help = "Fraction of the anchor height tolerated within one line"
    )]
    line_break_ratio: f32,

    #[arg(long, help = "Re-anchor the current line on every walked fragment")]
    rolling_anchor: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ProviderArg {
    Clova,
    Upstage,
}

impl From<ProviderArg> for Provider {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::Clova => Provider::Clova,
            ProviderArg::Upstage => Provider::Upstage,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let provider: Provider = args.provider.into();

    info!("Reading {} response from {}", provider.name(), args.input);
    let fragments = provider.load(&args.input)?;
    info!("Decoded {} fragments", fragments.len());

    let anchor = if args.rolling_anchor {
        AnchorPolicy::Rolling
    } else {
        AnchorPolicy::FirstFragment
    };

    let assembler = Assembler::with_config(AssemblerConfig {
        confidence_threshold: args.confidence_threshold,
        line_break_ratio: args.line_break_ratio,
        anchor,
    });

    println!("{}", assembler.assemble(fragments));

    Ok(())
}

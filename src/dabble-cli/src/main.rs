// This file is part of Dabble.
// Copyright (C) 2023 the Dabble developers
//
// Dabble is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Dabble is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Dabble.  If not, see <https://www.gnu.org/licenses/>.

use clap::{Args, Parser, Subcommand};
use tracing::Level;

use dabble_cli::render::*;
use dabcore::preview::{BrushPreview, PreviewShape};

use std::io;

#[derive(Parser)]
#[clap(version, about)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a brush preview image
    Preview {
        /// Output file
        #[clap(value_parser)]
        output: String,

        #[clap(flatten)]
        brush: BrushArgs,
    },
    /// Print the scheduled dab positions without rendering
    Dabs {
        #[clap(flatten)]
        brush: BrushArgs,
    },
}

#[derive(Copy, Clone, Eq, PartialEq, Default, clap::ValueEnum)]
enum Shape {
    #[default]
    Stroke,
    Line,
    Rectangle,
}

impl From<Shape> for PreviewShape {
    fn from(s: Shape) -> Self {
        match s {
            Shape::Stroke => PreviewShape::Stroke,
            Shape::Line => PreviewShape::Line,
            Shape::Rectangle => PreviewShape::Rectangle,
        }
    }
}

#[derive(Args)]
struct BrushArgs {
    /// Brush radius
    #[clap(short, long, value_parser, default_value_t = 10.0)]
    radius: f32,

    /// Opacity percentage
    #[clap(short, long, value_parser, default_value_t = 100)]
    opacity: u32,

    /// Hardness percentage
    #[clap(long, value_parser, default_value_t = 100)]
    hardness: u32,

    /// Dab spacing as a percentage of the radius
    #[clap(short, long, value_parser, default_value_t = 15)]
    spacing: u32,

    /// Preview shape
    #[clap(long, value_parser)]
    shape: Option<Shape>,

    /// Primary color (#rrggbb)
    #[clap(short, long, value_parser, default_value = "#1d99f3")]
    color: String,

    /// Secondary color blended in at low pressure (#rrggbb)
    #[clap(long, value_parser)]
    color2: Option<String>,

    /// Scale dab size by pressure
    #[clap(long)]
    size_pressure: bool,

    /// Scale opacity by pressure
    #[clap(long)]
    opacity_pressure: bool,

    /// Scale hardness by pressure
    #[clap(long)]
    hardness_pressure: bool,

    /// Preview area size (WxH)
    #[clap(long, value_parser, default_value = "256x128")]
    size: Size,
}

fn build_preview(args: &BrushArgs) -> Result<BrushPreview, Box<dyn std::error::Error>> {
    let Size(w, h) = args.size;
    let mut bp = BrushPreview::new(w as i32, h as i32);
    bp.set_shape(args.shape.unwrap_or_default().into());
    bp.set_size(args.radius.max(0.0));
    bp.set_opacity(args.opacity.min(100) as f32 / 100.0);
    bp.set_hardness(args.hardness.min(100) as f32 / 100.0);
    bp.set_spacing(args.spacing.min(100) as f32);
    bp.set_color1(args.color.parse()?);
    if let Some(c2) = &args.color2 {
        bp.set_color2(c2.parse()?);
        bp.set_color_pressure(true);
    }
    bp.set_size_pressure(args.size_pressure);
    bp.set_opacity_pressure(args.opacity_pressure);
    bp.set_hardness_pressure(args.hardness_pressure);
    Ok(bp)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::Subscriber::builder()
        .with_max_level(Level::DEBUG)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Preview { output, brush } => {
            let bp = build_preview(&brush)?;
            save_preview(&bp, &output)
        }
        Commands::Dabs { brush } => {
            let bp = build_preview(&brush)?;
            write_dab_list(&bp, &mut io::stdout().lock())?;
            Ok(())
        }
    }
}

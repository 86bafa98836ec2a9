//! CLI definition using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use indent_core::calculations::cuplock::{CuplockKind, CuplockWall};
use indent_core::calculations::jack::JackKind;
use indent_core::calculations::plate::{DimensionUnit, FramingType};
use indent_core::calculations::prop::PropTop;
use indent_core::calculations::{ProductType, DEFAULT_BATCH_QUANTITY};
use indent_core::export::ExportFormat;

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "indent")]
#[command(version)]
#[command(about = "Raw material and accessory indent calculator for scaffolding production")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, short = 'f', global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Verbose output (debug logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Batch and export options shared by every product command
#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// Number of finished pieces
    #[arg(long, short = 'q', default_value_t = DEFAULT_BATCH_QUANTITY)]
    pub qty: u32,

    /// Company printed on exports
    #[arg(long)]
    pub company: Option<String>,

    /// Order / job reference
    #[arg(long)]
    pub reference: Option<String>,

    /// Who prepared the indent
    #[arg(long)]
    pub prepared_by: Option<String>,

    #[command(flatten)]
    pub export: ExportArgs,
}

/// Where to write exported documents
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Export formats to write (repeatable)
    #[arg(long, short = 'e', value_enum)]
    pub export: Vec<ExportKind>,

    /// Directory for exported files
    #[arg(long, short = 'o', default_value = ".")]
    pub out_dir: PathBuf,

    /// Also save the request as JSON
    #[arg(long)]
    pub save_request: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Centering plate: sheet plus angle framing
    Plate {
        /// Plate length (in --unit)
        #[arg(long, default_value_t = 900.0)]
        length: f64,

        /// Plate breadth (in --unit)
        #[arg(long, default_value_t = 600.0)]
        breadth: f64,

        /// Unit of length and breadth
        #[arg(long, value_enum, default_value_t = UnitArg::Mm)]
        unit: UnitArg,

        /// Sheet thickness (mm)
        #[arg(long, default_value_t = 2.0)]
        sheet: f64,

        /// Angle size, e.g. "25 x 25"
        #[arg(long, default_value = "25 x 25")]
        angle: String,

        /// Angle thickness (mm); snaps to the first stocked thickness if not stocked
        #[arg(long)]
        angle_thk: Option<f64>,

        /// Framing layout
        #[arg(long, value_enum, default_value_t = FramingArg::A)]
        framing: FramingArg,

        #[command(flatten)]
        batch: BatchArgs,
    },

    /// Telescopic span (standard master BOM unless a size is given)
    Span {
        /// Body length (mm); enables computed sheet and perimeter angle
        #[arg(long, requires = "breadth_mm")]
        length_mm: Option<f64>,

        /// Body breadth (mm)
        #[arg(long, requires = "length_mm")]
        breadth_mm: Option<f64>,

        /// Body sheet thickness (mm)
        #[arg(long, default_value_t = 2.0)]
        sheet: f64,

        /// Perimeter angle size
        #[arg(long, default_value = "25 x 25")]
        angle: String,

        /// Perimeter angle thickness (mm)
        #[arg(long)]
        angle_thk: Option<f64>,

        #[command(flatten)]
        batch: BatchArgs,
    },

    /// Cuplock vertical or ledger
    Cuplock {
        /// Member kind
        #[arg(long, value_enum, default_value_t = CuplockKindArg::Vertical)]
        kind: CuplockKindArg,

        /// Nominal length (m)
        #[arg(long, default_value_t = 3.0)]
        length: f64,

        /// Pipe wall thickness
        #[arg(long, value_enum, default_value_t = WallArg::W2_9)]
        wall: WallArg,

        #[command(flatten)]
        batch: BatchArgs,
    },

    /// Adjustable prop
    Prop {
        /// Outer tube length including coil sleeve (m)
        #[arg(long, default_value_t = 2.0)]
        outer: f64,

        /// Inner tube length (m)
        #[arg(long, default_value_t = 2.0)]
        inner: f64,

        /// Inner tube head
        #[arg(long, value_enum, default_value_t = PropTopArg::Plate)]
        top: PropTopArg,

        #[command(flatten)]
        batch: BatchArgs,
    },

    /// Base jack or U-jack
    Jack {
        /// Jack kind
        #[arg(long, value_enum, default_value_t = JackKindArg::Base)]
        kind: JackKindArg,

        /// Rod diameter label, e.g. "30mm"
        #[arg(long, default_value = "30mm")]
        rod: String,

        /// Rod length (inches)
        #[arg(long, default_value_t = 18.0)]
        length_in: f64,

        #[command(flatten)]
        batch: BatchArgs,
    },

    /// Compute a saved request file
    Run {
        /// Path to request JSON
        request: PathBuf,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Write a request file with default settings for a product
    Init {
        /// Product
        #[arg(value_enum)]
        product: ProductArg,

        /// Output path
        #[arg(long, short = 'o', default_value = "request.indent.json")]
        output: PathBuf,

        /// Batch quantity
        #[arg(long, short = 'q', default_value_t = DEFAULT_BATCH_QUANTITY)]
        qty: u32,
    },

    /// Show the material reference tables
    Tables,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum UnitArg {
    Mm,
    Feet,
}

impl From<UnitArg> for DimensionUnit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::Mm => DimensionUnit::Millimeter,
            UnitArg::Feet => DimensionUnit::Foot,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FramingArg {
    /// 2 long + 3 short
    #[value(alias = "2l3s")]
    A,
    /// 2 long + 4 short
    #[value(alias = "2l4s")]
    B,
    /// 3 long + 2 short
    #[value(alias = "3l2s")]
    C,
}

impl From<FramingArg> for FramingType {
    fn from(arg: FramingArg) -> Self {
        match arg {
            FramingArg::A => FramingType::TwoLongThreeShort,
            FramingArg::B => FramingType::TwoLongFourShort,
            FramingArg::C => FramingType::ThreeLongTwoShort,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CuplockKindArg {
    Vertical,
    Ledger,
}

impl From<CuplockKindArg> for CuplockKind {
    fn from(arg: CuplockKindArg) -> Self {
        match arg {
            CuplockKindArg::Vertical => CuplockKind::Vertical,
            CuplockKindArg::Ledger => CuplockKind::Ledger,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum WallArg {
    #[value(name = "2.9")]
    W2_9,
    #[value(name = "3.2")]
    W3_2,
}

impl From<WallArg> for CuplockWall {
    fn from(arg: WallArg) -> Self {
        match arg {
            WallArg::W2_9 => CuplockWall::Mm2_9,
            WallArg::W3_2 => CuplockWall::Mm3_2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PropTopArg {
    Plate,
    UHead,
    LAngle,
}

impl From<PropTopArg> for PropTop {
    fn from(arg: PropTopArg) -> Self {
        match arg {
            PropTopArg::Plate => PropTop::Plate,
            PropTopArg::UHead => PropTop::UHead,
            PropTopArg::LAngle => PropTop::LAngle,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum JackKindArg {
    Base,
    U,
}

impl From<JackKindArg> for JackKind {
    fn from(arg: JackKindArg) -> Self {
        match arg {
            JackKindArg::Base => JackKind::BaseJack,
            JackKindArg::U => JackKind::UJack,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ProductArg {
    Span,
    Plate,
    Cuplock,
    Prop,
    Jack,
}

impl From<ProductArg> for ProductType {
    fn from(arg: ProductArg) -> Self {
        match arg {
            ProductArg::Span => ProductType::Span,
            ProductArg::Plate => ProductType::Plate,
            ProductArg::Cuplock => ProductType::Cuplock,
            ProductArg::Prop => ProductType::Prop,
            ProductArg::Jack => ProductType::Jack,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportKind {
    Xlsx,
    Pdf,
    Doc,
}

impl From<ExportKind> for ExportFormat {
    fn from(arg: ExportKind) -> Self {
        match arg {
            ExportKind::Xlsx => ExportFormat::Xlsx,
            ExportKind::Pdf => ExportFormat::Pdf,
            ExportKind::Doc => ExportFormat::Doc,
        }
    }
}

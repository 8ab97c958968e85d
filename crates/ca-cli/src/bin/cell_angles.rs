use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use cell_angles::{
    AnalysisOptions, CellFile, ContactRole, LabelImage, Outcome, Point2d, Point2i, RootSide,
    TISSUE_PRESETS, analyze_cell_file, digital_line, extract_labels,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use image::{DynamicImage, Rgb, RgbImage};
use log::info;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "cell_angles")]
#[command(about = "Measure wall angles along a file of cells in a label image")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the labels crossed by the waypoint polyline.
    #[command(name = "labels")]
    Labels(InputArgs),
    /// Run the full boundary analysis.
    #[command(name = "analyze")]
    Analyze(AnalyzeArgs),
}

#[derive(Args, Debug, Clone)]
struct InputArgs {
    /// 8- or 16-bit grayscale label image, 0 is background.
    #[arg(long, required = true)]
    input: PathBuf,
    /// Polyline vertices as "x,y;x,y;...", at least two.
    #[arg(long, required = true)]
    waypoints: String,
}

#[derive(Args, Debug, Clone)]
struct AnalyzeArgs {
    #[command(flatten)]
    input: InputArgs,
    /// JSON file with `side`, `smooth_path` and `tissue_type`.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, value_enum)]
    side: Option<SideArg>,
    /// Keep the raw centroid path.
    #[arg(long)]
    no_smooth: bool,
    /// Tissue type recorded in the reports (presets: Epiderm, Cortex, Endoderm, Pericycle).
    #[arg(long)]
    tissue: Option<String>,
    #[arg(long, default_value = "out/cell_angles")]
    out: PathBuf,
    /// Print the results table.
    #[arg(long)]
    table: bool,
    /// Print semicolon separated log lines.
    #[arg(long)]
    log: bool,
    /// Write overlay.png next to result.json.
    #[arg(long)]
    overlay: bool,
    /// Image to draw the overlay on; defaults to a grey rendering of the labels.
    #[arg(long)]
    background: Option<PathBuf>,
}

#[derive(ValueEnum, Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum SideArg {
    Left,
    Right,
}

impl From<SideArg> for RootSide {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Left => RootSide::Left,
            SideArg::Right => RootSide::Right,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct AnalyzeConfig {
    side: SideArg,
    smooth_path: bool,
    tissue_type: String,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self {
            side: SideArg::Left,
            smooth_path: true,
            tissue_type: TISSUE_PRESETS[0].to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct PointDto {
    x: f64,
    y: f64,
}

#[derive(Debug, Clone, Serialize)]
struct BoundaryDto {
    label1: u32,
    label2: u32,
    inner: [i32; 2],
    outer: [i32; 2],
    angle_rad: f64,
    angle_deg: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum OutcomeDto {
    Completed,
    Aborted {
        pair_index: usize,
        label1: u32,
        label2: u32,
        missing: &'static str,
    },
}

#[derive(Debug, Clone, Serialize)]
struct ResultDto {
    image: String,
    tissue_type: String,
    side: SideArg,
    smoothed: bool,
    labels: Vec<u32>,
    path: Vec<PointDto>,
    boundaries: Vec<BoundaryDto>,
    outcome: OutcomeDto,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.cmd {
        Command::Labels(args) => run_labels(args),
        Command::Analyze(args) => run_analyze(args),
    }
}

fn run_labels(args: InputArgs) -> Result<()> {
    let img = load_label_image(&args.input)?;
    let waypoints = parse_waypoints(&args.waypoints)?;

    let labels = extract_labels(&img.as_view(), &waypoints)
        .with_context(|| format!("extracting labels from {}", args.input.display()))?;

    let text: Vec<String> = labels.as_slice().iter().map(u32::to_string).collect();
    println!("{}", text.join(" "));
    Ok(())
}

fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    let img = load_label_image(&args.input.input)?;
    let waypoints = parse_waypoints(&args.input.waypoints)?;

    let mut cfg = match &args.config {
        Some(path) => read_json::<AnalyzeConfig>(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => AnalyzeConfig::default(),
    };
    if let Some(side) = args.side {
        cfg.side = side;
    }
    if args.no_smooth {
        cfg.smooth_path = false;
    }
    if let Some(tissue) = &args.tissue {
        cfg.tissue_type = tissue.clone();
    }

    let opts = AnalysisOptions {
        side: cfg.side.into(),
        smooth_path: cfg.smooth_path,
        tissue_type: cfg.tissue_type.clone(),
    };
    let cf = analyze_cell_file(&img.as_view(), &waypoints, &opts)
        .with_context(|| format!("analyzing cell file in {}", args.input.input.display()))?;

    let image_name = args
        .input
        .input
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned();

    info!(
        "{image_name}: {} labels, {} boundaries",
        cf.labels.len(),
        cf.boundaries.len()
    );
    if let Outcome::Aborted {
        pair_index,
        label1,
        label2,
        missing,
    } = cf.outcome
    {
        info!(
            "partial result: {} point not found at pair {pair_index} ({label1}-{label2})",
            role_name(missing)
        );
    }

    if args.table {
        print_table(&cf);
    }
    if args.log {
        for line in cf.log_lines(&image_name) {
            println!("{line}");
        }
    }

    fs::create_dir_all(&args.out)
        .with_context(|| format!("creating output directory {}", args.out.display()))?;
    write_json(args.out.join("result.json"), &result_dto(&image_name, cfg.side, &cf))?;

    if args.overlay {
        let base = match &args.background {
            Some(path) => image::open(path)
                .with_context(|| format!("opening background image {}", path.display()))?
                .to_rgb8(),
            None => render_labels(&img),
        };
        let rgb = render_overlay(base, &cf);
        let path = args.out.join("overlay.png");
        rgb.save(&path)
            .with_context(|| format!("saving image {}", path.display()))?;
    }

    info!("results written to {}", args.out.display());
    Ok(())
}

fn parse_waypoints(text: &str) -> Result<Vec<Point2d>> {
    let mut points = Vec::new();
    for item in text.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        let Some((xs, ys)) = item.split_once(',') else {
            bail!("waypoint '{item}' is not of the form x,y");
        };
        let x: f64 = xs
            .trim()
            .parse()
            .with_context(|| format!("parsing x of waypoint '{item}'"))?;
        let y: f64 = ys
            .trim()
            .parse()
            .with_context(|| format!("parsing y of waypoint '{item}'"))?;
        points.push(Point2d::new(x, y));
    }
    Ok(points)
}

fn load_label_image(path: &Path) -> Result<LabelImage> {
    ensure_file_exists(path, "input")?;
    let dyn_img =
        image::open(path).with_context(|| format!("opening label image {}", path.display()))?;
    let (w, h) = (dyn_img.width() as usize, dyn_img.height() as usize);

    let data: Vec<u32> = match dyn_img {
        DynamicImage::ImageLuma8(g) => g.into_raw().into_iter().map(u32::from).collect(),
        DynamicImage::ImageLuma16(g) => g.into_raw().into_iter().map(u32::from).collect(),
        other => bail!(
            "label image {} must be 8- or 16-bit grayscale, got {:?}",
            path.display(),
            other.color()
        ),
    };

    LabelImage::from_vec(w, h, data)
        .with_context(|| format!("constructing label image from {}", path.display()))
}

fn print_table(cf: &CellFile) {
    println!(
        "{:>8} {:>8} {:>7} {:>7} {:>7} {:>7} {:>9}",
        "Label1", "Label2", "innerX", "innerY", "outerX", "outerY", "angle"
    );
    for r in cf.table() {
        println!(
            "{:>8} {:>8} {:>7} {:>7} {:>7} {:>7} {:>9.3}",
            r.label1, r.label2, r.inner_x, r.inner_y, r.outer_x, r.outer_y, r.angle_deg
        );
    }
}

fn result_dto(image_name: &str, side: SideArg, cf: &CellFile) -> ResultDto {
    let boundaries = cf
        .boundaries
        .iter()
        .map(|b| BoundaryDto {
            label1: b.label1,
            label2: b.label2,
            inner: [b.inner.x, b.inner.y],
            outer: [b.outer.x, b.outer.y],
            angle_rad: b.angle,
            angle_deg: b.angle.to_degrees(),
        })
        .collect();

    let outcome = match cf.outcome {
        Outcome::Completed => OutcomeDto::Completed,
        Outcome::Aborted {
            pair_index,
            label1,
            label2,
            missing,
        } => OutcomeDto::Aborted {
            pair_index,
            label1,
            label2,
            missing: role_name(missing),
        },
    };

    ResultDto {
        image: image_name.to_owned(),
        tissue_type: cf.tissue_type.clone(),
        side,
        smoothed: cf.smoothed,
        labels: cf.labels.clone(),
        path: cf.path.iter().map(|p| PointDto { x: p.x, y: p.y }).collect(),
        boundaries,
        outcome,
    }
}

fn role_name(role: ContactRole) -> &'static str {
    match role {
        ContactRole::Inner => "inner",
        ContactRole::Outer => "outer",
    }
}

/// Grey levels spread over labels; background stays black.
fn render_labels(img: &LabelImage) -> RgbImage {
    let mut rgb = RgbImage::new(img.width() as u32, img.height() as u32);
    for (i, &label) in img.data().iter().enumerate() {
        let v = if label == 0 {
            0
        } else {
            (64 + (label.wrapping_mul(37) % 160)) as u8
        };
        let (x, y) = ((i % img.width()) as u32, (i / img.width()) as u32);
        rgb.put_pixel(x, y, Rgb([v, v, v]));
    }
    rgb
}

/// Path in red, walls inner->outer in green, contact points as red dots.
fn render_overlay(mut rgb: RgbImage, cf: &CellFile) -> RgbImage {
    const RED: Rgb<u8> = Rgb([255, 0, 0]);
    const GREEN: Rgb<u8> = Rgb([0, 255, 0]);

    for b in &cf.boundaries {
        draw_segment(&mut rgb, b.inner, b.outer, GREEN);
    }
    for w in cf.path.points.windows(2) {
        draw_segment(&mut rgb, nearest_cell(w[0]), nearest_cell(w[1]), RED);
    }
    for p in cf.all_extremities() {
        draw_dot(&mut rgb, p, RED);
    }
    rgb
}

fn nearest_cell(p: Point2d) -> Point2i {
    Point2i::new(p.x.round() as i32, p.y.round() as i32)
}

fn draw_segment(img: &mut RgbImage, a: Point2i, b: Point2i, color: Rgb<u8>) {
    for p in digital_line(a, b) {
        put_pixel_checked(img, p, color);
    }
}

fn draw_dot(img: &mut RgbImage, p: Point2i, color: Rgb<u8>) {
    for dy in -1..=1 {
        for dx in -1..=1 {
            put_pixel_checked(img, Point2i::new(p.x + dx, p.y + dy), color);
        }
    }
}

fn put_pixel_checked(img: &mut RgbImage, p: Point2i, color: Rgb<u8>) {
    if p.x < 0 || p.y < 0 {
        return;
    }
    let (ux, uy) = (p.x as u32, p.y as u32);
    if ux >= img.width() || uy >= img.height() {
        return;
    }
    img.put_pixel(ux, uy, color);
}

fn write_json(path: PathBuf, value: &impl Serialize) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value).context("serializing json")?;
    fs::write(&path, bytes).with_context(|| format!("writing json {}", path.display()))
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&data).with_context(|| format!("parsing json {}", path.display()))
}

fn ensure_file_exists(path: &Path, what: &str) -> Result<()> {
    if !path.exists() {
        bail!("{} file does not exist: {}", what, path.display());
    }
    if !path.is_file() {
        bail!("{} path is not a file: {}", what, path.display());
    }
    Ok(())
}

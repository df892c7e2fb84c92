use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use ziwei_base::{
    BellStarRule, Branch, Bureau, Chart, ChartConfig, ChartError, Gender, LunisolarBirth, Palace,
    Star, Stem, compute_chart_with_config, nayin, palace_stems, purple_star_branch,
    resolve_bureau, treasury_star_branch,
};

#[derive(Parser)]
#[command(name = "ziwei", about = "ZiWei Dou Shu natal chart CLI")]
struct Cli {
    /// Log pipeline stages to stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full natal chart from a lunisolar birth
    Chart {
        /// Year stem (甲 or jia)
        #[arg(long)]
        stem: Stem,
        /// Year branch (子 or zi)
        #[arg(long)]
        branch: Branch,
        /// Lunar month, 1-12
        #[arg(long)]
        month: u8,
        /// Lunar day, 1-30
        #[arg(long)]
        day: u8,
        /// Double-hour index, 0 (子) - 11 (亥)
        #[arg(long)]
        hour: u8,
        /// male or female
        #[arg(long)]
        gender: Gender,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Bell star starting rule
        #[arg(long, value_enum, default_value = "year-triad")]
        bell_rule: BellRuleArg,
    },
    /// Five-Elements bureau from year stem and Life Palace branch
    Bureau {
        /// Year stem
        #[arg(long)]
        stem: Stem,
        /// Life Palace branch
        #[arg(long)]
        life: Branch,
    },
    /// Purple and Treasury star branches
    Purple {
        /// Bureau number, 2-6
        #[arg(long)]
        bureau: u8,
        /// Lunar day, 1-30
        #[arg(long)]
        day: u8,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum BellRuleArg {
    YearTriad,
    XuYearOnly,
}

impl From<BellRuleArg> for BellStarRule {
    fn from(arg: BellRuleArg) -> Self {
        match arg {
            BellRuleArg::YearTriad => BellStarRule::YearTriad,
            BellRuleArg::XuYearOnly => BellStarRule::XuYearOnly,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// ---------------------------------------------------------------------------
// Text rendering
// ---------------------------------------------------------------------------

fn star_label(star: &Star) -> String {
    let mut label = star.name.to_string();
    let rating = star.brightness.name();
    if !rating.is_empty() {
        label.push_str(&format!("({rating})"));
    }
    if let Some(t) = star.birth_year_transform {
        label.push_str(t.name());
    }
    let hua = star.palace_hua_codes();
    if !hua.is_empty() {
        label.push('[');
        label.push_str(&hua.join(","));
        label.push(']');
    }
    label
}

fn palace_line(palace: &Palace) -> String {
    let mut flags = String::new();
    if palace.is_life_palace {
        flags.push('命');
    }
    if palace.is_body_palace {
        flags.push('身');
    }
    if palace.is_inbound_palace {
        flags.push('因');
    }
    let band = palace
        .decade_range
        .map(|r| format!("{:>3}-{:<3}", r.start_age, r.end_age))
        .unwrap_or_default();
    let stars: Vec<String> = palace.stars.iter().map(star_label).collect();
    format!(
        "{}{} {} {:<3} {} {}",
        palace.stem,
        palace.branch,
        palace.name,
        flags,
        band,
        stars.join(" ")
    )
}

fn print_chart(chart: &Chart) {
    println!("{}  {:?}", chart.birth, chart.birth.gender);
    println!(
        "{}  命主 {}  身主 {}  大限 {:?}",
        chart.bureau, chart.life_ruler_star, chart.body_ruler_star, chart.decade_direction
    );
    for loc in chart.transform_locations() {
        let at = match (loc.branch, loc.palace) {
            (Some(b), Some(p)) => format!("{b} {p}"),
            _ => "-".to_string(),
        };
        println!("  {}{} @ {}", loc.star, loc.transform, at);
    }
    println!();
    for palace in chart.decade_palaces() {
        println!("{}", palace_line(palace));
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Chart {
            stem,
            branch,
            month,
            day,
            hour,
            gender,
            json,
            bell_rule,
        } => {
            let birth = LunisolarBirth::new(stem, branch, month, day, hour, gender);
            let config = ChartConfig {
                bell_star_rule: bell_rule.into(),
            };
            debug!(?config, "computing chart");
            let chart = compute_chart_with_config(&birth, &config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&chart)?);
            } else {
                print_chart(&chart);
            }
        }

        Commands::Bureau { stem, life } => {
            let bureau = resolve_bureau(stem, life)?;
            let palace_stem = palace_stems(stem)[life.index() as usize];
            let sound = nayin(palace_stem, life).map(|(name, _)| name).unwrap_or("-");
            println!(
                "{} ({}, {})  命宫 {}{} {}",
                bureau.name(),
                bureau.number(),
                bureau.element(),
                palace_stem,
                life,
                sound
            );
        }

        Commands::Purple { bureau, day } => {
            let bureau = Bureau::from_number(bureau)
                .ok_or(ChartError::InvalidInput("bureau must be 2..=6"))?;
            let purple = purple_star_branch(bureau, day)?;
            println!("紫微 {}  天府 {}", purple, treasury_star_branch(purple));
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("{e}");
        let code = match e.downcast_ref::<ChartError>() {
            Some(err) if err.is_invalid_input() => 2,
            _ => 1,
        };
        std::process::exit(code);
    }
}

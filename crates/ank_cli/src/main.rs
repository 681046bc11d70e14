use std::fmt::Display;
use std::path::PathBuf;

use ank_config::{AnkConfig, OutputFormat};
use ank_core::{
    NameConfig, NumerologyProfile, ProfileInput, ReducedNumber, balance_number, chaldean_analysis,
    challenges, current_challenge, current_pinnacle, hidden_passions, karmic_path, life_path_number,
    letter_distribution, personal_day_number, personal_month_number, personal_year_number,
    pinnacles, reduce, universal_day_number, universal_month_number, universal_year_number,
};
use ank_grid::generate_lo_shu_grid;
use ank_match::{
    GroupMember, GroupType, RelationshipType, analyze_group, calculate_compatibility_with,
    compare_people, detailed_compatibility,
};
use ank_search::{
    LuckyConfig, Purpose, calculate_lucky_score, daily_prediction, find_lucky_dates, life_cycles,
    life_stage, lucky_dates_for_purpose, monthly_prediction, next_lucky_date, peak_years,
    weekly_prediction,
};
use chrono::{Datelike, Days, Local, NaiveDate};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Years scanned by `cycles --name`.
const PEAK_YEARS_AHEAD: u32 = 10;

#[derive(Parser)]
#[command(name = "ank", version, about = "Numerology calculator")]
struct Cli {
    /// Config file (default: $ANK_CONFIG, then ./ank.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Log calculator steps to stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reduce a positive integer, keeping 11, 22 and 33
    Reduce {
        n: i64,
    },
    /// Core numbers for a person
    Profile {
        /// Full name
        name: String,
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        birth: NaiveDate,
    },
    /// Name numbers and letter statistics
    Name {
        name: String,
    },
    /// Life path number
    LifePath {
        /// Birth date (YYYY-MM-DD)
        birth: NaiveDate,
    },
    /// Personal and universal cycles, life cycles and life stage
    Cycles {
        /// Birth date (YYYY-MM-DD)
        birth: NaiveDate,
        /// Reference date (default: today)
        #[arg(long)]
        on: Option<NaiveDate>,
        /// Full name; adds peak years for the next decade
        #[arg(long)]
        name: Option<String>,
    },
    /// Lo Shu grid for a birth date
    Loshu {
        birth: NaiveDate,
    },
    /// Compatibility of two people
    Compat {
        /// First person as "Full Name,YYYY-MM-DD"
        #[arg(value_parser = parse_person)]
        first: PersonArg,
        /// Second person as "Full Name,YYYY-MM-DD"
        #[arg(value_parser = parse_person)]
        second: PersonArg,
        /// Attach relationship-specific notes
        #[arg(long, value_enum)]
        relationship: Option<RelationshipArg>,
    },
    /// Pairwise comparison and harmony of a group
    Group {
        /// Members as "Full Name,YYYY-MM-DD" (at least two)
        #[arg(required = true, value_parser = parse_person)]
        people: Vec<PersonArg>,
        #[arg(long, value_enum, default_value = "general")]
        kind: GroupKindArg,
    },
    /// Lucky score of one date
    Lucky {
        name: String,
        #[arg(long)]
        birth: NaiveDate,
        /// Date to score (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Search for lucky dates
    LuckyDates {
        name: String,
        #[arg(long)]
        birth: NaiveDate,
        /// First date of the search (default: today)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Days to scan (default: lucky.search_days)
        #[arg(long)]
        days: Option<u32>,
        /// Scan the month of --from with a purpose threshold
        #[arg(long, value_enum, conflicts_with = "next")]
        purpose: Option<PurposeArg>,
        /// Only the earliest date scoring 40 or more
        #[arg(long)]
        next: bool,
    },
    /// Daily, weekly or monthly prediction
    Predict {
        #[arg(long)]
        birth: NaiveDate,
        /// Day, week start, or any day of the month (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long, value_enum, default_value = "day")]
        period: PeriodArg,
    },
    /// Pinnacles and challenges
    Pinnacles {
        birth: NaiveDate,
        /// Reference date for the current period (default: today)
        #[arg(long)]
        on: Option<NaiveDate>,
    },
    /// Karmic debts and lessons
    Karmic {
        name: String,
        #[arg(long)]
        birth: NaiveDate,
    },
    /// Chaldean name, birth and destiny numbers
    Chaldean {
        name: String,
        #[arg(long)]
        birth: NaiveDate,
    },
}

#[derive(Debug, Clone)]
struct PersonArg {
    name: String,
    birth: NaiveDate,
}

fn parse_person(s: &str) -> Result<PersonArg, String> {
    let (name, date) = s
        .rsplit_once(',')
        .ok_or_else(|| format!("expected \"Full Name,YYYY-MM-DD\", got {s}"))?;
    let birth = date
        .trim()
        .parse::<NaiveDate>()
        .map_err(|e| format!("invalid date '{}': {e}", date.trim()))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing name in {s}"));
    }
    Ok(PersonArg {
        name: name.to_string(),
        birth,
    })
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RelationshipArg {
    Romantic,
    Friendship,
    Professional,
    Family,
}

impl From<RelationshipArg> for RelationshipType {
    fn from(r: RelationshipArg) -> Self {
        match r {
            RelationshipArg::Romantic => Self::Romantic,
            RelationshipArg::Friendship => Self::Friendship,
            RelationshipArg::Professional => Self::Professional,
            RelationshipArg::Family => Self::Family,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum GroupKindArg {
    Family,
    Team,
    General,
}

impl From<GroupKindArg> for GroupType {
    fn from(k: GroupKindArg) -> Self {
        match k {
            GroupKindArg::Family => Self::Family,
            GroupKindArg::Team => Self::Team,
            GroupKindArg::General => Self::General,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PurposeArg {
    Business,
    Romance,
    Travel,
    Health,
    General,
}

impl From<PurposeArg> for Purpose {
    fn from(p: PurposeArg) -> Self {
        match p {
            PurposeArg::Business => Self::Business,
            PurposeArg::Romance => Self::Romance,
            PurposeArg::Travel => Self::Travel,
            PurposeArg::Health => Self::Health,
            PurposeArg::General => Self::General,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PeriodArg {
    Day,
    Week,
    Month,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ank=warn")),
        1 => EnvFilter::new("ank=debug"),
        _ => EnvFilter::new("ank=trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(e: impl Display) -> ! {
    eprintln!("error: {e}");
    std::process::exit(1);
}

fn or_exit<T, E: Display>(r: Result<T, E>) -> T {
    r.unwrap_or_else(|e| fail(e))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn input(name: &str, birth: NaiveDate) -> ProfileInput {
    or_exit(ProfileInput::new(name, birth))
}

/// Serialized enum code, e.g. `"veryGood"`.
fn code<T: Serialize>(v: &T) -> String {
    match serde_json::to_value(v) {
        Ok(serde_json::Value::String(s)) => s,
        Ok(other) => other.to_string(),
        Err(e) => fail(e),
    }
}

fn codes<T: Serialize>(vs: &[T]) -> String {
    vs.iter().map(code).collect::<Vec<_>>().join(", ")
}

fn list<T: Display>(vs: &[T]) -> String {
    vs.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ")
}

struct Output {
    json: bool,
}

impl Output {
    fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce(&T)) {
        if self.json {
            println!("{}", or_exit(serde_json::to_string_pretty(value)));
        } else {
            text(value);
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NameReport {
    destiny: ReducedNumber,
    soul_urge: ReducedNumber,
    personality: ReducedNumber,
    balance: u8,
    hidden_passions: Vec<u8>,
    distribution: ank_core::LetterDistribution,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CyclesReport {
    on: NaiveDate,
    personal_year: ReducedNumber,
    personal_month: ReducedNumber,
    personal_day: ReducedNumber,
    universal_year: ReducedNumber,
    universal_month: ReducedNumber,
    universal_day: ReducedNumber,
    life_cycles: Vec<ank_search::LifeCycle>,
    life_stage: ank_search::LifeStage,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    peak_years: Vec<ank_search::PeakYear>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PinnacleReport {
    pinnacles: [ank_core::Pinnacle; 4],
    challenges: [ank_core::Challenge; 4],
    current_pinnacle: ank_core::Pinnacle,
    current_challenge: ank_core::Challenge,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoShuReport {
    #[serde(flatten)]
    grid: ank_grid::LoShuGrid,
    remedy_details: Vec<&'static ank_grid::NumberRemedy>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GroupReport {
    analysis: ank_match::GroupAnalysis,
    #[serde(skip_serializing_if = "Option::is_none")]
    comparison: Option<ank_match::MultiPersonComparison>,
}

fn print_profile(p: &NumerologyProfile) {
    println!("Life path:   {}", p.life_path);
    println!("Destiny:     {}", p.destiny);
    println!("Soul urge:   {}", p.soul_urge);
    println!("Personality: {}", p.personality);
    println!("Birthday:    {}", p.birthday);
    println!("Maturity:    {}", p.maturity);
}

fn print_lucky_date(l: &ank_search::LuckyDate) {
    println!(
        "{}  score {:>3}  day {:>2}  [{}]",
        l.date,
        l.score.score,
        l.score.personal_day,
        codes(&l.score.reasons)
    );
}

fn print_daily(p: &ank_search::DailyPrediction) {
    println!(
        "{}  personal day {:>2} ({})  universal {:>2}  hours {}  color {}",
        p.date,
        p.personal_day,
        p.theme.code(),
        p.universal_day,
        list(&p.lucky_hours[..]),
        p.color
    );
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = or_exit(AnkConfig::load(cli.config.as_deref()));
    let names: NameConfig = config.name_config();
    let lucky: LuckyConfig = config.lucky_config();
    let out = Output {
        json: cli.json || config.output.format == OutputFormat::Json,
    };
    debug!(?names, ?lucky, json = out.json, "resolved config");

    match cli.command {
        Commands::Reduce { n } => {
            let r = or_exit(reduce(n));
            out.emit(&r, |r| {
                let master = if r.is_master() { " (master)" } else { "" };
                println!("{r}{master}");
            });
        }

        Commands::Profile { name, birth } => {
            let p = or_exit(NumerologyProfile::compute_with(&input(&name, birth), &names));
            out.emit(&p, print_profile);
        }

        Commands::Name { name } => {
            let report = NameReport {
                destiny: or_exit(ank_core::destiny_number_with(&name, &names)),
                soul_urge: or_exit(ank_core::soul_urge_number_with(&name, &names)),
                personality: or_exit(ank_core::personality_number_with(&name, &names)),
                balance: or_exit(balance_number(&name)),
                hidden_passions: or_exit(hidden_passions(&name)),
                distribution: or_exit(letter_distribution(&name)),
            };
            out.emit(&report, |r| {
                println!("Destiny:        {}", r.destiny);
                println!("Soul urge:      {}", r.soul_urge);
                println!("Personality:    {}", r.personality);
                println!("Balance:        {}", r.balance);
                println!("Hidden passion: {}", list(&r.hidden_passions));
                println!("Karmic lessons: {}", list(&r.distribution.missing));
                println!(
                    "Letters:        {} vowels, {} consonants",
                    r.distribution.vowels, r.distribution.consonants
                );
            });
        }

        Commands::LifePath { birth } => {
            let n = or_exit(life_path_number(birth));
            out.emit(&n, |n| println!("{n}"));
        }

        Commands::Cycles { birth, on, name } => {
            let on = on.unwrap_or_else(today);
            let peaks = match name {
                Some(name) => or_exit(peak_years(
                    &input(&name, birth),
                    &names,
                    on.year(),
                    PEAK_YEARS_AHEAD,
                )),
                None => Vec::new(),
            };
            let report = CyclesReport {
                on,
                personal_year: or_exit(personal_year_number(birth, on.year())),
                personal_month: or_exit(personal_month_number(birth, on.year(), on.month())),
                personal_day: or_exit(personal_day_number(birth, on)),
                universal_year: or_exit(universal_year_number(on.year())),
                universal_month: or_exit(universal_month_number(on.year(), on.month())),
                universal_day: or_exit(universal_day_number(on)),
                life_cycles: or_exit(life_cycles(birth, on)),
                life_stage: or_exit(life_stage(birth, on)),
                peak_years: peaks,
            };
            out.emit(&report, |r| {
                println!("On {}", r.on);
                println!(
                    "Personal:  year {}  month {}  day {}",
                    r.personal_year, r.personal_month, r.personal_day
                );
                println!(
                    "Universal: year {}  month {}  day {}",
                    r.universal_year, r.universal_month, r.universal_day
                );
                println!(
                    "Life stage {} ({}), age {}",
                    r.life_stage.stage,
                    code(&r.life_stage.name),
                    r.life_stage.age
                );
                for p in &r.peak_years {
                    println!(
                        "  peak {} personal year {} ({})",
                        p.year,
                        p.personal_year,
                        code(&p.kind)
                    );
                }
                for c in &r.life_cycles {
                    let marker = if c.current_year_in_cycle > 0 {
                        format!("  <- year {}", c.current_year_in_cycle)
                    } else {
                        String::new()
                    };
                    println!(
                        "  cycle {} {}-{} {}{marker}",
                        c.cycle_number,
                        c.start_year,
                        c.end_year,
                        c.theme.code()
                    );
                }
            });
        }

        Commands::Loshu { birth } => {
            let grid = or_exit(generate_lo_shu_grid(birth));
            let report = LoShuReport {
                remedy_details: grid.remedies(),
                grid,
            };
            out.emit(&report, |r| {
                let g = &r.grid;
                for (row, layout) in g.grid.iter().zip(ank_grid::LO_SHU_LAYOUT.iter()) {
                    let cells: Vec<String> = row
                        .iter()
                        .zip(layout.iter())
                        .map(|(&count, &digit)| {
                            if count == 0 {
                                "  -  ".to_string()
                            } else {
                                format!("{:^5}", digit.to_string().repeat(count as usize))
                            }
                        })
                        .collect();
                    println!("|{}|", cells.join("|"));
                }
                println!("Missing:  {}", list(&g.missing_numbers));
                println!("Element:  {}", g.dominant_element.name());
                for p in &g.planes {
                    println!("  {:<10} {:>2} {}", p.plane.name(), p.total, p.strength.name());
                }
                for a in &g.arrows {
                    println!("  {} ({})", a.kind.meaning(), list(&a.numbers[..]));
                }
                if !r.remedy_details.is_empty() {
                    println!("Remedies:");
                }
                for m in &r.remedy_details {
                    println!(
                        "  {}  {} {}  {:<10} {}",
                        m.number,
                        m.colors[0],
                        m.colors[1],
                        m.direction.name(),
                        m.favorable_day
                    );
                }
            });
        }

        Commands::Compat {
            first,
            second,
            relationship,
        } => {
            let a = input(&first.name, first.birth);
            let b = input(&second.name, second.birth);
            match relationship {
                Some(r) => {
                    let d = or_exit(detailed_compatibility(&a, &b, r.into()));
                    out.emit(&d, |d| {
                        println!(
                            "Overall {} ({})  {} {}",
                            d.base.overall_score,
                            d.base.level.code(),
                            d.relationship_type.name(),
                            d.relationship_score
                        );
                        println!("Strengths:       {}", codes(&d.strengths));
                        println!("Challenges:      {}", codes(&d.challenges));
                        println!("Recommendations: {}", codes(&d.recommendations));
                    });
                }
                None => {
                    let r = or_exit(calculate_compatibility_with(&a, &b, &names));
                    out.emit(&r, |r| {
                        println!("Overall {} ({})", r.overall_score, r.level.code());
                        for (label, c) in [
                            ("life path", Some(&r.life_path_compatibility)),
                            ("destiny", Some(&r.destiny_compatibility)),
                            ("soul urge", Some(&r.soul_urge_compatibility)),
                            ("personality", r.personality_compatibility.as_ref()),
                        ] {
                            match c {
                                Some(c) => println!(
                                    "  {label:<12} {} & {} -> {}",
                                    c.person1, c.person2, c.score
                                ),
                                None => println!("  {label:<12} n/a (no consonants)"),
                            }
                        }
                    });
                }
            }
        }

        Commands::Group { people, kind } => {
            let members: Vec<GroupMember> = people
                .iter()
                .map(|p| GroupMember::new(p.name.clone(), input(&p.name, p.birth)))
                .collect();
            let report = GroupReport {
                analysis: or_exit(analyze_group(&members, kind.into())),
                comparison: if members.len() >= ank_match::group::MIN_COMPARISON_SIZE {
                    Some(or_exit(compare_people(&members)))
                } else {
                    None
                },
            };
            out.emit(&report, |r| {
                let a = &r.analysis;
                println!("Harmony {}  energy {}", a.group_harmony, a.group_energy.code());
                println!(
                    "Dominant life paths {}  destinies {}",
                    list(&a.dominant_numbers.life_path),
                    list(&a.dominant_numbers.destiny)
                );
                println!("Strengths:       {}", codes(&a.strengths));
                println!("Challenges:      {}", codes(&a.challenges));
                println!("Recommendations: {}", codes(&a.recommendations));
                if let Some(c) = &r.comparison {
                    println!("Average pair score {}", c.average_compatibility);
                    for p in &c.pair_compatibilities {
                        println!(
                            "  {} & {}: {}",
                            p.person1_id, p.person2_id, p.compatibility.overall_score
                        );
                    }
                }
            });
        }

        Commands::Lucky { name, birth, date } => {
            let date = date.unwrap_or_else(today);
            let life_path = or_exit(life_path_number(birth));
            let destiny = or_exit(ank_core::destiny_number_with(&name, &names));
            let personal_year = or_exit(personal_year_number(birth, date.year()));
            let s = or_exit(calculate_lucky_score(date, life_path, destiny, personal_year));
            out.emit(&s, |s| {
                println!("{date}: score {}", s.score);
                println!("Reasons: {}", codes(&s.reasons));
            });
        }

        Commands::LuckyDates {
            name,
            birth,
            from,
            days,
            purpose,
            next,
        } => {
            let profile = input(&name, birth);
            let from = from.unwrap_or_else(today);
            let days = days.unwrap_or(lucky.search_days);
            if next {
                let found = or_exit(next_lucky_date(&profile, from, days, &lucky));
                out.emit(&found, |found| match found {
                    Some(l) => print_lucky_date(l),
                    None => println!("No date scoring 40 or more in the next {days} days"),
                });
                return;
            }
            let found = match purpose {
                Some(p) => or_exit(lucky_dates_for_purpose(
                    &profile,
                    p.into(),
                    from.year(),
                    from.month(),
                    &lucky,
                )),
                None => {
                    let end = from
                        .checked_add_days(Days::new(u64::from(days)))
                        .unwrap_or_else(|| fail(format!("date overflow after {from}")));
                    or_exit(find_lucky_dates(&profile, from, end, &lucky))
                }
            };
            out.emit(&found, |f| {
                println!("Life path {}  destiny {}", f.life_path, f.destiny);
                println!("Best:");
                for l in &f.best {
                    print_lucky_date(l);
                }
                println!("{} dates above the threshold", f.dates.len());
            });
        }

        Commands::Predict {
            birth,
            date,
            period,
        } => {
            let date = date.unwrap_or_else(today);
            match period {
                PeriodArg::Day => {
                    let p = or_exit(daily_prediction(birth, date));
                    out.emit(&p, print_daily);
                }
                PeriodArg::Week => {
                    let w = or_exit(weekly_prediction(birth, date));
                    out.emit(&w, |w| {
                        println!(
                            "Week {} of the month, personal month {}, theme {}",
                            w.week_of_month,
                            w.personal_month,
                            w.theme.code()
                        );
                        w.days.iter().for_each(print_daily);
                    });
                }
                PeriodArg::Month => {
                    let m = or_exit(monthly_prediction(birth, date.year(), date.month()));
                    out.emit(&m, |m| {
                        println!(
                            "{}-{:02}: personal month {} ({})",
                            m.year,
                            m.month,
                            m.personal_month,
                            m.theme.code()
                        );
                        println!("Key days:");
                        m.key_days.iter().for_each(print_daily);
                    });
                }
            }
        }

        Commands::Pinnacles { birth, on } => {
            let on = on.unwrap_or_else(today);
            let report = PinnacleReport {
                pinnacles: or_exit(pinnacles(birth)),
                challenges: or_exit(challenges(birth)),
                current_pinnacle: or_exit(current_pinnacle(birth, on)),
                current_challenge: or_exit(current_challenge(birth, on)),
            };
            out.emit(&report, |r| {
                for (p, c) in r.pinnacles.iter().zip(r.challenges.iter()) {
                    let marker = if p.period == r.current_pinnacle.period {
                        "  <- now"
                    } else {
                        ""
                    };
                    println!(
                        "{}. ages {:>2}-{:<2}  pinnacle {:>2}  challenge {}{marker}",
                        p.period, p.start_age, p.end_age, p.number, c.number
                    );
                }
            });
        }

        Commands::Karmic { name, birth } => {
            let k = or_exit(karmic_path(birth, &name));
            out.emit(&k, |k| {
                if k.debts.is_empty() {
                    println!("No karmic debts");
                }
                for d in &k.debts {
                    println!("Debt {} from {}", d.number, code(&d.source));
                }
                println!("Lessons: {}", list(&k.lessons));
                println!("Path number: {}", k.path_number);
            });
        }

        Commands::Chaldean { name, birth } => {
            let c = or_exit(chaldean_analysis(&name, birth));
            out.emit(&c, |c| {
                for (label, n) in [
                    ("Name", &c.name_number),
                    ("Birth", &c.birth_number),
                    ("Destiny", &c.destiny_number),
                ] {
                    let nature = n.nature().map(|x| code(&x)).unwrap_or_default();
                    println!("{label:<8} {}/{} {nature}", n.compound, n.single);
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn person_argument() {
        let p = parse_person("Maria Elena Popescu, 1990-11-15").unwrap();
        assert_eq!(p.name, "Maria Elena Popescu");
        assert_eq!(p.birth, NaiveDate::from_ymd_opt(1990, 11, 15).unwrap());
        assert!(parse_person("Maria 1990-11-15").is_err());
        assert!(parse_person(",1990-11-15").is_err());
        assert!(parse_person("Maria,1990-13-01").is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["ank", "life-path", "1990-11-15", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::LifePath { .. }));
    }

    #[test]
    fn loshu_json_lists_remedies() {
        let grid = generate_lo_shu_grid(NaiveDate::from_ymd_opt(1990, 11, 15).unwrap()).unwrap();
        let report = LoShuReport {
            remedy_details: grid.remedies(),
            grid,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["missingNumbers"], serde_json::json!([2, 3, 4, 6, 7, 8]));
        assert_eq!(json["remedyDetails"].as_array().unwrap().len(), 6);
        assert_eq!(json["remedyDetails"][0]["direction"], "northWest");
        assert_eq!(json["remedyDetails"][5]["favorableDay"], "Sat");
    }

    #[test]
    fn enum_codes_for_text_output() {
        assert_eq!(code(&ank_match::CompatibilityLevel::VeryGood), "veryGood");
        assert_eq!(codes(&[ank_search::LuckyReason::MirrorDate]), "mirrorDate");
    }
}

//! The drill app. For an overview of how problems are generated, see
//! [libdrill's documentation](libdrill).

#![deny(warnings)]
#![deny(missing_docs)]

#[cfg(test)]
mod test;

use libdrill::{Course, EmitFormat, Session};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::Write;
use termcolor::{Buffer, Color, ColorSpec, WriteColor};
use tracing::debug;

/// Options to run drill with.
pub struct Opts {
    /// Course to draw problems from: a category tag or `random`.
    pub course: String,
    /// How problems should be emitted.
    pub emit_format: String,
    /// Number of problems to draw.
    pub count: usize,
    /// When is [Some](Option::Some) seed, problems are drawn reproducibly from that seed.
    pub seed: Option<u64>,
    /// When true, the answer sheet is emitted after the questions.
    pub answers: bool,
    /// When true, the session is emitted as JSON.
    pub json: bool,
    /// When true, the available courses are listed instead of drawing problems.
    pub list: bool,
    /// When true, debug logs are written to stderr.
    pub verbose: bool,
    /// When true, drill emit will be colored.
    pub color: bool,
}

/// Parses [Opts](self::Opts) from the command line or given a parser that acts on the clap
/// [App](clap::App).
pub fn get_opts<P>(parser: P, color: bool) -> Result<Opts, clap::Error>
where
    P: for<'a> FnOnce(clap::App<'a, '_>) -> Result<clap::ArgMatches<'a>, clap::Error>,
{
    let matches = clap::App::new(clap::crate_name!())
        .version(clap::crate_version!())
        .about(clap::crate_description!())
        .arg(
            clap::Arg::with_name("course")
                .help("Course to draw problems from: a category, or \"random\". See --list.")
                .default_value("random"),
        )
        .arg(
            clap::Arg::with_name("output-form")
                .short("-o")
                .long("--output-form")
                .next_line_help(true)
                .help(
                    "Drill emit format. Possible values:\n\
                    \tlatex:  LaTeX display math for a MathJax renderer, like \"$$ x^2-\\frac{1}{2} $$\".\n\
                    \tpretty: Human-readable text, like \"x²-1/2\".\n\
                    ",
                )
                .hide_possible_values(true)
                .default_value("latex")
                .takes_value(true)
                .possible_values(&["latex", "pretty"]),
        )
        .arg(
            clap::Arg::with_name("count")
                .short("-n")
                .long("--count")
                .help("Number of problems to draw.")
                .default_value("10")
                .takes_value(true)
                .validator(|n| {
                    n.parse::<usize>()
                        .map(|_| ())
                        .map_err(|_| format!("{} is not a number of problems", n))
                }),
        )
        .arg(
            clap::Arg::with_name("seed")
                .long("--seed")
                .help("Seed for a reproducible set of problems.")
                .takes_value(true)
                .validator(|n| {
                    n.parse::<u64>()
                        .map(|_| ())
                        .map_err(|_| format!("{} is not a 64-bit unsigned seed", n))
                }),
        )
        .arg(
            clap::Arg::with_name("answers")
                .long("--answers")
                .help("Emit the answer sheet after the questions."),
        )
        .arg(
            clap::Arg::with_name("json")
                .long("--json")
                .help("Emit the session as JSON."),
        )
        .arg(
            clap::Arg::with_name("list")
                .long("--list")
                .help("List the available courses."),
        )
        .arg(
            clap::Arg::with_name("verbose")
                .short("-v")
                .long("--verbose")
                .help("Write debug logs to stderr."),
        );
    let matches = parser(matches)?;

    // Both values have passed their validators.
    let count = matches.value_of("count").and_then(|n| n.parse().ok());
    let seed = matches.value_of("seed").and_then(|n| n.parse().ok());

    Ok(Opts {
        course: matches.value_of("course").unwrap_or("random").into(),
        emit_format: matches.value_of("output-form").unwrap_or("latex").into(),
        count: count.unwrap_or(Session::DEFAULT_SIZE),
        seed,
        answers: matches.is_present("answers"),
        json: matches.is_present("json"),
        list: matches.is_present("list"),
        verbose: matches.is_present("verbose"),
        color,
    })
}

/// Output of a drill execution.
#[derive(Default)]
pub struct DrillResult {
    /// Exit code
    pub code: i32,
    /// Emit for stdout
    pub stdout: String,
    /// Emit for stderr
    pub stderr: String,
}

impl DrillResult {
    fn ok(stdout: String) -> Self {
        Self {
            code: 0,
            stdout,
            stderr: String::new(),
        }
    }

    fn failed(stderr: String) -> Self {
        Self {
            code: 1,
            stdout: String::new(),
            stderr,
        }
    }
}

/// Runs drill end-to-end.
pub fn run_drill(opts: Opts) -> DrillResult {
    if opts.list {
        return DrillResult::ok(list_courses());
    }

    let course: Course = match opts.course.parse() {
        Ok(course) => course,
        Err(e) => return DrillResult::failed(format!("error: {}", e)),
    };
    let form: EmitFormat = match opts.emit_format.parse() {
        Ok(form) => form,
        Err(e) => return DrillResult::failed(format!("error: {}", e)),
    };

    let mut rng = match opts.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    debug!(course = course.tag(), count = opts.count, seed = ?opts.seed, "starting session");
    let session = Session::start(course, form, opts.count, &mut rng);

    if opts.json {
        return match serde_json::to_string_pretty(&session) {
            Ok(json) => DrillResult::ok(json),
            Err(e) => DrillResult::failed(format!("error: {}", e)),
        };
    }

    match emit_sheets(&session, opts.answers, opts.color) {
        Ok(stdout) => DrillResult::ok(stdout),
        Err(e) => DrillResult::failed(format!("error: {}", e)),
    }
}

fn list_courses() -> String {
    let width = Course::all().map(|c| c.tag().len()).max().unwrap_or(0);
    Course::all()
        .map(|course| format!("{:width$}  {}", course.tag(), course.display_name(), width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Emits the question sheet, and the answer sheet if asked for, each under a heading.
fn emit_sheets(session: &Session, answers: bool, color: bool) -> std::io::Result<String> {
    let mut out = if color {
        Buffer::ansi()
    } else {
        Buffer::no_color()
    };

    heading(&mut out, session.course().display_name())?;
    write!(out, "{}", session.question_sheet())?;
    if answers {
        writeln!(out)?;
        heading(&mut out, "Answers")?;
        write!(out, "{}", session.answer_sheet())?;
    }

    Ok(String::from_utf8_lossy(out.as_slice()).trim_end().to_owned())
}

fn heading(out: &mut Buffer, title: &str) -> std::io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
    write!(out, "{}", title)?;
    out.reset()?;
    writeln!(out, "\n")
}

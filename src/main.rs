// Algotty: time-travel algorithm pattern simulator with step-trace visualization

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use algotty::bench;
use algotty::catalog::{pattern_info, PatternKey};
use algotty::playback;
use algotty::ui::App;

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} <pattern> [input args...]", program_name);
    eprintln!("       {} bench", program_name);
    eprintln!();
    eprintln!("Patterns:");
    for &key in PatternKey::all() {
        let info = pattern_info(key);
        eprintln!("  {:<18} {}", key.as_str(), info.summary);
    }
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} hash-duplicate 2,7,11,7,3,11", program_name);
    eprintln!("  {} dijkstra 0-1-4,0-2-1,2-1-2,1-3-1,3-4-3 0", program_name);
    eprintln!("  {} sliding-window        # run the built-in demo input", program_name);
}

fn run_bench() {
    eprintln!("Timing untraced fast variants (median of repeats)...");
    let reports = bench::run_all();
    println!("{:<18} {:>10} {:>12}  space", "pattern", "size", "median");
    for report in &reports {
        for sample in &report.samples {
            println!(
                "{:<18} {:>10} {:>10.1?}  {}",
                report.pattern.as_str(),
                sample.size,
                sample.median,
                report.space.label()
            );
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("algotty");

    if args.len() < 2 {
        eprintln!("Error: No pattern given");
        eprintln!();
        print_usage(program_name);
        std::process::exit(1);
    }

    if args[1] == "bench" {
        run_bench();
        return Ok(());
    }

    let key = match PatternKey::parse(&args[1]) {
        Some(key) => key,
        None => {
            eprintln!("Error: Unknown pattern '{}'", args[1]);
            eprintln!();
            print_usage(program_name);
            std::process::exit(1);
        }
    };

    // Build the whole trace up front; the TUI only navigates it.
    eprintln!("Simulating {}...", key.as_str());
    let trace = playback::trace_with_args(key, &args[2..]);
    eprintln!("Recorded {} steps.", trace.len());
    if trace.len() <= 1 {
        eprintln!("Input note: args for {}: {}", key.as_str(), playback::usage(key));
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(trace);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

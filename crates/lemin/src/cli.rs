use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use antfarm::routing::serialize::{plan_dump, schedule_to_string};
use antfarm::{Farm, Plan};

#[derive(Parser)]
#[command(name = "lemin")]
#[command(author, version, about)]
#[command(long_about = "Route a colony of ants through a farm in the fewest turns.\n\n\
    The farm file lists the ant count, the rooms (with ##start and ##end\n\
    markers) and the tunnels. The movement log goes to stdout, one line per\n\
    turn.\n\n\
    Examples:\n  \
    lemin farm.txt            Print the movement log\n  \
    lemin farm.txt --verbose  Also print routing diagnostics to stderr\n  \
    lemin farm.txt --json     Print the full plan as JSON for visualisers")]
pub struct Cli {
    /// Farm description file
    pub file: PathBuf,

    /// Print routing diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit the routing plan as JSON instead of the movement log
    #[arg(long)]
    pub json: bool,

    /// Disable colored diagnostics
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        if self.no_color {
            colored::control::set_override(false);
        }
        if !self.file.exists() {
            anyhow::bail!("file not found: {}", self.file.display());
        }

        let text = fs::read_to_string(&self.file)?;
        let farm = antfarm::parse(&text)?;
        if self.verbose {
            eprintln!(
                "{} {} ants, {} rooms, {} tunnels, source '{}', sink '{}'",
                "farm:".bold(),
                farm.ant_count(),
                farm.room_count(),
                farm.tunnel_count(),
                farm.name_of(farm.source()),
                farm.name_of(farm.sink()),
            );
        }

        let plan = antfarm::plan(&farm)?;
        if self.verbose {
            print_diagnostics(&farm, &plan);
        }

        if self.json {
            let dump = plan_dump(&farm, &plan);
            println!("{}", serde_json::to_string_pretty(&dump)?);
        } else {
            println!("{}", schedule_to_string(&farm, &plan.schedule));
        }
        Ok(())
    }
}

fn print_diagnostics(farm: &Farm, plan: &Plan) {
    for (index, (path, load)) in plan.paths.iter().zip(&plan.assignment.load).enumerate() {
        let rooms: Vec<&str> = path.rooms.iter().map(|&id| farm.name_of(id)).collect();
        eprintln!(
            "{} {}: {} ({} steps, {} ants)",
            "lane".bold(),
            index + 1,
            rooms.join(" -> ").cyan(),
            path.steps(),
            load,
        );
    }
    eprintln!(
        "{} {} turns",
        "schedule:".bold(),
        plan.schedule.turn_count().to_string().green()
    );
}

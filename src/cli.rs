//! Non-interactive subcommands.
//!
//! Every subcommand writes to a caller-supplied [`Write`] so the output can be
//! captured in tests; `main` passes a locked stdout.

use astrolex_core::{
    chart::{self, BirthData},
    config::Config,
    index::TermIndex,
    search::{cross_link, random_related, search},
    Glossary, GlossaryEntry, MatchType,
};
use clap::Subcommand;
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Rank entries against a query.
    Search {
        query: String,
        /// Print a JSON array instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Show one entry in full.
    Show {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// List categories with their entry counts.
    Categories,
    /// List the entries in one category.
    Category { id: String },
    /// Rewrite text so known terms link to their entries.
    Link { text: String },
    /// Complete a term prefix.
    Complete { prefix: String },
    /// Pick random entries from the same category as ID.
    Related {
        id: String,
        /// Defaults to `search.related_count` from the config file.
        #[arg(long)]
        count: Option<usize>,
        /// Seed for a reproducible pick.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Validate birth data and print a sample chart.
    Chart {
        #[arg(long, default_value = "")]
        name: String,
        /// Birth date, usually YYYY-MM-DD.
        #[arg(long, default_value = "")]
        date: String,
        #[arg(long, default_value = "")]
        time: String,
        /// "city, state, country"
        #[arg(long, default_value = "")]
        place: String,
        #[arg(long, default_value = "")]
        timezone: String,
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Serialize)]
struct SearchHit<'a> {
    id: &'a str,
    term: &'a str,
    relevance: u8,
    match_type: MatchType,
}

#[derive(Serialize)]
struct ShowOutput<'a> {
    #[serde(flatten)]
    entry: &'a GlossaryEntry,
    related_entries: Vec<&'a str>,
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Run `command` against the built-in glossary.
pub fn execute<W: Write>(command: &Command, config: &Config, out: &mut W) -> anyhow::Result<()> {
    execute_with(&Glossary::builtin(), command, config, out)
}

/// Run `command` against an arbitrary glossary.
pub fn execute_with<W: Write>(
    glossary: &Glossary<'_>,
    command: &Command,
    config: &Config,
    out: &mut W,
) -> anyhow::Result<()> {
    tracing::debug!(?command, "cli command");
    match command {
        Command::Search { query, json } => {
            let results = search(glossary.entries(), query);
            if *json {
                let hits: Vec<SearchHit> = results
                    .iter()
                    .map(|r| SearchHit {
                        id: r.entry.id,
                        term: r.entry.term,
                        relevance: r.relevance,
                        match_type: r.match_type,
                    })
                    .collect();
                serde_json::to_writer_pretty(&mut *out, &hits)?;
                writeln!(out)?;
            } else if results.is_empty() {
                writeln!(out, "no matches for '{}'", query.trim())?;
            } else {
                for r in &results {
                    writeln!(
                        out,
                        "{:>3}  {:<10}  {:<12}  {}",
                        r.relevance,
                        r.match_type.to_string(),
                        r.entry.id,
                        r.entry.term
                    )?;
                }
            }
        }

        Command::Show { id, json } => {
            let Some(entry) = glossary.entry_by_id(id) else {
                writeln!(out, "no entry with id '{id}'")?;
                return Ok(());
            };
            let related = glossary.related_entries(id);
            if *json {
                let output = ShowOutput {
                    entry,
                    related_entries: related.iter().map(|e| e.id).collect(),
                };
                serde_json::to_writer_pretty(&mut *out, &output)?;
                writeln!(out)?;
            } else {
                write_entry(out, glossary, entry, &related)?;
            }
        }

        Command::Categories => {
            for (category, count) in glossary.category_counts() {
                writeln!(out, "{:<12}  {:<14}  {}", category.id, category.name, count)?;
            }
        }

        Command::Category { id } => {
            if glossary.category_by_id(id).is_none() {
                writeln!(out, "no category with id '{id}'")?;
                return Ok(());
            }
            for entry in glossary.entries_by_category(id) {
                writeln!(out, "{:<12}  {}", entry.id, entry.term)?;
            }
        }

        Command::Link { text } => {
            writeln!(out, "{}", cross_link(text, glossary.entries(), &config.links))?;
        }

        Command::Complete { prefix } => {
            let index = TermIndex::build(glossary.entries())?;
            for entry in index.complete(prefix) {
                writeln!(out, "{}", entry.term)?;
            }
        }

        Command::Related { id, count, seed } => {
            let Some(entry) = glossary.entry_by_id(id) else {
                writeln!(out, "no entry with id '{id}'")?;
                return Ok(());
            };
            let count = count.unwrap_or(config.search.related_count);
            let mut rng = rng_from(*seed);
            for other in random_related(glossary.entries(), entry, count, &mut rng) {
                writeln!(out, "{:<12}  {}", other.id, other.term)?;
            }
        }

        Command::Chart { name, date, time, place, timezone, seed } => {
            let data = BirthData {
                name: name.clone(),
                birth_date: date.clone(),
                birth_time: time.clone(),
                birth_place: place.clone(),
                timezone: timezone.clone(),
            };
            let validation = chart::validate_birth_data(&data);
            if !validation.is_valid {
                for error in &validation.errors {
                    writeln!(out, "{error}")?;
                }
                return Ok(());
            }
            let mut rng = rng_from(*seed);
            let chart = chart::generate_sample_chart(&data, &mut rng);
            write_chart(out, &chart)?;
        }
    }
    Ok(())
}

fn write_entry<W: Write>(
    out: &mut W,
    glossary: &Glossary<'_>,
    entry: &GlossaryEntry,
    related: &[&GlossaryEntry],
) -> anyhow::Result<()> {
    let category = glossary
        .category_by_id(entry.category)
        .map_or(entry.category, |c| c.name);
    writeln!(out, "{} ({category})", entry.term)?;
    writeln!(out)?;
    writeln!(out, "{}", entry.definition)?;
    if let Some(etymology) = entry.etymology {
        writeln!(out)?;
        writeln!(out, "Etymology: {etymology}")?;
    }
    if !entry.examples.is_empty() {
        writeln!(out)?;
        writeln!(out, "Examples:")?;
        for example in entry.examples {
            writeln!(out, "  - {example}")?;
        }
    }
    writeln!(out)?;
    writeln!(out, "Tags: {}", entry.tags.join(", "))?;
    if related.is_empty() {
        writeln!(out, "Related: none")?;
    } else {
        let terms: Vec<&str> = related.iter().map(|e| e.term).collect();
        writeln!(out, "Related: {}", terms.join(", "))?;
    }
    Ok(())
}

fn write_chart<W: Write>(out: &mut W, chart: &chart::ChartData) -> anyhow::Result<()> {
    let place = &chart.birth_place;
    let mut parts = vec![place.city.as_str()];
    if let Some(state) = place.state.as_deref() {
        parts.push(state);
    }
    parts.push(place.country.as_str());
    let parts: Vec<&str> = parts.into_iter().filter(|p| !p.is_empty()).collect();

    writeln!(out, "{}", chart.id)?;
    writeln!(out, "Name:  {}", chart.name)?;
    let born = chart
        .birth_day
        .map_or_else(|| chart.birth_date.clone(), |day| day.to_string());
    writeln!(out, "Born:  {born} {} ({})", chart.birth_time, place.timezone)?;
    writeln!(
        out,
        "Place: {} ({:.4}, {:.4})",
        parts.join(", "),
        place.latitude,
        place.longitude
    )?;

    writeln!(out)?;
    writeln!(out, "Planets")?;
    for p in &chart.planets {
        writeln!(
            out,
            "  {:<11}  {:<11}  {:>10}  house {:>2}{}",
            chart::format_planet_name(p.planet),
            p.sign,
            chart::degrees_to_dms(p.degree),
            p.house,
            if p.is_retrograde { "  R" } else { "" }
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Houses")?;
    for h in &chart.houses {
        writeln!(
            out,
            "  {:>2}  {:<11}  {:>10}",
            h.house,
            h.sign,
            chart::degrees_to_dms(h.degree)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Aspects")?;
    for a in &chart.aspects {
        writeln!(
            out,
            "  {} {} {}  orb {:.1}{}",
            a.planet1,
            a.kind,
            a.planet2,
            a.orb,
            if a.is_exact { "  exact" } else { "" }
        )?;
    }
    Ok(())
}

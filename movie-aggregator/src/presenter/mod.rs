//! Human-readable rendering of aggregation results.
//!
//! Produces the bounded display: 1-based ranking, one block per actor with
//! name, total, and a bulleted film list, plus a trailing summary line when
//! the display is truncated. Rendering returns a `String` so the format can
//! be tested; thin print wrappers write it to stdout.

use std::fmt::Write;

use movie_aggregator_shared::{ActorMovieSearch, RankedList};

/// Width of the header rule.
const RULE_WIDTH: usize = 80;

/// Render the ranked filmographies, bounded to `limit` entries.
///
/// A `limit` of `None` renders every entry. An empty list is a valid result
/// and renders a distinct "no results" message; it is not an error (a failed
/// upstream query is signaled by the collaborator, not here).
///
/// # Arguments
///
/// * `ranking` - The ranked filmographies
/// * `limit` - Maximum number of entries to render
/// * `index` - Name of the queried index, shown in the header
pub fn render_filmographies(ranking: &RankedList, limit: Option<usize>, index: &str) -> String {
    if ranking.is_empty() {
        return "No results found.\n".to_string();
    }

    let mut out = String::new();
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(out, "\n{}", rule).ok();
    writeln!(out, "FILM AGGREGATION BY ACTOR - Index: {}", index).ok();
    writeln!(out, "{}\n", rule).ok();

    let shown = limit.unwrap_or(ranking.len());
    for (position, entry) in ranking.iter().take(shown).enumerate() {
        writeln!(out, "{}. Actor: {}", position + 1, entry.actor_name).ok();
        writeln!(out, "   Total films: {}", entry.total_films).ok();
        writeln!(out, "   Films:").ok();
        for film in &entry.films {
            writeln!(out, "      - {}", film).ok();
        }
        writeln!(out).ok();
    }

    let omitted = ranking.omitted_by(limit);
    if omitted > 0 {
        writeln!(out, "... and {} more actors", omitted).ok();
    }

    out
}

/// Render the per-country breakdown of an actor movie search.
pub fn render_actor_search(summary: &ActorMovieSearch) -> String {
    let mut out = String::new();

    writeln!(
        out,
        "Movies featuring {}: {}",
        summary.actor_name, summary.total_matches
    )
    .ok();

    if summary.countries.is_empty() {
        writeln!(out, "   (no country breakdown available)").ok();
        return out;
    }

    writeln!(out, "   By country:").ok();
    for country in &summary.countries {
        writeln!(out, "      - {}: {}", country.country, country.movie_count).ok();
    }

    out
}

/// Print the bounded filmography display to stdout.
pub fn print_filmographies(ranking: &RankedList, limit: Option<usize>, index: &str) {
    print!("{}", render_filmographies(ranking, limit, index));
}

/// Print an actor search summary to stdout.
pub fn print_actor_search(summary: &ActorMovieSearch) {
    print!("{}", render_actor_search(summary));
}

use std::io::{self, Write};

use cinescout_core::{AppViewModel, MovieRowView, SearchPane, TrendingPane, TrendingRowView};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};

pub fn draw(out: &mut impl Write, view: &AppViewModel) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    for line in build_lines(view) {
        queue!(out, Print(line), Print("\r\n"))?;
    }
    out.flush()
}

fn build_lines(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Find Movies You'll Enjoy Without the Hassle".to_string());
    lines.push(format!("Search: {}_", view.query));
    lines.push(String::new());

    lines.push("Trending Movies".to_string());
    match &view.trending {
        TrendingPane::Loading => lines.push("  loading...".to_string()),
        TrendingPane::Error(message) => lines.push(format!("  {message}")),
        TrendingPane::Ranked(rows) => {
            if rows.is_empty() {
                lines.push("  no searches recorded yet".to_string());
            }
            for (index, row) in rows.iter().enumerate() {
                lines.push(format_trending_row(index, row));
            }
        }
    }
    lines.push(String::new());

    lines.push("All Movies".to_string());
    match &view.search {
        SearchPane::Loading => lines.push("  loading...".to_string()),
        SearchPane::Error(message) => lines.push(format!("  {message}")),
        SearchPane::Gallery(rows) => {
            if rows.is_empty() {
                lines.push("  nothing to show".to_string());
            }
            for row in rows {
                lines.push(format_movie_row(row));
            }
        }
    }

    lines
}

fn format_trending_row(index: usize, row: &TrendingRowView) -> String {
    format!(
        "  {}. {} ({} searches)",
        index + 1,
        row.title,
        row.searches
    )
}

fn format_movie_row(row: &MovieRowView) -> String {
    let rating = if row.vote_average > 0.0 {
        format!("{:.1}", row.vote_average)
    } else {
        "N/A".to_string()
    };
    let year = row
        .release_date
        .as_deref()
        .and_then(release_year)
        .unwrap_or("N/A");
    let language = row.original_language.as_deref().unwrap_or("N/A");
    format!("  {} | {} | {} | {}", row.title, rating, year, language)
}

fn release_year(date: &str) -> Option<&str> {
    date.split('-').next().filter(|year| !year.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_row_shows_rating_year_and_language() {
        let row = MovieRowView {
            id: 268,
            title: "Batman".to_string(),
            poster_path: None,
            vote_average: 7.24,
            release_date: Some("1989-06-23".to_string()),
            original_language: Some("en".to_string()),
        };
        assert_eq!(format_movie_row(&row), "  Batman | 7.2 | 1989 | en");
    }

    #[test]
    fn missing_fields_fall_back_to_na() {
        let row = MovieRowView {
            id: 1,
            title: "Unknown".to_string(),
            poster_path: None,
            vote_average: 0.0,
            release_date: None,
            original_language: None,
        };
        assert_eq!(format_movie_row(&row), "  Unknown | N/A | N/A | N/A");
    }

    #[test]
    fn trending_rows_are_ranked_from_one() {
        let row = TrendingRowView {
            movie_id: 268,
            title: "Batman".to_string(),
            poster_url: None,
            searches: 41,
        };
        assert_eq!(format_trending_row(0, &row), "  1. Batman (41 searches)");
    }
}

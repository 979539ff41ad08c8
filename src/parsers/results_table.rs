use anyhow::{Context, Result};
use log::{debug, warn};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use super::text::normalize_ws;
use crate::config::ExtractionSettings;
use crate::domain::Record;

/// Extracts driver records from a season's results table
pub struct ResultsTableParser {
    row_selector: Selector,
    cell_selector: Selector,
    driver_code_selector: Selector,
    driver_code_suffix: Regex,
    name_column: usize,
    team_column: usize,
    points_column: usize,
    required_cells: usize,
}

impl ResultsTableParser {
    pub fn new(settings: &ExtractionSettings) -> Result<Self> {
        Ok(Self {
            row_selector: Self::compile_selector(settings.row_selector)?,
            cell_selector: Self::compile_selector("td")?,
            driver_code_selector: Self::compile_selector(settings.driver_code_selector)?,
            driver_code_suffix: Self::compile_regex()?,
            name_column: settings.name_column,
            team_column: settings.team_column,
            points_column: settings.points_column,
            required_cells: settings.required_cells(),
        })
    }

    /// Parse every driver row of the page, in table order
    pub fn parse_records(&self, markup: &str) -> Result<Vec<Record>> {
        let html = Html::parse_document(markup);
        let mut rows = html.select(&self.row_selector).peekable();

        if rows.peek().is_none() {
            anyhow::bail!("Results table not found");
        }

        let mut records = Vec::new();
        for (idx, row) in rows.enumerate() {
            let cells: Vec<ElementRef> = row.select(&self.cell_selector).collect();
            if cells.is_empty() {
                debug!("  Skipping row {} without data cells", idx);
                continue;
            }

            let record = self
                .parse_row(&cells)
                .with_context(|| format!("Malformed results row {}", idx))?;
            records.push(record);
        }

        Ok(records)
    }

    // --- Construction Helpers ---

    fn compile_selector(selector: &str) -> Result<Selector> {
        Selector::parse(selector)
            .map_err(|e| anyhow::anyhow!("Invalid selector {:?}: {}", selector, e))
    }

    fn compile_regex() -> Result<Regex> {
        Regex::new(r"\s+[A-Z]{3}$").context("Failed to compile driver code regex")
    }

    // --- Row Extraction ---

    fn parse_row(&self, cells: &[ElementRef]) -> Result<Record> {
        if cells.len() < self.required_cells {
            anyhow::bail!(
                "Expected at least {} cells, found {}",
                self.required_cells,
                cells.len()
            );
        }

        let name = self.extract_name(cells[self.name_column]);
        let team = cell_text(cells[self.team_column]);
        let points = parse_points(&cell_text(cells[self.points_column]), &name);

        Ok(Record::new(name, team, points))
    }

    /// Driver name without the trailing three-letter code.
    ///
    /// Prefers dropping the code element itself; falls back to stripping a
    /// trailing ` XXX` token when the cell has no such element.
    fn extract_name(&self, cell: ElementRef) -> String {
        let code_nodes: Vec<ElementRef> = cell.select(&self.driver_code_selector).collect();

        if !code_nodes.is_empty() {
            return text_excluding(cell, &code_nodes);
        }

        let text = cell_text(cell);
        self.driver_code_suffix.replace(&text, "").into_owned()
    }
}

fn cell_text(cell: ElementRef) -> String {
    normalize_ws(&cell.text().collect::<String>())
}

fn text_excluding(cell: ElementRef, excluded: &[ElementRef]) -> String {
    let mut text = String::new();
    for node in cell.descendants() {
        let Some(fragment) = node.value().as_text() else {
            continue;
        };
        if node
            .ancestors()
            .any(|ancestor| excluded.iter().any(|code| code.id() == ancestor.id()))
        {
            continue;
        }
        text.push_str(fragment);
    }
    normalize_ws(&text)
}

/// Points as a number; anything unreadable counts as zero
fn parse_points(text: &str, driver: &str) -> f64 {
    match text.parse::<f64>() {
        Ok(points) if points.is_finite() => points,
        _ => {
            warn!("Unreadable points {:?} for {}, using 0", text, driver);
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> ResultsTableParser {
        ResultsTableParser::new(&ExtractionSettings::default()).unwrap()
    }

    fn row(name_cell: &str, team: &str, points: &str) -> String {
        format!(
            r#"<tr>
                <td class="limiter"></td>
                <td class="dark">1</td>
                <td>{name_cell}</td>
                <td class="dark semi-bold uppercase">GBR</td>
                <td><a class="grey semi-bold uppercase ArchiveLink">{team}</a></td>
                <td class="dark bold">{points}</td>
                <td class="limiter"></td>
            </tr>"#
        )
    }

    fn page(rows: &[String]) -> String {
        format!(
            r#"<html><body>
                <div class="table-wrap">
                    <table class="resultsarchive-table">
                        <thead><tr><th>Pos</th><th>Driver</th><th>Car</th><th>PTS</th></tr></thead>
                        <tbody>{}</tbody>
                    </table>
                </div>
            </body></html>"#,
            rows.concat()
        )
    }

    fn name_spans(first: &str, last: &str, code: &str) -> String {
        format!(
            r#"<a href="/drivers">
                <span class="hide-for-tablet">{first}</span>
                <span class="hide-for-mobile">{last}</span>
                <span class="uppercase hide-for-desktop">{code}</span>
            </a>"#
        )
    }

    #[test]
    fn test_parse_records_skips_header_and_reads_fields() {
        let markup = page(&[
            row(&name_spans("Nino", "Farina", "FAR"), "Alfa Romeo", "30"),
            row(&name_spans("Juan Manuel", "Fangio", "FAN"), "Alfa\n   Romeo", "27"),
        ]);

        let records = parser().parse_records(&markup).unwrap();

        assert_eq!(
            records,
            vec![
                Record::new("Nino Farina", "Alfa Romeo", 30.0),
                Record::new("Juan Manuel Fangio", "Alfa Romeo", 27.0),
            ]
        );
    }

    #[test]
    fn test_name_without_code_element_strips_trailing_code() {
        let markup = page(&[
            row("Jim   Clark CLA", "Lotus Climax", "54"),
            row("Graham Hill", "BRM", "29"),
        ]);

        let records = parser().parse_records(&markup).unwrap();

        assert_eq!(records[0].name, "Jim Clark");
        assert_eq!(records[1].name, "Graham Hill");
    }

    #[test]
    fn test_decimal_and_unreadable_points() {
        let markup = page(&[
            row("Alberto Ascari ASC", "Ferrari", "34.5"),
            row("Luigi Villoresi VIL", "Ferrari", ""),
            row("Piero Taruffi TAR", "Ferrari", "n/a"),
        ]);

        let points: Vec<f64> = parser()
            .parse_records(&markup)
            .unwrap()
            .iter()
            .map(|r| r.points)
            .collect();

        assert_eq!(points, vec![34.5, 0.0, 0.0]);
    }

    #[test]
    fn test_missing_table_is_an_error() {
        let err = parser()
            .parse_records("<html><body><p>Not found</p></body></html>")
            .unwrap_err();
        assert!(err.to_string().contains("Results table not found"));
    }

    #[test]
    fn test_short_row_is_an_error() {
        let markup = page(&["<tr><td></td><td>1</td><td>Someone SOM</td></tr>".to_string()]);
        assert!(parser().parse_records(&markup).is_err());
    }

    #[test]
    fn test_header_only_table_has_no_records() {
        let records = parser().parse_records(&page(&[])).unwrap();
        assert!(records.is_empty());
    }
}

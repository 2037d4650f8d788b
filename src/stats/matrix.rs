//! Per-position 13x13 open-raise matrices and their renderings.
//!
//! Cell `(i, j)` indexes ranks 2..A as 0..12. The diagonal holds pairs,
//! `i > j` the offsuit hand of ranks i and j, `i < j` the suited hand of
//! ranks j and i.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::table::OpenRaiseTable;
use crate::history::card::RANK_CHARS;
use crate::history::hand_type::{HandType, GRID_SIZE};
use crate::history::Position;

/// Open-raise percentages for one position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionMatrix {
    pub position: Position,
    /// Hands recorded at this position
    pub hands: u64,
    /// Hands open-raised at this position
    pub open_raises: u64,
    /// Percentages (0-100), 0 for hand types never dealt
    pub cells: [[f64; GRID_SIZE]; GRID_SIZE],
}

impl PositionMatrix {
    /// Build the matrix for one position.
    pub fn new(table: &OpenRaiseTable, position: Position) -> Self {
        let mut cells = [[0.0; GRID_SIZE]; GRID_SIZE];
        for (row, line) in cells.iter_mut().enumerate() {
            for (col, cell) in line.iter_mut().enumerate() {
                *cell = table.get(position, HandType::from_grid(row, col)).percentage();
            }
        }

        let total = table.position_total(position);
        Self {
            position,
            hands: total.total,
            open_raises: total.open_raises,
            cells,
        }
    }

    /// Percentage for a hand type.
    pub fn value(&self, hand_type: HandType) -> f64 {
        let (row, col) = hand_type.grid_cell();
        self.cells[row][col]
    }

    /// Overall open-raise percentage at this position.
    pub fn overall(&self) -> f64 {
        if self.hands == 0 {
            0.0
        } else {
            self.open_raises as f64 / self.hands as f64 * 100.0
        }
    }

    /// Print as text grid
    pub fn print_grid(&self) {
        println!("\n=== {} ===", self.position);
        println!(
            "Hands: {} | Open raises: {} ({:.1}%)\n",
            self.hands,
            self.open_raises,
            self.overall()
        );

        // Header
        print!("     ");
        for rank in RANK_CHARS {
            print!("{:>5}", rank);
        }
        println!();

        for (row, line) in self.cells.iter().enumerate() {
            print!("{:>2}   ", RANK_CHARS[row]);
            for &pct in line {
                let rounded = pct.round() as u32;
                if rounded >= 75 {
                    print!("\x1b[41m{:>4}\x1b[0m ", rounded); // Red
                } else if rounded >= 40 {
                    print!("\x1b[43m{:>4}\x1b[0m ", rounded); // Yellow
                } else if pct > 0.0 {
                    print!("{:>4} ", rounded);
                } else {
                    print!("{:>4} ", "-");
                }
            }
            println!();
        }
    }
}

/// Matrices for every reported position that has hands, in seat order.
pub fn build_matrices(table: &OpenRaiseTable) -> Vec<PositionMatrix> {
    table
        .positions()
        .map(|position| PositionMatrix::new(table, position))
        .collect()
}

/// Complete report for all positions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixReport {
    pub metadata: ReportMetadata,
    pub matrices: Vec<PositionMatrix>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub username: String,
    pub files: usize,
    pub hands: u64,
    pub timestamp: String,
}

impl MatrixReport {
    pub fn new(username: &str, files: usize, table: &OpenRaiseTable) -> Self {
        Self {
            metadata: ReportMetadata {
                username: username.to_string(),
                files,
                hands: table.hands(),
                timestamp: std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .map(|d| d.as_secs().to_string())
                    .unwrap_or_default(),
            },
            matrices: build_matrices(table),
        }
    }

    pub fn matrix(&self, position: Position) -> Option<&PositionMatrix> {
        self.matrices.iter().find(|m| m.position == position)
    }

    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    pub fn save_html<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let mut file = File::create(path)?;
        file.write_all(generate_html(self).as_bytes())?;
        Ok(())
    }

    pub fn print_summary(&self) {
        println!("\n========================================");
        println!("  Open Raise Report - {}", self.metadata.username);
        println!("  Files: {} | Hands: {}", self.metadata.files, self.metadata.hands);
        println!("========================================");

        for matrix in &self.matrices {
            matrix.print_grid();
        }
        println!();
    }
}

/// Yellow (0%) to red (100%) heat colour.
fn heat_color(pct: f64) -> String {
    let t = (pct / 100.0).clamp(0.0, 1.0);
    let green = (255.0 - t * 255.0).round() as u8;
    let blue = (89.0 * (1.0 - t)).round() as u8;
    format!("rgb(255, {}, {})", green, blue)
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Generate HTML heatmaps
pub fn generate_html(report: &MatrixReport) -> String {
    let mut html = String::from(r#"<!DOCTYPE html>
<html>
<head>
    <title>Open Raise Report</title>
    <style>
        body { font-family: 'Segoe UI', Arial, sans-serif; background: #1a1a2e; color: #eee; padding: 20px; }
        .container { max-width: 1200px; margin: 0 auto; }
        h1 { text-align: center; color: #fff; }
        .metadata { text-align: center; color: #888; margin-bottom: 20px; }
        .position { margin-bottom: 40px; background: #252540; padding: 20px; border-radius: 10px; }
        .position h2 { margin: 0 0 15px 0; color: #fff; }
        .grid { display: grid; grid-template-columns: repeat(14, 1fr); gap: 2px; }
        .cell { aspect-ratio: 1; display: flex; flex-direction: column; align-items: center; justify-content: center; border-radius: 4px; font-size: 11px; font-weight: bold; color: #222; }
        .cell .hand { font-size: 13px; }
        .cell .pct { font-size: 10px; opacity: 0.9; }
        .label { background: none; color: #aaa; }
        .empty { background: #444; color: #888; }
    </style>
</head>
<body>
<div class="container">
    <h1>Pre-flop Open Raise Percentage by Starting Hand</h1>
    <div class="metadata">
"#);

    html.push_str(&format!(
        "{} | {} files | {} hands",
        escape_html(&report.metadata.username),
        report.metadata.files,
        report.metadata.hands
    ));
    html.push_str("</div>\n");

    for matrix in &report.matrices {
        html.push_str(&format!(
            r#"
    <div class="position">
        <h2>{} ({:.1}% of {} hands)</h2>
        <div class="grid">
            <div class="cell label"></div>
"#,
            matrix.position,
            matrix.overall(),
            matrix.hands
        ));

        for rank in RANK_CHARS {
            html.push_str(&format!("            <div class=\"cell label\">{}</div>\n", rank));
        }

        for (row, line) in matrix.cells.iter().enumerate() {
            html.push_str(&format!("            <div class=\"cell label\">{}</div>\n", RANK_CHARS[row]));
            for (col, &pct) in line.iter().enumerate() {
                let hand = HandType::from_grid(row, col);
                let (class, style) = if pct > 0.0 {
                    ("cell", format!("background: {};", heat_color(pct)))
                } else {
                    ("cell empty", String::new())
                };
                html.push_str(&format!(
                    r#"            <div class="{}" style="{}"><span class="hand">{}</span><span class="pct">{:.1}</span></div>
"#,
                    class, style, hand, pct
                ));
            }
        }

        html.push_str("        </div>\n    </div>\n");
    }

    html.push_str("</div>\n</body>\n</html>");
    html
}

//! Spreadsheet-flavoured HTML tables.
//!
//! The output mirrors what a spreadsheet HTML export produces: `sdval` and
//! `sdnum` cell attributes, explicit `font` tags, fixed colgroup widths and
//! alternating row shading. Downstream tooling re-imports these files, so
//! the shape of the markup matters as much as the data.

use html_escape::encode_text;

use cx_model::{CategoryStandings, TeamStandingEntry};

use crate::label::compact_category_label;

const SHADED_ROW_STYLE: &str = " style=\"background: #CCCCCC;\"";

/// Shade every second rank.
fn row_style(rank: usize) -> &'static str {
    if rank.is_multiple_of(2) {
        SHADED_ROW_STYLE
    } else {
        ""
    }
}

fn font(content: &str) -> String {
    format!("<font face=\"Liberation Serif\" size=3 color=\"#000000\">{content}</font>")
}

fn header_cell(label: &str, align: &str, bold: bool) -> String {
    let text = format!("<font face=\"Liberation Serif\" size=3>{label}</font>");
    let text = if bold { format!("<b>{text}</b>") } else { text };
    format!(
        "\t\t<td align=\"{align}\" style=\"background: #000000; color: white\" sdnum=\"2057;0;@\">{text}</td>\n"
    )
}

fn round_header_cell(round: u32) -> String {
    format!(
        "\t\t<td align=\"center\" style=\"background: #000000; color: white\" sdval=\"{round}\" sdnum=\"2057;0;@\"><font face=\"Liberation Serif\" size=3>{round}</font></td>\n"
    )
}

fn left_cell(content: &str, style: &str) -> String {
    format!("\t\t<td align=\"left\"{style}>{}</td>\n", font(content))
}

fn points_cell(points: Option<u32>, style: &str, bold: bool) -> String {
    match points {
        Some(points) => {
            let text = font(&points.to_string());
            let text = if bold { format!("<b>{text}</b>") } else { text };
            format!(
                "\t\t<td align=\"center\"{style} sdval=\"{points}\" sdnum=\"2057;\">{text}</td>\n"
            )
        }
        None => format!("\t\t<td align=\"center\"{style}>{}</td>\n", font("<br>")),
    }
}

/// Column width scaled to the longest team name, clamped to 200..=400 px.
fn team_column_width<'a>(teams: impl Iterator<Item = &'a str>) -> usize {
    let longest = teams.map(str::len).max().unwrap_or(0);
    if longest == 0 {
        200
    } else {
        (longest * 8).clamp(200, 400)
    }
}

/// Render one category standings table.
///
/// Round columns run 1 to the category's highest round. The bold
/// discard-adjusted column only appears once a discard is in play, from
/// three rounds on. The youth table carries an extra gender column.
pub fn render_category_table(standings: &CategoryStandings) -> String {
    let show_gender = standings.category.has_gender_column();
    let show_discard = standings.max_round >= 3;
    let team_width = team_column_width(standings.entries.iter().map(|e| e.team.as_str()));

    let mut html = String::new();
    html.push_str(&format!(
        "<div><h1 class=\"western\">{}</h1>\n",
        standings.category.title()
    ));
    html.push_str("<table cellspacing=\"0\" border=\"0\" style=\"width: 100%;\">\n");
    html.push_str("\t<colgroup width=\"67\"></colgroup>\n");
    html.push_str("\t<colgroup width=\"116\"></colgroup>\n");
    html.push_str("\t<colgroup width=\"90\"></colgroup>\n");
    html.push_str(&format!("\t<colgroup width=\"{team_width}\"></colgroup>\n"));
    if show_gender {
        html.push_str("\t<colgroup width=\"84\"></colgroup>\n");
        html.push_str("\t<colgroup width=\"62\"></colgroup>\n");
    } else {
        html.push_str("\t<colgroup width=\"76\"></colgroup>\n");
    }
    html.push_str(&format!(
        "\t<colgroup span=\"{}\" width=\"36\"></colgroup>\n",
        standings.max_round
    ));
    html.push_str("\t<colgroup width=\"55\"></colgroup>\n");
    if show_discard {
        html.push_str("\t<colgroup width=\"70\"></colgroup>\n");
    }

    html.push_str("\t<tr>\n");
    html.push_str(
        "\t\t<td height=\"20\" align=\"left\" style=\"background: #000000; color: white\" sdnum=\"2057;0;@\"><b><font face=\"Liberation Serif\" size=3>Position</font></b></td>\n",
    );
    html.push_str(&header_cell("Last Name", "left", true));
    html.push_str(&header_cell("First Name", "left", true));
    html.push_str(&header_cell("Team", "left", true));
    html.push_str(&header_cell("Category", "left", true));
    if show_gender {
        html.push_str(&header_cell("Gender", "left", true));
    }
    for round in 1..=standings.max_round {
        html.push_str(&round_header_cell(round));
    }
    html.push_str(&header_cell("Points", "center", false));
    if show_discard {
        html.push_str(&header_cell("Points excluding lowest", "center", true));
    }
    html.push_str("\t</tr>\n");

    for (index, entry) in standings.entries.iter().enumerate() {
        let rank = index + 1;
        let style = row_style(rank);
        let team_display = if entry.team.is_empty() {
            "<br>".to_string()
        } else {
            encode_text(&entry.team).into_owned()
        };
        let label_display = compact_category_label(&entry.category_label);

        html.push_str("\t<tr>\n");
        html.push_str(&format!(
            "\t\t<td height=\"20\" align=\"left\"{style} sdval=\"{rank}\" sdnum=\"2057;0;@\">{}</td>\n",
            font(&rank.to_string())
        ));
        html.push_str(&left_cell(&encode_text(&entry.last_name), style));
        html.push_str(&left_cell(&encode_text(&entry.first_name), style));
        html.push_str(&left_cell(&team_display, style));
        html.push_str(&left_cell(&encode_text(&label_display), style));
        if show_gender {
            html.push_str(&left_cell(&encode_text(&entry.gender), style));
        }
        for round in 1..=standings.max_round {
            html.push_str(&points_cell(
                entry.points_by_round.get(&round).copied(),
                style,
                false,
            ));
        }
        html.push_str(&points_cell(Some(entry.total_points), style, false));
        if show_discard {
            html.push_str(&points_cell(Some(entry.points_excl_lowest), style, true));
        }
        html.push_str("\t</tr>\n");
    }

    html.push_str("</table>\n");
    html
}

/// Render the cross-category team standings table.
///
/// Category cells holding zero points render a `<br>` placeholder instead
/// of the number; the bold total column always shows its value.
pub fn render_teams_table(teams: &[TeamStandingEntry]) -> String {
    let team_width = team_column_width(teams.iter().map(|t| t.team.as_str()));

    let mut html = String::new();
    html.push_str("<div><h2>Teams</h2></div>\n");
    html.push_str("<table cellspacing=\"0\" border=\"0\" style=\"width: 100%;\">\n");
    html.push_str("\t<colgroup width=\"67\"></colgroup>\n");
    html.push_str(&format!("\t<colgroup width=\"{team_width}\"></colgroup>\n"));
    html.push_str("\t<colgroup width=\"98\"></colgroup>\n");
    html.push_str("\t<colgroup width=\"86\"></colgroup>\n");
    html.push_str("\t<colgroup span=\"2\" width=\"77\"></colgroup>\n");
    html.push_str("\t<colgroup span=\"2\" width=\"45\"></colgroup>\n");
    html.push_str("\t<colgroup width=\"55\"></colgroup>\n");

    html.push_str("\t<tr>\n");
    html.push_str(
        "\t\t<td height=\"20\" align=\"left\" style=\"background: #000000; color: white\" sdnum=\"2057;0;@\"><b><font face=\"Liberation Serif\" size=3>Position</font></b></td>\n",
    );
    html.push_str(&header_cell("Team", "left", true));
    for label in ["Women", "Senior Open", "Under 12", "Under 16", "V40", "V50", "Points"] {
        html.push_str(&header_cell(label, "center", true));
    }
    html.push_str("\t</tr>\n");

    for (index, team) in teams.iter().enumerate() {
        let rank = index + 1;
        let style = row_style(rank);

        html.push_str("\t<tr>\n");
        html.push_str(&format!(
            "\t\t<td height=\"20\" align=\"left\"{style} sdnum=\"2057;0;@\">{}</td>\n",
            font(&rank.to_string())
        ));
        html.push_str(&left_cell(&encode_text(&team.team), style));
        for points in [
            team.womens,
            team.mens,
            team.u12,
            team.youth,
            team.v40,
            team.v50,
        ] {
            html.push_str(&team_points_cell(points, style));
        }
        html.push_str(&format!(
            "\t\t<td align=\"center\"{style} sdval=\"{total}\" sdnum=\"2057;\"><b>{text}</b></td>\n",
            total = team.total,
            text = font(&team.total.to_string())
        ));
        html.push_str("\t</tr>\n");
    }

    html.push_str("</table>\n");
    html
}

fn team_points_cell(points: u32, style: &str) -> String {
    let text = if points == 0 {
        font("<br>")
    } else {
        font(&points.to_string())
    };
    format!("\t\t<td align=\"center\"{style} sdval=\"{points}\" sdnum=\"2057;\">{text}</td>\n")
}
